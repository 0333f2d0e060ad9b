//! Binding options.

use serde::{Deserialize, Serialize};

pub use tuplebind_core::KeyMatching;

/// What to do with names left over after every leaf slot has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExtraNames {
    /// Leave trailing names unused (default).
    #[default]
    Ignore,
    /// Fail the decode with `BindError::ExtraNames`.
    Reject,
}

/// Options for a [`Binder`](crate::Binder).
///
/// Use the builder pattern to configure options:
///
/// ```
/// use tuplebind_binder::{BindOptions, ExtraNames, KeyMatching};
///
/// let opts = BindOptions::new()
///     .key_matching(KeyMatching::Exact)
///     .extra_names(ExtraNames::Reject);
/// assert_eq!(opts.key_matching, KeyMatching::Exact);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    /// How field names are compared against object keys.
    pub key_matching: KeyMatching,
    /// Policy for names beyond the descriptor's leaf count.
    pub extra_names: ExtraNames,
}

impl BindOptions {
    /// Options with default settings: case-insensitive keys, extra names ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how field names are compared against object keys.
    pub fn key_matching(mut self, matching: KeyMatching) -> Self {
        self.key_matching = matching;
        self
    }

    /// Set the policy for names beyond the descriptor's leaf count.
    pub fn extra_names(mut self, policy: ExtraNames) -> Self {
        self.extra_names = policy;
        self
    }
}
