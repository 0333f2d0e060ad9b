//! Composite type descriptors
//!
//! A descriptor lists the slot types of one composite level. Levels hold at
//! most [`MAX_LEVEL_ARITY`] slots. A level with exactly that many slots is
//! saturated: its first `MAX_LEVEL_ARITY - 1` slots are leaves and its last
//! slot is a continuation, a nested descriptor carrying the remaining slots.
//!
//! ```text
//! 9 leaves:  [l0 l1 l2 l3 l4 l5 l6 | rest]
//!                                    rest = [l7 l8]
//! ```
//!
//! Descriptors are validated when built, so the resolver never sees a
//! malformed level.

use crate::error::{BindError, Result};
use crate::slot::SlotType;

/// Maximum slot count of one descriptor level, continuation included.
pub const MAX_LEVEL_ARITY: usize = 8;

/// Leaf slots a level holds before its continuation.
const LEAVES_PER_LEVEL: usize = MAX_LEVEL_ARITY - 1;

/// One raw slot of a level, as given to [`CompositeDescriptor::from_level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorSlot {
    /// A leaf slot
    Leaf(SlotType),
    /// A nested descriptor carrying the remaining slots
    Continuation(CompositeDescriptor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    /// 1..=LEAVES_PER_LEVEL leaves, no continuation
    Flat(Vec<SlotType>),
    /// Exactly LEAVES_PER_LEVEL leaves followed by a continuation
    Saturated {
        leaves: Vec<SlotType>,
        rest: Box<CompositeDescriptor>,
    },
}

/// Validated slot layout of a composite value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDescriptor {
    shape: Shape,
}

impl CompositeDescriptor {
    /// A non-saturated level of leaf slots.
    pub fn flat(leaves: Vec<SlotType>) -> Result<Self> {
        match leaves.len() {
            0 => Err(BindError::EmptyDescriptor),
            n if n <= LEAVES_PER_LEVEL => Ok(CompositeDescriptor {
                shape: Shape::Flat(leaves),
            }),
            MAX_LEVEL_ARITY => Err(BindError::MissingContinuation {
                position: LEAVES_PER_LEVEL,
            }),
            n => Err(BindError::DescriptorTooLarge {
                arity: n,
                max: MAX_LEVEL_ARITY,
            }),
        }
    }

    /// A saturated level: `MAX_LEVEL_ARITY - 1` leaves then a continuation.
    pub fn saturated(leaves: Vec<SlotType>, rest: CompositeDescriptor) -> Result<Self> {
        match leaves.len() {
            LEAVES_PER_LEVEL => Ok(CompositeDescriptor {
                shape: Shape::Saturated {
                    leaves,
                    rest: Box::new(rest),
                },
            }),
            n if n < LEAVES_PER_LEVEL => Err(BindError::MisplacedContinuation { position: n }),
            n => Err(BindError::DescriptorTooLarge {
                arity: n + 1,
                max: MAX_LEVEL_ARITY,
            }),
        }
    }

    /// Validate one raw level.
    ///
    /// Fails fast on levels wider than [`MAX_LEVEL_ARITY`], on empty levels,
    /// on continuations anywhere but the last slot of a saturated level, and
    /// on saturated levels ending with a leaf.
    pub fn from_level(slots: Vec<DescriptorSlot>) -> Result<Self> {
        let arity = slots.len();
        if arity == 0 {
            return Err(BindError::EmptyDescriptor);
        }
        if arity > MAX_LEVEL_ARITY {
            return Err(BindError::DescriptorTooLarge {
                arity,
                max: MAX_LEVEL_ARITY,
            });
        }

        let mut leaves = Vec::with_capacity(arity.min(LEAVES_PER_LEVEL));
        let mut rest = None;
        for (position, slot) in slots.into_iter().enumerate() {
            match slot {
                DescriptorSlot::Leaf(_) if arity == MAX_LEVEL_ARITY && position == LEAVES_PER_LEVEL => {
                    return Err(BindError::MissingContinuation { position });
                }
                DescriptorSlot::Leaf(slot_type) => leaves.push(slot_type),
                DescriptorSlot::Continuation(inner)
                    if arity == MAX_LEVEL_ARITY && position == LEAVES_PER_LEVEL =>
                {
                    rest = Some(inner);
                }
                DescriptorSlot::Continuation(_) => {
                    return Err(BindError::MisplacedContinuation { position });
                }
            }
        }

        match rest {
            Some(rest) => Self::saturated(leaves, rest),
            None => Self::flat(leaves),
        }
    }

    /// Build from a flat list of leaves of any positive length, chunking
    /// into continuation levels as needed.
    pub fn from_leaves(mut leaves: Vec<SlotType>) -> Result<Self> {
        if leaves.len() <= LEAVES_PER_LEVEL {
            return Self::flat(leaves);
        }
        let tail = leaves.split_off(LEAVES_PER_LEVEL);
        let rest = Self::from_leaves(tail)?;
        Self::saturated(leaves, rest)
    }

    /// Leaf slots of this level.
    pub fn leaves(&self) -> &[SlotType] {
        match &self.shape {
            Shape::Flat(leaves) => leaves.as_slice(),
            Shape::Saturated { leaves, .. } => leaves.as_slice(),
        }
    }

    /// Continuation of a saturated level.
    pub fn continuation(&self) -> Option<&CompositeDescriptor> {
        match &self.shape {
            Shape::Flat(_) => None,
            Shape::Saturated { rest, .. } => Some(rest.as_ref()),
        }
    }

    /// Whether this level ends with a continuation.
    pub fn is_saturated(&self) -> bool {
        matches!(self.shape, Shape::Saturated { .. })
    }

    /// Slot count of this level, continuation included.
    pub fn arity(&self) -> usize {
        self.leaves().len() + usize::from(self.is_saturated())
    }

    /// Leaf slots across all levels. This is the number of field names a
    /// decode consumes.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len() + self.continuation().map_or(0, CompositeDescriptor::leaf_count)
    }

    /// Number of levels, this one included.
    pub fn depth(&self) -> usize {
        1 + self.continuation().map_or(0, CompositeDescriptor::depth)
    }

    /// All leaf types in flattened order.
    pub fn leaf_types(&self) -> Vec<&SlotType> {
        let mut out = Vec::with_capacity(self.leaf_count());
        let mut level = Some(self);
        while let Some(current) = level {
            out.extend(current.leaves());
            level = current.continuation();
        }
        out
    }
}
