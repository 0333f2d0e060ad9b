//! Tuple Binding Test Suite
//!
//! Exercises the public `tuplebind` facade end to end.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Facade decoding of flat and nested tuples
//! - **Tier 2**: Cursor sharing across several composites
//! - **Tier 3**: Options and error reporting
//! - **Tier 4**: Properties
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test tuple_binding
//! ```

// Test modules
mod test_utils;

// Tier 1: Facade decoding
mod tier1_facade;

// Tier 2: Cursor sharing
mod tier2_cursor;

// Tier 3: Options and errors
mod tier3_options_errors;

// Tier 4: Properties
mod tier4_properties;
