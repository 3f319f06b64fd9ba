//! Crate-level acceptance and property tests.

mod probe;
