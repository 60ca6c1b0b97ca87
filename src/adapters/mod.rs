//! Adapter implementations of the port traits.
//!
//! Only live adapters ship with the binary; deterministic test doubles live
//! in the crate's `test_support` module.

pub mod live;
