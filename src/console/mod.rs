//! Interactive console I/O
//!
//! [`Console`] is the only place that touches the input stream. It hands out
//! one whitespace-delimited token at a time and reports a closed or broken
//! stream as a fatal [`BankError`](crate::error::BankError) kind instead of
//! exiting the process itself.

mod prompt;

pub use prompt::{Console, SecretSource};
