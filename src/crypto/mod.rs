//! Credential handling for bankdesk
//!
//! Login passwords are stored as Argon2id PHC strings and verified in
//! constant time by the argon2 crate.

pub mod password;

pub use password::{hash_password, verify_password};
