//! ATM model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cash machine registered by a manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atm {
    pub id: u64,
    pub address: String,
}

/// Input collected from the console to register an ATM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAtm {
    pub address: String,
}

impl fmt::Display for Atm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.address)
    }
}
