//! Payable service model
//!
//! A service is something a customer can pay for from their account
//! (utilities, phone top-up, etc.). Prices are whole currency units.

use serde::{Deserialize, Serialize};

/// A service customers can pay for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub price: i64,
}

/// Input collected from the console to create a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub price: i64,
}

impl NewService {
    /// Validate the service before it is handed to the gateway
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name cannot be empty".into());
        }
        if self.price < 0 {
            return Err(format!("Service price cannot be negative: {}", self.price));
        }
        Ok(())
    }
}
