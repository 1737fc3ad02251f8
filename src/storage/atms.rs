//! ATM repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BankError;
use crate::models::{Atm, NewAtm};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AtmData {
    atms: Vec<Atm>,
}

/// Repository for ATM persistence
pub struct AtmRepository {
    path: PathBuf,
    data: RwLock<Vec<Atm>>,
}

impl AtmRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), BankError> {
        let file_data: AtmData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.atms;
        Ok(())
    }

    /// Get all ATMs in registration order
    pub fn get_all(&self) -> Result<Vec<Atm>, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Register an ATM under the next free ID and write the file
    pub fn insert(&self, new: NewAtm) -> Result<Atm, BankError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = data.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let atm = Atm {
            id,
            address: new.address,
        };
        let mut staged = AtmData { atms: data.clone() };
        staged.atms.push(atm.clone());
        write_json_atomic(&self.path, &staged)?;

        *data = staged.atms;
        Ok(atm)
    }
}
