//! Service repository for JSON storage
//!
//! Services get sequential numeric IDs starting at 1.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BankError;
use crate::models::{NewService, Service};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ServiceData {
    services: Vec<Service>,
}

/// Repository for service persistence
pub struct ServiceRepository {
    path: PathBuf,
    data: RwLock<Vec<Service>>,
}

impl ServiceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), BankError> {
        let file_data: ServiceData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.services;
        Ok(())
    }

    pub fn get(&self, id: u64) -> Result<Option<Service>, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|s| s.id == id).cloned())
    }

    /// Store a new service under the next free ID and write the file
    ///
    /// Memory is left untouched when the write fails.
    pub fn insert(&self, new: NewService) -> Result<Service, BankError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = data.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let service = Service {
            id,
            name: new.name,
            price: new.price,
        };
        let mut staged = ServiceData { services: data.clone() };
        staged.services.push(service.clone());
        write_json_atomic(&self.path, &staged)?;

        *data = staged.services;
        Ok(service)
    }

    pub fn name_exists(&self, name: &str) -> Result<bool, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data.iter().any(|s| s.name.to_lowercase() == name_lower))
    }
}
