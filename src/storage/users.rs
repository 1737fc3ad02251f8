//! User repository for JSON storage
//!
//! Manages loading and saving users (with their accounts) to users.json.
//! Users are keyed by login, which is unique case-insensitively.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BankError;
use crate::models::User;

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, User>>,
}

fn key(login: &str) -> String {
    login.trim().to_lowercase()
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), BankError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for user in file_data.users {
            data.insert(key(&user.login), user);
        }

        Ok(())
    }

    fn write(&self, users: &HashMap<String, User>) -> Result<(), BankError> {
        let mut users: Vec<User> = users.values().cloned().collect();
        users.sort_by(|a, b| a.login.cmp(&b.login));

        write_json_atomic(&self.path, &UserData { users })
    }

    /// Get a user by login (case-insensitive)
    pub fn get_by_login(&self, login: &str) -> Result<Option<User>, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&key(login)).cloned())
    }

    /// Get all users ordered by name
    pub fn get_all(&self) -> Result<Vec<User>, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<User> = data.values().cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then(a.login.cmp(&b.login)));
        Ok(users)
    }

    /// Insert or replace a user
    ///
    /// The file is written from a staged copy first; memory only changes once
    /// the write went through.
    pub fn commit(&self, user: User) -> Result<(), BankError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut staged = data.clone();
        staged.insert(key(&user.login), user);
        self.write(&staged)?;

        *data = staged;
        Ok(())
    }

    pub fn login_exists(&self, login: &str) -> Result<bool, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&key(login)))
    }

    /// Check whether any user already holds this account number
    pub fn account_number_exists(&self, number: u64) -> Result<bool, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .any(|u| u.accounts.iter().any(|a| a.number == number)))
    }

    pub fn count(&self) -> Result<usize, BankError> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
