//! User and account models
//!
//! `UserRecord` is what the manager types into the console; `User` is what
//! the local gateway keeps on disk. The console never sees a `User`, only
//! the `AccountListing` rows returned by queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A new user as collected from the console, before it reaches the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub account: u64,
    pub phone: u64,
    pub login: String,
    pub password: String,
    pub balance: i64,
}

impl UserRecord {
    /// Validate the textual fields; numeric fields are checked while parsing
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("User name cannot be empty".into());
        }
        if self.login.trim().is_empty() {
            return Err("Login cannot be empty".into());
        }
        if self.password.is_empty() {
            return Err("Password cannot be empty".into());
        }
        Ok(())
    }
}

/// A bank account owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub number: u64,
    pub balance: i64,
}

/// Input collected from the console to attach an account to an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub login: String,
    pub number: u64,
    pub balance: i64,
}

/// A stored user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone: u64,
    pub login: String,

    /// Argon2 PHC string, never the plain password
    pub password_hash: String,

    #[serde(default)]
    pub accounts: Vec<BankAccount>,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user holding a single opening account
    pub fn new(record: &UserRecord, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            name: record.name.clone(),
            phone: record.phone,
            login: record.login.clone(),
            password_hash,
            accounts: vec![BankAccount {
                number: record.account,
                balance: record.balance,
            }],
            created_at: Utc::now(),
        }
    }

    /// One listing row per account
    pub fn listings(&self) -> Vec<AccountListing> {
        self.accounts
            .iter()
            .map(|account| AccountListing {
                holder: self.name.clone(),
                number: account.number,
                balance: account.balance,
            })
            .collect()
    }
}

/// One row of an account or export listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountListing {
    pub holder: String,
    pub number: u64,
    pub balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            name: "Alice".into(),
            account: 1001,
            phone: 5550100,
            login: "alice".into(),
            password: "secret123".into(),
            balance: 250,
        }
    }

    #[test]
    fn test_new_user_has_opening_account() {
        let user = User::new(&record(), "hash".into());
        assert_eq!(user.login, "alice");
        assert_eq!(
            user.accounts,
            vec![BankAccount {
                number: 1001,
                balance: 250
            }]
        );
    }

    #[test]
    fn test_listings_carry_holder_name() {
        let mut user = User::new(&record(), "hash".into());
        user.accounts.push(BankAccount {
            number: 1002,
            balance: 0,
        });

        let rows = user.listings();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.holder == "Alice"));
        assert_eq!(rows[1].number, 1002);
    }

    #[test]
    fn test_validate_rejects_blank_login() {
        let mut rec = record();
        rec.login = "  ".into();
        assert!(rec.validate().is_err());
        assert!(record().validate().is_ok());
    }
}
