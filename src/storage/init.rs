//! Storage initialization
//!
//! Seeds a fresh installation with one demo customer, one payable service
//! and one ATM so the console can be tried out immediately.

use crate::crypto::hash_password;
use crate::error::BankError;
use crate::models::{NewAtm, NewService, User, UserRecord};

use super::Storage;

/// Login of the seeded demo customer
pub const DEMO_LOGIN: &str = "alice";

/// Password of the seeded demo customer
pub const DEMO_PASSWORD: &str = "secret123";

/// Seed demo data into an empty store
///
/// Returns `false` without touching anything when users already exist.
pub fn seed_demo_data(storage: &Storage) -> Result<bool, BankError> {
    if storage.users.count()? > 0 {
        return Ok(false);
    }

    let record = UserRecord {
        name: "Alice".into(),
        account: 1001,
        phone: 5550100,
        login: DEMO_LOGIN.into(),
        password: DEMO_PASSWORD.into(),
        balance: 500,
    };
    let user = User::new(&record, hash_password(&record.password)?);
    storage.users.commit(user)?;

    if storage.services.get(1)?.is_none() {
        storage.services.insert(NewService {
            name: "Mobile top-up".into(),
            price: 50,
        })?;
    }

    if storage.atms.get_all()?.is_empty() {
        storage.atms.insert(NewAtm {
            address: "Main Street 1".into(),
        })?;
    }

    Ok(true)
}
