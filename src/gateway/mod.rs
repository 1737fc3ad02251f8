//! Back-end gateway boundary
//!
//! The console session never touches storage directly. Everything it needs
//! (authentication, account lookup, CRUD for users/services/ATMs and the bulk
//! export query) goes through the [`Gateway`] trait. [`LocalGateway`] is the
//! JSON-file implementation shipped with the binary; tests substitute their
//! own.

pub mod local;

pub use local::LocalGateway;

use crate::error::BankResult;
use crate::models::{AccountListing, Atm, NewAccount, NewAtm, NewService, Service, UserRecord};

/// Bulk queries available to the export/import flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportQuery {
    /// Every user with each of their account numbers
    Users,
}

/// Operations the console consumes from the back office
pub trait Gateway {
    /// Check a login/password pair. Unknown logins are `Ok(false)`.
    fn authenticate(&self, login: &str, password: &str) -> BankResult<bool>;

    fn list_accounts(&self, login: &str) -> BankResult<Vec<AccountListing>>;

    /// Pay a service from the payer's account
    fn pay_service(&self, login: &str, service_id: u64) -> BankResult<()>;

    fn create_user(&self, record: UserRecord) -> BankResult<()>;

    /// Attach an additional account to an existing user
    fn attach_account(&self, account: NewAccount) -> BankResult<()>;

    fn create_service(&self, service: NewService) -> BankResult<Service>;

    fn create_atm(&self, atm: NewAtm) -> BankResult<Atm>;

    fn export_query(&self, query: ExportQuery) -> BankResult<Vec<AccountListing>>;

    fn list_atms(&self) -> BankResult<Vec<Atm>>;
}
