//! Core data models for bankdesk
//!
//! These are the shapes exchanged between the console session and the
//! gateway: users and their accounts, payable services, and ATMs.

pub mod atm;
pub mod ids;
pub mod service;
pub mod user;

pub use atm::{Atm, NewAtm};
pub use ids::{SessionId, UserId};
pub use service::{NewService, Service};
pub use user::{AccountListing, BankAccount, NewAccount, User, UserRecord};
