//! bankdesk - interactive console for a small banking back office
//!
//! A customer logs in to list accounts, pay a service, and look up ATMs; a
//! manager creates users, accounts, services and ATMs and runs the bulk
//! export/import flow.
//!
//! # Architecture
//!
//! - `session`: the menu navigation state machine (the heart of the crate)
//! - `console`: token/secret reader and output sink
//! - `display`: menu and listing text
//! - `gateway`: the back-office boundary trait and its JSON-file implementation
//! - `storage`: JSON repositories with atomic writes
//! - `audit`: append-only JSONL audit log
//! - `crypto`: password hashing
//! - `config`: paths and settings
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use bankdesk::console::{Console, SecretSource};
//! use bankdesk::session::{Menu, Navigator, Session};
//!
//! let console = Console::new(stdin.lock(), stdout.lock(), SecretSource::Terminal);
//! let mut navigator = Navigator::new(&gateway, console, settings, Session::guest());
//! navigator.run(Menu::Unauthorized)?;
//! ```

pub mod audit;
pub mod config;
pub mod console;
pub mod crypto;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{BankError, BankResult};
