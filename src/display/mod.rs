//! Display formatting for terminal output
//!
//! Formatters return `String`s; the session decides where to write them.

pub mod listing;
pub mod menu;

pub use listing::{format_atm_list, format_listing, ListingStyle};
pub use menu::{format_banner, format_menu, COMMAND_PROMPT};
