//! Session and menu navigation
//!
//! The navigation core of the console: a [`Session`] for the operator, a
//! [`Menu`] enum naming every loop, and the [`Navigator`] that renders a
//! menu, reads a command, and dispatches on `(menu, command)`.
//!
//! ```text
//! Unauthorized --1 (login ok)--> CustomerHome --q--> Unauthorized --q--> done
//! ManagerHome --5/6--> FormatChooser --1/2--> DataTypeChooser
//!                      <-----q-----           <------q-------
//! ```

mod customer;
mod manager;
mod navigator;
pub mod state;
mod transfer;

pub use navigator::Navigator;
pub use state::{Direction, FileFormat, Menu, MenuContext, Role, Session, Transition};
