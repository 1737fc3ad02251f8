//! Session and menu state
//!
//! A [`Session`] records who is at the console; a [`MenuContext`] records
//! which menu loops are open. Nested loops are a stack of [`Menu`] values:
//! entering a sub-menu pushes, `q` pops back to the parent.

use std::fmt;

use crate::models::SessionId;

/// Who is operating the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Guest,
    Customer,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Guest => write!(f, "guest"),
            Role::Customer => write!(f, "customer"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

/// The operator's session
#[derive(Debug, Clone, Default)]
pub struct Session {
    id: SessionId,
    role: Role,
    identity: Option<String>,
}

impl Session {
    /// A fresh, unauthenticated session
    pub fn guest() -> Self {
        Self::default()
    }

    /// A manager session; managers are selected at startup, not by login
    pub fn manager() -> Self {
        Self {
            id: SessionId::new(),
            role: Role::Manager,
            identity: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Login of the authenticated customer, if any
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Become an authenticated customer
    pub fn sign_in(&mut self, login: impl Into<String>) {
        self.id = SessionId::new();
        self.role = Role::Customer;
        self.identity = Some(login.into());
    }

    /// Drop back to an unauthenticated guest
    pub fn sign_out(&mut self) {
        *self = Self::guest();
    }
}

/// Which way the data-transfer flow moves data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Export,
    Import,
}

/// File formats offered by the data-transfer flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Xml,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Json => write!(f, "JSON"),
            FileFormat::Xml => write!(f, "XML"),
        }
    }
}

impl Direction {
    /// Message shown once a data category was processed
    pub fn completion_message(self, format: FileFormat) -> String {
        match self {
            Direction::Export => format!("Done! Data exported as {}", format),
            Direction::Import => format!("Done! Data imported from {}", format),
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Direction::Export => "export",
            Direction::Import => "import",
        }
    }
}

/// One interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Unauthorized,
    CustomerHome,
    ManagerHome,
    /// Export or import: pick a file format
    FormatChooser(Direction),
    /// Export or import: pick the data to move
    DataTypeChooser {
        direction: Direction,
        format: FileFormat,
    },
}

impl Menu {
    /// Leaving this menu ends the authenticated session
    pub fn ends_session(self) -> bool {
        matches!(self, Menu::CustomerHome | Menu::ManagerHome)
    }
}

/// What the dispatcher wants the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Re-render the current menu
    Stay,
    /// Open a nested loop on top of the current one
    Enter(Menu),
    /// Close the current loop and return to its parent
    Exit,
}

/// Open loops plus a message waiting to be shown before the next menu
#[derive(Debug, Clone, Default)]
pub struct MenuContext {
    stack: Vec<Menu>,
    pub pending_message: Option<String>,
}

impl MenuContext {
    pub fn current(&self) -> Option<Menu> {
        self.stack.last().copied()
    }

    pub fn push(&mut self, menu: Menu) {
        self.stack.push(menu);
    }

    pub fn pop(&mut self) -> Option<Menu> {
        self.stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn take_message(&mut self) -> Option<String> {
        self.pending_message.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::guest();
        let guest_id = session.id();
        assert_eq!(session.role(), Role::Guest);

        session.sign_in("alice");
        assert_eq!(session.role(), Role::Customer);
        assert_eq!(session.identity(), Some("alice"));
        assert_ne!(session.id(), guest_id);

        session.sign_out();
        assert_eq!(session.role(), Role::Guest);
        assert_eq!(session.identity(), None);
    }

    #[test]
    fn test_completion_message_names_format() {
        assert_eq!(
            Direction::Export.completion_message(FileFormat::Json),
            "Done! Data exported as JSON"
        );
        assert_eq!(
            Direction::Import.completion_message(FileFormat::Xml),
            "Done! Data imported from XML"
        );
    }

    #[test]
    fn test_context_stack() {
        let mut ctx = MenuContext::default();
        ctx.push(Menu::ManagerHome);
        ctx.push(Menu::FormatChooser(Direction::Export));

        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.pop(), Some(Menu::FormatChooser(Direction::Export)));
        assert_eq!(ctx.current(), Some(Menu::ManagerHome));
    }

    #[test]
    fn test_only_home_menus_end_session() {
        assert!(Menu::CustomerHome.ends_session());
        assert!(Menu::ManagerHome.ends_session());
        assert!(!Menu::Unauthorized.ends_session());
        assert!(!Menu::FormatChooser(Direction::Import).ends_session());
    }
}
