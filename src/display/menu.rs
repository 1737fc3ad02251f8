//! Menu text for each console loop

use crossterm::style::Stylize;

use crate::session::{Direction, Menu, Session};

/// Printed before every command read
pub const COMMAND_PROMPT: &str = "Enter command: ";

fn items(menu: Menu) -> &'static [(&'static str, &'static str)] {
    match menu {
        Menu::Unauthorized => &[("1", "Log in"), ("q", "Quit")],
        Menu::CustomerHome => &[
            ("1", "List my accounts"),
            ("2", "Transfer money to another customer"),
            ("3", "Pay for a service"),
            ("4", "ATM list"),
            ("q", "Log out"),
        ],
        Menu::ManagerHome => &[
            ("1", "Add user"),
            ("2", "Add account to user"),
            ("3", "Add service"),
            ("4", "Add ATM"),
            ("5", "Export"),
            ("6", "Import"),
            ("q", "Quit"),
        ],
        Menu::FormatChooser(_) => &[("1", "JSON"), ("2", "XML"), ("q", "Back")],
        Menu::DataTypeChooser { .. } => &[
            ("1", "User list"),
            ("2", "Account list (with users)"),
            ("3", "ATM list"),
            ("q", "Back"),
        ],
    }
}

/// Heading shown once when a loop is entered
pub fn format_banner(menu: Menu, session: &Session) -> String {
    let text = match menu {
        Menu::Unauthorized => "\n  ===== Welcome! =====\n".to_string(),
        Menu::CustomerHome => format!("\n  Hello, {}\n", session.identity().unwrap_or("customer")),
        Menu::ManagerHome => "\n  ===== Welcome, manager! =====\n".to_string(),
        Menu::FormatChooser(_) => "\nChoose a file format:\n".to_string(),
        Menu::DataTypeChooser { direction, .. } => {
            format!("\nChoose the data to {}:\n", direction.noun())
        }
    };
    text.yellow().to_string()
}

/// The numbered list of commands for a loop
pub fn format_menu(menu: Menu) -> String {
    let heading = match menu {
        Menu::FormatChooser(_) => "Available formats:".to_string(),
        Menu::DataTypeChooser {
            direction: Direction::Export,
            ..
        } => "Data available for export:".to_string(),
        Menu::DataTypeChooser {
            direction: Direction::Import,
            ..
        } => "Data available for import:".to_string(),
        _ => "Available operations:".to_string(),
    };

    let mut output = format!("{}\n", heading.bold());
    for (key, label) in items(menu) {
        output.push_str(&format!("{}\n", format!("{}. {}", key, label).cyan()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FileFormat;

    #[test]
    fn test_every_menu_offers_quit() {
        let menus = [
            Menu::Unauthorized,
            Menu::CustomerHome,
            Menu::ManagerHome,
            Menu::FormatChooser(Direction::Export),
            Menu::DataTypeChooser {
                direction: Direction::Import,
                format: FileFormat::Xml,
            },
        ];
        for menu in menus {
            assert!(items(menu).iter().any(|(key, _)| *key == "q"), "{:?}", menu);
        }
    }

    #[test]
    fn test_manager_menu_lists_six_operations() {
        let text = format_menu(Menu::ManagerHome);
        for label in ["Add user", "Add ATM", "Export", "Import"] {
            assert!(text.contains(label));
        }
    }

    #[test]
    fn test_customer_banner_greets_identity() {
        let mut session = Session::guest();
        session.sign_in("alice");
        assert!(format_banner(Menu::CustomerHome, &session).contains("Hello, alice"));
    }
}
