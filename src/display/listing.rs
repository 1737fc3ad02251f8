//! Account, user and ATM listings

use crate::models::{AccountListing, Atm};

/// How much of each listing row to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStyle {
    /// Holder name only
    NamesOnly,
    /// Holder name and account number
    WithAccounts,
    /// Account number and balance, for the holder's own view
    WithBalances,
}

/// Format listing rows, one per line
pub fn format_listing(rows: &[AccountListing], style: ListingStyle) -> String {
    if rows.is_empty() {
        return "No records found.".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.holder.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    let mut previous: Option<&str> = None;
    for row in rows {
        // Rows come grouped by holder; a name-only listing shows each once
        if style == ListingStyle::NamesOnly && previous == Some(row.holder.as_str()) {
            continue;
        }
        previous = Some(&row.holder);

        let line = match style {
            ListingStyle::NamesOnly => format!("User: {}", row.holder),
            ListingStyle::WithAccounts => format!(
                "User: {:<name_width$}  account: {}",
                row.holder,
                row.number,
                name_width = name_width
            ),
            ListingStyle::WithBalances => {
                format!("Account {:>10}  balance: {:>12}", row.number, row.balance)
            }
        };
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.pop();
    output
}

/// Format registered ATMs
pub fn format_atm_list(atms: &[Atm]) -> String {
    if atms.is_empty() {
        return "No ATMs registered.".to_string();
    }

    atms.iter()
        .map(|atm| format!("ATM {}", atm))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<AccountListing> {
        vec![
            AccountListing {
                holder: "Alice".into(),
                number: 1001,
                balance: 500,
            },
            AccountListing {
                holder: "Bob".into(),
                number: 2001,
                balance: -20,
            },
        ]
    }

    #[test]
    fn test_names_only_hides_accounts() {
        let text = format_listing(&rows(), ListingStyle::NamesOnly);
        assert_eq!(text, "User: Alice\nUser: Bob");
    }

    #[test]
    fn test_names_only_lists_each_holder_once() {
        let mut rows = rows();
        rows.insert(
            1,
            AccountListing {
                holder: "Alice".into(),
                number: 1002,
                balance: 0,
            },
        );

        let text = format_listing(&rows, ListingStyle::NamesOnly);
        assert_eq!(text, "User: Alice\nUser: Bob");

        let text = format_listing(&rows, ListingStyle::WithAccounts);
        assert_eq!(text.matches("User: Alice").count(), 2);
    }

    #[test]
    fn test_with_accounts() {
        let text = format_listing(&rows(), ListingStyle::WithAccounts);
        assert!(text.contains("User: Alice  account: 1001"));
        assert!(text.contains("User: Bob    account: 2001"));
        assert!(!text.contains("500"));
    }

    #[test]
    fn test_with_balances() {
        let text = format_listing(&rows(), ListingStyle::WithBalances);
        assert!(text.contains("1001"));
        assert!(text.contains("500"));
        assert!(text.contains("-20"));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_listing(&[], ListingStyle::NamesOnly), "No records found.");
        assert_eq!(format_atm_list(&[]), "No ATMs registered.");
    }

    #[test]
    fn test_atm_list() {
        let atms = vec![Atm {
            id: 1,
            address: "Main Street 1".into(),
        }];
        assert_eq!(format_atm_list(&atms), "ATM #1 Main Street 1");
    }
}
