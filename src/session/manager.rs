//! Manager menu handlers
//!
//! Each create command collects its fields one token at a time, in the order
//! the prompts are shown, and only then parses the numeric ones. A malformed
//! number is reported and the gateway is not called.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::style::Stylize;

use crate::error::{BankError, BankResult};
use crate::gateway::Gateway;
use crate::models::{NewAccount, NewAtm, NewService, UserRecord};

use super::navigator::Navigator;
use super::state::{Direction, Menu, Transition};

/// Parse a numeric console field
fn parse_field<T: FromStr>(field: &str, raw: &str) -> BankResult<T> {
    raw.parse().map_err(|_| {
        BankError::Validation(format!("{} must be a number, got '{}'", field, raw))
    })
}

impl<G, R, W> Navigator<'_, G, R, W>
where
    G: Gateway + ?Sized,
    R: BufRead,
    W: Write,
{
    pub(super) fn dispatch_manager(&mut self, command: &str) -> BankResult<Transition> {
        match command {
            "1" => {
                let created = self.create_user()?;
                // A created user also closes the manager loop unless configured otherwise
                if created && self.settings.exit_on_user_created {
                    return Ok(Transition::Exit);
                }
            }
            "2" => self.attach_account()?,
            "3" => self.create_service()?,
            "4" => self.create_atm()?,
            "5" => return Ok(Transition::Enter(Menu::FormatChooser(Direction::Export))),
            "6" => return Ok(Transition::Enter(Menu::FormatChooser(Direction::Import))),
            "q" => return Ok(Transition::Exit),
            other => return self.unrecognized(other),
        }
        Ok(Transition::Stay)
    }

    /// Ask for one field, with an explanatory line above the prompt
    fn ask(&mut self, intro: &str, label: &str) -> BankResult<String> {
        self.console.say(format!("\n{}", intro).green())?;
        self.console.prompt(format!("{}: ", label).yellow())
    }

    /// Report a failed manager operation and keep the loop running
    fn report_failure(&mut self, action: &str, err: &BankError) -> BankResult<()> {
        if err.is_validation() {
            log::warn!("{}: {}", action, err);
        } else {
            log::error!("{}: {}", action, err);
        }
        self.console.say(format!("Could not {}: {}", action, err).red())
    }

    /// Returns whether the gateway created the user
    fn create_user(&mut self) -> BankResult<bool> {
        let name = self.ask("Enter the new user's name", "Name")?;
        let account = self.ask("Enter the new user's account number", "Account")?;
        let balance = self.ask("Enter the new user's balance", "Balance")?;
        let phone = self.ask("Enter the new user's phone number", "Phone")?;
        let login = self.ask("Enter the new user's login", "Login")?;
        let password = self.ask("Enter the new user's password", "Password")?;

        let record = parse_field::<u64>("Account", &account).and_then(|account| {
            Ok(UserRecord {
                name,
                account,
                phone: parse_field("Phone", &phone)?,
                login,
                password,
                balance: parse_field("Balance", &balance)?,
            })
        });

        let result = record.and_then(|record| {
            let login = record.login.clone();
            self.gateway.create_user(record).map(|()| login)
        });

        match result {
            Ok(login) => {
                self.console.say(format!("User {} created.", login).green())?;
                Ok(true)
            }
            Err(e) => {
                self.report_failure("create user", &e)?;
                Ok(false)
            }
        }
    }

    fn attach_account(&mut self) -> BankResult<()> {
        let login = self.ask("Enter the login of the account holder", "Login")?;
        let number = self.ask("Enter the new account number", "Account")?;
        let balance = self.ask("Enter the opening balance", "Balance")?;

        let result = parse_field::<u64>("Account", &number).and_then(|number| {
            let balance = parse_field("Balance", &balance)?;
            self.gateway.attach_account(NewAccount {
                login,
                number,
                balance,
            })?;
            Ok(number)
        });

        match result {
            Ok(number) => self
                .console
                .say(format!("Account {} added.", number).green()),
            Err(e) => self.report_failure("add account", &e),
        }
    }

    fn create_service(&mut self) -> BankResult<()> {
        let name = self.ask("Enter the service name", "Name")?;
        let price = self.ask("Enter the service price", "Price")?;

        let result = parse_field::<i64>("Price", &price)
            .and_then(|price| self.gateway.create_service(NewService { name, price }));

        match result {
            Ok(service) => self.console.say(
                format!("Service {} ({}) created.", service.id, service.name).green(),
            ),
            Err(e) => self.report_failure("add service", &e),
        }
    }

    fn create_atm(&mut self) -> BankResult<()> {
        let address = self.ask("Enter the ATM address", "Address")?;

        match self.gateway.create_atm(NewAtm { address }) {
            Ok(atm) => self.console.say(format!("ATM {} registered.", atm).green()),
            Err(e) => self.report_failure("add ATM", &e),
        }
    }
}
