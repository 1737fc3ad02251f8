//! Customer menu handlers

use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use crate::display::{format_atm_list, format_listing, ListingStyle};
use crate::error::BankResult;
use crate::gateway::Gateway;

use super::navigator::Navigator;
use super::state::Transition;

impl<G, R, W> Navigator<'_, G, R, W>
where
    G: Gateway + ?Sized,
    R: BufRead,
    W: Write,
{
    pub(super) fn dispatch_customer(&mut self, command: &str) -> BankResult<Transition> {
        match command {
            "1" => self.show_accounts()?,
            "2" => self.show_transfer_options()?,
            "3" => self.pay_default_service()?,
            "4" => self.show_atms()?,
            "q" => return Ok(Transition::Exit),
            other => return self.unrecognized(other),
        }
        Ok(Transition::Stay)
    }

    fn customer_login(&self) -> String {
        self.session.identity().unwrap_or_default().to_string()
    }

    fn show_accounts(&mut self) -> BankResult<()> {
        let login = self.customer_login();
        match self.gateway.list_accounts(&login) {
            Ok(rows) => self
                .console
                .say(format_listing(&rows, ListingStyle::WithBalances)),
            Err(e) => {
                log::error!("can't list accounts of {}: {}", login, e);
                self.console.say("Could not load your accounts.".red())
            }
        }
    }

    // Transfers only present the choice for now
    fn show_transfer_options(&mut self) -> BankResult<()> {
        self.console.say("Transfer money:")?;
        self.console.say("1. By account number")?;
        self.console.say("2. By phone number")
    }

    fn pay_default_service(&mut self) -> BankResult<()> {
        let login = self.customer_login();
        let service_id = self.settings.default_service_id;

        self.console.say("Pay for a service")?;
        match self.gateway.pay_service(&login, service_id) {
            Ok(()) => self
                .console
                .say(format!("Service {} paid.", service_id).green()),
            Err(e) => {
                log::error!("{} can't pay service {}: {}", login, service_id, e);
                self.console.say(format!("Payment failed: {}", e).red())
            }
        }
    }

    fn show_atms(&mut self) -> BankResult<()> {
        self.console.say("ATM list")?;
        match self.gateway.list_atms() {
            Ok(atms) => self.console.say(format_atm_list(&atms)),
            Err(e) => {
                log::error!("can't list ATMs: {}", e);
                self.console.say("Could not load the ATM list.".red())
            }
        }
    }
}
