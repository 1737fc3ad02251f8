//! Session state machine
//!
//! [`Navigator::run`] renders the current menu, reads one command and hands
//! it to [`Navigator::dispatch`], until every loop has been left or the input
//! stream fails. Role handlers live in sibling modules as further `impl`
//! blocks on the same type.

use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use crate::config::Settings;
use crate::console::Console;
use crate::display::{format_banner, format_menu, COMMAND_PROMPT};
use crate::error::BankResult;
use crate::gateway::Gateway;

use super::state::{Menu, MenuContext, Session, Transition};

/// Drives the menu loops for one operator
pub struct Navigator<'a, G: Gateway + ?Sized, R, W> {
    pub(super) gateway: &'a G,
    pub(super) console: Console<R, W>,
    pub(super) settings: Settings,
    pub(super) session: Session,
    pub(super) context: MenuContext,
}

impl<'a, G, R, W> Navigator<'a, G, R, W>
where
    G: Gateway + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(gateway: &'a G, console: Console<R, W>, settings: Settings, session: Session) -> Self {
        Self {
            gateway,
            console,
            settings,
            session,
            context: MenuContext::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn context(&self) -> &MenuContext {
        &self.context
    }

    /// Release the console, e.g. to inspect captured output
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run loops starting at `initial` until it is left
    ///
    /// # Errors
    ///
    /// Only console failures escape: a closed or broken input stream, or an
    /// unwritable output. Gateway failures are reported and the loop goes on.
    pub fn run(&mut self, initial: Menu) -> BankResult<()> {
        let base_depth = self.context.depth();
        self.enter(initial)?;

        while self.context.depth() > base_depth {
            let Some(menu) = self.context.current() else {
                break;
            };

            self.flush_message()?;
            self.console.write(format_menu(menu))?;
            let command = self.console.prompt(COMMAND_PROMPT.bold())?;

            match self.dispatch(menu, command.trim())? {
                Transition::Stay => {}
                Transition::Enter(next) => self.enter(next)?,
                Transition::Exit => self.leave(),
            }
        }

        self.flush_message()
    }

    /// Decide what a command means in the given menu
    pub fn dispatch(&mut self, menu: Menu, command: &str) -> BankResult<Transition> {
        log::debug!("[{}] {:?} <- {:?}", self.session.id(), menu, command);

        match menu {
            Menu::Unauthorized => self.dispatch_unauthorized(command),
            Menu::CustomerHome => self.dispatch_customer(command),
            Menu::ManagerHome => self.dispatch_manager(command),
            Menu::FormatChooser(direction) => self.dispatch_format(direction, command),
            Menu::DataTypeChooser { direction, format } => {
                self.dispatch_data_type(direction, format, command)
            }
        }
    }

    fn dispatch_unauthorized(&mut self, command: &str) -> BankResult<Transition> {
        match command {
            "1" => self.handle_login(),
            "q" => Ok(Transition::Exit),
            other => self.unrecognized(other),
        }
    }

    /// Collect credentials and, on success, open the customer loop
    fn handle_login(&mut self) -> BankResult<Transition> {
        self.console.say("Enter your login and password".green())?;
        let login = self.console.prompt("Login: ".yellow())?;
        let password = self.console.prompt_secret("Password: ")?;

        let ok = match self.gateway.authenticate(&login, &password) {
            Ok(ok) => ok,
            Err(e) => {
                log::error!("can't handle login: {}", e);
                false
            }
        };

        if !ok {
            log::warn!("failed login attempt for {:?}", login);
            self.console.say("")?;
            self.console.say("Incorrect login or password!".red())?;
            self.console.say("Please try again.\n".bold())?;
            return Ok(Transition::Stay);
        }

        self.session.sign_in(login);
        log::info!(
            "[{}] {} signed in",
            self.session.id(),
            self.session.identity().unwrap_or_default()
        );
        Ok(Transition::Enter(Menu::CustomerHome))
    }

    /// Notice for a command the current menu does not know
    pub(super) fn unrecognized(&mut self, command: &str) -> BankResult<Transition> {
        self.console.say(format!("Unknown command: {}", command))?;
        Ok(Transition::Stay)
    }

    fn enter(&mut self, menu: Menu) -> BankResult<()> {
        self.context.push(menu);
        self.console.say(format_banner(menu, &self.session))
    }

    fn leave(&mut self) {
        if let Some(menu) = self.context.pop() {
            if menu.ends_session() {
                log::info!("[{}] {} session closed", self.session.id(), self.session.role());
                self.session.sign_out();
            }
        }
    }

    fn flush_message(&mut self) -> BankResult<()> {
        if let Some(message) = self.context.take_message() {
            self.console.say(format!("\n{}\n", message).green())?;
        }
        Ok(())
    }
}
