//! Export/import flow
//!
//! Two nested choosers: the file format, then the data category. The
//! completion message names the chosen format and is shown after the
//! category was processed, whether or not the gateway query succeeded.

use std::io::{BufRead, Write};

use crate::display::{format_listing, ListingStyle};
use crate::error::BankResult;
use crate::gateway::{ExportQuery, Gateway};

use super::navigator::Navigator;
use super::state::{Direction, FileFormat, Menu, Transition};

impl<G, R, W> Navigator<'_, G, R, W>
where
    G: Gateway + ?Sized,
    R: BufRead,
    W: Write,
{
    pub(super) fn dispatch_format(
        &mut self,
        direction: Direction,
        command: &str,
    ) -> BankResult<Transition> {
        let format = match command {
            "1" => FileFormat::Json,
            "2" => FileFormat::Xml,
            "q" => return Ok(Transition::Exit),
            other => return self.unrecognized(other),
        };
        Ok(Transition::Enter(Menu::DataTypeChooser { direction, format }))
    }

    pub(super) fn dispatch_data_type(
        &mut self,
        direction: Direction,
        format: FileFormat,
        command: &str,
    ) -> BankResult<Transition> {
        match command {
            "1" => self.transfer_users(ListingStyle::NamesOnly)?,
            "2" => self.transfer_users(ListingStyle::WithAccounts)?,
            "3" => log::info!("{} of ATMs as {} is not available yet", direction.noun(), format),
            "q" => return Ok(Transition::Exit),
            other => return self.unrecognized(other),
        }

        log::info!("{} finished for category {}", direction.noun(), command);
        self.context.pending_message = Some(direction.completion_message(format));
        Ok(Transition::Stay)
    }

    fn transfer_users(&mut self, style: ListingStyle) -> BankResult<()> {
        let rows = self.gateway.export_query(ExportQuery::Users).unwrap_or_else(|e| {
            log::error!("export query failed: {}", e);
            Vec::new()
        });
        self.console.say(format_listing(&rows, style))
    }
}
