//! Ledger summary command

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::LedgerResult;
use crate::services::SummaryService;
use crate::storage::Storage;

pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let summary = SummaryService::new(storage, settings).summary()?;
    print!(
        "{}",
        format_summary(&summary, &settings.pool_envelope, &settings.currency_symbol)
    );
    Ok(())
}
