//! Quote of the day command implementation.

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::RitmoError;
use crate::features::quotes::quote_of_the_day;
use crate::output::to_json;

/// Execute the quote command.
///
/// # Errors
///
/// Returns `RitmoError::Parse` if JSON serialization fails.
pub fn quote(today: NaiveDate, format: OutputFormat) -> Result<String, RitmoError> {
    let quote = quote_of_the_day(today);

    match format {
        OutputFormat::Json => to_json(quote),
        OutputFormat::Pretty => Ok(format!(
            "“{}”\n    {}",
            quote.text.italic(),
            format!("- {}", quote.author).dimmed()
        )),
    }
}
