use std::io::Write;

use exrate_core::ExchangeRate;
use serde::Serialize;

use crate::app::RateOutcome;
use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport<'a> {
    Ok {
        count: usize,
        rates: &'a [ExchangeRate],
    },
    Error {
        kind: &'static str,
        message: &'a str,
    },
}

impl<'a> From<&'a RateOutcome> for JsonReport<'a> {
    fn from(outcome: &'a RateOutcome) -> Self {
        match outcome {
            Ok(rates) => Self::Ok {
                count: rates.len(),
                rates,
            },
            Err(error) => Self::Error {
                kind: error.kind().as_str(),
                message: error.message(),
            },
        }
    }
}

pub fn render<W: Write>(
    writer: &mut W,
    outcome: &RateOutcome,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, outcome)?,
        OutputFormat::Json => write_json(writer, outcome, pretty)?,
    }
    writer.flush()?;
    Ok(())
}

pub fn render_unexpected(error: &CliError) {
    println!("Could not retrieve exchange rates: '{error}'.");
}

fn write_text<W: Write>(writer: &mut W, outcome: &RateOutcome) -> Result<(), CliError> {
    match outcome {
        Ok(rates) => {
            writeln!(writer, "Successfully retrieved {} exchange rates:", rates.len())?;
            for rate in rates {
                writeln!(writer, "{rate}")?;
            }
        }
        Err(error) => writeln!(writer, "{error}")?,
    }
    Ok(())
}

fn write_json<W: Write>(
    writer: &mut W,
    outcome: &RateOutcome,
    pretty: bool,
) -> Result<(), CliError> {
    let report = JsonReport::from(outcome);
    let payload = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    writeln!(writer, "{payload}")?;
    Ok(())
}
