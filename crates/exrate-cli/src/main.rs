mod app;
mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::app::{App, RateOutcome};
use crate::cli::Cli;
use crate::error::{CliError, RATE_ERROR_EXIT_CODE};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_format);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match run(&cli, &mut writer).await {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            output::render_unexpected(&error);
            tracing::error!(error = ?error, "unhandled failure while retrieving exchange rates");
            ExitCode::from(error.exit_code())
        }
    }
}

/// Looks up the rates, writes the report and returns the process exit code.
async fn run<W: Write>(cli: &Cli, writer: &mut W) -> Result<u8, CliError> {
    let outcome = match App::from_cli(cli) {
        Ok(app) => app.run().await?,
        Err(error) => Err(error),
    };
    output::render(writer, &outcome, cli.format, cli.pretty)?;
    Ok(exit_code(&outcome))
}

const fn exit_code(outcome: &RateOutcome) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => RATE_ERROR_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use exrate_core::{Currency, EnvelopeError, ExchangeRate, RateError};
    use serde_json::Value;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn successful_lookup_exits_zero() {
        let outcome: RateOutcome = Ok(vec![ExchangeRate::new(
            Currency::parse("USD").expect("valid"),
            Currency::target(),
            22.5,
        )]);
        assert_eq!(exit_code(&outcome), 0);

        let empty: RateOutcome = Ok(Vec::new());
        assert_eq!(exit_code(&empty), 0);
    }

    #[test]
    fn rate_errors_exit_with_rate_error_code() {
        let validation: RateOutcome = Err(RateError::validation("no source currencies provided"));
        let api: RateOutcome = Err(RateError::api(&EnvelopeError::new("daily", "timeout")));

        assert_eq!(exit_code(&validation), RATE_ERROR_EXIT_CODE);
        assert_eq!(exit_code(&api), RATE_ERROR_EXIT_CODE);
    }

    #[tokio::test]
    async fn malformed_currency_argument_is_reported_as_validation_error() {
        // Given: A currency name instead of an ISO code
        let cli = parse(&["exrate", "dollars"]);
        let mut buffer = Vec::new();

        // When: The command runs
        let code = run(&cli, &mut buffer)
            .await
            .expect("bad input must not be an unexpected failure");

        // Then: The plain validation message is printed with the rate error code
        assert_eq!(code, RATE_ERROR_EXIT_CODE);
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(
            text,
            "ValidationError: currency must be a 3-letter alphabetic ISO code: 'dollars'\n"
        );
    }

    #[tokio::test]
    async fn malformed_currency_argument_is_a_json_error_report() {
        let cli = parse(&["exrate", "usd", "euro", "--format", "json"]);
        let mut buffer = Vec::new();

        let code = run(&cli, &mut buffer)
            .await
            .expect("bad input must not be an unexpected failure");

        assert_eq!(code, RATE_ERROR_EXIT_CODE);
        let value: Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "ValidationError");
        assert_eq!(
            value["message"],
            "currency must be a 3-letter alphabetic ISO code: 'euro'"
        );
    }
}
