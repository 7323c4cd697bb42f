mod cli;

use clap::Parser;
use datescore::config;
use datescore::error::DateScoreError;
use datescore::report::{self, OutputFormat};
use datescore::request;
use datescore::types::report::ScoreRequest;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, DateScoreError> {
    let policy = config::resolve_policy(Path::new("."), cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let response = request::respond(
                &policy,
                &ScoreRequest {
                    actual_date: cmd.actual,
                    guess_date: cmd.guess,
                },
            )
            .inspect_err(|err| tracing::warn!(error = %err, "rejected score input"))?;

            let output_format = match cmd.format {
                cli::ScoreFormat::Text => OutputFormat::Text,
                cli::ScoreFormat::Json => OutputFormat::Json,
                cli::ScoreFormat::Md => OutputFormat::Md,
            };
            println!("{}", report::render(&response, output_format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Request(cmd) => {
            let body = match &cmd.input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut body = String::new();
                    std::io::stdin().read_to_string(&mut body)?;
                    body
                }
            };

            match request::handle_body(&policy, &body) {
                Ok(response) => {
                    println!("{}", report::json::to_json(&response)?);
                    Ok(exit_code::SUCCESS)
                }
                Err(err) if err.is_invalid_input() => {
                    tracing::warn!(error = %err, "rejected scoring request");
                    println!(
                        "{}",
                        report::json::to_json(&request::error_response(&err))?
                    );
                    Ok(exit_code::INVALID_INPUT)
                }
                Err(err) => Err(err),
            }
        }
        cli::Commands::Calibrate(cmd) => {
            let calibration = datescore::calibration::calibrate(&policy);
            let output_format = match cmd.format {
                cli::CalibrationFormat::Json => OutputFormat::Json,
                cli::CalibrationFormat::Md => OutputFormat::Md,
            };
            println!(
                "{}",
                report::render_calibration(&calibration, output_format)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Policy => {
            print!("{}", config::policy_to_toml(&policy)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
