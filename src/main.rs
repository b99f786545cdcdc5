//! wa-bulk-sender - send one message to a list of numbers via WhatsApp Web
//!
//! Keep WhatsApp Web logged in on the default browser and leave the machine
//! unlocked: the sender types into whichever window has focus.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial CLI

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use wa_bulk_sender::automation::WhatsAppWeb;
use wa_bulk_sender::config::{self, SenderConfig, CONTACTS_PATH_ENV};
use wa_bulk_sender::dispatch::{Dispatcher, ThreadSleeper};
use wa_bulk_sender::output::{self, OutputControls};
use wa_bulk_sender::run::{self, RunEnd, RunOptions};

/// Send the same WhatsApp message to every number in a CSV file.
#[derive(Parser, Debug)]
#[command(name = "wa-bulk-sender")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with a `number` column
    #[arg(short, long, env = CONTACTS_PATH_ENV)]
    contacts: Option<String>,

    /// Message text (defaults to the built-in greeting)
    #[arg(short, long, conflicts_with = "message_file")]
    message: Option<String>,

    /// Read the message text from a file
    #[arg(long)]
    message_file: Option<PathBuf>,

    /// Country code prepended to local numbers
    #[arg(long, default_value = config::DEFAULT_COUNTRY_CODE)]
    country_code: String,

    /// Minimum seconds between messages
    #[arg(long, default_value_t = 15)]
    min_delay: u64,

    /// Maximum seconds between messages
    #[arg(long, default_value_t = 20)]
    max_delay: u64,

    /// Seconds to wait for WhatsApp Web to load
    #[arg(long, default_value_t = 20)]
    wait_time: u64,

    /// Seconds between the submit key and the fallback Enter
    #[arg(long, default_value_t = 2)]
    submit_delay: u64,

    /// Seconds to wait before closing the tab
    #[arg(long, default_value_t = 5)]
    close_delay: u64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Print the run report as JSON (progress goes to stderr)
    #[arg(long)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long)]
    compact: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn sender_config(&self) -> Result<SenderConfig> {
        let message = match (&self.message, &self.message_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => config::load_message_file(path)
                .with_context(|| format!("Failed to read message file: {:?}", path))?,
            (None, None) => config::DEFAULT_MESSAGE.to_string(),
        };

        let config = SenderConfig {
            message,
            country_code: self.country_code.clone(),
            min_delay: self.min_delay,
            max_delay: self.max_delay,
            page_load_wait: self.wait_time,
            submit_delay: self.submit_delay,
            close_tab_delay: self.close_delay,
        };
        config.validate()?;
        Ok(config)
    }
}

fn execute(cli: &Cli, output_controls: OutputControls) -> Result<ExitCode> {
    let config = cli.sender_config()?;
    let contacts_path = config::resolve_contacts_path(cli.contacts.as_deref());

    let dispatcher = Dispatcher::new(
        &config,
        WhatsAppWeb::new(&config),
        ThreadSleeper,
        rand::thread_rng(),
    );
    let options = RunOptions {
        contacts_path: &contacts_path,
        assume_yes: cli.yes,
    };
    let mut input = io::stdin().lock();

    // In JSON mode stdout carries only the report
    let end = if output_controls.json {
        run::run(&config, options, dispatcher, &mut input, &mut io::stderr())?
    } else {
        run::run(&config, options, dispatcher, &mut input, &mut io::stdout())?
    };

    match end {
        RunEnd::NoContacts { reason } => {
            if output_controls.json {
                let reason = reason.as_deref().unwrap_or("no contacts loaded");
                println!("{}", output::format_error(reason));
            }
            Ok(ExitCode::from(1))
        }
        RunEnd::Declined => Ok(ExitCode::from(0)),
        RunEnd::Completed(report) => {
            if output_controls.json {
                output_controls.print(&report);
            } else {
                report.write_summary(&mut io::stdout())?;
            }
            Ok(ExitCode::from(0))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    match execute(&cli, output_controls) {
        Ok(code) => code,
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&e.to_string()));
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(1)
        }
    }
}
