//! Run configuration.
//!
//! Every tunable of a run lives in [`SenderConfig`], which is built once in
//! `main` and handed to each component by reference.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::error::{Result, SenderError};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Message sent when no `--message`/`--message-file` is given.
pub const DEFAULT_MESSAGE: &str = "Hello! 👋

This is an automated message sent via WhatsApp Web.

Thank you!";

/// Country code prepended to local numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "+94";

/// Contact list used when neither `--contacts` nor `WA_CONTACTS_PATH` is set.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.csv";

/// Env var clap reads for `--contacts`.
pub const CONTACTS_PATH_ENV: &str = "WA_CONTACTS_PATH";

/// Configuration for a single bulk-send run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub message: String,
    pub country_code: String,
    /// Lower bound of the pause between sends, in seconds.
    pub min_delay: u64,
    /// Upper bound of the pause between sends, in seconds (inclusive).
    pub max_delay: u64,
    /// Seconds to let WhatsApp Web load before submitting.
    pub page_load_wait: u64,
    /// Seconds between the submit key and the fallback Enter.
    pub submit_delay: u64,
    /// Seconds before the tab is closed.
    pub close_tab_delay: u64,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            min_delay: 15,
            max_delay: 20,
            page_load_wait: 20,
            submit_delay: 2,
            close_tab_delay: 5,
        }
    }
}

impl SenderConfig {
    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(SenderError::InvalidConfig("message is empty".to_string()));
        }
        if self.country_code.trim().is_empty() {
            return Err(SenderError::InvalidConfig(
                "country code is empty".to_string(),
            ));
        }
        if self.min_delay > self.max_delay {
            return Err(SenderError::InvalidConfig(format!(
                "min delay ({}s) is greater than max delay ({}s)",
                self.min_delay, self.max_delay
            )));
        }
        Ok(())
    }

    pub fn page_load_wait(&self) -> Duration {
        Duration::from_secs(self.page_load_wait)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_secs(self.submit_delay)
    }

    pub fn close_tab_delay(&self) -> Duration {
        Duration::from_secs(self.close_tab_delay)
    }
}

/// Read a message body from a file, trimming the trailing newline editors add.
pub fn load_message_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

/// Resolve the contact list path.
///
/// `explicit` is `--contacts`, which clap already fills from
/// WA_CONTACTS_PATH when the flag is absent. Falls back to `contacts.csv` in
/// the working directory. `~` is expanded.
pub fn resolve_contacts_path(explicit: Option<&str>) -> PathBuf {
    let raw = explicit.unwrap_or(DEFAULT_CONTACTS_FILE);
    PathBuf::from(shellexpand::tilde(raw).to_string())
}
