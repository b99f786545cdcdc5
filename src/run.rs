//! One bulk-send run: load → confirm → send → report.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::automation::Deliver;
use crate::config::SenderConfig;
use crate::contacts::try_load_contacts;
use crate::dispatch::{Dispatcher, Sleeper};
use crate::error::{Result, SenderError};
use crate::phone::format_number;
use crate::prompt;
use crate::report::RunReport;
use chrono::Local;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// How a run ended.
#[derive(Debug)]
pub enum RunEnd {
    /// Loading failed (`reason` says why) or the file had no numbers;
    /// nothing was sent.
    NoContacts { reason: Option<String> },
    /// The user answered anything but yes; nothing was sent.
    Declined,
    /// Every contact was attempted once.
    Completed(RunReport),
}

/// Per-run inputs that are not part of [`SenderConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RunOptions<'a> {
    pub contacts_path: &'a Path,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
}

/// Execute a run.
///
/// Status lines go to `out`; the confirmation answer is read from `input`.
pub fn run<D, S, R, I, W>(
    config: &SenderConfig,
    options: RunOptions<'_>,
    mut dispatcher: Dispatcher<'_, D, S, R>,
    input: &mut I,
    out: &mut W,
) -> Result<RunEnd>
where
    D: Deliver,
    S: Sleeper,
    R: Rng,
    I: BufRead,
    W: Write,
{
    let rule = "=".repeat(60);
    let thin_rule = "-".repeat(60);

    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^60}", "WhatsApp Bulk Message Sender")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    let contacts = match try_load_contacts(options.contacts_path) {
        Ok(contacts) => contacts,
        Err(e) => {
            warn!("contact load failed: {}", e);
            writeln!(out, "❌ Error: {}", e)?;
            if matches!(e, SenderError::FileMissing(_)) {
                write_format_hint(out)?;
            }
            writeln!(out, "❌ No contacts found. Please check your CSV file.")?;
            return Ok(RunEnd::NoContacts {
                reason: Some(e.to_string()),
            });
        }
    };
    if contacts.is_empty() {
        writeln!(out, "❌ No contacts found. Please check your CSV file.")?;
        return Ok(RunEnd::NoContacts { reason: None });
    }
    writeln!(
        out,
        "✅ Successfully loaded {} contacts from {}",
        contacts.len(),
        options.contacts_path.display()
    )?;

    writeln!(out)?;
    writeln!(out, "{}", thin_rule)?;
    writeln!(out, "Message to be sent:")?;
    writeln!(out, "{}", thin_rule)?;
    writeln!(out, "{}", config.message)?;
    writeln!(out, "{}", thin_rule)?;
    writeln!(out)?;
    writeln!(out, "📋 Ready to send message to {} contacts", contacts.len())?;
    writeln!(
        out,
        "⏱️  Delay between messages: {}-{} seconds",
        config.min_delay, config.max_delay
    )?;
    writeln!(out)?;

    let confirmed =
        options.assume_yes || prompt::confirm("Do you want to proceed?", input, out)?;
    if !confirmed {
        writeln!(out, "❌ Operation cancelled by user.")?;
        return Ok(RunEnd::Declined);
    }

    writeln!(out)?;
    writeln!(out, "🚀 Starting to send messages...")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    let numbers: Vec<String> = contacts
        .iter()
        .map(|c| format_number(&c.number, &config.country_code))
        .collect();

    info!("sending to {} contacts", numbers.len());
    let started_at = Local::now();
    let outcomes = dispatcher.run(&numbers, out);

    Ok(RunEnd::Completed(RunReport::new(outcomes, started_at)))
}

/// Show the expected CSV layout.
fn write_format_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Please create a contacts file with the following format:")?;
    writeln!(out, "number")?;
    writeln!(out, "7XXXXXXXX")?;
    writeln!(out, "7XXXXXXXX")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{FakeDeliverer, RecordingSleeper};
    use crate::dispatch::Outcome;
    use crate::report::RunSummary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn contacts_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    struct Harness {
        config: SenderConfig,
        fake: FakeDeliverer,
        sleeper: RecordingSleeper,
        out: Vec<u8>,
    }

    impl Harness {
        fn new(fake: FakeDeliverer) -> Self {
            Self {
                config: SenderConfig::default(),
                fake,
                sleeper: RecordingSleeper::default(),
                out: Vec::new(),
            }
        }

        fn run(&mut self, path: &Path, answer: &str, assume_yes: bool) -> RunEnd {
            let dispatcher = Dispatcher::new(
                &self.config,
                &mut self.fake,
                &mut self.sleeper,
                StdRng::seed_from_u64(42),
            );
            let mut input = Cursor::new(answer.as_bytes().to_vec());
            run(
                &self.config,
                RunOptions {
                    contacts_path: path,
                    assume_yes,
                },
                dispatcher,
                &mut input,
                &mut self.out,
            )
            .unwrap()
        }

        fn output(&self) -> String {
            String::from_utf8(self.out.clone()).unwrap()
        }
    }

    #[test]
    fn test_formats_and_sends_in_order() {
        let file = contacts_file("number\n771234567\n0771234568\n94771234569\n");
        let mut h = Harness::new(FakeDeliverer::default());

        let end = h.run(file.path(), "yes\n", false);

        let report = match end {
            RunEnd::Completed(report) => report,
            other => panic!("unexpected end: {:?}", other),
        };
        let sent_to: Vec<&str> = h.fake.calls.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            sent_to,
            vec!["+94771234567", "+94771234568", "+94771234569"]
        );
        assert_eq!(
            report.summary,
            RunSummary {
                sent: 3,
                failed: 0,
                total: 3
            }
        );
        assert_eq!(h.sleeper.pauses.len(), 2);
    }

    #[test]
    fn test_partial_failure_accounting() {
        let file = contacts_file("number\n771111111\n772222222\n773333333\n774444444\n");
        let mut h = Harness::new(FakeDeliverer::failing(&["+94772222222", "+94774444444"]));

        let end = h.run(file.path(), "y\n", false);

        let RunEnd::Completed(report) = end else {
            panic!("run did not complete");
        };
        assert_eq!(
            report.summary,
            RunSummary {
                sent: 2,
                failed: 2,
                total: 4
            }
        );
        assert_eq!(report.outcomes[1].outcome, Outcome::Failed);
        assert_eq!(h.fake.calls.len(), 4);
    }

    #[test]
    fn test_decline_sends_nothing() {
        let file = contacts_file("number\n771234567\n");
        let mut h = Harness::new(FakeDeliverer::default());

        let end = h.run(file.path(), "no\n", false);

        assert!(matches!(end, RunEnd::Declined));
        assert!(h.fake.calls.is_empty());
        assert!(h.sleeper.pauses.is_empty());
        let text = h.output();
        assert!(text.contains("Operation cancelled by user."));
        assert!(!text.contains("Processing"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let file = contacts_file("number\n771234567\n");
        let mut h = Harness::new(FakeDeliverer::default());

        let end = h.run(file.path(), "", true);

        assert!(matches!(end, RunEnd::Completed(_)));
        assert_eq!(h.fake.calls.len(), 1);
        assert!(!h.output().contains("(yes/no)"));
    }

    #[test]
    fn test_missing_file_ends_before_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = Harness::new(FakeDeliverer::default());

        let end = h.run(&dir.path().join("contacts.csv"), "yes\n", false);

        let RunEnd::NoContacts { reason } = end else {
            panic!("run did not stop at loading");
        };
        assert!(reason.unwrap().contains("not found"));
        assert!(h.fake.calls.is_empty());
        let text = h.output();
        assert!(text.contains("❌ Error: File '"));
        assert!(text.contains("7XXXXXXXX"));
        assert!(text.contains("No contacts found"));
        assert!(!text.contains("(yes/no)"));
    }

    #[test]
    fn test_missing_column_reason_is_printed() {
        let file = contacts_file("phone
771234567
");
        let mut h = Harness::new(FakeDeliverer::default());

        let end = h.run(file.path(), "yes
", false);

        let RunEnd::NoContacts { reason } = end else {
            panic!("run did not stop at loading");
        };
        assert!(reason.unwrap().contains("must have a column named 'number'"));
        let text = h.output();
        assert!(text.contains("❌ Error: CSV file '"));
        assert!(text.contains("must have a column named 'number'"));
        assert!(!text.contains("7XXXXXXXX"));
        assert!(h.fake.calls.is_empty());
    }

    #[test]
    fn test_blank_only_file_ends_before_prompt() {
        let file = contacts_file("number\n\n\"   \"\n");
        let mut h = Harness::new(FakeDeliverer::default());

        let end = h.run(file.path(), "yes\n", false);

        assert!(matches!(end, RunEnd::NoContacts { reason: None }));
        assert!(!h.output().contains("❌ Error:"));
    }

    #[test]
    fn test_preview_shows_message_and_delays() {
        let file = contacts_file("number\n771234567\n");
        let mut h = Harness::new(FakeDeliverer::default());
        h.config.message = "Meeting moved to 5pm".to_string();

        h.run(file.path(), "no\n", false);

        let text = h.output();
        assert!(text.contains("Meeting moved to 5pm"));
        assert!(text.contains("📋 Ready to send message to 1 contacts"));
        assert!(text.contains("Delay between messages: 15-20 seconds"));
    }
}
