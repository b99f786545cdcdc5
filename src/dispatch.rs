//! Sequential message dispatch with randomized pacing.
//!
//! Each contact is attempted exactly once. Failures are logged and recorded,
//! never propagated, so one bad number cannot stop the run.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::automation::Deliver;
use crate::config::SenderConfig;
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-contact result tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Sent,
    Failed,
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOutcome {
    pub number: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Blocks the run between sends.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Real pause via `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Drives a [`Deliver`] backend over a list of formatted numbers.
pub struct Dispatcher<'a, D, S, R> {
    config: &'a SenderConfig,
    deliverer: D,
    sleeper: S,
    rng: R,
}

impl<'a, D, S, R> Dispatcher<'a, D, S, R>
where
    D: Deliver,
    S: Sleeper,
    R: Rng,
{
    pub fn new(config: &'a SenderConfig, deliverer: D, sleeper: S, rng: R) -> Self {
        Self {
            config,
            deliverer,
            sleeper,
            rng,
        }
    }

    /// Attempt delivery to a single number.
    pub fn send_one<W: Write>(&mut self, number: &str, out: &mut W) -> DeliveryOutcome {
        let _ = writeln!(out, "📱 Sending message to {}...", number);

        match self.deliverer.deliver(number, &self.config.message) {
            Ok(()) => {
                let _ = writeln!(out, "✅ Message sent successfully to {}", number);
                DeliveryOutcome {
                    number: number.to_string(),
                    outcome: Outcome::Sent,
                    error: None,
                }
            }
            Err(e) => {
                warn!("delivery to {} failed: {}", number, e);
                let _ = writeln!(out, "❌ Failed to send message to {}", number);
                let _ = writeln!(out, "   Error: {}", e);
                DeliveryOutcome {
                    number: number.to_string(),
                    outcome: Outcome::Failed,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Pick the pause before the next send, uniformly from the configured
    /// whole-second range (inclusive).
    pub fn next_delay(&mut self) -> Duration {
        let secs = self
            .rng
            .gen_range(self.config.min_delay..=self.config.max_delay);
        Duration::from_secs(secs)
    }

    /// Send to every number in order, pausing between sends but not after
    /// the last one.
    pub fn run<W: Write>(&mut self, numbers: &[String], out: &mut W) -> Vec<DeliveryOutcome> {
        let total = numbers.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, number) in numbers.iter().enumerate() {
            let position = index + 1;
            let _ = writeln!(out, "[{}/{}] Processing {}", position, total, number);

            outcomes.push(self.send_one(number, out));

            if position < total {
                let delay = self.next_delay();
                debug!("sleeping {:?} before next send", delay);
                let _ = writeln!(
                    out,
                    "⏳ Waiting {} seconds before next message...",
                    delay.as_secs()
                );
                let _ = writeln!(out);
                self.sleeper.sleep(delay);
            }
        }

        outcomes
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::{Result, SenderError};
    use std::collections::HashSet;

    /// Records every delivery and fails the numbers it was told to.
    #[derive(Default)]
    pub struct FakeDeliverer {
        pub fail_on: HashSet<String>,
        pub calls: Vec<(String, String)>,
    }

    impl FakeDeliverer {
        pub fn failing(numbers: &[&str]) -> Self {
            Self {
                fail_on: numbers.iter().map(|n| n.to_string()).collect(),
                calls: Vec::new(),
            }
        }
    }

    impl Deliver for FakeDeliverer {
        fn deliver(&mut self, number: &str, message: &str) -> Result<()> {
            self.calls.push((number.to_string(), message.to_string()));
            if self.fail_on.contains(number) {
                Err(SenderError::DeliveryFailure("browser did not respond".to_string()))
            } else {
                Ok(())
            }
        }
    }

    /// Records requested pauses without sleeping.
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub pauses: Vec<Duration>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }
}
