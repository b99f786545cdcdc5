//! wa-bulk-sender library
//!
//! Sends one WhatsApp message to every number in a CSV file by driving
//! WhatsApp Web, pausing a random interval between sends.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

pub mod automation;
pub mod config;
pub mod contacts;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod phone;
pub mod prompt;
pub mod report;
pub mod run;
