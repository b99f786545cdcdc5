//! Contact list loading.
//!
//! CHANGELOG:
//! - 10/19/2026 - Replaced JSON contacts manager with CSV loader

pub mod loader;

pub use loader::{load_contacts, try_load_contacts, RawContact, NUMBER_COLUMN};
