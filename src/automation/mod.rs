//! Message delivery backends.
//!
//! The dispatcher only sees [`Deliver`]; the WhatsApp Web driver needs a live
//! display and browser, so tests swap in a fake.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

pub mod whatsapp_web;

use crate::error::Result;

pub use whatsapp_web::WhatsAppWeb;

/// Something that can deliver one message to one formatted number.
pub trait Deliver {
    /// Deliver `message` to `number`. Any error marks the contact as failed.
    fn deliver(&mut self, number: &str, message: &str) -> Result<()>;
}

impl<D: Deliver + ?Sized> Deliver for &mut D {
    fn deliver(&mut self, number: &str, message: &str) -> Result<()> {
        (**self).deliver(number, message)
    }
}
