//! WhatsApp Web delivery via the default browser and synthetic key presses.
//!
//! Opens a prefilled `send` link, waits for the page, presses Enter to submit
//! (twice, in case the first one lands before the composer is ready) and
//! closes the tab with the platform hotkey.
//!
//! Key events go to whatever window has focus. If another window grabs focus
//! mid-send, the Enter and close-tab keys land there instead.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use super::Deliver;
use crate::config::SenderConfig;
use crate::error::{Result, SenderError};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use std::thread;
use std::time::Duration;
use tracing::debug;

const SEND_URL: &str = "https://web.whatsapp.com/send";

/// Build the WhatsApp Web link that opens a chat with `message` prefilled.
///
/// The message is percent-encoded so newlines, emoji and `&` survive the
/// query string.
pub fn send_url(number: &str, message: &str) -> String {
    format!(
        "{}?phone={}&text={}",
        SEND_URL,
        urlencoding::encode(number),
        urlencoding::encode(message)
    )
}

/// Modifier used with `w` to close the current tab.
#[cfg(target_os = "macos")]
const CLOSE_TAB_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const CLOSE_TAB_MODIFIER: Key = Key::Control;

/// Key injection used by the close-tab hotkey.
pub trait KeySink {
    fn send_key(&mut self, key: Key, direction: Direction) -> std::result::Result<(), String>;
}

impl KeySink for Enigo {
    fn send_key(&mut self, key: Key, direction: Direction) -> std::result::Result<(), String> {
        Keyboard::key(self, key, direction).map_err(|e| e.to_string())
    }
}

/// Press `modifier`+`key`. The modifier is released even when the key click
/// fails, so it never stays held for later key events.
pub fn press_hotkey<K: KeySink + ?Sized>(
    keys: &mut K,
    modifier: Key,
    key: Key,
) -> std::result::Result<(), String> {
    keys.send_key(modifier, Direction::Press)?;
    let clicked = keys.send_key(key, Direction::Click);
    let released = keys.send_key(modifier, Direction::Release);
    clicked.and(released)
}

/// Browser + keyboard automation against WhatsApp Web.
pub struct WhatsAppWeb {
    page_load_wait: Duration,
    submit_delay: Duration,
    close_tab_delay: Duration,
    enigo: Option<Enigo>,
}

impl WhatsAppWeb {
    pub fn new(config: &SenderConfig) -> Self {
        Self {
            page_load_wait: config.page_load_wait(),
            submit_delay: config.submit_delay(),
            close_tab_delay: config.close_tab_delay(),
            enigo: None,
        }
    }

    /// Connect to the input system on first use.
    fn keyboard(&mut self) -> Result<&mut Enigo> {
        if self.enigo.is_none() {
            debug!("initializing enigo for key injection");
            let enigo = Enigo::new(&Settings::default()).map_err(|e| {
                SenderError::DeliveryFailure(format!("keyboard automation unavailable: {}", e))
            })?;
            self.enigo = Some(enigo);
        }
        self.enigo
            .as_mut()
            .ok_or_else(|| SenderError::DeliveryFailure("keyboard not initialized".to_string()))
    }

    fn press(&mut self, key: Key) -> Result<()> {
        Keyboard::key(self.keyboard()?, key, Direction::Click)
            .map_err(|e| SenderError::DeliveryFailure(format!("key press failed: {}", e)))
    }

    fn close_tab(&mut self) -> Result<()> {
        press_hotkey(self.keyboard()?, CLOSE_TAB_MODIFIER, Key::Unicode('w'))
            .map_err(|e| SenderError::DeliveryFailure(format!("close-tab hotkey failed: {}", e)))
    }
}

impl Deliver for WhatsAppWeb {
    fn deliver(&mut self, number: &str, message: &str) -> Result<()> {
        let url = send_url(number, message);
        debug!("opening {}", url);
        open::that(&url).map_err(|e| {
            SenderError::DeliveryFailure(format!("could not open browser: {}", e))
        })?;

        thread::sleep(self.page_load_wait);
        self.press(Key::Return)?;

        // Second Enter in case the first one fired before the composer was ready
        thread::sleep(self.submit_delay);
        self.press(Key::Return)?;

        thread::sleep(self.close_tab_delay);
        self.close_tab()
    }
}
