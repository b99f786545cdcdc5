//! Phone number formatting for WhatsApp Web.
//!
//! The rules are prefix based and intentionally lenient: nothing checks the
//! digit count or that the input is numeric, so malformed input comes out
//! malformed rather than being rejected.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

/// Prefix that marks a number as already carrying the Sri Lankan country code.
const COUNTRY_PREFIX: &str = "94";

/// Remove every space, hyphen and period.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect()
}

/// Format a raw number into `<country-code><national-number>`.
///
/// First match wins:
/// 1. starts with `94` → prefix `+` only
/// 2. starts with `0`  → drop the `0`, prefix `country_code`
/// 3. starts with `7`  → prefix `country_code`
/// 4. anything else    → prefix `country_code`
pub fn format_number(raw: &str, country_code: &str) -> String {
    let cleaned = clean(raw);

    if cleaned.starts_with(COUNTRY_PREFIX) {
        format!("+{}", cleaned)
    } else if let Some(national) = cleaned.strip_prefix('0') {
        format!("{}{}", country_code, national)
    } else {
        // Local `7...` numbers and any other prefix
        format!("{}{}", country_code, cleaned)
    }
}
