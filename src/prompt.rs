//! Yes/no confirmation before sending.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use std::io::{self, BufRead, Write};

/// Answers that count as "yes" (compared trimmed and lowercased).
const AFFIRMATIVE: [&str; 2] = ["yes", "y"];

/// Ask `question` and read one line. Anything but `yes`/`y` is a decline,
/// including end of input.
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    write!(out, "{} (yes/no): ", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(is_affirmative(&line))
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}
