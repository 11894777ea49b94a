//! NANP validation of the emitted symbol stream.
//!
//! The stream is a sequence over `{0-9, *, #, A-D, .}` where `.` separates
//! independent dialing episodes. Each run between separators is parsed
//! against the strict positional grammar of a dialable ten-digit number;
//! runs that deviate in any way are dropped, which is the whole point of
//! the tool: card numbers, PINs and menu navigation never validate.

/// Extract every validated number from a finalized symbol stream, in
/// left-to-right order of their source segments.
pub fn extract_numbers(symbols: &str) -> Vec<String> {
    symbols.split('.').filter_map(parse_segment).collect()
}

/// Parse one separator-delimited run.
///
/// Grammar: an optional leading `1` (long-distance prefix, consumed but
/// not stored), then exactly ten digits with the first in `2..=9`, then
/// optionally a single trailing `#` (dial-send terminator, not stored).
fn parse_segment(segment: &str) -> Option<String> {
    let mut digits = String::with_capacity(10);
    let mut chars = segment.chars().peekable();

    if chars.peek() == Some(&'1') {
        chars.next();
    }

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                // Only valid as the last symbol after a complete number.
                if digits.len() == 10 && chars.next().is_none() {
                    return Some(digits);
                }
                return None;
            }
            '0'..='9' => {
                if digits.is_empty() && !('2'..='9').contains(&c) {
                    return None;
                }
                if digits.len() == 10 {
                    return None;
                }
                digits.push(c);
            }
            _ => return None,
        }
    }

    if digits.len() == 10 {
        Some(digits)
    } else {
        None
    }
}
