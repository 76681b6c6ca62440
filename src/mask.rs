//! Mask Engine - Phone number formatting.
//!
//! Pure string transformations between a raw digit sequence and the
//! formatted display string `(XXX) (XXX)-XXXX`. The display is always
//! recomputed from scratch on every edit rather than patched
//! incrementally, which keeps the transformation stateless.
//!
//! # API
//!
//! - `to_display(input, backspace)` - Derive the masked display string
//! - `to_raw(input)` - Strip formatting down to the digit sequence
//!
//! # Example
//!
//! ```ignore
//! use phone_input::mask;
//!
//! assert_eq!(mask::to_display("1234567890", false), "(123) (456)-7890");
//! assert_eq!(mask::to_raw("(123) (456)-7890"), "1234567890");
//! ```

/// Maximum number of digits a phone number holds. Excess input is truncated.
pub const MAX_DIGITS: usize = 10;

/// Backspace only drops the trailing character while the display is at
/// most this long. Longer input is reparsed as-is.
const BACKSPACE_REFORMAT_MAX: usize = 12;

// =============================================================================
// Unmask
// =============================================================================

/// Strip every non-digit character, returning the digit-only sequence.
///
/// The result is unbounded; callers that need the 10-digit cap truncate.
pub fn to_raw(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Mask
// =============================================================================

/// Derive the masked display string from the current field text.
///
/// `input` is the field text after the edit (raw digits, partially
/// formatted text, or a previous display value - formatting characters are
/// stripped before reformatting). When `backspace` is true the edit was a
/// backward delete and `input` is the text left after it: one more
/// trailing character is dropped before reparsing, so a delete that
/// landed on a formatting character consumes the digit before it.
///
/// Formatting by digit count:
///
/// - 0 digits: `""`
/// - 1-3: `(DDD)` partial group
/// - 4-6: `(DDD) (DDD)`
/// - 7-10: `(DDD) (DDD)-DDDD`
///
/// Partial groups show only the entered digits, e.g. two digits
/// format as `(12)`.
pub fn to_display(input: &str, backspace: bool) -> String {
    if input.is_empty() {
        return String::new();
    }

    let text = if backspace && input.chars().count() <= BACKSPACE_REFORMAT_MAX {
        let mut chars = input.chars();
        chars.next_back();
        chars.as_str()
    } else {
        input
    };

    let mut digits = to_raw(text);
    digits.truncate(MAX_DIGITS);
    format_digits(&digits)
}

/// Group a digit-only string (at most [`MAX_DIGITS`] long) into the
/// display format. Digits are ASCII, so byte slicing is safe.
fn format_digits(digits: &str) -> String {
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits})"),
        4..=6 => format!("({}) ({})", &digits[..3], &digits[3..]),
        _ => format!("({}) ({})-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_raw_strips_formatting() {
        assert_eq!(to_raw("(123) (456)-7890"), "1234567890");
        assert_eq!(to_raw("12a3-b4"), "1234");
        assert_eq!(to_raw(""), "");
        assert_eq!(to_raw("abc"), "");
    }

    #[test]
    fn test_to_display_empty() {
        assert_eq!(to_display("", false), "");
        assert_eq!(to_display("abc", false), "");
    }

    #[test]
    fn test_to_display_partial_groups() {
        assert_eq!(to_display("1", false), "(1)");
        assert_eq!(to_display("12", false), "(12)");
        assert_eq!(to_display("123", false), "(123)");
        assert_eq!(to_display("1234", false), "(123) (4)");
        assert_eq!(to_display("123456", false), "(123) (456)");
        assert_eq!(to_display("1234567", false), "(123) (456)-7");
    }

    #[test]
    fn test_to_display_complete() {
        assert_eq!(to_display("1234567890", false), "(123) (456)-7890");
    }

    #[test]
    fn test_to_display_truncates_excess_digits() {
        assert_eq!(to_display("12345678901", false), "(123) (456)-7890");
        assert_eq!(to_display("123456789012345", false), "(123) (456)-7890");
    }

    #[test]
    fn test_to_display_reformats_masked_input() {
        // Typing a digit into an already-formatted field
        assert_eq!(to_display("(123) (456)7", false), "(123) (456)-7");
        assert_eq!(to_display("(123)4", false), "(123) (4)");
    }

    #[test]
    fn test_backspace_drops_trailing_digit() {
        // Deleting from "(123) (4)" leaves "(123) (4"; under the reformat
        // cap one more trailing char goes, so the digit 4 is consumed
        assert_eq!(to_display("(123) (4", true), "(123)");
        assert_eq!(to_display("(12", true), "(1)");
    }

    #[test]
    fn test_backspace_at_cap_boundary() {
        // Deleting the 7th digit leaves "(123) (456)-", exactly 12 chars:
        // the dangling separator is dropped too
        assert_eq!(to_display("(123) (456)-", true), "(123) (456)");
    }

    #[test]
    fn test_backspace_over_cap_reparses_as_is() {
        // Deleting from the full display leaves "(123) (456)-789",
        // 15 chars, over the cap: nothing more is dropped
        assert_eq!(to_display("(123) (456)-789", true), "(123) (456)-789");
        // 14 chars, still over the cap
        assert_eq!(to_display("(123) (456)-78", true), "(123) (456)-78");
    }

    #[test]
    fn test_backspace_to_empty() {
        assert_eq!(to_display("(1", true), "");
    }

    #[test]
    fn test_round_trip() {
        let cases = ["", "1", "12", "123", "1234", "12345", "123456",
                     "1234567", "12345678", "123456789", "1234567890"];
        for digits in cases {
            assert_eq!(to_raw(&to_display(digits, false)), digits);
        }
    }

    #[test]
    fn test_idempotence() {
        let cases = ["", "1", "1234", "1234567", "1234567890", "99999999999"];
        for digits in cases {
            let once = to_display(digits, false);
            assert_eq!(to_display(&to_raw(&once), false), once);
        }
    }
}
