//! Render Module - Single-line field output.
//!
//! Writes the field as one styled line to any `io::Write`: optional label
//! prefix, then the visible text. Placeholder and disabled fields render
//! dimmed; fields in an error-display state render red.
//!
//! Styling uses raw SGR sequences; the host terminal session (raw mode,
//! alternate screen, cursor) is the embedding application's concern.

use std::io::{self, Write};

use crate::control::ErrorStateMatcher;
use crate::phone_input::PhoneInput;

// =============================================================================
// SGR helpers
// =============================================================================

/// Reset all attributes.
#[inline]
fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Dim / faint text.
#[inline]
fn sgr_dim<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[2m")
}

/// Red foreground (ANSI 16-color).
#[inline]
fn sgr_fg_red<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[31m")
}

// =============================================================================
// Field rendering
// =============================================================================

/// Render the field as a single line (no trailing newline).
///
/// Precedence: error styling wins over dimming; dimming applies to
/// disabled fields and placeholder text.
pub fn render_line<W: Write>(w: &mut W, field: &PhoneInput) -> io::Result<()> {
    if let Some(label) = field.label() {
        write!(w, "{label}: ")?;
    }

    let state = field.control_state();
    let errored = field.error_matcher().is_error_state(Some(&state));

    if errored {
        sgr_fg_red(w)?;
    } else if field.is_disabled() || field.showing_placeholder() {
        sgr_dim(w)?;
    }

    write!(w, "{}", field.visible_text())?;
    sgr_reset(w)?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone_input::PhoneInputProps;
    use crate::types::PropValue;

    fn render_to_string(field: &PhoneInput) -> String {
        let mut out = Vec::new();
        render_line(&mut out, field).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_plain_value() {
        let field = PhoneInput::new(PhoneInputProps {
            value: Some("1234567890".to_string()),
            ..PhoneInputProps::new()
        });

        assert_eq!(render_to_string(&field), "(123) (456)-7890\x1b[0m");
    }

    #[test]
    fn test_render_label_prefix() {
        let field = PhoneInput::new(PhoneInputProps {
            label: Some("Phone".to_string()),
            value: Some("123".to_string()),
            ..PhoneInputProps::new()
        });

        assert_eq!(render_to_string(&field), "Phone: (123)\x1b[0m");
    }

    #[test]
    fn test_render_placeholder_dimmed() {
        let field = PhoneInput::new(PhoneInputProps {
            placeholder: Some("(555) (123)-4567".to_string()),
            ..PhoneInputProps::new()
        });

        assert_eq!(render_to_string(&field), "\x1b[2m(555) (123)-4567\x1b[0m");
    }

    #[test]
    fn test_render_error_state_red() {
        let field = PhoneInput::new(PhoneInputProps {
            value: Some("123".to_string()),
            errors: PropValue::Static(true),
            ..PhoneInputProps::new()
        });
        field.blur();

        assert_eq!(render_to_string(&field), "\x1b[31m(123)\x1b[0m");
    }

    #[test]
    fn test_render_disabled_dimmed() {
        use crate::control::ValueAccessor;

        let mut field = PhoneInput::new(PhoneInputProps {
            value: Some("123".to_string()),
            ..PhoneInputProps::new()
        });
        field.set_disabled_state(true);

        assert_eq!(render_to_string(&field), "\x1b[2m(123)\x1b[0m");
    }
}
