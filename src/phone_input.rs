//! Phone Input - Masked phone-number field component.
//!
//! A single-line input that masks keystrokes into the display format
//! `(XXX) (XXX)-XXXX` while exposing the raw digit sequence as its
//! canonical value. Implements the [`ValueAccessor`] contract so any form
//! container can drop it in as a value-holding control.
//!
//! The raw value and display text are signals: the display is re-derived
//! through the mask engine on every edit and the two never diverge.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use phone_input::{PhoneInput, PhoneInputProps, ValueAccessor};
//!
//! let mut field = PhoneInput::new(PhoneInputProps {
//!     label: Some("Phone".to_string()),
//!     placeholder: Some("(555) (123)-4567".to_string()),
//!     ..PhoneInputProps::new()
//! });
//!
//! field.register_on_change(Rc::new(|raw| println!("raw: {raw}")));
//! field.handle_key(&KeyboardEvent::new("5"));
//! assert_eq!(field.display(), "(5)");
//! ```

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::control::{ControlState, TouchedErrorMatcher, ValueAccessor};
use crate::keyboard::KeyboardEvent;
use crate::mask;
use crate::types::{
    ChangeCallback, PropValue, SaveCallback, StateChangeCallback, TouchedCallback,
};

// =============================================================================
// Props
// =============================================================================

/// Configuration for a [`PhoneInput`].
///
/// `max_length`, `read_only`, `kind`, `label` and `placeholder` affect
/// rendering and input acceptance only; `errors` feeds the error-state
/// policy. All fields are optional.
#[derive(Default)]
pub struct PhoneInputProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Initial value (raw digits or partially formatted text).
    pub value: Option<String>,

    /// Maximum length of the field text (not the digit count).
    /// `None` = unlimited; the 10-digit cap applies regardless.
    pub max_length: Option<usize>,

    /// Read-only fields render normally but reject edits.
    pub read_only: bool,

    /// Free-form field kind, e.g. "tel". Rendering metadata only.
    pub kind: Option<String>,

    /// Label rendered before the field.
    pub label: Option<String>,

    /// Placeholder text shown while the value is empty.
    pub placeholder: Option<String>,

    /// External error flag from the host form, merged into the
    /// error-state verdict.
    pub errors: PropValue<bool>,

    /// Fired with the field text when the value is committed.
    pub on_save: Option<SaveCallback>,

    /// Fired when the control is touched.
    pub on_state_change: Option<StateChangeCallback>,
}

impl PhoneInputProps {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Masked phone-number input widget.
///
/// Owns the field text, the raw value, and the ephemeral control state.
/// Keyboard events are fed in by the host event loop via [`handle_key`];
/// the host form integrates through the [`ValueAccessor`] impl.
///
/// [`handle_key`]: PhoneInput::handle_key
pub struct PhoneInput {
    props: PhoneInputProps,

    /// Canonical raw value: digit-only, at most 10 digits.
    value: Signal<String>,

    /// Masked display text, always `mask::to_display` of the last edit.
    display: Signal<String>,

    state: ControlState,

    on_change: ChangeCallback,
    on_touched: TouchedCallback,
}

impl PhoneInput {
    /// Create a widget from props. The initial value, if any, is run
    /// through the mask engine so value and display start consistent.
    pub fn new(props: PhoneInputProps) -> Self {
        let initial = props.value.as_deref().unwrap_or("");
        let masked = mask::to_display(initial, false);
        let raw = mask::to_raw(&masked);

        Self {
            props,
            value: signal(raw),
            display: signal(masked),
            state: ControlState::new(),
            on_change: Rc::new(|_| {}),
            on_touched: Rc::new(|| {}),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The raw digit-only value.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// The masked display text.
    pub fn display(&self) -> String {
        self.display.get()
    }

    /// The raw value signal, for hosts that observe instead of registering
    /// a callback.
    pub fn value_signal(&self) -> Signal<String> {
        self.value.clone()
    }

    /// The display text signal.
    pub fn display_signal(&self) -> Signal<String> {
        self.display.clone()
    }

    /// A shared handle on the control's {disabled, touched, valid} state.
    pub fn control_state(&self) -> ControlState {
        self.state.clone()
    }

    pub fn id(&self) -> Option<&str> {
        self.props.id.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.props.label.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.props.kind.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled.get()
    }

    pub fn is_read_only(&self) -> bool {
        self.props.read_only
    }

    /// True while the field is empty and a placeholder is configured.
    pub fn showing_placeholder(&self) -> bool {
        self.display.get().is_empty() && self.props.placeholder.is_some()
    }

    /// The text to render: the display value, or the placeholder while
    /// the field is empty.
    pub fn visible_text(&self) -> String {
        let text = self.display.get();
        if text.is_empty() {
            if let Some(ref placeholder) = self.props.placeholder {
                return placeholder.clone();
            }
        }
        text
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Recompute display and raw value from the edited field text.
    ///
    /// `text` is the field text after the edit; `backspace` marks a
    /// backward delete. Both signals are updated and the registered change
    /// callback is notified with the raw value. Runs synchronously: the
    /// widget owns the field text, so there is no native update to wait
    /// for.
    pub fn on_input_change(&self, text: &str, backspace: bool) {
        let masked = mask::to_display(text, backspace);
        let raw = mask::to_raw(&masked);

        self.display.set(masked);
        self.value.set(raw.clone());
        (self.on_change)(&raw);
    }

    /// Handle a keyboard event. Returns true if the event was consumed.
    ///
    /// Digit keys append to the field text and reformat; other printable
    /// keys are ignored. Backspace deletes the trailing digit. Enter
    /// commits the value and touches the control; Tab does the same but
    /// is left unconsumed for the host focus manager to route. Disabled
    /// and read-only fields ignore everything.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if !event.is_press() {
            return false;
        }
        if self.state.disabled.get() || self.props.read_only {
            return false;
        }
        if event.modifiers.ctrl || event.modifiers.alt {
            return false;
        }

        match event.key.as_str() {
            "Backspace" => {
                // The field text still holds the character under deletion.
                // Remove it first, then reformat with the delete hint so
                // the mask drops a digit rather than a formatting char.
                let mut text = self.display.get();
                text.pop();
                self.on_input_change(&text, true);
                true
            }
            "Enter" => {
                self.save();
                self.blur();
                true
            }
            // Tab moves focus: commit, but let the host route the key
            "Tab" => {
                self.save();
                self.blur();
                false
            }
            _ => match event.char() {
                Some(c) if c.is_ascii_digit() => {
                    let mut text = self.display.get();
                    if let Some(max) = self.props.max_length {
                        if text.chars().count() >= max {
                            return true;
                        }
                    }
                    text.push(c);
                    self.on_input_change(&text, false);
                    true
                }
                _ => false,
            },
        }
    }

    // =========================================================================
    // Lifecycle events
    // =========================================================================

    /// Mark the control touched: set the flag, run the registered touch
    /// callback, and emit the state-change event.
    pub fn blur(&self) {
        self.state.touched.set(true);
        (self.on_touched)();
        if let Some(ref cb) = self.props.on_state_change {
            cb();
        }
    }

    /// Emit the save event with the current field text.
    pub fn save(&self) {
        if let Some(ref cb) = self.props.on_save {
            cb(&self.display.get());
        }
    }

    /// The error-display policy for this control, bound to the current
    /// control state and external errors flag.
    pub fn error_matcher(&self) -> TouchedErrorMatcher {
        TouchedErrorMatcher::new(self.state.clone(), self.props.errors.get())
    }
}

// =============================================================================
// Value Accessor
// =============================================================================

impl ValueAccessor for PhoneInput {
    fn write_value(&mut self, value: Option<&str>) {
        let incoming = value.unwrap_or("");
        let masked = mask::to_display(incoming, false);

        self.value.set(mask::to_raw(&masked));
        self.display.set(masked);
    }

    fn register_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = callback;
    }

    fn register_on_touched(&mut self, callback: TouchedCallback) {
        self.on_touched = callback;
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.state.disabled.set(disabled);
    }
}

// =============================================================================
// TESTS
// =============================================================================
