//! Form Control Module - Value accessor contract and error-state policy.
//!
//! The widget participates in a host form as a pluggable value-holding
//! control. The host programs against the [`ValueAccessor`] trait, never a
//! concrete widget type: it writes values in, registers change/touch
//! callbacks, and toggles disabled state.
//!
//! # API
//!
//! - `ValueAccessor` - The four-method form-control contract
//! - `ControlState` - Signal-backed {disabled, touched, valid} flags
//! - `ErrorStateMatcher` - "Should this field display as errored?" policy
//!
//! # Example
//!
//! ```ignore
//! use phone_input::control::ValueAccessor;
//!
//! fn bind(control: &mut dyn ValueAccessor, initial: &str) {
//!     control.write_value(Some(initial));
//!     control.register_on_change(Rc::new(|raw| println!("value: {raw}")));
//! }
//! ```

use spark_signals::{signal, Signal};

use crate::types::{ChangeCallback, TouchedCallback};

// =============================================================================
// Control State
// =============================================================================

/// Ephemeral UI state of a single control instance.
///
/// Each flag is a signal so the host can observe transitions without
/// polling. Cloning shares the underlying signals, so a host-held clone
/// mirrors the widget's state.
#[derive(Clone)]
pub struct ControlState {
    /// The control rejects input while disabled.
    pub disabled: Signal<bool>,
    /// Set once the control has been blurred at least once.
    pub touched: Signal<bool>,
    /// Host-owned validity verdict. The widget never writes this; validity
    /// comes from the surrounding form's validators.
    pub valid: Signal<bool>,
}

impl ControlState {
    /// A fresh control: enabled, pristine, valid.
    pub fn new() -> Self {
        Self {
            disabled: signal(false),
            touched: signal(false),
            valid: signal(true),
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Value Accessor Contract
// =============================================================================

/// The generic form-control capability set.
///
/// A host form container drops any implementor into a form: it pushes
/// values in with `write_value`, hears about edits through the registered
/// change callback, hears about blur through the touch callback, and can
/// disable the control. Callbacks default to no-ops until registered.
pub trait ValueAccessor {
    /// Accept an external value (raw digits or partially formatted text).
    /// `None` is normalized to the empty string. Re-renders the display.
    fn write_value(&mut self, value: Option<&str>);

    /// Store the host's change callback, invoked with the raw value on
    /// every edit.
    fn register_on_change(&mut self, callback: ChangeCallback);

    /// Store the host's touch callback, invoked when the control blurs.
    fn register_on_touched(&mut self, callback: TouchedCallback);

    /// Toggle the disabled flag. No other logic.
    fn set_disabled_state(&mut self, disabled: bool);
}

// =============================================================================
// Error State Policy
// =============================================================================

/// Single-method capability answering "is this field in an error-display
/// state". Hosts use the verdict for styling only; no behavior branches
/// on it.
pub trait ErrorStateMatcher {
    /// True when the field should display as errored.
    fn is_error_state(&self, control: Option<&ControlState>) -> bool;
}

/// The widget's own policy: errored once the field has been touched and is
/// either invalid or externally flagged with errors.
///
/// Captures the control state and the external errors flag at construction;
/// the `control` argument of the trait is ignored.
pub struct TouchedErrorMatcher {
    control: ControlState,
    errors: bool,
}

impl TouchedErrorMatcher {
    /// Bind the policy to a control's state and the current external
    /// errors flag.
    pub fn new(control: ControlState, errors: bool) -> Self {
        Self { control, errors }
    }
}

impl ErrorStateMatcher for TouchedErrorMatcher {
    fn is_error_state(&self, _control: Option<&ControlState>) -> bool {
        self.control.touched.get() && (!self.control.valid.get() || self.errors)
    }
}

/// Plain validity check on the passed control, regardless of touch state.
pub struct InvalidErrorMatcher;

impl ErrorStateMatcher for InvalidErrorMatcher {
    fn is_error_state(&self, control: Option<&ControlState>) -> bool {
        control.is_some_and(|c| !c.valid.get())
    }
}

// =============================================================================
// TESTS
// =============================================================================
