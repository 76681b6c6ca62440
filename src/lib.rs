//! # phone-input
//!
//! Masked phone-number input component for reactive terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The component splits into two responsibilities:
//!
//! - **Mask Engine** ([`mask`]) - pure string transformation between the
//!   raw digit sequence and the formatted display `(XXX) (XXX)-XXXX`.
//! - **Value Adapter** ([`control`] + [`phone_input`]) - the generic
//!   form-control contract: write values in, hear about edits and touches,
//!   toggle disabled state, query the error-display policy.
//!
//! Control flow:
//! ```text
//! host writes value → mask engine → display signal
//! keystroke → mask engine → display + raw signals → change callback
//! ```
//!
//! ## Modules
//!
//! - [`mask`] - Mask/unmask transformations
//! - [`control`] - ValueAccessor contract, ControlState, error-state policy
//! - [`phone_input`] - The widget
//! - [`keyboard`] - Key events and crossterm conversion
//! - [`render`] - Single-line ANSI rendering
//! - [`types`] - Callback aliases and reactive prop values

pub mod control;
pub mod keyboard;
pub mod mask;
pub mod phone_input;
pub mod render;
pub mod types;

// Re-export commonly used items
pub use control::{
    ControlState, ErrorStateMatcher, InvalidErrorMatcher, TouchedErrorMatcher, ValueAccessor,
};
pub use keyboard::{convert_key_event, KeyState, KeyboardEvent, Modifiers};
pub use mask::{to_display, to_raw, MAX_DIGITS};
pub use phone_input::{PhoneInput, PhoneInputProps};
pub use render::render_line;
pub use types::{
    ChangeCallback, PropValue, SaveCallback, StateChangeCallback, TouchedCallback,
};
