//! Shared types - Callbacks and reactive prop values.
//!
//! Callback aliases use `Rc<dyn Fn>` so they can be cloned into closures
//! without ownership issues. Props support static values, signals, and
//! getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

// =============================================================================
// Callback Types
// =============================================================================

/// Value change callback registered by the host form. Receives the raw
/// digit-only value.
pub type ChangeCallback = Rc<dyn Fn(&str)>;

/// Touch callback registered by the host form.
pub type TouchedCallback = Rc<dyn Fn()>;

/// Save callback, fired with the field text when the value is committed.
pub type SaveCallback = Rc<dyn Fn(&str)>;

/// State change callback, fired when the control is touched.
pub type StateChangeCallback = Rc<dyn Fn()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This enables reactive props while maintaining type safety.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time the value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

// =============================================================================
// TESTS
// =============================================================================
