//! Controlled and uncontrolled value ownership.

use std::fmt;

#[cfg(test)]
use mockall::automock;

/// Receives every new value of a controlled field.
#[cfg_attr(test, automock)]
pub trait ChangeListener {
    /// Called with the raw value the user produced.
    fn on_change(&mut self, value: &str);
}

impl<F> ChangeListener for F
where
    F: FnMut(&str),
{
    fn on_change(&mut self, value: &str) {
        self(value)
    }
}

/// Who owns the value of a field. Chosen once when the field is created.
pub enum ValueMode {
    /// The caller owns the value. Changes are requested through the listener
    /// and take effect when the caller pushes the value back.
    Controlled {
        /// Last value supplied by the caller
        value: String,
        /// Listener for requested changes
        on_change: Option<Box<dyn ChangeListener>>,
    },
    /// The field owns its value.
    Uncontrolled {
        /// Current value
        value: String,
    },
}

impl fmt::Debug for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueMode::Controlled { value, on_change } => f
                .debug_struct("Controlled")
                .field("value", value)
                .field("on_change", &on_change.is_some())
                .finish(),
            ValueMode::Uncontrolled { value } => f
                .debug_struct("Uncontrolled")
                .field("value", value)
                .finish(),
        }
    }
}

impl ValueMode {
    /// Current value as displayed.
    pub fn value(&self) -> &str {
        match self {
            ValueMode::Controlled { value, .. } => value,
            ValueMode::Uncontrolled { value } => value,
        }
    }

    /// Returns true for caller-owned values.
    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueMode::Controlled { .. })
    }

    /// Applies a value produced by the user: notifies the listener when
    /// controlled, stores it when uncontrolled.
    pub fn request(&mut self, new_value: String) {
        match self {
            ValueMode::Controlled { on_change, .. } => {
                if let Some(listener) = on_change.as_mut() {
                    listener.on_change(&new_value);
                }
            }
            ValueMode::Uncontrolled { value } => *value = new_value,
        }
    }
}
