//! Mapping from a field's flags to what it shows and allows.

use super::{appearance::InputType, input_field::InputFieldProps};

/// Text rendered below the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Helper text, shown only while valid
    Helper(String),
    /// Error message, shown only while invalid
    Error(String),
}

/// Visual and interactive state of a field for one combination of flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualState {
    /// Accepts keystrokes
    pub editable: bool,
    /// Drawn dimmed (disabled)
    pub dimmed: bool,
    /// Drawn with the loading treatment
    pub loading: bool,
    /// Drawn with the error tint
    pub error_tint: bool,
    /// Text is replaced by mask characters
    pub obscured: bool,
    /// The clear action is present
    pub show_clear: bool,
    /// The password reveal action is present
    pub show_reveal: bool,
    /// Message below the box
    pub message: Option<Message>,
}

/// Resolves the visual state of a field from its props, current value and
/// reveal flag.
///
/// Disabled and loading are independent: loading never removes the ability
/// to type, disabled removes every affordance.
pub fn visual_state(
    props: &InputFieldProps,
    value: &str,
    revealed: bool,
) -> VisualState {
    let is_password = props.input_type == InputType::Password;

    let message = if props.invalid {
        props
            .error_message
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|m| Message::Error(m.clone()))
    } else {
        props
            .helper_text
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|m| Message::Helper(m.clone()))
    };

    VisualState {
        editable: !props.disabled,
        dimmed: props.disabled,
        loading: props.loading,
        error_tint: props.invalid,
        obscured: is_password && !revealed,
        show_clear: props.clearable && !value.is_empty() && !props.disabled,
        show_reveal: is_password && !props.disabled,
        message,
    }
}

#[cfg(test)]
#[path = "./visual_tests.rs"]
mod tests;
