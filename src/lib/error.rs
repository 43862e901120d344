//! Custom Error and Result types for this library

use thiserror::Error;

use crate::input::InputFieldPropsBuilderError;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Two columns of the same table share a key
    #[error("duplicate column key: {_0}")]
    DuplicateColumnKey(String),

    /// A sort was requested for a key that names no column
    #[error("unknown column key: {_0}")]
    UnknownColumn(String),

    /// A row toggle was requested on a table without selection enabled
    #[error("row selection is not enabled for this table")]
    SelectionDisabled,

    /// A row toggle targeted a position outside the displayed rows
    #[error("row position {position} is out of range for {len} rows")]
    RowOutOfRange {
        /// The requested display position
        position: usize,
        /// The number of displayed rows
        len: usize,
    },

    /// The clear action is not present for the field's current state
    #[error("clear action is not available")]
    ClearUnavailable,

    /// The password reveal action is not present for the field's current
    /// state
    #[error("password reveal is not available")]
    RevealUnavailable,

    /// A value was pushed into a field that owns its own value
    #[error("field is uncontrolled: its value cannot be set by the caller")]
    NotControlled,

    /// Error resulting from failure to build input field props
    #[error("failed to build input field props: {_0}")]
    PropsBuild(#[from] InputFieldPropsBuilderError),
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`WidgetError`]
pub type Result<T> = std::result::Result<T, WidgetError>;
