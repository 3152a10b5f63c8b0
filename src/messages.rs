//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::masked::FieldEvent;

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Move focus to the field with this id
    Focus(String),
    /// Input event for the focused field
    Edit(FieldEvent),
    /// Input event for a specific field
    EditField { id: String, event: FieldEvent },
    /// Validate everything and, if valid, emit the entry and reset
    Submit,
    /// Clear every field
    Reset,
}
