//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::Entry;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// A valid entry was submitted; the form has already been reset
    Submitted(Entry),
    /// Submit was refused; (field id, message) for each failing field
    Rejected(Vec<(String, String)>),
}
