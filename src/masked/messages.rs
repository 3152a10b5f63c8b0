//! Message types for masked field editing.

/// A key press as seen by a masked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Anything else (arrows, modifiers, function keys)
    Other,
}

/// Raw input events consumed by a masked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Key down, evaluated against the current selection
    Key(Key),
    /// Clipboard paste
    Paste(String),
    /// Change event carrying the raw input text
    /// (used when keystroke-level interception is unavailable)
    Change(String),
    /// Move the caret or extend the selection (display offsets)
    Select { anchor: usize, head: usize },
}

/// An edit intent evaluated against the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Insert a single character
    InsertChar(char),
    /// Delete character before cursor (or the selection)
    Backspace,
    /// Delete character after cursor (or the selection)
    Delete,
    /// Replace the whole value with the allowed characters of the text
    Paste(String),
}

impl EditIntent {
    /// Map a key press to an intent. Keys with no editing meaning map to `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(ch) => Some(EditIntent::InsertChar(ch)),
            Key::Backspace => Some(EditIntent::Backspace),
            Key::Delete => Some(EditIntent::Delete),
            Key::Other => None,
        }
    }
}
