//! Edit operations on canonical values.
//!
//! [`apply`] is a pure function: it never touches the display value, it only
//! computes the next canonical value. Rejected intents return the input
//! unchanged.

use super::constraints::EditConstraints;
use super::format::FormatSpec;
use super::messages::EditIntent;
use super::selection::Selection;
use super::translate::to_canonical_offset;

/// Result of applying an edit intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The next canonical value
    pub value: String,
    /// Canonical offset where the caret lands
    pub caret: usize,
    /// Whether `value` differs from the input value
    pub changed: bool,
}

impl Edit {
    fn unchanged(canonical: &str, caret: usize) -> Self {
        Self {
            value: canonical.to_string(),
            caret,
            changed: false,
        }
    }

    fn new(canonical: &str, value: String, caret: usize) -> Self {
        let changed = value != canonical;
        Self {
            value,
            caret,
            changed,
        }
    }
}

/// Byte index of the `char_offset`-th character (or `s.len()`).
fn byte_index(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// `s[..start] + s[end..]` in character offsets.
fn remove_chars(s: &str, start: usize, end: usize) -> String {
    let start = byte_index(s, start);
    let end = byte_index(s, end);
    let mut out = String::with_capacity(s.len() - (end - start));
    out.push_str(&s[..start]);
    out.push_str(&s[end..]);
    out
}

/// `s[..at] + ch + s[at..]` in character offsets.
fn insert_char(s: &str, at: usize, ch: char) -> String {
    let at = byte_index(s, at);
    let mut out = String::with_capacity(s.len() + ch.len_utf8());
    out.push_str(&s[..at]);
    out.push(ch);
    out.push_str(&s[at..]);
    out
}

/// Canonical range covered by a display selection.
fn canonical_range(
    formatter: &dyn FormatSpec,
    display: &str,
    selection: Selection,
) -> (usize, usize) {
    let p0 = to_canonical_offset(formatter, display, selection.start());
    let p1 = to_canonical_offset(formatter, display, selection.end());
    (p0.min(p1), p0.max(p1))
}

/// Compute the canonical value produced by `intent`.
///
/// `display` must be the current display value (`formatter.format(canonical)`)
/// and `selection` is expressed in display offsets.
pub fn apply(
    canonical: &str,
    selection: Selection,
    intent: &EditIntent,
    display: &str,
    formatter: &dyn FormatSpec,
    constraints: &EditConstraints,
) -> Edit {
    let caret = to_canonical_offset(formatter, display, selection.start());
    let len = canonical.chars().count();

    match intent {
        EditIntent::InsertChar(ch) => {
            if !constraints.is_char_allowed(*ch) {
                tracing::trace!(?ch, "insert rejected: character not allowed");
                return Edit::unchanged(canonical, caret);
            }
            if constraints.would_exceed_max_length(len, 1) {
                tracing::trace!(len, "insert rejected: at max length");
                return Edit::unchanged(canonical, caret);
            }

            let (p0, p1) = canonical_range(formatter, display, selection);
            let base = if p0 < p1 {
                remove_chars(canonical, p0, p1)
            } else {
                canonical.to_string()
            };
            Edit::new(canonical, insert_char(&base, p0, *ch), p0 + 1)
        }

        EditIntent::Backspace | EditIntent::Delete if !selection.is_empty() => {
            let (p0, p1) = canonical_range(formatter, display, selection);
            Edit::new(canonical, remove_chars(canonical, p0, p1), p0)
        }

        EditIntent::Backspace => {
            if caret == 0 {
                return Edit::unchanged(canonical, caret);
            }
            Edit::new(canonical, remove_chars(canonical, caret - 1, caret), caret - 1)
        }

        EditIntent::Delete => {
            if caret >= len {
                return Edit::unchanged(canonical, caret);
            }
            Edit::new(canonical, remove_chars(canonical, caret, caret + 1), caret)
        }

        EditIntent::Paste(text) => {
            let value = constraints.sanitize(text);
            let caret = value.chars().count();
            Edit::new(canonical, value, caret)
        }
    }
}
