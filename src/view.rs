//! Plain-text rendering of the form
//!
//! The form has no graphical surface; this produces the textual snapshot the
//! command-line driver prints for `show`.

use std::fmt::Write;

use crate::model::{EntryForm, FieldInput, FormField};

/// Caret marker inserted into the focused field's display value
const CARET: char = '|';

/// Render the whole form
pub fn render(form: &EntryForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", form.title);
    if !form.subtitle.is_empty() {
        let _ = writeln!(out, "{}", form.subtitle);
    }
    let _ = writeln!(out);

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let marker = if focused { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {}: {}",
            marker,
            field.label(),
            field_text(field, focused)
        );
        if let Some(error) = field.error() {
            let _ = writeln!(out, "    ! {}", error);
        }
    }

    let _ = writeln!(out);
    let status = if form.is_valid() { "enabled" } else { "disabled" };
    let _ = writeln!(out, "[Submit: {}]", status);
    out
}

/// Display value of a field, the placeholder in brackets when empty, and the
/// caret for a focused masked field
fn field_text(field: &FormField, focused: bool) -> String {
    if field.display().is_empty() && !focused {
        return format!("[{}]", field.placeholder());
    }

    match &field.input {
        FieldInput::Masked(masked) if focused => {
            let selection = masked.selection();
            let mut text = String::new();
            for (i, ch) in masked.display().chars().enumerate() {
                if i == selection.start() {
                    text.push(CARET);
                }
                text.push(ch);
                if !selection.is_empty() && i + 1 == selection.end() {
                    text.push(CARET);
                }
            }
            if selection.start() >= masked.display().chars().count() {
                text.push(CARET);
            }
            text
        }
        _ => field.display().to_string(),
    }
}
