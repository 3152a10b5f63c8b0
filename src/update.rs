//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

use crate::commands::Cmd;
use crate::masked::FieldEvent;
use crate::messages::Msg;
use crate::model::{EntryForm, FormField};

/// Main update function - dispatches to sub-handlers
pub fn update(form: &mut EntryForm, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Focus(id) => {
            if !form.focus(&id) {
                tracing::warn!("Cannot focus unknown field '{}'", id);
            }
            None
        }
        Msg::Edit(event) => {
            match form.focused_field_mut() {
                Some(field) => edit_field(field, event),
                None => tracing::warn!("Edit with no focused field"),
            }
            None
        }
        Msg::EditField { id, event } => {
            match form.field_mut(&id) {
                Some(field) => edit_field(field, event),
                None => tracing::warn!("Edit for unknown field '{}'", id),
            }
            None
        }
        Msg::Submit => submit(form),
        Msg::Reset => {
            form.reset();
            tracing::debug!(version = form.reset_version(), "form reset");
            None
        }
    }
}

/// Apply an input event and re-validate the field if its value changed
fn edit_field(field: &mut FormField, event: FieldEvent) {
    if field.handle(event) {
        field.validate();
    }
}

/// Validate all fields; emit and reset on success
fn submit(form: &mut EntryForm) -> Option<Cmd> {
    let errors = form.validate_all();
    if !errors.is_empty() {
        tracing::info!(count = errors.len(), "submit rejected");
        return Some(Cmd::Rejected(errors));
    }

    let entry = form.entry();
    form.submissions += 1;
    tracing::info!(
        submissions = form.submissions,
        fields = entry.len(),
        "entry submitted"
    );
    form.reset();
    Some(Cmd::Submitted(entry))
}
