//! Form fields: plain text or masked digits.

use crate::config::{FieldKind, FieldSpec};
use crate::masked::{EditConstraints, FieldEvent, Key, MaskedFieldConfig, MaskedFieldController};

/// How a field stores its value
#[derive(Debug)]
pub enum FieldInput {
    /// Plain text, taken verbatim
    Text(String),
    /// Digits behind a formatter
    Masked(MaskedFieldController),
}

/// A field of the entry form with its validation state
#[derive(Debug)]
pub struct FormField {
    pub spec: FieldSpec,
    pub input: FieldInput,
    error: Option<String>,
}

impl FormField {
    /// Build an empty field from its definition
    pub fn from_spec(spec: FieldSpec) -> Self {
        let input = match &spec.kind {
            FieldKind::Text => FieldInput::Text(String::new()),
            FieldKind::Masked { max_length, format } => {
                let config = MaskedFieldConfig::new(spec.id.clone(), *max_length)
                    .with_placeholder(spec.placeholder.clone());
                FieldInput::Masked(MaskedFieldController::with_constraints(
                    config,
                    EditConstraints::digits(*max_length),
                    Box::new(*format),
                ))
            }
        };
        Self {
            spec,
            input,
            error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn is_masked(&self) -> bool {
        matches!(self.input, FieldInput::Masked(_))
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &str {
        match &self.input {
            FieldInput::Text(_) => &self.spec.placeholder,
            FieldInput::Masked(field) => &field.config().placeholder,
        }
    }

    /// The value reported on submit (canonical value for masked fields)
    pub fn value(&self) -> &str {
        match &self.input {
            FieldInput::Text(text) => text,
            FieldInput::Masked(field) => field.value(),
        }
    }

    /// The value as shown to the user
    pub fn display(&self) -> &str {
        match &self.input {
            FieldInput::Text(text) => text,
            FieldInput::Masked(field) => field.display(),
        }
    }

    /// Current validation message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Route an input event to the field. Returns true if the value changed.
    ///
    /// Plain text fields only understand appends, backspace at the end, and
    /// change events; masked fields get the full editing engine.
    pub fn handle(&mut self, event: FieldEvent) -> bool {
        match &mut self.input {
            FieldInput::Masked(field) => field.handle(event),
            FieldInput::Text(text) => match event {
                FieldEvent::Key(Key::Char(ch)) => {
                    text.push(ch);
                    true
                }
                FieldEvent::Key(Key::Backspace) => text.pop().is_some(),
                FieldEvent::Paste(pasted) => {
                    text.push_str(&pasted);
                    !pasted.is_empty()
                }
                FieldEvent::Change(raw) => {
                    if *text == raw {
                        return false;
                    }
                    *text = raw;
                    true
                }
                FieldEvent::Key(_) | FieldEvent::Select { .. } => false,
            },
        }
    }

    /// Run the field's rule, recording the message. Returns true if valid.
    pub fn validate(&mut self) -> bool {
        let result = self.spec.rule.check(&self.spec.label, self.value());
        self.error = result.err();
        if let FieldInput::Masked(field) = &mut self.input {
            match &self.error {
                Some(message) => field.set_error(message.clone()),
                None => field.clear_error(),
            }
        }
        self.error.is_none()
    }

    /// Whether the current value passes the rule, without recording anything
    pub fn is_valid(&self) -> bool {
        self.spec.rule.check(&self.spec.label, self.value()).is_ok()
    }

    /// Clear value and error. `version` is the form's reset signal.
    pub fn reset(&mut self, version: u64) {
        match &mut self.input {
            FieldInput::Text(text) => text.clear(),
            FieldInput::Masked(field) => {
                field.observe_reset(version);
                field.clear_error();
            }
        }
        self.error = None;
    }
}
