//! MaskedFieldController - owns the canonical/display pair of one masked field.

use std::fmt;

use super::constraints::EditConstraints;
use super::format::{satisfies_contract, FormatSpec};
use super::handler::{apply, Edit};
use super::messages::{EditIntent, FieldEvent};
use super::selection::Selection;
use super::translate::to_display_offset;

/// Callback invoked with the new canonical value after each committed edit.
pub type ValueChangeCallback = Box<dyn FnMut(&str)>;

/// Static configuration of a masked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedFieldConfig {
    /// Field identifier (opaque)
    pub id: String,
    /// Maximum canonical length
    pub max_length: usize,
    /// Hint shown while the field is empty
    pub placeholder: String,
}

impl MaskedFieldConfig {
    pub fn new(id: impl Into<String>, max_length: usize) -> Self {
        Self {
            id: id.into(),
            max_length,
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Controller phase. `Committing` only exists while one intent is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Committing,
}

/// Owns the canonical value of a masked field and keeps the display value in
/// sync with it.
///
/// The only way the canonical value changes is [`handle`](Self::handle) (which
/// routes through [`apply`]) or a reset. The display value is recomputed by the
/// formatter on every commit and is never set directly.
pub struct MaskedFieldController {
    config: MaskedFieldConfig,
    constraints: EditConstraints,
    formatter: Box<dyn FormatSpec>,
    canonical: String,
    display: String,
    selection: Selection,
    phase: Phase,
    /// Last reset signal version seen
    reset_version: u64,
    on_value_change: Option<ValueChangeCallback>,
    error: bool,
    error_message: String,
}

impl fmt::Debug for MaskedFieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedFieldController")
            .field("id", &self.config.id)
            .field("canonical", &self.canonical)
            .field("display", &self.display)
            .field("selection", &self.selection)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl MaskedFieldController {
    /// Create an empty digit-only field
    pub fn new(config: MaskedFieldConfig, formatter: impl FormatSpec + 'static) -> Self {
        let constraints = EditConstraints::digits(config.max_length);
        Self::with_constraints(config, constraints, Box::new(formatter))
    }

    /// Create an empty field with explicit constraints
    pub fn with_constraints(
        config: MaskedFieldConfig,
        constraints: EditConstraints,
        formatter: Box<dyn FormatSpec>,
    ) -> Self {
        Self {
            config,
            constraints,
            formatter,
            canonical: String::new(),
            display: String::new(),
            selection: Selection::default(),
            phase: Phase::Idle,
            reset_version: 0,
            on_value_change: None,
            error: false,
            error_message: String::new(),
        }
    }

    /// Register the value-change callback
    pub fn with_on_value_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &MaskedFieldConfig {
        &self.config
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    /// The canonical value reported to the caller
    pub fn value(&self) -> &str {
        &self.canonical
    }

    /// The formatted value shown in the field
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current selection in display offsets
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    pub fn error(&self) -> bool {
        self.error
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Set pass-through error state
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = true;
        self.error_message = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error = false;
        self.error_message.clear();
    }

    /// Handle a raw input event.
    ///
    /// Returns true if the canonical value changed.
    pub fn handle(&mut self, event: FieldEvent) -> bool {
        match event {
            FieldEvent::Key(key) => match EditIntent::from_key(key) {
                Some(intent) => self.apply_intent(&intent),
                None => false,
            },
            // A change event carries the whole new text, which is a paste
            // over the entire value.
            FieldEvent::Paste(text) | FieldEvent::Change(text) => {
                self.apply_intent(&EditIntent::Paste(text))
            }
            FieldEvent::Select { anchor, head } => {
                let len = self.display.chars().count();
                self.selection = Selection::new(anchor, head).clamped(len);
                false
            }
        }
    }

    /// Apply an edit intent against the current selection.
    ///
    /// Returns true if the canonical value changed.
    pub fn apply_intent(&mut self, intent: &EditIntent) -> bool {
        let Edit {
            value,
            caret,
            changed,
        } = apply(
            &self.canonical,
            self.selection,
            intent,
            &self.display,
            self.formatter.as_ref(),
            &self.constraints,
        );

        if !changed {
            tracing::trace!(field = %self.config.id, "intent rejected");
            return false;
        }

        self.commit(value, caret);
        true
    }

    /// Observe the external reset signal.
    ///
    /// A version different from the last one seen is a transition into the
    /// active state: the value is cleared regardless of any pending edit.
    /// Returns true if a reset happened.
    pub fn observe_reset(&mut self, version: u64) -> bool {
        if version == self.reset_version {
            return false;
        }
        self.reset_version = version;

        let was_empty = self.canonical.is_empty();
        self.canonical.clear();
        self.display.clear();
        self.selection = Selection::default();
        self.phase = Phase::Idle;
        tracing::debug!(field = %self.config.id, version, "field reset");

        if !was_empty {
            if let Some(callback) = self.on_value_change.as_mut() {
                callback(&self.canonical);
            }
        }
        true
    }

    /// Single mutation path: canonical value, display projection, caret, notify.
    fn commit(&mut self, value: String, caret: usize) {
        debug_assert_eq!(self.phase, Phase::Idle, "re-entrant commit");
        self.phase = Phase::Committing;

        self.canonical = value;
        self.display = self.formatter.format(&self.canonical);
        debug_assert!(
            self.canonical.chars().count() <= self.constraints.max_length,
            "canonical value exceeds max length"
        );
        debug_assert!(
            satisfies_contract(self.formatter.as_ref(), &self.canonical, &self.display),
            "formatter output {:?} does not project {:?}",
            self.display,
            self.canonical
        );

        let offset = to_display_offset(self.formatter.as_ref(), &self.display, caret);
        self.selection = Selection::collapsed(offset);

        // Never log the canonical value, it may be a PIN
        tracing::debug!(
            field = %self.config.id,
            len = self.canonical.chars().count(),
            display = %self.display,
            caret = offset,
            "committed edit"
        );

        if let Some(callback) = self.on_value_change.as_mut() {
            callback(&self.canonical);
        }
        self.phase = Phase::Idle;
    }
}
