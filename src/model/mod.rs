//! Form model - the complete state of the entry form
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod field;
pub mod validation;

pub use field::{FieldInput, FormField};
pub use validation::Rule;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::FormConfig;

/// A submitted entry: (field id, reported value) in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub values: Vec<(String, String)>,
}

impl Entry {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Serializes as a JSON object whose keys keep the form's field order
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (id, value) in &self.values {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

/// The complete form model
#[derive(Debug)]
pub struct EntryForm {
    pub title: String,
    pub subtitle: String,
    /// Fields in display order
    pub fields: Vec<FormField>,
    /// Index of the field receiving input events
    pub focused: usize,
    /// Reset signal observed by masked fields; bumped on every reset
    reset_version: u64,
    /// Number of accepted submissions
    pub submissions: usize,
}

impl EntryForm {
    /// Create an empty form from its definition
    pub fn new(config: &FormConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            fields: config
                .fields
                .iter()
                .cloned()
                .map(FormField::from_spec)
                .collect(),
            focused: 0,
            reset_version: 0,
            submissions: 0,
        }
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused)
    }

    /// Move focus to the field with `id`. Returns false if there is none.
    pub fn focus(&mut self, id: &str) -> bool {
        match self.fields.iter().position(|f| f.id() == id) {
            Some(idx) => {
                self.focused = idx;
                true
            }
            None => false,
        }
    }

    /// Whether submit is currently allowed (every field passes its rule)
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| f.error().is_none() && f.is_valid())
    }

    /// Validate every field, recording messages. Returns (id, message) pairs
    /// for the failing ones.
    pub fn validate_all(&mut self) -> Vec<(String, String)> {
        let mut errors = Vec::new();
        for field in &mut self.fields {
            if !field.validate() {
                let message = field.error().unwrap_or_default().to_string();
                errors.push((field.id().to_string(), message));
            }
        }
        errors
    }

    /// Snapshot the reported values
    pub fn entry(&self) -> Entry {
        Entry {
            values: self
                .fields
                .iter()
                .map(|f| (f.id().to_string(), f.value().to_string()))
                .collect(),
        }
    }

    /// Current reset signal version
    pub fn reset_version(&self) -> u64 {
        self.reset_version
    }

    /// Clear every field and error, and move focus back to the first field
    pub fn reset(&mut self) {
        self.reset_version += 1;
        let version = self.reset_version;
        for field in &mut self.fields {
            field.reset(version);
        }
        self.focused = 0;
    }
}
