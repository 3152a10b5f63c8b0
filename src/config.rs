//! Form definition loading
//!
//! The form layout (fields, labels, rules, masks) is described in YAML. A
//! built-in definition is compiled into the binary; users can override it in
//! `~/.config/entryform/form.yaml` or point at a file explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::masked::{EditConstraints, Formatter, MaskedGroups};
use crate::model::Rule;

/// Built-in form definition, embedded at compile time
pub const AIR_FRYER_YAML: &str = include_str!("../forms/air-fryer.yaml");

/// How a field collects its value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Free text, value taken verbatim from change events
    #[default]
    Text,
    /// Digits shown through a formatter
    Masked { max_length: usize, format: Formatter },
}

/// One field of the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field identifier, also the key in submitted entries
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub rule: Rule,
    #[serde(default)]
    pub kind: FieldKind,
}

/// The whole form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub fields: Vec<FieldSpec>,
}

impl FormConfig {
    /// Parse a form definition from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: FormConfig =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse form: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a form definition from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read form file {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    /// The built-in Air Fryer giveaway form
    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(AIR_FRYER_YAML)
    }

    /// Load with priority: explicit path → user config → built-in
    ///
    /// An explicit path that fails to load is an error. A broken user config
    /// is logged and skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::info!("Loaded form from {}", path.display());
            return Ok(config);
        }

        if let Some(path) = crate::config_paths::form_file() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded user form from {}", path.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("{}; falling back to built-in form", e);
                    }
                }
            } else {
                tracing::debug!("Form file not found at {}, using built-in", path.display());
            }
        }

        Self::builtin()
    }

    /// Look up a field by id
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("Form has no fields".to_string());
        }
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.id == field.id) {
                return Err(format!("Duplicate field id: {}", field.id));
            }
            if let FieldKind::Masked { max_length, format } = &field.kind {
                if *max_length == 0 {
                    return Err(format!("Field {} has max_length 0", field.id));
                }
                if let Formatter::MaskedGroups(groups) = format {
                    validate_masked_groups(&field.id, groups, *max_length)?;
                }
            }
        }
        Ok(())
    }
}

/// The separator must be distinguishable from both the mask symbol and the
/// digits a masked field accepts, or offsets can no longer be translated.
fn validate_masked_groups(
    id: &str,
    groups: &MaskedGroups,
    max_length: usize,
) -> Result<(), String> {
    if groups.mask == groups.separator {
        return Err(format!(
            "Field {} uses '{}' as both mask and separator",
            id, groups.mask
        ));
    }
    if EditConstraints::digits(max_length).is_char_allowed(groups.separator) {
        return Err(format!(
            "Field {} separator '{}' is an accepted input character",
            id, groups.separator
        ));
    }
    Ok(())
}
