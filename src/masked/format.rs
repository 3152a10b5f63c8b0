//! Display formatters for masked fields.
//!
//! A formatter projects the canonical value (raw digits) onto the string the
//! user sees. Formatters are plain values implementing [`FormatSpec`], so a
//! field can be configured with any of them without capturing field state.

use serde::{Deserialize, Serialize};

/// Characters that separate groups in a display value without standing for a
/// canonical character.
pub const FORMATTING_CHARACTERS: [char; 4] = ['-', ' ', '(', ')'];

/// Projection from canonical value to display value.
///
/// Implementations must be deterministic, map `""` to `""`, never shrink the
/// display when the canonical value grows, and emit exactly one
/// non-formatting display character per canonical character, in order.
pub trait FormatSpec {
    /// Format a canonical value for display
    fn format(&self, canonical: &str) -> String;

    /// Whether `ch` is a formatting character (present in the display but not
    /// standing for any canonical character)
    fn is_formatting_char(&self, ch: char) -> bool {
        FORMATTING_CHARACTERS.contains(&ch)
    }
}

/// `(ddd) ddd - dddd`, revealed group by group as digits arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupedPhone;

impl FormatSpec for GroupedPhone {
    fn format(&self, canonical: &str) -> String {
        let chars: Vec<char> = canonical.chars().collect();
        if chars.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(chars.len() + 6);
        out.push('(');
        out.extend(&chars[..chars.len().min(3)]);
        if chars.len() > 3 {
            out.push_str(") ");
            out.extend(&chars[3..chars.len().min(6)]);
        }
        if chars.len() > 6 {
            out.push_str(" - ");
            out.extend(&chars[6..]);
        }
        out
    }
}

/// Hides every canonical character behind `mask` and groups the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedGroups {
    #[serde(default = "default_mask")]
    pub mask: char,
    #[serde(default = "default_group")]
    pub group: usize,
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_mask() -> char {
    '#'
}

fn default_group() -> usize {
    4
}

fn default_separator() -> char {
    '-'
}

impl Default for MaskedGroups {
    fn default() -> Self {
        Self {
            mask: default_mask(),
            group: default_group(),
            separator: default_separator(),
        }
    }
}

impl FormatSpec for MaskedGroups {
    fn format(&self, canonical: &str) -> String {
        let mut out = String::new();
        for (i, _) in canonical.chars().enumerate() {
            if i > 0 && self.group > 0 && i % self.group == 0 {
                out.push(self.separator);
            }
            out.push(self.mask);
        }
        out
    }

    // The mask symbol stands in for a canonical character, so only the
    // separator is a formatting character here.
    fn is_formatting_char(&self, ch: char) -> bool {
        ch == self.separator
    }
}

/// Shows the canonical value as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl FormatSpec for Plain {
    fn format(&self, canonical: &str) -> String {
        canonical.to_string()
    }

    fn is_formatting_char(&self, _ch: char) -> bool {
        false
    }
}

/// Formatter selection as it appears in form configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Formatter {
    Phone,
    MaskedGroups(MaskedGroups),
    Plain,
}

impl FormatSpec for Formatter {
    fn format(&self, canonical: &str) -> String {
        match self {
            Formatter::Phone => GroupedPhone.format(canonical),
            Formatter::MaskedGroups(m) => m.format(canonical),
            Formatter::Plain => Plain.format(canonical),
        }
    }

    fn is_formatting_char(&self, ch: char) -> bool {
        match self {
            Formatter::Phone => GroupedPhone.is_formatting_char(ch),
            Formatter::MaskedGroups(m) => m.is_formatting_char(ch),
            Formatter::Plain => Plain.is_formatting_char(ch),
        }
    }
}

/// Check that `display` is a well-formed projection of `canonical`:
/// one non-formatting character per canonical character, and empty maps to empty.
pub fn satisfies_contract(formatter: &dyn FormatSpec, canonical: &str, display: &str) -> bool {
    if canonical.is_empty() {
        return display.is_empty();
    }
    let projected = display
        .chars()
        .filter(|c| !formatter.is_formatting_char(*c))
        .count();
    projected == canonical.chars().count()
}
