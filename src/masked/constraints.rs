//! Edit constraints for masked fields.
//!
//! Constraints define which characters a canonical value may contain and how
//! long it may grow.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what a masked field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditConstraints {
    /// Maximum canonical length in characters
    pub max_length: usize,

    /// Character filter (returns true if character is allowed)
    pub char_filter: CharFilter,
}

impl EditConstraints {
    /// Digits only, up to `max_length` characters
    pub fn digits(max_length: usize) -> Self {
        Self {
            max_length,
            char_filter: |c| c.is_ascii_digit(),
        }
    }

    /// Ten-digit phone number
    pub fn phone() -> Self {
        Self::digits(10)
    }

    /// Sixteen-digit PIN
    pub fn pin() -> Self {
        Self::digits(16)
    }

    /// Check if a character passes the filter
    pub fn is_char_allowed(&self, ch: char) -> bool {
        (self.char_filter)(ch)
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        current_len + insert_len > self.max_length
    }

    /// Drop every disallowed character from `text`, then truncate to max length.
    ///
    /// This is how pasted text and raw change events become a canonical value.
    pub fn sanitize(&self, text: &str) -> String {
        text.chars()
            .filter(|c| self.is_char_allowed(*c))
            .take(self.max_length)
            .collect()
    }
}
