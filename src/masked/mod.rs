//! Masked text input editing.
//!
//! A masked field collects a *canonical* value (raw digits) while showing a
//! *display* value with separators or mask symbols, e.g. `(123) 456 - 7890`
//! or `####-####-####-####`. Cursor and selection offsets arrive in display
//! coordinates and are translated to canonical offsets before editing.
//!
//! # Architecture
//!
//! - [`FormatSpec`]: canonical → display projection ([`GroupedPhone`],
//!   [`MaskedGroups`], [`Plain`], or the configurable [`Formatter`])
//! - [`to_canonical_offset`] / [`to_display_offset`]: position translation
//! - [`EditConstraints`]: allowed characters and maximum length
//! - [`apply`]: pure edit operation handler
//! - [`MaskedFieldController`]: owns the canonical/display pair of one field
//!
//! # Example
//!
//! ```
//! use entryform::masked::{FieldEvent, GroupedPhone, Key, MaskedFieldConfig, MaskedFieldController};
//!
//! let mut field = MaskedFieldController::new(MaskedFieldConfig::new("phone", 10), GroupedPhone);
//! for ch in "5551234".chars() {
//!     field.handle(FieldEvent::Key(Key::Char(ch)));
//! }
//!
//! assert_eq!(field.value(), "5551234");
//! assert_eq!(field.display(), "(555) 123 - 4");
//! ```

mod constraints;
mod controller;
mod format;
mod handler;
mod messages;
mod selection;
mod translate;

pub use constraints::{CharFilter, EditConstraints};
pub use controller::{MaskedFieldConfig, MaskedFieldController, Phase, ValueChangeCallback};
pub use format::{
    satisfies_contract, FormatSpec, Formatter, GroupedPhone, MaskedGroups, Plain,
    FORMATTING_CHARACTERS,
};
pub use handler::{apply, Edit};
pub use messages::{EditIntent, FieldEvent, Key};
pub use selection::Selection;
pub use translate::{to_canonical_offset, to_display_offset};
