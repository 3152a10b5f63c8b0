//! Position translation between display and canonical offsets.
//!
//! All offsets are character offsets. Neither function fails: offsets past
//! the end saturate.

use super::format::FormatSpec;

/// Map a display offset to the canonical offset it corresponds to.
///
/// Scans the first `display_offset` display characters and counts those that
/// are not formatting characters. Monotonic non-decreasing in `display_offset`.
pub fn to_canonical_offset(
    formatter: &dyn FormatSpec,
    display: &str,
    display_offset: usize,
) -> usize {
    display
        .chars()
        .take(display_offset)
        .filter(|ch| !formatter.is_formatting_char(*ch))
        .count()
}

/// Map a canonical offset to the display offset right after the
/// `canonical_offset`-th canonical character.
///
/// Used to place the caret after a commit. `0` maps to `0`; anything past the
/// last canonical character maps to the display length.
pub fn to_display_offset(
    formatter: &dyn FormatSpec,
    display: &str,
    canonical_offset: usize,
) -> usize {
    if canonical_offset == 0 {
        return 0;
    }

    let mut seen = 0;
    for (i, ch) in display.chars().enumerate() {
        if !formatter.is_formatting_char(ch) {
            seen += 1;
            if seen == canonical_offset {
                return i + 1;
            }
        }
    }
    display.chars().count()
}
