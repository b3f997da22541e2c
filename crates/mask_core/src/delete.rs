//! Unit-aware backward deletion.
//!
//! Backspace in a formatted number removes a logical unit, not a character:
//! the separator run directly left of the caret (if any) plus at most one
//! digit. Deleting bare punctuation would be futile, since the follow-up
//! re-format puts it straight back.

use crate::caret::clamp_to_char_boundary;
use crate::digits::is_separator;
use std::ops::Range;

/// What a backspace at a given caret position should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackspacePlan {
    /// Caret at the start; nothing to delete, the host default may run.
    Noop,
    /// The leading `+` was hit; the whole buffer clears.
    ClearAll,
    /// Splice this byte range out of the buffer, then re-format.
    ///
    /// The range can be empty when the character left of the caret is
    /// neither separator nor digit; re-formatting purges such junk anyway.
    Remove(Range<usize>),
}

/// Plan a backspace against `value` with the caret at byte `pos`.
///
/// The plan consumes one run of separator characters walking left from the
/// caret, then at most one ASCII digit. It never consumes two digits.
///
/// # Examples
///
/// ```
/// use mask_core::{BackspacePlan, backspace_plan};
///
/// // Caret after ") " removes the digit and both separator characters.
/// assert_eq!(backspace_plan("+38 (099) ", 10), BackspacePlan::Remove(7..10));
/// assert_eq!(backspace_plan("+38", 1), BackspacePlan::ClearAll);
/// assert_eq!(backspace_plan("+38", 0), BackspacePlan::Noop);
/// ```
pub fn backspace_plan(value: &str, pos: usize) -> BackspacePlan {
    let pos = clamp_to_char_boundary(value, pos);
    if pos == 0 {
        return BackspacePlan::Noop;
    }
    if pos == 1 && value.starts_with('+') {
        return BackspacePlan::ClearAll;
    }

    let mut start = pos;
    for (i, c) in value[..pos].char_indices().rev() {
        if is_separator(c) {
            start = i;
        } else {
            break;
        }
    }
    if let Some(c) = value[..start].chars().next_back()
        && c.is_ascii_digit()
    {
        start -= c.len_utf8();
    }
    BackspacePlan::Remove(start..pos)
}
