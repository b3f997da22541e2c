//! Caret placement around re-formatting.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indexes past the end clamp to `value.len()`; an index into the middle of
/// a multi-byte character moves back to that character's start. Host
/// buffers can contain pasted non-ASCII text, so every caret that crosses
/// the host boundary goes through here before being used to slice.
///
/// # Examples
///
/// ```
/// use mask_core::clamp_to_char_boundary;
///
/// let s = "+3 æ"; // 'æ' is 2 bytes
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 4), 3); // mid 'æ'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
pub fn clamp_to_char_boundary(value: &str, index: usize) -> usize {
    let mut index = index.min(value.len());
    while index > 0 && !value.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Shift a caret recorded against `old` by the length delta of a re-format
/// that produced `new`.
///
/// This is the caret rule for in-place edits: a caret sitting after the
/// text the user just typed stays visually after it when formatting inserts
/// or removes separators to the left. The result is clamped to `new`.
pub fn shifted_caret(old: &str, new: &str, caret: usize) -> usize {
    let caret = clamp_to_char_boundary(old, caret) as isize;
    let diff = new.len() as isize - old.len() as isize;
    let shifted = (caret + diff).clamp(0, new.len() as isize) as usize;
    clamp_to_char_boundary(new, shifted)
}

/// Byte index immediately after the last ASCII digit in `value`.
///
/// Falls back to `value.len()` when the buffer has no digits. This is where
/// the caret lands after a backspace pass, which always re-renders the tail
/// of the number.
pub fn caret_after_last_digit(value: &str) -> usize {
    value
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(value.len())
}
