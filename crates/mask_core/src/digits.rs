//! Digit stream extraction.

/// Extract the ASCII digits of `value`, in order, dropping everything else.
///
/// Only `0-9` count; Unicode digit characters from other scripts are
/// treated as noise, the same as punctuation and letters.
///
/// # Examples
///
/// ```
/// use mask_core::digit_stream;
///
/// assert_eq!(digit_stream("+38 (099) 123-45-67"), "380991234567");
/// assert_eq!(digit_stream("call me"), "");
/// ```
pub fn digit_stream(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Separator characters a formatted number may contain between digit groups.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '(' | ')')
}
