//! Hint overlay computation: the entered/remaining split.

use crate::digits::digit_stream;
use crate::format::{DEFAULT_MAX_DIGITS, active_rule, format_phone};

/// Placeholder mask shown before any rule can be resolved.
pub const DEFAULT_MASK: &str = "+_______________";

/// What a mask overlay should show for a buffer, plus the metadata the
/// host mirrors into its attributes.
///
/// `entered` is the canonical rendering of what the user has typed so far;
/// `remaining` is the unfilled tail of the mask. Hosts draw the two with
/// different styling and overlay them on the (visually hidden) buffer text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintState {
    pub entered: String,
    pub remaining: String,
    /// Digit budget of the resolved rule, or [`DEFAULT_MAX_DIGITS`].
    pub max_digits: usize,
    /// Two-letter code of the resolved rule, if any.
    pub country: Option<&'static str>,
}

/// Compute the hint for a buffer.
///
/// An empty buffer shows nothing while blurred and the full default mask
/// while focused. Once digits exist, the entered part is the formatted
/// number and the remaining part is the tail of the matched rule's mask
/// (or of [`DEFAULT_MASK`] when no rule resolves).
pub fn hint_state(value: &str, focused: bool) -> HintState {
    if value.is_empty() {
        let remaining = if focused { DEFAULT_MASK } else { "" };
        return HintState {
            entered: String::new(),
            remaining: remaining.to_string(),
            max_digits: DEFAULT_MAX_DIGITS,
            country: None,
        };
    }

    let display = format_phone(value);
    match active_rule(&display) {
        Some(rule) => {
            let mask = rule.mask();
            let remaining = mask.get(display.len()..).unwrap_or("").to_string();
            HintState {
                entered: display,
                remaining,
                max_digits: rule.max_digits,
                country: Some(rule.code),
            }
        }
        None => {
            let entered = if value.starts_with('+') {
                value.to_string()
            } else {
                let mut entered = digit_stream(value);
                entered.insert(0, '+');
                entered
            };
            let remaining = DEFAULT_MASK.get(entered.len()..).unwrap_or("").to_string();
            HintState {
                entered,
                remaining,
                max_digits: DEFAULT_MAX_DIGITS,
                country: None,
            }
        }
    }
}
