//! Canonical formatting: raw buffer in, display string out.

use crate::digits::digit_stream;
use rules::{CountryRule, Segment, find_rule};

/// Digit cap applied when no country rule matches (ITU-style upper bound).
pub const DEFAULT_MAX_DIGITS: usize = 15;

/// Resolve the country rule a buffer's digits imply, if any.
///
/// Works on raw and already-formatted values alike, since lookup only sees
/// the digit stream.
pub fn active_rule(value: &str) -> Option<&'static CountryRule> {
    find_rule(&digit_stream(value))
}

/// Format a raw buffer into its canonical display form.
///
/// The buffer is reduced to its digit stream and re-rendered from scratch:
/// the matched rule's dial code is shown after `+`, the remaining digits are
/// split into the rule's groups, and separators appear only between groups
/// that contain at least one digit, so output never carries trailing
/// punctuation. Digits past the rule's budget are dropped.
///
/// A buffer whose digits match no rule renders as `+` followed by at most
/// [`DEFAULT_MAX_DIGITS`] digits. A buffer with no digits at all renders as
/// `+` when it started with one, and as the empty string otherwise.
///
/// # Examples
///
/// ```
/// use mask_core::format_phone;
///
/// assert_eq!(format_phone("+380991234567"), "+38 (099) 123-45-67");
/// assert_eq!(format_phone("0991234567"), "+38 (099) 123-45-67");
/// assert_eq!(format_phone("15551234567"), "+1 555 123 4567");
/// assert_eq!(format_phone("+999123"), "+999123");
/// ```
pub fn format_phone(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value == "+" {
        return "+".to_string();
    }

    let mut digits = digit_stream(value);
    if digits.is_empty() {
        return if value.starts_with('+') {
            "+".to_string()
        } else {
            String::new()
        };
    }

    let Some(rule) = find_rule(&digits) else {
        digits.truncate(DEFAULT_MAX_DIGITS);
        digits.insert(0, '+');
        return digits;
    };

    // A domestically entered number keeps its trunk digits; the dial code
    // is prefixed on so both entry forms render identically.
    if let Some(prefix) = rule.local_prefix
        && digits.starts_with(prefix)
    {
        digits.insert_str(0, rule.dial);
    }

    digits.truncate(rule.max_digits);
    render(rule, &digits[rule.dial.len()..])
}

/// Walk the rule's segments, emitting each pending separator only once the
/// group after it has digits to show.
fn render(rule: &CountryRule, mut rest: &str) -> String {
    let mut out = String::with_capacity(1 + rule.dial.len() + rest.len() * 2);
    out.push('+');
    out.push_str(rule.dial);

    let mut pending: Option<&str> = None;
    for seg in rule.segments {
        match seg {
            Segment::Sep(sep) => pending = Some(sep),
            Segment::Group(width) => {
                if rest.is_empty() {
                    break;
                }
                let (group, tail) = rest.split_at((*width).min(rest.len()));
                if let Some(sep) = pending.take() {
                    out.push_str(sep);
                }
                out.push_str(group);
                rest = tail;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_bare_plus_pass_through() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("+"), "+");
    }

    #[test]
    fn digitless_input_reduces_to_its_plus() {
        assert_eq!(format_phone("+abc"), "+");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("()- "), "");
    }

    #[test]
    fn single_digit_renders_after_plus() {
        // "1" resolves to a rule; "3" matches nothing and falls through.
        assert_eq!(format_phone("1"), "+1");
        assert_eq!(format_phone("3"), "+3");
    }

    #[test]
    fn nanp_number_groups_three_three_four() {
        assert_eq!(format_phone("15551234567"), "+1 555 123 4567");
    }

    #[test]
    fn ukraine_international_form() {
        assert_eq!(format_phone("+380991234567"), "+38 (099) 123-45-67");
    }

    #[test]
    fn ukraine_domestic_form_matches_international() {
        assert_eq!(
            format_phone("0991234567"),
            format_phone("+380991234567")
        );
    }

    #[test]
    fn unknown_dial_code_renders_bare_digits() {
        assert_eq!(format_phone("+999123"), "+999123");
    }

    #[test]
    fn unknown_dial_code_caps_at_fifteen_digits() {
        assert_eq!(
            format_phone("+99912345678901234567"),
            "+999123456789012"
        );
    }

    #[test]
    fn known_rule_drops_digits_past_its_budget() {
        // CA caps at 11 digits total.
        assert_eq!(format_phone("155512345679999"), "+1 555 123 4567");
    }

    #[test]
    fn punctuation_in_the_input_is_ignored() {
        assert_eq!(format_phone("+1 (555) 123-4567"), "+1 555 123 4567");
        assert_eq!(format_phone("1-5-5-5-1-2-3-4-5-6-7"), "+1 555 123 4567");
    }

    #[test]
    fn partial_group_renders_without_trailing_separator() {
        assert_eq!(format_phone("+3809"), "+38 (09");
        assert_eq!(format_phone("+38099"), "+38 (099");
        assert_eq!(format_phone("+380991"), "+38 (099) 1");
        assert_eq!(format_phone("+38099123"), "+38 (099) 123");
        assert_eq!(format_phone("+3809912345"), "+38 (099) 123-45");
    }

    #[test]
    fn five_group_layout_renders_in_order() {
        assert_eq!(format_phone("+33612345678"), "+33 6 12 34 56 78");
    }

    #[test]
    fn formatting_is_idempotent() {
        for input in [
            "+380991234567",
            "0991234567",
            "15551234567",
            "+999123",
            "+3809",
            "+",
            "",
        ] {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn active_rule_sees_through_formatting() {
        assert_eq!(active_rule("+38 (099) 123-45-67").unwrap().code, "UA");
        assert_eq!(active_rule("0991234567").unwrap().code, "UA");
        assert_eq!(active_rule("15551234567").unwrap().code, "CA");
        assert!(active_rule("+999123").is_none());
        assert!(active_rule("").is_none());
    }
}
