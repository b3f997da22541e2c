#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{DEFAULT_MASK, format_phone, hint_state};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let value = String::from_utf8_lossy(rest);
    let focused = flags & 1 == 1;

    let hint = hint_state(&value, focused);
    assert!(hint.max_digits > 0);

    if value.is_empty() {
        assert!(hint.entered.is_empty());
        if focused {
            assert_eq!(hint.remaining, DEFAULT_MASK);
        } else {
            assert!(hint.remaining.is_empty());
        }
        return;
    }

    assert!(hint.entered.starts_with('+'));
    if hint.country.is_some() {
        assert_eq!(hint.entered, format_phone(&value));
    }
    // The remaining part is an unfilled mask tail: fill marks and
    // separators only, never digits.
    assert!(hint.remaining.chars().all(|c| {
        c == '_' || c.is_whitespace() || matches!(c, '-' | '(' | ')')
    }));
});
