#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{digit_stream, format_phone};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let out = format_phone(&input);

    assert_eq!(format_phone(&out), out);
    if !out.is_empty() {
        assert!(out.starts_with('+'));
        assert_eq!(out.matches('+').count(), 1);
    }
    assert!(out.chars().all(|c| {
        c == '+' || c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')')
    }));
    if let Some(last) = out.chars().next_back() {
        assert!(!(last.is_whitespace() || matches!(last, '-' | '(' | ')')));
    }
    // A dial code prepend adds at most a few digits; anything beyond that
    // bound means rendering invented digits.
    assert!(digit_stream(&out).len() <= digit_stream(&input).len() + 3);
});
