#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{BackspacePlan, backspace_plan, caret_after_last_digit, format_phone};

fuzz_target!(|data: &[u8]| {
    let Some((&pos_byte, rest)) = data.split_first() else {
        return;
    };
    let raw = String::from_utf8_lossy(rest).into_owned();

    match backspace_plan(&raw, pos_byte as usize) {
        BackspacePlan::Noop => {}
        BackspacePlan::ClearAll => assert!(raw.starts_with('+')),
        BackspacePlan::Remove(range) => {
            assert!(range.start <= range.end && range.end <= raw.len());
            assert!(raw.is_char_boundary(range.start));
            assert!(raw.is_char_boundary(range.end));
            let digits = raw[range].chars().filter(|c| c.is_ascii_digit()).count();
            assert!(digits <= 1);
        }
    }

    // The interactive erase loop must drain any buffer in bounded steps.
    let mut value = format_phone(&raw);
    for _ in 0..32 {
        let caret = caret_after_last_digit(&value);
        match backspace_plan(&value, caret) {
            BackspacePlan::Noop => break,
            BackspacePlan::ClearAll => value.clear(),
            BackspacePlan::Remove(range) => {
                value.replace_range(range, "");
                value = format_phone(&value);
            }
        }
    }
    assert!(value.is_empty());
});
