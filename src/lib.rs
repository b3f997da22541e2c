//! # telmask
//!
//! Incremental phone-number formatting: country detection by dial code,
//! live digit grouping, caret tracking, unit-aware backspace, and a
//! remaining-mask hint.
//!
//! The workspace splits along the embedding seams:
//! - [`rules`]: the static country rule catalog
//! - [`mask_core`]: the pure formatting/caret/deletion/hint engine
//! - [`field`]: per-field state and the host-facing event dispatch
//!
//! This crate re-exports the pieces most embedders need. A host implements
//! [`FieldHost`] for its input widget, calls [`attach`] once per field, and
//! forwards key-down, change, paste, focus, and blur notifications to the
//! `on_*` entry points.

pub use field::{
    FieldHost, FieldId, FieldKey, FieldMeta, FieldStore, attach, on_blur, on_focus, on_key_down,
    on_paste, on_value_changed,
};
pub use mask_core::{
    BackspacePlan, DEFAULT_MASK, DEFAULT_MAX_DIGITS, HintState, active_rule, backspace_plan,
    caret_after_last_digit, clamp_to_char_boundary, digit_stream, format_phone, hint_state,
    shifted_caret,
};
pub use rules::{CountryRule, RULES, Segment, find_rule};
