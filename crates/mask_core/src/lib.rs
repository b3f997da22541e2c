//! # mask_core
//!
//! Pure phone-number formatting engine.
//!
//! Every entry point here is a total function over strings: malformed,
//! partial, over-length, and non-ASCII inputs all map to defined outputs,
//! and nothing in this crate panics or performs I/O. The engine re-derives
//! the full formatted string from scratch on every call; there is no
//! incremental patching and no retained state.
//!
//! The building blocks:
//! - [`format_phone`]: raw buffer in, canonical display string out
//! - [`active_rule`]: which country rule a buffer resolves to
//! - [`shifted_caret`] / [`caret_after_last_digit`]: caret placement after
//!   a re-format
//! - [`backspace_plan`]: unit-aware backward deletion (digit plus adjacent
//!   separators)
//! - [`hint_state`]: the entered/remaining split for a mask overlay
//!
//! Per-field state, re-entrancy flags, and host wiring live in the `field`
//! crate; this one stays side-effect free so its semantics can be fuzzed
//! and property-tested directly.

mod caret;
mod delete;
mod digits;
mod format;
mod hint;

pub use caret::{caret_after_last_digit, clamp_to_char_boundary, shifted_caret};
pub use delete::{BackspacePlan, backspace_plan};
pub use digits::digit_stream;
pub use format::{DEFAULT_MAX_DIGITS, active_rule, format_phone};
pub use hint::{DEFAULT_MASK, HintState, hint_state};
