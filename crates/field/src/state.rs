//! Per-field state kept by the store.

use mask_core::DEFAULT_MAX_DIGITS;

/// The metadata last pushed to the host for a field.
///
/// Hosts mirror this into externally visible attributes (the digit budget
/// as a string, the country code or an empty string); the store keeps the
/// typed form so callers can query it without parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub max_digits: usize,
    pub country: Option<&'static str>,
}

impl Default for FieldMeta {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            country: None,
        }
    }
}

/// State for a single attached field.
///
/// Not exposed publicly; managed by [`FieldStore`](crate::FieldStore) and
/// inspected only by the dispatch layer.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldState {
    /// Whether the field currently has focus.
    pub focused: bool,

    /// Set when a format pass wrote the buffer; the next change
    /// notification for the field is its echo and must be swallowed.
    pub formatting: bool,

    /// Same, for the backspace path.
    pub deleting: bool,

    /// Metadata as of the last hint push.
    pub meta: FieldMeta,
}

impl FieldState {
    /// Consume a pending echo mark. Returns `true` when one was set.
    pub fn take_echo(&mut self) -> bool {
        let pending = self.formatting || self.deleting;
        self.formatting = false;
        self.deleting = false;
        pending
    }

    /// Whether a programmatic write has not yet been echoed back.
    pub fn echo_pending(&self) -> bool {
        self.formatting || self.deleting
    }
}
