//! The surface a host exposes per field.

/// What the dispatch layer needs from the widget that owns a field.
///
/// One implementor per field (or one dispatching on an id, adapted at the
/// call site). Reads must reflect the buffer as the user currently sees it;
/// writes take effect immediately. Caret positions are byte indices into
/// the buffer; the dispatch layer clamps them to character boundaries
/// before slicing, so hosts may report whatever their native unit rounds
/// to.
pub trait FieldHost {
    /// The current buffer content.
    fn value(&self) -> &str;

    /// The current caret byte position.
    fn caret(&self) -> usize;

    /// Replace the buffer content.
    fn set_value(&mut self, value: &str);

    /// Move the caret.
    fn set_caret(&mut self, caret: usize);

    /// Update the hint overlay: the formatted entered part and the
    /// remaining placeholder tail.
    fn set_hint(&mut self, entered: &str, remaining: &str);

    /// Mirror the digit budget and country code into host attributes.
    ///
    /// `length` is the stringified budget (`"15"` when unresolved);
    /// `country` is a two-letter code or the empty string.
    fn set_meta(&mut self, length: &str, country: &str);
}
