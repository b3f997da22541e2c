//! Opaque identifier for a phone input field.
//!
//! A plain `u64` keeps this crate decoupled from any DOM or widget-tree
//! identifier type; integration layers convert at the boundary with `From`.

/// Handle identifying one field within a [`FieldStore`](crate::FieldStore).
///
/// The value carries no meaning here; it is just a map key. Hosts with
/// their own ID scheme provide conversions in their integration layer:
///
/// ```ignore
/// impl From<dom::NodeId> for FieldId {
///     fn from(id: dom::NodeId) -> Self {
///         FieldId::from_raw(id.0 as u64)
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}
