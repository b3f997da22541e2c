//! Registry of attached fields.

use crate::id::FieldId;
use crate::state::{FieldMeta, FieldState};
use std::collections::HashMap;

/// Per-field state for every attached phone input.
///
/// The store holds no buffer text; hosts own their buffers and the
/// dispatch layer reads them fresh at every entry point. What lives here
/// is the state that must survive between notifications: focus, the
/// echo-suppression flags, and the last pushed metadata.
#[derive(Clone, Debug, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, FieldState>,
}

impl FieldStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if this field has been attached.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Register a field. Returns `false` if it was already attached.
    pub fn register(&mut self, id: FieldId) -> bool {
        use std::collections::hash_map::Entry;
        match self.fields.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(FieldState::default());
                true
            }
        }
    }

    /// The metadata last pushed for this field, if attached.
    pub fn meta(&self, id: FieldId) -> Option<FieldMeta> {
        self.fields.get(&id).map(|s| s.meta)
    }

    /// Returns `true` if this field is attached and focused.
    pub fn is_focused(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_some_and(|s| s.focused)
    }

    /// Returns `true` if a programmatic write to this field has not yet
    /// been echoed back as a change notification.
    pub fn echo_pending(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_some_and(|s| s.echo_pending())
    }

    /// Drop all field state.
    ///
    /// Typically called on navigation, when every host-side field is gone.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub(crate) fn state_mut(&mut self, id: FieldId) -> Option<&mut FieldState> {
        self.fields.get_mut(&id)
    }
}
