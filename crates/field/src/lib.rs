//! # field
//!
//! Per-field state and event dispatch around the pure `mask_core` engine.
//!
//! The split mirrors how the engine is meant to be embedded: a host (DOM
//! bridge, GUI widget, test harness) owns the visible buffer and caret, and
//! forwards its raw notifications here. This crate owns everything mutable
//! per field: the focus flag, the echo-suppression flags, and the last
//! pushed metadata.
//!
//! ## Host contract
//!
//! Programmatic writes made by this crate (`set_value`) may be surfaced by
//! the host as a change notification, just like a user edit. A host that
//! does so must deliver that echo before any further user-origin
//! notification for the same field. The dispatch layer marks each write and
//! swallows exactly one following [`on_value_changed`]; hosts that never
//! echo (the DOM does not) cost nothing, because any stale mark is cleared
//! on the next user key-down.
//!
//! Paste and focus notifications must be delivered once the new buffer
//! content is readable (for DOM hosts: the next turn of the event queue).

mod host;
mod id;
mod route;
mod state;
mod store;

pub use host::FieldHost;
pub use id::FieldId;
pub use route::{FieldKey, attach, on_blur, on_focus, on_key_down, on_paste, on_value_changed};
pub use state::FieldMeta;
pub use store::FieldStore;
