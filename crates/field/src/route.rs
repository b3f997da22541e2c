//! Event dispatch: host notifications in, engine calls and host writes out.

use crate::host::FieldHost;
use crate::id::FieldId;
use crate::state::{FieldMeta, FieldState};
use crate::store::FieldStore;
use mask_core::{
    BackspacePlan, backspace_plan, caret_after_last_digit, format_phone, hint_state,
    shifted_caret,
};

/// The only key distinction the dispatch layer needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKey {
    Backspace,
    Other,
}

/// Attach a field: register it and push the default hint and metadata.
///
/// Idempotent; attaching an already attached field is a no-op and leaves
/// its state untouched.
pub fn attach<H: FieldHost + ?Sized>(store: &mut FieldStore, id: FieldId, host: &mut H) {
    if !store.register(id) {
        log::trace!(target: "telmask.field", "attach: {id:?} already attached");
        return;
    }
    push_meta(host, FieldMeta::default());
    host.set_hint("", "");
    log::trace!(target: "telmask.field", "attach: {id:?}");
}

/// Handle a key-down. Returns `true` when the key was consumed and the
/// host must suppress its default editing for it.
///
/// Backspace is the only key handled here: it runs the unit-deletion plan
/// against the current buffer. Any other key clears a stale echo mark, so
/// a host that never echoes programmatic writes cannot leak one into the
/// next user edit.
pub fn on_key_down<H: FieldHost + ?Sized>(
    store: &mut FieldStore,
    id: FieldId,
    host: &mut H,
    key: FieldKey,
) -> bool {
    let Some(state) = store.state_mut(id) else {
        log::trace!(target: "telmask.field", "key down for unattached {id:?}");
        return false;
    };

    if key != FieldKey::Backspace {
        state.formatting = false;
        state.deleting = false;
        return false;
    }

    let value = host.value().to_string();
    match backspace_plan(&value, host.caret()) {
        BackspacePlan::Noop => false,
        BackspacePlan::ClearAll => {
            log::trace!(target: "telmask.field", "backspace clears {id:?}");
            state.deleting = true;
            host.set_value("");
            host.set_caret(0);
            push_hint(state, host);
            true
        }
        BackspacePlan::Remove(range) => {
            log::trace!(
                target: "telmask.field",
                "backspace on {id:?} removes {range:?} of {value:?}"
            );
            let mut spliced = value;
            spliced.replace_range(range, "");
            let formatted = format_phone(&spliced);
            state.deleting = true;
            host.set_value(&formatted);
            host.set_caret(caret_after_last_digit(&formatted));
            push_hint(state, host);
            true
        }
    }
}

/// Handle a change notification for the field's buffer.
///
/// The first notification after a programmatic write is that write's echo
/// and is swallowed; everything else runs a full format pass and refreshes
/// the hint.
pub fn on_value_changed<H: FieldHost + ?Sized>(store: &mut FieldStore, id: FieldId, host: &mut H) {
    let Some(state) = store.state_mut(id) else {
        log::trace!(target: "telmask.field", "value change for unattached {id:?}");
        return;
    };
    if state.take_echo() {
        log::trace!(target: "telmask.field", "swallowed echo on {id:?}");
        return;
    }
    reformat(state, host);
    push_hint(state, host);
}

/// Handle pasted content, once the host has committed it to the buffer.
pub fn on_paste<H: FieldHost + ?Sized>(store: &mut FieldStore, id: FieldId, host: &mut H) {
    let Some(state) = store.state_mut(id) else {
        log::trace!(target: "telmask.field", "paste for unattached {id:?}");
        return;
    };
    if !state.echo_pending() {
        reformat(state, host);
    }
    push_hint(state, host);
}

/// Handle focus: formats whatever is already in the buffer and shows the
/// hint (the full default mask when the buffer is empty).
pub fn on_focus<H: FieldHost + ?Sized>(store: &mut FieldStore, id: FieldId, host: &mut H) {
    let Some(state) = store.state_mut(id) else {
        log::trace!(target: "telmask.field", "focus for unattached {id:?}");
        return;
    };
    state.focused = true;
    if !state.echo_pending() {
        reformat(state, host);
    }
    push_hint(state, host);
}

/// Handle blur: only the hint changes (an empty blurred field shows none).
pub fn on_blur<H: FieldHost + ?Sized>(store: &mut FieldStore, id: FieldId, host: &mut H) {
    let Some(state) = store.state_mut(id) else {
        log::trace!(target: "telmask.field", "blur for unattached {id:?}");
        return;
    };
    state.focused = false;
    push_hint(state, host);
}

/// Re-derive the formatted value and write it back if it differs,
/// shifting the caret by the length delta.
fn reformat<H: FieldHost + ?Sized>(state: &mut FieldState, host: &mut H) {
    let old = host.value().to_string();
    let new = format_phone(&old);
    if new == old {
        return;
    }
    log::trace!(target: "telmask.field", "reformat {old:?} -> {new:?}");
    let caret = host.caret();
    state.formatting = true;
    host.set_value(&new);
    host.set_caret(shifted_caret(&old, &new, caret));
}

fn push_hint<H: FieldHost + ?Sized>(state: &mut FieldState, host: &mut H) {
    let hint = hint_state(host.value(), state.focused);
    host.set_hint(&hint.entered, &hint.remaining);
    let meta = FieldMeta {
        max_digits: hint.max_digits,
        country: hint.country,
    };
    state.meta = meta;
    push_meta(host, meta);
}

fn push_meta<H: FieldHost + ?Sized>(host: &mut H, meta: FieldMeta) {
    host.set_meta(&meta.max_digits.to_string(), meta.country.unwrap_or(""));
}
