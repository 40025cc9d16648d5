//! Window-level listeners held for the duration of a drag or resize gesture.

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

/// Owns the `pointermove`/`pointerup`/`pointercancel` listeners of one gesture.
///
/// Dropping the session detaches every listener, so releasing it is the same on pointer-up,
/// cancellation, minimize, mobile re-layout, and component cleanup.
pub(super) struct PointerCaptureSession {
    handles: Vec<WindowListenerHandle>,
}

impl PointerCaptureSession {
    /// Attaches gesture listeners. `on_end` receives `pointerup` and `pointercancel`.
    pub(super) fn attach(
        on_move: impl Fn(ev::PointerEvent) + Clone + 'static,
        on_end: impl Fn(ev::PointerEvent) + Clone + 'static,
    ) -> Self {
        let on_cancel = on_end.clone();
        Self {
            handles: vec![
                window_event_listener(ev::pointermove, on_move),
                window_event_listener(ev::pointerup, on_end),
                window_event_listener(ev::pointercancel, on_cancel),
            ],
        }
    }
}

impl Drop for PointerCaptureSession {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

/// Slot a window keeps its live capture session in.
pub(super) type CaptureSlot = StoredValue<Option<PointerCaptureSession>>;

/// Drops the session in `slot`, if any.
pub(super) fn release_capture(slot: CaptureSlot) {
    drop(slot.try_update_value(Option::take));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releasing_an_idle_slot_leaves_it_empty() {
        let owner = create_runtime();
        let slot: CaptureSlot = store_value(None);
        release_capture(slot);
        release_capture(slot);
        assert!(slot.with_value(Option::is_none));
        owner.dispose();
    }
}
