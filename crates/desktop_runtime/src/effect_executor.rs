//! Drains reducer-emitted runtime effects through the host context.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executor that runs queued [`crate::RuntimeEffect`] values in emission order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Take the whole batch first so effects that dispatch again enqueue into a fresh queue.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
