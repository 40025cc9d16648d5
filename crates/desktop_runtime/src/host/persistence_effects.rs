use leptos::{logging, spawn_local, SignalWithUntracked};

use crate::{host::DesktopHostContext, runtime_context::DesktopRuntimeContext, settings};

pub(super) fn persist_settings(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let current = runtime.state.with_untracked(|state| state.settings);
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = settings::save_settings(prefs.as_ref(), &current).await {
            logging::warn!("persist settings failed: {err}");
        }
    });
}
