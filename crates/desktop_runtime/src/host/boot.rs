use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, reducer::DesktopAction, settings::load_settings};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            match load_settings(prefs.as_ref()).await {
                Ok(Some(settings)) => dispatch.call(DesktopAction::HydrateSettings { settings }),
                Ok(None) => {}
                Err(err) => logging::warn!("load settings failed, using defaults: {err}"),
            }
        });
    });
}
