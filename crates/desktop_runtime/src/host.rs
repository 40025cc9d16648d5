//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer output stays pure; everything that touches storage, navigation, focus, or the viewport
//! goes through [`DesktopHostContext`], which wraps the [`HostServices`] bundle injected at mount.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{ExternalUrlService, HostServices, PrefsStore, Viewport};

use crate::{
    model::WindowIdentity,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

impl DesktopHostContext {
    /// Wraps the bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.strategy.as_str()
    }

    /// Current viewport size as reported by the host.
    pub fn viewport(&self) -> Viewport {
        self.services.viewport.viewport()
    }

    /// Loads saved settings after mount and hands them to the reducer.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistSettings => {
                persistence_effects::persist_settings(self.clone(), runtime)
            }
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(self.clone(), &url),
            RuntimeEffect::FocusWindowInput(id) => self.focus_window_input(id),
        }
    }

    /// Moves keyboard focus into the frame of `id` once it has rendered.
    pub fn focus_window_input(&self, id: WindowIdentity) {
        host_ui::focus_window_input(id);
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("services", &self.services)
            .finish()
    }
}
