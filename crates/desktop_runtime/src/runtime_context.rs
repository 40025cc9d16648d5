//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the single [`DesktopState`] signal, the effect queue, the viewport signal, and
//! host bootstrap. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{HostServices, Viewport};

use crate::{
    content::WindowContentRegistry,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, TaskbarEntry, WindowIdentity},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager::{DesktopLayoutConfig, LayoutMode},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal. Only `dispatch` writes it.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Browser viewport, refreshed on `resize`.
    pub viewport: RwSignal<Viewport>,
    /// Placement and breakpoint constants.
    pub layout: StoredValue<DesktopLayoutConfig>,
    /// Window body renderers.
    pub content: StoredValue<WindowContentRegistry>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn open(&self, id: WindowIdentity) {
        self.dispatch_action(DesktopAction::Open { id });
    }

    pub fn close(&self, id: WindowIdentity) {
        self.dispatch_action(DesktopAction::Close { id });
    }

    pub fn minimize(&self, id: WindowIdentity) {
        self.dispatch_action(DesktopAction::Minimize { id });
    }

    pub fn focus(&self, id: WindowIdentity) {
        self.dispatch_action(DesktopAction::Focus { id });
    }

    pub fn toggle_from_taskbar(&self, id: WindowIdentity) {
        self.dispatch_action(DesktopAction::ToggleTaskbarWindow { id });
    }

    pub fn show_desktop(&self) {
        self.dispatch_action(DesktopAction::ShowDesktop);
    }

    /// Tracked taskbar snapshot, in open order.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        self.state.with(DesktopState::taskbar_entries)
    }

    /// Tracked layout mode for the current viewport.
    pub fn layout_mode(&self) -> LayoutMode {
        let viewport = self.viewport.get();
        self.layout.with_value(|layout| layout.layout_mode(viewport))
    }
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let handle = window_event_listener(ev::resize, move |_| {
        let next = runtime.host.with_value(DesktopHostContext::viewport);
        if next != runtime.viewport.get_untracked() {
            runtime.viewport.set(next);
        }
    });
    on_cleanup(move || handle.remove());
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .with_value(|host| host.install_boot_hydration(runtime.dispatch));
    install_viewport_tracking(runtime);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and loads saved settings.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Page content rendered inside each window.
    #[prop(optional)]
    content: WindowContentRegistry,
    /// Layout constants; defaults apply when omitted.
    #[prop(optional)]
    layout: Option<DesktopLayoutConfig>,
    children: Children,
) -> impl IntoView {
    let host = DesktopHostContext::new(host_services);
    logging::log!(
        "desktop runtime booting ({} host)",
        host.host_strategy_name()
    );

    let viewport = create_rw_signal(host.viewport());
    let host = store_value(host);
    let layout = store_value(layout.unwrap_or_default());
    let content = store_value(content);
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        viewport,
        layout,
        content,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
