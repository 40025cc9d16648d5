//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod menus;
mod pointer_capture;
mod taskbar;
mod tray;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    a11y::{focus_element_by_id, handle_menu_roving_keydown},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps,
    model::{DesktopState, PointerPosition, ResizeEdge, TrayPopover, WindowIdentity, WindowRect},
    reducer::DesktopAction,
    window_manager::LayoutMode,
};
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Icon, IconName,
    IconSize,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn is_activation_key(key: &str) -> bool {
    key == "Enter"
}

fn layout_token(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Mobile => "mobile",
        LayoutMode::Desktop => "desktop",
    }
}

#[component]
/// Renders the desktop: icons, open windows, taskbar, start menu, and tray popovers.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let settings = Signal::derive(move || state.with(|desktop| desktop.settings));

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let overlays_open =
            state.with_untracked(|desktop| desktop.start_menu.open || desktop.open_popover.is_some());
        if overlays_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::DismissOverlays);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            lang=move || settings.get().locale.tag()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-theme=move || settings.get().theme.token()
            data-accent=move || settings.get().accent.token()
            data-locale=move || settings.get().locale.tag()
            data-cursor=move || if settings.get().custom_cursor { "custom" } else { "system" }
            data-layout=move || layout_token(runtime.layout_mode())
        >
            <DesktopBackdrop>
                <DesktopIconGrid>
                    {apps::window_registry()
                        .iter()
                        .map(|desc| {
                            let id = desc.id;
                            view! {
                                <DesktopIconButton
                                    title=desc.title
                                    on_dblclick=Callback::new(move |_| runtime.open(id))
                                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                                        if is_activation_key(&ev.key()) {
                                            ev.prevent_default();
                                            runtime.open(id);
                                        }
                                    })
                                >
                                    <span>
                                        <Icon icon=desc.icon size=IconSize::Lg />
                                    </span>
                                    <span>{desc.desktop_icon_label}</span>
                                </DesktopIconButton>
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|desktop| desktop.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                        key=|id| *id
                        let:id
                    >
                        <DesktopWindow id=id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <Taskbar />
        </div>
    }
}
