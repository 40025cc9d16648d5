//! Shell primitives: desktop surface, window chrome, taskbar, and menus.

use leptos::ev::{KeyboardEvent, MouseEvent, PointerEvent};
use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn forward<E>(callback: Option<Callback<E>>, ev: E) {
    if let Some(callback) = callback {
        callback.call(ev);
    }
}

#[component]
/// Wallpaper host. Everything except the taskbar renders inside it.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Column-first grid of desktop icons.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            role="list"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop shortcut. Launching happens on double-click or Enter, never on a single click.
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="listitem"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=title
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |ev| forward(on_dblclick, ev)
            on:keydown=move |ev| forward(on_keydown, ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Positioning context for open windows.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Outer frame of one desktop window. Focusable so keyboard focus can move into it on raise.
pub fn WindowFrame(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            tabindex="-1"
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-active=move || bool_token(active.get())
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-dragging=move || bool_token(dragging.get())
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Title bar; the drag handle for a floating window.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
            on:dblclick=move |ev| forward(on_dblclick, ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Minimize / maximize / close control.
///
/// Pointer and click events stop here so the title bar never starts a drag and the frame never
/// raises the window in response to a control press.
pub fn WindowControlButton(
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=ui_slot
            on:pointerdown=move |ev: PointerEvent| ev.stop_propagation()
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:dblclick=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                forward(on_click, ev);
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Scrollable content area of a window.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Invisible edge or corner grip.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        ></div>
    }
}

#[component]
/// Region of the taskbar (start, running windows, tray).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button reflecting a pressed (active) and optional minimized state.
pub fn TaskbarButton(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] controls: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let has_popup = controls.as_ref().map(|_| "menu");
    let title = aria_label.clone();
    view! {
        <button
            type="button"
            id=id
            class="ui-taskbar-button"
            title=move || title.get()
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            aria-haspopup=has_popup
            aria-controls=controls
            aria-expanded=move || expanded.as_ref().map(|expanded| bool_token(expanded.get()))
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-slot=ui_slot.unwrap_or("taskbar-button")
            data-ui-minimized=move || bool_token(minimized.get())
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev| forward(on_click, ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Tray trigger that toggles a popover.
pub fn TrayButton(
    id: &'static str,
    controls: &'static str,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(into)] expanded: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <TaskbarButton
            id=id
            ui_slot="tray-button"
            aria_label=aria_label
            pressed=expanded.clone()
            expanded=expanded
            controls=controls
            on_click=Callback::new(move |ev| forward(on_click, ev))
        >
            {children()}
        </TaskbarButton>
    }
}

#[component]
/// Floating panel anchored above the taskbar. Clicks inside never count as outside clicks.
pub fn PopoverSurface(
    id: &'static str,
    #[prop(into)] aria_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-popover", layout_class)
            role="dialog"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="popover"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Start menu surface.
pub fn LauncherMenu(
    id: &'static str,
    #[prop(into)] aria_label: String,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-launcher-menu"
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="launcher-menu"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:keydown=move |ev| forward(on_keydown, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry.
pub fn MenuItem(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            role="menuitem"
            class="ui-menu-item"
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-slot=ui_slot
            on:click=move |ev| forward(on_click, ev)
        >
            {children()}
        </button>
    }
}
