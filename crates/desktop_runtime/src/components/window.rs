use super::*;
use crate::window_manager::{LayoutMode, WindowMode, WindowViewState};
use pointer_capture::{release_capture, CaptureSlot, PointerCaptureSession};
use system_ui::{ResizeHandle, WindowBody, WindowControlButton, WindowFrame, WindowTitleBar};

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    ev.button() == 0 && ev.is_primary()
}

fn frame_style(rect: WindowRect, stack_order: u32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, stack_order
    )
}

/// Attaches window-level move/end listeners for the gesture `view_state` just started.
fn capture_gesture(view_state: RwSignal<WindowViewState>, capture: CaptureSlot) {
    release_capture(capture);
    let session = PointerCaptureSession::attach(
        move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            view_state.update(|vs| {
                vs.drag_to(pointer);
                vs.resize_to(pointer);
            });
        },
        move |_| {
            view_state.update(|vs| {
                vs.end_gesture();
            });
            release_capture(capture);
        },
    );
    capture.set_value(Some(session));
}

#[component]
pub(super) fn DesktopWindow(id: WindowIdentity) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let title = apps::window_title(id);
    let view_state = create_rw_signal(WindowViewState::initial(
        id,
        runtime.viewport.get_untracked(),
        runtime.layout.get_value(),
    ));
    let capture: CaptureSlot = store_value(None);
    on_cleanup(move || release_capture(capture));

    let entry = create_memo(move |_| runtime.state.with(|desktop| desktop.window(id).copied()));
    let minimized = Signal::derive(move || entry.get().map(|w| w.minimized).unwrap_or(true));
    let is_active = Signal::derive(move || runtime.state.with(|desktop| desktop.is_active(id)));
    let mode = Signal::derive(move || view_state.with(WindowViewState::mode));
    let maximized = Signal::derive(move || mode.get() == WindowMode::Maximized);
    let dragging = Signal::derive(move || mode.get() == WindowMode::Dragging);
    let floating = Signal::derive(move || {
        view_state.with(|vs| !vs.maximized && vs.layout_mode() == LayoutMode::Desktop)
    });
    let maximize_visible =
        Signal::derive(move || view_state.with(WindowViewState::maximize_control_visible));
    let style = Signal::derive(move || {
        let rect = view_state.with(WindowViewState::frame_rect);
        let stack_order = entry.get().map(|w| w.stack_order).unwrap_or_default();
        frame_style(rect, stack_order)
    });

    create_effect(move |_| {
        let viewport = runtime.viewport.get();
        if view_state.with_untracked(|vs| vs.viewport) == viewport {
            return;
        }
        let mut cancelled = false;
        view_state.update(|vs| cancelled = vs.apply_viewport(viewport));
        if cancelled {
            release_capture(capture);
        }
    });

    create_effect(move |_| {
        if !minimized.get() {
            return;
        }
        if view_state.with_untracked(|vs| vs.drag.is_some() || vs.resize.is_some()) {
            view_state.update(|vs| {
                vs.end_gesture();
            });
        }
        release_capture(capture);
    });

    let focus = move |_| {
        if !is_active.get_untracked() {
            runtime.focus(id);
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        let started = view_state
            .try_update(|vs| vs.begin_drag(pointer))
            .unwrap_or(false);
        if started {
            ev.prevent_default();
            capture_gesture(view_state, capture);
        }
    };
    let begin_resize = move |edge: ResizeEdge, ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.stop_propagation();
        if !is_active.get_untracked() {
            runtime.focus(id);
        }
        let pointer = pointer_from_pointer_event(&ev);
        let started = view_state
            .try_update(|vs| vs.begin_resize(edge, pointer))
            .unwrap_or(false);
        if started {
            ev.prevent_default();
            capture_gesture(view_state, capture);
        }
    };
    let toggle_maximize = move || {
        release_capture(capture);
        view_state.update(|vs| {
            vs.toggle_maximize();
        });
    };
    let minimize = move |_| {
        release_capture(capture);
        runtime.minimize(id);
    };
    let close = move |_| runtime.close(id);
    let maximize_label = Signal::derive(move || {
        if maximized.get() {
            "Restore window".to_string()
        } else {
            "Maximize window".to_string()
        }
    });
    let maximize_icon = Signal::derive(move || {
        if maximized.get() {
            IconName::WindowRestore
        } else {
            IconName::WindowMaximize
        }
    });

    view! {
        <Show when=move || !minimized.get() fallback=|| ()>
            <WindowFrame
                id=id.dom_id()
                layout_class=id.as_str()
                style=style
                aria_label=title
                active=is_active
                maximized=maximized
                dragging=dragging
                on_pointerdown=Callback::new(focus)
            >
                <WindowTitleBar
                    draggable=floating
                    on_pointerdown=Callback::new(begin_drag)
                    on_dblclick=Callback::new(move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        toggle_maximize();
                    })
                >
                    <div class="ui-window-title">
                        <Icon icon=apps::window_icon(id) size=IconSize::Sm />
                        <span>{title}</span>
                    </div>
                    <div class="ui-window-controls">
                        <WindowControlButton
                            aria_label="Minimize window"
                            ui_slot="minimize"
                            on_click=Callback::new(minimize)
                        >
                            <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                        </WindowControlButton>
                        <Show when=move || maximize_visible.get() fallback=|| ()>
                            <WindowControlButton
                                aria_label=maximize_label
                                ui_slot="maximize"
                                on_click=Callback::new(move |_| toggle_maximize())
                            >
                                {move || view! { <Icon icon=maximize_icon.get() size=IconSize::Xs /> }}
                            </WindowControlButton>
                        </Show>
                        <WindowControlButton
                            aria_label="Close window"
                            ui_slot="close"
                            on_click=Callback::new(close)
                        >
                            <Icon icon=IconName::Dismiss size=IconSize::Xs />
                        </WindowControlButton>
                    </div>
                </WindowTitleBar>
                <WindowBody>
                    {runtime.content.with_value(|content| content.render(id))}
                </WindowBody>
                <Show when=move || floating.get() fallback=|| ()>
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| {
                            view! {
                                <ResizeHandle
                                    edge=edge.slot()
                                    on_pointerdown=Callback::new(move |ev| begin_resize(edge, ev))
                                />
                            }
                        })
                        .collect_view()}
                </Show>
            </WindowFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_style_places_and_stacks() {
        let rect = WindowRect {
            x: 190,
            y: 66,
            w: 900,
            h: 620,
        };
        assert_eq!(
            frame_style(rect, 12),
            "left:190px;top:66px;width:900px;height:620px;z-index:12;"
        );
    }
}
