use super::*;
use menus::StartMenu;
use system_ui::{TaskbarButton, TaskbarSection, TrayButton};
use tray::{ClockSnapshot, TrayPopovers};

const START_BUTTON_ID: &str = "taskbar-start-button";

fn taskbar_window_button_dom_id(id: WindowIdentity) -> String {
    format!("taskbar-window-button-{id}")
}

fn tray_button_dom_id(popover: TrayPopover) -> &'static str {
    match popover {
        TrayPopover::Clock => "tray-clock-button",
        TrayPopover::QuickSettings => "tray-quick-settings-button",
        TrayPopover::Widgets => "tray-widgets-button",
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());
    let start_open = Signal::derive(move || state.with(|desktop| desktop.start_menu.open));
    let popover_open = move |popover: TrayPopover| {
        Signal::derive(move || state.with(|desktop| desktop.open_popover == Some(popover)))
    };
    let toggle_popover = move |popover: TrayPopover| {
        Callback::new(move |_: web_sys::MouseEvent| {
            runtime.dispatch_action(DesktopAction::ToggleTrayPopover { popover })
        })
    };

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Taskbar buttons, the start menu, and popovers stop mousedown propagation, so anything
    // arriving here is an outside click.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        let overlays_open =
            state.with_untracked(|desktop| desktop.start_menu.open || desktop.open_popover.is_some());
        if overlays_open {
            runtime.dispatch_action(DesktopAction::DismissOverlays);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id=START_BUTTON_ID
                    ui_slot="start-button"
                    aria_label="Start"
                    pressed=start_open
                    expanded=start_open
                    controls=menus::START_MENU_ID
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                    })
                >
                    <Icon icon=IconName::Launcher />
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || state.with(|desktop| desktop.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                    key=|id| *id
                    let:id
                >
                    <TaskbarWindowButton id=id />
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray" aria_label="System tray">
                <TrayButton
                    id=tray_button_dom_id(TrayPopover::Widgets)
                    controls=TrayPopover::Widgets.dom_id()
                    aria_label="Widgets"
                    expanded=popover_open(TrayPopover::Widgets)
                    on_click=toggle_popover(TrayPopover::Widgets)
                >
                    <Icon icon=IconName::Widgets />
                </TrayButton>
                <TrayButton
                    id=tray_button_dom_id(TrayPopover::QuickSettings)
                    controls=TrayPopover::QuickSettings.dom_id()
                    aria_label="Quick settings"
                    expanded=popover_open(TrayPopover::QuickSettings)
                    on_click=toggle_popover(TrayPopover::QuickSettings)
                >
                    <Icon icon=IconName::Settings />
                </TrayButton>
                <TrayButton
                    id=tray_button_dom_id(TrayPopover::Clock)
                    controls=TrayPopover::Clock.dom_id()
                    aria_label="Clock and calendar"
                    expanded=popover_open(TrayPopover::Clock)
                    on_click=toggle_popover(TrayPopover::Clock)
                >
                    <span class="taskbar-clock">
                        {move || {
                            let locale = state.with(|desktop| desktop.settings.locale);
                            clock_now.get().time_label(locale)
                        }}
                    </span>
                </TrayButton>
                <TaskbarButton
                    ui_slot="show-desktop"
                    aria_label="Show desktop"
                    on_click=Callback::new(move |_| runtime.show_desktop())
                >
                    <Icon icon=IconName::Desktop size=IconSize::Xs />
                </TaskbarButton>
            </TaskbarSection>

            <StartMenu start_button_id=START_BUTTON_ID />
            <TrayPopovers clock_now=clock_now />
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(id: WindowIdentity) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entry = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.taskbar_entries().into_iter().find(|entry| entry.id == id))
    });
    let is_active = Signal::derive(move || entry.get().map(|e| e.is_active).unwrap_or(false));
    let minimized = Signal::derive(move || entry.get().map(|e| e.minimized).unwrap_or(false));
    let title = apps::window_title(id);

    view! {
        <TaskbarButton
            id=taskbar_window_button_dom_id(id)
            ui_slot="window-button"
            aria_label=title
            pressed=is_active
            minimized=minimized
            on_click=Callback::new(move |_| runtime.toggle_from_taskbar(id))
        >
            <Icon icon=apps::window_icon(id) size=IconSize::Sm />
            <span class="taskbar-window-label">{title}</span>
        </TaskbarButton>
    }
}
