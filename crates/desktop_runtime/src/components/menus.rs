use super::*;
use crate::{
    apps::{LaunchItem, LaunchTarget},
    launcher::search_launch_items,
};
use system_ui::{LauncherMenu, MenuItem};

pub(super) const START_MENU_ID: &str = "desktop-launcher-menu";
const START_SEARCH_ID: &str = "desktop-launcher-search";

fn launch(runtime: DesktopRuntimeContext, item: LaunchItem) {
    match item.target {
        LaunchTarget::Window(id) => runtime.open(id),
        LaunchTarget::External(url) => runtime.dispatch_action(DesktopAction::OpenExternalLink {
            url: url.to_string(),
        }),
    }
}

fn launch_slot(target: LaunchTarget) -> &'static str {
    match target {
        LaunchTarget::Window(_) => "launcher-window",
        LaunchTarget::External(_) => "launcher-link",
    }
}

#[component]
pub(super) fn StartMenu(start_button_id: &'static str) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let is_open = Signal::derive(move || state.with(|desktop| desktop.start_menu.open));
    let query = Signal::derive(move || state.with(|desktop| desktop.start_menu.query.clone()));
    let results = create_memo(move |_| query.with(|query| search_launch_items(query)));

    create_effect(move |was_open: Option<bool>| {
        let open = is_open.get();
        if open && was_open != Some(true) {
            request_animation_frame(|| {
                focus_element_by_id(START_SEARCH_ID);
            });
        }
        open
    });

    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
            focus_element_by_id(start_button_id);
            return;
        }
        handle_menu_roving_keydown(&ev, START_MENU_ID);
    });

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <LauncherMenu id=START_MENU_ID aria_label="Start menu" on_keydown=on_keydown>
                <div class="launcher-search">
                    <Icon icon=IconName::Search size=IconSize::Sm />
                    <input
                        id=START_SEARCH_ID
                        type="search"
                        placeholder="Search pages and links"
                        aria-label="Search"
                        aria-controls="desktop-launcher-results"
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetStartMenuQuery {
                                query: event_target_value(&ev),
                            })
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() != "Enter" {
                                return;
                            }
                            ev.prevent_default();
                            if let Some(first) = results.with_untracked(|items| items.first().copied()) {
                                launch(runtime, first);
                            }
                        }
                    />
                </div>
                <div id="desktop-launcher-results" class="launcher-results" role="group">
                    <For each=move || results.get() key=|item| item.key let:item>
                        <MenuItem
                            id=item.dom_id()
                            ui_slot=launch_slot(item.target)
                            on_click=Callback::new(move |_| launch(runtime, item))
                        >
                            <Icon icon=item.icon size=IconSize::Sm />
                            <span>{item.label}</span>
                            {matches!(item.target, LaunchTarget::External(_)).then(|| {
                                view! { <Icon icon=IconName::Link size=IconSize::Xs /> }
                            })}
                        </MenuItem>
                    </For>
                    <Show when=move || results.with(Vec::is_empty) fallback=|| ()>
                        <p class="launcher-empty" role="status">
                            {move || format!("No results for \u{201c}{}\u{201d}", query.get().trim())}
                        </p>
                    </Show>
                </div>
            </LauncherMenu>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_slots_separate_windows_from_links() {
        let slots: Vec<_> = search_launch_items("")
            .into_iter()
            .map(|item| launch_slot(item.target))
            .collect();
        assert_eq!(slots.iter().filter(|slot| **slot == "launcher-window").count(), 4);
        assert_eq!(slots.iter().filter(|slot| **slot == "launcher-link").count(), 4);
    }
}
