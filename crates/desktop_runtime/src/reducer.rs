//! Window-manager commands, side-effect intents, and the transition function that applies them.

use thiserror::Error;

use crate::{
    model::{DesktopState, TrayPopover, WindowIdentity, WindowState},
    settings::{AccentColor, DesktopSettings, Locale, ThemeMode},
};

#[derive(Debug, Clone, PartialEq)]
/// Commands accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Create the window, or restore and raise it if already open.
    Open {
        /// Window to open.
        id: WindowIdentity,
    },
    /// Remove the window. Closing a window that is not open does nothing.
    Close {
        /// Window to close.
        id: WindowIdentity,
    },
    /// Hide the window while keeping its taskbar entry.
    Minimize {
        /// Window to minimize.
        id: WindowIdentity,
    },
    /// Raise the window and make it active.
    Focus {
        /// Window to focus.
        id: WindowIdentity,
    },
    /// Taskbar click: restore a minimized window, minimize the active one, raise any other.
    ToggleTaskbarWindow {
        /// Window behind the clicked taskbar button.
        id: WindowIdentity,
    },
    /// Minimize every open window.
    ShowDesktop,
    /// Open or close the start menu.
    ToggleStartMenu,
    /// Close the start menu and clear its search.
    CloseStartMenu,
    /// Replace the start-menu search text.
    SetStartMenuQuery {
        /// Raw query text.
        query: String,
    },
    /// Leave the desktop for an external link chosen in the start menu.
    OpenExternalLink {
        /// Destination URL.
        url: String,
    },
    /// Open the popover, or close it if it is already the visible one.
    ToggleTrayPopover {
        /// Popover behind the clicked tray button.
        popover: TrayPopover,
    },
    /// Close the start menu and any open popover (outside click or Escape).
    DismissOverlays,
    /// Switch the color theme.
    SetTheme {
        /// New theme.
        theme: ThemeMode,
    },
    /// Switch the accent color.
    SetAccent {
        /// New accent.
        accent: AccentColor,
    },
    /// Switch the interface locale.
    SetLocale {
        /// New locale.
        locale: Locale,
    },
    /// Turn the decorative cursor on or off.
    SetCustomCursor {
        /// Whether the custom cursor renders.
        enabled: bool,
    },
    /// Replace settings with the values loaded at startup. Does not write them back, and is
    /// ignored once the visitor has changed a setting.
    HydrateSettings {
        /// Settings read from the preference store.
        settings: DesktopSettings,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by [`reduce_desktop`] and executed by the host layer.
pub enum RuntimeEffect {
    /// Write the current settings to the preference store.
    PersistSettings,
    /// Navigate to a URL outside the desktop.
    OpenExternalUrl(String),
    /// Move keyboard focus into the window frame.
    FocusWindowInput(WindowIdentity),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Contract violations reported by [`reduce_desktop`]. State is left untouched when returned.
pub enum ReducerError {
    /// A command that requires an open window named one that is not open.
    #[error("window `{0}` is not open")]
    WindowNotOpen(WindowIdentity),
}

/// Applies `action` to `state` and returns the side effects the host should run.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotOpen`] when `Minimize`, `Focus`, or `ToggleTaskbarWindow`
/// target a window that is not open.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open { id } => {
            if state.is_open(id) {
                bring_to_front(state, id)?;
            } else {
                let stack_order = next_stack_order(state);
                state.windows.push(WindowState {
                    id,
                    minimized: false,
                    stack_order,
                });
                state.active = Some(id);
            }
            close_overlays(state);
            effects.push(RuntimeEffect::FocusWindowInput(id));
        }
        DesktopAction::Close { id } => {
            state.windows.retain(|w| w.id != id);
            if state.active == Some(id) {
                state.active = None;
            }
        }
        DesktopAction::Minimize { id } => minimize_window(state, id)?,
        // Pointer-driven: the browser already moved focus to whatever was clicked.
        DesktopAction::Focus { id } => {
            if !is_front(state, id)? {
                bring_to_front(state, id)?;
            }
        }
        DesktopAction::ToggleTaskbarWindow { id } => {
            let window = *find_window(state, id)?;
            if window.minimized || state.active != Some(id) {
                bring_to_front(state, id)?;
                effects.push(RuntimeEffect::FocusWindowInput(id));
            } else {
                minimize_window(state, id)?;
            }
            close_overlays(state);
        }
        DesktopAction::ShowDesktop => {
            for window in &mut state.windows {
                window.minimized = true;
            }
            state.active = None;
            close_overlays(state);
        }
        DesktopAction::ToggleStartMenu => {
            let open = !state.start_menu.open;
            close_overlays(state);
            state.start_menu.open = open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu.open = false;
            state.start_menu.query.clear();
        }
        DesktopAction::SetStartMenuQuery { query } => {
            state.start_menu.query = query;
        }
        DesktopAction::OpenExternalLink { url } => {
            close_overlays(state);
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::ToggleTrayPopover { popover } => {
            let next = if state.open_popover == Some(popover) {
                None
            } else {
                Some(popover)
            };
            close_overlays(state);
            state.open_popover = next;
        }
        DesktopAction::DismissOverlays => close_overlays(state),
        DesktopAction::SetTheme { theme } => {
            update_settings(state, &mut effects, |s| s.theme = theme)
        }
        DesktopAction::SetAccent { accent } => {
            update_settings(state, &mut effects, |s| s.accent = accent)
        }
        DesktopAction::SetLocale { locale } => {
            update_settings(state, &mut effects, |s| s.locale = locale)
        }
        DesktopAction::SetCustomCursor { enabled } => {
            update_settings(state, &mut effects, |s| s.custom_cursor = enabled)
        }
        DesktopAction::HydrateSettings { settings } => {
            if !state.settings_edited {
                state.settings = settings;
            }
        }
    }

    Ok(effects)
}

fn next_stack_order(state: &mut DesktopState) -> u32 {
    let order = state.next_stack_order;
    state.next_stack_order = state.next_stack_order.saturating_add(1);
    order
}

fn find_window(state: &DesktopState, id: WindowIdentity) -> Result<&WindowState, ReducerError> {
    state
        .windows
        .iter()
        .find(|w| w.id == id)
        .ok_or(ReducerError::WindowNotOpen(id))
}

fn find_window_mut(
    state: &mut DesktopState,
    id: WindowIdentity,
) -> Result<&mut WindowState, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or(ReducerError::WindowNotOpen(id))
}

/// Whether `id` is already the visible, active, topmost window.
fn is_front(state: &DesktopState, id: WindowIdentity) -> Result<bool, ReducerError> {
    let window = find_window(state, id)?;
    Ok(state.active == Some(id)
        && !window.minimized
        && state.top_stack_order() == Some(window.stack_order))
}

/// Restores `id`, gives it the next stack order, and makes it active.
fn bring_to_front(state: &mut DesktopState, id: WindowIdentity) -> Result<(), ReducerError> {
    find_window(state, id)?;
    let stack_order = next_stack_order(state);
    let window = find_window_mut(state, id)?;
    window.minimized = false;
    window.stack_order = stack_order;
    state.active = Some(id);
    Ok(())
}

fn minimize_window(state: &mut DesktopState, id: WindowIdentity) -> Result<(), ReducerError> {
    find_window_mut(state, id)?.minimized = true;
    if state.active == Some(id) {
        state.active = None;
    }
    Ok(())
}

fn close_overlays(state: &mut DesktopState) {
    state.start_menu.open = false;
    state.start_menu.query.clear();
    state.open_popover = None;
}

fn update_settings(
    state: &mut DesktopState,
    effects: &mut Vec<RuntimeEffect>,
    apply: impl FnOnce(&mut DesktopSettings),
) {
    let before = state.settings;
    apply(&mut state.settings);
    if state.settings != before {
        state.settings_edited = true;
        effects.push(RuntimeEffect::PersistSettings);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{TaskbarEntry, STACK_ORDER_BASELINE};

    use WindowIdentity::{About, Contact, Experience, Projects};

    fn apply(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("action applies")
    }

    fn open(state: &mut DesktopState, id: WindowIdentity) {
        apply(state, DesktopAction::Open { id });
    }

    fn order(state: &DesktopState, id: WindowIdentity) -> u32 {
        state.window(id).expect("open").stack_order
    }

    fn assert_unique_identities_and_orders(state: &DesktopState) {
        let mut ids: Vec<_> = state.windows.iter().map(|w| w.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.windows.len(), "duplicate identity");

        let mut orders: Vec<_> = state.windows.iter().map(|w| w.stack_order).collect();
        orders.sort_unstable();
        orders.dedup();
        assert_eq!(orders.len(), state.windows.len(), "duplicate stack order");
    }

    #[test]
    fn first_open_starts_at_baseline_and_activates() {
        let mut state = DesktopState::default();
        let effects = apply(&mut state, DesktopAction::Open { id: About });

        assert_eq!(
            state.windows,
            vec![WindowState {
                id: About,
                minimized: false,
                stack_order: STACK_ORDER_BASELINE,
            }]
        );
        assert_eq!(state.active, Some(About));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(About)]);
    }

    #[test]
    fn open_always_leaves_window_open_and_visible() {
        let mut state = DesktopState::default();
        open(&mut state, Contact);
        apply(&mut state, DesktopAction::Minimize { id: Contact });
        open(&mut state, Contact);
        assert!(state.is_visible(Contact));

        apply(&mut state, DesktopAction::ShowDesktop);
        open(&mut state, Contact);
        assert!(state.is_visible(Contact));
        assert_eq!(state.active, Some(Contact));
    }

    #[test]
    fn focus_raises_older_window_above_newer() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        apply(&mut state, DesktopAction::Focus { id: About });

        assert!(order(&state, Projects) < order(&state, About));
        assert_eq!(state.active, Some(About));
        assert_eq!(
            state.taskbar_entries(),
            vec![
                TaskbarEntry {
                    id: About,
                    minimized: false,
                    is_active: true,
                },
                TaskbarEntry {
                    id: Projects,
                    minimized: false,
                    is_active: false,
                },
            ]
        );
    }

    #[test]
    fn minimize_keeps_taskbar_entry() {
        let mut state = DesktopState::default();
        open(&mut state, Contact);
        apply(&mut state, DesktopAction::Minimize { id: Contact });

        assert!(!state.is_visible(Contact));
        assert_eq!(
            state.taskbar_entries(),
            vec![TaskbarEntry {
                id: Contact,
                minimized: true,
                is_active: false,
            }]
        );
        assert_eq!(state.active, None);
    }

    #[test]
    fn reopen_bumps_without_duplicating() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        let before = order(&state, About);
        open(&mut state, About);

        assert_eq!(state.windows.iter().filter(|w| w.id == About).count(), 1);
        assert_eq!(state.active, Some(About));
        assert!(order(&state, About) > before);
        assert_eq!(state.top_stack_order(), Some(order(&state, About)));
    }

    #[test]
    fn reopening_front_window_takes_next_stack_order() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        let before = order(&state, About);

        let effects = apply(&mut state, DesktopAction::Open { id: About });
        assert_eq!(before, STACK_ORDER_BASELINE);
        assert_eq!(order(&state, About), STACK_ORDER_BASELINE + 1);
        assert_eq!(state.next_stack_order, STACK_ORDER_BASELINE + 2);
        assert_eq!(state.windows.len(), 1);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(About)]);
    }

    #[test]
    fn pointer_focus_never_requests_focus_handoff() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        apply(&mut state, DesktopAction::Minimize { id: Projects });

        let effects = apply(&mut state, DesktopAction::Focus { id: About });
        assert!(effects.is_empty());
        let effects = apply(&mut state, DesktopAction::Focus { id: Projects });
        assert!(effects.is_empty());
        assert_eq!(state.active, Some(Projects));
        assert_eq!(state.top_stack_order(), Some(order(&state, Projects)));
    }

    #[test]
    fn stack_counter_saturates_instead_of_wrapping() {
        let mut state = DesktopState {
            next_stack_order: u32::MAX - 1,
            ..DesktopState::default()
        };
        open(&mut state, About);
        open(&mut state, Projects);

        assert_eq!(order(&state, About), u32::MAX - 1);
        assert_eq!(order(&state, Projects), u32::MAX);
        assert_eq!(state.next_stack_order, u32::MAX);
        assert_eq!(state.top_stack_order(), Some(order(&state, Projects)));
    }

    #[test]
    fn focus_on_two_windows_orders_second_above_first() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        open(&mut state, Experience);

        apply(&mut state, DesktopAction::Focus { id: Projects });
        apply(&mut state, DesktopAction::Focus { id: About });
        assert!(order(&state, About) > order(&state, Projects));
        assert_unique_identities_and_orders(&state);
    }

    #[test]
    fn focusing_front_window_is_a_noop() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        let before = state.clone();

        let effects = apply(&mut state, DesktopAction::Focus { id: Projects });
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn focus_restores_a_minimized_window() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        apply(&mut state, DesktopAction::Minimize { id: About });
        apply(&mut state, DesktopAction::Focus { id: About });
        assert!(state.is_visible(About));
        assert_eq!(state.active, Some(About));
    }

    #[test]
    fn taskbar_toggle_on_active_window_minimizes_it() {
        let mut state = DesktopState::default();
        open(&mut state, Experience);
        let effects = apply(&mut state, DesktopAction::ToggleTaskbarWindow { id: Experience });

        assert!(state.window(Experience).expect("open").minimized);
        assert_eq!(state.active, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn taskbar_toggle_on_minimized_window_restores_to_top() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        apply(&mut state, DesktopAction::Minimize { id: About });
        open(&mut state, Contact);

        let effects = apply(&mut state, DesktopAction::ToggleTaskbarWindow { id: About });
        assert!(state.is_visible(About));
        assert_eq!(state.active, Some(About));
        assert_eq!(state.top_stack_order(), Some(order(&state, About)));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(About)]);
    }

    #[test]
    fn taskbar_toggle_on_inactive_window_raises_it() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);

        apply(&mut state, DesktopAction::ToggleTaskbarWindow { id: About });
        assert_eq!(state.active, Some(About));
        assert!(order(&state, About) > order(&state, Projects));
        assert!(state.is_visible(Projects));
    }

    #[test]
    fn taskbar_toggle_on_visible_window_with_no_active_raises_it() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        apply(&mut state, DesktopAction::Close { id: Projects });
        assert_eq!(state.active, None);

        apply(&mut state, DesktopAction::ToggleTaskbarWindow { id: About });
        assert_eq!(state.active, Some(About));
        assert!(state.is_visible(About));
    }

    #[test]
    fn show_desktop_minimizes_everything_and_keeps_entries() {
        let mut state = DesktopState::default();
        for id in WindowIdentity::ALL {
            open(&mut state, id);
        }
        apply(&mut state, DesktopAction::ShowDesktop);

        assert_eq!(state.windows.len(), 4);
        assert!(state.windows.iter().all(|w| w.minimized));
        assert_eq!(state.active, None);
    }

    #[test]
    fn closing_only_window_empties_collection() {
        let mut state = DesktopState::default();
        open(&mut state, Projects);
        apply(&mut state, DesktopAction::Close { id: Projects });

        assert!(state.windows.is_empty());
        assert_eq!(state.active, None);
    }

    #[test]
    fn closing_active_window_does_not_reassign_focus() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        open(&mut state, Projects);
        apply(&mut state, DesktopAction::Close { id: Projects });

        assert_eq!(state.active, None);
        assert!(state.is_visible(About));
    }

    #[test]
    fn closing_unopened_window_is_a_noop() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        let before = state.clone();
        apply(&mut state, DesktopAction::Close { id: Contact });
        assert_eq!(state, before);
    }

    #[test]
    fn commands_on_unopened_window_report_contract_violation() {
        let mut state = DesktopState::default();
        open(&mut state, About);
        let before = state.clone();

        for action in [
            DesktopAction::Focus { id: Contact },
            DesktopAction::Minimize { id: Contact },
            DesktopAction::ToggleTaskbarWindow { id: Contact },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, action),
                Err(ReducerError::WindowNotOpen(Contact))
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn arbitrary_command_sequences_keep_identities_unique() {
        let mut state = DesktopState::default();
        let ids = WindowIdentity::ALL;
        // Deterministic pseudo-random walk over the command space.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let id = ids[(seed % 4) as usize];
            let action = match (seed >> 8) % 6 {
                0 | 1 => DesktopAction::Open { id },
                2 => DesktopAction::Close { id },
                3 => DesktopAction::Minimize { id },
                4 => DesktopAction::Focus { id },
                _ => DesktopAction::ToggleTaskbarWindow { id },
            };
            let _ = reduce_desktop(&mut state, action);

            assert_unique_identities_and_orders(&state);
            if let Some(active) = state.active {
                assert!(state.is_visible(active), "active window must be visible");
            }
        }
    }

    #[test]
    fn start_menu_and_popovers_are_mutually_exclusive() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::ToggleStartMenu);
        apply(
            &mut state,
            DesktopAction::SetStartMenuQuery {
                query: "proj".to_string(),
            },
        );
        assert!(state.start_menu.open);

        apply(
            &mut state,
            DesktopAction::ToggleTrayPopover {
                popover: TrayPopover::Clock,
            },
        );
        assert!(!state.start_menu.open);
        assert!(state.start_menu.query.is_empty());
        assert_eq!(state.open_popover, Some(TrayPopover::Clock));

        apply(
            &mut state,
            DesktopAction::ToggleTrayPopover {
                popover: TrayPopover::Widgets,
            },
        );
        assert_eq!(state.open_popover, Some(TrayPopover::Widgets));

        apply(
            &mut state,
            DesktopAction::ToggleTrayPopover {
                popover: TrayPopover::Widgets,
            },
        );
        assert_eq!(state.open_popover, None);

        apply(
            &mut state,
            DesktopAction::ToggleTrayPopover {
                popover: TrayPopover::QuickSettings,
            },
        );
        apply(&mut state, DesktopAction::ToggleStartMenu);
        assert_eq!(state.open_popover, None);
        assert!(state.start_menu.open);

        apply(&mut state, DesktopAction::DismissOverlays);
        assert!(!state.start_menu.open);
    }

    #[test]
    fn launching_from_start_menu_closes_and_clears_it() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::ToggleStartMenu);
        apply(
            &mut state,
            DesktopAction::SetStartMenuQuery {
                query: "exp".to_string(),
            },
        );
        open(&mut state, Experience);

        assert_eq!(state.start_menu, Default::default());
        assert!(state.is_visible(Experience));
    }

    #[test]
    fn external_link_emits_open_url_effect() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::ToggleStartMenu);
        let effects = apply(
            &mut state,
            DesktopAction::OpenExternalLink {
                url: "https://github.com/".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://github.com/".to_string()
            )]
        );
        assert!(!state.start_menu.open);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn settings_changes_persist_only_when_value_changes() {
        let mut state = DesktopState::default();
        let effects = apply(
            &mut state,
            DesktopAction::SetTheme {
                theme: ThemeMode::Dark,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistSettings]);
        assert_eq!(state.settings.theme, ThemeMode::Dark);

        let effects = apply(
            &mut state,
            DesktopAction::SetTheme {
                theme: ThemeMode::Dark,
            },
        );
        assert!(effects.is_empty());

        let effects = apply(
            &mut state,
            DesktopAction::SetCustomCursor { enabled: false },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistSettings]);
    }

    #[test]
    fn hydrating_settings_does_not_write_back() {
        let mut state = DesktopState::default();
        let settings = DesktopSettings {
            locale: Locale::Es,
            accent: AccentColor::Orange,
            ..DesktopSettings::default()
        };
        let effects = apply(&mut state, DesktopAction::HydrateSettings { settings });
        assert!(effects.is_empty());
        assert_eq!(state.settings, settings);
        assert!(!state.settings_edited);
    }

    #[test]
    fn late_hydration_keeps_settings_changed_before_load() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::SetLocale { locale: Locale::Es });

        let stored = DesktopSettings {
            theme: ThemeMode::Light,
            ..DesktopSettings::default()
        };
        apply(&mut state, DesktopAction::HydrateSettings { settings: stored });
        assert_eq!(state.settings.locale, Locale::Es);
        assert_eq!(state.settings.theme, DesktopSettings::default().theme);
    }
}
