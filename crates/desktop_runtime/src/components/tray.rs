use super::*;
use crate::settings::{AccentColor, DesktopSettings, Locale};
use system_ui::PopoverSurface;

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const WEEKDAYS_ES: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Wall-clock reading used by the taskbar clock and its calendar popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ClockSnapshot {
    pub year: u32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub(super) fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                weekday: 4,
                hour: 0,
                minute: 0,
            }
        }
    }

    pub(super) fn time_label(&self, locale: Locale) -> String {
        if locale.uses_24_hour_clock() {
            return format!("{:02}:{:02}", self.hour, self.minute);
        }
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }

    pub(super) fn date_label(&self, locale: Locale) -> String {
        let weekday = (self.weekday % 7) as usize;
        let month = (self.month.clamp(1, 12) - 1) as usize;
        match locale {
            Locale::En => format!(
                "{}, {} {}, {}",
                WEEKDAYS_EN[weekday], MONTHS_EN[month], self.day, self.year
            ),
            Locale::Es => format!(
                "{}, {} de {} de {}",
                WEEKDAYS_ES[weekday], self.day, MONTHS_ES[month], self.year
            ),
        }
    }

    pub(super) fn month_title(&self, locale: Locale) -> String {
        let month = (self.month.clamp(1, 12) - 1) as usize;
        match locale {
            Locale::En => format!("{} {}", MONTHS_EN[month], self.year),
            Locale::Es => format!("{} de {}", MONTHS_ES[month], self.year),
        }
    }

    /// Calendar cells for the current month, Sunday-first, with `None` padding before day 1.
    pub(super) fn month_grid(&self) -> Vec<Option<u32>> {
        let first_weekday = (self.weekday + 35 - (self.day - 1) % 7) % 7;
        let mut cells: Vec<Option<u32>> = vec![None; first_weekday as usize];
        cells.extend((1..=days_in_month(self.year, self.month)).map(Some));
        cells
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[component]
pub(super) fn TrayPopovers(clock_now: RwSignal<ClockSnapshot>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open_popover = Signal::derive(move || runtime.state.with(|desktop| desktop.open_popover));

    view! {
        <Show when=move || open_popover.get() == Some(TrayPopover::Clock) fallback=|| ()>
            <ClockPopover clock_now=clock_now />
        </Show>
        <Show when=move || open_popover.get() == Some(TrayPopover::QuickSettings) fallback=|| ()>
            <QuickSettingsPopover />
        </Show>
        <Show when=move || open_popover.get() == Some(TrayPopover::Widgets) fallback=|| ()>
            <WidgetsPopover />
        </Show>
    }
}

#[component]
fn ClockPopover(clock_now: RwSignal<ClockSnapshot>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let locale = Signal::derive(move || runtime.state.with(|desktop| desktop.settings.locale));

    view! {
        <PopoverSurface
            id=TrayPopover::Clock.dom_id()
            aria_label="Calendar"
            layout_class="tray-clock-popover"
        >
            <p class="tray-clock-time">{move || clock_now.get().time_label(locale.get())}</p>
            <p class="tray-clock-date">{move || clock_now.get().date_label(locale.get())}</p>
            <div class="tray-calendar" role="grid" aria-label=move || clock_now.get().month_title(locale.get())>
                <div class="tray-calendar-title">{move || clock_now.get().month_title(locale.get())}</div>
                {move || {
                    let now = clock_now.get();
                    now.month_grid()
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) => view! {
                                <span
                                    class="tray-calendar-day"
                                    role="gridcell"
                                    aria-current=(day == now.day).then_some("date")
                                >
                                    {day}
                                </span>
                            }
                            .into_view(),
                            None => view! { <span class="tray-calendar-pad" aria-hidden="true"></span> }
                                .into_view(),
                        })
                        .collect_view()
                }}
            </div>
        </PopoverSurface>
    }
}

#[component]
fn QuickSettingsPopover() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let settings = Signal::derive(move || runtime.state.with(|desktop| desktop.settings));
    let update = move |action: DesktopAction| runtime.dispatch_action(action);

    view! {
        <PopoverSurface
            id=TrayPopover::QuickSettings.dom_id()
            aria_label="Quick settings"
            layout_class="tray-quick-settings-popover"
        >
            <button
                type="button"
                class="quick-setting"
                data-ui-slot="theme"
                on:click=move |_| update(DesktopAction::SetTheme {
                    theme: settings.get_untracked().theme.next(),
                })
            >
                {move || format!("Theme: {}", settings.get().theme.label())}
            </button>
            <div class="quick-setting-accents" role="radiogroup" aria-label="Accent color">
                {AccentColor::ALL
                    .into_iter()
                    .map(|accent| {
                        view! {
                            <button
                                type="button"
                                role="radio"
                                class="quick-setting-accent"
                                data-accent=accent.token()
                                aria-label=accent.label()
                                aria-checked=move || (settings.get().accent == accent).to_string()
                                on:click=move |_| update(DesktopAction::SetAccent { accent })
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                type="button"
                class="quick-setting"
                data-ui-slot="locale"
                on:click=move |_| update(DesktopAction::SetLocale {
                    locale: settings.get_untracked().locale.next(),
                })
            >
                {move || settings.get().locale.label()}
            </button>
            <button
                type="button"
                role="switch"
                class="quick-setting"
                data-ui-slot="cursor"
                aria-checked=move || settings.get().custom_cursor.to_string()
                on:click=move |_| update(DesktopAction::SetCustomCursor {
                    enabled: !settings.get_untracked().custom_cursor,
                })
            >
                "Custom cursor"
            </button>
            <button
                type="button"
                class="quick-setting"
                data-ui-slot="reset"
                on:click=move |_| {
                    let defaults = DesktopSettings::default();
                    update(DesktopAction::SetTheme { theme: defaults.theme });
                    update(DesktopAction::SetAccent { accent: defaults.accent });
                    update(DesktopAction::SetLocale { locale: defaults.locale });
                    update(DesktopAction::SetCustomCursor { enabled: defaults.custom_cursor });
                }
            >
                "Reset"
            </button>
        </PopoverSurface>
    }
}

/// One-line summary of what the desktop is doing, shown in the widgets panel.
fn activity_summary(state: &DesktopState) -> String {
    match state.active {
        Some(id) => format!("Now viewing: {}", apps::window_title(id)),
        None if state.windows.is_empty() => "Nothing open yet".to_string(),
        None => "All windows in the background".to_string(),
    }
}

#[component]
fn WidgetsPopover() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <PopoverSurface
            id=TrayPopover::Widgets.dom_id()
            aria_label="Widgets"
            layout_class="tray-widgets-popover"
        >
            <p class="widget-activity">{move || state.with(activity_summary)}</p>
            <dl class="widget-counts">
                <dt>"Open windows"</dt>
                <dd>{move || state.with(|desktop| desktop.windows.len())}</dd>
                <dt>"Minimized"</dt>
                <dd>{move || state.with(DesktopState::minimized_count)}</dd>
            </dl>
        </PopoverSurface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowState;

    fn snapshot(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            year: 2024,
            month: 3,
            day: 5,
            weekday: 2,
            hour,
            minute,
        }
    }

    #[test]
    fn english_clock_is_twelve_hour() {
        assert_eq!(snapshot(0, 7).time_label(Locale::En), "12:07 AM");
        assert_eq!(snapshot(12, 0).time_label(Locale::En), "12:00 PM");
        assert_eq!(snapshot(14, 5).time_label(Locale::En), "2:05 PM");
    }

    #[test]
    fn spanish_clock_is_twenty_four_hour() {
        assert_eq!(snapshot(14, 5).time_label(Locale::Es), "14:05");
        assert_eq!(snapshot(0, 7).time_label(Locale::Es), "00:07");
    }

    #[test]
    fn date_labels_follow_locale() {
        assert_eq!(snapshot(9, 0).date_label(Locale::En), "Tuesday, March 5, 2024");
        assert_eq!(
            snapshot(9, 0).date_label(Locale::Es),
            "martes, 5 de marzo de 2024"
        );
        assert_eq!(snapshot(9, 0).month_title(Locale::Es), "marzo de 2024");
    }

    #[test]
    fn month_grid_pads_to_first_weekday() {
        // 1 March 2024 was a Friday.
        let grid = snapshot(9, 0).month_grid();
        assert_eq!(&grid[..6], &[None, None, None, None, None, Some(1)]);
        assert_eq!(grid.len(), 5 + 31);
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
    }

    #[test]
    fn activity_summary_names_active_window() {
        let mut state = DesktopState::default();
        assert_eq!(activity_summary(&state), "Nothing open yet");

        state.windows.push(WindowState {
            id: WindowIdentity::Projects,
            minimized: true,
            stack_order: 10,
        });
        assert_eq!(activity_summary(&state), "All windows in the background");

        state.active = Some(WindowIdentity::Projects);
        assert_eq!(activity_summary(&state), "Now viewing: Projects");
    }
}
