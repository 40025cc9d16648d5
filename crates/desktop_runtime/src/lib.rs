//! Window manager runtime for the portfolio desktop.
//!
//! [`reduce_desktop`] owns which windows are open, how they stack, and which one is active.
//! [`window_manager`] owns per-window geometry. [`DesktopProvider`] hosts both inside a Leptos
//! tree and executes the side effects the reducer requests through injected host services.

pub mod apps;
pub mod components;
pub mod content;
mod effect_executor;
pub mod host;
pub mod launcher;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod settings;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use content::WindowContentRegistry;
pub use launcher::search_launch_items;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use settings::{
    load_settings, save_settings, AccentColor, DesktopSettings, Locale, SettingsError, ThemeMode,
    SETTINGS_PREF_KEY,
};
pub use window_manager::{DesktopLayoutConfig, LayoutMode, WindowMode, WindowViewState};
