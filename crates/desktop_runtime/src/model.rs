use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::DesktopSettings;

/// First stack order handed out. Everything below it belongs to the backdrop and icon layers.
pub const STACK_ORDER_BASELINE: u32 = 10;

/// Content page a window displays. Also the unique key of an open window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WindowIdentity {
    About,
    Projects,
    Experience,
    Contact,
}

impl WindowIdentity {
    /// Every identity, in desktop-icon order. Placement cascades by position in this list.
    pub const ALL: [Self; 4] = [Self::About, Self::Projects, Self::Experience, Self::Contact];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Projects => 1,
            Self::Experience => 2,
            Self::Contact => 3,
        }
    }

    /// DOM id of the window frame, used for keyboard focus hand-off.
    pub fn dom_id(self) -> String {
        format!("desktop-window-{}", self.as_str())
    }
}

impl fmt::Display for WindowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window identity `{0}`")]
pub struct ParseWindowIdentityError(pub String);

impl FromStr for WindowIdentity {
    type Err = ParseWindowIdentityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseWindowIdentityError(raw.to_string()))
    }
}

/// Canonical record of one open window. Owned by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowIdentity,
    pub minimized: bool,
    pub stack_order: u32,
}

/// Read-only projection rendered as one taskbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowIdentity,
    pub minimized: bool,
    pub is_active: bool,
}

/// System-tray popovers. At most one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrayPopover {
    Clock,
    QuickSettings,
    Widgets,
}

impl TrayPopover {
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Clock => "tray-clock-popover",
            Self::QuickSettings => "tray-quick-settings-popover",
            Self::Widgets => "tray-widgets-popover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartMenuState {
    pub open: bool,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    /// Open windows in the order they were first opened.
    pub windows: Vec<WindowState>,
    pub active: Option<WindowIdentity>,
    /// Next value handed out by the stack counter. Saturates at `u32::MAX`, after which raised
    /// windows share that order.
    pub next_stack_order: u32,
    pub start_menu: StartMenuState,
    pub open_popover: Option<TrayPopover>,
    pub settings: DesktopSettings,
    /// Set once the visitor changes a setting, so a late boot load cannot overwrite it.
    pub settings_edited: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_stack_order: STACK_ORDER_BASELINE,
            start_menu: StartMenuState::default(),
            open_popover: None,
            settings: DesktopSettings::default(),
            settings_edited: false,
        }
    }
}

impl DesktopState {
    pub fn window(&self, id: WindowIdentity) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn is_open(&self, id: WindowIdentity) -> bool {
        self.window(id).is_some()
    }

    /// Open and not minimized.
    pub fn is_visible(&self, id: WindowIdentity) -> bool {
        self.window(id).map(|w| !w.minimized).unwrap_or(false)
    }

    pub fn is_active(&self, id: WindowIdentity) -> bool {
        self.active == Some(id)
    }

    pub fn top_stack_order(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.stack_order).max()
    }

    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        self.windows
            .iter()
            .map(|w| TaskbarEntry {
                id: w.id,
                minimized: w.minimized,
                is_active: self.active == Some(w.id),
            })
            .collect()
    }

    pub fn minimized_count(&self) -> usize {
        self.windows.iter().filter(|w| w.minimized).count()
    }
}

/// Screen-space rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn slot(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identity_tokens_parse_back() {
        for id in WindowIdentity::ALL {
            assert_eq!(id.as_str().parse::<WindowIdentity>(), Ok(id));
        }
        assert_eq!(" Projects ".parse::<WindowIdentity>(), Ok(WindowIdentity::Projects));
    }

    #[test]
    fn unknown_identity_is_rejected() {
        let err = "now".parse::<WindowIdentity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown window identity `now`");
    }

    #[test]
    fn identity_index_matches_catalog_order() {
        for (idx, id) in WindowIdentity::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), idx);
        }
    }

    #[test]
    fn identity_serializes_as_lowercase_token() {
        assert_eq!(
            serde_json::to_string(&WindowIdentity::Experience).unwrap(),
            "\"experience\""
        );
    }

    #[test]
    fn taskbar_entries_mirror_open_order_and_active_flag() {
        let state = DesktopState {
            windows: vec![
                WindowState {
                    id: WindowIdentity::Contact,
                    minimized: true,
                    stack_order: 10,
                },
                WindowState {
                    id: WindowIdentity::About,
                    minimized: false,
                    stack_order: 11,
                },
            ],
            active: Some(WindowIdentity::About),
            ..DesktopState::default()
        };

        assert_eq!(
            state.taskbar_entries(),
            vec![
                TaskbarEntry {
                    id: WindowIdentity::Contact,
                    minimized: true,
                    is_active: false,
                },
                TaskbarEntry {
                    id: WindowIdentity::About,
                    minimized: false,
                    is_active: true,
                },
            ]
        );
        assert_eq!(state.minimized_count(), 1);
        assert_eq!(state.top_stack_order(), Some(11));
    }
}
