//! Visitor settings (theme, accent, locale, cursor) and their preference-store persistence.
//!
//! Settings are read once when the desktop mounts and carried in [`crate::DesktopState`]; every
//! change goes back through the reducer, which asks the host to persist the new value.

use platform_host::PrefsStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preference key holding the serialized [`DesktopSettings`].
pub const SETTINGS_PREF_KEY: &str = "portfolio.settings.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
}

impl AccentColor {
    pub const ALL: [Self; 5] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
        Self::Pink,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// BCP 47 tag written to the shell root's `lang` attribute.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    /// Whether clock times render on a 24-hour dial.
    pub const fn uses_24_hour_clock(self) -> bool {
        matches!(self, Self::Es)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopSettings {
    pub theme: ThemeMode,
    pub accent: AccentColor,
    pub locale: Locale,
    pub custom_cursor: bool,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            accent: AccentColor::Blue,
            locale: Locale::En,
            custom_cursor: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("preference store failed: {0}")]
    Store(String),
    #[error("stored settings are malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reads settings from `store`. `Ok(None)` means the visitor never saved any.
///
/// Unknown or missing fields fall back to their defaults so older payloads keep loading.
///
/// # Errors
///
/// Returns [`SettingsError::Store`] when the store fails and [`SettingsError::Decode`] when the
/// stored document is not valid settings JSON.
pub async fn load_settings(
    store: &dyn PrefsStore,
) -> Result<Option<DesktopSettings>, SettingsError> {
    let Some(raw) = store
        .load_pref(SETTINGS_PREF_KEY)
        .await
        .map_err(SettingsError::Store)?
    else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Writes `settings` to `store`.
///
/// # Errors
///
/// Returns [`SettingsError::Store`] when the write fails.
pub async fn save_settings(
    store: &dyn PrefsStore,
    settings: &DesktopSettings,
) -> Result<(), SettingsError> {
    let raw = serde_json::to_string(settings)?;
    store
        .save_pref(SETTINGS_PREF_KEY, &raw)
        .await
        .map_err(SettingsError::Store)
}
