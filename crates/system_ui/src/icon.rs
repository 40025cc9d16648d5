//! Icon tokens used by desktop icons, the taskbar, and window chrome.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icon in the shell's glyph set.
pub enum IconName {
    /// Person / about page.
    User,
    /// Folder / projects page.
    Folder,
    /// Briefcase / experience page.
    Briefcase,
    /// Envelope / contact page.
    Mail,
    /// Start button glyph.
    Launcher,
    /// Search field glyph.
    Search,
    /// Outbound link glyph.
    Link,
    /// Code forge profile.
    Code,
    /// Professional network profile.
    Network,
    /// Downloadable document.
    Document,
    /// Clock / calendar tray item.
    Clock,
    /// Quick settings tray item.
    Settings,
    /// Widgets tray item.
    Widgets,
    /// Show desktop control.
    Desktop,
    /// Minimize control.
    WindowMinimize,
    /// Maximize control.
    WindowMaximize,
    /// Restore control.
    WindowRestore,
    /// Close control.
    Dismiss,
}

impl IconName {
    /// Stable token written to `data-icon` for stylesheet hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Folder => "folder",
            Self::Briefcase => "briefcase",
            Self::Mail => "mail",
            Self::Launcher => "launcher",
            Self::Search => "search",
            Self::Link => "link",
            Self::Code => "code",
            Self::Network => "network",
            Self::Document => "document",
            Self::Clock => "clock",
            Self::Settings => "settings",
            Self::Widgets => "widgets",
            Self::Desktop => "desktop",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Text fallback shown before the icon font loads.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::User => "\u{1F464}",
            Self::Folder => "\u{1F4C1}",
            Self::Briefcase => "\u{1F4BC}",
            Self::Mail => "\u{2709}",
            Self::Launcher => "\u{229E}",
            Self::Search => "\u{1F50D}",
            Self::Link => "\u{1F517}",
            Self::Code => "</>",
            Self::Network => "in",
            Self::Document => "\u{1F4C4}",
            Self::Clock => "\u{1F552}",
            Self::Settings => "\u{2699}",
            Self::Widgets => "\u{25A6}",
            Self::Desktop => "\u{258F}",
            Self::WindowMinimize => "\u{2013}",
            Self::WindowMaximize => "\u{25A1}",
            Self::WindowRestore => "\u{2750}",
            Self::Dismiss => "\u{2715}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// Window controls.
    Xs,
    /// Taskbar and title bars.
    #[default]
    Sm,
    /// Desktop icons.
    Lg,
}

impl IconSize {
    const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon. Always `aria-hidden`; pair it with a text label.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let all = [
            IconName::User,
            IconName::Folder,
            IconName::Briefcase,
            IconName::Mail,
            IconName::Launcher,
            IconName::Search,
            IconName::Link,
            IconName::Code,
            IconName::Network,
            IconName::Document,
            IconName::Clock,
            IconName::Settings,
            IconName::Widgets,
            IconName::Desktop,
            IconName::WindowMinimize,
            IconName::WindowMaximize,
            IconName::WindowRestore,
            IconName::Dismiss,
        ];
        let mut tokens: Vec<_> = all.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), all.len());
    }
}
