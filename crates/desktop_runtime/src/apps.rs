//! Static launch catalog: the four content windows plus outbound profile links.

use system_ui::IconName;

use crate::model::WindowIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub id: WindowIdentity,
    pub title: &'static str,
    pub desktop_icon_label: &'static str,
    pub icon: IconName,
    pub keywords: &'static [&'static str],
}

const WINDOW_REGISTRY: [WindowDescriptor; 4] = [
    WindowDescriptor {
        id: WindowIdentity::About,
        title: "About Me",
        desktop_icon_label: "About",
        icon: IconName::User,
        keywords: &["bio", "profile", "me", "skills", "now"],
    },
    WindowDescriptor {
        id: WindowIdentity::Projects,
        title: "Projects",
        desktop_icon_label: "Projects",
        icon: IconName::Folder,
        keywords: &["portfolio", "work", "code", "apps", "demos"],
    },
    WindowDescriptor {
        id: WindowIdentity::Experience,
        title: "Experience",
        desktop_icon_label: "Experience",
        icon: IconName::Briefcase,
        keywords: &["jobs", "career", "resume", "cv", "history"],
    },
    WindowDescriptor {
        id: WindowIdentity::Contact,
        title: "Contact",
        desktop_icon_label: "Contact",
        icon: IconName::Mail,
        keywords: &["email", "message", "hire", "reach", "form"],
    },
];

pub fn window_registry() -> &'static [WindowDescriptor] {
    &WINDOW_REGISTRY
}

pub fn window_descriptor(id: WindowIdentity) -> &'static WindowDescriptor {
    &WINDOW_REGISTRY[id.index()]
}

pub fn window_title(id: WindowIdentity) -> &'static str {
    window_descriptor(id).title
}

pub fn window_icon(id: WindowIdentity) -> IconName {
    window_descriptor(id).icon
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub key: &'static str,
    pub label: &'static str,
    pub url: &'static str,
    pub icon: IconName,
    pub keywords: &'static [&'static str],
}

const EXTERNAL_LINKS: [ExternalLink; 4] = [
    ExternalLink {
        key: "github",
        label: "GitHub",
        url: "https://github.com/",
        icon: IconName::Code,
        keywords: &["source", "repositories", "open source", "code"],
    },
    ExternalLink {
        key: "linkedin",
        label: "LinkedIn",
        url: "https://www.linkedin.com/",
        icon: IconName::Network,
        keywords: &["network", "social", "career"],
    },
    ExternalLink {
        key: "resume",
        label: "Résumé (PDF)",
        url: "/resume.pdf",
        icon: IconName::Document,
        keywords: &["resume", "cv", "download", "pdf"],
    },
    ExternalLink {
        key: "email",
        label: "Send Email",
        url: "mailto:hello@example.com",
        icon: IconName::Mail,
        keywords: &["mail", "email", "contact", "write"],
    },
];

pub fn external_links() -> &'static [ExternalLink] {
    &EXTERNAL_LINKS
}

/// What activating a launcher entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    Window(WindowIdentity),
    External(&'static str),
}

/// One start-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: IconName,
    pub keywords: &'static [&'static str],
    pub target: LaunchTarget,
}

impl LaunchItem {
    pub fn dom_id(&self) -> String {
        format!("launcher-item-{}", self.key)
    }

    /// Case-insensitive substring match of an already-lowercased needle against label or keywords.
    pub fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(needle))
    }
}

/// Windows first (in icon order), then external links.
pub fn launch_catalog() -> Vec<LaunchItem> {
    let windows = window_registry().iter().map(|desc| LaunchItem {
        key: desc.id.as_str(),
        label: desc.title,
        icon: desc.icon,
        keywords: desc.keywords,
        target: LaunchTarget::Window(desc.id),
    });
    let links = external_links().iter().map(|link| LaunchItem {
        key: link.key,
        label: link.label,
        icon: link.icon,
        keywords: link.keywords,
        target: LaunchTarget::External(link.url),
    });
    windows.chain(links).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_is_indexed_by_identity() {
        for id in WindowIdentity::ALL {
            assert_eq!(window_descriptor(id).id, id);
        }
    }

    #[test]
    fn catalog_lists_every_window_before_links() {
        let catalog = launch_catalog();
        assert_eq!(catalog.len(), WindowIdentity::ALL.len() + external_links().len());
        let window_targets: Vec<_> = catalog
            .iter()
            .take(WindowIdentity::ALL.len())
            .map(|item| item.target)
            .collect();
        assert_eq!(
            window_targets,
            WindowIdentity::ALL
                .into_iter()
                .map(LaunchTarget::Window)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn launch_keys_are_unique() {
        let mut keys: Vec<_> = launch_catalog().iter().map(|item| item.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), launch_catalog().len());
    }
}
