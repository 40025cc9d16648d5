//! Page bodies rendered inside the desktop windows.

use desktop_runtime::apps::external_links;
use leptos::*;

struct Project {
    name: &'static str,
    summary: &'static str,
    stack: &'static [&'static str],
}

const PROJECTS: [Project; 3] = [
    Project {
        name: "Portfolio Desktop",
        summary: "This site: a window manager in the browser with a taskbar, start menu search, and tray.",
        stack: &["Rust", "Leptos", "WebAssembly"],
    },
    Project {
        name: "Trail Log",
        summary: "Offline-first hiking journal that syncs GPS traces when a connection comes back.",
        stack: &["Rust", "SQLite", "Axum"],
    },
    Project {
        name: "Palette Lab",
        summary: "Accessible color palette generator that checks contrast ratios as you edit.",
        stack: &["TypeScript", "Canvas"],
    },
];

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: [Role; 2] = [
    Role {
        title: "Senior Software Engineer",
        company: "Northwind Labs",
        period: "2021 - present",
        highlights: &[
            "Led the migration of the customer dashboard to a component library.",
            "Cut p95 page load time in half by moving rendering to the edge.",
        ],
    },
    Role {
        title: "Software Engineer",
        company: "Brightline Studio",
        period: "2017 - 2021",
        highlights: &[
            "Built the booking flow used by 40 partner venues.",
            "Mentored four interns through their first production releases.",
        ],
    },
];

#[component]
pub(crate) fn AboutPage() -> impl IntoView {
    view! {
        <article class="page page-about">
            <h1>"Hi, I build things for the web."</h1>
            <p>
                "I'm a software engineer who likes small, fast interfaces and the systems behind them. "
                "Double-click an icon or use the start menu to look around."
            </p>
            <h2>"Skills"</h2>
            <ul class="page-tags">
                {["Rust", "TypeScript", "WebAssembly", "Distributed systems", "Accessibility"]
                    .into_iter()
                    .map(|skill| view! { <li>{skill}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}

#[component]
pub(crate) fn ProjectsPage() -> impl IntoView {
    view! {
        <article class="page page-projects">
            <h1>"Projects"</h1>
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <section class="page-card">
                            <h2>{project.name}</h2>
                            <p>{project.summary}</p>
                            <p class="page-meta">{project.stack.join(" · ")}</p>
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

#[component]
pub(crate) fn ExperiencePage() -> impl IntoView {
    view! {
        <article class="page page-experience">
            <h1>"Experience"</h1>
            {ROLES
                .iter()
                .map(|role| {
                    view! {
                        <section class="page-card">
                            <h2>{format!("{} · {}", role.title, role.company)}</h2>
                            <p class="page-meta">{role.period}</p>
                            <ul>
                                {role
                                    .highlights
                                    .iter()
                                    .map(|line| view! { <li>{*line}</li> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

#[component]
pub(crate) fn ContactPage() -> impl IntoView {
    view! {
        <article class="page page-contact">
            <h1>"Contact"</h1>
            <p>"The quickest way to reach me is email. I'm also on the usual networks."</p>
            <ul class="page-links">
                {external_links()
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
