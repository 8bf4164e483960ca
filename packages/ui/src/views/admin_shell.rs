use dioxus::prelude::*;

use crate::icons::{FaBars, FaCalendarCheck, FaChalkboardUser, FaGaugeHigh, FaRightFromBracket};
use crate::session::{sign_out, use_session};
use crate::Icon;

/// Top-level sections listed in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellSection {
    Dashboard,
    Workshops,
    Bookings,
}

impl ShellSection {
    pub const ALL: [ShellSection; 3] = [
        ShellSection::Dashboard,
        ShellSection::Workshops,
        ShellSection::Bookings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShellSection::Dashboard => "Dashboard",
            ShellSection::Workshops => "Workshops",
            ShellSection::Bookings => "Bookings",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ShellSection::Dashboard => "/dashboard",
            ShellSection::Workshops => "/workshops",
            ShellSection::Bookings => "/bookings",
        }
    }

    /// The section whose path prefixes `path`, so `/workshops/42` highlights
    /// Workshops.
    pub fn for_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| {
            path.strip_prefix(section.path())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
        })
    }
}

/// Admin frame: top bar, sidebar and the active view as `children`.
///
/// Routing stays with the platform crate: it passes the current path and
/// handles `on_navigate` / `on_logout`.
#[component]
pub fn AdminShellView(
    current_path: String,
    on_navigate: EventHandler<ShellSection>,
    /// Called after the session has been cleared.
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let mut session = use_session();
    let mut sidebar_open = use_signal(|| false);
    let active = ShellSection::for_path(&current_path);

    let sidebar_class = if sidebar_open() {
        "translate-x-0"
    } else {
        "-translate-x-full md:translate-x-0"
    };

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-gray-100",
            header {
                class: "fixed top-0 inset-x-0 z-30 h-16 flex items-center justify-between px-4 bg-white shadow",
                div {
                    class: "flex items-center gap-3",
                    button {
                        r#type: "button",
                        class: "md:hidden p-2 rounded hover:bg-gray-100",
                        "aria-label": "Toggle navigation",
                        onclick: move |_| sidebar_open.toggle(),
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                    span { class: "text-xl font-bold text-gray-800", "Admin Panel" }
                }
                button {
                    r#type: "button",
                    class: "flex items-center gap-2 text-gray-700 px-3 py-2 rounded-lg hover:bg-gray-100",
                    onclick: move |_| {
                        sign_out(&mut session);
                        on_logout.call(());
                    },
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    "Logout"
                }
            }
            nav {
                class: "fixed top-16 bottom-0 left-0 z-20 w-60 bg-white border-r transition-transform {sidebar_class}",
                ul {
                    class: "py-4",
                    for section in ShellSection::ALL {
                        li {
                            key: "{section.label()}",
                            button {
                                r#type: "button",
                                class: if active == Some(section) {
                                    "w-full flex items-center gap-3 px-6 py-3 text-left bg-teal-50 text-teal-700 font-semibold"
                                } else {
                                    "w-full flex items-center gap-3 px-6 py-3 text-left text-gray-700 hover:bg-gray-50"
                                },
                                onclick: move |_| {
                                    sidebar_open.set(false);
                                    on_navigate.call(section);
                                },
                                SectionIcon { section }
                                "{section.label()}"
                            }
                        }
                    }
                }
            }
            main {
                class: "flex-1 pt-20 px-4 pb-8 md:ml-60 md:px-8",
                {children}
            }
        }
    }
}

#[component]
fn SectionIcon(section: ShellSection) -> Element {
    match section {
        ShellSection::Dashboard => rsx! { Icon { icon: FaGaugeHigh, width: 16, height: 16 } },
        ShellSection::Workshops => rsx! { Icon { icon: FaChalkboardUser, width: 16, height: 16 } },
        ShellSection::Bookings => rsx! { Icon { icon: FaCalendarCheck, width: 16, height: 16 } },
    }
}

/// Shown inside the shell for unknown paths.
#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            h1 { class: "text-2xl font-bold text-gray-800 mb-2", "Page not found" }
            p { class: "text-gray-500", "Nothing lives at {path}." }
        }
    }
}
