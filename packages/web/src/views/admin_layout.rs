use dioxus::prelude::*;

use ui::guard::{self, Access};
use ui::use_session;
use ui::views::{AdminShellView, ShellSection};

use crate::Route;

fn section_route(section: ShellSection) -> Route {
    match section {
        ShellSection::Dashboard => Route::Dashboard {},
        ShellSection::Workshops => Route::Workshops {},
        ShellSection::Bookings => Route::Bookings {},
    }
}

/// Guarded admin frame around every protected route.
///
/// Re-evaluated whenever the session changes, so logging out (or the backend
/// rejecting the token) sends the user to the login screen.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    if guard::evaluate(&session()) == Access::Blocked {
        tracing::debug!(path = %route, "blocked, redirecting to login");
        nav.replace(Route::Login {
            from: route.to_string(),
        });
        return rsx! {};
    }

    rsx! {
        AdminShellView {
            current_path: route.to_string(),
            on_navigate: move |section| {
                nav.push(section_route(section));
            },
            on_logout: move |_| {
                nav.replace(Route::Login { from: String::new() });
            },
            Outlet::<Route> {}
        }
    }
}
