use dioxus::prelude::*;

use ui::guard::{self, Access};
use ui::use_session;
use ui::views::LoginView;

use crate::Route;

/// `from` is the protected path that sent the visitor here. It is kept in
/// the URL only; a successful login always lands on the dashboard.
#[component]
pub fn Login(from: String) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_hook(|| {
        if !from.is_empty() {
            tracing::debug!(from = %from, "sign-in required");
        }
    });

    if guard::evaluate(&session()) == Access::Allowed {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
