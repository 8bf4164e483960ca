use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AdminLayout, Bookings, Dashboard, Login, NotFound, WorkshopDetail, Workshops};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:from")]
    Login { from: String },
    #[layout(AdminLayout)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/workshops")]
        Workshops {},
        #[route("/workshops/:id")]
        WorkshopDetail { id: String },
        #[route("/bookings")]
        Bookings {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Workshop Admin" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::NoOpMutations;
    use dioxus::history::{History, MemoryHistory};
    use dioxus::router::components::HistoryProvider;
    use std::rc::Rc;
    use std::str::FromStr;
    use store::{CredentialStore, MemoryStore, Session};
    use ui::SessionScope;

    #[component]
    fn Harness(path: String, session: Session) -> Element {
        rsx! {
            SessionScope {
                session,
                HistoryProvider {
                    history: move |_| Rc::new(MemoryHistory::with_initial_path(path.clone())) as Rc<dyn History>,
                    Router::<Route> {}
                }
            }
        }
    }

    fn signed_in(role: &str) -> Session {
        let mut session = Session::anonymous();
        let credentials = CredentialStore::new(MemoryStore::new());
        session.set_credentials(&credentials, "tok".into(), role.into());
        session
    }

    fn render_at(path: &str, session: Session) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                path: path.to_string(),
                session,
            },
        );
        dom.rebuild_in_place();
        // Guard redirects land on the next pass.
        dom.render_immediate(&mut NoOpMutations);
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(
            Route::from_str("/login").ok(),
            Some(Route::Login {
                from: String::new()
            })
        );

        let bounced = Route::Login {
            from: "/workshops/abc".into(),
        };
        assert_eq!(bounced.to_string(), "/login?from=/workshops/abc");
        assert_eq!(Route::from_str(&bounced.to_string()).ok(), Some(bounced));

        assert_eq!(
            Route::from_str("/workshops/abc").ok(),
            Some(Route::WorkshopDetail { id: "abc".into() })
        );
        assert_eq!(
            Route::from_str("/nope/here").ok(),
            Some(Route::NotFound {
                segments: vec!["nope".into(), "here".into()]
            })
        );
    }

    #[tokio::test]
    async fn test_protected_path_requires_admin() {
        for session in [
            Session::anonymous(),
            signed_in("USER"),
            signed_in("admin"),
        ] {
            let html = render_at("/workshops", session.clone());
            assert!(html.contains("Admin Login"), "{session:?}: {html}");
            assert!(!html.contains("Admin Panel"), "{session:?}: {html}");
        }
    }

    #[tokio::test]
    async fn test_admin_skips_login() {
        let html = render_at("/login", signed_in("ADMIN"));
        assert!(html.contains("Admin Panel"), "{html}");
        assert!(!html.contains("Admin Login"), "{html}");
    }
}
