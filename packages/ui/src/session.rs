//! Session context and platform wiring for the UI.
//!
//! [`SessionProvider`] sits at the application root. It restores the
//! [`Session`] from the platform credential store once, then shares it as a
//! `Signal<Session>` together with a [`Backend`] handle that every view uses
//! to reach the API with the current token.

use api::{ApiClient, ApiConfig, ApiError};
use dioxus::prelude::*;
use store::{CredentialStore, KeyValueStore, Session};

/// Create the platform-appropriate credential store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
/// - **Desktop** (native): one file per key under `<data_dir>/workshop-admin/`
pub fn make_credentials() -> CredentialStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        CredentialStore::new(store::LocalStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        CredentialStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("workshop-admin");
        CredentialStore::new(store::FileStore::new(base))
    }
}

/// Get the current session. Updates on login and logout.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the shared backend handle.
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

/// Wrap the app with this to restore and share the session.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let restored = use_hook(|| Session::restore(&make_credentials()));

    rsx! {
        SessionScope { session: restored, {children} }
    }
}

/// Share `session` and a [`Backend`] built on it with every descendant.
#[component]
pub fn SessionScope(session: Session, children: Element) -> Element {
    let session = use_context_provider(|| Signal::new(session));
    let client = use_signal(|| ApiClient::new(ApiConfig::global().clone()));
    use_context_provider(|| Backend { client, session });

    rsx! {
        {children}
    }
}

/// Store a successful admin login.
pub fn sign_in(session: &mut Signal<Session>, token: String, role: String) {
    session
        .write()
        .set_credentials(&make_credentials(), token, role);
}

/// Log out and wipe stored credentials.
pub fn sign_out(session: &mut Signal<Session>) {
    session.write().log_out(&make_credentials());
}

/// The API client plus the session it authenticates with.
#[derive(Clone, Copy)]
pub struct Backend {
    client: Signal<ApiClient>,
    session: Signal<Session>,
}

impl Backend {
    /// A client carrying the session's token as of now.
    pub fn api(&self) -> ApiClient {
        let token = self.session.peek().token().map(str::to_string);
        ApiClient::clone(&self.client.peek()).with_token(token)
    }

    /// Log out when the backend refused the stored token. The route guard
    /// then sends the user to the login screen.
    pub fn end_session_if_rejected(&self, err: &ApiError) -> bool {
        if !err.is_session_rejected() {
            return false;
        }
        tracing::warn!("backend rejected the session: {err}");
        let mut session = self.session;
        sign_out(&mut session);
        true
    }
}
