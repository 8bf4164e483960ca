use dioxus::prelude::*;

use crate::session::{sign_in, use_backend, use_session};
use crate::state::login::{authenticate, LoginOutcome};

const INPUT: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-teal-500 focus:border-teal-500 disabled:bg-gray-100";

/// Admin sign-in form. `on_success` fires once an admin session is stored.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let mut session = use_session();
    let backend = use_backend();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        error.set(None);
        loading.set(true);
        spawn(async move {
            let outcome = authenticate(&backend.api(), &email(), &password()).await;
            loading.set(false);
            match outcome {
                LoginOutcome::Granted { token, role } => {
                    sign_in(&mut session, token, role);
                    on_success.call(());
                }
                LoginOutcome::Denied(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-100",
            div {
                class: "bg-white w-full max-w-md p-8 rounded-2xl shadow-lg",
                h1 { class: "text-2xl font-bold text-gray-800 text-center mb-6", "Admin Login" }
                if let Some(message) = error() {
                    div { class: "bg-red-100 text-red-700 p-3 rounded-lg text-sm mb-4", role: "alert", "{message}" }
                }
                form {
                    class: "space-y-4",
                    onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700", r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            class: INPUT,
                            r#type: "email",
                            autocomplete: "email",
                            required: true,
                            disabled: loading(),
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: INPUT,
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                            disabled: loading(),
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-teal-500 text-white py-2 rounded-lg hover:bg-teal-600 disabled:bg-teal-300",
                        disabled: loading(),
                        if loading() { "Signing In..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
