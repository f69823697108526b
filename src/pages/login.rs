//! Login page: email/password form against the demo accounts.

use designkit_core::auth::DEMO_ACCOUNTS;
use designkit_ui::{use_auth, use_loading, Button, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let loading = use_loading();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    // Already signed in: skip the form
    use_effect(move || {
        if auth.is_authenticated() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let submit = move |_| {
        if pending() {
            return;
        }
        let email_value = email.peek().trim().to_string();
        let password_value = password.peek().clone();
        pending.set(true);
        spawn(async move {
            loading.show("Signing in...");
            let result = auth.login(&email_value, &password_value).await;
            loading.hide_loading();
            pending.set(false);
            match result {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.email);
                    error.set(None);
                    navigator.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        main { class: "login-page",
            section { class: "login-card",
                h1 { class: "page-title", "Sign in" }
                Input {
                    id: "login-email",
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@company.com",
                    value: email(),
                    oninput: move |v| email.set(v),
                }
                Input {
                    id: "login-password",
                    label: "Password",
                    input_type: "password",
                    value: password(),
                    error: error(),
                    oninput: move |v| password.set(v),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: pending(),
                    onclick: submit,
                    "Sign in"
                }
            }
            section { class: "demo-accounts",
                h2 { "Demo accounts" }
                ul {
                    for account in DEMO_ACCOUNTS.iter() {
                        li { key: "{account.email}",
                            button {
                                class: "demo-account",
                                onclick: move |_| {
                                    email.set(account.email.to_string());
                                    password.set(account.password.to_string());
                                },
                                span { class: "demo-email", "{account.email}" }
                                span { class: "demo-role", "{account.level} / {account.group}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
