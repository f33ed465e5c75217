//! Sign-in screen

use super::auth_card::{AuthCard, PasswordField, SocialButtons};
use super::guard::Gate;
use super::toast::use_notifier;
use crate::auth::{Credentials, SessionContext};
use crate::notification::{Notification, Severity};
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        Gate {
            AuthCard {
                title: "Welcome Back!",
                description: "Sign in to access your account and continue your journey with us.",
                LoginForm {}
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let mut session = use_context::<Signal<SessionContext>>();
    let notifier = use_notifier();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials {
            email: email(),
            password: password(),
        };

        let result = session.write().login(&credentials);
        match result {
            Ok(notification) => notifier.show(notification),
            Err(e) => notifier.show(Notification::error(e.to_string())),
        }
    };

    let social = move |provider: &'static str| {
        tracing::info!("Social login with {provider}");
        notifier.show(Notification::info(format!("Signing in with {provider}...")));
    };

    rsx! {
        form { class: "auth-form", onsubmit: submit,
            label { class: "field",
                span { class: "field-label", "Email Address" }
                div { class: "field-input",
                    input {
                        name: "email",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
            }

            PasswordField {
                label: "Password",
                name: "password",
                value: password(),
                autocomplete: "current-password",
                oninput: move |value| password.set(value),
            }

            div { class: "form-aside",
                button {
                    r#type: "button",
                    class: "link-button",
                    onclick: move |_| {
                        tracing::info!("Forgot password clicked");
                        notifier.show(Notification::new(
                            "Password reset is not available yet",
                            Severity::Warning,
                        ));
                    },
                    "Forgot password?"
                }
            }

            button { r#type: "submit", class: "btn btn-primary btn-block", "Sign In" }

            SocialButtons { onselect: social }

            p { class: "form-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
