//! Account creation screen

use super::auth_card::{AuthCard, PasswordField, SocialButtons};
use super::guard::Gate;
use super::toast::use_notifier;
use crate::auth::{Registration, SessionContext};
use crate::config::AppConfig;
use crate::notification::Notification;
use crate::timer::sleep_ms;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    rsx! {
        Gate {
            AuthCard {
                title: "Create an Account",
                description: "Join us today and start your journey with our platform.",
                RegisterForm {}
            }
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let mut session = use_context::<Signal<SessionContext>>();
    let notifier = use_notifier();
    let delay_ms = use_context::<AppConfig>().register_delay_ms;

    let mut fields = use_signal(Registration::default);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        let registration = fields();
        if let Err(e) = registration.validate() {
            notifier.show(Notification::error(e.to_string()));
            return;
        }

        loading.set(true);
        notifier.show(Notification::info("Creating your account..."));

        spawn(async move {
            sleep_ms(delay_ms).await;
            loading.set(false);

            let result = session.write().register(&registration);
            match result {
                Ok(notification) => notifier.show(notification),
                Err(e) => notifier.show(Notification::error(e.to_string())),
            }
        });
    };

    let social = move |provider: &'static str| {
        tracing::info!("Social registration with {provider}");
        notifier.show(Notification::info(format!("Registering with {provider}...")));
    };

    let mismatch = fields
        .read()
        .confirmation_mismatch()
        .then(|| "Passwords do not match".to_string());

    rsx! {
        form { class: "auth-form", onsubmit: submit,
            label { class: "field",
                span { class: "field-label", "Full Name" }
                div { class: "field-input",
                    input {
                        name: "name",
                        autocomplete: "name",
                        required: true,
                        value: fields.read().name.clone(),
                        oninput: move |e| fields.write().name = e.value(),
                    }
                }
            }

            label { class: "field",
                span { class: "field-label", "Email Address" }
                div { class: "field-input",
                    input {
                        name: "email",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: fields.read().email.clone(),
                        oninput: move |e| fields.write().email = e.value(),
                    }
                }
            }

            PasswordField {
                label: "Password",
                name: "password",
                value: fields.read().password.clone(),
                autocomplete: "new-password",
                oninput: move |value| fields.write().password = value,
            }

            PasswordField {
                label: "Confirm Password",
                name: "confirmPassword",
                value: fields.read().confirm_password.clone(),
                autocomplete: "new-password",
                oninput: move |value| fields.write().confirm_password = value,
                error: mismatch,
            }

            label { class: "checkbox",
                input {
                    name: "terms",
                    r#type: "checkbox",
                    checked: fields.read().accepted_terms,
                    onchange: move |e| fields.write().accepted_terms = e.checked(),
                }
                span {
                    "I agree to the "
                    a { href: "#", "Terms of Service" }
                    " and "
                    a { href: "#", "Privacy Policy" }
                }
            }

            button {
                r#type: "submit",
                class: "btn btn-primary btn-block",
                disabled: !fields.read().accepted_terms || loading(),
                if loading() { "Creating Account..." } else { "Create Account" }
            }

            SocialButtons { onselect: social }

            p { class: "form-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
