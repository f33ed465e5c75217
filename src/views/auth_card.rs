use crate::config::AppConfig;
use dioxus::prelude::*;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Centered card shared by the login, register and OTP screens
#[component]
pub fn AuthCard(title: String, description: String, children: Element) -> Element {
    let brand = use_context::<AppConfig>().brand;

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div { class: "auth-page",
            main { class: "auth-card",
                div { class: "auth-badge", "★" }
                div { class: "auth-heading",
                    h1 { "{title}" }
                    p { "{description}" }
                }

                div { class: "auth-body", {children} }

                div { class: "auth-footer", "© {brand}" }
            }
        }
    }
}

/// Text input with a show/hide toggle
#[component]
pub fn PasswordField(
    label: String,
    name: String,
    value: String,
    autocomplete: String,
    oninput: EventHandler<String>,
    error: Option<String>,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            div { class: if error.is_some() { "field-input field-input-error" } else { "field-input" },
                input {
                    name: "{name}",
                    r#type: if visible() { "text" } else { "password" },
                    autocomplete: "{autocomplete}",
                    required: true,
                    value: "{value}",
                    oninput: move |e| oninput.call(e.value()),
                }
                button {
                    r#type: "button",
                    class: "field-adornment",
                    aria_label: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.toggle(),
                    if visible() { "🙈" } else { "👁" }
                }
            }
            if let Some(message) = error.as_ref() {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// Google / GitHub buttons under the forms. There is no OAuth behind them.
#[component]
pub fn SocialButtons(onselect: EventHandler<&'static str>) -> Element {
    rsx! {
        div { class: "divider", span { "OR" } }
        div { class: "social-row",
            for provider in ["Google", "GitHub"] {
                button {
                    key: "{provider}",
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: move |_| onselect.call(provider),
                    "{provider}"
                }
            }
        }
    }
}
