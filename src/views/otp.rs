//! Verification code screen

use super::auth_card::AuthCard;
use super::guard::Gate;
use super::toast::use_notifier;
use crate::auth::{OtpEntry, SessionContext, OTP_LENGTH};
use crate::config::AppConfig;
use crate::notification::Notification;
use crate::timer::sleep_ms;
use crate::Route;
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn OtpVerification() -> Element {
    rsx! {
        Gate {
            AuthCard {
                title: "Verify Your Account",
                description: "We've sent a verification code to your email. Please enter it below.",
                OtpForm {}
            }
        }
    }
}

#[component]
fn OtpForm() -> Element {
    let session = use_context::<Signal<SessionContext>>();
    let notifier = use_notifier();
    let redirect_ms = use_context::<AppConfig>().otp_redirect_delay_ms;
    let nav = navigator();

    let mut entry = use_signal(OtpEntry::default);
    let mut cells = use_signal(|| vec![None::<Rc<MountedData>>; OTP_LENGTH]);
    let mut verified = use_signal(|| false);

    let mut on_cell_input = move |index: usize, value: String| {
        let next = entry.write().input(index, &value);

        if let Some(target) = next.and_then(|n| cells.read()[n].clone()) {
            spawn(async move {
                let _ = target.set_focus(true).await;
            });
        }

        let Some(code) = entry.read().code() else {
            return;
        };
        if verified() {
            return;
        }

        match session.read().verify_otp(&code) {
            Ok(notification) => {
                verified.set(true);
                notifier.show(notification);
                spawn(async move {
                    sleep_ms(redirect_ms).await;
                    nav.replace(Route::Login {});
                });
            }
            Err(e) => notifier.show(Notification::error(e.to_string())),
        }
    };

    let resend = move |_| {
        entry.write().clear();
        verified.set(false);
        tracing::info!("OTP resend requested");
        notifier.show(Notification::info("A new code has been sent to your email."));
    };

    rsx! {
        div { class: "otp",
            p { class: "otp-prompt", "Enter Verification Code" }
            div { class: "otp-cells",
                for index in 0..OTP_LENGTH {
                    input {
                        key: "{index}",
                        name: "otp-{index}",
                        class: "otp-cell",
                        inputmode: "numeric",
                        maxlength: "1",
                        disabled: verified(),
                        value: entry.read().cell(index),
                        onmounted: move |e| cells.write()[index] = Some(e.data()),
                        oninput: move |e| on_cell_input(index, e.value()),
                    }
                }
            }
            p { class: "form-switch",
                "Didn't receive a code? "
                button { r#type: "button", class: "link-button", onclick: resend, "Resend" }
            }
        }
    }
}
