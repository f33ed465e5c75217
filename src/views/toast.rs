//! Global notification snackbar

use crate::config::AppConfig;
use crate::notification::{CloseReason, Notification, NotificationState};
use crate::timer::sleep_ms;
use dioxus::prelude::*;

/// Handle the views use to raise a notification
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    state: Signal<NotificationState>,
}

impl Notifier {
    pub fn new(state: Signal<NotificationState>) -> Self {
        Self { state }
    }

    pub fn show(mut self, notification: Notification) {
        self.state.write().show(notification);
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Top-center snackbar; lives at the app root so auto-hide survives route changes
#[component]
pub fn Toast() -> Element {
    let Notifier { mut state } = use_notifier();
    let timeout_ms = use_context::<AppConfig>().notification_timeout_ms;

    use_effect(move || {
        let (generation, open) = {
            let current = state.read();
            (current.generation(), current.visible().is_some())
        };
        if open {
            spawn(async move {
                sleep_ms(timeout_ms).await;
                state.write().expire(generation);
            });
        }
    });

    let visible = state.read().visible().cloned();

    rsx! {
        if let Some(notification) = visible {
            div {
                class: "toast-anchor",
                onclick: move |_| {
                    state.write().close(CloseReason::ClickAway);
                },
                div {
                    class: format!("toast {}", notification.severity.class()),
                    role: "alert",
                    onclick: move |evt| evt.stop_propagation(),
                    span { class: "toast-message", "{notification.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "Close",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            state.write().close(CloseReason::Dismissed);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
