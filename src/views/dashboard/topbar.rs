//! App bar: drawer toggle, messages, notifications, profile menu

use super::modal::Modal;
use crate::data::{inbox_messages, inbox_notifications, Message, Notice};
use crate::inbox::{Inbox, InboxItem};
use crate::Route;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    Messages,
    Notifications,
    Profile,
}

#[component]
pub fn Topbar(on_toggle_drawer: EventHandler, on_logout: EventHandler) -> Element {
    let mut messages = use_signal(|| Inbox::new(inbox_messages()));
    let mut notices = use_signal(|| Inbox::new(inbox_notifications()));
    let mut open_menu = use_signal(|| None::<Menu>);
    let mut selected_message = use_signal(|| None::<Message>);
    let mut selected_notice = use_signal(|| None::<Notice>);

    let mut toggle = move |menu: Menu| {
        let next = if open_menu() == Some(menu) { None } else { Some(menu) };
        open_menu.set(next);
    };

    let unread_messages = messages.read().unread_count();
    let unread_notices = notices.read().unread_count();

    rsx! {
        header { class: "topbar",
            button {
                class: "icon-button drawer-toggle",
                aria_label: "open drawer",
                onclick: move |_| on_toggle_drawer.call(()),
                "☰"
            }
            div { class: "topbar-title", "Admin Dashboard" }

            div { class: "topbar-actions",
                div { class: "menu-anchor",
                    button {
                        class: "icon-button",
                        title: "Messages",
                        onclick: move |_| toggle(Menu::Messages),
                        "✉"
                        Badge { count: unread_messages }
                    }
                    if open_menu() == Some(Menu::Messages) {
                        div { class: "menu-panel",
                            div { class: "menu-header",
                                span { "Messages" }
                                if unread_messages > 0 {
                                    span { class: "menu-chip", "{unread_messages} new" }
                                }
                            }
                            for message in messages.read().items().iter().cloned() {
                                button {
                                    key: "{message.id}",
                                    class: if message.is_read() { "menu-row" } else { "menu-row unread" },
                                    onclick: move |_| {
                                        selected_message.set(messages.write().open(message.id));
                                        open_menu.set(None);
                                    },
                                    span { class: "avatar", "{message.avatar}" }
                                    span { class: "menu-row-text",
                                        span { class: "menu-row-title", "{message.sender}" }
                                        span { class: "menu-row-sub", "{message.content}" }
                                    }
                                    span { class: "menu-row-time", "{message.time}" }
                                }
                            }
                        }
                    }
                }

                div { class: "menu-anchor",
                    button {
                        class: "icon-button",
                        title: "Notifications",
                        onclick: move |_| toggle(Menu::Notifications),
                        "🔔"
                        Badge { count: unread_notices }
                    }
                    if open_menu() == Some(Menu::Notifications) {
                        div { class: "menu-panel",
                            div { class: "menu-header",
                                span { "Notifications" }
                                button {
                                    class: "link-button",
                                    onclick: move |_| notices.write().mark_all_read(),
                                    "Mark all as read"
                                }
                            }
                            for notice in notices.read().items().iter().cloned() {
                                button {
                                    key: "{notice.id}",
                                    class: if notice.is_read() { "menu-row" } else { "menu-row unread" },
                                    onclick: move |_| {
                                        selected_notice.set(notices.write().open(notice.id));
                                        open_menu.set(None);
                                    },
                                    span { class: "avatar", {notice.kind.icon()} }
                                    span { class: "menu-row-text",
                                        span { class: "menu-row-title", "{notice.title}" }
                                        span { class: "menu-row-sub", "{notice.description}" }
                                    }
                                    span { class: "menu-row-time", "{notice.time}" }
                                }
                            }
                        }
                    }
                }

                div { class: "menu-anchor",
                    button {
                        class: "avatar avatar-button",
                        title: "Account settings",
                        onclick: move |_| toggle(Menu::Profile),
                        "A"
                    }
                    if open_menu() == Some(Menu::Profile) {
                        div { class: "menu-panel menu-panel-narrow",
                            Link {
                                class: "menu-row",
                                to: Route::DashboardSection { segments: vec!["profile".to_string()] },
                                onclick: move |_| open_menu.set(None),
                                "👤 Profile"
                            }
                            Link {
                                class: "menu-row",
                                to: Route::DashboardSection { segments: vec!["settings".to_string()] },
                                onclick: move |_| open_menu.set(None),
                                "⚙ Settings"
                            }
                            button {
                                class: "menu-row",
                                onclick: move |_| {
                                    open_menu.set(None);
                                    on_logout.call(());
                                },
                                "⎋ Logout"
                            }
                        }
                    }
                }
            }
        }

        if let Some(message) = selected_message() {
            Modal {
                title: "Message from {message.sender}",
                on_close: move |_| selected_message.set(None),
                div { class: "detail-row",
                    span { class: "avatar", "{message.avatar}" }
                    div {
                        div { class: "menu-row-title", "{message.sender}" }
                        div { class: "menu-row-time", "{message.time}" }
                    }
                }
                p { "{message.content}" }
            }
        }

        if let Some(notice) = selected_notice() {
            Modal {
                title: "{notice.title}",
                on_close: move |_| selected_notice.set(None),
                div { class: "detail-row",
                    span { class: "avatar", {notice.kind.icon()} }
                    div {
                        div { class: "menu-row-title", "{notice.title}" }
                        div { class: "menu-row-time", "{notice.time}" }
                    }
                }
                p { "{notice.description}" }
            }
        }
    }
}

/// Unread counter; hidden at zero
#[component]
fn Badge(count: usize) -> Element {
    rsx! {
        if count > 0 {
            span { class: "badge", "{count}" }
        }
    }
}
