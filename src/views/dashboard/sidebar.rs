use crate::config::AppConfig;
use crate::data::{MenuItem, MENU_ITEMS};
use crate::session::AppPath;
use crate::Route;
use dioxus::prelude::*;

fn menu_path(item: &MenuItem) -> AppPath {
    match item.section {
        Some(section) => AppPath::Dashboard(vec![section.to_string()]),
        None => AppPath::dashboard(),
    }
}

fn item_class(active: bool) -> String {
    if active {
        "sidebar-item active".to_string()
    } else {
        "sidebar-item".to_string()
    }
}

/// Navigation drawer. Always visible on wide screens, slides in on narrow ones.
#[component]
pub fn Sidebar(open: bool, on_close: EventHandler, on_logout: EventHandler) -> Element {
    let brand = use_context::<AppConfig>().brand;
    let current = AppPath::from(&use_route::<Route>());

    rsx! {
        if open {
            div { class: "drawer-scrim", onclick: move |_| on_close.call(()) }
        }
        nav { class: if open { "sidebar sidebar-open" } else { "sidebar" },
            div { class: "sidebar-header",
                span { class: "avatar", "A" }
                div {
                    div { class: "sidebar-user", "Admin User" }
                    div { class: "sidebar-brand", "{brand}" }
                }
            }

            ul { class: "sidebar-menu",
                for item in MENU_ITEMS {
                    li { key: "{item.text}",
                        Link {
                            class: item_class(menu_path(&item) == current),
                            to: Route::from(menu_path(&item)),
                            onclick: move |_| on_close.call(()),
                            span { class: "sidebar-icon", "{item.icon}" }
                            span { "{item.text}" }
                        }
                    }
                }
            }

            button {
                class: "sidebar-item sidebar-logout",
                onclick: move |_| on_logout.call(()),
                span { class: "sidebar-icon", "⎋" }
                span { "Logout" }
            }
        }
    }
}
