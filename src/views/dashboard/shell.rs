use super::sidebar::Sidebar;
use super::topbar::Topbar;
use crate::auth::SessionContext;
use crate::views::guard::Gate;
use crate::views::toast::{use_notifier, Notifier};
use crate::Route;
use dioxus::prelude::*;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Layout for everything under `/dashboard`; the gate here covers all subpaths
#[component]
pub fn DashboardShell() -> Element {
    let session = use_context::<Signal<SessionContext>>();
    let notifier = use_notifier();
    let mut drawer_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }

        Gate {
            div { class: "dashboard",
                Topbar {
                    on_toggle_drawer: move |_| drawer_open.toggle(),
                    on_logout: move |_| logout(session, notifier),
                }
                Sidebar {
                    open: drawer_open(),
                    on_close: move |_| drawer_open.set(false),
                    on_logout: move |_| logout(session, notifier),
                }
                main { class: "dashboard-main", Outlet::<Route> {} }
            }
        }
    }
}

/// The gate notices the anonymous session and moves to `/login`
fn logout(mut session: Signal<SessionContext>, notifier: Notifier) {
    let notification = session.write().logout();
    notifier.show(notification);
}
