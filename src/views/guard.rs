//! Router glue for the session gate

use crate::auth::SessionContext;
use crate::session::{settle, AppPath};
use crate::Route;
use dioxus::prelude::*;

/// Built from the route's fields rather than its URL form, so percent-encoding
/// of segments never leaks into the gate's comparison.
impl From<&Route> for AppPath {
    fn from(route: &Route) -> Self {
        match route {
            Route::Root {} => AppPath::Root,
            Route::Login {} => AppPath::Login,
            Route::Register {} => AppPath::Register,
            Route::OtpVerification {} => AppPath::OtpVerification,
            Route::DashboardHome {} => AppPath::dashboard(),
            Route::DashboardSection { segments } => AppPath::Dashboard(segments.clone()),
            Route::NotFound { segments } => AppPath::parse(&format!("/{}", segments.join("/"))),
        }
    }
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Root => Route::Root {},
            AppPath::Login => Route::Login {},
            AppPath::Register => Route::Register {},
            AppPath::OtpVerification => Route::OtpVerification {},
            AppPath::Dashboard(segments) if segments.is_empty() => Route::DashboardHome {},
            AppPath::Dashboard(segments) => Route::DashboardSection { segments },
            AppPath::Unknown(raw) => Route::NotFound {
                segments: raw
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

/// Renders `children` only if the gate lets the current route through,
/// otherwise replaces the history entry with the settled destination.
///
/// Re-evaluates whenever the session changes, so logging in or out from a
/// gated page moves the user on immediately.
#[component]
pub fn Gate(children: Element) -> Element {
    let route = use_route::<Route>();
    let session = use_context::<Signal<SessionContext>>();

    let requested = AppPath::from(&route);
    let target = settle(&requested, session.read().session());

    if target != requested {
        tracing::debug!("Gate redirect {requested} -> {target}");
        navigator().replace(Route::from(target));
        return rsx! {};
    }

    children
}

/// `/` never renders; the gate always sends it elsewhere
#[component]
pub fn Root() -> Element {
    rsx! {
        Gate { "Redirecting…" }
    }
}

/// Catch-all for paths outside the route table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("Unmatched path /{}", segments.join("/"));
    rsx! {
        Gate { "Redirecting…" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn every_route() -> Vec<Route> {
        vec![
            Route::Root {},
            Route::Login {},
            Route::Register {},
            Route::OtpVerification {},
            Route::DashboardHome {},
            Route::DashboardSection { segments: segments(&["users"]) },
            Route::DashboardSection { segments: segments(&["q&a", "two words", "100%"]) },
            Route::NotFound { segments: segments(&["no such page"]) },
            Route::NotFound { segments: segments(&["a%2Fb", "ü"]) },
        ]
    }

    #[test]
    fn dashboard_index_is_the_bare_dashboard() {
        assert_eq!(AppPath::from(&Route::DashboardHome {}), AppPath::dashboard());
        assert_eq!(Route::from(AppPath::dashboard()), Route::DashboardHome {});
    }

    #[test]
    fn settled_targets_survive_the_route_conversion() {
        for session in [Session::default(), Session::authenticated("dummy-token")] {
            for route in every_route() {
                let target = settle(&AppPath::from(&route), &session);
                assert_eq!(AppPath::from(&Route::from(target.clone())), target, "{route:?}");
            }
        }
    }

    #[test]
    fn gate_does_not_redirect_a_settled_route() {
        for session in [Session::default(), Session::authenticated("dummy-token")] {
            for route in every_route() {
                let landed = Route::from(settle(&AppPath::from(&route), &session));
                let requested = AppPath::from(&landed);
                assert_eq!(settle(&requested, &session), requested, "{route:?}");
            }
        }
    }

    #[test]
    fn section_segments_are_kept_verbatim() {
        let route = Route::DashboardSection { segments: segments(&["two words", "100%"]) };
        assert_eq!(
            AppPath::from(&route),
            AppPath::Dashboard(segments(&["two words", "100%"]))
        );
    }

    #[test]
    fn unmatched_routes_fall_back_by_session() {
        let route = Route::NotFound { segments: segments(&["no such page"]) };
        let path = AppPath::from(&route);
        assert!(matches!(path, AppPath::Unknown(_)));
        assert_eq!(settle(&path, &Session::default()), AppPath::Login);
        assert_eq!(
            settle(&path, &Session::authenticated("dummy-token")),
            AppPath::dashboard()
        );
    }
}
