use dioxus::prelude::*;

mod auth;
mod config;
mod data;
mod diagnostics;
mod inbox;
mod notification;
mod session;
mod shared_state;
mod timer;
mod views;

use auth::SessionContext;
use config::AppConfig;
use notification::NotificationState;
use views::{
    DashboardHome, DashboardSection, DashboardShell, Login, NotFound, Notifier, OtpVerification,
    Register, Root, Toast,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/otp-verification")]
    OtpVerification {},
    #[nest("/dashboard")]
        #[layout(DashboardShell)]
            #[route("/")]
            DashboardHome {},
            #[route("/:..segments")]
            DashboardSection { segments: Vec<String> },
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    let config = AppConfig::load();
    let _log_guard = diagnostics::init_diagnostics(&config);
    tracing::info!("Admin portal starting ({})", config.brand);
    shared_state::install_config(config);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(shared_state::config);
    use_context_provider(|| Signal::new(SessionContext::restore(session::storage::open_default())));
    let notifications = use_context_provider(|| Signal::new(NotificationState::default()));
    use_context_provider(|| Notifier::new(notifications));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}

        Toast {}
    }
}
