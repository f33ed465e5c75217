//! Session gate - decides where a navigation request actually lands
//!
//! Pure decision logic over an enumerated path domain. Performing the
//! redirect is the router's job (see `views::guard`).

use super::Session;
use std::fmt;

/// Upper bound on redirect hops in [`settle`]. Any chain is at most two long
/// (root -> login -> dashboard), this only guards against future policy edits.
const MAX_HOPS: usize = 4;

/// Navigational destinations known to the app
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppPath {
    Root,
    Login,
    Register,
    OtpVerification,
    /// `/dashboard` with optional trailing segments (`/dashboard/users`)
    Dashboard(Vec<String>),
    /// Anything else, kept verbatim for logging
    Unknown(String),
}

/// How the gate treats a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The bare root
    Entry,
    /// Only for anonymous sessions
    Public,
    /// Only for authenticated sessions
    Protected,
    /// Not part of the route table
    Unmatched,
}

impl AppPath {
    /// Dashboard index
    pub fn dashboard() -> Self {
        Self::Dashboard(Vec::new())
    }

    /// Parse a location string (`/login?next=x#top` -> `Login`)
    pub fn parse(raw: &str) -> Self {
        let path = raw
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Root,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["otp-verification"] => Self::OtpVerification,
            ["dashboard", rest @ ..] => {
                Self::Dashboard(rest.iter().map(|s| s.to_string()).collect())
            }
            _ => Self::Unknown(format!("/{}", segments.join("/"))),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Root => Access::Entry,
            Self::Login | Self::Register | Self::OtpVerification => Access::Public,
            Self::Dashboard(_) => Access::Protected,
            Self::Unknown(_) => Access::Unmatched,
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("/"),
            Self::Login => f.write_str("/login"),
            Self::Register => f.write_str("/register"),
            Self::OtpVerification => f.write_str("/otp-verification"),
            Self::Dashboard(rest) if rest.is_empty() => f.write_str("/dashboard"),
            Self::Dashboard(rest) => write!(f, "/dashboard/{}", rest.join("/")),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// One step of the gate policy.
///
/// Root always goes to login, even for an authenticated session; the login
/// page then forwards to the dashboard. Use [`settle`] to get the final view.
pub fn resolve(path: &AppPath, session: &Session) -> AppPath {
    let authenticated = session.is_authenticated();

    match path.access() {
        Access::Entry => AppPath::Login,
        Access::Public if authenticated => AppPath::dashboard(),
        Access::Protected if !authenticated => AppPath::Login,
        Access::Public | Access::Protected => path.clone(),
        Access::Unmatched if authenticated => AppPath::dashboard(),
        Access::Unmatched => AppPath::Login,
    }
}

/// Follow [`resolve`] until the destination stops changing
pub fn settle(path: &AppPath, session: &Session) -> AppPath {
    let mut current = path.clone();
    for _ in 0..MAX_HOPS {
        let next = resolve(&current, session);
        if next == current {
            break;
        }
        current = next;
    }
    current
}
