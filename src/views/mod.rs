//! Views module - all page components

mod auth_card;

mod dashboard;
pub use dashboard::{DashboardHome, DashboardSection, DashboardShell};

mod guard;
pub use guard::{NotFound, Root};

mod login;
pub use login::Login;

mod otp;
pub use otp::OtpVerification;

mod register;
pub use register::Register;

mod toast;
pub use toast::{Notifier, Toast};
