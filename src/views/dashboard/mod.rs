//! Post-login area: shell layout plus its pages

mod home;
mod modal;
mod section;
mod shell;
mod sidebar;
mod topbar;

pub use home::DashboardHome;
pub use section::DashboardSection;
pub use shell::DashboardShell;
