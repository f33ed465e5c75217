//! Global snackbar notification

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier class
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Info => "toast-info",
            Severity::Warning => "toast-warning",
            Severity::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}

/// Why the snackbar is being closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Timeout,
    ClickAway,
    Dismissed,
}

/// Current snackbar contents.
///
/// Every `show` bumps the generation; auto-hide timers carry the generation
/// they were started for so they cannot close a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    current: Option<Notification>,
    open: bool,
    generation: u64,
}

impl NotificationState {
    /// Replace the current notification and open it. Returns its generation.
    pub fn show(&mut self, notification: Notification) -> u64 {
        tracing::info!("{notification}");
        self.generation += 1;
        self.current = Some(notification);
        self.open = true;
        self.generation
    }

    /// Close the snackbar. Returns whether anything changed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if reason == CloseReason::ClickAway || !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// Auto-hide for the notification shown at `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.close(CloseReason::Timeout)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The visible notification, if any
    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|_| self.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_opens_and_replaces() {
        let mut state = NotificationState::default();
        assert!(state.visible().is_none());

        state.show(Notification::info("first"));
        state.show(Notification::success("second"));
        let visible = state.visible().unwrap();
        assert_eq!(visible.message, "second");
        assert_eq!(visible.severity, Severity::Success);
    }

    #[test]
    fn clickaway_is_ignored() {
        let mut state = NotificationState::default();
        state.show(Notification::error("boom"));
        assert!(!state.close(CloseReason::ClickAway));
        assert!(state.visible().is_some());

        assert!(state.close(CloseReason::Dismissed));
        assert!(state.visible().is_none());
        assert!(!state.close(CloseReason::Dismissed));
    }

    #[test]
    fn stale_timer_does_not_close_newer_message() {
        let mut state = NotificationState::default();
        let first = state.show(Notification::info("Creating your account..."));
        let second = state.show(Notification::success("Registration successful!"));

        assert!(!state.expire(first));
        assert_eq!(state.visible().unwrap().message, "Registration successful!");

        assert!(state.expire(second));
        assert!(state.visible().is_none());
    }
}
