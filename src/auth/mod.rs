//! Mock authentication handlers
//!
//! Every request succeeds once the local form checks pass. Success flips the
//! session and yields the notification the views display.

pub mod otp;

use crate::notification::Notification;
use crate::session::{KeyValueStore, Session};

pub use otp::{OtpEntry, OTP_LENGTH};

/// Token written on every successful sign-in
pub const MOCK_TOKEN: &str = "dummy-token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter your email and password")]
    MissingCredentials,
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
    #[error("Please enter the 6-digit code")]
    InvalidOtp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

impl Registration {
    /// Password mismatch is reported before the terms check
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !self.accepted_terms {
            return Err(AuthError::TermsNotAccepted);
        }
        Ok(())
    }

    /// Live hint under the confirmation field
    pub fn confirmation_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }
}

/// The session plus the store it persists to.
///
/// Provided to the view tree as context; the views never touch storage
/// directly.
pub struct SessionContext {
    session: Session,
    store: Box<dyn KeyValueStore>,
}

impl SessionContext {
    /// Rebuild the session from whatever the store holds
    pub fn restore(store: Box<dyn KeyValueStore>) -> Self {
        let session = Session::load(store.as_ref()).unwrap_or_else(|e| {
            tracing::warn!("Could not read stored session, starting anonymous: {e}");
            Session::default()
        });
        tracing::info!(
            "Restored session: {:?} (token present: {})",
            session.state(),
            session.token().is_some()
        );

        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<Notification, AuthError> {
        credentials.validate()?;
        tracing::info!("Login for {}", credentials.email);
        self.sign_in();
        Ok(Notification::success("Login successful!"))
    }

    pub fn register(&mut self, registration: &Registration) -> Result<Notification, AuthError> {
        registration.validate()?;
        tracing::info!("Registered {} <{}>", registration.name, registration.email);
        self.sign_in();
        Ok(Notification::success("Registration successful!"))
    }

    pub fn logout(&mut self) -> Notification {
        if let Err(e) = self.session.sign_out(self.store.as_mut()) {
            tracing::warn!("Failed to clear stored session: {e}");
        }
        tracing::info!("Logged out");
        Notification::success("Logged out successfully!")
    }

    /// Accepts any complete code
    pub fn verify_otp(&self, code: &str) -> Result<Notification, AuthError> {
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::InvalidOtp);
        }
        tracing::info!("OTP verified");
        Ok(Notification::success("OTP verified successfully!"))
    }

    fn sign_in(&mut self) {
        if let Err(e) = self.session.sign_in(self.store.as_mut(), MOCK_TOKEN) {
            tracing::warn!("Failed to persist session: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use crate::session::storage::MemoryStorage;
    use crate::session::{AuthState, AUTH_FLAG_KEY};

    fn context() -> SessionContext {
        SessionContext::restore(Box::new(MemoryStorage::default()))
    }

    fn registration() -> Registration {
        Registration {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            accepted_terms: true,
        }
    }

    #[test]
    fn restore_reads_persisted_flag() {
        let mut store = MemoryStorage::default();
        store.set_item(AUTH_FLAG_KEY, "true").unwrap();
        let ctx = SessionContext::restore(Box::new(store));
        assert_eq!(ctx.session().state(), AuthState::Authenticated);
    }

    #[test]
    fn login_requires_both_fields() {
        let mut ctx = context();
        let missing = Credentials {
            email: "a@b.c".into(),
            password: String::new(),
        };
        assert_eq!(ctx.login(&missing), Err(AuthError::MissingCredentials));
        assert!(!ctx.session().is_authenticated());

        let blank_email = Credentials {
            email: "   ".into(),
            password: "pw".into(),
        };
        assert_eq!(ctx.login(&blank_email), Err(AuthError::MissingCredentials));
    }

    #[test]
    fn login_and_logout_flip_the_session() {
        let mut ctx = context();
        let note = ctx
            .login(&Credentials {
                email: "john@example.com".into(),
                password: "secret".into(),
            })
            .unwrap();
        assert_eq!(note.message, "Login successful!");
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(ctx.session().token(), Some(MOCK_TOKEN));

        let note = ctx.logout();
        assert_eq!(note.message, "Logged out successfully!");
        assert_eq!(ctx.session().state(), AuthState::Anonymous);
        assert_eq!(ctx.session().token(), None);
    }

    #[test]
    fn register_checks_form_in_order() {
        let mut form = registration();
        form.confirm_password = "other".into();
        form.accepted_terms = false;
        assert_eq!(form.validate(), Err(AuthError::PasswordMismatch));
        assert!(form.confirmation_mismatch());

        form.confirm_password = form.password.clone();
        assert_eq!(form.validate(), Err(AuthError::TermsNotAccepted));
        assert_eq!(
            AuthError::TermsNotAccepted.to_string(),
            "You must accept the terms and conditions"
        );

        form.name.clear();
        assert_eq!(form.validate(), Err(AuthError::MissingFields));
        assert_eq!(
            AuthError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn register_signs_in() {
        let mut ctx = context();
        let note = ctx.register(&registration()).unwrap();
        assert_eq!(note.message, "Registration successful!");
        assert!(ctx.session().is_authenticated());
    }

    #[test]
    fn empty_confirmation_is_not_a_mismatch_yet() {
        let mut form = registration();
        form.confirm_password.clear();
        assert!(!form.confirmation_mismatch());
    }

    #[test]
    fn otp_must_be_six_digits() {
        let ctx = context();
        assert!(ctx.verify_otp("123456").is_ok());
        assert_eq!(ctx.verify_otp("12345"), Err(AuthError::InvalidOtp));
        assert_eq!(ctx.verify_otp("12a456"), Err(AuthError::InvalidOtp));
        assert_eq!(
            AuthError::InvalidOtp.to_string(),
            "Please enter the 6-digit code"
        );
    }
}
