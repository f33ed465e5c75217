//! Client session: the persisted authentication flag and its transitions

pub mod gate;
pub mod storage;

pub use gate::{settle, AppPath};
pub use storage::{KeyValueStore, StorageError};

/// Storage key for the authentication flag (`"true"` / `"false"` / absent)
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Storage key for the opaque session token
pub const TOKEN_KEY: &str = "token";

/// Two-state session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// What the client believes about the current user.
///
/// The flag is trusted as stored; nothing checks the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    is_authenticated: bool,
    token: Option<String>,
}

impl Session {
    #[cfg(test)]
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token.into()),
        }
    }

    /// Read the session from storage. Only the exact string `"true"` counts.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let is_authenticated = store.get_item(AUTH_FLAG_KEY)?.as_deref() == Some("true");
        let token = store.get_item(TOKEN_KEY)?;
        Ok(Self {
            is_authenticated,
            token,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn state(&self) -> AuthState {
        if self.is_authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    /// Anonymous -> Authenticated. The in-memory session changes even if the
    /// write fails, the error is returned for the caller to report.
    pub fn sign_in(
        &mut self,
        store: &mut dyn KeyValueStore,
        token: &str,
    ) -> Result<(), StorageError> {
        self.is_authenticated = true;
        self.token = Some(token.to_string());

        store.set_item(TOKEN_KEY, token)?;
        store.set_item(AUTH_FLAG_KEY, "true")
    }

    /// Authenticated -> Anonymous. Removes both keys, the flag first since it
    /// is what `load` trusts. Both removals are attempted; the first error wins.
    pub fn sign_out(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        self.is_authenticated = false;
        self.token = None;

        let flag = store.remove_item(AUTH_FLAG_KEY);
        let token = store.remove_item(TOKEN_KEY);
        flag.and(token)
    }
}

#[cfg(test)]
mod tests {
    use super::storage::MemoryStorage;
    use super::*;

    #[test]
    fn absent_flag_is_anonymous() {
        let store = MemoryStorage::default();
        let session = Session::load(&store).unwrap();
        assert_eq!(session.state(), AuthState::Anonymous);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn only_literal_true_authenticates() {
        for (raw, expected) in [
            ("true", AuthState::Authenticated),
            ("false", AuthState::Anonymous),
            ("TRUE", AuthState::Anonymous),
            ("1", AuthState::Anonymous),
            ("", AuthState::Anonymous),
        ] {
            let mut store = MemoryStorage::default();
            store.set_item(AUTH_FLAG_KEY, raw).unwrap();
            assert_eq!(Session::load(&store).unwrap().state(), expected, "{raw:?}");
        }
    }

    #[test]
    fn sign_in_then_out_updates_storage() {
        let mut store = MemoryStorage::default();
        let mut session = Session::default();

        session.sign_in(&mut store, "dummy-token").unwrap();
        assert_eq!(session.state(), AuthState::Authenticated);
        assert_eq!(store.get_item(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("dummy-token"));
        assert_eq!(Session::load(&store).unwrap(), session);

        session.sign_out(&mut store).unwrap();
        assert_eq!(session.state(), AuthState::Anonymous);
        assert_eq!(store.get_item(AUTH_FLAG_KEY).unwrap(), None);
        assert_eq!(store.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(Session::load(&store).unwrap(), Session::default());
    }

    struct ReadOnly;

    impl KeyValueStore for ReadOnly {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn failed_write_still_transitions() {
        let mut session = Session::default();
        assert!(session.sign_in(&mut ReadOnly, "t").is_err());
        assert!(session.is_authenticated());

        assert!(session.sign_out(&mut ReadOnly).is_err());
        assert!(!session.is_authenticated());
    }

    /// Accepts everything except removing the token
    #[derive(Default)]
    struct StuckToken(MemoryStorage);

    impl KeyValueStore for StuckToken {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }
        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value)
        }
        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            if key == TOKEN_KEY {
                return Err(StorageError::Unavailable);
            }
            self.0.remove_item(key)
        }
    }

    #[test]
    fn failed_token_removal_still_clears_the_flag() {
        let mut store = StuckToken::default();
        let mut session = Session::default();
        session.sign_in(&mut store, "dummy-token").unwrap();

        assert!(session.sign_out(&mut store).is_err());
        assert!(!session.is_authenticated());
        assert_eq!(store.get_item(AUTH_FLAG_KEY).unwrap(), None);
        assert_eq!(Session::load(&store).unwrap().state(), AuthState::Anonymous);
    }
}
