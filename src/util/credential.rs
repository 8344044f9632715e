//! Persisted bearer credential.
//!
//! The token issued at login lives in `localStorage` so a reload can resolve
//! the admin identity without signing in again. Requires a browser
//! environment; on the server nothing is ever stored.

/// Storage for the single bearer credential.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed credential under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageCredential {
    key: String,
}

impl LocalStorageCredential {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for LocalStorageCredential {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("failed to persist admin credential");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.remove_item(&self.key).is_err() {
                    log::warn!("failed to remove admin credential");
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;

    use super::CredentialStore;

    /// In-memory store for tests.
    #[derive(Debug, Default)]
    pub struct MemoryCredential {
        token: RefCell<Option<String>>,
    }

    impl MemoryCredential {
        pub fn with_token(token: &str) -> Self {
            Self { token: RefCell::new(Some(token.to_owned())) }
        }
    }

    impl CredentialStore for MemoryCredential {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_owned());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }
}
