//! Session Store
//!
//! Holds the bearer token between page loads. Views talk to the
//! [`SessionProvider`] trait so tests can swap in an in-memory store.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("failed to write session: {0}")]
    Write(String),
}

/// Access to the single stored bearer token
pub trait SessionProvider {
    /// Current token, if any. An empty stored value counts as absent.
    fn get(&self) -> Option<String>;

    /// Store a token, replacing any previous one
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Forget the token
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Token persisted in `window.localStorage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalStorageSession {
    key: &'static str,
}

impl LocalStorageSession {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionProvider for LocalStorageSession {
    fn get(&self) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(self.key) {
            Ok(value) => value.filter(|token| !token.is_empty()),
            Err(e) => {
                log::warn!("failed to read session key '{}': {:?}", self.key, e);
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(self.key, token)
            .map_err(|e| SessionError::Write(format!("{:?}", e)))?;
        log::debug!("session stored");
        Ok(())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(self.key) {
                log::warn!("failed to clear session key '{}': {:?}", self.key, e);
            }
        }
        log::debug!("session cleared");
    }
}

/// In-memory session for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySession {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::cell::RefCell::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl SessionProvider for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone().filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
