//! Authenticated session shared by every API call.
//!
//! The session is an explicit context object handed to [`ApiClient`]. Any 401
//! response funnels through [`SessionContext::invalidate`], which clears the
//! in-memory tokens, removes the persisted session file, and raises a flag the
//! UI polls to route the user back to sign-in.
//!
//! [`ApiClient`]: crate::api::ApiClient

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::config_dir;
use crate::error::Result;

/// Access + refresh token pair issued by sign-in / sign-up
pub struct SessionTokens {
    access: SecretString,
    refresh: SecretString,
}

impl SessionTokens {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: SecretString::from(access.into()),
            refresh: SecretString::from(refresh.into()),
        }
    }

    pub fn access_token(&self) -> &str {
        self.access.expose_secret()
    }

    pub fn refresh_token(&self) -> &str {
        self.refresh.expose_secret()
    }
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedSession {
    access_token: String,
    refresh_token: String,
}

/// File-backed persistence for the session tokens
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<config dir>/session.yaml`
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(config_dir()?.join("session.yaml")))
    }

    pub fn load(&self) -> Result<Option<SessionTokens>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let persisted: PersistedSession = serde_yaml_ng::from_str(&content)?;
        Ok(Some(SessionTokens::new(
            persisted.access_token,
            persisted.refresh_token,
        )))
    }

    pub fn save(&self, tokens: &SessionTokens) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let persisted = PersistedSession {
            access_token: tokens.access_token().to_string(),
            refresh_token: tokens.refresh_token().to_string(),
        };
        fs::write(&self.path, serde_yaml_ng::to_string(&persisted)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

struct SessionInner {
    tokens: RwLock<Option<SessionTokens>>,
    store: Option<SessionStore>,
    invalidated: AtomicBool,
}

/// Process-wide session, cheap to clone
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<SessionInner>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .field("invalidated", &self.was_invalidated())
            .finish()
    }
}

impl SessionContext {
    /// Session that lives only in memory
    pub fn in_memory(tokens: Option<SessionTokens>) -> Self {
        Self::build(tokens, None)
    }

    /// Session restored from (and persisted to) the given store
    pub fn persistent(store: SessionStore) -> Result<Self> {
        let tokens = store.load()?;
        Ok(Self::build(tokens, Some(store)))
    }

    fn build(tokens: Option<SessionTokens>, store: Option<SessionStore>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                tokens: RwLock::new(tokens),
                store,
                invalidated: AtomicBool::new(false),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.tokens.read().is_some()
    }

    /// Value for the `Authorization` header, read fresh before every request
    pub fn bearer(&self) -> Option<String> {
        self.inner
            .tokens
            .read()
            .as_ref()
            .map(|t| format!("Bearer {}", t.access_token()))
    }

    /// Install a freshly issued token pair
    pub fn sign_in(&self, tokens: SessionTokens) -> Result<()> {
        if let Some(store) = &self.inner.store {
            store.save(&tokens)?;
        }
        *self.inner.tokens.write() = Some(tokens);
        self.inner.invalidated.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Voluntary sign-out; unlike [`invalidate`](Self::invalidate) it does not
    /// flag the session as expired.
    pub fn sign_out(&self) -> Result<()> {
        *self.inner.tokens.write() = None;
        if let Some(store) = &self.inner.store {
            store.clear()?;
        }
        Ok(())
    }

    /// Single invalidation entry point, called on any 401 response.
    pub fn invalidate(&self) {
        let had_tokens = self.inner.tokens.write().take().is_some();
        self.inner.invalidated.store(true, Ordering::SeqCst);
        if let Some(store) = &self.inner.store
            && let Err(e) = store.clear()
        {
            tracing::warn!("Failed to remove persisted session: {e}");
        }
        if had_tokens {
            tracing::debug!("session invalidated after authorization failure");
        }
    }

    /// Whether a 401 cleared the session since the last sign-in
    pub fn was_invalidated(&self) -> bool {
        self.inner.invalidated.load(Ordering::SeqCst)
    }
}
