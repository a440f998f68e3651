//! Session state and persistence.
//!
//! The session store holds the current identity derived from a persisted
//! bearer token. Persistence goes through the [`SessionBackend`] trait so
//! the store can be backed by a file on disk (the durable analog of the
//! original client's fixed-key browser storage) or by memory in tests.

use crate::error::{ClientError, Result};
use resonate_core::{UserId, UserType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info, warn};

/// The persisted part of a session.
///
/// Serialized with the same fixed key names the original client used
/// for its browser-local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(rename = "token")]
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "userType", default)]
    pub user_type: Option<UserType>,
}

/// Client-side authentication state.
///
/// `Anonymous -> PendingVerification` on registration,
/// `Anonymous/PendingVerification -> Authenticated` on login,
/// any state `-> Anonymous` on logout. Pending accounts become
/// login-able only through the emailed confirmation link, which is
/// out of band and not modeled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No session
    Anonymous,
    /// Account created, email verification outstanding
    PendingVerification { email: String, user_type: UserType },
    /// Logged in with a persisted token
    Authenticated(PersistedSession),
}

/// Durable storage for the persisted session record.
pub trait SessionBackend: Send + Sync {
    /// Load the persisted session, if any.
    fn load(&self) -> Result<Option<PersistedSession>>;

    /// Persist the session, replacing any previous record.
    fn store(&self, session: &PersistedSession) -> Result<()>;

    /// Remove the persisted session. Removing an absent record is not
    /// an error.
    fn clear(&self) -> Result<()>;
}

/// Holds the current session and keeps it in sync with its backend.
///
/// The in-memory state is behind an `RwLock`: request paths read the
/// token while an explicit logout may clear it concurrently. In-flight
/// requests are not cancelled by logout; requests issued afterwards
/// fail with [`ClientError::AuthRequired`].
pub struct SessionStore {
    backend: Box<dyn SessionBackend>,
    state: RwLock<AuthState>,
}

impl SessionStore {
    /// Open a session store, restoring any persisted session.
    pub fn open(backend: Box<dyn SessionBackend>) -> Result<Self> {
        let state = match backend.load()? {
            Some(session) => {
                debug!(user_id = %session.user_id, "Restored persisted session");
                AuthState::Authenticated(session)
            }
            None => AuthState::Anonymous,
        };

        Ok(Self {
            backend,
            state: RwLock::new(state),
        })
    }

    /// Open a store with no persistence (memory only).
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemorySessionBackend::default()),
            state: RwLock::new(AuthState::Anonymous),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.read().expect("session lock poisoned").clone()
    }

    /// Current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        match &*self.state.read().expect("session lock poisoned") {
            AuthState::Authenticated(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    /// Current user id, if known (authenticated sessions only).
    pub fn user_id(&self) -> Option<UserId> {
        match &*self.state.read().expect("session lock poisoned") {
            AuthState::Authenticated(session) => Some(session.user_id.clone()),
            _ => None,
        }
    }

    /// Current user type, if known.
    ///
    /// Available for pending registrations too, so the account kind can
    /// be queried without a network round trip.
    pub fn user_type(&self) -> Option<UserType> {
        match &*self.state.read().expect("session lock poisoned") {
            AuthState::Authenticated(session) => session.user_type,
            AuthState::PendingVerification { user_type, .. } => Some(*user_type),
            AuthState::Anonymous => None,
        }
    }

    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        matches!(
            &*self.state.read().expect("session lock poisoned"),
            AuthState::Authenticated(_)
        )
    }

    /// Persist a session and transition to `Authenticated`.
    ///
    /// On persistence failure the in-memory state is left unchanged.
    pub(crate) fn establish(&self, session: PersistedSession) -> Result<()> {
        self.backend.store(&session)?;
        let mut state = self.state.write().expect("session lock poisoned");
        *state = AuthState::Authenticated(session);
        Ok(())
    }

    /// Transition to `PendingVerification` after a registration.
    ///
    /// Any persisted session is removed as well: the backend never
    /// holds a token for a pending account, so reopening the store
    /// cannot restore the previous user.
    pub(crate) fn mark_pending(&self, email: impl Into<String>, user_type: UserType) {
        {
            let mut state = self.state.write().expect("session lock poisoned");
            *state = AuthState::PendingVerification {
                email: email.into(),
                user_type,
            };
        }
        if let Err(e) = self.backend.clear() {
            warn!(error = %e, "Failed to remove persisted session");
        }
    }

    /// Clear the session unconditionally, from any state.
    ///
    /// Synchronous and infallible: the in-memory state always resets;
    /// a failed backend removal is logged, not surfaced.
    pub fn logout(&self) {
        {
            let mut state = self.state.write().expect("session lock poisoned");
            *state = AuthState::Anonymous;
        }
        if let Err(e) = self.backend.clear() {
            warn!(error = %e, "Failed to remove persisted session");
        } else {
            info!("Logged out");
        }
    }
}

/// File-backed session persistence (JSON, one record).
pub struct FileSessionBackend {
    path: PathBuf,
}

impl FileSessionBackend {
    /// Persist at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist at the platform's config dir (`<config>/resonate/session.json`).
    pub fn default_path() -> Result<Self> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ClientError::SessionStorage("No config directory available".into())
        })?;
        Ok(Self::new(dir.join("resonate").join("session.json")))
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for FileSessionBackend {
    fn load(&self) -> Result<Option<PersistedSession>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session = serde_json::from_str(&data)
            .map_err(|e| ClientError::SessionStorage(format!("Corrupt session file: {e}")))?;
        Ok(Some(session))
    }

    fn store(&self, session: &PersistedSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(session)
            .map_err(|e| ClientError::SessionStorage(e.to_string()))?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session persistence, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionBackend {
    inner: RwLock<Option<PersistedSession>>,
}

impl SessionBackend for MemorySessionBackend {
    fn load(&self) -> Result<Option<PersistedSession>> {
        Ok(self.inner.read().expect("backend lock poisoned").clone())
    }

    fn store(&self, session: &PersistedSession) -> Result<()> {
        *self.inner.write().expect("backend lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.write().expect("backend lock poisoned") = None;
        Ok(())
    }
}
