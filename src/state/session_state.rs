// ============================================================================
// SESSION STATE - admin identity + token, mirrored to persistent storage
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::models::{AdminProfile, Session};
use crate::utils::{KeyValueStore, ADMIN_PROFILE_KEY, ADMIN_TOKEN_KEY};

/// Single source of truth for the auth status, shared by every operation
/// that talks to the backend.
#[derive(Clone)]
pub struct SessionState {
    current: Rc<RefCell<Option<Session>>>,
    storage: Rc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionState {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
            storage,
        }
    }

    /// Loads a persisted session into memory.
    ///
    /// Both slots must be present and readable; otherwise any leftover slot is
    /// removed and the session stays anonymous.
    pub fn restore(&self) -> Option<Session> {
        let profile = self
            .storage
            .get(ADMIN_PROFILE_KEY)
            .and_then(|raw| match serde_json::from_str::<AdminProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    log::warn!("⚠️ [SESSION] Stored admin profile unreadable: {}", e);
                    None
                }
            });
        let token = self.storage.get(ADMIN_TOKEN_KEY);

        let restored = match (profile, token) {
            (Some(profile), Some(token)) => Session::new(profile, token),
            _ => None,
        };

        match &restored {
            Some(session) => {
                log::info!("💾 [SESSION] Restored session for {}", session.admin().display_name());
            }
            None => self.remove_slots(),
        }

        *self.current.borrow_mut() = restored.clone();
        restored
    }

    /// Persists then installs a freshly authenticated session
    pub fn establish(&self, session: Session) {
        if let Err(e) = self.persist(&session) {
            log::warn!("⚠️ [SESSION] Session not persisted, it will not survive a reload: {}", e);
            self.remove_slots();
        }
        *self.current.borrow_mut() = Some(session);
    }

    /// Drops the session from memory and storage
    pub fn clear(&self) {
        self.remove_slots();
        *self.current.borrow_mut() = None;
    }

    pub fn get_session(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token().to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    fn persist(&self, session: &Session) -> Result<(), String> {
        let profile = serde_json::to_string(session.admin()).map_err(|e| e.to_string())?;
        self.storage
            .set(ADMIN_PROFILE_KEY, &profile)
            .map_err(|e| e.to_string())?;
        self.storage
            .set(ADMIN_TOKEN_KEY, session.token())
            .map_err(|e| e.to_string())
    }

    fn remove_slots(&self) {
        self.storage.remove(ADMIN_PROFILE_KEY);
        self.storage.remove(ADMIN_TOKEN_KEY);
    }
}
