// ============================================================================
// ADMIN VIEWMODEL - dashboard logic (session, collections, car form)
// ============================================================================
// Views call in, the viewmodel talks to the API and writes AdminState, then
// notifies subscribers so the app re-renders.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::services::{AdminApi, ApiError};
use crate::state::{AdminState, Notice, Section};

pub(crate) const SESSION_EXPIRED: &str = "Session expired, please log in again";

#[derive(Clone)]
pub struct AdminViewModel {
    pub(crate) api: Rc<dyn AdminApi>,
    pub(crate) state: AdminState,
}

impl fmt::Debug for AdminViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminViewModel")
            .field("session", &self.state.session)
            .field("section", &self.state.get_section())
            .finish()
    }
}

impl AdminViewModel {
    pub fn new(api: Rc<dyn AdminApi>, state: AdminState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// Switches the visible panel; nothing is fetched
    pub fn select_section(&self, section: Section) {
        self.state.set_section(section);
        self.state.notify_subscribers();
    }

    pub fn dismiss_notice(&self, index: usize) {
        self.state.dismiss_notice(index);
        self.state.notify_subscribers();
    }

    /// Common failure path for calls made under a session.
    ///
    /// Rejected credentials end the session; anything else becomes `message`.
    pub(crate) fn report_failure(&self, tag: &str, error: &ApiError, message: String) {
        if error.is_auth_rejection() {
            log::warn!("🔒 [{}] Credentials rejected: {}", tag, error);
            self.expire_session();
            return;
        }
        log::error!("❌ [{}] {}", tag, error);
        self.state.push_notice(Notice::error(message));
    }

    /// Forced logout after the backend rejected the token.
    ///
    /// Unlike `logout`, the car form and section survive so an interrupted
    /// edit can be retried after signing in again.
    pub(crate) fn expire_session(&self) {
        if !self.state.session.is_authenticated() {
            return;
        }
        self.end_session();
        self.state.clear_collections();
        self.state.push_notice(Notice::error(SESSION_EXPIRED));
        self.state.notify_subscribers();
    }
}
