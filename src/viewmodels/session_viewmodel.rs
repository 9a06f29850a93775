// ============================================================================
// SESSION VIEWMODEL - login / logout / restore
// ============================================================================

use crate::models::{LoginRequest, Session};
use crate::state::Notice;
use crate::viewmodels::AdminViewModel;

const LOGIN_FAILED: &str = "Login Failed";

impl AdminViewModel {
    /// Cold start: picks up a persisted session and loads the dashboard
    pub async fn start(&self) {
        match self.state.session.restore() {
            Some(session) => {
                self.api.set_bearer_token(Some(session.token()));
                self.state.notify_subscribers();
                self.refresh_all().await;
            }
            None => {
                self.api.set_bearer_token(None);
                log::info!("👤 [SESSION] No stored session, showing login");
            }
        }
    }

    pub fn set_login_email(&self, email: String) {
        self.state.login_draft.borrow_mut().email = email;
    }

    pub fn set_login_password(&self, password: String) {
        self.state.login_draft.borrow_mut().password = password;
    }

    /// Logs in with the credentials typed into the login form
    pub async fn submit_login(&self) -> bool {
        let draft = self.state.login_draft.borrow().clone();
        self.login(&draft.email, &draft.password).await
    }

    /// Returns whether the session is now authenticated.
    ///
    /// A failed attempt leaves the previous session and storage as they were.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let Some(guard) = self.state.begin_loading() else {
            log::warn!("⏳ [LOGIN] Another request is in flight, ignoring");
            return false;
        };
        self.state.notify_subscribers();

        log::info!("🔐 [LOGIN] Signing in {}", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let outcome = match self.api.login(&request).await {
            Ok(response) => {
                let message = response.message.clone();
                Session::from_login(response).ok_or_else(|| {
                    log::error!("❌ [LOGIN] Response without admin profile or token");
                    message.unwrap_or_else(|| LOGIN_FAILED.to_string())
                })
            }
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                Err(e.user_message(LOGIN_FAILED))
            }
        };
        guard.release();

        match outcome {
            Ok(session) => {
                log::info!("✅ [LOGIN] Signed in as {}", session.admin().display_name());
                self.api.set_bearer_token(Some(session.token()));
                self.state.session.establish(session);
                self.state.login_draft.borrow_mut().password.clear();
                self.state.notify_subscribers();
                self.refresh_all().await;
                true
            }
            Err(message) => {
                self.state.push_notice(Notice::error(message));
                self.state.notify_subscribers();
                false
            }
        }
    }

    pub fn logout(&self) {
        log::info!("🚪 [SESSION] Logout");
        self.end_session();
        self.state.reset_dashboard();
        self.state.notify_subscribers();
    }

    /// Drops the session from memory, storage and the HTTP client
    pub(crate) fn end_session(&self) {
        self.state.session.clear();
        self.api.set_bearer_token(None);
    }
}
