// ============================================================================
// COLLECTIONS VIEWMODEL - users, cars, cab and self-drive bookings
// ============================================================================
// Each collection refreshes on its own: a failure resets only that list and
// raises one notice. Deletions go to the server and then re-fetch the list.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::services::{routes, ApiError};
use crate::state::{CollectionKind, Notice};
use crate::viewmodels::AdminViewModel;

/// Decodes a list endpoint body; anything but a JSON array is malformed.
///
/// Items are decoded one by one: an item without a usable `_id` is logged
/// and skipped, the rest of the list is kept.
pub fn parse_collection<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    match body {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    log::warn!("⚠️ [FETCH] Skipping list item {}: {}", index, e);
                    None
                }
            })
            .collect()),
        Value::Null => Err(ApiError::Malformed("expected an array, got null".into())),
        Value::Bool(_) => Err(ApiError::Malformed("expected an array, got a boolean".into())),
        Value::Number(_) => Err(ApiError::Malformed("expected an array, got a number".into())),
        Value::String(_) => Err(ApiError::Malformed("expected an array, got a string".into())),
        Value::Object(_) => Err(ApiError::Malformed("expected an array, got an object".into())),
    }
}

impl AdminViewModel {
    /// Runs all four fetchers concurrently; no-op while anonymous
    pub async fn refresh_all(&self) {
        if !self.state.session.is_authenticated() {
            log::debug!("📋 [FETCH] Anonymous, skipping refresh");
            return;
        }
        futures::join!(
            self.refresh(CollectionKind::Users),
            self.refresh(CollectionKind::Cars),
            self.refresh(CollectionKind::CabBookings),
            self.refresh(CollectionKind::SelfDriveBookings),
        );
    }

    pub async fn refresh(&self, kind: CollectionKind) {
        match kind {
            CollectionKind::Users => self.refresh_into(kind, self.state.users.clone()).await,
            CollectionKind::Cars => self.refresh_into(kind, self.state.cars.clone()).await,
            CollectionKind::CabBookings => self.refresh_into(kind, self.state.bookings.clone()).await,
            CollectionKind::SelfDriveBookings => {
                self.refresh_into(kind, self.state.self_drive_bookings.clone()).await
            }
        }
    }

    async fn refresh_into<T: DeserializeOwned>(&self, kind: CollectionKind, slot: Rc<RefCell<Vec<T>>>) {
        let Some(token) = self.state.session.token() else {
            return;
        };

        let result = self
            .api
            .fetch_collection(kind.endpoint())
            .await
            .and_then(parse_collection::<T>);

        // Logged out or re-authenticated while the request was in flight
        if self.state.session.token().as_deref() != Some(token.as_str()) {
            log::warn!("⏭️ [FETCH] Discarding stale {} response", kind.label());
            return;
        }

        match result {
            Ok(items) => {
                log::info!("📋 [FETCH] {} {}", items.len(), kind.label());
                *slot.borrow_mut() = items;
            }
            Err(e) => {
                slot.borrow_mut().clear();
                self.report_failure("FETCH", &e, format!("Failed to fetch {}", kind.label()));
            }
        }
        self.state.notify_subscribers();
    }

    pub async fn delete_user(&self, id: &str) -> bool {
        self.delete_item(CollectionKind::Users, &routes::user_item(id), "User").await
    }

    pub async fn delete_car(&self, id: &str) -> bool {
        self.delete_item(CollectionKind::Cars, &routes::car_item(id), "Car").await
    }

    async fn delete_item(&self, kind: CollectionKind, path: &str, noun: &str) -> bool {
        if !self.state.session.is_authenticated() {
            return false;
        }

        match self.api.delete(path).await {
            Ok(()) => {
                log::info!("🗑️ [DELETE] {}", path);
                self.state.push_notice(Notice::success(format!("{} deleted successfully", noun)));
                self.state.notify_subscribers();
                self.refresh(kind).await;
                true
            }
            Err(e) => {
                self.report_failure(
                    "DELETE",
                    &e,
                    format!("Failed to delete {}", noun.to_lowercase()),
                );
                self.state.notify_subscribers();
                false
            }
        }
    }
}
