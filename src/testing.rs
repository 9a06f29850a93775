// ============================================================================
// TEST DOUBLES - in-memory storage and a scripted backend
// ============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::models::{AdminProfile, LoginRequest, LoginResponse, MultipartPayload, Session};
use crate::services::{routes, AdminApi, ApiError, SubmitMethod};
use crate::state::{AdminState, SessionState};
use crate::utils::{KeyValueStore, StorageError};
use crate::viewmodels::AdminViewModel;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
    rejected: RefCell<HashSet<String>>,
}

impl MemoryStore {
    /// Makes every later write to `key` fail, like a full quota
    pub fn reject_key(&self, key: &str) {
        self.rejected.borrow_mut().insert(key.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.rejected.borrow().contains(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub bearer: Option<String>,
    pub payload: Option<MultipartPayload>,
}

/// Backend double: serves JSON per path, applies deletes and car writes to
/// its own collections so a follow-up fetch sees the change, and records
/// every request with the bearer it carried.
#[derive(Debug, Default)]
pub struct FakeAdminApi {
    bearer: RefCell<Option<String>>,
    requests: RefCell<Vec<RecordedRequest>>,
    login_result: RefCell<Option<Result<LoginResponse, ApiError>>>,
    collections: RefCell<HashMap<String, Result<Value, ApiError>>>,
    failures: RefCell<HashMap<(&'static str, String), ApiError>>,
    next_id: RefCell<u32>,
}

impl FakeAdminApi {
    pub fn login_with(&self, result: Result<LoginResponse, ApiError>) {
        *self.login_result.borrow_mut() = Some(result);
    }

    pub fn serve(&self, path: &str, body: Value) {
        self.collections.borrow_mut().insert(path.to_string(), Ok(body));
    }

    pub fn serve_error(&self, path: &str, error: ApiError) {
        self.collections.borrow_mut().insert(path.to_string(), Err(error));
    }

    /// Fails the next `method` request on `path` (DELETE, POST, PUT)
    pub fn fail(&self, method: &'static str, path: &str, error: ApiError) {
        self.failures.borrow_mut().insert((method, path.to_string()), error);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_with(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    fn record(&self, method: &'static str, path: &str, payload: Option<&MultipartPayload>) {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            bearer: self.bearer.borrow().clone(),
            payload: payload.cloned(),
        });
    }

    fn take_failure(&self, method: &'static str, path: &str) -> Option<ApiError> {
        self.failures.borrow_mut().remove(&(method, path.to_string()))
    }

    fn with_items(&self, path: &str, apply: impl FnOnce(&mut Vec<Value>)) {
        let mut collections = self.collections.borrow_mut();
        let entry = collections
            .entry(path.to_string())
            .or_insert_with(|| Ok(json!([])));
        if let Ok(Value::Array(items)) = entry {
            apply(items);
        }
    }
}

fn payload_object(payload: &MultipartPayload) -> Map<String, Value> {
    payload
        .fields
        .iter()
        .map(|(k, v)| {
            // Multipart sends text; the backend stores checkbox fields as booleans
            let value = match v.parse::<bool>() {
                Ok(flag) => Value::Bool(flag),
                Err(_) => Value::String(v.clone()),
            };
            (k.to_string(), value)
        })
        .collect()
}

#[async_trait(?Send)]
impl AdminApi for FakeAdminApi {
    fn set_bearer_token(&self, token: Option<&str>) {
        *self.bearer.borrow_mut() = token.map(str::to_string);
    }

    fn bearer_token(&self) -> Option<String> {
        self.bearer.borrow().clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record("POST", routes::LOGIN, None);
        self.login_result.borrow().clone().unwrap_or(Err(ApiError::Unauthorized {
            status: 401,
            message: Some("Invalid credentials".into()),
        }))
    }

    async fn fetch_collection(&self, path: &str) -> Result<Value, ApiError> {
        self.record("GET", path, None);
        self.collections
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(json!([])))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.record("DELETE", path, None);
        if let Some(error) = self.take_failure("DELETE", path) {
            return Err(error);
        }
        if let Some((parent, id)) = path.rsplit_once('/') {
            self.with_items(parent, |items| items.retain(|item| item["_id"] != id));
        }
        Ok(())
    }

    async fn send_car(
        &self,
        method: SubmitMethod,
        path: &str,
        payload: &MultipartPayload,
    ) -> Result<(), ApiError> {
        let verb = match method {
            SubmitMethod::Post => "POST",
            SubmitMethod::Put => "PUT",
        };
        self.record(verb, path, Some(payload));
        if let Some(error) = self.take_failure(verb, path) {
            return Err(error);
        }

        let fields = payload_object(payload);
        match method {
            SubmitMethod::Post => {
                let id = {
                    let mut next = self.next_id.borrow_mut();
                    *next += 1;
                    format!("car-new-{}", next)
                };
                self.with_items(routes::CARS, |items| {
                    let mut car = fields;
                    car.insert("_id".into(), Value::String(id));
                    items.push(Value::Object(car));
                });
            }
            SubmitMethod::Put => {
                let id = path.rsplit('/').next().unwrap_or_default().to_string();
                self.with_items(routes::CARS, |items| {
                    for item in items.iter_mut().filter(|item| item["_id"] == id.as_str()) {
                        if let Value::Object(car) = item {
                            car.extend(fields.clone());
                        }
                    }
                });
            }
        }
        Ok(())
    }
}

pub struct Harness {
    pub vm: AdminViewModel,
    pub api: Rc<FakeAdminApi>,
    pub store: Rc<MemoryStore>,
}

impl Harness {
    pub fn anonymous() -> Self {
        let api = Rc::new(FakeAdminApi::default());
        let store = Rc::new(MemoryStore::default());
        let state = AdminState::new(SessionState::new(store.clone()));
        let vm = AdminViewModel::new(api.clone(), state);
        Self { vm, api, store }
    }

    /// Harness whose fake backend accepts the next login
    pub fn accepting_login(token: &str) -> Self {
        let harness = Self::anonymous();
        harness.api.login_with(Ok(login_ok(token)));
        harness
    }

    /// Logged in through the normal login path, request log cleared
    pub fn authenticated() -> Self {
        let harness = Self::accepting_login("jwt-test");
        assert!(futures::executor::block_on(harness.vm.login("admin@admin.com", "admin123")));
        harness.api.clear_requests();
        harness
    }

    pub fn state(&self) -> &AdminState {
        self.vm.state()
    }
}

pub fn admin_profile() -> AdminProfile {
    AdminProfile::new(json!({ "_id": "admin-1", "name": "Ops Desk", "email": "admin@admin.com" }))
}

pub fn login_ok(token: &str) -> LoginResponse {
    LoginResponse {
        admin: Some(admin_profile().raw().clone()),
        token: Some(token.to_string()),
        message: None,
    }
}

pub fn session(token: &str) -> Session {
    Session::new(admin_profile(), token).expect("non-blank token")
}

pub fn creta() -> Value {
    json!({
        "_id": "car123",
        "type": "SUV",
        "model": "Creta",
        "name": "Creta 2024",
        "fuel": "Diesel",
        "seats": 5,
        "transmission": "Manual",
        "pricePerDay": 1500,
        "available": true,
        "images": ["creta.jpg"]
    })
}
