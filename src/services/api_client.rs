// ============================================================================
// API CLIENT - HTTP only, no dashboard state
// ============================================================================
// The bearer token set here is attached to every request that follows, the
// way a shared HTTP client carries default headers.
// ============================================================================

use std::cell::RefCell;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse, MultipartPayload};
use crate::services::error::ApiError;
use crate::services::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

/// Backend operations used by the dashboard
#[async_trait(?Send)]
pub trait AdminApi {
    /// Replaces (or with `None` removes) the bearer credential sent from now on
    fn set_bearer_token(&self, token: Option<&str>);

    fn bearer_token(&self) -> Option<String>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Raw JSON of a list endpoint; shape checks are left to the caller
    async fn fetch_collection(&self, path: &str) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;

    async fn send_car(
        &self,
        method: SubmitMethod,
        path: &str,
        payload: &MultipartPayload,
    ) -> Result<(), ApiError>;
}

/// `AdminApi` over `fetch` via gloo-net
#[derive(Debug)]
pub struct HttpApiClient {
    base_url: String,
    bearer: RefCell<Option<String>>,
}

impl HttpApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: RefCell::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer.borrow().as_deref() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    fn form_data(payload: &MultipartPayload) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        for (name, value) in &payload.fields {
            form.append_with_str(name, value)?;
        }

        for image in &payload.files {
            let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
            let parts = js_sys::Array::of1(&bytes);
            let options = BlobPropertyBag::new();
            options.set_type(&image.content_type);
            let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
            form.append_with_blob_and_filename(payload.file_field(), &blob, &image.file_name)?;
        }

        Ok(form)
    }
}

impl Default for HttpApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl AdminApi for HttpApiClient {
    fn set_bearer_token(&self, token: Option<&str>) {
        *self.bearer.borrow_mut() = token.map(str::to_string);
    }

    fn bearer_token(&self) -> Option<String> {
        self.bearer.borrow().clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url(routes::LOGIN);
        log::info!("🔐 [API] POST {} ({})", url, request.email);

        let response = Request::post(&url)
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let response = Self::check(response).await?;

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Malformed(format!("login body: {}", e)))
    }

    async fn fetch_collection(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        log::debug!("📋 [API] GET {}", url);

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(network)?;
        let response = Self::check(response).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Malformed(format!("{}: {}", path, e)))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::info!("🗑️ [API] DELETE {}", url);

        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(network)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn send_car(
        &self,
        method: SubmitMethod,
        path: &str,
        payload: &MultipartPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        log::info!(
            "🚗 [API] {:?} {} ({} fields, {} images)",
            method,
            url,
            payload.fields.len(),
            payload.files.len()
        );

        let form = Self::form_data(payload)
            .map_err(|e| ApiError::Network(format!("Request build error: {:?}", e)))?;

        // No explicit Content-Type: the browser adds the multipart boundary
        let builder = match method {
            SubmitMethod::Post => Request::post(&url),
            SubmitMethod::Put => Request::put(&url),
        };
        let response = self
            .authorize(builder)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        Self::check(response).await?;
        Ok(())
    }
}
