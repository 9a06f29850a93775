// ============================================================================
// APP - wires storage, HTTP client, state and viewmodel to the #app root
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::HttpApiClient;
use crate::state::{AdminState, SessionState};
use crate::utils::BrowserStorage;
use crate::viewmodels::AdminViewModel;
use crate::views::render_app;

pub struct App {
    vm: AdminViewModel,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let session = SessionState::new(Rc::new(BrowserStorage));
        let state = AdminState::new(session);
        let vm = AdminViewModel::new(Rc::new(HttpApiClient::new()), state);

        // Batch bursts of notifications into one re-render
        vm.state().subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { vm, root })
    }

    /// Restores a persisted session and loads the collections in the background
    pub fn start(&self) {
        let vm = self.vm.clone();
        spawn_local(async move {
            vm.start().await;
        });
    }

    /// Full re-render from current state
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.vm)?;
        append_child(&self.root, &view)
    }
}
