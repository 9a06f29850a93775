// ============================================================================
// RENTAL ADMIN PWA - MVVM dashboard in Rust/WASM
// ============================================================================
// - Views: functions that build DOM, no logic
// - ViewModels: dashboard operations
// - Services: backend HTTP only
// - State: Rc<RefCell> state tree + change subscribers
// - Models: records shared with the backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Rental Admin - API {}", CONFIG.api_base_url);

    let app = App::new()?;
    app.render()?;
    app.start();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App not initialised"),
    });
}
