// ============================================================================
// APP VIEW - login screen or dashboard, plus the notice stack
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::Section;
use crate::viewmodels::AdminViewModel;
use crate::views::{
    render_cab_bookings, render_car_form, render_car_list, render_login, render_notices,
    render_self_drive_bookings, render_sidebar, render_users,
};

pub fn render_app(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let body = if vm.state().session.is_authenticated() {
        render_dashboard(vm)?
    } else {
        render_login(vm)?
    };

    ElementBuilder::new("div")?
        .class("admin-app")
        .child(render_notices(vm)?)?
        .child(body)
        .map(ElementBuilder::build)
}

fn render_dashboard(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let panel = match vm.state().get_section() {
        Section::Users => render_users(vm)?,
        Section::CabBookings => render_cab_bookings(vm)?,
        Section::SelfDriveBookings => render_self_drive_bookings(vm)?,
        Section::CarForm => render_car_form(vm)?,
        Section::CarList => render_car_list(vm)?,
    };

    ElementBuilder::new("div")?
        .class("dashboard")
        .child(render_sidebar(vm)?)?
        .child(ElementBuilder::new("main")?.class("content").child(panel)?.build())
        .map(ElementBuilder::build)
}
