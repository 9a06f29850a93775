// ============================================================================
// SIDEBAR - section navigation + logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::Section;
use crate::viewmodels::AdminViewModel;

pub fn render_sidebar(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let active = vm.state().get_section();
    let editing = vm.state().car_form.borrow().is_editing();

    let mut nav = ElementBuilder::new("nav")?
        .class("sidebar")
        .child(ElementBuilder::new("h1")?.text("Admin Panel").build())?;

    for section in Section::ALL {
        let class = if section == active { "nav-item active" } else { "nav-item" };
        let item = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .text(section.label(editing))
            .build();
        {
            let vm = vm.clone();
            on_click(&item, move |_| vm.select_section(section))?;
        }
        nav = nav.child(item)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("btn btn-danger logout")
        .attr("type", "button")?
        .text("Logout")
        .build();
    {
        let vm = vm.clone();
        on_click(&logout, move |_| vm.logout())?;
    }

    Ok(nav.child(logout)?.build())
}
