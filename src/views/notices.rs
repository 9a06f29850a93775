// ============================================================================
// NOTICES - dismissible alert banners
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::NoticeKind;
use crate::viewmodels::AdminViewModel;

pub fn render_notices(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let mut stack = ElementBuilder::new("div")?.class("notices");

    for (index, notice) in vm.state().get_notices().into_iter().enumerate() {
        let class = match notice.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        };

        let close = ElementBuilder::new("button")?
            .class("notice-close")
            .attr("type", "button")?
            .attr("aria-label", "Dismiss")?
            .text("×")
            .build();
        {
            let vm = vm.clone();
            on_click(&close, move |_| vm.dismiss_notice(index))?;
        }

        let banner = ElementBuilder::new("div")?
            .class(class)
            .attr("role", "alert")?
            .child(ElementBuilder::new("span")?.text(&notice.message).build())?
            .child(close)?
            .build();
        stack = stack.child(banner)?;
    }

    Ok(stack.build())
}
