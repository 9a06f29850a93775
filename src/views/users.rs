// ============================================================================
// USERS PANEL
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, confirm, on_click, ElementBuilder};
use crate::models::Keyed;
use crate::utils::or_missing;
use crate::viewmodels::AdminViewModel;
use crate::views::table::{render_table, text_row};

pub fn render_users(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let users = vm.state().users.borrow().clone();

    let mut rows = Vec::with_capacity(users.len());
    for user in &users {
        let row = text_row(&[or_missing(user.name.as_deref()), or_missing(user.email.as_deref())])?;

        let delete_btn = ElementBuilder::new("button")?
            .class("btn btn-danger btn-sm")
            .text("Delete")
            .build();
        {
            let vm = vm.clone();
            let id = user.key().to_string();
            on_click(&delete_btn, move |_| {
                if !confirm("Are you sure you want to delete this user?") {
                    return;
                }
                let vm = vm.clone();
                let id = id.clone();
                spawn_local(async move {
                    vm.delete_user(&id).await;
                });
            })?;
        }

        let actions = ElementBuilder::new("td")?.child(delete_btn)?.build();
        append_child(&row, &actions)?;
        rows.push(row);
    }

    render_table("Registered Users", &["Name", "Email", "Actions"], rows, "No users found.")
}
