// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, on_value, ElementBuilder};
use crate::utils::DEFAULT_CREDENTIALS_HINT;
use crate::viewmodels::AdminViewModel;

pub fn render_login(vm: &AdminViewModel) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let draft = vm.state().login_draft.borrow().clone();
    let loading = vm.state().is_loading();

    let email_group = {
        let vm = vm.clone();
        input_group("Email", "email", "Admin Email", &draft.email, move |v| vm.set_login_email(v))?
    };
    let password_group = {
        let vm = vm.clone();
        input_group("Password", "password", "Password", &draft.password, move |v| {
            vm.set_login_password(v)
        })?
    };

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .flag("disabled", loading)?
        .text(if loading { "Logging in..." } else { "Login" })
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(email_group)?
        .child(password_group)?
        .child(submit)?
        .build();
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit_login().await;
            });
        })?;
    }

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(ElementBuilder::new("h2")?.text("Admin Login").build())?
        .child(form)?
        .child(ElementBuilder::new("p")?.class("hint").text(DEFAULT_CREDENTIALS_HINT).build())?
        .build();

    ElementBuilder::new("div")?
        .class("login-screen")
        .child(card)
        .map(ElementBuilder::build)
}

fn input_group(
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    on_input: impl FnMut(String) + 'static,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .flag("required", true)?
        .build();
    on_value(&input, on_input)?;

    ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.text(label).build())?
        .child(input)
        .map(ElementBuilder::build)
}
