// ============================================================================
// CAR LIST - cards with edit / delete
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{confirm, on_click, ElementBuilder};
use crate::models::{Car, Keyed};
use crate::utils::{or_missing, MISSING_VALUE};
use crate::viewmodels::AdminViewModel;

pub fn render_car_list(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let cars = vm.state().cars.borrow().clone();

    let add = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("+ Add New Car")
        .build();
    {
        let vm = vm.clone();
        on_click(&add, move |_| vm.start_create())?;
    }

    let mut grid = ElementBuilder::new("div")?.class("car-grid");
    for car in &cars {
        grid = grid.child(render_car_card(vm, car)?)?;
    }

    let mut panel = ElementBuilder::new("section")?
        .class("panel")
        .child(
            ElementBuilder::new("div")?
                .class("panel-header")
                .child(ElementBuilder::new("h2")?.text("Car List").build())?
                .child(add)?
                .build(),
        )?
        .child(grid.build())?;
    if cars.is_empty() {
        panel = panel.child(ElementBuilder::new("p")?.class("empty").text("No cars found.").build())?;
    }
    Ok(panel.build())
}

fn render_car_card(vm: &AdminViewModel, car: &Car) -> Result<Element, JsValue> {
    let mut card = ElementBuilder::new("div")?.class("car-card");

    if let Some(file) = car.thumbnail() {
        let img = ElementBuilder::new("img")?
            .attr("src", &CONFIG.upload_url(file))?
            .attr("alt", car.name.as_deref().unwrap_or_default())?
            .build();
        card = card.child(img)?;
    }

    let subtitle = format!(
        "{} • {}",
        car.car_type.as_deref().unwrap_or(MISSING_VALUE),
        car.model.as_deref().unwrap_or(MISSING_VALUE)
    );
    let specs = [
        ("Fuel", car.fuel.as_deref()),
        ("Seats", car.seats.as_deref()),
        ("Transmission", car.transmission.as_deref()),
        ("Mileage", car.mileage.as_deref()),
    ]
    .into_iter()
    .map(|(label, value)| {
        ElementBuilder::new("p")?
            .child(ElementBuilder::new("strong")?.text(&format!("{}: ", label)).build())?
            .child(ElementBuilder::new("span")?.text(&or_missing(value)).build())
            .map(ElementBuilder::build)
    })
    .collect::<Result<Vec<_>, JsValue>>()?;

    let edit = ElementBuilder::new("button")?
        .class("btn btn-warning btn-sm")
        .attr("type", "button")?
        .text("Edit")
        .build();
    {
        let vm = vm.clone();
        let car = car.clone();
        on_click(&edit, move |_| vm.start_edit(&car))?;
    }

    let delete = ElementBuilder::new("button")?
        .class("btn btn-danger btn-sm")
        .attr("type", "button")?
        .text("Delete")
        .build();
    {
        let vm = vm.clone();
        let id = car.key().to_string();
        on_click(&delete, move |_| {
            if !confirm("Are you sure you want to delete this car?") {
                return;
            }
            let vm = vm.clone();
            let id = id.clone();
            spawn_local(async move {
                vm.delete_car(&id).await;
            });
        })?;
    }

    let body = ElementBuilder::new("div")?
        .class("car-card-body")
        .child(ElementBuilder::new("h3")?.text(car.name.as_deref().unwrap_or_default()).build())?
        .child(ElementBuilder::new("p")?.class("muted").text(&subtitle).build())?
        .child(ElementBuilder::new("div")?.class("car-specs").children(specs)?.build())?
        .child(
            ElementBuilder::new("div")?
                .class("car-actions")
                .child(edit)?
                .child(delete)?
                .build(),
        )?
        .build();

    Ok(card.child(body)?.build())
}
