// ============================================================================
// CAR FORM - add / edit a listing
// ============================================================================
// Inputs write straight into the draft without re-rendering, so focus and
// caret survive typing. The file input reads images into memory before they
// are handed to the viewmodel.
// ============================================================================

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, File, HtmlInputElement};

use crate::dom::{on_change, on_checked, on_click, on_submit, on_value, ElementBuilder};
use crate::models::{CarDraft, CarField, FieldValue, ImageUpload};
use crate::state::Section;
use crate::utils::CAR_TYPES;
use crate::viewmodels::AdminViewModel;

#[derive(Clone, Copy)]
enum Widget {
    Text,
    Number,
    TextArea,
    TypeSelect,
}

const FIELDS: [(CarField, &str, Widget, &str); 13] = [
    (CarField::Type, "Car Type", Widget::TypeSelect, ""),
    (CarField::Model, "Car Model", Widget::Text, "e.g. Alto, Ertiga, etc."),
    (CarField::Name, "Car Name", Widget::Text, "e.g. Alto 2024, Ertiga 2024, etc."),
    (CarField::BodyType, "Body Type", Widget::Text, "e.g. Hatchback, Sedan, SUV"),
    (CarField::Fuel, "Fuel Type", Widget::Text, "e.g. Petrol, Diesel"),
    (CarField::Seats, "Seats", Widget::Number, "Number of seats"),
    (CarField::Transmission, "Transmission", Widget::Text, "e.g. Manual, Automatic"),
    (CarField::Engine, "Engine", Widget::Text, "e.g. 1.2L, 1.5L"),
    (CarField::Mileage, "Mileage", Widget::Text, "e.g. 18.97 km/l"),
    (CarField::PricePerKm, "Price per Km (₹)", Widget::Number, "e.g. 28"),
    (CarField::PricePerHour, "Price per Hour (₹)", Widget::Number, "e.g. 70"),
    (CarField::PricePerDay, "Price per Day (₹)", Widget::Number, "e.g. 1200"),
    (CarField::FullDetails, "Full Details", Widget::TextArea, "Detailed description of the car"),
];

fn is_required(field: CarField) -> bool {
    matches!(field, CarField::Type | CarField::Model | CarField::Name)
}

pub fn render_car_form(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let form_state = vm.state().car_form.borrow().clone();
    let editing = form_state.is_editing();
    let loading = vm.state().is_loading();

    let mut grid = ElementBuilder::new("div")?.class("form-grid");
    for (field, label, widget, placeholder) in FIELDS {
        grid = grid.child(render_field(vm, &form_state.draft, field, label, widget, placeholder)?)?;
    }
    grid = grid
        .child(render_images_input(vm)?)?
        .child(render_available(vm, form_state.draft.available)?)?;

    let submit_label = match (loading, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update Car",
        (false, false) => "Add Car",
    };
    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", loading)?
        .text(submit_label)
        .build();

    let mut actions = ElementBuilder::new("div")?.class("form-actions").child(submit)?;
    if editing {
        let cancel = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "button")?
            .text("Cancel Edit")
            .build();
        let vm = vm.clone();
        on_click(&cancel, move |_| vm.cancel_edit())?;
        actions = actions.child(cancel)?;
    }

    let form = ElementBuilder::new("form")?
        .class("car-form")
        .attr("enctype", "multipart/form-data")?
        .child(grid.build())?
        .child(actions.build())?
        .build();
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit_car().await;
            });
        })?;
    }

    ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text(Section::CarForm.label(editing)).build())?
        .child(form)
        .map(ElementBuilder::build)
}

fn render_field(
    vm: &AdminViewModel,
    draft: &CarDraft,
    field: CarField,
    label: &str,
    widget: Widget,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let current = draft.text(field).unwrap_or_default();

    let input = match widget {
        Widget::Text | Widget::Number => ElementBuilder::new("input")?
            .attr("type", if matches!(widget, Widget::Number) { "number" } else { "text" })?
            .attr("name", field.name())?
            .attr("placeholder", placeholder)?
            .attr("value", current)?
            .flag("required", is_required(field))?
            .build(),
        Widget::TextArea => ElementBuilder::new("textarea")?
            .attr("name", field.name())?
            .attr("placeholder", placeholder)?
            .attr("rows", "3")?
            .text(current)
            .build(),
        Widget::TypeSelect => {
            let mut select = ElementBuilder::new("select")?
                .attr("name", field.name())?
                .flag("required", true)?
                .child(
                    ElementBuilder::new("option")?
                        .attr("value", "")?
                        .text("Select Type")
                        .build(),
                )?;
            for car_type in CAR_TYPES {
                let option = ElementBuilder::new("option")?
                    .attr("value", car_type)?
                    .flag("selected", car_type == current)?
                    .text(car_type)
                    .build();
                select = select.child(option)?;
            }
            select.build()
        }
    };

    {
        let vm = vm.clone();
        on_value(&input, move |value| {
            if let Err(e) = vm.set_field(field, FieldValue::Text(value)) {
                log::warn!("⚠️ [CAR FORM] {}", e);
            }
        })?;
    }

    ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.text(label).build())?
        .child(input)
        .map(ElementBuilder::build)
}

fn render_available(vm: &AdminViewModel, available: bool) -> Result<Element, JsValue> {
    let checkbox = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .attr("name", CarField::Available.name())?
        .flag("checked", available)?
        .build();
    {
        let vm = vm.clone();
        on_checked(&checkbox, move |checked| {
            if let Err(e) = vm.set_field(CarField::Available, FieldValue::Flag(checked)) {
                log::warn!("⚠️ [CAR FORM] {}", e);
            }
        })?;
    }

    ElementBuilder::new("div")?
        .class("form-check")
        .child(checkbox)?
        .child(ElementBuilder::new("label")?.text("Available for booking").build())
        .map(ElementBuilder::build)
}

fn render_images_input(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .flag("multiple", true)?
        .build();
    {
        let vm = vm.clone();
        on_change(&input, move |e| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let files: Vec<File> = match input.files() {
                Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
                None => Vec::new(),
            };
            let vm = vm.clone();
            let epoch = vm.car_form_epoch();
            spawn_local(async move {
                let mut images = Vec::with_capacity(files.len());
                for file in files {
                    match read_image(&file).await {
                        Ok(image) => images.push(image),
                        Err(e) => log::error!("❌ [CAR FORM] Could not read {}: {:?}", file.name(), e),
                    }
                }
                vm.set_images_for(epoch, images);
            });
        })?;
    }

    ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.text("Images").build())?
        .child(input)?
        .child(
            ElementBuilder::new("p")?
                .class("hint")
                .text("Select multiple images (JPEG, PNG, GIF)")
                .build(),
        )
        .map(ElementBuilder::build)
}

async fn read_image(file: &File) -> Result<ImageUpload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}
