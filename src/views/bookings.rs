// ============================================================================
// BOOKINGS PANELS - cab and self-drive, read only
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::models::booking::car_label;
use crate::utils::{format_date, or_missing};
use crate::viewmodels::AdminViewModel;
use crate::views::table::{render_table, text_row};

pub fn render_cab_bookings(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let rows = vm
        .state()
        .bookings
        .borrow()
        .iter()
        .map(|b| {
            let dates = format!(
                "{} - {}",
                format_date(b.start_date.as_deref().unwrap_or_default()),
                format_date(b.end_date.as_deref().unwrap_or_default())
            );
            text_row(&[
                or_missing(b.name.as_deref()),
                car_label(b.car_type.as_deref(), b.car_model.as_deref()),
                or_missing(b.pickup.as_deref()),
                or_missing(b.drop.as_deref()),
                dates,
            ])
        })
        .collect::<Result<Vec<_>, _>>()?;

    render_table(
        "Cab Bookings",
        &["Customer", "Car Type", "Pickup Location", "Drop Location", "Date"],
        rows,
        "No bookings found.",
    )
}

pub fn render_self_drive_bookings(vm: &AdminViewModel) -> Result<Element, JsValue> {
    let rows = vm
        .state()
        .self_drive_bookings
        .borrow()
        .iter()
        .map(|b| {
            text_row(&[
                or_missing(b.name.as_deref()),
                car_label(b.car_type.as_deref(), b.car_model.as_deref()),
                or_missing(b.duration.as_deref()),
                or_missing(b.license.as_deref()),
                format_date(b.created_at.as_deref().unwrap_or_default()),
            ])
        })
        .collect::<Result<Vec<_>, _>>()?;

    render_table(
        "Self-Drive Bookings",
        &["Customer", "Car Type", "Duration (hours)", "License No.", "Booking Date"],
        rows,
        "No self-drive bookings found.",
    )
}
