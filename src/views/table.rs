// ============================================================================
// TABLE - shared markup for the list panels
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Panel heading plus table; rows are already-built `<tr>`s.
/// An empty `rows` shows `empty_text` under the header instead.
pub fn render_table(
    title: &str,
    headers: &[&str],
    rows: Vec<Element>,
    empty_text: &str,
) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?
        .children(
            headers
                .iter()
                .map(|h| ElementBuilder::new("th").map(|b| b.text(h).build()))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let is_empty = rows.is_empty();
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(head_row)?.build())?
        .child(ElementBuilder::new("tbody")?.children(rows)?.build())?
        .build();

    let mut card = ElementBuilder::new("div")?.class("table-card").child(table)?;
    if is_empty {
        card = card.child(ElementBuilder::new("p")?.class("empty").text(empty_text).build())?;
    }

    ElementBuilder::new("section")?
        .class("panel")
        .child(ElementBuilder::new("h2")?.text(title).build())?
        .child(card.build())
        .map(ElementBuilder::build)
}

/// `<tr>` of plain-text cells
pub fn text_row(cells: &[String]) -> Result<Element, JsValue> {
    let tds = cells
        .iter()
        .map(|c| ElementBuilder::new("td").map(|b| b.text(c).build()))
        .collect::<Result<Vec<_>, _>>()?;
    ElementBuilder::new("tr")?.children(tds).map(ElementBuilder::build)
}
