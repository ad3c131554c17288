//! Cart badge and modal rendering.
//!
//! The modal list is rebuilt from scratch on every call; nothing is patched
//! in place.

use foodies_cart::{CartView, LineView, EMPTY_CART_TEXT};
use foodies_core::selectors;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::{create, set_text};

pub struct CartRenderer {
    document: Document,
}

impl CartRenderer {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Write the item count to the badge. No-op without a badge.
    pub fn render_count(&self, view: &CartView) {
        if let Some(badge) = self.document.get_element_by_id(selectors::CART_COUNT_ID) {
            set_text(&badge, &view.count_text());
        }
    }

    /// Rebuild the modal list and total. No-op without a list element.
    pub fn render_modal(&self, view: &CartView) -> Result<(), JsValue> {
        let Some(list) = self.document.get_element_by_id(selectors::CART_ITEMS_ID) else {
            return Ok(());
        };

        list.set_inner_html("");
        if view.is_empty() {
            let empty = create(&self.document, "li", selectors::CART_EMPTY_CLASS)?;
            set_text(&empty, EMPTY_CART_TEXT);
            list.append_child(&empty)?;
        } else {
            for line in &view.lines {
                let row = self.line(line)?;
                list.append_child(&row)?;
            }
        }

        if let Some(total) = self.document.get_element_by_id(selectors::CART_TOTAL_ID) {
            set_text(&total, &view.total_text());
        }
        Ok(())
    }

    fn line(&self, line: &LineView) -> Result<Element, JsValue> {
        let doc = &self.document;
        let index = line.index.to_string();

        let li = create(doc, "li", selectors::CART_LINE_CLASS)?;

        let left = create(doc, "div", selectors::CART_ITEM_LEFT_CLASS)?;
        let name = create(doc, "div", selectors::CART_ITEM_NAME_CLASS)?;
        set_text(&name, &line.name);
        left.append_child(&name)?;

        let controls = create(doc, "div", selectors::QTY_CONTROLS_CLASS)?;

        let dec = self.button(selectors::QTY_DECREASE_CLASS, &index, "\u{2212}")?;
        dec.set_attribute("aria-label", &line.decrease_label)?;

        let input = create(doc, "input", selectors::QTY_INPUT_CLASS)?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)?;
        input.set_type("number");
        input.set_min("1");
        input.set_value(&line.qty.to_string());
        input.set_attribute(selectors::DATA_INDEX, &index)?;
        input.set_attribute("aria-label", &line.quantity_label)?;

        let inc = self.button(selectors::QTY_INCREASE_CLASS, &index, "+")?;
        inc.set_attribute("aria-label", &line.increase_label)?;

        controls.append_child(&dec)?;
        controls.append_child(&input)?;
        controls.append_child(&inc)?;
        left.append_child(&controls)?;

        let right = create(doc, "div", selectors::CART_ITEM_ACTIONS_CLASS)?;
        let price = create(doc, "div", selectors::CART_ITEM_PRICE_CLASS)?;
        set_text(&price, &line.price_text);
        let remove = self.button(selectors::REMOVE_ITEM_CLASS, &index, "Remove")?;
        right.append_child(&price)?;
        right.append_child(&remove)?;

        li.append_child(&left)?;
        li.append_child(&right)?;
        Ok(li)
    }

    fn button(&self, class: &str, index: &str, text: &str) -> Result<Element, JsValue> {
        let button = create(&self.document, "button", class)?;
        button.set_attribute("type", "button")?;
        button.set_attribute(selectors::DATA_INDEX, index)?;
        set_text(&button, text);
        Ok(button)
    }
}
