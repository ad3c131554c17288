//! Delegated event routing.
//!
//! One click listener and one input listener on the document resolve the
//! target against the `Action` dispatch table and run exactly one handler.

use std::rc::Rc;

use foodies_cart::{parse_price, run_checkout, CheckoutOutcome};
use foodies_core::{parse_index, selectors, Action};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement};

use crate::app::App;
use crate::dom::{self, closest, describe, event_element, listen, set_text};
use crate::timer::spawn_after;

/// Bind the document-level click and input listeners.
pub fn bind_delegated(app: &Rc<App>) -> Result<(), JsValue> {
    let this = Rc::clone(app);
    listen(&app.document, "click", move |event| on_click(&this, &event))?;

    let this = Rc::clone(app);
    listen(&app.document, "input", move |event| on_input(&this, &event))?;
    Ok(())
}

/// One-time setup once the DOM is parsed.
pub fn on_ready(app: &Rc<App>) -> Result<(), JsValue> {
    for button in dom::query_document(&app.document, &format!("#{}", selectors::CART_BUTTON_ID)) {
        let this = Rc::clone(app);
        listen(&button, "click", move |_| this.open_cart())?;
    }

    if let Some(form) = app.document.get_element_by_id(selectors::SUBSCRIBE_FORM_ID) {
        let this = Rc::clone(app);
        listen(&form, "submit", move |event| on_subscribe(&this, &event))?;
    }

    app.render_count();

    if let Some(modal) = app.modal.element() {
        let this = Rc::clone(app);
        listen(&modal, "click", move |event| {
            // Only clicks on the backdrop itself, not on the dialog content.
            if event.target() == event.current_target() {
                this.close_cart();
            }
        })?;
    }

    app.init_nav();
    app.logger.debug("Storefront ready");
    Ok(())
}

fn on_click(app: &Rc<App>, event: &Event) {
    let Some(target) = event_element(event) else {
        return;
    };
    let Some((action, element)) =
        Action::resolve(&Action::CLICK_ORDER, |selector| closest(&target, selector))
    else {
        return;
    };

    app.logger
        .debug_builder("Click dispatched")
        .field("action", action.as_str())
        .emit();

    match action {
        Action::AddToCart => add_to_cart(app, &element),
        Action::DecreaseQty => edit_line(app, &element, |cart, i| cart.decrement(i)),
        Action::IncreaseQty => edit_line(app, &element, |cart, i| cart.increment(i)),
        Action::RemoveItem => edit_line(app, &element, |cart, i| cart.remove(i).map(|_| 0)),
        Action::OpenCart => app.open_cart(),
        Action::CloseCart => app.close_cart(),
        Action::Checkout => checkout(app),
        Action::ToggleNav => toggle_nav(app),
        Action::EditQty => {}
    }
}

fn on_input(app: &Rc<App>, event: &Event) {
    let Some(target) = event_element(event) else {
        return;
    };
    let Some((_, element)) =
        Action::resolve(&Action::INPUT_ORDER, |selector| closest(&target, selector))
    else {
        return;
    };
    let Some(input) = element.dyn_ref::<HtmlInputElement>() else {
        return;
    };
    let raw = input.value();
    edit_line(app, &element, |cart, i| cart.set_quantity_from_input(i, &raw));
}

fn add_to_cart(app: &Rc<App>, button: &Element) {
    let name = button.get_attribute(selectors::DATA_NAME).unwrap_or_default();
    let price = parse_price(button.get_attribute(selectors::DATA_PRICE).as_deref());

    if app.mutate(|cart| Ok(cart.add(&name, price))).is_none() {
        return;
    }
    app.render_count();
    app.logger
        .info_builder("Added to cart")
        .field("name", name)
        .field_f64("price", price)
        .emit();

    set_text(button, &app.config.added_label);
    // Overlapping reverts are not cancelled; each restores the same label.
    let button = button.clone();
    let label = app.config.add_label.clone();
    if let Err(e) = spawn_after(&app.window, app.config.added_label_revert(), move || {
        set_text(&button, &label)
    }) {
        app.logger
            .warn_builder("Label revert not scheduled")
            .field("error", describe(&e))
            .emit();
    }
}

/// Run a line edit addressed by the element's `data-index`, then re-render.
fn edit_line<R>(
    app: &App,
    element: &Element,
    f: impl FnOnce(&mut foodies_cart::Cart, usize) -> Result<R, foodies_cart::CartError>,
) {
    let Some(index) = parse_index(element.get_attribute(selectors::DATA_INDEX).as_deref()) else {
        return;
    };
    if app.mutate(|cart| f(cart, index)).is_some() {
        app.refresh();
    }
}

fn checkout(app: &Rc<App>) {
    let outcome = run_checkout(
        &app.store,
        &app.dialogs,
        &app.config.currency_symbol,
        || {
            app.render_count();
            app.render_modal();
            app.close_cart();
        },
    );

    match outcome {
        Ok(CheckoutOutcome::Placed { total, items }) => app
            .logger
            .info_builder("Demo order placed")
            .field("total", total.display_amount())
            .field_i64("items", items as i64)
            .emit(),
        Ok(outcome) => app
            .logger
            .debug_builder("Checkout ended")
            .field("outcome", format!("{:?}", outcome))
            .emit(),
        Err(e) => app
            .logger
            .error_builder("Checkout failed")
            .field("error", e.to_string())
            .emit(),
    }
}

fn toggle_nav(app: &Rc<App>) {
    let Ok(Some(nav)) = app.document.query_selector(selectors::MAIN_NAV) else {
        return;
    };
    let _ = nav.class_list().toggle(selectors::NAV_OPEN_CLASS);

    // Let the open/close styles apply before measuring links again.
    let this = Rc::clone(app);
    if let Err(e) = spawn_after(&app.window, app.config.nav_toggle_reinit(), move || {
        this.init_nav()
    }) {
        app.logger
            .warn_builder("Nav re-init not scheduled")
            .field("error", describe(&e))
            .emit();
    }
}

fn on_subscribe(app: &App, event: &Event) {
    event.prevent_default();
    let Some(form) = event
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let email = form
        .query_selector("input")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default();

    let _ = app.window.alert_with_message(&format!("Subscribed: {}", email));
    app.logger.info("Newsletter subscription submitted");
    form.reset();
}
