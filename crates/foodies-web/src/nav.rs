//! Nav indicator controller.
//!
//! Keeps a decorative `span.nav-indicator` under the hovered, focused or
//! active link of `.main-nav`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use foodies_core::selectors;
use foodies_nav::{active_link, IndicatorState, IndicatorUpdate, Motion, Placement};
use foodies_observability::StructuredLogger;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Url, Window};

use crate::dom::{create_html, describe, listen, query_all, rect};
use crate::timer::Debouncer;

pub struct NavIndicator {
    window: Window,
    nav: Element,
    indicator: HtmlElement,
    links: Vec<Element>,
    state: RefCell<IndicatorState>,
    resize: Debouncer,
    logger: StructuredLogger,
}

/// Whether CSS currently lays the nav out at all.
pub fn is_laid_out(window: &Window, nav: &Element) -> bool {
    let Ok(Some(style)) = window.get_computed_style(nav) else {
        return false;
    };
    let display = style.get_property_value("display").unwrap_or_default();
    let visibility = style.get_property_value("visibility").unwrap_or_default();
    display != "none" && visibility != "hidden"
}

impl NavIndicator {
    /// Find or create the indicator and bind all listeners.
    ///
    /// Returns `None` when the page has no nav or CSS hides it.
    pub fn attach(
        window: &Window,
        document: &Document,
        resize_debounce: Duration,
        logger: StructuredLogger,
    ) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(nav) = document.query_selector(selectors::MAIN_NAV)? else {
            return Ok(None);
        };
        if !is_laid_out(window, &nav) {
            logger.debug("Nav hidden, indicator skipped");
            return Ok(None);
        }

        let indicator = match nav.query_selector(selectors::NAV_INDICATOR)? {
            Some(existing) => existing.dyn_into::<HtmlElement>().map_err(JsValue::from)?,
            None => {
                let span = create_html(document, "span", selectors::NAV_INDICATOR_CLASS)?;
                span.set_attribute("aria-hidden", "true")?;
                nav.append_child(&span)?;
                span
            }
        };

        let links = query_all(&nav, selectors::NAV_LINKS);
        let controller = Rc::new(Self {
            window: window.clone(),
            nav,
            indicator,
            links,
            state: RefCell::new(IndicatorState::new()),
            resize: Debouncer::new(window.clone(), resize_debounce),
            logger,
        });
        controller.bind()?;
        controller.settle();

        controller
            .logger
            .debug_builder("Nav indicator attached")
            .field_i64("links", controller.links.len() as i64)
            .emit();
        Ok(Some(controller))
    }

    /// Re-check layout and place the indicator on the active link.
    ///
    /// Used on repeated initialization (e.g. after the mobile toggle).
    pub fn refresh(&self) {
        if is_laid_out(&self.window, &self.nav) {
            self.settle();
        }
    }

    fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        for (index, link) in self.links.iter().enumerate() {
            for event in ["mouseenter", "focus"] {
                let this = Rc::clone(self);
                listen(link, event, move |_| this.move_to_link(index, Motion::Animated))?;
            }
            for event in ["mouseleave", "blur"] {
                let this = Rc::clone(self);
                listen(link, event, move |_| this.rest(Motion::Animated))?;
            }
        }

        let this = Rc::clone(self);
        listen(&self.window, "resize", move |_| {
            let target = Rc::clone(&this);
            if let Err(e) = this.resize.trigger(move || target.follow_active()) {
                this.logger
                    .warn_builder("Resize reposition not scheduled")
                    .field("error", describe(&e))
                    .emit();
            }
        })?;

        let this = Rc::clone(self);
        listen(&self.nav, "scroll", move |_| this.follow_active())?;
        Ok(())
    }

    /// Initial placement: the active link, instantly, or hidden.
    fn settle(&self) {
        self.rest(Motion::Instant);
    }

    fn rest(&self, motion: Motion) {
        let active = self.active();
        let update = self.state.borrow_mut().rest(active, motion);
        self.apply(update);
    }

    fn follow_active(&self) {
        let active = self.active();
        let update = self.state.borrow_mut().follow_active(active);
        if let Some(update) = update {
            self.apply(update);
        }
    }

    fn move_to_link(&self, index: usize, motion: Motion) {
        let Some(placement) = self.placement_of(index) else {
            return;
        };
        let update = self.state.borrow_mut().move_to(index, placement, motion);
        self.apply(update);
    }

    fn placement_of(&self, index: usize) -> Option<Placement> {
        let link = self.links.get(index)?;
        Some(Placement::under(
            rect(&self.nav),
            rect(link),
            f64::from(self.nav.scroll_left()),
        ))
    }

    /// The active link and where the indicator would sit under it.
    fn active(&self) -> Option<(usize, Placement)> {
        let location = self.window.location();
        let current = location.pathname().ok()?;
        let base = location.href().ok()?;
        let paths: Vec<Option<String>> = self
            .links
            .iter()
            .map(|link| {
                let href = link.get_attribute("href")?;
                Url::new_with_base(&href, &base).ok().map(|url| url.pathname())
            })
            .collect();
        let index = active_link(paths.iter().map(|p| p.as_deref()), &current)?;
        Some((index, self.placement_of(index)?))
    }

    fn apply(&self, update: IndicatorUpdate) {
        let style = self.indicator.style();
        if let Some(placement) = update.placement {
            let _ = style.set_property("left", &placement.left_px());
            let _ = style.set_property("width", &placement.width_px());
        }
        let _ = style.set_property("opacity", update.opacity());

        for link in &self.links {
            let _ = link.class_list().remove_1(selectors::NAV_FOCUSED_CLASS);
        }
        if let Some(link) = update.focused.and_then(|i| self.links.get(i)) {
            let _ = link.class_list().add_1(selectors::NAV_FOCUSED_CLASS);
        }

        if update.motion == Motion::Instant {
            let _ = style.set_property("transition", "none");
            // Reading layout flushes the new geometry without a transition.
            let _ = self.indicator.offset_width();
            let _ = style.set_property("transition", "");
        }
    }
}
