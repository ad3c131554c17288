//! Page-wide application state.

use std::cell::RefCell;
use std::rc::Rc;

use foodies_cart::{Cart, CartError, CartStore, CartView};
use foodies_core::{selectors, ConfigError, SiteConfig};
use foodies_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dialogs::BrowserDialogs;
use crate::dom::{self, describe};
use crate::modal::CartModal;
use crate::nav::NavIndicator;
use crate::render::CartRenderer;
use crate::storage::LocalStorage;

pub struct App {
    pub(crate) config: SiteConfig,
    pub(crate) logger: StructuredLogger,
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) store: CartStore<LocalStorage>,
    pub(crate) renderer: CartRenderer,
    pub(crate) modal: CartModal,
    pub(crate) dialogs: BrowserDialogs,
    nav: RefCell<Option<Rc<NavIndicator>>>,
}

impl App {
    pub fn new() -> Result<Rc<Self>, JsValue> {
        let window = dom::window()?;
        let document = dom::document(&window)?;

        let loaded = read_config(&document);
        let config = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();
        let logger = build_logger(&config);
        match &loaded {
            Ok(Some(_)) => logger.debug("Loaded page config"),
            Ok(None) => {}
            Err(e) => logger
                .warn_builder("Ignoring page config, using defaults")
                .field("error", e.to_string())
                .emit(),
        }

        let storage = LocalStorage::open(&window);
        if !storage.is_available() {
            logger.warn("localStorage unavailable, cart will not persist");
        }

        Ok(Rc::new(Self {
            store: CartStore::new(storage, config.storage_key.clone()),
            renderer: CartRenderer::new(document.clone()),
            modal: CartModal::new(document.clone()),
            dialogs: BrowserDialogs::new(window.clone()),
            nav: RefCell::new(None),
            config,
            logger,
            window,
            document,
        }))
    }

    /// Load the cart, logging why stored state was discarded.
    pub fn load_cart(&self) -> Cart {
        self.store.try_load().unwrap_or_else(|e| {
            self.logger
                .warn_builder("Stored cart unreadable, starting empty")
                .field("key", self.store.key())
                .field("error", e.to_string())
                .emit();
            Cart::new()
        })
    }

    /// Apply `f` to the stored cart and persist the result.
    ///
    /// Returns `None` when nothing changed (stale index or failed write).
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Cart) -> Result<R, CartError>) -> Option<R> {
        match self.store.update(f) {
            Ok(out) => Some(out),
            Err(CartError::LineNotFound(index)) => {
                self.logger
                    .debug_builder("Ignoring stale cart index")
                    .field_i64("index", index as i64)
                    .emit();
                None
            }
            Err(e) => {
                self.logger
                    .error_builder("Failed to save cart")
                    .field("error", e.to_string())
                    .emit();
                None
            }
        }
    }

    fn view(&self) -> CartView {
        CartView::project(&self.load_cart(), &self.config.currency_symbol)
    }

    pub fn render_count(&self) {
        self.renderer.render_count(&self.view());
    }

    pub fn render_modal(&self) {
        if let Err(e) = self.renderer.render_modal(&self.view()) {
            self.logger
                .error_builder("Failed to render cart")
                .field("error", describe(&e))
                .emit();
        }
    }

    /// Re-render both the modal and the badge.
    pub fn refresh(&self) {
        self.render_modal();
        self.render_count();
    }

    pub fn open_cart(&self) {
        if self.modal.show() {
            self.render_modal();
        }
    }

    pub fn close_cart(&self) {
        self.modal.close();
    }

    /// Attach the nav indicator, or re-place it if already attached.
    pub fn init_nav(&self) {
        if let Some(nav) = self.nav.borrow().as_ref() {
            nav.refresh();
            return;
        }

        let attached = NavIndicator::attach(
            &self.window,
            &self.document,
            self.config.resize_debounce(),
            self.logger.for_component("nav"),
        );
        match attached {
            Ok(nav) => *self.nav.borrow_mut() = nav,
            Err(e) => self
                .logger
                .error_builder("Failed to attach nav indicator")
                .field("error", describe(&e))
                .emit(),
        }
    }
}

/// Parse the optional `<script id="foodies-config">` JSON block.
fn read_config(document: &Document) -> Result<Option<SiteConfig>, ConfigError> {
    let Some(script) = document.get_element_by_id(selectors::CONFIG_SCRIPT_ID) else {
        return Ok(None);
    };
    let text = script.text_content().unwrap_or_default();
    SiteConfig::from_json(&text).map(Some)
}

fn build_logger(config: &SiteConfig) -> StructuredLogger {
    StructuredLogger::new(SessionId::generate())
        .with_component("storefront")
        .with_min_level(LogLevel::parse(&config.log_level).unwrap_or(LogLevel::Info))
        .with_format(LogFormat::parse(&config.log_format).unwrap_or_default())
}
