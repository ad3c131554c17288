//! Cart modal visibility.

use foodies_core::selectors;
use web_sys::{Document, Element};

pub struct CartModal {
    document: Document,
}

impl CartModal {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn element(&self) -> Option<Element> {
        self.document.get_element_by_id(selectors::CART_MODAL_ID)
    }

    /// Unhide the modal. Returns `false` when the page has no modal.
    ///
    /// The caller renders the list afterwards.
    pub fn show(&self) -> bool {
        let Some(modal) = self.element() else {
            return false;
        };
        let _ = modal.class_list().remove_1(selectors::HIDDEN_CLASS);
        let _ = modal.set_attribute("aria-hidden", "false");
        true
    }

    /// Hide the modal. No re-render.
    pub fn close(&self) {
        let Some(modal) = self.element() else {
            return;
        };
        let _ = modal.class_list().add_1(selectors::HIDDEN_CLASS);
        let _ = modal.set_attribute("aria-hidden", "true");
    }
}
