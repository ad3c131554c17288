//! Foodies storefront browser entry point.
//!
//! Wires the cart, the cart modal, the demo checkout and the nav indicator
//! to the static page markup. Built as a `cdylib` for `wasm-bindgen`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod app;
mod dialogs;
mod dom;
mod modal;
mod nav;
mod render;
mod router;
mod storage;
mod timer;

pub use app::App;
pub use storage::LocalStorage;

/// Module start: bind delegated listeners now, the rest once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let app = App::new()?;
    router::bind_delegated(&app)?;

    if app.document.ready_state() == "loading" {
        let this = Rc::clone(&app);
        dom::listen(&app.document, "DOMContentLoaded", move |_| {
            if let Err(e) = router::on_ready(&this) {
                this.logger
                    .error_builder("Setup failed")
                    .field("error", dom::describe(&e))
                    .emit();
            }
        })?;
    } else {
        router::on_ready(&app)?;
    }

    app.logger
        .info_builder("Storefront started")
        .field("session", app.logger.session_id().to_string())
        .emit();
    Ok(())
}
