//! Blocking browser dialogs.

use foodies_cart::Dialogs;
use web_sys::Window;

pub struct BrowserDialogs {
    window: Window,
}

impl BrowserDialogs {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        // A suppressed dialog counts as "no".
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}
