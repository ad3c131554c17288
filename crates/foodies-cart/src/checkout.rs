//! Demo checkout flow.
//!
//! No order leaves the browser: checkout shows a summary, asks for
//! confirmation and empties the cart.

use crate::{Cart, CartError, CartStore, Money, StorageBackend};

pub const EMPTY_CART_NOTICE: &str = "Your cart is empty.";
pub const ORDER_PLACED_NOTICE: &str = "Thank you! Order placed (demo).";

/// Blocking user dialogs (`alert` / `confirm` in a browser).
pub trait Dialogs {
    /// Show a notice and wait for it to be dismissed.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `true` means confirmed.
    fn confirm(&self, message: &str) -> bool;
}

/// Line-by-line order summary shown before confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub lines: Vec<String>,
    pub total: Money,
}

impl OrderSummary {
    /// Build a summary, `None` for an empty cart.
    pub fn from_cart(cart: &Cart, symbol: &str) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        let lines = cart
            .items()
            .iter()
            .map(|i| {
                format!(
                    "{} x{} \u{2014} {}",
                    i.name,
                    i.qty,
                    i.line_total().display(symbol)
                )
            })
            .collect();
        Some(Self {
            lines,
            total: cart.total(),
        })
    }

    /// Confirmation prompt text.
    pub fn prompt(&self, symbol: &str) -> String {
        format!(
            "Order summary:\n\n{}\n\nTotal: {}\n\nPlace order? (demo)",
            self.lines.join("\n"),
            self.total.display(symbol)
        )
    }
}

/// How a checkout attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to order; the empty-cart notice was shown.
    EmptyCart,
    /// The user declined the summary. Nothing changed.
    Declined,
    /// The cart was cleared.
    Placed { total: Money, items: u64 },
}

/// Run the demo checkout.
///
/// On confirmation the storage slot is cleared, `on_placed` runs (the caller
/// re-renders and closes the modal there) and the success notice is shown
/// last.
pub fn run_checkout<B, D>(
    store: &CartStore<B>,
    dialogs: &D,
    symbol: &str,
    on_placed: impl FnOnce(),
) -> Result<CheckoutOutcome, CartError>
where
    B: StorageBackend,
    D: Dialogs + ?Sized,
{
    let cart = store.load();
    let Some(summary) = OrderSummary::from_cart(&cart, symbol) else {
        dialogs.alert(EMPTY_CART_NOTICE);
        return Ok(CheckoutOutcome::EmptyCart);
    };

    if !dialogs.confirm(&summary.prompt(symbol)) {
        return Ok(CheckoutOutcome::Declined);
    }

    store.clear()?;
    on_placed();
    dialogs.alert(ORDER_PLACED_NOTICE);
    Ok(CheckoutOutcome::Placed {
        total: summary.total,
        items: cart.item_count(),
    })
}
