//! Cart domain for the Foodies storefront.
//!
//! - **Cart**: name-keyed line items with clamped quantities
//! - **Store**: the cart persisted as JSON in one storage slot
//! - **View**: render-ready projection (count badge, lines, total)
//! - **Checkout**: the confirm-and-clear demo flow
//!
//! # Example
//!
//! ```
//! use foodies_cart::{CartStore, CartView, MemoryStorage};
//!
//! let store = CartStore::new(MemoryStorage::new(), "foodies_cart_v1");
//! store.update(|cart| Ok(cart.add("Burger", 120.0))).unwrap();
//! store.update(|cart| Ok(cart.add("Burger", 120.0))).unwrap();
//! store.update(|cart| Ok(cart.add("Fries", 60.0))).unwrap();
//!
//! let view = CartView::project(&store.load(), "₱");
//! assert_eq!(view.count_text(), "3");
//! assert_eq!(view.total_text(), "300.00");
//! ```

pub mod error;
pub mod money;

mod cart;
mod checkout;
mod storage;
mod store;
mod view;

pub use cart::{parse_price, parse_quantity_input, Cart, LineItem};
pub use checkout::{
    run_checkout, CheckoutOutcome, Dialogs, OrderSummary, EMPTY_CART_NOTICE, ORDER_PLACED_NOTICE,
};
pub use error::CartError;
pub use money::Money;
pub use storage::{MemoryStorage, StorageBackend};
pub use store::CartStore;
pub use view::{CartView, LineView, EMPTY_CART_TEXT};
