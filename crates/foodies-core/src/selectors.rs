//! DOM contract between the page markup and the storefront script.
//!
//! Ids are bare (for `get_element_by_id`), selectors are CSS (for
//! `closest` / `query_selector`), classes are bare class names.

// Cart badge and modal
pub const CART_COUNT_ID: &str = "cartCount";
pub const CART_MODAL_ID: &str = "cartModal";
pub const CART_ITEMS_ID: &str = "cartItems";
pub const CART_TOTAL_ID: &str = "cartTotal";
pub const CART_BUTTON_ID: &str = "cartBtn";
pub const SUBSCRIBE_FORM_ID: &str = "subscribe";
pub const CONFIG_SCRIPT_ID: &str = "foodies-config";

// Delegated click targets
pub const ADD_TO_CART: &str = ".add";
pub const QTY_DECREASE: &str = ".qty-decrease";
pub const QTY_INCREASE: &str = ".qty-increase";
pub const REMOVE_ITEM: &str = ".remove-item";
pub const OPEN_CART: &str = "#cartBtn, .cart-btn";
pub const CLOSE_CART: &str = "#closeCart, .close";
pub const CHECKOUT: &str = "#checkout";
pub const NAV_TOGGLE: &str = "#navToggle";

// Delegated input targets
pub const QTY_INPUT: &str = ".qty-input";

// Navigation
pub const MAIN_NAV: &str = ".main-nav";
pub const NAV_LINKS: &str = "a";
pub const NAV_INDICATOR: &str = ".nav-indicator";

// Data attributes
pub const DATA_INDEX: &str = "data-index";
pub const DATA_NAME: &str = "data-name";
pub const DATA_PRICE: &str = "data-price";

// Classes toggled or emitted by the script
pub const HIDDEN_CLASS: &str = "hidden";
pub const NAV_OPEN_CLASS: &str = "open";
pub const NAV_FOCUSED_CLASS: &str = "nav-focused";
pub const NAV_INDICATOR_CLASS: &str = "nav-indicator";
pub const CART_LINE_CLASS: &str = "cart-line";
pub const CART_EMPTY_CLASS: &str = "empty";
pub const CART_ITEM_LEFT_CLASS: &str = "cart-item-left";
pub const CART_ITEM_NAME_CLASS: &str = "cart-item-name";
pub const QTY_CONTROLS_CLASS: &str = "qty-controls";
pub const QTY_DECREASE_CLASS: &str = "qty-btn qty-decrease";
pub const QTY_INCREASE_CLASS: &str = "qty-btn qty-increase";
pub const QTY_INPUT_CLASS: &str = "qty-input";
pub const CART_ITEM_ACTIONS_CLASS: &str = "cart-item-actions";
pub const CART_ITEM_PRICE_CLASS: &str = "cart-item-price";
pub const REMOVE_ITEM_CLASS: &str = "remove-item";
