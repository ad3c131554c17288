//! Delegated event dispatch table.
//!
//! Every interactive element is addressed by the selector of the action it
//! triggers. The router walks `Action::CLICK_ORDER` and fires the first
//! action whose selector matches an ancestor of the click target.

use std::fmt;

use crate::selectors;

/// An interaction the storefront knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add the product named on the button to the cart.
    AddToCart,
    /// Decrement the quantity of one cart line.
    DecreaseQty,
    /// Increment the quantity of one cart line.
    IncreaseQty,
    /// Remove one cart line.
    RemoveItem,
    /// Show the cart modal.
    OpenCart,
    /// Hide the cart modal.
    CloseCart,
    /// Run the demo checkout.
    Checkout,
    /// Toggle the mobile navigation.
    ToggleNav,
    /// Live edit of a quantity field (input events only).
    EditQty,
}

impl Action {
    /// Click actions in priority order. First match wins.
    pub const CLICK_ORDER: [Action; 8] = [
        Action::AddToCart,
        Action::DecreaseQty,
        Action::IncreaseQty,
        Action::RemoveItem,
        Action::OpenCart,
        Action::CloseCart,
        Action::Checkout,
        Action::ToggleNav,
    ];

    /// Input actions in priority order.
    pub const INPUT_ORDER: [Action; 1] = [Action::EditQty];

    /// CSS selector matched against the target's ancestor chain.
    pub fn selector(&self) -> &'static str {
        match self {
            Action::AddToCart => selectors::ADD_TO_CART,
            Action::DecreaseQty => selectors::QTY_DECREASE,
            Action::IncreaseQty => selectors::QTY_INCREASE,
            Action::RemoveItem => selectors::REMOVE_ITEM,
            Action::OpenCart => selectors::OPEN_CART,
            Action::CloseCart => selectors::CLOSE_CART,
            Action::Checkout => selectors::CHECKOUT,
            Action::ToggleNav => selectors::NAV_TOGGLE,
            Action::EditQty => selectors::QTY_INPUT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::AddToCart => "add_to_cart",
            Action::DecreaseQty => "decrease_qty",
            Action::IncreaseQty => "increase_qty",
            Action::RemoveItem => "remove_item",
            Action::OpenCart => "open_cart",
            Action::CloseCart => "close_cart",
            Action::Checkout => "checkout",
            Action::ToggleNav => "toggle_nav",
            Action::EditQty => "edit_qty",
        }
    }

    /// Resolve the first action in `order` whose selector `matches` accepts.
    ///
    /// `matches` is given a selector and returns the matched element, if any.
    /// The browser layer passes a closure over `Element::closest`.
    pub fn resolve<T>(
        order: &[Action],
        mut matches: impl FnMut(&'static str) -> Option<T>,
    ) -> Option<(Action, T)> {
        order
            .iter()
            .find_map(|action| matches(action.selector()).map(|hit| (*action, hit)))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a `data-index` attribute into a cart position.
///
/// Missing, non-numeric and negative values address nothing.
pub fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_order_priority() {
        assert_eq!(Action::CLICK_ORDER[0], Action::AddToCart);
        assert_eq!(Action::CLICK_ORDER[7], Action::ToggleNav);
        assert!(!Action::CLICK_ORDER.contains(&Action::EditQty));
    }

    #[test]
    fn test_first_match_wins() {
        // An element nested in both a remove button and the cart button.
        let ancestors = [selectors::REMOVE_ITEM, selectors::OPEN_CART];
        let hit = Action::resolve(&Action::CLICK_ORDER, |sel| {
            ancestors.contains(&sel).then_some(sel)
        });
        assert_eq!(hit, Some((Action::RemoveItem, selectors::REMOVE_ITEM)));
    }

    #[test]
    fn test_no_match() {
        let hit = Action::resolve(&Action::CLICK_ORDER, |_| None::<()>);
        assert!(hit.is_none());
    }

    #[test]
    fn test_resolve_stops_at_first_match() {
        let mut probed = Vec::new();
        let hit = Action::resolve(&Action::CLICK_ORDER, |sel| {
            probed.push(sel);
            (sel == selectors::QTY_INCREASE).then_some(())
        });
        assert_eq!(hit.map(|(a, _)| a), Some(Action::IncreaseQty));
        assert_eq!(probed.len(), 3);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(Some("2")), Some(2));
        assert_eq!(parse_index(Some(" 0 ")), Some(0));
        assert_eq!(parse_index(Some("-1")), None);
        assert_eq!(parse_index(Some("abc")), None);
        assert_eq!(parse_index(None), None);
    }
}
