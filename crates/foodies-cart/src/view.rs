//! Render-ready projection of the cart.
//!
//! The browser layer rebuilds the modal from a `CartView` on every change;
//! all arithmetic and formatting happens here.

use crate::{Cart, LineItem, Money};

/// Text shown in the single placeholder row of an empty cart.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    /// Position in the cart, written to `data-index`.
    pub index: usize,
    pub name: String,
    pub qty: u32,
    pub line_total: Money,
    /// Line total with currency glyph.
    pub price_text: String,
    pub decrease_label: String,
    pub increase_label: String,
    pub quantity_label: String,
}

impl LineView {
    fn project(index: usize, item: &LineItem, symbol: &str) -> Self {
        let line_total = item.line_total();
        Self {
            index,
            name: item.name.clone(),
            qty: item.qty,
            line_total,
            price_text: line_total.display(symbol),
            decrease_label: format!("Decrease {}", item.name),
            increase_label: format!("Increase {}", item.name),
            quantity_label: format!("Quantity for {}", item.name),
        }
    }
}

/// Everything the count badge and the modal display.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Sum of quantities, for the badge.
    pub count: u64,
    pub lines: Vec<LineView>,
    pub total: Money,
}

impl CartView {
    pub fn project(cart: &Cart, symbol: &str) -> Self {
        let lines: Vec<LineView> = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| LineView::project(index, item, symbol))
            .collect();
        let total = lines.iter().map(|l| l.line_total).sum();
        Self {
            count: cart.item_count(),
            lines,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn count_text(&self) -> String {
        self.count.to_string()
    }

    /// Total without glyph; the page markup carries the glyph.
    pub fn total_text(&self) -> String {
        self.total.display_amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_projection() {
        let view = CartView::project(&Cart::new(), "₱");
        assert!(view.is_empty());
        assert_eq!(view.count_text(), "0");
        assert_eq!(view.total_text(), "0.00");
    }

    #[test]
    fn test_burger_and_fries() {
        let mut cart = Cart::new();
        cart.add("Burger", 120.0);
        cart.add("Burger", 120.0);
        cart.add("Fries", 60.0);

        let view = CartView::project(&cart, "₱");
        assert_eq!(view.count_text(), "3");
        assert_eq!(view.total_text(), "300.00");
        assert_eq!(view.lines.len(), 2);

        let burger = &view.lines[0];
        assert_eq!(burger.index, 0);
        assert_eq!(burger.qty, 2);
        assert_eq!(burger.price_text, "₱240.00");
        assert_eq!(burger.decrease_label, "Decrease Burger");
        assert_eq!(burger.quantity_label, "Quantity for Burger");
        assert_eq!(view.lines[1].index, 1);
        assert_eq!(view.lines[1].price_text, "₱60.00");
    }

    #[test]
    fn test_line_prices_round_price_times_qty() {
        let mut cart = Cart::new();
        cart.add("Siomai", 12.345);
        cart.add("Candy", 0.125);
        cart.add("Tea", 20.0);
        cart.set_quantity(0, 3).unwrap();
        cart.set_quantity(1, 2).unwrap();

        let view = CartView::project(&cart, "$");
        let prices: Vec<&str> = view.lines.iter().map(|l| l.price_text.as_str()).collect();
        assert_eq!(prices, vec!["$37.04", "$0.25", "$20.00"]);
        assert_eq!(view.total_text(), "57.29");
    }
}
