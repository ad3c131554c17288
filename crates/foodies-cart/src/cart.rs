//! Cart and line item types.

use crate::error::CartError;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// One distinct product in the cart, identified by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product name. Two additions with the same name share a line.
    #[serde(default)]
    pub name: String,
    /// Unit price, never negative.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    /// Quantity, never below 1.
    #[serde(default = "default_qty", deserialize_with = "lenient_qty")]
    pub qty: u32,
}

impl LineItem {
    /// Create a line with quantity 1.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price: sanitize_price(price),
            qty: 1,
        }
    }

    /// Line total: `price × qty`, rounded to cents once.
    pub fn line_total(&self) -> Money {
        Money::from_decimal(self.price * f64::from(self.qty))
    }
}

/// An ordered list of line items. Display order is insertion order.
///
/// Serializes as a bare JSON array of `{name, price, qty}` records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Add one unit of a product.
    ///
    /// If a line with exactly this name exists its quantity is incremented,
    /// otherwise a new line is appended. Returns the line's index.
    pub fn add(&mut self, name: &str, price: f64) -> usize {
        if let Some(index) = self.items.iter().position(|i| i.name == name) {
            let line = &mut self.items[index];
            line.qty = line.qty.saturating_add(1);
            return index;
        }
        self.items.push(LineItem::new(name, price));
        self.items.len() - 1
    }

    /// Increment a line's quantity. Returns the new quantity.
    pub fn increment(&mut self, index: usize) -> Result<u32, CartError> {
        let line = self.line_mut(index)?;
        line.qty = line.qty.saturating_add(1);
        Ok(line.qty)
    }

    /// Decrement a line's quantity, stopping at 1. Returns the new quantity.
    pub fn decrement(&mut self, index: usize) -> Result<u32, CartError> {
        let line = self.line_mut(index)?;
        line.qty = line.qty.saturating_sub(1).max(1);
        Ok(line.qty)
    }

    /// Set a line's quantity, clamping anything below 1 up to 1.
    pub fn set_quantity(&mut self, index: usize, qty: i64) -> Result<u32, CartError> {
        let line = self.line_mut(index)?;
        line.qty = clamp_qty(qty);
        Ok(line.qty)
    }

    /// Set a line's quantity from the raw text of a quantity field.
    pub fn set_quantity_from_input(&mut self, index: usize, raw: &str) -> Result<u32, CartError> {
        let line = self.line_mut(index)?;
        line.qty = parse_quantity_input(raw);
        Ok(line.qty)
    }

    /// Remove a line, keeping the remaining lines in order.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::LineNotFound(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut LineItem, CartError> {
        self.items
            .get_mut(index)
            .ok_or(CartError::LineNotFound(index))
    }
}

fn default_qty() -> u32 {
    1
}

fn clamp_qty(qty: i64) -> u32 {
    u32::try_from(qty.max(1)).unwrap_or(u32::MAX)
}

fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

/// Parse quantity field text with leading-integer semantics.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit (`"3abc"` is 3, `"2.9"` is 2). Anything without digits or
/// below 1 becomes 1.
pub fn parse_quantity_input(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 1;
    }
    // All-digit strings only fail to parse on overflow.
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

/// Parse the `data-price` of an add button. Unparsable or negative is 0.
pub fn parse_price(raw: Option<&str>) -> f64 {
    raw.and_then(|r| r.trim().parse::<f64>().ok())
        .map(sanitize_price)
        .unwrap_or(0.0)
}

fn lenient_qty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let qty = value
        .and_then(|v| v.as_f64())
        .filter(|q| q.is_finite() && *q >= 1.0)
        .map(|q| if q >= f64::from(u32::MAX) { u32::MAX } else { q as u32 })
        .unwrap_or(1);
    Ok(qty)
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(sanitize_price(value.and_then(|v| v.as_f64()).unwrap_or(0.0)))
}
