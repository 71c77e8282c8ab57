//! # Cart
//!
//! The shopping cart behind the order sidebar. One cart per session, created empty,
//! never persisted.
//!
//! Invariants:
//! - At most one line per distinct item id.
//! - Every stored line has quantity >= 1. A quantity of 0 removes the line.
//! - Lines keep insertion order.

use rust_decimal::Decimal;

use crate::items::MenuItem;

/// One menu item plus the quantity selected for purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `item`. Increments the existing line if the item is already
    /// in the cart, otherwise appends a new line with quantity 1. Always succeeds.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Removes the line for `item_id`. A no-op when the id is not in the cart.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item.id != item_id);
    }

    /// Replaces the quantity of the line for `item_id`. A quantity of 0 removes the
    /// line. An id with no line is a no-op: the quantity controls only exist for
    /// lines already in the cart, and this path never creates one.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Sum of `price * quantity` over all lines. Recomputed on every call.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::items::sample_menu;

    fn item(id: &str) -> MenuItem {
        sample_menu()
            .into_iter()
            .find(|item| item.id == id)
            .unwrap()
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), dec!(0));
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let kebab = item("1");
        let mut cart = Cart::new();

        cart.add_item(&kebab);
        cart.add_item(&kebab);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_price(), dec!(36.00));
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();

        cart.add_item(&item("3"));
        cart.add_item(&item("1"));
        cart.add_item(&item("3"));

        let ids: Vec<&str> = cart.lines().iter().map(|line| line.item.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn test_remove_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&item("1"));

        let before = cart.clone();
        cart.remove_item("99");

        assert_eq!(cart.lines(), before.lines());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(&item("1"));
        cart.add_item(&item("3"));

        let mut removed = cart.clone();
        removed.remove_item("1");

        cart.set_quantity("1", 0);

        assert_eq!(cart.lines(), removed.lines());
    }

    #[test]
    fn test_set_quantity_replaces_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&item("7"));

        cart.set_quantity("7", 5);

        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total_price(), dec!(40.00));
        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn test_set_quantity_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&item("1"));

        let before = cart.clone();
        cart.set_quantity("99", 3);

        assert_eq!(cart.lines(), before.lines());
    }

    #[test]
    fn test_total_independent_of_insertion_order() {
        let mut forward = Cart::new();
        forward.add_item(&item("1"));
        forward.add_item(&item("4"));

        let mut reversed = Cart::new();
        reversed.add_item(&item("4"));
        reversed.add_item(&item("1"));

        assert_eq!(forward.total_price(), reversed.total_price());
        assert_eq!(forward.total_price(), dec!(44.00));
    }

    #[test]
    fn test_add_then_remove_restores_count() {
        let mut cart = Cart::new();
        cart.add_item(&item("5"));
        let before = cart.total_item_count();

        cart.add_item(&item("7"));
        cart.remove_item("7");

        assert_eq!(cart.total_item_count(), before);
    }
}
