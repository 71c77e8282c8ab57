//! # Payment Intents
//!
//! Turns a cart (or a single item) into a Przelewy24 request URL for QR display.
//!
//! The URL is a locally constructed *intent*: the customer's phone contacts the
//! gateway out of band by scanning the code, and no confirmation ever flows back.
//! Amounts are encoded as an integer count of grosze, rounded half to even at the
//! half-grosz boundary.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::{cart::Cart, items::MenuItem};

pub const PAYMENT_BASE_URL: &str = "https://secure.przelewy24.pl/trnRequest/";

/// Placeholder merchant id, to be replaced per deployment.
pub const MERCHANT_ID: &str = "12345";

/// A locally constructed payment description. Never stored: recomputed on demand
/// and discarded when the QR display closes.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    /// The single item being paid for, or `None` for a cart-wide checkout.
    pub target: Option<MenuItem>,
    pub amount_minor_units: u64,
    pub description: String,
    pub url: String,
}

impl PaymentIntent {
    /// Intent for a single item, bypassing the cart.
    pub fn for_item(item: &MenuItem) -> Self {
        let amount = minor_units(item.price);
        let description = item.name.clone();

        Self {
            url: build_url(amount, &description),
            target: Some(item.clone()),
            amount_minor_units: amount,
            description,
        }
    }

    /// Intent for the whole cart: `"{name} x{quantity}"` per line, in cart order.
    pub fn for_cart(cart: &Cart) -> Self {
        let amount = minor_units(cart.total_price());
        let description = cart
            .lines()
            .iter()
            .map(|line| format!("{} x{}", line.item.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            url: build_url(amount, &description),
            target: None,
            amount_minor_units: amount,
            description,
        }
    }

    /// Heading for the QR display.
    pub fn title(&self) -> String {
        match &self.target {
            Some(item) => format!("Zapłać za {}", item.name),
            None => "Zapłać za zamówienie".to_string(),
        }
    }
}

/// Major units to grosze, rounding half to even at the half-grosz boundary.
fn minor_units(amount: Decimal) -> u64 {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_u64()
        .expect("menu prices are non-negative")
}

fn build_url(amount: u64, description: &str) -> String {
    format!(
        "{PAYMENT_BASE_URL}?merchantId={MERCHANT_ID}&amount={amount}&description={}",
        urlencoding::encode(description)
    )
}
