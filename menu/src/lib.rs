//! # Kebab Express Storefront Core
//!
//! Menu data and ordering logic for the Kebab Express food truck page.
//!
//! ## Overall Data Structures
//!
//! In-memory structures, one independent copy per browser session:
//! - Menu table (list of **items**): Fixed at startup, read-only. Each item has an id,
//!   display text, a price in złoty, a category tag, and an image URL.
//! - Cart (list of **lines**): One line per distinct item id, insertion order. Each
//!   line is an item plus a quantity of at least 1. Totals are recomputed on read,
//!   never cached, so there is no denormalized state to drift.
//! - Category expansion (set of **tags**): Which menu sections are open. Starts with
//!   `kebab` expanded. Purely presentational.
//!
//! ## Payments
//!
//! Checkout builds a payment *intent*: a Przelewy24 URL carrying the merchant id, the
//! amount in grosze, and a percent-encoded description. The URL is handed to a QR
//! renderer as an opaque string and scanned by the customer's phone. Nothing here
//! contacts the gateway or learns the payment outcome.
//!
//! ## Notes
//!
//! - All operations are synchronous, total functions over the current state. Nothing
//!   suspends, retries, or partially applies.
//! - Amounts use [`rust_decimal::Decimal`] end to end; conversion to grosze happens
//!   once, at intent construction.

pub mod cart;
pub mod expansion;
pub mod items;
pub mod payment;
pub mod settings;
