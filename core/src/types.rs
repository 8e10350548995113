//! Domain types for the Storefront order service.
//!
//! This module contains the value objects and entities shared by the catalog,
//! cart, and order workflow: typed identifiers, cents-based money, product and
//! cart records, and the immutable order with its line snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a product
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a new random `ProductId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `ProductId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random `UserId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `UserId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random `OrderId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `OrderId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole dollars
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (dollars * 100 > `u64::MAX`).
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_dollars(dollars: u64) -> Self {
        match dollars.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("Money::from_dollars overflow"),
        }
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Subtracts two money amounts (returns `None` if the result would be negative)
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        if self.0 >= other.0 {
            Some(Self(self.0 - other.0))
        } else {
            None
        }
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_mul(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Catalog and Cart
// ============================================================================

/// Product entity in the catalog
///
/// `stock` is the only field mutated concurrently; all stock movements go
/// through the catalog store's conditional decrement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: Money,
    /// Units currently available; never negative
    pub stock: u32,
    /// Image reference (URL or asset path)
    pub image: String,
}

impl Product {
    /// Creates a new `Product`
    #[must_use]
    pub const fn new(id: ProductId, name: String, price: Money, stock: u32, image: String) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            image,
        }
    }
}

/// A (product, quantity) pairing within a user's cart
///
/// A cart never holds two lines for the same product; adding an existing
/// product merges into the line's quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Referenced product
    pub product_id: ProductId,
    /// Units requested, at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new `CartLine`
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Immutable per-line snapshot captured at order-creation time
///
/// Decoupled from later catalog edits so historical orders keep the name,
/// image, and price the buyer saw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product the snapshot was taken from
    pub product_id: ProductId,
    /// Product name at order time
    pub name: String,
    /// Image reference at order time
    pub image: String,
    /// Unit price at order time
    pub price: Money,
    /// Units ordered
    pub quantity: u32,
}

impl OrderLine {
    /// Line subtotal (`price * quantity`) with overflow checking
    #[must_use]
    pub const fn subtotal(&self) -> Option<Money> {
        self.price.checked_mul(self.quantity)
    }
}

/// Shipping address attached to an order
///
/// Validated upstream; the workflow treats it as opaque.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
}

/// Opaque payment-processor result attached when an order is paid
///
/// A free-form key/value record; the service records it verbatim and never
/// interprets it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentResult(pub serde_json::Map<String, serde_json::Value>);

/// Derived order lifecycle position
///
/// Computed from the paid/delivered flags, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, not yet paid
    Created,
    /// Payment recorded
    Paid,
    /// Delivered to the buyer
    Delivered,
}

/// A persisted order
///
/// Created once by the workflow engine; afterwards only the paid/delivered
/// flags and their timestamps ever change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    pub id: OrderId,
    /// Owning user (weak reference; orders outlive user deletion)
    pub user_id: UserId,
    /// Line snapshots in submission order
    pub lines: Vec<OrderLine>,
    /// Shipping address
    pub shipping_address: ShippingAddress,
    /// Payment method tag (e.g. "PayPal", "Stripe")
    pub payment_method: String,
    /// Sum of line subtotals
    pub items_price: Money,
    /// Tax supplied by the pricing collaborator
    pub tax_price: Money,
    /// Shipping cost supplied by the pricing collaborator
    pub shipping_price: Money,
    /// `items_price + tax_price + shipping_price`, always recomputed server-side
    pub total_price: Money,
    /// Whether payment has been recorded
    pub is_paid: bool,
    /// When payment was recorded
    pub paid_at: Option<DateTime<Utc>>,
    /// Opaque processor result recorded with payment
    pub payment_result: Option<PaymentResult>,
    /// Whether delivery has been recorded
    pub is_delivered: bool,
    /// When delivery was recorded
    pub delivered_at: Option<DateTime<Utc>>,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Derived lifecycle status
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        if self.is_delivered {
            OrderStatus::Delivered
        } else if self.is_paid {
            OrderStatus::Paid
        } else {
            OrderStatus::Created
        }
    }
}
