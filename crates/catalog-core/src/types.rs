//! # Domain Types
//!
//! The item shapes used throughout the catalog.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Shapes                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   validate   ┌─────────────────┐                  │
//! │  │  ItemPayload    │ ───────────► │    NewItem      │                  │
//! │  │  (raw, Option)  │              │  (typed, valid) │                  │
//! │  └─────────────────┘              └────────┬────────┘                  │
//! │                                            │ service stamps times      │
//! │                                            ▼                            │
//! │                                   ┌─────────────────┐                  │
//! │                                   │   ItemRecord    │  everything but  │
//! │                                   │                 │  the id          │
//! │                                   └────────┬────────┘                  │
//! │                                            │ store assigns id          │
//! │                                            ▼                            │
//! │                                   ┌─────────────────┐                  │
//! │                                   │      Item       │                  │
//! │                                   └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: store-assigned, immutable, used for every lookup
//! - `sku`: human-assigned business key, unique ignoring case, may change on update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Id
// =============================================================================

/// Store-assigned item identifier. Starts at 1 and only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ItemId(u64);

impl ItemId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ItemId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog item as stored.
///
/// Not a wire shape: the host sends `ItemDto`, which carries the price as
/// `priceCents` and renames to camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the store, never by the caller.
    pub id: ItemId,

    /// Display name, 3-100 characters.
    pub name: String,

    /// Long description, 10-500 characters.
    pub description: String,

    /// Unit price, 0.01 to 999999.99.
    pub price: Money,

    /// Free-text category, e.g. "Electronics".
    pub category: String,

    pub brand: Option<String>,

    /// Units on hand. Unsigned, so never negative.
    pub stock_quantity: u32,

    /// Stock Keeping Unit, `[A-Z0-9-]+`.
    pub sku: String,

    pub image_url: Option<String>,

    pub active: bool,

    /// Set once at creation.
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Case-insensitive SKU comparison, the rule uniqueness is checked with.
    pub fn sku_matches(&self, sku: &str) -> bool {
        eq_ignore_case(&self.sku, sku)
    }

    /// Case-insensitive exact category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// Compares two strings ignoring case, Unicode-aware.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// =============================================================================
// Item Record
// =============================================================================

/// Every stored field except the id.
///
/// The store takes records and hands back items, so an id can only ever come
/// from the store's counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: u32,
    pub sku: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemRecord {
    /// Attaches an id, producing the stored item.
    pub fn with_id(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            brand: self.brand,
            stock_quantity: self.stock_quantity,
            sku: self.sku,
            image_url: self.image_url,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            brand: item.brand,
            stock_quantity: item.stock_quantity,
            sku: item.sku,
            image_url: item.image_url,
            active: item.active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

// =============================================================================
// New Item
// =============================================================================

/// A validated candidate for create or full-replace update.
///
/// Produced by [`crate::validation::validate_item`]; the catalog service only
/// accepts this type and never re-checks field shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: u32,
    pub sku: String,
    pub image_url: Option<String>,
    /// `None` means the caller left it unset; the service stores `true`.
    pub active: Option<bool>,
}

impl NewItem {
    /// Stamps timestamps and resolves the active default.
    pub fn into_record(self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> ItemRecord {
        ItemRecord {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            brand: self.brand,
            stock_quantity: self.stock_quantity,
            sku: self.sku,
            image_url: self.image_url,
            active: self.active.unwrap_or(true),
            created_at,
            updated_at,
        }
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// Raw item payload as a caller sends it.
///
/// Every field is optional here so a missing field surfaces as a
/// "is required" validation error instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[ts(export)]
pub struct ItemPayload {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub description: Option<String>,
    #[ts(optional)]
    pub price_cents: Option<i64>,
    #[ts(optional)]
    pub category: Option<String>,
    #[ts(optional)]
    pub brand: Option<String>,
    #[ts(optional)]
    pub stock_quantity: Option<i64>,
    #[ts(optional)]
    pub sku: Option<String>,
    #[ts(optional)]
    pub image_url: Option<String>,
    #[ts(optional)]
    pub active: Option<bool>,
}

/// Raw stock-only update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StockPayload {
    #[ts(optional)]
    pub quantity: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================
