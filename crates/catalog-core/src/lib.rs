//! # catalog-core: Pure Domain Model for the Item Catalog
//!
//! This crate holds everything about an item that does not depend on where
//! items are kept: the types, the money representation, the domain errors and
//! the field validation run at the boundary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Item Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 catalog-host (commands, JSON lines)             │   │
//! │  │     ItemPayload ──► validate_item ──► NewItem ──► service       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │ NotFound  │  │   rules   │  │   │
//! │  │   │  NewItem  │  │  (cents)  │  │ DupSku    │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             catalog-store (ItemStore + CatalogService)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, NewItem, ItemPayload, ItemId
//! - [`money`] - Money type with integer cents
//! - [`error`] - Domain and validation errors
//! - [`validation`] - Field rules applied before the core runs
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::money::Money;
//!
//! let price = Money::from_major_minor(1299, 99);
//! assert_eq!(price.cents(), 129_999);
//! assert_eq!(price.to_string(), "1299.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CatalogError, CatalogResult, ValidationError, ValidationErrors};
pub use money::Money;
pub use types::*;

// =============================================================================
// Field Limits
// =============================================================================

/// Minimum item name length in characters.
pub const NAME_MIN_LEN: usize = 3;

/// Maximum item name length in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Minimum description length in characters.
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Lowest accepted price (0.01).
pub const MIN_PRICE: Money = Money::from_cents(1);

/// Highest accepted price (999999.99).
pub const MAX_PRICE: Money = Money::from_cents(99_999_999);
