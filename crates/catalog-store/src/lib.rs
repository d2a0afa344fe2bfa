//! # catalog-store: Item Storage for the Item Catalog
//!
//! Holds the items in memory and enforces the catalog rules on top of them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Item Catalog Data Flow                           │
//! │                                                                         │
//! │  catalog-host command (create_item)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌────────────────────┐         │   │
//! │  │   │  CatalogService    │        │     ItemStore      │         │   │
//! │  │   │   (service.rs)     │        │    (store.rs)      │         │   │
//! │  │   │                    │        │                    │         │   │
//! │  │   │ SKU uniqueness     │───────►│ Mutex<Vec<Item>>   │         │   │
//! │  │   │ NotFound checks    │        │ AtomicU64 next id  │         │   │
//! │  │   │ timestamps         │        │ linear scans       │         │   │
//! │  │   └────────────────────┘        └────────────────────┘         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The in-memory collection and id counter
//! - [`service`] - Business rules over the store
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_store::{CatalogService, ItemStore};
//!
//! let service = CatalogService::new(Arc::new(ItemStore::new()));
//! assert_eq!(service.count(), 0);
//! ```

pub mod service;
pub mod store;

pub use service::CatalogService;
pub use store::ItemStore;
