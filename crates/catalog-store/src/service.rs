//! # Catalog Service
//!
//! Business rules over the [`ItemStore`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What The Service Adds                                │
//! │                                                                         │
//! │  create        SKU taken (any case)?       ──► DuplicateSku            │
//! │                stamp created_at = updated_at = now, active ?? true     │
//! │                                                                         │
//! │  update        id missing?                 ──► NotFound                │
//! │                SKU changed and taken?      ──► DuplicateSku            │
//! │                keep created_at, updated_at = now, full replace         │
//! │                                                                         │
//! │  update_stock  id missing?                 ──► NotFound                │
//! │                only stock_quantity and updated_at change               │
//! │                                                                         │
//! │  delete        nothing removed?            ──► NotFound                │
//! │                                                                         │
//! │  reads         passthrough (get_by_id maps None ──► NotFound)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations hold `write_guard` for their whole check-then-write, so two
//! concurrent creates with the same SKU cannot both pass the check. A failed
//! operation never touches the store.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info, warn};

use catalog_core::{eq_ignore_case, CatalogError, CatalogResult, Item, ItemId, ItemRecord, NewItem};

use crate::store::ItemStore;

/// The catalog's business-rule layer.
///
/// ## Usage
/// ```rust,ignore
/// let service = CatalogService::new(Arc::new(ItemStore::new()));
///
/// let item = service.create(new_item)?;
/// let same = service.get_by_id(item.id)?;
/// service.update_stock(item.id, 12)?;
/// ```
#[derive(Debug)]
pub struct CatalogService {
    store: Arc<ItemStore>,
    write_guard: Mutex<()>,
}

impl CatalogService {
    /// Creates a service over `store`.
    pub fn new(store: Arc<ItemStore>) -> Self {
        CatalogService {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// The store this service writes to.
    pub fn store(&self) -> &Arc<ItemStore> {
        &self.store
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_guard.lock().expect("Catalog write guard poisoned")
    }

    /// Creates an item.
    ///
    /// ## Errors
    /// * `DuplicateSku` - Another item already uses this SKU, ignoring case
    pub fn create(&self, new_item: NewItem) -> CatalogResult<Item> {
        debug!(sku = %new_item.sku, "Creating item");
        let _writes = self.lock_writes();

        if self.store.exists_by_sku(&new_item.sku) {
            warn!(sku = %new_item.sku, "Rejected create: SKU already exists");
            return Err(CatalogError::DuplicateSku(new_item.sku));
        }

        let now = Utc::now();
        let item = self.store.insert(new_item.into_record(now, now));

        info!(id = %item.id, sku = %item.sku, "Item created");
        Ok(item)
    }

    /// Fetches an item.
    ///
    /// ## Errors
    /// * `NotFound` - No item has this id
    pub fn get_by_id(&self, id: ItemId) -> CatalogResult<Item> {
        self.store.get_by_id(id).ok_or(CatalogError::NotFound(id))
    }

    pub fn list_all(&self) -> Vec<Item> {
        self.store.list_all()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Item> {
        self.store.list_by_category(category)
    }

    pub fn search_by_name(&self, name: &str) -> Vec<Item> {
        self.store.list_by_name_contains(name)
    }

    /// Replaces every field of an item except its id and created_at.
    ///
    /// This is a full replace, not a merge: optional fields left out of
    /// `new_item` are cleared and an unset `active` becomes `true`.
    ///
    /// ## Errors
    /// * `NotFound` - No item has this id
    /// * `DuplicateSku` - The SKU changed to one another item already uses
    pub fn update(&self, id: ItemId, new_item: NewItem) -> CatalogResult<Item> {
        debug!(id = %id, sku = %new_item.sku, "Updating item");
        let _writes = self.lock_writes();

        let existing = self.get_by_id(id)?;

        // Same SKU in another case still belongs to this item.
        if !eq_ignore_case(&existing.sku, &new_item.sku) && self.store.exists_by_sku(&new_item.sku) {
            warn!(id = %id, sku = %new_item.sku, "Rejected update: SKU already exists");
            return Err(CatalogError::DuplicateSku(new_item.sku));
        }

        let record = new_item.into_record(existing.created_at, Utc::now());
        let item = self.store.replace(id, record).ok_or(CatalogError::NotFound(id))?;

        info!(id = %id, sku = %item.sku, "Item updated");
        Ok(item)
    }

    /// Deletes an item for good.
    ///
    /// ## Errors
    /// * `NotFound` - No item has this id
    pub fn delete(&self, id: ItemId) -> CatalogResult<()> {
        let _writes = self.lock_writes();

        if !self.store.delete_by_id(id) {
            warn!(id = %id, "Rejected delete: item not found");
            return Err(CatalogError::NotFound(id));
        }

        info!(id = %id, "Item deleted");
        Ok(())
    }

    /// Sets the stock level of an item, touching nothing else but updated_at.
    ///
    /// ## Errors
    /// * `NotFound` - No item has this id
    pub fn update_stock(&self, id: ItemId, quantity: u32) -> CatalogResult<Item> {
        debug!(id = %id, quantity, "Updating stock");
        let _writes = self.lock_writes();

        let mut record = ItemRecord::from(self.get_by_id(id)?);
        record.stock_quantity = quantity;
        record.updated_at = Utc::now();

        let item = self.store.replace(id, record).ok_or(CatalogError::NotFound(id))?;

        info!(id = %id, quantity, "Stock updated");
        Ok(item)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
