//! # Item Store
//!
//! The in-memory collection of items plus identifier assignment.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What Is Guarded By What                              │
//! │                                                                         │
//! │  next_id: AtomicU64                                                    │
//! │     fetch_add(1) per insert ──► ids 1, 2, 3, ... never repeated        │
//! │                                                                         │
//! │  items: Mutex<Vec<Item>>                                               │
//! │     every read and every insert / replace / delete takes the lock      │
//! │     reads clone out of the lock, so callers never see a live view      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store does no rule checking: duplicate SKUs are the service's problem.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use catalog_core::{Item, ItemId, ItemRecord};

/// In-memory item storage in insertion order.
///
/// ## Usage
/// ```rust
/// use catalog_store::ItemStore;
///
/// let store = ItemStore::new();
/// assert_eq!(store.count(), 0);
/// assert!(!store.exists_by_sku("ABC-1"));
/// ```
#[derive(Debug)]
pub struct ItemStore {
    items: Mutex<Vec<Item>>,
    next_id: AtomicU64,
}

impl ItemStore {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        ItemStore {
            items: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn items(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().expect("Item store mutex poisoned")
    }

    /// Stores a record under a fresh id and returns the stored item.
    pub fn insert(&self, record: ItemRecord) -> Item {
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let item = record.with_id(id);

        debug!(id = %id, sku = %item.sku, "Inserting item");
        self.items().push(item.clone());

        item
    }

    /// Looks an item up by id.
    pub fn get_by_id(&self, id: ItemId) -> Option<Item> {
        self.items().iter().find(|item| item.id == id).cloned()
    }

    /// Returns a copy of every item in insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        self.items().clone()
    }

    /// Items whose category equals `category`, ignoring case.
    pub fn list_by_category(&self, category: &str) -> Vec<Item> {
        self.filtered(|item| item.in_category(category))
    }

    /// Items whose name contains `fragment`, ignoring case.
    pub fn list_by_name_contains(&self, fragment: &str) -> Vec<Item> {
        self.filtered(|item| item.name_contains(fragment))
    }

    fn filtered(&self, predicate: impl Fn(&Item) -> bool) -> Vec<Item> {
        self.items()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Whether any item uses `sku`, ignoring case.
    pub fn exists_by_sku(&self, sku: &str) -> bool {
        self.items().iter().any(|item| item.sku_matches(sku))
    }

    /// Swaps the record stored under `id` for `record`, keeping the id.
    ///
    /// The old entry is removed and the replacement appended, so a replaced
    /// item moves to the end of insertion order.
    ///
    /// ## Returns
    /// * `Some(Item)` - The stored replacement
    /// * `None` - No item has this id
    pub fn replace(&self, id: ItemId, record: ItemRecord) -> Option<Item> {
        let mut items = self.items();
        let position = items.iter().position(|item| item.id == id)?;
        items.remove(position);

        let item = record.with_id(id);
        debug!(id = %id, sku = %item.sku, "Replacing item");
        items.push(item.clone());

        Some(item)
    }

    /// Removes the item with `id`. Returns `true` if something was removed.
    pub fn delete_by_id(&self, id: ItemId) -> bool {
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;

        debug!(id = %id, removed, "Deleting item");
        removed
    }

    /// Number of stored items.
    pub fn count(&self) -> usize {
        self.items().len()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        ItemStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Money;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn record(name: &str, category: &str, sku: &str) -> ItemRecord {
        let now = Utc::now();
        ItemRecord {
            name: name.to_string(),
            description: format!("{name} for the store tests"),
            price: Money::from_cents(1_000),
            category: category.to_string(),
            brand: None,
            stock_quantity: 5,
            sku: sku.to_string(),
            image_url: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_insert_assigns_increasing_ids_from_one() {
        let store = ItemStore::new();
        let a = store.insert(record("Laptop", "Electronics", "A-1"));
        let b = store.insert(record("Phone", "Electronics", "B-1"));

        assert_eq!(a.id, ItemId::new(1));
        assert_eq!(b.id, ItemId::new(2));
        assert_eq!(store.count(), 2);
        assert_eq!(store.get_by_id(a.id), Some(a));
    }

    #[test]
    fn test_concurrent_inserts_never_share_an_id() {
        let store = Arc::new(ItemStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.insert(record("Widget", "Tools", &format!("W-{t}-{i}"))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<ItemId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(store.count(), 400);
    }

    #[test]
    fn test_list_all_is_a_copy() {
        let store = ItemStore::new();
        let item = store.insert(record("Laptop", "Electronics", "A-1"));

        let snapshot = store.list_all();
        store.delete_by_id(item.id);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.list_all().len(), 0);
    }

    #[test]
    fn test_list_by_category_ignores_case_but_not_partial() {
        let store = ItemStore::new();
        store.insert(record("Laptop", "Electronics", "A-1"));
        store.insert(record("Novel", "Books", "B-1"));
        store.insert(record("Phone", "electronics", "C-1"));

        let found = store.list_by_category("ELECTRONICS");
        let names: Vec<_> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Phone"]);

        assert!(store.list_by_category("Electro").is_empty());
    }

    #[test]
    fn test_list_by_name_contains() {
        let store = ItemStore::new();
        store.insert(record("Sony WH-1000XM5 Headphones", "Electronics", "A-1"));
        store.insert(record("Dell XPS 15 Laptop", "Electronics", "B-1"));

        assert_eq!(store.list_by_name_contains("headPHONES").len(), 1);
        assert_eq!(store.list_by_name_contains("").len(), 2);
        assert!(store.list_by_name_contains("tablet").is_empty());
    }

    #[test]
    fn test_exists_by_sku_ignores_case() {
        let store = ItemStore::new();
        store.insert(record("Laptop", "Electronics", "ABC-1"));

        assert!(store.exists_by_sku("ABC-1"));
        assert!(store.exists_by_sku("abc-1"));
        assert!(!store.exists_by_sku("ABC-2"));
    }

    #[test]
    fn test_replace_keeps_id_and_moves_to_end() {
        let store = ItemStore::new();
        let first = store.insert(record("Laptop", "Electronics", "A-1"));
        store.insert(record("Phone", "Electronics", "B-1"));

        let replaced = store
            .replace(first.id, record("Laptop Pro", "Electronics", "A-2"))
            .unwrap();

        assert_eq!(replaced.id, first.id);
        assert_eq!(store.count(), 2);
        assert_eq!(store.get_by_id(first.id).unwrap().name, "Laptop Pro");
        assert_eq!(store.list_all().last().unwrap().id, first.id);
    }

    #[test]
    fn test_replace_missing_id_changes_nothing() {
        let store = ItemStore::new();
        store.insert(record("Laptop", "Electronics", "A-1"));

        assert!(store.replace(ItemId::new(99), record("Ghost", "None", "G-1")).is_none());
        assert_eq!(store.count(), 1);
        assert!(!store.exists_by_sku("G-1"));
    }

    #[test]
    fn test_delete_by_id() {
        let store = ItemStore::new();
        let item = store.insert(record("Laptop", "Electronics", "A-1"));

        assert!(store.delete_by_id(item.id));
        assert!(!store.delete_by_id(item.id));
        assert!(store.get_by_id(item.id).is_none());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = ItemStore::new();
        let first = store.insert(record("Laptop", "Electronics", "A-1"));
        store.delete_by_id(first.id);

        let second = store.insert(record("Phone", "Electronics", "B-1"));
        assert_eq!(second.id, ItemId::new(2));
    }
}
