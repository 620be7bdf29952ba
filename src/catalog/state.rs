//! Catalog State Management
//!
//! In-memory item registry. Items are never removed, only soft-deleted, so
//! an item's id doubles as its insertion index.

use super::{
    helpers::apply_patch,
    models::{Item, ItemQuery, ItemRequest},
};
use crate::error::{ShopError, ShopResult};
use crate::query::{window, within};
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) const ITEM_NOT_FOUND: &str = "Item not found";

/// Registry of catalog items keyed by id
#[derive(Debug, Default)]
pub struct ItemRegistry {
    /// DashMap allows concurrent access without external Mutexes.
    items: DashMap<usize, Item>,

    /// Next id to hand out.
    next_id: AtomicUsize,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids allocated so far.
    pub fn len(&self) -> usize {
        self.next_id.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores a new, non-deleted item under the next free id.
    pub fn create(&self, request: ItemRequest) -> Item {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item {
            id,
            name: request.name,
            price: request.price,
            deleted: false,
        };
        self.items.insert(id, item.clone());

        tracing::debug!(item_id = id, "item created");
        item
    }

    /// Returns the item unless it is unknown or soft-deleted.
    pub fn get(&self, id: usize) -> ShopResult<Item> {
        self.items
            .get(&id)
            .filter(|entry| !entry.deleted)
            .map(|entry| entry.value().clone())
            .ok_or(ShopError::NotFound(ITEM_NOT_FOUND))
    }

    /// Looks an item up by id alone, soft-deleted ones included.
    pub fn lookup(&self, id: usize) -> Option<Item> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    /// Slices `[offset, offset + limit)` first, then drops items outside the
    /// price range and, unless `show_deleted`, soft-deleted ones.
    pub fn list(&self, query: &ItemQuery) -> Vec<Item> {
        window(query.offset, query.limit, self.len())
            // Ids allocated by an in-flight create may not be inserted yet.
            .filter_map(|id| self.lookup(id))
            .filter(|item| within(item.price, query.min_price, query.max_price))
            .filter(|item| query.show_deleted || !item.deleted)
            .collect()
    }

    /// Replaces every field but the id, including `deleted`.
    pub fn update(&self, id: usize, request: ItemRequest) -> ShopResult<Item> {
        let mut entry = self
            .items
            .get_mut(&id)
            .filter(|entry| !entry.deleted)
            .ok_or(ShopError::NotFound(ITEM_NOT_FOUND))?;

        *entry.value_mut() = Item {
            id,
            name: request.name,
            price: request.price,
            deleted: request.deleted,
        };

        tracing::debug!(item_id = id, "item replaced");
        Ok(entry.value().clone())
    }

    /// Applies a partial update in place, field by field.
    ///
    /// An absent or deleted target yields [`ShopError::NotModified`]. A
    /// rejected field leaves the fields before it applied.
    pub fn patch(&self, id: usize, fields: Map<String, Value>) -> ShopResult<Item> {
        let mut entry = self
            .items
            .get_mut(&id)
            .filter(|entry| !entry.deleted)
            .ok_or(ShopError::NotModified)?;

        apply_patch(entry.value_mut(), fields)?;

        tracing::debug!(item_id = id, "item patched");
        Ok(entry.value().clone())
    }

    /// Soft-deletes the item. Deleting twice is not an error.
    pub fn delete(&self, id: usize) -> ShopResult<Item> {
        let mut entry = self
            .items
            .get_mut(&id)
            .ok_or(ShopError::NotFound(ITEM_NOT_FOUND))?;

        entry.deleted = true;

        tracing::debug!(item_id = id, "item deleted");
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(name: &str, price: f64) -> ItemRequest {
        ItemRequest {
            name: name.into(),
            price,
            deleted: false,
        }
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let registry = ItemRegistry::new();
        let ids: Vec<usize> = (0..5)
            .map(|i| registry.create(request("x", i as f64)).id)
            .collect();

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_delete_hides_item_from_reads() {
        let registry = ItemRegistry::new();
        let item = registry.create(request("Apple", 10.0));

        let deleted = registry.delete(item.id).unwrap();
        assert!(deleted.deleted);
        assert!(registry.delete(item.id).is_ok(), "delete is idempotent");

        assert_eq!(
            registry.get(item.id),
            Err(ShopError::NotFound(ITEM_NOT_FOUND))
        );
        assert!(registry.list(&ItemQuery::default()).is_empty());

        let query = ItemQuery {
            show_deleted: true,
            ..ItemQuery::default()
        };
        assert_eq!(registry.list(&query), vec![deleted.clone()]);
        assert_eq!(registry.lookup(item.id), Some(deleted));
    }

    #[test]
    fn test_list_slices_before_filtering() {
        let registry = ItemRegistry::new();
        for i in 0..15 {
            registry.create(request("x", i as f64));
        }

        let query = ItemQuery {
            offset: 10,
            limit: 10,
            min_price: Some(0.0),
            ..ItemQuery::default()
        };
        let ids: Vec<usize> = registry.list(&query).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 11, 12, 13, 14]);

        let query = ItemQuery {
            offset: 0,
            limit: 5,
            min_price: Some(3.0),
            max_price: Some(8.0),
            ..ItemQuery::default()
        };
        let ids: Vec<usize> = registry.list(&query).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_deleted_filter_runs_after_slicing() {
        let registry = ItemRegistry::new();
        for i in 0..4 {
            registry.create(request("x", i as f64));
        }
        registry.delete(0).unwrap();

        let query = ItemQuery {
            limit: 2,
            ..ItemQuery::default()
        };
        let ids: Vec<usize> = registry.list(&query).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1], "window is not refilled past the deleted item");
    }

    #[test]
    fn test_update_replaces_fields() {
        let registry = ItemRegistry::new();
        let item = registry.create(request("Apple", 10.0));

        let updated = registry.update(item.id, request("Pear", 12.0)).unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Pear");
        assert_eq!(registry.get(item.id).unwrap(), updated);

        assert!(registry.update(42, request("Ghost", 1.0)).is_err());

        registry.delete(item.id).unwrap();
        assert_eq!(
            registry.update(item.id, request("Plum", 1.0)),
            Err(ShopError::NotFound(ITEM_NOT_FOUND))
        );
    }

    #[test]
    fn test_patch_status_distinction() {
        let registry = ItemRegistry::new();
        let item = registry.create(request("Apple", 10.0));

        let patched = registry.patch(item.id, fields(json!({"price": 11.0}))).unwrap();
        assert_eq!(patched.price, 11.0);

        assert_eq!(
            registry.patch(9, fields(json!({"price": 1.0}))),
            Err(ShopError::NotModified)
        );

        let result = registry.patch(item.id, fields(json!({"name": "Pear", "color": "red"})));
        assert!(matches!(result, Err(ShopError::Unprocessable(_))));
        assert_eq!(registry.get(item.id).unwrap().name, "Pear");

        registry.delete(item.id).unwrap();
        assert_eq!(
            registry.patch(item.id, fields(json!({"name": "Plum"}))),
            Err(ShopError::NotModified)
        );
    }
}
