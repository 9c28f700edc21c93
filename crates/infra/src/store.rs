//! Inventory store: the single owner of the item list and its persisted copy.
//!
//! Every successful mutation rewrites the whole list to storage exactly once.
//! Write failures are logged and swallowed; the in-memory list stays
//! authoritative for the rest of the session.

use stockroom_core::{DomainError, DomainResult, Entity, ItemId, first_duplicate_id, position_of};
use stockroom_inventory::{
    Item, RawItemFields, ValidationError, ViewModel, ViewQuery, compute_view_model, seed_items,
    validate,
};
use thiserror::Error;

use crate::storage::{KeyValueStorage, StorageError};

/// Storage slot holding the serialized inventory.
pub const DEFAULT_STORAGE_KEY: &str = "inventario_facil_v1";

/// Result of an update/delete addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// No item with that id; nothing changed and nothing was written.
    NotFound,
}

/// Why `create` refused to add an item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The largest id in use is `u64::MAX`; no unused id follows it.
    #[error("no item id left after {last}")]
    IdsExhausted { last: ItemId },
}

/// Where the list came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Seed,
}

/// Read the persisted list, falling back to the seed data.
///
/// Missing, unreadable or malformed data (including duplicate ids or blank
/// names) never reaches the caller as an error.
pub fn load_items<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> (Vec<Item>, LoadSource) {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!(key, "no persisted inventory; using seed data");
            return (seed_items(), LoadSource::Seed);
        }
        Err(error) => {
            tracing::warn!(key, %error, "failed to read persisted inventory; using seed data");
            return (seed_items(), LoadSource::Seed);
        }
    };

    match parse_items(&raw) {
        Ok(items) => (items, LoadSource::Persisted),
        Err(error) => {
            tracing::warn!(key, %error, "persisted inventory is malformed; using seed data");
            (seed_items(), LoadSource::Seed)
        }
    }
}

fn parse_items(raw: &str) -> DomainResult<Vec<Item>> {
    let items: Vec<Item> =
        serde_json::from_str(raw).map_err(|e| DomainError::validation(e.to_string()))?;

    for item in &items {
        item.ensure_valid()?;
    }
    if let Some(id) = first_duplicate_id(&items) {
        return Err(DomainError::invariant(format!("duplicate item id {id}")));
    }
    Ok(items)
}

/// Serialize the full list into the storage slot, replacing what was there.
pub fn save_items<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
    items: &[Item],
) -> Result<(), StorageError> {
    let blob = serde_json::to_string(items).map_err(|e| StorageError::Io {
        key: key.to_string(),
        source: e.into(),
    })?;
    storage.set(key, &blob)
}

#[derive(Debug)]
pub struct InventoryStore<S> {
    storage: S,
    key: String,
    items: Vec<Item>,
    source: LoadSource,
}

impl<S: KeyValueStorage> InventoryStore<S> {
    /// Load from `storage` under [`DEFAULT_STORAGE_KEY`].
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (items, source) = load_items(&storage, &key);
        tracing::debug!(key = %key, count = items.len(), ?source, "inventory loaded");
        Self {
            storage,
            key,
            items,
            source,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        position_of(&self.items, id).map(|index| &self.items[index])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn view(&self, query: &ViewQuery) -> ViewModel<'_> {
        compute_view_model(&self.items, query)
    }

    /// Validate, assign `max(id) + 1` (or 1), append, persist.
    ///
    /// Refuses without writing when the largest id in use is `u64::MAX`.
    pub fn create(&mut self, raw: &RawItemFields) -> Result<Item, CreateError> {
        let fields = validate(raw)?;
        let Some(id) = ItemId::next_after(self.items.iter().map(Entity::id)) else {
            let last = ItemId::new(u64::MAX);
            tracing::warn!(item_id = %last, "item ids exhausted; create refused");
            return Err(CreateError::IdsExhausted { last });
        };
        let item = Item::from_fields(id, fields);

        self.items.push(item.clone());
        tracing::info!(item_id = %id, "item created");
        self.save();
        Ok(item)
    }

    /// Validate, then replace the item with `id` in place and persist.
    ///
    /// Validation runs before the lookup, so invalid input is rejected even
    /// for a stale id.
    pub fn update(
        &mut self,
        id: ItemId,
        raw: &RawItemFields,
    ) -> Result<MutationOutcome, ValidationError> {
        let fields = validate(raw)?;
        let Some(index) = position_of(&self.items, id) else {
            tracing::debug!(item_id = %id, "update target not found");
            return Ok(MutationOutcome::NotFound);
        };

        self.items[index] = Item::from_fields(id, fields);
        tracing::info!(item_id = %id, "item updated");
        self.save();
        Ok(MutationOutcome::Applied)
    }

    pub fn delete(&mut self, id: ItemId) -> MutationOutcome {
        let Some(index) = position_of(&self.items, id) else {
            tracing::debug!(item_id = %id, "delete target not found");
            return MutationOutcome::NotFound;
        };

        self.items.remove(index);
        tracing::info!(item_id = %id, "item deleted");
        self.save();
        MutationOutcome::Applied
    }

    fn save(&self) {
        if let Err(error) = save_items(&self.storage, &self.key, &self.items) {
            tracing::error!(key = %self.key, %error, "failed to persist inventory; changes are kept in memory only");
        }
    }
}
