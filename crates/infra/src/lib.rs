//! Infrastructure layer: the key-value storage slot and the inventory store
//! that persists through it.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage, StorageError};
pub use store::{
    CreateError, DEFAULT_STORAGE_KEY, InventoryStore, LoadSource, MutationOutcome, load_items,
    save_items,
};
