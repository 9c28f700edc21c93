//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no rendering).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, first_duplicate_id, position_of};
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
