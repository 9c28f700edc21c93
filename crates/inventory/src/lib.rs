//! Inventory domain module.
//!
//! This crate contains the business rules for stock items, implemented purely
//! as deterministic domain logic (no IO, no rendering target, no storage):
//! item model, field validation, seed data, and the filtered view model.

pub mod item;
pub mod render;
pub mod seed;
pub mod validation;
pub mod view;

pub use item::{Category, Item, ItemFields, Price};
pub use render::{
    ActionKind, EMPTY_PLACEHOLDER, RenderedView, RowAction, RowDescriptor, SummaryLabels,
    format_currency,
};
pub use seed::seed_items;
pub use validation::{Field, FieldError, FieldProblem, RawItemFields, ValidationError, validate};
pub use view::{Summary, ViewModel, ViewQuery, compute_view_model};
