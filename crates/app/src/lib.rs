//! `stockroom-app`
//!
//! **Responsibility:** the inventory widget behind any display surface.
//!
//! This crate provides:
//! - The edit workflow (create vs. update, driven by the form's hidden id)
//! - Render triggers: initial load, every mutation, every filter change
//! - A terminal surface and the `stockroom` command-line front end
//!
//! Storage and identity are injected; nothing here knows where bytes live.

pub mod cli;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod form;
pub mod surface;
pub mod widget;

pub use config::AppConfig;
pub use confirm::Confirm;
pub use form::{EditMode, FormState};
pub use surface::{DisplaySurface, Frame, RecordingSurface, TerminalSurface};
pub use widget::{ActionOutcome, InventoryWidget, SubmitOutcome};
