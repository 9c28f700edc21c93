//! The inventory widget: store + form + filter state wired to a surface.
//!
//! Every entry point runs to completion and re-renders when the visible list
//! could have changed (initial load, mutations, filter edits).

use stockroom_core::ItemId;
use stockroom_infra::{CreateError, InventoryStore, KeyValueStorage, MutationOutcome};
use stockroom_inventory::{
    ActionKind, Category, Field, Item, RenderedView, RowAction, SummaryLabels, ValidationError,
    ViewQuery,
};

use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::form::{EditMode, FormState};
use crate::surface::{DisplaySurface, Frame};

pub const NOTICE_CREATED: &str = "Ítem agregado";
pub const NOTICE_UPDATED: &str = "Ítem actualizado";
pub const NOTICE_DELETED: &str = "Ítem eliminado";
pub const NOTICE_INVALID: &str = "Corrige los campos marcados en rojo.";
pub const NOTICE_FULL: &str = "No se pueden agregar más ítems.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Item),
    Updated(ItemId),
    /// The item being edited no longer exists; nothing changed.
    StaleUpdate(ItemId),
    Rejected(ValidationError),
    /// No unused id is left; nothing changed and the form is kept.
    IdsExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    EditStarted(ItemId),
    Deleted(ItemId),
    DeleteDeclined(ItemId),
    /// Target id no longer exists; nothing changed.
    Stale(ItemId),
}

#[derive(Debug)]
pub struct InventoryWidget<S, D> {
    store: InventoryStore<S>,
    form: FormState,
    query: ViewQuery,
    surface: D,
}

impl<S, D> InventoryWidget<S, D>
where
    S: KeyValueStorage,
    D: DisplaySurface,
{
    /// Take over a loaded store and render it once.
    pub fn new(store: InventoryStore<S>, surface: D) -> Self {
        let mut widget = Self {
            store,
            form: FormState::new(),
            query: ViewQuery::all(),
            surface,
        };
        widget.render();
        widget
    }

    pub fn store(&self) -> &InventoryStore<S> {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn into_parts(self) -> (InventoryStore<S>, D) {
        (self.store, self.surface)
    }

    /// The frame for the current store contents and filters.
    pub fn frame(&self) -> Frame {
        let view = self.store.view(&self.query);
        Frame {
            view: RenderedView::build(&view),
            summary: SummaryLabels::from(view.summary),
        }
    }

    pub fn render(&mut self) {
        let frame = self.frame();
        self.surface.render(&frame);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
        self.render();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.query.set_category(category);
        self.render();
    }

    /// Replace both filters with a single re-render.
    pub fn set_filters(&mut self, search: impl Into<String>, category: Option<Category>) {
        self.query = ViewQuery::new(search, category);
        self.render();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Discard in-progress input and return to idle.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Create when idle, update the targeted item when editing.
    pub fn submit(&mut self) -> SubmitOutcome {
        let raw = self.form.fields().clone();
        let result = match self.form.mode() {
            EditMode::Idle => match self.store.create(&raw) {
                Ok(item) => Ok(SubmitOutcome::Created(item)),
                Err(CreateError::Invalid(err)) => Err(err),
                Err(CreateError::IdsExhausted { .. }) => {
                    self.notify(NOTICE_FULL);
                    return SubmitOutcome::IdsExhausted;
                }
            },
            EditMode::Editing(id) => self.store.update(id, &raw).map(|outcome| match outcome {
                MutationOutcome::Applied => SubmitOutcome::Updated(id),
                MutationOutcome::NotFound => SubmitOutcome::StaleUpdate(id),
            }),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(%err, "form submission rejected");
                self.form.mark(&err);
                self.notify(NOTICE_INVALID);
                return SubmitOutcome::Rejected(err);
            }
        };

        match &outcome {
            SubmitOutcome::Created(_) => self.notify(NOTICE_CREATED),
            SubmitOutcome::Updated(_) => self.notify(NOTICE_UPDATED),
            SubmitOutcome::StaleUpdate(id) => {
                tracing::warn!(item_id = %id, "edited item no longer exists; update dropped");
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::IdsExhausted => {}
        }
        self.render();
        self.form.reset();
        outcome
    }

    /// Handle a row control. Deletion asks `confirm` first.
    pub fn dispatch(&mut self, action: RowAction, confirm: &mut impl Confirm) -> ActionOutcome {
        let id = action.id;
        match action.action {
            ActionKind::Edit => match self.store.get(id) {
                Some(item) => {
                    self.form.populate(item);
                    ActionOutcome::EditStarted(id)
                }
                None => {
                    tracing::debug!(item_id = %id, "edit target not found");
                    self.form.reset();
                    ActionOutcome::Stale(id)
                }
            },
            ActionKind::Delete => {
                if !confirm.confirm(DELETE_PROMPT) {
                    return ActionOutcome::DeleteDeclined(id);
                }
                match self.store.delete(id) {
                    MutationOutcome::Applied => {
                        self.render();
                        self.notify(NOTICE_DELETED);
                        ActionOutcome::Deleted(id)
                    }
                    MutationOutcome::NotFound => ActionOutcome::Stale(id),
                }
            }
        }
    }

    fn notify(&mut self, message: &str) {
        tracing::info!(toast = message, "notice");
        self.surface.notify(message);
    }
}
