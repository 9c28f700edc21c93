//! Item form state: the edit workflow's only state carrier.
//!
//! `item_id` plays the role of the hidden id input. `None` means a submit
//! creates a new item; `Some(id)` means it updates `id`.

use std::collections::BTreeSet;

use stockroom_core::ItemId;
use stockroom_inventory::{Field, Item, RawItemFields, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Idle,
    Editing(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    item_id: Option<ItemId>,
    fields: RawItemFields,
    invalid: BTreeSet<Field>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        match self.item_id {
            Some(id) => EditMode::Editing(id),
            None => EditMode::Idle,
        }
    }

    pub fn fields(&self) -> &RawItemFields {
        &self.fields
    }

    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Typing into a field clears its error mark.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.invalid.remove(&field);
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.invalid.iter().copied()
    }

    pub fn is_marked(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub(crate) fn mark(&mut self, err: &ValidationError) {
        self.invalid = err.fields().collect();
    }

    /// Empty every field, drop the id, clear marks.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Load `item` for editing. Starts from a clean form.
    pub fn populate(&mut self, item: &Item) {
        self.reset();
        self.item_id = Some(item.id);
        self.fields = RawItemFields::from_item(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::{seed_items, validate};

    #[test]
    fn starts_idle_and_empty() {
        let form = FormState::new();
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.fields(), &RawItemFields::default());
    }

    #[test]
    fn populate_enters_editing_with_every_field() {
        let item = seed_items().remove(5);
        let mut form = FormState::new();
        form.set_field(Field::Name, "leftover");
        form.populate(&item);

        assert_eq!(form.mode(), EditMode::Editing(item.id));
        assert_eq!(form.get(Field::Name), "Botella térmica 750ml");
        assert_eq!(form.get(Field::Category), "Hogar");
        assert_eq!(form.get(Field::Quantity), "42");
        assert_eq!(form.get(Field::Price), "159");
        assert_eq!(form.get(Field::SupplierEmail), "");
        assert_eq!(form.get(Field::DateIn), "2025-09-25");
    }

    #[test]
    fn editing_a_field_clears_only_its_mark() {
        let mut form = FormState::new();
        let err = validate(form.fields()).unwrap_err();
        form.mark(&err);
        assert!(form.is_marked(Field::Name));
        assert!(form.is_marked(Field::Price));

        form.set_field(Field::Name, "Lápiz");
        assert!(!form.is_marked(Field::Name));
        assert!(form.is_marked(Field::Price));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut form = FormState::new();
        form.populate(&seed_items()[0]);
        form.reset();
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.invalid_fields().count(), 0);
        assert_eq!(form.get(Field::Name), "");
    }
}
