//! Render instructions derived from a [`ViewModel`].
//!
//! Rows carry display strings plus action identifiers; markup and styling are
//! left to whatever surface consumes them.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ItemId};

use crate::item::{Category, Price};
use crate::view::{Summary, ViewModel};

/// Placeholder shown instead of rows when nothing matches.
pub const EMPTY_PLACEHOLDER: &str = "No se encontraron ítems.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Edit,
    Delete,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }
}

impl core::str::FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(ActionKind::Edit),
            "delete" => Ok(ActionKind::Delete),
            other => Err(DomainError::validation(format!("unknown row action: {other}"))),
        }
    }
}

/// An action control on a rendered row, dispatched back on interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowAction {
    pub action: ActionKind,
    pub id: ItemId,
}

impl RowAction {
    pub fn edit(id: ItemId) -> Self {
        Self { action: ActionKind::Edit, id }
    }

    pub fn delete(id: ItemId) -> Self {
        Self { action: ActionKind::Delete, id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDescriptor {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub date_in: String,
    pub quantity: u64,
    pub price: String,
    pub actions: [RowAction; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLabels {
    pub units: String,
    pub value: String,
}

impl From<Summary> for SummaryLabels {
    fn from(summary: Summary) -> Self {
        Self {
            units: format!("{} unidades", summary.total_quantity),
            value: format!("Total: {}", format_currency(summary.total_value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedView {
    Placeholder { message: &'static str },
    Rows { rows: Vec<RowDescriptor> },
}

impl RenderedView {
    pub fn build(view: &ViewModel<'_>) -> Self {
        if view.is_empty() {
            return RenderedView::Placeholder {
                message: EMPTY_PLACEHOLDER,
            };
        }
        let rows = view
            .items
            .iter()
            .map(|item| RowDescriptor {
                id: item.id,
                name: item.name.clone(),
                category: item.category,
                date_in: item.date_in.format("%Y-%m-%d").to_string(),
                quantity: item.quantity,
                price: format_currency(item.price),
                actions: [RowAction::edit(item.id), RowAction::delete(item.id)],
            })
            .collect();
        RenderedView::Rows { rows }
    }

    pub fn rows(&self) -> &[RowDescriptor] {
        match self {
            RenderedView::Rows { rows } => rows,
            RenderedView::Placeholder { .. } => &[],
        }
    }
}

/// Mexican peso, `es-MX` style: `$1,399.00`.
pub fn format_currency(amount: Price) -> String {
    let cents = amount.cents();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}.{:02}", cents % 100)
}
