//! CLI subcommands, executed through the widget like any other front end.

use stockroom_infra::KeyValueStorage;
use stockroom_inventory::{Category, RowAction};

use crate::cli::{Command, ItemArgs};
use crate::confirm::Confirm;
use crate::surface::DisplaySurface;
use crate::widget::{ActionOutcome, InventoryWidget, SubmitOutcome};

/// What a command produced besides rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub success: bool,
    pub lines: Vec<String>,
}

impl Report {
    fn ok() -> Self {
        Self {
            success: true,
            lines: Vec::new(),
        }
    }

    fn ok_with(lines: Vec<String>) -> Self {
        Self {
            success: true,
            lines,
        }
    }

    fn failed(lines: Vec<String>) -> Self {
        Self {
            success: false,
            lines,
        }
    }
}

pub fn run<S, D>(
    widget: &mut InventoryWidget<S, D>,
    command: Command,
    confirm: &mut impl Confirm,
) -> Report
where
    S: KeyValueStorage,
    D: DisplaySurface,
{
    match command {
        Command::List { search, category } => {
            widget.set_filters(search, category);
            Report::ok()
        }
        Command::Add(fields) => {
            widget.reset_form();
            type_fields(widget, &fields);
            submit(widget)
        }
        Command::Edit { id, fields } => match widget.dispatch(RowAction::edit(id), confirm) {
            ActionOutcome::EditStarted(_) => {
                type_fields(widget, &fields);
                submit(widget)
            }
            _ => Report::failed(vec![format!("No existe el ítem {id}")]),
        },
        Command::Delete { id, yes } => {
            let outcome = if yes {
                widget.dispatch(RowAction::delete(id), &mut |_: &str| true)
            } else {
                widget.dispatch(RowAction::delete(id), confirm)
            };
            match outcome {
                ActionOutcome::Deleted(_) => Report::ok(),
                ActionOutcome::DeleteDeclined(_) => {
                    Report::ok_with(vec!["Eliminación cancelada".to_string()])
                }
                _ => Report::failed(vec![format!("No existe el ítem {id}")]),
            }
        }
        Command::Categories => Report::ok_with(
            Category::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        ),
    }
}

fn type_fields<S, D>(widget: &mut InventoryWidget<S, D>, fields: &ItemArgs)
where
    S: KeyValueStorage,
    D: DisplaySurface,
{
    for (field, value) in fields.entries() {
        widget.set_field(field, value);
    }
}

fn submit<S, D>(widget: &mut InventoryWidget<S, D>) -> Report
where
    S: KeyValueStorage,
    D: DisplaySurface,
{
    match widget.submit() {
        SubmitOutcome::Created(item) => Report::ok_with(vec![format!("id {}", item.id)]),
        SubmitOutcome::Updated(_) => Report::ok(),
        SubmitOutcome::StaleUpdate(id) => Report::failed(vec![format!("No existe el ítem {id}")]),
        SubmitOutcome::IdsExhausted => {
            Report::failed(vec!["No quedan identificadores disponibles".to_string()])
        }
        SubmitOutcome::Rejected(err) => {
            Report::failed(err.errors.iter().map(ToString::to_string).collect())
        }
    }
}
