//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stockroom_auth::DEFAULT_ENTRY_PAGE;
use stockroom_core::ItemId;
use stockroom_infra::DEFAULT_STORAGE_KEY;
use stockroom_inventory::{Category, Field};
use stockroom_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "stockroom", version)]
#[command(about = "Inventario fácil: stock items, filters and running totals", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory holding the persisted inventory
    #[arg(long, env = "STOCKROOM_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage slot name
    #[arg(long, env = "STOCKROOM_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub storage_key: String,

    /// Email of the signed-in user; without it every command is redirected
    #[arg(long, env = "STOCKROOM_USER_EMAIL", global = true)]
    pub user_email: Option<String>,

    #[arg(long, env = "STOCKROOM_USER_NAME", global = true)]
    pub user_name: Option<String>,

    #[arg(long, env = "STOCKROOM_USER_PHOTO", global = true)]
    pub user_photo: Option<String>,

    /// Where unauthenticated users are sent
    #[arg(long, env = "STOCKROOM_ENTRY_PAGE", default_value = DEFAULT_ENTRY_PAGE, global = true)]
    pub entry_page: String,

    #[arg(long, value_enum, default_value_t = LogStyle::Json, global = true)]
    pub log_format: LogStyle,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Json,
    Pretty,
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Json => LogFormat::Json,
            LogStyle::Pretty => LogFormat::Pretty,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List items with running totals
    List {
        /// Free-text search over name and category
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Add a new item
    Add(ItemArgs),

    /// Edit an existing item; omitted fields keep their value
    Edit {
        id: ItemId,

        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Delete an item
    Delete {
        id: ItemId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the available categories
    Categories,
}

/// Raw form input; validation happens on submit, not here.
#[derive(Args, Debug, Clone, Default)]
pub struct ItemArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[arg(long)]
    pub supplier_email: Option<String>,

    #[arg(long)]
    pub date_in: Option<String>,
}

impl ItemArgs {
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Category, &self.category),
            (Field::Quantity, &self.quantity),
            (Field::Price, &self.price),
            (Field::SupplierEmail, &self.supplier_email),
            (Field::DateIn, &self.date_in),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_category_label() {
        let cli = Cli::try_parse_from(["stockroom", "list", "--category", "Oficina", "-s", "plumas"]).unwrap();
        match cli.command {
            Command::List { search, category } => {
                assert_eq!(search, "plumas");
                assert_eq!(category, Some(Category::Office));
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn negative_amounts_reach_validation() {
        let cli = Cli::try_parse_from(["stockroom", "add", "--name", "X", "--quantity", "-1"]).unwrap();
        match cli.command {
            Command::Add(args) => assert_eq!(args.quantity.as_deref(), Some("-1")),
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn parses_edit_and_delete_ids() {
        let cli = Cli::try_parse_from(["stockroom", "edit", "4", "--price", "1299"]).unwrap();
        match cli.command {
            Command::Edit { id, fields } => {
                assert_eq!(id, ItemId::new(4));
                assert_eq!(fields.entries().collect::<Vec<_>>(), vec![(Field::Price, "1299")]);
            }
            other => panic!("Expected Edit, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["stockroom", "delete", "7", "--yes"]).unwrap();
        assert!(matches!(cli.command, Command::Delete { yes: true, .. }));
    }
}
