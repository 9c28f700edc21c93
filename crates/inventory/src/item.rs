use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

/// Stock category (fixed enumeration).
///
/// Serialized with the user-facing label, which is also what the free-text
/// search matches against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Electrónica")]
    Electronics,
    #[serde(rename = "Ropa")]
    Clothing,
    #[serde(rename = "Hogar")]
    Home,
    #[serde(rename = "Oficina")]
    Office,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Office,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electrónica",
            Category::Clothing => "Ropa",
            Category::Home => "Hogar",
            Category::Office => "Oficina",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
            Category::Office => "office",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    /// Accepts the label (case-insensitive) or the English code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted || c.code() == wanted)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

/// Non-negative monetary amount, kept in cents.
///
/// Persisted as a decimal JSON number (`289.5`), so the stored blob stays
/// readable by anything that expects plain numbers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build from a decimal amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, NaN or infinite amounts.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self {
            cents: cents as u64,
        })
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// `self × quantity`, saturating.
    pub fn times(self, quantity: u64) -> Self {
        Self {
            cents: self.cents.saturating_mul(quantity),
        }
    }

    /// Shortest decimal form, as a form input would show it (`499`, `289.5`).
    pub fn to_input_string(self) -> String {
        let whole = self.cents / 100;
        match self.cents % 100 {
            0 => whole.to_string(),
            frac if frac % 10 == 0 => format!("{whole}.{}", frac / 10),
            frac => format!("{whole}.{frac:02}"),
        }
    }
}

impl core::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::from_decimal(value)
            .ok_or_else(|| DomainError::validation(format!("price must be a non-negative amount, got {value}")))
    }
}

/// Validated item attributes (everything except the store-assigned id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub category: Category,
    pub quantity: u64,
    pub price: Price,
    pub supplier_email: String,
    pub date_in: NaiveDate,
}

/// One inventory record.
///
/// Persisted shape (camelCase keys):
/// `{"id":1,"name":"…","category":"Electrónica","quantity":12,"price":499.0,
///   "supplierEmail":"…","dateIn":"2025-11-01"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub quantity: u64,
    pub price: Price,
    #[serde(default)]
    pub supplier_email: String,
    pub date_in: NaiveDate,
}

impl Item {
    pub fn from_fields(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            price: fields.price,
            supplier_email: fields.supplier_email,
            date_in: fields.date_in,
        }
    }

    /// Line value: `quantity × price`.
    pub fn value(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// Invariants the type system does not already enforce.
    ///
    /// Quantity and price are non-negative by construction; names must be
    /// non-empty once trimmed.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invariant(format!(
                "item {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
