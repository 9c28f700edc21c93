//! Field validation: the gate between raw form input and the store.

use chrono::NaiveDate;
use thiserror::Error;

use crate::item::{Category, Item, ItemFields, Price};

/// Form field identifiers (used to mark individual fields as invalid).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Category,
    Quantity,
    Price,
    SupplierEmail,
    DateIn,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Category,
        Field::Quantity,
        Field::Price,
        Field::SupplierEmail,
        Field::DateIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::SupplierEmail => "supplierEmail",
            Field::DateIn => "dateIn",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    NotANumber,
    Negative,
    NotAnInteger,
    UnknownCategory,
    InvalidDate,
}

impl core::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FieldProblem::Missing => "is required",
            FieldProblem::NotANumber => "is not a number",
            FieldProblem::Negative => "cannot be negative",
            FieldProblem::NotAnInteger => "must be a whole number",
            FieldProblem::UnknownCategory => "is not a known category",
            FieldProblem::InvalidDate => "is not a YYYY-MM-DD date",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: FieldProblem,
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.field, self.problem)
    }
}

/// Every field that failed, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) need correction", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }
}

/// Raw, unvalidated field values exactly as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItemFields {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub supplier_email: String,
    pub date_in: String,
}

impl RawItemFields {
    /// Form contents for editing an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.label().to_string(),
            quantity: item.quantity.to_string(),
            price: item.price.to_input_string(),
            supplier_email: item.supplier_email.clone(),
            date_in: item.date_in.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Quantity => &self.quantity,
            Field::Price => &self.price,
            Field::SupplierEmail => &self.supplier_email,
            Field::DateIn => &self.date_in,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Quantity => &mut self.quantity,
            Field::Price => &mut self.price,
            Field::SupplierEmail => &mut self.supplier_email,
            Field::DateIn => &mut self.date_in,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// Validate raw input, collecting a problem for every invalid field.
///
/// `supplier_email` is only trimmed; it may be empty.
pub fn validate(raw: &RawItemFields) -> Result<ItemFields, ValidationError> {
    let mut errors = Vec::new();
    let mut reject = |field, problem| errors.push(FieldError { field, problem });

    let name = raw.name.trim();
    if name.is_empty() {
        reject(Field::Name, FieldProblem::Missing);
    }

    let category = match raw.category.trim() {
        "" => {
            reject(Field::Category, FieldProblem::Missing);
            None
        }
        s => s
            .parse::<Category>()
            .map_err(|_| reject(Field::Category, FieldProblem::UnknownCategory))
            .ok(),
    };

    let quantity = parse_quantity(&raw.quantity)
        .map_err(|p| reject(Field::Quantity, p))
        .ok();

    let price = parse_amount(&raw.price)
        .and_then(|p| Price::from_decimal(p).ok_or(FieldProblem::NotANumber))
        .map_err(|p| reject(Field::Price, p))
        .ok();

    let date_in = match raw.date_in.trim() {
        "" => {
            reject(Field::DateIn, FieldProblem::Missing);
            None
        }
        s => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| reject(Field::DateIn, FieldProblem::InvalidDate))
            .ok(),
    };

    match (category, quantity, price, date_in) {
        (Some(category), Some(quantity), Some(price), Some(date_in)) if errors.is_empty() => {
            Ok(ItemFields {
                name: name.to_string(),
                category,
                quantity,
                price,
                supplier_email: raw.supplier_email.trim().to_string(),
                date_in,
            })
        }
        _ => Err(ValidationError { errors }),
    }
}

/// Largest whole number an `f64` represents exactly.
const F64_EXACT_MAX: f64 = 9_007_199_254_740_992.0;

/// Parse a whole, non-negative unit count.
///
/// Plain integers are read exactly. Anything else goes through the decimal
/// parser so `"-1"` and `"2.5"` report the right problem; `"3.0"` is still 3.
fn parse_quantity(raw: &str) -> Result<u64, FieldProblem> {
    if let Ok(units) = raw.trim().parse::<u64>() {
        return Ok(units);
    }
    let value = parse_amount(raw)?;
    if value.fract() != 0.0 || value > F64_EXACT_MAX {
        return Err(FieldProblem::NotAnInteger);
    }
    Ok(value as u64)
}

/// Parse a non-negative decimal amount.
fn parse_amount(raw: &str) -> Result<f64, FieldProblem> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(FieldProblem::Missing);
    }
    let value: f64 = s.parse().map_err(|_| FieldProblem::NotANumber)?;
    if !value.is_finite() {
        return Err(FieldProblem::NotANumber);
    }
    if value < 0.0 {
        return Err(FieldProblem::Negative);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawItemFields {
        RawItemFields {
            name: "  Monitor 27\"  ".to_string(),
            category: "Electrónica".to_string(),
            quantity: "3".to_string(),
            price: "2499.90".to_string(),
            supplier_email: "  monitores@ejemplo.com ".to_string(),
            date_in: "2025-11-03".to_string(),
        }
    }

    #[test]
    fn accepts_complete_input_and_trims_text() {
        let fields = validate(&valid_raw()).unwrap();
        assert_eq!(fields.name, "Monitor 27\"");
        assert_eq!(fields.category, Category::Electronics);
        assert_eq!(fields.quantity, 3);
        assert_eq!(fields.price.cents(), 249990);
        assert_eq!(fields.supplier_email, "monitores@ejemplo.com");
        assert_eq!(fields.date_in, NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
    }

    #[test]
    fn supplier_email_may_be_empty() {
        let raw = valid_raw().with(Field::SupplierEmail, "");
        assert_eq!(validate(&raw).unwrap().supplier_email, "");
    }

    #[test]
    fn rejects_negative_quantity() {
        let err = validate(&valid_raw().with(Field::Quantity, "-1")).unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError { field: Field::Quantity, problem: FieldProblem::Negative }]
        );
    }

    #[test]
    fn rejects_negative_price() {
        let err = validate(&valid_raw().with(Field::Price, "-1")).unwrap_err();
        assert!(err.has(Field::Price));
        assert!(!err.has(Field::Quantity));
    }

    #[test]
    fn rejects_blank_name() {
        let err = validate(&valid_raw().with(Field::Name, "   ")).unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec![Field::Name]);
    }

    #[test]
    fn rejects_fractional_quantity_and_garbage_price() {
        let raw = valid_raw()
            .with(Field::Quantity, "2.5")
            .with(Field::Price, "abc");
        let err = validate(&raw).unwrap_err();
        assert_eq!(
            err.errors,
            vec![
                FieldError { field: Field::Quantity, problem: FieldProblem::NotAnInteger },
                FieldError { field: Field::Price, problem: FieldProblem::NotANumber },
            ]
        );
    }

    #[test]
    fn marks_every_missing_field_individually() {
        let err = validate(&RawItemFields::default()).unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Category, Field::Quantity, Field::Price, Field::DateIn]
        );
        assert!(err.errors.iter().all(|e| e.problem == FieldProblem::Missing));
    }

    #[test]
    fn rejects_unknown_category_and_bad_date() {
        let raw = valid_raw()
            .with(Field::Category, "Juguetes")
            .with(Field::DateIn, "03/11/2025");
        let err = validate(&raw).unwrap_err();
        assert!(err.has(Field::Category));
        assert!(err.has(Field::DateIn));
    }

    #[test]
    fn zero_quantity_and_price_are_allowed() {
        let raw = valid_raw().with(Field::Quantity, "0").with(Field::Price, "0");
        let fields = validate(&raw).unwrap();
        assert_eq!(fields.quantity, 0);
        assert_eq!(fields.price, Price::ZERO);
    }

    #[test]
    fn from_item_round_trips_through_validation() {
        for item in crate::seed::seed_items() {
            let fields = validate(&RawItemFields::from_item(&item)).unwrap();
            assert_eq!(crate::item::Item::from_fields(item.id, fields), item);
        }
    }

    #[test]
    fn large_quantities_are_read_exactly() {
        let raw = valid_raw().with(Field::Quantity, "9007199254740993");
        assert_eq!(validate(&raw).unwrap().quantity, 9_007_199_254_740_993);

        let raw = valid_raw().with(Field::Quantity, "18446744073709551615");
        assert_eq!(validate(&raw).unwrap().quantity, u64::MAX);
    }

    #[test]
    fn quantity_problems_are_classified() {
        let problem = |q: &str| {
            validate(&valid_raw().with(Field::Quantity, q))
                .unwrap_err()
                .errors[0]
                .problem
        };
        assert_eq!(problem("-3"), FieldProblem::Negative);
        assert_eq!(problem("2.5"), FieldProblem::NotAnInteger);
        assert_eq!(problem("18446744073709551616"), FieldProblem::NotAnInteger);
        assert_eq!(problem("muchos"), FieldProblem::NotANumber);
        assert_eq!(validate(&valid_raw().with(Field::Quantity, " 3.0 ")).unwrap().quantity, 3);
    }
}
