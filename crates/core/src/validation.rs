//! Per-element validation of incoming variations. Pure logic, no I/O.
//!
//! Fields are checked in a fixed order (id, sku, permalink, price, quantity,
//! size) and the first failure wins. "Required" follows truthiness: a
//! missing key, `null`, an empty string and a zero price all count as not
//! provided. A quantity of `0` is valid.

use serde_json::{Map, Number, Value};

use crate::variation::ProductVariation;

/// Which check an element failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    MissingId,
    MissingSku,
    MissingPermalink,
    MissingPrice,
    MissingQuantity,
    NegativeQuantity,
    MissingSize,
}

/// A field-level failure on the element at `index` (0-based).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} (index {index})", .kind.name())]
pub struct FieldError {
    pub index: usize,
    pub kind: FieldErrorKind,
}

impl FieldErrorKind {
    pub fn field(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingId => "id",
            FieldErrorKind::MissingSku => "sku",
            FieldErrorKind::MissingPermalink => "permalink",
            FieldErrorKind::MissingPrice => "price",
            FieldErrorKind::MissingQuantity | FieldErrorKind::NegativeQuantity => "quantity",
            FieldErrorKind::MissingSize => "size",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingId => "No id provided",
            FieldErrorKind::MissingSku => "No sku provided",
            FieldErrorKind::MissingPermalink => "No permalink provided",
            FieldErrorKind::MissingPrice => "No price provided",
            FieldErrorKind::MissingQuantity => "No quantity provided",
            FieldErrorKind::NegativeQuantity => "Quantity less than 0",
            FieldErrorKind::MissingSize => "No size provided",
        }
    }

    fn article(&self) -> &'static str {
        match self {
            // Matches the wording clients already parse.
            FieldErrorKind::MissingId | FieldErrorKind::MissingSku => "an",
            _ => "a",
        }
    }
}

impl FieldError {
    pub fn new(index: usize, kind: FieldErrorKind) -> Self {
        Self { index, kind }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn message(&self) -> String {
        match self.kind {
            FieldErrorKind::NegativeQuantity => format!(
                "Please provide a quantity of 0 or greater than 0 for the variation at index {}",
                self.index
            ),
            kind => format!(
                "Please provide {} {} for the variation at index {}",
                kind.article(),
                kind.field(),
                self.index
            ),
        }
    }

    pub fn summary(&self) -> String {
        match self.kind {
            FieldErrorKind::NegativeQuantity => {
                format!("Quantity for the variation at index {} less than 0", self.index)
            }
            kind => format!("No {} for the variation at index {}", kind.field(), self.index),
        }
    }
}

/// Validate the element at `index`, returning the typed variation on success.
pub fn validate_variation(element: &Value, index: usize) -> Result<ProductVariation, FieldError> {
    let empty = Map::new();
    let fields = element.as_object().unwrap_or(&empty);
    let fail = |kind: FieldErrorKind| FieldError::new(index, kind);

    let id = required_string(fields, "id").ok_or_else(|| fail(FieldErrorKind::MissingId))?;
    let sku = required_string(fields, "sku").ok_or_else(|| fail(FieldErrorKind::MissingSku))?;
    let permalink = required_string(fields, "permalink")
        .ok_or_else(|| fail(FieldErrorKind::MissingPermalink))?;
    let price = required_price(fields).ok_or_else(|| fail(FieldErrorKind::MissingPrice))?;

    let quantity = match fields.get("quantity") {
        Some(Value::Number(n)) => n,
        _ => return Err(fail(FieldErrorKind::MissingQuantity)),
    };
    if is_negative(quantity) {
        return Err(fail(FieldErrorKind::NegativeQuantity));
    }

    let size = required_string(fields, "size").ok_or_else(|| fail(FieldErrorKind::MissingSize))?;

    Ok(ProductVariation {
        id: id.to_string(),
        sku: sku.to_string(),
        permalink: permalink.to_string(),
        price: price.clone(),
        quantity: quantity.clone(),
        size: size.to_string(),
    })
}

/// Validate every element in order, stopping at the first invalid one.
///
/// Elements after a failure are never inspected.
pub fn validate_all(elements: &[Value]) -> Result<Vec<ProductVariation>, FieldError> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| validate_variation(element, index))
        .collect()
}

fn required_string<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

fn required_price(fields: &Map<String, Value>) -> Option<&Number> {
    match fields.get("price") {
        Some(Value::Number(n)) if !is_zero(n) => Some(n),
        _ => None,
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64().is_some_and(|v| v == 0.0)
}

fn is_negative(n: &Number) -> bool {
    n.as_f64().is_some_and(|v| v < 0.0)
}
