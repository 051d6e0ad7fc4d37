//! Translation of validated variations into parameterized PartiQL statements.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::method::WriteMethod;
use crate::types::{iso_timestamp, Timestamp};
use crate::variation::ProductVariation;

/// A typed positional parameter, serialized in the store's attribute shape
/// (`{"S": "..."}` or `{"N": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementParam {
    /// String attribute.
    S(String),
    /// Number attribute, carried as its decimal text.
    N(String),
}

impl StatementParam {
    fn number(n: &Number) -> Self {
        StatementParam::N(n.to_string())
    }
}

/// One statement of a batch. `parameters` lines up 1:1 with the `?`
/// placeholders in `statement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRequest {
    pub statement: String,
    pub parameters: Vec<StatementParam>,
}

impl StatementRequest {
    pub fn placeholder_count(&self) -> usize {
        self.statement.matches('?').count()
    }
}

/// Builds statements against a single variations table.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    table: String,
}

impl StatementBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn build(
        &self,
        variation: ProductVariation,
        method: WriteMethod,
        now: &Timestamp,
    ) -> StatementRequest {
        match method {
            WriteMethod::Create => self.insert(variation, now),
            WriteMethod::Update => self.update(variation, now),
        }
    }

    fn insert(&self, variation: ProductVariation, now: &Timestamp) -> StatementRequest {
        let row = variation.into_persisted(now);
        let v = row.variation;
        StatementRequest {
            statement: format!(
                "INSERT INTO \"{}\" VALUE {{'id': ?, 'sku': ?, 'permalink': ?, 'price': ?, \
                 'quantity': ?, 'size': ?, 'date_created_gmt': ?, 'date_modified_gmt': ?}}",
                self.table
            ),
            parameters: vec![
                StatementParam::S(v.id),
                StatementParam::S(v.sku),
                StatementParam::S(v.permalink),
                StatementParam::number(&v.price),
                StatementParam::number(&v.quantity),
                StatementParam::S(v.size),
                StatementParam::S(row.date_created_gmt),
                StatementParam::S(row.date_modified_gmt),
            ],
        }
    }

    /// `id` and `sku` identify the row and are only ever matched on.
    fn update(&self, v: ProductVariation, now: &Timestamp) -> StatementRequest {
        StatementRequest {
            statement: format!(
                "UPDATE \"{}\" SET \"permalink\"=?, \"size\"=?, \"price\"=?, \"quantity\"=?, \
                 \"date_modified_gmt\"=? WHERE \"id\"=? AND \"sku\"=?",
                self.table
            ),
            parameters: vec![
                StatementParam::S(v.permalink),
                StatementParam::S(v.size),
                StatementParam::number(&v.price),
                StatementParam::number(&v.quantity),
                StatementParam::S(iso_timestamp(now)),
                StatementParam::S(v.id),
                StatementParam::S(v.sku),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> Timestamp {
        chrono::Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .single()
            .unwrap()
    }

    fn variation() -> ProductVariation {
        ProductVariation {
            id: "1001".into(),
            sku: "TSHIRT-M".into(),
            permalink: "https://shop.example/tshirt?size=m".into(),
            price: Number::from_f64(19.99).unwrap(),
            quantity: Number::from(0),
            size: "M".into(),
        }
    }

    fn builder() -> StatementBuilder {
        StatementBuilder::new("wp-product-variations")
    }

    fn s(value: &str) -> StatementParam {
        StatementParam::S(value.to_string())
    }

    #[test]
    fn insert_carries_all_fields_and_both_timestamps() {
        let stmt = builder().build(variation(), WriteMethod::Create, &now());

        assert!(stmt.statement.starts_with("INSERT INTO \"wp-product-variations\" VALUE"));
        assert_eq!(stmt.placeholder_count(), stmt.parameters.len());
        assert_eq!(
            stmt.parameters,
            vec![
                s("1001"),
                s("TSHIRT-M"),
                s("https://shop.example/tshirt?size=m"),
                StatementParam::N("19.99".into()),
                StatementParam::N("0".into()),
                s("M"),
                s("2024-05-01T10:00:00.000Z"),
                s("2024-05-01T10:00:00.000Z"),
            ]
        );
    }

    #[test]
    fn update_never_sets_identity_or_created_date() {
        let stmt = builder().build(variation(), WriteMethod::Update, &now());

        assert!(!stmt.statement.contains("date_created_gmt"));
        let (set_clause, where_clause) = stmt.statement.split_once("WHERE").unwrap();
        assert!(!set_clause.contains("\"id\""));
        assert!(!set_clause.contains("\"sku\""));
        assert_eq!(where_clause.trim(), "\"id\"=? AND \"sku\"=?");

        assert_eq!(stmt.placeholder_count(), stmt.parameters.len());
        assert_eq!(stmt.parameters[4], s("2024-05-01T10:00:00.000Z"));
        assert_eq!(&stmt.parameters[5..], &[s("1001"), s("TSHIRT-M")]);
    }

    #[test]
    fn parameters_round_trip_to_source_values() {
        let source = variation();
        let stmt = builder().build(source.clone(), WriteMethod::Create, &now());

        let strings: Vec<&str> = stmt
            .parameters
            .iter()
            .filter_map(|p| match p {
                StatementParam::S(v) => Some(v.as_str()),
                StatementParam::N(_) => None,
            })
            .collect();
        let numbers: Vec<Number> = stmt
            .parameters
            .iter()
            .filter_map(|p| match p {
                StatementParam::N(v) => Some(v.parse().unwrap()),
                StatementParam::S(_) => None,
            })
            .collect();

        assert_eq!(
            &strings[..4],
            &[
                source.id.as_str(),
                source.sku.as_str(),
                source.permalink.as_str(),
                source.size.as_str()
            ]
        );
        assert_eq!(numbers, vec![source.price, source.quantity]);
    }

    #[test]
    fn params_serialize_in_attribute_shape() {
        let json = serde_json::to_value(vec![s("a"), StatementParam::N("2".into())]).unwrap();
        assert_eq!(json, serde_json::json!([{ "S": "a" }, { "N": "2" }]));
    }
}
