use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::types::{iso_timestamp, Timestamp};

/// A validated product variation as accepted from a request body.
///
/// `price` and `quantity` keep the caller's exact number text (`20.00` stays
/// `20.00`, integers wider than 64 bits keep every digit), so the value
/// written to the store is the value that was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariation {
    pub id: String,
    pub sku: String,
    pub permalink: String,
    pub price: Number,
    pub quantity: Number,
    pub size: String,
}

/// Row layout of a variation in the store, keyed by `(id, sku)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedProductVariation {
    #[serde(flatten)]
    pub variation: ProductVariation,
    pub date_created_gmt: String,
    pub date_modified_gmt: String,
}

impl ProductVariation {
    /// Stamp a new row: created and modified are the same instant.
    pub fn into_persisted(self, now: &Timestamp) -> PersistedProductVariation {
        let stamp = iso_timestamp(now);
        PersistedProductVariation {
            variation: self,
            date_created_gmt: stamp.clone(),
            date_modified_gmt: stamp,
        }
    }
}
