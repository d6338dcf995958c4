//! Inventory Item Model
//!
//! Catalog entries for cylinder types. Orders embed a snapshot of these
//! fields instead of referencing them.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub weight: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemCreate {
    pub name: Option<String>,
    pub weight: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl InventoryItemCreate {
    /// Validate required fields and assemble the record to persist.
    pub fn into_item(self) -> Result<InventoryItem, AppError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.weight.is_none() {
            missing.push("weight");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "All required fields must be provided (missing: {})",
                missing.join(", ")
            )));
        }

        let name = self.name.unwrap_or_default();
        let weight = self.weight.unwrap_or_default();
        let price = self.price.unwrap_or_default();

        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&weight, "weight", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.image, "image", MAX_URL_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)?;
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::validation("price must be a non-negative number"));
        }
        if let Some(stock) = self.stock
            && stock < 0
        {
            return Err(AppError::validation("stock must not be negative"));
        }

        Ok(InventoryItem {
            id: None,
            name,
            weight,
            price,
            stock: self.stock.unwrap_or(0),
            image: self.image.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
