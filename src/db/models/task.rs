//! Delivery Task Model
//!
//! Flat field bag with weak references to a driver and an order. The status
//! field is a plain string: tasks have no modeled lifecycle.

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub driver_id: Option<RecordId>,
    /// Human-readable order reference (EG...), not a record link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub driver_id: Option<RecordId>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TaskCreate {
    /// Validate required fields and assemble the record to persist.
    pub fn into_task(self) -> Result<Task, AppError> {
        let Some(title) = self.title else {
            return Err(AppError::validation(
                "All required fields must be provided (missing: title)",
            ));
        };

        validate_required_text(&title, "title", MAX_NAME_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&self.order_id, "orderId", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.status, "status", MAX_SHORT_TEXT_LEN)?;

        Ok(Task {
            id: None,
            title,
            description: self.description.unwrap_or_default(),
            driver_id: self.driver_id,
            order_id: self.order_id,
            delivery_date: self.delivery_date,
            status: self.status.unwrap_or_else(|| "Pending".to_string()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub driver_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
