//! Delivery Driver Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(rename = "NIC")]
    pub nic: String,
    pub contact_no: String,
    #[serde(default)]
    pub email: String,
    pub vehicle_no: String,
    #[serde(default)]
    pub license_no: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCreate {
    pub name: Option<String>,
    #[serde(rename = "NIC")]
    pub nic: Option<String>,
    pub contact_no: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub license_no: Option<String>,
}

impl DriverCreate {
    /// Validate required fields and assemble the record to persist.
    pub fn into_driver(self) -> Result<Driver, AppError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.nic.is_none() {
            missing.push("NIC");
        }
        if self.contact_no.is_none() {
            missing.push("contactNo");
        }
        if self.vehicle_no.is_none() {
            missing.push("vehicleNo");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "All required fields must be provided (missing: {})",
                missing.join(", ")
            )));
        }

        let name = self.name.unwrap_or_default();
        let nic = self.nic.unwrap_or_default();
        let contact_no = self.contact_no.unwrap_or_default();
        let vehicle_no = self.vehicle_no.unwrap_or_default();

        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&nic, "NIC", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&contact_no, "contactNo", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&vehicle_no, "vehicleNo", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.email, "email", MAX_EMAIL_LEN)?;
        validate_optional_text(&self.license_no, "licenseNo", MAX_SHORT_TEXT_LEN)?;

        Ok(Driver {
            id: None,
            name,
            nic,
            contact_no,
            email: self.email.unwrap_or_default(),
            vehicle_no,
            license_no: self.license_no.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "NIC", skip_serializing_if = "Option::is_none")]
    pub nic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
}
