//! Employee Model
//!
//! Internal staff accounts. The stored NIC doubles as the sign-in password
//! (a deliberate but weak scheme carried over from the business's process;
//! see DESIGN.md).

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub emp_id: String,
    pub name: String,
    pub contact_no: String,
    #[serde(rename = "DOB")]
    pub dob: NaiveDate,
    pub address: String,
    pub email: String,
    #[serde(rename = "NIC")]
    pub nic: String,
    pub emp_role: String,
    pub marital_status: String,
    pub gender: String,
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub emp_id: Option<String>,
    pub name: Option<String>,
    pub contact_no: Option<String>,
    #[serde(rename = "DOB")]
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "NIC")]
    pub nic: Option<String>,
    pub emp_role: Option<String>,
    pub marital_status: Option<String>,
    pub gender: Option<String>,
}

impl EmployeeCreate {
    /// Validate required fields and assemble the record to persist.
    pub fn into_employee(self) -> Result<Employee, AppError> {
        let mut missing = Vec::new();
        if self.emp_id.is_none() {
            missing.push("empId");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.contact_no.is_none() {
            missing.push("contactNo");
        }
        if self.dob.is_none() {
            missing.push("DOB");
        }
        if self.address.is_none() {
            missing.push("address");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.nic.is_none() {
            missing.push("NIC");
        }
        if self.emp_role.is_none() {
            missing.push("empRole");
        }
        if self.marital_status.is_none() {
            missing.push("maritalStatus");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "All required fields must be provided (missing: {})",
                missing.join(", ")
            )));
        }

        let emp_id = self.emp_id.unwrap_or_default();
        let name = self.name.unwrap_or_default();
        let contact_no = self.contact_no.unwrap_or_default();
        let address = self.address.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let nic = self.nic.unwrap_or_default();
        let emp_role = self.emp_role.unwrap_or_default();
        let marital_status = self.marital_status.unwrap_or_default();
        let gender = self.gender.unwrap_or_default();

        validate_required_text(&emp_id, "empId", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&contact_no, "contactNo", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&address, "address", MAX_ADDRESS_LEN)?;
        validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&nic, "NIC", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&emp_role, "empRole", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&marital_status, "maritalStatus", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&gender, "gender", MAX_SHORT_TEXT_LEN)?;

        Ok(Employee {
            id: None,
            emp_id,
            name,
            contact_no,
            dob: self.dob.expect("presence checked above"),
            address,
            email,
            nic,
            emp_role,
            marital_status,
            gender,
        })
    }
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(rename = "DOB", skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "NIC", skip_serializing_if = "Option::is_none")]
    pub nic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Sign-in request: `username` is an empId, with email as fallback
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSignIn {
    pub username: Option<String>,
    pub password: Option<String>,
}
