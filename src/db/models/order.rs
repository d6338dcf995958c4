//! Order Model
//!
//! The only entity with derived behavior: `totalAmount` is computed from the
//! embedded cylinder snapshot and the quantity, and `orderId` is generated at
//! creation time. The snapshot is copied, not referenced, so historical
//! orders are immune to later catalog price changes.

use super::serde_helpers;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    validate_optional_text, validate_required_text,
};

/// Order lifecycle labels. No transition graph is enforced: any status may
/// move to any other (manual override flexibility, carried over as-is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(OrderStatus::Confirmed),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(AppError::validation("Invalid status value")),
        }
    }
}

/// Embedded copy of catalog item attributes taken at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylinderSnapshot {
    pub id: i64,
    pub name: String,
    pub weight: String,
    pub price: f64,
    pub image: String,
}

/// Order record as stored in the `order` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Generated human-readable reference, immutable after creation
    pub order_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub delivery_date: NaiveDate,
    #[serde(default)]
    pub special_instructions: String,
    pub quantity: u32,
    pub cylinder: CylinderSnapshot,
    /// Derived: cylinder.price * quantity
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub user_id: Option<RecordId>,
    pub order_date: DateTime<Utc>,
}

/// Create order payload
///
/// Every field the caller must supply is optional here so that missing fields
/// surface as a `Validation` error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    pub quantity: Option<u32>,
    pub cylinder: Option<CylinderSnapshot>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub user_id: Option<RecordId>,
}

impl OrderCreate {
    /// Validate required fields and assemble the record to persist.
    ///
    /// `order_id` and `order_date` are owned by the service, not the caller.
    pub fn into_order(self, order_id: String, order_date: DateTime<Utc>) -> Result<Order, AppError> {
        let mut missing = Vec::new();
        if self.customer_name.is_none() {
            missing.push("customerName");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.phone.is_none() {
            missing.push("phone");
        }
        if self.address.is_none() {
            missing.push("address");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.postal_code.is_none() {
            missing.push("postalCode");
        }
        if self.delivery_date.is_none() {
            missing.push("deliveryDate");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }
        if self.cylinder.is_none() {
            missing.push("cylinder");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "All required fields must be provided (missing: {})",
                missing.join(", ")
            )));
        }

        let customer_name = self.customer_name.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let phone = self.phone.unwrap_or_default();
        let address = self.address.unwrap_or_default();
        let city = self.city.unwrap_or_default();
        let postal_code = self.postal_code.unwrap_or_default();
        let quantity = self.quantity.unwrap_or_default();
        let cylinder = self.cylinder.expect("presence checked above");

        validate_required_text(&customer_name, "customerName", MAX_NAME_LEN)?;
        validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&address, "address", MAX_ADDRESS_LEN)?;
        validate_required_text(&city, "city", MAX_NAME_LEN)?;
        validate_required_text(&postal_code, "postalCode", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.special_instructions, "specialInstructions", MAX_NOTE_LEN)?;
        if quantity < 1 {
            return Err(AppError::validation("quantity must be at least 1"));
        }

        let total_amount = cylinder.price * quantity as f64;

        Ok(Order {
            id: None,
            order_id,
            customer_name,
            email,
            phone,
            address,
            city,
            postal_code,
            delivery_date: self.delivery_date.expect("presence checked above"),
            special_instructions: self.special_instructions.unwrap_or_default(),
            quantity,
            cylinder,
            total_amount,
            status: OrderStatus::default(),
            user_id: self.user_id,
            order_date,
        })
    }
}

/// Partial update payload for PUT /api/order/:id
///
/// `totalAmount` is recomputed only when BOTH `quantity` and `cylinder` are
/// present in the patch; with only one supplied the stored total is left
/// untouched. This mirrors the long-standing behavior callers rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder: Option<CylinderSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Derived server-side, never taken from the caller
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

impl OrderUpdate {
    /// Recompute the derived total when the patch carries both inputs.
    pub fn apply_total_recompute(&mut self) {
        if let (Some(quantity), Some(cylinder)) = (self.quantity, self.cylinder.as_ref()) {
            self.total_amount = Some(cylinder.price * quantity as f64);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.postal_code.is_none()
            && self.delivery_date.is_none()
            && self.special_instructions.is_none()
            && self.quantity.is_none()
            && self.cylinder.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cylinder() -> CylinderSnapshot {
        CylinderSnapshot {
            id: 1,
            name: "Domestic 12.5kg".to_string(),
            weight: "12.5kg".to_string(),
            price: 1482.0,
            image: "/img/cyl-12.png".to_string(),
        }
    }

    fn valid_create() -> OrderCreate {
        OrderCreate {
            customer_name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            phone: Some("0771234567".to_string()),
            address: Some("12 Lake Rd".to_string()),
            city: Some("Colombo".to_string()),
            postal_code: Some("00300".to_string()),
            delivery_date: Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            special_instructions: None,
            quantity: Some(2),
            cylinder: Some(cylinder()),
            user_id: None,
        }
    }

    #[test]
    fn create_computes_total_amount() {
        let order = valid_create()
            .into_order("EG1234567890".to_string(), Utc::now())
            .unwrap();
        assert_eq!(order.total_amount, 2964.0);
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let mut input = valid_create();
        input.email = None;
        input.cylinder = None;
        let err = input
            .into_order("EG1234567890".to_string(), Utc::now())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("email"));
        assert!(msg.contains("cylinder"));
    }

    #[test]
    fn create_rejects_zero_quantity() {
        let mut input = valid_create();
        input.quantity = Some(0);
        assert!(
            input
                .into_order("EG1234567890".to_string(), Utc::now())
                .is_err()
        );
    }

    #[test]
    fn update_recomputes_total_only_with_both_inputs() {
        let mut patch = OrderUpdate {
            customer_name: None,
            email: None,
            phone: None,
            address: None,
            city: None,
            postal_code: None,
            delivery_date: None,
            special_instructions: None,
            quantity: Some(3),
            cylinder: None,
            status: None,
            total_amount: None,
        };
        patch.apply_total_recompute();
        // quantity alone leaves the stored total untouched
        assert!(patch.total_amount.is_none());

        patch.cylinder = Some(cylinder());
        patch.apply_total_recompute();
        assert_eq!(patch.total_amount, Some(4446.0));
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("Unknown".parse::<OrderStatus>().is_err());
    }
}
