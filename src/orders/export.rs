//! CSV report assembly
//!
//! Builds the tabular export served by `GET /api/order/export`. Report
//! generation deliberately skips the page/limit cap: the filter is applied,
//! the whole result set is rendered.

use crate::db::models::Order;

const CSV_HEADER: &str = "Order ID,Customer Name,Email,Phone,Address,City,Postal Code,Product,Quantity,Total Amount,Status,Order Date,Delivery Date";

/// Render orders as a CSV document, header row included
pub fn orders_to_csv(orders: &[Order]) -> String {
    let mut out = String::with_capacity(64 + orders.len() * 128);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for order in orders {
        let row = [
            csv_field(&order.order_id),
            csv_field(&order.customer_name),
            csv_field(&order.email),
            csv_field(&order.phone),
            csv_field(&order.address),
            csv_field(&order.city),
            csv_field(&order.postal_code),
            csv_field(&order.cylinder.name),
            order.quantity.to_string(),
            format_amount(order.total_amount),
            order.status.to_string(),
            order.order_date.format("%Y-%m-%d").to_string(),
            order.delivery_date.format("%Y-%m-%d").to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Whole totals print without a decimal point, fractional ones with two
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CylinderSnapshot, OrderStatus};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_order() -> Order {
        Order {
            id: None,
            order_id: "EG1234567890".to_string(),
            customer_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "0771234567".to_string(),
            address: "12 Lake Rd, Apt 3".to_string(),
            city: "Colombo".to_string(),
            postal_code: "00300".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            special_instructions: String::new(),
            quantity: 2,
            cylinder: CylinderSnapshot {
                id: 1,
                name: "Domestic 12.5kg".to_string(),
                weight: "12.5kg".to_string(),
                price: 1482.0,
                image: "/img/cyl-12.png".to_string(),
            },
            total_amount: 2964.0,
            status: OrderStatus::Confirmed,
            user_id: None,
            order_date: Utc.with_ymd_and_hms(2025, 2, 20, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn header_plus_one_row() {
        let csv = orders_to_csv(&[sample_order()]);
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Order ID,Customer Name"));
        assert!(lines[1].starts_with("EG1234567890,John Doe"));
        assert!(lines[1].contains("2964"));
        assert!(lines[1].contains("Confirmed"));
        assert!(lines[1].ends_with("2025-02-20,2025-03-01"));
    }

    #[test]
    fn address_with_comma_is_quoted() {
        let csv = orders_to_csv(&[sample_order()]);
        assert!(csv.contains("\"12 Lake Rd, Apt 3\""));
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let csv = orders_to_csv(&[]);
        assert_eq!(csv.trim_end(), CSV_HEADER);
    }
}
