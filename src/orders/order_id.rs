//! Order ID generation
//!
//! Produces references like `EG4820571342`: the last 8 digits of the
//! millisecond timestamp plus a 2-digit random pad. Unique with very high
//! probability but NOT checked against the collection at generation time;
//! a collision would leave two orders sharing a reference. This is a
//! human-readable reference code, not a security token.

use chrono::Utc;
use rand::Rng;

const PREFIX: &str = "EG";

/// Generate a new order reference: `EG` + 10 digits
pub fn generate_order_id() -> String {
    let timestamp = Utc::now().timestamp_millis() % 100_000_000;
    let pad: u8 = rand::thread_rng().gen_range(0..100);
    format!("{PREFIX}{timestamp:08}{pad:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_expected_pattern() {
        let id = generate_order_id();
        assert_eq!(id.len(), 12);
        assert!(id.starts_with("EG"));
        assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn consecutive_ids_are_distinct_with_high_probability() {
        let ids: Vec<String> = (0..20).map(|_| generate_order_id()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        // The random pad alone gives 100 variants per millisecond; twenty
        // draws colliding down to a handful would indicate a broken generator.
        assert!(unique.len() > 10);
    }
}
