//! Decorative order confirmation. Nothing is submitted anywhere.

use chrono::{DateTime, Utc};
use luxwatch_core::OrderSummary;

pub const ORDER_PREFIX: &str = "CHR-";
pub const DELIVERY_ESTIMATE: &str = "3-5 Business Days";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: &'static str,
    pub summary: OrderSummary,
}

impl OrderConfirmation {
    /// Builds a confirmation stamped at `now`. The cart is left as it is.
    #[must_use]
    pub fn new(summary: OrderSummary, now: DateTime<Utc>) -> Self {
        Self {
            order_number: order_number(now),
            placed_at: now,
            estimated_delivery: DELIVERY_ESTIMATE,
            summary,
        }
    }
}

/// `CHR-` followed by the last eight digits of the millisecond clock.
#[must_use]
pub fn order_number(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(100_000_000);
    format!("{ORDER_PREFIX}{millis:08}")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn order_number_uses_last_eight_millisecond_digits() {
        let now = Utc.timestamp_millis_opt(1_760_000_123_456).unwrap();
        assert_eq!(order_number(now), "CHR-00123456");
    }

    #[test]
    fn order_number_is_zero_padded() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_042).unwrap();
        assert_eq!(order_number(now), "CHR-00000042");
    }

    #[test]
    fn confirmation_carries_delivery_estimate() {
        let now = Utc.timestamp_millis_opt(1_760_000_123_456).unwrap();
        let summary = OrderSummary::from_subtotal(Decimal::from(9550), 1);
        let confirmation = OrderConfirmation::new(summary.clone(), now);
        assert_eq!(confirmation.estimated_delivery, "3-5 Business Days");
        assert_eq!(confirmation.summary, summary);
        assert!(confirmation.order_number.starts_with(ORDER_PREFIX));
    }
}
