//! Order summary rules shown on the cart page.
//!
//! All amounts are in rupees. Shipping is waived strictly above
//! [`FREE_SHIPPING_THRESHOLD`]; GST is charged on the subtotal only and
//! rounded to a whole rupee, halves rounding up.

use rust_decimal::{Decimal, RoundingStrategy};

/// Subtotal above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);
/// Flat shipping charge below the threshold.
pub const STANDARD_SHIPPING: Decimal = Decimal::from_parts(1_500, 0, 0, false, 0);
/// GST percentage applied to the subtotal.
pub const GST_PERCENT: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// Adds amounts, clamping at [`Decimal::MAX`] instead of overflowing.
#[must_use]
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).unwrap_or(Decimal::MAX)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, item_count: u32) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            STANDARD_SHIPPING
        };
        let tax = subtotal.checked_mul(GST_PERCENT).map_or(Decimal::MAX, |gross| {
            (gross / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        });
        Self {
            item_count,
            subtotal,
            shipping,
            tax,
            total: saturating_sum([subtotal, shipping, tax]),
        }
    }

    #[must_use]
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more must be added before shipping becomes free, if any.
    #[must_use]
    pub fn free_shipping_shortfall(&self) -> Option<Decimal> {
        if self.has_free_shipping() {
            None
        } else {
            Some(FREE_SHIPPING_THRESHOLD - self.subtotal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_order_pays_shipping_and_gst() {
        let summary = OrderSummary::from_subtotal(Decimal::from(9550), 1);
        assert_eq!(summary.shipping, Decimal::from(1500));
        assert_eq!(summary.tax, Decimal::from(1719));
        assert_eq!(summary.total, Decimal::from(9550 + 1500 + 1719));
        assert_eq!(summary.free_shipping_shortfall(), Some(Decimal::from(40_450)));
    }

    #[test]
    fn threshold_itself_still_pays_shipping() {
        let summary = OrderSummary::from_subtotal(Decimal::from(50_000), 2);
        assert!(!summary.has_free_shipping());
        assert_eq!(summary.free_shipping_shortfall(), Some(Decimal::ZERO));
    }

    #[test]
    fn large_order_ships_free() {
        let summary = OrderSummary::from_subtotal(Decimal::from(64_800), 2);
        assert!(summary.has_free_shipping());
        assert_eq!(summary.tax, Decimal::from(11_664));
        assert_eq!(summary.total, Decimal::from(76_464));
        assert_eq!(summary.free_shipping_shortfall(), None);
    }

    #[test]
    fn gst_half_rupee_rounds_up() {
        // 18% of 6032.5 = 1085.85 -> 1086
        let summary = OrderSummary::from_subtotal("6032.5".parse().unwrap(), 1);
        assert_eq!(summary.tax, Decimal::from(1086));
        // 18% of 25 = 4.5 -> 5
        let summary = OrderSummary::from_subtotal(Decimal::from(25), 1);
        assert_eq!(summary.tax, Decimal::from(5));
    }

    #[test]
    fn empty_cart_still_charges_shipping() {
        let summary = OrderSummary::from_subtotal(Decimal::ZERO, 0);
        assert_eq!(summary.tax, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::from(1500));
    }

    #[test]
    fn oversized_subtotal_saturates_instead_of_panicking() {
        let summary = OrderSummary::from_subtotal(Decimal::MAX, 1);
        assert!(summary.has_free_shipping());
        assert_eq!(summary.tax, Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);
    }

    #[test]
    fn saturating_sum_clamps_at_max() {
        assert_eq!(saturating_sum([Decimal::from(2), Decimal::from(3)]), Decimal::from(5));
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
    }
}
