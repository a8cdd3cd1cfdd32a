//! Display helpers shared by the command handlers.

use luxwatch_core::Product;
use rust_decimal::Decimal;

/// Rupee amount with thousands separators and at most three fraction
/// digits, trailing zeros dropped (`₹6,032.5`).
pub(crate) fn rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{sign}\u{20b9}{grouped}")
    } else {
        format!("{sign}\u{20b9}{grouped}.{fraction}")
    }
}

/// Truncates to `max` characters, appending `...` when cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_owned()
    }
}

/// One listing row: id, brand, name, type, price and a stock marker.
pub(crate) fn product_row(product: &Product) -> String {
    let badge = product
        .discount_badge()
        .map(|pct| format!(" (-{pct}%)"))
        .unwrap_or_default();
    let stock = if product.is_in_stock() {
        String::new()
    } else {
        " [out of stock]".to_owned()
    };
    format!(
        "{:<24}{:<18}{:<28}{:<13}{}{badge}{stock}",
        product.id,
        truncate(&product.brand, 16),
        truncate(&product.name, 25),
        product.watch_type,
        rupees(product.final_price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("decimal literal")
    }

    #[test]
    fn rupees_groups_thousands() {
        assert_eq!(rupees(dec("9550")), "\u{20b9}9,550");
        assert_eq!(rupees(dec("1234567")), "\u{20b9}1,234,567");
        assert_eq!(rupees(dec("500")), "\u{20b9}500");
    }

    #[test]
    fn rupees_keeps_significant_fraction_only() {
        assert_eq!(rupees(dec("6032.50")), "\u{20b9}6,032.5");
        assert_eq!(rupees(dec("1500.00")), "\u{20b9}1,500");
        assert_eq!(rupees(dec("2.34567")), "\u{20b9}2.346");
    }

    #[test]
    fn rupees_handles_zero_and_negative() {
        assert_eq!(rupees(Decimal::ZERO), "\u{20b9}0");
        assert_eq!(rupees(dec("-40450")), "-\u{20b9}40,450");
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate("Submariner", 20), "Submariner");
        assert_eq!(truncate("Speedmaster Professional", 11), "Speedmaster...");
    }
}
