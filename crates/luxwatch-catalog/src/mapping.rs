//! Positional mapping from a parsed sheet row to a [`Product`].
//!
//! Column positions, not header names, decide which field a value lands in.
//! Missing or unparsable values never reject a row; they fall back to the
//! defaults documented on each helper.

use std::str::FromStr;

use luxwatch_core::{Product, WatchType};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rust_decimal::Decimal;

/// Number of columns the mapping reads, in sheet order.
pub const COLUMN_COUNT: usize = 16;

mod col {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const BRAND: usize = 2;
    pub const MODEL_NUMBER: usize = 3;
    pub const TYPE: usize = 4;
    pub const CASE_MATERIAL: usize = 5;
    pub const STRAP_MATERIAL: usize = 6;
    pub const DIAL_COLOR: usize = 7;
    pub const STRAP_COLOR: usize = 8;
    pub const PRICE: usize = 9;
    pub const DISCOUNT: usize = 10;
    pub const FINAL_PRICE: usize = 11;
    pub const WARRANTY: usize = 12;
    pub const STOCK_QUANTITY: usize = 13;
    pub const DESCRIPTION: usize = 14;
    pub const IMAGES: usize = 15;
}

/// Maps one data row to a product.
///
/// `row_index` is the row's position among the non-blank lines of the export
/// (the header is row 0) and only feeds the synthetic id for rows without one.
#[must_use]
pub fn map_row(values: &[String], row_index: usize) -> Product {
    let text = |idx: usize| -> String {
        values
            .get(idx)
            .map(String::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    let id = non_blank(values.get(col::ID))
        .map_or_else(|| format!("product-{row_index}"), str::to_owned);
    let name = text(col::NAME);

    let watch_type = parse_watch_type(values.get(col::TYPE).map(String::as_str), &id);

    let price = parse_decimal(values.get(col::PRICE)).unwrap_or_default();
    let discount = parse_decimal(values.get(col::DISCOUNT))
        .unwrap_or_default()
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let final_price = parse_decimal(values.get(col::FINAL_PRICE)).unwrap_or(price);

    let stock_quantity = parse_stock(values.get(col::STOCK_QUANTITY));
    let images = parse_images(values.get(col::IMAGES).map(String::as_str), &name);

    Product {
        id,
        name,
        brand: text(col::BRAND),
        model_number: text(col::MODEL_NUMBER),
        watch_type,
        case_material: text(col::CASE_MATERIAL),
        strap_material: text(col::STRAP_MATERIAL),
        dial_color: text(col::DIAL_COLOR),
        strap_color: text(col::STRAP_COLOR),
        price,
        discount,
        final_price,
        warranty: text(col::WARRANTY),
        stock_quantity,
        description: text(col::DESCRIPTION),
        images,
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Blank type cells default to `Analog`; unknown names are logged and also
/// coerced to `Analog`.
fn parse_watch_type(raw: Option<&str>, product_id: &str) -> WatchType {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => WatchType::Analog,
        Some(s) => WatchType::from_str(s).unwrap_or_else(|e| {
            tracing::warn!(product_id, error = %e, "coercing unknown watch type to Analog");
            WatchType::Analog
        }),
    }
}

/// Parses the leading decimal number of a cell, the way a spreadsheet-minded
/// reader would: `"9550"`, `" 6032.5 "`, `".5"` and `"12abc"` all parse,
/// `"₹9550"` and `""` do not. Negative amounts clamp to zero.
pub(crate) fn parse_decimal(value: Option<&String>) -> Option<Decimal> {
    let prefix = numeric_prefix(value?.trim(), true)?;
    let unsigned = prefix.trim_start_matches(['+', '-']);
    if prefix.starts_with('-') {
        return Some(Decimal::ZERO);
    }
    let parsed = if unsigned.starts_with('.') {
        Decimal::from_str(&format!("0{unsigned}")).ok()?
    } else {
        Decimal::from_str(unsigned).ok()?
    };
    Some(parsed)
}

/// Integer prefix of the stock cell; anything unparsable or negative is 0.
pub(crate) fn parse_stock(value: Option<&String>) -> u32 {
    value
        .and_then(|v| numeric_prefix(v.trim(), false))
        .and_then(|digits| digits.parse::<i64>().ok())
        .map_or(0, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

/// Returns the longest prefix of `s` shaped like `[+-]digits[.digits]`
/// (fraction only when `allow_fraction`), or `None` if it holds no digits.
fn numeric_prefix(s: &str, allow_fraction: bool) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    (digits > 0).then(|| &s[..end])
}

/// `|`-separated image paths; a blank cell gets a generated placeholder
/// that carries the product name as its query.
pub(crate) fn parse_images(raw: Option<&str>, name: &str) -> Vec<String> {
    let images: Vec<String> = raw
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|img| !img.is_empty())
        .map(str::to_owned)
        .collect();

    if images.is_empty() {
        vec![placeholder_image(name)]
    } else {
        images
    }
}

#[must_use]
pub fn placeholder_image(name: &str) -> String {
    let query = if name.trim().is_empty() {
        "luxury watch"
    } else {
        name
    };
    format!(
        "/placeholder.svg?height=400&width=400&query={}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
