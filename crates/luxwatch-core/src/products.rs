use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Watch category. The sheet carries this as free text; anything outside
/// this set is coerced at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WatchType {
    Analog,
    Digital,
    Smart,
    Automatic,
    Diving,
    Chronograph,
    Dress,
    Sport,
}

impl WatchType {
    pub const ALL: [WatchType; 8] = [
        WatchType::Analog,
        WatchType::Digital,
        WatchType::Smart,
        WatchType::Automatic,
        WatchType::Diving,
        WatchType::Chronograph,
        WatchType::Dress,
        WatchType::Sport,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WatchType::Analog => "Analog",
            WatchType::Digital => "Digital",
            WatchType::Smart => "Smart",
            WatchType::Automatic => "Automatic",
            WatchType::Diving => "Diving",
            WatchType::Chronograph => "Chronograph",
            WatchType::Dress => "Dress",
            WatchType::Sport => "Sport",
        }
    }
}

impl fmt::Display for WatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known [`WatchType`] names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown watch type: {0}")]
pub struct UnknownWatchType(pub String);

impl FromStr for WatchType {
    type Err = UnknownWatchType;

    /// Case-insensitive, whitespace-tolerant match against the known names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        WatchType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownWatchType(trimmed.to_owned()))
    }
}

/// A watch in the catalog.
///
/// Products are immutable once ingested: a catalog refresh replaces the
/// whole snapshot rather than patching individual records. Field names
/// serialize in camelCase so the JSON matches the storefront wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within one catalog snapshot.
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model_number: String,
    #[serde(rename = "type")]
    pub watch_type: WatchType,
    pub case_material: String,
    pub strap_material: String,
    pub dial_color: String,
    pub strap_color: String,
    /// List price before discount.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Discount percentage in `0..=100`.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    /// Selling price. Supplied by the sheet independently of `price` and
    /// `discount`; it is the authoritative amount for every total.
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price: Decimal,
    pub warranty: String,
    pub stock_quantity: u32,
    pub description: String,
    /// Image URLs or paths, never empty.
    pub images: Vec<String>,
}

impl Product {
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount > Decimal::ZERO
    }

    /// Whole-percent discount badge value, e.g. `Some(5)` for a 5% discount.
    #[must_use]
    pub fn discount_badge(&self) -> Option<u32> {
        if !self.is_discounted() {
            return None;
        }
        self.discount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    /// `final_price × quantity`, clamped at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.final_price
            .checked_mul(Decimal::from(quantity))
            .unwrap_or(Decimal::MAX)
    }

    /// `price × (1 − discount / 100)`, for diagnostics only. Totals always use
    /// [`Product::final_price`].
    #[must_use]
    pub fn computed_final_price(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::ONE_HUNDRED - self.discount)
            .map_or(Decimal::MAX, |gross| gross / Decimal::ONE_HUNDRED)
    }

    /// `true` when `final_price` agrees with `price`/`discount` to the cent.
    #[must_use]
    pub fn has_consistent_pricing(&self) -> bool {
        self.computed_final_price().round_dp(2) == self.final_price.round_dp(2)
    }

    /// First image, used as the card thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A product line in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.line_total(self.quantity)
    }

    /// Whether the quantity stepper may go up. The store itself does not cap
    /// quantities against stock.
    #[must_use]
    pub fn can_increment(&self) -> bool {
        self.quantity < self.product.stock_quantity
    }
}

/// A saved product and the moment it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn make_product() -> Product {
        Product {
            id: "omega-speedmaster-002".to_string(),
            name: "Speedmaster Professional".to_string(),
            brand: "Omega".to_string(),
            model_number: "310.30.42.50.01.001".to_string(),
            watch_type: WatchType::Chronograph,
            case_material: "Stainless Steel".to_string(),
            strap_material: "Stainless Steel".to_string(),
            dial_color: "Black".to_string(),
            strap_color: "Steel".to_string(),
            price: dec("6350"),
            discount: dec("5"),
            final_price: dec("6032.5"),
            warranty: "5 years".to_string(),
            stock_quantity: 7,
            description: "The legendary Moonwatch.".to_string(),
            images: vec!["/placeholder-ngk5u.png".to_string()],
        }
    }

    #[test]
    fn watch_type_parses_case_insensitively() {
        assert_eq!("diving".parse::<WatchType>(), Ok(WatchType::Diving));
        assert_eq!("  Chronograph ".parse::<WatchType>(), Ok(WatchType::Chronograph));
    }

    #[test]
    fn watch_type_rejects_unknown_names() {
        let err = "Pocket".parse::<WatchType>().unwrap_err();
        assert_eq!(err, UnknownWatchType("Pocket".to_string()));
    }

    #[test]
    fn watch_type_display_matches_serde_name() {
        for t in WatchType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{t}\""));
        }
    }

    #[test]
    fn product_serializes_with_storefront_keys() {
        let json = serde_json::to_value(make_product()).unwrap();
        assert_eq!(json["modelNumber"], "310.30.42.50.01.001");
        assert_eq!(json["type"], "Chronograph");
        assert_eq!(json["finalPrice"], 6032.5);
        assert_eq!(json["stockQuantity"], 7);
        assert!(json.get("watch_type").is_none());
    }

    #[test]
    fn product_deserializes_from_storefront_json() {
        let json = serde_json::json!({
            "id": "w1",
            "name": "Submariner Date",
            "brand": "Rolex",
            "modelNumber": "126610LN",
            "type": "Diving",
            "caseMaterial": "Oystersteel",
            "strapMaterial": "Oystersteel",
            "dialColor": "Black",
            "strapColor": "Steel",
            "price": 9550,
            "discount": 0,
            "finalPrice": 9550,
            "warranty": "5 years",
            "stockQuantity": 3,
            "description": "Diver.",
            "images": ["/black-diving-watch.png"]
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.watch_type, WatchType::Diving);
        assert_eq!(product.final_price, dec("9550"));
        assert_eq!(product.primary_image(), Some("/black-diving-watch.png"));
    }

    #[test]
    fn discount_badge_rounds_to_whole_percent() {
        let mut product = make_product();
        assert_eq!(product.discount_badge(), Some(5));
        product.discount = dec("7.5");
        assert_eq!(product.discount_badge(), Some(8));
        product.discount = Decimal::ZERO;
        assert_eq!(product.discount_badge(), None);
    }

    #[test]
    fn line_total_uses_final_price() {
        let product = make_product();
        assert_eq!(product.line_total(2), dec("12065"));
    }

    #[test]
    fn consistent_pricing_detects_mismatch() {
        let mut product = make_product();
        assert!(product.has_consistent_pricing());
        product.final_price = dec("6000");
        assert!(!product.has_consistent_pricing());
        assert_eq!(product.computed_final_price(), dec("6032.5"));
    }

    #[test]
    fn cart_item_can_increment_below_stock_only() {
        let mut item = CartItem {
            product: make_product(),
            quantity: 6,
        };
        assert!(item.can_increment());
        item.quantity = 7;
        assert!(!item.can_increment());
    }

    #[test]
    fn wishlist_item_serializes_added_at_as_rfc3339() {
        let added_at = DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let item = WishlistItem {
            product: make_product(),
            added_at,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["addedAt"], "2025-03-01T10:00:00Z");
        let back: WishlistItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.added_at, added_at);
    }
}
