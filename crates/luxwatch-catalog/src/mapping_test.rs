use super::*;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn full_row() -> Vec<String> {
    row(&[
        "omega-speedmaster-002",
        "Speedmaster Professional",
        "Omega",
        "310.30.42.50.01.001",
        "Chronograph",
        "Stainless Steel",
        "Stainless Steel",
        "Black",
        "Steel",
        "6350",
        "5",
        "6032.5",
        "5 years",
        "7",
        "The legendary Moonwatch.",
        "/a.png|/b.png",
    ])
}

// -----------------------------------------------------------------------
// map_row
// -----------------------------------------------------------------------

#[test]
fn full_row_maps_every_column_by_position() {
    let values = full_row();
    assert_eq!(values.len(), COLUMN_COUNT);

    let product = map_row(&values, 1);
    assert_eq!(product.id, "omega-speedmaster-002");
    assert_eq!(product.name, "Speedmaster Professional");
    assert_eq!(product.brand, "Omega");
    assert_eq!(product.model_number, "310.30.42.50.01.001");
    assert_eq!(product.watch_type, WatchType::Chronograph);
    assert_eq!(product.case_material, "Stainless Steel");
    assert_eq!(product.strap_material, "Stainless Steel");
    assert_eq!(product.dial_color, "Black");
    assert_eq!(product.strap_color, "Steel");
    assert_eq!(product.price, dec("6350"));
    assert_eq!(product.discount, dec("5"));
    assert_eq!(product.final_price, dec("6032.5"));
    assert_eq!(product.warranty, "5 years");
    assert_eq!(product.stock_quantity, 7);
    assert_eq!(product.description, "The legendary Moonwatch.");
    assert_eq!(product.images, vec!["/a.png", "/b.png"]);
}

#[test]
fn blank_id_gets_synthetic_row_id() {
    let mut values = full_row();
    values[0] = String::new();
    assert_eq!(map_row(&values, 4).id, "product-4");
}

#[test]
fn blank_type_defaults_to_analog() {
    let mut values = full_row();
    values[4] = String::new();
    assert_eq!(map_row(&values, 1).watch_type, WatchType::Analog);
}

#[test]
fn unknown_type_is_coerced_to_analog() {
    let mut values = full_row();
    values[4] = "Pocket".to_string();
    assert_eq!(map_row(&values, 1).watch_type, WatchType::Analog);
}

#[test]
fn unparsable_numbers_default_to_zero() {
    let mut values = full_row();
    values[9] = "n/a".to_string();
    values[10] = "none".to_string();
    values[13] = "lots".to_string();
    let product = map_row(&values, 1);
    assert_eq!(product.price, Decimal::ZERO);
    assert_eq!(product.discount, Decimal::ZERO);
    assert_eq!(product.stock_quantity, 0);
    // finalPrice column is still valid and stays authoritative.
    assert_eq!(product.final_price, dec("6032.5"));
}

#[test]
fn unparsable_final_price_falls_back_to_price() {
    let mut values = full_row();
    values[11] = String::new();
    assert_eq!(map_row(&values, 1).final_price, dec("6350"));
}

#[test]
fn final_price_is_not_recomputed_from_discount() {
    let mut values = full_row();
    values[11] = "5999".to_string();
    let product = map_row(&values, 1);
    assert_eq!(product.final_price, dec("5999"));
    assert!(!product.has_consistent_pricing());
}

#[test]
fn short_row_fills_missing_columns_with_defaults() {
    let values = row(&["w9", "Tank Must", "Cartier"]);
    let product = map_row(&values, 2);
    assert_eq!(product.id, "w9");
    assert_eq!(product.brand, "Cartier");
    assert_eq!(product.model_number, "");
    assert_eq!(product.watch_type, WatchType::Analog);
    assert_eq!(product.final_price, Decimal::ZERO);
    assert_eq!(
        product.images,
        vec!["/placeholder.svg?height=400&width=400&query=Tank%20Must"]
    );
}

// -----------------------------------------------------------------------
// numeric coercion
// -----------------------------------------------------------------------

#[test]
fn decimal_reads_leading_number() {
    let s = |v: &str| parse_decimal(Some(&v.to_string()));
    assert_eq!(s("9550"), Some(dec("9550")));
    assert_eq!(s(" 6032.5 "), Some(dec("6032.5")));
    assert_eq!(s("12abc"), Some(dec("12")));
    assert_eq!(s(".5"), Some(dec("0.5")));
    assert_eq!(s("+7"), Some(dec("7")));
    assert_eq!(s("-40"), Some(Decimal::ZERO));
    assert_eq!(s("₹9550"), None);
    assert_eq!(s(""), None);
    assert_eq!(s("."), None);
}

#[test]
fn discount_is_clamped_to_percentage_range() {
    let mut values = full_row();
    values[10] = "150".to_string();
    assert_eq!(map_row(&values, 1).discount, Decimal::ONE_HUNDRED);
}

#[test]
fn stock_reads_integer_prefix() {
    let s = |v: &str| parse_stock(Some(&v.to_string()));
    assert_eq!(s("3"), 3);
    assert_eq!(s("3.7"), 3);
    assert_eq!(s("-2"), 0);
    assert_eq!(s("few"), 0);
    assert_eq!(parse_stock(None), 0);
}

// -----------------------------------------------------------------------
// images
// -----------------------------------------------------------------------

#[test]
fn images_split_on_pipe_and_drop_blanks() {
    assert_eq!(
        parse_images(Some("/a.png| /b.png ||"), "X"),
        vec!["/a.png", "/b.png"]
    );
}

#[test]
fn blank_images_get_named_placeholder() {
    assert_eq!(
        parse_images(Some(""), "Royal Oak"),
        vec!["/placeholder.svg?height=400&width=400&query=Royal%20Oak"]
    );
    assert_eq!(
        parse_images(Some(" | "), "Royal Oak"),
        vec!["/placeholder.svg?height=400&width=400&query=Royal%20Oak"]
    );
}

#[test]
fn placeholder_without_name_uses_generic_query() {
    assert_eq!(
        placeholder_image(""),
        "/placeholder.svg?height=400&width=400&query=luxury%20watch"
    );
}
