use std::sync::Arc;

use super::*;
use crate::storage::MemoryStorage;
use crate::test_support::product;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn add(product: Product, quantity: u32) -> CartAction {
    CartAction::Add { product, quantity }
}

#[test]
fn add_appends_then_accumulates() {
    let w1 = product("w1", "9550", 3);
    let state = reduce_cart(Vec::new(), add(w1.clone(), 1));
    assert_eq!(state.len(), 1);
    assert_eq!(total_price(&state), dec("9550"));

    let state = reduce_cart(state, add(w1, 1));
    assert_eq!(state.len(), 1);
    assert_eq!(state[0].quantity, 2);
    assert_eq!(total_price(&state), dec("19100"));
}

#[test]
fn add_is_not_capped_by_stock() {
    let w1 = product("w1", "100", 1);
    let state = reduce_cart(Vec::new(), add(w1, 5));
    assert_eq!(state[0].quantity, 5);
    assert!(!state[0].can_increment());
}

#[test]
fn add_zero_is_a_no_op() {
    let state = reduce_cart(Vec::new(), add(product("w1", "100", 1), 0));
    assert!(state.is_empty());
}

#[test]
fn lines_keep_insertion_order() {
    let mut state = Vec::new();
    for id in ["c", "a", "b"] {
        state = reduce_cart(state, add(product(id, "10", 5), 1));
    }
    state = reduce_cart(state, add(product("a", "10", 5), 1));
    let ids: Vec<_> = state.iter().map(|i| i.product.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn update_quantity_sets_exactly_or_removes() {
    let state = reduce_cart(Vec::new(), add(product("w1", "100", 9), 2));

    let state = reduce_cart(
        state,
        CartAction::UpdateQuantity {
            product_id: "w1".to_owned(),
            quantity: 7,
        },
    );
    assert_eq!(state[0].quantity, 7);

    for q in [0, -3] {
        let removed = reduce_cart(
            state.clone(),
            CartAction::UpdateQuantity {
                product_id: "w1".to_owned(),
                quantity: q,
            },
        );
        assert!(removed.is_empty(), "quantity {q} should remove the line");
    }
}

#[test]
fn update_unknown_id_changes_nothing() {
    let state = reduce_cart(Vec::new(), add(product("w1", "100", 9), 2));
    let after = reduce_cart(
        state.clone(),
        CartAction::UpdateQuantity {
            product_id: "nope".to_owned(),
            quantity: 4,
        },
    );
    assert_eq!(after, state);
}

#[test]
fn remove_and_clear() {
    let mut state = reduce_cart(Vec::new(), add(product("w1", "100", 9), 1));
    state = reduce_cart(state, add(product("w2", "200", 9), 1));

    state = reduce_cart(
        state,
        CartAction::Remove {
            product_id: "w1".to_owned(),
        },
    );
    assert_eq!(state.len(), 1);
    assert_eq!(state[0].product.id, "w2");

    assert!(reduce_cart(state, CartAction::Clear).is_empty());
}

#[test]
fn load_replaces_and_normalises() {
    let existing = reduce_cart(Vec::new(), add(product("old", "1", 1), 1));
    let loaded = vec![
        CartItem {
            product: product("w1", "100", 9),
            quantity: 2,
        },
        CartItem {
            product: product("w1", "100", 9),
            quantity: 5,
        },
        CartItem {
            product: product("w2", "100", 9),
            quantity: 0,
        },
    ];
    let state = reduce_cart(existing, CartAction::Load(loaded));
    assert_eq!(state.len(), 1);
    assert_eq!(state[0].quantity, 2);
}

#[test]
fn totals_follow_quantities_and_final_price() {
    let mut state = reduce_cart(Vec::new(), add(product("w1", "6032.5", 9), 2));
    state = reduce_cart(state, add(product("w2", "3645", 9), 1));
    assert_eq!(total_items(&state), 3);
    assert_eq!(total_price(&state), dec("15710"));
}

#[test]
fn oversized_totals_saturate_instead_of_panicking() {
    let mut cart = CartStore::open(MemoryStorage::new());
    cart.add_item(product("w1", "100000000000000000000", 3), 1).unwrap();
    cart.update_quantity("w1", 1_000_000_000).unwrap();

    assert_eq!(cart.items()[0].line_total(), Decimal::MAX);
    assert_eq!(cart.total_price(), Decimal::MAX);
    let summary = cart.summary();
    assert_eq!(summary.subtotal, Decimal::MAX);
    assert_eq!(summary.total, Decimal::MAX);
}

#[test]
fn store_end_to_end_scenario() {
    let mut cart = CartStore::open(MemoryStorage::new());
    let w1 = product("w1", "9550", 3);

    cart.add_item(w1.clone(), 1).unwrap();
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), dec("9550"));

    cart.add_item(w1, 1).unwrap();
    assert_eq!(cart.quantity_of("w1"), 2);
    assert_eq!(cart.total_price(), dec("19100"));

    cart.remove_item("w1").unwrap();
    assert!(cart.items().is_empty());
    assert_eq!(cart.total_price(), Decimal::ZERO);
    assert!(!cart.is_in_cart("w1"));
}

#[test]
fn store_persists_after_every_dispatch() {
    let storage = Arc::new(MemoryStorage::new());
    let mut cart = CartStore::open(Arc::clone(&storage));
    cart.add_item(product("w1", "9550", 3), 2).unwrap();
    cart.add_item(product("w2", "3645", 3), 1).unwrap();

    let reopened = CartStore::open(Arc::clone(&storage));
    assert_eq!(reopened.items(), cart.items());

    cart.clear().unwrap();
    assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn corrupt_storage_starts_empty() {
    let storage = MemoryStorage::new();
    storage.set(CART_STORAGE_KEY, "{not json").unwrap();
    let cart = CartStore::open(storage);
    assert!(cart.items().is_empty());
}

#[test]
fn persisted_shape_uses_camel_case_product_fields() {
    let storage = Arc::new(MemoryStorage::new());
    let mut cart = CartStore::open(Arc::clone(&storage));
    cart.add_item(product("w1", "9550", 3), 1).unwrap();

    let raw = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["quantity"], 1);
    assert_eq!(json[0]["product"]["finalPrice"], 9550.0);
    assert_eq!(json[0]["product"]["type"], "Diving");
}

#[test]
fn summary_applies_shipping_and_gst() {
    let mut cart = CartStore::open(MemoryStorage::new());
    cart.add_item(product("w1", "32400", 3), 2).unwrap();
    let summary = cart.summary();
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.subtotal, dec("64800"));
    assert!(summary.has_free_shipping());
    assert_eq!(summary.tax, dec("11664"));
    assert_eq!(summary.total, dec("76464"));
}
