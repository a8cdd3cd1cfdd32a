pub mod availability;
pub mod cart;
pub mod checkout;
pub mod error;
mod persist;
pub mod storage;
pub mod wishlist;

pub use availability::{cart_availability, wishlist_availability, Availability};
pub use cart::{reduce_cart, CartAction, CartStore, CART_STORAGE_KEY};
pub use checkout::{order_number, OrderConfirmation, DELIVERY_ESTIMATE};
pub use error::StoreError;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use wishlist::{
    reduce_wishlist, WishlistAction, WishlistStats, WishlistStore, WISHLIST_STORAGE_KEY,
};

#[cfg(test)]
pub(crate) mod test_support {
    use luxwatch_core::{Product, WatchType};

    pub fn product(id: &str, final_price: &str, stock: u32) -> Product {
        let price = final_price.parse().unwrap();
        Product {
            id: id.to_owned(),
            name: format!("Watch {id}"),
            brand: "Rolex".to_owned(),
            model_number: "126610LN".to_owned(),
            watch_type: WatchType::Diving,
            case_material: "Oystersteel".to_owned(),
            strap_material: "Oystersteel".to_owned(),
            dial_color: "Black".to_owned(),
            strap_color: "Steel".to_owned(),
            price,
            discount: rust_decimal::Decimal::ZERO,
            final_price: price,
            warranty: "5 years".to_owned(),
            stock_quantity: stock,
            description: "A test watch.".to_owned(),
            images: vec!["/black-diving-watch.png".to_owned()],
        }
    }
}
