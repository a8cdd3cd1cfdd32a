//! Cart and checkout command handlers.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use luxwatch_catalog::CatalogStore;
use luxwatch_store::{cart_availability, Availability, CartStore, KeyValueStorage, OrderConfirmation};

use crate::format::{rupees, truncate};

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show cart lines and the order summary
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,
        /// Units to add
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Set a line's quantity; zero or less removes it
    Update {
        /// Product id
        id: String,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

/// Dispatches a `cart` sub-command.
///
/// # Errors
///
/// Returns an error if `add` names an unknown or out-of-stock product, or if
/// the cart cannot be written to storage.
pub(crate) fn run_cart<S: KeyValueStorage>(
    cart: &mut CartStore<S>,
    catalog: &CatalogStore,
    command: CartCommands,
) -> anyhow::Result<()> {
    match command {
        CartCommands::Show => {
            print_cart(cart, catalog);
            Ok(())
        }
        CartCommands::Add { id, qty } => {
            let product = catalog
                .get_by_id(&id)
                .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?;
            if !product.is_in_stock() {
                anyhow::bail!("'{}' is out of stock", product.name);
            }
            let name = product.name.clone();
            cart.add_item(product, qty)?;
            println!(
                "added {qty} x {name}; cart now holds {} item(s)",
                cart.total_items()
            );
            Ok(())
        }
        CartCommands::Remove { id } => {
            if !cart.is_in_cart(&id) {
                println!("'{id}' is not in the cart");
                return Ok(());
            }
            cart.remove_item(&id)?;
            println!("removed '{id}'");
            Ok(())
        }
        CartCommands::Update { id, quantity } => {
            if !cart.is_in_cart(&id) {
                println!("'{id}' is not in the cart");
                return Ok(());
            }
            cart.update_quantity(&id, quantity)?;
            if cart.is_in_cart(&id) {
                println!("'{id}' quantity set to {}", cart.quantity_of(&id));
            } else {
                println!("removed '{id}'");
            }
            Ok(())
        }
        CartCommands::Clear => {
            cart.clear()?;
            println!("cart cleared");
            Ok(())
        }
    }
}

fn print_cart<S: KeyValueStorage>(cart: &CartStore<S>, catalog: &CatalogStore) {
    if cart.items().is_empty() {
        println!("your cart is empty");
        return;
    }

    let products = catalog.products();
    println!(
        "{:<24}{:<28}{:>5}  {:<14}{:<14}STATUS",
        "ID", "NAME", "QTY", "EACH", "LINE"
    );
    for (item, status) in cart_availability(cart.items(), &products) {
        let mut note = status.label().to_owned();
        if status == Availability::Available && !item.can_increment() {
            note.push_str(", max stock in cart");
        }
        println!(
            "{:<24}{:<28}{:>5}  {:<14}{:<14}{note}",
            item.product.id,
            truncate(&item.product.name, 25),
            item.quantity,
            rupees(item.product.final_price),
            rupees(item.line_total()),
        );
    }

    let summary = cart.summary();
    println!();
    println!("Items:      {}", summary.item_count);
    println!("Subtotal:   {}", rupees(summary.subtotal));
    if summary.has_free_shipping() {
        println!("Shipping:   Free");
    } else {
        println!("Shipping:   {}", rupees(summary.shipping));
    }
    println!("GST (18%):  {}", rupees(summary.tax));
    println!("Total:      {}", rupees(summary.total));
    if let Some(shortfall) = summary.free_shipping_shortfall() {
        println!("Add {} more for free shipping", rupees(shortfall));
    }
}

/// Prints a decorative order confirmation. Nothing is submitted and the cart
/// is left untouched.
///
/// # Errors
///
/// Returns an error if the cart is empty.
pub(crate) fn run_checkout<S: KeyValueStorage>(
    cart: &CartStore<S>,
    now: DateTime<Utc>,
) -> anyhow::Result<OrderConfirmation> {
    if cart.items().is_empty() {
        anyhow::bail!("cart is empty; add something with `cart add <id>` first");
    }

    let confirmation = OrderConfirmation::new(cart.summary(), now);
    println!("Order confirmed: {}", confirmation.order_number);
    println!(
        "Placed:             {}",
        confirmation.placed_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("Estimated delivery: {}", confirmation.estimated_delivery);
    println!(
        "Total charged:      {}",
        rupees(confirmation.summary.total)
    );
    Ok(confirmation)
}
