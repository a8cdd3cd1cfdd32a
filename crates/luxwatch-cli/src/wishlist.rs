//! Wishlist command handlers.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use luxwatch_catalog::CatalogStore;
use luxwatch_store::{wishlist_availability, KeyValueStorage, WishlistAction, WishlistStore};

use crate::format::{rupees, truncate};

/// Sub-commands available under `wishlist`.
#[derive(Debug, Subcommand)]
pub enum WishlistCommands {
    /// Show saved products and wishlist statistics
    Show,
    /// Save a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a saved product
    Remove {
        /// Product id
        id: String,
    },
    /// Save a product, or remove it if already saved
    Toggle {
        /// Product id
        id: String,
    },
    /// Remove every saved product
    Clear,
}

/// Dispatches a `wishlist` sub-command.
///
/// # Errors
///
/// Returns an error if `add` or `toggle` names an unknown product, or if the
/// wishlist cannot be written to storage.
pub(crate) fn run_wishlist<S: KeyValueStorage>(
    wishlist: &mut WishlistStore<S>,
    catalog: &CatalogStore,
    command: WishlistCommands,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    match command {
        WishlistCommands::Show => {
            print_wishlist(wishlist, catalog, now);
            Ok(())
        }
        WishlistCommands::Add { id } => {
            let product = catalog
                .get_by_id(&id)
                .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?;
            if wishlist.is_in_wishlist(&id) {
                println!("'{}' is already saved", product.name);
                return Ok(());
            }
            let name = product.name.clone();
            wishlist.dispatch_at(WishlistAction::Add(product), now)?;
            println!("saved {name}");
            Ok(())
        }
        WishlistCommands::Remove { id } => {
            if !wishlist.is_in_wishlist(&id) {
                println!("'{id}' is not in the wishlist");
                return Ok(());
            }
            wishlist.remove_item(&id)?;
            println!("removed '{id}'");
            Ok(())
        }
        WishlistCommands::Toggle { id } => {
            let product = catalog
                .get_by_id(&id)
                .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?;
            let name = product.name.clone();
            if wishlist.toggle(product)? {
                println!("saved {name}");
            } else {
                println!("removed {name}");
            }
            Ok(())
        }
        WishlistCommands::Clear => {
            wishlist.clear()?;
            println!("wishlist cleared");
            Ok(())
        }
    }
}

fn print_wishlist<S: KeyValueStorage>(
    wishlist: &WishlistStore<S>,
    catalog: &CatalogStore,
    now: DateTime<Utc>,
) {
    if wishlist.items().is_empty() {
        println!("your wishlist is empty");
        return;
    }

    let products = catalog.products();
    println!(
        "{:<24}{:<28}{:<14}{:<12}STATUS",
        "ID", "NAME", "PRICE", "SAVED"
    );
    for (item, status) in wishlist_availability(wishlist.items(), &products) {
        println!(
            "{:<24}{:<28}{:<14}{:<12}{}",
            item.product.id,
            truncate(&item.product.name, 25),
            rupees(item.product.final_price),
            item.added_at.format("%Y-%m-%d"),
            status.label(),
        );
    }

    let stats = wishlist.stats(now);
    println!();
    println!("Saved:          {}", stats.count);
    println!("Total value:    {}", rupees(stats.total_value));
    println!("Average price:  {}", rupees(stats.average_price));
    println!("Added this week: {}", stats.recently_added);
}
