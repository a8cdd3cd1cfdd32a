mod cart;
mod catalog;
mod format;
mod wishlist;

use std::path::PathBuf;

use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use luxwatch_catalog::{CatalogStore, EndpointSource, SheetSource, StaticSource};
use luxwatch_core::AppConfig;
use luxwatch_store::{CartStore, FileStorage, WishlistStore};
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;
use crate::catalog::CatalogCommands;
use crate::wishlist::WishlistCommands;

#[derive(Debug, Parser)]
#[command(name = "luxwatch-cli")]
#[command(about = "Luxury watch storefront command line interface")]
struct Cli {
    /// Use the built-in catalog instead of fetching the sheet
    #[arg(long, global = true)]
    offline: bool,

    /// Read the catalog from a products JSON endpoint instead of the sheet
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Directory holding cart and wishlist files (defaults to LUXWATCH_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse, search and filter the catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Manage saved products
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommands,
    },
    /// Print an order confirmation for the current cart
    Checkout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = luxwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    let catalog = open_catalog(&config, cli.offline, cli.endpoint.as_deref()).await?;

    match command {
        Commands::Catalog { command } => catalog::run_catalog(&catalog, command)?,
        Commands::Cart { command } => {
            let mut cart = CartStore::open(FileStorage::open(&data_dir)?);
            cart::run_cart(&mut cart, &catalog, command)?;
        }
        Commands::Wishlist { command } => {
            let mut wishlist = WishlistStore::open(FileStorage::open(&data_dir)?);
            wishlist::run_wishlist(&mut wishlist, &catalog, command, Utc::now())?;
        }
        Commands::Checkout => {
            let cart = CartStore::open(FileStorage::open(&data_dir)?);
            cart::run_checkout(&cart, Utc::now())?;
        }
    }

    Ok(())
}

/// Builds the catalog store for this run and loads it once.
///
/// Fetch failures never abort the run: the sheet source falls back to the
/// built-in catalog and the advisory is printed to stderr.
async fn open_catalog(
    config: &AppConfig,
    offline: bool,
    endpoint: Option<&str>,
) -> anyhow::Result<CatalogStore> {
    let store = if offline {
        CatalogStore::new(StaticSource::fallback("offline mode"))
    } else if let Some(url) = endpoint {
        CatalogStore::new(EndpointSource::new(url, config.request_timeout_secs)?)
    } else {
        CatalogStore::new(SheetSource::from_config(config)?)
    };

    let snapshot = store.refresh().await;
    if let Some(advisory) = &snapshot.error {
        eprintln!("note: {advisory}");
    }
    tracing::debug!(
        products = snapshot.products.len(),
        origin = ?snapshot.origin,
        "catalog loaded"
    );
    Ok(store)
}
