pub mod app_config;
pub mod config;
pub mod pricing;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, DEFAULT_SHEET_URL, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use pricing::{saturating_sum, OrderSummary};
pub use products::{CartItem, Product, UnknownWatchType, WatchType, WishlistItem};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
