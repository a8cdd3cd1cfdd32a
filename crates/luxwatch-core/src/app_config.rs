use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Published CSV export of the catalog sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1ScaHTlhjobaMrF_hTnnmB6Sok55FzOqFwU0igKSqWTI/export?format=csv&gid=1834399994";

/// Desktop browser UA; the export endpoint is friendlier to browsers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sheet_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Seconds between catalog refreshes. Always non-zero.
    pub refresh_interval_secs: u64,
    /// Directory holding persisted cart and wishlist state.
    pub data_dir: PathBuf,
}
