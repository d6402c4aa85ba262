//! Storage startup for the desktop application

use abacus_core::config::AppConfig;
use abacus_core::services::VaultService;
use abacus_core::Result;

/// Open the vault in the configured data directory.
///
/// `ABACUS_DATA_DIR` overrides the platform data directory.
pub async fn open_vault() -> Result<VaultService> {
    let config = AppConfig::resolve(None);
    tracing::debug!("Using data directory {}", config.data_dir().display());
    VaultService::open(&config).await
}
