//! Market data module: snapshot types and exchange adapters.

pub mod fetcher;
pub mod provider;
pub mod providers;
pub mod snapshot;

// Re-exports for convenience
pub use fetcher::SnapshotClient;
pub use provider::MarketApi;
pub use providers::binance::{BinanceApi, DerivativesClient, new_binance_client};
pub use snapshot::{DerivativesSnapshot, MarketSnapshot};
