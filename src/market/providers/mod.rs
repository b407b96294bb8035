//! Exchange provider implementations.

pub mod binance;

// Re-export for convenience
pub use binance::{BinanceApi, DerivativesClient, new_binance_client};
