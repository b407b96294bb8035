//! Technical indicators for market analysis

pub mod candle;
pub mod levels;
pub mod momentum;
pub mod moving_averages;
pub mod volatility;
