//! Volatility indicators.

pub mod atr;
pub mod bollinger;

pub use atr::atr;
pub use bollinger::bollinger;
