//! Momentum oscillators.

pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use macd::macd;
pub use rsi::rsi;
pub use stochastic::stochastic;
