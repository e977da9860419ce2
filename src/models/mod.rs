//! Shared data models spanning the engine layers.

pub mod price;
pub mod recommendation;
pub mod series;
pub mod signal;

pub use price::{PriceBar, PriceSeries};
pub use recommendation::{Action, Recommendation};
pub use series::{BollingerSeries, IndicatorSeries, MacdSeries, StochasticSeries};
pub use signal::{
    Bias, CompositeTrend, LevelSource, MaKind, MaPair, MaSpec, SignalDetails, SignalEvent,
    SignalKind, TrendDirection, TrendSummary,
};
