//! Technical-analysis core: indicator computation, signal-event detection,
//! multi-timeframe trend synthesis, and composite recommendations over OHLCV
//! price series.
//!
//! The pipeline is pure and synchronous:
//! `PriceSeries` -> indicator series -> signal events -> recommendation.
//! Each stage depends only on its inputs, so re-running over the same series
//! reproduces identical output, and callers can analyze many symbols in
//! parallel without coordination. Data acquisition, report rendering, and
//! the agent-facing tool layer live outside this crate.

pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod screening;
pub mod signals;
pub mod synthesis;

pub use config::AnalysisConfig;
pub use engine::{Analysis, AnalysisEngine};
pub use error::AnalysisError;
pub use models::price::{PriceBar, PriceSeries};
pub use models::recommendation::{Action, Recommendation};
pub use models::signal::{SignalEvent, SignalKind, TrendSummary};
