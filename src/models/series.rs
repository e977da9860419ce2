//! Date-aligned indicator series.

use serde::{Deserialize, Serialize};

/// One indicator line, aligned index-for-index with the dates of the source
/// [`PriceSeries`](crate::models::price::PriceSeries).
///
/// `None` marks a date with insufficient lookback. It is never substituted
/// with zero, so consumers can tell "no value yet" from "value is zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    values: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Most recent defined value, if any lookback has accumulated.
    pub fn last_defined(&self) -> Option<f64> {
        self.values.iter().rev().flatten().next().copied()
    }

    /// Index of the first date with enough history behind it.
    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().flatten().count()
    }
}

/// MACD line bundle. All three lines share the source date index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Bollinger band lines sharing the source date index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Stochastic oscillator lines sharing the source date index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticSeries {
    pub percent_k: IndicatorSeries,
    pub percent_d: IndicatorSeries,
}
