//! OHLCV bars and the validated series that owns them.

use crate::error::AnalysisError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading period. Bars are plain data; their invariants are checked
/// when they are ingested into a [`PriceSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalysisError::InvalidBar {
                    date: self.date,
                    reason: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        if self.low > self.open
            || self.low > self.close
            || self.high < self.open
            || self.high < self.close
        {
            return Err(AnalysisError::InvalidBar {
                date: self.date,
                reason: format!(
                    "expected low <= open,close <= high (open {}, high {}, low {}, close {})",
                    self.open, self.high, self.low, self.close
                ),
            });
        }
        Ok(())
    }
}

/// Ordered, immutable view of historical bars, strictly increasing by date.
///
/// Missing sessions are simply absent; nothing is interpolated. All
/// downstream math assumes the ingestion invariants, so they are enforced
/// here once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Ingest bars, rejecting invariant violations up front.
    pub fn from_bars(bars: Vec<PriceBar>) -> Result<Self, AnalysisError> {
        for bar in &bars {
            bar.validate()?;
        }
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AnalysisError::OutOfOrder {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Bar index of a calendar date, if that session exists.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.bars.binary_search_by_key(&date, |b| b.date).ok()
    }
}
