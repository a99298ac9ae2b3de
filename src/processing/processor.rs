//! Stateful numeric accumulator with in-place processing and summary
//! statistics.

use serde::{Deserialize, Serialize};

use crate::error::NumericResult;
use crate::types::Number;

/// Summary statistics over a [`DataProcessor`]'s current data.
///
/// Field order carries the serialized key order (`avg`, `max`, `min`,
/// `cnt`). `max`/`min` are `None` (serialized as `null`) when the data is
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Arithmetic mean of the current data, `Int64(0)` when empty.
    pub avg: Number,
    /// First maximal element of the current data.
    pub max: Option<Number>,
    /// First minimal element of the current data.
    pub min: Option<Number>,
    /// Total number of historical [`DataProcessor::add`] calls.
    pub cnt: u64,
}

/// A named accumulator of numeric values.
///
/// `count` tracks total historical additions while `data` holds the current
/// (possibly transformed) contents. The two deliberately diverge after
/// [`DataProcessor::process`] replaces the data: `cnt` in [`Stats`] always
/// reports historical additions, not the current length.
#[derive(Debug, Clone, PartialEq)]
pub struct DataProcessor {
    name: String,
    data: Vec<Number>,
    count: u64,
}

impl DataProcessor {
    /// Create an empty processor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
            count: 0,
        }
    }

    /// Processor name, immutable after construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current data contents, in order.
    pub fn data(&self) -> &[Number] {
        &self.data
    }

    /// Total number of [`DataProcessor::add`] calls so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Append a value and return the new count.
    pub fn add(&mut self, value: Number) -> u64 {
        self.data.push(value);
        self.count += 1;
        self.count
    }

    /// Transform every element in place, preserving order, and return the
    /// new contents:
    ///
    /// - above 10: squared
    /// - below 0: absolute value
    /// - otherwise: tripled
    ///
    /// `count` is not touched. The only failure mode is integer overflow in
    /// the checked arithmetic.
    pub fn process(&mut self) -> NumericResult<&[Number]> {
        let mut processed = Vec::with_capacity(self.data.len());
        for &item in &self.data {
            let value = if item.as_f64() > 10.0 {
                item.mul(item)?
            } else if item.as_f64() < 0.0 {
                item.abs()?
            } else {
                item.mul(Number::Int64(3))?
            };
            processed.push(value);
        }
        self.data = processed;

        tracing::debug!(name = %self.name, len = self.data.len(), "processed data in place");

        Ok(&self.data)
    }

    /// Compute summary statistics over the current data.
    ///
    /// The average uses native floating-point division. With empty data the
    /// average is `Int64(0)` and `max`/`min` are `None`, while `cnt` still
    /// reports the historical addition count (which may be non-zero).
    /// Repeated calls without intervening mutation return identical results.
    pub fn stats(&self) -> Stats {
        if self.data.is_empty() {
            return Stats {
                avg: Number::Int64(0),
                max: None,
                min: None,
                cnt: self.count,
            };
        }

        let sum: f64 = self.data.iter().map(|v| v.as_f64()).sum();
        let avg = Number::Float64(sum / self.data.len() as f64);

        let mut max = self.data[0];
        let mut min = self.data[0];
        for &value in &self.data[1..] {
            if value.as_f64() > max.as_f64() {
                max = value;
            }
            if value.as_f64() < min.as_f64() {
                min = value;
            }
        }

        Stats {
            avg,
            max: Some(max),
            min: Some(min),
            cnt: self.count,
        }
    }
}
