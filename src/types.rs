//! Core value types.
//!
//! The crate operates on dynamically typed numbers: an integer stays an
//! integer through addition, subtraction, multiplication and `abs`, while
//! true division always widens to a float. [`Number`] captures exactly that
//! pair of representations, and [`OrderedMap`] is a key→[`Number`] container
//! whose key enumeration order equals insertion order.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{NumericError, NumericResult};

/// A dynamically typed numeric value.
///
/// Integer arithmetic is checked: overflow surfaces as a [`NumericError`]
/// rather than wrapping. Mixed integer/float arithmetic promotes to
/// [`Number::Float64`].
///
/// Serialization is untagged, so `Int64(225)` serializes as `225` and
/// `Float64(2.0)` as `2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit floating point number.
    Float64(f64),
}

impl Number {
    /// Widen to `f64` (used for ordering and averaging).
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int64(v) => v as f64,
            Number::Float64(v) => v,
        }
    }

    /// Returns `true` for `Int64(0)` and `Float64(0.0)`.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int64(v) => v == 0,
            Number::Float64(v) => v == 0.0,
        }
    }

    /// Addition. Int64 + Int64 stays Int64 (checked); any float operand
    /// promotes the result to Float64.
    pub fn add(self, rhs: Number) -> NumericResult<Number> {
        match (self, rhs) {
            (Number::Int64(a), Number::Int64(b)) => a
                .checked_add(b)
                .map(Number::Int64)
                .ok_or(NumericError::Overflow { op: "+", lhs: a, rhs: b }),
            (a, b) => Ok(Number::Float64(a.as_f64() + b.as_f64())),
        }
    }

    /// Subtraction, with the same promotion and overflow rules as [`Number::add`].
    pub fn sub(self, rhs: Number) -> NumericResult<Number> {
        match (self, rhs) {
            (Number::Int64(a), Number::Int64(b)) => a
                .checked_sub(b)
                .map(Number::Int64)
                .ok_or(NumericError::Overflow { op: "-", lhs: a, rhs: b }),
            (a, b) => Ok(Number::Float64(a.as_f64() - b.as_f64())),
        }
    }

    /// Multiplication, with the same promotion and overflow rules as [`Number::add`].
    pub fn mul(self, rhs: Number) -> NumericResult<Number> {
        match (self, rhs) {
            (Number::Int64(a), Number::Int64(b)) => a
                .checked_mul(b)
                .map(Number::Int64)
                .ok_or(NumericError::Overflow { op: "*", lhs: a, rhs: b }),
            (a, b) => Ok(Number::Float64(a.as_f64() * b.as_f64())),
        }
    }

    /// True division: both operands widen to `f64` and the result is always
    /// [`Number::Float64`]. Division by zero follows IEEE semantics
    /// (infinity/NaN) and never fails.
    pub fn div(self, rhs: Number) -> Number {
        Number::Float64(self.as_f64() / rhs.as_f64())
    }

    /// Absolute value. `abs(i64::MIN)` overflows and is reported as a
    /// [`NumericError`].
    pub fn abs(self) -> NumericResult<Number> {
        match self {
            Number::Int64(v) => v
                .checked_abs()
                .map(Number::Int64)
                .ok_or(NumericError::AbsOverflow { value: v }),
            Number::Float64(v) => Ok(Number::Float64(v.abs())),
        }
    }
}

/// A key→[`Number`] container whose key enumeration order equals insertion
/// order.
///
/// Backed by an ordered sequence of pairs rather than a hash map, so the
/// iteration order is guaranteed regardless of key contents. Serializes as a
/// map in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap {
    entries: Vec<(String, Number)>,
}

impl OrderedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair. Replaces the value in place if the key is
    /// already present, keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Number) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<Number> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = Number> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for OrderedMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
