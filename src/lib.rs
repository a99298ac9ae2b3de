//! `numeric-processing` is a small library for a fixed numeric transformation
//! pipeline over in-memory values.
//!
//! It has two independent components:
//!
//! - [`processing::transform`]: a pure, deterministic arithmetic/list
//!   transformation over three input numbers, producing a derived scalar, a
//!   length-10 intermediate sequence, an ordered three-key mapping, and the
//!   scaled mapping values.
//! - [`processing::DataProcessor`]: a named accumulator of numbers that
//!   supports appending values, transforming the stored sequence in place,
//!   and reporting summary statistics (`avg`/`max`/`min`/`cnt`).
//!
//! Values are dynamically typed [`types::Number`]s: integers stay integers
//! through add/sub/mul/abs, while true division always widens to a float.
//! Integer overflow is checked and surfaces as an [`error::NumericError`],
//! which the bundled driver binary treats as fatal.
//!
//! ## Quick example
//!
//! ```rust
//! use numeric_processing::processing::{transform, DataProcessor};
//! use numeric_processing::types::Number;
//!
//! # fn main() -> Result<(), numeric_processing::NumericError> {
//! let out = transform(Number::Int64(5), Number::Int64(3), Number::Int64(2))?;
//! assert_eq!(out.mapping.get("key1"), Some(Number::Int64(125)));
//!
//! let mut processor = DataProcessor::new("test");
//! for v in [5, -3, 15, 0, 8] {
//!     processor.add(Number::Int64(v));
//! }
//! processor.process()?;
//!
//! let stats = processor.stats();
//! assert_eq!(stats.avg, Number::Float64(53.4));
//! assert_eq!(stats.max, Some(Number::Int64(225)));
//! assert_eq!(stats.min, Some(Number::Int64(0)));
//! assert_eq!(stats.cnt, 5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the transform function and the `DataProcessor`
//! - [`types`]: dynamically typed numbers and the ordered mapping
//! - [`error`]: error types for fatal arithmetic failures

pub mod error;
pub mod processing;
pub mod types;

pub use error::{NumericError, NumericResult};
