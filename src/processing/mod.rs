//! In-memory numeric processing.
//!
//! Two independent components, both purely in-memory and single-threaded:
//!
//! - [`transform()`]: a fixed arithmetic/list transformation over three
//!   input numbers
//! - [`DataProcessor`]: a named accumulator with an in-place element-wise
//!   transformation and summary statistics
//!
//! ## Example: accumulate → process → stats
//!
//! ```rust
//! use numeric_processing::processing::DataProcessor;
//! use numeric_processing::types::Number;
//!
//! let mut processor = DataProcessor::new("example");
//! for v in [5, -3, 15] {
//!     processor.add(Number::Int64(v));
//! }
//!
//! // 5 → 15 (tripled), -3 → 3 (abs), 15 → 225 (squared, above 10)
//! processor.process().unwrap();
//! assert_eq!(
//!     processor.data(),
//!     &[Number::Int64(15), Number::Int64(3), Number::Int64(225)]
//! );
//!
//! let stats = processor.stats();
//! assert_eq!(stats.avg, Number::Float64(81.0));
//! assert_eq!(stats.max, Some(Number::Int64(225)));
//! assert_eq!(stats.min, Some(Number::Int64(3)));
//! assert_eq!(stats.cnt, 3);
//! ```

pub mod processor;
pub mod transform;

pub use processor::{DataProcessor, Stats};
pub use transform::{transform, TransformOutput};
