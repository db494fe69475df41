//! Statistical summaries for streaming and parallel data
//!
//! This module provides a single-pass accumulator for count, extrema, mean,
//! variance, skewness and kurtosis. Accumulators over disjoint inputs merge
//! exactly, so work can be split across threads and recombined in any order.
//!
//! # Example
//!
//! ```
//! use flowmoments::statistics::{combine, lift, SummaryStats};
//!
//! let stats = [1.0, 2.0, 3.0, 4.0, 5.0]
//!     .into_iter()
//!     .map(lift)
//!     .fold(SummaryStats::identity(), combine);
//!
//! println!("Mean: {}", stats.mean);
//! println!("Variance: {:?}", stats.variance());
//! println!("Skewness: {:?}", stats.skewness());
//! println!("Kurtosis: {:?}", stats.kurtosis());
//! ```

mod moments;

pub use moments::{combine, lift, SummaryStats};
