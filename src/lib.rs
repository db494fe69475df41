//! # Flowmoments
//!
//! Single-pass, mergeable summary statistics for Rust.
//!
//! Flowmoments computes count, minimum, maximum, mean, variance, skewness and
//! kurtosis over large collections of samples without making more than one
//! pass over the data. Each sample is lifted into a tiny accumulator and
//! accumulators are merged pairwise; the merge is associative and commutative,
//! so the work can be split across threads in any shape and still produce the
//! same answer up to rounding.
//!
//! ## Features
//!
//! - **Higher moments**: Skewness and kurtosis alongside mean and variance
//! - **Full Mergeability**: Exact merge of partial results over disjoint data
//! - **Parallel Reduction**: Rayon-backed drivers over slices
//! - **Generic**: Works with any `num_traits::Float` (`f32`, `f64`)
//!
//! ## Quick Start
//!
//! ```rust
//! use flowmoments::prelude::*;
//!
//! let stats = summarize(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
//!
//! assert!((stats.mean - 5.0).abs() < 1e-12);
//! assert!((stats.variance_population().unwrap() - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Distributed Computing
//!
//! Partial summaries from independent workers combine into the summary of the
//! whole input:
//!
//! ```rust
//! use flowmoments::statistics::{combine, SummaryStats};
//!
//! let worker1: SummaryStats<f64> = [1.0, 2.0, 3.0].into_iter().collect();
//! let worker2: SummaryStats<f64> = [4.0, 5.0, 6.0].into_iter().collect();
//!
//! let total = combine(worker1, worker2);
//! assert_eq!(total.len(), 6);
//! assert!((total.mean - 3.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` and uses `libm` for `sqrt`/`powf`
//! - `parallel` (default): Rayon reduction drivers (implies `std`)
//! - `serde`: Enable serialization

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core traits always available
pub mod traits;

pub mod display;
pub mod reduce;
pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::reduce::{summarize, transform_reduce, tree_reduce, ReduceConfig};
    pub use crate::statistics::{combine, lift, SummaryStats};

    #[cfg(feature = "parallel")]
    pub use crate::reduce::{par_summarize, par_transform_reduce};
}

pub use statistics::SummaryStats;
pub use traits::DomainError;
