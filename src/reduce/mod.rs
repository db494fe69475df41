//! Drivers that run lift/combine reductions
//!
//! Accumulators only know how to lift one sample and merge two partial
//! results. The functions here supply the other half of the contract: apply
//! the lift to every input and merge the results down to a single value,
//! starting from the identity so an empty input is well defined.
//!
//! - [`transform_reduce`]: sequential left fold
//! - [`tree_reduce`]: balanced pairwise reduction over precomputed partials
//! - [`summarize`]: lift + fold into a [`SummaryStats`]
//! - `par_transform_reduce` / `par_summarize` (feature `parallel`): rayon
//!
//! # Example
//!
//! ```
//! use flowmoments::reduce::summarize;
//!
//! let stats = summarize(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
//! assert_eq!(stats.len(), 8);
//! assert!((stats.variance_population().unwrap() - 4.0).abs() < 1e-12);
//! ```

#[cfg(feature = "parallel")]
mod parallel;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub use parallel::{par_reduce, par_summarize, par_transform_reduce};

use crate::statistics::{combine, lift, SummaryStats};
use crate::traits::{Lift, Monoid};
use num_traits::Float;

/// Default minimum number of items a rayon task processes
pub const DEFAULT_MIN_LEN: usize = 1024;

/// Default input length below which parallel drivers fold sequentially
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 8192;

/// Tuning knobs for the parallel reduction drivers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Minimum number of items per parallel task
    pub min_len: usize,
    /// Inputs shorter than this are reduced on the calling thread
    pub sequential_cutoff: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            sequential_cutoff: DEFAULT_SEQUENTIAL_CUTOFF,
        }
    }
}

impl ReduceConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of items per parallel task (clamped to 1)
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    /// Set the sequential cutoff; `0` always goes parallel
    pub fn with_sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = cutoff;
        self
    }

    /// Whether an input of `len` items should take the parallel path
    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.sequential_cutoff
    }
}

/// Lift every item and fold the results left to right, starting at `init`
///
/// `init` should be the identity of `combine` so that an empty input returns
/// it unchanged.
pub fn transform_reduce<I, A, L, C>(items: I, init: A, mut lift: L, mut combine: C) -> A
where
    I: IntoIterator,
    L: FnMut(I::Item) -> A,
    C: FnMut(A, A) -> A,
{
    items
        .into_iter()
        .fold(init, |acc, item| combine(acc, lift(item)))
}

/// Reduce precomputed partial accumulators with a balanced pairwise tree
///
/// Returns the identity for an empty slice.
pub fn tree_reduce<A: Monoid + Clone>(partials: &[A]) -> A {
    match partials.len() {
        0 => A::identity(),
        1 => partials[0].clone(),
        len => {
            let (left, right) = partials.split_at(len / 2);
            tree_reduce(left).combine(tree_reduce(right))
        }
    }
}

/// Lift and fold a slice into any [`Monoid`] that can lift its items
pub fn reduce<X, A>(items: &[X]) -> A
where
    X: Copy,
    A: Monoid + Lift<X>,
{
    transform_reduce(items.iter().copied(), A::identity(), A::lift, A::combine)
}

/// Summarize a slice of samples on the calling thread
pub fn summarize<T: Float>(values: &[T]) -> SummaryStats<T> {
    log::trace!("sequential summary over {} samples", values.len());
    transform_reduce(
        values.iter().copied(),
        SummaryStats::identity(),
        lift,
        combine,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_summarize_reference_dataset() {
        let stats = summarize(&DATA);

        assert_eq!(stats.len(), 8);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.variance_population().unwrap() - 4.0).abs() < 1e-12);
        assert!((stats.variance().unwrap() - 4.571).abs() < 1e-3);
    }

    #[test]
    fn test_summarize_empty_is_identity() {
        let stats = summarize::<f64>(&[]);
        assert_eq!(stats, SummaryStats::identity());
    }

    #[test]
    fn test_tree_matches_fold() {
        let partials: Vec<SummaryStats<f64>> = DATA.iter().map(|&v| lift(v)).collect();
        let tree = tree_reduce(&partials);
        let folded = summarize(&DATA);

        assert_eq!(tree.n, folded.n);
        assert_eq!(tree.min, folded.min);
        assert_eq!(tree.max, folded.max);
        assert!((tree.mean - folded.mean).abs() < 1e-12);
        assert!((tree.m2 - folded.m2).abs() < 1e-9);
        assert!((tree.m3 - folded.m3).abs() < 1e-9);
        assert!((tree.m4 - folded.m4).abs() < 1e-9);
    }

    #[test]
    fn test_tree_reduce_edges() {
        assert_eq!(
            tree_reduce::<SummaryStats<f64>>(&[]),
            SummaryStats::identity()
        );
        assert_eq!(tree_reduce(&[lift(3.0_f64)]), lift(3.0));
    }

    #[test]
    fn test_generic_reduce() {
        let stats: SummaryStats<f64> = reduce(&DATA);
        assert_eq!(stats.len(), 8);
        assert!((stats.sum() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_reduce_with_closures() {
        // Lift through a projection, as a caller reducing records would
        let records = [(1, 10.0_f64), (2, 20.0), (3, 30.0)];
        let stats = transform_reduce(
            records.iter(),
            SummaryStats::identity(),
            |&(_, v)| lift(v),
            combine,
        );

        assert_eq!(stats.len(), 3);
        assert!((stats.mean - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_builder() {
        let config = ReduceConfig::new()
            .with_min_len(0)
            .with_sequential_cutoff(16);

        assert_eq!(config.min_len, 1);
        assert!(!config.is_parallel(15));
        assert!(config.is_parallel(16));
        assert_eq!(ReduceConfig::default().min_len, DEFAULT_MIN_LEN);
    }
}
