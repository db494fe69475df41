//! Rayon-backed reduction drivers
//!
//! Rayon splits the input into tasks of at least `min_len` items, lifts and
//! folds each task independently, then merges the task results up a tree
//! whose shape depends on work stealing. The merge order is therefore not
//! fixed, which is sound only because combine is associative and commutative.

use super::ReduceConfig;
use crate::statistics::{combine, lift, SummaryStats};
use crate::traits::{Lift, Monoid};
use num_traits::Float;
use rayon::prelude::*;

/// Lift every item and reduce the results in parallel
///
/// `identity` must produce the neutral element of `combine`; rayon calls it
/// once per task, and its value is returned for an empty input.
pub fn par_transform_reduce<X, A, L, I, C>(
    items: &[X],
    config: &ReduceConfig,
    lift: L,
    identity: I,
    combine: C,
) -> A
where
    X: Sync,
    A: Send,
    L: Fn(&X) -> A + Sync + Send,
    I: Fn() -> A + Sync + Send,
    C: Fn(A, A) -> A + Sync + Send,
{
    if !config.is_parallel(items.len()) {
        log::debug!(
            "reducing {} items sequentially (cutoff {})",
            items.len(),
            config.sequential_cutoff
        );
        return items
            .iter()
            .fold(identity(), |acc, item| combine(acc, lift(item)));
    }

    log::debug!(
        "reducing {} items on {} threads (min_len {})",
        items.len(),
        rayon::current_num_threads(),
        config.min_len
    );
    items
        .par_iter()
        .with_min_len(config.min_len.max(1))
        .map(|item| lift(item))
        .reduce(&identity, &combine)
}

/// Parallel lift-and-reduce into any [`Monoid`] that can lift its items
pub fn par_reduce<X, A>(items: &[X], config: &ReduceConfig) -> A
where
    X: Copy + Sync,
    A: Monoid + Lift<X> + Send,
{
    par_transform_reduce(items, config, |&x| A::lift(x), A::identity, A::combine)
}

/// Summarize a slice of samples using the rayon thread pool
pub fn par_summarize<T>(values: &[T], config: &ReduceConfig) -> SummaryStats<T>
where
    T: Float + Send + Sync,
{
    par_transform_reduce(
        values,
        config,
        |&x| lift(x),
        SummaryStats::identity,
        combine,
    )
}
