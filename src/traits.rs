//! Core traits for mergeable accumulators
//!
//! Every accumulator in this crate is built from two pieces: a [`Lift`] that
//! turns one raw sample into a singleton accumulator, and a [`Monoid`] combine
//! that merges two accumulators over disjoint inputs. The reduction drivers in
//! [`crate::reduce`] are generic over these traits, and [`Sketch`] layers the
//! familiar push-one-value-at-a-time interface on top.

use core::fmt::Debug;
use thiserror::Error;

/// Error returned when a statistic is requested outside its numeric domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Too few samples for the requested estimator
    #[error("insufficient samples: need at least {required}, found {found}")]
    InsufficientSamples { required: u64, found: u64 },
    /// Second central moment is zero, so standardized moments are undefined
    #[error("degenerate variance: all samples are equal")]
    DegenerateVariance,
}

/// An associative, commutative merge with a neutral element
///
/// Implementations must satisfy, up to floating-point rounding:
///
/// - `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - `a.combine(b) == b.combine(a)`
/// - `Self::identity().combine(a) == a`
///
/// These laws are what allow a parallel reduction to group and order operands
/// however it likes.
pub trait Monoid: Sized {
    /// The neutral element (an accumulator over zero samples)
    fn identity() -> Self;

    /// Merge two accumulators summarizing disjoint inputs
    fn combine(self, other: Self) -> Self;
}

/// Conversion of a single raw sample into an accumulator
pub trait Lift<Input>: Sized {
    /// Build the accumulator summarizing exactly one sample
    fn lift(input: Input) -> Self;
}

/// Streaming interface shared by all accumulators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    fn merge(&mut self, other: &Self);

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
