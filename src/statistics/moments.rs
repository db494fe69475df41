//! Summary statistics up to the fourth central moment
//!
//! Computes count, extrema, mean, variance, skewness and kurtosis in a single
//! pass. Partial results over disjoint inputs merge exactly, so the same
//! accumulator serves sequential folds, parallel reductions and streaming
//! updates.

use crate::traits::{DomainError, Lift, Monoid, Sketch};
use core::iter::{FromIterator, Sum};
use num_traits::Float;

/// Mergeable accumulator of count, extrema, mean and central moments
///
/// `m2`, `m3` and `m4` hold the sums of the 2nd, 3rd and 4th powers of the
/// deviations from `mean`; they are only normalized by the count when a
/// statistic is extracted. The count is stored as `T` so the merge formulas
/// stay in one numeric type.
///
/// The identity (zero samples) has `n = mean = m2 = m3 = m4 = 0`,
/// `min = +inf` and `max = -inf`.
///
/// With the `serde` feature the state serializes as a plain struct of its
/// seven fields. Formats without a representation for infinities (JSON among
/// them) cannot carry the identity's extrema; `serde_json` writes them as
/// `null` and refuses to read them back, so only non-empty states survive a
/// JSON round trip.
///
/// # Example
///
/// ```
/// use flowmoments::statistics::SummaryStats;
///
/// let stats: SummaryStats<f64> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
///     .into_iter()
///     .collect();
///
/// assert_eq!(stats.len(), 8);
/// assert!((stats.mean - 5.0).abs() < 1e-12);
/// assert!((stats.variance_population().unwrap() - 4.0).abs() < 1e-12);
/// assert!((stats.variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
/// assert!((stats.skewness().unwrap() - 0.65625).abs() < 1e-12);
/// assert!((stats.kurtosis().unwrap() - 2.78125).abs() < 1e-12);
/// ```
///
/// # Distributed Usage
///
/// ```
/// use flowmoments::statistics::{combine, SummaryStats};
///
/// let left: SummaryStats<f64> = [2.0, 4.0, 4.0, 4.0].into_iter().collect();
/// let right: SummaryStats<f64> = [5.0, 5.0, 7.0, 9.0].into_iter().collect();
///
/// let total = combine(left, right);
/// assert_eq!(total.min, 2.0);
/// assert_eq!(total.max, 9.0);
/// assert!((total.mean - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStats<T> {
    /// Number of samples, as `T`
    pub n: T,
    /// Smallest sample
    pub min: T,
    /// Largest sample
    pub max: T,
    /// Arithmetic mean
    pub mean: T,
    /// Sum of squared deviations from the mean
    pub m2: T,
    /// Sum of cubed deviations from the mean
    pub m3: T,
    /// Sum of fourth-power deviations from the mean
    pub m4: T,
}

/// Lift one sample into a singleton accumulator
#[inline]
pub fn lift<T: Float>(x: T) -> SummaryStats<T> {
    SummaryStats::lift(x)
}

/// Merge two accumulators summarizing disjoint samples
#[inline]
pub fn combine<T: Float>(x: SummaryStats<T>, y: SummaryStats<T>) -> SummaryStats<T> {
    x.combine(y)
}

impl<T: Float> Default for SummaryStats<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> SummaryStats<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::identity()
    }

    /// The accumulator over zero samples, neutral under [`combine`]
    pub fn identity() -> Self {
        Self {
            n: T::zero(),
            min: T::infinity(),
            max: T::neg_infinity(),
            mean: T::zero(),
            m2: T::zero(),
            m3: T::zero(),
            m4: T::zero(),
        }
    }

    /// Reset to the identity element
    pub fn initialize(&mut self) {
        *self = Self::identity();
    }

    /// Singleton accumulator for `x`
    #[inline]
    pub fn lift(x: T) -> Self {
        Self {
            n: T::one(),
            min: x,
            max: x,
            mean: x,
            m2: T::zero(),
            m3: T::zero(),
            m4: T::zero(),
        }
    }

    /// Merge with another accumulator using the parallel moments algorithm
    ///
    /// Extends Chan et al.'s pairwise update to the third and fourth central
    /// moments (Pébay, 2008). The result is the exact summary of the union of
    /// both inputs up to rounding, and the operation is associative and
    /// commutative. Merging with an empty accumulator returns the other
    /// operand unchanged; merging two empty accumulators yields the identity.
    #[inline]
    pub fn combine(self, other: Self) -> Self {
        let (x, y) = (self, other);
        let zero = T::zero();

        if x.n == zero && y.n == zero {
            return Self::identity();
        }
        if y.n == zero {
            return x;
        }
        if x.n == zero {
            return y;
        }

        let two = T::one() + T::one();
        let three = two + T::one();
        let four = two + two;
        let six = three + three;

        let n = x.n + y.n;
        let n2 = n * n;
        let n3 = n2 * n;

        let delta = y.mean - x.mean;
        let delta2 = delta * delta;
        let delta3 = delta2 * delta;
        let delta4 = delta3 * delta;

        let mean = x.mean + delta * y.n / n;

        let m2 = x.m2 + y.m2 + delta2 * x.n * y.n / n;

        let m3 = x.m3
            + y.m3
            + delta3 * x.n * y.n * (x.n - y.n) / n2
            + three * delta * (x.n * y.m2 - y.n * x.m2) / n;

        let m4 = x.m4
            + y.m4
            + delta4 * x.n * y.n * (x.n * x.n - x.n * y.n + y.n * y.n) / n3
            + six * delta2 * (x.n * x.n * y.m2 + y.n * y.n * x.m2) / n2
            + four * delta * (x.n * y.m3 - y.n * x.m3) / n;

        Self {
            n,
            min: x.min.min(y.min),
            max: x.max.max(y.max),
            mean,
            m2,
            m3,
            m4,
        }
    }

    /// Add a value to the statistics
    ///
    /// NaN values are ignored to prevent poisoning the statistics.
    pub fn add(&mut self, value: T) {
        if value.is_nan() {
            return;
        }
        *self = self.combine(Self::lift(value));
    }

    /// Merge another accumulator into this one
    pub fn merge_stats(&mut self, other: &Self) {
        *self = self.combine(*other);
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.n.to_u64().unwrap_or(0)
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.n == T::zero()
    }

    /// Get the minimum value, `None` when empty
    pub fn min_value(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.min)
        }
    }

    /// Get the maximum value, `None` when empty
    pub fn max_value(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.max)
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Get the sum of all values
    pub fn sum(&self) -> T {
        self.mean * self.n
    }

    /// Sample (unbiased) variance, `m2 / (n - 1)`
    pub fn variance(&self) -> Result<T, DomainError> {
        self.require_samples(2)?;
        Ok(self.m2 / (self.n - T::one()))
    }

    /// Population variance, `m2 / n`
    pub fn variance_population(&self) -> Result<T, DomainError> {
        self.require_samples(1)?;
        Ok(self.m2 / self.n)
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> Result<T, DomainError> {
        self.variance().map(Float::sqrt)
    }

    /// Population standard deviation
    pub fn std_dev_population(&self) -> Result<T, DomainError> {
        self.variance_population().map(Float::sqrt)
    }

    /// Skewness, `sqrt(n) * m3 / m2^1.5`
    ///
    /// This is the plain moment estimator g₁ without small-sample bias
    /// correction.
    pub fn skewness(&self) -> Result<T, DomainError> {
        self.require_spread()?;
        let two = T::one() + T::one();
        let three_halves = (two + T::one()) / two;
        Ok(self.n.sqrt() * self.m3 / self.m2.powf(three_halves))
    }

    /// Kurtosis, `n * m4 / m2^2`
    ///
    /// Returns the raw fourth standardized moment: a normal distribution
    /// scores 3 here, not 0. See [`excess_kurtosis`](Self::excess_kurtosis)
    /// for the shifted variant.
    pub fn kurtosis(&self) -> Result<T, DomainError> {
        self.require_spread()?;
        Ok(self.n * self.m4 / (self.m2 * self.m2))
    }

    /// Excess kurtosis, `kurtosis() - 3`
    pub fn excess_kurtosis(&self) -> Result<T, DomainError> {
        let three = T::one() + T::one() + T::one();
        self.kurtosis().map(|k| k - three)
    }

    fn require_samples(&self, required: u8) -> Result<(), DomainError> {
        if self.n < num_traits::cast::<u8, T>(required).unwrap_or_else(T::infinity) {
            return Err(DomainError::InsufficientSamples {
                required: u64::from(required),
                found: self.len(),
            });
        }
        Ok(())
    }

    fn require_spread(&self) -> Result<(), DomainError> {
        if self.m2 == T::zero() {
            return Err(DomainError::DegenerateVariance);
        }
        Ok(())
    }
}

impl<T: Float> Monoid for SummaryStats<T> {
    fn identity() -> Self {
        SummaryStats::identity()
    }

    fn combine(self, other: Self) -> Self {
        SummaryStats::combine(self, other)
    }
}

impl<T: Float> Lift<T> for SummaryStats<T> {
    fn lift(input: T) -> Self {
        SummaryStats::lift(input)
    }
}

impl<T: Float> From<T> for SummaryStats<T> {
    fn from(x: T) -> Self {
        Self::lift(x)
    }
}

impl<T: Float> FromIterator<T> for SummaryStats<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

impl<T: Float> Extend<T> for SummaryStats<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Float> Sum for SummaryStats<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), Self::combine)
    }
}

impl<'a, T: Float> Sum<&'a SummaryStats<T>> for SummaryStats<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, s| acc.combine(*s))
    }
}

impl<T: Float + core::fmt::Debug> Sketch for SummaryStats<T> {
    type Item = T;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_stats(other);
    }

    fn clear(&mut self) {
        self.initialize();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.len()
    }
}
