//! A fixed-capacity window over the most recent samples of a signal,
//! maintaining running first and second moments so the mean and variance of
//! the window are available in constant time.

use assert2::debug_assert;
use num_traits::Float;

use crate::types::{ConfigError, Result};

/// Rolling statistics over the newest `capacity` samples of one signal.
///
/// Samples are kept verbatim in a ring while their first and second moments
/// are accumulated as offsets from the `expected` baseline. Centering the
/// sums this way keeps them small when the baseline is anywhere near the true
/// mean, which limits cancellation in the variance. The statistics themselves
/// do not depend on the baseline.
///
/// Pushing and reading are both `O(1)` and never allocate after construction.
#[derive(Debug, Clone)]
pub struct StatBuffer<F> {
    /// Baseline subtracted from every sample before it enters the sums.
    expected: F,
    /// Sample storage in insertion order modulo wrap-around.
    samples: Box<[F]>,
    /// Index of the oldest live sample while `len > 0`.
    front: usize,
    /// Index the next sample will be written to.
    back: usize,
    /// Number of live samples, at most `samples.len()`.
    len: usize,
    /// Running sum of `sample - expected` over the live samples.
    offset_sum: F,
    /// Running sum of `(sample - expected)^2` over the live samples.
    offset_sq_sum: F,
}

impl<F: Float> StatBuffer<F> {
    /// Create a buffer holding up to `capacity` samples.
    ///
    /// `expected` is the anticipated magnitude of the incoming samples. Any
    /// finite value yields the same statistics; a value close to the real
    /// mean keeps the intermediate sums small.
    ///
    /// # Errors
    /// Rejects a zero `capacity` as well as a non-finite `expected`.
    pub fn new(capacity: usize, expected: F) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigError::InvalidSampleCapacity);
        }
        if !expected.is_finite() {
            return Err(ConfigError::NonFiniteExpected);
        }
        Ok(Self {
            expected,
            samples: vec![F::zero(); capacity].into_boxed_slice(),
            front: 0,
            back: 0,
            len: 0,
            offset_sum: F::zero(),
            offset_sq_sum: F::zero(),
        })
    }

    /// Append `value` to the window.
    ///
    /// A full window evicts its oldest sample and inserts `value` in the same
    /// call, so the window never shrinks and the newest sample is never the
    /// one dropped.
    ///
    /// A non-finite `value` is accepted but poisons the running sums until
    /// [`Self::clear`], since eviction can no longer cancel its contribution
    /// exactly. Callers feeding untrusted data should filter beforehand.
    pub fn push(&mut self, value: F) {
        if self.len == self.samples.len() {
            self.evict_oldest();
        }
        self.samples[self.back] = value;
        self.back = self.wrapping_next(self.back);
        self.len += 1;

        let offset = value - self.expected;
        self.offset_sum = self.offset_sum + offset;
        self.offset_sq_sum = self.offset_sq_sum + offset * offset;

        self.assert_invariants();
    }

    /// Remove the oldest sample, subtracting exactly the contribution it made
    /// when it entered so the sums match the surviving window.
    fn evict_oldest(&mut self) {
        debug_assert!(self.len > 0);
        let evicted = self.samples[self.front];
        self.front = self.wrapping_next(self.front);
        self.len -= 1;

        let offset = evicted - self.expected;
        self.offset_sum = self.offset_sum - offset;
        self.offset_sq_sum = self.offset_sq_sum - offset * offset;
    }

    /// Mean of the samples currently in the window, zero while empty.
    pub fn mean(&self) -> F {
        if self.len == 0 {
            return F::zero();
        }
        self.expected + self.offset_sum / self.len_as_float()
    }

    /// Unbiased sample variance of the window, zero while fewer than two
    /// samples are present.
    ///
    /// Catastrophic cancellation in the sums can produce a tiny negative
    /// intermediate; that is clamped to zero so real samples never report a
    /// negative spread. A poisoned window reports `NaN` instead.
    pub fn variance(&self) -> F {
        if self.len < 2 {
            return F::zero();
        }
        let n = self.len_as_float();
        let variance =
            (self.offset_sq_sum - (self.offset_sum * self.offset_sum) / n) / (n - F::one());
        if variance < F::zero() {
            F::zero()
        } else {
            variance
        }
    }

    /// Standard deviation of the window, the square root of
    /// [`Self::variance`].
    pub fn std_dev(&self) -> F {
        self.variance().sqrt()
    }

    /// Drop all samples and zero the running sums.
    pub fn clear(&mut self) {
        self.front = 0;
        self.back = 0;
        self.len = 0;
        self.offset_sum = F::zero();
        self.offset_sq_sum = F::zero();
    }

    /// The baseline the running sums are centered on.
    pub fn expected(&self) -> F {
        self.expected
    }

    /// Number of samples currently in the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of samples the window can hold.
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    fn wrapping_next(&self, index: usize) -> usize {
        (index + 1) % self.samples.len()
    }

    fn len_as_float(&self) -> F {
        F::from(self.len).expect("A sample count always fits into a float")
    }

    fn assert_invariants(&self) {
        debug_assert!(self.len <= self.samples.len());
        debug_assert!(self.front < self.samples.len());
        debug_assert!(self.back < self.samples.len());
        debug_assert!((self.front + self.len) % self.samples.len() == self.back);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng, rngs::SmallRng};
    use test_case::test_case;

    use super::*;
    use crate::utils::tests::round;

    /// Naive statistics of a window, recomputed from scratch.
    fn reference_stats(window: &VecDeque<f64>) -> (f64, f64) {
        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;
        let variance = if window.len() < 2 {
            0.0
        } else {
            window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };
        (mean, variance)
    }

    #[test]
    fn a_zero_capacity_is_rejected() {
        assert_eq!(
            StatBuffer::<f32>::new(0, 30.0).unwrap_err(),
            ConfigError::InvalidSampleCapacity
        );
    }

    #[test_case(f32::NAN)]
    #[test_case(f32::INFINITY)]
    #[test_case(f32::NEG_INFINITY)]
    fn a_non_finite_baseline_is_rejected(expected: f32) {
        assert_eq!(
            StatBuffer::new(60, expected).unwrap_err(),
            ConfigError::NonFiniteExpected
        );
    }

    #[test]
    fn an_empty_window_reports_zeros() {
        let buffer = StatBuffer::new(60, 30.0_f32).unwrap();
        assert_eq!(buffer.mean(), 0.0);
        assert_eq!(buffer.variance(), 0.0);
        assert_eq!(buffer.std_dev(), 0.0);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 60);
    }

    #[test_case(0.0)]
    #[test_case(42.5)]
    #[test_case(-17.0)]
    fn a_single_sample_is_its_own_mean_with_no_spread(value: f32) {
        let mut buffer = StatBuffer::new(60, 30.0).unwrap();
        buffer.push(value);
        assert_eq!(buffer.mean(), value);
        assert_eq!(buffer.variance(), 0.0);
        assert_eq!(buffer.std_dev(), 0.0);
        assert_eq!(buffer.len(), 1);
    }

    #[test_case(0.0)]
    #[test_case(20.0)]
    #[test_case(-7.5)]
    #[test_case(1000.0)]
    fn the_textbook_window_holds_for_any_baseline(expected: f32) {
        let mut buffer = StatBuffer::new(3, expected).unwrap();
        for value in [10.0, 20.0, 30.0] {
            buffer.push(value);
        }
        assert_eq!(round(f64::from(buffer.mean()), 3), 20.0);
        assert_eq!(round(f64::from(buffer.variance()), 3), 100.0);
        assert_eq!(round(f64::from(buffer.std_dev()), 3), 10.0);
    }

    #[test]
    fn a_push_into_a_full_window_replaces_the_oldest_sample() {
        let mut buffer = StatBuffer::new(3, 20.0_f32).unwrap();
        for value in [10.0, 20.0, 30.0] {
            buffer.push(value);
        }
        // The window is full; the next push must evict 10 and keep 40.
        buffer.push(40.0);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.mean(), 30.0);
        assert_eq!(buffer.variance(), 100.0);
        assert_eq!(buffer.std_dev(), 10.0);
    }

    #[test]
    fn a_capacity_of_one_keeps_only_the_latest_sample() {
        let mut buffer = StatBuffer::new(1, 30.0_f32).unwrap();
        for value in [10.0, 50.0, 90.0] {
            buffer.push(value);
            assert_eq!(buffer.len(), 1);
            assert_eq!(buffer.mean(), value);
            assert_eq!(buffer.variance(), 0.0);
        }
    }

    #[test]
    fn reading_the_statistics_does_not_change_them() {
        let mut buffer = StatBuffer::new(4, 16.6_f32).unwrap();
        for value in [12.1, 18.3, 16.0] {
            buffer.push(value);
        }
        let first = (buffer.mean(), buffer.variance(), buffer.std_dev());
        let second = (buffer.mean(), buffer.variance(), buffer.std_dev());
        assert_eq!(first, second);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn a_non_finite_sample_poisons_the_sums_until_cleared() {
        let mut buffer = StatBuffer::new(3, 0.0_f32).unwrap();
        buffer.push(10.0);
        buffer.push(f32::NAN);
        assert!(buffer.mean().is_nan());
        // Rolling the culprit out of the window cannot heal the sums.
        for _ in 0..8 {
            buffer.push(20.0);
        }
        assert!(buffer.mean().is_nan());
        assert!(buffer.variance().is_nan());
        assert!(buffer.std_dev().is_nan());
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.push(20.0);
        assert_eq!(buffer.mean(), 20.0);
        assert_eq!(buffer.variance(), 0.0);
    }

    #[test]
    fn a_long_run_of_pushes_matches_statistics_recomputed_from_scratch() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut buffer = StatBuffer::new(60, 30.0_f64).unwrap();
        let mut window = VecDeque::with_capacity(60);

        for _ in 0..10_000 {
            let value = rng.random_range(1.0..240.0);
            buffer.push(value);
            if window.len() == 60 {
                window.pop_front();
            }
            window.push_back(value);

            let (mean, variance) = reference_stats(&window);
            assert!((buffer.mean() - mean).abs() < 1e-4);
            assert!((buffer.variance() - variance).abs() < 1e-4);
        }
        assert_eq!(buffer.len(), 60);
    }

    proptest! {
        #[test]
        fn windowed_statistics_match_a_recompute_from_scratch(
            values in prop::collection::vec(-100.0_f64..100.0, 1..200),
            capacity in 1_usize..8,
        ) {
            let mut buffer = StatBuffer::new(capacity, 0.0).unwrap();
            let mut window = VecDeque::new();
            for &value in &values {
                buffer.push(value);
                if window.len() == capacity {
                    window.pop_front();
                }
                window.push_back(value);
            }
            let (mean, variance) = reference_stats(&window);
            prop_assert!((buffer.mean() - mean).abs() < 1e-7);
            prop_assert!((buffer.variance() - variance).abs() < 1e-7);
        }

        #[test]
        fn the_statistics_do_not_depend_on_the_baseline(
            values in prop::collection::vec(5.0_f64..500.0, 2..100),
            expected in -1000.0_f64..1000.0,
        ) {
            let mut centered = StatBuffer::new(64, expected).unwrap();
            let mut uncentered = StatBuffer::new(64, 0.0).unwrap();
            for &value in &values {
                centered.push(value);
                uncentered.push(value);
            }
            prop_assert!((centered.mean() - uncentered.mean()).abs() < 1e-6);
            prop_assert!((centered.variance() - uncentered.variance()).abs() < 1e-4);
        }

        #[test]
        fn variance_and_standard_deviation_are_never_negative(
            values in prop::collection::vec(-1000.0_f64..1000.0, 0..128),
        ) {
            // A far-off baseline maximizes cancellation in the sums.
            let mut buffer = StatBuffer::new(32, 1000.0).unwrap();
            for &value in &values {
                buffer.push(value);
                prop_assert!(buffer.variance() >= 0.0);
                prop_assert!(buffer.std_dev() >= 0.0);
            }
        }
    }
}
