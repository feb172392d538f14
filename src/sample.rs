//! Uniform sampling of distinct integers from a range.
//!
//! [`RangeSampler`] draws a fixed-size subset of `[low, high)` without
//! replacement, uniformly over all subsets of that size, and yields it in
//! ascending order as a one-shot sequence. An optional exclusion list removes
//! individual values from the range before sampling; the graph builders use
//! this to enumerate the complement of an existing edge set.
//!
//! Two strategies are used internally, picked by density. When the request is
//! small relative to the eligible values, rejection sampling into an ordered
//! set finishes in O(count log count) expected time. Otherwise a single
//! left-to-right selection pass accepts each candidate with probability
//! `needed / remaining`, which is O(high - low) but never retries. Both are
//! exactly uniform: every size-`count` subset is equally likely.

use std::collections::BTreeSet;
use std::iter::FusedIterator;
use std::vec;

use rand::Rng;
use thiserror::Error;

/// Error generated when a sampling request is infeasible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot sample {count} distinct values from [{low}, {high}) with {excluded} excluded")]
pub struct InvalidRange {
    /// Number of requested samples.
    pub count: usize,
    /// Inclusive lower bound of the range.
    pub low: i64,
    /// Exclusive upper bound of the range.
    pub high: i64,
    /// Number of distinct in-range values excluded from sampling.
    pub excluded: usize,
}

/// A one-shot sequence of distinct integers sampled uniformly from a range.
///
/// The samples are drawn eagerly at construction time and yielded in
/// ascending order. The sequence is exhausted after `count` yields and cannot
/// be restarted; construct a new sampler to draw again.
///
/// # Example
///
/// ```
/// use graphgen::{RandomEngine, RangeSampler};
///
/// let mut rng = RandomEngine::new(1);
/// let samples: Vec<i64> = RangeSampler::new(&mut rng, 20, 0, 100)?.collect();
///
/// assert_eq!(samples.len(), 20);
/// assert!(samples.windows(2).all(|w| w[0] < w[1]));
/// assert!(samples.iter().all(|&v| (0..100).contains(&v)));
/// # Ok::<(), graphgen::InvalidRange>(())
/// ```
#[derive(Debug, Clone)]
pub struct RangeSampler {
    samples: vec::IntoIter<i64>,
}

impl RangeSampler {
    /// Samples `count` distinct values uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidRange`] when `low > high` or when `count` exceeds
    /// the size of the range.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        low: i64,
        high: i64,
    ) -> Result<Self, InvalidRange> {
        Self::with_excluded(rng, count, low, high, Vec::new())
    }

    /// Samples `count` distinct values uniformly from `[low, high)` minus the
    /// values in `excluded`.
    ///
    /// Exclusion values outside the range, as well as duplicates, are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidRange`] when `low > high` or when `count` exceeds
    /// the number of eligible values.
    pub fn with_excluded<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        low: i64,
        high: i64,
        mut excluded: Vec<i64>,
    ) -> Result<Self, InvalidRange> {
        excluded.retain(|value| (low..high).contains(value));
        excluded.sort_unstable();
        excluded.dedup();

        if low > high {
            return Err(InvalidRange {
                count,
                low,
                high,
                excluded: excluded.len(),
            });
        }

        let span = (high as i128 - low as i128) as u128;
        let eligible = span - excluded.len() as u128;
        if count as u128 > eligible {
            return Err(InvalidRange {
                count,
                low,
                high,
                excluded: excluded.len(),
            });
        }

        // Rejection sampling stays fast only while most draws are fresh: the
        // request must leave headroom among the eligible values, and the
        // exclusions must not dominate the raw range.
        let sparse = (count as u128) * 2 <= eligible && eligible * 2 >= span;
        let samples = if sparse {
            Self::reject(rng, count, low, high, &excluded)
        } else {
            Self::select(rng, count, low, high, &excluded, eligible)
        };

        Ok(Self {
            samples: samples.into_iter(),
        })
    }

    /// Draws by rejection into an ordered set. Expected O(count log count)
    /// under the sparsity condition checked by the caller.
    fn reject<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        low: i64,
        high: i64,
        excluded: &[i64],
    ) -> Vec<i64> {
        let mut chosen = BTreeSet::new();
        while chosen.len() < count {
            let value = rng.random_range(low..high);
            if excluded.binary_search(&value).is_err() {
                chosen.insert(value);
            }
        }
        chosen.into_iter().collect()
    }

    /// Selection sampling: one pass over the range, accepting each eligible
    /// candidate with probability `needed / remaining`.
    fn select<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        low: i64,
        high: i64,
        excluded: &[i64],
        eligible: u128,
    ) -> Vec<i64> {
        let mut samples = Vec::with_capacity(count);
        let mut needed = count as u128;
        let mut remaining = eligible;
        let mut excluded = excluded.iter().peekable();

        for value in low..high {
            if excluded.peek() == Some(&&value) {
                excluded.next();
                continue;
            }
            if needed == 0 {
                break;
            }
            if rng.random_range(0..remaining) < needed {
                samples.push(value);
                needed -= 1;
            }
            remaining -= 1;
        }

        samples
    }
}

impl Iterator for RangeSampler {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.samples.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl ExactSizeIterator for RangeSampler {
    #[inline]
    fn len(&self) -> usize {
        self.samples.len()
    }
}

impl FusedIterator for RangeSampler {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::RandomEngine;
    use itertools::Itertools;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 10)]
    #[case(1, 0, 1)]
    #[case(10, 0, 10)]
    #[case(5, -5, 5)]
    #[case(64, 1_000, 1_128)]
    #[case(3, i64::MAX - 10, i64::MAX)]
    fn yields_count_distinct_ascending(#[case] count: usize, #[case] low: i64, #[case] high: i64) {
        let mut rng = RandomEngine::new(11);
        let samples: Vec<i64> = RangeSampler::new(&mut rng, count, low, high)
            .unwrap()
            .collect();

        assert_eq!(samples.len(), count);
        assert!(samples.iter().all(|&v| (low..high).contains(&v)));
        assert!(samples.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn full_range_request_yields_every_value() {
        // Dense enough to take the selection path, which must then
        // degenerate into the identity.
        let mut rng = RandomEngine::new(0);
        let samples: Vec<i64> = RangeSampler::new(&mut rng, 10, 0, 10).unwrap().collect();
        assert_eq!(samples, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn excluded_values_never_appear() {
        let mut rng = RandomEngine::new(5);
        let excluded = vec![0, 2, 4, 6, 8];
        let samples: Vec<i64> = RangeSampler::with_excluded(&mut rng, 5, 0, 10, excluded)
            .unwrap()
            .collect();
        assert_eq!(samples, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn sparse_excluded_values_never_appear() {
        let mut rng = RandomEngine::new(5);
        let excluded: Vec<i64> = (0..1_000).map(|v| v * 2).collect();
        let samples: Vec<i64> = RangeSampler::with_excluded(&mut rng, 10, 0, 2_000, excluded)
            .unwrap()
            .collect();
        assert_eq!(samples.len(), 10);
        assert!(samples.iter().all(|v| v % 2 == 1));
        assert!(samples.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn out_of_range_and_duplicate_exclusions_are_ignored() {
        let mut rng = RandomEngine::new(5);
        let excluded = vec![-100, 3, 3, 3, 42];
        // Only `3` counts, so 9 of 10 values remain eligible.
        let samples: Vec<i64> = RangeSampler::with_excluded(&mut rng, 9, 0, 10, excluded)
            .unwrap()
            .collect();
        assert_eq!(samples, vec![0, 1, 2, 4, 5, 6, 7, 8, 9]);
    }

    #[rstest]
    #[case(11, 0, 10, vec![])]
    #[case(1, 0, 0, vec![])]
    #[case(6, 0, 10, vec![0, 1, 2, 3, 4])]
    fn infeasible_requests_fail(
        #[case] count: usize,
        #[case] low: i64,
        #[case] high: i64,
        #[case] excluded: Vec<i64>,
    ) {
        let mut rng = RandomEngine::new(1);
        let result = RangeSampler::with_excluded(&mut rng, count, low, high, excluded);
        assert!(result.is_err());
    }

    #[test]
    fn inverted_bounds_fail() {
        let mut rng = RandomEngine::new(1);
        assert_eq!(
            RangeSampler::new(&mut rng, 0, 10, 0).unwrap_err(),
            InvalidRange {
                count: 0,
                low: 10,
                high: 0,
                excluded: 0,
            }
        );
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = RandomEngine::new(123);
        let mut b = RandomEngine::new(123);
        let left: Vec<i64> = RangeSampler::new(&mut a, 30, 0, 1_000).unwrap().collect();
        let right: Vec<i64> = RangeSampler::new(&mut b, 30, 0, 1_000).unwrap().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn one_shot_iteration() {
        let mut rng = RandomEngine::new(9);
        let mut sampler = RangeSampler::new(&mut rng, 4, 0, 100).unwrap();
        assert_eq!(sampler.len(), 4);

        let _ = sampler.by_ref().take(2).count();
        assert_eq!(sampler.len(), 2);

        let _ = sampler.by_ref().count();
        assert_eq!(sampler.next(), None);
        assert_eq!(sampler.next(), None);
    }

    #[test]
    fn sparse_draws_are_close_to_uniform() {
        // 3 of 10 takes the rejection path. Each value should be hit in
        // roughly 30% of trials; the tolerance is several standard
        // deviations wide.
        let mut rng = RandomEngine::new(99);
        let trials = 4_000i64;
        let mut hits = [0i64; 10];
        for _ in 0..trials {
            for value in RangeSampler::new(&mut rng, 3, 0, 10).unwrap() {
                hits[value as usize] += 1;
            }
        }
        let expected = trials * 3 / 10;
        for (value, &count) in hits.iter().enumerate() {
            assert!(
                (count - expected).abs() < expected / 10,
                "value {value} sampled {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn dense_draws_are_close_to_uniform() {
        // 7 of 10 takes the selection path.
        let mut rng = RandomEngine::new(7);
        let trials = 2_000i64;
        let mut hits = [0i64; 10];
        for _ in 0..trials {
            for value in RangeSampler::new(&mut rng, 7, 0, 10).unwrap() {
                hits[value as usize] += 1;
            }
        }
        let expected = trials * 7 / 10;
        for (value, &count) in hits.iter().enumerate() {
            assert!(
                (count - expected).abs() < expected / 10,
                "value {value} sampled {count} times, expected about {expected}"
            );
        }
    }
}
