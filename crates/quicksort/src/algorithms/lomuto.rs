use rand::Rng;

use crate::pivot::{PivotPolicy, select_pivot_index};
use crate::traits::PartitionStrategy;

/// Lomuto partition around the element currently at `pivot_index`.
///
/// On return `w`: `data[start..w]` is strictly less than the pivot,
/// `data[w]` is the pivot and `data[w + 1..=end]` is not less than it.
#[inline]
pub fn lomuto_partition_with_pivot<T: Ord>(
    data: &mut [T],
    start: usize,
    end: usize,
    pivot_index: usize,
) -> usize {
    lomuto_partition_by(data, start, end, pivot_index, &mut |a: &T, b: &T| a < b)
}

/// The Lomuto kernel with an explicit strict order. Shared by every
/// Lomuto-style strategy, including the keyed one.
pub fn lomuto_partition_by<T, F>(
    data: &mut [T],
    start: usize,
    end: usize,
    pivot_index: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if start >= end {
        return start;
    }
    debug_assert!((start..=end).contains(&pivot_index));

    // The pivot parks at `end` and never moves during the scan.
    data.swap(pivot_index, end);
    let mut w = start;
    for idx in start..end {
        if is_less(&data[idx], &data[end]) {
            data.swap(idx, w);
            w += 1;
        }
    }
    data.swap(end, w);
    w
}

pub fn lomuto_partition<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    start: usize,
    end: usize,
    policy: PivotPolicy,
    rng: &mut R,
) -> usize {
    if start >= end {
        return start;
    }
    let pivot_index = select_pivot_index(data, start, end, policy, rng);
    lomuto_partition_with_pivot(data, start, end, pivot_index)
}

/// Lomuto's scheme. Midpoint pivot unless configured otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lomuto {
    pub policy: PivotPolicy,
}

impl Lomuto {
    pub fn with_policy(policy: PivotPolicy) -> Self {
        Self { policy }
    }
}

impl Default for Lomuto {
    fn default() -> Self {
        Self {
            policy: PivotPolicy::Midpoint,
        }
    }
}

impl<T: Ord> PartitionStrategy<T> for Lomuto {
    fn name(&self) -> &'static str {
        "lomuto"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        lomuto_partition(data, start, end, self.policy, rng)
    }
}

/// Lomuto with a uniformly random pivot drawn from the caller's generator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RandomPivot;

impl<T: Ord> PartitionStrategy<T> for RandomPivot {
    fn name(&self) -> &'static str {
        "random_pivot"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        lomuto_partition(data, start, end, PivotPolicy::Random, rng)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MedianOfThree;

impl<T: Ord> PartitionStrategy<T> for MedianOfThree {
    fn name(&self) -> &'static str {
        "median_of_three"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        lomuto_partition(data, start, end, PivotPolicy::MedianOfThree, rng)
    }
}
