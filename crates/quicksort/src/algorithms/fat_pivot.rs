use std::cmp::Ordering;

use rand::Rng;

use super::lomuto::lomuto_partition_by;
use crate::pivot::{PivotPolicy, select_pivot_index_by};
use crate::traits::PartitionStrategy;

/// Multi-key Lomuto partition. Elements are ordered by `compare` instead of
/// their own `Ord`, so records without a total order can still be sorted.
#[derive(Clone, Copy, Debug)]
pub struct FatPivot<C> {
    compare: C,
    pub policy: PivotPolicy,
}

impl<C> FatPivot<C> {
    pub fn new(compare: C) -> Self {
        Self {
            compare,
            policy: PivotPolicy::Midpoint,
        }
    }

    pub fn with_policy(mut self, policy: PivotPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<T: Ord> FatPivot<fn(&T, &T) -> Ordering> {
    /// Identity key.
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

/// Orders by `key`; elements with equal keys stay unordered relative to each other.
///
/// `key` runs on both sides of every comparison, the parked pivot included.
pub fn by_key<T, K: Ord>(key: impl Fn(&T) -> K) -> FatPivot<impl Fn(&T, &T) -> Ordering> {
    FatPivot::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
}

/// Orders by `key`, breaking ties with `secondary`. `secondary` only runs on ties.
pub fn by_keys<T, K: Ord, S: Ord>(
    key: impl Fn(&T) -> K,
    secondary: impl Fn(&T) -> S,
) -> FatPivot<impl Fn(&T, &T) -> Ordering> {
    FatPivot::new(move |a: &T, b: &T| {
        key(a)
            .cmp(&key(b))
            .then_with(|| secondary(a).cmp(&secondary(b)))
    })
}

impl<T, C> PartitionStrategy<T> for FatPivot<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn name(&self) -> &'static str {
        "fat_pivot"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        if start >= end {
            return start;
        }
        let mut is_less = |a: &T, b: &T| (self.compare)(a, b) == Ordering::Less;
        let pivot_index = select_pivot_index_by(data, start, end, self.policy, rng, &mut is_less);
        lomuto_partition_by(data, start, end, pivot_index, &mut is_less)
    }
}
