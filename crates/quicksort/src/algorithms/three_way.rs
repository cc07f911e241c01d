use std::cmp::Ordering;

use rand::Rng;

use crate::pivot::{PivotPolicy, select_pivot_index};
use crate::traits::PartitionStrategy;

/// Dutch national flag partition of `data[start..=end]`.
///
/// Returns `(lt, gt)` with `data[start..lt] < pivot`, `data[lt..=gt] == pivot`
/// and `data[gt + 1..=end] > pivot`. The equal region is never empty since it
/// holds the pivot itself. Requires `start < end`.
pub fn three_way_regions<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    start: usize,
    end: usize,
    policy: PivotPolicy,
    rng: &mut R,
) -> (usize, usize) {
    debug_assert!(start < end);
    let pivot_index = select_pivot_index(data, start, end, policy, rng);
    data.swap(pivot_index, start);

    // `data[lt]` is always a pivot-equal element, so it serves as the pivot
    // without cloning it out of the slice.
    let mut lt = start;
    let mut i = start + 1;
    let mut gt = end;
    while i <= gt {
        match data[i].cmp(&data[lt]) {
            Ordering::Less => {
                data.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                data.swap(i, gt);
                gt -= 1;
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

/// Collapses a three-region split into a single two-way boundary: the middle
/// of the equal region when it exists.
#[inline]
pub fn three_way_boundary(lt: usize, gt: usize) -> usize {
    if lt > gt {
        return lt.saturating_sub(1);
    }
    let middle = (lt + gt) / 2;
    if (lt..=gt).contains(&middle) { middle } else { lt }
}

pub fn three_way_partition<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    start: usize,
    end: usize,
    policy: PivotPolicy,
    rng: &mut R,
) -> usize {
    if start >= end {
        return start;
    }
    let (lt, gt) = three_way_regions(data, start, end, policy, rng);
    three_way_boundary(lt, gt)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThreeWay {
    pub policy: PivotPolicy,
}

impl ThreeWay {
    pub fn with_policy(policy: PivotPolicy) -> Self {
        Self { policy }
    }
}

impl Default for ThreeWay {
    fn default() -> Self {
        Self {
            policy: PivotPolicy::Midpoint,
        }
    }
}

impl<T: Ord> PartitionStrategy<T> for ThreeWay {
    fn name(&self) -> &'static str {
        "three_way"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        three_way_partition(data, start, end, self.policy, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::pivot::ALL_POLICIES;

    #[test]
    fn regions_are_ordered() {
        let mut rng = StdRng::seed_from_u64(0x3A1);
        for &policy in &ALL_POLICIES {
            for len in [2_usize, 3, 10, 64, 257] {
                let mut data: Vec<u8> = (0..len).map(|_| rng.random_range(0..5)).collect();
                let end = len - 1;
                let (lt, gt) = three_way_regions(&mut data, 0, end, policy, &mut rng);
                assert!(lt <= gt && gt <= end);
                let pivot = data[lt];
                assert!(data[..lt].iter().all(|&x| x < pivot));
                assert!(data[lt..=gt].iter().all(|&x| x == pivot));
                assert!(data[gt + 1..].iter().all(|&x| x > pivot));
            }
        }
    }

    #[test]
    fn boundary_is_inside_equal_region() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut data = vec![5, 2, 8, 2, 9, 1, 5, 5, 2];
        let b = three_way_partition(&mut data, 0, 8, PivotPolicy::Midpoint, &mut rng);
        // Midpoint pivot is the 9, which is the unique maximum.
        assert_eq!(b, 8);
        assert_eq!(data[8], 9);

        let mut data = vec![7; 5];
        assert_eq!(three_way_partition(&mut data, 0, 4, PivotPolicy::Midpoint, &mut rng), 2);
    }

    #[test]
    fn two_way_invariant_around_boundary() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut data = vec![1, 9, 3, 7, 5, 6, 2, 8, 4];
        let b = ThreeWay::default().partition(&mut data, 2, 6, &mut rng);
        assert_eq!(data[b], 5);
        assert!(data[2..b].iter().all(|&x| x <= 5));
        assert!(data[b + 1..=6].iter().all(|&x| x >= 5));
        assert_eq!((data[0], data[1], data[7], data[8]), (1, 9, 8, 4));
    }

    #[test]
    fn boundary_shim_cases() {
        assert_eq!(three_way_boundary(3, 7), 5);
        assert_eq!(three_way_boundary(4, 4), 4);
        assert_eq!(three_way_boundary(5, 4), 4);
        assert_eq!(three_way_boundary(0, 0), 0);
    }

    #[test]
    fn degenerate_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut data = vec![2, 1];
        assert_eq!(three_way_partition(&mut data, 1, 1, PivotPolicy::Midpoint, &mut rng), 1);
        assert_eq!(data, [2, 1]);
    }
}
