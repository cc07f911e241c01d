use rand::Rng;

use crate::pivot::{PivotPolicy, select_pivot_index};
use crate::traits::PartitionStrategy;

/// Hoare-style partition with the pivot parked at `start`.
///
/// Two cursors close in from both ends, swapping out-of-place pairs. The
/// pivot is then swapped into the last "not greater" slot, so on return `r`
/// `data[start..=r]` is `<= pivot`, `data[r] == pivot` and
/// `data[r + 1..=end]` is `> pivot`.
pub fn hoare_partition<T: Ord, R: Rng + ?Sized>(
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
    data.swap(pivot_index, start);

    // `left` never drops below `start + 1`, so `right` stops at `start` at the
    // latest and the pivot slot is never touched inside the loop.
    let mut left = start + 1;
    let mut right = end;
    loop {
        while left <= right && data[left] <= data[start] {
            left += 1;
        }
        while left <= right && data[right] > data[start] {
            right -= 1;
        }
        if left > right {
            break;
        }
        data.swap(left, right);
    }

    data.swap(start, right);
    right
}

/// Hoare's original scheme; first element as pivot by default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hoare {
    pub policy: PivotPolicy,
}

impl Hoare {
    pub fn with_policy(policy: PivotPolicy) -> Self {
        Self { policy }
    }
}

impl Default for Hoare {
    fn default() -> Self {
        Self {
            policy: PivotPolicy::First,
        }
    }
}

impl<T: Ord> PartitionStrategy<T> for Hoare {
    fn name(&self) -> &'static str {
        "hoare"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        hoare_partition(data, start, end, self.policy, rng)
    }
}

/// Sedgewick's formulation of the Hoare scan. Its loop invariants are the
/// ones [`hoare_partition`] already keeps, so it runs the same kernel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sedgewick {
    pub policy: PivotPolicy,
}

impl Sedgewick {
    pub fn with_policy(policy: PivotPolicy) -> Self {
        Self { policy }
    }
}

impl Default for Sedgewick {
    fn default() -> Self {
        Self {
            policy: PivotPolicy::First,
        }
    }
}

impl<T: Ord> PartitionStrategy<T> for Sedgewick {
    fn name(&self) -> &'static str {
        "sedgewick"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        hoare_partition(data, start, end, self.policy, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::pivot::ALL_POLICIES;

    fn assert_hoare_invariant(data: &[i32], start: usize, end: usize, r: usize) {
        assert!((start..=end).contains(&r));
        let pivot = data[r];
        assert!(data[start..=r].iter().all(|&x| x <= pivot), "{data:?} r={r}");
        assert!(data[r + 1..=end].iter().all(|&x| x > pivot), "{data:?} r={r}");
    }

    #[test]
    fn first_pivot_example() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut data = vec![64, 34, 25, 12, 22, 11, 90];
        let r = Hoare::default().partition(&mut data, 0, 6, &mut rng);
        assert_eq!(r, 5);
        assert_eq!(data, [11, 34, 25, 12, 22, 64, 90]);
    }

    #[test]
    fn pivot_is_minimum_or_maximum() {
        let mut rng = StdRng::seed_from_u64(0);

        let mut data = vec![1, 5, 4, 3, 2];
        let r = hoare_partition(&mut data, 0, 4, PivotPolicy::First, &mut rng);
        assert_eq!(r, 0);
        assert_hoare_invariant(&data, 0, 4, r);

        let mut data = vec![5, 1, 4, 3, 2];
        let r = hoare_partition(&mut data, 0, 4, PivotPolicy::First, &mut rng);
        assert_eq!(r, 4);
        assert_hoare_invariant(&data, 0, 4, r);
    }

    #[test]
    fn invariant_holds_for_every_policy() {
        let mut rng = StdRng::seed_from_u64(0x40A2E);
        for &policy in &ALL_POLICIES {
            for len in [2_usize, 3, 9, 33, 100] {
                let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(0..12)).collect();
                let end = len - 1;
                let r = hoare_partition(&mut data, 0, end, policy, &mut rng);
                assert_hoare_invariant(&data, 0, end, r);

                let s = Sedgewick::with_policy(policy).partition(&mut data, 0, end, &mut rng);
                assert_hoare_invariant(&data, 0, end, s);
            }
        }
    }

    #[test]
    fn all_equal_collapses_to_the_end() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut data = vec![7; 6];
        assert_eq!(hoare_partition(&mut data, 0, 5, PivotPolicy::First, &mut rng), 5);
    }
}
