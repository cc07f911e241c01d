use rand::Rng;

use crate::pivot::{PivotPolicy, select_pivot_index};
use crate::traits::PartitionStrategy;

/// Moves the elements chosen by the two policies to `start` and `end`, then
/// orders them so that `data[start] <= data[end]`.
fn place_pivots<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    start: usize,
    end: usize,
    first: PivotPolicy,
    second: PivotPolicy,
    rng: &mut R,
) {
    let p = select_pivot_index(data, start, end, first, rng);
    let mut q = select_pivot_index(data, start, end, second, rng);
    if q == p {
        q = if p == end { start } else { end };
    }

    data.swap(start, p);
    // The element that sat at `start` now lives at `p`.
    if q == start {
        q = p;
    }
    data.swap(end, q);

    if data[start] > data[end] {
        data.swap(start, end);
    }
}

/// Yaroslavskiy-style dual-pivot partition.
///
/// After the scan the range reads `[< p1] p1 [p1..=p2] p2 [> p2]`. The index of
/// `p1` is returned so a two-way driver can recurse on both sides of it.
pub fn dual_pivot_partition<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    start: usize,
    end: usize,
    first: PivotPolicy,
    second: PivotPolicy,
    rng: &mut R,
) -> usize {
    if start >= end {
        return start;
    }
    place_pivots(data, start, end, first, second, rng);

    let mut less = start + 1;
    let mut great = end - 1;
    let mut k = less;
    while k <= great {
        if data[k] < data[start] {
            data.swap(k, less);
            less += 1;
            k += 1;
        } else if data[k] > data[end] {
            data.swap(k, great);
            // `great >= k > start`, so this cannot wrap.
            great -= 1;
        } else {
            k += 1;
        }
    }

    let low = less - 1;
    let high = great + 1;
    data.swap(start, low);
    data.swap(end, high);
    low
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DualPivot {
    pub first: PivotPolicy,
    pub second: PivotPolicy,
}

impl DualPivot {
    pub fn with_policies(first: PivotPolicy, second: PivotPolicy) -> Self {
        Self { first, second }
    }
}

impl Default for DualPivot {
    fn default() -> Self {
        Self {
            first: PivotPolicy::First,
            second: PivotPolicy::Last,
        }
    }
}

impl<T: Ord> PartitionStrategy<T> for DualPivot {
    fn name(&self) -> &'static str {
        "dual_pivot"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        dual_pivot_partition(data, start, end, self.first, self.second, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::pivot::ALL_POLICIES;

    #[test]
    fn three_regions_around_both_pivots() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut data = vec![30, 80, 10, 50, 90, 20, 60, 40, 70];
        let low = dual_pivot_partition(
            &mut data,
            0,
            8,
            PivotPolicy::First,
            PivotPolicy::Last,
            &mut rng,
        );
        assert_eq!(data[low], 30);
        let high = data.iter().position(|&x| x == 70).unwrap();
        assert!(data[..low].iter().all(|&x| x < 30));
        assert!(data[low + 1..high].iter().all(|&x| (30..=70).contains(&x)));
        assert!(data[high + 1..].iter().all(|&x| x > 70));
    }

    #[test]
    fn swaps_pivots_when_out_of_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut data = vec![9, 1];
        let b = DualPivot::default().partition(&mut data, 0, 1, &mut rng);
        assert_eq!(b, 0);
        assert_eq!(data, [1, 9]);
    }

    #[test]
    fn left_of_boundary_is_smaller_right_is_not() {
        let mut rng = StdRng::seed_from_u64(0xD0A1);
        for &first in &ALL_POLICIES {
            for &second in &ALL_POLICIES {
                for len in [2_usize, 3, 4, 11, 50] {
                    let original: Vec<i16> = (0..len).map(|_| rng.random_range(-8..8)).collect();
                    let mut data = original.clone();
                    let end = len - 1;
                    let b = dual_pivot_partition(&mut data, 0, end, first, second, &mut rng);
                    let pivot = data[b];
                    assert!(data[..b].iter().all(|&x| x < pivot), "{first}/{second} {data:?}");
                    assert!(data[b + 1..].iter().all(|&x| x >= pivot), "{first}/{second} {data:?}");

                    let mut a = data;
                    let mut e = original;
                    a.sort_unstable();
                    e.sort_unstable();
                    assert_eq!(a, e);
                }
            }
        }
    }

    #[test]
    fn degenerate_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut data = vec![4];
        assert_eq!(DualPivot::default().partition(&mut data, 0, 0, &mut rng), 0);
    }
}
