use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::SortError;

/// How a partition step picks its pivot inside a closed range `[start, end]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotPolicy {
    First,
    Last,
    /// `start + (end - start) / 2`, biased low.
    Midpoint,
    Random,
    MedianOfThree,
}

pub const ALL_POLICIES: [PivotPolicy; 5] = [
    PivotPolicy::First,
    PivotPolicy::Last,
    PivotPolicy::Midpoint,
    PivotPolicy::Random,
    PivotPolicy::MedianOfThree,
];

impl PivotPolicy {
    pub fn name(self) -> &'static str {
        match self {
            PivotPolicy::First => "first",
            PivotPolicy::Last => "last",
            PivotPolicy::Midpoint => "midpoint",
            PivotPolicy::Random => "random",
            PivotPolicy::MedianOfThree => "median_of_three",
        }
    }
}

impl fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotPolicy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_POLICIES
            .iter()
            .copied()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnsupportedPivotPolicy(s.to_owned()))
    }
}

#[inline]
pub fn midpoint(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}

/// Picks a pivot index in `[start, end]` using the natural order of `T`.
///
/// Only reads `data`. Requires `start <= end`.
#[inline]
pub fn select_pivot_index<T: Ord, R: Rng + ?Sized>(
    data: &[T],
    start: usize,
    end: usize,
    policy: PivotPolicy,
    rng: &mut R,
) -> usize {
    select_pivot_index_by(data, start, end, policy, rng, &mut |a: &T, b: &T| a < b)
}

/// Same as [`select_pivot_index`] but orders elements with `is_less`, for
/// element types that are only ordered through an extracted key.
pub fn select_pivot_index_by<T, R, F>(
    data: &[T],
    start: usize,
    end: usize,
    policy: PivotPolicy,
    rng: &mut R,
    is_less: &mut F,
) -> usize
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(start <= end && end < data.len());
    match policy {
        PivotPolicy::First => start,
        PivotPolicy::Last => end,
        PivotPolicy::Midpoint => midpoint(start, end),
        PivotPolicy::Random => rng.random_range(start..=end),
        PivotPolicy::MedianOfThree => {
            median3_index(data, start, midpoint(start, end), end, is_less)
        }
    }
}

/// Index of the median of `data[a]`, `data[b]`, `data[c]`.
///
/// Sorts the three candidate indices with a stable three-element network, so
/// ties resolve towards the earlier candidate.
#[inline]
pub fn median3_index<T, F>(data: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut idx = [a, b, c];
    if is_less(&data[idx[1]], &data[idx[0]]) {
        idx.swap(0, 1);
    }
    if is_less(&data[idx[2]], &data[idx[1]]) {
        idx.swap(1, 2);
        if is_less(&data[idx[1]], &data[idx[0]]) {
            idx.swap(0, 1);
        }
    }
    idx[1]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn fixed_positions() {
        let data = [9, 8, 7, 6, 5, 4, 3];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_pivot_index(&data, 1, 5, PivotPolicy::First, &mut rng), 1);
        assert_eq!(select_pivot_index(&data, 1, 5, PivotPolicy::Last, &mut rng), 5);
        assert_eq!(select_pivot_index(&data, 1, 5, PivotPolicy::Midpoint, &mut rng), 3);
        // Even-sized range rounds down.
        assert_eq!(select_pivot_index(&data, 0, 3, PivotPolicy::Midpoint, &mut rng), 1);
        assert_eq!(select_pivot_index(&data, 4, 4, PivotPolicy::Midpoint, &mut rng), 4);
    }

    #[test]
    fn random_stays_in_range_and_is_seedable() {
        let data = [0u32; 64];
        let mut a = StdRng::seed_from_u64(0x5EED_2026);
        let mut b = StdRng::seed_from_u64(0x5EED_2026);
        for _ in 0..1000 {
            let x = select_pivot_index(&data, 10, 20, PivotPolicy::Random, &mut a);
            let y = select_pivot_index(&data, 10, 20, PivotPolicy::Random, &mut b);
            assert!((10..=20).contains(&x));
            assert_eq!(x, y);
        }
    }

    #[test]
    fn median_of_three_picks_middle_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let cases: [([i32; 5], usize); 6] = [
            ([1, 0, 2, 0, 3], 2),
            ([3, 0, 2, 0, 1], 2),
            ([2, 0, 1, 0, 3], 0),
            ([2, 0, 3, 0, 1], 0),
            ([1, 0, 3, 0, 2], 4),
            ([3, 0, 1, 0, 2], 4),
        ];
        for (data, expected) in cases {
            let before = data;
            assert_eq!(
                select_pivot_index(&data, 0, 4, PivotPolicy::MedianOfThree, &mut rng),
                expected,
                "data={data:?}",
            );
            assert_eq!(data, before);
        }
    }

    #[test]
    fn median_of_three_with_ties() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = [5, 5, 5];
        assert_eq!(select_pivot_index(&data, 0, 2, PivotPolicy::MedianOfThree, &mut rng), 1);
        let data = [4, 9, 4];
        let idx = select_pivot_index(&data, 0, 2, PivotPolicy::MedianOfThree, &mut rng);
        assert_eq!(data[idx], 4);
    }

    #[test]
    fn policy_names_round_trip() {
        for &policy in &ALL_POLICIES {
            assert_eq!(policy.name().parse::<PivotPolicy>(), Ok(policy));
            assert_eq!(policy.to_string(), policy.name());
        }
        assert_eq!("MEDIAN_OF_THREE".parse::<PivotPolicy>(), Ok(PivotPolicy::MedianOfThree));
    }

    #[test]
    fn unknown_policy_is_rejected_by_name() {
        let err = "ninther".parse::<PivotPolicy>().unwrap_err();
        assert_eq!(err, SortError::UnsupportedPivotPolicy("ninther".to_owned()));
        assert!(err.to_string().contains("ninther"));
    }
}
