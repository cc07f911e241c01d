mod algorithms;
mod driver;
mod error;
mod pivot;
mod traits;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use algorithms::common::{insertion_sort, is_sorted_non_decreasing};
pub use algorithms::dual_pivot::{DualPivot, dual_pivot_partition};
pub use algorithms::fat_pivot::{FatPivot, by_key, by_keys};
pub use algorithms::hoare::{Hoare, Sedgewick, hoare_partition};
pub use algorithms::hybrid::Hybrid;
pub use algorithms::lomuto::{
    Lomuto, MedianOfThree, RandomPivot, lomuto_partition, lomuto_partition_by,
    lomuto_partition_with_pivot,
};
pub use algorithms::three_way::{
    ThreeWay, three_way_boundary, three_way_partition, three_way_regions,
};
pub use driver::{
    quicksort, quicksort_iterative, quicksort_iterative_range, quicksort_iterative_with_ctx,
    quicksort_range, quicksort_with_ctx, sort, try_quicksort_iterative_range, try_quicksort_range,
};
pub use error::SortError;
pub use pivot::{
    ALL_POLICIES, PivotPolicy, median3_index, midpoint, select_pivot_index, select_pivot_index_by,
};
pub use traits::{PartitionStrategy, Split};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Scheme {
    Lomuto,
    Hoare,
    Sedgewick,
    ThreeWay,
    DualPivot,
    FatPivot,
    RandomPivot,
    MedianOfThree,
    Hybrid,
}

pub const ALL_SCHEMES: [Scheme; 9] = [
    Scheme::Lomuto,
    Scheme::Hoare,
    Scheme::Sedgewick,
    Scheme::ThreeWay,
    Scheme::DualPivot,
    Scheme::FatPivot,
    Scheme::RandomPivot,
    Scheme::MedianOfThree,
    Scheme::Hybrid,
];

pub fn all_schemes() -> &'static [Scheme] {
    &ALL_SCHEMES
}

pub fn scheme_name(scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Lomuto => "lomuto",
        Scheme::Hoare => "hoare",
        Scheme::Sedgewick => "sedgewick",
        Scheme::ThreeWay => "three_way",
        Scheme::DualPivot => "dual_pivot",
        Scheme::FatPivot => "fat_pivot",
        Scheme::RandomPivot => "random_pivot",
        Scheme::MedianOfThree => "median_of_three",
        Scheme::Hybrid => "hybrid",
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(scheme_name(*self))
    }
}

impl FromStr for Scheme {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_schemes()
            .iter()
            .copied()
            .find(|&scheme| scheme_name(scheme).eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnknownScheme(s.to_owned()))
    }
}

/// Every scheme in its default configuration.
impl<T: Ord> PartitionStrategy<T> for Scheme {
    fn name(&self) -> &'static str {
        scheme_name(*self)
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        match self {
            Scheme::Lomuto => Lomuto::default().partition(data, start, end, rng),
            Scheme::Hoare => Hoare::default().partition(data, start, end, rng),
            Scheme::Sedgewick => Sedgewick::default().partition(data, start, end, rng),
            Scheme::ThreeWay => ThreeWay::default().partition(data, start, end, rng),
            Scheme::DualPivot => DualPivot::default().partition(data, start, end, rng),
            Scheme::FatPivot => FatPivot::<fn(&T, &T) -> std::cmp::Ordering>::natural()
                .partition(data, start, end, rng),
            Scheme::RandomPivot => RandomPivot.partition(data, start, end, rng),
            Scheme::MedianOfThree => MedianOfThree.partition(data, start, end, rng),
            Scheme::Hybrid => Hybrid::default().partition(data, start, end, rng),
        }
    }

    fn partition_step<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        depth: usize,
        rng: &mut R,
    ) -> Split {
        match self {
            Scheme::Hybrid => Hybrid::default().partition_step(data, start, end, depth, rng),
            _ => Split::Boundary(self.partition(data, start, end, rng)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub depth_factor_num: usize,
    pub depth_factor_den: usize,
    pub rng_seed: u64,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 10,
    depth_factor_num: 5,
    depth_factor_den: 2,
    rng_seed: 0x5EED_2026,
};

/// Per-call state handed to the drivers. Holds the random source used by
/// random pivots, so tests and benches can pin it with a seed.
#[derive(Clone, Debug)]
pub struct SortContext<R = StdRng> {
    pub rng: R,
}

impl<R: Rng> SortContext<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl SortContext<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SortContext<StdRng> {
    fn default() -> Self {
        Self::seeded(TUNED_PARAMS.rng_seed)
    }
}
