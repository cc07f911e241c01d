use log::trace;
use rand::Rng;

use super::common;
use super::lomuto::{MedianOfThree, RandomPivot};
use crate::TUNED_PARAMS;
use crate::traits::{PartitionStrategy, Split};

/// Adaptive dispatch over the Lomuto family.
///
/// * ranges of at most `insertion_threshold` elements are insertion sorted;
/// * past `max_depth` partition steps the pivot turns random;
/// * everything else uses median-of-three.
///
/// The depth arrives as an argument from the driver, so one `Hybrid` can be
/// shared freely between sorts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hybrid {
    pub insertion_threshold: usize,
    pub max_depth: Option<usize>,
}

impl Hybrid {
    pub fn new(insertion_threshold: usize, max_depth: Option<usize>) -> Self {
        Self {
            insertion_threshold,
            max_depth,
        }
    }

    /// Depth limit of `floor(log2 len) * 5 / 2`, the usual introsort budget.
    pub fn for_len(len: usize) -> Self {
        Self::new(
            TUNED_PARAMS.insertion_threshold,
            Some(common::depth_limit(len)),
        )
    }

    fn is_small(&self, start: usize, end: usize) -> bool {
        end - start + 1 <= self.insertion_threshold
    }

    fn too_deep(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

impl Default for Hybrid {
    fn default() -> Self {
        Self::new(TUNED_PARAMS.insertion_threshold, None)
    }
}

/// Boundary for a range that is already sorted: the midpoint, moved right past
/// any copies of its value so everything after it is strictly greater.
fn sorted_boundary<T: Ord>(data: &[T], start: usize, end: usize) -> usize {
    let mut boundary = crate::pivot::midpoint(start, end);
    while boundary < end && data[boundary + 1] == data[boundary] {
        boundary += 1;
    }
    boundary
}

impl<T: Ord> PartitionStrategy<T> for Hybrid {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize {
        match self.partition_step(data, start, end, 0, rng) {
            Split::Boundary(boundary) => boundary,
            Split::Sorted if start >= end => start,
            Split::Sorted => sorted_boundary(data, start, end),
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
        if start >= end {
            return Split::Sorted;
        }
        if self.is_small(start, end) {
            common::insertion_sort(&mut data[start..=end]);
            debug_assert!(common::is_sorted_non_decreasing(&data[start..=end]));
            return Split::Sorted;
        }
        if self.too_deep(depth) {
            trace!(
                "hybrid: depth {depth} exceeds {:?} on [{start}, {end}], using a random pivot",
                self.max_depth
            );
            return Split::Boundary(RandomPivot.partition(data, start, end, rng));
        }
        Split::Boundary(MedianOfThree.partition(data, start, end, rng))
    }
}
