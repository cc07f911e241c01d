use log::debug;
use rand::Rng;

use crate::algorithms::lomuto::Lomuto;
use crate::traits::{PartitionStrategy, Split};
use crate::{SortContext, SortError};

/// Sorts `data` ascending with Lomuto partitioning and the default context.
pub fn sort<T: Ord>(data: &mut [T]) {
    quicksort(data, &Lomuto::default());
}

pub fn quicksort<T, P: PartitionStrategy<T>>(data: &mut [T], strategy: &P) {
    let mut ctx: SortContext = SortContext::default();
    quicksort_with_ctx(data, strategy, &mut ctx);
}

pub fn quicksort_with_ctx<T, P, R>(data: &mut [T], strategy: &P, ctx: &mut SortContext<R>)
where
    P: PartitionStrategy<T>,
    R: Rng,
{
    if data.len() < 2 {
        return;
    }
    let end = data.len() - 1;
    quicksort_range(data, 0, end, strategy, ctx);
}

/// Sorts `data[start..=end]` recursively, leaving the rest untouched.
///
/// Ranges are not validated: an `end` past the slice panics on indexing.
/// Use [`try_quicksort_range`] for untrusted bounds.
pub fn quicksort_range<T, P, R>(
    data: &mut [T],
    start: usize,
    end: usize,
    strategy: &P,
    ctx: &mut SortContext<R>,
) where
    P: PartitionStrategy<T>,
    R: Rng,
{
    if start >= end {
        return;
    }
    debug!(
        "quicksort: strategy={} range=[{start}, {end}] len={}",
        strategy.name(),
        data.len()
    );
    quicksort_recursive(data, start, end, 0, strategy, &mut ctx.rng);
}

fn quicksort_recursive<T, P, R>(
    data: &mut [T],
    start: usize,
    end: usize,
    depth: usize,
    strategy: &P,
    rng: &mut R,
) where
    P: PartitionStrategy<T>,
    R: Rng + ?Sized,
{
    if start >= end {
        return;
    }
    let boundary = match strategy.partition_step(data, start, end, depth, rng) {
        Split::Boundary(boundary) => boundary,
        Split::Sorted => return,
    };
    debug_assert!((start..=end).contains(&boundary));

    if boundary > start {
        quicksort_recursive(data, start, boundary - 1, depth + 1, strategy, rng);
    }
    quicksort_recursive(data, boundary + 1, end, depth + 1, strategy, rng);
}

pub fn quicksort_iterative<T, P: PartitionStrategy<T>>(data: &mut [T], strategy: &P) {
    let mut ctx: SortContext = SortContext::default();
    quicksort_iterative_with_ctx(data, strategy, &mut ctx);
}

pub fn quicksort_iterative_with_ctx<T, P, R>(
    data: &mut [T],
    strategy: &P,
    ctx: &mut SortContext<R>,
) where
    P: PartitionStrategy<T>,
    R: Rng,
{
    if data.len() < 2 {
        return;
    }
    let end = data.len() - 1;
    quicksort_iterative_range(data, 0, end, strategy, ctx);
}

/// Explicit-stack variant of [`quicksort_range`]. Auxiliary memory stays
/// `O(log n)` whatever the pivots turn out to be.
pub fn quicksort_iterative_range<T, P, R>(
    data: &mut [T],
    start: usize,
    end: usize,
    strategy: &P,
    ctx: &mut SortContext<R>,
) where
    P: PartitionStrategy<T>,
    R: Rng,
{
    if start >= end {
        return;
    }
    let peak = quicksort_iterative_impl(data, start, end, strategy, &mut ctx.rng);
    debug!(
        "quicksort_iterative: strategy={} range=[{start}, {end}] peak_stack={peak}",
        strategy.name()
    );
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    start: usize,
    end: usize,
    depth: usize,
}

impl Frame {
    /// Frame over `len` elements from `start`, or `None` when there is
    /// nothing left to sort.
    fn sized(start: usize, len: usize, depth: usize) -> Option<Self> {
        (len >= 2).then(|| Self {
            start,
            end: start + len - 1,
            depth,
        })
    }
}

/// Returns the peak stack length.
fn quicksort_iterative_impl<T, P, R>(
    data: &mut [T],
    start: usize,
    end: usize,
    strategy: &P,
    rng: &mut R,
) -> usize
where
    P: PartitionStrategy<T>,
    R: Rng + ?Sized,
{
    let mut stack = vec![Frame {
        start,
        end,
        depth: 0,
    }];
    let mut peak = stack.len();

    while let Some(Frame { start, end, depth }) = stack.pop() {
        if start >= end {
            continue;
        }
        let boundary = match strategy.partition_step(data, start, end, depth, rng) {
            Split::Boundary(boundary) => boundary,
            Split::Sorted => continue,
        };
        debug_assert!((start..=end).contains(&boundary));

        let left = (start, boundary - start);
        let right = (boundary + 1, end - boundary);
        // Larger side first so the smaller one is popped next.
        let (larger, smaller) = if left.1 > right.1 {
            (left, right)
        } else {
            (right, left)
        };
        stack.extend(Frame::sized(larger.0, larger.1, depth + 1));
        stack.extend(Frame::sized(smaller.0, smaller.1, depth + 1));
        peak = peak.max(stack.len());
    }

    peak
}

fn check_range(len: usize, start: usize, end: usize) -> Result<(), SortError> {
    if start < end && end >= len {
        return Err(SortError::RangeOutOfBounds { start, end, len });
    }
    Ok(())
}

/// Bounds-checked [`quicksort_range`].
pub fn try_quicksort_range<T, P, R>(
    data: &mut [T],
    start: usize,
    end: usize,
    strategy: &P,
    ctx: &mut SortContext<R>,
) -> Result<(), SortError>
where
    P: PartitionStrategy<T>,
    R: Rng,
{
    check_range(data.len(), start, end)?;
    quicksort_range(data, start, end, strategy, ctx);
    Ok(())
}

/// Bounds-checked [`quicksort_iterative_range`].
pub fn try_quicksort_iterative_range<T, P, R>(
    data: &mut [T],
    start: usize,
    end: usize,
    strategy: &P,
    ctx: &mut SortContext<R>,
) -> Result<(), SortError>
where
    P: PartitionStrategy<T>,
    R: Rng,
{
    check_range(data.len(), start, end)?;
    quicksort_iterative_range(data, start, end, strategy, ctx);
    Ok(())
}
