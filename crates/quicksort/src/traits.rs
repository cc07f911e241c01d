use rand::Rng;

/// Outcome of one driver step over a closed range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Split {
    /// `[start, boundary]` holds the "not greater" side and
    /// `[boundary + 1, end]` the "greater" side.
    Boundary(usize),
    /// The strategy already sorted the whole range.
    Sorted,
}

/// One partitioning scheme. Strategies hold configuration only; nothing is
/// mutated across calls, so one value can drive any number of sorts.
pub trait PartitionStrategy<T> {
    fn name(&self) -> &'static str;

    /// Rearranges `data[start..=end]` in place and returns the boundary index.
    ///
    /// Ranges with fewer than two elements are left untouched and yield `start`.
    fn partition<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> usize;

    /// Driver hook. `depth` is the number of partition steps above this range.
    fn partition_step<R: Rng + ?Sized>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        _depth: usize,
        rng: &mut R,
    ) -> Split {
        Split::Boundary(self.partition(data, start, end, rng))
    }
}
