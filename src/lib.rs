//! # parmerge
//!
//! parmerge is a parallel fork-join merge sort for slices. The input is
//! split into one contiguous chunk per worker, the chunks are sorted
//! independently, and the sorted runs are then combined by a tree of
//! pairwise merges. A barrier separates every level of the tree, and the
//! merge destinations alternate between the caller's buffer and a single
//! scratch buffer the size of the input, so the only allocation beyond the
//! data itself is that one buffer.
//!
//! The sort is stable: elements that compare equal keep their original
//! relative order through every merge level.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.par_merge_sort(workers)`. The worker
//! count must be at least 1 and no larger than the number of elements.
//!
//! ```ignore
//! use parmerge::ParMergeSort;
//!
//! let mut data = vec![5, 3, 4, 1, 2, 0, 7, 6];
//! data.par_merge_sort(4)?;
//!
//! assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! For more control, use the builder:
//!
//! ```ignore
//! use parmerge::ParMergeSort;
//!
//! my_vec.merge_sort_builder().with_workers(8).sort()?;
//! ```
//!
//! Worker counts that do not divide the input length, or are not powers of
//! two, are supported: the remainder is spread over the trailing chunks and
//! an unpaired run is carried through to the next merge level unchanged.

mod error;
mod merge_sort_builder;
mod partition;
mod sorter;
mod steps;
mod utils;


pub use error::SortError;
pub use merge_sort_builder::MergeSortBuilder;

use sorter::Sorter;

pub trait ParMergeSort<T> {
    /// Sorts the data ascending, in place, using `workers` parallel workers
    /// in a strict fork-join pattern.
    ///
    /// On success the slice holds the same elements in non-descending,
    /// stable order. On a configuration error the slice is untouched; on a
    /// later failure its contents are unspecified.
    fn par_merge_sort(&mut self, workers: usize) -> Result<(), SortError>;

    /// Returns a builder over the data for configuring the sort before
    /// running it.
    fn merge_sort_builder(&mut self) -> MergeSortBuilder<'_, T>;
}

impl<T> ParMergeSort<T> for [T]
where
    T: Ord + Copy + Send + Sync,
{
    fn par_merge_sort(&mut self, workers: usize) -> Result<(), SortError> {
        Sorter::new(workers).sort(self)
    }

    fn merge_sort_builder(&mut self) -> MergeSortBuilder<'_, T> {
        MergeSortBuilder::new(self)
    }
}

impl<T> ParMergeSort<T> for Vec<T>
where
    T: Ord + Copy + Send + Sync,
{
    fn par_merge_sort(&mut self, workers: usize) -> Result<(), SortError> {
        Sorter::new(workers).sort(self)
    }

    fn merge_sort_builder(&mut self) -> MergeSortBuilder<'_, T> {
        MergeSortBuilder::new(self)
    }
}
