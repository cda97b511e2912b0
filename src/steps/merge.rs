//! `merge` combines two adjacent sorted runs from a source buffer into one
//! run in a destination buffer. Two read cursors walk the runs, one write
//! cursor walks the destination; ties emit the left element first, which is
//! what keeps equal keys in their original relative order through every
//! level of the merge tree. Once a run is exhausted the remainder of the
//! other run is flushed verbatim.
//!
//! Each call writes exactly `left.len() + right.len()` elements and nothing
//! else, so sibling merges writing disjoint destination ranges are safe to
//! run concurrently.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded per run pair
//!  * stable
//!  * O(left + right) time, O(1) auxiliary space

pub fn merge_runs<T>(left: &[T], right: &[T], dst: &mut [T])
where
    T: Ord + Copy,
{
    debug_assert_eq!(left.len() + right.len(), dst.len());

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        // `<=` emits the left run first on ties, preserving input order.
        if left[i] <= right[j] {
            dst[k] = left[i];
            i += 1;
        } else {
            dst[k] = right[j];
            j += 1;
        }

        k += 1;
    }

    if i < left.len() {
        dst[k..].copy_from_slice(&left[i..]);
    } else {
        dst[k..].copy_from_slice(&right[j..]);
    }
}

/// Copies an unpaired run through to the destination buffer unchanged.
///
/// Used when a merge level has an odd number of runs, so the level still
/// writes the full destination range and the buffers can keep alternating.
#[inline]
pub fn carry_run<T>(run: &[T], dst: &mut [T])
where
    T: Copy,
{
    dst.copy_from_slice(run);
}
