//! `chunk_sort` is the leaf stage of the merge tree. Each worker receives one
//! disjoint chunk view of the primary buffer and sorts it in place with the
//! standard library's stable comparison sort, turning the chunk into a run.
//!
//! Chunks share no state, so sibling chunk sorts run concurrently without
//! any synchronization. A panicking comparison propagates out of the worker
//! pool rather than being suppressed.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * single-threaded per chunk
//!  * stable

#[inline]
pub fn sort_chunk<T>(chunk: &mut [T])
where
    T: Ord,
{
    // Stability here is required for the pipeline to be stable end-to-end:
    // the merge step only preserves an order that already exists.
    chunk.sort();
}

#[cfg(test)]
mod tests {
    use crate::steps::chunk_sort::sort_chunk;

    #[test]
    pub fn test_sorts_in_place() {
        let mut chunk = vec![5u32, 3, 4, 1, 2];
        sort_chunk(&mut chunk);
        assert_eq!(chunk, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    pub fn test_only_touches_own_range() {
        let mut data = vec![9u32, 8, 7, 3, 2, 1];
        sort_chunk(&mut data[..3]);
        assert_eq!(data, vec![7, 8, 9, 3, 2, 1]);
    }

    #[test]
    pub fn test_empty() {
        // This is expected not to panic
        sort_chunk::<usize>(&mut []);
    }
}
