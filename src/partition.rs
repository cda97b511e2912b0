use crate::SortError;

/// Splits `len` elements into `workers` contiguous chunk lengths.
///
/// Every chunk is `len / workers` or one element longer; the remainder is
/// absorbed by the trailing chunks. The lengths always sum to `len`, so
/// feeding them to `arbitrary_chunks_mut` yields disjoint views covering the
/// whole slice with no gaps or overlaps.
///
/// Pure function of `(len, workers)`, no side effects.
pub fn chunk_lengths(len: usize, workers: usize) -> Result<Vec<usize>, SortError> {
    if workers == 0 {
        return Err(SortError::ZeroWorkers);
    }

    if workers > len {
        return Err(SortError::TooManyWorkers { workers, len });
    }

    let base = len / workers;
    let remainder = len % workers;
    let mut lengths = vec![base; workers];

    for l in lengths.iter_mut().skip(workers - remainder) {
        *l += 1;
    }

    Ok(lengths)
}
