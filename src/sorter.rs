use crate::partition::chunk_lengths;
use crate::steps::chunk_sort::sort_chunk;
use crate::steps::merge::{carry_run, merge_runs};
use crate::utils::*;
use crate::SortError;
use arbitrary_chunks::ArbitraryChunks;
use rayon::prelude::*;

/// Orchestrates the fork-join merge tree.
///
/// Level 0 sorts one chunk per worker on the primary buffer. Every level
/// after that merges adjacent run pairs into the other buffer, alternating
/// between the primary buffer and one scratch buffer so a level never
/// overwrites runs it is still reading. Each level runs as one batch of
/// tasks on a fixed-size worker pool; the batch completing is the barrier
/// before the next level starts.
pub struct Sorter {
    workers: usize,
}

impl Sorter {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn sort<T>(&self, data: &mut [T]) -> Result<(), SortError>
    where
        T: Ord + Copy + Send + Sync,
    {
        if self.workers == 0 {
            return Err(SortError::ZeroWorkers);
        }

        // By definition, this is already sorted
        if data.len() <= 1 {
            return Ok(());
        }

        if self.workers > data.len() {
            return Err(SortError::TooManyWorkers {
                workers: self.workers,
                len: data.len(),
            });
        }

        // A single worker has no merge tree, just the sequential stable sort.
        if self.workers == 1 {
            data.sort();
            return Ok(());
        }

        let runs = chunk_lengths(data.len(), self.workers)?;
        let mut scratch = scratch_buffer::<T>(data.len())?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        pool.install(|| self.run_levels(data, &mut scratch, runs));

        Ok(())
    }

    fn run_levels<T>(&self, data: &mut [T], scratch: &mut [T], mut runs: Vec<usize>)
    where
        T: Ord + Copy + Send + Sync,
    {
        log::debug!(
            "sorting {} elements as {} chunks across {} workers",
            data.len(),
            runs.len(),
            self.workers
        );

        data.arbitrary_chunks_mut(&runs)
            .par_bridge()
            .for_each(|chunk| sort_chunk(chunk));

        let mut level = 0;
        let mut invert = false;

        while runs.len() > 1 {
            level += 1;
            log::trace!("merge level {}: {} runs", level, runs.len());

            runs = if invert {
                merge_level(scratch, data, &runs)
            } else {
                merge_level(data, scratch, &runs)
            };

            invert = !invert;
        }

        if invert {
            // The final run landed in the scratch buffer; restore it to the
            // caller's slice in parallel tiles.
            log::trace!("copying result back from scratch buffer");

            let tile_size = cdiv(data.len(), self.workers);
            data.par_chunks_mut(tile_size)
                .zip(scratch.par_chunks(tile_size))
                .for_each(|(chunk, tmp_chunk)| {
                    chunk.copy_from_slice(tmp_chunk);
                });
        }
    }
}

/// Runs one level of the merge tree: adjacent run pairs from `src` are
/// merged into the same index ranges of `dst`, one task per pair. An
/// unpaired trailing run is carried over verbatim, so the level writes the
/// full `[0, len)` of `dst` and the buffers can keep alternating for any
/// worker count, not just powers of two.
///
/// Returns the run lengths the level produced.
fn merge_level<T>(src: &[T], dst: &mut [T], runs: &[usize]) -> Vec<usize>
where
    T: Ord + Copy + Send + Sync,
{
    let mut merged = Vec::with_capacity(cdiv(runs.len(), 2));
    let mut pairs = Vec::with_capacity(cdiv(runs.len(), 2));
    let mut start = 0;

    for pair in runs.chunks(2) {
        let left = pair[0];
        let right = if pair.len() == 2 { pair[1] } else { 0 };

        merged.push(left + right);
        pairs.push((start, left, right));
        start += left + right;
    }

    dst.arbitrary_chunks_mut(&merged)
        .zip(pairs.iter())
        .par_bridge()
        .for_each(|(out, &(start, left, right))| {
            if right == 0 {
                carry_run(&src[start..(start + left)], out);
            } else {
                merge_runs(
                    &src[start..(start + left)],
                    &src[(start + left)..(start + left + right)],
                    out,
                );
            }
        });

    merged
}
