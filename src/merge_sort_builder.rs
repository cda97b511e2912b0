use crate::sorter::Sorter;
use crate::SortError;

pub struct MergeSortBuilder<'a, T> {
    data: &'a mut [T],
    workers: usize,
}

impl<'a, T> MergeSortBuilder<'a, T>
where
    T: Ord + Copy + Send + Sync,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        // Default worker count, clamped to the input length so the default
        // configuration never trips the worker-count validation.
        let workers = rayon::current_num_threads().min(data.len()).max(1);

        Self { data, workers }
    }

    /// Sets the number of parallel workers. One chunk is sorted per worker,
    /// and the pool backing the merge tree is sized to this count for the
    /// lifetime of the call.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;

        self
    }

    pub fn sort(self) -> Result<(), SortError> {
        let sorter = Sorter::new(self.workers);

        sorter.sort(self.data)
    }
}
