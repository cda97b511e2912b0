use std::collections::TryReserveError;

/// Errors produced while configuring or running a parallel merge sort.
///
/// Configuration errors are detected before any task is dispatched, so the
/// input slice is untouched when one is returned. Later failures abort the
/// whole sort and leave the slice in an unspecified (possibly partially
/// reordered) state.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The worker count was zero.
    #[error("worker count must be at least 1")]
    ZeroWorkers,

    /// More workers were requested than there are elements to sort.
    #[error("worker count {workers} exceeds element count {len}")]
    TooManyWorkers { workers: usize, len: usize },

    /// The scratch buffer backing the merge levels could not be reserved.
    #[error("failed to reserve a scratch buffer of {len} elements")]
    ScratchAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// The fixed-size worker pool could not be started.
    #[error("failed to start the worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
