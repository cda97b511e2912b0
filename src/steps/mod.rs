pub mod chunk_sort;
pub mod merge;
