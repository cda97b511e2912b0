use crate::SortError;

#[inline]
pub const fn cdiv(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

#[allow(clippy::uninit_vec)]
#[inline]
pub fn scratch_buffer<T>(len: usize) -> Result<Vec<T>, SortError>
where
    T: Copy,
{
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|source| SortError::ScratchAlloc { len, source })?;

    unsafe {
        // Safety: This leaves the vec with uninitialized data, however every
        // merge level writes the full [0, len) of its destination buffer
        // before that buffer is read, and T: Copy means nothing is dropped.
        // This avoids the cost of zeroing a buffer the size of the input.
        scratch.set_len(len);
    }

    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use crate::utils::{cdiv, scratch_buffer};

    #[test]
    pub fn test_cdiv() {
        assert_eq!(cdiv(8, 4), 2);
        assert_eq!(cdiv(9, 4), 3);
        assert_eq!(cdiv(1, 4), 1);
    }

    #[test]
    pub fn test_scratch_buffer_len() {
        let scratch: Vec<u64> = scratch_buffer(1024).unwrap();
        assert_eq!(scratch.len(), 1024);

        let scratch: Vec<u64> = scratch_buffer(0).unwrap();
        assert!(scratch.is_empty());
    }
}
