//! Owned, resizable byte storage with expand-to-fit growth.
//!
//! One `GrowableBuffer` backs each active reader line, each case-folded
//! shadow, and each dictionary line during build. Growth is geometric
//! (doubling) and the buffer never shrinks on its own; allocation failure
//! is surfaced as [`crate::error::Error::OutOfMemory`] rather than panicking,
//! matching spec.md §4.1's "signal `OutOfMemory` to the caller" contract.

use crate::error::{Error, Result};
use crate::core::view::ByteView;

/// Owned heap allocation of `capacity` bytes, tracking `length <= capacity`.
#[derive(Debug, Default)]
pub struct GrowableBuffer {
    data: Vec<u8>,
}

impl GrowableBuffer {
    #[inline]
    pub fn new() -> GrowableBuffer {
        GrowableBuffer { data: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<GrowableBuffer> {
        let mut data = Vec::new();
        try_reserve(&mut data, capacity)?;
        Ok(GrowableBuffer { data })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn view(&self) -> ByteView {
        ByteView::whole(&self.data)
    }

    /// Grows the buffer to exactly `min_len` bytes, reallocating (at least
    /// doubling current capacity) iff `min_len` exceeds current capacity.
    /// Existing bytes are preserved; newly exposed bytes are zeroed.
    pub fn expand_to(&mut self, min_len: usize) -> Result<()> {
        if min_len > self.data.capacity() {
            let target = min_len.max(self.data.capacity().saturating_mul(2)).max(64);
            try_reserve(&mut self.data, target - self.data.len())?;
        }
        if min_len > self.data.len() {
            self.data.resize(min_len, 0);
        } else {
            self.data.truncate(min_len);
        }
        Ok(())
    }

    /// Truncates the buffer to zero length without shrinking capacity, so
    /// subsequent reuse (e.g. for the next line) does not reallocate.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Copies `src` into this buffer, growing as needed.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<()> {
        self.expand_to(src.len())?;
        self.data[..src.len()].copy_from_slice(src);
        Ok(())
    }

    /// Appends `src` at the current end of the buffer, growing as needed.
    /// Used by the chunked reader to concatenate a multi-chunk line.
    pub fn append(&mut self, src: &[u8]) -> Result<()> {
        let start = self.data.len();
        self.expand_to(start + src.len())?;
        self.data[start..start + src.len()].copy_from_slice(src);
        Ok(())
    }

    /// Lowercases `self[..len]` into `dst`, growing `dst` to `len` first.
    /// Uses the process-wide [`crate::case_fold::LOWER`] table.
    pub fn to_lower(&self, len: usize, dst: &mut GrowableBuffer) -> Result<()> {
        let len = len.min(self.data.len());
        dst.expand_to(len)?;
        let table = &crate::case_fold::LOWER;
        for i in 0..len {
            dst.data[i] = table[self.data[i] as usize];
        }
        Ok(())
    }
}

fn try_reserve(data: &mut Vec<u8>, additional: usize) -> Result<()> {
    data.try_reserve(additional).map_err(|_| Error::OutOfMemory {
        context: "growable buffer",
    })
}
