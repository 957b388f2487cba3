//! Extensible-output reader.
//!
//! Holds the finalized root node and expands it into as many bytes as
//! the caller wants by re-running the compression function with an
//! advancing output-block counter. See [`crate::kernels::portable::RootNode`].

use crate::kernels::portable::RootNode;

/// Reads output bytes from a finalized [`crate::Hasher`].
///
/// Reading is stateful and resumable: successive [`fill`](Self::fill)
/// calls continue exactly where the previous one left off, and
/// [`set_position`](Self::set_position) seeks to an arbitrary byte offset
/// without recomputing anything before it (each 64-byte block is
/// independent given the root node).
#[derive(Clone)]
pub struct OutputReader {
    root: RootNode,
    /// Byte offset of the next byte `fill` will emit.
    position: u64,
}

impl OutputReader {
    pub(crate) const fn new(root: RootNode) -> Self {
        Self { root, position: 0 }
    }

    /// Fill `dst` with output bytes, advancing the read position by
    /// `dst.len()`.
    pub fn fill(&mut self, dst: &mut [u8]) {
        let mut written = 0;
        while written < dst.len() {
            let block_index = self.position / 64;
            let offset_in_block = (self.position % 64) as usize;
            let block = self.root.output_block(block_index);
            let available = 64 - offset_in_block;
            let take = available.min(dst.len() - written);
            dst[written..written + take]
                .copy_from_slice(&block[offset_in_block..offset_in_block + take]);
            written += take;
            self.position += take as u64;
        }
    }

    /// Read exactly 32 bytes — the conventional default digest length.
    #[must_use]
    pub fn read32(&self) -> [u8; 32] {
        self.root.first_32_bytes()
    }

    /// Seek the read position to an arbitrary output-byte offset.
    pub const fn set_position(&mut self, offset: u64) {
        self.position = offset;
    }

    /// Current read position.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }
}
