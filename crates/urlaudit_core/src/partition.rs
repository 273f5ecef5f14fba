use std::num::NonZeroUsize;

use crate::WorkItem;

/// Number of chunks `len` items split into at `batch_size` items per chunk.
pub fn chunk_count(len: usize, batch_size: NonZeroUsize) -> usize {
    len.div_ceil(batch_size.get())
}

/// Split `items` into contiguous chunks of at most `batch_size`, keeping input order.
///
/// Never yields an empty chunk, so an empty input gives an empty vector.
pub fn partition(items: Vec<WorkItem>, batch_size: NonZeroUsize) -> Vec<Vec<WorkItem>> {
    let size = batch_size.get();
    let mut chunks = Vec::with_capacity(chunk_count(items.len(), batch_size));
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        chunks.push(iter.by_ref().take(size).collect());
    }
    chunks
}
