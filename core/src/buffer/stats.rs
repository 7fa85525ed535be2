use serde::Serialize;

/// Counter view of a [`BoundedBuffer`](super::BoundedBuffer), read under the same lock as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferStats {
    pub name: String,
    pub capacity: usize,
    /// Entries currently retained.
    pub len: usize,
    /// Adds since construction; not reset by drain/clear.
    pub total_added: u64,
    /// Entries pushed out by newer ones; drained or cleared entries are not counted.
    pub evicted: u64,
}

impl BufferStats {
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }
}
