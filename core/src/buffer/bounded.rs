use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::BufferStats;
use crate::error::{BufferError, Result};

struct Entries<T> {
    ring: VecDeque<T>,
    total_added: u64,
    evicted: u64,
}

/// Fixed-capacity, insertion-ordered buffer that keeps the most recent entries.
///
/// Adding to a full buffer drops the oldest entry in the same critical section,
/// so no reader ever sees more than `capacity` entries. Readers get owned copies
/// and never hold the lock past the copy.
///
/// `retention` is carried as configuration only. Nothing in the buffer expires
/// entries by age; the reporter that owns the buffer decides what it means.
pub struct BoundedBuffer<T> {
    name: String,
    cap: usize,
    retention: Duration,
    inner: Mutex<Entries<T>>,
}

impl<T> BoundedBuffer<T> {
    pub fn new(name: impl Into<String>, capacity: usize, retention: Duration) -> Result<Self> {
        let name = name.into();
        if capacity == 0 {
            return Err(BufferError::InvalidArgument(format!(
                "capacity of buffer {name:?} must be positive, got 0"
            )));
        }

        tracing::debug!(
            name = %name,
            capacity,
            retention = ?retention,
            "bounded buffer created"
        );

        Ok(Self {
            name,
            cap: capacity,
            retention,
            inner: Mutex::new(Entries {
                ring: VecDeque::with_capacity(capacity),
                total_added: 0,
                evicted: 0,
            }),
        })
    }

    /// Same as [`BoundedBuffer::new`], wrapped for sharing between producer threads.
    pub fn shared(
        name: impl Into<String>,
        capacity: usize,
        retention: Duration,
    ) -> Result<Arc<Self>> {
        Self::new(name, capacity, retention).map(Arc::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Appends `value` as the newest entry, evicting the oldest one when full.
    pub fn add(&self, value: T) {
        let (oldest, evicted_total) = {
            let mut g = self.lock();
            let oldest = if g.ring.len() == self.cap {
                g.ring.pop_front()
            } else {
                None
            };
            g.ring.push_back(value);
            g.total_added += 1;
            if oldest.is_some() {
                g.evicted += 1;
            }
            (oldest, g.evicted)
        };

        // The evicted value is dropped here, outside the lock.
        if oldest.is_some() {
            tracing::trace!(name = %self.name, evicted_total, "evicted oldest entry");
        }
    }

    pub fn len(&self) -> usize {
        self.lock().ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes every retained entry, oldest first, leaving the buffer empty.
    pub fn drain(&self) -> Vec<T> {
        let taken = self.take_all();
        tracing::debug!(name = %self.name, drained = taken.len(), "buffer drained");
        taken
    }

    pub fn clear(&self) {
        let taken = self.take_all();
        tracing::debug!(name = %self.name, cleared = taken.len(), "buffer cleared");
    }

    pub fn stats(&self) -> BufferStats {
        let g = self.lock();
        BufferStats {
            name: self.name.clone(),
            capacity: self.cap,
            len: g.ring.len(),
            total_added: g.total_added,
            evicted: g.evicted,
        }
    }

    fn take_all(&self) -> Vec<T> {
        let mut g = self.lock();
        g.ring.drain(..).collect()
    }

    // A panic while the lock is held can only come from `T::clone` in `snapshot`,
    // which never leaves the ring half-updated, so the data is still valid.
    fn lock(&self) -> MutexGuard<'_, Entries<T>> {
        match self.inner.lock() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!(name = %self.name, "recovering poisoned buffer lock");
                self.inner.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

impl<T: Clone> BoundedBuffer<T> {
    /// Copies the current entries, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        let g = self.lock();
        let mut out = Vec::with_capacity(g.ring.len());
        out.extend(g.ring.iter().cloned());
        out
    }
}

impl<T> fmt::Debug for BoundedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("name", &self.name)
            .field("capacity", &self.cap)
            .field("retention", &self.retention)
            .finish_non_exhaustive()
    }
}
