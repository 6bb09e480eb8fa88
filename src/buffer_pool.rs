//! Cache of reusable [`LineBuffer`]s shared by concurrent logging calls.
//!
//! A buffer taken out of the pool belongs to exactly one caller until it is
//! handed back, so the pool's mutex only guards the idle list and is never
//! held while a line is serialized or written.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::line_buffer::{LineBuffer, DEFAULT_CAPACITY};

/// Buffers that grew past `max(buffer_capacity, DEFAULT_CAPACITY) *
/// OVERSIZE_FACTOR` are dropped on release instead of being kept around.
const OVERSIZE_FACTOR: usize = 64;

lazy_static! {
    /// Process-wide pool used by loggers built without an explicit one.
    static ref SHARED_POOL: Arc<BufferPool> = Arc::new(BufferPool::new());
}

/// Sizing knobs for a [`BufferPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Capacity of every freshly allocated buffer.
    pub buffer_capacity: usize,
    /// Upper bound on idle buffers kept for reuse. `None` keeps all of them.
    pub max_idle: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CAPACITY,
            max_idle: None,
        }
    }
}

/// Snapshot of pool counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers allocated over the pool's lifetime.
    pub created: usize,
    /// Buffers currently waiting for reuse.
    pub idle: usize,
}

/// Thread-safe cache of line buffers.
///
/// No ordering or identity guarantee is made about which idle buffer a
/// caller gets back.
///
/// # Examples
///
/// ```
/// # use line_logger::BufferPool;
/// let pool = BufferPool::new();
///
/// let mut buf = pool.acquire();
/// buf.append(b"first");
/// pool.release(buf);
///
/// // The same storage comes back, emptied.
/// let buf = pool.acquire();
/// assert!(buf.is_empty());
/// assert_eq!(pool.stats().created, 1);
/// ```
#[derive(Debug)]
pub struct BufferPool {
    idle: Mutex<Vec<LineBuffer>>,
    config: PoolConfig,
    created: AtomicUsize,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            config,
            created: AtomicUsize::new(0),
        }
    }

    /// The process-wide pool.
    pub fn shared() -> Arc<BufferPool> {
        Arc::clone(&SHARED_POOL)
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Takes an idle buffer, or allocates a new one when none is idle.
    /// Never fails.
    pub fn acquire(&self) -> LineBuffer {
        if let Some(buf) = self.idle.lock().pop() {
            return buf;
        }

        self.created.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(capacity = self.config.buffer_capacity, "allocating line buffer");
        LineBuffer::with_capacity(self.config.buffer_capacity)
    }

    /// Resets `buf` and keeps it for reuse.
    ///
    /// Call once per acquired buffer, after its contents have been written
    /// out. Oversize buffers and buffers beyond `max_idle` are dropped.
    pub fn release(&self, mut buf: LineBuffer) {
        buf.reset();

        let limit = self
            .config
            .buffer_capacity
            .max(DEFAULT_CAPACITY)
            .saturating_mul(OVERSIZE_FACTOR);
        if buf.capacity() > limit {
            tracing::trace!(capacity = buf.capacity(), "dropping oversize line buffer");
            return;
        }

        let mut idle = self.idle.lock();
        if self.config.max_idle.map_or(true, |max| idle.len() < max) {
            idle.push(buf);
        }
    }

    /// Acquires a buffer wrapped in a guard that releases it on drop.
    ///
    /// The buffer returns to the pool even if the caller bails out early or
    /// unwinds.
    pub fn checkout(&self) -> PooledBuffer<'_> {
        PooledBuffer {
            buf: self.acquire(),
            pool: self,
        }
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            idle: self.idle.lock().len(),
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A checked-out buffer that goes back to its pool when dropped.
pub struct PooledBuffer<'a> {
    buf: LineBuffer,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = LineBuffer;

    fn deref(&self) -> &LineBuffer {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut LineBuffer {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        // zero-capacity placeholder, does not allocate
        let buf = std::mem::replace(&mut self.buf, LineBuffer::with_capacity(0));
        self.pool.release(buf);
    }
}
