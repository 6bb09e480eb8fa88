use line_logger::line_buffer::DEFAULT_CAPACITY;
use line_logger::{BufferPool, PoolConfig, PoolStats};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_acquire_from_empty_pool() {
    let pool = BufferPool::new();
    let buf = pool.acquire();
    assert!(buf.is_empty());
    assert!(buf.capacity() >= DEFAULT_CAPACITY);
    assert_eq!(pool.stats(), PoolStats { created: 1, idle: 0 });
}

#[test]
fn test_release_then_reuse() {
    let pool = BufferPool::new();
    let mut buf = pool.acquire();
    buf.append(b"payload");
    let ptr = buf.bytes().as_ptr();
    pool.release(buf);

    let buf = pool.acquire();
    assert!(buf.is_empty(), "released buffer must come back reset");
    assert_eq!(buf.bytes().as_ptr(), ptr, "storage should be reused");
    assert_eq!(pool.stats().created, 1);
}

#[test]
fn test_repeated_use_never_leaks() {
    let pool = BufferPool::new();
    for i in 0..50 {
        let mut buf = pool.checkout();
        assert!(buf.is_empty(), "residual bytes on iteration {}", i);
        let body = "y".repeat(50 - i);
        buf.append(body.as_bytes());
        assert_eq!(buf.bytes(), body.as_bytes());
    }
    assert_eq!(pool.stats(), PoolStats { created: 1, idle: 1 });
}

#[test]
fn test_custom_capacity() {
    let pool = BufferPool::with_config(PoolConfig {
        buffer_capacity: 1024,
        max_idle: None,
    });
    assert!(pool.acquire().capacity() >= 1024);
    assert_eq!(pool.config().buffer_capacity, 1024);
}

#[test]
fn test_capacity_survives_release() {
    let pool = BufferPool::new();
    let mut buf = pool.acquire();
    buf.append(&[b'z'; DEFAULT_CAPACITY * 2]);
    let grown = buf.capacity();
    pool.release(buf);
    assert_eq!(pool.acquire().capacity(), grown);
}

#[test]
fn test_outstanding_buffers_are_distinct() {
    let pool = BufferPool::new();
    let a = pool.checkout();
    let b = pool.checkout();
    assert_ne!(a.bytes().as_ptr(), b.bytes().as_ptr());
    drop(a);
    drop(b);
    assert_eq!(pool.stats(), PoolStats { created: 2, idle: 2 });
}

#[test]
fn test_concurrent_acquire_release() {
    const THREADS: usize = 16;
    const ROUNDS: usize = 500;
    let pool = Arc::new(BufferPool::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                let tag = [b'a' + t as u8; 8];
                for _ in 0..ROUNDS {
                    let mut buf = pool.checkout();
                    assert!(buf.is_empty());
                    buf.append(&tag);
                    thread::yield_now();
                    // nobody else may have touched it
                    assert_eq!(buf.bytes(), &tag);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = pool.stats();
    assert!(stats.created <= THREADS);
    assert_eq!(stats.idle, stats.created);
}

#[test]
fn test_idle_buffers_are_unique() {
    let pool = BufferPool::new();
    let held: Vec<_> = (0..8).map(|_| pool.acquire()).collect();
    let ptrs: HashSet<_> = held.iter().map(|b| b.bytes().as_ptr() as usize).collect();
    assert_eq!(ptrs.len(), 8);
    for buf in held {
        pool.release(buf);
    }
    assert_eq!(pool.stats().idle, 8);
}
