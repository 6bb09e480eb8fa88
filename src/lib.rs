//! # Line Logger
//!
//! A small structured text logger that turns a severity level, a message and
//! a handful of key/value labels into one newline-terminated line:
//!
//! ```text
//! 2024-03-05 09:07:03 [INFO] server started port:8080
//! ```
//!
//! ## Key Features
//!
//! * Allocation-free steady state: lines are assembled in pooled, reusable
//!   buffers
//! * Timestamps and numbers are encoded byte by byte, without `fmt`
//! * One `write` per line, so concurrent lines never merge
//! * Safe to share across threads without external locking
//! * Logging calls never fail or panic; `try_*` variants report sink errors
//!
//! ## Main Components
//!
//! * `Logger`: facade with `info`/`debug`/`warn`/`error`
//! * `BufferPool`: thread-safe cache of `LineBuffer`s
//! * `serialize_line`: fixed-order line layout
//! * `efficient_clock`: wall-clock sources (`SystemClock`, `FixedClock`)
//! * `Sink`: output boundary (`FileSink`, `StdoutSink`, or your own)
//!
//! ## Quick Start
//!
//! ```
//! use line_logger::{labels, FixedClock, Logger, Sink, WallTime};
//! use parking_lot::Mutex;
//! use std::io;
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Memory(Mutex<Vec<u8>>);
//!
//! impl Sink for Memory {
//!     fn write(&self, bytes: &[u8]) -> io::Result<()> {
//!         self.0.lock().extend_from_slice(bytes);
//!         Ok(())
//!     }
//! }
//!
//! let out = Arc::new(Memory::default());
//! let logger = Logger::builder()
//!     .sink(out.clone())
//!     .clock(FixedClock::new(WallTime::new(2024, 3, 5, 9, 7, 3)))
//!     .build()
//!     .unwrap();
//!
//! logger.info("server started", &labels!["port" => "8080"]);
//! assert_eq!(
//!     &out.0.lock()[..],
//!     b"2024-03-05 09:07:03 [INFO] server started port:8080\n"
//! );
//! ```

mod date_encoder;

pub mod buffer_pool;
pub mod config;
pub mod efficient_clock;
pub mod error;
pub mod label;
pub mod level;
pub mod line_buffer;
pub mod logger;
pub mod serializer;
pub mod sink;

pub use buffer_pool::{BufferPool, PoolConfig, PoolStats, PooledBuffer};
pub use config::{LoggerBuilder, LoggerConfig, Output};
pub use efficient_clock::{Clock, FixedClock, SystemClock, WallTime};
pub use error::LoggerError;
pub use label::Label;
pub use level::{Level, ParseLevelError};
pub use line_buffer::LineBuffer;
pub use logger::Logger;
pub use serializer::serialize_line;
pub use sink::{FileSink, Sink, StdoutSink};
