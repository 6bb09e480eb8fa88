use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::buffer_pool::BufferPool;
use crate::config::LoggerBuilder;
use crate::efficient_clock::Clock;
use crate::error::LoggerError;
use crate::label::Label;
use crate::level::Level;
use crate::serializer::serialize_line;
use crate::sink::Sink;

/// Line-oriented text logger.
///
/// Every call follows the same path:
///
/// 1. Check a buffer out of the pool
/// 2. Serialize timestamp, level marker, message and labels into it
/// 3. Hand the bytes to the sink in a single `write`
/// 4. Reset the buffer and return it to the pool, whether or not the write
///    succeeded
///
/// # Thread Safety
///
/// `Logger` is `Send + Sync`. All per-call state lives in the checked-out
/// buffer, so one instance can be shared (e.g. behind an `Arc`) by any
/// number of threads without external locking. Lines from concurrent calls
/// are never merged, but their relative order is unspecified.
///
/// # Errors
///
/// `info`, `debug`, `warn` and `error` never report failure: a line the sink
/// refuses is dropped. Callers that need to know use the `try_*` variants.
///
/// # Examples
///
/// ```
/// # use line_logger::{labels, Logger};
/// let logger = Logger::new(None::<&str>).unwrap();
/// logger.info("server started", &labels!["port" => "8080"]);
/// logger.warn("disk low", &[]);
/// ```
pub struct Logger {
    sink: Box<dyn Sink>,
    clock: Box<dyn Clock>,
    pool: Arc<BufferPool>,
}

impl Logger {
    /// Creates a logger writing to `path`, or to stdout when `path` is `None`.
    ///
    /// # Errors
    ///
    /// * [`LoggerError::EmptyPath`] if `path` is `Some("")`; nothing is opened
    /// * [`LoggerError::Open`] if the file cannot be opened for appending
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self, LoggerError> {
        match path {
            Some(path) => Self::builder().path(path).build(),
            None => Self::builder().stdout().build(),
        }
    }

    /// Logger writing to stdout with the system clock and the shared pool.
    pub fn stdout() -> Self {
        Self::from_parts(
            Box::new(crate::sink::StdoutSink),
            Box::new(crate::efficient_clock::SystemClock),
            BufferPool::shared(),
        )
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(sink: Box<dyn Sink>, clock: Box<dyn Clock>, pool: Arc<BufferPool>) -> Self {
        Self { sink, clock, pool }
    }

    /// The pool this logger draws buffers from.
    pub fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    #[inline]
    pub fn info(&self, msg: &str, labels: &[Label<'_>]) {
        self.log(Level::Info, msg, labels);
    }

    #[inline]
    pub fn debug(&self, msg: &str, labels: &[Label<'_>]) {
        self.log(Level::Debug, msg, labels);
    }

    #[inline]
    pub fn warn(&self, msg: &str, labels: &[Label<'_>]) {
        self.log(Level::Warn, msg, labels);
    }

    #[inline]
    pub fn error(&self, msg: &str, labels: &[Label<'_>]) {
        self.log(Level::Error, msg, labels);
    }

    /// Writes one line at `level`, dropping it if the sink fails.
    pub fn log(&self, level: Level, msg: &str, labels: &[Label<'_>]) {
        self.emit_silent(Some(level), msg, labels);
    }

    /// Writes one line whose level is given by name.
    ///
    /// A name that is not a known level still produces a line, just without
    /// a level marker.
    pub fn log_named(&self, level: &str, msg: &str, labels: &[Label<'_>]) {
        self.emit_silent(level.parse().ok(), msg, labels);
    }

    #[inline]
    pub fn try_info(&self, msg: &str, labels: &[Label<'_>]) -> io::Result<()> {
        self.try_log(Level::Info, msg, labels)
    }

    #[inline]
    pub fn try_debug(&self, msg: &str, labels: &[Label<'_>]) -> io::Result<()> {
        self.try_log(Level::Debug, msg, labels)
    }

    #[inline]
    pub fn try_warn(&self, msg: &str, labels: &[Label<'_>]) -> io::Result<()> {
        self.try_log(Level::Warn, msg, labels)
    }

    #[inline]
    pub fn try_error(&self, msg: &str, labels: &[Label<'_>]) -> io::Result<()> {
        self.try_log(Level::Error, msg, labels)
    }

    /// Writes one line at `level` and reports a sink failure.
    pub fn try_log(&self, level: Level, msg: &str, labels: &[Label<'_>]) -> io::Result<()> {
        self.emit(Some(level), msg, labels)
    }

    fn emit_silent(&self, level: Option<Level>, msg: &str, labels: &[Label<'_>]) {
        if let Err(err) = self.emit(level, msg, labels) {
            tracing::trace!(error = %err, "dropped log line");
        }
    }

    fn emit(&self, level: Option<Level>, msg: &str, labels: &[Label<'_>]) -> io::Result<()> {
        let now = self.clock.now();
        // released back to the pool on every exit path
        let mut buf = self.pool.checkout();
        serialize_line(&mut buf, level, &now, msg, labels);
        self.sink.write(buf.bytes())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("pool", &self.pool.stats()).finish_non_exhaustive()
    }
}
