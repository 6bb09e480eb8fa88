use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::buffer_pool::{BufferPool, PoolConfig};
use crate::efficient_clock::{Clock, SystemClock};
use crate::error::LoggerError;
use crate::logger::Logger;
use crate::sink::{FileSink, Sink, StdoutSink};

/// Where a logger writes its lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Stdout,
    File(PathBuf),
}

/// Plain-data description of a logger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggerConfig {
    pub output: Output,
    /// Sizing of the logger's private pool. Ignored unless `private_pool`
    /// is set.
    pub pool: PoolConfig,
    /// Build a private pool from `pool` instead of sharing the process-wide
    /// one.
    pub private_pool: bool,
}

/// Step-by-step construction of a [`Logger`].
///
/// Without further calls the logger writes to stdout, stamps lines with the
/// local time and shares the process-wide buffer pool.
///
/// # Examples
///
/// ```
/// # use line_logger::{Logger, FixedClock, WallTime};
/// let dir = tempfile::tempdir().unwrap();
/// let logger = Logger::builder()
///     .path(dir.path().join("app.log"))
///     .clock(FixedClock::new(WallTime::new(2024, 3, 5, 9, 7, 3)))
///     .build()
///     .unwrap();
/// logger.info("ready", &[]);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn Sink>>,
    clock: Option<Box<dyn Clock>>,
    pool: Option<Arc<BufferPool>>,
}

impl LoggerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            clock: None,
            pool: None,
        }
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Appends to the file at `path`. An empty path fails at `build`.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.output = Output::File(path.as_ref().to_path_buf());
        self.sink = None;
        self
    }

    pub fn stdout(mut self) -> Self {
        self.config.output = Output::Stdout;
        self.sink = None;
        self
    }

    /// Writes to a caller-provided sink instead of stdout or a file.
    ///
    /// An empty path set through [`path`](Self::path) is still rejected.
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Draws buffers from `pool`, which may be shared with other loggers.
    pub fn pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = Some(pool);
        self.config.private_pool = false;
        self
    }

    /// Gives the logger a private pool built from `config`.
    pub fn pool_config(mut self, config: PoolConfig) -> Self {
        self.config.pool = config;
        self.pool = None;
        self.config.private_pool = true;
        self
    }

    /// Opens the output and assembles the logger.
    pub fn build(self) -> Result<Logger, LoggerError> {
        if let Output::File(path) = &self.config.output {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::EmptyPath);
            }
        }

        let sink: Box<dyn Sink> = match self.sink {
            Some(sink) => sink,
            None => match &self.config.output {
                Output::Stdout => Box::new(StdoutSink),
                Output::File(path) => Box::new(FileSink::open(path)?),
            },
        };

        let pool = match self.pool {
            Some(pool) => pool,
            None if self.config.private_pool => Arc::new(BufferPool::with_config(self.config.pool)),
            None => BufferPool::shared(),
        };

        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));

        Ok(Logger::from_parts(sink, clock, pool))
    }
}
