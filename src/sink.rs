use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::error::LoggerError;

/// Destination for finished log lines.
///
/// The logger calls `write` exactly once per line with the complete,
/// newline-terminated bytes. Implementations are shared by every thread that
/// logs through the same [`Logger`](crate::Logger), so they must be
/// `Send + Sync` and must not assume calls arrive in any particular order.
///
/// # Usage
///
/// ```
/// # use line_logger::Sink;
/// # use std::io;
/// # use parking_lot::Mutex;
/// // Collects every line in memory
/// struct Collect(Mutex<Vec<u8>>);
///
/// impl Sink for Collect {
///     fn write(&self, bytes: &[u8]) -> io::Result<()> {
///         self.0.lock().extend_from_slice(bytes);
///         Ok(())
///     }
/// }
/// ```
pub trait Sink: Send + Sync {
    /// Writes one complete line.
    ///
    /// The slice is only valid for the duration of the call; the buffer
    /// behind it is reused for the next line afterwards.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}

/// Appends lines to a file.
///
/// The file is opened in append mode, so each line lands at the end of the
/// file even when several processes share it.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// New files get mode `0o644` on Unix (before the umask).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LoggerError::EmptyPath);
        }

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let file = options.open(path).map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened log file");

        Ok(Self { file })
    }
}

impl Sink for FileSink {
    #[inline]
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (&self.file).write_all(bytes)
    }
}

/// Writes lines to the process's standard output.
///
/// Holds the stdout lock for the whole line so concurrent lines are not
/// interleaved.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    #[inline]
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }
}
