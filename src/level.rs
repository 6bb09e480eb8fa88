use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Each level maps to a fixed marker token, spaces and brackets included,
/// that the serializer copies into the line as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Debug,
    Warn,
    Error,
}

impl Level {
    /// Every level, in the order the facade exposes them.
    pub const ALL: [Level; 4] = [Level::Info, Level::Debug, Level::Warn, Level::Error];

    /// Marker bytes written between the timestamp and the message.
    ///
    /// # Examples
    ///
    /// ```
    /// # use line_logger::Level;
    /// assert_eq!(Level::Warn.marker(), b" [WARN] ");
    /// ```
    #[inline]
    pub const fn marker(self) -> &'static [u8] {
        match self {
            Level::Info => b" [INFO] ",
            Level::Debug => b" [DEBUG] ",
            Level::Warn => b" [WARN] ",
            Level::Error => b" [ERROR] ",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a level name is not one of `info`, `debug`, `warn`, `error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log level {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(Level::Info.marker(), b" [INFO] ");
        assert_eq!(Level::Debug.marker(), b" [DEBUG] ");
        assert_eq!(Level::Warn.marker(), b" [WARN] ");
        assert_eq!(Level::Error.marker(), b" [ERROR] ");
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("Warn".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "trace".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("trace".to_owned()));
        assert_eq!(err.to_string(), "unrecognized log level \"trace\"");
        assert!("".parse::<Level>().is_err());
    }
}
