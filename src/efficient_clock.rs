//! Wall-clock sources for log line timestamps.
//!
//! The serializer only ever needs six small integers, so a clock hands back
//! a [`WallTime`] with the fields already split out. Reading the calendar
//! fields from `chrono` never goes through its formatter; encoding them as
//! text is left to the date encoder.

use chrono::{Datelike, Local, Timelike};

/// Calendar fields of one instant in local time.
///
/// `month` and `day` are 1-based, the time fields 0-based, matching what a
/// human reads on a wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallTime {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallTime {
    /// Builds a `WallTime` from its six fields.
    ///
    /// # Examples
    ///
    /// ```
    /// # use line_logger::WallTime;
    /// let t = WallTime::new(2024, 3, 5, 9, 7, 3);
    /// assert_eq!(t.month, 3);
    /// ```
    pub const fn new(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Splits any `chrono` date-time into wall-clock fields.
    ///
    /// Years before the common era are clamped to 0.
    pub fn from_chrono<T: Datelike + Timelike>(t: &T) -> Self {
        Self {
            year: u32::try_from(t.year()).unwrap_or(0),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

/// Source of the current wall-clock time.
///
/// Shared by every concurrent logging call, hence `Send + Sync`.
pub trait Clock: Send + Sync {
    fn now(&self) -> WallTime;
}

/// Reads the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> WallTime {
        WallTime::from_chrono(&Local::now())
    }
}

/// Always reports the same instant.
///
/// Makes output reproducible in tests and golden files.
///
/// # Examples
///
/// ```
/// # use line_logger::{Clock, FixedClock, WallTime};
/// let clock = FixedClock::new(WallTime::new(2024, 3, 5, 9, 7, 3));
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: WallTime,
}

impl FixedClock {
    pub const fn new(at: WallTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> WallTime {
        self.at
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> WallTime {
        (**self).now()
    }
}
