use std::fmt::{Display, Formatter, Result as FmtResult};
use time::{Date, OffsetDateTime, Time};

/// A calendar-date span.
///
/// Source pages omit the end of a range for single-day events; the
/// [`single`](DateSpan::single) constructor encodes that the end then equals
/// the start. A zero-length span is an explicit policy, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    pub start: Date,
    pub end: Date,
}
impl DateSpan {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }
    /// A span covering exactly one day.
    pub fn single(date: Date) -> Self {
        Self::new(date, date)
    }
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}
impl Display for DateSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_single_day() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} 〜 {}", self.start, self.end)
        }
    }
}
impl From<(Date, Date)> for DateSpan {
    fn from((start, end): (Date, Date)) -> Self {
        Self::new(start, end)
    }
}

/// A wall-clock time-of-day span.
///
/// All values carry the fixed JST identity declared by
/// [`JST`](crate::JST); the pages never state another zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSpan {
    pub start: Time,
    pub end: Time,
}
impl TimeSpan {
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }
    /// A zero-length span, used when the input gives no end time.
    pub fn single(time: Time) -> Self {
        Self::new(time, time)
    }
}
impl Display for TimeSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}～{}", self.start, self.end)
    }
}
impl From<(Time, Time)> for TimeSpan {
    fn from((start, end): (Time, Time)) -> Self {
        Self::new(start, end)
    }
}

/// A full datetime span produced by the lenient combined parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeSpan {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}
impl DateTimeSpan {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }
    /// The calendar dates covered by this span.
    pub fn dates(&self) -> DateSpan {
        DateSpan::new(self.start.date(), self.end.date())
    }
    /// The wall-clock times of day bounding this span.
    pub fn times(&self) -> TimeSpan {
        TimeSpan::new(self.start.time(), self.end.time())
    }
}
