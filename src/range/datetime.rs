//! Date-time ranges

use log::debug;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use super::{OrderedRange, ordered};
use crate::error::{Error, Operation, Result};

/// An immutable range of points in time
///
/// Bounds and values compare chronologically, regardless of UTC offset.
/// Every `OffsetDateTime` is in the domain, so `contains` and `clamp` never
/// fail for this range.
///
/// # Example
///
/// ```
/// use rangekit::{Containment, DateTimeRange, OrderedRange};
/// use time::macros::datetime;
///
/// let range = DateTimeRange::new(datetime!(2015-07-18 0:00 UTC), datetime!(2000-01-01 0:00 UTC));
/// let (clamped, containment) = range.clamp(&datetime!(1979-07-02 0:00 UTC))?;
///
/// assert_eq!(clamped, datetime!(2000-01-01 0:00 UTC));
/// assert_eq!(containment, Containment::Before);
/// # Ok::<(), rangekit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeRange {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl DateTimeRange {
    /// Create a range from two points in time, in any order
    #[must_use]
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        let (start, end) = ordered(start, end);
        debug!("Created date-time range [{start}, {end}]");
        Self { start, end }
    }

    /// Create a range from two strings
    ///
    /// Each bound is either an RFC 3339 date-time
    /// (`1969-07-20T20:17:40Z`) or a plain `YYYY-MM-DD` date, taken as
    /// midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a bound is neither.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_datetime(start)?, parse_datetime(end)?))
    }
}

/// Parse an RFC 3339 date-time or a plain date at midnight UTC
pub(crate) fn parse_datetime(input: &str) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(input, &Rfc3339).or_else(|source| {
        Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(|date| date.midnight().assume_utc())
            .map_err(|_| Error::Parse {
                input: input.to_string(),
                source,
            })
    })
}

impl OrderedRange for DateTimeRange {
    type Value = OffsetDateTime;
    type Input = OffsetDateTime;

    fn start(&self) -> &OffsetDateTime {
        &self.start
    }

    fn end(&self) -> &OffsetDateTime {
        &self.end
    }

    fn resolve(&self, input: &OffsetDateTime, _operation: Operation) -> Result<OffsetDateTime> {
        Ok(*input)
    }
}

impl fmt::Display for DateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
