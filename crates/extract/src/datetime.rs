//! Tolerant parsers for Japanese-style date and time phrases.
//!
//! The source pages write spans like "12時10分～12時50分" or
//! "2019年08月08日 木曜日 〜 2019年08月09日 金曜日", and routinely omit the
//! end of a range for single-session events. Each parser therefore tries a
//! two-endpoint pattern first and falls back to a single-endpoint one,
//! deriving the missing end from the start. Unmatched input is an error,
//! never a default.

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{DateSpan, DateTimeSpan, TimeSpan};
use exn::ResultExt;
use regex::Captures;
use time::macros::offset;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use tracing::instrument;

/// The fixed timezone identity of every wall-clock value on these pages.
pub const JST: UtcOffset = offset!(+9);

/// Parses a time span such as "12時10分～12時50分".
///
/// Arbitrary text before the first time, around the range marker, and after
/// the end time is ignored (reception notes, annotations). An open-ended
/// range like "15時00分～" yields a zero-length span with `end == start`.
///
/// # Errors
///
/// [`ErrorKind::InvalidFormat`] if neither pattern matches, or an hour or
/// minute component is out of range.
#[instrument(level = "trace")]
pub fn parse_time_span(text: &str) -> Result<TimeSpan> {
    if let Some(captures) = consts::TIME_RANGE_REGEX.captures(text) {
        Ok(TimeSpan::new(time_at(&captures, 1, text)?, time_at(&captures, 3, text)?))
    } else if let Some(captures) = consts::TIME_SINGLE_REGEX.captures(text) {
        // No end time given: a zero-length span, not an error.
        Ok(TimeSpan::single(time_at(&captures, 1, text)?))
    } else {
        exn::bail!(ErrorKind::InvalidFormat { field: "time", value: text.to_string() })
    }
}

/// Parses a date span such as "2019年08月08日 木曜日 〜 2019年08月09日 金曜日".
///
/// Day-of-week and parenthetical annotations after either date are ignored.
/// A single date yields a span with `end == start`.
///
/// # Errors
///
/// [`ErrorKind::InvalidFormat`] if neither pattern matches or the matched
/// components do not form a calendar date.
#[instrument(level = "trace")]
pub fn parse_date_span(text: &str) -> Result<DateSpan> {
    if let Some(captures) = consts::DATE_RANGE_REGEX.captures(text) {
        Ok(DateSpan::new(date_at(&captures, 1, text)?, date_at(&captures, 4, text)?))
    } else if let Some(captures) = consts::DATE_SINGLE_REGEX.captures(text) {
        Ok(DateSpan::single(date_at(&captures, 1, text)?))
    } else {
        exn::bail!(ErrorKind::InvalidFormat { field: "date", value: text.to_string() })
    }
}

/// Parses a combined date-and-time phrase in the loosest legacy form, e.g.
/// "平成26年7月8日（火曜日） 18時30分～20時00分".
///
/// A two-digit year is read as a Heisei era year. A missing start time is
/// synthesized from `now`; a missing end falls back to the start. Because of
/// that substitution this parser is not deterministic over `text` alone —
/// callers opt in by supplying the substitute instant explicitly.
///
/// # Errors
///
/// [`ErrorKind::InvalidFormat`] if the pattern does not match or the matched
/// components do not form a valid datetime.
#[instrument(level = "trace", skip(now))]
pub fn parse_lenient_datetime_span(text: &str, now: OffsetDateTime) -> Result<DateTimeSpan> {
    let Some(captures) = consts::LENIENT_DATETIME_REGEX.captures(text) else {
        exn::bail!(ErrorKind::InvalidFormat { field: "datetime", value: text.to_string() });
    };

    let year_digits = &captures[1];
    let mut year = year_digits
        .parse::<i32>()
        .or_raise(|| ErrorKind::InvalidFormat { field: "datetime", value: text.to_string() })?;
    if year_digits.len() == 2 {
        // Two-digit years on these pages are Heisei era notation.
        year += 1988;
    }
    let date = calendar_date(year, u8_at(&captures, 2, text)?, u8_at(&captures, 3, text)?, text)?;

    let start_hour = match captures.get(4) {
        Some(_) => u8_at(&captures, 4, text)?,
        None => now.hour(),
    };
    let start_minute = match captures.get(5) {
        Some(_) => u8_at(&captures, 5, text)?,
        None => now.minute(),
    };
    let end_hour = match captures.get(6) {
        Some(_) => u8_at(&captures, 6, text)?,
        None => start_hour,
    };
    let end_minute = match captures.get(7) {
        Some(_) => u8_at(&captures, 7, text)?,
        None => start_minute,
    };

    let start = PrimitiveDateTime::new(date, hms(start_hour, start_minute, text)?).assume_offset(JST);
    let end = PrimitiveDateTime::new(date, hms(end_hour, end_minute, text)?).assume_offset(JST);
    Ok(DateTimeSpan::new(start, end))
}

/// Parses one one-or-two-digit capture group.
fn u8_at(captures: &Captures<'_>, index: usize, source: &str) -> Result<u8> {
    captures[index]
        .parse::<u8>()
        .or_raise(|| ErrorKind::InvalidFormat { field: "datetime", value: source.to_string() })
}

/// Builds a `Time` from two capture groups starting at `index`.
fn time_at(captures: &Captures<'_>, index: usize, source: &str) -> Result<Time> {
    hms(u8_at(captures, index, source)?, u8_at(captures, index + 1, source)?, source)
}

fn hms(hour: u8, minute: u8, source: &str) -> Result<Time> {
    Time::from_hms(hour, minute, 0).or_raise(|| ErrorKind::InvalidFormat { field: "time", value: source.to_string() })
}

/// Builds a `Date` from three capture groups starting at `index`.
fn date_at(captures: &Captures<'_>, index: usize, source: &str) -> Result<Date> {
    let year = captures[index]
        .parse::<i32>()
        .or_raise(|| ErrorKind::InvalidFormat { field: "date", value: source.to_string() })?;
    calendar_date(year, u8_at(captures, index + 1, source)?, u8_at(captures, index + 2, source)?, source)
}

fn calendar_date(year: i32, month: u8, day: u8, source: &str) -> Result<Date> {
    let month = Month::try_from(month)
        .or_raise(|| ErrorKind::InvalidFormat { field: "date", value: source.to_string() })?;
    Date::from_calendar_date(year, month, day)
        .or_raise(|| ErrorKind::InvalidFormat { field: "date", value: source.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::{date, datetime, time};

    #[rstest]
    #[case("12時10分～12時50分", time!(12:10), time!(12:50))]
    #[case("17時30分～19時00分（17時00分受付開始）", time!(17:30), time!(19:00))]
    #[case("15時00分～", time!(15:00), time!(15:00))]
    #[case("9時30分", time!(9:30), time!(9:30))]
    #[case("開催時間 10時00分～15時20分", time!(10:00), time!(15:20))]
    fn parses_time_spans(#[case] text: &str, #[case] start: Time, #[case] end: Time) {
        assert_eq!(parse_time_span(text).unwrap(), TimeSpan::new(start, end));
    }

    #[rstest]
    #[case("")]
    #[case("未定")]
    #[case("12時")]
    #[case("25時00分")]
    fn rejects_unparseable_times(#[case] text: &str) {
        assert!(parse_time_span(text).is_err());
    }

    #[rstest]
    #[case("2019年08月08日 木曜日 〜 2019年08月09日 金曜日", date!(2019 - 08 - 08), date!(2019 - 08 - 09))]
    #[case("2019年08月06日 火曜日", date!(2019 - 08 - 06), date!(2019 - 08 - 06))]
    #[case("2019年07月31日 水曜日 〜 2019年11月03日 日曜日（祝日）", date!(2019 - 07 - 31), date!(2019 - 11 - 03))]
    #[case("2019年8月6日", date!(2019 - 08 - 06), date!(2019 - 08 - 06))]
    fn parses_date_spans(#[case] text: &str, #[case] start: Date, #[case] end: Date) {
        assert_eq!(parse_date_span(text).unwrap(), DateSpan::new(start, end));
    }

    #[rstest]
    #[case("")]
    #[case("木曜日")]
    #[case("2019年08月")]
    #[case("2019年13月01日")]
    fn rejects_unparseable_dates(#[case] text: &str) {
        assert!(parse_date_span(text).is_err());
    }

    fn fixed_now() -> OffsetDateTime {
        datetime!(2014-07-01 08:05:00 +9)
    }

    #[test]
    fn lenient_parses_full_datetime_range() {
        let span = parse_lenient_datetime_span("2014年7月11日（金曜日） 12時10分～12時50分", fixed_now()).unwrap();
        assert_eq!(span.start, datetime!(2014-07-11 12:10:00 +9));
        assert_eq!(span.end, datetime!(2014-07-11 12:50:00 +9));
    }

    #[test]
    fn lenient_converts_heisei_era_years() {
        let span = parse_lenient_datetime_span("平成26年7月8日（火曜日） 18時30分～20時00分", fixed_now()).unwrap();
        assert_eq!(span.start, datetime!(2014-07-08 18:30:00 +9));
        assert_eq!(span.end, datetime!(2014-07-08 20:00:00 +9));
    }

    #[test]
    fn lenient_ignores_trailing_reception_note() {
        let span =
            parse_lenient_datetime_span("2014年7月4日（金曜日） 17時30分～19時00分（17時00分受付開始）", fixed_now())
                .unwrap();
        assert_eq!(span.start, datetime!(2014-07-04 17:30:00 +9));
        assert_eq!(span.end, datetime!(2014-07-04 19:00:00 +9));
    }

    #[test]
    fn lenient_open_ended_range_falls_back_to_start() {
        let span = parse_lenient_datetime_span("2014年7月12日（土曜日） 15時00分～", fixed_now()).unwrap();
        assert_eq!(span.start, datetime!(2014-07-12 15:00:00 +9));
        assert_eq!(span.end, span.start);
    }

    #[test]
    fn lenient_substitutes_missing_time_from_supplied_instant() {
        let span = parse_lenient_datetime_span("2014年7月12日（土曜日）", fixed_now()).unwrap();
        assert_eq!(span.start, datetime!(2014-07-12 08:05:00 +9));
        assert_eq!(span.end, span.start);
    }

    #[test]
    fn lenient_rejects_dateless_text() {
        assert!(parse_lenient_datetime_span("毎週火曜日", fixed_now()).is_err());
    }
}
