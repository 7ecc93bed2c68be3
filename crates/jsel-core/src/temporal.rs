//! # Temporal Values — Pinned Date/Time Parsing
//!
//! `JsonDateTime` is the value the date accessors produce. Parsing never
//! consults the locale: the default path uses one pinned ISO-8601 profile,
//! and the explicit-format path uses exactly the caller's format string.
//!
//! ## Default profile
//!
//! ```text
//! yyyy-MM-ddTHH:mm:ss[.f{1,9}][Z|+HH:MM|-HH:MM]
//! ```
//!
//! Date-only text is rejected.
//!
//! ## Explicit formats
//!
//! Format strings use repeated pattern letters (`yyyy`, `MM`, `dd`, `HH`,
//! `mm`, `ss`, `fff`, `tt`, `zzz`, ...) rather than strftime directives.
//! They are translated to chrono items before parsing.
//!
//! - A format with no time-of-day field gives midnight.
//! - A format with an hour but no `mm` or `ss` gets zero minutes or seconds.
//! - Minutes or seconds without an hour do not parse.
//! - `h`/`hh` is only accepted together with `tt`.
//! - A format without `zzz` produces a value without offset.
//!
//! Numeric fields follow chrono's parsing width: `MM`, `dd`, `HH`, `mm` and
//! `ss` also accept a single digit, so `1/5/2023` matches `MM/dd/yyyy`.
//! Separators and literals must match exactly.
//!
//! ## Round-trip form
//!
//! [`JsonDateTime::to_round_trip()`] renders `yyyy-MM-ddTHH:mm:ss.fffffff`
//! (seven fractional digits) followed by `Z` or `+HH:MM` when an offset is
//! known, so `2024-01-05T00:00:00` round-trips as
//! `2024-01-05T00:00:00.0000000`.

use std::fmt;

use chrono::format::{parse, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

const ISO8601_NAIVE: &str = "%Y-%m-%dT%H:%M:%S%.f";
const ISO8601_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// A date/time read from a JSON document, with its offset when the text
/// carried one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JsonDateTime {
    naive: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl JsonDateTime {
    /// A date/time without offset.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            naive,
            offset: None,
        }
    }

    /// A date/time with a known offset.
    pub fn from_fixed(dt: DateTime<FixedOffset>) -> Self {
        Self {
            naive: dt.naive_local(),
            offset: Some(*dt.offset()),
        }
    }

    /// Parse text in the pinned ISO-8601 profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DateTime`] if the text does not match.
    pub fn parse_iso8601(text: &str) -> Result<Self, ConversionError> {
        if let Some(naive_text) = text.strip_suffix('Z') {
            let naive = NaiveDateTime::parse_from_str(naive_text, ISO8601_NAIVE)
                .map_err(|source| date_error(text, source))?;
            return Ok(Self::from_fixed(Utc.from_utc_datetime(&naive).fixed_offset()));
        }
        match DateTime::parse_from_str(text, ISO8601_OFFSET) {
            Ok(dt) => Ok(Self::from_fixed(dt)),
            Err(_) => NaiveDateTime::parse_from_str(text, ISO8601_NAIVE)
                .map(Self::from_naive)
                .map_err(|source| date_error(text, source)),
        }
    }

    /// Parse text with an exact custom format string such as `MM/dd/yyyy`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DateFormat`] if the format uses an
    /// unsupported pattern (including `hh` without `tt`), or
    /// [`ConversionError::DateTime`] if the text does not match it or does
    /// not name a complete time.
    pub fn parse_with_format(text: &str, format: &str) -> Result<Self, ConversionError> {
        let pattern = translate_format(format)?;
        let mut parsed = Parsed::new();
        parse(&mut parsed, text, StrftimeItems::new(&pattern.strftime))
            .map_err(|source| date_error(text, source))?;

        let date = parsed
            .to_naive_date()
            .map_err(|source| date_error(text, source))?;
        let time = if pattern.has_time {
            if !pattern.has_minute {
                parsed.set_minute(0).map_err(|source| date_error(text, source))?;
            }
            if !pattern.has_second {
                parsed.set_second(0).map_err(|source| date_error(text, source))?;
            }
            parsed
                .to_naive_time()
                .map_err(|source| date_error(text, source))?
        } else {
            NaiveTime::MIN
        };
        let naive = date.and_time(time);

        match parsed.to_fixed_offset() {
            Ok(offset) => Ok(Self {
                naive,
                offset: Some(offset),
            }),
            Err(e) if e.kind() == ParseErrorKind::NotEnough => Ok(Self::from_naive(naive)),
            Err(source) => Err(date_error(text, source)),
        }
    }

    /// The wall-clock date and time as written.
    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// The offset, if the text carried one.
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The instant in UTC, if the offset is known.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let offset = self.offset?;
        offset
            .from_local_datetime(&self.naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Render as `yyyy-MM-ddTHH:mm:ss.fffffff[Z|+HH:MM]`.
    pub fn to_round_trip(&self) -> String {
        let ticks = self.naive.nanosecond() % 1_000_000_000 / 100;
        let mut out = format!("{}.{ticks:07}", self.naive.format("%Y-%m-%dT%H:%M:%S"));
        match self.offset {
            Some(offset) if offset.local_minus_utc() == 0 => out.push('Z'),
            Some(offset) => out.push_str(&offset.to_string()),
            None => {}
        }
        out
    }
}

impl fmt::Display for JsonDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_round_trip())
    }
}

impl TryFrom<String> for JsonDateTime {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso8601(&value)
    }
}

impl From<JsonDateTime> for String {
    fn from(value: JsonDateTime) -> Self {
        value.to_round_trip()
    }
}

fn date_error(text: &str, source: chrono::ParseError) -> ConversionError {
    ConversionError::DateTime {
        text: text.to_string(),
        source,
    }
}

/// A custom pattern translated to chrono items, with the time-of-day
/// fields it names.
struct TranslatedFormat {
    strftime: String,
    has_time: bool,
    has_minute: bool,
    has_second: bool,
}

/// Translate a custom date/time pattern into a chrono strftime string.
fn translate_format(format: &str) -> Result<TranslatedFormat, ConversionError> {
    let unsupported = |reason: String| ConversionError::DateFormat {
        format: format.to_string(),
        reason,
    };
    if format.is_empty() {
        return Err(unsupported("format is empty".into()));
    }

    let chars: Vec<char> = format.chars().collect();
    let mut out = String::with_capacity(format.len() * 2);
    let mut has_time = false;
    let mut has_minute = false;
    let mut has_second = false;
    let mut twelve_hour = false;
    let mut am_pm = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&next| next == c).count();
        match c {
            'y' | 'M' | 'd' | 'H' | 'h' | 'm' | 's' | 'f' | 't' | 'z' => {
                let item = strftime_item(c, run).ok_or_else(|| {
                    unsupported(format!("pattern '{}' is not supported", c.to_string().repeat(run)))
                })?;
                out.push_str(item);
                has_time |= matches!(c, 'H' | 'h' | 'm' | 's' | 'f' | 't');
                has_minute |= c == 'm';
                has_second |= c == 's';
                twelve_hour |= c == 'h';
                am_pm |= c == 't';
                i += run;
            }
            '\'' | '"' => {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&next| next == c)
                    .ok_or_else(|| unsupported(format!("unterminated quoted literal at {i}")))?;
                for &literal in &chars[i + 1..i + 1 + close] {
                    push_literal(&mut out, literal);
                }
                i += close + 2;
            }
            '\\' => {
                let literal = chars
                    .get(i + 1)
                    .ok_or_else(|| unsupported("format ends with an escape".into()))?;
                push_literal(&mut out, *literal);
                i += 2;
            }
            other => {
                push_literal(&mut out, other);
                i += 1;
            }
        }
    }
    if twelve_hour && !am_pm {
        return Err(unsupported("12-hour 'h' needs 'tt' to tell AM from PM".into()));
    }
    Ok(TranslatedFormat {
        strftime: out,
        has_time,
        has_minute,
        has_second,
    })
}

fn strftime_item(c: char, run: usize) -> Option<&'static str> {
    let item = match (c, run) {
        ('y', 4) => "%Y",
        ('y', 2) => "%y",
        ('M', 4) => "%B",
        ('M', 3) => "%b",
        ('M', 1 | 2) => "%m",
        ('d', 4) => "%A",
        ('d', 3) => "%a",
        ('d', 1 | 2) => "%d",
        ('H', 1 | 2) => "%H",
        ('h', 1 | 2) => "%I",
        ('m', 1 | 2) => "%M",
        ('s', 1 | 2) => "%S",
        ('f', 3) => "%3f",
        ('f', 6) => "%6f",
        ('f', 9) => "%9f",
        ('t', 2) => "%p",
        ('z', 3) => "%:z",
        _ => return None,
    };
    Some(item)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    // ---- parse_iso8601() ----

    #[test]
    fn test_iso_without_offset_roundtrips() {
        let dt = JsonDateTime::parse_iso8601("2024-01-05T00:00:00").unwrap();
        assert_eq!(dt.naive(), naive(2024, 1, 5, 0, 0, 0));
        assert_eq!(dt.offset(), None);
        assert_eq!(dt.to_round_trip(), "2024-01-05T00:00:00.0000000");
    }

    #[test]
    fn test_iso_fraction_is_kept_to_ticks() {
        let dt = JsonDateTime::parse_iso8601("2024-01-05T10:20:30.1234567").unwrap();
        assert_eq!(dt.to_round_trip(), "2024-01-05T10:20:30.1234567");
        let dt = JsonDateTime::parse_iso8601("2024-01-05T10:20:30.5").unwrap();
        assert_eq!(dt.to_round_trip(), "2024-01-05T10:20:30.5000000");
    }

    #[test]
    fn test_iso_z_suffix() {
        let dt = JsonDateTime::parse_iso8601("2024-01-05T12:00:00Z").unwrap();
        assert_eq!(dt.offset(), Some(FixedOffset::east_opt(0).unwrap()));
        assert_eq!(dt.to_round_trip(), "2024-01-05T12:00:00.0000000Z");
    }

    #[test]
    fn test_iso_explicit_offset() {
        let dt = JsonDateTime::parse_iso8601("2024-01-05T17:00:00+05:00").unwrap();
        assert_eq!(dt.naive(), naive(2024, 1, 5, 17, 0, 0));
        assert_eq!(dt.to_round_trip(), "2024-01-05T17:00:00.0000000+05:00");
        let utc = dt.to_utc().unwrap();
        assert_eq!(utc.naive_utc(), naive(2024, 1, 5, 12, 0, 0));
    }

    #[test]
    fn test_iso_rejects_other_layouts() {
        for bad in [
            "hello",
            "",
            "2024-01-05",
            "2024/01/05T00:00:00",
            "05.01.2024 00:00:00",
            "2024-13-05T00:00:00",
            "2024-01-05 00:00:00",
            "2024-01-05T00:00:00+0500x",
        ] {
            let err = JsonDateTime::parse_iso8601(bad).unwrap_err();
            assert!(matches!(err, ConversionError::DateTime { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_to_utc_without_offset_is_none() {
        let dt = JsonDateTime::parse_iso8601("2024-01-05T00:00:00").unwrap();
        assert!(dt.to_utc().is_none());
    }

    // ---- parse_with_format() ----

    #[test]
    fn test_format_month_day_year() {
        let dt = JsonDateTime::parse_with_format("12/25/2023", "MM/dd/yyyy").unwrap();
        assert_eq!(dt.naive(), naive(2023, 12, 25, 0, 0, 0));
        assert_eq!(dt.to_round_trip(), "2023-12-25T00:00:00.0000000");
    }

    #[test]
    fn test_format_with_time_and_quoted_literal() {
        let dt = JsonDateTime::parse_with_format("2023-12-25 at 14:05:09", "yyyy-MM-dd 'at' HH:mm:ss")
            .unwrap();
        assert_eq!(dt.naive(), naive(2023, 12, 25, 14, 5, 9));
    }

    #[test]
    fn test_format_twelve_hour_clock() {
        let dt = JsonDateTime::parse_with_format("03/04/2022 07:30 PM", "MM/dd/yyyy hh:mm tt").unwrap();
        assert_eq!(dt.naive(), naive(2022, 3, 4, 19, 30, 0));
    }

    #[test]
    fn test_format_milliseconds_and_offset() {
        let dt = JsonDateTime::parse_with_format(
            "2023-12-25T14:05:09.250+02:00",
            "yyyy-MM-ddTHH:mm:ss.fffzzz",
        )
        .unwrap();
        assert_eq!(dt.to_round_trip(), "2023-12-25T14:05:09.2500000+02:00");
    }

    #[test]
    fn test_format_hour_only_keeps_hour() {
        let dt = JsonDateTime::parse_with_format("2023-12-25 14", "yyyy-MM-dd HH").unwrap();
        assert_eq!(dt.naive(), naive(2023, 12, 25, 14, 0, 0));
        assert_eq!(dt.to_round_trip(), "2023-12-25T14:00:00.0000000");
    }

    #[test]
    fn test_format_without_seconds_defaults_to_zero() {
        let dt = JsonDateTime::parse_with_format("2023-12-25 14:05", "yyyy-MM-dd HH:mm").unwrap();
        assert_eq!(dt.to_round_trip(), "2023-12-25T14:05:00.0000000");
    }

    #[test]
    fn test_format_twelve_hour_without_designator_rejected() {
        for format in ["MM/dd/yyyy hh:mm", "MM/dd/yyyy h"] {
            let err = JsonDateTime::parse_with_format("03/04/2022 07:30", format).unwrap_err();
            assert!(matches!(err, ConversionError::DateFormat { .. }), "{format:?}");
        }
    }

    #[test]
    fn test_format_minutes_without_hour_rejected() {
        let err = JsonDateTime::parse_with_format("2023-12-25 30", "yyyy-MM-dd mm").unwrap_err();
        assert!(matches!(err, ConversionError::DateTime { .. }));
    }

    #[test]
    fn test_format_numeric_fields_accept_single_digit() {
        let dt = JsonDateTime::parse_with_format("1/5/2023", "MM/dd/yyyy").unwrap();
        assert_eq!(dt.naive(), naive(2023, 1, 5, 0, 0, 0));
        assert!(JsonDateTime::parse_with_format("1-5-2023", "MM/dd/yyyy").is_err());
    }

    #[test]
    fn test_format_month_names() {
        let dt = JsonDateTime::parse_with_format("25 Dec 2023", "dd MMM yyyy").unwrap();
        assert_eq!(dt.naive(), naive(2023, 12, 25, 0, 0, 0));
    }

    #[test]
    fn test_format_mismatch_is_date_error() {
        let err = JsonDateTime::parse_with_format("LLLLLLLL-e68b-4b5e-bc1b-a465d234c20", "MM/dd/yyyy")
            .unwrap_err();
        assert!(matches!(err, ConversionError::DateTime { .. }));
    }

    #[test]
    fn test_format_does_not_fall_back_to_iso() {
        let err = JsonDateTime::parse_with_format("2023-12-25T00:00:00", "MM/dd/yyyy").unwrap_err();
        assert!(matches!(err, ConversionError::DateTime { .. }));
    }

    #[test]
    fn test_unsupported_patterns_rejected() {
        for bad in ["", "yyy-MM-dd", "yyyy-MM-dd HHH", "ffff", "'open", "yyyy\\"] {
            let err = JsonDateTime::parse_with_format("2023", bad).unwrap_err();
            assert!(matches!(err, ConversionError::DateFormat { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_translate_escapes_percent() {
        assert_eq!(translate_format("yyyy%MM").unwrap().strftime, "%Y%%%m");
        assert_eq!(translate_format("\\d dd").unwrap().strftime, "d %d");
    }

    // ---- serde ----

    #[test]
    fn test_serde_roundtrip() {
        let dt = JsonDateTime::parse_iso8601("2024-01-05T00:00:00").unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, r#""2024-01-05T00:00:00.0000000""#);
        let back: JsonDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
    }
}
