// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Formatting and parsing collaborator.
//!
//! A thin adapter over chrono's strftime machinery: it consumes the core
//! value types and produces strings, or the reverse. Parsing accepts an
//! ordered list of candidate patterns — the first match wins and
//! [`ParseFailure`] is reported only after every candidate has failed.
//! No ambiguity resolution happens beyond candidate order.
//!
//! [`ParseFailure`]: crate::TemporalError::ParseFailure

use crate::error::{Result, TemporalError};
use crate::value::{Kind, TemporalValue, Zoned};
use crate::zone::Zone;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt::Write as _;

/// Render `value` with a strftime-style `pattern`.
///
/// Year-month values format as the first day of their month, so
/// day-or-finer specifiers render that placeholder day.
pub fn format(value: &TemporalValue, pattern: &str) -> Result<String> {
    let fail = || TemporalError::FormatFailure {
        kind: value.kind(),
        pattern: pattern.to_string(),
    };
    let mut out = String::new();
    let rendered = match value {
        TemporalValue::Zoned(z) => {
            let offset = z.zone().offset_at(z.instant());
            write!(out, "{}", z.instant().with_timezone(&offset).format(pattern))
        }
        TemporalValue::DateTime(dt) => write!(out, "{}", dt.format(pattern)),
        TemporalValue::Date(d) => write!(out, "{}", d.format(pattern)),
        TemporalValue::Time(t) => write!(out, "{}", t.format(pattern)),
        TemporalValue::YearMonth(ym) => {
            let first = NaiveDate::from_ymd_opt(ym.year(), ym.month(), 1).ok_or_else(fail)?;
            write!(out, "{}", first.format(pattern))
        }
    };
    rendered.map_err(|_| fail())?;
    Ok(out)
}

/// Parse `input` as a value of `kind`, trying `patterns` in order.
pub fn parse(kind: Kind, input: &str, patterns: &[&str]) -> Result<TemporalValue> {
    for pattern in patterns {
        if let Some(value) = parse_one(kind, input, pattern) {
            return Ok(value);
        }
    }
    Err(TemporalError::ParseFailure {
        input: input.to_string(),
    })
}

/// Parse `input` as a value of `kind` using that kind's default patterns.
pub fn parse_any(kind: Kind, input: &str) -> Result<TemporalValue> {
    parse(kind, input, default_patterns(kind))
}

/// The default candidate patterns tried by [`parse_any`], most specific
/// first.
pub const fn default_patterns(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Zoned => &[
            "%Y-%m-%dT%H:%M:%S%.3f%z",
            "%Y-%m-%dT%H:%M:%S%z",
            "%Y-%m-%d %H:%M:%S%z",
        ],
        Kind::DateTime => &[
            "%Y-%m-%dT%H:%M:%S%.3f",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M",
        ],
        Kind::Date => &["%Y-%m-%d", "%Y%m%d"],
        Kind::Time => &["%H:%M:%S%.3f", "%H:%M:%S", "%H:%M"],
        Kind::YearMonth => &["%Y-%m", "%Y%m"],
    }
}

fn parse_one(kind: Kind, input: &str, pattern: &str) -> Option<TemporalValue> {
    match kind {
        Kind::Zoned => DateTime::parse_from_str(input, pattern).ok().map(|dt| {
            TemporalValue::Zoned(Zoned::new(
                dt.with_timezone(&Utc),
                Zone::Fixed(*dt.offset()),
            ))
        }),
        Kind::DateTime => NaiveDateTime::parse_from_str(input, pattern)
            .ok()
            .map(TemporalValue::DateTime),
        Kind::Date => NaiveDate::parse_from_str(input, pattern)
            .ok()
            .map(TemporalValue::Date),
        Kind::Time => NaiveTime::parse_from_str(input, pattern)
            .ok()
            .map(TemporalValue::Time),
        Kind::YearMonth => {
            // chrono needs a complete date; borrow day 1 to parse the
            // year/month pair, then drop it.
            let date =
                NaiveDate::parse_from_str(&format!("{input} 1"), &format!("{pattern} %d")).ok()?;
            crate::value::year_month((chrono::Datelike::year(&date), chrono::Datelike::month(&date)))
                .ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{date_time, local_date, local_date_time, local_time, year_month};

    #[test]
    fn format_round_trips_local_date_time() {
        let v = local_date_time((2024, 5, 17, 14, 42, 31)).unwrap();
        let s = format(&v, "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(s, "2024-05-17T14:42:31");
        let parsed = parse_any(Kind::DateTime, &s).unwrap();
        assert!(parsed.equal(&v).unwrap());
    }

    #[test]
    fn format_zoned_carries_offset() {
        let paris = Zone::for_id("Europe/Paris").unwrap();
        let v = date_time((2024, 6, 1, 12)).unwrap().to_zone(paris).unwrap();
        let s = format(&v, "%Y-%m-%d %H:%M %z").unwrap();
        assert_eq!(s, "2024-06-01 14:00 +0200");
    }

    #[test]
    fn parse_zoned_keeps_the_instant() {
        let parsed = parse_any(Kind::Zoned, "2024-06-01T14:00:00+0200").unwrap();
        assert!(parsed.equal(&date_time((2024, 6, 1, 12)).unwrap()).unwrap());
    }

    #[test]
    fn first_matching_pattern_wins() {
        let parsed = parse(
            Kind::Date,
            "2024-05-17",
            &["%d/%m/%Y", "%Y-%m-%d", "%Y%m%d"],
        )
        .unwrap();
        assert!(parsed.equal(&local_date(2024, 5, 17).unwrap()).unwrap());
    }

    #[test]
    fn failure_only_after_all_candidates() {
        assert_eq!(
            parse(Kind::Date, "17 May 2024", &["%Y-%m-%d", "%Y%m%d"]),
            Err(TemporalError::ParseFailure {
                input: "17 May 2024".into(),
            })
        );
    }

    #[test]
    fn year_month_round_trip() {
        let ym = year_month((2024, 3)).unwrap();
        assert_eq!(format(&ym, "%Y-%m").unwrap(), "2024-03");
        let parsed = parse_any(Kind::YearMonth, "2024-03").unwrap();
        assert!(parsed.equal(&ym).unwrap());
    }

    #[test]
    fn time_parses_with_and_without_seconds() {
        let full = parse_any(Kind::Time, "09:30:15").unwrap();
        assert_eq!(full.second().unwrap(), 15);
        let short = parse_any(Kind::Time, "09:30").unwrap();
        assert!(short.equal(&local_time((9, 30)).unwrap()).unwrap());
    }
}
