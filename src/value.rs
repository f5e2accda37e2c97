// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! The temporal value variants and their capability table.
//!
//! [`TemporalValue`] is a closed tagged union over five representation
//! kinds. Generic operations (field access, comparison, month adjusters)
//! dispatch by matching on the tag — one arm per variant, one add-site per
//! new variant. Not every operation is meaningful for every variant: a bare
//! time-of-day has no day-of-week, a year-month has no time fields.
//! Invoking an unsupported pair returns
//! [`TemporalError::UnsupportedCapability`] rather than coercing or
//! defaulting.
//!
//! All calendar math (leap years, month lengths, ISO weeks) delegates to
//! chrono; this module only composes it.

use crate::error::{Result, TemporalError};
use crate::zone::Zone;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Kind tag
// ═══════════════════════════════════════════════════════════════════════════

/// The representation kind of a [`TemporalValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Absolute instant expressed in an attached zone.
    Zoned,
    /// Civil date and time, no zone.
    DateTime,
    /// Civil date only.
    Date,
    /// Time of day only.
    Time,
    /// Year and month only.
    YearMonth,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Zoned => "zoned instant",
            Kind::DateTime => "local date-time",
            Kind::Date => "local date",
            Kind::Time => "local time",
            Kind::YearMonth => "year-month",
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Variant payloads
// ═══════════════════════════════════════════════════════════════════════════

/// An absolute instant tagged with the zone it is read in.
///
/// Comparison between zoned values is by absolute instant: two values at
/// the same instant in different zones are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Zoned {
    instant: DateTime<Utc>,
    zone: Zone,
}

impl Zoned {
    /// Tag an absolute instant with a zone.
    #[inline]
    pub const fn new(instant: DateTime<Utc>, zone: Zone) -> Zoned {
        Zoned { instant, zone }
    }

    /// The absolute instant.
    #[inline]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The attached zone.
    #[inline]
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// The zone-local civil reading of the instant.
    #[inline]
    pub fn local(&self) -> NaiveDateTime {
        self.zone.local_at(self.instant)
    }
}

/// A year paired with a month, no finer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// The year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month, 1–12.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TemporalValue
// ═══════════════════════════════════════════════════════════════════════════

/// A temporal value in one of five closed representation kinds.
///
/// Values are immutable; every operation that "changes" a value produces a
/// new one. Field values are always within valid civil ranges —
/// construction fails rather than producing an invalid value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemporalValue {
    Zoned(Zoned),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    YearMonth(YearMonth),
}

impl TemporalValue {
    /// The representation kind tag.
    pub const fn kind(&self) -> Kind {
        match self {
            TemporalValue::Zoned(_) => Kind::Zoned,
            TemporalValue::DateTime(_) => Kind::DateTime,
            TemporalValue::Date(_) => Kind::Date,
            TemporalValue::Time(_) => Kind::Time,
            TemporalValue::YearMonth(_) => Kind::YearMonth,
        }
    }

    fn unsupported(&self, operation: &'static str) -> TemporalError {
        TemporalError::UnsupportedCapability {
            kind: self.kind(),
            operation,
        }
    }

    /// The civil date component, for the kinds that carry one.
    pub(crate) fn date_part(&self) -> Option<NaiveDate> {
        match self {
            TemporalValue::Zoned(z) => Some(z.local().date()),
            TemporalValue::DateTime(dt) => Some(dt.date()),
            TemporalValue::Date(d) => Some(*d),
            TemporalValue::Time(_) | TemporalValue::YearMonth(_) => None,
        }
    }

    /// The time-of-day component, for the kinds that carry one.
    pub(crate) fn time_part(&self) -> Option<NaiveTime> {
        match self {
            TemporalValue::Zoned(z) => Some(z.local().time()),
            TemporalValue::DateTime(dt) => Some(dt.time()),
            TemporalValue::Time(t) => Some(*t),
            TemporalValue::Date(_) | TemporalValue::YearMonth(_) => None,
        }
    }

    /// Rebuild this value around a replacement civil date, keeping the
    /// time-of-day (and zone anchoring) intact.
    pub(crate) fn with_date(&self, date: NaiveDate) -> Result<TemporalValue> {
        match self {
            TemporalValue::Zoned(z) => {
                let local = date.and_time(z.local().time());
                Ok(TemporalValue::Zoned(Zoned::new(
                    z.zone().resolve_local(local)?,
                    z.zone(),
                )))
            }
            TemporalValue::DateTime(dt) => Ok(TemporalValue::DateTime(date.and_time(dt.time()))),
            TemporalValue::Date(_) => Ok(TemporalValue::Date(date)),
            TemporalValue::Time(_) | TemporalValue::YearMonth(_) => {
                Err(self.unsupported("with-date"))
            }
        }
    }

    // ── field getters ─────────────────────────────────────────────────

    /// The year.
    pub fn year(&self) -> Result<i32> {
        match self {
            TemporalValue::YearMonth(ym) => Ok(ym.year()),
            _ => self
                .date_part()
                .map(|d| d.year())
                .ok_or_else(|| self.unsupported("year")),
        }
    }

    /// The month of the year, 1–12.
    pub fn month(&self) -> Result<u32> {
        match self {
            TemporalValue::YearMonth(ym) => Ok(ym.month()),
            _ => self
                .date_part()
                .map(|d| d.month())
                .ok_or_else(|| self.unsupported("month")),
        }
    }

    /// The day of the month, 1–31.
    pub fn day(&self) -> Result<u32> {
        self.date_part()
            .map(|d| d.day())
            .ok_or_else(|| self.unsupported("day"))
    }

    /// ISO day of the week, 1 (Monday) through 7 (Sunday).
    pub fn day_of_week(&self) -> Result<u32> {
        self.date_part()
            .map(|d| d.weekday().number_from_monday())
            .ok_or_else(|| self.unsupported("day-of-week"))
    }

    /// The hour of the day, 0–23.
    pub fn hour(&self) -> Result<u32> {
        self.time_part()
            .map(|t| t.hour())
            .ok_or_else(|| self.unsupported("hour"))
    }

    /// The minute of the hour, 0–59.
    pub fn minute(&self) -> Result<u32> {
        self.time_part()
            .map(|t| t.minute())
            .ok_or_else(|| self.unsupported("minute"))
    }

    /// The second of the minute, 0–59.
    pub fn second(&self) -> Result<u32> {
        self.time_part()
            .map(|t| t.second())
            .ok_or_else(|| self.unsupported("second"))
    }

    /// The millisecond of the second, 0–999.
    pub fn millisecond(&self) -> Result<u32> {
        self.time_part()
            .map(|t| t.nanosecond() / 1_000_000)
            .ok_or_else(|| self.unsupported("millisecond"))
    }

    /// ISO week of the week-based year, 1–53.
    pub fn week_of_year(&self) -> Result<u32> {
        self.date_part()
            .map(|d| d.iso_week().week())
            .ok_or_else(|| self.unsupported("week-of-year"))
    }

    /// The ISO week-based year; differs from [`Self::year`] around the
    /// year boundary.
    pub fn week_based_year(&self) -> Result<i32> {
        self.date_part()
            .map(|d| d.iso_week().year())
            .ok_or_else(|| self.unsupported("week-based-year"))
    }

    // ── comparison ────────────────────────────────────────────────────

    fn cmp_same_kind(&self, other: &TemporalValue) -> Result<Ordering> {
        match (self, other) {
            (TemporalValue::Zoned(a), TemporalValue::Zoned(b)) => {
                Ok(a.instant().cmp(&b.instant()))
            }
            (TemporalValue::DateTime(a), TemporalValue::DateTime(b)) => Ok(a.cmp(b)),
            (TemporalValue::Date(a), TemporalValue::Date(b)) => Ok(a.cmp(b)),
            (TemporalValue::Time(a), TemporalValue::Time(b)) => Ok(a.cmp(b)),
            (TemporalValue::YearMonth(a), TemporalValue::YearMonth(b)) => Ok(a.cmp(b)),
            _ => Err(TemporalError::CrossVariantComparison {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    /// Whether both values denote the same point. Operands must be the same
    /// kind; comparing across kinds is a programming error and fails fast.
    pub fn equal(&self, other: &TemporalValue) -> Result<bool> {
        Ok(self.cmp_same_kind(other)? == Ordering::Equal)
    }

    /// Whether `self` is strictly after `other` (same-kind only).
    pub fn is_after(&self, other: &TemporalValue) -> Result<bool> {
        Ok(self.cmp_same_kind(other)? == Ordering::Greater)
    }

    /// Whether `self` is strictly before `other` (same-kind only).
    pub fn is_before(&self, other: &TemporalValue) -> Result<bool> {
        Ok(self.cmp_same_kind(other)? == Ordering::Less)
    }

    // ── month adjusters ───────────────────────────────────────────────

    /// The same value with the day set to 1, all other fields unchanged.
    pub fn first_day_of_month(&self) -> Result<TemporalValue> {
        let date = self
            .date_part()
            .ok_or_else(|| self.unsupported("first-day-of-month"))?;
        let first = date.with_day(1).ok_or(TemporalError::ArithmeticOverflow)?;
        self.with_date(first)
    }

    /// The same value with the day set to the month's last valid day
    /// (leap-year sensitive), all other fields unchanged.
    pub fn last_day_of_month(&self) -> Result<TemporalValue> {
        let date = self
            .date_part()
            .ok_or_else(|| self.unsupported("last-day-of-month"))?;
        self.with_date(last_day_of(date)?)
    }

    /// The number of days in this value's month.
    pub fn number_of_days_in_month(&self) -> Result<u32> {
        self.last_day_of_month()?.day()
    }

    /// The `n`-th day of this value's month (1-based), computed by
    /// advancing the first day by `n − 1` calendar days. When `n` exceeds
    /// the month's day count the result legally overflows into the
    /// following month, matching ordinary calendar-day addition.
    pub fn nth_day_of_month(&self, n: u32) -> Result<TemporalValue> {
        let first = self.first_day_of_month()?;
        crate::arith::plus(&first, &[crate::amount::days(i64::from(n) - 1)])
    }

    // ── zone operations ───────────────────────────────────────────────

    /// Re-read the same absolute instant in a different zone. Zoned only.
    pub fn to_zone(&self, zone: Zone) -> Result<TemporalValue> {
        match self {
            TemporalValue::Zoned(z) => {
                Ok(TemporalValue::Zoned(Zoned::new(z.instant(), zone)))
            }
            _ => Err(self.unsupported("to-zone")),
        }
    }

    /// Keep the zone-local civil fields and re-anchor them to `zone`,
    /// producing a different absolute instant. Accepts zoned values and
    /// local date-times.
    pub fn from_zone(&self, zone: Zone) -> Result<TemporalValue> {
        let local = match self {
            TemporalValue::Zoned(z) => z.local(),
            TemporalValue::DateTime(dt) => *dt,
            _ => return Err(self.unsupported("from-zone")),
        };
        Ok(TemporalValue::Zoned(Zoned::new(
            zone.resolve_local(local)?,
            zone,
        )))
    }
}

/// Last valid day of `date`'s month: the day before the next month's first.
pub(crate) fn last_day_of(date: NaiveDate) -> Result<NaiveDate> {
    let first = date.with_day(1).ok_or(TemporalError::ArithmeticOverflow)?;
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(TemporalError::ArithmeticOverflow)
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::Zoned(z) => {
                let offset = z.zone().offset_at(z.instant());
                write!(f, "{}[{}]", z.instant().with_timezone(&offset), z.zone())
            }
            TemporalValue::DateTime(dt) => write!(f, "{dt}"),
            TemporalValue::Date(d) => write!(f, "{d}"),
            TemporalValue::Time(t) => write!(f, "{t}"),
            TemporalValue::YearMonth(ym) => write!(f, "{:04}-{:02}", ym.year(), ym.month()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════════════

/// Full civil date-time field set with trailing-field defaults.
///
/// Built from tuples of one to seven elements; omitted trailing fields
/// default to their minimum valid value (1 for month/day, 0 for time
/// fields), so `date_time((1986, 10, 14))` is midnight of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub milli: u32,
}

macro_rules! impl_date_time_fields_from {
    ($(($($name:ident : $ty:ty),+)),+ $(,)?) => {
        $(
            impl From<($($ty,)+)> for DateTimeFields {
                fn from(($($name,)+): ($($ty,)+)) -> Self {
                    #[allow(unused_mut, unused_assignments)]
                    let mut fields = DateTimeFields {
                        year: 0, month: 1, day: 1,
                        hour: 0, minute: 0, second: 0, milli: 0,
                    };
                    $(fields.$name = $name;)+
                    fields
                }
            }
        )+
    };
}

impl_date_time_fields_from!(
    (year: i32),
    (year: i32, month: u32),
    (year: i32, month: u32, day: u32),
    (year: i32, month: u32, day: u32, hour: u32),
    (year: i32, month: u32, day: u32, hour: u32, minute: u32),
    (year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32),
    (year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, milli: u32),
);

/// Time-of-day field set with trailing-field defaults (see
/// [`DateTimeFields`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub milli: u32,
}

macro_rules! impl_time_fields_from {
    ($(($($name:ident : $ty:ty),+)),+ $(,)?) => {
        $(
            impl From<($($ty,)+)> for TimeFields {
                fn from(($($name,)+): ($($ty,)+)) -> Self {
                    #[allow(unused_mut, unused_assignments)]
                    let mut fields = TimeFields { hour: 0, minute: 0, second: 0, milli: 0 };
                    $(fields.$name = $name;)+
                    fields
                }
            }
        )+
    };
}

impl_time_fields_from!(
    (hour: u32),
    (hour: u32, minute: u32),
    (hour: u32, minute: u32, second: u32),
    (hour: u32, minute: u32, second: u32, milli: u32),
);

/// Year-month field set; the month defaults to January.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonthFields {
    pub year: i32,
    pub month: u32,
}

impl From<(i32,)> for YearMonthFields {
    fn from((year,): (i32,)) -> Self {
        YearMonthFields { year, month: 1 }
    }
}

impl From<(i32, u32)> for YearMonthFields {
    fn from((year, month): (i32, u32)) -> Self {
        YearMonthFields { year, month }
    }
}

fn civil_date(kind: Kind, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(TemporalError::InvalidFieldValue {
            kind,
            field: "month",
            value: i64::from(month),
        });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TemporalError::InvalidFieldValue {
        kind,
        field: "day",
        value: i64::from(day),
    })
}

fn civil_time(kind: Kind, hour: u32, minute: u32, second: u32, milli: u32) -> Result<NaiveTime> {
    let bad = |field: &'static str, value: u32| TemporalError::InvalidFieldValue {
        kind,
        field,
        value: i64::from(value),
    };
    if hour > 23 {
        return Err(bad("hour", hour));
    }
    if minute > 59 {
        return Err(bad("minute", minute));
    }
    if second > 59 {
        return Err(bad("second", second));
    }
    if milli > 999 {
        return Err(bad("millisecond", milli));
    }
    NaiveTime::from_hms_milli_opt(hour, minute, second, milli).ok_or(bad("time", hour))
}

/// Construct a zoned instant with a fixed UTC zone from civil fields.
pub fn date_time(fields: impl Into<DateTimeFields>) -> Result<TemporalValue> {
    let f = fields.into();
    let date = civil_date(Kind::Zoned, f.year, f.month, f.day)?;
    let time = civil_time(Kind::Zoned, f.hour, f.minute, f.second, f.milli)?;
    Ok(TemporalValue::Zoned(Zoned::new(
        date.and_time(time).and_utc(),
        Zone::utc(),
    )))
}

/// Construct a local (zone-free) date-time from civil fields.
pub fn local_date_time(fields: impl Into<DateTimeFields>) -> Result<TemporalValue> {
    let f = fields.into();
    let date = civil_date(Kind::DateTime, f.year, f.month, f.day)?;
    let time = civil_time(Kind::DateTime, f.hour, f.minute, f.second, f.milli)?;
    Ok(TemporalValue::DateTime(date.and_time(time)))
}

/// Construct a local date.
pub fn local_date(year: i32, month: u32, day: u32) -> Result<TemporalValue> {
    Ok(TemporalValue::Date(civil_date(Kind::Date, year, month, day)?))
}

/// Construct a bare time-of-day from time fields.
pub fn local_time(fields: impl Into<TimeFields>) -> Result<TemporalValue> {
    let f = fields.into();
    Ok(TemporalValue::Time(civil_time(
        Kind::Time, f.hour, f.minute, f.second, f.milli,
    )?))
}

/// Construct a year-month.
pub fn year_month(fields: impl Into<YearMonthFields>) -> Result<TemporalValue> {
    let f = fields.into();
    if !(1..=12).contains(&f.month) {
        return Err(TemporalError::InvalidFieldValue {
            kind: Kind::YearMonth,
            field: "month",
            value: i64::from(f.month),
        });
    }
    Ok(TemporalValue::YearMonth(YearMonth {
        year: f.year,
        month: f.month,
    }))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_fields_default_to_minimums() {
        let v = date_time((1986,)).unwrap();
        assert_eq!(v.year().unwrap(), 1986);
        assert_eq!(v.month().unwrap(), 1);
        assert_eq!(v.day().unwrap(), 1);
        assert_eq!(v.hour().unwrap(), 0);
        assert_eq!(v.millisecond().unwrap(), 0);
    }

    #[test]
    fn full_field_progression() {
        let v = date_time((1986, 10, 14, 4, 3, 27, 456)).unwrap();
        assert_eq!(v.kind(), Kind::Zoned);
        assert_eq!(v.month().unwrap(), 10);
        assert_eq!(v.minute().unwrap(), 3);
        assert_eq!(v.second().unwrap(), 27);
        assert_eq!(v.millisecond().unwrap(), 456);
    }

    #[test]
    fn construction_rejects_invalid_fields() {
        assert_eq!(
            date_time((2024, 13)),
            Err(TemporalError::InvalidFieldValue {
                kind: Kind::Zoned,
                field: "month",
                value: 13,
            })
        );
        assert!(matches!(
            local_date(2023, 2, 29),
            Err(TemporalError::InvalidFieldValue { field: "day", .. })
        ));
        assert!(matches!(
            local_time((24,)),
            Err(TemporalError::InvalidFieldValue { field: "hour", .. })
        ));
        assert!(year_month((2024, 0)).is_err());
    }

    #[test]
    fn unsupported_fields_are_errors_not_defaults() {
        let t = local_time((14, 30)).unwrap();
        assert_eq!(
            t.day_of_week(),
            Err(TemporalError::UnsupportedCapability {
                kind: Kind::Time,
                operation: "day-of-week",
            })
        );
        assert!(t.year().is_err());

        let ym = year_month((2024, 3)).unwrap();
        assert!(ym.day().is_err());
        assert!(ym.hour().is_err());
        assert_eq!(ym.year().unwrap(), 2024);
        assert_eq!(ym.month().unwrap(), 3);
    }

    #[test]
    fn day_of_week_is_iso_numbered() {
        // 1986-10-14 was a Tuesday.
        let v = local_date(1986, 10, 14).unwrap();
        assert_eq!(v.day_of_week().unwrap(), 2);
        // 2024-01-07 was a Sunday.
        assert_eq!(local_date(2024, 1, 7).unwrap().day_of_week().unwrap(), 7);
    }

    #[test]
    fn iso_week_fields() {
        // 2021-01-01 belongs to ISO week 53 of week-based year 2020.
        let v = local_date(2021, 1, 1).unwrap();
        assert_eq!(v.week_of_year().unwrap(), 53);
        assert_eq!(v.week_based_year().unwrap(), 2020);
        assert_eq!(v.year().unwrap(), 2021);
    }

    #[test]
    fn comparison_requires_matching_kinds() {
        let zoned = date_time((2024, 1, 1)).unwrap();
        let local = local_date_time((2024, 1, 1)).unwrap();
        assert_eq!(
            zoned.equal(&local),
            Err(TemporalError::CrossVariantComparison {
                left: Kind::Zoned,
                right: Kind::DateTime,
            })
        );
        assert!(local.is_before(&zoned).is_err());
    }

    #[test]
    fn comparison_within_kind() {
        let a = date_time((2024, 1, 1)).unwrap();
        let b = date_time((2024, 1, 2)).unwrap();
        assert!(a.is_before(&b).unwrap());
        assert!(b.is_after(&a).unwrap());
        assert!(a.equal(&a).unwrap());
        assert!(!a.equal(&b).unwrap());
    }

    #[test]
    fn zoned_comparison_is_by_instant() {
        let utc = date_time((2024, 6, 1, 12)).unwrap();
        let paris = utc.to_zone(Zone::for_id("Europe/Paris").unwrap()).unwrap();
        assert!(utc.equal(&paris).unwrap());
        assert_ne!(utc.hour().unwrap(), paris.hour().unwrap());
    }

    #[test]
    fn month_adjusters() {
        let v = local_date(2024, 2, 15).unwrap();
        assert_eq!(v.first_day_of_month().unwrap().day().unwrap(), 1);
        assert_eq!(v.last_day_of_month().unwrap().day().unwrap(), 29);
        assert_eq!(v.number_of_days_in_month().unwrap(), 29);
        assert_eq!(
            local_date(2023, 2, 15).unwrap().number_of_days_in_month().unwrap(),
            28
        );
    }

    #[test]
    fn adjusters_keep_time_fields() {
        let v = local_date_time((2024, 3, 20, 9, 45)).unwrap();
        let first = v.first_day_of_month().unwrap();
        assert_eq!(first.day().unwrap(), 1);
        assert_eq!(first.hour().unwrap(), 9);
        assert_eq!(first.minute().unwrap(), 45);
    }

    #[test]
    fn nth_day_can_overflow_into_next_month() {
        let v = local_date(2024, 4, 10).unwrap();
        let nth = v.nth_day_of_month(31).unwrap();
        assert_eq!(nth.month().unwrap(), 5);
        assert_eq!(nth.day().unwrap(), 1);
    }

    #[test]
    fn to_zone_preserves_instant_from_zone_preserves_fields() {
        let paris = Zone::for_id("Europe/Paris").unwrap();
        let v = date_time((2024, 6, 1, 12)).unwrap();

        let shifted = v.to_zone(paris).unwrap();
        assert!(v.equal(&shifted).unwrap());
        assert_eq!(shifted.hour().unwrap(), 14);

        let re_anchored = v.from_zone(paris).unwrap();
        assert_eq!(re_anchored.hour().unwrap(), 12);
        assert!(!v.equal(&re_anchored).unwrap());
    }

    #[test]
    fn zone_ops_unsupported_for_dates() {
        let d = local_date(2024, 1, 1).unwrap();
        assert!(d.to_zone(Zone::utc()).is_err());
        assert!(d.from_zone(Zone::utc()).is_err());
    }

    #[test]
    fn display_year_month_zero_pads() {
        assert_eq!(format!("{}", year_month((987, 3)).unwrap()), "0987-03");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn zoned_value_round_trips_through_json() {
        let v = date_time((2024, 6, 1, 12))
            .unwrap()
            .to_zone(Zone::for_id("Europe/Paris").unwrap())
            .unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("Europe/Paris"));
        let back: TemporalValue = serde_json::from_str(&json).unwrap();
        assert!(back.equal(&v).unwrap());
        assert_eq!(back, v);
    }

    #[test]
    fn year_month_round_trips_through_json() {
        let ym = year_month((2024, 3)).unwrap();
        let back: TemporalValue =
            serde_json::from_str(&serde_json::to_string(&ym).unwrap()).unwrap();
        assert_eq!(back, ym);
    }
}
