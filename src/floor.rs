// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Floor / truncation to the start of a unit.
//!
//! [`floor`] zeroes every field finer than the target unit, bottom up, and
//! leaves coarser fields unchanged: flooring to the hour keeps the hour
//! and resets minutes, seconds and milliseconds; flooring to the month
//! resets the day to 1 and the time to midnight. Truncating to a unit
//! coarser than the value's kind supports (a bare time-of-day to the year,
//! a year-month to the day) is an [`UnsupportedCapability`] error, never a
//! silent no-op.
//!
//! [`UnsupportedCapability`]: crate::TemporalError::UnsupportedCapability

use crate::amount::Unit;
use crate::error::{Result, TemporalError};
use crate::value::TemporalValue;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Truncate `value` to the start of `unit`.
///
/// Weeks are not a civil field and are not a floor target. Flooring to the
/// finest unit a kind carries is the identity.
pub fn floor(value: &TemporalValue, unit: Unit) -> Result<TemporalValue> {
    let unsupported = || TemporalError::UnsupportedCapability {
        kind: value.kind(),
        operation: match unit {
            Unit::Years => "floor to years",
            Unit::Months => "floor to months",
            Unit::Weeks => "floor to weeks",
            Unit::Days => "floor to days",
            Unit::Hours => "floor to hours",
            Unit::Minutes => "floor to minutes",
            Unit::Seconds => "floor to seconds",
            Unit::Millis => "floor to millis",
        },
    };
    if unit == Unit::Weeks {
        return Err(unsupported());
    }

    match value {
        TemporalValue::Zoned(z) => {
            let local = floor_date_time(z.local(), unit)?;
            Ok(TemporalValue::Zoned(crate::value::Zoned::new(
                z.zone().resolve_local(local)?,
                z.zone(),
            )))
        }
        TemporalValue::DateTime(dt) => Ok(TemporalValue::DateTime(floor_date_time(*dt, unit)?)),
        TemporalValue::Date(d) => match unit {
            Unit::Years | Unit::Months | Unit::Days => {
                Ok(TemporalValue::Date(floor_date(*d, unit)))
            }
            _ => Err(unsupported()),
        },
        TemporalValue::Time(t) => match unit {
            Unit::Hours | Unit::Minutes | Unit::Seconds | Unit::Millis => {
                Ok(TemporalValue::Time(floor_time(*t, unit)))
            }
            _ => Err(unsupported()),
        },
        TemporalValue::YearMonth(ym) => match unit {
            Unit::Months => Ok(*value),
            Unit::Years => crate::value::year_month((ym.year(),)),
            _ => Err(unsupported()),
        },
    }
}

fn floor_date_time(dt: NaiveDateTime, unit: Unit) -> Result<NaiveDateTime> {
    match unit {
        Unit::Years | Unit::Months | Unit::Days => {
            Ok(floor_date(dt.date(), unit).and_time(NaiveTime::MIN))
        }
        _ => Ok(dt.date().and_time(floor_time(dt.time(), unit))),
    }
}

fn floor_date(date: NaiveDate, unit: Unit) -> NaiveDate {
    match unit {
        Unit::Years => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        Unit::Months => date.with_day(1).unwrap_or(date),
        _ => date,
    }
}

fn floor_time(time: NaiveTime, unit: Unit) -> NaiveTime {
    let (h, mi, s) = (time.hour(), time.minute(), time.second());
    let fallback = time;
    match unit {
        Unit::Hours => NaiveTime::from_hms_opt(h, 0, 0),
        Unit::Minutes => NaiveTime::from_hms_opt(h, mi, 0),
        Unit::Seconds => NaiveTime::from_hms_opt(h, mi, s),
        // Millis: drop sub-millisecond precision only.
        _ => NaiveTime::from_hms_milli_opt(h, mi, s, time.nanosecond() / 1_000_000),
    }
    .unwrap_or(fallback)
}
