// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! External-timestamp coercion collaborator.
//!
//! Converts zoned instants and bare times of day to and from the
//! wall-clock timestamp representations used at storage boundaries:
//! [`SystemTime`] and unix-epoch milliseconds. The conversions are
//! one-directional-safe: going *from* a sub-millisecond source truncates
//! to whole milliseconds (toward the past), and the zone tag of a zoned
//! value is not representable on the timestamp side — coming back always
//! yields a UTC-tagged value.

use crate::error::{Result, TemporalError};
use crate::value::{Kind, TemporalValue, Zoned};
use crate::zone::Zone;
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use std::time::SystemTime;

fn require_zoned(value: &TemporalValue) -> Result<&Zoned> {
    match value {
        TemporalValue::Zoned(z) => Ok(z),
        _ => Err(TemporalError::UnsupportedCapability {
            kind: value.kind(),
            operation: "timestamp coercion",
        }),
    }
}

/// The absolute instant of a zoned value as a [`SystemTime`].
pub fn to_system_time(value: &TemporalValue) -> Result<SystemTime> {
    Ok(SystemTime::from(require_zoned(value)?.instant()))
}

/// A zoned value (UTC tag) from a [`SystemTime`], truncated to whole
/// milliseconds.
pub fn from_system_time(timestamp: SystemTime) -> Result<TemporalValue> {
    let instant: DateTime<Utc> = timestamp.into();
    from_unix_millis(instant.timestamp_millis())
}

/// The absolute instant of a zoned value as unix-epoch milliseconds.
/// Sub-millisecond precision, if any, is dropped.
pub fn to_unix_millis(value: &TemporalValue) -> Result<i64> {
    Ok(require_zoned(value)?.instant().timestamp_millis())
}

/// A zoned value (UTC tag) from unix-epoch milliseconds.
pub fn from_unix_millis(millis: i64) -> Result<TemporalValue> {
    let instant =
        DateTime::from_timestamp_millis(millis).ok_or(TemporalError::ArithmeticOverflow)?;
    Ok(TemporalValue::Zoned(Zoned::new(instant, Zone::utc())))
}

/// A bare time of day as milliseconds since midnight — the convention
/// wall-clock `TIME` columns use (the time on the epoch day).
pub fn time_to_day_millis(value: &TemporalValue) -> Result<i64> {
    match value {
        TemporalValue::Time(t) => Ok(
            i64::from(t.num_seconds_from_midnight()) * 1_000
                + i64::from(t.nanosecond() / 1_000_000),
        ),
        _ => Err(TemporalError::UnsupportedCapability {
            kind: value.kind(),
            operation: "day-millis coercion",
        }),
    }
}

/// A bare time of day from milliseconds since midnight (0..86\_400\_000).
pub fn time_from_day_millis(millis: i64) -> Result<TemporalValue> {
    let bad = || TemporalError::InvalidFieldValue {
        kind: Kind::Time,
        field: "day-millis",
        value: millis,
    };
    if !(0..86_400_000).contains(&millis) {
        return Err(bad());
    }
    let secs = (millis / 1_000) as u32;
    let nanos = (millis % 1_000) as u32 * 1_000_000;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
        .map(TemporalValue::Time)
        .ok_or_else(bad)
}
