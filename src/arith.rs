// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Amount arithmetic and span measurement.
//!
//! [`plus`]/[`minus`] apply a sequence of [`Amount`]s to a value, strictly
//! left to right; intermediate results may land on months of different
//! lengths, so order matters for calendar amounts.
//!
//! Calendar amounts route through chrono's calendar resolution: a
//! day-of-month that overflows the target month is **clipped** to that
//! month's last valid day (January 31 plus one month is February 28 or
//! 29), never rolled into the next month. Exact amounts add a fixed
//! absolute duration; for zoned values this is applied on the instant
//! axis, so the local wall-clock reading can shift across a
//! daylight-saving transition.

use crate::amount::{Amount, Unit};
use crate::error::{Result, TemporalError};
use crate::value::{TemporalValue, YearMonth, Zoned};
use chrono::{Duration, NaiveDate};

// ═══════════════════════════════════════════════════════════════════════════
// Application
// ═══════════════════════════════════════════════════════════════════════════

/// Apply `amounts` to `value` left to right, producing a new value.
pub fn plus(value: &TemporalValue, amounts: &[Amount]) -> Result<TemporalValue> {
    amounts
        .iter()
        .try_fold(*value, |acc, amount| apply(&acc, *amount))
}

/// Subtract `amounts` from `value`: addition of each negated amount,
/// left to right.
pub fn minus(value: &TemporalValue, amounts: &[Amount]) -> Result<TemporalValue> {
    amounts.iter().try_fold(*value, |acc, amount| apply(&acc, -*amount))
}

fn apply(value: &TemporalValue, amount: Amount) -> Result<TemporalValue> {
    if amount.is_calendar() {
        apply_calendar(value, amount)
    } else {
        apply_exact(value, amount)
    }
}

fn unsupported(value: &TemporalValue, amount: Amount) -> TemporalError {
    TemporalError::UnsupportedCapability {
        kind: value.kind(),
        operation: amount.unit().label(),
    }
}

fn apply_calendar(value: &TemporalValue, amount: Amount) -> Result<TemporalValue> {
    match value {
        TemporalValue::Zoned(_) | TemporalValue::DateTime(_) | TemporalValue::Date(_) => {
            // Field access on these kinds cannot fail, but with_date can
            // (zone resolution, range overflow).
            let date = value
                .date_part()
                .ok_or_else(|| unsupported(value, amount))?;
            let shifted = match amount.unit() {
                Unit::Years => add_months(date, amount.magnitude().checked_mul(12).ok_or(TemporalError::ArithmeticOverflow)?)?,
                Unit::Months => add_months(date, amount.magnitude())?,
                Unit::Weeks => add_days(date, amount.magnitude().checked_mul(7).ok_or(TemporalError::ArithmeticOverflow)?)?,
                Unit::Days => add_days(date, amount.magnitude())?,
                _ => unreachable!("exact unit routed to apply_calendar"),
            };
            value.with_date(shifted)
        }
        TemporalValue::YearMonth(ym) => match amount.unit() {
            Unit::Years => {
                let year = ym
                    .year()
                    .checked_add(i32::try_from(amount.magnitude()).map_err(|_| TemporalError::ArithmeticOverflow)?)
                    .ok_or(TemporalError::ArithmeticOverflow)?;
                crate::value::year_month((year, ym.month()))
            }
            Unit::Months => shift_year_month(ym, amount.magnitude()),
            _ => Err(unsupported(value, amount)),
        },
        TemporalValue::Time(_) => Err(unsupported(value, amount)),
    }
}

fn apply_exact(value: &TemporalValue, amount: Amount) -> Result<TemporalValue> {
    let duration = exact_duration(amount)?;
    match value {
        TemporalValue::Zoned(z) => {
            let instant = z
                .instant()
                .checked_add_signed(duration)
                .ok_or(TemporalError::ArithmeticOverflow)?;
            Ok(TemporalValue::Zoned(Zoned::new(instant, z.zone())))
        }
        TemporalValue::DateTime(dt) => dt
            .checked_add_signed(duration)
            .map(TemporalValue::DateTime)
            .ok_or(TemporalError::ArithmeticOverflow),
        // A bare time-of-day wraps around midnight, as the host primitive
        // defines.
        TemporalValue::Time(t) => Ok(TemporalValue::Time(t.overflowing_add_signed(duration).0)),
        TemporalValue::Date(_) | TemporalValue::YearMonth(_) => Err(unsupported(value, amount)),
    }
}

fn exact_duration(amount: Amount) -> Result<Duration> {
    let n = amount.magnitude();
    match amount.unit() {
        Unit::Hours => Duration::try_hours(n),
        Unit::Minutes => Duration::try_minutes(n),
        Unit::Seconds => Duration::try_seconds(n),
        Unit::Millis => Duration::try_milliseconds(n),
        _ => unreachable!("calendar unit routed to apply_exact"),
    }
    .ok_or(TemporalError::ArithmeticOverflow)
}

fn add_months(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let months = chrono::Months::new(
        u32::try_from(n.unsigned_abs()).map_err(|_| TemporalError::ArithmeticOverflow)?,
    );
    if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
    .ok_or(TemporalError::ArithmeticOverflow)
}

fn add_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let days = chrono::Days::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
    .ok_or(TemporalError::ArithmeticOverflow)
}

fn shift_year_month(ym: &YearMonth, n: i64) -> Result<TemporalValue> {
    let total = i64::from(ym.year())
        .checked_mul(12)
        .and_then(|t| t.checked_add(i64::from(ym.month()) - 1))
        .and_then(|t| t.checked_add(n))
        .ok_or(TemporalError::ArithmeticOverflow)?;
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| TemporalError::ArithmeticOverflow)?;
    let month = (total.rem_euclid(12) + 1) as u32;
    crate::value::year_month((year, month))
}

// ═══════════════════════════════════════════════════════════════════════════
// Measurement
// ═══════════════════════════════════════════════════════════════════════════

/// How many whole `unit`s separate `start` from `end`, truncated toward
/// zero. Each unit is computed independently — month counts come from the
/// calendar span, day-and-finer counts from the exact elapsed duration;
/// the two are not derived from each other.
pub fn between(start: &TemporalValue, end: &TemporalValue, unit: Unit) -> Result<i64> {
    if start.kind() != end.kind() {
        return Err(TemporalError::CrossVariantComparison {
            left: start.kind(),
            right: end.kind(),
        });
    }
    match unit {
        Unit::Years => Ok(months_between(start, end)? / 12),
        Unit::Months => months_between(start, end),
        Unit::Weeks => Ok(elapsed(start, end)?.num_weeks()),
        Unit::Days => Ok(elapsed(start, end)?.num_days()),
        Unit::Hours => Ok(elapsed(start, end)?.num_hours()),
        Unit::Minutes => Ok(elapsed(start, end)?.num_minutes()),
        Unit::Seconds => Ok(elapsed(start, end)?.num_seconds()),
        Unit::Millis => Ok(elapsed(start, end)?.num_milliseconds()),
    }
}

/// Whole calendar months from `start` to `end`: the raw year/month field
/// difference, pulled toward zero when the final partial month is not
/// complete (checked by re-anchoring `start` by the raw count).
fn months_between(start: &TemporalValue, end: &TemporalValue) -> Result<i64> {
    let (sy, sm) = (start.year()?, start.month()?);
    let (ey, em) = (end.year()?, end.month()?);
    let mut raw =
        (i64::from(ey) * 12 + i64::from(em)) - (i64::from(sy) * 12 + i64::from(sm));
    if start.kind() == crate::value::Kind::YearMonth {
        return Ok(raw);
    }
    let anchor = plus(start, &[Unit::Months.of(raw)])?;
    if raw > 0 && anchor.is_after(end)? {
        raw -= 1;
    } else if raw < 0 && anchor.is_before(end)? {
        raw += 1;
    }
    Ok(raw)
}

/// Exact elapsed duration from `start` to `end` (same kind, checked by the
/// caller). Year-months have no exact length and are unsupported here.
fn elapsed(start: &TemporalValue, end: &TemporalValue) -> Result<Duration> {
    match (start, end) {
        (TemporalValue::Zoned(a), TemporalValue::Zoned(b)) => {
            Ok(b.instant().signed_duration_since(a.instant()))
        }
        (TemporalValue::DateTime(a), TemporalValue::DateTime(b)) => {
            Ok(b.signed_duration_since(*a))
        }
        (TemporalValue::Date(a), TemporalValue::Date(b)) => Ok(b.signed_duration_since(*a)),
        (TemporalValue::Time(a), TemporalValue::Time(b)) => Ok(b.signed_duration_since(*a)),
        _ => Err(TemporalError::UnsupportedCapability {
            kind: start.kind(),
            operation: "exact-duration measurement",
        }),
    }
}
