// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! # tempora
//!
//! A civil temporal-value calculus: a uniform arithmetic and comparison
//! layer over five date/time representation kinds, plus a half-open
//! interval algebra on top of them.
//!
//! # Core types
//!
//! - [`TemporalValue`] — closed tagged union: zoned instant, local
//!   date-time, local date, local time, year-month.
//! - [`Kind`] — the representation tag.
//! - [`Amount`] / [`Unit`] — calendar amounts (anchor-dependent length)
//!   and exact durations (fixed length), plus bare measuring units.
//! - [`Interval`] — a `[start, end)` span between two same-kind values.
//! - [`Zone`] — named IANA region or fixed offset.
//! - [`Clock`] — the explicit time source, the crate's only impure edge.
//!
//! # Capability table
//!
//! Generic operations dispatch per variant; invoking one a variant does
//! not support is an error, never a default:
//!
//! | Operation | Zoned | DateTime | Date | Time | YearMonth |
//! |-----------|-------|----------|------|------|-----------|
//! | `year`/`month` | ✓ | ✓ | ✓ | — | ✓ |
//! | `day`/`day_of_week`/ISO week | ✓ | ✓ | ✓ | — | — |
//! | `hour`…`millisecond` | ✓ | ✓ | — | ✓ | — |
//! | month adjusters | ✓ | ✓ | ✓ | — | — |
//! | calendar amounts | ✓ | ✓ | ✓ | — | years/months |
//! | exact amounts | ✓ | ✓ | — | ✓ (wraps) | — |
//!
//! Comparison (`equal`, `is_before`, `is_after`) requires both operands to
//! be the same kind and fails fast otherwise.
//!
//! # Example
//!
//! ```
//! use tempora::{date_time, months, weeks, Interval, Unit};
//!
//! let start = date_time((1986, 10, 14))?;
//! let end = tempora::plus(&start, &[months(1), weeks(3)])?;
//! assert!(end.equal(&date_time((1986, 12, 5))?)?);
//!
//! let span = Interval::new(start, end)?;
//! assert!(span.contains(&date_time((1986, 11, 1))?)?);
//! assert_eq!(span.in_units(Unit::Weeks)?, 7);
//! # Ok::<(), tempora::TemporalError>(())
//! ```
//!
//! All values are immutable and all operations except the [`Clock`] are
//! pure, so everything is freely shareable across threads.

mod amount;
mod arith;
mod clock;
pub mod coerce;
mod error;
mod floor;
pub mod format;
#[cfg(any(test, feature = "testkit"))]
pub mod generate;
mod interval;
pub mod legacy;
mod value;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use amount::{days, hours, millis, minutes, months, seconds, weeks, years, Amount, Unit};
pub use arith::{between, minus, plus};
pub use clock::{
    ago, ago_with, from_now, from_now_with, now, now_with, time_now, time_now_with, today,
    today_with, yesterday, Clock, FixedClock, SystemClock,
};
pub use error::{Result, TemporalError};
pub use floor::floor;
pub use interval::{earliest, latest, within, Interval};
pub use legacy::{DiagnosticSink, SilentSink, TracingSink};
pub use value::{
    date_time, local_date, local_date_time, local_time, year_month, DateTimeFields, Kind,
    TemporalValue, TimeFields, YearMonth, YearMonthFields, Zoned,
};
pub use zone::Zone;

/// The host's default zone (see [`Zone::default_zone`]).
pub fn default_zone() -> Zone {
    Zone::default_zone()
}

/// Named-zone lookup (see [`Zone::for_id`]).
pub fn zone_for_id(id: &str) -> Result<Zone> {
    Zone::for_id(id)
}

/// Fixed-offset zone construction (see [`Zone::for_offset`]).
pub fn zone_for_offset(hours: i32, minutes: i32, seconds: i32) -> Result<Zone> {
    Zone::for_offset(hours, minutes, seconds)
}

/// All named zone ids known to the tz database.
pub fn available_zone_ids() -> impl Iterator<Item = &'static str> {
    Zone::available_ids()
}
