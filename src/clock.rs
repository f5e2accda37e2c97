// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! The clock boundary.
//!
//! Reading the current instant is the only impure operation in the crate.
//! The [`Clock`] trait makes the time source explicit, scoped context:
//! production code passes [`SystemClock`], tests pass [`FixedClock`] to
//! make time-dependent code deterministic. There are no ambient clock
//! overrides — a global mutable clock is unsafe under concurrent callers.

use crate::amount::{days, Amount};
use crate::arith;
use crate::error::Result;
use crate::value::{TemporalValue, Zoned};
use crate::zone::Zone;
use chrono::{DateTime, Utc};

/// A source of the current absolute instant.
pub trait Clock {
    /// The current instant on the UTC axis.
    fn utc_now(&self) -> DateTime<Utc>;
}

/// The host system clock. Repeated reads are not required to return the
/// same value; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to the given instant.
    pub const fn at(instant: DateTime<Utc>) -> FixedClock {
        FixedClock(instant)
    }

    /// Pin the clock to a unix-epoch millisecond timestamp.
    pub fn at_unix_millis(millis: i64) -> FixedClock {
        FixedClock(DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH))
    }
}

impl Clock for FixedClock {
    fn utc_now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ── reading the clock ─────────────────────────────────────────────────────

/// The current instant as a zoned value with a fixed UTC zone.
pub fn now() -> TemporalValue {
    now_with(&SystemClock)
}

/// [`now`] against an explicit clock.
pub fn now_with(clock: &dyn Clock) -> TemporalValue {
    TemporalValue::Zoned(Zoned::new(clock.utc_now(), Zone::utc()))
}

/// Today's date in the host's default zone.
pub fn today() -> TemporalValue {
    today_with(&SystemClock)
}

/// [`today`] against an explicit clock.
pub fn today_with(clock: &dyn Clock) -> TemporalValue {
    let local = Zone::default_zone().local_at(clock.utc_now());
    TemporalValue::Date(local.date())
}

/// The current time of day in the host's default zone.
pub fn time_now() -> TemporalValue {
    time_now_with(&SystemClock)
}

/// [`time_now`] against an explicit clock.
pub fn time_now_with(clock: &dyn Clock) -> TemporalValue {
    let local = Zone::default_zone().local_at(clock.utc_now());
    TemporalValue::Time(local.time())
}

// ── relative helpers ──────────────────────────────────────────────────────

/// The current instant moved back by `amounts`.
pub fn ago(amounts: &[Amount]) -> Result<TemporalValue> {
    ago_with(amounts, &SystemClock)
}

/// [`ago`] against an explicit clock.
pub fn ago_with(amounts: &[Amount], clock: &dyn Clock) -> Result<TemporalValue> {
    arith::minus(&now_with(clock), amounts)
}

/// The current instant moved forward by `amounts`.
pub fn from_now(amounts: &[Amount]) -> Result<TemporalValue> {
    from_now_with(amounts, &SystemClock)
}

/// [`from_now`] against an explicit clock.
pub fn from_now_with(amounts: &[Amount], clock: &dyn Clock) -> Result<TemporalValue> {
    arith::plus(&now_with(clock), amounts)
}

/// One day before the current instant.
pub fn yesterday() -> Result<TemporalValue> {
    ago(&[days(1)])
}
