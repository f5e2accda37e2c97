// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Property-test generator collaborator (feature `testkit`).
//!
//! Produces arbitrary valid temporal values of a requested kind, uniformly
//! distributed inside a caller-specified absolute-instant range. Sampling
//! happens on the millisecond instant axis, then projects onto the
//! requested representation, so validity is guaranteed by construction.

use crate::value::{Kind, TemporalValue, Zoned};
use crate::zone::Zone;
use chrono::{DateTime, Datelike, Utc};
use proptest::prelude::*;

/// A proptest strategy for values of `kind` inside `[start, end)`.
///
/// Degenerate ranges (`start >= end`) collapse to the single instant
/// `start`.
pub fn value_between(
    kind: Kind,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> BoxedStrategy<TemporalValue> {
    let lo = start.timestamp_millis();
    let hi = end.timestamp_millis().max(lo + 1);
    (lo..hi)
        .prop_map(move |millis| {
            let instant = DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
            project(kind, instant)
        })
        .boxed()
}

fn project(kind: Kind, instant: DateTime<Utc>) -> TemporalValue {
    let naive = instant.naive_utc();
    match kind {
        Kind::Zoned => TemporalValue::Zoned(Zoned::new(instant, Zone::utc())),
        Kind::DateTime => TemporalValue::DateTime(naive),
        Kind::Date => TemporalValue::Date(naive.date()),
        Kind::Time => TemporalValue::Time(naive.time()),
        Kind::YearMonth => {
            let date = naive.date();
            // Month 1-12 straight from a valid date, so this cannot fail.
            crate::value::year_month((date.year(), date.month()))
                .unwrap_or(TemporalValue::Date(date))
        }
    }
}
