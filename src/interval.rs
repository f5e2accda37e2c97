// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Half-open interval algebra.
//!
//! An [`Interval`] is an immutable pair of same-kind temporal values with
//! "closed on the left, open on the right" semantics: a point equal to
//! `start` is inside the interval, a point equal to `end` is not.
//! Degenerate intervals (`start == end`) are valid zero-length spans.
//!
//! The algebra never touches raw fields — everything routes through the
//! comparison and arithmetic capabilities, so it works uniformly for every
//! value kind.

use crate::amount::{Amount, Unit};
use crate::arith;
use crate::clock::Clock;
use crate::error::{Result, TemporalError};
use crate::value::{Kind, TemporalValue};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open span `[start, end)` between two same-kind temporal values.
///
/// `start <= end` is a caller responsibility and is not enforced at
/// construction; kind mismatch, however, fails fast.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    start: TemporalValue,
    end: TemporalValue,
}

impl Interval {
    /// Create an interval between two same-kind values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::{date_time, Interval};
    ///
    /// let span = Interval::new(date_time((1986, 1, 1))?, date_time((1990, 1, 1))?)?;
    /// assert!(span.contains(&date_time((1987, 1, 1))?)?);
    /// # Ok::<(), tempora::TemporalError>(())
    /// ```
    pub fn new(start: TemporalValue, end: TemporalValue) -> Result<Interval> {
        if start.kind() != end.kind() {
            return Err(TemporalError::CrossVariantComparison {
                left: start.kind(),
                right: end.kind(),
            });
        }
        Ok(Interval { start, end })
    }

    /// The inclusive start boundary.
    #[inline]
    pub const fn start(&self) -> &TemporalValue {
        &self.start
    }

    /// The exclusive end boundary.
    #[inline]
    pub const fn end(&self) -> &TemporalValue {
        &self.end
    }

    /// The kind of both boundaries.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.start.kind()
    }

    /// Whether `point` lies inside the interval: true iff the point equals
    /// `start`, or lies strictly between the boundaries. Equality to `end`
    /// is *not* inside — this is the strict half-open rule, unlike the
    /// relaxed free-standing [`within`].
    pub fn contains(&self, point: &TemporalValue) -> Result<bool> {
        Ok(point.equal(&self.start)?
            || (self.start.is_before(point)? && self.end.is_after(point)?))
    }

    /// Whether the two intervals share any span: literally
    /// `self.end after other.start AND self.start before other.end`.
    ///
    /// Intervals that merely touch (one's end equals the other's start) do
    /// not overlap — that boundary case is exactly [`Self::abuts`], and
    /// the two predicates are mutually exclusive there.
    pub fn overlaps(&self, other: &Interval) -> Result<bool> {
        Ok(self.end.is_after(&other.start)? && self.start.is_before(&other.end)?)
    }

    /// Whether `self` ends exactly where `other` starts. One-directional
    /// as written: callers wanting symmetric adjacency test both orders.
    pub fn abuts(&self, other: &Interval) -> Result<bool> {
        self.end.equal(&other.start)
    }

    /// The overlapping sub-interval, or `None` when the intervals are
    /// disjoint or merely touching. Never returns a degenerate interval
    /// for the no-overlap case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::{date_time, Interval};
    ///
    /// let a = Interval::new(date_time((1986, 1, 1))?, date_time((1990, 1, 1))?)?;
    /// let b = Interval::new(date_time((1987, 1, 1))?, date_time((1991, 1, 1))?)?;
    ///
    /// let o = a.overlap(&b)?.expect("proper overlap");
    /// assert!(o.start().equal(&date_time((1987, 1, 1))?)?);
    /// assert!(o.end().equal(&date_time((1990, 1, 1))?)?);
    /// # Ok::<(), tempora::TemporalError>(())
    /// ```
    pub fn overlap(&self, other: &Interval) -> Result<Option<Interval>> {
        if !self.overlaps(other)? {
            return Ok(None);
        }
        let start = if self.start.is_after(&other.start)? {
            self.start
        } else {
            other.start
        };
        let end = if self.end.is_before(&other.end)? {
            self.end
        } else {
            other.end
        };
        Ok(Some(Interval { start, end }))
    }

    /// [`Self::overlap`] with an optional second operand: when `other` is
    /// absent, a zero-length interval anchored at the clock's current
    /// instant takes its place. Only the second operand may be omitted.
    pub fn overlap_or_now(
        &self,
        other: Option<&Interval>,
        clock: &dyn Clock,
    ) -> Result<Option<Interval>> {
        match other {
            Some(other) => self.overlap(other),
            None => {
                let now = crate::clock::now_with(clock);
                self.overlap(&Interval::new(now, now)?)
            }
        }
    }

    /// A new interval with the same start and the end advanced by
    /// `amounts` (left-to-right composition).
    pub fn extend(&self, amounts: &[Amount]) -> Result<Interval> {
        Ok(Interval {
            start: self.start,
            end: arith::plus(&self.end, amounts)?,
        })
    }

    /// A new interval with both boundaries advanced by the same amounts,
    /// applied to each boundary independently — for calendar amounts the
    /// two boundaries may clip differently, so the end is never re-derived
    /// from the start.
    pub fn shift(&self, amounts: &[Amount]) -> Result<Interval> {
        Ok(Interval {
            start: arith::plus(&self.start, amounts)?,
            end: arith::plus(&self.end, amounts)?,
        })
    }

    /// How many whole `unit`s the interval spans, truncated toward zero.
    pub fn in_units(&self, unit: Unit) -> Result<i64> {
        arith::between(&self.start, &self.end, unit)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Relaxed three-argument containment over bare boundary values: true when
/// `point` equals either boundary or lies strictly between them.
///
/// Deliberately more permissive at the end boundary than
/// [`Interval::contains`] — equality to `end` counts here. Both forms
/// exist with different boundary rules; pick knowingly.
pub fn within(
    start: &TemporalValue,
    end: &TemporalValue,
    point: &TemporalValue,
) -> Result<bool> {
    Ok(point.equal(start)?
        || point.equal(end)?
        || (start.is_before(point)? && end.is_after(point)?))
}

/// The earliest of the given values by pairwise `is_before` reduction;
/// ties keep the first-seen operand.
pub fn earliest(values: &[TemporalValue]) -> Result<TemporalValue> {
    select(values, |candidate, best| candidate.is_before(best))
}

/// The latest of the given values by pairwise `is_after` reduction; ties
/// keep the first-seen operand.
pub fn latest(values: &[TemporalValue]) -> Result<TemporalValue> {
    select(values, |candidate, best| candidate.is_after(best))
}

fn select(
    values: &[TemporalValue],
    replace: impl Fn(&TemporalValue, &TemporalValue) -> Result<bool>,
) -> Result<TemporalValue> {
    let (first, rest) = values.split_first().ok_or(TemporalError::EmptySelection)?;
    let mut best = *first;
    for candidate in rest {
        if replace(candidate, &best)? {
            best = *candidate;
        }
    }
    Ok(best)
}
