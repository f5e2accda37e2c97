// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Calendar and exact-duration amounts.
//!
//! Amounts come in two families:
//!
//! - **Calendar** units (years, months, weeks, days): their absolute length
//!   depends on the anchor they are applied to — adding one month to
//!   January 31 resolves to the last valid day of February.
//! - **Exact** units (hours, minutes, seconds, milliseconds): fixed length
//!   regardless of anchor.
//!
//! A bare [`Unit`] is a *measuring* marker with no magnitude — it selects a
//! unit for span measurement ([`crate::arith::between`], floor targets) and
//! cannot be applied additively. An [`Amount`] pairs a unit with a signed
//! magnitude and is what [`crate::arith::plus`]/[`crate::arith::minus`]
//! accept; subtraction is addition of the negated amount.

use crate::error::{Result, TemporalError};
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A measuring unit, ordered finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl Unit {
    /// Whether this unit belongs to the calendar family (anchor-dependent
    /// length) rather than the exact family.
    #[inline]
    pub const fn is_calendar(self) -> bool {
        matches!(self, Unit::Days | Unit::Weeks | Unit::Months | Unit::Years)
    }

    /// Pair this unit with a magnitude, producing an applicable [`Amount`].
    #[inline]
    pub const fn of(self, magnitude: i64) -> Amount {
        Amount {
            unit: self,
            magnitude,
        }
    }

    /// Lowercase unit label, used by `Display` and diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Unit::Millis => "millis",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A signed magnitude of a single [`Unit`].
///
/// Magnitudes may be negative. Amounts of different units compose in a
/// single `plus`/`minus` call by strictly left-to-right application —
/// order matters for calendar units because intermediate results may land
/// on months of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amount {
    unit: Unit,
    magnitude: i64,
}

impl Amount {
    /// The unit of this amount.
    #[inline]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The signed magnitude.
    #[inline]
    pub const fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// Whether this amount is in the calendar family.
    #[inline]
    pub const fn is_calendar(&self) -> bool {
        self.unit.is_calendar()
    }

    /// How many whole `unit`s this amount spans, truncated toward zero.
    ///
    /// Weeks and finer convert through their standard lengths (a week is 7
    /// days, a day 24 hours). Months and years have no standard length and
    /// only convert between each other; crossing that family boundary is an
    /// [`IncommensurableUnits`] error.
    ///
    /// [`IncommensurableUnits`]: crate::TemporalError::IncommensurableUnits
    pub fn in_units(&self, unit: Unit) -> Result<i64> {
        let overflow = TemporalError::ArithmeticOverflow;
        match (standard_millis(self.unit), standard_millis(unit)) {
            (Some(from), Some(to)) => self
                .magnitude
                .checked_mul(from)
                .map(|total| total / to)
                .ok_or(overflow),
            (None, None) => {
                let months = match self.unit {
                    Unit::Years => self.magnitude.checked_mul(12).ok_or(overflow)?,
                    _ => self.magnitude,
                };
                Ok(match unit {
                    Unit::Years => months / 12,
                    _ => months,
                })
            }
            _ => Err(TemporalError::IncommensurableUnits {
                from: self.unit,
                to: unit,
            }),
        }
    }
}

/// Fixed millisecond length of a unit, or `None` for the month-based units.
const fn standard_millis(unit: Unit) -> Option<i64> {
    match unit {
        Unit::Millis => Some(1),
        Unit::Seconds => Some(1_000),
        Unit::Minutes => Some(60_000),
        Unit::Hours => Some(3_600_000),
        Unit::Days => Some(86_400_000),
        Unit::Weeks => Some(604_800_000),
        Unit::Months | Unit::Years => None,
    }
}

impl Neg for Amount {
    type Output = Amount;

    #[inline]
    fn neg(self) -> Amount {
        Amount {
            unit: self.unit,
            magnitude: -self.magnitude,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

// ── magnitude constructors ────────────────────────────────────────────────

/// `n` calendar years.
#[inline]
pub const fn years(n: i64) -> Amount {
    Unit::Years.of(n)
}

/// `n` calendar months.
#[inline]
pub const fn months(n: i64) -> Amount {
    Unit::Months.of(n)
}

/// `n` calendar weeks.
#[inline]
pub const fn weeks(n: i64) -> Amount {
    Unit::Weeks.of(n)
}

/// `n` calendar days.
#[inline]
pub const fn days(n: i64) -> Amount {
    Unit::Days.of(n)
}

/// `n` exact hours.
#[inline]
pub const fn hours(n: i64) -> Amount {
    Unit::Hours.of(n)
}

/// `n` exact minutes.
#[inline]
pub const fn minutes(n: i64) -> Amount {
    Unit::Minutes.of(n)
}

/// `n` exact seconds.
#[inline]
pub const fn seconds(n: i64) -> Amount {
    Unit::Seconds.of(n)
}

/// `n` exact milliseconds.
#[inline]
pub const fn millis(n: i64) -> Amount {
    Unit::Millis.of(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_split() {
        assert!(Unit::Years.is_calendar());
        assert!(Unit::Weeks.is_calendar());
        assert!(!Unit::Hours.is_calendar());
        assert!(!Unit::Millis.is_calendar());
    }

    #[test]
    fn negation_flips_magnitude_only() {
        let a = months(3);
        let b = -a;
        assert_eq!(b.unit(), Unit::Months);
        assert_eq!(b.magnitude(), -3);
        assert_eq!(-b, a);
    }

    #[test]
    fn unit_of_matches_constructor() {
        assert_eq!(Unit::Days.of(7), days(7));
        assert_eq!(Unit::Seconds.of(-1), seconds(-1));
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(format!("{}", weeks(3)), "3 weeks");
        assert_eq!(format!("{}", millis(-250)), "-250 millis");
        assert_eq!(format!("{}", Unit::Years), "years");
    }

    #[test]
    fn in_units_converts_through_standard_lengths() {
        assert_eq!(weeks(2).in_units(Unit::Days).unwrap(), 14);
        assert_eq!(hours(1).in_units(Unit::Seconds).unwrap(), 3_600);
        // Truncation toward zero, both signs.
        assert_eq!(seconds(90).in_units(Unit::Minutes).unwrap(), 1);
        assert_eq!(seconds(-90).in_units(Unit::Minutes).unwrap(), -1);
    }

    #[test]
    fn in_units_within_the_month_family() {
        assert_eq!(years(3).in_units(Unit::Months).unwrap(), 36);
        assert_eq!(months(30).in_units(Unit::Years).unwrap(), 2);
    }

    #[test]
    fn in_units_rejects_month_to_fixed_conversion() {
        assert_eq!(
            months(1).in_units(Unit::Days),
            Err(TemporalError::IncommensurableUnits {
                from: Unit::Months,
                to: Unit::Days,
            })
        );
        assert!(days(30).in_units(Unit::Months).is_err());
    }

    #[test]
    fn units_order_finest_to_coarsest() {
        assert!(Unit::Millis < Unit::Seconds);
        assert!(Unit::Hours < Unit::Days);
        assert!(Unit::Months < Unit::Years);
    }
}
