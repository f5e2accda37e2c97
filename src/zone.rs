// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Zone and offset handles.
//!
//! A [`Zone`] identifies either a named IANA region (backed by
//! `chrono-tz`) or a fixed numeric offset. It is used to tag zoned values
//! and to convert between zone-local and absolute readings; all rule-table
//! lookups delegate to the tz database.

use crate::error::{Result, TemporalError};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;

/// A named region or fixed-offset zone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Named IANA region, e.g. `Europe/Paris`.
    Named(Tz),
    /// Fixed offset from UTC, e.g. `+05:30`.
    Fixed(FixedOffset),
}

impl Zone {
    /// The UTC zone.
    #[inline]
    pub const fn utc() -> Zone {
        Zone::Named(Tz::UTC)
    }

    /// Look up a named zone by its IANA id.
    pub fn for_id(id: &str) -> Result<Zone> {
        id.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| TemporalError::UnknownZone(id.to_string()))
    }

    /// Build a fixed-offset zone from signed hour/minute/second components.
    ///
    /// Components are summed as given, so a negative offset is expressed
    /// with negative components (`for_offset(-5, -30, 0)` is `-05:30`).
    pub fn for_offset(hours: i32, minutes: i32, seconds: i32) -> Result<Zone> {
        let total = i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds);
        i32::try_from(total)
            .ok()
            .and_then(FixedOffset::east_opt)
            .map(Zone::Fixed)
            .ok_or(TemporalError::InvalidFieldValue {
                kind: crate::value::Kind::Zoned,
                field: "offset-seconds",
                value: total,
            })
    }

    /// The host's default zone, resolved through the system tz setting.
    /// Falls back to UTC when the host zone cannot be determined or is not
    /// in the tz database.
    pub fn default_zone() -> Zone {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|id| id.parse::<Tz>().ok())
            .map(Zone::Named)
            .unwrap_or_else(Zone::utc)
    }

    /// All named zone ids known to the tz database.
    pub fn available_ids() -> impl Iterator<Item = &'static str> {
        chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name())
    }

    /// The zone's identifier: the IANA name, or the offset in `±HH:MM`
    /// form for fixed offsets.
    pub fn id(&self) -> String {
        match self {
            Zone::Named(tz) => tz.name().to_string(),
            Zone::Fixed(off) => off.to_string(),
        }
    }

    /// The UTC offset in effect at `instant`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Named(tz) => instant.with_timezone(tz).offset().fix(),
            Zone::Fixed(off) => *off,
        }
    }

    /// The zone-local civil reading of `instant`.
    pub fn local_at(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset_at(instant)).naive_local()
    }

    /// Anchor a zone-local civil reading to an absolute instant.
    ///
    /// Local times repeated by a backward offset transition resolve to the
    /// earlier of the two instants; local times skipped by a forward
    /// transition do not exist and are an error.
    pub fn resolve_local(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        let resolved = match self {
            Zone::Named(tz) => tz
                .from_local_datetime(&local)
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(off) => off
                .from_local_datetime(&local)
                .map(|dt| dt.with_timezone(&Utc)),
        };
        match resolved {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(earlier, _later) => Ok(earlier),
            LocalResult::None => Err(TemporalError::NonexistentLocalTime {
                local,
                zone: self.id(),
            }),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Zone {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Zone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::str::FromStr;

        let id = String::deserialize(deserializer)?;
        if let Ok(tz) = id.parse::<Tz>() {
            return Ok(Zone::Named(tz));
        }
        FixedOffset::from_str(&id)
            .map(Zone::Fixed)
            .map_err(|_| serde::de::Error::custom(format!("unknown zone id `{id}`")))
    }
}
