// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Error types.
//!
//! All failures are local and synchronous: an error is returned by the call
//! that triggered it and the core never retries. Callers decide whether to
//! try again with different inputs.

use crate::amount::Unit;
use crate::value::Kind;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, TemporalError>;

/// Errors produced by the temporal calculus.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemporalError {
    /// A construction field was outside its valid civil range.
    ///
    /// Values are never clamped; construction fails instead.
    #[error("{field} value {value} is out of range for {kind}")]
    InvalidFieldValue {
        kind: Kind,
        field: &'static str,
        value: i64,
    },

    /// An operation was invoked on a variant that does not support it
    /// (e.g. day-of-week on a bare time-of-day).
    #[error("operation `{operation}` is not supported by {kind} values")]
    UnsupportedCapability {
        kind: Kind,
        operation: &'static str,
    },

    /// Comparison or arithmetic received operands of mismatched variants.
    #[error("cannot compare {left} with {right}")]
    CrossVariantComparison { left: Kind, right: Kind },

    /// No supplied pattern matched the input string. Reported only after
    /// every candidate pattern has been tried.
    #[error("no pattern matched input `{input}`")]
    ParseFailure { input: String },

    /// A format pattern could not be rendered for the given value.
    #[error("pattern `{pattern}` cannot format a {kind} value")]
    FormatFailure { kind: Kind, pattern: String },

    /// A zone id was not found in the tz database.
    #[error("unknown zone id `{0}`")]
    UnknownZone(String),

    /// A local wall-clock time that does not exist in the target zone
    /// (it falls inside an offset-transition gap).
    #[error("local time {local} does not exist in zone {zone}")]
    NonexistentLocalTime { local: NaiveDateTime, zone: String },

    /// An amount unit conversion crossed the fixed-length boundary:
    /// months and years have no standard millisecond length.
    #[error("cannot convert {from} to {to}: no fixed length relates them")]
    IncommensurableUnits { from: Unit, to: Unit },

    /// Arithmetic left chrono's representable range.
    #[error("temporal arithmetic overflowed the representable range")]
    ArithmeticOverflow,

    /// `earliest`/`latest` called with no values.
    #[error("selection requires at least one value")]
    EmptySelection,
}
