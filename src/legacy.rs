// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 tempora contributors

//! Deprecated aliases.
//!
//! Legacy names that still execute their documented behavior after
//! emitting a non-fatal notice. The notice travels through an injected
//! [`DiagnosticSink`], never through the error channel and never through a
//! hidden global; the plain alias forms use [`TracingSink`], which routes
//! notices to the `tracing` subscriber as warnings.

use crate::amount::{hours, minutes, seconds, Amount};
use crate::error::Result;
use crate::value::TemporalValue;

/// Receiver for non-fatal deprecation notices.
pub trait DiagnosticSink {
    /// Deliver one notice. Must not fail and must not affect the aliased
    /// operation's result.
    fn notice(&self, message: &str);
}

/// Default sink: notices become `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notice(&self, message: &str) {
        tracing::warn!(target: "tempora::legacy", "{message}");
    }
}

/// Sink that drops notices, for callers that opt out of the diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn notice(&self, _message: &str) {}
}

/// Deprecated alias for [`TemporalValue::second`].
pub fn sec(value: &TemporalValue) -> Result<u32> {
    sec_with(value, &TracingSink)
}

/// [`sec`] with an explicit sink.
pub fn sec_with(value: &TemporalValue, sink: &dyn DiagnosticSink) -> Result<u32> {
    sink.notice("`sec` is deprecated; use `second`");
    value.second()
}

/// Deprecated alias for [`crate::amount::seconds`].
pub fn secs(n: i64) -> Amount {
    secs_with(n, &TracingSink)
}

/// [`secs`] with an explicit sink.
pub fn secs_with(n: i64, sink: &dyn DiagnosticSink) -> Amount {
    sink.notice("`secs` is deprecated; use `seconds`");
    seconds(n)
}

/// Deprecated alias for [`crate::amount::minutes`].
pub fn mins(n: i64) -> Amount {
    mins_with(n, &TracingSink)
}

/// [`mins`] with an explicit sink.
pub fn mins_with(n: i64, sink: &dyn DiagnosticSink) -> Amount {
    sink.notice("`mins` is deprecated; use `minutes`");
    minutes(n)
}

/// Deprecated alias for [`crate::amount::hours`].
pub fn hrs(n: i64) -> Amount {
    hrs_with(n, &TracingSink)
}

/// [`hrs`] with an explicit sink.
pub fn hrs_with(n: i64, sink: &dyn DiagnosticSink) -> Amount {
    sink.notice("`hrs` is deprecated; use `hours`");
    hours(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{local_time, year_month};
    use std::cell::RefCell;

    struct RecordingSink(RefCell<Vec<String>>);

    impl DiagnosticSink for RecordingSink {
        fn notice(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn aliases_delegate_after_noticing() {
        let sink = RecordingSink(RefCell::new(Vec::new()));
        let t = local_time((9, 30, 15)).unwrap();
        assert_eq!(sec_with(&t, &sink).unwrap(), 15);
        assert_eq!(secs_with(30, &sink), crate::amount::seconds(30));
        assert_eq!(mins_with(5, &sink), crate::amount::minutes(5));
        assert_eq!(hrs_with(2, &sink), crate::amount::hours(2));
        assert_eq!(sink.0.borrow().len(), 4);
        assert!(sink.0.borrow()[0].contains("deprecated"));
    }

    #[test]
    fn alias_errors_stay_on_the_error_channel() {
        let sink = RecordingSink(RefCell::new(Vec::new()));
        let ym = year_month((2024, 1)).unwrap();
        // Notice fires, the unsupported-capability error still comes back.
        assert!(sec_with(&ym, &sink).is_err());
        assert_eq!(sink.0.borrow().len(), 1);
    }

    #[test]
    fn silent_sink_drops_notices() {
        let t = local_time((9,)).unwrap();
        assert_eq!(sec_with(&t, &SilentSink).unwrap(), 0);
    }
}
