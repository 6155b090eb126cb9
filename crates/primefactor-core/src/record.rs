//! Timed result record handed to front ends.
//!
//! A [`PrimeFactor`] pairs the original number with its factors rendered as
//! `"2 * 2 * 5 * 5"` and the wall-clock seconds spent inside the engine call.

use std::str::FromStr;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::error::{FactorError, Result};
use crate::factor::Factorizer;
use crate::trace::{LogSink, NoopSink, TraceSink};

/// Number factored when a request does not name one.
pub const DEFAULT_NUMBER: u64 = 100;

/// Result of one timed factorization.
///
/// Serializes as `{"number": "100", "factors": "2 * 2 * 5 * 5", "duration": 0.0}`.
/// `number` is a decimal string so precision survives JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimeFactor {
    #[serde(serialize_with = "as_decimal")]
    pub number: BigInt,
    pub factors: String,
    /// Elapsed seconds around the engine call only.
    pub duration: f64,
}

impl PrimeFactor {
    /// Factor `number` and time the call, reporting steps to `sink`.
    pub fn compute<S: TraceSink>(number: &BigInt, sink: S) -> Result<Self> {
        let mut factorizer = Factorizer::with_sink(sink);
        let start = Instant::now();
        let factors = factorizer.factor(number)?;
        let elapsed = start.elapsed();
        log::debug!(
            "factored {number} into {} primes in {:.3}s",
            factors.len(),
            elapsed.as_secs_f64()
        );
        Ok(Self {
            number: number.clone(),
            factors: factors.joined(),
            duration: elapsed.as_secs_f64(),
        })
    }

    /// Elapsed time as a [`Duration`].
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.duration)
    }
}

impl std::fmt::Display for PrimeFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PrimeFactor[number={}, factors={}, duration={}]",
            self.number, self.factors, self.duration
        )
    }
}

fn as_decimal<S: Serializer>(
    value: &BigInt,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Factor `number` and time the call. With `trace`, steps go to the `log`
/// facade via [`LogSink`].
pub fn find_factor(number: &BigInt, trace: bool) -> Result<PrimeFactor> {
    if trace {
        PrimeFactor::compute(number, LogSink)
    } else {
        PrimeFactor::compute(number, NoopSink)
    }
}

/// Parse a decimal integer of any size. Surrounding whitespace is ignored.
///
/// Accepts one optional `+` or `-` followed by ASCII digits only; digit
/// separators such as `1_000` are rejected.
///
/// Range is not checked here: `0` and negatives parse fine and are rejected
/// by the engine with [`FactorError::InvalidInput`].
pub fn parse_number(text: &str) -> Result<BigInt> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FactorError::Parse {
            input: text.to_string(),
            source: None,
        });
    }
    BigInt::from_str(trimmed).map_err(|source| FactorError::Parse {
        input: text.to_string(),
        source: Some(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::CollectSink;

    #[test]
    fn find_factor_of_hundred() {
        let record = find_factor(&BigInt::from(100), true).unwrap();
        assert_eq!(record.number, BigInt::from(100));
        assert_eq!(record.factors, "2 * 2 * 5 * 5");
        assert!(record.duration >= 0.0);
    }

    #[test]
    fn find_factor_rejects_zero() {
        let err = find_factor(&BigInt::from(0), false).unwrap_err();
        assert!(matches!(err, FactorError::InvalidInput { .. }));
    }

    #[test]
    fn compute_reports_to_sink() {
        let mut sink = CollectSink::new();
        let record = PrimeFactor::compute(&BigInt::from(12), &mut sink).unwrap();
        assert_eq!(record.factors, "2 * 2 * 3");
        assert_eq!(sink.lines().first().unwrap(), "tracing enabled");
        assert_eq!(sink.lines().last().unwrap(), "returning factors: [2, 2, 3]");
    }

    #[test]
    fn json_shape() {
        let record = PrimeFactor {
            number: parse_number("9223372036854775807123").unwrap(),
            factors: "x".to_string(),
            duration: 0.25,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["number"], "9223372036854775807123");
        assert_eq!(value["factors"], "x");
        assert_eq!(value["duration"], 0.25);
    }

    #[test]
    fn display_mentions_every_field() {
        let record = find_factor(&BigInt::from(6), false).unwrap();
        let text = record.to_string();
        assert!(text.starts_with("PrimeFactor[number=6, factors=2 * 3, duration="));
    }

    // -----------------------------------------------------------------------
    // parse_number
    // -----------------------------------------------------------------------

    #[test]
    fn parse_accepts_large_and_padded() {
        let n = parse_number(" 3121121111111121130\n").unwrap();
        assert_eq!(n.to_string(), "3121121111111121130");
        assert_eq!(parse_number("-5").unwrap(), BigInt::from(-5));
        assert_eq!(parse_number("+7").unwrap(), BigInt::from(7));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in [
            "", "abc", "12.5", "1e10", "0x10", "1_000", "1__0", "_1", "+", "-", "+-5", "--5",
            "9_223_372_036_854_775_807", "1 000",
        ] {
            let err = parse_number(bad).unwrap_err();
            assert!(matches!(err, FactorError::Parse { .. }), "accepted {bad:?}");
        }
    }
}
