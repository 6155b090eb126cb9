//! Trial-division factorization engine.
//!
//! # Algorithm
//!
//! ```text
//! remaining := n
//! strip twos      while remaining is even: emit 2, remaining /= 2
//! walk odds       d = 3, 5, 7, ... while d * d <= remaining:
//!                     while d | remaining: emit d, remaining /= d
//! emit remainder  if remaining > 1: emit remaining
//! ```
//!
//! The loop bound is the exact integer comparison `d * d <= remaining`; no
//! square root (floating or otherwise) is taken. Each emitted value has no
//! divisor smaller than itself other than 1, because all smaller divisors were
//! stripped first, so every element of the result is prime.
//!
//! While `remaining` needs more than 64 bits the walk runs on [`BigUint`]. As
//! soon as it fits in a `u64` the walk continues on native integers with a
//! `u128` bound check, which is exact and only changes speed.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Serialize, Serializer};

use crate::error::{FactorError, Result};
use crate::trace::{LogSink, NoopSink, TraceSink};

// ---------------------------------------------------------------------------
// FactorList
// ---------------------------------------------------------------------------

/// Prime factors of a number, with multiplicity, in non-decreasing order.
///
/// Empty exactly when the factored number was 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FactorList {
    factors: Vec<BigUint>,
}

impl FactorList {
    /// Number of prime factors, counted with multiplicity.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigUint> {
        self.factors.iter()
    }

    pub fn as_slice(&self) -> &[BigUint] {
        &self.factors
    }

    pub fn into_vec(self) -> Vec<BigUint> {
        self.factors
    }

    /// Product of all factors at arbitrary precision (1 for an empty list).
    pub fn product(&self) -> BigUint {
        self.factors.iter().product()
    }

    /// Factors as decimal values joined by `" * "`, e.g. `"2 * 2 * 5 * 5"`.
    pub fn joined(&self) -> String {
        self.to_string()
    }

    fn push(&mut self, factor: BigUint) {
        self.factors.push(factor);
    }
}

impl fmt::Display for FactorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                f.write_str(" * ")?;
            }
            write!(f, "{factor}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FactorList {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

impl IntoIterator for FactorList {
    type Item = BigUint;
    type IntoIter = std::vec::IntoIter<BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.into_iter()
    }
}

/// Serialized as an array of decimal strings.
impl Serialize for FactorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.factors.iter().map(|f| f.to_string()))
    }
}

/// Renders the summary line as `[2, 2, 3]`.
struct Bracketed<'a>(&'a FactorList);

impl fmt::Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, factor) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{factor}")?;
        }
        f.write_str("]")
    }
}

// ---------------------------------------------------------------------------
// Factorizer
// ---------------------------------------------------------------------------

/// Trial-division factorizer reporting its steps to a [`TraceSink`].
///
/// A `Factorizer` carries no state between calls other than its sink, so one
/// instance can factor any number of values.
#[derive(Debug, Default)]
pub struct Factorizer<S: TraceSink = NoopSink> {
    sink: S,
}

impl Factorizer<NoopSink> {
    /// Factorizer with tracing disabled.
    pub fn new() -> Self {
        Self { sink: NoopSink }
    }
}

impl<S: TraceSink> Factorizer<S> {
    /// Factorizer that reports every step to `sink`.
    pub fn with_sink(sink: S) -> Self {
        let mut factorizer = Self { sink };
        factorizer.trace(format_args!("tracing enabled"));
        factorizer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Factor `n` into primes.
    ///
    /// `n` is never modified; the walk runs on a private working copy.
    ///
    /// # Errors
    ///
    /// [`FactorError::InvalidInput`] when `n < 1`, before any division is
    /// attempted.
    pub fn factor(&mut self, n: &BigInt) -> Result<FactorList> {
        let mut remaining = match n.to_biguint() {
            Some(value) if !value.is_zero() => value,
            _ => return Err(FactorError::InvalidInput { value: n.clone() }),
        };
        let mut factors = FactorList::default();

        self.strip_twos(&mut remaining, &mut factors);

        let mut divisor = BigUint::from(3u32);
        loop {
            if let Some(small) = remaining.to_u64() {
                // divisor <= sqrt(old remaining) here; if it no longer fits,
                // it is already past the bound of the smaller value.
                let small_divisor = divisor.to_u64().unwrap_or(u64::MAX);
                let rest = self.walk_odds_u64(small, small_divisor, &mut factors);
                remaining = BigUint::from(rest);
                break;
            }
            if &divisor * &divisor > remaining {
                break;
            }
            let (quotient, rem) = remaining.div_rem(&divisor);
            if rem.is_zero() {
                self.record_division(&divisor, &remaining, &quotient, &mut factors);
                remaining = quotient;
            } else {
                divisor += 2u32;
            }
        }

        if remaining > BigUint::one() {
            self.trace(format_args!("last factor: {remaining}"));
            factors.push(remaining);
        }

        self.trace(format_args!("returning factors: {}", Bracketed(&factors)));
        Ok(factors)
    }

    /// Forward a line to the sink unless it has opted out.
    fn trace(&mut self, line: fmt::Arguments<'_>) {
        if self.sink.is_enabled() {
            self.sink.emit(line);
        }
    }

    fn strip_twos(&mut self, remaining: &mut BigUint, factors: &mut FactorList) {
        let two = BigUint::from(2u32);
        while remaining.is_even() {
            let quotient = &*remaining >> 1u32;
            self.record_division(&two, remaining, &quotient, factors);
            *remaining = quotient;
        }
    }

    /// Continue the odd walk once the remaining value fits in 64 bits.
    /// Returns what is left after every divisor up to its square root has
    /// been stripped.
    fn walk_odds_u64(
        &mut self,
        mut remaining: u64,
        mut divisor: u64,
        factors: &mut FactorList,
    ) -> u64 {
        while u128::from(divisor) * u128::from(divisor) <= u128::from(remaining) {
            if remaining % divisor == 0 {
                let quotient = remaining / divisor;
                self.trace(format_args!("factor found: {divisor}"));
                self.trace(format_args!("divide {remaining} / {divisor} = {quotient}"));
                factors.push(BigUint::from(divisor));
                remaining = quotient;
            } else {
                // divisor <= 2^32 inside the loop, so this cannot overflow.
                divisor += 2;
            }
        }
        remaining
    }

    fn record_division(
        &mut self,
        divisor: &BigUint,
        before: &BigUint,
        after: &BigUint,
        factors: &mut FactorList,
    ) {
        self.trace(format_args!("factor found: {divisor}"));
        self.trace(format_args!("divide {before} / {divisor} = {after}"));
        factors.push(divisor.clone());
    }
}

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Factor `n`, sending trace lines to the `log` facade when `trace` is set.
///
/// ```
/// use num_bigint::BigInt;
///
/// let factors = primefactor_core::factor(&BigInt::from(97), false).unwrap();
/// assert_eq!(factors.joined(), "97");
/// ```
pub fn factor(n: &BigInt, trace: bool) -> Result<FactorList> {
    if trace {
        Factorizer::with_sink(LogSink).factor(n)
    } else {
        Factorizer::new().factor(n)
    }
}

/// Factor `n`, reporting every step to `sink`.
pub fn factor_with<S: TraceSink>(n: &BigInt, sink: S) -> Result<FactorList> {
    Factorizer::with_sink(sink).factor(n)
}
