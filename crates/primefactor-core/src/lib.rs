//! # primefactor-core
//!
//! **Deterministic prime factorization for integers of any size.**
//!
//! `primefactor-core` splits a positive integer into its prime factors by
//! trial division. All arithmetic is exact and arbitrary-precision
//! ([`num_bigint`]), so inputs far beyond 64 bits are handled correctly.
//!
//! ## Quick Start
//!
//! ```
//! use num_bigint::BigInt;
//! use primefactor_core::factor;
//!
//! let factors = factor(&BigInt::from(100), false).unwrap();
//! assert_eq!(factors.to_string(), "2 * 2 * 5 * 5");
//! ```
//!
//! ## Architecture
//!
//! Input → strip twos → walk odd divisors → emit remainder → [`FactorList`]
//!
//! Tracing is opt-in and explicit: every step is reported to a [`TraceSink`]
//! supplied by the caller. The engine holds no global state, so concurrent
//! calls from several threads are independent.
//!
//! The [`record`] module wraps a factorization with wall-clock timing into the
//! [`PrimeFactor`] record that front ends serialize.

pub mod error;
pub mod factor;
pub mod record;
pub mod trace;

pub use num_bigint::{BigInt, BigUint};

pub use error::{FactorError, Result};
pub use factor::{FactorList, Factorizer, factor, factor_with};
pub use record::{DEFAULT_NUMBER, PrimeFactor, find_factor, parse_number};
pub use trace::{CollectSink, LogSink, NoopSink, TRACE_TARGET, TraceSink};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
