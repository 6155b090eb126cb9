//! Error types for primefactor-core.

use num_bigint::{BigInt, ParseBigIntError};
use thiserror::Error;

/// Result type alias for factorization operations.
pub type Result<T> = std::result::Result<T, FactorError>;

/// Errors that can occur while preparing or running a factorization.
#[derive(Debug, Error)]
pub enum FactorError {
    /// Only integers `>= 1` have a prime factorization.
    #[error("invalid input: {value} (number must be >= 1)")]
    InvalidInput {
        /// The rejected value.
        value: BigInt,
    },

    /// The text is not an optionally signed run of decimal digits.
    #[error("invalid number '{input}': expected decimal digits with an optional sign")]
    Parse {
        /// The text as received (before trimming).
        input: String,
        /// Set when the digits passed validation but the integer parser
        /// still refused them.
        #[source]
        source: Option<ParseBigIntError>,
    },
}

impl FactorError {
    /// Whether the caller supplied bad input (as opposed to an engine fault).
    ///
    /// Every current variant is a client error; front ends use this to pick a
    /// 4xx status or a usage exit code.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::InvalidInput { .. } | Self::Parse { .. } => true,
        }
    }
}
