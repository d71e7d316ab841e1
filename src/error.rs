//! Configuration errors.

use thiserror::Error;

/// Errors returned while configuring a `ChainingHashMap`.
///
/// The map operations themselves never fail; only builder input is validated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The maximum load factor must lie in `(0.0, 1.0]`.
    #[error("max load factor must be in (0.0, 1.0], got {0}")]
    InvalidLoadFactor(f64),
}
