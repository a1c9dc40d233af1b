//! Validation utilities for KEM binding operations
//!
//! Every check the binding layer performs before dispatching into a
//! native provider goes through one of these helpers, so failure
//! construction stays uniform across the facade.

use super::{Error, Result};

/// Validate that a buffer has exactly the expected length
///
/// Lengths are compared by exact equality; there is no truncation or
/// padding anywhere in the binding layer.
pub fn length(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a condition reported by the native provider
pub fn provider(
    condition: bool,
    algorithm: &'static str,
    operation: &'static str,
) -> Result<()> {
    if !condition {
        return Err(Error::ProviderOperation {
            algorithm,
            operation,
        });
    }
    Ok(())
}
