//! Faults raised by value operations
//!
//! Every fallible operation in this crate returns [`ValResult`]. The errors
//! carry `miette` diagnostic codes so a binary can report them with help
//! text and terminate with a nonzero exit code.

use miette::Diagnostic;
use thiserror::Error;

/// Alias for Result type with value errors
pub type ValResult<T> = std::result::Result<T, ValError>;

// ============================================================================
// Runtime Faults (E0301-E0399)
// ============================================================================

/// Faults raised while reading or writing values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValError {
    /// Write into a map that was declared but never initialized
    #[error("assignment to entry in nil map")]
    #[diagnostic(
        code(alias_val_E0301),
        help("Initialize the map with `Map::make()` or a map literal before writing to it")
    )]
    NilMapWrite,

    /// Element access past the length of a sequence
    #[error("index out of range [{index}] with length {len}")]
    #[diagnostic(
        code(alias_val_E0302),
        help("Index {index} is out of bounds for a sequence of length {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },

    /// Slice expression outside the capacity of the view
    #[error("slice bounds out of range [{lo}:{hi}] with capacity {cap}")]
    #[diagnostic(
        code(alias_val_E0303),
        help("Slice bounds must satisfy 0 <= low <= high <= capacity")
    )]
    SliceBounds { lo: usize, hi: usize, cap: usize },

    /// Full slice expression with an invalid capacity bound
    #[error("slice bounds out of range [{lo}:{hi}:{max}] with capacity {cap}")]
    #[diagnostic(
        code(alias_val_E0304),
        help("Full slice bounds must satisfy 0 <= low <= high <= max <= capacity")
    )]
    FullSliceBounds {
        lo: usize,
        hi: usize,
        max: usize,
        cap: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValError::NilMapWrite.to_string(),
            "assignment to entry in nil map"
        );
        assert_eq!(
            ValError::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "index out of range [5] with length 3"
        );
        assert_eq!(
            ValError::SliceBounds { lo: 0, hi: 7, cap: 5 }.to_string(),
            "slice bounds out of range [0:7] with capacity 5"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let code = ValError::NilMapWrite.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("alias_val_E0301"));
    }
}
