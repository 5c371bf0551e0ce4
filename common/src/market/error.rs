// Marketplace - Error Codes
//
// Error Code Ranges:
// - 1000-1099: Listing and registry errors
// - 1100-1199: Access control errors
// - 1900-1999: System errors
//
// Registry preconditions surface as the wrapped PropertyError with its own
// code (all below 1000), so codes stay unambiguous across both enums.

use thiserror::Error;

use crate::property::PropertyError;

/// Marketplace operation result type
pub type MarketResult<T> = Result<T, MarketError>;

/// Marketplace error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarketError {
    // ========================================
    // Listing and registry errors (1000-1099)
    // ========================================
    #[error("Listing not found")]
    ListingNotFound,

    #[error("No inspector registered at this index")]
    InspectorNotFound,

    #[error("Invalid inspector address")]
    InvalidInspector,

    // ========================================
    // Access control errors (1100-1199)
    // ========================================
    #[error("Only owner can call this method")]
    AccessDenied,

    // ========================================
    // System errors (1900-1999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow,

    // ========================================
    // Propagated registry errors
    // ========================================
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl MarketError {
    /// Get the numeric error code
    pub fn code(&self) -> u64 {
        match self {
            Self::ListingNotFound => 1000,
            Self::InspectorNotFound => 1001,
            Self::InvalidInspector => 1002,
            Self::AccessDenied => 1100,
            Self::Overflow => 1900,
            Self::Property(inner) => inner.code(),
        }
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1000 => Some(Self::ListingNotFound),
            1001 => Some(Self::InspectorNotFound),
            1002 => Some(Self::InvalidInspector),
            1100 => Some(Self::AccessDenied),
            1900 => Some(Self::Overflow),
            _ => PropertyError::from_code(code).map(Self::Property),
        }
    }
}
