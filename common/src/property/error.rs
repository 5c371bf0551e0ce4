// Property Registry - Error Codes
//
// Error Code Ranges:
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 500-599: Operation errors
// - 900-999: System errors

use thiserror::Error;

/// Property operation result type
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Property registry error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum PropertyError {
    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Not the owner")]
    NotOwner = 200,

    #[error("Not approved")]
    NotApproved = 201,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Name is empty")]
    NameEmpty = 300,

    #[error("Name too long")]
    NameTooLong = 301,

    #[error("Symbol is empty")]
    SymbolEmpty = 302,

    #[error("Symbol too long")]
    SymbolTooLong = 303,

    #[error("Invalid symbol character")]
    SymbolInvalidChar = 304,

    #[error("URI too long")]
    UriTooLong = 305,

    #[error("Invalid token ID")]
    InvalidTokenId = 306,

    #[error("Invalid recipient")]
    InvalidRecipient = 307,

    // ========================================
    // Operation errors (500-599)
    // ========================================
    #[error("Self approval not allowed")]
    SelfApproval = 500,

    #[error("Self transfer not allowed")]
    SelfTransfer = 501,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl PropertyError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::TokenNotFound),
            200 => Some(Self::NotOwner),
            201 => Some(Self::NotApproved),
            300 => Some(Self::NameEmpty),
            301 => Some(Self::NameTooLong),
            302 => Some(Self::SymbolEmpty),
            303 => Some(Self::SymbolTooLong),
            304 => Some(Self::SymbolInvalidChar),
            305 => Some(Self::UriTooLong),
            306 => Some(Self::InvalidTokenId),
            307 => Some(Self::InvalidRecipient),
            500 => Some(Self::SelfApproval),
            501 => Some(Self::SelfTransfer),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}
