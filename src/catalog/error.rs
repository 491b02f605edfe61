//! Fetch errors for the catalog API

use std::fmt;

/// Everything that can go wrong while loading products.
///
/// The UI collapses all variants into [`FetchError::USER_MESSAGE`]; the variant
/// itself only shows up in logs.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    Network(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body was not a valid products envelope
    Decode(String),
}

impl FetchError {
    /// Static message shown to the user for any fetch failure
    pub const USER_MESSAGE: &'static str = "Error loading products. Please try again later.";
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status(code) => write!(f, "Failed to fetch products (HTTP {})", code),
            Self::Decode(msg) => write!(f, "Invalid products response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
