//! Error types for the ticket ledger

use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
///
/// A missing ticket is not an error: lookups report it through
/// [`crate::VerificationResult::NotFound`]. Tampering is not an error
/// either: [`crate::Ledger::is_chain_valid`] reports it as a fact about
/// the chain. Only misuse of the issuance API is a fault.
#[derive(Error, Debug)]
pub enum Error {
    /// Issuance called with an empty buyer or event name
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
