//! TicketChain Ledger Core
//!
//! Append-only ticket ledger with cryptographic hash chaining.
//!
//! # Architecture
//!
//! - **Canonical Hashing**: Blocks are digested over a canonical JSON form
//! - **Single Writer**: One logical writer mutates the ledger at a time
//! - **Hash Chain**: Every block links to its predecessor's digest
//! - **Sealing**: Pending tickets are snapshotted into immutable blocks
//!
//! # Invariants
//!
//! - Monotonic ids: Ticket ids are issued as 1, 2, 3, ... in call order
//! - Chain linkage: `block[i].previous_hash == block[i-1].hash` for all i > 0
//! - Append-only: Sealed blocks are never modified or deleted
//! - Determinism: Identical block content always yields the identical digest

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod error;
pub mod hash;
pub mod ledger;
pub mod metrics;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use types::{Block, BlockHash, Ticket, TicketId, VerificationResult};
