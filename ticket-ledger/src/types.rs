//! Core types for the ticket ledger
//!
//! All types are designed for:
//! - Deterministic serialization (canonical JSON for hashing)
//! - Immutability after sealing (no mutation paths on committed data)
//! - Memory safety (no unsafe code)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket identifier, sequential and unique for the ledger's lifetime
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// Create a ticket ID from its numeric value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ticket purchase, immutable once issued
///
/// Field declaration order is the canonical serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Buyer name
    pub buyer: String,

    /// Event name
    pub event: String,

    /// Issuance timestamp
    pub issued_at: DateTime<Utc>,

    /// Unique sequential id
    pub ticket_id: TicketId,
}

/// Hex-encoded digest of a block's content
///
/// Either a 64-character lowercase SHA-256 hex string, or the `"1"`
/// sentinel carried as the genesis block's previous hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(String);

impl BlockHash {
    /// Sentinel previous-hash of the genesis block
    pub fn genesis_sentinel() -> Self {
        Self("1".to_string())
    }

    /// Wrap an already hex-encoded digest
    pub(crate) fn from_hex(hex: String) -> Self {
        Self(hex)
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters of the digest, for compact display
    pub fn preview(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sealed batch of tickets, hash-linked to its predecessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain, starting at 1 for genesis
    pub index: u64,

    /// Sealing timestamp
    pub created_at: DateTime<Utc>,

    /// Tickets committed by this block, in issuance order (may be empty)
    pub tickets: Vec<Ticket>,

    /// Opaque proof value supplied by the caller at sealing time
    pub proof: u64,

    /// Digest of the previous block, or the genesis sentinel
    pub previous_hash: BlockHash,

    /// Digest of this block's content, excluding this field
    pub hash: BlockHash,
}

/// Outcome of a ticket lookup over the sealed chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationResult {
    /// Ticket is anchored in a sealed block
    Found {
        /// The verified ticket's id
        ticket_id: TicketId,
        /// Event the ticket was purchased for
        event: String,
        /// Buyer the ticket was issued to
        buyer: String,
        /// Index of the block committing the ticket
        block_index: u64,
    },

    /// No sealed block contains the id (tickets still pending included)
    NotFound,
}

impl VerificationResult {
    /// Whether the lookup found a committed ticket
    pub fn is_found(&self) -> bool {
        matches!(self, VerificationResult::Found { .. })
    }
}
