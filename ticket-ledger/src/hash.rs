//! Canonical block hashing
//!
//! This module provides:
//! - A borrow-view of a block's hashable content that omits the hash
//!   field by type, so a digest can never cover itself
//! - SHA-256 digests over a canonical JSON byte form
//!
//! Canonical form: struct fields are declared in lexicographic order and
//! serialize in declaration order, so the byte form is uniquely
//! determined by the logical content. The ticket list serializes in
//! insertion order, which is semantically meaningful (issuance order).

use crate::types::{Block, BlockHash, Ticket};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Hashable content of a block
///
/// Carries every block field except the digest itself. Field declaration
/// order is the canonical serialization order.
#[derive(Debug, Serialize)]
pub struct BlockContent<'a> {
    /// Sealing timestamp
    pub created_at: DateTime<Utc>,

    /// Position in the chain
    pub index: u64,

    /// Digest of the previous block, or the genesis sentinel
    pub previous_hash: &'a BlockHash,

    /// Opaque proof value
    pub proof: u64,

    /// Tickets committed by the block, in issuance order
    pub tickets: &'a [Ticket],
}

impl<'a> BlockContent<'a> {
    /// Content view of a sealed block
    pub fn of(block: &'a Block) -> Self {
        Self {
            created_at: block.created_at,
            index: block.index,
            previous_hash: &block.previous_hash,
            proof: block.proof,
            tickets: &block.tickets,
        }
    }
}

/// Digest a block's canonical content
///
/// Deterministic: identical logical content always yields the identical
/// 64-character lowercase hex digest.
pub fn hash_content(content: &BlockContent<'_>) -> BlockHash {
    let bytes = canonical_bytes(content);
    let digest = Sha256::digest(&bytes);
    BlockHash::from_hex(encode_hex(&digest))
}

/// Recompute a sealed block's digest from its stored content
///
/// Used by chain validation; the stored `hash` field is not trusted.
pub fn hash_block(block: &Block) -> BlockHash {
    hash_content(&BlockContent::of(block))
}

/// Canonical byte form of a block's content
fn canonical_bytes(content: &BlockContent<'_>) -> Vec<u8> {
    serde_json::to_vec(content).expect("serialization cannot fail")
}

/// Lowercase hex encoding
fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(out, "{:02x}", byte).expect("writing to a String cannot fail");
    }
    out
}
