//! Append-only ticket ledger
//!
//! This module owns the ordered chain of sealed blocks and the
//! pending-ticket buffer, and exposes the four core operations:
//! issuance, sealing, chain validation, and ticket lookup.
//!
//! # Example
//!
//! ```
//! use ticket_ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let ticket_id = ledger.issue_ticket("Alice", "Concert")?;
//! let block = ledger.seal_block(123);
//!
//! assert_eq!(block.index, 2);
//! assert!(ledger.verify_ticket(ticket_id).is_found());
//! assert!(ledger.is_chain_valid());
//! # Ok::<(), ticket_ledger::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::hash::{self, BlockContent};
use crate::types::{Block, BlockHash, Ticket, TicketId, VerificationResult};
use chrono::Utc;

/// Proof value recorded in the genesis block
const GENESIS_PROOF: u64 = 100;

/// Hash-linked chain of sealed blocks plus the pending-ticket buffer
///
/// Single-writer: the ledger assumes one logical session mutates it at a
/// time. All operations are synchronous and complete in time bounded by
/// the chain and buffer sizes.
#[derive(Debug)]
pub struct Ledger {
    /// Sealed blocks, genesis-first
    chain: Vec<Block>,

    /// Tickets issued but not yet sealed into a block
    pending: Vec<Ticket>,

    /// Last issued ticket id (0 before the first issuance)
    ticket_counter: u64,
}

impl Ledger {
    /// Create a ledger holding a freshly sealed genesis block
    pub fn new() -> Self {
        let created_at = Utc::now();
        let previous_hash = BlockHash::genesis_sentinel();
        let hash = hash::hash_content(&BlockContent {
            created_at,
            index: 1,
            previous_hash: &previous_hash,
            proof: GENESIS_PROOF,
            tickets: &[],
        });

        let genesis = Block {
            index: 1,
            created_at,
            tickets: Vec::new(),
            proof: GENESIS_PROOF,
            previous_hash,
            hash,
        };

        Self {
            chain: vec![genesis],
            pending: Vec::new(),
            ticket_counter: 0,
        }
    }

    /// Issue a new ticket into the pending buffer
    ///
    /// Returns the new ticket's id. The ticket is not part of any block
    /// (and is invisible to [`Ledger::verify_ticket`]) until the next
    /// [`Ledger::seal_block`].
    ///
    /// Rejects empty buyer or event names without mutating any state.
    pub fn issue_ticket(&mut self, buyer: &str, event: &str) -> Result<TicketId> {
        if buyer.is_empty() {
            return Err(Error::InvalidInput("buyer name is empty".to_string()));
        }
        if event.is_empty() {
            return Err(Error::InvalidInput("event name is empty".to_string()));
        }

        self.ticket_counter += 1;
        let ticket_id = TicketId::new(self.ticket_counter);

        self.pending.push(Ticket {
            buyer: buyer.to_string(),
            event: event.to_string(),
            issued_at: Utc::now(),
            ticket_id,
        });

        tracing::debug!("Issued ticket {} to {} for {}", ticket_id, buyer, event);

        Ok(ticket_id)
    }

    /// Seal the pending buffer into a new block and append it
    ///
    /// Snapshots the buffer by value, links the block to the stored
    /// digest of the current last block, and clears the buffer. The
    /// `proof` value is recorded as supplied and not validated. Sealing
    /// with an empty buffer produces a valid empty block.
    pub fn seal_block(&mut self, proof: u64) -> Block {
        let tickets = std::mem::take(&mut self.pending);
        let created_at = Utc::now();
        let index = self.last_block().index + 1;
        let previous_hash = self.last_block().hash.clone();

        let hash = hash::hash_content(&BlockContent {
            created_at,
            index,
            previous_hash: &previous_hash,
            proof,
            tickets: &tickets,
        });

        let block = Block {
            index,
            created_at,
            tickets,
            proof,
            previous_hash,
            hash,
        };

        tracing::info!(
            "Sealed block {} with {} tickets",
            block.index,
            block.tickets.len()
        );

        self.chain.push(block.clone());
        block
    }

    /// Check the whole chain for tampering
    ///
    /// Verifies that every block after genesis links to the stored digest
    /// of its predecessor, and that every block's stored digest (genesis
    /// included) matches a fresh recomputation of its content. Returns
    /// `true` iff no check fails. Read-only, O(chain length).
    pub fn is_chain_valid(&self) -> bool {
        for pair in self.chain.windows(2) {
            if pair[1].previous_hash != pair[0].hash {
                tracing::warn!(
                    "Chain integrity violation: block {} does not link to block {}",
                    pair[1].index,
                    pair[0].index
                );
                return false;
            }
        }

        for block in &self.chain {
            if block.hash != hash::hash_block(block) {
                tracing::warn!(
                    "Chain integrity violation: block {} digest mismatch",
                    block.index
                );
                return false;
            }
        }

        true
    }

    /// Look up a ticket in the sealed chain
    ///
    /// Scans blocks in chain order and tickets in issuance order,
    /// returning the first match. Tickets still in the pending buffer are
    /// reported as [`VerificationResult::NotFound`]: verified means
    /// anchored in the chain, not merely issued.
    pub fn verify_ticket(&self, ticket_id: TicketId) -> VerificationResult {
        for block in &self.chain {
            for ticket in &block.tickets {
                if ticket.ticket_id == ticket_id {
                    return VerificationResult::Found {
                        ticket_id,
                        event: ticket.event.clone(),
                        buyer: ticket.buyer.clone(),
                        block_index: block.index,
                    };
                }
            }
        }

        VerificationResult::NotFound
    }

    /// All sealed blocks, genesis-first
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// The most recently sealed block
    pub fn last_block(&self) -> &Block {
        self.chain.last().expect("chain always holds the genesis block")
    }

    /// Tickets issued but not yet sealed, in issuance order
    pub fn pending_tickets(&self) -> &[Ticket] {
        &self.pending
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_invariant() {
        let ledger = Ledger::new();

        assert_eq!(ledger.blocks().len(), 1);

        let genesis = ledger.last_block();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.previous_hash.as_str(), "1");
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert!(genesis.tickets.is_empty());

        assert!(ledger.is_chain_valid());
    }

    #[test]
    fn test_monotonic_ticket_ids() {
        let mut ledger = Ledger::new();

        for expected in 1..=5u64 {
            let id = ledger.issue_ticket("Alice", "Concert").unwrap();
            assert_eq!(id.value(), expected);
        }

        // Sealing does not disturb the counter
        ledger.seal_block(123);
        let id = ledger.issue_ticket("Bob", "Theatre").unwrap();
        assert_eq!(id.value(), 6);
    }

    #[test]
    fn test_issue_rejects_empty_input() {
        let mut ledger = Ledger::new();

        assert!(ledger.issue_ticket("", "Concert").is_err());
        assert!(ledger.issue_ticket("Alice", "").is_err());

        // A rejected call mutates neither the counter nor the buffer
        assert!(ledger.pending_tickets().is_empty());
        let id = ledger.issue_ticket("Alice", "Concert").unwrap();
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn test_seal_links_to_previous_block() {
        let mut ledger = Ledger::new();
        let genesis_hash = ledger.last_block().hash.clone();

        ledger.issue_ticket("Alice", "Concert").unwrap();
        let block = ledger.seal_block(123);

        assert_eq!(block.index, 2);
        assert_eq!(block.previous_hash, genesis_hash);
        assert_eq!(ledger.last_block(), &block);
        assert!(ledger.is_chain_valid());
    }

    #[test]
    fn test_seal_snapshots_and_clears_pending() {
        let mut ledger = Ledger::new();

        ledger.issue_ticket("Alice", "Concert").unwrap();
        ledger.issue_ticket("Bob", "Concert").unwrap();
        assert_eq!(ledger.pending_tickets().len(), 2);

        let block = ledger.seal_block(123);
        assert_eq!(block.tickets.len(), 2);
        assert_eq!(block.tickets[0].ticket_id.value(), 1);
        assert_eq!(block.tickets[1].ticket_id.value(), 2);
        assert!(ledger.pending_tickets().is_empty());
    }

    #[test]
    fn test_empty_blocks_are_valid() {
        let mut ledger = Ledger::new();

        let first = ledger.seal_block(1);
        let second = ledger.seal_block(1);

        assert_eq!(first.index, 2);
        assert_eq!(second.index, 3);
        assert!(first.tickets.is_empty());
        assert!(second.tickets.is_empty());
        assert!(ledger.is_chain_valid());
    }

    #[test]
    fn test_pending_ticket_is_not_verifiable() {
        let mut ledger = Ledger::new();

        let id = ledger.issue_ticket("Alice", "Concert").unwrap();
        assert_eq!(ledger.verify_ticket(id), VerificationResult::NotFound);

        ledger.seal_block(123);
        match ledger.verify_ticket(id) {
            VerificationResult::Found {
                ticket_id,
                event,
                buyer,
                block_index,
            } => {
                assert_eq!(ticket_id, id);
                assert_eq!(event, "Concert");
                assert_eq!(buyer, "Alice");
                assert_eq!(block_index, 2);
            }
            VerificationResult::NotFound => panic!("sealed ticket must be found"),
        }
    }

    #[test]
    fn test_verify_unknown_id() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.verify_ticket(TicketId::new(99)),
            VerificationResult::NotFound
        );
    }

    #[test]
    fn test_tampered_ticket_detected() {
        let mut ledger = Ledger::new();
        ledger.issue_ticket("Alice", "Concert").unwrap();
        ledger.seal_block(123);
        assert!(ledger.is_chain_valid());

        ledger.chain[1].tickets[0].buyer = "Mallory".to_string();
        assert!(!ledger.is_chain_valid());
    }

    #[test]
    fn test_tampered_proof_detected() {
        let mut ledger = Ledger::new();
        ledger.seal_block(123);

        ledger.chain[1].proof = 124;
        assert!(!ledger.is_chain_valid());
    }

    #[test]
    fn test_tampered_link_detected() {
        let mut ledger = Ledger::new();
        ledger.seal_block(123);
        ledger.seal_block(123);

        ledger.chain[2].previous_hash = BlockHash::genesis_sentinel();
        assert!(!ledger.is_chain_valid());
    }

    #[test]
    fn test_tampered_genesis_detected() {
        let mut ledger = Ledger::new();
        ledger.seal_block(123);
        assert!(ledger.is_chain_valid());

        // Genesis content is re-verified, not just the links after it
        ledger.chain[0].proof = 101;
        assert!(!ledger.is_chain_valid());
    }

    #[test]
    fn test_default_is_fresh_ledger() {
        let ledger = Ledger::default();
        assert_eq!(ledger.blocks().len(), 1);
        assert!(ledger.pending_tickets().is_empty());
    }
}
