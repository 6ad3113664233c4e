//! Booth session over one ledger instance
//!
//! The session owns the ledger for its whole lifetime and is constructed
//! with it explicitly. Re-creating the session discards all chain
//! history; durability is out of scope.

use crate::config::Config;
use ticket_ledger::metrics::Metrics;
use ticket_ledger::{Ledger, TicketId, VerificationResult};

/// One booth session: a ledger plus the metrics it reports
pub struct Session {
    ledger: Ledger,
    metrics: Metrics,
    config: Config,
}

/// Outcome of a completed purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    /// Id of the ticket that was issued
    pub ticket_id: TicketId,

    /// Index of the block that committed it
    pub block_index: u64,
}

/// Chain status snapshot for the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Number of sealed blocks, genesis included
    pub chain_length: usize,

    /// Whether the whole chain passes integrity checks
    pub chain_valid: bool,
}

impl Session {
    /// Create a session over an injected ledger
    pub fn new(ledger: Ledger, metrics: Metrics, config: Config) -> Self {
        let session = Self {
            ledger,
            metrics,
            config,
        };
        session
            .metrics
            .update_chain_height(session.ledger.blocks().len() as i64);
        session
    }

    /// Purchase flow: issue a ticket and immediately seal it into a block
    ///
    /// Mirrors the booth's one-purchase-per-block policy. An invalid
    /// input error leaves the ledger untouched; the caller re-prompts.
    pub fn buy(&mut self, buyer: &str, event: &str) -> ticket_ledger::Result<PurchaseReceipt> {
        let ticket_id = self.ledger.issue_ticket(buyer, event)?;
        self.metrics.record_ticket_issued();

        let block = self.ledger.seal_block(self.config.seal_proof);
        self.metrics.record_block_sealed();
        self.metrics
            .update_chain_height(self.ledger.blocks().len() as i64);

        Ok(PurchaseReceipt {
            ticket_id,
            block_index: block.index,
        })
    }

    /// Look up a ticket in the sealed chain
    pub fn verify(&self, ticket_id: TicketId) -> VerificationResult {
        self.metrics.record_verification();
        self.ledger.verify_ticket(ticket_id)
    }

    /// Chain length and validity
    pub fn status(&self) -> Status {
        Status {
            chain_length: self.ledger.blocks().len(),
            chain_valid: self.ledger.is_chain_valid(),
        }
    }

    /// The underlying ledger, for read-only enumeration
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
