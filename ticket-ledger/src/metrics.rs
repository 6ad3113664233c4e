//! Metrics collection for observability
//!
//! This module provides Prometheus metrics for monitoring the ledger.
//!
//! # Metrics
//!
//! - `ticket_ledger_tickets_issued_total` - Total tickets issued
//! - `ticket_ledger_blocks_sealed_total` - Total blocks sealed
//! - `ticket_ledger_verifications_total` - Total ticket lookups served
//! - `ticket_ledger_chain_height` - Current chain length

use prometheus::{IntCounter, IntGauge, Registry};
use std::fmt;
use std::sync::Arc;

/// Metrics collector
///
/// Each collector owns its own registry, so independent sessions (and
/// tests) never collide on metric names.
#[derive(Clone)]
pub struct Metrics {
    /// Total tickets issued
    pub tickets_issued: IntCounter,

    /// Total blocks sealed
    pub blocks_sealed: IntCounter,

    /// Total ticket lookups served
    pub verifications: IntCounter,

    /// Current chain length
    pub chain_height: IntGauge,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let tickets_issued = IntCounter::new(
            "ticket_ledger_tickets_issued_total",
            "Total tickets issued",
        )?;
        registry.register(Box::new(tickets_issued.clone()))?;

        let blocks_sealed = IntCounter::new(
            "ticket_ledger_blocks_sealed_total",
            "Total blocks sealed",
        )?;
        registry.register(Box::new(blocks_sealed.clone()))?;

        let verifications = IntCounter::new(
            "ticket_ledger_verifications_total",
            "Total ticket lookups served",
        )?;
        registry.register(Box::new(verifications.clone()))?;

        let chain_height =
            IntGauge::new("ticket_ledger_chain_height", "Current chain length")?;
        registry.register(Box::new(chain_height.clone()))?;

        Ok(Self {
            tickets_issued,
            blocks_sealed,
            verifications,
            chain_height,
            registry,
        })
    }

    /// Record a ticket issuance
    pub fn record_ticket_issued(&self) {
        self.tickets_issued.inc();
    }

    /// Record a sealed block
    pub fn record_block_sealed(&self) {
        self.blocks_sealed.inc();
    }

    /// Record a ticket lookup
    pub fn record_verification(&self) {
        self.verifications.inc();
    }

    /// Update the chain height gauge
    pub fn update_chain_height(&self, height: i64) {
        self.chain_height.set(height);
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("tickets_issued", &self.tickets_issued.get())
            .field("blocks_sealed", &self.blocks_sealed.get())
            .field("verifications", &self.verifications.get())
            .field("chain_height", &self.chain_height.get())
            .finish()
    }
}
