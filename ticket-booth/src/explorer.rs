//! Chain explorer rendering
//!
//! Renders the sealed chain newest-first, the way an auditor would
//! browse it: block index, truncated digest, full linkage, tickets.

use crate::config::ExplorerConfig;
use ticket_ledger::Block;

/// Render the full chain, newest block first
pub fn render_chain(blocks: &[Block], config: &ExplorerConfig) -> String {
    let mut out = String::new();

    for block in blocks.iter().rev() {
        out.push_str(&render_block(block, config));
        out.push('\n');
    }

    out
}

/// Render one block section
pub fn render_block(block: &Block, config: &ExplorerConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Block {} (hash: {}...)\n",
        block.index,
        block.hash.preview(config.hash_preview_len)
    ));
    out.push_str(&format!("  previous hash: {}\n", block.previous_hash));
    out.push_str(&format!("  hash:          {}\n", block.hash));

    if block.tickets.is_empty() {
        out.push_str("  tickets:       (none)\n");
    } else {
        out.push_str("  tickets:\n");
        for ticket in &block.tickets {
            out.push_str(&format!(
                "    #{} {}, buyer {} ({})\n",
                ticket.ticket_id,
                ticket.event,
                ticket.buyer,
                ticket.issued_at.to_rfc3339()
            ));
        }
    }

    out
}
