//! Ticket booth binary
//!
//! Interactive terminal front end over the ticket ledger: buy tickets,
//! verify them, and browse the chain.

mod config;
mod explorer;
mod session;

use anyhow::Result;
use config::Config;
use session::Session;
use std::io::{self, BufRead, Write};
use ticket_ledger::metrics::Metrics;
use ticket_ledger::{Ledger, TicketId, VerificationResult};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting ticket booth");

    // Load configuration
    let config = match std::env::var("TICKET_BOOTH_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::from_env(),
    };

    // One ledger per session, injected into the session explicitly
    let metrics = Metrics::new()?;
    let session = Session::new(Ledger::new(), metrics, config);

    run(session)
}

fn run(mut session: Session) -> Result<()> {
    println!(
        "{} v{}",
        session.config().service_name,
        session.config().service_version
    );
    print_status(&session);
    println!("Commands: buy, verify <id>, status, explore, help, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt("> ")?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("buy") => handle_buy(&mut session, &mut lines)?,
            Some("verify") => handle_verify(&session, parts.next()),
            Some("status") => print_status(&session),
            Some("explore") => {
                print!(
                    "{}",
                    explorer::render_chain(
                        session.ledger().blocks(),
                        &session.config().explorer
                    )
                );
            }
            Some("help") => {
                println!("  buy           purchase a ticket (prompts for buyer and event)");
                println!("  verify <id>   check whether a ticket is anchored in the chain");
                println!("  status        chain length and integrity");
                println!("  explore       list all blocks, newest first");
                println!("  quit          exit the booth");
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("Unknown command: {} (try 'help')", other),
            None => {}
        }
    }

    tracing::info!("Shutting down ticket booth");
    Ok(())
}

fn handle_buy(
    session: &mut Session,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    prompt("Buyer name: ")?;
    let buyer = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };

    prompt("Event name: ")?;
    let event = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };

    match session.buy(&buyer, &event) {
        Ok(receipt) => println!(
            "Ticket #{} purchased by {} for {}. Added in Block {}.",
            receipt.ticket_id, buyer, event, receipt.block_index
        ),
        Err(e) => println!("Purchase rejected: {}", e),
    }

    Ok(())
}

fn handle_verify(session: &Session, arg: Option<&str>) {
    let id = match arg.and_then(|s| s.parse::<u64>().ok()) {
        Some(id) => TicketId::new(id),
        None => {
            println!("Usage: verify <ticket id>");
            return;
        }
    };

    match session.verify(id) {
        VerificationResult::Found {
            ticket_id,
            event,
            buyer,
            block_index,
        } => {
            println!("Ticket #{} is VALID", ticket_id);
            println!("  event: {}", event);
            println!("  buyer: {}", buyer);
            println!("  block: {}", block_index);
        }
        VerificationResult::NotFound => {
            println!("Ticket #{} is INVALID or does not exist.", id);
        }
    }
}

fn print_status(session: &Session) {
    let status = session.status();
    let verdict = if status.chain_valid {
        "VALID"
    } else {
        "COMPROMISED"
    };
    println!("Chain length: {} | Chain: {}", status.chain_length, verdict);
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}
