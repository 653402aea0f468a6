//! quotedesk - interactive auto-insurance policy quoting
//!
//! # Usage
//!
//! ```bash
//! # Run against the default file locations
//! cargo run --bin quotedesk
//!
//! # Point at specific defaults and register files
//! cargo run --bin quotedesk -- --defaults ./defaults.dat --register ./policies.jsonl
//! ```
//!
//! The defaults file seeds the policy sequence and the rate table; the
//! register receives one JSON record per completed policy. Log verbosity
//! follows `RUST_LOG` (logs go to stderr so prompts stay clean).

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_store::{PolicyRegister, StartupDefaults};
use interface_cli::{Console, QuoteSession};

#[derive(Parser)]
#[command(name = "quotedesk", version, about = "Interactive auto-insurance policy quoting")]
struct Cli {
    /// Path to the startup defaults file (policy seed and rate constants)
    #[arg(long, default_value = "defaults.dat")]
    defaults: PathBuf,

    /// Path to the append-only policy register
    #[arg(long, default_value = "policies.jsonl")]
    register: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let defaults = StartupDefaults::load(&cli.defaults)?;
    let register = PolicyRegister::new(&cli.register);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mut session = QuoteSession::new(defaults, cli.defaults, register);
    session.run(&mut console)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging
///
/// Logs are written to stderr; stdout carries only prompts and receipts.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
