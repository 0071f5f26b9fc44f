use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::LibraryService;
use crate::domain::{DUE_PERIOD, FINE_PER_DAY, LoanPolicy, MAX_ISSUE};

mod console;
mod menu;

pub use console::*;
pub use menu::*;

/// Biblio - Library Desk
#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "An in-memory library desk for books, members, loans and late fines")]
#[command(version)]
pub struct Cli {
    /// Read menu input from a file (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Report format: table, json, csv
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Maximum number of books a member may hold at once
    #[arg(long, default_value_t = MAX_ISSUE)]
    pub max_loans: usize,

    /// Days a book may be kept before it is late
    #[arg(long, default_value_t = DUE_PERIOD)]
    pub loan_period: i64,

    /// Fine charged per late day
    #[arg(long, default_value_t = FINE_PER_DAY)]
    pub fine_per_day: i64,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Lending rules from the command line, validated.
    pub fn policy(&self) -> Result<LoanPolicy> {
        LoanPolicy::new(self.max_loans, self.loan_period, self.fine_per_day)
            .context("Invalid lending rules")
    }

    pub fn run(self) -> Result<()> {
        let mut service = LibraryService::with_policy(self.policy()?)?;
        let stdout = io::stdout();

        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path))?;
                let mut console = LineConsole::new(BufReader::new(file), stdout.lock());
                run_menu(&mut service, &mut console, &self.format)
            }
            None => {
                let mut console = LineConsole::new(io::stdin().lock(), stdout.lock());
                run_menu(&mut service, &mut console, &self.format)
            }
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the verbose flag.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "biblio=debug" } else { "biblio=warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
