use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "drills", about = "Algorithm interview drills", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the problem table.
    List {
        /// Restrict to one category (e.g. `monotonic-stack`).
        #[arg(long)]
        category: Option<String>,
    },
    /// Export the catalog as JSON.
    Catalog {
        #[arg(long)]
        pretty: bool,
    },
    /// Run one problem's demonstration.
    Run {
        slug: String,
    },
    /// Run every demonstration in catalog order.
    All,
}
