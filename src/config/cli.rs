use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tea-util")]
#[command(about = "Helpers for generated SDK clients: user agents, form encoding, JSON sniffing")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the user agent, optionally with a custom suffix
    UserAgent {
        #[arg(long)]
        append: Option<String>,
    },
    /// Encode a JSON object as a form/query string
    Form {
        /// JSON object, e.g. '{"Action":"DescribeRegions"}'
        json: String,
    },
    /// Classify text as object, integer, boolean or float
    ParseJson { text: String },
    /// Report the HTTP status class of a code
    Status { code: i64 },
    /// Print the current HTTP date
    Date,
    /// Print a fresh request nonce
    Nonce,
    /// Load, validate and print runtime options from a TOML file
    Options { path: String },
}
