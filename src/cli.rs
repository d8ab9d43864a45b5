use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ahmia", about = "Onion address validation & ban lookup")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a bare onion address (16 or 56 base32 chars, optional .onion)
    Onion { value: String },
    /// Validate an onion service URL
    Url {
        url: String,

        /// Allow a path after .onion
        #[arg(long)]
        full: bool,
    },
    /// Check whether a redirect target is allowed
    Redirect { url: String },
    /// Print the main domain of a URL
    Domain { url: String },
    /// Check whether a domain is banned in the index
    Status { domain: String },
    /// Validate a submitted onion URL and check its ban status
    Submit { url: String },
    /// Print the environment mode templates see
    Env,
}
