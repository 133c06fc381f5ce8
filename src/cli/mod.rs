//! CLI module for Warden
//!
//! Provides command-line interface parsing for the warden-server binary.
//! Uses clap for argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Warden - Token-Gated API Service
///
/// An HTTP API service gated by stateless bearer-token authentication.
#[derive(Parser, Debug)]
#[command(
    name = "warden-server",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Warden - token-gated HTTP API service",
    long_about = "An HTTP API service gated by stateless bearer-token authentication.\n\
                  Tokens are issued at login and verified on every protected request;\n\
                  no token state is kept server-side.",
    after_help = "EXAMPLES:\n    \
                  warden-server                   # Start the server (.env in cwd)\n    \
                  warden-server -e deploy.env     # Load configuration from a specific file\n    \
                  warden-server --verbose         # Start with debug-level logging"
)]
pub struct Cli {
    /// Path to a .env file to load before reading configuration
    #[arg(short, long)]
    pub env_file: Option<PathBuf>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,
}
