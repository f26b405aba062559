//! Command-line interface for the community backend.

use clap::{Parser, Subcommand};

/// Community backend - users and posts over HTTP
#[derive(Parser)]
#[command(name = "community-backend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Write a default config.toml if none exists
    Init,

    /// Validate the effective configuration and print it
    CheckConfig,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["community-backend"]);
        assert_eq!(cli.command(), &Commands::Serve);
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["community-backend", "check-config"]);
        assert_eq!(cli.command(), &Commands::CheckConfig);

        let cli = Cli::parse_from(["community-backend", "init"]);
        assert_eq!(cli.command(), &Commands::Init);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["community-backend", "migrate"]).is_err());
    }
}
