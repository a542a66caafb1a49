//! CLI command definitions and handlers

mod ask;
mod chat;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Matchat - toy YES/NO chat oracle
///
/// Deterministic demo: no learning, no state, no data leaves your terminal.
#[derive(Parser, Debug)]
#[command(name = "matchat")]
#[command(
    version,
    about = "Toy YES/NO oracle over character-code matrices",
    long_about = "Matchat converts each line of text into a square matrix of \
character codes, computes eight linear-algebra and hashing statistics, and \
answers YES or NO by majority vote of parity/threshold checks.\n\n\
The math is arbitrary and deterministic; this is a demo, not a classifier.\n\n\
Run without a subcommand to start the interactive chat loop.",
    after_help = "\
Examples:
  matchat                              Start the interactive chat loop
  matchat ask \"hello world\"            One-shot verdict with feature listing
  matchat ask hello --format json      JSON output for scripting
  matchat ask hello --explain          Show the per-check score breakdown"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive chat loop (default when no subcommand is given)
    Chat,

    /// Classify a single line of text and exit
    Ask {
        /// Text to classify
        text: String,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Show which of the eight checks passed
        #[arg(long)]
        explain: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Ask {
            text,
            format,
            explain,
        }) => ask::run(&text, &format, explain),

        Some(Commands::Chat) | None => chat::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chat_loop() {
        let cli = Cli::try_parse_from(["matchat"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_ask_parses_flags() {
        let cli =
            Cli::try_parse_from(["matchat", "ask", "hello", "--format", "json", "--explain"])
                .unwrap();

        match cli.command {
            Some(Commands::Ask {
                text,
                format,
                explain,
            }) => {
                assert_eq!(text, "hello");
                assert_eq!(format, "json");
                assert!(explain);
            }
            other => panic!("expected ask, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(Cli::try_parse_from(["matchat", "ask", "hello", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["matchat", "--log-level", "loud"]).is_err());
    }
}
