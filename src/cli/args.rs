//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::OutputFormat;

/// Convert the wiki sitemap of Mathe für Nicht-Freaks into a JSON tree
#[derive(Parser, Debug)]
#[command(name = "mfnf-sitemap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory with local .mfnf-sitemap.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a sitemap and print it as JSON or tree
    Parse {
        /// Sitemap file ('-' or absent: stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,

        /// Write to file instead of stdout (overrides config)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,

    /// Print config template
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_parse_args_when_parsing_then_collects_options() {
        let cli = Cli::try_parse_from([
            "mfnf-sitemap",
            "-dd",
            "parse",
            "sitemap.txt",
            "--format",
            "tree",
            "--compact",
            "-o",
            "out.txt",
        ])
        .unwrap();

        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Parse {
                file,
                format,
                compact,
                output,
            }) => {
                assert_eq!(file, Some(PathBuf::from("sitemap.txt")));
                assert_eq!(format, Some(OutputFormat::Tree));
                assert!(compact);
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn given_unknown_format_when_parsing_then_errors() {
        let result = Cli::try_parse_from(["mfnf-sitemap", "parse", "--format", "xml"]);
        assert!(result.is_err());
    }
}
