//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Word dictionary with prefix completion, backed by a balanced tree and a flat-file store
#[derive(Parser, Debug)]
#[command(name = "wordtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Word store file (overrides config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add words to the dictionary
    Insert {
        /// Words to insert
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove words from the dictionary
    Delete {
        /// Words to delete
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List words starting with a prefix (case-insensitive)
    Search {
        /// Prefix to complete
        prefix: String,
    },

    /// List all words in order
    List,

    /// Show the tree structure
    Show,

    /// Verify tree invariants
    Check,

    /// Interactive menu
    Shell,

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

    /// Show config paths
    Path,

    /// Create global config template
    Init,
}
