//! CLI argument parsing for the renumbering tool.
//!
//! The CLI only chooses where text comes from and where it goes; all list
//! heuristics live in the classifier.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "relist",
    version,
    about = "Rebuild a cleanly renumbered list from pasted text",
    after_help = "Commands:\n  renumber [--input <file>] [--out <file>]  Strip old numbering and renumber the list\n  classify [--input <file>] [--json]        Show how each line was classified\n\nExamples:\n  pbpaste | relist renumber\n  relist renumber --input notes.txt --out clean.txt\n  relist classify --input notes.txt --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Renumber(RenumberArgs),
    Classify(ClassifyArgs),
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Self::Renumber(args) => args.verbose,
            Self::Classify(args) => args.verbose,
        }
    }
}

/// Renumber command inputs.
#[derive(Parser, Debug)]
#[command(about = "Strip original numbering and print a renumbered list")]
pub struct RenumberArgs {
    /// File holding the pasted text; stdin when omitted or `-`
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Emit debug diagnostics on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// Classify command inputs.
#[derive(Parser, Debug)]
#[command(about = "Show how each input line was classified")]
pub struct ClassifyArgs {
    /// File holding the pasted text; stdin when omitted or `-`
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit debug diagnostics on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
