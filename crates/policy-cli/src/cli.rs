//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use policy_content::NormalizationProfile;

/// Policy Diff - Decide whether XML policy documents meaningfully differ
#[derive(Parser, Debug)]
#[command(name = "policy-diff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compare two policy documents
    ///
    /// Exits 0 when the documents are equivalent, 1 when they differ and 2
    /// on error. Use "-" to read one of the documents from stdin.
    ///
    /// Examples:
    ///   policy-diff compare old.xml new.xml
    ///   policy-diff compare old.xml new.xml --profile entity-aware
    ///   policy-diff compare old.xml - --field policy.0.xml_content
    Compare {
        /// Previously observed document
        old: PathBuf,

        /// Declared document
        new: PathBuf,

        /// Fallback normalization profile (entity-aware or whitespace-only)
        #[arg(short, long, value_parser = parse_profile)]
        profile: Option<NormalizationProfile>,

        /// Field key used to look up the profile in the suppression config
        #[arg(short, long)]
        field: Option<String>,

        /// Suppression config file (TOML); defaults to API Management wiring
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the textual fallback normalization of a document
    Normalize {
        /// Document to normalize ("-" for stdin)
        file: PathBuf,

        /// Normalization profile
        #[arg(short, long, value_parser = parse_profile, default_value = "whitespace-only")]
        profile: NormalizationProfile,
    },

    /// Print the structural canonical tree of a document as JSON
    Canonical {
        /// Document to canonicalize ("-" for stdin)
        file: PathBuf,
    },
}

fn parse_profile(value: &str) -> Result<NormalizationProfile, String> {
    value.parse().map_err(|e: policy_content::Error| e.to_string())
}
