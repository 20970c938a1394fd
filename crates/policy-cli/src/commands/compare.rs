//! Compare command implementation
//!
//! Runs the equivalence pipeline on two documents and reports the verdict.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use policy_content::{Equivalence, NormalizationProfile, SuppressConfig, compare};

use super::{is_stdin, read_input};
use crate::error::{CliError, Result};

/// How the compare command picks its profile and formats output
#[derive(Debug, Default, Clone)]
pub struct CompareOptions<'a> {
    /// Explicit profile; wins over `field`
    pub profile: Option<NormalizationProfile>,
    /// Field key resolved through the suppression config
    pub field: Option<&'a str>,
    /// Suppression config path; API Management wiring when absent
    pub config: Option<&'a Path>,
    /// Output as JSON
    pub json: bool,
}

/// Run the compare command
///
/// Returns whether the documents are equivalent.
pub fn run_compare(old: &Path, new: &Path, options: &CompareOptions<'_>) -> Result<bool> {
    if is_stdin(old) && is_stdin(new) {
        return Err(CliError::user("Only one document can be read from stdin"));
    }

    let profile = resolve_profile(options)?;
    let old_source = read_input(old)?;
    let new_source = read_input(new)?;

    tracing::debug!(?old, ?new, %profile, "Comparing documents");
    let outcome = compare(&old_source, &new_source, profile);

    if options.json {
        let json_output = json!({
            "equivalent": outcome.is_equivalent,
            "strategy": outcome.strategy.name(),
            "profile": profile.name(),
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(outcome.is_equivalent)
}

/// Pick the profile from the explicit flag, the field mapping, or the
/// config default, in that order
pub fn resolve_profile(options: &CompareOptions<'_>) -> Result<NormalizationProfile> {
    if let Some(profile) = options.profile {
        return Ok(profile);
    }

    let config = match options.config {
        Some(path) => SuppressConfig::load(path)?,
        None => SuppressConfig::api_management(),
    };

    Ok(match options.field {
        Some(field) => config.profile_for(field),
        None => config.default_profile,
    })
}

fn print_outcome(outcome: &Equivalence) {
    if outcome.is_equivalent {
        println!(
            "{} Documents are equivalent ({})",
            "OK".green().bold(),
            outcome.strategy.to_string().cyan()
        );
    } else {
        println!(
            "{} Documents differ ({})",
            "CHANGED".yellow().bold(),
            outcome.strategy.to_string().cyan()
        );
    }
}
