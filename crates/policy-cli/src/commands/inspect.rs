//! Normalize and canonical command implementations
//!
//! Show what each stage of the pipeline sees for a single document.

use std::path::Path;

use policy_content::NormalizationProfile;
use policy_content::normalize::normalize;
use policy_content::structural::canonicalize;

use super::read_input;
use crate::error::Result;

/// Print the textual fallback normalization of a document
pub fn run_normalize(file: &Path, profile: NormalizationProfile) -> Result<()> {
    let source = read_input(file)?;
    println!("{}", normalize(&source, profile));
    Ok(())
}

/// Print the structural canonical tree of a document
///
/// Fails when the document is not well-formed XML.
pub fn run_canonical(file: &Path) -> Result<()> {
    let source = read_input(file)?;
    let tree = canonicalize(&source)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
