//! Two-step equivalence pipeline
//!
//! The structural comparison runs first; when both documents parse, its
//! verdict is final. Otherwise the textual normalization for the selected
//! profile decides.

use std::fmt;

use crate::normalize;
use crate::profile::NormalizationProfile;
use crate::structural::{self, StructuralVerdict};

/// Which stage of the pipeline reached the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Both documents parsed as XML and their trees were compared
    Structural,
    /// At least one document did not parse; normalized text was compared
    Textual(NormalizationProfile),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Textual(_) => "textual",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural => f.write_str("structural"),
            Self::Textual(profile) => write!(f, "textual ({profile})"),
        }
    }
}

/// Result of comparing two documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equivalence {
    /// True when there is no effective change
    pub is_equivalent: bool,
    /// Stage that decided
    pub strategy: Strategy,
}

impl Equivalence {
    fn structural(is_equivalent: bool) -> Self {
        Self {
            is_equivalent,
            strategy: Strategy::Structural,
        }
    }

    fn textual(is_equivalent: bool, profile: NormalizationProfile) -> Self {
        Self {
            is_equivalent,
            strategy: Strategy::Textual(profile),
        }
    }
}

/// Run the pipeline and report which stage decided.
///
/// The profile only matters when the textual fallback runs.
pub fn compare(old: &str, new: &str, profile: NormalizationProfile) -> Equivalence {
    let outcome = match structural::compare(old, new) {
        StructuralVerdict::Equivalent => Equivalence::structural(true),
        StructuralVerdict::Different => Equivalence::structural(false),
        StructuralVerdict::Undetermined => {
            tracing::debug!(%profile, "Falling back to textual normalization");
            Equivalence::textual(normalize::textually_equivalent(old, new, profile), profile)
        }
    };

    tracing::trace!(
        equivalent = outcome.is_equivalent,
        strategy = %outcome.strategy,
        "Equivalence decided"
    );
    outcome
}

/// True when `old` and `new` carry no effective change under `profile`
pub fn is_equivalent(old: &str, new: &str, profile: NormalizationProfile) -> bool {
    compare(old, new, profile).is_equivalent
}

/// Equivalence with entity-aware fallback.
///
/// For documents that may have been round-tripped through an API that
/// escapes quotes and brackets inside interpolated values.
///
/// # Examples
///
/// ```
/// use policy_content::equivalent_entity_aware;
///
/// assert!(equivalent_entity_aware(r#"<a href="x"/>"#, "<a href=&quot;x&quot;/>"));
/// ```
pub fn equivalent_entity_aware(old: &str, new: &str) -> bool {
    is_equivalent(old, new, NormalizationProfile::EntityAware)
}

/// Equivalence with whitespace-only fallback.
///
/// # Examples
///
/// ```
/// use policy_content::equivalent_whitespace_only;
///
/// assert!(equivalent_whitespace_only(
///     r#"<a v="@(ctx.Vars["k"])"/>"#,
///     r#"<a  v="@(ctx.Vars["k"])" />"#,
/// ));
/// ```
pub fn equivalent_whitespace_only(old: &str, new: &str) -> bool {
    is_equivalent(old, new, NormalizationProfile::WhitespaceOnly)
}
