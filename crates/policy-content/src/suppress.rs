//! Field-level diff suppression for a reconciliation framework
//!
//! A reconciliation framework asks, per field, whether a change between the
//! observed and declared value should be treated as a no-op. The functions
//! here answer with `true` to suppress the update.

use crate::config::SuppressConfig;
use crate::equivalence::{self, equivalent_entity_aware, equivalent_whitespace_only};
use crate::profile::NormalizationProfile;

/// Framework bookkeeping passed alongside each field comparison.
///
/// Never inspected by the engine.
pub trait ReconcileContext {}

impl ReconcileContext for () {}

/// `(field_key, old_value, new_value, context) -> suppress`
pub type DiffSuppressFn = fn(&str, &str, &str, &dyn ReconcileContext) -> bool;

/// Suppress when the documents are equivalent with whitespace-only fallback
pub fn xml_diff(_field_key: &str, old: &str, new: &str, _ctx: &dyn ReconcileContext) -> bool {
    equivalent_whitespace_only(old, new)
}

/// Suppress when the documents are equivalent with entity-aware fallback
pub fn xml_with_interpolations_diff(
    _field_key: &str,
    old: &str,
    new: &str,
    _ctx: &dyn ReconcileContext,
) -> bool {
    equivalent_entity_aware(old, new)
}

/// The static suppression function for a profile
pub fn suppress_fn(profile: NormalizationProfile) -> DiffSuppressFn {
    match profile {
        NormalizationProfile::EntityAware => xml_with_interpolations_diff,
        NormalizationProfile::WhitespaceOnly => xml_diff,
    }
}

/// Suppression adapter that picks a profile per field from a config
#[derive(Debug, Clone, Default)]
pub struct Suppressor {
    config: SuppressConfig,
}

impl Suppressor {
    pub fn new(config: SuppressConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuppressConfig {
        &self.config
    }

    /// Decide whether the change to `field_key` is a no-op
    pub fn suppress(
        &self,
        field_key: &str,
        old: &str,
        new: &str,
        _ctx: &dyn ReconcileContext,
    ) -> bool {
        let profile = self.config.profile_for(field_key);
        let outcome = equivalence::compare(old, new, profile);
        tracing::debug!(
            field = field_key,
            equivalent = outcome.is_equivalent,
            strategy = %outcome.strategy,
            "Diff suppression decided"
        );
        outcome.is_equivalent
    }

    /// A plain function pointer for frameworks that register one per field
    pub fn for_field(&self, field_key: &str) -> DiffSuppressFn {
        suppress_fn(self.config.profile_for(field_key))
    }
}
