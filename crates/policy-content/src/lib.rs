//! Semantic equivalence for XML policy documents
//!
//! Decides whether a declared policy body has meaningfully changed relative
//! to previously observed state. Documents may embed template interpolations
//! (`@(...)`, `@{...}`) that break XML well-formedness, so comparison is a
//! two-step pipeline: structural comparison when both sides parse, textual
//! normalization otherwise.

pub mod config;
pub mod equivalence;
pub mod error;
pub mod normalize;
pub mod profile;
pub mod structural;
pub mod suppress;

pub use config::SuppressConfig;
pub use equivalence::{
    Equivalence, Strategy, compare, equivalent_entity_aware, equivalent_whitespace_only,
    is_equivalent,
};
pub use error::{Error, Result};
pub use profile::NormalizationProfile;
pub use structural::StructuralVerdict;
pub use suppress::{DiffSuppressFn, ReconcileContext, Suppressor};
