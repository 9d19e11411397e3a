//! Dependency resolution.
//!
//! Two pure functions make up this module:
//!
//! - [`derive_effective_selection`] computes the catalog ids that are in
//!   effect for a run (manual picks plus any structure-locked ids) without
//!   ever mutating the stored picks, so structure toggles are lossless.
//! - [`resolve`] computes the final ordered, de-duplicated list of package
//!   specifiers written into manifests.
//!
//! Ordering is deterministic by construction: base framework packages first,
//! then user picks in catalog-definition order (not selection order), then
//! structure-mandated additions, then the database driver. Exact string
//! duplicates are removed keeping the first occurrence, so no specifier ever
//! appears twice regardless of how many sources contribute it.

use crate::catalog::{self, CATALOG};
use crate::config::{ProjectConfig, Structure};
use crate::constants::{
    BASE_DEPENDENCIES, DOTENV_SPECIFIER, ENTERPRISE_IDS, ENTERPRISE_SPECIFIERS,
};
use crate::core::FastgenError;

/// The catalog ids in effect for one run, with the subset that is locked
/// (forced present and non-removable) by the selected structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSelection {
    /// All effective ids, in catalog order.
    pub ids: Vec<&'static str>,
    /// Ids locked by the structure (the enterprise set, or empty).
    pub locked: Vec<&'static str>,
}

impl EffectiveSelection {
    /// Whether an id is part of the effective selection.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|candidate| *candidate == id)
    }

    /// Whether any of the given ids is part of the effective selection.
    #[must_use]
    pub fn contains_any(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.contains(id))
    }
}

/// The final ordered, de-duplicated list of package specifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependencySet {
    specifiers: Vec<String>,
}

impl ResolvedDependencySet {
    /// Specifiers in emission order.
    #[must_use]
    pub fn specifiers(&self) -> &[String] {
        &self.specifiers
    }

    /// Whether a specifier is present (exact string match).
    #[must_use]
    pub fn contains(&self, specifier: &str) -> bool {
        self.specifiers.iter().any(|s| s == specifier)
    }

    /// Number of specifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    /// Whether the set is empty (never true in practice: the base framework
    /// packages are always present).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedDependencySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.specifiers.iter()
    }
}

/// Derive the effective selection for `structure` from the user's manual
/// picks.
///
/// Called fresh on every resolve; never mutates `manual_picks`. For the
/// enterprise structure the nine mandated ids are unioned in and reported as
/// locked. Ids are returned in catalog order so downstream output is stable
/// regardless of pick order.
pub fn derive_effective_selection(
    structure: Structure,
    manual_picks: &[String],
) -> Result<EffectiveSelection, FastgenError> {
    // Resolve picks up front so unknown ids fail before any output is built.
    let mut picked: Vec<&'static str> = Vec::with_capacity(manual_picks.len());
    for id in manual_picks {
        picked.push(catalog::lookup(id)?.id);
    }

    let locked: Vec<&'static str> = match structure {
        Structure::Enterprise => ENTERPRISE_IDS.to_vec(),
        _ => Vec::new(),
    };

    let ids = CATALOG
        .iter()
        .map(|entry| entry.id)
        .filter(|id| picked.contains(id) || locked.contains(id))
        .collect();

    Ok(EffectiveSelection { ids, locked })
}

/// Resolve the final dependency set for a configuration.
///
/// Steps, in order: base framework packages; manual picks' specifiers in
/// catalog order; `python-dotenv` for the structured layout; the nine
/// enterprise specifiers for the enterprise layout; the database driver.
/// Exact duplicates are dropped keeping the first occurrence.
pub fn resolve(config: &ProjectConfig) -> Result<ResolvedDependencySet, FastgenError> {
    let mut specifiers: Vec<String> =
        BASE_DEPENDENCIES.iter().map(|s| (*s).to_string()).collect();

    // Manual picks in catalog order, not selection order, so manifest output
    // is reproducible independent of pick order.
    for entry in CATALOG {
        if config.dependencies.iter().any(|id| id == entry.id) {
            specifiers.push(entry.specifier.to_string());
        }
    }
    // Surface unknown ids even though the catalog scan above ignored them.
    for id in &config.dependencies {
        catalog::lookup(id)?;
    }

    match config.structure {
        Structure::Structured => {
            specifiers.push(DOTENV_SPECIFIER.to_string());
        }
        Structure::Enterprise => {
            specifiers.extend(ENTERPRISE_SPECIFIERS.iter().map(|s| (*s).to_string()));
        }
        Structure::Simple => {}
    }

    if let Some(driver) = config.effective_database().driver_specifier() {
        specifiers.push(driver.to_string());
    }

    tracing::debug!(
        structure = %config.structure,
        database = %config.effective_database(),
        count = specifiers.len(),
        "resolved dependency set before dedup"
    );

    Ok(ResolvedDependencySet {
        specifiers: dedup_keep_first(specifiers),
    })
}

/// Remove exact duplicates, keeping the first occurrence of each specifier.
fn dedup_keep_first(specifiers: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    specifiers.into_iter().filter(|s| seen.insert(s.clone())).collect()
}
