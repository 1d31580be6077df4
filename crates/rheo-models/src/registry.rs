//! Citation-keyed model registry.
//!
//! Associates each bibliography citation key with the model the cited paper
//! introduces. The mapping is fixed and constructed once; there is no
//! mutation API. Every key registered here must exist in the bundled
//! bibliography, which the cross-crate integration test verifies.

use crate::error::{ModelError, ModelResult};
use crate::model::FlowModel;
use crate::models::{
    Bingham, Carreau, CarreauYasuda, Casson, Cross, HerschelBulkley, Newtonian, PowerLaw,
    ThreeComponent,
};
use std::collections::BTreeMap;

/// A registered model: the citation key plus the callable carrying its
/// display formula. Registered instances hold reference parameters (the
/// documented defaults, or explicit literature-representative values for
/// models without defaults).
pub struct ModelEntry {
    citation_key: &'static str,
    model: Box<dyn FlowModel>,
}

impl std::fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelEntry")
            .field("citation_key", &self.citation_key)
            .field("model", &self.model.name())
            .finish()
    }
}

impl ModelEntry {
    fn new(citation_key: &'static str, model: impl FlowModel + 'static) -> Self {
        Self {
            citation_key,
            model: Box::new(model),
        }
    }

    pub fn citation_key(&self) -> &'static str {
        self.citation_key
    }

    pub fn model(&self) -> &dyn FlowModel {
        self.model.as_ref()
    }

    /// LaTeX display string of the registered model's formula.
    pub fn formula(&self) -> &'static str {
        self.model.formula()
    }
}

/// Fixed mapping from citation key to model entry.
pub struct Registry {
    entries: BTreeMap<&'static str, ModelEntry>,
}

impl Registry {
    /// Build the standard registry covering the classical flow-curve papers.
    ///
    /// Carreau and Carreau-Yasuda are registered under distinct keys. The
    /// Carreau-Yasuda form has no literature defaults, so its registered
    /// instance uses reference parameters matching the Cross plateaus
    /// (mu_0=1.0, mu_inf=0.001) with lambda_1=1.0 and n=0.5.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        for entry in [
            ModelEntry::new("newton_1687", Newtonian::default()),
            ModelEntry::new("ostwald_1929", PowerLaw::default()),
            ModelEntry::new("bingham_1916", Bingham::default()),
            ModelEntry::new("herschel_bulkley_1926", HerschelBulkley::default()),
            ModelEntry::new("casson_1959", Casson::default()),
            ModelEntry::new("caggioni2020variations", ThreeComponent::default()),
            ModelEntry::new("carreau_1972", Carreau::default()),
            ModelEntry::new("carreau_yasuda_1979", CarreauYasuda::new(1.0, 0.001, 1.0, 0.5)),
            ModelEntry::new("cross_1925", Cross::default()),
        ] {
            entries.insert(entry.citation_key, entry);
        }
        tracing::debug!(models = entries.len(), "constructed standard model registry");
        Self { entries }
    }

    /// Resolve a citation key to its model entry.
    pub fn lookup(&self, citation_key: &str) -> ModelResult<&ModelEntry> {
        self.entries
            .get(citation_key)
            .ok_or_else(|| ModelError::UnknownCitation {
                key: citation_key.to_string(),
            })
    }

    /// Citation keys in sorted order.
    pub fn citation_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlowModel;
    use rheo_core::{Tolerances, nearly_equal};

    #[test]
    fn standard_registry_has_nine_models() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn lookup_matches_direct_calls_at_unit_shear_rate() {
        let registry = Registry::standard();
        let direct: [(&str, &dyn FlowModel); 9] = [
            ("newton_1687", &Newtonian::default()),
            ("ostwald_1929", &PowerLaw::default()),
            ("bingham_1916", &Bingham::default()),
            ("herschel_bulkley_1926", &HerschelBulkley::default()),
            ("casson_1959", &Casson::default()),
            ("caggioni2020variations", &ThreeComponent::default()),
            ("carreau_1972", &Carreau::default()),
            ("carreau_yasuda_1979", &CarreauYasuda::new(1.0, 0.001, 1.0, 0.5)),
            ("cross_1925", &Cross::default()),
        ];

        let tol = Tolerances::default();
        for (key, model) in direct {
            let entry = registry.lookup(key).unwrap();
            assert!(
                nearly_equal(entry.model().stress(1.0), model.stress(1.0), tol),
                "mismatch for {key}"
            );
        }
    }

    #[test]
    fn lookup_unknown_key_is_not_found() {
        let registry = Registry::standard();
        let err = registry.lookup("einstein_1905").unwrap_err();
        assert_eq!(
            err,
            crate::ModelError::UnknownCitation {
                key: "einstein_1905".into()
            }
        );
    }

    #[test]
    fn entry_exposes_formula() {
        let registry = Registry::standard();
        let entry = registry.lookup("ostwald_1929").unwrap();
        assert_eq!(entry.formula(), r"\sigma=K\cdot\dot\gamma^n");
    }

    #[test]
    fn citation_keys_are_sorted_and_unique() {
        let registry = Registry::standard();
        let keys: Vec<_> = registry.citation_keys().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }
}
