//! Cross-crate invariant: every registered citation key must exist in the
//! bundled bibliography. The reverse is not required; the bibliography may
//! cite models nothing is registered for.

use rheo_bib::Bibliography;
use rheo_models::{FlowModel, Registry};

#[test]
fn every_registered_key_has_a_citation() {
    let bib = Bibliography::bundled().unwrap();
    let registry = Registry::standard();
    for key in registry.citation_keys() {
        assert!(bib.contains(key), "registry key '{key}' has no citation");
    }
}

#[test]
fn registered_models_evaluate_under_their_citations() {
    let bib = Bibliography::bundled().unwrap();
    let registry = Registry::standard();
    for entry in registry.iter() {
        let citation = bib.get(entry.citation_key()).unwrap();
        assert!(citation.get("year").is_some());
        assert!(entry.model().stress(1.0).is_finite());
    }
}
