//! ローカリティに基づくモジュール抽出
//!
//! A module for a seed signature is grown by repeatedly adding every
//! axiom that is not local w.r.t. the current signature, together with
//! its entities, until nothing changes.

use crate::checker::{LocalityChecker, SyntacticLocalityChecker};
use crate::config::{LocalityConfig, LocalityKind};
use crate::signature::Signature;
use crate::LocalityError;
use fukurow_dl::{Axiom, Entity, OwlDlOntology};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Kind of locality-based module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// ⊥-module: entities outside the signature are empty
    Bottom,
    /// ⊤-module: entities outside the signature are universal
    Top,
    /// ⊥ and ⊤ extraction nested until stable
    Star,
}

/// Axioms of an extracted module, in ontology order
#[derive(Debug, Clone)]
pub struct Module {
    axioms: Vec<Axiom>,
    signature: Signature,
}

impl Module {
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Seed entities plus the entities of every module axiom
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    pub fn into_axioms(self) -> Vec<Axiom> {
        self.axioms
    }
}

/// Extracts syntactic locality modules from an ontology
#[derive(Debug, Clone, Copy)]
pub struct ModuleExtractor<'o> {
    ontology: &'o OwlDlOntology,
}

impl<'o> ModuleExtractor<'o> {
    pub fn new(ontology: &'o OwlDlOntology) -> Self {
        Self { ontology }
    }

    /// Like `new`, but rejects ontologies with malformed axioms
    pub fn validated(ontology: &'o OwlDlOntology) -> Result<Self, LocalityError> {
        for axiom in &ontology.axioms {
            axiom.validate()?;
        }
        Ok(Self::new(ontology))
    }

    pub fn extract<I>(&self, seed: I, module_type: ModuleType) -> Module
    where
        I: IntoIterator<Item = Entity>,
    {
        let seed: Vec<Entity> = seed.into_iter().collect();
        let candidates: Vec<&Axiom> = self.ontology.logical_axioms().collect();

        let (axioms, signature) = match module_type {
            ModuleType::Bottom => extract_with(&candidates, &seed, LocalityKind::Bottom),
            ModuleType::Top => extract_with(&candidates, &seed, LocalityKind::Top),
            ModuleType::Star => extract_star(candidates, &seed),
        };

        info!(
            "Extracted {:?} module: {} of {} axioms, signature size {}",
            module_type,
            axioms.len(),
            self.ontology.len(),
            signature.len()
        );

        Module {
            axioms: axioms.into_iter().cloned().collect(),
            signature,
        }
    }

    /// Module of the axioms relevant to a single entity
    pub fn extract_for_entity(&self, entity: &Entity, module_type: ModuleType) -> Module {
        self.extract(std::iter::once(entity.clone()), module_type)
    }
}

/// One locality flavour, iterated to a fixed point over `candidates`
fn extract_with<'o>(
    candidates: &[&'o Axiom],
    seed: &[Entity],
    kind: LocalityKind,
) -> (Vec<&'o Axiom>, Signature) {
    let mut signature = Signature::from_entities(seed.iter().cloned(), LocalityConfig::uniform(kind));
    let mut included = vec![false; candidates.len()];
    let mut pass = 0;

    loop {
        pass += 1;
        let checker = SyntacticLocalityChecker::new(&signature);
        let added: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(index, axiom)| !included[*index] && !checker.is_local(axiom))
            .map(|(index, _)| index)
            .collect();

        if added.is_empty() {
            break;
        }

        for &index in &added {
            included[index] = true;
            signature.extend(candidates[index].signature());
        }
        debug!(
            "{:?} locality pass {}: {} axioms added, signature size {}",
            kind,
            pass,
            added.len(),
            signature.len()
        );
    }

    let axioms = candidates
        .iter()
        .zip(&included)
        .filter(|(_, included)| **included)
        .map(|(axiom, _)| *axiom)
        .collect();
    (axioms, signature)
}

/// Alternate ⊥ and ⊤ extraction on the previous module until it stops shrinking
fn extract_star<'o>(candidates: Vec<&'o Axiom>, seed: &[Entity]) -> (Vec<&'o Axiom>, Signature) {
    let mut current = candidates;
    let mut kind = LocalityKind::Bottom;
    let mut unchanged = 0;

    loop {
        let before = current.len();
        let (axioms, signature) = extract_with(&current, seed, kind);
        if axioms.len() == before {
            unchanged += 1;
        } else {
            unchanged = 0;
        }
        current = axioms;

        // stable once both flavours in a row kept every axiom
        if unchanged >= 2 || current.is_empty() {
            return (current, signature);
        }
        kind = match kind {
            LocalityKind::Bottom => LocalityKind::Top,
            LocalityKind::Top => LocalityKind::Bottom,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fukurow_dl::{ClassExpression, Individual, OwlIri, PropertyExpression};

    fn iri(name: &str) -> OwlIri {
        OwlIri::new(format!("http://example.org/{}", name))
    }

    fn class(name: &str) -> ClassExpression {
        ClassExpression::Named(iri(name))
    }

    fn entity(name: &str) -> Entity {
        Entity::Class(iri(name))
    }

    fn role(name: &str) -> PropertyExpression {
        PropertyExpression::ObjectProperty(iri(name))
    }

    fn chain_ontology() -> OwlDlOntology {
        vec![
            Axiom::Declaration(entity("A")),
            Axiom::SubClassOf(class("A"), class("B")),
            Axiom::SubClassOf(class("B"), class("C")),
            Axiom::SubClassOf(class("D"), class("E")),
            Axiom::SubClassOf(class("E"), ClassExpression::some(role("r"), class("A"))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_bottom_module_follows_superclasses() {
        let ontology = chain_ontology();
        let module = ModuleExtractor::new(&ontology).extract_for_entity(&entity("A"), ModuleType::Bottom);

        assert_eq!(module.len(), 2);
        assert!(module.contains(&Axiom::SubClassOf(class("A"), class("B"))));
        assert!(module.contains(&Axiom::SubClassOf(class("B"), class("C"))));
        assert!(module.signature().contains(&entity("C")));
        assert!(!module.signature().contains(&entity("D")));
    }

    #[test]
    fn test_top_module_follows_subclasses() {
        let ontology = chain_ontology();
        let module = ModuleExtractor::new(&ontology).extract_for_entity(&entity("B"), ModuleType::Top);

        assert!(module.contains(&Axiom::SubClassOf(class("A"), class("B"))));
        assert!(!module.contains(&Axiom::SubClassOf(class("B"), class("C"))));
    }

    #[test]
    fn test_declarations_never_enter_modules() {
        let ontology = chain_ontology();
        let module = ModuleExtractor::new(&ontology).extract_for_entity(&entity("A"), ModuleType::Star);

        assert!(!module.contains(&Axiom::Declaration(entity("A"))));
    }

    #[test]
    fn test_star_module_is_within_bottom_module() {
        let ontology = chain_ontology();
        let extractor = ModuleExtractor::new(&ontology);
        let bottom = extractor.extract_for_entity(&entity("A"), ModuleType::Bottom);
        let star = extractor.extract_for_entity(&entity("A"), ModuleType::Star);

        assert!(star.len() <= bottom.len());
        assert!(star.axioms().iter().all(|axiom| bottom.contains(axiom)));
    }

    #[test]
    fn test_empty_seed_keeps_only_non_local_axioms() {
        let ontology: OwlDlOntology = vec![
            Axiom::SubClassOf(class("A"), class("B")),
            Axiom::ClassAssertion(class("A"), Individual(iri("a"))),
        ]
        .into_iter()
        .collect();
        let module = ModuleExtractor::new(&ontology).extract(Vec::new(), ModuleType::Bottom);

        // the assertion forces A to be non-empty, which drags in A ⊑ B
        assert_eq!(module.len(), 2);
    }

    #[test]
    fn test_validated_rejects_malformed_axioms() {
        let mut ontology = OwlDlOntology::new();
        ontology.add_axiom(Axiom::EquivalentClasses(Vec::new()));

        let result = ModuleExtractor::validated(&ontology);
        assert!(matches!(result, Err(LocalityError::Model(_))));
    }
}
