//! 公理の局所性判定

use crate::equivalence::{EquivalenceEvaluator, Expression};
use crate::signature::Signature;
use fukurow_dl::{Axiom, ClassExpression};
use tracing::trace;

/// Decides whether axioms are local with respect to a signature
pub trait LocalityChecker {
    fn signature(&self) -> &Signature;

    fn is_top_equivalent(&self, expr: Expression<'_>) -> bool;

    fn is_bot_equivalent(&self, expr: Expression<'_>) -> bool;

    /// An axiom is local if it holds in every model where the entities
    /// outside the signature are interpreted as ⊤ or ⊥
    fn is_local(&self, axiom: &Axiom) -> bool;
}

/// Syntactic locality based on top/bottom equivalence
#[derive(Debug, Clone, Copy)]
pub struct SyntacticLocalityChecker<'a> {
    equivalence: EquivalenceEvaluator<'a>,
}

impl<'a> SyntacticLocalityChecker<'a> {
    pub fn new(signature: &'a Signature) -> Self {
        Self {
            equivalence: EquivalenceEvaluator::new(signature),
        }
    }

    fn top<'e>(&self, expr: impl Into<Expression<'e>>) -> bool {
        self.equivalence.is_top_equivalent(expr)
    }

    fn bot<'e>(&self, expr: impl Into<Expression<'e>>) -> bool {
        self.equivalence.is_bot_equivalent(expr)
    }

    /// All operands collapse to ⊥, or all to ⊤
    fn equivalent_local<'e, T>(&self, operands: &'e [T]) -> bool
    where
        &'e T: Into<Expression<'e>>,
    {
        match operands.split_first() {
            None => true,
            Some((_, [])) => true,
            Some((first, rest)) => {
                if self.bot(first) {
                    rest.iter().all(|op| self.bot(op))
                } else if self.top(first) {
                    rest.iter().all(|op| self.top(op))
                } else {
                    false
                }
            }
        }
    }

    /// At most one operand is not ⊥
    fn disjoint_local<'e, T>(&self, operands: &'e [T]) -> bool
    where
        &'e T: Into<Expression<'e>>,
    {
        operands.iter().filter(|op| !self.bot(*op)).count() <= 1
    }

    /// A ≡ C1 ⊔ ... ⊔ Cn with pairwise disjoint Ci
    fn disjoint_union_local(&self, class: &ClassExpression, operands: &[ClassExpression]) -> bool {
        if self.bot(class) {
            return operands.iter().all(|op| self.bot(op));
        }
        if !self.top(class) {
            return false;
        }
        let mut top_seen = false;
        for op in operands {
            if self.bot(op) {
                continue;
            }
            if top_seen || !self.top(op) {
                return false;
            }
            top_seen = true;
        }
        top_seen
    }

    fn evaluate(&self, axiom: &Axiom) -> bool {
        match axiom {
            Axiom::Declaration(_) => true,

            Axiom::EquivalentClasses(operands) => self.equivalent_local(operands),
            Axiom::EquivalentObjectProperties(operands) |
            Axiom::EquivalentDataProperties(operands) => self.equivalent_local(operands),

            Axiom::DisjointClasses(operands) => self.disjoint_local(operands),
            Axiom::DisjointObjectProperties(operands) |
            Axiom::DisjointDataProperties(operands) => self.disjoint_local(operands),

            Axiom::DisjointUnion(class, operands) => {
                self.disjoint_union_local(&ClassExpression::Named(class.clone()), operands)
            }

            Axiom::SameIndividual(_) | Axiom::DifferentIndividuals(_) => false,

            Axiom::InverseObjectProperties(p, q) => {
                (self.bot(p) && self.bot(q)) || (self.top(p) && self.top(q))
            }

            Axiom::SubObjectPropertyOf(sub, sup) | Axiom::SubDataPropertyOf(sub, sup) => {
                self.top(sup) || self.bot(sub)
            }

            Axiom::SubPropertyChainOf(chain, sup) => self.top(sup) || self.bot(chain.as_slice()),

            Axiom::ObjectPropertyDomain(p, c) |
            Axiom::ObjectPropertyRange(p, c) |
            Axiom::DataPropertyDomain(p, c) => self.top(c) || self.bot(p),
            Axiom::DataPropertyRange(p, range) => self.top(range) || self.bot(p),

            Axiom::TransitiveObjectProperty(p) | Axiom::SymmetricObjectProperty(p) => {
                self.bot(p) || self.top(p)
            }

            // the empty relation is not reflexive
            Axiom::ReflexiveObjectProperty(p) => self.top(p),

            Axiom::IrreflexiveObjectProperty(p) |
            Axiom::AsymmetricObjectProperty(p) |
            Axiom::FunctionalObjectProperty(p) |
            Axiom::InverseFunctionalObjectProperty(p) |
            Axiom::FunctionalDataProperty(p) => self.bot(p),

            Axiom::SubClassOf(sub, sup) => self.bot(sub) || self.top(sup),

            Axiom::ClassAssertion(class, _) => self.top(class),

            Axiom::ObjectPropertyAssertion(p, _, _) | Axiom::DataPropertyAssertion(p, _, _) => {
                self.top(p)
            }

            Axiom::NegativeObjectPropertyAssertion(p, _, _) |
            Axiom::NegativeDataPropertyAssertion(p, _, _) => self.bot(p),

            Axiom::DatatypeDefinition(..) | Axiom::HasKey(..) => false,
        }
    }
}

impl LocalityChecker for SyntacticLocalityChecker<'_> {
    fn signature(&self) -> &Signature {
        self.equivalence.signature()
    }

    fn is_top_equivalent(&self, expr: Expression<'_>) -> bool {
        self.equivalence.is_top_equivalent(expr)
    }

    fn is_bot_equivalent(&self, expr: Expression<'_>) -> bool {
        self.equivalence.is_bot_equivalent(expr)
    }

    fn is_local(&self, axiom: &Axiom) -> bool {
        let local = self.evaluate(axiom);
        trace!("Axiom {:?} is {}", axiom, if local { "local" } else { "non-local" });
        local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocalityKind;
    use fukurow_dl::{vocabulary, DataRange, Entity, Individual, Literal, OwlIri, PropertyExpression};

    fn iri(name: &str) -> OwlIri {
        OwlIri::new(format!("http://example.org/{}", name))
    }

    fn class(name: &str) -> ClassExpression {
        ClassExpression::Named(iri(name))
    }

    fn role(name: &str) -> PropertyExpression {
        PropertyExpression::ObjectProperty(iri(name))
    }

    fn individual(name: &str) -> Individual {
        Individual(iri(name))
    }

    fn signature(kind: LocalityKind, entities: Vec<Entity>) -> Signature {
        let mut signature = Signature::with_locality(kind);
        signature.extend(entities);
        signature
    }

    #[test]
    fn test_sub_class_of() {
        let sig = signature(LocalityKind::Bottom, vec![Entity::Class(iri("B"))]);
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::SubClassOf(class("A"), class("B"))));
        assert!(!checker.is_local(&Axiom::SubClassOf(class("B"), class("A"))));
        assert!(checker.is_local(&Axiom::SubClassOf(class("B"), ClassExpression::Thing)));
    }

    #[test]
    fn test_equivalent_classes() {
        let sig = signature(LocalityKind::Bottom, vec![Entity::Class(iri("C"))]);
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::EquivalentClasses(vec![class("A"), class("B")])));
        assert!(!checker.is_local(&Axiom::EquivalentClasses(vec![class("A"), class("C")])));
        assert!(checker.is_local(&Axiom::EquivalentClasses(vec![class("C")])));
        assert!(checker.is_local(&Axiom::EquivalentClasses(vec![
            ClassExpression::Thing,
            class("A").complement(),
        ])));
    }

    #[test]
    fn test_disjoint_classes_allow_one_survivor() {
        let sig = signature(LocalityKind::Bottom, vec![Entity::Class(iri("C")), Entity::Class(iri("D"))]);
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::DisjointClasses(vec![class("A"), class("B"), class("C")])));
        assert!(!checker.is_local(&Axiom::DisjointClasses(vec![class("A"), class("C"), class("D")])));
    }

    #[test]
    fn test_disjoint_union() {
        let bottom = signature(LocalityKind::Bottom, vec![]);
        let checker = SyntacticLocalityChecker::new(&bottom);
        assert!(checker.is_local(&Axiom::DisjointUnion(iri("A"), vec![class("B"), class("C")])));

        let top = signature(LocalityKind::Top, vec![]);
        let checker = SyntacticLocalityChecker::new(&top);
        // two ⊤ operands are not disjoint
        assert!(!checker.is_local(&Axiom::DisjointUnion(iri("A"), vec![class("B"), class("C")])));
        assert!(checker.is_local(&Axiom::DisjointUnion(
            iri("A"),
            vec![class("B"), ClassExpression::Nothing],
        )));
    }

    #[test]
    fn test_individual_axioms_are_never_local() {
        for kind in [LocalityKind::Bottom, LocalityKind::Top] {
            let sig = signature(kind, vec![]);
            let checker = SyntacticLocalityChecker::new(&sig);
            assert!(!checker.is_local(&Axiom::SameIndividual(vec![individual("a"), individual("b")])));
            assert!(!checker.is_local(&Axiom::DifferentIndividuals(vec![individual("a"), individual("b")])));
        }
    }

    #[test]
    fn test_property_characteristics() {
        let bottom = signature(LocalityKind::Bottom, vec![]);
        let checker = SyntacticLocalityChecker::new(&bottom);
        assert!(checker.is_local(&Axiom::FunctionalObjectProperty(role("r"))));
        assert!(checker.is_local(&Axiom::TransitiveObjectProperty(role("r"))));
        assert!(!checker.is_local(&Axiom::ReflexiveObjectProperty(role("r"))));

        let top = signature(LocalityKind::Top, vec![]);
        let checker = SyntacticLocalityChecker::new(&top);
        assert!(!checker.is_local(&Axiom::FunctionalObjectProperty(role("r"))));
        assert!(checker.is_local(&Axiom::SymmetricObjectProperty(role("r"))));
        assert!(checker.is_local(&Axiom::ReflexiveObjectProperty(role("r"))));
    }

    #[test]
    fn test_property_axioms() {
        let sig = signature(LocalityKind::Bottom, vec![Entity::ObjectProperty(iri("s"))]);
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::SubObjectPropertyOf(role("r"), role("s"))));
        assert!(!checker.is_local(&Axiom::SubObjectPropertyOf(role("s"), role("r"))));
        assert!(checker.is_local(&Axiom::ObjectPropertyDomain(role("r"), class("A"))));
        assert!(!checker.is_local(&Axiom::ObjectPropertyRange(role("s"), class("A"))));
        assert!(checker.is_local(&Axiom::InverseObjectProperties(role("r"), role("q"))));
        assert!(!checker.is_local(&Axiom::InverseObjectProperties(role("r"), role("s"))));
        assert!(checker.is_local(&Axiom::SubPropertyChainOf(vec![role("s"), role("r")], role("s"))));
        assert!(!checker.is_local(&Axiom::SubPropertyChainOf(vec![role("s")], role("q"))));
    }

    #[test]
    fn test_data_property_axioms() {
        let top = signature(LocalityKind::Top, vec![]);
        let checker = SyntacticLocalityChecker::new(&top);
        let age = PropertyExpression::data("http://example.org/age");

        assert!(checker.is_local(&Axiom::DataPropertyRange(age.clone(), DataRange::literal())));
        assert!(!checker.is_local(&Axiom::DataPropertyRange(
            age.clone(),
            DataRange::datatype(vocabulary::XSD_INTEGER),
        )));
        assert!(checker.is_local(&Axiom::DataPropertyAssertion(
            age.clone(),
            individual("a"),
            Literal::typed("42", OwlIri::new(vocabulary::XSD_INTEGER)),
        )));
        assert!(!checker.is_local(&Axiom::NegativeDataPropertyAssertion(
            age,
            individual("a"),
            Literal::string("x"),
        )));
    }

    fn data(name: &str) -> PropertyExpression {
        PropertyExpression::DataProperty(iri(name))
    }

    fn property_signature() -> Signature {
        signature(
            LocalityKind::Bottom,
            vec![
                Entity::ObjectProperty(iri("s")),
                Entity::ObjectProperty(iri("t")),
                Entity::DataProperty(iri("w")),
                Entity::DataProperty(iri("x")),
            ],
        )
    }

    #[test]
    fn test_equivalent_and_disjoint_properties() {
        let sig = property_signature();
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::EquivalentObjectProperties(vec![role("r"), role("q")])));
        assert!(!checker.is_local(&Axiom::EquivalentObjectProperties(vec![role("r"), role("s")])));
        assert!(checker.is_local(&Axiom::EquivalentDataProperties(vec![data("u"), data("v")])));
        assert!(!checker.is_local(&Axiom::EquivalentDataProperties(vec![data("u"), data("w")])));

        assert!(checker.is_local(&Axiom::DisjointObjectProperties(vec![role("r"), role("q"), role("s")])));
        assert!(!checker.is_local(&Axiom::DisjointObjectProperties(vec![role("s"), role("t")])));
        assert!(checker.is_local(&Axiom::DisjointDataProperties(vec![data("u"), data("w")])));
        assert!(!checker.is_local(&Axiom::DisjointDataProperties(vec![data("w"), data("x")])));

        // two universal relations are equivalent but never disjoint
        let top = signature(LocalityKind::Top, vec![]);
        let checker = SyntacticLocalityChecker::new(&top);
        assert!(checker.is_local(&Axiom::EquivalentObjectProperties(vec![role("r"), role("q")])));
        assert!(!checker.is_local(&Axiom::DisjointObjectProperties(vec![role("r"), role("q")])));
    }

    #[test]
    fn test_sub_data_property_and_domain() {
        let sig = property_signature();
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::SubDataPropertyOf(data("u"), data("w"))));
        assert!(!checker.is_local(&Axiom::SubDataPropertyOf(data("w"), data("u"))));
        assert!(checker.is_local(&Axiom::DataPropertyDomain(data("u"), class("A"))));
        assert!(!checker.is_local(&Axiom::DataPropertyDomain(data("w"), class("A"))));
        assert!(checker.is_local(&Axiom::DataPropertyDomain(data("w"), ClassExpression::Thing)));
    }

    #[test]
    fn test_characteristics_that_hold_for_the_empty_relation() {
        let sig = property_signature();
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(checker.is_local(&Axiom::IrreflexiveObjectProperty(role("r"))));
        assert!(!checker.is_local(&Axiom::IrreflexiveObjectProperty(role("s"))));
        assert!(checker.is_local(&Axiom::AsymmetricObjectProperty(role("r"))));
        assert!(!checker.is_local(&Axiom::AsymmetricObjectProperty(role("s"))));
        assert!(checker.is_local(&Axiom::InverseFunctionalObjectProperty(role("r").inverse())));
        assert!(!checker.is_local(&Axiom::InverseFunctionalObjectProperty(role("s"))));
        assert!(checker.is_local(&Axiom::FunctionalDataProperty(data("u"))));
        assert!(!checker.is_local(&Axiom::FunctionalDataProperty(data("w"))));

        let top = signature(LocalityKind::Top, vec![]);
        let checker = SyntacticLocalityChecker::new(&top);
        assert!(!checker.is_local(&Axiom::IrreflexiveObjectProperty(role("r"))));
        assert!(!checker.is_local(&Axiom::FunctionalDataProperty(data("u"))));
    }

    #[test]
    fn test_assertions() {
        let sig = signature(LocalityKind::Bottom, vec![]);
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(!checker.is_local(&Axiom::ClassAssertion(class("A"), individual("a"))));
        assert!(checker.is_local(&Axiom::ClassAssertion(ClassExpression::Thing, individual("a"))));
        assert!(!checker.is_local(&Axiom::ObjectPropertyAssertion(role("r"), individual("a"), individual("b"))));
        assert!(checker.is_local(&Axiom::NegativeObjectPropertyAssertion(
            role("r"),
            individual("a"),
            individual("b"),
        )));
    }

    #[test]
    fn test_definitions_and_keys_are_never_local() {
        let sig = signature(LocalityKind::Bottom, vec![]);
        let checker = SyntacticLocalityChecker::new(&sig);

        assert!(!checker.is_local(&Axiom::DatatypeDefinition(iri("D"), DataRange::literal())));
        assert!(!checker.is_local(&Axiom::HasKey(class("A"), vec![role("r")])));
    }

    #[test]
    fn test_trait_exposes_equivalence() {
        let sig = signature(LocalityKind::Bottom, vec![]);
        let checker = SyntacticLocalityChecker::new(&sig);
        let a = class("A");

        assert!(checker.is_bot_equivalent(Expression::from(&a)));
        assert!(!checker.is_top_equivalent(Expression::from(&a)));
        assert!(checker.signature().is_empty());
    }
}
