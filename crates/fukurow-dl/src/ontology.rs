//! OWL DL オントロジー

use crate::model::{
    Axiom, ClassExpression, DataRange, Entity, Individual, Literal, OwlIri, PropertyExpression,
};
use crate::OwlDlError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

impl Axiom {
    /// Every named entity mentioned by the axiom
    pub fn signature(&self) -> BTreeSet<Entity> {
        let mut collector = EntityCollector::default();
        collector.collect_axiom(self);
        collector.entities
    }

    /// Declarations carry no logical content
    pub fn is_logical(&self) -> bool {
        !matches!(self, Axiom::Declaration(_))
    }

    /// Check the arity constraints of OWL 2 axioms
    pub fn validate(&self) -> Result<(), OwlDlError> {
        let min_operands = |name: &str, found: usize, required: usize| {
            if found < required {
                Err(OwlDlError::InvalidAxiom(format!(
                    "{} requires at least {} operands, found {}",
                    name, required, found
                )))
            } else {
                Ok(())
            }
        };

        match self {
            Axiom::EquivalentClasses(classes) => min_operands("EquivalentClasses", classes.len(), 2)?,
            Axiom::DisjointClasses(classes) => min_operands("DisjointClasses", classes.len(), 2)?,
            Axiom::DisjointUnion(_, classes) => min_operands("DisjointUnion", classes.len(), 2)?,
            Axiom::SubPropertyChainOf(chain, _) => min_operands("ObjectPropertyChain", chain.len(), 2)?,
            Axiom::EquivalentObjectProperties(properties) |
            Axiom::EquivalentDataProperties(properties) => {
                min_operands("EquivalentProperties", properties.len(), 2)?
            }
            Axiom::DisjointObjectProperties(properties) |
            Axiom::DisjointDataProperties(properties) => {
                min_operands("DisjointProperties", properties.len(), 2)?
            }
            Axiom::SameIndividual(individuals) => min_operands("SameIndividual", individuals.len(), 2)?,
            Axiom::DifferentIndividuals(individuals) => {
                min_operands("DifferentIndividuals", individuals.len(), 2)?
            }
            Axiom::HasKey(_, properties) => min_operands("HasKey", properties.len(), 1)?,
            _ => {}
        }

        let mut checker = ExpressionChecker::default();
        checker.check_axiom(self);
        match checker.error {
            Some(message) => Err(OwlDlError::InvalidAxiom(message)),
            None => Ok(()),
        }
    }
}

/// Recursive entity collection over axioms and expressions
#[derive(Default)]
struct EntityCollector {
    entities: BTreeSet<Entity>,
}

impl EntityCollector {
    fn collect_axiom(&mut self, axiom: &Axiom) {
        match axiom {
            Axiom::Declaration(entity) => {
                self.entities.insert(entity.clone());
            }
            Axiom::SubClassOf(sub, sup) => {
                self.collect_class(sub);
                self.collect_class(sup);
            }
            Axiom::EquivalentClasses(classes) | Axiom::DisjointClasses(classes) => {
                for class in classes {
                    self.collect_class(class);
                }
            }
            Axiom::DisjointUnion(iri, classes) => {
                self.entities.insert(Entity::Class(iri.clone()));
                for class in classes {
                    self.collect_class(class);
                }
            }
            Axiom::SubObjectPropertyOf(p1, p2) |
            Axiom::SubDataPropertyOf(p1, p2) |
            Axiom::InverseObjectProperties(p1, p2) => {
                self.collect_property(p1);
                self.collect_property(p2);
            }
            Axiom::SubPropertyChainOf(chain, sup) => {
                for property in chain {
                    self.collect_property(property);
                }
                self.collect_property(sup);
            }
            Axiom::EquivalentObjectProperties(properties) |
            Axiom::DisjointObjectProperties(properties) |
            Axiom::EquivalentDataProperties(properties) |
            Axiom::DisjointDataProperties(properties) => {
                for property in properties {
                    self.collect_property(property);
                }
            }
            Axiom::ObjectPropertyDomain(property, class) |
            Axiom::ObjectPropertyRange(property, class) |
            Axiom::DataPropertyDomain(property, class) => {
                self.collect_property(property);
                self.collect_class(class);
            }
            Axiom::DataPropertyRange(property, range) => {
                self.collect_property(property);
                self.collect_data_range(range);
            }
            Axiom::FunctionalObjectProperty(property) |
            Axiom::InverseFunctionalObjectProperty(property) |
            Axiom::ReflexiveObjectProperty(property) |
            Axiom::IrreflexiveObjectProperty(property) |
            Axiom::SymmetricObjectProperty(property) |
            Axiom::AsymmetricObjectProperty(property) |
            Axiom::TransitiveObjectProperty(property) |
            Axiom::FunctionalDataProperty(property) => {
                self.collect_property(property);
            }
            Axiom::DatatypeDefinition(datatype, range) => {
                self.entities.insert(Entity::Datatype(datatype.clone()));
                self.collect_data_range(range);
            }
            Axiom::HasKey(class, properties) => {
                self.collect_class(class);
                for property in properties {
                    self.collect_property(property);
                }
            }
            Axiom::SameIndividual(individuals) | Axiom::DifferentIndividuals(individuals) => {
                for individual in individuals {
                    self.collect_individual(individual);
                }
            }
            Axiom::ClassAssertion(class, individual) => {
                self.collect_class(class);
                self.collect_individual(individual);
            }
            Axiom::ObjectPropertyAssertion(property, subject, object) |
            Axiom::NegativeObjectPropertyAssertion(property, subject, object) => {
                self.collect_property(property);
                self.collect_individual(subject);
                self.collect_individual(object);
            }
            Axiom::DataPropertyAssertion(property, subject, value) |
            Axiom::NegativeDataPropertyAssertion(property, subject, value) => {
                self.collect_property(property);
                self.collect_individual(subject);
                self.collect_literal(value);
            }
        }
    }

    fn collect_class(&mut self, expr: &ClassExpression) {
        match expr {
            ClassExpression::Named(iri) => {
                self.entities.insert(Entity::Class(iri.clone()));
            }
            ClassExpression::Thing | ClassExpression::Nothing => {}
            ClassExpression::IntersectionOf(expressions) | ClassExpression::UnionOf(expressions) => {
                for expr in expressions {
                    self.collect_class(expr);
                }
            }
            ClassExpression::ComplementOf(expr) => self.collect_class(expr),
            ClassExpression::OneOf(individuals) => {
                for individual in individuals {
                    self.collect_individual(individual);
                }
            }
            ClassExpression::SomeValuesFrom { property, class } |
            ClassExpression::AllValuesFrom { property, class } => {
                self.collect_property(property);
                self.collect_class(class);
            }
            ClassExpression::HasValue { property, individual } => {
                self.collect_property(property);
                self.collect_individual(individual);
            }
            ClassExpression::HasSelf(property) => self.collect_property(property),
            ClassExpression::MinCardinality { property, class, .. } |
            ClassExpression::MaxCardinality { property, class, .. } |
            ClassExpression::ExactCardinality { property, class, .. } => {
                self.collect_property(property);
                if let Some(class) = class {
                    self.collect_class(class);
                }
            }
            ClassExpression::DataSomeValuesFrom { property, range } |
            ClassExpression::DataAllValuesFrom { property, range } => {
                self.collect_property(property);
                self.collect_data_range(range);
            }
            ClassExpression::DataHasValue { property, value } => {
                self.collect_property(property);
                self.collect_literal(value);
            }
            ClassExpression::DataMinCardinality { property, range, .. } |
            ClassExpression::DataMaxCardinality { property, range, .. } |
            ClassExpression::DataExactCardinality { property, range, .. } => {
                self.collect_property(property);
                if let Some(range) = range {
                    self.collect_data_range(range);
                }
            }
        }
    }

    fn collect_property(&mut self, expr: &PropertyExpression) {
        self.entities.insert(expr.named());
    }

    fn collect_data_range(&mut self, range: &DataRange) {
        match range {
            DataRange::Datatype(iri) => {
                self.entities.insert(Entity::Datatype(iri.clone()));
            }
            DataRange::ComplementOf(range) => self.collect_data_range(range),
            DataRange::IntersectionOf(ranges) | DataRange::UnionOf(ranges) => {
                for range in ranges {
                    self.collect_data_range(range);
                }
            }
            DataRange::OneOf(literals) => {
                for literal in literals {
                    self.collect_literal(literal);
                }
            }
            DataRange::DatatypeRestriction { datatype, facets } => {
                self.entities.insert(Entity::Datatype(datatype.clone()));
                for facet in facets {
                    self.collect_literal(&facet.value);
                }
            }
        }
    }

    fn collect_individual(&mut self, individual: &Individual) {
        self.entities.insert(Entity::NamedIndividual(individual.0.clone()));
    }

    fn collect_literal(&mut self, literal: &Literal) {
        self.entities.insert(Entity::Datatype(literal.datatype.clone()));
    }
}

/// Finds the first ill-formed sub-expression of an axiom
#[derive(Default)]
struct ExpressionChecker {
    error: Option<String>,
}

impl ExpressionChecker {
    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(message);
        }
    }

    fn check_axiom(&mut self, axiom: &Axiom) {
        match axiom {
            Axiom::SubClassOf(sub, sup) => {
                self.check_class(sub);
                self.check_class(sup);
            }
            Axiom::EquivalentClasses(classes) |
            Axiom::DisjointClasses(classes) |
            Axiom::DisjointUnion(_, classes) => {
                for class in classes {
                    self.check_class(class);
                }
            }
            Axiom::ObjectPropertyDomain(_, class) |
            Axiom::ObjectPropertyRange(_, class) |
            Axiom::DataPropertyDomain(_, class) |
            Axiom::HasKey(class, _) |
            Axiom::ClassAssertion(class, _) => self.check_class(class),
            Axiom::DataPropertyRange(_, range) | Axiom::DatatypeDefinition(_, range) => {
                self.check_data_range(range)
            }
            _ => {}
        }
    }

    fn check_class(&mut self, expr: &ClassExpression) {
        match expr {
            ClassExpression::IntersectionOf(operands) | ClassExpression::UnionOf(operands) => {
                if operands.len() < 2 {
                    self.fail(format!("n-ary class expression with {} operands", operands.len()));
                }
                for operand in operands {
                    self.check_class(operand);
                }
            }
            ClassExpression::OneOf(individuals) if individuals.is_empty() => {
                self.fail("ObjectOneOf without individuals".to_string());
            }
            ClassExpression::ComplementOf(operand) => self.check_class(operand),
            ClassExpression::SomeValuesFrom { class, .. } |
            ClassExpression::AllValuesFrom { class, .. } => self.check_class(class),
            ClassExpression::MinCardinality { class: Some(class), .. } |
            ClassExpression::MaxCardinality { class: Some(class), .. } |
            ClassExpression::ExactCardinality { class: Some(class), .. } => self.check_class(class),
            ClassExpression::DataSomeValuesFrom { range, .. } |
            ClassExpression::DataAllValuesFrom { range, .. } => self.check_data_range(range),
            ClassExpression::DataMinCardinality { range: Some(range), .. } |
            ClassExpression::DataMaxCardinality { range: Some(range), .. } |
            ClassExpression::DataExactCardinality { range: Some(range), .. } => {
                self.check_data_range(range)
            }
            _ => {}
        }
    }

    fn check_data_range(&mut self, range: &DataRange) {
        match range {
            DataRange::IntersectionOf(operands) | DataRange::UnionOf(operands) => {
                if operands.len() < 2 {
                    self.fail(format!("n-ary data range with {} operands", operands.len()));
                }
                for operand in operands {
                    self.check_data_range(operand);
                }
            }
            DataRange::OneOf(literals) if literals.is_empty() => {
                self.fail("DataOneOf without literals".to_string());
            }
            DataRange::ComplementOf(operand) => self.check_data_range(operand),
            _ => {}
        }
    }
}

/// OWL DL Ontology
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwlDlOntology {
    /// Ontology IRI
    pub iri: Option<OwlIri>,

    /// All axioms in the ontology
    pub axioms: Vec<Axiom>,

    /// All entities mentioned by the axioms
    pub entities: BTreeSet<Entity>,
}

impl OwlDlOntology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iri(iri: OwlIri) -> Self {
        Self {
            iri: Some(iri),
            ..Self::default()
        }
    }

    pub fn add_axiom(&mut self, axiom: Axiom) {
        self.entities.extend(axiom.signature());
        self.axioms.push(axiom);
    }

    /// Add an axiom after checking it is well formed
    pub fn try_add_axiom(&mut self, axiom: Axiom) -> Result<(), OwlDlError> {
        axiom.validate()?;
        self.add_axiom(axiom);
        Ok(())
    }

    pub fn signature(&self) -> &BTreeSet<Entity> {
        &self.entities
    }

    /// Axioms other than declarations
    pub fn logical_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter().filter(|axiom| axiom.is_logical())
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }
}

impl FromIterator<Axiom> for OwlDlOntology {
    fn from_iter<I: IntoIterator<Item = Axiom>>(iter: I) -> Self {
        let mut ontology = OwlDlOntology::new();
        for axiom in iter {
            ontology.add_axiom(axiom);
        }
        ontology
    }
}
