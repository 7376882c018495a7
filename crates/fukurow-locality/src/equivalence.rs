//! ⊤/⊥ 同値性評価
//!
//! Syntactic approximation of "equivalent to the universal set" and
//! "equivalent to the empty set" for expressions relative to a signature.
//! Both questions live in one evaluator so that complements can swap
//! between them without the two halves owning each other.

use crate::bound::UpperBound;
use crate::cardinality::{CardinalityEvaluator, UpperBoundComplement, UpperBoundDirect};
use crate::signature::Signature;
use fukurow_dl::{vocabulary, ClassExpression, DataRange, EntityKind, OwlIri, PropertyExpression};

/// Any expression whose top/bottom equivalence can be queried
#[derive(Debug, Clone, Copy)]
pub enum Expression<'e> {
    Class(&'e ClassExpression),
    Property(&'e PropertyExpression),
    DataRange(&'e DataRange),
    /// Composition of the properties, as used by property chain axioms
    Chain(&'e [PropertyExpression]),
}

impl<'e> From<&'e ClassExpression> for Expression<'e> {
    fn from(expr: &'e ClassExpression) -> Self {
        Expression::Class(expr)
    }
}

impl<'e> From<&'e PropertyExpression> for Expression<'e> {
    fn from(expr: &'e PropertyExpression) -> Self {
        Expression::Property(expr)
    }
}

impl<'e> From<&'e DataRange> for Expression<'e> {
    fn from(range: &'e DataRange) -> Self {
        Expression::DataRange(range)
    }
}

impl<'e> From<&'e [PropertyExpression]> for Expression<'e> {
    fn from(chain: &'e [PropertyExpression]) -> Self {
        Expression::Chain(chain)
    }
}

/// Top/bottom equivalence relative to a signature
#[derive(Debug, Clone, Copy)]
pub struct EquivalenceEvaluator<'a> {
    signature: &'a Signature,
}

impl<'a> EquivalenceEvaluator<'a> {
    pub fn new(signature: &'a Signature) -> Self {
        Self { signature }
    }

    pub fn signature(&self) -> &'a Signature {
        self.signature
    }

    pub fn is_top_equivalent<'e>(&self, expr: impl Into<Expression<'e>>) -> bool {
        match expr.into() {
            Expression::Class(class) => self.is_top_equivalent_class(class),
            Expression::Property(property) => self.is_top_equivalent_property(property),
            Expression::DataRange(range) => self.is_top_equivalent_data_range(range),
            Expression::Chain(chain) => chain.iter().all(|p| self.is_top_equivalent_property(p)),
        }
    }

    pub fn is_bot_equivalent<'e>(&self, expr: impl Into<Expression<'e>>) -> bool {
        match expr.into() {
            Expression::Class(class) => self.is_bot_equivalent_class(class),
            Expression::Property(property) => self.is_bot_equivalent_property(property),
            Expression::DataRange(range) => self.is_bot_equivalent_data_range(range),
            Expression::Chain(chain) => chain.iter().any(|p| self.is_bot_equivalent_property(p)),
        }
    }

    fn is_top_named(&self, kind: EntityKind, iri: &OwlIri) -> bool {
        vocabulary::is_top_entity(kind, iri)
            || (!vocabulary::is_bottom_entity(kind, iri) && self.signature.is_top_local(kind, iri))
    }

    fn is_bot_named(&self, kind: EntityKind, iri: &OwlIri) -> bool {
        vocabulary::is_bottom_entity(kind, iri)
            || (!vocabulary::is_top_entity(kind, iri) && self.signature.is_bottom_local(kind, iri))
    }

    pub fn is_top_equivalent_property(&self, property: &PropertyExpression) -> bool {
        match property {
            PropertyExpression::ObjectProperty(iri) => self.is_top_named(EntityKind::ObjectProperty, iri),
            PropertyExpression::DataProperty(iri) => self.is_top_named(EntityKind::DataProperty, iri),
            PropertyExpression::InverseOf(inner) => self.is_top_equivalent_property(inner),
        }
    }

    pub fn is_bot_equivalent_property(&self, property: &PropertyExpression) -> bool {
        match property {
            PropertyExpression::ObjectProperty(iri) => self.is_bot_named(EntityKind::ObjectProperty, iri),
            PropertyExpression::DataProperty(iri) => self.is_bot_named(EntityKind::DataProperty, iri),
            PropertyExpression::InverseOf(inner) => self.is_bot_equivalent_property(inner),
        }
    }

    /// Restrictions are universal when their complement is provably empty
    fn is_universal_restriction(&self, expr: &ClassExpression) -> bool {
        UpperBoundComplement::new(self.signature).evaluate_class(expr) == UpperBound::ANY
    }

    /// Restrictions are empty when their extension is provably empty
    fn is_empty_restriction(&self, expr: &ClassExpression) -> bool {
        UpperBoundDirect::new(self.signature).evaluate_class(expr) == UpperBound::ANY
    }

    pub fn is_top_equivalent_class(&self, expr: &ClassExpression) -> bool {
        match expr {
            ClassExpression::Named(iri) => self.is_top_named(EntityKind::Class, iri),
            ClassExpression::Thing => true,
            ClassExpression::Nothing => false,
            ClassExpression::ComplementOf(operand) => self.is_bot_equivalent_class(operand),
            ClassExpression::IntersectionOf(operands) => {
                operands.iter().all(|c| self.is_top_equivalent_class(c))
            }
            ClassExpression::UnionOf(operands) => {
                operands.iter().any(|c| self.is_top_equivalent_class(c))
            }
            ClassExpression::OneOf(_) => false,
            ClassExpression::HasValue { property, .. }
            | ClassExpression::HasSelf(property)
            | ClassExpression::DataHasValue { property, .. } => {
                self.is_top_equivalent_property(property)
            }
            ClassExpression::SomeValuesFrom { .. }
            | ClassExpression::AllValuesFrom { .. }
            | ClassExpression::MinCardinality { .. }
            | ClassExpression::MaxCardinality { .. }
            | ClassExpression::ExactCardinality { .. }
            | ClassExpression::DataSomeValuesFrom { .. }
            | ClassExpression::DataAllValuesFrom { .. }
            | ClassExpression::DataMinCardinality { .. }
            | ClassExpression::DataMaxCardinality { .. }
            | ClassExpression::DataExactCardinality { .. } => self.is_universal_restriction(expr),
        }
    }

    pub fn is_bot_equivalent_class(&self, expr: &ClassExpression) -> bool {
        match expr {
            ClassExpression::Named(iri) => self.is_bot_named(EntityKind::Class, iri),
            ClassExpression::Thing => false,
            ClassExpression::Nothing => true,
            ClassExpression::ComplementOf(operand) => self.is_top_equivalent_class(operand),
            ClassExpression::IntersectionOf(operands) => {
                operands.iter().any(|c| self.is_bot_equivalent_class(c))
            }
            ClassExpression::UnionOf(operands) => {
                operands.iter().all(|c| self.is_bot_equivalent_class(c))
            }
            ClassExpression::OneOf(individuals) => individuals.is_empty(),
            // the property may be empty, but the filler individual or self loop never is
            ClassExpression::HasValue { .. }
            | ClassExpression::HasSelf(_)
            | ClassExpression::DataHasValue { .. } => false,
            ClassExpression::SomeValuesFrom { .. }
            | ClassExpression::AllValuesFrom { .. }
            | ClassExpression::MinCardinality { .. }
            | ClassExpression::MaxCardinality { .. }
            | ClassExpression::ExactCardinality { .. }
            | ClassExpression::DataSomeValuesFrom { .. }
            | ClassExpression::DataAllValuesFrom { .. }
            | ClassExpression::DataMinCardinality { .. }
            | ClassExpression::DataMaxCardinality { .. }
            | ClassExpression::DataExactCardinality { .. } => self.is_empty_restriction(expr),
        }
    }

    pub fn is_top_equivalent_data_range(&self, range: &DataRange) -> bool {
        match range {
            DataRange::Datatype(iri) => iri.as_str() == vocabulary::RDFS_LITERAL,
            DataRange::ComplementOf(operand) => self.is_bot_equivalent_data_range(operand),
            DataRange::IntersectionOf(operands) => {
                operands.iter().all(|r| self.is_top_equivalent_data_range(r))
            }
            DataRange::UnionOf(operands) => {
                operands.iter().any(|r| self.is_top_equivalent_data_range(r))
            }
            DataRange::OneOf(_) | DataRange::DatatypeRestriction { .. } => false,
        }
    }

    pub fn is_bot_equivalent_data_range(&self, range: &DataRange) -> bool {
        match range {
            DataRange::Datatype(_) => false,
            DataRange::ComplementOf(operand) => self.is_top_equivalent_data_range(operand),
            DataRange::IntersectionOf(operands) => {
                operands.iter().any(|r| self.is_bot_equivalent_data_range(r))
            }
            DataRange::UnionOf(operands) => {
                operands.iter().all(|r| self.is_bot_equivalent_data_range(r))
            }
            DataRange::OneOf(literals) => literals.is_empty(),
            DataRange::DatatypeRestriction { .. } => false,
        }
    }
}
