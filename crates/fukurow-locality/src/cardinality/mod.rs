//! 基数境界評価器
//!
//! Four evaluators bound the size of an expression's extension, or of its
//! complement's extension, from above or below, in every model where the
//! entities outside the signature are replaced by ⊤ or ⊥. They share the
//! structural recursion in [`CardinalityEvaluator`] and differ only in the
//! per-shape rules.

mod lower;
mod upper;

pub use lower::{LowerBoundComplement, LowerBoundDirect};
pub use upper::{UpperBoundComplement, UpperBoundDirect};

use crate::bound::{LowerBound, UpperBound};
use crate::equivalence::EquivalenceEvaluator;
use crate::signature::Signature;
use fukurow_dl::{vocabulary, ClassExpression, DataRange, EntityKind, OwlIri, PropertyExpression};
use std::collections::HashSet;
use std::hash::Hash;

/// Filler of a restriction, or an operand of a boolean connective
#[derive(Debug, Clone, Copy)]
pub enum Filler<'e> {
    Class(&'e ClassExpression),
    Data(&'e DataRange),
    /// Implicit filler of an unqualified object restriction
    Thing,
    /// Implicit filler of an unqualified data restriction
    Literal,
}

impl<'e> Filler<'e> {
    pub fn class(class: Option<&'e ClassExpression>) -> Self {
        class.map_or(Filler::Thing, Filler::Class)
    }

    pub fn data(range: Option<&'e DataRange>) -> Self {
        range.map_or(Filler::Literal, Filler::Data)
    }
}

fn distinct<T: Eq + Hash>(items: &[T]) -> u32 {
    let count = items.iter().collect::<HashSet<_>>().len();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Structural recursion shared by the bound evaluators
pub trait CardinalityEvaluator {
    type Bound: Copy;

    fn signature(&self) -> &Signature;

    /// owl:Thing and the top properties
    fn top_value(&self) -> Self::Bound;

    /// owl:Nothing and the bottom properties
    fn bottom_value(&self) -> Self::Bound;

    /// Any other named class or property
    fn named_value(&self, kind: EntityKind, iri: &OwlIri) -> Self::Bound;

    fn complement_value(&self, operand: Filler<'_>) -> Self::Bound;

    fn and_value<'e, I>(&self, operands: I) -> Self::Bound
    where
        I: Iterator<Item = Filler<'e>>;

    fn or_value<'e, I>(&self, operands: I) -> Self::Bound
    where
        I: Iterator<Item = Filler<'e>>;

    /// Enumeration with `distinct` different members
    fn one_of_value(&self, distinct: u32) -> Self::Bound;

    /// ∃R.Self, ∃R.{i} and ∃U.{v}
    fn has_value(&self, property: &PropertyExpression) -> Self::Bound;

    fn datatype_value(&self, top_datatype: bool) -> Self::Bound;

    fn datatype_restriction_value(&self) -> Self::Bound;

    /// ∀R.C
    fn forall_value(&self, property: &PropertyExpression, filler: Filler<'_>) -> Self::Bound;

    /// ≥ m R.C
    fn min_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> Self::Bound;

    /// ≤ m R.C
    fn max_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> Self::Bound;

    /// = m R.C
    fn exact_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> Self::Bound;

    /// Composition P1 ∘ ... ∘ Pn
    fn chain_value(&self, chain: &[PropertyExpression]) -> Self::Bound;

    fn entity_value(&self, kind: EntityKind, iri: &OwlIri) -> Self::Bound {
        if vocabulary::is_top_entity(kind, iri) {
            self.top_value()
        } else if vocabulary::is_bottom_entity(kind, iri) {
            self.bottom_value()
        } else {
            self.named_value(kind, iri)
        }
    }

    fn evaluate(&self, filler: Filler<'_>) -> Self::Bound {
        match filler {
            Filler::Class(class) => self.evaluate_class(class),
            Filler::Data(range) => self.evaluate_data_range(range),
            Filler::Thing => self.top_value(),
            Filler::Literal => self.datatype_value(true),
        }
    }

    fn evaluate_class(&self, expr: &ClassExpression) -> Self::Bound {
        match expr {
            ClassExpression::Named(iri) => self.entity_value(EntityKind::Class, iri),
            ClassExpression::Thing => self.top_value(),
            ClassExpression::Nothing => self.bottom_value(),
            ClassExpression::ComplementOf(operand) => self.complement_value(Filler::Class(&**operand)),
            ClassExpression::IntersectionOf(operands) => self.and_value(operands.iter().map(Filler::Class)),
            ClassExpression::UnionOf(operands) => self.or_value(operands.iter().map(Filler::Class)),
            ClassExpression::OneOf(individuals) => self.one_of_value(distinct(individuals)),
            ClassExpression::SomeValuesFrom { property, class } => {
                self.min_value(1, property, Filler::Class(&**class))
            }
            ClassExpression::AllValuesFrom { property, class } => {
                self.forall_value(property, Filler::Class(&**class))
            }
            ClassExpression::HasValue { property, .. } |
            ClassExpression::HasSelf(property) |
            ClassExpression::DataHasValue { property, .. } => self.has_value(property),
            ClassExpression::MinCardinality { cardinality, property, class } => {
                self.min_value(*cardinality, property, Filler::class(class.as_deref()))
            }
            ClassExpression::MaxCardinality { cardinality, property, class } => {
                self.max_value(*cardinality, property, Filler::class(class.as_deref()))
            }
            ClassExpression::ExactCardinality { cardinality, property, class } => {
                self.exact_value(*cardinality, property, Filler::class(class.as_deref()))
            }
            ClassExpression::DataSomeValuesFrom { property, range } => {
                self.min_value(1, property, Filler::Data(range))
            }
            ClassExpression::DataAllValuesFrom { property, range } => {
                self.forall_value(property, Filler::Data(range))
            }
            ClassExpression::DataMinCardinality { cardinality, property, range } => {
                self.min_value(*cardinality, property, Filler::data(range.as_ref()))
            }
            ClassExpression::DataMaxCardinality { cardinality, property, range } => {
                self.max_value(*cardinality, property, Filler::data(range.as_ref()))
            }
            ClassExpression::DataExactCardinality { cardinality, property, range } => {
                self.exact_value(*cardinality, property, Filler::data(range.as_ref()))
            }
        }
    }

    fn evaluate_data_range(&self, range: &DataRange) -> Self::Bound {
        match range {
            DataRange::Datatype(iri) => self.datatype_value(iri.as_str() == vocabulary::RDFS_LITERAL),
            DataRange::ComplementOf(operand) => self.complement_value(Filler::Data(&**operand)),
            DataRange::IntersectionOf(operands) => self.and_value(operands.iter().map(Filler::Data)),
            DataRange::UnionOf(operands) => self.or_value(operands.iter().map(Filler::Data)),
            DataRange::OneOf(literals) => self.one_of_value(distinct(literals)),
            DataRange::DatatypeRestriction { .. } => self.datatype_restriction_value(),
        }
    }

    /// Inverses have the same cardinality behaviour as the property itself
    fn evaluate_property(&self, property: &PropertyExpression) -> Self::Bound {
        match property {
            PropertyExpression::ObjectProperty(iri) => self.entity_value(EntityKind::ObjectProperty, iri),
            PropertyExpression::DataProperty(iri) => self.entity_value(EntityKind::DataProperty, iri),
            PropertyExpression::InverseOf(inner) => self.evaluate_property(inner),
        }
    }

    fn upper_bound_direct(&self, filler: Filler<'_>) -> UpperBound {
        UpperBoundDirect::new(self.signature()).evaluate(filler)
    }

    fn upper_bound_complement(&self, filler: Filler<'_>) -> UpperBound {
        UpperBoundComplement::new(self.signature()).evaluate(filler)
    }

    fn lower_bound_direct(&self, filler: Filler<'_>) -> LowerBound {
        LowerBoundDirect::new(self.signature()).evaluate(filler)
    }

    fn lower_bound_complement(&self, filler: Filler<'_>) -> LowerBound {
        LowerBoundComplement::new(self.signature()).evaluate(filler)
    }

    fn is_top_equivalent(&self, property: &PropertyExpression) -> bool {
        EquivalenceEvaluator::new(self.signature()).is_top_equivalent_property(property)
    }

    fn is_bot_equivalent(&self, property: &PropertyExpression) -> bool {
        EquivalenceEvaluator::new(self.signature()).is_bot_equivalent_property(property)
    }
}
