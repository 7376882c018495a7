//! 下界評価器
//!
//! `LowerBoundDirect` returns the maximal n with `E ∈ C^{>= n}`,
//! `LowerBoundComplement` the maximal n with `¬E ∈ C^{>= n}`.
//! Restrictions only ever get the trivial bounds 0 and 1: a restriction
//! is non-empty exactly when its complement is provably empty.

use super::{CardinalityEvaluator, Filler, UpperBoundComplement, UpperBoundDirect};
use crate::bound::{intersection_lower_bound, LowerBound, UpperBound};
use crate::signature::Signature;
use fukurow_dl::{EntityKind, OwlIri, PropertyExpression};

fn non_empty_if_empty_complement(complement: UpperBound) -> LowerBound {
    LowerBound::lift(complement == UpperBound::ANY)
}

/// Lower bound on the extension of an expression
#[derive(Debug, Clone, Copy)]
pub struct LowerBoundDirect<'a> {
    signature: &'a Signature,
}

impl<'a> LowerBoundDirect<'a> {
    pub fn new(signature: &'a Signature) -> Self {
        Self { signature }
    }

    fn complement(&self) -> UpperBoundComplement<'a> {
        UpperBoundComplement::new(self.signature)
    }
}

impl CardinalityEvaluator for LowerBoundDirect<'_> {
    type Bound = LowerBound;

    fn signature(&self) -> &Signature {
        self.signature
    }

    fn top_value(&self) -> LowerBound {
        LowerBound::ANY
    }

    fn bottom_value(&self) -> LowerBound {
        LowerBound::NONE
    }

    fn named_value(&self, kind: EntityKind, iri: &OwlIri) -> LowerBound {
        LowerBound::lift(self.signature.is_top_local(kind, iri))
    }

    fn complement_value(&self, operand: Filler<'_>) -> LowerBound {
        self.lower_bound_complement(operand)
    }

    fn and_value<'e, I>(&self, operands: I) -> LowerBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        intersection_lower_bound(operands.map(|operand| {
            (self.evaluate(operand), self.upper_bound_complement(operand))
        }))
    }

    /// |C1 ⊔ ... ⊔ Cn| >= max |Ci|
    fn or_value<'e, I>(&self, operands: I) -> LowerBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        operands
            .map(|operand| self.evaluate(operand))
            .max()
            .unwrap_or(LowerBound::NONE)
    }

    // members may denote the same element
    fn one_of_value(&self, distinct: u32) -> LowerBound {
        LowerBound::lift(distinct > 0)
    }

    fn has_value(&self, property: &PropertyExpression) -> LowerBound {
        LowerBound::lift(self.is_top_equivalent(property))
    }

    fn datatype_value(&self, top_datatype: bool) -> LowerBound {
        LowerBound::lift(top_datatype)
    }

    fn datatype_restriction_value(&self) -> LowerBound {
        LowerBound::NONE
    }

    fn forall_value(&self, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.complement().forall_value(property, filler))
    }

    fn min_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.complement().min_value(m, property, filler))
    }

    fn max_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.complement().max_value(m, property, filler))
    }

    fn exact_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.complement().exact_value(m, property, filler))
    }

    fn chain_value(&self, chain: &[PropertyExpression]) -> LowerBound {
        LowerBound::lift(chain.iter().all(|property| self.is_top_equivalent(property)))
    }
}

/// Lower bound on the extension of an expression's complement
#[derive(Debug, Clone, Copy)]
pub struct LowerBoundComplement<'a> {
    signature: &'a Signature,
}

impl<'a> LowerBoundComplement<'a> {
    pub fn new(signature: &'a Signature) -> Self {
        Self { signature }
    }

    fn direct(&self) -> UpperBoundDirect<'a> {
        UpperBoundDirect::new(self.signature)
    }
}

impl CardinalityEvaluator for LowerBoundComplement<'_> {
    type Bound = LowerBound;

    fn signature(&self) -> &Signature {
        self.signature
    }

    fn top_value(&self) -> LowerBound {
        LowerBound::NONE
    }

    fn bottom_value(&self) -> LowerBound {
        LowerBound::ANY
    }

    fn named_value(&self, kind: EntityKind, iri: &OwlIri) -> LowerBound {
        LowerBound::lift(self.signature.is_bottom_local(kind, iri))
    }

    fn complement_value(&self, operand: Filler<'_>) -> LowerBound {
        self.lower_bound_direct(operand)
    }

    /// |¬(C1 ⊓ ... ⊓ Cn)| >= max |¬Ci|
    fn and_value<'e, I>(&self, operands: I) -> LowerBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        operands
            .map(|operand| self.evaluate(operand))
            .max()
            .unwrap_or(LowerBound::NONE)
    }

    /// ¬(C1 ⊔ ... ⊔ Cn) = ¬C1 ⊓ ... ⊓ ¬Cn
    fn or_value<'e, I>(&self, operands: I) -> LowerBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        intersection_lower_bound(operands.map(|operand| {
            (self.evaluate(operand), self.upper_bound_direct(operand))
        }))
    }

    fn one_of_value(&self, _distinct: u32) -> LowerBound {
        LowerBound::NONE
    }

    fn has_value(&self, _property: &PropertyExpression) -> LowerBound {
        LowerBound::NONE
    }

    fn datatype_value(&self, _top_datatype: bool) -> LowerBound {
        LowerBound::NONE
    }

    fn datatype_restriction_value(&self) -> LowerBound {
        LowerBound::NONE
    }

    fn forall_value(&self, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.direct().forall_value(property, filler))
    }

    fn min_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.direct().min_value(m, property, filler))
    }

    fn max_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.direct().max_value(m, property, filler))
    }

    fn exact_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> LowerBound {
        non_empty_if_empty_complement(self.direct().exact_value(m, property, filler))
    }

    fn chain_value(&self, chain: &[PropertyExpression]) -> LowerBound {
        LowerBound::lift(chain.iter().any(|property| self.is_bot_equivalent(property)))
    }
}
