//! 上界評価器
//!
//! `UpperBoundDirect` returns the minimal n with `E ∈ C^{<= n}`,
//! `UpperBoundComplement` the minimal n with `¬E ∈ C^{<= n}`.

use super::{CardinalityEvaluator, Filler};
use crate::bound::UpperBound;
use crate::signature::Signature;
use fukurow_dl::{EntityKind, OwlIri, PropertyExpression};

/// Upper bound on the extension of an expression
#[derive(Debug, Clone, Copy)]
pub struct UpperBoundDirect<'a> {
    signature: &'a Signature,
}

impl<'a> UpperBoundDirect<'a> {
    pub fn new(signature: &'a Signature) -> Self {
        Self { signature }
    }
}

impl CardinalityEvaluator for UpperBoundDirect<'_> {
    type Bound = UpperBound;

    fn signature(&self) -> &Signature {
        self.signature
    }

    fn top_value(&self) -> UpperBound {
        UpperBound::NONE
    }

    fn bottom_value(&self) -> UpperBound {
        UpperBound::ANY
    }

    fn named_value(&self, kind: EntityKind, iri: &OwlIri) -> UpperBound {
        UpperBound::lift(self.signature.is_bottom_local(kind, iri))
    }

    fn complement_value(&self, operand: Filler<'_>) -> UpperBound {
        self.upper_bound_complement(operand)
    }

    /// |C1 ⊓ ... ⊓ Cn| <= min |Ci|
    fn and_value<'e, I>(&self, operands: I) -> UpperBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        operands.fold(UpperBound::NONE, |min, operand| min.min(self.evaluate(operand)))
    }

    /// |C1 ⊔ ... ⊔ Cn| <= Σ |Ci|
    fn or_value<'e, I>(&self, operands: I) -> UpperBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        let mut sum = UpperBound::ANY;
        for operand in operands {
            sum = sum.sum(self.evaluate(operand));
            if !sum.is_bounded() {
                return UpperBound::NONE;
            }
        }
        sum
    }

    fn one_of_value(&self, distinct: u32) -> UpperBound {
        UpperBound::AtMost(distinct)
    }

    fn has_value(&self, _property: &PropertyExpression) -> UpperBound {
        UpperBound::NONE
    }

    fn datatype_value(&self, _top_datatype: bool) -> UpperBound {
        UpperBound::NONE
    }

    fn datatype_restriction_value(&self) -> UpperBound {
        UpperBound::NONE
    }

    /// ∀R.C is empty if R = ⊤ and ¬C is non-empty
    fn forall_value(&self, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        UpperBound::lift(
            self.is_top_equivalent(property) && self.lower_bound_complement(filler).is_at_least(1),
        )
    }

    /// ≥ m R.C is empty if m > 0 and (R = ⊥ or C ∈ C^{< m})
    fn min_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        if m == 0 {
            return UpperBound::NONE;
        }
        UpperBound::lift(
            self.is_bot_equivalent(property) || self.upper_bound_direct(filler).is_less_than(m),
        )
    }

    /// ≤ m R.C is empty if R = ⊤ and C ∈ C^{> m}
    fn max_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        UpperBound::lift(
            self.is_top_equivalent(property)
                && self.lower_bound_direct(filler).is_at_least(m.saturating_add(1)),
        )
    }

    /// = m R.C is empty if either half is
    fn exact_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        self.min_value(m, property, filler)
            .min(self.max_value(m, property, filler))
    }

    /// The composition is empty as soon as one link is
    fn chain_value(&self, chain: &[PropertyExpression]) -> UpperBound {
        UpperBound::lift(chain.iter().any(|property| self.is_bot_equivalent(property)))
    }
}

/// Upper bound on the extension of an expression's complement
#[derive(Debug, Clone, Copy)]
pub struct UpperBoundComplement<'a> {
    signature: &'a Signature,
}

impl<'a> UpperBoundComplement<'a> {
    pub fn new(signature: &'a Signature) -> Self {
        Self { signature }
    }
}

impl CardinalityEvaluator for UpperBoundComplement<'_> {
    type Bound = UpperBound;

    fn signature(&self) -> &Signature {
        self.signature
    }

    fn top_value(&self) -> UpperBound {
        UpperBound::ANY
    }

    fn bottom_value(&self) -> UpperBound {
        UpperBound::NONE
    }

    fn named_value(&self, kind: EntityKind, iri: &OwlIri) -> UpperBound {
        UpperBound::lift(self.signature.is_top_local(kind, iri))
    }

    fn complement_value(&self, operand: Filler<'_>) -> UpperBound {
        self.upper_bound_direct(operand)
    }

    /// |¬(C1 ⊓ ... ⊓ Cn)| <= Σ |¬Ci|
    fn and_value<'e, I>(&self, operands: I) -> UpperBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        let mut sum = UpperBound::ANY;
        for operand in operands {
            sum = sum.sum(self.evaluate(operand));
            if !sum.is_bounded() {
                return UpperBound::NONE;
            }
        }
        sum
    }

    /// |¬(C1 ⊔ ... ⊔ Cn)| <= min |¬Ci|
    fn or_value<'e, I>(&self, operands: I) -> UpperBound
    where
        I: Iterator<Item = Filler<'e>>,
    {
        operands.fold(UpperBound::NONE, |min, operand| min.min(self.evaluate(operand)))
    }

    fn one_of_value(&self, _distinct: u32) -> UpperBound {
        UpperBound::NONE
    }

    fn has_value(&self, property: &PropertyExpression) -> UpperBound {
        UpperBound::lift(self.is_top_equivalent(property))
    }

    // negated datatype is a union of all other datatypes, which are infinite
    fn datatype_value(&self, _top_datatype: bool) -> UpperBound {
        UpperBound::NONE
    }

    fn datatype_restriction_value(&self) -> UpperBound {
        UpperBound::NONE
    }

    fn forall_value(&self, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        UpperBound::lift(
            self.is_bot_equivalent(property) || self.upper_bound_complement(filler).is_at_most(0),
        )
    }

    fn min_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        if m == 0 {
            return UpperBound::ANY;
        }
        if !self.is_top_equivalent(property) {
            return UpperBound::NONE;
        }
        UpperBound::lift(self.lower_bound_direct(filler).is_at_least(m))
    }

    fn max_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        if self.is_bot_equivalent(property) {
            return UpperBound::ANY;
        }
        UpperBound::lift(self.upper_bound_direct(filler).is_at_most(m))
    }

    /// both halves have to be universal
    fn exact_value(&self, m: u32, property: &PropertyExpression, filler: Filler<'_>) -> UpperBound {
        self.min_value(m, property, filler)
            .max(self.max_value(m, property, filler))
    }

    fn chain_value(&self, chain: &[PropertyExpression]) -> UpperBound {
        UpperBound::lift(chain.iter().all(|property| self.is_top_equivalent(property)))
    }
}
