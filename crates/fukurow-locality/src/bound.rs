//! 基数境界の値ドメイン
//!
//! Upper bounds answer "the queried set has at most n elements in every
//! local model"; lower bounds answer "the queried set has at least n
//! elements in every local model". Both saturate instead of overflowing.

use std::fmt;

/// Upper bound on the size of an extension.
///
/// Ordered by strength: `AtMost(0) < AtMost(1) < ... < Unbounded`, so the
/// minimum of two bounds is always the tighter one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpperBound {
    AtMost(u32),
    /// No upper bound could be proven
    Unbounded,
}

impl UpperBound {
    /// The queried set is provably empty
    pub const ANY: UpperBound = UpperBound::AtMost(0);
    /// Nothing is known about the queried set
    pub const NONE: UpperBound = UpperBound::Unbounded;

    /// `ANY` if the condition holds, `NONE` otherwise
    pub fn lift(condition: bool) -> Self {
        if condition {
            Self::ANY
        } else {
            Self::NONE
        }
    }

    pub fn is_bounded(self) -> bool {
        matches!(self, UpperBound::AtMost(_))
    }

    pub fn is_at_most(self, m: u32) -> bool {
        match self {
            UpperBound::AtMost(n) => n <= m,
            UpperBound::Unbounded => false,
        }
    }

    pub fn is_less_than(self, m: u32) -> bool {
        match self {
            UpperBound::AtMost(n) => n < m,
            UpperBound::Unbounded => false,
        }
    }

    /// Bound on the size of a union of sets bounded by `self` and `other`
    pub fn sum(self, other: UpperBound) -> UpperBound {
        match (self, other) {
            (UpperBound::AtMost(a), UpperBound::AtMost(b)) => UpperBound::AtMost(a.saturating_add(b)),
            _ => UpperBound::Unbounded,
        }
    }
}

impl Default for UpperBound {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::AtMost(n) => write!(f, "<= {}", n),
            UpperBound::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Lower bound on the size of an extension; `0` carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LowerBound(pub u32);

impl LowerBound {
    /// Nothing is known about the queried set
    pub const NONE: LowerBound = LowerBound(0);
    /// The queried set is non-empty in every local model
    pub const ANY: LowerBound = LowerBound(1);

    /// `ANY` if the condition holds, `NONE` otherwise
    pub fn lift(condition: bool) -> Self {
        if condition {
            Self::ANY
        } else {
            Self::NONE
        }
    }

    pub fn is_at_least(self, m: u32) -> bool {
        self.0 >= m
    }

    /// `self - k`, clamped at zero
    pub fn minus(self, k: u32) -> LowerBound {
        LowerBound(self.0.saturating_sub(k))
    }
}

impl fmt::Display for LowerBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">= {}", self.0)
    }
}

/// Lower bound of an intersection.
///
/// Each operand contributes `(m, k)`: the operand has at least `m` elements
/// and its complement at most `k`. Since `⋂Cj = Ci \ ⋃_{j≠i} ¬Cj`, the
/// intersection has at least `m_i - Σ_{j≠i} k_j` elements whenever every
/// other complement is bounded.
pub fn intersection_lower_bound<I>(operands: I) -> LowerBound
where
    I: IntoIterator<Item = (LowerBound, UpperBound)>,
{
    let mut unbounded: Option<LowerBound> = None;
    let mut sum_k: u32 = 0;
    let mut best: Option<(LowerBound, u32)> = None;

    for (m, k) in operands {
        match k {
            UpperBound::Unbounded => {
                if unbounded.is_some() {
                    // two complements without a bound: nothing survives subtraction
                    return LowerBound::NONE;
                }
                unbounded = Some(m);
            }
            UpperBound::AtMost(k) => {
                sum_k = sum_k.saturating_add(k);
                let score = m.0.saturating_add(k);
                if best.map_or(true, |(bm, bk)| score > bm.0.saturating_add(bk)) {
                    best = Some((m, k));
                }
            }
        }
    }

    match (unbounded, best) {
        (Some(m), _) => m.minus(sum_k),
        (None, Some((m, k))) => m.minus(sum_k - k),
        (None, None) => LowerBound::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_bound_order() {
        assert!(UpperBound::AtMost(0) < UpperBound::AtMost(3));
        assert!(UpperBound::AtMost(u32::MAX) < UpperBound::Unbounded);
        assert_eq!(UpperBound::ANY.min(UpperBound::NONE), UpperBound::ANY);
        assert_eq!(UpperBound::NONE.min(UpperBound::AtMost(2)), UpperBound::AtMost(2));
    }

    #[test]
    fn test_upper_bound_sum_saturates() {
        assert_eq!(UpperBound::AtMost(2).sum(UpperBound::AtMost(3)), UpperBound::AtMost(5));
        assert_eq!(UpperBound::AtMost(u32::MAX).sum(UpperBound::AtMost(1)), UpperBound::AtMost(u32::MAX));
        assert_eq!(UpperBound::AtMost(1).sum(UpperBound::NONE), UpperBound::NONE);
    }

    #[test]
    fn test_upper_bound_comparisons() {
        assert!(UpperBound::ANY.is_at_most(0));
        assert!(UpperBound::AtMost(2).is_at_most(2));
        assert!(!UpperBound::AtMost(2).is_less_than(2));
        assert!(!UpperBound::NONE.is_at_most(u32::MAX));
        assert!(!UpperBound::NONE.is_less_than(u32::MAX));
    }

    #[test]
    fn test_lift() {
        assert_eq!(UpperBound::lift(true), UpperBound::ANY);
        assert_eq!(UpperBound::lift(false), UpperBound::NONE);
        assert_eq!(LowerBound::lift(true), LowerBound::ANY);
        assert_eq!(LowerBound::lift(false), LowerBound::NONE);
    }

    #[test]
    fn test_lower_bound_minus_clamps() {
        assert_eq!(LowerBound(3).minus(1), LowerBound(2));
        assert_eq!(LowerBound(1).minus(5), LowerBound::NONE);
    }

    #[test]
    fn test_intersection_with_one_unbounded_complement() {
        // |C1| >= 5, |¬C2| <= 2  =>  |C1 ⊓ C2| >= 3
        let bound = intersection_lower_bound(vec![
            (LowerBound(5), UpperBound::NONE),
            (LowerBound::NONE, UpperBound::AtMost(2)),
        ]);
        assert_eq!(bound, LowerBound(3));
    }

    #[test]
    fn test_intersection_with_two_unbounded_complements() {
        let bound = intersection_lower_bound(vec![
            (LowerBound(5), UpperBound::NONE),
            (LowerBound(5), UpperBound::NONE),
        ]);
        assert_eq!(bound, LowerBound::NONE);
    }

    #[test]
    fn test_intersection_of_universal_operands() {
        // both operands are ⊤: non-empty, complements empty
        let bound = intersection_lower_bound(vec![
            (LowerBound::ANY, UpperBound::ANY),
            (LowerBound::ANY, UpperBound::ANY),
        ]);
        assert_eq!(bound, LowerBound::ANY);
    }

    #[test]
    fn test_empty_intersection_has_no_lower_bound() {
        assert_eq!(intersection_lower_bound(Vec::new()), LowerBound::NONE);
    }
}
