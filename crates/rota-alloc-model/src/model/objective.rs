// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::model::var::VariableId;
use crate::solution::valuation::Valuation;
use rota_alloc_core::prelude::Cost;

/// One weighted variable of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveTerm {
    var: VariableId,
    weight: Cost,
}

impl ObjectiveTerm {
    #[inline]
    pub const fn new(var: VariableId, weight: Cost) -> Self {
        Self { var, weight }
    }

    #[inline]
    pub const fn var(&self) -> VariableId {
        self.var
    }

    #[inline]
    pub const fn weight(&self) -> Cost {
        self.weight
    }
}

/// A linear maximize objective: the weighted sum of the listed variables.
/// Repetition penalties enter with negative weights, so "as little
/// near-term repetition as possible" is "as large an objective as
/// possible".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Objective {
    terms: Vec<ObjectiveTerm>,
}

impl Objective {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, term: ObjectiveTerm) {
        self.terms.push(term);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ObjectiveTerm> {
        self.terms.iter()
    }

    /// The exact integer objective value of a valuation.
    pub fn evaluate(&self, valuation: &Valuation) -> Cost {
        self.terms
            .iter()
            .filter(|t| valuation.value(t.var()).unwrap_or(false))
            .map(|t| t.weight())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn v(n: usize) -> VariableId {
        VariableId::new(n)
    }

    #[test]
    fn test_evaluate_sums_true_terms() {
        let mut objective = Objective::new();
        objective.push(ObjectiveTerm::new(v(0), -3));
        objective.push(ObjectiveTerm::new(v(1), -5));
        let mut valuation = Valuation::with_len(2);
        valuation.set(v(0), true);
        assert_eq!(objective.evaluate(&valuation), -3);
        valuation.set(v(1), true);
        assert_eq!(objective.evaluate(&valuation), -8);
    }

    #[test]
    fn test_avoiding_a_violation_is_strictly_better() {
        // Two valuations identical except for one negatively weighted
        // indicator: the one without the violation scores strictly higher.
        let mut objective = Objective::new();
        objective.push(ObjectiveTerm::new(v(0), -2));
        objective.push(ObjectiveTerm::new(v(1), -7));

        let mut with_violation = Valuation::with_len(2);
        with_violation.set(v(0), true);
        with_violation.set(v(1), true);

        let mut without_violation = Valuation::with_len(2);
        without_violation.set(v(0), true);

        assert!(objective.evaluate(&without_violation) > objective.evaluate(&with_violation));
    }

    #[test]
    fn test_empty_objective_is_zero() {
        assert_eq!(Objective::new().evaluate(&Valuation::with_len(0)), 0);
    }
}
