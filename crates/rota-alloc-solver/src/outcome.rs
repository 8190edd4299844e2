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

use rota_alloc_core::prelude::Cost;
use rota_alloc_model::prelude::Valuation;

/// What a backend hands back. Any valuation in here satisfies every hard
/// constraint of the submitted model; a backend that ran out of budget
/// returns its best incumbent as `Feasible`, never a partial assignment.
/// `Infeasible` is a legitimate outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Proven best assignment.
    Optimal { valuation: Valuation, objective: Cost },
    /// Valid but not proven optimal (time or solution budget ran out).
    Feasible { valuation: Valuation, objective: Cost },
    /// No assignment satisfies the hard constraints.
    Infeasible,
}

impl SolveOutcome {
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveOutcome::Optimal { .. })
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, SolveOutcome::Feasible { .. })
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveOutcome::Infeasible)
    }

    /// The valuation, for the two outcomes that carry one.
    #[inline]
    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            SolveOutcome::Optimal { valuation, .. }
            | SolveOutcome::Feasible { valuation, .. } => Some(valuation),
            SolveOutcome::Infeasible => None,
        }
    }

    #[inline]
    pub fn objective(&self) -> Option<Cost> {
        match self {
            SolveOutcome::Optimal { objective, .. }
            | SolveOutcome::Feasible { objective, .. } => Some(*objective),
            SolveOutcome::Infeasible => None,
        }
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveOutcome::Optimal { objective, .. } => {
                write!(f, "optimal (objective {})", objective)
            }
            SolveOutcome::Feasible { objective, .. } => {
                write!(f, "feasible, not proven optimal (objective {})", objective)
            }
            SolveOutcome::Infeasible => write!(f, "infeasible"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_by_variant() {
        let optimal = SolveOutcome::Optimal {
            valuation: Valuation::with_len(1),
            objective: -3,
        };
        assert!(optimal.is_optimal());
        assert_eq!(optimal.objective(), Some(-3));
        assert!(optimal.valuation().is_some());

        let infeasible = SolveOutcome::Infeasible;
        assert!(infeasible.is_infeasible());
        assert_eq!(infeasible.objective(), None);
        assert!(infeasible.valuation().is_none());
    }

    #[test]
    fn test_display_distinguishes_feasible_from_optimal() {
        let feasible = SolveOutcome::Feasible {
            valuation: Valuation::with_len(0),
            objective: -9,
        };
        assert!(feasible.to_string().contains("not proven optimal"));
        let optimal = SolveOutcome::Optimal {
            valuation: Valuation::with_len(0),
            objective: 0,
        };
        assert!(optimal.to_string().starts_with("optimal"));
    }
}
