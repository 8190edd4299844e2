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

use crate::{
    backend::{SolveLimits, SolverBackend},
    err::{BackendFailureError, SolveError},
    outcome::SolveOutcome,
};
use good_lp::{default_solver, variable, variables, Expression, Solution, SolverModel};
use rota_alloc_model::prelude::{Constraint, Model, Valuation, VariableId};

/// Mixed-integer binding of the scheduling model.
///
/// Each model variable becomes a binary ILP variable; the constraint
/// vocabulary linearizes directly:
///
/// - exactly-one: `sum == 1`
/// - pin true / false: `x == 1` / `x == 0`
/// - not-both: `a + b <= 1`
/// - indicator biconditional: `i <= a`, `i <= b`, `i >= a + b - 1`
///
/// The bundled `microlp` solver proves optimality and has no budget
/// controls, so [`SolveLimits`] are logged and skipped; an over-budget
/// run only returns a better answer than the caller asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilpBackend;

impl MilpBackend {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for MilpBackend {
    fn name(&self) -> &str {
        "milp"
    }

    fn solve(&self, model: &Model, limits: &SolveLimits) -> Result<SolveOutcome, SolveError> {
        if !limits.is_unbounded() {
            tracing::warn!(
                time_budget = ?limits.time_budget(),
                solution_cap = ?limits.solution_cap(),
                "solve limits are advisory; the bundled solver runs to proven optimality"
            );
        }

        let mut vars = variables!();
        let xs: Vec<_> = (0..model.variables().len())
            .map(|i| vars.add(variable().binary().name(format!("x{i}"))))
            .collect();

        let objective = model
            .objective()
            .iter()
            .fold(Expression::from(0.0), |acc, term| {
                acc + (term.weight() as f64) * xs[term.var().index()]
            });

        tracing::debug!(
            variables = xs.len(),
            constraints = model.constraints().len(),
            "submitting program to {}",
            self.name()
        );

        let mut program = vars.maximise(objective).using(default_solver);

        for constraint in model.constraints() {
            match constraint {
                Constraint::ExactlyOne(members) => {
                    let sum = members
                        .iter()
                        .fold(Expression::from(0.0), |acc, v| acc + xs[v.index()]);
                    program.add_constraint(sum.eq(1.0));
                }
                Constraint::ForceTrue(v) => {
                    program.add_constraint(Expression::from(xs[v.index()]).eq(1.0));
                }
                Constraint::ForceFalse(v) => {
                    program.add_constraint(Expression::from(xs[v.index()]).eq(0.0));
                }
                Constraint::NotBoth(a, b) => {
                    program.add_constraint((xs[a.index()] + xs[b.index()]).leq(1.0));
                }
                Constraint::IndicatorOfPair {
                    indicator,
                    first,
                    second,
                } => {
                    let i = xs[indicator.index()];
                    let a = xs[first.index()];
                    let b = xs[second.index()];
                    program.add_constraint((i - a).leq(0.0));
                    program.add_constraint((i - b).leq(0.0));
                    program.add_constraint((a + b - i).leq(1.0));
                }
            }
        }

        let solution = match program.solve() {
            Ok(solution) => solution,
            Err(good_lp::ResolutionError::Infeasible) => {
                return Ok(SolveOutcome::Infeasible);
            }
            Err(other) => {
                return Err(SolveError::from(BackendFailureError::new(
                    self.name(),
                    other.to_string(),
                )));
            }
        };

        let mut valuation = Valuation::with_len(xs.len());
        for (index, x) in xs.iter().enumerate() {
            valuation.set(VariableId::new(index), solution.value(*x) >= 0.5);
        }

        // Recompute the objective over integers; the solver's float total
        // is only an approximation of it.
        let objective = model.objective().evaluate(&valuation);
        Ok(SolveOutcome::Optimal {
            valuation,
            objective,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_alloc_model::prelude::{
        PersonIdentifier, RepeatPolicy, Room, RoomIdentifier, ScenarioBuilder,
    };

    #[inline]
    fn rid(n: u32) -> RoomIdentifier {
        RoomIdentifier::new(n)
    }

    #[inline]
    fn pid(n: u32) -> PersonIdentifier {
        PersonIdentifier::new(n)
    }

    #[test]
    fn test_single_cell_scenario_is_optimal() {
        let scenario = ScenarioBuilder::new()
            .with_rooms([Room::open(rid(0))])
            .with_person_count(1)
            .with_cycle_length(1)
            .with_opening_assignment([(rid(0), pid(0))])
            .with_policy(RepeatPolicy::new())
            .build()
            .unwrap();
        let model = Model::from_scenario(&scenario).unwrap();

        let outcome = MilpBackend::new()
            .solve(&model, &SolveLimits::none())
            .unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.objective(), Some(0));
        let valuation = outcome.valuation().unwrap();
        assert_eq!(valuation.count_true(), 1);
    }

    #[test]
    fn test_backend_reports_its_name() {
        assert_eq!(MilpBackend::new().name(), "milp");
    }
}
