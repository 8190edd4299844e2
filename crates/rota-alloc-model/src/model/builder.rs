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

use crate::model::{
    constraint::Constraint,
    err::{MissingPenaltyRuleError, ModelBuildError, UnallocatedVariableError},
    objective::{Objective, ObjectiveTerm},
    var::{AssignmentKey, IndicatorKey, VariableId, VariableSpace},
};
use crate::problem::scenario::Scenario;
use rota_alloc_core::prelude::Week;
use std::collections::BTreeSet;

/// The assembled encoding of one scenario: the variable space, every hard
/// constraint, and the maximize objective. This is what a solving backend
/// consumes; nothing here knows how the search is performed.
#[derive(Debug, Clone)]
pub struct Model {
    variables: VariableSpace,
    constraints: Vec<Constraint>,
    objective: Objective,
}

impl Model {
    /// Encodes a validated scenario.
    ///
    /// Emission order is fixed (coverage, eligibility pins, opening pins,
    /// prohibitions, indicators) and every id is derived from the data,
    /// so equal scenarios produce equal models.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, ModelBuildError> {
        let mut variables = VariableSpace::with_dimensions(
            scenario.cycle_length(),
            scenario.room_count(),
            scenario.person_count(),
        );
        let mut constraints = Vec::new();

        emit_coverage(scenario, &variables, &mut constraints)?;
        emit_opening_pins(scenario, &variables, &mut constraints)?;
        emit_prohibitions(scenario, &variables, &mut constraints)?;
        let objective = emit_penalties(scenario, &mut variables, &mut constraints)?;

        tracing::debug!(
            assignment_vars = variables.assignment_count(),
            indicator_vars = variables.indicator_count(),
            constraints = constraints.len(),
            objective_terms = objective.len(),
            "encoded scenario"
        );

        Ok(Self {
            variables,
            constraints,
            objective,
        })
    }

    #[inline]
    pub fn variables(&self) -> &VariableSpace {
        &self.variables
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[inline]
    pub fn objective(&self) -> &Objective {
        &self.objective
    }
}

#[inline]
fn lookup(
    variables: &VariableSpace,
    key: AssignmentKey,
) -> Result<VariableId, ModelBuildError> {
    variables
        .assignment(key)
        .ok_or_else(|| ModelBuildError::from(UnallocatedVariableError::new(key)))
}

/// Coverage in both directions, plus explicit `ForceFalse` pins for every
/// ineligible `(room, person)` pair. Relying on the eligible-only
/// exactly-one to starve ineligible variables would leave them
/// unconstrained; pinning them keeps the model auditable.
fn emit_coverage(
    scenario: &Scenario,
    variables: &VariableSpace,
    constraints: &mut Vec<Constraint>,
) -> Result<(), ModelBuildError> {
    for week in scenario.weeks() {
        for room in scenario.iter_rooms() {
            let mut slot = Vec::with_capacity(scenario.person_count() as usize);
            for person in scenario.roster().iter() {
                let var = lookup(variables, AssignmentKey::new(week, room.id(), person))?;
                if room.admits(person) {
                    slot.push(var);
                } else {
                    constraints.push(Constraint::ForceFalse(var));
                }
            }
            constraints.push(Constraint::ExactlyOne(slot));
        }

        for person in scenario.roster().iter() {
            let mut rooms_of_person = Vec::with_capacity(scenario.room_count() as usize);
            for room in scenario.iter_rooms() {
                rooms_of_person
                    .push(lookup(variables, AssignmentKey::new(week, room.id(), person))?);
            }
            constraints.push(Constraint::ExactlyOne(rooms_of_person));
        }
    }
    Ok(())
}

fn emit_opening_pins(
    scenario: &Scenario,
    variables: &VariableSpace,
    constraints: &mut Vec<Constraint>,
) -> Result<(), ModelBuildError> {
    let week0 = Week::new(0);
    for (room, person) in scenario.opening_assignment() {
        let var = lookup(variables, AssignmentKey::new(week0, *room, *person))?;
        constraints.push(Constraint::ForceTrue(var));
    }
    Ok(())
}

fn emit_prohibitions(
    scenario: &Scenario,
    variables: &VariableSpace,
    constraints: &mut Vec<Constraint>,
) -> Result<(), ModelBuildError> {
    for stride in scenario.policy().iter_forbidden() {
        for person in scenario.roster().iter() {
            for room in scenario.iter_rooms() {
                for week in scenario.weeks() {
                    let later = match week.checked_add(stride) {
                        Some(w) if w.value() < scenario.cycle_length() => w,
                        _ => continue,
                    };
                    let first =
                        lookup(variables, AssignmentKey::new(week, room.id(), person))?;
                    let second =
                        lookup(variables, AssignmentKey::new(later, room.id(), person))?;
                    constraints.push(Constraint::NotBoth(first, second));
                }
            }
        }
    }
    Ok(())
}

/// One indicator per penalized repetition window, coupled to its two
/// assignment variables by a full biconditional and priced into the
/// objective with the stride's weight.
fn emit_penalties(
    scenario: &Scenario,
    variables: &mut VariableSpace,
    constraints: &mut Vec<Constraint>,
) -> Result<Objective, ModelBuildError> {
    // Collect keys first and allocate in ascending key order, so indicator
    // ids depend on the key set alone.
    let mut keys: BTreeSet<IndicatorKey> = BTreeSet::new();
    for (stride, _) in scenario.policy().iter_penalized() {
        for person in scenario.roster().iter() {
            for room in scenario.iter_rooms() {
                for week in scenario.weeks() {
                    let in_range = week
                        .checked_add(stride)
                        .is_some_and(|w| w.value() < scenario.cycle_length());
                    if in_range {
                        keys.insert(IndicatorKey::new(person, room.id(), week, stride));
                    }
                }
            }
        }
    }
    for key in &keys {
        variables.allocate_indicator(*key);
    }

    let indicators: Vec<(IndicatorKey, VariableId)> = variables.iter_indicators().collect();
    let mut objective = Objective::new();
    for (key, indicator) in indicators {
        let (first_key, second_key) = key.endpoints().ok_or_else(|| {
            ModelBuildError::from(UnallocatedVariableError::new(AssignmentKey::new(
                key.week, key.room, key.person,
            )))
        })?;
        let first = lookup(variables, first_key)?;
        let second = lookup(variables, second_key)?;
        constraints.push(Constraint::IndicatorOfPair {
            indicator,
            first,
            second,
        });

        let weight = scenario
            .policy()
            .rule(key.stride)
            .and_then(|rule| rule.weight())
            .ok_or_else(|| ModelBuildError::from(MissingPenaltyRuleError::new(key)))?;
        objective.push(ObjectiveTerm::new(indicator, weight));
    }

    Ok(objective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{
        person::PersonIdentifier,
        policy::{RepeatPolicy, StrideRule},
        room::{Room, RoomContainer, RoomIdentifier},
        scenario::Scenario,
    };
    use crate::problem::person::Roster;
    use rota_alloc_core::prelude::{Stride, Week};
    use std::collections::BTreeMap;

    #[inline]
    fn rid(n: u32) -> RoomIdentifier {
        RoomIdentifier::new(n)
    }

    #[inline]
    fn pid(n: u32) -> PersonIdentifier {
        PersonIdentifier::new(n)
    }

    fn scenario(rooms: u32, cycle: u32, policy: RepeatPolicy) -> Scenario {
        let container: RoomContainer = (0..rooms).map(|i| Room::open(rid(i))).collect();
        let opening: BTreeMap<_, _> = (0..rooms).map(|i| (rid(i), pid(i))).collect();
        Scenario::new(container, Roster::new(rooms), cycle, opening, policy).unwrap()
    }

    fn restricted_scenario() -> Scenario {
        let rooms: RoomContainer = [
            Room::open(rid(0)),
            Room::restricted(rid(1), [pid(1), pid(2)]),
            Room::open(rid(2)),
        ]
        .into_iter()
        .collect();
        let opening = [(rid(0), pid(0)), (rid(1), pid(1)), (rid(2), pid(2))]
            .into_iter()
            .collect();
        Scenario::new(rooms, Roster::new(3), 2, opening, RepeatPolicy::new()).unwrap()
    }

    #[test]
    fn test_variable_space_has_one_var_per_triple() {
        let model = Model::from_scenario(&scenario(3, 4, RepeatPolicy::new())).unwrap();
        assert_eq!(model.variables().assignment_count(), 4 * 3 * 3);
        assert_eq!(model.variables().indicator_count(), 0);
    }

    #[test]
    fn test_coverage_constraints_in_both_directions() {
        let model = Model::from_scenario(&scenario(3, 4, RepeatPolicy::new())).unwrap();
        let exactly_one = model
            .constraints()
            .iter()
            .filter(|c| matches!(c, Constraint::ExactlyOne(_)))
            .count();
        // Per week: one per room plus one per person.
        assert_eq!(exactly_one, 4 * (3 + 3));
    }

    #[test]
    fn test_ineligible_pairs_are_pinned_false() {
        let s = restricted_scenario();
        let model = Model::from_scenario(&s).unwrap();
        // Room 1 excludes person 0, for each of the 2 weeks.
        let pinned: Vec<VariableId> = model
            .constraints()
            .iter()
            .filter_map(|c| match c {
                Constraint::ForceFalse(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(pinned.len(), 2);
        for var in pinned {
            let key = model.variables().decode_assignment(var).unwrap();
            assert_eq!(key.room, rid(1));
            assert_eq!(key.person, pid(0));
        }
    }

    #[test]
    fn test_restricted_slot_ranges_over_eligible_only() {
        let s = restricted_scenario();
        let model = Model::from_scenario(&s).unwrap();
        for c in model.constraints() {
            let Constraint::ExactlyOne(vars) = c else {
                continue;
            };
            let keys: Vec<AssignmentKey> = vars
                .iter()
                .map(|v| model.variables().decode_assignment(*v).unwrap())
                .collect();
            let same_room = keys.windows(2).all(|w| w[0].room == w[1].room);
            if same_room && keys.first().map(|k| k.room) == Some(rid(1)) {
                assert_eq!(keys.len(), 2);
                assert!(keys.iter().all(|k| k.person != pid(0)));
            }
        }
    }

    #[test]
    fn test_opening_pins_week_zero_only() {
        let model = Model::from_scenario(&scenario(2, 3, RepeatPolicy::new())).unwrap();
        let pins: Vec<AssignmentKey> = model
            .constraints()
            .iter()
            .filter_map(|c| match c {
                Constraint::ForceTrue(v) => model.variables().decode_assignment(*v),
                _ => None,
            })
            .collect();
        assert_eq!(pins.len(), 2);
        for key in pins {
            assert_eq!(key.week, Week::new(0));
            assert_eq!(key.room.into_inner(), key.person.into_inner());
        }
    }

    #[test]
    fn test_prohibited_stride_emits_all_pairs() {
        let policy = RepeatPolicy::new().with_rule(Stride::new(1), StrideRule::Forbid);
        let model = Model::from_scenario(&scenario(2, 3, policy)).unwrap();
        let not_both: Vec<(AssignmentKey, AssignmentKey)> = model
            .constraints()
            .iter()
            .filter_map(|c| match c {
                Constraint::NotBoth(a, b) => Some((
                    model.variables().decode_assignment(*a).unwrap(),
                    model.variables().decode_assignment(*b).unwrap(),
                )),
                _ => None,
            })
            .collect();
        // 2 persons x 2 rooms x 2 week pairs at stride 1.
        assert_eq!(not_both.len(), 8);
        for (first, second) in not_both {
            assert_eq!(first.room, second.room);
            assert_eq!(first.person, second.person);
            assert_eq!(second.week.value() - first.week.value(), 1);
        }
    }

    #[test]
    fn test_penalized_stride_builds_biconditional_indicators() {
        let policy = RepeatPolicy::new().with_rule(Stride::new(1), StrideRule::Penalize(-4));
        let model = Model::from_scenario(&scenario(2, 3, policy)).unwrap();
        // 2 persons x 2 rooms x 2 windows.
        assert_eq!(model.variables().indicator_count(), 8);
        assert_eq!(model.objective().len(), 8);
        assert!(model.objective().iter().all(|t| t.weight() == -4));

        let couplings = model
            .constraints()
            .iter()
            .filter(|c| matches!(c, Constraint::IndicatorOfPair { .. }))
            .count();
        assert_eq!(couplings, 8);

        for c in model.constraints() {
            let Constraint::IndicatorOfPair {
                indicator,
                first,
                second,
            } = c
            else {
                continue;
            };
            assert!(indicator.index() >= model.variables().assignment_count());
            let first = model.variables().decode_assignment(*first).unwrap();
            let second = model.variables().decode_assignment(*second).unwrap();
            assert_eq!(first.room, second.room);
            assert_eq!(first.person, second.person);
            assert_eq!(second.week.value() - first.week.value(), 1);
        }
    }

    #[test]
    fn test_mixed_policy_never_penalizes_forbidden_strides() {
        let policy = RepeatPolicy::new()
            .with_rule(Stride::new(1), StrideRule::Forbid)
            .with_rule(Stride::new(2), StrideRule::Penalize(-2));
        let model = Model::from_scenario(&scenario(2, 4, policy)).unwrap();
        for (key, _) in model.variables().iter_indicators() {
            assert_eq!(key.stride, Stride::new(2));
        }
        // Stride 2 in a 4-week cycle: windows at weeks 0 and 1.
        assert_eq!(model.variables().indicator_count(), 2 * 2 * 2);
    }

    #[test]
    fn test_longer_strides_cost_less_near_the_anchor() {
        // Distance-decayed weights: the stride-5 indicator weighs more
        // than the stride-6 one in a 8-week cycle anchored at 6.
        let policy = RepeatPolicy::distance_decayed(8, 6, 4);
        let model = Model::from_scenario(&scenario(2, 8, policy)).unwrap();
        let weight_of = |stride: u32| -> i64 {
            model
                .variables()
                .iter_indicators()
                .find(|(k, _)| k.stride == Stride::new(stride))
                .and_then(|(_, var)| {
                    model
                        .objective()
                        .iter()
                        .find(|t| t.var() == var)
                        .map(|t| t.weight())
                })
                .unwrap()
        };
        assert_eq!(weight_of(5), -1);
        assert_eq!(weight_of(6), 0);
        assert!(weight_of(5) < weight_of(6));
    }

    #[test]
    fn test_equal_scenarios_encode_identically() {
        let policy = RepeatPolicy::distance_decayed(5, 3, 1);
        let a = Model::from_scenario(&scenario(3, 5, policy.clone())).unwrap();
        let b = Model::from_scenario(&scenario(3, 5, policy)).unwrap();
        assert_eq!(a.constraints(), b.constraints());
        assert_eq!(a.variables().len(), b.variables().len());
        let ids_a: Vec<_> = a.variables().iter_indicators().collect();
        let ids_b: Vec<_> = b.variables().iter_indicators().collect();
        assert_eq!(ids_a, ids_b);
    }
}
