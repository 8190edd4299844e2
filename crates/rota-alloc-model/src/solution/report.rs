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

use crate::model::var::{AssignmentKey, VariableSpace};
use crate::problem::{person::PersonIdentifier, room::RoomIdentifier, scenario::Scenario};
use crate::solution::{
    err::{PersonCoverageError, ProjectionError, RoomCoverageError, ValuationSizeError},
    valuation::Valuation,
};

/// The human-facing view of a solved cycle: who is where each week, how
/// often each person serves, and how often each `(room, person)` pair
/// recurs. Everything is derived once from the valuation; the report
/// itself holds no solver state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    room_sequences: std::collections::BTreeMap<RoomIdentifier, Vec<PersonIdentifier>>,
    person_totals: std::collections::BTreeMap<PersonIdentifier, u32>,
    pair_counts: std::collections::BTreeMap<(RoomIdentifier, PersonIdentifier), u32>,
}

impl ScheduleReport {
    /// The week-ordered occupant sequence of a room.
    #[inline]
    pub fn room_sequence(&self, room: RoomIdentifier) -> Option<&[PersonIdentifier]> {
        self.room_sequences.get(&room).map(Vec::as_slice)
    }

    #[inline]
    pub fn iter_room_sequences(
        &self,
    ) -> impl Iterator<Item = (RoomIdentifier, &[PersonIdentifier])> {
        self.room_sequences
            .iter()
            .map(|(room, seq)| (*room, seq.as_slice()))
    }

    /// Total weeks a person is assigned across the cycle. Always equals
    /// the cycle length under the coverage invariants.
    #[inline]
    pub fn person_total(&self, person: PersonIdentifier) -> u32 {
        self.person_totals.get(&person).copied().unwrap_or(0)
    }

    #[inline]
    pub fn iter_person_totals(&self) -> impl Iterator<Item = (PersonIdentifier, u32)> + '_ {
        self.person_totals.iter().map(|(p, n)| (*p, *n))
    }

    /// How often `person` served `room` across the cycle.
    #[inline]
    pub fn pair_count(&self, room: RoomIdentifier, person: PersonIdentifier) -> u32 {
        self.pair_counts.get(&(room, person)).copied().unwrap_or(0)
    }

    #[inline]
    pub fn iter_pair_counts(
        &self,
    ) -> impl Iterator<Item = ((RoomIdentifier, PersonIdentifier), u32)> + '_ {
        self.pair_counts.iter().map(|(k, n)| (*k, *n))
    }
}

/// Decodes a valuation back into a [`ScheduleReport`].
///
/// The coverage invariants are re-checked on the way: any week/room slot
/// without exactly one person, or week/person without exactly one room,
/// refuses the whole report. Projection reads only the assignment block,
/// so the valuation may carry indicator variables beyond it.
pub fn project(
    scenario: &Scenario,
    valuation: &Valuation,
) -> Result<ScheduleReport, ProjectionError> {
    let space = VariableSpace::with_dimensions(
        scenario.cycle_length(),
        scenario.room_count(),
        scenario.person_count(),
    );
    if valuation.len() < space.assignment_count() {
        return Err(ProjectionError::from(ValuationSizeError::new(
            space.assignment_count(),
            valuation.len(),
        )));
    }

    let mut room_sequences: std::collections::BTreeMap<RoomIdentifier, Vec<PersonIdentifier>> =
        scenario
            .rooms()
            .iter_ids()
            .map(|id| (id, Vec::with_capacity(scenario.cycle_length() as usize)))
            .collect();
    let mut person_totals: std::collections::BTreeMap<PersonIdentifier, u32> =
        scenario.roster().iter().map(|p| (p, 0)).collect();
    let mut pair_counts: std::collections::BTreeMap<(RoomIdentifier, PersonIdentifier), u32> =
        std::collections::BTreeMap::new();

    for week in scenario.weeks() {
        for room in scenario.iter_rooms() {
            let mut occupants = Vec::new();
            for person in scenario.roster().iter() {
                let key = AssignmentKey::new(week, room.id(), person);
                let assigned = space
                    .assignment(key)
                    .map(|var| valuation.is_true(var))
                    .unwrap_or(false);
                if assigned {
                    occupants.push(person);
                }
            }
            if occupants.len() != 1 {
                return Err(ProjectionError::from(RoomCoverageError::new(
                    week,
                    room.id(),
                    occupants.len(),
                )));
            }
            let person = occupants[0];
            if let Some(seq) = room_sequences.get_mut(&room.id()) {
                seq.push(person);
            }
            if let Some(total) = person_totals.get_mut(&person) {
                *total += 1;
            }
            *pair_counts.entry((room.id(), person)).or_insert(0) += 1;
        }

        for person in scenario.roster().iter() {
            let rooms_held = scenario
                .iter_rooms()
                .filter(|room| {
                    let key = AssignmentKey::new(week, room.id(), person);
                    space
                        .assignment(key)
                        .map(|var| valuation.is_true(var))
                        .unwrap_or(false)
                })
                .count();
            if rooms_held != 1 {
                return Err(ProjectionError::from(PersonCoverageError::new(
                    week, person, rooms_held,
                )));
            }
        }
    }

    Ok(ScheduleReport {
        room_sequences,
        person_totals,
        pair_counts,
    })
}
