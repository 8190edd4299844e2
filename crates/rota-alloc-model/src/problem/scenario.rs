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

use crate::problem::{
    err::{
        ConfigurationError, EmptyEligibilityError, EmptyRoomSetError, EmptyRosterError,
        InvalidStrideError, OpeningDuplicatePersonError, OpeningIneligiblePersonError,
        OpeningMissingRoomError, OpeningUnknownPersonError, OpeningUnknownRoomError,
        PersonNotInRosterError, RoomIdentifierOutOfRangeError, RosterSizeMismatchError,
        ZeroCycleError,
    },
    person::{PersonIdentifier, Roster},
    policy::RepeatPolicy,
    room::{Eligibility, Room, RoomContainer, RoomIdentifier},
};
use rota_alloc_core::prelude::Week;
use std::collections::{BTreeMap, BTreeSet};

/// The immutable description of one scheduling instance: which rooms exist
/// and who may staff them, how many people rotate, how long the cycle is,
/// who starts where in week zero, and how repeats are priced or banned.
///
/// A `Scenario` is validated exhaustively at construction; every later
/// stage may rely on its internal consistency.
#[derive(Debug, Clone)]
pub struct Scenario {
    rooms: RoomContainer,
    roster: Roster,
    cycle_length: u32,
    opening: BTreeMap<RoomIdentifier, PersonIdentifier>,
    policy: RepeatPolicy,
}

impl Scenario {
    pub fn new(
        rooms: RoomContainer,
        roster: Roster,
        cycle_length: u32,
        opening: BTreeMap<RoomIdentifier, PersonIdentifier>,
        policy: RepeatPolicy,
    ) -> Result<Self, ConfigurationError> {
        if rooms.is_empty() {
            return Err(ConfigurationError::from(EmptyRoomSetError));
        }
        if roster.is_empty() {
            return Err(ConfigurationError::from(EmptyRosterError));
        }
        if cycle_length == 0 {
            return Err(ConfigurationError::from(ZeroCycleError));
        }
        if rooms.len() != roster.len() {
            return Err(ConfigurationError::from(RosterSizeMismatchError::new(
                rooms.len(),
                roster.len(),
            )));
        }

        // Room ids must be dense so the variable layout can be derived
        // from counts alone.
        for id in rooms.iter_ids() {
            if *id.value() as usize >= rooms.len() {
                return Err(ConfigurationError::from(
                    RoomIdentifierOutOfRangeError::new(id, rooms.len()),
                ));
            }
        }

        for room in rooms.iter() {
            if let Eligibility::Restricted(persons) = room.eligibility() {
                for person in persons {
                    if !roster.contains(*person) {
                        return Err(ConfigurationError::from(PersonNotInRosterError::new(
                            room.id(),
                            *person,
                        )));
                    }
                }
                if persons.is_empty() {
                    return Err(ConfigurationError::from(EmptyEligibilityError::new(
                        room.id(),
                    )));
                }
            }
        }

        validate_opening(&rooms, &roster, &opening)?;

        for (stride, _) in policy.iter() {
            let s = stride.value();
            if s == 0 || s >= cycle_length {
                return Err(ConfigurationError::from(InvalidStrideError::new(
                    stride,
                    cycle_length,
                )));
            }
        }

        tracing::debug!(
            rooms = rooms.len(),
            persons = roster.len(),
            weeks = cycle_length,
            rules = policy.len(),
            "validated scenario"
        );

        Ok(Self {
            rooms,
            roster,
            cycle_length,
            opening,
            policy,
        })
    }

    #[inline]
    pub fn rooms(&self) -> &RoomContainer {
        &self.rooms
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn room_count(&self) -> u32 {
        self.rooms.len() as u32
    }

    #[inline]
    pub fn person_count(&self) -> u32 {
        self.roster.person_count()
    }

    #[inline]
    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    #[inline]
    pub fn weeks(&self) -> impl Iterator<Item = Week> {
        (0..self.cycle_length).map(Week::new)
    }

    #[inline]
    pub fn opening_assignment(&self) -> &BTreeMap<RoomIdentifier, PersonIdentifier> {
        &self.opening
    }

    #[inline]
    pub fn policy(&self) -> &RepeatPolicy {
        &self.policy
    }

    #[inline]
    pub fn iter_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }
}

/// The opening week must itself be a feasible single-week assignment:
/// every room covered exactly once, by a distinct, known, eligible person.
fn validate_opening(
    rooms: &RoomContainer,
    roster: &Roster,
    opening: &BTreeMap<RoomIdentifier, PersonIdentifier>,
) -> Result<(), ConfigurationError> {
    for room_id in opening.keys() {
        if !rooms.contains_id(*room_id) {
            return Err(ConfigurationError::from(OpeningUnknownRoomError::new(
                *room_id,
            )));
        }
    }
    for id in rooms.iter_ids() {
        if !opening.contains_key(&id) {
            return Err(ConfigurationError::from(OpeningMissingRoomError::new(id)));
        }
    }

    let mut seen: BTreeSet<PersonIdentifier> = BTreeSet::new();
    for (room_id, person) in opening {
        if !roster.contains(*person) {
            return Err(ConfigurationError::from(OpeningUnknownPersonError::new(
                *room_id, *person,
            )));
        }
        if !seen.insert(*person) {
            return Err(ConfigurationError::from(OpeningDuplicatePersonError::new(
                *person,
            )));
        }
        let admits = rooms.get(*room_id).is_some_and(|r| r.admits(*person));
        if !admits {
            return Err(ConfigurationError::from(
                OpeningIneligiblePersonError::new(*room_id, *person),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::policy::StrideRule;
    use rota_alloc_core::prelude::Stride;

    #[inline]
    fn rid(n: u32) -> RoomIdentifier {
        RoomIdentifier::new(n)
    }

    #[inline]
    fn pid(n: u32) -> PersonIdentifier {
        PersonIdentifier::new(n)
    }

    fn open_rooms(n: u32) -> RoomContainer {
        (0..n).map(|i| Room::open(rid(i))).collect()
    }

    fn identity_opening(n: u32) -> BTreeMap<RoomIdentifier, PersonIdentifier> {
        (0..n).map(|i| (rid(i), pid(i))).collect()
    }

    #[test]
    fn test_minimal_scenario_is_accepted() {
        let s = Scenario::new(
            open_rooms(2),
            Roster::new(2),
            2,
            identity_opening(2),
            RepeatPolicy::new(),
        )
        .unwrap();
        assert_eq!(s.room_count(), 2);
        assert_eq!(s.person_count(), 2);
        assert_eq!(s.weeks().count(), 2);
    }

    #[test]
    fn test_zero_cycle_is_rejected() {
        let err = Scenario::new(
            open_rooms(2),
            Roster::new(2),
            0,
            identity_opening(2),
            RepeatPolicy::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::ZeroCycle(_)));
    }

    #[test]
    fn test_roster_size_mismatch_is_rejected() {
        let err = Scenario::new(
            open_rooms(2),
            Roster::new(3),
            2,
            identity_opening(2),
            RepeatPolicy::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::RosterSizeMismatch(_)));
    }

    #[test]
    fn test_sparse_room_ids_are_rejected() {
        let rooms: RoomContainer = [Room::open(rid(0)), Room::open(rid(5))]
            .into_iter()
            .collect();
        let opening = [(rid(0), pid(0)), (rid(5), pid(1))].into_iter().collect();
        let err = Scenario::new(rooms, Roster::new(2), 2, opening, RepeatPolicy::new())
            .unwrap_err();
        match err {
            ConfigurationError::RoomIdentifierOutOfRange(e) => {
                assert_eq!(e.id(), rid(5));
                assert_eq!(e.room_count(), 2);
            }
            other => panic!("expected RoomIdentifierOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_restriction_naming_unknown_person_is_rejected() {
        let rooms: RoomContainer = [Room::open(rid(0)), Room::restricted(rid(1), [pid(9)])]
            .into_iter()
            .collect();
        let err = Scenario::new(
            rooms,
            Roster::new(2),
            2,
            identity_opening(2),
            RepeatPolicy::new(),
        )
        .unwrap_err();
        match err {
            ConfigurationError::PersonNotInRoster(e) => {
                assert_eq!(e.room(), rid(1));
                assert_eq!(e.person(), pid(9));
            }
            other => panic!("expected PersonNotInRoster, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_restriction_is_rejected() {
        let rooms: RoomContainer = [
            Room::open(rid(0)),
            Room::restricted(rid(1), std::iter::empty()),
        ]
        .into_iter()
        .collect();
        let err = Scenario::new(
            rooms,
            Roster::new(2),
            2,
            identity_opening(2),
            RepeatPolicy::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyEligibility(_)));
    }

    #[test]
    fn test_opening_must_cover_every_room() {
        let opening = [(rid(0), pid(0))].into_iter().collect();
        let err = Scenario::new(open_rooms(2), Roster::new(2), 2, opening, RepeatPolicy::new())
            .unwrap_err();
        match err {
            ConfigurationError::OpeningMissingRoom(e) => assert_eq!(e.room(), rid(1)),
            other => panic!("expected OpeningMissingRoom, got {other:?}"),
        }
    }

    #[test]
    fn test_opening_naming_unknown_room_is_rejected() {
        let mut opening = identity_opening(2);
        opening.insert(rid(7), pid(1));
        let err = Scenario::new(open_rooms(2), Roster::new(2), 2, opening, RepeatPolicy::new())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::OpeningUnknownRoom(_)));
    }

    #[test]
    fn test_opening_duplicate_person_is_rejected() {
        let opening = [(rid(0), pid(0)), (rid(1), pid(0))].into_iter().collect();
        let err = Scenario::new(open_rooms(2), Roster::new(2), 2, opening, RepeatPolicy::new())
            .unwrap_err();
        match err {
            ConfigurationError::OpeningDuplicatePerson(e) => assert_eq!(e.person(), pid(0)),
            other => panic!("expected OpeningDuplicatePerson, got {other:?}"),
        }
    }

    #[test]
    fn test_opening_must_respect_eligibility() {
        let rooms: RoomContainer = [Room::restricted(rid(0), [pid(1)]), Room::open(rid(1))]
            .into_iter()
            .collect();
        let err = Scenario::new(
            rooms,
            Roster::new(2),
            2,
            identity_opening(2),
            RepeatPolicy::new(),
        )
        .unwrap_err();
        match err {
            ConfigurationError::OpeningIneligiblePerson(e) => {
                assert_eq!(e.room(), rid(0));
                assert_eq!(e.person(), pid(0));
            }
            other => panic!("expected OpeningIneligiblePerson, got {other:?}"),
        }
    }

    #[test]
    fn test_disjoint_restrictions_that_break_coverage_fail_validation() {
        // Rooms 0 and 1 both demand person 0; no opening bijection exists,
        // so the conflict surfaces here and never reaches a solver.
        let rooms: RoomContainer = [
            Room::restricted(rid(0), [pid(0)]),
            Room::restricted(rid(1), [pid(0)]),
        ]
        .into_iter()
        .collect();
        let opening = [(rid(0), pid(0)), (rid(1), pid(1))].into_iter().collect();
        let err = Scenario::new(rooms, Roster::new(2), 2, opening, RepeatPolicy::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::OpeningIneligiblePerson(_)
        ));
    }

    #[test]
    fn test_stride_zero_is_rejected() {
        let policy = RepeatPolicy::new().with_rule(Stride::new(0), StrideRule::Forbid);
        let err = Scenario::new(open_rooms(2), Roster::new(2), 4, identity_opening(2), policy)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidStride(_)));
    }

    #[test]
    fn test_stride_at_cycle_length_is_rejected() {
        let policy = RepeatPolicy::new().with_rule(Stride::new(4), StrideRule::Penalize(-1));
        let err = Scenario::new(open_rooms(2), Roster::new(2), 4, identity_opening(2), policy)
            .unwrap_err();
        match err {
            ConfigurationError::InvalidStride(e) => {
                assert_eq!(e.stride(), Stride::new(4));
                assert_eq!(e.cycle_length(), 4);
            }
            other => panic!("expected InvalidStride, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_policy_strides_are_accepted() {
        let policy = RepeatPolicy::distance_decayed(4, 2, 1);
        let s = Scenario::new(open_rooms(2), Roster::new(2), 4, identity_opening(2), policy)
            .unwrap();
        assert_eq!(s.policy().len(), 3);
    }
}
