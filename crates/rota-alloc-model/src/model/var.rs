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

use crate::problem::{person::PersonIdentifier, room::RoomIdentifier};
use rota_alloc_core::prelude::{Stride, Week};
use std::collections::BTreeMap;

/// A handle into the model's variable block. Ids are dense and purely
/// data-derived: the assignment block is laid out by
/// `(week * rooms + room) * persons + person`, and indicators follow it
/// in ascending key order. Rebuilding the same scenario always yields the
/// same ids.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(usize);

impl VariableId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Identity of an assignment decision: `person` staffs `room` in `week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssignmentKey {
    pub week: Week,
    pub room: RoomIdentifier,
    pub person: PersonIdentifier,
}

impl AssignmentKey {
    #[inline]
    pub const fn new(week: Week, room: RoomIdentifier, person: PersonIdentifier) -> Self {
        Self { week, room, person }
    }
}

impl std::fmt::Display for AssignmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.week, self.room, self.person)
    }
}

/// Identity of a violation indicator: `person` staffs `room` in both
/// `week` and `week + stride`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorKey {
    pub person: PersonIdentifier,
    pub room: RoomIdentifier,
    pub week: Week,
    pub stride: Stride,
}

impl IndicatorKey {
    #[inline]
    pub const fn new(
        person: PersonIdentifier,
        room: RoomIdentifier,
        week: Week,
        stride: Stride,
    ) -> Self {
        Self {
            person,
            room,
            week,
            stride,
        }
    }

    /// The two assignment decisions this indicator couples.
    #[inline]
    pub fn endpoints(&self) -> Option<(AssignmentKey, AssignmentKey)> {
        let later = self.week.checked_add(self.stride)?;
        Some((
            AssignmentKey::new(self.week, self.room, self.person),
            AssignmentKey::new(later, self.room, self.person),
        ))
    }
}

impl std::fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}+{}",
            self.person, self.room, self.week, self.stride
        )
    }
}

/// The full variable block of a model: one boolean per `(week, room,
/// person)` triple, plus one indicator per penalized repetition window.
#[derive(Debug, Clone)]
pub struct VariableSpace {
    weeks: u32,
    rooms: u32,
    persons: u32,
    indicators: BTreeMap<IndicatorKey, VariableId>,
}

impl VariableSpace {
    #[inline]
    pub fn with_dimensions(weeks: u32, rooms: u32, persons: u32) -> Self {
        Self {
            weeks,
            rooms,
            persons,
            indicators: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn assignment_count(&self) -> usize {
        self.weeks as usize * self.rooms as usize * self.persons as usize
    }

    #[inline]
    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignment_count() + self.indicator_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the assignment variable for a triple, or `None` if the
    /// triple lies outside the allocated dimensions.
    #[inline]
    pub fn assignment(&self, key: AssignmentKey) -> Option<VariableId> {
        let week = key.week.value();
        let room = *key.room.value();
        let person = *key.person.value();
        if week >= self.weeks || room >= self.rooms || person >= self.persons {
            return None;
        }
        let index =
            (week as usize * self.rooms as usize + room as usize) * self.persons as usize
                + person as usize;
        Some(VariableId::new(index))
    }

    /// Inverse of [`VariableSpace::assignment`], for decoding valuations.
    #[inline]
    pub fn decode_assignment(&self, var: VariableId) -> Option<AssignmentKey> {
        let index = var.index();
        if index >= self.assignment_count() {
            return None;
        }
        let persons = self.persons as usize;
        let rooms = self.rooms as usize;
        let person = (index % persons) as u32;
        let room = ((index / persons) % rooms) as u32;
        let week = (index / (persons * rooms)) as u32;
        Some(AssignmentKey::new(
            Week::new(week),
            RoomIdentifier::new(room),
            PersonIdentifier::new(person),
        ))
    }

    /// Allocates the indicator for `key`, or returns the existing id.
    /// Identity is the key, never the call order; allocating twice is a
    /// no-op by construction.
    #[inline]
    pub fn allocate_indicator(&mut self, key: IndicatorKey) -> VariableId {
        let next = VariableId::new(self.assignment_count() + self.indicators.len());
        *self.indicators.entry(key).or_insert(next)
    }

    #[inline]
    pub fn indicator(&self, key: IndicatorKey) -> Option<VariableId> {
        self.indicators.get(&key).copied()
    }

    /// All indicators in ascending key order.
    #[inline]
    pub fn iter_indicators(&self) -> impl Iterator<Item = (IndicatorKey, VariableId)> + '_ {
        self.indicators.iter().map(|(k, v)| (*k, *v))
    }

    #[inline]
    pub fn iter_assignment_keys(&self) -> impl Iterator<Item = AssignmentKey> + '_ {
        (0..self.assignment_count())
            .filter_map(|i| self.decode_assignment(VariableId::new(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn key(week: u32, room: u32, person: u32) -> AssignmentKey {
        AssignmentKey::new(
            Week::new(week),
            RoomIdentifier::new(room),
            PersonIdentifier::new(person),
        )
    }

    #[test]
    fn test_assignment_ids_are_dense_and_unique() {
        let space = VariableSpace::with_dimensions(2, 3, 4);
        let mut seen = std::collections::BTreeSet::new();
        for k in space.iter_assignment_keys() {
            let var = space.assignment(k).unwrap();
            assert!(seen.insert(var));
        }
        assert_eq!(seen.len(), 24);
        assert_eq!(space.assignment_count(), 24);
    }

    #[test]
    fn test_assignment_decode_round_trips() {
        let space = VariableSpace::with_dimensions(3, 2, 2);
        let k = key(2, 1, 0);
        let var = space.assignment(k).unwrap();
        assert_eq!(space.decode_assignment(var), Some(k));
    }

    #[test]
    fn test_out_of_range_triple_is_none() {
        let space = VariableSpace::with_dimensions(2, 2, 2);
        assert!(space.assignment(key(2, 0, 0)).is_none());
        assert!(space.assignment(key(0, 2, 0)).is_none());
        assert!(space.assignment(key(0, 0, 2)).is_none());
    }

    #[test]
    fn test_indicators_follow_assignment_block() {
        let mut space = VariableSpace::with_dimensions(2, 2, 2);
        let k = IndicatorKey::new(
            PersonIdentifier::new(0),
            RoomIdentifier::new(1),
            Week::new(0),
            Stride::new(1),
        );
        let var = space.allocate_indicator(k);
        assert_eq!(var.index(), space.assignment_count());
        assert_eq!(space.indicator(k), Some(var));
        assert_eq!(space.len(), 9);
    }

    #[test]
    fn test_indicator_allocation_is_idempotent() {
        let mut space = VariableSpace::with_dimensions(1, 1, 1);
        let k = IndicatorKey::new(
            PersonIdentifier::new(0),
            RoomIdentifier::new(0),
            Week::new(0),
            Stride::new(1),
        );
        let first = space.allocate_indicator(k);
        let second = space.allocate_indicator(k);
        assert_eq!(first, second);
        assert_eq!(space.indicator_count(), 1);
    }

    #[test]
    fn test_indicator_endpoints() {
        let k = IndicatorKey::new(
            PersonIdentifier::new(3),
            RoomIdentifier::new(1),
            Week::new(2),
            Stride::new(5),
        );
        let (first, second) = k.endpoints().unwrap();
        assert_eq!(first, key(2, 1, 3));
        assert_eq!(second, key(7, 1, 3));
    }
}
