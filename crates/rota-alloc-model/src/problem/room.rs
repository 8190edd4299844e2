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

use crate::common::{Identifier, IdentifierMarkerName};
use crate::problem::person::{PersonIdentifier, Roster};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomIdentifierMarker;

impl IdentifierMarkerName for RoomIdentifierMarker {
    const NAME: &'static str = "RoomId";
}

pub type RoomIdentifier = Identifier<u32, RoomIdentifierMarker>;

/// Who may ever be assigned to a room. `Anyone` places no restriction;
/// `Restricted` names the full set of admissible persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Anyone,
    Restricted(BTreeSet<PersonIdentifier>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomIdentifier,
    eligibility: Eligibility,
}

impl Room {
    /// A room any person may be assigned to.
    #[inline]
    pub fn open(id: RoomIdentifier) -> Self {
        Self {
            id,
            eligibility: Eligibility::Anyone,
        }
    }

    /// A room only the listed persons may ever be assigned to.
    #[inline]
    pub fn restricted<I>(id: RoomIdentifier, persons: I) -> Self
    where
        I: IntoIterator<Item = PersonIdentifier>,
    {
        Self {
            id,
            eligibility: Eligibility::Restricted(persons.into_iter().collect()),
        }
    }

    #[inline]
    pub fn id(&self) -> RoomIdentifier {
        self.id
    }

    #[inline]
    pub fn eligibility(&self) -> &Eligibility {
        &self.eligibility
    }

    #[inline]
    pub fn is_restricted(&self) -> bool {
        matches!(self.eligibility, Eligibility::Restricted(_))
    }

    #[inline]
    pub fn admits(&self, person: PersonIdentifier) -> bool {
        match &self.eligibility {
            Eligibility::Anyone => true,
            Eligibility::Restricted(persons) => persons.contains(&person),
        }
    }

    /// Iterates the persons of `roster` this room admits, in id order.
    pub fn eligible_persons<'a>(
        &'a self,
        roster: &'a Roster,
    ) -> impl Iterator<Item = PersonIdentifier> + 'a {
        roster.iter().filter(move |p| self.admits(*p))
    }
}

/// Id-ordered room container. Ordered iteration keeps everything derived
/// from the rooms (constraint emission, variable layout) reproducible.
#[repr(transparent)]
#[derive(Debug, Clone, Default)]
pub struct RoomContainer(BTreeMap<RoomIdentifier, Room>);

impl RoomContainer {
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[inline]
    pub fn insert(&mut self, room: Room) -> Option<Room> {
        self.0.insert(room.id(), room)
    }

    #[inline]
    pub fn get(&self, id: RoomIdentifier) -> Option<&Room> {
        self.0.get(&id)
    }

    #[inline]
    pub fn contains_id(&self, id: RoomIdentifier) -> bool {
        self.0.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.0.values()
    }

    #[inline]
    pub fn iter_ids(&self) -> impl Iterator<Item = RoomIdentifier> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<Room> for RoomContainer {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        let mut container = Self::new();
        for room in iter {
            container.insert(room);
        }
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn rid(n: u32) -> RoomIdentifier {
        RoomIdentifier::new(n)
    }

    #[inline]
    fn pid(n: u32) -> PersonIdentifier {
        PersonIdentifier::new(n)
    }

    #[test]
    fn test_open_room_admits_everyone() {
        let room = Room::open(rid(0));
        assert!(room.admits(pid(0)));
        assert!(room.admits(pid(41)));
        assert!(!room.is_restricted());
    }

    #[test]
    fn test_restricted_room_admits_only_listed() {
        let room = Room::restricted(rid(4), [pid(0), pid(1)]);
        assert!(room.admits(pid(1)));
        assert!(!room.admits(pid(2)));
        assert!(room.is_restricted());
    }

    #[test]
    fn test_eligible_persons_intersects_roster() {
        let roster = Roster::new(3);
        let room = Room::restricted(rid(1), [pid(2), pid(7)]);
        let eligible: Vec<PersonIdentifier> = room.eligible_persons(&roster).collect();
        assert_eq!(eligible, vec![pid(2)]);
    }

    #[test]
    fn test_container_iterates_in_id_order() {
        let mut rooms = RoomContainer::new();
        rooms.insert(Room::open(rid(2)));
        rooms.insert(Room::open(rid(0)));
        rooms.insert(Room::open(rid(1)));
        let ids: Vec<u32> = rooms.iter_ids().map(|id| id.into_inner()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_container_insert_replaces_same_id() {
        let mut rooms = RoomContainer::new();
        rooms.insert(Room::open(rid(0)));
        let previous = rooms.insert(Room::restricted(rid(0), [pid(1)]));
        assert!(previous.is_some());
        assert_eq!(rooms.len(), 1);
        assert!(rooms.get(rid(0)).is_some_and(Room::is_restricted));
    }
}
