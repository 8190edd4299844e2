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
    err::ConfigurationError,
    person::{PersonIdentifier, Roster},
    policy::RepeatPolicy,
    room::{Room, RoomContainer, RoomIdentifier},
    scenario::Scenario,
};
use std::collections::{BTreeMap, HashMap};

/// Incremental construction of a [`Scenario`]. Nothing is validated until
/// [`ScenarioBuilder::build`], which hands off to [`Scenario::new`].
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    rooms: HashMap<RoomIdentifier, Room>,
    person_count: u32,
    cycle_length: u32,
    opening: BTreeMap<RoomIdentifier, PersonIdentifier>,
    policy: RepeatPolicy,
}

impl ScenarioBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_rooms<I>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = Room>,
    {
        self.rooms.clear();
        self.rooms.extend(rooms.into_iter().map(|r| (r.id(), r)));
        self
    }

    #[inline]
    pub fn add_room(&mut self, room: Room) -> &mut Self {
        self.rooms.insert(room.id(), room);
        self
    }

    #[inline]
    pub fn with_person_count(mut self, person_count: u32) -> Self {
        self.person_count = person_count;
        self
    }

    #[inline]
    pub fn with_cycle_length(mut self, cycle_length: u32) -> Self {
        self.cycle_length = cycle_length;
        self
    }

    #[inline]
    pub fn with_opening_assignment<I>(mut self, opening: I) -> Self
    where
        I: IntoIterator<Item = (RoomIdentifier, PersonIdentifier)>,
    {
        self.opening.clear();
        self.opening.extend(opening);
        self
    }

    /// Pins `person` to `room` for week zero.
    #[inline]
    pub fn pin(&mut self, room: RoomIdentifier, person: PersonIdentifier) -> &mut Self {
        self.opening.insert(room, person);
        self
    }

    #[inline]
    pub fn with_policy(mut self, policy: RepeatPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<Scenario, ConfigurationError> {
        let rooms: RoomContainer = self.rooms.into_values().collect();
        Scenario::new(
            rooms,
            Roster::new(self.person_count),
            self.cycle_length,
            self.opening,
            self.policy,
        )
    }
}
