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
use rota_alloc_core::prelude::Stride;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyRoomSetError;

impl std::fmt::Display for EmptyRoomSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The scenario has no rooms.")
    }
}

impl std::error::Error for EmptyRoomSetError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyRosterError;

impl std::fmt::Display for EmptyRosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The scenario has no persons.")
    }
}

impl std::error::Error for EmptyRosterError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroCycleError;

impl std::fmt::Display for ZeroCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The cycle length must be at least one week.")
    }
}

impl std::error::Error for ZeroCycleError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RosterSizeMismatchError {
    room_count: usize,
    person_count: usize,
}

impl RosterSizeMismatchError {
    pub fn new(room_count: usize, person_count: usize) -> Self {
        Self {
            room_count,
            person_count,
        }
    }

    pub fn room_count(&self) -> usize {
        self.room_count
    }

    pub fn person_count(&self) -> usize {
        self.person_count
    }
}

impl std::fmt::Display for RosterSizeMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Weekly coverage needs as many persons as rooms, but there are {} rooms and {} persons",
            self.room_count, self.person_count
        )
    }
}

impl std::error::Error for RosterSizeMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomIdentifierOutOfRangeError {
    id: RoomIdentifier,
    room_count: usize,
}

impl RoomIdentifierOutOfRangeError {
    pub fn new(id: RoomIdentifier, room_count: usize) -> Self {
        Self { id, room_count }
    }

    pub fn id(&self) -> RoomIdentifier {
        self.id
    }

    pub fn room_count(&self) -> usize {
        self.room_count
    }
}

impl std::fmt::Display for RoomIdentifierOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} is outside the dense id range 0..{}",
            self.id, self.room_count
        )
    }
}

impl std::error::Error for RoomIdentifierOutOfRangeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonNotInRosterError {
    room: RoomIdentifier,
    person: PersonIdentifier,
}

impl PersonNotInRosterError {
    pub fn new(room: RoomIdentifier, person: PersonIdentifier) -> Self {
        Self { room, person }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn person(&self) -> PersonIdentifier {
        self.person
    }
}

impl std::fmt::Display for PersonNotInRosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} lists {} as eligible, but that person is not in the roster",
            self.room, self.person
        )
    }
}

impl std::error::Error for PersonNotInRosterError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyEligibilityError {
    room: RoomIdentifier,
}

impl EmptyEligibilityError {
    pub fn new(room: RoomIdentifier) -> Self {
        Self { room }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }
}

impl std::fmt::Display for EmptyEligibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} admits no person from the roster, so it can never be covered",
            self.room
        )
    }
}

impl std::error::Error for EmptyEligibilityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningMissingRoomError {
    room: RoomIdentifier,
}

impl OpeningMissingRoomError {
    pub fn new(room: RoomIdentifier) -> Self {
        Self { room }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }
}

impl std::fmt::Display for OpeningMissingRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The opening assignment leaves room {} uncovered",
            self.room
        )
    }
}

impl std::error::Error for OpeningMissingRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningUnknownRoomError {
    room: RoomIdentifier,
}

impl OpeningUnknownRoomError {
    pub fn new(room: RoomIdentifier) -> Self {
        Self { room }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }
}

impl std::fmt::Display for OpeningUnknownRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The opening assignment names room {}, which does not exist",
            self.room
        )
    }
}

impl std::error::Error for OpeningUnknownRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningUnknownPersonError {
    room: RoomIdentifier,
    person: PersonIdentifier,
}

impl OpeningUnknownPersonError {
    pub fn new(room: RoomIdentifier, person: PersonIdentifier) -> Self {
        Self { room, person }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn person(&self) -> PersonIdentifier {
        self.person
    }
}

impl std::fmt::Display for OpeningUnknownPersonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The opening assignment places {} in room {}, but that person is not in the roster",
            self.person, self.room
        )
    }
}

impl std::error::Error for OpeningUnknownPersonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningDuplicatePersonError {
    person: PersonIdentifier,
}

impl OpeningDuplicatePersonError {
    pub fn new(person: PersonIdentifier) -> Self {
        Self { person }
    }

    pub fn person(&self) -> PersonIdentifier {
        self.person
    }
}

impl std::fmt::Display for OpeningDuplicatePersonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The opening assignment places {} in more than one room",
            self.person
        )
    }
}

impl std::error::Error for OpeningDuplicatePersonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningIneligiblePersonError {
    room: RoomIdentifier,
    person: PersonIdentifier,
}

impl OpeningIneligiblePersonError {
    pub fn new(room: RoomIdentifier, person: PersonIdentifier) -> Self {
        Self { room, person }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn person(&self) -> PersonIdentifier {
        self.person
    }
}

impl std::fmt::Display for OpeningIneligiblePersonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The opening assignment places {} in room {}, which does not admit that person",
            self.person, self.room
        )
    }
}

impl std::error::Error for OpeningIneligiblePersonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidStrideError {
    stride: Stride,
    cycle_length: u32,
}

impl InvalidStrideError {
    pub fn new(stride: Stride, cycle_length: u32) -> Self {
        Self {
            stride,
            cycle_length,
        }
    }

    pub fn stride(&self) -> Stride {
        self.stride
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }
}

impl std::fmt::Display for InvalidStrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is outside the meaningful range 1..{} for a {}-week cycle",
            self.stride, self.cycle_length, self.cycle_length
        )
    }
}

impl std::error::Error for InvalidStrideError {}

/// Everything that can be wrong with a scenario. Raised at construction,
/// before any model is built or any solver is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    EmptyRoomSet(EmptyRoomSetError),
    EmptyRoster(EmptyRosterError),
    ZeroCycle(ZeroCycleError),
    RosterSizeMismatch(RosterSizeMismatchError),
    RoomIdentifierOutOfRange(RoomIdentifierOutOfRangeError),
    PersonNotInRoster(PersonNotInRosterError),
    EmptyEligibility(EmptyEligibilityError),
    OpeningMissingRoom(OpeningMissingRoomError),
    OpeningUnknownRoom(OpeningUnknownRoomError),
    OpeningUnknownPerson(OpeningUnknownPersonError),
    OpeningDuplicatePerson(OpeningDuplicatePersonError),
    OpeningIneligiblePerson(OpeningIneligiblePersonError),
    InvalidStride(InvalidStrideError),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::EmptyRoomSet(e) => write!(f, "{}", e),
            ConfigurationError::EmptyRoster(e) => write!(f, "{}", e),
            ConfigurationError::ZeroCycle(e) => write!(f, "{}", e),
            ConfigurationError::RosterSizeMismatch(e) => write!(f, "{}", e),
            ConfigurationError::RoomIdentifierOutOfRange(e) => write!(f, "{}", e),
            ConfigurationError::PersonNotInRoster(e) => write!(f, "{}", e),
            ConfigurationError::EmptyEligibility(e) => write!(f, "{}", e),
            ConfigurationError::OpeningMissingRoom(e) => write!(f, "{}", e),
            ConfigurationError::OpeningUnknownRoom(e) => write!(f, "{}", e),
            ConfigurationError::OpeningUnknownPerson(e) => write!(f, "{}", e),
            ConfigurationError::OpeningDuplicatePerson(e) => write!(f, "{}", e),
            ConfigurationError::OpeningIneligiblePerson(e) => write!(f, "{}", e),
            ConfigurationError::InvalidStride(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<EmptyRoomSetError> for ConfigurationError {
    fn from(err: EmptyRoomSetError) -> Self {
        ConfigurationError::EmptyRoomSet(err)
    }
}

impl From<EmptyRosterError> for ConfigurationError {
    fn from(err: EmptyRosterError) -> Self {
        ConfigurationError::EmptyRoster(err)
    }
}

impl From<ZeroCycleError> for ConfigurationError {
    fn from(err: ZeroCycleError) -> Self {
        ConfigurationError::ZeroCycle(err)
    }
}

impl From<RosterSizeMismatchError> for ConfigurationError {
    fn from(err: RosterSizeMismatchError) -> Self {
        ConfigurationError::RosterSizeMismatch(err)
    }
}

impl From<RoomIdentifierOutOfRangeError> for ConfigurationError {
    fn from(err: RoomIdentifierOutOfRangeError) -> Self {
        ConfigurationError::RoomIdentifierOutOfRange(err)
    }
}

impl From<PersonNotInRosterError> for ConfigurationError {
    fn from(err: PersonNotInRosterError) -> Self {
        ConfigurationError::PersonNotInRoster(err)
    }
}

impl From<EmptyEligibilityError> for ConfigurationError {
    fn from(err: EmptyEligibilityError) -> Self {
        ConfigurationError::EmptyEligibility(err)
    }
}

impl From<OpeningMissingRoomError> for ConfigurationError {
    fn from(err: OpeningMissingRoomError) -> Self {
        ConfigurationError::OpeningMissingRoom(err)
    }
}

impl From<OpeningUnknownRoomError> for ConfigurationError {
    fn from(err: OpeningUnknownRoomError) -> Self {
        ConfigurationError::OpeningUnknownRoom(err)
    }
}

impl From<OpeningUnknownPersonError> for ConfigurationError {
    fn from(err: OpeningUnknownPersonError) -> Self {
        ConfigurationError::OpeningUnknownPerson(err)
    }
}

impl From<OpeningDuplicatePersonError> for ConfigurationError {
    fn from(err: OpeningDuplicatePersonError) -> Self {
        ConfigurationError::OpeningDuplicatePerson(err)
    }
}

impl From<OpeningIneligiblePersonError> for ConfigurationError {
    fn from(err: OpeningIneligiblePersonError) -> Self {
        ConfigurationError::OpeningIneligiblePerson(err)
    }
}

impl From<InvalidStrideError> for ConfigurationError {
    fn from(err: InvalidStrideError) -> Self {
        ConfigurationError::InvalidStride(err)
    }
}
