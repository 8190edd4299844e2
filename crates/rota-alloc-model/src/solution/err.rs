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
use rota_alloc_core::prelude::Week;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValuationSizeError {
    expected: usize,
    actual: usize,
}

impl ValuationSizeError {
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl std::fmt::Display for ValuationSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The valuation covers {} variables, but the scenario needs at least {}",
            self.actual, self.expected
        )
    }
}

impl std::error::Error for ValuationSizeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomCoverageError {
    week: Week,
    room: RoomIdentifier,
    assigned: usize,
}

impl RoomCoverageError {
    pub fn new(week: Week, room: RoomIdentifier, assigned: usize) -> Self {
        Self {
            week,
            room,
            assigned,
        }
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn assigned(&self) -> usize {
        self.assigned
    }
}

impl std::fmt::Display for RoomCoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} has {} assigned persons in {}, expected exactly one",
            self.room, self.assigned, self.week
        )
    }
}

impl std::error::Error for RoomCoverageError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonCoverageError {
    week: Week,
    person: PersonIdentifier,
    assigned: usize,
}

impl PersonCoverageError {
    pub fn new(week: Week, person: PersonIdentifier, assigned: usize) -> Self {
        Self {
            week,
            person,
            assigned,
        }
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn person(&self) -> PersonIdentifier {
        self.person
    }

    pub fn assigned(&self) -> usize {
        self.assigned
    }
}

impl std::fmt::Display for PersonCoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} occupies {} rooms in {}, expected exactly one",
            self.person, self.assigned, self.week
        )
    }
}

impl std::error::Error for PersonCoverageError {}

/// The supplied valuation contradicts the coverage invariants the model
/// guarantees for any accepted solution. This never reflects bad user
/// input; it means the backend (or the encoding) is defective, so the
/// report is refused rather than silently skewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    ValuationSize(ValuationSizeError),
    RoomCoverage(RoomCoverageError),
    PersonCoverage(PersonCoverageError),
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::ValuationSize(e) => write!(f, "{}", e),
            ProjectionError::RoomCoverage(e) => write!(f, "{}", e),
            ProjectionError::PersonCoverage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProjectionError {}

impl From<ValuationSizeError> for ProjectionError {
    fn from(err: ValuationSizeError) -> Self {
        ProjectionError::ValuationSize(err)
    }
}

impl From<RoomCoverageError> for ProjectionError {
    fn from(err: RoomCoverageError) -> Self {
        ProjectionError::RoomCoverage(err)
    }
}

impl From<PersonCoverageError> for ProjectionError {
    fn from(err: PersonCoverageError) -> Self {
        ProjectionError::PersonCoverage(err)
    }
}
