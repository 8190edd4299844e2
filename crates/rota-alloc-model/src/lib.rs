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

//! Problem definition and encoding for rotating room-duty schedules.
//!
//! A [`problem::scenario::Scenario`] describes the immutable instance:
//! rooms (with optional eligibility restrictions), the person roster, the
//! cycle length, the pinned opening week, and the per-stride repeat policy.
//! [`model::builder::Model`] turns a scenario into a backend-neutral set of
//! boolean variables, hard constraints, and a maximize objective, and
//! [`solution::report::project`] turns a solved valuation back into a
//! human-facing schedule report.

pub mod common;
pub mod model;
pub mod problem;
pub mod solution;

pub mod prelude {
    pub use crate::common::{Identifier, IdentifierMarkerName};
    pub use crate::model::builder::Model;
    pub use crate::model::constraint::Constraint;
    pub use crate::model::err::ModelBuildError;
    pub use crate::model::objective::{Objective, ObjectiveTerm};
    pub use crate::model::var::{AssignmentKey, IndicatorKey, VariableId, VariableSpace};
    pub use crate::problem::builder::ScenarioBuilder;
    pub use crate::problem::err::ConfigurationError;
    pub use crate::problem::person::{PersonIdentifier, Roster};
    pub use crate::problem::policy::{RepeatPolicy, StrideRule};
    pub use crate::problem::room::{Eligibility, Room, RoomContainer, RoomIdentifier};
    pub use crate::problem::scenario::Scenario;
    pub use crate::solution::err::ProjectionError;
    pub use crate::solution::report::{project, ScheduleReport};
    pub use crate::solution::valuation::Valuation;
}
