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

use crate::model::var::{AssignmentKey, IndicatorKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnallocatedVariableError {
    key: AssignmentKey,
}

impl UnallocatedVariableError {
    pub fn new(key: AssignmentKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> AssignmentKey {
        self.key
    }
}

impl std::fmt::Display for UnallocatedVariableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The encoding referenced assignment {} outside the allocated variable space",
            self.key
        )
    }
}

impl std::error::Error for UnallocatedVariableError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingPenaltyRuleError {
    key: IndicatorKey,
}

impl MissingPenaltyRuleError {
    pub fn new(key: IndicatorKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> IndicatorKey {
        self.key
    }
}

impl std::fmt::Display for MissingPenaltyRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Indicator {} has no penalty rule backing its stride",
            self.key
        )
    }
}

impl std::error::Error for MissingPenaltyRuleError {}

/// An internal consistency failure while encoding a validated scenario.
/// Unreachable for scenarios that passed construction; surfacing one means
/// the encoder itself is defective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelBuildError {
    UnallocatedVariable(UnallocatedVariableError),
    MissingPenaltyRule(MissingPenaltyRuleError),
}

impl std::fmt::Display for ModelBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelBuildError::UnallocatedVariable(e) => write!(f, "{}", e),
            ModelBuildError::MissingPenaltyRule(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ModelBuildError {}

impl From<UnallocatedVariableError> for ModelBuildError {
    fn from(err: UnallocatedVariableError) -> Self {
        ModelBuildError::UnallocatedVariable(err)
    }
}

impl From<MissingPenaltyRuleError> for ModelBuildError {
    fn from(err: MissingPenaltyRuleError) -> Self {
        ModelBuildError::MissingPenaltyRule(err)
    }
}
