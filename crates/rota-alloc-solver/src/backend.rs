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

use crate::err::SolveError;
use crate::outcome::SolveOutcome;
use rota_alloc_model::prelude::Model;
use std::time::Duration;

/// Advisory stopping conditions, passed through to the backend. Limits
/// only trade objective quality for time; any outcome returned under a
/// limit still satisfies every hard constraint. A backend without a
/// matching control may ignore a limit and solve to proven optimality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveLimits {
    time_budget: Option<Duration>,
    solution_cap: Option<u64>,
}

impl SolveLimits {
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[inline]
    pub fn with_solution_cap(mut self, cap: u64) -> Self {
        self.solution_cap = Some(cap);
        self
    }

    #[inline]
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    #[inline]
    pub fn solution_cap(&self) -> Option<u64> {
        self.solution_cap
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.time_budget.is_none() && self.solution_cap.is_none()
    }
}

/// The capability the scheduling core requires from an optimizer:
/// submit a model, receive one of the three [`SolveOutcome`]s. Backends
/// are interchangeable; swapping one never touches the encoding or the
/// projection.
pub trait SolverBackend {
    #[inline]
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn solve(&self, model: &Model, limits: &SolveLimits) -> Result<SolveOutcome, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_default_to_unbounded() {
        let limits = SolveLimits::none();
        assert!(limits.is_unbounded());
        assert_eq!(limits.time_budget(), None);
        assert_eq!(limits.solution_cap(), None);
    }

    #[test]
    fn test_limits_accumulate() {
        let limits = SolveLimits::none()
            .with_time_budget(Duration::from_secs(10))
            .with_solution_cap(5);
        assert!(!limits.is_unbounded());
        assert_eq!(limits.time_budget(), Some(Duration::from_secs(10)));
        assert_eq!(limits.solution_cap(), Some(5));
    }
}
