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

//! The boundary to the actual optimizer. [`backend::SolverBackend`] is the
//! capability the core needs: submit an encoded model, get back an optimal
//! assignment, a budget-limited feasible one, or a proof-of-none.
//! [`milp::MilpBackend`] is the bundled binding, a `good_lp` mixed integer
//! program.

pub mod backend;
pub mod err;
pub mod milp;
pub mod outcome;

pub mod prelude {
    pub use crate::backend::{SolveLimits, SolverBackend};
    pub use crate::err::SolveError;
    pub use crate::milp::MilpBackend;
    pub use crate::outcome::SolveOutcome;
}
