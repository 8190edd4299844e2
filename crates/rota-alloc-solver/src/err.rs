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

/// The backend failed outright: the optimizer rejected the program or
/// died mid-solve. Distinct from `SolveOutcome::Infeasible`, which is a
/// well-formed answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackendFailureError {
    backend: String,
    message: String,
}

impl BackendFailureError {
    pub fn new(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for BackendFailureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Backend {} failed: {}", self.backend, self.message)
    }
}

impl std::error::Error for BackendFailureError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    BackendFailure(BackendFailureError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::BackendFailure(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<BackendFailureError> for SolveError {
    fn from(err: BackendFailureError) -> Self {
        SolveError::BackendFailure(err)
    }
}
