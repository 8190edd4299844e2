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

use crate::model::var::VariableId;

/// A total assignment of truth values to a model's variable block. The
/// solver adapter always returns a complete valuation; partial results
/// never escape the backend boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    values: Vec<bool>,
}

impl Valuation {
    /// An all-false valuation over `len` variables.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self {
            values: vec![false; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sets a variable's value. Out-of-range ids are ignored rather than
    /// grown into: the valuation's length is fixed by the model it
    /// answers for.
    #[inline]
    pub fn set(&mut self, var: VariableId, value: bool) {
        if let Some(slot) = self.values.get_mut(var.index()) {
            *slot = value;
        }
    }

    #[inline]
    pub fn value(&self, var: VariableId) -> Option<bool> {
        self.values.get(var.index()).copied()
    }

    #[inline]
    pub fn is_true(&self, var: VariableId) -> bool {
        self.value(var).unwrap_or(false)
    }

    #[inline]
    pub fn count_true(&self) -> usize {
        self.values.iter().filter(|v| **v).count()
    }
}
