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

/// A hard rule over boolean variables, neutral with respect to the solving
/// backend. The vocabulary is exactly what the scheduling encoding needs;
/// a backend translates each case into its own constraint language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Exactly one of the listed variables is true: at least one, and no
    /// two simultaneously.
    ExactlyOne(Vec<VariableId>),
    /// The variable is pinned true.
    ForceTrue(VariableId),
    /// The variable is pinned false.
    ForceFalse(VariableId),
    /// The two variables are never both true. Weaker than `ExactlyOne`
    /// over the pair: both false is allowed.
    NotBoth(VariableId, VariableId),
    /// `indicator` is true exactly when `first` and `second` are both
    /// true. The full biconditional keeps the indicator honest in every
    /// valuation, not only in objective-optimal ones.
    IndicatorOfPair {
        indicator: VariableId,
        first: VariableId,
        second: VariableId,
    },
}

impl Constraint {
    /// All variables the constraint mentions.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        let (slice, pair): (&[VariableId], [Option<VariableId>; 3]) = match self {
            Constraint::ExactlyOne(vars) => (vars.as_slice(), [None, None, None]),
            Constraint::ForceTrue(v) | Constraint::ForceFalse(v) => {
                (&[], [Some(*v), None, None])
            }
            Constraint::NotBoth(a, b) => (&[], [Some(*a), Some(*b), None]),
            Constraint::IndicatorOfPair {
                indicator,
                first,
                second,
            } => (&[], [Some(*indicator), Some(*first), Some(*second)]),
        };
        slice.iter().copied().chain(pair.into_iter().flatten())
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::ExactlyOne(vars) => {
                write!(f, "exactly-one(")?;
                for (i, v) in vars.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
            Constraint::ForceTrue(v) => write!(f, "{} = 1", v),
            Constraint::ForceFalse(v) => write!(f, "{} = 0", v),
            Constraint::NotBoth(a, b) => write!(f, "not-both({}, {})", a, b),
            Constraint::IndicatorOfPair {
                indicator,
                first,
                second,
            } => write!(f, "{} <-> {} and {}", indicator, first, second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn v(n: usize) -> VariableId {
        VariableId::new(n)
    }

    #[test]
    fn test_variables_of_exactly_one() {
        let c = Constraint::ExactlyOne(vec![v(0), v(2), v(4)]);
        let vars: Vec<usize> = c.variables().map(|x| x.index()).collect();
        assert_eq!(vars, vec![0, 2, 4]);
    }

    #[test]
    fn test_variables_of_indicator() {
        let c = Constraint::IndicatorOfPair {
            indicator: v(9),
            first: v(1),
            second: v(2),
        };
        let vars: Vec<usize> = c.variables().map(|x| x.index()).collect();
        assert_eq!(vars, vec![9, 1, 2]);
    }

    #[test]
    fn test_display_is_readable() {
        assert_eq!(Constraint::ForceTrue(v(3)).to_string(), "x3 = 1");
        assert_eq!(
            Constraint::NotBoth(v(1), v(2)).to_string(),
            "not-both(x1, x2)"
        );
    }
}
