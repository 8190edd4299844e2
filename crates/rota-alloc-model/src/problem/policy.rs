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

use rota_alloc_core::prelude::{Cost, Stride};
use std::collections::BTreeMap;

/// How a repeat of the same `(person, room)` pair at a given stride is
/// treated: banned outright, or admitted against a (negative) objective
/// weight per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrideRule {
    Forbid,
    Penalize(Cost),
}

impl StrideRule {
    #[inline]
    pub fn is_forbid(&self) -> bool {
        matches!(self, StrideRule::Forbid)
    }

    #[inline]
    pub fn weight(&self) -> Option<Cost> {
        match self {
            StrideRule::Forbid => None,
            StrideRule::Penalize(w) => Some(*w),
        }
    }
}

/// Per-stride repeat rules. A stride without a rule is unconstrained and
/// unpenalized. Hard and soft rules never overlap: a stride is either
/// forbidden or penalized, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatPolicy {
    rules: BTreeMap<Stride, StrideRule>,
}

impl RepeatPolicy {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The original household scheme: strides `1..=forbidden_through` are
    /// banned outright, every longer stride `s < cycle_length` costs
    /// `-|anchor - s|` per occurrence. The anchor is the stride at which a
    /// repeat is considered harmless; penalties grow toward both ends.
    pub fn distance_decayed(cycle_length: u32, anchor: u32, forbidden_through: u32) -> Self {
        let mut rules = BTreeMap::new();
        for s in 1..cycle_length {
            let rule = if s <= forbidden_through {
                StrideRule::Forbid
            } else {
                let weight = -(i64::from(anchor) - i64::from(s)).abs();
                StrideRule::Penalize(weight)
            };
            rules.insert(Stride::new(s), rule);
        }
        Self { rules }
    }

    #[inline]
    pub fn with_rule(mut self, stride: Stride, rule: StrideRule) -> Self {
        self.rules.insert(stride, rule);
        self
    }

    #[inline]
    pub fn set_rule(&mut self, stride: Stride, rule: StrideRule) -> &mut Self {
        self.rules.insert(stride, rule);
        self
    }

    #[inline]
    pub fn rule(&self, stride: Stride) -> Option<StrideRule> {
        self.rules.get(&stride).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in ascending stride order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Stride, StrideRule)> + '_ {
        self.rules.iter().map(|(s, r)| (*s, *r))
    }

    #[inline]
    pub fn iter_forbidden(&self) -> impl Iterator<Item = Stride> + '_ {
        self.iter()
            .filter_map(|(s, r)| r.is_forbid().then_some(s))
    }

    #[inline]
    pub fn iter_penalized(&self) -> impl Iterator<Item = (Stride, Cost)> + '_ {
        self.iter().filter_map(|(s, r)| r.weight().map(|w| (s, w)))
    }
}
