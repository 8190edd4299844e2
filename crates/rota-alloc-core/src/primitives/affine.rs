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

use num_traits::{CheckedAdd, CheckedSub, Zero};
use std::ops::{Add, AddAssign, Sub};

pub trait MarkerName {
    const NAME_POINT: &'static str;
    const NAME_DELTA: &'static str;
}

/// An absolute position on a marker-tagged axis. Points of different
/// markers do not mix, and a `Point` can only be shifted by a `Delta`
/// of the same marker.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T, U>(T, core::marker::PhantomData<U>);

impl<T, U> Point<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Point(value, core::marker::PhantomData)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Point::new(T::zero())
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn checked_add(self, d: Delta<T, U>) -> Option<Self>
    where
        T: CheckedAdd,
    {
        self.0.checked_add(&d.0).map(Point::new)
    }

    #[inline]
    pub fn checked_sub(self, d: Delta<T, U>) -> Option<Self>
    where
        T: CheckedSub,
    {
        self.0.checked_sub(&d.0).map(Point::new)
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Point<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME_POINT, self.0)
    }
}

impl<T, U> Default for Point<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Point::new(T::zero())
    }
}

impl<T, U> Add<Delta<T, U>> for Point<T, U>
where
    T: CheckedAdd,
{
    type Output = Point<T, U>;

    #[inline]
    fn add(self, rhs: Delta<T, U>) -> Self::Output {
        Point::new(self.0.checked_add(&rhs.0).expect("error in Point + Delta"))
    }
}

impl<T, U> AddAssign<Delta<T, U>> for Point<T, U>
where
    T: CheckedAdd,
{
    fn add_assign(&mut self, rhs: Delta<T, U>) {
        self.0 = self.0.checked_add(&rhs.0).expect("error in Point += Delta");
    }
}

impl<T, U> Sub<Point<T, U>> for Point<T, U>
where
    T: CheckedSub,
{
    type Output = Delta<T, U>;

    #[inline]
    fn sub(self, rhs: Point<T, U>) -> Self::Output {
        Delta::new(self.0.checked_sub(&rhs.0).expect("error in Point - Point"))
    }
}

/// A displacement between two [`Point`]s of the same marker.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delta<T, U>(T, core::marker::PhantomData<U>);

impl<T, U> Delta<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Delta(value, core::marker::PhantomData)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Delta::new(T::zero())
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool
    where
        T: Zero,
    {
        self.0.is_zero()
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Delta<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME_DELTA, self.0)
    }
}

impl<T, U> Default for Delta<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Delta::new(T::zero())
    }
}

impl<T, U> Add<Delta<T, U>> for Delta<T, U>
where
    T: CheckedAdd,
{
    type Output = Delta<T, U>;

    #[inline]
    fn add(self, rhs: Delta<T, U>) -> Self::Output {
        Delta::new(self.0.checked_add(&rhs.0).expect("error in Delta + Delta"))
    }
}
