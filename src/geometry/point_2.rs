// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::numeric::scalar::{RefArith, Scalar};

#[derive(Debug, Clone)]
pub struct Point2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Lower y-coordinate than `other`, beyond the scalar's tolerance.
    pub fn is_below(&self, other: &Self) -> bool
    where
        for<'a> &'a T: RefArith<T>,
    {
        (&self.y - &other.y).is_negative()
    }

    /// Higher or level y-coordinate than `other`.
    pub fn is_above_or_level(&self, other: &Self) -> bool
    where
        for<'a> &'a T: RefArith<T>,
    {
        (&self.y - &other.y).is_positive_or_zero()
    }

    pub fn midpoint(&self, other: &Self) -> Self
    where
        for<'a> &'a T: RefArith<T>,
    {
        let half = T::from_num_den(1, 2);
        Point2 {
            x: &(&self.x + &other.x) * &half,
            y: &(&self.y + &other.y) * &half,
        }
    }

    pub fn distance_squared_to(&self, other: &Self) -> T
    where
        for<'a> &'a T: RefArith<T>,
    {
        let dx = &self.x - &other.x;
        let dy = &self.y - &other.y;
        &(&dx * &dx) + &(&dy * &dy)
    }
}

impl<T> Hash for Point2<T>
where
    T: Scalar,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T> PartialEq for Point2<T>
where
    T: Scalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T> Eq for Point2<T> where T: Scalar {}

/// Lexicographic: x first, then y.
impl<T> Ord for Point2<T>
where
    T: Scalar,
{
    fn cmp(&self, other: &Self) -> Ordering {
        T::cmp_ref(&self.x, &other.x).then_with(|| T::cmp_ref(&self.y, &other.y))
    }
}

impl<T> PartialOrd for Point2<T>
where
    T: Scalar,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
