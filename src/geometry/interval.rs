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

use std::cmp::Ordering;

use crate::numeric::scalar::Scalar;

/// Closed range `[left, right]` on the x-axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T: Scalar> {
    pub left: T,
    pub right: T,
}

impl<T: Scalar> Interval<T> {
    pub fn new(left: T, right: T) -> Self {
        debug_assert!(T::cmp_ref(&left, &right) != Ordering::Greater);
        Self { left, right }
    }

    pub fn contains(&self, x: &T) -> bool {
        T::cmp_ref(&self.left, x) != Ordering::Greater
            && T::cmp_ref(x, &self.right) != Ordering::Greater
    }

    /// `other` lies entirely within `self`.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        self.contains(&other.left) && self.contains(&other.right)
    }

    /// The two intervals share at least one point.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        T::cmp_ref(&self.left, &other.right) != Ordering::Greater
            && T::cmp_ref(&other.left, &self.right) != Ordering::Greater
    }

    /// The two intervals share a range of positive length.
    pub fn overlaps_strictly(&self, other: &Interval<T>) -> bool {
        T::cmp_ref(&self.left, &other.right) == Ordering::Less
            && T::cmp_ref(&other.left, &self.right) == Ordering::Less
    }
}
