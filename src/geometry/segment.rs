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

use crate::{
    geometry::{interval::Interval, line::Line2, point_2::Point2},
    kernel::orient2d,
    numeric::scalar::{RefArith, Scalar},
};

/// Unordered pair of distinct points, stored with `left < right`
/// lexicographically, so `Segment2::new(a, b) == Segment2::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment2<T: Scalar> {
    left: Point2<T>,
    right: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        assert!(a != b, "segment endpoints must be distinct");
        if a < b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    pub fn left(&self) -> &Point2<T> {
        &self.left
    }

    pub fn right(&self) -> &Point2<T> {
        &self.right
    }

    pub fn x_extent(&self) -> Interval<T> {
        Interval::new(self.left.x.clone(), self.right.x.clone())
    }

    pub fn is_vertical(&self) -> bool
    where
        for<'a> &'a T: RefArith<T>,
    {
        (&self.right.x - &self.left.x).is_zero()
    }

    /// `p` lies on the closed segment.
    pub fn contains_point(&self, p: &Point2<T>) -> bool
    where
        for<'a> &'a T: RefArith<T>,
    {
        if !orient2d(&self.left, &self.right, p).is_zero() {
            return false;
        }
        let (lo_y, hi_y) = if T::cmp_ref(&self.left.y, &self.right.y).is_le() {
            (&self.left.y, &self.right.y)
        } else {
            (&self.right.y, &self.left.y)
        };
        (&p.x - &self.left.x).is_positive_or_zero()
            && (&self.right.x - &p.x).is_positive_or_zero()
            && (&p.y - lo_y).is_positive_or_zero()
            && (hi_y - &p.y).is_positive_or_zero()
    }

    /// `p` lies on the segment but is neither endpoint.
    pub fn contains_interior_point(&self, p: &Point2<T>) -> bool
    where
        for<'a> &'a T: RefArith<T>,
    {
        self.contains_point(p) && *p != self.left && *p != self.right
    }

    /// Point of the segment above abscissa `x`. Vertical segments and
    /// abscissas outside the x-extent yield `None`.
    pub fn vertical_intersection(&self, x: &T) -> Option<Point2<T>>
    where
        for<'a> &'a T: RefArith<T>,
    {
        if self.is_vertical() {
            return None;
        }
        let from_left = x - &self.left.x;
        let dx = &self.right.x - &self.left.x;
        if from_left.is_negative() || (&dx - &from_left).is_negative() {
            return None;
        }
        let t = &from_left / &dx;
        let y = &self.left.y + &(&t * &(&self.right.y - &self.left.y));
        Some(Point2 { x: x.clone(), y })
    }

    pub fn intersect_line(&self, line: &Line2<T>) -> Option<Point2<T>>
    where
        for<'a> &'a T: RefArith<T>,
    {
        line.intersect_segment(self)
    }

    pub fn midpoint(&self) -> Point2<T>
    where
        for<'a> &'a T: RefArith<T>,
    {
        self.left.midpoint(&self.right)
    }
}

/// Lexicographic on `(left, right)`.
impl<T: Scalar> Ord for Segment2<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.left
            .cmp(&other.left)
            .then_with(|| self.right.cmp(&other.right))
    }
}

impl<T: Scalar> PartialOrd for Segment2<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
