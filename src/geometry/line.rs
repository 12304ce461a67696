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
    geometry::{point_2::Point2, segment::Segment2},
    kernel::orient2d,
    numeric::scalar::{RefArith, Scalar},
};

/// Infinite line through two distinct points, directed from `a` to `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2<T: Scalar> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Scalar> Line2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    /// Perpendicular bisector of `p q`, directed so that `p` lies on its left.
    pub fn bisector(p: &Point2<T>, q: &Point2<T>) -> Self
    where
        for<'a> &'a T: RefArith<T>,
    {
        let mid = p.midpoint(q);
        let dx = &q.x - &p.x;
        let dy = &q.y - &p.y;
        let through = Point2 {
            x: &mid.x - &dy,
            y: &mid.y + &dx,
        };
        Line2::new(mid, through)
    }

    /// Point where this line crosses `seg`, if any. A segment lying on the
    /// line has no single crossing and yields `None`.
    pub fn intersect_segment(&self, seg: &Segment2<T>) -> Option<Point2<T>>
    where
        for<'a> &'a T: RefArith<T>,
    {
        let (l, r) = (seg.left(), seg.right());
        let d1 = orient2d(&self.a, &self.b, l);
        let d2 = orient2d(&self.a, &self.b, r);

        match (d1.sign(), d2.sign()) {
            (0, 0) => None,
            (0, _) => Some(l.clone()),
            (_, 0) => Some(r.clone()),
            (s1, s2) if s1 == s2 => None,
            _ => {
                let t = &d1 / &(&d1 - &d2);
                Some(Point2 {
                    x: &l.x + &(&t * &(&r.x - &l.x)),
                    y: &l.y + &(&t * &(&r.y - &l.y)),
                })
            }
        }
    }

    /// Signed side of `p`: positive on the left.
    pub fn side(&self, p: &Point2<T>) -> T
    where
        for<'a> &'a T: RefArith<T>,
    {
        orient2d(&self.a, &self.b, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{numeric::LawsonF64, operations::Zero};

    fn p(x: f64, y: f64) -> Point2<LawsonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn line_crosses_segment() {
        let line = Line2::new(p(0.0, 0.0), p(1.0, 1.0));
        let seg = Segment2::new(p(0.0, 2.0), p(2.0, 0.0));
        assert_eq!(line.intersect_segment(&seg), Some(p(1.0, 1.0)));

        let far = Segment2::new(p(5.0, 0.0), p(6.0, -1.0));
        assert_eq!(line.intersect_segment(&far), None);

        let on_line = Segment2::new(p(2.0, 2.0), p(3.0, 3.0));
        assert_eq!(line.intersect_segment(&on_line), None);
    }

    #[test]
    fn bisector_is_equidistant() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 0.0);
        let bis = Line2::bisector(&a, &b);
        assert_eq!(bis.a, p(2.0, 0.0));
        assert_eq!(bis.b.x, LawsonF64(2.0));
        assert!(bis.side(&b).is_negative());
        assert!(bis.side(&a).is_positive());
    }
}
