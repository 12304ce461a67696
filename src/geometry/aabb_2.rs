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

use crate::{
    geometry::{point_2::Point2, segment::Segment2},
    numeric::scalar::{RefArith, Scalar},
};

/// Axis-aligned box in the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb2<T: Scalar> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Scalar> Aabb2<T> {
    pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
        Aabb2 { min, max }
    }

    /// Smallest box containing every point, `None` for an empty input.
    pub fn from_points<'p, I>(points: I) -> Option<Self>
    where
        T: 'p,
        I: IntoIterator<Item = &'p Point2<T>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first.clone();
        let mut max = first.clone();
        for p in iter {
            if T::cmp_ref(&p.x, &min.x) == Ordering::Less {
                min.x = p.x.clone();
            }
            if T::cmp_ref(&p.y, &min.y) == Ordering::Less {
                min.y = p.y.clone();
            }
            if T::cmp_ref(&p.x, &max.x) == Ordering::Greater {
                max.x = p.x.clone();
            }
            if T::cmp_ref(&p.y, &max.y) == Ordering::Greater {
                max.y = p.y.clone();
            }
        }
        Some(Aabb2 { min, max })
    }

    /// Grows the box about its center so each side is `factor` times as long.
    pub fn scaled(&self, factor: &T) -> Self
    where
        for<'a> &'a T: RefArith<T>,
    {
        let half = &(factor - &T::one()) / &T::from(2i32);
        let dx = &(&self.max.x - &self.min.x) * &half;
        let dy = &(&self.max.y - &self.min.y) * &half;
        Aabb2 {
            min: Point2 {
                x: &self.min.x - &dx,
                y: &self.min.y - &dy,
            },
            max: Point2 {
                x: &self.max.x + &dx,
                y: &self.max.y + &dy,
            },
        }
    }

    pub fn contains(&self, p: &Point2<T>) -> bool {
        T::cmp_ref(&self.min.x, &p.x).is_le()
            && T::cmp_ref(&p.x, &self.max.x).is_le()
            && T::cmp_ref(&self.min.y, &p.y).is_le()
            && T::cmp_ref(&p.y, &self.max.y).is_le()
    }

    /// East, north, west and south walls, in that order.
    pub fn walls(&self) -> [Segment2<T>; 4] {
        let sw = self.min.clone();
        let ne = self.max.clone();
        let se = Point2 {
            x: self.max.x.clone(),
            y: self.min.y.clone(),
        };
        let nw = Point2 {
            x: self.min.x.clone(),
            y: self.max.y.clone(),
        };
        [
            Segment2::new(se.clone(), ne.clone()),
            Segment2::new(ne, nw.clone()),
            Segment2::new(nw, sw.clone()),
            Segment2::new(sw, se),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::LawsonF64;

    fn p(x: f64, y: f64) -> Point2<LawsonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn box_around_points() {
        let pts = [p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)];
        let bb = Aabb2::from_points(pts.iter()).unwrap();
        assert_eq!(bb, Aabb2::new(p(-2.0, -1.0), p(4.0, 5.0)));
        assert!(bb.contains(&p(0.0, 0.0)));
        assert!(!bb.contains(&p(0.0, 6.0)));
        assert!(Aabb2::<LawsonF64>::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn scaling_pads_each_side() {
        let bb = Aabb2::new(p(0.0, 0.0), p(10.0, 20.0)).scaled(&LawsonF64(1.2));
        assert!((bb.min.x.0 + 1.0).abs() < 1e-9);
        assert!((bb.min.y.0 + 2.0).abs() < 1e-9);
        assert!((bb.max.x.0 - 11.0).abs() < 1e-9);
        assert!((bb.max.y.0 - 22.0).abs() < 1e-9);
        assert_eq!(bb.walls().len(), 4);
    }
}
