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

use std::borrow::Borrow;

use crate::{
    geometry::{point_2::Point2, segment::Segment2},
    numeric::scalar::{RefArith, Scalar},
};

/// First target met by an upward vertical ray, and where it was met.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<T: Scalar, K> {
    pub target: K,
    pub point: Point2<T>,
}

impl<T: Scalar, K> Hit<T, K> {
    pub fn map<J>(self, f: impl FnOnce(K) -> J) -> Hit<T, J> {
        Hit {
            target: f(self.target),
            point: self.point,
        }
    }
}

/// Shoots a ray straight up from `p` through `candidates`.
///
/// A candidate containing `p` wins immediately with `p` as the visible
/// point. Otherwise the lowest crossing at or above `p` wins; on equal
/// heights the earlier candidate is kept.
pub fn shoot_up<T, K, S, I>(p: &Point2<T>, candidates: I) -> Option<Hit<T, K>>
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
    S: Borrow<Segment2<T>>,
    I: IntoIterator<Item = (K, S)>,
{
    let mut best: Option<Hit<T, K>> = None;
    for (target, seg) in candidates {
        let seg = seg.borrow();
        if seg.contains_point(p) {
            return Some(Hit {
                target,
                point: p.clone(),
            });
        }
        let Some(q) = seg.vertical_intersection(&p.x) else {
            continue;
        };
        if !q.is_above_or_level(p) {
            continue;
        }
        best = lower(best, Some(Hit { target, point: q }));
    }
    best
}

/// The hit with the strictly smaller y; ties keep `current`.
pub fn lower<T, K>(current: Option<Hit<T, K>>, candidate: Option<Hit<T, K>>) -> Option<Hit<T, K>>
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    match (current, candidate) {
        (Some(cur), Some(cand)) => {
            if cand.point.is_below(&cur.point) {
                Some(cand)
            } else {
                Some(cur)
            }
        }
        (cur, None) => cur,
        (None, cand) => cand,
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
    fn lowest_crossing_above_wins() {
        let segs = vec![
            Segment2::new(p(0.0, 5.0), p(10.0, 5.0)),
            Segment2::new(p(0.0, 2.0), p(10.0, 4.0)),
            Segment2::new(p(0.0, -1.0), p(10.0, -1.0)),
            Segment2::new(p(6.0, 0.0), p(10.0, 1.0)),
        ];
        let hit = shoot_up(&p(5.0, 0.0), segs.iter().enumerate()).unwrap();
        assert_eq!(hit.target, 1);
        assert_eq!(hit.point, p(5.0, 3.0));
    }

    #[test]
    fn containing_segment_is_returned_with_query_point() {
        let segs = vec![
            Segment2::new(p(0.0, 2.0), p(10.0, 2.0)),
            Segment2::new(p(0.0, 0.0), p(10.0, 10.0)),
        ];
        let hit = shoot_up(&p(1.0, 1.0), segs.iter().enumerate()).unwrap();
        assert_eq!(hit.target, 1);
        assert_eq!(hit.point, p(1.0, 1.0));
    }

    #[test]
    fn nothing_above() {
        let segs = [Segment2::new(p(0.0, -2.0), p(10.0, -2.0))];
        assert!(shoot_up(&p(5.0, 0.0), segs.iter().map(|s| ((), s))).is_none());
    }
}
