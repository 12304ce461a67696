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

use ahash::AHashSet;
use rand::Rng;

use crate::{
    geometry::Point2,
    kernel::{ccw, cw},
    numeric::scalar::{RefArith, Scalar},
};

/// Convex hull by monotone chain.
///
/// Returns indices into `points`, counter-clockwise, starting at the
/// lexicographically smallest point. Collinear boundary points are kept
/// only when they do not form a strict turn, which general-position input
/// never produces.
pub fn convex_hull<T>(points: &[Point2<T>]) -> Vec<usize>
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| points[i].cmp(&points[j]));

    if order.len() < 3 {
        return order;
    }

    let mut upper: Vec<usize> = order[..2].to_vec();
    let mut lower: Vec<usize> = order[..2].to_vec();

    for &i in &order[2..] {
        upper.push(i);
        while upper.len() > 2 && turns(points, &upper, ccw) {
            upper.remove(upper.len() - 2);
        }
        lower.push(i);
        while lower.len() > 2 && turns(points, &lower, cw) {
            lower.remove(lower.len() - 2);
        }
    }

    let mut hull = lower;
    let interior = &upper[1..upper.len() - 1];
    hull.extend(interior.iter().rev());
    hull
}

#[inline]
fn turns<T>(
    points: &[Point2<T>],
    chain: &[usize],
    turn: fn(&Point2<T>, &Point2<T>, &Point2<T>) -> bool,
) -> bool
where
    T: Scalar,
{
    let n = chain.len();
    turn(&points[chain[n - 3]], &points[chain[n - 2]], &points[chain[n - 1]])
}

/// `n` points with integer coordinates in `[0, 5n)` where no two points share
/// an x or a y coordinate.
pub fn sample_integer_points<T, R>(n: usize, rng: &mut R) -> Vec<Point2<T>>
where
    T: Scalar,
    R: Rng + ?Sized,
{
    let range = coordinate_range(n);
    let mut xs = AHashSet::with_capacity(n);
    let mut ys = AHashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let x = rng.random_range(0..range);
        let y = rng.random_range(0..range);
        if xs.contains(&x) || ys.contains(&y) {
            continue;
        }
        xs.insert(x);
        ys.insert(y);
        out.push(Point2::new(x, y));
    }
    out
}

/// Exclusive upper bound of sampled coordinates, saturating at `i32::MAX`.
fn coordinate_range(n: usize) -> i32 {
    i32::try_from(n.max(1).saturating_mul(5)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::LawsonF64;
    use rand::{SeedableRng, rngs::StdRng};

    fn p(x: f64, y: f64) -> Point2<LawsonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn square_with_center() {
        let pts = vec![p(2.0, 2.0), p(1.0, 1.0), p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)];
        assert_eq!(convex_hull(&pts), vec![2, 3, 0, 4]);
    }

    #[test]
    fn sampled_points_have_distinct_coordinates() {
        let mut rng = StdRng::seed_from_u64(3);
        let pts: Vec<Point2<LawsonF64>> = sample_integer_points(40, &mut rng);
        assert_eq!(pts.len(), 40);
        let xs: AHashSet<i64> = pts.iter().map(|p| p.x.0 as i64).collect();
        let ys: AHashSet<i64> = pts.iter().map(|p| p.y.0 as i64).collect();
        assert_eq!(xs.len(), 40);
        assert_eq!(ys.len(), 40);
    }

    #[test]
    fn coordinate_range_saturates() {
        assert_eq!(coordinate_range(0), 5);
        assert_eq!(coordinate_range(10), 50);
        assert_eq!(coordinate_range(i32::MAX as usize), i32::MAX);
        assert_eq!(coordinate_range(usize::MAX), i32::MAX);
    }
}
