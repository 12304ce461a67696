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
    geometry::Point2,
    numeric::scalar::{RefArith, Scalar},
};

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    &(&(&b.x - &a.x) * &(&c.y - &a.y)) - &(&(&b.y - &a.y) * &(&c.x - &a.x))
}

/// Strict left turn `a -> b -> c`.
#[inline]
pub fn ccw<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    orient2d(a, b, c).is_positive()
}

/// Strict right turn `a -> b -> c`.
#[inline]
pub fn cw<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    orient2d(a, b, c).is_negative()
}

/// Positive when `d` lies inside the circle through `a, b, c` (given CCW),
/// negative outside, zero when the four points are cocircular.
pub fn incircle<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    let adx = &a.x - &d.x;
    let ady = &a.y - &d.y;
    let bdx = &b.x - &d.x;
    let bdy = &b.y - &d.y;
    let cdx = &c.x - &d.x;
    let cdy = &c.y - &d.y;

    let alift = &(&adx * &adx) + &(&ady * &ady);
    let blift = &(&bdx * &bdx) + &(&bdy * &bdy);
    let clift = &(&cdx * &cdx) + &(&cdy * &cdy);

    let ab = &(&adx * &bdy) - &(&bdx * &ady);
    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);

    &(&(&alift * &bc) + &(&blift * &ca)) + &(&clift * &ab)
}

/// Orders `a` and `b` by polar angle around `origin`, ascending
/// (counter-clockwise) over the half-open range (-pi, pi].
pub fn cmp_polar<T>(origin: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> Ordering
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    let half_a = upper_half(origin, a);
    let half_b = upper_half(origin, b);
    if half_a != half_b {
        // lower half (-pi, 0] comes first
        return half_a.cmp(&half_b);
    }
    let o = orient2d(origin, a, b);
    if o.is_positive() {
        Ordering::Less
    } else if o.is_negative() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// True for directions with angle in (0, pi].
fn upper_half<T>(origin: &Point2<T>, p: &Point2<T>) -> bool
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    let dy = &p.y - &origin.y;
    if dy.is_zero() {
        (&p.x - &origin.x).is_negative()
    } else {
        dy.is_positive()
    }
}

/// Polygon given in CCW order is convex iff no vertex makes a strict right turn.
pub fn is_convex<T>(polygon: &[&Point2<T>]) -> bool
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    let n = polygon.len();
    (0..n).all(|i| {
        let prev = polygon[(i + n - 1) % n];
        let next = polygon[(i + 1) % n];
        !cw(prev, polygon[i], next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        numeric::{LawsonF64, LawsonRational},
        operations::Zero,
    };

    fn p(x: f64, y: f64) -> Point2<LawsonF64> {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_test() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(0.0, 1.0);

        assert!(orient2d(&a, &b, &c).is_positive()); // Counter-clockwise
        assert!(ccw(&a, &b, &c));
        assert!(cw(&a, &c, &b));
        assert!(!ccw(&a, &b, &p(2.0, 0.0)));
    }

    #[test]
    fn incircle_sign() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);
        let c = p(0.0, 2.0);
        assert!(incircle(&a, &b, &c, &p(1.0, 1.0)).is_positive());
        assert!(incircle(&a, &b, &c, &p(3.0, 3.0)).is_negative());
        assert!(incircle(&a, &b, &c, &p(2.0, 2.0)).is_zero());
    }

    #[test]
    fn incircle_exact_with_rationals() {
        let pt = |x: i32, y: i32| Point2::<LawsonRational>::new(x, y);
        let third = Point2::<LawsonRational>::new(
            LawsonRational::from_num_den(1, 3),
            LawsonRational::from_num_den(1, 3),
        );
        assert!(incircle(&pt(0, 0), &pt(1, 0), &pt(0, 1), &third).is_positive());
        assert!(incircle(&pt(0, 0), &pt(1, 0), &pt(0, 1), &pt(1, 1)).is_zero());
    }

    #[test]
    fn polar_order_is_counter_clockwise_from_negative_x() {
        let o = p(0.0, 0.0);
        let mut around = vec![p(0.0, 1.0), p(-1.0, 0.0), p(1.0, 0.0), p(0.0, -1.0)];
        around.sort_by(|a, b| cmp_polar(&o, a, b));
        assert_eq!(
            around,
            vec![p(0.0, -1.0), p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0)]
        );
    }

    #[test]
    fn convexity() {
        let (a, b, c, d) = (p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0));
        assert!(is_convex(&[&a, &b, &c, &d]));
        let dent = p(1.0, 1.5);
        assert!(!is_convex(&[&a, &b, &dent, &c, &d]));
    }
}
