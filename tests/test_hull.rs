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

use lawson::{
    geometry::Point2,
    kernel::{ccw, is_convex},
    numeric::{LawsonF64, LawsonRational},
    operations::hull::{convex_hull, sample_integer_points},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn test_hull_starts_at_smallest_point_and_turns_left() {
    let mut rng = StdRng::seed_from_u64(5);
    let pts: Vec<Point2<LawsonF64>> = (0..200)
        .map(|_| Point2::new(rng.random_range(0.0..10.0), rng.random_range(0.0..10.0)))
        .collect();
    let hull = convex_hull(&pts);

    let smallest = (0..pts.len()).min_by(|&i, &j| pts[i].cmp(&pts[j])).unwrap();
    assert_eq!(hull[0], smallest);

    let ring: Vec<&Point2<LawsonF64>> = hull.iter().map(|&i| &pts[i]).collect();
    assert!(is_convex(&ring));
    for k in 0..hull.len() {
        let a = &pts[hull[k]];
        let b = &pts[hull[(k + 1) % hull.len()]];
        for (i, q) in pts.iter().enumerate() {
            if hull.contains(&i) {
                continue;
            }
            assert!(ccw(a, b, q), "point {i} lies outside hull edge {k}");
        }
    }
}

#[test]
fn test_hull_of_triangle_is_ccw() {
    let pts: Vec<Point2<LawsonRational>> = vec![
        Point2::new(0, 0),
        Point2::new(1, 3),
        Point2::new(4, 1),
    ];
    assert_eq!(convex_hull(&pts), vec![0, 2, 1]);
}

#[test]
fn test_sampled_points_hull() {
    let mut rng = StdRng::seed_from_u64(6);
    let pts: Vec<Point2<LawsonRational>> = sample_integer_points(25, &mut rng);
    let hull = convex_hull(&pts);
    assert!(hull.len() >= 3);
    let ring: Vec<_> = hull.iter().map(|&i| &pts[i]).collect();
    assert!(is_convex(&ring));
}
