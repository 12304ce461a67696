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

use approx::assert_relative_eq;
use lawson::{
    geometry::Point2,
    numeric::LawsonF64,
    operations::{
        triangulation::{Legalization, Triangulation, TriangulationOptions},
        voronoi::{DEFAULT_MARGIN, voronoi, voronoi_default},
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn square_with_center() -> Triangulation<LawsonF64> {
    let pts: Vec<Point2<LawsonF64>> = vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 2.0),
        Point2::new(0.0, 2.0),
        Point2::new(1.0, 1.0),
    ];
    Triangulation::delaunay(pts, TriangulationOptions::default()).unwrap()
}

#[test]
fn test_square_dual() {
    let tri = square_with_center();
    let vd = voronoi(&tri, LawsonF64(DEFAULT_MARGIN)).unwrap();

    assert_eq!(vd.vertices.len(), 4);
    assert_eq!(vd.bounded_edges.len(), 4);
    assert_eq!(vd.semi_infinite_edges.len(), 4);

    let mut centers: Vec<(f64, f64)> = vd.vertices.iter().map(|p| (p.x.0, p.y.0)).collect();
    centers.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let expected = [(0.0, 1.0), (1.0, 0.0), (1.0, 2.0), (2.0, 1.0)];
    for (got, want) in centers.iter().zip(expected) {
        assert_relative_eq!(got.0, want.0, epsilon = 1e-9);
        assert_relative_eq!(got.1, want.1, epsilon = 1e-9);
    }

    assert_relative_eq!(vd.bounding_box.min.x.0, -0.2, epsilon = 1e-9);
    assert_relative_eq!(vd.bounding_box.max.y.0, 2.2, epsilon = 1e-9);

    // the ray across A-B starts at (1, 0) and leaves through the south wall
    let south = vd
        .semi_infinite_edges
        .iter()
        .find(|s| s.left().y.0 < 0.0 || s.right().y.0 < 0.0)
        .unwrap();
    let (outer, inner) = if south.left().y.0 < south.right().y.0 {
        (south.left(), south.right())
    } else {
        (south.right(), south.left())
    };
    assert_relative_eq!(outer.x.0, 1.0, epsilon = 1e-9);
    assert_relative_eq!(outer.y.0, -0.2, epsilon = 1e-9);
    assert_relative_eq!(inner.x.0, 1.0, epsilon = 1e-9);
    assert_relative_eq!(inner.y.0, 0.0, epsilon = 1e-9);
}

#[test]
fn test_rays_end_on_box_and_point_outward() {
    let mut rng = StdRng::seed_from_u64(77);
    let pts: Vec<Point2<LawsonF64>> = (0..60)
        .map(|_| Point2::new(rng.random_range(0.0..50.0), rng.random_range(0.0..50.0)))
        .collect();
    let opts = TriangulationOptions::default()
        .with_legalization(Legalization::Eager)
        .with_seed(1);
    let tri = Triangulation::delaunay(pts, opts).unwrap();
    let vd = voronoi(&tri, LawsonF64(1.5)).unwrap();

    let faces = tri.triangle_list().unwrap();
    assert_eq!(vd.vertices.len(), faces.len());
    assert_eq!(vd.semi_infinite_edges.len(), tri.hull().len());
    let interior_edges = tri.edges().len() - tri.hull().len();
    assert!(vd.bounded_edges.len() <= interior_edges);

    let bb = &vd.bounding_box;
    let on_wall = |p: &Point2<LawsonF64>| {
        let eps = 1e-6;
        (p.x.0 - bb.min.x.0).abs() < eps
            || (p.x.0 - bb.max.x.0).abs() < eps
            || (p.y.0 - bb.min.y.0).abs() < eps
            || (p.y.0 - bb.max.y.0).abs() < eps
    };
    for ray in &vd.semi_infinite_edges {
        assert!(on_wall(ray.left()) || on_wall(ray.right()));
        for end in [ray.left(), ray.right()] {
            assert!(end.x.0 > bb.min.x.0 - 1e-6 && end.x.0 < bb.max.x.0 + 1e-6);
            assert!(end.y.0 > bb.min.y.0 - 1e-6 && end.y.0 < bb.max.y.0 + 1e-6);
        }
    }
}

#[test]
fn test_ray_count_for_single_triangle() {
    let pts: Vec<Point2<LawsonF64>> = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(1.0, 3.0),
    ];
    let tri = Triangulation::new(pts, TriangulationOptions::default()).unwrap();
    let vd = voronoi_default(&tri).unwrap();
    assert_eq!(vd.vertices.len(), 1);
    assert!(vd.bounded_edges.is_empty());
    assert_eq!(vd.semi_infinite_edges.len(), 3);
    for ray in &vd.semi_infinite_edges {
        let center = &vd.vertices[0];
        assert!(ray.left() == center || ray.right() == center);
    }
}

#[test]
fn test_default_margin_matches_explicit() {
    let tri = square_with_center();
    let implicit = voronoi_default(&tri).unwrap();
    let explicit = voronoi(&tri, LawsonF64(DEFAULT_MARGIN)).unwrap();
    assert_eq!(implicit.bounding_box, explicit.bounding_box);
    assert_eq!(implicit.bounded_edges, explicit.bounded_edges);
    assert_eq!(implicit.semi_infinite_edges, explicit.semi_infinite_edges);

    let wider = voronoi(&tri, LawsonF64(2.0)).unwrap();
    assert!(wider.bounding_box.max.x.0 > implicit.bounding_box.max.x.0);
}
