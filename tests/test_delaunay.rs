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
    geometry::{Point2, Segment2},
    numeric::{LawsonF64, LawsonRational},
    operations::triangulation::{Legalization, PointLocation, Triangulation, TriangulationOptions},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use spade::{DelaunayTriangulation, Triangulation as _};

fn random_points(n: usize, seed: u64) -> Vec<Point2<LawsonF64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point2::new(
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..1000.0),
            )
        })
        .collect()
}

fn reference_edges(points: &[Point2<LawsonF64>]) -> Vec<Segment2<LawsonF64>> {
    let vertices: Vec<spade::Point2<f64>> = points
        .iter()
        .map(|p| spade::Point2::new(p.x.0, p.y.0))
        .collect();
    let dt = DelaunayTriangulation::<spade::Point2<f64>>::bulk_load(vertices).unwrap();
    dt.undirected_edges()
        .map(|e| {
            let [a, b] = e.positions();
            Segment2::new(Point2::new(a.x, a.y), Point2::new(b.x, b.y))
        })
        .collect()
}

fn options(legalization: Legalization, location: PointLocation, seed: u64) -> TriangulationOptions {
    TriangulationOptions::default()
        .with_legalization(legalization)
        .with_point_location(location)
        .with_seed(seed)
}

fn check_against_reference(n: usize, seed: u64, legalization: Legalization, location: PointLocation) {
    let points = random_points(n, seed);
    let reference = reference_edges(&points);
    let tri = Triangulation::delaunay(points, options(legalization, location, seed)).unwrap();

    tri.check_invariants().unwrap();
    assert_eq!(tri.edges().len(), reference.len());
    assert!(tri.validate(reference), "n={n} seed={seed} {legalization:?} {location:?}");
}

#[test]
fn test_lazy_matches_reference() {
    for (n, seed) in [(50, 1), (200, 2), (1000, 3)] {
        check_against_reference(n, seed, Legalization::Deferred, PointLocation::LinearScan);
    }
}

#[test]
fn test_eager_matches_reference() {
    for (n, seed) in [(50, 4), (200, 5), (1000, 6)] {
        check_against_reference(n, seed, Legalization::Eager, PointLocation::LinearScan);
    }
}

#[test]
fn test_segment_tree_location_matches_reference() {
    check_against_reference(200, 7, Legalization::Eager, PointLocation::SegmentTree);
    check_against_reference(200, 8, Legalization::Deferred, PointLocation::SegmentTree);
}

#[test]
fn test_eager_and_lazy_agree() {
    let points = random_points(300, 11);
    let eager = Triangulation::delaunay(
        points.clone(),
        options(Legalization::Eager, PointLocation::LinearScan, 99),
    )
    .unwrap();
    let lazy = Triangulation::delaunay(
        points,
        options(Legalization::Deferred, PointLocation::SegmentTree, 99),
    )
    .unwrap();
    assert_eq!(eager.sorted_edges(), lazy.sorted_edges());
}

#[test]
fn test_empty_circumcircles() {
    let points = random_points(120, 21);
    for legalization in [Legalization::Eager, Legalization::Deferred] {
        let tri = Triangulation::delaunay(
            points.clone(),
            options(legalization, PointLocation::LinearScan, 5),
        )
        .unwrap();
        assert!(tri.is_delaunay().unwrap());
        assert_eq!(tri.triangle_list().unwrap().len(), 2 * 120 - 2 - tri.hull().len());
    }
}

#[test]
fn test_hull_edges_survive_every_insertion() {
    let points = random_points(150, 31);
    let mut tri = Triangulation::new(
        points,
        options(Legalization::Eager, PointLocation::LinearScan, 0),
    )
    .unwrap();
    let hull = tri.hull_edges().clone();
    for v in tri.remaining() {
        tri.insert_point(v).unwrap();
        assert!(hull.iter().all(|e| tri.edges().contains(e)));
    }
    assert_eq!(tri.hull_edges(), &hull);
    tri.check_invariants().unwrap();
}

#[test]
fn test_exact_rationals_agree_with_floats() {
    let points = random_points(150, 41);
    let exact: Vec<Point2<LawsonRational>> = points
        .iter()
        .map(|p| Point2::new(p.x, p.y))
        .collect();
    for legalization in [Legalization::Eager, Legalization::Deferred] {
        let opts = options(legalization, PointLocation::SegmentTree, 3);
        let float = Triangulation::delaunay(points.clone(), opts).unwrap();
        let rational = Triangulation::delaunay(exact.clone(), opts).unwrap();
        rational.check_invariants().unwrap();
        assert!(rational.is_delaunay().unwrap());
        assert_eq!(float.sorted_edges(), rational.sorted_edges());
    }
}
