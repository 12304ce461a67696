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

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::{
    error::VoronoiError,
    geometry::{Aabb2, Line2, Point2, Segment2},
    kernel::{ccw, cw},
    numeric::scalar::{RefArith, Scalar},
    operations::triangulation::{Triangle, Triangulation},
};

/// Box scale used when no margin is given.
pub const DEFAULT_MARGIN: f64 = 1.2;

/// Voronoi diagram dual to a Delaunay triangulation.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram<T: Scalar> {
    /// Circumcenters, one per face, in face order.
    pub vertices: Vec<Point2<T>>,
    /// Dual edges between circumcenters of face-adjacent triangles.
    pub bounded_edges: Vec<Segment2<T>>,
    /// Dual rays across hull edges, clipped at `bounding_box`.
    pub semi_infinite_edges: Vec<Segment2<T>>,
    pub bounding_box: Aabb2<T>,
}

/// [`voronoi`] with the box scaled by [`DEFAULT_MARGIN`].
pub fn voronoi_default<T>(tri: &Triangulation<T>) -> Result<VoronoiDiagram<T>, VoronoiError>
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    voronoi(tri, T::from(DEFAULT_MARGIN))
}

/// Dual of `tri`; unbounded rays are clipped to the box around every site
/// and circumcenter scaled by `margin` about its center.
pub fn voronoi<T>(tri: &Triangulation<T>, margin: T) -> Result<VoronoiDiagram<T>, VoronoiError>
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let faces = tri.triangles()?;
    if faces.is_empty() {
        return Err(VoronoiError::NoFaces);
    }
    let points = tri.points();

    let mut order: Vec<Triangle> = faces.keys().copied().collect();
    order.sort_unstable();
    let centers: AHashMap<Triangle, Point2<T>> = order
        .iter()
        .map(|t| (*t, t.circumcircle(points).center()))
        .collect();
    let vertices: Vec<Point2<T>> = order.iter().map(|t| centers[t].clone()).collect();

    let mut seen = AHashSet::new();
    let mut bounded_edges = Vec::new();
    for t in &order {
        for n in &faces[t] {
            if n <= t {
                continue;
            }
            let (ca, cb) = (&centers[t], &centers[n]);
            if ca == cb {
                continue;
            }
            let seg = Segment2::new(ca.clone(), cb.clone());
            if seen.insert(seg.clone()) {
                bounded_edges.push(seg);
            }
        }
    }

    let sites = (0..points.len())
        .filter(|&v| tri.is_inserted(v))
        .map(|v| &points[v]);
    let bounding_box = Aabb2::from_points(vertices.iter().chain(sites))
        .ok_or(VoronoiError::NoFaces)?
        .scaled(&margin);
    let walls = bounding_box.walls();

    let mut semi_infinite_edges = Vec::new();
    for t in &order {
        for e in t.edges() {
            if !tri.is_hull_edge(e.0, e.1) {
                continue;
            }
            let apex = t.vertices().into_iter().find(|v| !e.contains(*v));
            let Some(c) = apex else { continue };
            let (mut a, mut b) = (&points[e.0], &points[e.1]);
            if cw(a, b, &points[c]) {
                std::mem::swap(&mut a, &mut b);
            }

            let hit = clip_outward(a, b, &walls).ok_or(VoronoiError::UnclippedRay(e))?;
            let center = &centers[t];
            if hit != *center {
                semi_infinite_edges.push(Segment2::new(center.clone(), hit));
            }
        }
    }

    debug!(
        vertices = vertices.len(),
        bounded = bounded_edges.len(),
        rays = semi_infinite_edges.len(),
        "voronoi diagram extracted"
    );
    Ok(VoronoiDiagram {
        vertices,
        bounded_edges,
        semi_infinite_edges,
        bounding_box,
    })
}

/// Where the bisector of hull edge `a b` (interior on its left) leaves the
/// box on the exterior side, nearest the edge's midpoint.
fn clip_outward<T>(a: &Point2<T>, b: &Point2<T>, walls: &[Segment2<T>; 4]) -> Option<Point2<T>>
where
    T: Scalar,
    for<'x> &'x T: RefArith<T>,
{
    let mid = a.midpoint(b);
    let bisector = Line2::bisector(a, b);
    walls
        .iter()
        .filter_map(|wall| wall.intersect_line(&bisector))
        .filter(|hit| !ccw(a, b, hit))
        .min_by(|p, q| T::cmp_ref(&p.distance_squared_to(&mid), &q.distance_squared_to(&mid)))
}
