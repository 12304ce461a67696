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

pub mod flip_pass;
pub mod legalize;
pub mod locate;
pub mod options;

pub use options::{Legalization, PointLocation, TriangulationOptions};

use ahash::{AHashMap, AHashSet};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    error::TriangulationError,
    geometry::{Circle, Point2, Segment2, segment_tree::SegmentTree},
    kernel::{ccw, cmp_polar},
    numeric::scalar::{RefArith, Scalar},
    operations::hull::convex_hull,
};

/// Index of a point in the triangulation's arena.
pub type VertexId = usize;

/// Undirected edge, stored with the smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub VertexId, pub VertexId);

impl Edge {
    #[inline]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.0 == v || self.1 == v
    }
}

/// Three vertex ids, stored sorted so equal faces compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle(pub VertexId, pub VertexId, pub VertexId);

impl Triangle {
    #[inline]
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let mut v = [a, b, c];
        v.sort_unstable();
        Triangle(v[0], v[1], v[2])
    }

    pub fn vertices(&self) -> [VertexId; 3] {
        [self.0, self.1, self.2]
    }

    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.0, self.1),
            Edge::new(self.1, self.2),
            Edge::new(self.0, self.2),
        ]
    }

    pub fn circumcircle<T>(&self, points: &[Point2<T>]) -> Circle<T>
    where
        T: Scalar,
        for<'a> &'a T: RefArith<T>,
    {
        Circle::through(&points[self.0], &points[self.1], &points[self.2])
    }
}

/// Structural changes reported to an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangulationEvent {
    SegmentAdded(Edge),
    SegmentRemoved(Edge),
    EdgeFlipped { removed: Edge, added: Edge },
    PointInserted(VertexId),
}

pub type Observer = Box<dyn FnMut(&TriangulationEvent)>;

/// Planar triangulation over a fixed point arena.
///
/// Built from the convex hull of all points; the remaining points are then
/// inserted one at a time. `edges` always triangulates the inserted points,
/// `hull_edges` never changes after construction, and `adj` is the symmetric
/// closure of `edges`.
pub struct Triangulation<T: Scalar> {
    points: Vec<Point2<T>>,
    index: AHashMap<Point2<T>, VertexId>,
    edges: AHashSet<Edge>,
    adj: Vec<SmallVec<[VertexId; 8]>>,
    hull: Vec<VertexId>,
    hull_edges: AHashSet<Edge>,
    inserted: Vec<bool>,
    tree: Option<SegmentTree<T>>,
    options: TriangulationOptions,
    observer: Option<Observer>,
}

impl<T: Scalar> Triangulation<T>
where
    for<'a> &'a T: RefArith<T>,
{
    /// Triangulates the convex hull of `points` as a fan from its first
    /// vertex. Interior points are left for [`Self::insert_point`].
    pub fn new(
        points: Vec<Point2<T>>,
        options: TriangulationOptions,
    ) -> Result<Self, TriangulationError> {
        if points.len() < 3 {
            return Err(TriangulationError::TooFewPoints(points.len()));
        }

        let mut index = AHashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if index.insert(p.clone(), i).is_some() {
                return Err(TriangulationError::DuplicatePoint(i));
            }
        }

        let hull = convex_hull(&points);
        if hull.len() < 3 || !ccw(&points[hull[0]], &points[hull[1]], &points[hull[2]]) {
            return Err(TriangulationError::DegenerateHull);
        }
        let hull_edges = (0..hull.len())
            .map(|i| Edge::new(hull[i], hull[(i + 1) % hull.len()]))
            .collect();

        let tree = match options.point_location {
            PointLocation::SegmentTree => Some(SegmentTree::from_points(&points)?),
            PointLocation::LinearScan => None,
        };

        let n = points.len();
        let mut tri = Triangulation {
            points,
            index,
            edges: AHashSet::with_capacity(3 * n),
            adj: vec![SmallVec::new(); n],
            hull,
            hull_edges,
            inserted: vec![false; n],
            tree,
            options,
            observer: None,
        };
        tri.triangulate_hull()?;

        debug!(
            points = n,
            hull = tri.hull.len(),
            edges = tri.edges.len(),
            "hull triangulated"
        );
        Ok(tri)
    }

    fn triangulate_hull(&mut self) -> Result<(), TriangulationError> {
        let hull = self.hull.clone();
        self.add_segment(hull[0], hull[1])?;
        self.add_segment(hull[1], hull[2])?;
        self.add_segment(hull[2], hull[0])?;
        for &v in &hull[..3] {
            self.inserted[v] = true;
        }

        for i in 3..hull.len() {
            self.add_segment(hull[i], hull[0])?;
            self.add_segment(hull[i], hull[i - 1])?;
            self.inserted[hull[i]] = true;
            if self.options.is_eager() {
                self.legalize(hull[i], hull[i - 1], hull[0])?;
            }
        }
        Ok(())
    }

    /// Builds the Delaunay triangulation of `points` with the configured
    /// strategy: random incremental insertion, followed by the global flip
    /// pass when legalization is deferred.
    pub fn delaunay(
        points: Vec<Point2<T>>,
        options: TriangulationOptions,
    ) -> Result<Self, TriangulationError> {
        let mut tri = Self::new(points, options)?;
        tri.random_incremental()?;
        if !tri.options.is_eager() {
            tri.naive_delaunay()?;
        }
        Ok(tri)
    }

    pub fn set_observer(&mut self, observer: impl FnMut(&TriangulationEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn emit(&mut self, event: TriangulationEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn point(&self, v: VertexId) -> Result<&Point2<T>, TriangulationError> {
        self.points.get(v).ok_or(TriangulationError::UnknownPoint(v))
    }

    pub fn vertex_of(&self, p: &Point2<T>) -> Option<VertexId> {
        self.index.get(p).copied()
    }

    pub fn edges(&self) -> &AHashSet<Edge> {
        &self.edges
    }

    pub fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Hull vertices, counter-clockwise.
    pub fn hull(&self) -> &[VertexId] {
        &self.hull
    }

    pub fn hull_edges(&self) -> &AHashSet<Edge> {
        &self.hull_edges
    }

    pub fn is_hull_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.hull_edges.contains(&Edge::new(a, b))
    }

    pub fn is_inserted(&self, v: VertexId) -> bool {
        self.inserted.get(v).copied().unwrap_or(false)
    }

    pub fn inserted_count(&self) -> usize {
        self.inserted.iter().filter(|&&b| b).count()
    }

    pub fn options(&self) -> &TriangulationOptions {
        &self.options
    }

    pub fn segment_tree(&self) -> Option<&SegmentTree<T>> {
        self.tree.as_ref()
    }

    pub fn segment(&self, e: Edge) -> Segment2<T> {
        Segment2::new(self.points[e.0].clone(), self.points[e.1].clone())
    }

    /// Every edge as a point-valued segment.
    pub fn edge_segments(&self) -> AHashSet<Segment2<T>> {
        self.edges.iter().map(|&e| self.segment(e)).collect()
    }

    pub fn add_segment(&mut self, a: VertexId, b: VertexId) -> Result<(), TriangulationError> {
        self.point(a)?;
        self.point(b)?;
        let e = Edge::new(a, b);
        if !self.edges.insert(e) {
            return Err(TriangulationError::EdgeExists(e));
        }
        self.adj[a].push(b);
        self.adj[b].push(a);
        if let Some(tree) = self.tree.as_mut() {
            let seg = Segment2::new(self.points[a].clone(), self.points[b].clone());
            if !seg.is_vertical() {
                tree.insert(&seg)?;
            }
        }
        trace!(a, b, "segment added");
        self.emit(TriangulationEvent::SegmentAdded(e));
        Ok(())
    }

    pub fn remove_segment(&mut self, a: VertexId, b: VertexId) -> Result<(), TriangulationError> {
        let e = Edge::new(a, b);
        if !self.edges.remove(&e) {
            return Err(TriangulationError::MissingEdge(e));
        }
        self.adj[a].retain(|v| *v != b);
        self.adj[b].retain(|v| *v != a);
        if let Some(tree) = self.tree.as_mut() {
            let seg = Segment2::new(self.points[a].clone(), self.points[b].clone());
            if !seg.is_vertical() {
                tree.delete(&seg)?;
            }
        }
        trace!(a, b, "segment removed");
        self.emit(TriangulationEvent::SegmentRemoved(e));
        Ok(())
    }

    /// Neighbors of `p`, sorted clockwise by angle around `p`.
    pub fn incident(&self, p: VertexId) -> Result<SmallVec<[VertexId; 8]>, TriangulationError> {
        let origin = self.point(p)?;
        let mut around = self.adj[p].clone();
        around.sort_by(|&u, &v| {
            cmp_polar(origin, &self.points[u], &self.points[v])
                .reverse()
                .then(u.cmp(&v))
        });
        Ok(around)
    }

    /// The neighbor of `a` one step clockwise from `b`.
    pub fn cw_neighbor(&self, a: VertexId, b: VertexId) -> Result<VertexId, TriangulationError> {
        self.rotate(a, b, true)
    }

    /// The neighbor of `a` one step counter-clockwise from `b`.
    pub fn ccw_neighbor(&self, a: VertexId, b: VertexId) -> Result<VertexId, TriangulationError> {
        self.rotate(a, b, false)
    }

    fn rotate(
        &self,
        a: VertexId,
        b: VertexId,
        clockwise: bool,
    ) -> Result<VertexId, TriangulationError> {
        let around = self.incident(a)?;
        let pos = around
            .iter()
            .position(|&v| v == b)
            .ok_or(TriangulationError::NotAdjacent(a, b))?;
        let n = around.len();
        let next = if clockwise { (pos + 1) % n } else { (pos + n - 1) % n };
        Ok(around[next])
    }

    /// Inserts construction point `p` into the face or onto the edge that
    /// contains it. Returns the number of flips made by eager legalization.
    pub fn insert_point(&mut self, p: VertexId) -> Result<usize, TriangulationError> {
        self.point(p)?;
        if self.inserted[p] {
            return Err(TriangulationError::AlreadyInserted(p));
        }

        let hit = self.locate(p)?;
        let Edge(u, v) = hit.target;
        let (a, b) = if self.points[u] < self.points[v] { (u, v) } else { (v, u) };
        let c = self.ccw_neighbor(a, b)?;
        let d = self.cw_neighbor(a, b)?;
        let on_edge = self
            .segment(hit.target)
            .contains_interior_point(&self.points[p]);

        self.inserted[p] = true;
        let eager = self.options.is_eager();
        let mut flips = 0;

        if on_edge {
            self.remove_segment(a, b)?;
            for w in [a, b, c, d] {
                self.add_segment(p, w)?;
            }
            if eager {
                for (x, y) in [(c, a), (a, d), (d, b), (b, c)] {
                    flips += self.legalize(p, x, y)?;
                }
            }
        } else {
            for w in [a, b, d] {
                self.add_segment(p, w)?;
            }
            if eager {
                for (x, y) in [(b, a), (a, d), (d, b)] {
                    flips += self.legalize(p, x, y)?;
                }
            }
        }

        debug!(vertex = p, on_edge, flips, "point inserted");
        self.emit(TriangulationEvent::PointInserted(p));
        Ok(flips)
    }

    /// Inserts every remaining point in an order shuffled by the configured
    /// seed, or by the thread RNG when no seed is set.
    pub fn random_incremental(&mut self) -> Result<usize, TriangulationError> {
        match self.options.seed {
            Some(seed) => self.random_incremental_with(&mut StdRng::seed_from_u64(seed)),
            None => self.random_incremental_with(&mut rand::rng()),
        }
    }

    pub fn random_incremental_with<R>(&mut self, rng: &mut R) -> Result<usize, TriangulationError>
    where
        R: Rng + ?Sized,
    {
        let mut remaining = self.remaining();
        remaining.shuffle(rng);
        self.insert_all(remaining)
    }

    /// Inserts the given points in order.
    pub fn insert_all<I>(&mut self, order: I) -> Result<usize, TriangulationError>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut flips = 0;
        let mut count = 0usize;
        for v in order {
            flips += self.insert_point(v)?;
            count += 1;
        }
        debug!(inserted = count, flips, "insertion finished");
        Ok(flips)
    }

    /// Points not yet part of the triangulation, by id.
    pub fn remaining(&self) -> Vec<VertexId> {
        (0..self.points.len()).filter(|&v| !self.inserted[v]).collect()
    }

    /// Faces and their face-adjacent neighbors.
    ///
    /// Every interior edge joins the two faces on either side of it. Faces
    /// along the hull are listed even when they have no interior neighbor.
    pub fn triangles(&self) -> Result<AHashMap<Triangle, Vec<Triangle>>, TriangulationError> {
        let mut faces: AHashMap<Triangle, Vec<Triangle>> = AHashMap::new();
        for &Edge(a, b) in &self.edges {
            if self.hull_edges.contains(&Edge(a, b)) {
                continue;
            }
            let c = self.cw_neighbor(b, a)?;
            let d = self.ccw_neighbor(b, a)?;
            let t1 = Triangle::new(a, b, c);
            let t2 = Triangle::new(a, b, d);
            faces.entry(t1).or_default().push(t2);
            faces.entry(t2).or_default().push(t1);
        }
        for i in 0..self.hull.len() {
            let u = self.hull[i];
            let v = self.hull[(i + 1) % self.hull.len()];
            let apex = self.ccw_neighbor(u, v)?;
            faces.entry(Triangle::new(u, v, apex)).or_default();
        }
        for neighbors in faces.values_mut() {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(faces)
    }

    /// Faces in sorted order.
    pub fn triangle_list(&self) -> Result<Vec<Triangle>, TriangulationError> {
        let mut list: Vec<Triangle> = self.triangles()?.into_keys().collect();
        list.sort_unstable();
        Ok(list)
    }

    /// The edge set equals `reference`, compared by endpoint coordinates.
    pub fn validate<I>(&self, reference: I) -> bool
    where
        I: IntoIterator<Item = Segment2<T>>,
    {
        let reference: AHashSet<Segment2<T>> = reference.into_iter().collect();
        reference == self.edge_segments()
    }

    /// Checks the structural invariants: hull edges present, adjacency
    /// symmetric and equal to the edge set, Euler edge count, and the
    /// segment tree mirroring the non-vertical edges.
    pub fn check_invariants(&self) -> Result<(), TriangulationError> {
        for &e in &self.hull_edges {
            if !self.edges.contains(&e) {
                return Err(TriangulationError::MissingEdge(e));
            }
        }

        let mut half_edges = 0;
        for (a, around) in self.adj.iter().enumerate() {
            for &b in around {
                if !self.edges.contains(&Edge::new(a, b)) || !self.adj[b].contains(&a) {
                    return Err(TriangulationError::NotAdjacent(a, b));
                }
                half_edges += 1;
            }
        }
        if half_edges != 2 * self.edges.len() {
            return Err(TriangulationError::InvariantViolated(format!(
                "adjacency holds {half_edges} half-edges for {} edges",
                self.edges.len()
            )));
        }

        let n = self.inserted_count();
        let expected = 3 * n - 3 - self.hull.len();
        if self.edges.len() != expected {
            return Err(TriangulationError::InvariantViolated(format!(
                "{} edges for {n} points and {} hull vertices, expected {expected}",
                self.edges.len(),
                self.hull.len()
            )));
        }

        if let Some(tree) = &self.tree {
            let stored = tree.segments();
            let mirrored: AHashSet<Segment2<T>> = self
                .edge_segments()
                .into_iter()
                .filter(|s| !s.is_vertical())
                .collect();
            if stored.len() != mirrored.len() || stored.iter().any(|s| !mirrored.contains(*s)) {
                return Err(TriangulationError::InvariantViolated(
                    "segment tree does not mirror the edge set".into(),
                ));
            }
        }
        Ok(())
    }

    /// Edges in ascending order.
    pub fn sorted_edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self.edges.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// No face's circumcircle strictly contains a point of the triangulation.
    pub fn is_delaunay(&self) -> Result<bool, TriangulationError> {
        let faces = self.triangles()?;
        let live: Vec<VertexId> = (0..self.points.len()).filter(|&v| self.inserted[v]).collect();
        for face in faces.keys() {
            let circle = face.circumcircle(&self.points);
            let corners = face.vertices();
            let violated = live
                .iter()
                .copied()
                .filter(|v| !corners.contains(v))
                .any(|v| circle.contains_strict(&self.points[v]));
            if violated {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
