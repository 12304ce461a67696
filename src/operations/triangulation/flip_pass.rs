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
use tracing::{debug, trace};

use super::{Edge, Triangulation, TriangulationEvent, VertexId};
use crate::{
    error::TriangulationError,
    geometry::Circle,
    kernel::is_convex,
    numeric::scalar::{RefArith, Scalar},
};

impl<T: Scalar> Triangulation<T>
where
    for<'a> &'a T: RefArith<T>,
{
    /// Flips illegal edges until none remain. Returns the number of flips.
    ///
    /// Every edge is queued once; a flip re-queues the four edges of the
    /// quadrilateral it happened in.
    pub fn naive_delaunay(&mut self) -> Result<usize, TriangulationError> {
        let mut work: Vec<Edge> = self.sorted_edges();
        let mut queued: AHashSet<Edge> = work.iter().copied().collect();
        let mut flips = 0;

        while let Some(e) = work.pop() {
            queued.remove(&e);
            let Edge(a, b) = e;
            let Some((c, d)) = self.is_illegal(a, b)? else {
                continue;
            };

            self.remove_segment(a, b)?;
            let added = Edge::new(c, d);
            if !self.edges.contains(&added) {
                self.add_segment(c, d)?;
            }
            flips += 1;
            trace!(a, b, c, d, "edge flipped");
            self.emit(TriangulationEvent::EdgeFlipped { removed: e, added });

            for (x, y) in [(a, c), (c, b), (d, b), (d, a)] {
                let side = Edge::new(x, y);
                if self.edges.contains(&side) && queued.insert(side) {
                    work.push(side);
                }
            }
        }

        debug!(flips, "global flip pass finished");
        Ok(flips)
    }

    /// `Some((c, d))` when `(a, b)` should be flipped to `(c, d)`.
    ///
    /// `c` and `d` are the apexes counter-clockwise and clockwise of `b`
    /// around `a`. Absent edges, hull edges and edges of a non-convex
    /// quadrilateral are legal.
    pub fn is_illegal(
        &self,
        a: VertexId,
        b: VertexId,
    ) -> Result<Option<(VertexId, VertexId)>, TriangulationError> {
        let e = Edge::new(a, b);
        if !self.edges.contains(&e) || self.hull_edges.contains(&e) {
            return Ok(None);
        }
        let c = self.ccw_neighbor(a, b)?;
        let d = self.cw_neighbor(a, b)?;

        let [pc, pa, pd, pb] = [c, a, d, b].map(|v| &self.points[v]);
        if !is_convex(&[pc, pa, pd, pb]) {
            return Ok(None);
        }
        if Circle::through(pa, pb, pc).contains_strict(pd) {
            Ok(Some((c, d)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        geometry::Point2,
        numeric::LawsonF64,
        operations::triangulation::{Edge, Triangulation, TriangulationOptions},
    };

    #[test]
    fn single_illegal_diagonal_is_flipped() {
        let pts: Vec<Point2<LawsonF64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, -1.0),
            Point2::new(10.0, 1.0),
            Point2::new(5.0, 3.0),
        ];
        let mut tri = Triangulation::new(pts, TriangulationOptions::default()).unwrap();
        assert_eq!(tri.is_illegal(0, 2).unwrap(), Some((3, 1)));
        assert_eq!(tri.is_illegal(0, 1).unwrap(), None);

        assert_eq!(tri.naive_delaunay().unwrap(), 1);
        assert!(tri.contains_edge(1, 3));
        assert_eq!(tri.is_illegal(1, 3).unwrap(), None);
        assert_eq!(tri.naive_delaunay().unwrap(), 0);
        assert!(!tri.edges().contains(&Edge(0, 2)));
    }
}
