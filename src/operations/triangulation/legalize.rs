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

use tracing::trace;

use super::{Edge, Triangulation, TriangulationEvent, VertexId};
use crate::{
    error::TriangulationError,
    geometry::Circle,
    kernel::{is_convex, orient2d},
    numeric::scalar::{RefArith, Scalar},
};

impl<T: Scalar> Triangulation<T>
where
    for<'a> &'a T: RefArith<T>,
{
    /// Restores the empty-circumcircle property around `p` starting from
    /// edge `(a, b)` of a triangle `(p, a, b)`.
    ///
    /// An illegal edge is flipped to `(p, q)`, where `q` is the apex on the
    /// far side, and the two edges it exposes, `(q, a)` and `(q, b)`, are
    /// checked in turn. Hull edges are always legal. Returns the number of
    /// flips.
    pub fn legalize(
        &mut self,
        p: VertexId,
        a: VertexId,
        b: VertexId,
    ) -> Result<usize, TriangulationError> {
        let mut flips = 0;
        let mut stack = vec![(a, b)];

        while let Some((a, b)) = stack.pop() {
            let e = Edge::new(a, b);
            if self.hull_edges.contains(&e) {
                continue;
            }
            if !self.edges.contains(&e) {
                return Err(TriangulationError::MissingEdge(e));
            }

            let q = self.apex(p, a, b)?;
            let left_of = orient2d(&self.points[a], &self.points[b], &self.points[p]).is_positive();
            let [pp, pa, pq, pb] = [p, a, q, b].map(|v| &self.points[v]);
            let quad = if left_of {
                [pp, pa, pq, pb]
            } else {
                [pp, pb, pq, pa]
            };
            if !is_convex(&quad) {
                continue;
            }

            let circle = Circle::through(pp, pa, pb);
            if !circle.contains_strict(pq) {
                continue;
            }

            self.remove_segment(a, b)?;
            self.add_segment(p, q)?;
            flips += 1;
            trace!(p, a, b, q, "edge flipped");
            self.emit(TriangulationEvent::EdgeFlipped {
                removed: e,
                added: Edge::new(p, q),
            });

            stack.push((q, a));
            stack.push((q, b));
        }
        Ok(flips)
    }

    /// Apex of the triangle across `(a, b)` from `p`: rotate around `a`
    /// starting at `b`, away from `p`, until a vertex adjacent to `b` appears.
    fn apex(&self, p: VertexId, a: VertexId, b: VertexId) -> Result<VertexId, TriangulationError> {
        let clockwise = orient2d(&self.points[a], &self.points[b], &self.points[p]).is_positive();
        let missing = TriangulationError::MissingApex {
            edge: Edge::new(a, b),
            opposite: p,
        };

        let mut cur = b;
        for _ in 0..self.adj[a].len() {
            cur = if clockwise {
                self.cw_neighbor(a, cur)?
            } else {
                self.ccw_neighbor(a, cur)?
            };
            if cur == p || cur == b {
                return Err(missing);
            }
            if self.adj[b].contains(&cur) {
                return Ok(cur);
            }
        }
        Err(missing)
    }
}
