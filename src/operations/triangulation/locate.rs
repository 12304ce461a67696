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

use super::{Edge, Triangulation, VertexId};
use crate::{
    error::TriangulationError,
    geometry::{
        Point2,
        visibility::{Hit, shoot_up},
    },
    numeric::scalar::{RefArith, Scalar},
};

impl<T: Scalar> Triangulation<T>
where
    for<'a> &'a T: RefArith<T>,
{
    /// Edge seen straight above `p`, by scanning every edge.
    pub fn naive_ray_shoot(&self, p: &Point2<T>) -> Option<Hit<T, Edge>> {
        shoot_up(p, self.edges.iter().map(|&e| (e, self.segment(e))))
    }

    /// Edge seen straight above `p`, through the segment tree when one is
    /// configured and by linear scan otherwise.
    pub fn ray_shoot(&self, p: &Point2<T>) -> Result<Option<Hit<T, Edge>>, TriangulationError> {
        let Some(tree) = &self.tree else {
            return Ok(self.naive_ray_shoot(p));
        };
        let Some(hit) = tree.vertical_shoot(p)? else {
            return Ok(None);
        };
        let seg = hit.target;
        let (Some(a), Some(b)) = (self.vertex_of(seg.left()), self.vertex_of(seg.right())) else {
            return Ok(None);
        };
        Ok(Some(hit.map(|_| Edge::new(a, b))))
    }

    /// Locates construction point `v` for insertion.
    pub(super) fn locate(&self, v: VertexId) -> Result<Hit<T, Edge>, TriangulationError> {
        self.ray_shoot(&self.points[v])?
            .ok_or(TriangulationError::NoVisibleEdge(v))
    }
}
