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

use thiserror::Error;

use crate::operations::triangulation::{Edge, VertexId};

/// Failures of [`SegmentTree`](crate::geometry::segment_tree::SegmentTree) operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SegmentTreeError {
    #[error("query abscissa lies outside the tree interval")]
    OutsideInterval,

    #[error("vertical segments cannot be stored")]
    VerticalSegment,

    #[error("segment is not stored in the tree")]
    MissingSegment,

    #[error("a segment tree needs at least two distinct x-coordinates, got {0}")]
    TooFewCoordinates(usize),
}

/// Failures of [`Triangulation`](crate::operations::triangulation::Triangulation) operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TriangulationError {
    #[error("at least 3 points are required, got {0}")]
    TooFewPoints(usize),

    #[error("point {0} duplicates an earlier point")]
    DuplicatePoint(VertexId),

    #[error("convex hull has fewer than 3 vertices")]
    DegenerateHull,

    #[error("vertex {0} does not exist")]
    UnknownPoint(VertexId),

    #[error("vertex {0} is already part of the triangulation")]
    AlreadyInserted(VertexId),

    #[error("edge {0:?} is not present")]
    MissingEdge(Edge),

    #[error("edge {0:?} is already present")]
    EdgeExists(Edge),

    #[error("vertices {0} and {1} are not adjacent")]
    NotAdjacent(VertexId, VertexId),

    #[error("no edge is visible above vertex {0}")]
    NoVisibleEdge(VertexId),

    #[error("no apex found opposite vertex {opposite} across edge {edge:?}")]
    MissingApex { edge: Edge, opposite: VertexId },

    #[error("triangulation invariant violated: {0}")]
    InvariantViolated(String),

    #[error(transparent)]
    Tree(#[from] SegmentTreeError),
}

/// Failures of [`voronoi`](crate::operations::voronoi::voronoi).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum VoronoiError {
    #[error("triangulation has no faces")]
    NoFaces,

    #[error("dual ray across hull edge {0:?} does not reach the bounding box")]
    UnclippedRay(Edge),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}
