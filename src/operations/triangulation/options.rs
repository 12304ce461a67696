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

/// How the edge above a new point is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointLocation {
    /// Scan every edge.
    #[default]
    LinearScan,
    /// Query a segment tree mirroring the edge set.
    SegmentTree,
}

/// When the empty-circumcircle property is restored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Legalization {
    /// One global flip pass after all insertions.
    #[default]
    Deferred,
    /// Legalize the edges around every inserted point immediately.
    Eager,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangulationOptions {
    pub point_location: PointLocation,
    pub legalization: Legalization,
    /// Seed for the random insertion order; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl TriangulationOptions {
    pub fn with_point_location(mut self, point_location: PointLocation) -> Self {
        self.point_location = point_location;
        self
    }

    pub fn with_legalization(mut self, legalization: Legalization) -> Self {
        self.legalization = legalization;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn is_eager(&self) -> bool {
        self.legalization == Legalization::Eager
    }
}
