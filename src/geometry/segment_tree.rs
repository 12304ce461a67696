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

use std::cmp::Ordering;

use ahash::AHashSet;
use tracing::trace;

use crate::{
    error::SegmentTreeError,
    geometry::{
        interval::Interval,
        point_2::Point2,
        segment::Segment2,
        visibility::{self, Hit},
    },
    numeric::scalar::{RefArith, Scalar},
};

/// Static segment tree over a fixed set of x-coordinates.
///
/// The elementary intervals are fixed at construction; segments are then
/// inserted and deleted freely. A segment is kept in the `aux` set of every
/// highest node whose interval it spans (its canonical decomposition), so
/// each insert, delete or query touches O(log n) nodes.
#[derive(Debug, Clone)]
pub struct SegmentTree<T: Scalar> {
    interval: Interval<T>,
    aux: AHashSet<Segment2<T>>,
    split: Option<T>,
    left: Option<Box<SegmentTree<T>>>,
    right: Option<Box<SegmentTree<T>>>,
}

impl<T: Scalar> SegmentTree<T>
where
    for<'a> &'a T: RefArith<T>,
{
    /// Builds the tree skeleton from the given abscissas. Duplicates are merged.
    pub fn new(mut xs: Vec<T>) -> Result<Self, SegmentTreeError> {
        xs.sort_by(T::cmp_ref);
        xs.dedup_by(|a, b| T::cmp_ref(a, b) == Ordering::Equal);
        if xs.len() < 2 {
            return Err(SegmentTreeError::TooFewCoordinates(xs.len()));
        }
        Ok(Self::build(&xs))
    }

    /// Tree over the x-coordinates of `points`.
    pub fn from_points(points: &[Point2<T>]) -> Result<Self, SegmentTreeError> {
        Self::new(points.iter().map(|p| p.x.clone()).collect())
    }

    fn build(coords: &[T]) -> Self {
        let n = coords.len();
        let interval = Interval::new(coords[0].clone(), coords[n - 1].clone());
        if n == 2 {
            return SegmentTree {
                interval,
                aux: AHashSet::new(),
                split: None,
                left: None,
                right: None,
            };
        }
        // children share the split coordinate
        let mid = n / 2;
        SegmentTree {
            interval,
            aux: AHashSet::new(),
            split: Some(coords[mid].clone()),
            left: Some(Box::new(Self::build(&coords[..=mid]))),
            right: Some(Box::new(Self::build(&coords[mid..]))),
        }
    }

    pub fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    pub fn insert(&mut self, seg: &Segment2<T>) -> Result<(), SegmentTreeError> {
        if seg.is_vertical() {
            return Err(SegmentTreeError::VerticalSegment);
        }
        trace!(?seg, "segment tree insert");
        self.insert_rec(seg, &seg.x_extent());
        Ok(())
    }

    fn insert_rec(&mut self, seg: &Segment2<T>, extent: &Interval<T>) {
        if extent.contains_interval(&self.interval) {
            self.aux.insert(seg.clone());
            return;
        }
        for child in [self.left.as_deref_mut(), self.right.as_deref_mut()]
            .into_iter()
            .flatten()
        {
            if child.interval.overlaps_strictly(extent) {
                child.insert_rec(seg, extent);
            }
        }
    }

    pub fn delete(&mut self, seg: &Segment2<T>) -> Result<(), SegmentTreeError> {
        if seg.is_vertical() {
            return Err(SegmentTreeError::VerticalSegment);
        }
        trace!(?seg, "segment tree delete");
        let removed = self.delete_rec(seg, &seg.x_extent())?;
        if removed == 0 {
            return Err(SegmentTreeError::MissingSegment);
        }
        Ok(())
    }

    fn delete_rec(
        &mut self,
        seg: &Segment2<T>,
        extent: &Interval<T>,
    ) -> Result<usize, SegmentTreeError> {
        if extent.contains_interval(&self.interval) {
            return if self.aux.remove(seg) {
                Ok(1)
            } else {
                Err(SegmentTreeError::MissingSegment)
            };
        }
        let mut removed = 0;
        for child in [self.left.as_deref_mut(), self.right.as_deref_mut()]
            .into_iter()
            .flatten()
        {
            if child.interval.overlaps_strictly(extent) {
                removed += child.delete_rec(seg, extent)?;
            }
        }
        Ok(removed)
    }

    /// Lowest stored segment met by the upward vertical ray from `p`.
    pub fn vertical_shoot(
        &self,
        p: &Point2<T>,
    ) -> Result<Option<Hit<T, &Segment2<T>>>, SegmentTreeError> {
        if !self.interval.contains(&p.x) {
            return Err(SegmentTreeError::OutsideInterval);
        }
        Ok(self.shoot_rec(p))
    }

    fn shoot_rec(&self, p: &Point2<T>) -> Option<Hit<T, &Segment2<T>>> {
        let mut best = visibility::shoot_up(p, self.aux.iter().map(|s| (s, s)));
        for child in self.children_at(&p.x) {
            best = visibility::lower(best, child.shoot_rec(p));
        }
        best
    }

    /// Every stored segment whose x-extent contains `q.x`.
    pub fn stabbing_query(
        &self,
        q: &Point2<T>,
    ) -> Result<AHashSet<&Segment2<T>>, SegmentTreeError> {
        if !self.interval.contains(&q.x) {
            return Err(SegmentTreeError::OutsideInterval);
        }
        let mut out = AHashSet::new();
        self.stab_rec(&q.x, &mut out);
        Ok(out)
    }

    fn stab_rec<'t>(&'t self, x: &T, out: &mut AHashSet<&'t Segment2<T>>) {
        out.extend(self.aux.iter());
        for child in self.children_at(x) {
            child.stab_rec(x, out);
        }
    }

    /// Children whose interval contains `x`: both when `x` is the split value.
    fn children_at(&self, x: &T) -> impl Iterator<Item = &SegmentTree<T>> {
        let (go_left, go_right) = match &self.split {
            Some(split) => {
                let ord = T::cmp_ref(x, split);
                (ord != Ordering::Greater, ord != Ordering::Less)
            }
            None => (false, false),
        };
        let left = self.left.as_deref().filter(|_| go_left);
        let right = self.right.as_deref().filter(|_| go_right);
        left.into_iter().chain(right)
    }

    /// All stored segments.
    pub fn segments(&self) -> AHashSet<&Segment2<T>> {
        let mut out = AHashSet::new();
        self.gather(&mut out);
        out
    }

    fn gather<'t>(&'t self, out: &mut AHashSet<&'t Segment2<T>>) {
        out.extend(self.aux.iter());
        for child in [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
        {
            child.gather(out);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aux.is_empty()
            && [self.left.as_deref(), self.right.as_deref()]
                .into_iter()
                .flatten()
                .all(SegmentTree::is_empty)
    }

    /// Number of nodes whose `aux` set holds `seg`.
    pub fn storage_count(&self, seg: &Segment2<T>) -> usize {
        let here = usize::from(self.aux.contains(seg));
        here + [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(|c| c.storage_count(seg))
            .sum::<usize>()
    }
}
