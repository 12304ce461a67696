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

use crate::{
    geometry::point_2::Point2,
    kernel::{cw, incircle},
    numeric::scalar::{RefArith, Scalar},
};

/// Circle through three non-collinear points, kept in CCW order.
#[derive(Debug, Clone)]
pub struct Circle<T: Scalar> {
    a: Point2<T>,
    b: Point2<T>,
    c: Point2<T>,
}

impl<T: Scalar> Circle<T>
where
    for<'a> &'a T: RefArith<T>,
{
    pub fn through(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Self {
        if cw(a, b, c) {
            Self {
                a: a.clone(),
                b: c.clone(),
                c: b.clone(),
            }
        } else {
            Self {
                a: a.clone(),
                b: b.clone(),
                c: c.clone(),
            }
        }
    }

    /// `p` lies strictly inside; points on the circle are outside.
    pub fn contains_strict(&self, p: &Point2<T>) -> bool {
        incircle(&self.a, &self.b, &self.c, p).is_positive()
    }

    pub fn center(&self) -> Point2<T> {
        let bx = &self.b.x - &self.a.x;
        let by = &self.b.y - &self.a.y;
        let cx = &self.c.x - &self.a.x;
        let cy = &self.c.y - &self.a.y;

        let b_len = &(&bx * &bx) + &(&by * &by);
        let c_len = &(&cx * &cx) + &(&cy * &cy);
        let d = &T::from(2i32) * &(&(&bx * &cy) - &(&by * &cx));

        let ux = &(&(&cy * &b_len) - &(&by * &c_len)) / &d;
        let uy = &(&(&bx * &c_len) - &(&cx * &b_len)) / &d;
        Point2 {
            x: &self.a.x + &ux,
            y: &self.a.y + &uy,
        }
    }

    pub fn radius_squared(&self) -> T {
        self.center().distance_squared_to(&self.a)
    }
}
