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

use num_traits::ToPrimitive;

use crate::operations::{Abs, One, Zero};

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Number type every geometric object is generic over.
///
/// Sign tests (`is_positive`, `is_negative`, `is_zero`, ...) come from
/// [`Zero`] and carry the type's own notion of tolerance: none for exact
/// rationals, a small epsilon for floats.
pub trait Scalar:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Debug
    + Abs
    + Zero
    + One
    + Eq
    + PartialEq
    + PartialOrd
    + Hash
    + ToPrimitive
    + From<i32>
    + From<f64>
{
    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }
    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    fn from_num_den(num: i32, den: i32) -> Self;

    /// Total order used for sorting and canonical orderings. Must agree with `Eq`.
    fn cmp_ref(a: &Self, b: &Self) -> Ordering;

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }
}

/// Arithmetic on borrowed scalars.
///
/// Generic code states `for<'a> &'a T: RefArith<T>` once instead of listing
/// each operator, and writes `&a - &b` without cloning the operands.
pub trait RefArith<T>:
    Sized
    + Add<Self, Output = T>
    + Sub<Self, Output = T>
    + Mul<Self, Output = T>
    + Div<Self, Output = T>
    + Neg<Output = T>
{
}

impl<'a, T: 'a> RefArith<T> for &'a T where
    &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
        + Neg<Output = T>
{
}
