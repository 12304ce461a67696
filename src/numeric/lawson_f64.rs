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

use crate::{
    numeric::{lawson_rational::LawsonRational, scalar::Scalar},
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Sign tests treat magnitudes below this as zero.
pub const EPS: f64 = 1e-10;

#[derive(Clone, Copy, Debug)]
pub struct LawsonF64(pub f64);

impl Scalar for LawsonF64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        LawsonF64(num as f64 / den as f64)
    }

    #[inline(always)]
    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        // total_cmp handles -0.0 and NaN deterministically
        a.0.total_cmp(&b.0)
    }
}

impl<'a, 'b> Add<&'b LawsonF64> for &'a LawsonF64 {
    type Output = LawsonF64;

    fn add(self, rhs: &'b LawsonF64) -> LawsonF64 {
        LawsonF64(self.0 + rhs.0)
    }
}

impl Add for LawsonF64 {
    type Output = LawsonF64;
    fn add(self, rhs: LawsonF64) -> LawsonF64 {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b LawsonF64> for &'a LawsonF64 {
    type Output = LawsonF64;

    fn sub(self, rhs: &'b LawsonF64) -> LawsonF64 {
        LawsonF64(self.0 - rhs.0)
    }
}

impl Sub for LawsonF64 {
    type Output = LawsonF64;
    fn sub(self, rhs: LawsonF64) -> LawsonF64 {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b LawsonF64> for &'a LawsonF64 {
    type Output = LawsonF64;

    fn mul(self, rhs: &'b LawsonF64) -> LawsonF64 {
        LawsonF64(self.0 * rhs.0)
    }
}

impl Mul for LawsonF64 {
    type Output = LawsonF64;
    fn mul(self, rhs: LawsonF64) -> LawsonF64 {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b LawsonF64> for &'a LawsonF64 {
    type Output = LawsonF64;

    fn div(self, rhs: &'b LawsonF64) -> LawsonF64 {
        LawsonF64(self.0 / rhs.0)
    }
}

impl Div for LawsonF64 {
    type Output = LawsonF64;
    fn div(self, rhs: LawsonF64) -> LawsonF64 {
        &self / &rhs
    }
}

impl<'c> AddAssign<&'c LawsonF64> for LawsonF64 {
    fn add_assign(&mut self, rhs: &'c LawsonF64) {
        self.0 += rhs.0;
    }
}

impl<'d> SubAssign<&'d LawsonF64> for LawsonF64 {
    fn sub_assign(&mut self, rhs: &'d LawsonF64) {
        self.0 -= rhs.0;
    }
}

impl Neg for LawsonF64 {
    type Output = LawsonF64;

    fn neg(self) -> LawsonF64 {
        LawsonF64(-self.0)
    }
}

impl<'a> Neg for &'a LawsonF64 {
    type Output = LawsonF64;

    fn neg(self) -> LawsonF64 {
        LawsonF64(-self.0)
    }
}

impl From<i32> for LawsonF64 {
    fn from(value: i32) -> Self {
        LawsonF64(value as f64)
    }
}

impl From<f64> for LawsonF64 {
    fn from(value: f64) -> Self {
        LawsonF64(value)
    }
}

impl From<LawsonF64> for f64 {
    fn from(value: LawsonF64) -> Self {
        value.0
    }
}

impl From<LawsonRational> for LawsonF64 {
    fn from(value: LawsonRational) -> Self {
        LawsonF64(value.0.to_f64())
    }
}

impl ToPrimitive for LawsonF64 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0 as u64)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl PartialEq for LawsonF64 {
    fn eq(&self, other: &LawsonF64) -> bool {
        self.0.to_bits() == other.0.to_bits() // Comparing with tolerance breaks the hashing contract
    }
}

impl Eq for LawsonF64 {}

impl PartialOrd for LawsonF64 {
    fn partial_cmp(&self, other: &LawsonF64) -> Option<Ordering> {
        let diff = self.0 - other.0;
        if diff.abs() < EPS {
            return Some(Ordering::Equal);
        }
        if diff > EPS {
            return Some(Ordering::Greater);
        }
        if diff < -EPS {
            return Some(Ordering::Less);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl Hash for LawsonF64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Zero for LawsonF64 {
    fn zero() -> Self {
        LawsonF64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() < EPS
    }

    fn is_positive(&self) -> bool {
        self.0 > EPS
    }
    fn is_negative(&self) -> bool {
        self.0 < -EPS
    }
    fn is_positive_or_zero(&self) -> bool {
        self.0 >= -EPS
    }
    fn is_negative_or_zero(&self) -> bool {
        self.0 <= EPS
    }
}

impl One for LawsonF64 {
    fn one() -> Self {
        LawsonF64(1.0)
    }
}

impl Abs for LawsonF64 {
    fn abs(&self) -> Self {
        LawsonF64(self.0.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_tests_use_tolerance() {
        assert!(LawsonF64(1e-12).is_zero());
        assert!(!LawsonF64(1e-12).is_positive());
        assert!(LawsonF64(1e-6).is_positive());
        assert!(LawsonF64(-1e-6).is_negative());
        assert_eq!(LawsonF64(-3.0).sign(), -1);
    }

    #[test]
    fn equality_is_bitwise() {
        assert_eq!(LawsonF64(0.5), LawsonF64::from_num_den(1, 2));
        assert_ne!(LawsonF64(0.5), LawsonF64(0.5 + 1e-15));
        assert_eq!(
            LawsonF64::cmp_ref(&LawsonF64(1.0), &LawsonF64(2.0)),
            Ordering::Less
        );
    }
}
