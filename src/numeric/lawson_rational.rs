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
use rug::Rational;

use crate::{
    numeric::{lawson_f64::LawsonF64, scalar::Scalar},
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Exact rational scalar. Every predicate evaluated on it is exact.
#[derive(Clone, Debug, Default)]
pub struct LawsonRational(pub Rational);

impl Scalar for LawsonRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        LawsonRational(Rational::from((num, den)))
    }

    fn cmp_ref(a: &Self, b: &Self) -> Ordering {
        a.0.cmp(&b.0)
    }
}

impl<'a, 'b> Add<&'b LawsonRational> for &'a LawsonRational {
    type Output = LawsonRational;

    fn add(self, rhs: &'b LawsonRational) -> LawsonRational {
        // in‐place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        LawsonRational(result)
    }
}

impl Add for LawsonRational {
    type Output = LawsonRational;
    fn add(mut self, rhs: LawsonRational) -> LawsonRational {
        self.0 += &rhs.0;
        self
    }
}

impl<'a, 'b> Sub<&'b LawsonRational> for &'a LawsonRational {
    type Output = LawsonRational;

    fn sub(self, rhs: &'b LawsonRational) -> LawsonRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        LawsonRational(result)
    }
}

impl Sub for LawsonRational {
    type Output = LawsonRational;
    fn sub(mut self, rhs: LawsonRational) -> LawsonRational {
        self.0 -= &rhs.0;
        self
    }
}

impl<'a, 'b> Mul<&'b LawsonRational> for &'a LawsonRational {
    type Output = LawsonRational;

    fn mul(self, rhs: &'b LawsonRational) -> LawsonRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        LawsonRational(result)
    }
}

impl Mul for LawsonRational {
    type Output = LawsonRational;
    fn mul(mut self, rhs: LawsonRational) -> LawsonRational {
        self.0 *= &rhs.0;
        self
    }
}

impl<'a, 'b> Div<&'b LawsonRational> for &'a LawsonRational {
    type Output = LawsonRational;

    fn div(self, rhs: &'b LawsonRational) -> LawsonRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        LawsonRational(result)
    }
}

impl Div for LawsonRational {
    type Output = LawsonRational;
    fn div(mut self, rhs: LawsonRational) -> LawsonRational {
        self.0 /= &rhs.0;
        self
    }
}

impl<'c> AddAssign<&'c LawsonRational> for LawsonRational {
    fn add_assign(&mut self, rhs: &'c LawsonRational) {
        self.0 += &rhs.0;
    }
}

impl<'d> SubAssign<&'d LawsonRational> for LawsonRational {
    fn sub_assign(&mut self, rhs: &'d LawsonRational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for LawsonRational {
    type Output = LawsonRational;

    fn neg(self) -> LawsonRational {
        LawsonRational(-self.0)
    }
}

impl<'a> Neg for &'a LawsonRational {
    type Output = LawsonRational;

    fn neg(self) -> LawsonRational {
        LawsonRational(-self.0.clone())
    }
}

impl From<i32> for LawsonRational {
    fn from(value: i32) -> Self {
        LawsonRational(Rational::from(value))
    }
}

/// Non-finite input maps to zero.
impl From<f64> for LawsonRational {
    fn from(value: f64) -> Self {
        LawsonRational(Rational::from_f64(value).unwrap_or_default())
    }
}

impl From<LawsonF64> for LawsonRational {
    fn from(value: LawsonF64) -> Self {
        LawsonRational::from(value.0)
    }
}

impl From<Rational> for LawsonRational {
    fn from(value: Rational) -> Self {
        LawsonRational(value)
    }
}

impl ToPrimitive for LawsonRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl PartialEq for LawsonRational {
    fn eq(&self, other: &LawsonRational) -> bool {
        self.0 == other.0
    }
}

impl Eq for LawsonRational {}

impl PartialOrd for LawsonRational {
    fn partial_cmp(&self, other: &LawsonRational) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Hash for LawsonRational {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Zero for LawsonRational {
    fn zero() -> Self {
        LawsonRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
    fn is_positive_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Less
    }
    fn is_negative_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Greater
    }
}

impl One for LawsonRational {
    fn one() -> Self {
        LawsonRational(Rational::from(1))
    }
}

impl Abs for LawsonRational {
    fn abs(&self) -> Self {
        LawsonRational(self.0.clone().abs())
    }
}
