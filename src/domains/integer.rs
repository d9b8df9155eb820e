//! The ring of arbitrary-precision integers.
//!
//! [Integer] keeps small values in a machine word and transparently promotes
//! to a GMP integer on overflow, so that vectors and matrices of moderate
//! entries never pay the multi-precision cost.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rand::Rng;
use rug::{ops::Pow, Complete, Integer as MultiPrecisionInteger};

use super::{InternalOrdering, Ring};

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct IntegerRing;

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// An arbitrary-precision integer. Values that fit in an `i64` are stored
/// inline; the `Large` variant never holds a value that fits in an `i64`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    Natural(i64),
    Large(MultiPrecisionInteger),
}

macro_rules! from_with_cast {
    ($base: ty) => {
        impl From<$base> for Integer {
            #[inline]
            fn from(value: $base) -> Self {
                Integer::Natural(value as i64)
            }
        }
    };
}

from_with_cast!(i8);
from_with_cast!(i16);
from_with_cast!(i32);
from_with_cast!(i64);
from_with_cast!(u8);
from_with_cast!(u16);
from_with_cast!(u32);

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Integer::Natural(value as i64)
        } else {
            Integer::Large(MultiPrecisionInteger::from(value))
        }
    }
}

impl From<MultiPrecisionInteger> for Integer {
    /// Convert from a multi-precision integer, downcasting the number
    /// when it fits in a machine word.
    #[inline]
    fn from(n: MultiPrecisionInteger) -> Self {
        if let Some(n) = n.to_i64() {
            Integer::Natural(n)
        } else {
            Integer::Large(n)
        }
    }
}

impl FromStr for Integer {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() <= 20 {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Integer::Natural(n));
            }
        }

        if let Ok(n) = s.parse::<MultiPrecisionInteger>() {
            Ok(Integer::from(n))
        } else {
            Err("Could not parse integer")
        }
    }
}

impl Integer {
    pub fn new(num: i64) -> Integer {
        Integer::Natural(num)
    }

    #[inline]
    pub fn zero() -> Integer {
        Integer::Natural(0)
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::Natural(1)
    }

    #[inline]
    fn from_i128(n: i128) -> Integer {
        if let Ok(n) = i64::try_from(n) {
            Integer::Natural(n)
        } else {
            Integer::Large(MultiPrecisionInteger::from(n))
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 0,
            _ => false,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 1,
            _ => false,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Natural(n) => *n < 0,
            Integer::Large(r) => r.cmp0() == Ordering::Less,
        }
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        match self {
            Integer::Natural(n) => n % 2 == 0,
            Integer::Large(r) => r.is_even(),
        }
    }

    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Integer::Natural(n) => Some(*n),
            _ => None,
        }
    }

    pub fn abs(&self) -> Integer {
        match self {
            Integer::Natural(n) => {
                if *n == i64::MIN {
                    Integer::Large(MultiPrecisionInteger::from(*n).abs())
                } else {
                    Integer::Natural(n.abs())
                }
            }
            Integer::Large(n) => Integer::Large(n.clone().abs()),
        }
    }

    /// Compute `self^e`. An exponent of zero yields one.
    pub fn pow(&self, e: u64) -> Integer {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        let e = e as u32;

        if e == 0 {
            return Integer::one();
        }

        match self {
            Integer::Natural(n) => {
                if let Some(p) = n.checked_pow(e) {
                    Integer::Natural(p)
                } else {
                    Integer::Large(MultiPrecisionInteger::from(*n).pow(e))
                }
            }
            Integer::Large(r) => Integer::Large(r.clone().pow(e)),
        }
    }

    /// Truncating division with remainder; the remainder carries the sign of
    /// the dividend.
    pub fn div_rem(&self, rhs: &Integer) -> (Integer, Integer) {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }

        match (self, rhs) {
            (Integer::Natural(a), Integer::Natural(b)) => {
                let q = *a as i128 / *b as i128;
                let r = *a as i128 % *b as i128;
                (Integer::from_i128(q), Integer::from_i128(r))
            }
            (Integer::Natural(a), Integer::Large(b)) => {
                let (q, r) = MultiPrecisionInteger::from(*a).div_rem(b.clone());
                (Integer::from(q), Integer::from(r))
            }
            (Integer::Large(a), Integer::Natural(b)) => {
                let (q, r) = a.clone().div_rem(MultiPrecisionInteger::from(*b));
                (Integer::from(q), Integer::from(r))
            }
            (Integer::Large(a), Integer::Large(b)) => {
                let (q, r) = a.clone().div_rem(b.clone());
                (Integer::from(q), Integer::from(r))
            }
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Integer::Natural(n) => n.fmt(f),
            Integer::Large(r) => r.fmt(f),
        }
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for IntegerRing {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Natural(n1), Integer::Natural(n2)) => n1.cmp(n2),
            (Integer::Natural(n1), Integer::Large(r2)) => n1.partial_cmp(r2).unwrap(),
            (Integer::Large(r1), Integer::Natural(n2)) => r1.partial_cmp(n2).unwrap(),
            (Integer::Large(r1), Integer::Large(r2)) => r1.cmp(r2),
        }
    }
}

impl InternalOrdering for Integer {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn add(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(n) = n1.checked_add(*n2) {
                    Integer::Natural(n)
                } else {
                    Integer::from_i128(*n1 as i128 + *n2 as i128)
                }
            }
            (Integer::Natural(n), Integer::Large(r)) | (Integer::Large(r), Integer::Natural(n)) => {
                Integer::from((*n + r).complete())
            }
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 + r2).complete()),
        }
    }
}

impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn sub(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(n) = n1.checked_sub(*n2) {
                    Integer::Natural(n)
                } else {
                    Integer::from_i128(*n1 as i128 - *n2 as i128)
                }
            }
            (Integer::Natural(n), Integer::Large(r)) => Integer::from((*n - r).complete()),
            (Integer::Large(r), Integer::Natural(n)) => Integer::from((r - *n).complete()),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 - r2).complete()),
        }
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn mul(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(n) = n1.checked_mul(*n2) {
                    Integer::Natural(n)
                } else {
                    Integer::from_i128(*n1 as i128 * *n2 as i128)
                }
            }
            (Integer::Natural(n), Integer::Large(r)) | (Integer::Large(r), Integer::Natural(n)) => {
                Integer::from((*n * r).complete())
            }
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from((r1 * r2).complete()),
        }
    }
}

macro_rules! forward_binop {
    ($trait: ident, $method: ident) => {
        impl $trait<Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $trait<&'a Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &'a Integer) -> Integer {
                (&self).$method(rhs)
            }
        }

        impl<'a> $trait<Integer> for &'a Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        match self {
            Integer::Natural(n) => {
                if let Some(n) = n.checked_neg() {
                    Integer::Natural(n)
                } else {
                    Integer::Large(-MultiPrecisionInteger::from(*n))
                }
            }
            Integer::Large(r) => Integer::from((-r).complete()),
        }
    }
}

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        -&self
    }
}

impl AddAssign<&Integer> for Integer {
    #[inline]
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Integer> for Integer {
    #[inline]
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Integer> for Integer {
    #[inline]
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a += &(b * c);
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a -= &(b * c);
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Integer::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Integer::one()
    }

    #[inline]
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if b.is_zero() {
            return None;
        }

        let (q, r) = a.div_rem(b);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Integer::Natural(rng.gen_range(range.0..range.1))
    }
}
