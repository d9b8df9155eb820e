//! The ring of arbitrary-precision decimals.
//!
//! A [Decimal] is the exact value `digits * 10^-scale` with an
//! arbitrary-precision significand. Addition, subtraction and multiplication
//! are exact; division rounds to a caller-supplied scale with a
//! [RoundingMode]. Every decimal is kept in canonical form (no trailing zeros
//! in the significand), so equality, hashing and ordering all agree with the
//! numeric value: `1.0 == 1.00`.
//!
//! # Examples
//!
//! ```rust
//! use matrica::domains::decimal::{Decimal, RoundingMode};
//!
//! let a: Decimal = "3.25".parse().unwrap();
//! assert_eq!(a.round(1, RoundingMode::HalfEven), "3.2".parse().unwrap());
//!
//! let third = Decimal::from(1)
//!     .div_to_scale(&Decimal::from(3), 10, RoundingMode::HalfEven)
//!     .unwrap();
//! assert_eq!(third, "0.3333333333".parse().unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rand::Rng;
use rug::{Complete, Integer as MultiPrecisionInteger};

use super::integer::{Integer, IntegerRing};
use super::{InternalOrdering, NormedRing, Ring};

/// The scale used by the default decimal ring [D] for division.
pub const DEFAULT_SCALE: u32 = 16;

/// The decimal ring with the default division context
/// (scale 16, [RoundingMode::HalfEven]).
pub const D: DecimalRing = DecimalRing::new(DEFAULT_SCALE, RoundingMode::HalfEven);

/// How a value that does not fit the requested scale is rounded to it.
/// The modes match the usual decimal-arithmetic conventions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round towards zero.
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
    /// Round to the nearest neighbor; ties round away from zero.
    HalfUp,
    /// Round to the nearest neighbor; ties round towards zero.
    HalfDown,
    /// Round to the nearest neighbor; ties round to the even neighbor.
    HalfEven,
}

/// An arbitrary-precision decimal `digits * 10^-scale`, in canonical form:
/// the significand carries no trailing zeros and zero has scale 0.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: Integer,
    scale: i64,
}

/// Compute `10^k` for a non-negative shift.
fn pow10(k: i64) -> Integer {
    assert!(k >= 0, "Negative power of ten in scale alignment: {}", k);
    if k <= 18 {
        Integer::Natural(10i64.pow(k as u32))
    } else if k <= u32::MAX as i64 {
        Integer::from(MultiPrecisionInteger::u_pow_u(10, k as u32).complete())
    } else {
        panic!("Decimal scale difference is larger than 2^32: {}", k);
    }
}

/// Divide `num` by `den` and round the quotient to an integer with `mode`.
fn divide_round(num: &Integer, den: &Integer, mode: RoundingMode) -> Integer {
    let negative = num.is_negative() != den.is_negative();
    let num = num.abs();
    let den = den.abs();

    let (q, r) = num.div_rem(&den);
    let q = if r.is_zero() {
        q
    } else {
        let round_away = match mode {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
                match (&r + &r).cmp(&den) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => match mode {
                        RoundingMode::HalfUp => true,
                        RoundingMode::HalfDown => false,
                        _ => !q.is_even(),
                    },
                }
            }
        };

        if round_away {
            &q + &Integer::one()
        } else {
            q
        }
    };

    if negative {
        -&q
    } else {
        q
    }
}

impl Decimal {
    /// Create the decimal `digits * 10^-scale`, brought into canonical form.
    pub fn new<T: Into<Integer>>(digits: T, scale: i64) -> Decimal {
        Decimal::normalized(digits.into(), scale)
    }

    fn normalized(mut digits: Integer, mut scale: i64) -> Decimal {
        if digits.is_zero() {
            return Decimal {
                digits,
                scale: 0,
            };
        }

        let ten = Integer::Natural(10);
        loop {
            let (q, r) = digits.div_rem(&ten);
            if r.is_zero() {
                digits = q;
                scale -= 1;
            } else {
                break;
            }
        }

        Decimal { digits, scale }
    }

    #[inline]
    pub fn zero() -> Decimal {
        Decimal {
            digits: Integer::zero(),
            scale: 0,
        }
    }

    #[inline]
    pub fn one() -> Decimal {
        Decimal {
            digits: Integer::one(),
            scale: 0,
        }
    }

    /// The canonical significand.
    pub fn digits(&self) -> &Integer {
        &self.digits
    }

    /// The canonical scale. Negative for multiples of ten, e.g. `300 = 3e2`
    /// has scale `-2`.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.scale == 0 && self.digits.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.digits.is_negative()
    }

    pub fn abs(&self) -> Decimal {
        Decimal {
            digits: self.digits.abs(),
            scale: self.scale,
        }
    }

    /// Compute `self^e` exactly. An exponent of zero yields one.
    pub fn pow(&self, e: u64) -> Decimal {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }

        let scale = self
            .scale
            .checked_mul(e as i64)
            .expect("Decimal scale overflow in pow");
        Decimal::normalized(self.digits.pow(e), scale)
    }

    /// Round to `scale` fractional digits with the given mode. Values already
    /// representable at the scale are returned unchanged.
    pub fn round(&self, scale: u32, mode: RoundingMode) -> Decimal {
        let target = scale as i64;
        if self.scale <= target {
            return self.clone();
        }

        let q = divide_round(&self.digits, &pow10(self.scale - target), mode);
        Decimal::normalized(q, target)
    }

    /// Divide by `rhs`, correctly rounded to `scale` fractional digits.
    /// Returns `None` when `rhs` is zero.
    pub fn div_to_scale(&self, rhs: &Decimal, scale: u32, mode: RoundingMode) -> Option<Decimal> {
        if rhs.is_zero() {
            return None;
        }

        let target = scale as i64;
        let shift = target + rhs.scale - self.scale;
        let (num, den) = if shift >= 0 {
            (&self.digits * &pow10(shift), rhs.digits.clone())
        } else {
            (self.digits.clone(), &rhs.digits * &pow10(-shift))
        };

        Some(Decimal::normalized(divide_round(&num, &den, mode), target))
    }

    /// Halve the value; exact, since `x/2 = 5x * 10^-1`.
    pub(crate) fn half(&self) -> Decimal {
        Decimal::normalized(&self.digits * &Integer::Natural(5), self.scale + 1)
    }
}

impl<T: Into<Integer>> From<T> for Decimal {
    fn from(value: T) -> Self {
        Decimal::normalized(value.into(), 0)
    }
}

impl FromStr for Decimal {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };

        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err("Could not parse decimal");
        }

        let digits: Integer = format!("{}{}", int_part, frac_part)
            .parse()
            .map_err(|_| "Could not parse decimal")?;
        Ok(Decimal::normalized(digits, frac_part.len() as i64))
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.digits.is_negative() {
            write!(f, "-")?;
        }
        let s = self.digits.abs().to_string();

        if self.scale <= 0 {
            write!(f, "{}", s)?;
            for _ in 0..-self.scale {
                write!(f, "0")?;
            }
            Ok(())
        } else {
            let scale = self.scale as usize;
            if s.len() > scale {
                write!(f, "{}.{}", &s[..s.len() - scale], &s[s.len() - scale..])
            } else {
                write!(f, "0.{}{}", "0".repeat(scale - s.len()), s)
            }
        }
    }
}

impl std::fmt::Debug for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            self.digits.cmp(&other.digits)
        } else if self.scale > other.scale {
            let shifted = &other.digits * &pow10(self.scale - other.scale);
            self.digits.cmp(&shifted)
        } else {
            let shifted = &self.digits * &pow10(other.scale - self.scale);
            shifted.cmp(&other.digits)
        }
    }
}

impl InternalOrdering for Decimal {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl<'a, 'b> Add<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn add(self, rhs: &'b Decimal) -> Decimal {
        if self.scale >= rhs.scale {
            let shifted = &rhs.digits * &pow10(self.scale - rhs.scale);
            Decimal::normalized(&self.digits + &shifted, self.scale)
        } else {
            let shifted = &self.digits * &pow10(rhs.scale - self.scale);
            Decimal::normalized(&shifted + &rhs.digits, rhs.scale)
        }
    }
}

impl<'a, 'b> Sub<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &'b Decimal) -> Decimal {
        if self.scale >= rhs.scale {
            let shifted = &rhs.digits * &pow10(self.scale - rhs.scale);
            Decimal::normalized(&self.digits - &shifted, self.scale)
        } else {
            let shifted = &self.digits * &pow10(rhs.scale - self.scale);
            Decimal::normalized(&shifted - &rhs.digits, rhs.scale)
        }
    }
}

impl<'a, 'b> Mul<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &'b Decimal) -> Decimal {
        Decimal::normalized(&self.digits * &rhs.digits, self.scale + rhs.scale)
    }
}

macro_rules! forward_binop {
    ($trait: ident, $method: ident) => {
        impl $trait<Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $trait<&'a Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &'a Decimal) -> Decimal {
                (&self).$method(rhs)
            }
        }

        impl<'a> $trait<Decimal> for &'a Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal {
            digits: -&self.digits,
            scale: if self.digits.is_zero() { 0 } else { self.scale },
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        -&self
    }
}

impl AddAssign<&Decimal> for Decimal {
    #[inline]
    fn add_assign(&mut self, rhs: &Decimal) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Decimal> for Decimal {
    #[inline]
    fn sub_assign(&mut self, rhs: &Decimal) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Decimal> for Decimal {
    #[inline]
    fn mul_assign(&mut self, rhs: &Decimal) {
        *self = &*self * rhs;
    }
}

/// The decimal ring. It carries the scale and rounding mode applied by
/// [Ring::try_div]; all other operations are exact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DecimalRing {
    scale: u32,
    rounding: RoundingMode,
}

impl DecimalRing {
    pub const fn new(scale: u32, rounding: RoundingMode) -> DecimalRing {
        DecimalRing { scale, rounding }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

impl Default for DecimalRing {
    fn default() -> Self {
        D
    }
}

impl Display for DecimalRing {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl Ring for DecimalRing {
    type Element = Decimal;

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
        Decimal::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Decimal::one()
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
        a.div_to_scale(b, self.scale, self.rounding)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        // sample in hundredths so that fractional values occur
        let r = rng.gen_range(range.0 * 100..range.1 * 100);
        Decimal::new(r, 2)
    }
}

impl NormedRing for DecimalRing {
    #[inline]
    fn abs(&self, a: &Self::Element) -> Decimal {
        a.abs()
    }

    #[inline]
    fn abs_squared(&self, a: &Self::Element) -> Decimal {
        a * a
    }
}

impl NormedRing for IntegerRing {
    #[inline]
    fn abs(&self, a: &Self::Element) -> Decimal {
        Decimal::from(a.abs())
    }

    #[inline]
    fn abs_squared(&self, a: &Self::Element) -> Decimal {
        Decimal::from(a * a)
    }
}
