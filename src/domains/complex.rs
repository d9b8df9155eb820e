//! Complex numbers over an arbitrary component ring.
//!
//! [Complex] is generic over its component type: `Complex<Integer>` are the
//! Gaussian integers and `Complex<Decimal>` the complex numbers with decimal
//! components. [ComplexRing] lifts any component [Ring] to its complex
//! extension, which is what the vector and matrix types instantiate.
//!
//! # Examples
//!
//! ```rust
//! use matrica::domains::complex::Complex;
//! use matrica::domains::integer::Integer;
//!
//! let a = Complex::new(Integer::new(1), Integer::new(2));
//! let b = Complex::new(Integer::new(3), Integer::new(4));
//! assert_eq!((&a * &b).to_string(), "-5+10i");
//! assert_eq!(a.norm_squared(), Integer::new(5));
//! ```

use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::decimal::{Decimal, DecimalRing, RoundingMode, D};
use super::integer::{Integer, IntegerRing, Z};
use super::{InternalOrdering, NormedRing, Ring};
use crate::sqrt;

/// The ring of Gaussian integers, complex numbers with integer components.
pub type GaussianIntegerRing = ComplexRing<IntegerRing>;
/// The ring of Gaussian integers.
pub const CZ: GaussianIntegerRing = ComplexRing::new(Z);

/// The ring of complex numbers with decimal components, dividing with the
/// default decimal context.
pub type ComplexDecimalRing = ComplexRing<DecimalRing>;
/// The ring of complex numbers with decimal components.
pub const CD: ComplexDecimalRing = ComplexRing::new(D);

/// A complex number `re + i*im` over the component type `T`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    #[inline]
    pub fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }
}

impl<T: InternalOrdering> InternalOrdering for Complex<T> {
    fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.re
            .internal_cmp(&other.re)
            .then_with(|| self.im.internal_cmp(&other.im))
    }
}

impl<T: Clone + Neg<Output = T>> Complex<T> {
    /// The complex conjugate.
    #[inline]
    pub fn conj(&self) -> Complex<T> {
        Complex {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }
}

macro_rules! impl_complex {
    ($t: ty) => {
        impl Complex<$t> {
            #[inline]
            pub fn zero() -> Complex<$t> {
                Complex::new(<$t>::zero(), <$t>::zero())
            }

            #[inline]
            pub fn one() -> Complex<$t> {
                Complex::new(<$t>::one(), <$t>::zero())
            }

            /// The imaginary unit.
            #[inline]
            pub fn i() -> Complex<$t> {
                Complex::new(<$t>::zero(), <$t>::one())
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.re.is_zero() && self.im.is_zero()
            }

            #[inline]
            pub fn is_one(&self) -> bool {
                self.re.is_one() && self.im.is_zero()
            }

            /// A complex number is invertible iff it is not zero.
            #[inline]
            pub fn is_invertible(&self) -> bool {
                !self.is_zero()
            }

            /// The exact squared modulus `re^2 + im^2`.
            pub fn norm_squared(&self) -> $t {
                &self.re * &self.re + &self.im * &self.im
            }

            /// The exact squared absolute value as a decimal.
            pub fn abs_squared(&self) -> Decimal {
                Decimal::from(self.norm_squared())
            }

            /// The modulus, approximated through the square-root engine at
            /// the default precision.
            pub fn abs(&self) -> Decimal {
                sqrt::sqrt_positive(&self.abs_squared())
            }

            /// Compute `self^e`. An exponent of zero yields one.
            pub fn pow(&self, e: u64) -> Complex<$t> {
                let mut result = Complex::<$t>::one();
                let mut base = self.clone();
                let mut e = e;
                while e > 0 {
                    if e & 1 == 1 {
                        result = &result * &base;
                    }
                    e >>= 1;
                    if e > 0 {
                        base = &base * &base;
                    }
                }
                result
            }
        }

        impl<'a, 'b> Add<&'b Complex<$t>> for &'a Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn add(self, rhs: &'b Complex<$t>) -> Complex<$t> {
                Complex::new(&self.re + &rhs.re, &self.im + &rhs.im)
            }
        }

        impl<'a, 'b> Sub<&'b Complex<$t>> for &'a Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn sub(self, rhs: &'b Complex<$t>) -> Complex<$t> {
                Complex::new(&self.re - &rhs.re, &self.im - &rhs.im)
            }
        }

        impl<'a, 'b> Mul<&'b Complex<$t>> for &'a Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn mul(self, rhs: &'b Complex<$t>) -> Complex<$t> {
                Complex::new(
                    &(&self.re * &rhs.re) - &(&self.im * &rhs.im),
                    &(&self.re * &rhs.im) + &(&self.im * &rhs.re),
                )
            }
        }

        impl Add<Complex<$t>> for Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn add(self, rhs: Complex<$t>) -> Complex<$t> {
                &self + &rhs
            }
        }

        impl Sub<Complex<$t>> for Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn sub(self, rhs: Complex<$t>) -> Complex<$t> {
                &self - &rhs
            }
        }

        impl Mul<Complex<$t>> for Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                &self * &rhs
            }
        }

        impl Neg for &Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn neg(self) -> Complex<$t> {
                Complex::new(-&self.re, -&self.im)
            }
        }

        impl Neg for Complex<$t> {
            type Output = Complex<$t>;

            #[inline]
            fn neg(self) -> Complex<$t> {
                -&self
            }
        }

        impl AddAssign<&Complex<$t>> for Complex<$t> {
            #[inline]
            fn add_assign(&mut self, rhs: &Complex<$t>) {
                *self = &*self + rhs;
            }
        }

        impl SubAssign<&Complex<$t>> for Complex<$t> {
            #[inline]
            fn sub_assign(&mut self, rhs: &Complex<$t>) {
                *self = &*self - rhs;
            }
        }

        impl MulAssign<&Complex<$t>> for Complex<$t> {
            #[inline]
            fn mul_assign(&mut self, rhs: &Complex<$t>) {
                *self = &*self * rhs;
            }
        }

        impl Display for Complex<$t> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                if self.im.is_negative() {
                    write!(f, "{}-{}i", self.re, self.im.abs())
                } else {
                    write!(f, "{}+{}i", self.re, self.im)
                }
            }
        }

        impl Debug for Complex<$t> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(self, f)
            }
        }
    };
}

impl_complex!(Integer);
impl_complex!(Decimal);

impl Complex<Integer> {
    /// Divide by `rhs` via `z/w = z conj(w) / |w|^2`, carrying the quotient
    /// into the decimal domain at `scale` fractional digits.
    /// Returns `None` when `rhs` is zero.
    pub fn div(
        &self,
        rhs: &Complex<Integer>,
        scale: u32,
        mode: RoundingMode,
    ) -> Option<Complex<Decimal>> {
        if rhs.is_zero() {
            return None;
        }

        let num = self * &rhs.conj();
        let den = Decimal::from(rhs.norm_squared());
        let re = Decimal::from(num.re).div_to_scale(&den, scale, mode)?;
        let im = Decimal::from(num.im).div_to_scale(&den, scale, mode)?;
        Some(Complex::new(re, im))
    }
}

impl Complex<Decimal> {
    /// Divide by `rhs` via `z/w = z conj(w) / |w|^2`, rounded to `scale`
    /// fractional digits. Returns `None` when `rhs` is zero.
    pub fn div(
        &self,
        rhs: &Complex<Decimal>,
        scale: u32,
        mode: RoundingMode,
    ) -> Option<Complex<Decimal>> {
        if rhs.is_zero() {
            return None;
        }

        let num = self * &rhs.conj();
        let den = rhs.norm_squared();
        let re = num.re.div_to_scale(&den, scale, mode)?;
        let im = num.im.div_to_scale(&den, scale, mode)?;
        Some(Complex::new(re, im))
    }
}

/// The complex extension of a component ring `R`: elements are
/// `Complex<R::Element>` and all arithmetic is delegated componentwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ComplexRing<R: Ring> {
    base: R,
}

impl<R: Ring> ComplexRing<R> {
    pub const fn new(base: R) -> ComplexRing<R> {
        ComplexRing { base }
    }

    /// The component ring.
    pub fn base(&self) -> &R {
        &self.base
    }
}

impl<R: Ring> Display for ComplexRing<R> {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl<R: Ring> Ring for ComplexRing<R>
where
    Complex<R::Element>: Debug + Display,
{
    type Element = Complex<R::Element>;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Complex::new(self.base.add(&a.re, &b.re), self.base.add(&a.im, &b.im))
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Complex::new(self.base.sub(&a.re, &b.re), self.base.sub(&a.im, &b.im))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Complex::new(
            self.base
                .sub(&self.base.mul(&a.re, &b.re), &self.base.mul(&a.im, &b.im)),
            self.base
                .add(&self.base.mul(&a.re, &b.im), &self.base.mul(&a.im, &b.re)),
        )
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        self.base.add_assign(&mut a.re, &b.re);
        self.base.add_assign(&mut a.im, &b.im);
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        self.base.sub_assign(&mut a.re, &b.re);
        self.base.sub_assign(&mut a.im, &b.im);
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        self.base.add_mul_assign(&mut a.re, &b.re, &c.re);
        self.base.sub_mul_assign(&mut a.re, &b.im, &c.im);
        self.base.add_mul_assign(&mut a.im, &b.re, &c.im);
        self.base.add_mul_assign(&mut a.im, &b.im, &c.re);
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        self.base.sub_mul_assign(&mut a.re, &b.re, &c.re);
        self.base.add_mul_assign(&mut a.re, &b.im, &c.im);
        self.base.sub_mul_assign(&mut a.im, &b.re, &c.im);
        self.base.sub_mul_assign(&mut a.im, &b.im, &c.re);
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        Complex::new(self.base.neg(&a.re), self.base.neg(&a.im))
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Complex::new(self.base.zero(), self.base.zero())
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Complex::new(self.base.one(), self.base.zero())
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        let mut result = self.one();
        let mut base = b.clone();
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        R::is_zero(&a.re) && R::is_zero(&a.im)
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        self.base.is_one(&a.re) && R::is_zero(&a.im)
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if Self::is_zero(b) {
            return None;
        }

        // a / b = a conj(b) / |b|^2, componentwise in the base ring
        let den = self
            .base
            .add(&self.base.mul(&b.re, &b.re), &self.base.mul(&b.im, &b.im));
        let num_re = self
            .base
            .add(&self.base.mul(&a.re, &b.re), &self.base.mul(&a.im, &b.im));
        let num_im = self
            .base
            .sub(&self.base.mul(&a.im, &b.re), &self.base.mul(&a.re, &b.im));

        Some(Complex::new(
            self.base.try_div(&num_re, &den)?,
            self.base.try_div(&num_im, &den)?,
        ))
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Complex::new(self.base.sample(rng, range), self.base.sample(rng, range))
    }
}

impl NormedRing for GaussianIntegerRing {
    #[inline]
    fn abs(&self, a: &Self::Element) -> Decimal {
        a.abs()
    }

    #[inline]
    fn abs_squared(&self, a: &Self::Element) -> Decimal {
        a.abs_squared()
    }
}

impl NormedRing for ComplexDecimalRing {
    #[inline]
    fn abs(&self, a: &Self::Element) -> Decimal {
        a.abs()
    }

    #[inline]
    fn abs_squared(&self, a: &Self::Element) -> Decimal {
        a.abs_squared()
    }
}

#[cfg(test)]
mod test {
    use super::{Complex, CZ};
    use crate::domains::decimal::{Decimal, RoundingMode};
    use crate::domains::integer::Integer;
    use crate::domains::Ring;

    fn c(re: i64, im: i64) -> Complex<Integer> {
        Complex::new(Integer::new(re), Integer::new(im))
    }

    #[test]
    fn arithmetic() {
        let a = c(1, 2);
        let b = c(3, 4);

        assert_eq!(&a + &b, c(4, 6));
        assert_eq!(&a - &b, c(-2, -2));
        assert_eq!(&a * &b, c(-5, 10));
        assert_eq!(-&a, c(-1, -2));
        assert_eq!(a.conj(), c(1, -2));
        assert_eq!(a.norm_squared(), Integer::new(5));
    }

    #[test]
    fn powers() {
        assert_eq!(c(1, 1).pow(2), c(0, 2));
        assert_eq!(c(0, 1).pow(4), c(1, 0));
        assert_eq!(c(3, -7).pow(0), c(1, 0));
    }

    #[test]
    fn gaussian_division() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i, exactly
        assert_eq!(CZ.try_div(&c(-5, 10), &c(3, 4)), Some(c(1, 2)));
        assert_eq!(CZ.try_div(&c(1, 0), &c(0, 0)), None);
        // 1 / (1 + i) does not exist over the Gaussian integers
        assert_eq!(CZ.try_div(&c(1, 0), &c(1, 1)), None);
    }

    #[test]
    fn decimal_division() {
        // (1 + i) / 2 = 0.5 + 0.5i
        let q = c(1, 1).div(&c(2, 0), 2, RoundingMode::HalfEven).unwrap();
        assert_eq!(
            q,
            Complex::new(Decimal::new(5, 1), Decimal::new(5, 1))
        );
        assert_eq!(c(1, 1).div(&c(0, 0), 2, RoundingMode::HalfEven), None);
    }

    #[test]
    fn modulus() {
        let z = c(3, 4);
        assert_eq!(z.abs_squared(), Decimal::from(25));
        let err = (&z.abs() - &Decimal::from(5)).abs();
        assert!(err < Decimal::new(1, 12));
    }

    #[test]
    fn printing() {
        assert_eq!(c(3, 4).to_string(), "3+4i");
        assert_eq!(c(3, -4).to_string(), "3-4i");
        assert_eq!(c(0, 0).to_string(), "0+0i");
    }
}
