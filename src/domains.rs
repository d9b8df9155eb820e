//! Defines the algebraic traits the vector and matrix types are generic over.
//!
//! The core trait is [Ring], which has two binary operations, addition and
//! multiplication. Each ring has an associated element type, that should not be
//! confused with the ring type itself. For example:
//! - The ring of integers [Z](type@integer::Z) has elements of type [Integer](integer::Integer).
//! - The ring of decimals [D](decimal::D) has elements of type [Decimal](decimal::Decimal).
//! - The Gaussian integers [CZ](complex::CZ) have elements of type
//!   [Complex](complex::Complex)`<`[Integer](integer::Integer)`>`.
//!
//! In general, the ring elements do not implement operations such as addition or
//! multiplication themselves; the ring does. All vector and matrix structures are
//! generic over the ring type, so that one implementation serves every scalar
//! domain.
//!
//! An extension of the ring trait is [`NormedRing`], which adds an absolute value
//! with a decimal-valued magnitude. It is the bound required by every norm and
//! distance computation.

pub mod complex;
pub mod decimal;
pub mod integer;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use self::decimal::Decimal;

/// The internal ordering trait is used to compare elements of a ring.
/// This ordering is defined even for rings that do not have a total ordering,
/// such as complex numbers, which compare lexicographically by real part and
/// then by imaginary part.
pub trait InternalOrdering {
    /// Compare two elements using an internal ordering.
    fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering;
}

/// A ring is a set with two binary operations, addition and multiplication.
///
/// Each ring has an element type, that should not be confused with the ring
/// type itself. Ring values are lightweight and carry any context the
/// operations need; for example the decimal ring carries the scale and
/// rounding mode used for division.
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of the ring. For example, the elements of the ring of
    /// integers [Z](type@integer::Z) are of type [Integer](integer::Integer).
    type Element: Clone + PartialEq + Eq + Hash + InternalOrdering + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Compute `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    /// Compute `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Compute `b^e`. An exponent of zero yields the multiplicative identity.
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Return the result of dividing `a` by `b`, if possible and if the result
    /// is unique. Returns `None` when `b` is the additive identity, and for
    /// rings that are not fields also when the quotient does not exist
    /// (for example `3/2` in [Z](type@integer::Z)).
    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element>;

    /// Sample a uniformly random element with components drawn from `range`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;
}

/// A ring whose elements have an absolute value with a decimal-valued
/// magnitude. The magnitude type is [Decimal] for every domain, also for the
/// integers, since the Euclidean norm of an integer vector is in general not
/// an integer.
pub trait NormedRing: Ring {
    /// The absolute value `|a|`. For complex domains this is the modulus,
    /// approximated through the square-root engine at the default precision.
    fn abs(&self, a: &Self::Element) -> Decimal;

    /// The exact squared absolute value `|a|^2`, computed without rounding.
    fn abs_squared(&self, a: &Self::Element) -> Decimal;
}
