//! Square-root approximation for arbitrary-precision decimals.
//!
//! The engine iterates the Babylonian fixed point `x' = (x + n/x) / 2`,
//! starting from `(n + 1) / 2`, which is an upper bound on the root for
//! every non-negative `n`. Three termination modes are offered:
//!
//! - **precision-bounded**: stop when two successive iterates differ by less
//!   than a caller-supplied epsilon in the open interval `(0, 1)`;
//! - **scale-bounded**: stop when two successive iterates, rounded to a
//!   caller-supplied number of fractional digits with a [RoundingMode], agree;
//! - **both**: converge by precision, then round the result once.
//!
//! # Examples
//!
//! ```rust
//! use matrica::domains::decimal::{Decimal, RoundingMode};
//! use matrica::sqrt;
//!
//! let r = sqrt::sqrt_rounded(&Decimal::from(2), 2, RoundingMode::HalfEven).unwrap();
//! assert_eq!(r, "1.41".parse().unwrap());
//! ```

use std::fmt::{Display, Formatter};

use crate::domains::decimal::{Decimal, RoundingMode};

/// The precision used when no epsilon is supplied: `10^-14`.
pub fn default_precision() -> Decimal {
    Decimal::new(1, 14)
}

/// Errors that can occur when requesting a square root.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SqrtError {
    /// The radicand was negative.
    NegativeValue(Decimal),
    /// The requested precision was outside the open interval `(0, 1)`.
    InvalidPrecision(Decimal),
}

impl Display for SqrtError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SqrtError::NegativeValue(v) => {
                write!(f, "expected value to be non-negative but actual {}", v)
            }
            SqrtError::InvalidPrecision(p) => {
                write!(f, "expected precision in (0, 1) but actual {}", p)
            }
        }
    }
}

/// Approximate the square root of `n` with the default precision.
pub fn sqrt(n: &Decimal) -> Result<Decimal, SqrtError> {
    if n.is_negative() {
        return Err(SqrtError::NegativeValue(n.clone()));
    }
    Ok(heron(n, &default_precision()))
}

/// Approximate the square root of `n`, iterating until two successive
/// iterates differ by less than `precision`.
pub fn sqrt_with_precision(n: &Decimal, precision: &Decimal) -> Result<Decimal, SqrtError> {
    if n.is_negative() {
        return Err(SqrtError::NegativeValue(n.clone()));
    }
    check_precision(precision)?;
    Ok(heron(n, precision))
}

/// Approximate the square root of `n`, iterating until two successive
/// iterates rounded to `scale` fractional digits with `mode` agree.
pub fn sqrt_rounded(n: &Decimal, scale: u32, mode: RoundingMode) -> Result<Decimal, SqrtError> {
    if n.is_negative() {
        return Err(SqrtError::NegativeValue(n.clone()));
    }
    Ok(heron_rounded(n, scale, mode))
}

/// Converge by `precision`, then round the result to `scale` fractional
/// digits with `mode`.
pub fn sqrt_with_precision_rounded(
    n: &Decimal,
    precision: &Decimal,
    scale: u32,
    mode: RoundingMode,
) -> Result<Decimal, SqrtError> {
    if n.is_negative() {
        return Err(SqrtError::NegativeValue(n.clone()));
    }
    check_precision(precision)?;
    Ok(heron(n, precision).round(scale, mode))
}

fn check_precision(precision: &Decimal) -> Result<(), SqrtError> {
    if precision <= &Decimal::zero() || precision >= &Decimal::one() {
        return Err(SqrtError::InvalidPrecision(precision.clone()));
    }
    Ok(())
}

/// Square root of a known non-negative value at the default precision.
pub(crate) fn sqrt_positive(n: &Decimal) -> Decimal {
    debug_assert!(!n.is_negative());
    heron(n, &default_precision())
}

/// Square root of a known non-negative value at the given precision.
pub(crate) fn sqrt_positive_with(n: &Decimal, precision: &Decimal) -> Decimal {
    debug_assert!(!n.is_negative());
    heron(n, precision)
}

/// Square root of a known non-negative value, rounded to `scale`.
pub(crate) fn sqrt_positive_rounded(n: &Decimal, scale: u32, mode: RoundingMode) -> Decimal {
    debug_assert!(!n.is_negative());
    heron_rounded(n, scale, mode)
}

/// `(n + 1) / 2 >= sqrt(n)` for all `n >= 0` by the AM-GM inequality, so the
/// iteration approaches the root from above.
fn initial_guess(n: &Decimal) -> Decimal {
    (n + &Decimal::one()).half()
}

fn heron(n: &Decimal, precision: &Decimal) -> Decimal {
    if n.is_zero() {
        return Decimal::zero();
    }

    // divisions carry two guard digits beyond the requested precision
    let work_scale = precision.scale().max(1) as u32 + 2;
    let mut x = initial_guess(n).round(work_scale, RoundingMode::HalfEven);

    loop {
        let q = n
            .div_to_scale(&x, work_scale, RoundingMode::HalfEven)
            .expect("iterate is positive");
        let next = (&x + &q).half().round(work_scale, RoundingMode::HalfEven);
        if (&next - &x).abs() < *precision {
            return next;
        }
        x = next;
    }
}

fn heron_rounded(n: &Decimal, scale: u32, mode: RoundingMode) -> Decimal {
    if n.is_zero() {
        return Decimal::zero();
    }

    let work_scale = scale + 2;
    // the iterate itself stays unrounded; only the stop test rounds, so a
    // root below the smallest representable step cannot zero the divisor
    let mut x = initial_guess(n);
    let mut last = x.round(scale, mode);
    let mut previous: Option<Decimal> = None;

    loop {
        let q = n
            .div_to_scale(&x, work_scale, RoundingMode::HalfEven)
            .expect("iterate is positive");
        x = (&x + &q).half();

        let rounded = x.round(scale, mode);
        // the second comparison guards against a two-cycle introduced by rounding
        if rounded == last || previous.as_ref() == Some(&rounded) {
            return rounded;
        }
        previous = Some(std::mem::replace(&mut last, rounded));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domains::decimal::{Decimal, RoundingMode};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn zero_and_negative() {
        assert_eq!(sqrt(&Decimal::zero()).unwrap(), Decimal::zero());
        assert_eq!(
            sqrt(&d("-1")),
            Err(SqrtError::NegativeValue(d("-1")))
        );
    }

    #[test]
    fn invalid_precision() {
        let n = Decimal::from(2);
        assert!(matches!(
            sqrt_with_precision(&n, &Decimal::zero()),
            Err(SqrtError::InvalidPrecision(_))
        ));
        assert!(matches!(
            sqrt_with_precision(&n, &Decimal::one()),
            Err(SqrtError::InvalidPrecision(_))
        ));
        assert!(matches!(
            sqrt_with_precision(&n, &d("1.5")),
            Err(SqrtError::InvalidPrecision(_))
        ));
        assert!(sqrt_with_precision(&n, &d("0.001")).is_ok());
    }

    #[test]
    fn perfect_squares() {
        for (n, root) in [(4, 2), (9, 3), (25, 5), (144, 12)] {
            let r = sqrt(&Decimal::from(n)).unwrap();
            let err = (&r - &Decimal::from(root)).abs();
            assert!(err < d("0.000000000001"), "sqrt({}) = {}", n, r);
        }
    }

    #[test]
    fn rounded_mode() {
        assert_eq!(
            sqrt_rounded(&Decimal::from(2), 2, RoundingMode::HalfEven).unwrap(),
            d("1.41")
        );
        assert_eq!(
            sqrt_rounded(&Decimal::from(9), 4, RoundingMode::HalfEven).unwrap(),
            d("3")
        );
        assert_eq!(
            sqrt_rounded(&Decimal::zero(), 2, RoundingMode::HalfEven).unwrap(),
            Decimal::zero()
        );
    }

    #[test]
    fn precision_then_rounding() {
        let r = sqrt_with_precision_rounded(
            &Decimal::from(2),
            &d("0.0000000001"),
            3,
            RoundingMode::HalfUp,
        )
        .unwrap();
        assert_eq!(r, d("1.414"));
    }

    #[test]
    fn fractional_radicand() {
        // sqrt(0.25) = 0.5
        let r = sqrt(&d("0.25")).unwrap();
        assert!((&r - &d("0.5")).abs() < d("0.000000000001"));
    }
}
