//! Matrica is an arbitrary-precision linear-algebra library.
//!
//! It provides immutable vector and matrix types over four exact scalar
//! domains — big integers, big decimals, and complex numbers with integer or
//! decimal components — together with the algebraic operations (addition,
//! scalar and matrix multiplication, determinant, trace, transpose, minors),
//! vector and matrix norms, and structural predicates (triangular, diagonal,
//! symmetric, invertible, identity). The vector and matrix types are written
//! once, generically over a [Ring](domains::Ring); the scalar domains are
//! ring instances.
//!
//! All values are exact: decimals are scaled big integers, and only division
//! and the square-root engine round, at a caller-controlled scale and
//! [RoundingMode](domains::decimal::RoundingMode). Norms that need a square
//! root go through the [sqrt] module, which approximates with the Babylonian
//! iteration to a configurable precision.
//!
//! For example:
//!
//! ```
//! use matrica::domains::integer::Z;
//! use matrica::tensors::matrix::Matrix;
//!
//! let m = Matrix::from_nested_vec(
//!     vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
//!     Z,
//! )
//! .unwrap();
//!
//! assert_eq!(m.det().unwrap(), (-2).into());
//! assert_eq!(m.trace().unwrap(), 5.into());
//! assert!(m.is_invertible());
//! ```
//!
//! Every built value is immutable and safe to share across threads; the
//! builders are mutable, short-lived and meant to be confined to a single
//! construction sequence.

pub mod combinatorics;
pub mod domains;
pub mod sqrt;
pub mod tensors;
