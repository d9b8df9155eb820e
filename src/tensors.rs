//! Vectors and matrices over the arbitrary-precision scalar domains.

pub mod matrix;
