//! Immutable vectors and matrices over an arbitrary scalar [Ring], with
//! validating builders, norms and structural predicates.
//!
//! Indices in the public interface are 1-based, matching the usual
//! mathematical convention: the entries of an `m x n` matrix are addressed as
//! `(1, 1)` through `(m, n)`. Dimension mismatches in the operator impls
//! (`+`, `-`, `*`) panic with a message carrying both dimension pairs;
//! operations with a precondition on the shape of a single operand (trace,
//! determinant, minor, element access) return a typed [MatrixError] instead.
//!
//! The determinant is size-specialized: closed forms up to `3 x 3`, and the
//! Leibniz permutation formula beyond. The latter sums `n!` signed products
//! and is therefore only suitable for small matrices; this is a documented
//! scaling limit of the exact algorithm, not an oversight.
//!
//! # Examples
//!
//! ```rust
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
//! assert!(m.is_invertible());
//! ```

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::Chunks;

use ahash::HashMap;
use rand::Rng;

use crate::combinatorics::PermutationIterator;
use crate::domains::decimal::{Decimal, RoundingMode};
use crate::domains::{NormedRing, Ring};
use crate::sqrt::{self, SqrtError};

/// Errors that can occur when constructing or inspecting vectors and
/// matrices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MatrixError {
    /// A square-only operation was invoked on a non-square matrix.
    NotSquare { nrows: u32, ncols: u32 },
    /// A 1-based index was outside its valid range.
    IndexOutOfRange {
        what: &'static str,
        index: u32,
        size: u32,
    },
    /// A vector builder was finished with an unfilled index.
    MissingIndex { index: u32 },
    /// A matrix builder was finished with an unfilled cell.
    MissingEntry { row: u32, col: u32 },
    /// A dimension was below its minimum.
    InvalidDimension {
        what: &'static str,
        min: u32,
        actual: u32,
    },
    /// The data handed to [Matrix::from_linear] does not fill the matrix.
    DataLengthMismatch { len: usize, nrows: u32, ncols: u32 },
    /// The rows handed to [Matrix::from_nested_vec] have unequal lengths.
    NotRectangular,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "expected square matrix but actual {} x {}", nrows, ncols)
            }
            MatrixError::IndexOutOfRange { what, index, size } => {
                write!(f, "expected {} in [1, {}] but actual {}", what, size, index)
            }
            MatrixError::MissingIndex { index } => {
                write!(f, "element missing at index {}", index)
            }
            MatrixError::MissingEntry { row, col } => {
                write!(f, "element missing at row {} and column {}", row, col)
            }
            MatrixError::InvalidDimension { what, min, actual } => {
                write!(f, "expected {} of at least {} but actual {}", what, min, actual)
            }
            MatrixError::DataLengthMismatch { len, nrows, ncols } => {
                write!(
                    f,
                    "data length does not match matrix dimensions: {} vs ({},{})",
                    len, nrows, ncols
                )
            }
            MatrixError::NotRectangular => write!(f, "matrix is not rectangular"),
        }
    }
}

/// An n-dimensional immutable vector with entries in the ring `F`.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) field: F,
}

impl<F: Ring> Vector<F> {
    /// Create a new vector from a list of scalars. Panics when `data` is
    /// empty; vectors have at least one entry.
    pub fn new(data: Vec<F::Element>, field: F) -> Vector<F> {
        if data.is_empty() {
            panic!("Vectors must have at least one entry");
        }
        Vector { data, field }
    }

    /// Create a new zero vector with the same size as an existing one.
    pub fn new_zero(&self) -> Vector<F> {
        Vector {
            data: vec![self.field.zero(); self.data.len()],
            field: self.field.clone(),
        }
    }

    /// Create a builder for a vector of the given size.
    pub fn builder(size: u32, field: F) -> Result<VectorBuilder<F>, MatrixError> {
        VectorBuilder::new(size, field)
    }

    /// The number of entries.
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// The ring of the vector entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// The 1-based `index`th entry.
    pub fn element(&self, index: u32) -> Result<&F::Element, MatrixError> {
        if index < 1 || index > self.size() {
            return Err(MatrixError::IndexOutOfRange {
                what: "index",
                index,
                size: self.size(),
            });
        }
        Ok(&self.data[index as usize - 1])
    }

    /// Iterate over the entries in index order.
    pub fn elements(&self) -> std::slice::Iter<'_, F::Element> {
        self.data.iter()
    }

    /// Apply a function `f` to each entry of the vector.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Vector<G> {
        Vector {
            data: self.data.iter().map(f).collect(),
            field,
        }
    }

    /// Multiply each entry by the scalar `e`.
    pub fn mul_scalar(&self, e: &F::Element) -> Vector<F> {
        Vector {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            field: self.field.clone(),
        }
    }

    /// Take the scalar product of two vectors. The product is bilinear; the
    /// entries of `self` are not conjugated for complex domains.
    pub fn dot(&self, rhs: &Self) -> F::Element {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vectors do not have equal dimension: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        let mut res = self.field.zero();
        for (e1, e2) in self.data.iter().zip(&rhs.data) {
            self.field.add_mul_assign(&mut res, e1, e2);
        }

        res
    }

    /// Sample a vector with entries drawn from `range`.
    pub fn sample(size: u32, field: F, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Vector<F> {
        if size == 0 {
            panic!("Vectors must have at least one entry");
        }
        Vector {
            data: (0..size).map(|_| field.sample(rng, range)).collect(),
            field,
        }
    }
}

impl<F: NormedRing> Vector<F> {
    /// The taxicab norm: the sum of the absolute values of the entries.
    pub fn taxicab_norm(&self) -> Decimal {
        let mut norm = Decimal::zero();
        for e in &self.data {
            norm += &self.field.abs(e);
        }
        norm
    }

    /// The exact squared Euclidean norm. For the real domains this equals
    /// `dot(self)`; for the complex domains it is the sum of the squared
    /// moduli of the entries.
    pub fn euclidean_norm_squared(&self) -> Decimal {
        let mut norm = Decimal::zero();
        for e in &self.data {
            norm += &self.field.abs_squared(e);
        }
        norm
    }

    /// The Euclidean norm at the default precision.
    pub fn euclidean_norm(&self) -> Decimal {
        sqrt::sqrt_positive(&self.euclidean_norm_squared())
    }

    /// The Euclidean norm, converged to the given precision in `(0, 1)`.
    pub fn euclidean_norm_with_precision(&self, precision: &Decimal) -> Result<Decimal, SqrtError> {
        sqrt::sqrt_with_precision(&self.euclidean_norm_squared(), precision)
    }

    /// The Euclidean norm, rounded to `scale` fractional digits.
    pub fn euclidean_norm_rounded(&self, scale: u32, mode: RoundingMode) -> Decimal {
        sqrt::sqrt_positive_rounded(&self.euclidean_norm_squared(), scale, mode)
    }

    /// The Euclidean norm, converged to `precision` and then rounded to
    /// `scale` fractional digits.
    pub fn euclidean_norm_with_precision_rounded(
        &self,
        precision: &Decimal,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Decimal, SqrtError> {
        sqrt::sqrt_with_precision_rounded(&self.euclidean_norm_squared(), precision, scale, mode)
    }

    /// The maximum norm: the largest absolute value of an entry.
    pub fn max_norm(&self) -> Decimal {
        let mut max = Decimal::zero();
        for e in &self.data {
            let a = self.field.abs(e);
            if a > max {
                max = a;
            }
        }
        max
    }

    /// The taxicab norm of the difference of two vectors.
    pub fn taxicab_distance(&self, rhs: &Self) -> Decimal {
        (self - rhs).taxicab_norm()
    }

    /// The exact squared Euclidean distance of two vectors.
    pub fn euclidean_distance_squared(&self, rhs: &Self) -> Decimal {
        (self - rhs).euclidean_norm_squared()
    }

    /// The Euclidean distance of two vectors at the default precision.
    pub fn euclidean_distance(&self, rhs: &Self) -> Decimal {
        (self - rhs).euclidean_norm()
    }

    /// The Euclidean distance, converged to the given precision in `(0, 1)`.
    pub fn euclidean_distance_with_precision(
        &self,
        rhs: &Self,
        precision: &Decimal,
    ) -> Result<Decimal, SqrtError> {
        (self - rhs).euclidean_norm_with_precision(precision)
    }

    /// The Euclidean distance, rounded to `scale` fractional digits.
    pub fn euclidean_distance_rounded(
        &self,
        rhs: &Self,
        scale: u32,
        mode: RoundingMode,
    ) -> Decimal {
        (self - rhs).euclidean_norm_rounded(scale, mode)
    }

    /// The Euclidean distance, converged to `precision` and then rounded.
    pub fn euclidean_distance_with_precision_rounded(
        &self,
        rhs: &Self,
        precision: &Decimal,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Decimal, SqrtError> {
        (self - rhs).euclidean_norm_with_precision_rounded(precision, scale, mode)
    }

    /// The maximum norm of the difference of two vectors.
    pub fn max_distance(&self, rhs: &Self) -> Decimal {
        (self - rhs).max_norm()
    }
}

impl<F: Ring> Add<&Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    /// Add two vectors.
    fn add(self, rhs: &Vector<F>) -> Self::Output {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot add vectors of different dimensions: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        let mut m = self.new_zero();
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.add(a, b);
        }

        m
    }
}

impl<F: Ring> AddAssign<&Vector<F>> for Vector<F> {
    /// Add two vectors in place.
    fn add_assign(&mut self, rhs: &Vector<F>) {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot add vectors of different dimensions: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.add_assign(a, b);
        }
    }
}

impl<F: Ring> Sub<&Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    /// Subtract two vectors.
    fn sub(self, rhs: &Vector<F>) -> Self::Output {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot subtract vectors of different dimensions: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        let mut m = self.new_zero();
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.sub(a, b);
        }

        m
    }
}

impl<F: Ring> SubAssign<&Vector<F>> for Vector<F> {
    fn sub_assign(&mut self, rhs: &Vector<F>) {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot subtract vectors of different dimensions: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.sub_assign(a, b);
        }
    }
}

impl<F: Ring> Mul<F::Element> for Vector<F> {
    type Output = Vector<F>;

    fn mul(self, rhs: F::Element) -> Self::Output {
        self.mul_scalar(&rhs)
    }
}

impl<F: Ring> Mul<F::Element> for &Vector<F> {
    type Output = Vector<F>;

    fn mul(self, rhs: F::Element) -> Self::Output {
        self.mul_scalar(&rhs)
    }
}

impl<F: Ring> Neg for Vector<F> {
    type Output = Vector<F>;

    /// Negate each entry of the vector.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Ring> Display for Vector<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "}}")
    }
}

/// A single-use validating builder for [Vector]. Entries are collected into
/// a table keyed by 1-based index; [VectorBuilder::build] fails when any
/// index of `1..=size` is unfilled. Builders are short-lived, mutable and
/// confined to one construction sequence.
#[derive(Debug)]
pub struct VectorBuilder<F: Ring> {
    size: u32,
    field: F,
    entries: HashMap<u32, F::Element>,
}

impl<F: Ring> VectorBuilder<F> {
    /// Create a builder for a vector with `size >= 1` entries.
    pub fn new(size: u32, field: F) -> Result<VectorBuilder<F>, MatrixError> {
        if size == 0 {
            return Err(MatrixError::InvalidDimension {
                what: "vector size",
                min: 1,
                actual: 0,
            });
        }

        Ok(VectorBuilder {
            size,
            field,
            entries: HashMap::default(),
        })
    }

    /// Set the 1-based `index`th entry, replacing an earlier value.
    pub fn put(&mut self, index: u32, element: F::Element) -> Result<&mut Self, MatrixError> {
        if index < 1 || index > self.size {
            return Err(MatrixError::IndexOutOfRange {
                what: "index",
                index,
                size: self.size,
            });
        }

        self.entries.insert(index, element);
        Ok(self)
    }

    /// Fill every still-empty slot with `element`.
    pub fn put_all(&mut self, element: &F::Element) -> &mut Self {
        for i in 1..=self.size {
            self.entries.entry(i).or_insert_with(|| element.clone());
        }
        self
    }

    /// Validate completeness and build the vector.
    pub fn build(self) -> Result<Vector<F>, MatrixError> {
        let VectorBuilder {
            size,
            field,
            mut entries,
        } = self;

        let mut data = Vec::with_capacity(size as usize);
        for i in 1..=size {
            match entries.remove(&i) {
                Some(e) => data.push(e),
                None => return Err(MatrixError::MissingIndex { index: i }),
            }
        }

        Ok(Vector { data, field })
    }
}

/// An immutable matrix with entries in the ring `F`, stored in row-major
/// order.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    /// Panics when either dimension is zero.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        if nrows == 0 || ncols == 0 {
            panic!("Matrix dimensions must be at least 1 x 1");
        }

        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| field.zero())
                .collect(),
            nrows,
            ncols,
            field,
        }
    }

    /// Create a new square matrix with ones on the main diagonal and zeroes
    /// elsewhere.
    pub fn identity(nrows: u32, field: F) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for i in 0..nrows {
            *m.at_mut(i, i) = m.field.one();
        }
        m
    }

    /// Create a new square matrix with the scalars `diag` on the main
    /// diagonal and zeroes elsewhere.
    pub fn eye(diag: &[F::Element], field: F) -> Matrix<F> {
        let mut m = Matrix::new(diag.len() as u32, diag.len() as u32, field);
        for (i, e) in diag.iter().enumerate() {
            *m.at_mut(i as u32, i as u32) = e.clone();
        }
        m
    }

    /// Create a builder for a matrix of the given dimensions.
    pub fn builder(nrows: u32, ncols: u32, field: F) -> Result<MatrixBuilder<F>, MatrixError> {
        MatrixBuilder::new(nrows, ncols, field)
    }

    /// Convert a row-major linear representation of a matrix to a [Matrix].
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                what: if nrows == 0 { "row size" } else { "column size" },
                min: 1,
                actual: 0,
            });
        }

        if data.len() != nrows as usize * ncols as usize {
            return Err(MatrixError::DataLengthMismatch {
                len: data.len(),
                nrows,
                ncols,
            });
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            field,
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(
        matrix: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        let nrows = matrix.len();
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                what: if nrows == 0 { "row size" } else { "column size" },
                min: 1,
                actual: 0,
            });
        }

        let mut data = vec![];
        for d in matrix {
            if d.len() != ncols {
                return Err(MatrixError::NotRectangular);
            }

            data.extend(d);
        }

        Ok(Matrix {
            nrows: nrows as u32,
            ncols: ncols as u32,
            data,
            field,
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> u32 {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> u32 {
        self.ncols
    }

    /// Return the ring of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    #[inline]
    fn at(&self, r: u32, c: u32) -> &F::Element {
        &self.data[r as usize * self.ncols as usize + c as usize]
    }

    #[inline]
    fn at_mut(&mut self, r: u32, c: u32) -> &mut F::Element {
        &mut self.data[r as usize * self.ncols as usize + c as usize]
    }

    /// The entry at the 1-based position `(row, col)`.
    pub fn element(&self, row: u32, col: u32) -> Result<&F::Element, MatrixError> {
        if row < 1 || row > self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                what: "row index",
                index: row,
                size: self.nrows,
            });
        }
        if col < 1 || col > self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                what: "column index",
                index: col,
                size: self.ncols,
            });
        }

        Ok(self.at(row - 1, col - 1))
    }

    /// Return an iterator over the rows of the matrix.
    pub fn rows(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols as usize)
    }

    /// Iterate over all cells as `(row, col, entry)` with 1-based indices,
    /// in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &F::Element)> {
        let ncols = self.ncols as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, e)| ((i / ncols) as u32 + 1, (i % ncols) as u32 + 1, e))
    }

    /// Iterate over the entries in row-major order.
    pub fn elements(&self) -> std::slice::Iter<'_, F::Element> {
        self.data.iter()
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        }
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                *m.at_mut(j, i) = self.at(i, j).clone();
            }
        }
        m
    }

    /// Transpose the matrix in-place.
    pub fn into_transposed(mut self) -> Matrix<F> {
        if self.nrows == self.ncols {
            for i in 0..self.nrows {
                for j in 0..i {
                    self.data
                        .swap((self.ncols * i + j) as usize, (self.ncols * j + i) as usize);
                }
            }

            self
        } else {
            let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
            for i in 0..self.nrows {
                for j in 0..self.ncols {
                    *m.at_mut(j, i) = std::mem::replace(self.at_mut(i, j), m.field.zero());
                }
            }
            m
        }
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        Matrix {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }

    /// Multiply the matrix with a column vector. The column size must equal
    /// the vector size.
    pub fn mul_vector(&self, rhs: &Vector<F>) -> Vector<F> {
        if self.ncols != rhs.size() {
            panic!(
                "Cannot multiply a ({},{}) matrix with a vector of size {}",
                self.nrows,
                self.ncols,
                rhs.size()
            );
        }

        let mut data = Vec::with_capacity(self.nrows as usize);
        for i in 0..self.nrows {
            let mut e = self.field.zero();
            for k in 0..self.ncols {
                self.field
                    .add_mul_assign(&mut e, self.at(i, k), &rhs.data[k as usize]);
            }
            data.push(e);
        }

        Vector {
            data,
            field: self.field.clone(),
        }
    }

    /// The sum of the diagonal entries. The matrix must be square.
    pub fn trace(&self) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let mut tr = self.field.zero();
        for i in 0..self.nrows {
            self.field.add_assign(&mut tr, self.at(i, i));
        }

        Ok(tr)
    }

    /// Compute the determinant of the matrix. The matrix must be square.
    ///
    /// Sizes up to three use the closed forms; beyond that the Leibniz
    /// permutation formula is used, which sums `n!` terms.
    pub fn det(&self) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let f = &self.field;
        match self.nrows {
            1 => Ok(self.data[0].clone()),
            2 => Ok(f.sub(
                &f.mul(&self.data[0], &self.data[3]),
                &f.mul(&self.data[1], &self.data[2]),
            )),
            3 => {
                let m0 = f.mul(
                    &self.data[0],
                    &f.sub(
                        &f.mul(&self.data[4], &self.data[8]),
                        &f.mul(&self.data[5], &self.data[7]),
                    ),
                );
                let m1 = f.mul(
                    &self.data[1],
                    &f.sub(
                        &f.mul(&self.data[5], &self.data[6]),
                        &f.mul(&self.data[3], &self.data[8]),
                    ),
                );
                let m2 = f.mul(
                    &self.data[2],
                    &f.sub(
                        &f.mul(&self.data[3], &self.data[7]),
                        &f.mul(&self.data[4], &self.data[6]),
                    ),
                );

                Ok(f.add(&f.add(&m0, &m1), &m2))
            }
            _ => Ok(self.det_leibniz()),
        }
    }

    /// The Leibniz formula: the sum over all permutations `p` of the signed
    /// products of one entry per column, `sign(p) * prod_j M[p(j), j]`.
    fn det_leibniz(&self) -> F::Element {
        let f = &self.field;
        let mut det = f.zero();

        let mut perms = PermutationIterator::new(self.nrows as usize);
        while let Some((p, sign)) = perms.next() {
            let mut prod = self.at(p[0] as u32, 0).clone();
            for (j, &pj) in p.iter().enumerate().skip(1) {
                f.mul_assign(&mut prod, self.at(pj as u32, j as u32));
            }

            if sign > 0 {
                f.add_assign(&mut det, &prod);
            } else {
                f.sub_assign(&mut det, &prod);
            }
        }

        det
    }

    /// Delete the 1-based `row` and `col` and re-index the remaining entries
    /// contiguously from 1. The matrix must have at least two rows and two
    /// columns.
    pub fn minor(&self, row: u32, col: u32) -> Result<Matrix<F>, MatrixError> {
        if self.nrows < 2 {
            return Err(MatrixError::InvalidDimension {
                what: "row size",
                min: 2,
                actual: self.nrows,
            });
        }
        if self.ncols < 2 {
            return Err(MatrixError::InvalidDimension {
                what: "column size",
                min: 2,
                actual: self.ncols,
            });
        }
        if row < 1 || row > self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                what: "row index",
                index: row,
                size: self.nrows,
            });
        }
        if col < 1 || col > self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                what: "column index",
                index: col,
                size: self.ncols,
            });
        }

        let mut data = Vec::with_capacity((self.nrows as usize - 1) * (self.ncols as usize - 1));
        for r in 0..self.nrows {
            if r == row - 1 {
                continue;
            }
            for c in 0..self.ncols {
                if c == col - 1 {
                    continue;
                }
                data.push(self.at(r, c).clone());
            }
        }

        Ok(Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            field: self.field.clone(),
        })
    }

    /// Return true iff the matrix is square.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| F::is_zero(e))
    }

    /// Return true iff the matrix is square and every entry strictly below
    /// the main diagonal is zero.
    pub fn is_upper_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }

        for r in 1..self.nrows {
            for c in 0..r {
                if !F::is_zero(self.at(r, c)) {
                    return false;
                }
            }
        }
        true
    }

    /// Return true iff the matrix is square and every entry strictly above
    /// the main diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }

        for r in 0..self.nrows {
            for c in r + 1..self.ncols {
                if !F::is_zero(self.at(r, c)) {
                    return false;
                }
            }
        }
        true
    }

    /// Return true iff the matrix is upper or lower triangular.
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Return true iff the matrix is square and every off-diagonal entry is
    /// zero.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }

        for r in 0..self.nrows {
            for c in 0..self.ncols {
                if r != c && !F::is_zero(self.at(r, c)) {
                    return false;
                }
            }
        }
        true
    }

    /// Return true iff the matrix is diagonal with ones on the diagonal.
    pub fn is_identity(&self) -> bool {
        if !self.is_diagonal() {
            return false;
        }

        for i in 0..self.nrows {
            if !self.field.is_one(self.at(i, i)) {
                return false;
            }
        }
        true
    }

    /// Return true iff the matrix is square with a non-zero determinant.
    /// This is the exact-arithmetic criterion; no conditioning is implied.
    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.det().map(|d| !F::is_zero(&d)).unwrap_or(false)
    }

    /// Return true iff the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }

        for r in 0..self.nrows {
            for c in r + 1..self.ncols {
                if self.at(r, c) != self.at(c, r) {
                    return false;
                }
            }
        }
        true
    }

    /// Return true iff the matrix equals the negation of its transpose.
    /// Implies a zero diagonal.
    pub fn is_skew_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }

        for r in 0..self.nrows {
            for c in r..self.ncols {
                if *self.at(r, c) != self.field.neg(self.at(c, r)) {
                    return false;
                }
            }
        }
        true
    }

    /// Sample a matrix with entries drawn from `range`.
    pub fn sample(
        nrows: u32,
        ncols: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        let mut m = Matrix::new(nrows, ncols, field);
        for e in &mut m.data {
            *e = m.field.sample(rng, range);
        }
        m
    }

    /// Sample an upper triangular matrix.
    pub fn sample_upper_triangular(
        nrows: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for r in 0..nrows {
            for c in r..nrows {
                *m.at_mut(r, c) = m.field.sample(rng, range);
            }
        }
        m
    }

    /// Sample a lower triangular matrix.
    pub fn sample_lower_triangular(
        nrows: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for r in 0..nrows {
            for c in 0..=r {
                *m.at_mut(r, c) = m.field.sample(rng, range);
            }
        }
        m
    }

    /// Sample a triangular matrix, drawing the side at random.
    pub fn sample_triangular(
        nrows: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        if rng.gen_bool(0.5) {
            Matrix::sample_upper_triangular(nrows, field, rng, range)
        } else {
            Matrix::sample_lower_triangular(nrows, field, rng, range)
        }
    }

    /// Sample a symmetric matrix.
    pub fn sample_symmetric(
        nrows: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for r in 0..nrows {
            for c in r..nrows {
                let e = m.field.sample(rng, range);
                *m.at_mut(c, r) = e.clone();
                *m.at_mut(r, c) = e;
            }
        }
        m
    }

    /// Sample a skew-symmetric matrix; the diagonal is zero.
    pub fn sample_skew_symmetric(
        nrows: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for r in 0..nrows {
            for c in r + 1..nrows {
                let e = m.field.sample(rng, range);
                *m.at_mut(c, r) = m.field.neg(&e);
                *m.at_mut(r, c) = e;
            }
        }
        m
    }

    /// Sample a diagonal matrix.
    pub fn sample_diagonal(
        nrows: u32,
        field: F,
        rng: &mut impl rand::RngCore,
        range: (i64, i64),
    ) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for i in 0..nrows {
            *m.at_mut(i, i) = m.field.sample(rng, range);
        }
        m
    }
}

impl<F: NormedRing> Matrix<F> {
    /// The maximum over the rows of the sum of the absolute values of a row.
    pub fn max_abs_row_sum_norm(&self) -> Decimal {
        let mut max = Decimal::zero();
        for row in self.rows() {
            let mut sum = Decimal::zero();
            for e in row {
                sum += &self.field.abs(e);
            }
            if sum > max {
                max = sum;
            }
        }
        max
    }

    /// The maximum over the columns of the sum of the absolute values of a
    /// column.
    pub fn max_abs_column_sum_norm(&self) -> Decimal {
        let mut max = Decimal::zero();
        for c in 0..self.ncols {
            let mut sum = Decimal::zero();
            for r in 0..self.nrows {
                sum += &self.field.abs(self.at(r, c));
            }
            if sum > max {
                max = sum;
            }
        }
        max
    }

    /// The exact squared Frobenius norm: the sum of the squared absolute
    /// values of all entries.
    pub fn frobenius_norm_squared(&self) -> Decimal {
        let mut norm = Decimal::zero();
        for e in &self.data {
            norm += &self.field.abs_squared(e);
        }
        norm
    }

    /// The Frobenius norm at the default precision.
    pub fn frobenius_norm(&self) -> Decimal {
        sqrt::sqrt_positive(&self.frobenius_norm_squared())
    }

    /// The Frobenius norm, converged to the given precision in `(0, 1)`.
    pub fn frobenius_norm_with_precision(&self, precision: &Decimal) -> Result<Decimal, SqrtError> {
        sqrt::sqrt_with_precision(&self.frobenius_norm_squared(), precision)
    }

    /// The Frobenius norm, rounded to `scale` fractional digits.
    pub fn frobenius_norm_rounded(&self, scale: u32, mode: RoundingMode) -> Decimal {
        sqrt::sqrt_positive_rounded(&self.frobenius_norm_squared(), scale, mode)
    }

    /// The Frobenius norm, converged to `precision` and then rounded.
    pub fn frobenius_norm_with_precision_rounded(
        &self,
        precision: &Decimal,
        scale: u32,
        mode: RoundingMode,
    ) -> Result<Decimal, SqrtError> {
        sqrt::sqrt_with_precision_rounded(&self.frobenius_norm_squared(), precision, scale, mode)
    }

    /// The maximum norm: the largest absolute value of an entry.
    pub fn max_norm(&self) -> Decimal {
        let mut max = Decimal::zero();
        for e in &self.data {
            let a = self.field.abs(e);
            if a > max {
                max = a;
            }
        }
        max
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices.
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.add(a, b);
        }

        m
    }
}

impl<F: Ring> AddAssign<&Matrix<F>> for Matrix<F> {
    /// Add two matrices in place.
    fn add_assign(&mut self, rhs: &Matrix<F>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.add_assign(a, b);
        }
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices.
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.sub(a, b);
        }

        m
    }
}

impl<F: Ring> SubAssign<&Matrix<F>> for Matrix<F> {
    /// Subtract two matrices in place.
    fn sub_assign(&mut self, rhs: &Matrix<F>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.sub_assign(a, b);
        }
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices.
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        if self.ncols != rhs.nrows {
            panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());

        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = self.field.zero();
                for k in 0..self.ncols {
                    self.field.add_mul_assign(&mut sum, self.at(i, k), rhs.at(k, j));
                }
                *m.at_mut(i, j) = sum;
            }
        }

        m
    }
}

impl<F: Ring> MulAssign<&Matrix<F>> for Matrix<F> {
    /// Multiply two matrices in place.
    fn mul_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self * rhs;
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{{")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", e)?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

/// A single-use validating builder for [Matrix], the two-dimensional
/// analogue of [VectorBuilder]: cells are collected into a table keyed by
/// 1-based `(row, col)` pairs, and [MatrixBuilder::build] fails when any
/// cell of the declared grid is unfilled.
pub struct MatrixBuilder<F: Ring> {
    nrows: u32,
    ncols: u32,
    field: F,
    entries: HashMap<(u32, u32), F::Element>,
}

impl<F: Ring> MatrixBuilder<F> {
    /// Create a builder for a matrix with `nrows >= 1` rows and `ncols >= 1`
    /// columns.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Result<MatrixBuilder<F>, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                what: if nrows == 0 { "row size" } else { "column size" },
                min: 1,
                actual: 0,
            });
        }

        Ok(MatrixBuilder {
            nrows,
            ncols,
            field,
            entries: HashMap::default(),
        })
    }

    /// Set the cell at the 1-based position `(row, col)`, replacing an
    /// earlier value. Row and column are validated independently.
    pub fn put(
        &mut self,
        row: u32,
        col: u32,
        element: F::Element,
    ) -> Result<&mut Self, MatrixError> {
        if row < 1 || row > self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                what: "row index",
                index: row,
                size: self.nrows,
            });
        }
        if col < 1 || col > self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                what: "column index",
                index: col,
                size: self.ncols,
            });
        }

        self.entries.insert((row, col), element);
        Ok(self)
    }

    /// Fill every cell of the declared grid with `element`. Cells set
    /// earlier are overwritten; later [MatrixBuilder::put] calls override
    /// individual cells again.
    pub fn put_all(&mut self, element: &F::Element) -> &mut Self {
        for r in 1..=self.nrows {
            for c in 1..=self.ncols {
                self.entries.insert((r, c), element.clone());
            }
        }
        self
    }

    /// Validate completeness and build the matrix.
    pub fn build(self) -> Result<Matrix<F>, MatrixError> {
        let MatrixBuilder {
            nrows,
            ncols,
            field,
            mut entries,
        } = self;

        let mut data = Vec::with_capacity(nrows as usize * ncols as usize);
        for r in 1..=nrows {
            for c in 1..=ncols {
                match entries.remove(&(r, c)) {
                    Some(e) => data.push(e),
                    None => return Err(MatrixError::MissingEntry { row: r, col: c }),
                }
            }
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            field,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Matrix, MatrixError, Vector};
    use crate::domains::complex::{Complex, CZ};
    use crate::domains::decimal::{Decimal, RoundingMode, D};
    use crate::domains::integer::{Integer, Z};

    fn int_matrix(rows: Vec<Vec<i64>>) -> Matrix<crate::domains::integer::IntegerRing> {
        Matrix::from_nested_vec(
            rows.into_iter()
                .map(|r| r.into_iter().map(Integer::new).collect())
                .collect(),
            Z,
        )
        .unwrap()
    }

    #[test]
    fn basics() {
        let a = int_matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        assert_eq!(a.nrows(), 2);
        assert_eq!(a.ncols(), 3);
        assert_eq!(a.transpose(), int_matrix(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));
        assert_eq!(a.clone().into_transposed(), a.transpose());
        assert_eq!(-a.clone(), int_matrix(vec![vec![-1, -2, -3], vec![-4, -5, -6]]));
        assert!((&a - &a).is_zero());

        let b = int_matrix(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
        let c = &a * &b;
        assert_eq!(c, int_matrix(vec![vec![58, 64], vec![139, 154]]));

        let mut d = a.clone();
        d += &a;
        assert_eq!(d, a.mul_scalar(&Integer::new(2)));

        let e = a.map(|x| x + &Integer::new(1), Z);
        assert_eq!(e, int_matrix(vec![vec![2, 3, 4], vec![5, 6, 7]]));
    }

    #[test]
    fn one_based_access() {
        let a = int_matrix(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.element(1, 1), Ok(&Integer::new(1)));
        assert_eq!(a.element(2, 1), Ok(&Integer::new(3)));
        assert_eq!(
            a.element(0, 1),
            Err(MatrixError::IndexOutOfRange {
                what: "row index",
                index: 0,
                size: 2
            })
        );
        assert_eq!(
            a.element(1, 3).unwrap_err().to_string(),
            "expected column index in [1, 2] but actual 3"
        );

        let cells: Vec<_> = a.cells().map(|(r, c, e)| (r, c, e.clone())).collect();
        assert_eq!(cells[2], (2, 1, Integer::new(3)));
    }

    #[test]
    fn vector_basics() {
        let v = Vector::new(vec![Integer::new(3), Integer::new(4)], Z);
        let w = Vector::new(vec![Integer::new(1), Integer::new(-1)], Z);

        assert_eq!(v.size(), 2);
        assert_eq!(v.element(2), Ok(&Integer::new(4)));
        assert!(v.element(3).is_err());
        assert_eq!(v.dot(&w), Integer::new(-1));
        assert_eq!(
            &v + &w,
            Vector::new(vec![Integer::new(4), Integer::new(3)], Z)
        );
        assert_eq!(
            v.mul_scalar(&Integer::new(2)),
            Vector::new(vec![Integer::new(6), Integer::new(8)], Z)
        );
        assert_eq!(-v.clone(), v.mul_scalar(&Integer::new(-1)));
        assert_eq!(v.to_string(), "{3,4}");
    }

    #[test]
    fn vector_norms() {
        let v = Vector::new(vec![Integer::new(3), Integer::new(-4)], Z);

        assert_eq!(v.taxicab_norm(), Decimal::from(7));
        assert_eq!(v.euclidean_norm_squared(), Decimal::from(25));
        assert_eq!(v.max_norm(), Decimal::from(4));

        let norm = v.euclidean_norm();
        assert!((&norm - &Decimal::from(5)).abs() < Decimal::new(1, 12));
        assert_eq!(
            v.euclidean_norm_rounded(2, RoundingMode::HalfEven),
            Decimal::from(5)
        );

        let w = Vector::new(vec![Integer::new(0), Integer::new(0)], Z);
        assert_eq!(v.taxicab_distance(&w), Decimal::from(7));
        assert_eq!(v.euclidean_distance_squared(&w), Decimal::from(25));
        assert_eq!(v.max_distance(&w), Decimal::from(4));
    }

    #[test]
    fn vector_builder() {
        let mut b = Vector::builder(4, Z).unwrap();
        b.put(1, Integer::new(1)).unwrap();
        b.put(2, Integer::new(2)).unwrap();
        b.put(3, Integer::new(3)).unwrap();
        assert_eq!(
            b.build().unwrap_err(),
            MatrixError::MissingIndex { index: 4 }
        );

        let mut b = Vector::builder(3, Z).unwrap();
        b.put(2, Integer::new(5)).unwrap();
        b.put_all(&Integer::new(1));
        let v = b.build().unwrap();
        assert_eq!(
            v,
            Vector::new(vec![Integer::new(1), Integer::new(5), Integer::new(1)], Z)
        );

        assert!(Vector::builder(0, Z).is_err());
        let mut b = Vector::builder(2, Z).unwrap();
        assert_eq!(
            b.put(3, Integer::new(1)).unwrap_err().to_string(),
            "expected index in [1, 2] but actual 3"
        );
    }

    #[test]
    fn matrix_builder() {
        let mut b = Matrix::builder(2, 2, Z).unwrap();
        b.put_all(&Integer::zero());
        b.put(1, 1, Integer::new(7)).unwrap();
        let m = b.build().unwrap();
        assert_eq!(m, int_matrix(vec![vec![7, 0], vec![0, 0]]));

        let mut b = Matrix::builder(2, 2, Z).unwrap();
        b.put(1, 1, Integer::new(1)).unwrap();
        assert_eq!(
            b.build().unwrap_err(),
            MatrixError::MissingEntry { row: 1, col: 2 }
        );

        let mut b = Matrix::builder(2, 3, Z).unwrap();
        assert!(b.put(3, 1, Integer::new(1)).is_err());
        assert!(b.put(1, 4, Integer::new(1)).is_err());
        assert!(Matrix::builder(0, 2, Z).is_err());
    }

    #[test]
    fn trace_requires_square() {
        let zero = Matrix::new(2, 3, Z);
        assert_eq!(
            zero.trace().unwrap_err().to_string(),
            "expected square matrix but actual 2 x 3"
        );

        let a = int_matrix(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.trace(), Ok(Integer::new(5)));
    }

    #[test]
    fn determinants() {
        assert_eq!(
            int_matrix(vec![vec![1, 2], vec![3, 4]]).det(),
            Ok(Integer::new(-2))
        );
        assert_eq!(int_matrix(vec![vec![-7]]).det(), Ok(Integer::new(-7)));
        assert_eq!(
            int_matrix(vec![vec![1, 2, 3], vec![4, 5, 16], vec![7, 8, 9]]).det(),
            Ok(Integer::new(60))
        );

        // block-diagonal 4 x 4 exercises the Leibniz fallback
        let m = int_matrix(vec![
            vec![1, 2, 0, 0],
            vec![3, 4, 0, 0],
            vec![0, 0, 5, 6],
            vec![0, 0, 7, 8],
        ]);
        assert_eq!(m.det(), Ok(Integer::new(4)));

        assert!(Matrix::new(2, 3, Z).det().is_err());

        let id = Matrix::identity(3, Z);
        assert_eq!(id.det(), Ok(Integer::one()));
        assert!(id.is_identity());
        assert!(id.is_invertible());
        assert!(!int_matrix(vec![vec![1, 2], vec![2, 4]]).is_invertible());
    }

    #[test]
    fn minors() {
        let m = int_matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        assert_eq!(
            m.minor(1, 1),
            Ok(int_matrix(vec![vec![5, 6], vec![8, 9]]))
        );
        assert_eq!(
            m.minor(2, 3),
            Ok(int_matrix(vec![vec![1, 2], vec![7, 8]]))
        );
        assert!(m.minor(4, 1).is_err());
        assert!(m.minor(1, 0).is_err());
        assert!(int_matrix(vec![vec![1]]).minor(1, 1).is_err());
    }

    #[test]
    fn predicates() {
        let upper = int_matrix(vec![vec![1, 2], vec![0, 3]]);
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_lower_triangular());
        assert!(upper.is_triangular());
        assert!(!upper.is_diagonal());

        let diag = Matrix::eye(&[Integer::new(2), Integer::new(3)], Z);
        assert!(diag.is_diagonal());
        assert!(diag.is_triangular());
        assert!(!diag.is_identity());

        let sym = int_matrix(vec![vec![1, 7], vec![7, 2]]);
        assert!(sym.is_symmetric());
        assert!(!sym.is_skew_symmetric());

        let skew = int_matrix(vec![vec![0, 5], vec![-5, 0]]);
        assert!(skew.is_skew_symmetric());
        assert!(!skew.is_symmetric());

        // non-square matrices satisfy no structural predicate
        let rect = Matrix::new(2, 3, Z);
        assert!(!rect.is_square());
        assert!(!rect.is_triangular());
        assert!(!rect.is_diagonal());
        assert!(!rect.is_symmetric());
        assert!(!rect.is_invertible());
    }

    #[test]
    fn matrix_vector_product() {
        let a = int_matrix(vec![vec![1, 2], vec![3, 4]]);
        let v = Vector::new(vec![Integer::new(5), Integer::new(6)], Z);
        assert_eq!(
            a.mul_vector(&v),
            Vector::new(vec![Integer::new(17), Integer::new(39)], Z)
        );
    }

    #[test]
    fn matrix_norms() {
        let a = int_matrix(vec![vec![1, -2], vec![-3, 4]]);

        assert_eq!(a.max_abs_row_sum_norm(), Decimal::from(7));
        assert_eq!(a.max_abs_column_sum_norm(), Decimal::from(6));
        assert_eq!(a.frobenius_norm_squared(), Decimal::from(30));
        assert_eq!(a.max_norm(), Decimal::from(4));

        // sqrt(30) = 5.477...
        assert_eq!(
            a.frobenius_norm_rounded(2, RoundingMode::HalfEven),
            "5.48".parse().unwrap()
        );
    }

    #[test]
    fn decimal_entries() {
        let d2: Decimal = "0.5".parse().unwrap();
        let a = Matrix::from_nested_vec(
            vec![
                vec![d2.clone(), Decimal::zero()],
                vec![Decimal::zero(), d2.clone()],
            ],
            D,
        )
        .unwrap();

        assert_eq!(a.det(), Ok("0.25".parse().unwrap()));
        assert_eq!(a.trace(), Ok(Decimal::one()));
        assert!(a.is_diagonal());
    }

    #[test]
    fn complex_entries() {
        let i = Complex::<Integer>::i();
        let a = Matrix::from_nested_vec(
            vec![
                vec![i.clone(), Complex::<Integer>::zero()],
                vec![Complex::<Integer>::zero(), i.clone()],
            ],
            CZ,
        )
        .unwrap();

        // det(i * I) = i^2 = -1
        assert_eq!(
            a.det(),
            Ok(Complex::new(Integer::new(-1), Integer::zero()))
        );
        assert_eq!(a.frobenius_norm_squared(), Decimal::from(2));
    }

    #[test]
    fn printing() {
        let a = int_matrix(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.to_string(), "{{1,2},{3,4}}");
    }
}
