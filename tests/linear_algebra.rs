//! Algebraic laws of the vector and matrix types, verified over seeded
//! random instances of all four scalar domains. Everything asserted exactly
//! here only uses exact operations (ring arithmetic and squared norms);
//! assertions that involve the square-root engine carry a tolerance.

use matrica::domains::complex::{CD, CZ};
use matrica::domains::decimal::{Decimal, D};
use matrica::domains::integer::Z;
use matrica::domains::{NormedRing, Ring};
use matrica::tensors::matrix::{Matrix, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;

const RANGE: (i64, i64) = (-6, 6);

fn vector_space_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Vector::sample(4, field.clone(), rng, RANGE);
    let b = Vector::sample(4, field.clone(), rng, RANGE);
    let c = Vector::sample(4, field.clone(), rng, RANGE);
    let zero = a.new_zero();

    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    assert_eq!(&a + &zero, a);
    assert_eq!(&a + &(-a.clone()), zero);
    assert_eq!(&a - &b, &a + &(-b.clone()));

    let r = field.sample(rng, RANGE);
    let s = field.sample(rng, RANGE);

    assert_eq!(
        a.mul_scalar(&field.mul(&r, &s)),
        a.mul_scalar(&s).mul_scalar(&r)
    );
    assert_eq!(
        a.mul_scalar(&field.add(&r, &s)),
        &a.mul_scalar(&r) + &a.mul_scalar(&s)
    );
    assert_eq!(
        (&a + &b).mul_scalar(&r),
        &a.mul_scalar(&r) + &b.mul_scalar(&r)
    );
    assert_eq!(-a.clone(), a.mul_scalar(&field.neg(&field.one())));

    // the scalar product is symmetric and additive
    assert_eq!(a.dot(&b), b.dot(&a));
    assert_eq!(
        (&a + &b).dot(&c),
        field.add(&a.dot(&c), &b.dot(&c))
    );

    // exact squared-norm laws, valid in every domain
    assert!(a.euclidean_norm_squared() >= Decimal::zero());
    assert_eq!(
        a.mul_scalar(&r).euclidean_norm_squared(),
        &field.abs_squared(&r) * &a.euclidean_norm_squared()
    );
    assert_eq!(a.euclidean_distance_squared(&b), (&a - &b).euclidean_norm_squared());

    assert!(a.taxicab_norm() >= Decimal::zero());
    assert!(a.max_norm() >= Decimal::zero());
    assert!(a.max_norm() <= a.taxicab_norm());
}

/// Norm laws that rely on the absolute value being exact, which holds for
/// the integer and decimal domains but not for complex moduli.
fn exact_abs_vector_norm_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Vector::sample(4, field.clone(), rng, RANGE);
    let b = Vector::sample(4, field.clone(), rng, RANGE);
    let r = field.sample(rng, RANGE);

    assert_eq!(
        a.mul_scalar(&r).taxicab_norm(),
        &field.abs(&r) * &a.taxicab_norm()
    );
    assert_eq!(a.mul_scalar(&r).max_norm(), &field.abs(&r) * &a.max_norm());

    assert!((&a + &b).taxicab_norm() <= &a.taxicab_norm() + &b.taxicab_norm());
    assert!((&a + &b).max_norm() <= &a.max_norm() + &b.max_norm());

    assert_eq!(a.taxicab_distance(&b), (&a - &b).taxicab_norm());
    assert_eq!(a.max_distance(&b), (&a - &b).max_norm());
}

/// Subadditivity for the approximate complex moduli, with a tolerance far
/// above the default square-root precision.
fn approximate_vector_norm_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Vector::sample(4, field.clone(), rng, RANGE);
    let b = Vector::sample(4, field.clone(), rng, RANGE);
    let tolerance = Decimal::new(1, 9);

    assert!((&a + &b).taxicab_norm() <= &(&a.taxicab_norm() + &b.taxicab_norm()) + &tolerance);
    assert!((&a + &b).max_norm() <= &(&a.max_norm() + &b.max_norm()) + &tolerance);
}

fn matrix_addition_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Matrix::sample(2, 4, field.clone(), rng, RANGE);
    let b = Matrix::sample(2, 4, field.clone(), rng, RANGE);
    let c = Matrix::sample(2, 4, field.clone(), rng, RANGE);
    let zero = Matrix::new(2, 4, field.clone());

    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    assert_eq!(&a + &zero, a);
    assert_eq!(&a + &(-a.clone()), zero);

    let r = field.sample(rng, RANGE);
    let s = field.sample(rng, RANGE);

    assert_eq!(
        a.mul_scalar(&field.mul(&r, &s)),
        a.mul_scalar(&s).mul_scalar(&r)
    );
    assert_eq!(
        a.mul_scalar(&field.add(&r, &s)),
        &a.mul_scalar(&r) + &a.mul_scalar(&s)
    );
    assert_eq!(
        (&a + &b).mul_scalar(&r),
        &a.mul_scalar(&r) + &b.mul_scalar(&r)
    );

    // transposition is involutive, additive and commutes with scaling
    assert_eq!(a.transpose().transpose(), a);
    assert_eq!((&a + &b).transpose(), &a.transpose() + &b.transpose());
    assert_eq!(a.mul_scalar(&r).transpose(), a.transpose().mul_scalar(&r));
}

fn matrix_ring_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let b = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let c = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let id = Matrix::identity(3, field.clone());
    let zero = Matrix::new(3, 3, field.clone());

    assert_eq!(&a * &id, a);
    assert_eq!(&id * &a, a);
    assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    assert_eq!(&(&b + &c) * &a, &(&b * &a) + &(&c * &a));

    assert_eq!((&a * &b).transpose(), &b.transpose() * &a.transpose());

    // trace is additive, cyclic and invariant under transposition
    let f = &field;
    assert_eq!(
        (&a + &b).trace().unwrap(),
        f.add(&a.trace().unwrap(), &b.trace().unwrap())
    );
    assert_eq!((&a * &b).trace(), (&b * &a).trace());
    assert_eq!(a.transpose().trace(), a.trace());

    // determinant laws
    let r = field.sample(rng, RANGE);
    assert_eq!(
        (&a * &b).det().unwrap(),
        f.mul(&a.det().unwrap(), &b.det().unwrap())
    );
    assert_eq!(a.transpose().det(), a.det());
    assert_eq!(
        a.mul_scalar(&r).det().unwrap(),
        f.mul(&f.pow(&r, 3), &a.det().unwrap())
    );
    assert_eq!(id.det().unwrap(), f.one());
    assert_eq!(zero.det().unwrap(), f.zero());
}

fn determinant_of_triangular<F: NormedRing>(field: F, rng: &mut StdRng) {
    let t = Matrix::sample_triangular(4, field.clone(), rng, (-4, 4));
    assert!(t.is_triangular());

    let mut prod = field.one();
    for i in 1..=4 {
        field.mul_assign(&mut prod, t.element(i, i).unwrap());
    }
    assert_eq!(t.det().unwrap(), prod);
}

/// The Leibniz determinant must agree with a cofactor expansion along the
/// first row, which also exercises [Matrix::minor].
fn determinant_cofactor_expansion<F: NormedRing>(field: F, rng: &mut StdRng) {
    let m = Matrix::sample(4, 4, field.clone(), rng, (-5, 5));

    let mut expansion = field.zero();
    for j in 1..=4u32 {
        let term = field.mul(
            m.element(1, j).unwrap(),
            &m.minor(1, j).unwrap().det().unwrap(),
        );
        if j % 2 == 1 {
            field.add_assign(&mut expansion, &term);
        } else {
            field.sub_assign(&mut expansion, &term);
        }
    }

    assert_eq!(m.det().unwrap(), expansion);
}

fn minor_matches_manual_submatrix<F: NormedRing>(field: F, rng: &mut StdRng) {
    let m = Matrix::sample(3, 3, field.clone(), rng, (-9, 9));
    let minor = m.minor(2, 2).unwrap();

    let manual = Matrix::from_nested_vec(
        vec![
            vec![
                m.element(1, 1).unwrap().clone(),
                m.element(1, 3).unwrap().clone(),
            ],
            vec![
                m.element(3, 1).unwrap().clone(),
                m.element(3, 3).unwrap().clone(),
            ],
        ],
        field,
    )
    .unwrap();

    assert_eq!(minor, manual);
}

fn structured_samples<F: NormedRing>(field: F, rng: &mut StdRng) {
    assert!(Matrix::sample_upper_triangular(4, field.clone(), rng, RANGE).is_upper_triangular());
    assert!(Matrix::sample_lower_triangular(4, field.clone(), rng, RANGE).is_lower_triangular());
    assert!(Matrix::sample_triangular(4, field.clone(), rng, RANGE).is_triangular());
    assert!(Matrix::sample_symmetric(4, field.clone(), rng, RANGE).is_symmetric());
    assert!(Matrix::sample_skew_symmetric(4, field.clone(), rng, RANGE).is_skew_symmetric());
    assert!(Matrix::sample_diagonal(4, field.clone(), rng, RANGE).is_diagonal());
}

fn matrix_vector_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Matrix::sample(3, 4, field.clone(), rng, RANGE);
    let b = Matrix::sample(3, 4, field.clone(), rng, RANGE);
    let m = Matrix::sample(2, 3, field.clone(), rng, RANGE);
    let x = Vector::sample(4, field.clone(), rng, RANGE);
    let y = Vector::sample(4, field.clone(), rng, RANGE);

    assert_eq!(a.mul_vector(&(&x + &y)), &a.mul_vector(&x) + &a.mul_vector(&y));
    assert_eq!((&a + &b).mul_vector(&x), &a.mul_vector(&x) + &b.mul_vector(&x));
    assert_eq!((&m * &a).mul_vector(&x), m.mul_vector(&a.mul_vector(&x)));
    assert_eq!(
        Matrix::identity(4, field.clone()).mul_vector(&x),
        x
    );
}

fn matrix_norm_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let b = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let r = field.sample(rng, RANGE);

    assert!(a.max_abs_row_sum_norm() >= Decimal::zero());
    assert!(a.max_abs_column_sum_norm() >= Decimal::zero());
    assert!(a.frobenius_norm_squared() >= Decimal::zero());
    assert!(a.max_norm() >= Decimal::zero());

    // row and column sums are exchanged by transposition
    assert_eq!(a.transpose().max_abs_row_sum_norm(), a.max_abs_column_sum_norm());
    assert_eq!(a.transpose().max_abs_column_sum_norm(), a.max_abs_row_sum_norm());

    // exact in every domain: squared Frobenius norm laws
    assert_eq!(
        a.mul_scalar(&r).frobenius_norm_squared(),
        &field.abs_squared(&r) * &a.frobenius_norm_squared()
    );
    assert!(
        (&a * &b).frobenius_norm_squared()
            <= &a.frobenius_norm_squared() * &b.frobenius_norm_squared()
    );
    assert_eq!(a.transpose().frobenius_norm_squared(), a.frobenius_norm_squared());
}

/// Norm laws relying on exact absolute values (integer and decimal domains).
fn exact_abs_matrix_norm_laws<F: NormedRing>(field: F, rng: &mut StdRng) {
    let a = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let b = Matrix::sample(3, 3, field.clone(), rng, RANGE);
    let r = field.sample(rng, RANGE);
    let abs_r = field.abs(&r);

    assert_eq!(
        a.mul_scalar(&r).max_abs_row_sum_norm(),
        &abs_r * &a.max_abs_row_sum_norm()
    );
    assert_eq!(
        a.mul_scalar(&r).max_abs_column_sum_norm(),
        &abs_r * &a.max_abs_column_sum_norm()
    );
    assert_eq!(a.mul_scalar(&r).max_norm(), &abs_r * &a.max_norm());

    assert!(
        (&a + &b).max_abs_row_sum_norm()
            <= &a.max_abs_row_sum_norm() + &b.max_abs_row_sum_norm()
    );
    assert!(
        (&a + &b).max_abs_column_sum_norm()
            <= &a.max_abs_column_sum_norm() + &b.max_abs_column_sum_norm()
    );
    assert!((&a + &b).max_norm() <= &a.max_norm() + &b.max_norm());

    // the row and column sum norms are submultiplicative
    assert!(
        (&a * &b).max_abs_row_sum_norm()
            <= &a.max_abs_row_sum_norm() * &b.max_abs_row_sum_norm()
    );
    assert!(
        (&a * &b).max_abs_column_sum_norm()
            <= &a.max_abs_column_sum_norm() * &b.max_abs_column_sum_norm()
    );
}

fn run_common_laws<F: NormedRing>(field: F, seed: u64) {
    let rng = &mut StdRng::seed_from_u64(seed);
    for _ in 0..8 {
        vector_space_laws(field.clone(), rng);
        matrix_addition_laws(field.clone(), rng);
        matrix_ring_laws(field.clone(), rng);
        determinant_of_triangular(field.clone(), rng);
        determinant_cofactor_expansion(field.clone(), rng);
        minor_matches_manual_submatrix(field.clone(), rng);
        structured_samples(field.clone(), rng);
        matrix_vector_laws(field.clone(), rng);
        matrix_norm_laws(field.clone(), rng);
    }
}

#[test]
fn integer_laws() {
    run_common_laws(Z, 11);

    let rng = &mut StdRng::seed_from_u64(12);
    for _ in 0..8 {
        exact_abs_vector_norm_laws(Z, rng);
        exact_abs_matrix_norm_laws(Z, rng);
    }
}

#[test]
fn decimal_laws() {
    run_common_laws(D, 21);

    let rng = &mut StdRng::seed_from_u64(22);
    for _ in 0..8 {
        exact_abs_vector_norm_laws(D, rng);
        exact_abs_matrix_norm_laws(D, rng);
    }
}

#[test]
fn gaussian_integer_laws() {
    run_common_laws(CZ, 31);

    let rng = &mut StdRng::seed_from_u64(32);
    for _ in 0..8 {
        approximate_vector_norm_laws(CZ, rng);
    }
}

#[test]
fn complex_decimal_laws() {
    run_common_laws(CD, 41);

    let rng = &mut StdRng::seed_from_u64(42);
    for _ in 0..8 {
        approximate_vector_norm_laws(CD, rng);
    }
}

#[test]
fn euclidean_norm_of_three_four_is_five() {
    let v = Vector::new(vec![3.into(), 4.into()], Z);
    let norm = v.euclidean_norm();
    assert!((&norm - &Decimal::from(5)).abs() < Decimal::new(1, 12));

    let with_precision = v
        .euclidean_norm_with_precision(&Decimal::new(1, 10))
        .unwrap();
    assert!((&with_precision - &Decimal::from(5)).abs() < Decimal::new(1, 8));
}
