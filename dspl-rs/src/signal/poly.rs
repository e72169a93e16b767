//! Polynomial kernel: evaluation, root finding, and zero/coefficient
//! conversion.
//!
//! Direct convolution (the polynomial-multiplication primitive) lives in
//! `dspl_rs_core::num_rs::convolve` and is re-exported here under its
//! polynomial-multiplication name rather than duplicating the kernel.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use dspl_rs_core::{Error, Result};
use nalgebra::{Complex, DMatrix, RealField};
use num_traits::Float;

#[cfg(feature = "alloc")]
pub use dspl_rs_core::num_rs::convolve::ConvolveMode;

/// Polynomial multiplication, i.e. full linear convolution of two
/// coefficient vectors in ascending-power order. Aliasing-safe: delegates
/// to the core kernel, which always allocates its own output buffer.
#[cfg(feature = "alloc")]
pub fn conv<F: Float>(a: &[F], b: &[F]) -> Vec<F> {
    dspl_rs_core::num_rs::convolve::convolve(a, b, ConvolveMode::Full)
}

/// Complex polynomial multiplication.
#[cfg(feature = "alloc")]
pub fn conv_cmplx<F>(a: &[Complex<F>], b: &[Complex<F>]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let out_len = a.len() + b.len() - 1;
    let mut out = vec![Complex::new(F::zero(), F::zero()); out_len];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

/// Evaluates a real polynomial `a[0] + a[1]*x + ... + a[ord]*x^ord` at each
/// point in `x` by Horner's method, starting from the highest-order
/// coefficient.
#[cfg(feature = "alloc")]
pub fn polyval<F: Float>(a: &[F], x: &[F]) -> Vec<F> {
    x.iter()
        .map(|&xi| {
            a.iter()
                .rev()
                .fold(F::zero(), |acc, &c| acc * xi + c)
        })
        .collect()
}

/// Complex-coefficient, complex-argument counterpart of [`polyval`].
#[cfg(feature = "alloc")]
pub fn polyval_cmplx<F>(a: &[Complex<F>], x: &[Complex<F>]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    x.iter()
        .map(|&xi| {
            a.iter()
                .rev()
                .fold(Complex::new(F::zero(), F::zero()), |acc, &c| acc * xi + c)
        })
        .collect()
}

/// Finds all roots of a real polynomial by computing the eigenvalues of its
/// companion matrix, the Rust analogue of the original C implementation's
/// call into a LAPACK general eigensolver
/// (`original_source/dspl/src/math_poly/polyroots.c`).
///
/// Order of the returned roots is whatever `nalgebra`'s Schur decomposition
/// produces; callers that need conjugate-paired ordering (e.g. SOS
/// factorization) re-sort explicitly.
///
/// # Errors
/// - [`Error::InvalidPolynomial`] if `a` is empty (`ErrorPolyOrd`) or its
///   leading coefficient is zero (`ErrorPolyAn`).
#[cfg(feature = "alloc")]
pub fn polyroots<F>(a: &[F]) -> Result<Vec<Complex<F>>>
where
    F: RealField + Float,
{
    if a.is_empty() {
        return Err(Error::InvalidPolynomial {
            reason: "polynomial order is negative (empty coefficient vector)".into(),
        });
    }
    let ord = a.len() - 1;
    let leading = a[ord];
    if leading == F::zero() {
        return Err(Error::InvalidPolynomial {
            reason: "leading coefficient is zero".into(),
        });
    }
    if ord == 0 {
        return Ok(Vec::new());
    }

    // Monic companion matrix of a[0] + a[1]x + ... + a[ord]x^ord:
    // normalize by the leading coefficient, then build the standard
    // bottom-row companion form.
    let normalized: Vec<F> = a.iter().map(|&c| c / leading).collect();
    let n = ord;
    let mut m = DMatrix::<F>::zeros(n, n);
    for i in 1..n {
        m[(i, i - 1)] = F::one();
    }
    for i in 0..n {
        m[(i, n - 1)] = -normalized[i];
    }

    let eigs = m.complex_eigenvalues();
    Ok(eigs.iter().copied().collect())
}

/// Expands a set of roots into the monic polynomial they generate,
/// `prod(x - z_i)`, by repeatedly convolving in one monomial `(x - z_i)` at
/// a time starting from the constant polynomial `1`.
///
/// If `ord > nz` the result is zero-padded with high-degree zero
/// coefficients up to `ord + 1` terms, for under-specified orders.
#[cfg(feature = "alloc")]
pub fn poly_z2a_cmplx<F>(z: &[Complex<F>], ord: usize) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let zero = Complex::new(F::zero(), F::zero());
    let one = Complex::new(F::one(), F::zero());
    let mut acc = vec![one];
    for &zi in z {
        acc = conv_cmplx(&acc, &[-zi, one]);
    }
    if acc.len() < ord + 1 {
        acc.resize(ord + 1, zero);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polyval_matches_hand_worked_example() {
        // 1 + 2x + 3x^2 at x=2 -> 1 + 4 + 12 = 17
        let y = polyval(&[1.0, 2.0, 3.0], &[2.0]);
        assert_relative_eq!(y[0], 17.0);
    }

    #[test]
    fn conv_matches_scenario_b() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, -1.0, 2.0, 4.0];
        let c = conv(&a, &b);
        assert_eq!(c, vec![3.0, 5.0, 9.0, 5.0, 14.0, 12.0]);
    }

    #[test]
    fn conv_cmplx_matches_scenario_c() {
        let a = [
            Complex::new(0.0, 1.0),
            Complex::new(1.0, 1.0),
            Complex::new(2.0, 2.0),
        ];
        let b = [
            Complex::new(3.0, 3.0),
            Complex::new(4.0, 4.0),
            Complex::new(5.0, 5.0),
            Complex::new(6.0, 6.0),
        ];
        let c = conv_cmplx(&a, &b);
        let expected = [
            Complex::new(-3.0, 3.0),
            Complex::new(-4.0, 10.0),
            Complex::new(-5.0, 25.0),
            Complex::new(-6.0, 32.0),
            Complex::new(0.0, 32.0),
            Complex::new(0.0, 24.0),
        ];
        for (a, e) in c.iter().zip(expected.iter()) {
            assert_relative_eq!(a.re, e.re, epsilon = 1e-9);
            assert_relative_eq!(a.im, e.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn polyroots_then_poly_z2a_is_the_original_polynomial() {
        // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
        let a = [-6.0, 11.0, -6.0, 1.0];
        let roots = polyroots(&a).unwrap();
        assert_eq!(roots.len(), 3);
        let rebuilt = poly_z2a_cmplx(&roots, 3);
        for (r, e) in rebuilt.iter().zip(a.iter()) {
            assert_relative_eq!(r.re, *e, epsilon = 1e-8);
            assert_relative_eq!(r.im, 0.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn polyroots_rejects_zero_leading_coefficient() {
        let err = polyroots(&[1.0, 0.0]).unwrap_err();
        assert_eq!(err, Error::InvalidPolynomial { reason: "leading coefficient is zero".into() });
    }

    #[test]
    fn polyroots_rejects_empty() {
        let err = polyroots::<f64>(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidPolynomial { .. }));
    }
}
