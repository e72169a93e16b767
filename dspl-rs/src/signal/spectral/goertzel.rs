//! Goertzel single-bin (and multi-bin) DFT: evaluates `X[k] = sum_n x[n] *
//! exp(-j*2*pi*k*n/N)` for a short explicit list of bins via the second-order
//! IIR recurrence, without forming the full transform. Cheaper than an
//! [`super::fft::FftPlan`] when only a handful of bins are needed (tone
//! detection, DTMF decoding), which is exactly the tradeoff the original C
//! implementation's `goertzel.c` documents.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use nalgebra::{Complex, RealField};
use num_traits::Float;

fn goertzel_bin_real<F>(x: &[F], k: usize, n: usize) -> Complex<F>
where
    F: RealField + Float,
{
    if n == 0 {
        return Complex::new(F::zero(), F::zero());
    }
    let two_pi = F::pi() + F::pi();
    let omega = two_pi * F::from(k).unwrap() / F::from(n).unwrap();
    let coeff = F::from(2.0).unwrap() * omega.cos();
    let (mut v1, mut v2) = (F::zero(), F::zero());
    for &xn in x {
        let v0 = xn + coeff * v1 - v2;
        v2 = v1;
        v1 = v0;
    }
    Complex::new(v1 - v2 * omega.cos(), v2 * omega.sin())
}

fn goertzel_bin_cmplx<F>(x: &[Complex<F>], k: usize, n: usize) -> Complex<F>
where
    F: RealField + Float,
{
    let zero = Complex::new(F::zero(), F::zero());
    if n == 0 {
        return zero;
    }
    let two_pi = F::pi() + F::pi();
    let omega = two_pi * F::from(k).unwrap() / F::from(n).unwrap();
    let coeff = F::from(2.0).unwrap() * omega.cos();
    let twiddle = Complex::new(omega.cos(), -omega.sin());
    let (mut v1, mut v2) = (zero, zero);
    for &xn in x {
        let v0 = xn + v1 * coeff - v2;
        v2 = v1;
        v1 = v0;
    }
    v1 - v2 * twiddle
}

/// Evaluates the DFT of real input `x` (length `N`) at each bin in
/// `indices`. Indices are taken modulo `N` and may repeat; each is
/// evaluated independently (no deduplication), for a caller that wants the
/// same bin reported twice.
#[cfg(feature = "alloc")]
pub fn goertzel<F>(x: &[F], indices: &[usize]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let n = x.len();
    indices
        .iter()
        .map(|&k| goertzel_bin_real(x, if n == 0 { 0 } else { k % n }, n))
        .collect()
}

/// Complex-input counterpart of [`goertzel`].
#[cfg(feature = "alloc")]
pub fn goertzel_cmplx<F>(x: &[Complex<F>], indices: &[usize]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let n = x.len();
    indices
        .iter()
        .map(|&k| goertzel_bin_cmplx(x, if n == 0 { 0 } else { k % n }, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::spectral::dft::{dft, dft_real};
    use approx::assert_relative_eq;

    #[test]
    fn matches_naive_dft_at_selected_bins() {
        let x: Vec<f64> = (0..20).map(|i| (i as f64 * 0.4).sin() + 0.3 * (i as f64 * 1.1).cos()).collect();
        let full = dft_real(&x);
        let bins = [0usize, 1, 3, 7, 19];
        let got = goertzel(&x, &bins);
        for (i, &k) in bins.iter().enumerate() {
            assert_relative_eq!(got[i].re, full[k].re, epsilon = 1e-9);
            assert_relative_eq!(got[i].im, full[k].im, epsilon = 1e-9);
        }
    }

    #[test]
    fn duplicate_indices_are_each_evaluated() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let got = goertzel(&x, &[1, 1, 1]);
        assert_eq!(got.len(), 3);
        assert_relative_eq!(got[0].re, got[1].re, epsilon = 1e-12);
        assert_relative_eq!(got[0].im, got[2].im, epsilon = 1e-12);
    }

    #[test]
    fn complex_input_matches_naive_complex_dft() {
        let x: Vec<Complex<f64>> = (0..12)
            .map(|i| Complex::new((i as f64).sin(), (i as f64 * 0.5).cos()))
            .collect();
        let full = dft(&x);
        let bins = [0usize, 2, 5, 11];
        let got = goertzel_cmplx(&x, &bins);
        for (i, &k) in bins.iter().enumerate() {
            assert_relative_eq!(got[i].re, full[k].re, epsilon = 1e-9);
            assert_relative_eq!(got[i].im, full[k].im, epsilon = 1e-9);
        }
    }

    #[test]
    fn index_modulo_n_wraps() {
        let x = [1.0, -1.0, 2.0, -2.0, 3.0];
        let a = goertzel(&x, &[2]);
        let b = goertzel(&x, &[7]); // 7 % 5 == 2
        assert_relative_eq!(a[0].re, b[0].re, epsilon = 1e-12);
        assert_relative_eq!(a[0].im, b[0].im, epsilon = 1e-12);
    }
}
