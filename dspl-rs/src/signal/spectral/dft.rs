//! Naive `O(N^2)` discrete Fourier transform.
//!
//! Used both as the documented small-N reference implementation and as the
//! [`super::fft::FftPlan`]'s fallback path for sizes its residual-prime
//! stage declines to factor further.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use nalgebra::{Complex, RealField};
use num_traits::Float;

/// Forward DFT: `Y[k] = sum_m x[m] * exp(-j*2*pi*k*m/N)`.
#[cfg(feature = "alloc")]
pub fn dft<F>(x: &[Complex<F>]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let n = x.len();
    let two_pi = F::from(core::f64::consts::TAU).unwrap_or_else(|| F::pi() + F::pi());
    let nf = F::from(n).unwrap();
    let mut y = vec![Complex::new(F::zero(), F::zero()); n];
    for k in 0..n {
        let mut acc = Complex::new(F::zero(), F::zero());
        for (m, &xm) in x.iter().enumerate() {
            let angle = -two_pi * F::from(k).unwrap() * F::from(m).unwrap() / nf;
            let tw = Complex::new(angle.cos(), angle.sin());
            acc += xm * tw;
        }
        y[k] = acc;
    }
    y
}

/// Inverse DFT: same summation with a conjugated twiddle and an overall
/// `1/N` scale.
#[cfg(feature = "alloc")]
pub fn idft<F>(y: &[Complex<F>]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let n = y.len();
    let two_pi = F::from(core::f64::consts::TAU).unwrap_or_else(|| F::pi() + F::pi());
    let nf = F::from(n).unwrap();
    let mut x = vec![Complex::new(F::zero(), F::zero()); n];
    for m in 0..n {
        let mut acc = Complex::new(F::zero(), F::zero());
        for (k, &yk) in y.iter().enumerate() {
            let angle = two_pi * F::from(k).unwrap() * F::from(m).unwrap() / nf;
            let tw = Complex::new(angle.cos(), angle.sin());
            acc += yk * tw;
        }
        x[m] = acc / nf;
    }
    x
}

/// Convenience forward transform of a real input (imaginary part assumed
/// zero), widened to complex first.
#[cfg(feature = "alloc")]
pub fn dft_real<F>(x: &[F]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let widened: Vec<Complex<F>> = x.iter().map(|&xi| Complex::new(xi, F::zero())).collect();
    dft(&widened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scenario_a_dft_of_length_16_ramp() {
        let x: Vec<Complex<f64>> = (0..16).map(|k| Complex::new(k as f64, 0.0)).collect();
        let y = dft(&x);
        assert_relative_eq!(y[0].re, 120.0, epsilon = 1e-9);
        assert_relative_eq!(y[0].im, 0.0, epsilon = 1e-9);
        assert_relative_eq!(y[8].re, -8.0, epsilon = 1e-9);
        assert_relative_eq!(y[8].im, 0.0, epsilon = 1e-9);
        assert_relative_eq!(y[1].re, -8.0, epsilon = 1e-6);
        assert_relative_eq!(y[1].im, 40.218716, epsilon = 1e-5);
        assert_relative_eq!(y[15].re, -8.0, epsilon = 1e-6);
        assert_relative_eq!(y[15].im, -40.218716, epsilon = 1e-5);
    }

    #[test]
    fn round_trip_through_idft() {
        let x: Vec<Complex<f64>> = (0..8)
            .map(|k| Complex::new((k as f64).sin(), (k as f64).cos()))
            .collect();
        let y = dft(&x);
        let back = idft(&y);
        for (a, b) in x.iter().zip(back.iter()) {
            assert_relative_eq!(a.re, b.re, epsilon = 1e-9);
            assert_relative_eq!(a.im, b.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn parseval_identity() {
        let x: Vec<Complex<f64>> = (0..10).map(|k| Complex::new((k * k) as f64, 0.0)).collect();
        let y = dft(&x);
        let lhs: f64 = x.iter().map(|v| v.re * v.re + v.im * v.im).sum();
        let rhs: f64 = y.iter().map(|v| v.re * v.re + v.im * v.im).sum::<f64>() / x.len() as f64;
        assert_relative_eq!(lhs, rhs, epsilon = 1e-6);
    }
}
