//! Convolution: the direct `O(N*M)` form (re-exported from [`crate::signal::poly`],
//! the one-dimensional polynomial-multiplication primitive under another
//! name) and an overlap-save fast form built on [`super::spectral::fft::FftPlan`].
//!
//! The overlap-save contract here is explicit about the FFT size, the
//! short/long roles and the final-block truncation, implemented directly
//! against the plan this crate already builds for spectral estimation.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use dspl_rs_core::{Error, Result};
use nalgebra::{Complex, RealField};
use num_traits::Float;

pub use crate::signal::poly::{conv, conv_cmplx};

use super::spectral::fft::FftPlan;

/// Overlap-save fast convolution of complex `a` and `b` using an FFT of
/// size `n_fft`.
///
/// Let `La = max(a.len(), b.len())`, `Lb = min(a.len(), b.len())`,
/// `Lc = La + Lb - 1`, `Nz = n_fft - Lb`. The shorter input's spectrum is
/// computed once; the longer input is swept in steps of `Nz` samples
/// (preceded by `Lb` samples of history, zero-filled before the first
/// block), each block transformed, multiplied against the cached short
/// spectrum and inverse-transformed, and the clean (non-wraparound) `Nz`
/// samples of every inverse-transformed block copied into the result —
/// the final block is truncated to however many of `Lc` samples remain.
///
/// # Errors
/// [`Error::InvalidSize`] if `Nz <= 0`, i.e. `n_fft <= Lb` (the FFT size
/// must exceed the shorter input's length).
#[cfg(feature = "alloc")]
pub fn conv_fft_cmplx<F>(a: &[Complex<F>], b: &[Complex<F>], n_fft: usize) -> Result<Vec<Complex<F>>>
where
    F: RealField + Float,
{
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let la = long.len();
    let lb = short.len();
    let lc = la + lb - 1;
    if n_fft <= lb {
        return Err(Error::InvalidSize {
            reason: "FFT size must exceed the shorter input's length".into(),
        });
    }
    let nz = n_fft - lb;

    let zero = Complex::new(F::zero(), F::zero());
    let plan = FftPlan::new(n_fft)?;

    let mut short_buf = vec![zero; n_fft];
    short_buf[..lb].copy_from_slice(short);
    let short_spec = plan.forward(&short_buf)?;

    let mut out = vec![zero; lc];
    let mut written = 0usize;
    let mut pos = 0usize;
    let mut history = vec![zero; lb];

    while written < lc {
        let mut block = vec![zero; n_fft];
        block[..lb].copy_from_slice(&history);
        for i in 0..nz {
            let idx = pos + i;
            if idx < la {
                block[lb + i] = long[idx];
            }
        }
        let spec = plan.forward(&block)?;
        let prod: Vec<Complex<F>> = spec.iter().zip(short_spec.iter()).map(|(x, y)| x * y).collect();
        let y = plan.inverse(&prod)?;

        let valid = &y[lb..lb + nz];
        let take = nz.min(lc - written);
        out[written..written + take].copy_from_slice(&valid[..take]);
        written += take;

        pos += nz;
        // Refresh history directly from `long`: the `lb` samples immediately
        // preceding the next block's new-sample region, zero before index 0
        // or past `la` (matching the zero-fill used for new samples above).
        for (i, h) in history.iter_mut().enumerate() {
            let idx = pos as isize - lb as isize + i as isize;
            *h = if idx >= 0 && (idx as usize) < la {
                long[idx as usize]
            } else {
                zero
            };
        }
    }

    Ok(out)
}

/// Real-input counterpart: widens both inputs to complex, applies
/// [`conv_fft_cmplx`], and takes the real part.
#[cfg(feature = "alloc")]
pub fn conv_fft<F>(a: &[F], b: &[F], n_fft: usize) -> Result<Vec<F>>
where
    F: RealField + Float,
{
    let widen = |s: &[F]| -> Vec<Complex<F>> { s.iter().map(|&v| Complex::new(v, F::zero())).collect() };
    let y = conv_fft_cmplx(&widen(a), &widen(b), n_fft)?;
    Ok(y.into_iter().map(|v| v.re).collect())
}
