//! Power spectral density estimators: the (modified) periodogram, Bartlett's
//! method, and Welch's method, all built on [`super::fft::FftPlan`], each in
//! a real-input and a complex-input form.
//!
//! Each estimator reports the full `N`-point DFT-grid spectrum over `[0,
//! fs)` by default, or `[-fs/2, fs/2)` (with [`fft_shift`] applied) when
//! [`PsdFlags::two_sided`] is set, and linear power or `10*log10` power
//! under [`PsdFlags::log_mag`].

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use dspl_rs_core::{Error, Result};
use nalgebra::{Complex, RealField};
use num_traits::Float;

use super::fft::{fft_shift, FftPlan};

/// Window applied before each segment's FFT. `Custom` values are used
/// as-is and must already be the segment length; this module doesn't
/// depend on the window gallery so estimators can be exercised with
/// self-contained fixtures rather than reaching across crate modules.
#[cfg(feature = "alloc")]
#[derive(Clone)]
pub enum PsdWindow<F> {
    Rectangular,
    Hann,
    Custom(Vec<F>),
}

/// Output axis and magnitude-scale flags shared by every estimator in this
/// module, mirroring `DSPL_FLAG_PSD_TWOSIDED`/`DSPL_FLAG_LOGMAG`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PsdFlags {
    /// Report on `[-fs/2, fs/2)` (with `fft_shift` applied) instead of
    /// `[0, fs)`.
    pub two_sided: bool,
    /// Report `10*log10` of the power instead of linear power.
    pub log_mag: bool,
}

#[cfg(feature = "alloc")]
fn window_values<F>(w: &PsdWindow<F>, n: usize) -> Vec<F>
where
    F: RealField + Float,
{
    match w {
        PsdWindow::Rectangular => vec![F::one(); n],
        PsdWindow::Hann => {
            if n <= 1 {
                return vec![F::one(); n];
            }
            let two_pi = F::pi() + F::pi();
            let denom = F::from(n - 1).unwrap();
            (0..n)
                .map(|i| {
                    let v = (F::one() - (two_pi * F::from(i).unwrap() / denom).cos())
                        * F::from(0.5).unwrap();
                    v
                })
                .collect()
        }
        PsdWindow::Custom(v) => v.clone(),
    }
}

/// Applies the two-sided/log-magnitude layout to an already-scaled linear
/// power spectrum and builds the matching frequency axis.
#[cfg(feature = "alloc")]
fn layout_psd<F>(pxx_linear: Vec<F>, fs: F, flags: PsdFlags) -> (Vec<F>, Vec<F>)
where
    F: RealField + Float,
{
    let n = pxx_linear.len();
    let nf = F::from(n).unwrap();
    let (freq, mut pxx) = if flags.two_sided {
        let freq: Vec<F> = (0..n)
            .map(|k| (F::from(k).unwrap() - nf / F::from(2.0).unwrap()) * fs / nf)
            .collect();
        (freq, fft_shift(&pxx_linear))
    } else {
        let freq: Vec<F> = (0..n).map(|k| F::from(k).unwrap() * fs / nf).collect();
        (freq, pxx_linear)
    };
    if flags.log_mag {
        for p in pxx.iter_mut() {
            *p = F::from(10.0).unwrap() * p.max(F::min_positive_value()).log10();
        }
    }
    (freq, pxx)
}

/// Shared periodogram core: `xw` is the already-windowed (real or complex)
/// signal, `wsum_sq` the window energy `sum(w^2)` used for normalization.
#[cfg(feature = "alloc")]
fn periodogram_core<F>(
    xw: &[Complex<F>],
    wsum_sq: F,
    fs: F,
    flags: PsdFlags,
) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    let plan = FftPlan::new(xw.len())?;
    let y = plan.forward(xw)?;
    let scale = F::one() / (fs * wsum_sq);
    let pxx: Vec<F> = y.iter().map(|v| scale * (v.re * v.re + v.im * v.im)).collect();
    Ok(layout_psd(pxx, fs, flags))
}

#[cfg(feature = "alloc")]
fn windowed_energy<F>(window: &PsdWindow<F>, n: usize) -> Result<(Vec<F>, F)>
where
    F: RealField + Float,
{
    let w = window_values(window, n);
    let wsum_sq: F = w.iter().map(|&v| v * v).fold(F::zero(), |a, b| a + b);
    if wsum_sq == F::zero() {
        return Err(Error::InvalidWindow {
            reason: "window has zero energy".into(),
        });
    }
    Ok((w, wsum_sq))
}

/// Modified periodogram of a real signal: `Pxx[k] = |FFT(x .* w)[k]|^2 /
/// (fs * sum(w^2))`.
#[cfg(feature = "alloc")]
pub fn periodogram<F>(
    x: &[F],
    window: &PsdWindow<F>,
    fs: F,
    flags: PsdFlags,
) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    let n = x.len();
    if n == 0 {
        return Err(Error::InvalidSize {
            reason: "periodogram input must be non-empty".into(),
        });
    }
    let (w, wsum_sq) = windowed_energy(window, n)?;
    let xw: Vec<Complex<F>> = x
        .iter()
        .zip(w.iter())
        .map(|(&xi, &wi)| Complex::new(xi * wi, F::zero()))
        .collect();
    periodogram_core(&xw, wsum_sq, fs, flags)
}

/// Modified periodogram of a complex signal, identical to [`periodogram`]
/// but without discarding the imaginary part.
#[cfg(feature = "alloc")]
pub fn periodogram_cmplx<F>(
    x: &[Complex<F>],
    window: &PsdWindow<F>,
    fs: F,
    flags: PsdFlags,
) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    let n = x.len();
    if n == 0 {
        return Err(Error::InvalidSize {
            reason: "periodogram input must be non-empty".into(),
        });
    }
    let (w, wsum_sq) = windowed_energy(window, n)?;
    let xw: Vec<Complex<F>> = x
        .iter()
        .zip(w.iter())
        .map(|(&xi, &wi)| Complex::new(xi.re * wi, xi.im * wi))
        .collect();
    periodogram_core(&xw, wsum_sq, fs, flags)
}

/// Zero-pads `x` out to a multiple of `seg_len`, returning the padded
/// segment count.
#[cfg(feature = "alloc")]
fn segment_count(len: usize, seg_len: usize) -> usize {
    len.div_ceil(seg_len)
}

/// Bartlett's method over a real signal: partitions `x` into non-overlapping
/// segments of fixed length `seg_len` (zero-padding the final partial
/// segment), takes the rectangular-window periodogram of each, and
/// averages.
#[cfg(feature = "alloc")]
pub fn bartlett<F>(x: &[F], seg_len: usize, fs: F, flags: PsdFlags) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    if seg_len == 0 {
        return Err(Error::InvalidArg {
            arg: "seg_len".into(),
            reason: "must be >= 1".into(),
        });
    }
    if x.is_empty() {
        return Err(Error::InvalidSize {
            reason: "bartlett input must be non-empty".into(),
        });
    }
    let nseg = segment_count(x.len(), seg_len);
    let mut acc = vec![F::zero(); seg_len];
    for i in 0..nseg {
        let start = i * seg_len;
        let end = (start + seg_len).min(x.len());
        let mut seg = vec![F::zero(); seg_len];
        seg[..end - start].copy_from_slice(&x[start..end]);
        let (_, p) = periodogram(&seg, &PsdWindow::Rectangular, fs, PsdFlags::default())?;
        for (a, v) in acc.iter_mut().zip(p.iter()) {
            *a = *a + *v;
        }
    }
    let nsegf = F::from(nseg).unwrap();
    for a in acc.iter_mut() {
        *a = *a / nsegf;
    }
    Ok(layout_psd(acc, fs, flags))
}

/// Complex counterpart of [`bartlett`].
#[cfg(feature = "alloc")]
pub fn bartlett_cmplx<F>(
    x: &[Complex<F>],
    seg_len: usize,
    fs: F,
    flags: PsdFlags,
) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    if seg_len == 0 {
        return Err(Error::InvalidArg {
            arg: "seg_len".into(),
            reason: "must be >= 1".into(),
        });
    }
    if x.is_empty() {
        return Err(Error::InvalidSize {
            reason: "bartlett input must be non-empty".into(),
        });
    }
    let nseg = segment_count(x.len(), seg_len);
    let mut acc = vec![F::zero(); seg_len];
    for i in 0..nseg {
        let start = i * seg_len;
        let end = (start + seg_len).min(x.len());
        let mut seg = vec![Complex::new(F::zero(), F::zero()); seg_len];
        seg[..end - start].copy_from_slice(&x[start..end]);
        let (_, p) = periodogram_cmplx(&seg, &PsdWindow::Rectangular, fs, PsdFlags::default())?;
        for (a, v) in acc.iter_mut().zip(p.iter()) {
            *a = *a + *v;
        }
    }
    let nsegf = F::from(nseg).unwrap();
    for a in acc.iter_mut() {
        *a = *a / nsegf;
    }
    Ok(layout_psd(acc, fs, flags))
}

/// Welch's method over a real signal: overlapping, equal-length windowed
/// segments, periodogram each, and average.
///
/// # Errors
/// [`Error::InvalidArg`] if `seg_len` is zero or `overlap >= seg_len`;
/// [`Error::InvalidSize`] if `x` is shorter than one segment.
#[cfg(feature = "alloc")]
pub fn welch<F>(
    x: &[F],
    seg_len: usize,
    overlap: usize,
    window: &PsdWindow<F>,
    fs: F,
    flags: PsdFlags,
) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    if seg_len == 0 {
        return Err(Error::InvalidArg {
            arg: "seg_len".into(),
            reason: "must be >= 1".into(),
        });
    }
    if overlap >= seg_len {
        return Err(Error::InvalidArg {
            arg: "overlap".into(),
            reason: "must be < seg_len".into(),
        });
    }
    if x.len() < seg_len {
        return Err(Error::InvalidSize {
            reason: "input shorter than one segment".into(),
        });
    }
    let step = seg_len - overlap;
    let mut starts = Vec::new();
    let mut start = 0usize;
    while start + seg_len <= x.len() {
        starts.push(start);
        start += step;
    }

    let mut acc = vec![F::zero(); seg_len];
    for &s in starts.iter() {
        let seg = &x[s..s + seg_len];
        let (_, p) = periodogram(seg, window, fs, PsdFlags::default())?;
        for (a, v) in acc.iter_mut().zip(p.iter()) {
            *a = *a + *v;
        }
    }
    let nsegf = F::from(starts.len()).unwrap();
    for a in acc.iter_mut() {
        *a = *a / nsegf;
    }
    Ok(layout_psd(acc, fs, flags))
}

/// Complex counterpart of [`welch`].
#[cfg(feature = "alloc")]
pub fn welch_cmplx<F>(
    x: &[Complex<F>],
    seg_len: usize,
    overlap: usize,
    window: &PsdWindow<F>,
    fs: F,
    flags: PsdFlags,
) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Float,
{
    if seg_len == 0 {
        return Err(Error::InvalidArg {
            arg: "seg_len".into(),
            reason: "must be >= 1".into(),
        });
    }
    if overlap >= seg_len {
        return Err(Error::InvalidArg {
            arg: "overlap".into(),
            reason: "must be < seg_len".into(),
        });
    }
    if x.len() < seg_len {
        return Err(Error::InvalidSize {
            reason: "input shorter than one segment".into(),
        });
    }
    let step = seg_len - overlap;
    let mut starts = Vec::new();
    let mut start = 0usize;
    while start + seg_len <= x.len() {
        starts.push(start);
        start += step;
    }

    let mut acc = vec![F::zero(); seg_len];
    for &s in starts.iter() {
        let seg = &x[s..s + seg_len];
        let (_, p) = periodogram_cmplx(seg, window, fs, PsdFlags::default())?;
        for (a, v) in acc.iter_mut().zip(p.iter()) {
            *a = *a + *v;
        }
    }
    let nsegf = F::from(starts.len()).unwrap();
    for a in acc.iter_mut() {
        *a = *a / nsegf;
    }
    Ok(layout_psd(acc, fs, flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn periodogram_of_a_pure_tone_peaks_at_its_bin() {
        let n = 64;
        let fs = 64.0;
        let k0 = 8;
        let x: Vec<f64> = (0..n)
            .map(|i| (2.0 * core::f64::consts::PI * k0 as f64 * i as f64 / n as f64).sin())
            .collect();
        let (_, pxx) = periodogram(&x, &PsdWindow::Rectangular, fs, PsdFlags::default()).unwrap();
        let peak_bin = pxx
            .iter()
            .enumerate()
            .take(n / 2)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, k0);
    }

    #[test]
    fn periodogram_two_sided_matches_one_sided_up_to_shift() {
        let n = 32;
        let fs = 32.0;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).sin()).collect();
        let one_sided = periodogram(&x, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();
        let two_sided = periodogram(
            &x,
            &PsdWindow::Hann,
            fs,
            PsdFlags { two_sided: true, log_mag: false },
        )
        .unwrap();
        let shifted = fft_shift(&one_sided.1);
        for (a, b) in shifted.iter().zip(two_sided.1.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
        assert!(two_sided.0[0] < 0.0);
    }

    #[test]
    fn periodogram_log_mag_matches_ten_log10_of_linear() {
        let n = 16;
        let fs = 16.0;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.9).cos()).collect();
        let (_, linear) = periodogram(&x, &PsdWindow::Rectangular, fs, PsdFlags::default()).unwrap();
        let (_, log) = periodogram(
            &x,
            &PsdWindow::Rectangular,
            fs,
            PsdFlags { two_sided: false, log_mag: true },
        )
        .unwrap();
        for (lin, lg) in linear.iter().zip(log.iter()) {
            assert_relative_eq!(*lg, 10.0 * lin.max(f64::MIN_POSITIVE).log10(), epsilon = 1e-9);
        }
    }

    #[test]
    fn periodogram_cmplx_matches_real_form_on_real_input() {
        let n = 32;
        let fs = 32.0;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.4).sin()).collect();
        let xc: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let (_, real_form) = periodogram(&x, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();
        let (_, cmplx_form) =
            periodogram_cmplx(&xc, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();
        for (a, b) in real_form.iter().zip(cmplx_form.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn bartlett_rejects_empty_input() {
        let x: [f64; 0] = [];
        assert!(bartlett(&x, 4, 1.0, PsdFlags::default()).is_err());
    }

    #[test]
    fn bartlett_zero_pads_the_final_partial_segment() {
        // 10 samples at seg_len 4 gives 3 segments: [0..4), [4..8), [8..10)
        // zero-padded to length 4, matching the fixed segment-length,
        // zero-padded-tail contract.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let (freq, pxx) = bartlett(&x, 4, 1.0, PsdFlags::default()).unwrap();
        assert_eq!(freq.len(), 4);
        assert_eq!(pxx.len(), 4);

        let mut manual = vec![0.0f64; 4];
        for seg in [&x[0..4], &x[4..8]] {
            let (_, p) = periodogram(seg, &PsdWindow::Rectangular, 1.0, PsdFlags::default()).unwrap();
            for (a, v) in manual.iter_mut().zip(p.iter()) {
                *a += v;
            }
        }
        let mut tail = [0.0f64; 4];
        tail[..2].copy_from_slice(&x[8..10]);
        let (_, p) = periodogram(&tail, &PsdWindow::Rectangular, 1.0, PsdFlags::default()).unwrap();
        for (a, v) in manual.iter_mut().zip(p.iter()) {
            *a += v;
        }
        for a in manual.iter_mut() {
            *a /= 3.0;
        }
        for (a, b) in pxx.iter().zip(manual.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn bartlett_cmplx_matches_real_form_on_real_input() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let xc: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let (_, real_form) = bartlett(&x, 3, 1.0, PsdFlags::default()).unwrap();
        let (_, cmplx_form) = bartlett_cmplx(&xc, 3, 1.0, PsdFlags::default()).unwrap();
        for (a, b) in real_form.iter().zip(cmplx_form.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn welch_rejects_overlap_ge_seg_len() {
        let x = vec![0.0; 16];
        assert!(welch(&x, 4, 4, &PsdWindow::Hann, 1.0, PsdFlags::default()).is_err());
    }

    #[test]
    fn welch_reduces_variance_relative_to_single_periodogram() {
        // A longer noisy-ish (but deterministic) signal: Welch's averaged
        // estimate should be smoother (lower variance across bins away from
        // the tone) than a single full-length periodogram, the qualitative
        // property the method exists for.
        let n = 512;
        let fs = 512.0;
        let x: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64;
                (2.0 * core::f64::consts::PI * 30.0 * t / fs).sin()
                    + 0.5 * ((t * 0.37).sin() * (t * 1.91).cos())
            })
            .collect();
        let (_, full) = periodogram(&x, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();
        let (_, w) = welch(&x, 64, 32, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();

        let variance = |v: &[f64]| {
            let mean = v.iter().sum::<f64>() / v.len() as f64;
            v.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / v.len() as f64
        };
        assert!(variance(&w) <= variance(&full[..w.len()]));
    }

    #[test]
    fn welch_cmplx_matches_real_form_on_real_input() {
        let n = 128;
        let fs = 128.0;
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.2).sin()).collect();
        let xc: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let (_, real_form) = welch(&x, 32, 16, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();
        let (_, cmplx_form) =
            welch_cmplx(&xc, 32, 16, &PsdWindow::Hann, fs, PsdFlags::default()).unwrap();
        for (a, b) in real_form.iter().zip(cmplx_form.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }
}
