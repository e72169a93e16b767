//! Filter evaluation: analog/digital frequency response, magnitude/phase/
//! group-delay derivation, phase unwrap, the impulse response of an analog
//! transfer function, and the direct-form time-domain IIR filter.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use dspl_rs_core::{Error, Result};
use nalgebra::{Complex, RealField};
use num_traits::Float;

use crate::signal::spectral::{fft_shift, idft, FftPlan};

/// Evaluates `H(jw_k) = B(jw_k)/A(jw_k)` for an analog transfer function at
/// each angular frequency in `w`, by widening the real coefficients to
/// complex and applying Horner's method.
///
/// # Errors
/// [`Error::DivideByZero`] if `A(jw_k)` is exactly zero at any sample.
#[cfg(feature = "alloc")]
pub fn freqs<F>(b: &[F], a: &[F], w: &[F]) -> Result<Vec<Complex<F>>>
where
    F: RealField + Float,
{
    w.iter()
        .map(|&wk| {
            let s = Complex::new(F::zero(), wk);
            let num = horner(b, s);
            let den = horner(a, s);
            if den.re * den.re + den.im * den.im == F::zero() {
                return Err(Error::DivideByZero);
            }
            Ok(num / den)
        })
        .collect()
}

/// Evaluates the digital transfer function `H(e^{-jw_k}) = B(z)/A(z)` at
/// each angular frequency in `w`. If `a` is `None` the transfer function is
/// treated as FIR (denominator `1`).
///
/// # Errors
/// [`Error::DivideByZero`] if `A(e^{-jw_k})` is exactly zero at any sample.
#[cfg(feature = "alloc")]
pub fn freqz<F>(b: &[F], a: Option<&[F]>, w: &[F]) -> Result<Vec<Complex<F>>>
where
    F: RealField + Float,
{
    w.iter()
        .map(|&wk| {
            let z_inv = Complex::new(wk.cos(), -wk.sin());
            let num = horner(b, z_inv);
            let den = match a {
                Some(a) => horner(a, z_inv),
                None => Complex::new(F::one(), F::zero()),
            };
            if den.re * den.re + den.im * den.im == F::zero() {
                return Err(Error::DivideByZero);
            }
            Ok(num / den)
        })
        .collect()
}

/// Complex Horner evaluation of a real polynomial (highest-degree
/// coefficient first) at a complex point.
fn horner<F: RealField + Float>(coeffs: &[F], x: Complex<F>) -> Complex<F> {
    coeffs
        .iter()
        .fold(Complex::new(F::zero(), F::zero()), |acc, &c| {
            acc * x + Complex::new(c, F::zero())
        })
}

/// Flags controlling [`freqs_resp`]/[`freqz_resp`]'s derived magnitude and
/// phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RespFlags {
    /// Report magnitude as `10*log10(|H|^2)` instead of linear `|H|`.
    pub log_mag: bool,
    /// Report phase unwrapped instead of wrapped to `(-pi, pi]`.
    pub unwrap_phase: bool,
}

/// Magnitude, phase, and group delay derived from a complex frequency
/// response `h` sampled at angular frequencies `w`.
#[derive(Debug, Clone)]
#[cfg(feature = "alloc")]
pub struct FreqResponse<F> {
    pub magnitude: Vec<F>,
    pub phase: Vec<F>,
    pub group_delay: Vec<F>,
}

/// Derives magnitude/phase/group delay from an analog frequency response,
/// recomputing `H` at a 2% side-step around each sample to estimate group
/// delay from phase differences rather than differentiating the transfer
/// function analytically.
#[cfg(feature = "alloc")]
pub fn freqs_resp<F>(b: &[F], a: &[F], w: &[F], flags: RespFlags) -> Result<FreqResponse<F>>
where
    F: RealField + Float,
{
    let h = freqs(b, a, w)?;
    resp_from_samples(w, &h, flags, |wk| {
        let step = wk.abs().max(F::one()) * F::from(0.02).unwrap();
        (wk - step, wk + step)
    }, |wlo, whi| {
        let lo = freqs(b, a, core::slice::from_ref(&wlo))?;
        let hi = freqs(b, a, core::slice::from_ref(&whi))?;
        Ok((lo[0], hi[0]))
    })
}

/// Derives magnitude/phase/group delay from a digital frequency response.
#[cfg(feature = "alloc")]
pub fn freqz_resp<F>(
    b: &[F],
    a: Option<&[F]>,
    w: &[F],
    flags: RespFlags,
) -> Result<FreqResponse<F>>
where
    F: RealField + Float,
{
    let h = freqz(b, a, w)?;
    resp_from_samples(w, &h, flags, |wk| {
        let step = F::from(0.02).unwrap();
        (wk - step, wk + step)
    }, |wlo, whi| {
        let lo = freqz(b, a, core::slice::from_ref(&wlo))?;
        let hi = freqz(b, a, core::slice::from_ref(&whi))?;
        Ok((lo[0], hi[0]))
    })
}

#[cfg(feature = "alloc")]
fn resp_from_samples<F>(
    w: &[F],
    h: &[Complex<F>],
    flags: RespFlags,
    side_step: impl Fn(F) -> (F, F),
    eval_pair: impl Fn(F, F) -> Result<(Complex<F>, Complex<F>)>,
) -> Result<FreqResponse<F>>
where
    F: RealField + Float,
{
    let magnitude: Vec<F> = h
        .iter()
        .map(|v| {
            let mag2 = v.re * v.re + v.im * v.im;
            if flags.log_mag {
                F::from(10.0).unwrap() * mag2.max(F::min_positive_value()).log10()
            } else {
                mag2.sqrt()
            }
        })
        .collect();

    let mut phase: Vec<F> = h.iter().map(|v| v.im.atan2(v.re)).collect();
    if flags.unwrap_phase {
        unwrap(&mut phase, F::pi() + F::pi(), F::from(0.5).unwrap());
    }

    let mut group_delay = Vec::with_capacity(w.len());
    for &wk in w {
        let (wlo, whi) = side_step(wk);
        let (hlo, hhi) = eval_pair(wlo, whi)?;
        let plo = hlo.im.atan2(hlo.re);
        let phi = hhi.im.atan2(hhi.re);
        let dphase = phi - plo;
        let dw = whi - wlo;
        group_delay.push(-dphase / dw);
    }

    Ok(FreqResponse {
        magnitude,
        phase,
        group_delay,
    })
}

/// Iteratively unwraps `phase` in place: whenever consecutive samples jump
/// by more than `margin * level`, add/subtract `level` to every sample from
/// that point on. Repeats until a full pass makes no correction, since a
/// single discontinuity can require more than one `+-level` pass.
pub fn unwrap<F: RealField + Float>(phase: &mut [F], level: F, margin: F) {
    if phase.len() < 2 {
        return;
    }
    let threshold = margin * level;
    loop {
        let mut corrected = false;
        for i in 1..phase.len() {
            let diff = phase[i] - phase[i - 1];
            if diff > threshold {
                let steps = ((diff + level / F::from(2.0).unwrap()) / level).floor();
                for sample in &mut phase[i..] {
                    *sample = *sample - steps * level;
                }
                corrected = true;
            } else if diff < -threshold {
                let steps = ((-diff + level / F::from(2.0).unwrap()) / level).floor();
                for sample in &mut phase[i..] {
                    *sample = *sample + steps * level;
                }
                corrected = true;
            }
        }
        if !corrected {
            break;
        }
    }
}

/// Samples `H(jw)` over `[-Fs/2, Fs/2]` at `n` periodic points, applies
/// [`fft_shift`], inverse-transforms, and returns the real part scaled by
/// `Fs`. Falls back to the naive [`idft`] when `n` has no FFT plan (a
/// residual prime factor above [`crate::signal::spectral::fft::MAX_RESIDUAL_FACTOR`]).
#[cfg(feature = "alloc")]
pub fn freqs2time<F>(b: &[F], a: &[F], n: usize, fs: F) -> Result<Vec<F>>
where
    F: RealField + Float,
{
    if n == 0 {
        return Err(Error::InvalidSize {
            reason: "freqs2time requires n >= 1".into(),
        });
    }
    let nf = F::from(n).unwrap();
    let w: Vec<F> = (0..n)
        .map(|k| (F::from(k).unwrap() - nf / F::from(2.0).unwrap()) * fs / nf)
        .collect();
    let h = freqs(b, a, &w)?;
    let h_shifted = fft_shift(&h);

    let time = match FftPlan::new(n) {
        Ok(plan) => plan.inverse(&h_shifted)?,
        Err(_) => idft(&h_shifted),
    };

    Ok(time.into_iter().map(|v| v.re * fs).collect())
}

/// Direct-form time-domain IIR filter over a circular delay line of length
/// `ord + 1`. `b`/`a` are normalized internally by `a[0]` so the caller's
/// coefficients are not mutated. If `a` is `None` or empty the recursion is
/// skipped (FIR mode).
///
/// # Errors
/// [`Error::InvalidFilterSpec`] if `a` is non-empty and `a[0] == 0`.
#[cfg(feature = "alloc")]
pub fn filter_iir<F>(b: &[F], a: Option<&[F]>, x: &[F]) -> Result<Vec<F>>
where
    F: RealField + Float,
{
    let a0 = a.and_then(|a| a.first().copied());
    if let Some(a0) = a0 {
        if a0 == F::zero() {
            return Err(Error::InvalidFilterSpec {
                reason: "a[0] must be nonzero".into(),
            });
        }
    }

    let b_norm: Vec<F> = match a0 {
        Some(a0) => b.iter().map(|&bi| bi / a0).collect(),
        None => b.to_vec(),
    };
    let a_norm: Vec<F> = match (a, a0) {
        (Some(a), Some(a0)) => a.iter().map(|&ai| ai / a0).collect(),
        _ => Vec::new(),
    };

    let nb = b_norm.len();
    let na = a_norm.len();
    let mut out = Vec::with_capacity(x.len());
    let mut x_hist = vec![F::zero(); nb.max(1)];
    let mut y_hist = vec![F::zero(); na.max(1)];

    for (n, &xn) in x.iter().enumerate() {
        if !x_hist.is_empty() {
            x_hist[n % x_hist.len()] = xn;
        }
        let mut acc = F::zero();
        for (k, &bk) in b_norm.iter().enumerate() {
            if k <= n {
                acc = acc + bk * x_hist[(n + x_hist.len() - k) % x_hist.len()];
            }
        }
        for (k, &ak) in a_norm.iter().enumerate().skip(1) {
            if k <= n {
                acc = acc - ak * y_hist[(n + y_hist.len() - k) % y_hist.len()];
            }
        }
        if !y_hist.is_empty() {
            y_hist[n % y_hist.len()] = acc;
        }
        out.push(acc);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn freqs_matches_first_order_lowpass_at_dc_and_cutoff() {
        let b = [1.0];
        let a = [1.0, 1.0];
        let w = [0.0, 1.0];
        let h = freqs(&b, &a, &w).unwrap();
        assert_relative_eq!(h[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(h[0].im, 0.0, epsilon = 1e-12);
        assert_relative_eq!((h[1].re * h[1].re + h[1].im * h[1].im).sqrt(), core::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn freqz_fir_denominator_defaults_to_one() {
        let b = [1.0, 0.0];
        let w = [0.0];
        let h = freqz(&b, None, &w).unwrap();
        assert_relative_eq!(h[0].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn freqs_reports_divide_by_zero() {
        let b = [1.0];
        let a = [0.0];
        let w = [1.0];
        assert_eq!(freqs(&b, &a, &w).unwrap_err(), Error::DivideByZero);
    }

    #[test]
    fn unwrap_removes_a_single_two_pi_jump() {
        let mut phase = vec![0.0, 3.0, -3.0, 0.0];
        unwrap(&mut phase, core::f64::consts::TAU, 0.5);
        assert_relative_eq!(phase[1], 3.0, epsilon = 1e-9);
        assert_relative_eq!(phase[2], -3.0 + core::f64::consts::TAU, epsilon = 1e-9);
    }

    #[test]
    fn filter_iir_fir_mode_matches_direct_convolution() {
        let b = [1.0, 2.0, 3.0];
        let x = [1.0, 0.0, 0.0, 1.0, 0.0];
        let y = filter_iir(&b, None, &x).unwrap();
        assert_relative_eq!(y[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(y[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(y[2], 3.0, epsilon = 1e-12);
        assert_relative_eq!(y[3], 1.0, epsilon = 1e-12);
        assert_relative_eq!(y[4], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn filter_iir_rejects_zero_a0() {
        let b = [1.0];
        let a = [0.0, 1.0];
        let x = [1.0];
        assert!(filter_iir(&b, Some(&a), &x).is_err());
    }

    #[test]
    fn filter_iir_first_order_lowpass_step_response_settles_near_unity() {
        let b = [0.1];
        let a = [1.0, -0.9];
        let x = vec![1.0; 200];
        let y = filter_iir(&b, Some(&a), &x).unwrap();
        assert_relative_eq!(*y.last().unwrap(), 1.0, epsilon = 1e-3);
    }
}
