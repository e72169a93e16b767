//! Windowed linear-phase FIR design: sample the ideal impulse response of
//! the target band shape on the symmetric index grid and multiply by a
//! window.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use crate::signal::windows::GetWindow;

/// Band shape requested from [`firwin_dyn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirBandType {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

/// `sinc(x) = sin(pi*x)/(pi*x)`, `1` at `x = 0`.
fn sinc<F: Real>(x: F) -> F {
    if x == F::zero() {
        return F::one();
    }
    let pi = F::from(core::f64::consts::PI).unwrap();
    (pi * x).sin() / (pi * x)
}

/// Ideal lowpass impulse response sample at tap `n` (0-indexed, order `ord`)
/// with cutoff `w0` normalized so `1` is Nyquist.
fn lpf_tap<F: Real>(n: usize, ord: usize, w0: F) -> F {
    let half = F::from(ord).unwrap() / F::from(2).unwrap();
    let shifted = F::from(n).unwrap() - half;
    w0 * sinc(w0 * shifted)
}

/// Unit impulse at the midpoint tap `N/2`, zero elsewhere. Only meaningful
/// when `ord` is even.
fn delta_mid<F: Real>(n: usize, ord: usize) -> F {
    if 2 * n == ord {
        F::one()
    } else {
        F::zero()
    }
}

/// Builds the length-`ord+1` ideal (unwindowed) impulse response for the
/// requested band shape (LPF/HPF/BPF/BSF).
///
/// `cutoffs` holds one frequency for [`FirBandType::Lowpass`]/[`FirBandType::Highpass`]
/// and two (low edge, high edge) for [`FirBandType::Bandpass`]/[`FirBandType::Bandstop`].
/// Frequencies are normalized to `(0, 1)` with `1` at Nyquist.
///
/// # Panics
/// Panics if `ord` is odd while `band` is [`FirBandType::Highpass`] or
/// [`FirBandType::Bandstop`] (the midpoint tap would be undefined), or if
/// `cutoffs` doesn't carry the expected number of edges for `band`.
#[cfg(feature = "alloc")]
fn ideal_response<F: Real>(ord: usize, band: FirBandType, cutoffs: &[F]) -> Vec<F> {
    match band {
        FirBandType::Lowpass => {
            assert_eq!(cutoffs.len(), 1, "lowpass FIR needs exactly one cutoff");
            (0..=ord).map(|n| lpf_tap(n, ord, cutoffs[0])).collect()
        }
        FirBandType::Highpass => {
            assert_eq!(ord % 2, 0, "highpass FIR requires an even order");
            assert_eq!(cutoffs.len(), 1, "highpass FIR needs exactly one cutoff");
            (0..=ord)
                .map(|n| delta_mid(n, ord) - lpf_tap(n, ord, cutoffs[0]))
                .collect()
        }
        FirBandType::Bandpass => {
            assert_eq!(cutoffs.len(), 2, "bandpass FIR needs a (low, high) edge pair");
            (0..=ord)
                .map(|n| lpf_tap(n, ord, cutoffs[1]) - lpf_tap(n, ord, cutoffs[0]))
                .collect()
        }
        FirBandType::Bandstop => {
            assert_eq!(ord % 2, 0, "bandstop FIR requires an even order");
            assert_eq!(cutoffs.len(), 2, "bandstop FIR needs a (low, high) edge pair");
            (0..=ord)
                .map(|n| {
                    let bpf = lpf_tap(n, ord, cutoffs[1]) - lpf_tap(n, ord, cutoffs[0]);
                    delta_mid(n, ord) - bpf
                })
                .collect()
        }
    }
}

/// Designs a windowed linear-phase FIR of order `ord` (impulse-response
/// length `ord + 1`) for the given band shape and cutoff(s), multiplying
/// the ideal impulse response by `window`'s samples.
///
/// `window` must already be built for the filter's symmetric (`sym =
/// true`) length `ord + 1`, e.g. via [`crate::signal::windows::Kaiser`] or
/// any other [`GetWindow`] implementor.
#[cfg(feature = "alloc")]
pub fn firwin_dyn<F, W>(ord: usize, band: FirBandType, cutoffs: &[F], window: &W) -> Vec<F>
where
    F: Real,
    W: GetWindow<F>,
{
    let ideal = ideal_response(ord, band, cutoffs);
    let win = window.get_window();
    assert_eq!(
        ideal.len(),
        win.len(),
        "window length must equal ord + 1 for a symmetric FIR design"
    );
    ideal.into_iter().zip(win).map(|(h, w)| h * w).collect()
}
