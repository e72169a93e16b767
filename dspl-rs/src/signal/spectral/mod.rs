//! Spectral transforms and estimators: the naive DFT, the mixed-radix FFT
//! engine built on it, power spectral density estimators, and the Goertzel
//! single-bin DFT.

pub mod dft;
pub mod fft;
pub mod goertzel;
pub mod psd;

pub use dft::{dft, dft_real, idft};
pub use fft::{fft_mag, fft_mag_cmplx, fft_shift, FftPlan};
pub use goertzel::{goertzel, goertzel_cmplx};
pub use psd::{
    bartlett, bartlett_cmplx, periodogram, periodogram_cmplx, welch, welch_cmplx, PsdFlags,
    PsdWindow,
};
