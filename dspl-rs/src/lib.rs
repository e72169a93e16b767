//! `dspl-rs`: spectral analysis and filter design.
//!
//! The public surface is organized the way `scipy.signal` organizes itself,
//! since that is the nomenclature most of this crate's routines are a
//! faithful Rust rendition of: complex/elliptic scalar math under
//! [`special`], and vectors, transforms, filter design/evaluation and
//! resampling under [`signal`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub use dspl_rs_core::{Error, Result};

/// Special functions: complex transcendentals, elliptic (Jacobi) functions,
/// the modified Bessel function, and small combinatorics helpers.
pub mod special;

/// Signal processing: polynomials, DFT/FFT, convolution, window functions,
/// IIR/FIR filter design, filter evaluation, spectral estimation and
/// resampling.
pub mod signal;
