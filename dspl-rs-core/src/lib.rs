//! Core library for dspl-rs.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::format;

use core::{error, fmt};

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised whilst running dspl-rs.
///
/// Each variant corresponds to one failure class a caller can hit by
/// supplying bad arguments or data; these are ordinary `Result` errors,
/// never panics. Internal invariant violations (a mismatched array length
/// that can only happen from a bug in this crate) still panic, as in the
/// upstream library this one is descended from.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Argument passed into a function was invalid.
    #[cfg(feature = "alloc")]
    InvalidArg {
        /// The invalid arg.
        arg: alloc::string::String,
        /// Explains why arg is invalid.
        reason: alloc::string::String,
    },
    /// Argument passed into a function was invalid.
    #[cfg(not(feature = "alloc"))]
    InvalidArg,
    /// Two or more optional arguments passed into a function conflict.
    #[cfg(feature = "alloc")]
    ConflictArg {
        /// Explains what is invalid.
        reason: alloc::string::String,
    },
    /// Two or more optional arguments passed into a function conflict.
    #[cfg(not(feature = "alloc"))]
    ConflictArg,
    /// A requested size (buffer length, FFT size, filter order...) was zero
    /// or otherwise out of range for the operation.
    #[cfg(feature = "alloc")]
    InvalidSize {
        /// Explains what size was invalid and why.
        reason: alloc::string::String,
    },
    #[cfg(not(feature = "alloc"))]
    InvalidSize,
    /// A value that must be finite was NaN.
    NotANumber,
    /// A value that must be finite was +/- infinity.
    NotFinite,
    /// A division by zero was attempted where the divisor came from caller
    /// data (not a programming invariant).
    DivideByZero,
    /// A polynomial had a degree the routine cannot handle (empty, or a
    /// leading coefficient of zero where a nonzero one is required).
    #[cfg(feature = "alloc")]
    InvalidPolynomial {
        /// Explains the defect.
        reason: alloc::string::String,
    },
    #[cfg(not(feature = "alloc"))]
    InvalidPolynomial,
    /// Filter design parameters (order, passband ripple, stopband
    /// attenuation, band type) were inconsistent or out of range.
    #[cfg(feature = "alloc")]
    InvalidFilterSpec {
        /// Explains the defect.
        reason: alloc::string::String,
    },
    #[cfg(not(feature = "alloc"))]
    InvalidFilterSpec,
    /// The elliptic modular equation failed to converge for the requested
    /// ripple/attenuation/order combination.
    EllipticModuleError,
    /// A requested window type or symmetry flag is not recognized.
    #[cfg(feature = "alloc")]
    InvalidWindow {
        /// Explains the defect.
        reason: alloc::string::String,
    },
    #[cfg(not(feature = "alloc"))]
    InvalidWindow,
    /// An FFT plan could not be created for the requested size.
    FftCreateError,
    /// The requested resampling ratio P/Q was invalid (zero, negative, or
    /// not reducible to positive integers).
    InvalidResampleRatio,
    /// The requested fractional delay for a resampling block was outside
    /// `[0, 1)`.
    InvalidFracDelay,
    /// A sample rate was zero or negative.
    InvalidSampleRate,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                #[cfg(feature = "alloc")]
                Error::InvalidArg { arg, reason } =>
                    format!("invalid argument `{}`: {}", arg, reason),
                #[cfg(not(feature = "alloc"))]
                Error::InvalidArg => "invalid argument".into(),
                #[cfg(feature = "alloc")]
                Error::ConflictArg { reason } => format!("conflicting arguments: {}", reason),
                #[cfg(not(feature = "alloc"))]
                Error::ConflictArg => "conflicting arguments".into(),
                #[cfg(feature = "alloc")]
                Error::InvalidSize { reason } => format!("invalid size: {}", reason),
                #[cfg(not(feature = "alloc"))]
                Error::InvalidSize => "invalid size".into(),
                Error::NotANumber => "value is NaN".into(),
                Error::NotFinite => "value is not finite".into(),
                Error::DivideByZero => "division by zero".into(),
                #[cfg(feature = "alloc")]
                Error::InvalidPolynomial { reason } => format!("invalid polynomial: {}", reason),
                #[cfg(not(feature = "alloc"))]
                Error::InvalidPolynomial => "invalid polynomial".into(),
                #[cfg(feature = "alloc")]
                Error::InvalidFilterSpec { reason } => format!("invalid filter spec: {}", reason),
                #[cfg(not(feature = "alloc"))]
                Error::InvalidFilterSpec => "invalid filter spec".into(),
                Error::EllipticModuleError => "elliptic modular equation did not converge".into(),
                #[cfg(feature = "alloc")]
                Error::InvalidWindow { reason } => format!("invalid window: {}", reason),
                #[cfg(not(feature = "alloc"))]
                Error::InvalidWindow => "invalid window".into(),
                Error::FftCreateError => "failed to create FFT plan".into(),
                Error::InvalidResampleRatio => "invalid resample ratio".into(),
                Error::InvalidFracDelay => "fractional delay outside [0, 1)".into(),
                Error::InvalidSampleRate => "invalid sample rate".into(),
            }
        )
    }
}

impl error::Error for Error {}

pub mod num_rs;

#[cfg(feature = "alloc")]
#[allow(unused_imports)]
use alloc::string::ToString as _;
