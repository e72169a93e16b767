//! Digital filtering: IIR/FIR design, the ndarray-idiomatic `lfilter`
//! primitive, and frequency-response evaluation.

#[cfg(feature = "alloc")]
pub mod design;

#[cfg(feature = "alloc")]
pub mod response;

#[cfg(feature = "alloc")]
mod lfilter;

#[cfg(feature = "alloc")]
pub use lfilter::lfilter;

#[cfg(feature = "alloc")]
pub use response::{
    filter_iir, freqs, freqs2time, freqs_resp, freqz, freqz_resp, unwrap, FreqResponse, RespFlags,
};
