//! Direct linear convolution.
//!
//! This is the aliasing-safe O(N*M) kernel used both as the polynomial
//! multiplication primitive and as the fallback path when fast (FFT-based)
//! convolution is not requested.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use num_traits::Float;

/// Convolution mode determines behavior near edges and output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolveMode {
    /// Full convolution, output size is `in1.len() + in2.len() - 1`.
    Full,
    /// Valid convolution, output size is `max(in1.len(), in2.len()) - min(in1.len(), in2.len()) + 1`.
    Valid,
    /// Same convolution, output size is `in1.len()`.
    Same,
}

/// Direct convolution of two real sequences.
///
/// Returns an empty vector if either input is empty. Panics if `mode` is
/// [`ConvolveMode::Valid`] and neither sequence is at least as long as the
/// other (scipy raises in that case too; here it is a programming error,
/// not a caller-data error, since the caller controls both lengths).
#[cfg(feature = "alloc")]
pub fn convolve<F>(in1: &[F], in2: &[F], mode: ConvolveMode) -> Vec<F>
where
    F: Float,
{
    if in1.is_empty() || in2.is_empty() {
        return Vec::new();
    }

    let n = in1.len();
    let m = in2.len();
    let full_len = n + m - 1;
    let mut full = vec![F::zero(); full_len];

    for (i, &a) in in1.iter().enumerate() {
        if a == F::zero() {
            continue;
        }
        for (j, &b) in in2.iter().enumerate() {
            full[i + j] = full[i + j] + a * b;
        }
    }

    match mode {
        ConvolveMode::Full => full,
        ConvolveMode::Same => {
            let out_len = n;
            let start = (full_len - out_len) / 2;
            full[start..start + out_len].to_vec()
        }
        ConvolveMode::Valid => {
            let out_len = n.max(m) - n.min(m) + 1;
            let start = n.min(m) - 1;
            full[start..start + out_len].to_vec()
        }
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;

    #[test]
    fn full_matches_known_result() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let y = convolve(&a, &b, ConvolveMode::Full);
        assert_eq!(y, vec![4.0, 13.0, 28.0, 27.0, 18.0]);
    }

    #[test]
    fn same_matches_input_length() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let y = convolve(&a, &b, ConvolveMode::Same);
        assert_eq!(y.len(), a.len());
        assert_eq!(y, vec![13.0, 28.0, 27.0]);
    }

    #[test]
    fn valid_matches_known_result() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 1.0];
        let y = convolve(&a, &b, ConvolveMode::Valid);
        assert_eq!(y, vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let a: [f64; 0] = [];
        let b = [1.0, 2.0];
        assert!(convolve(&a, &b, ConvolveMode::Full).is_empty());
    }
}
