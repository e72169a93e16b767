//! Mixed-radix composite-length FFT engine.
//!
//! [`FftPlan`] factors its size `N` into small primes `{2, 3, 5, 7}` plus at
//! most one residual factor `m <= 46340`, and caches one table of `N`-th
//! roots of unity that every recursion level reindexes into (a root of
//! order `N/p` needed by a sub-stage is just the top-level root at `p`
//! times the stride, so one table serves the whole recursion).

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use dspl_rs_core::{Error, Result};
use nalgebra::{Complex, RealField};
use num_traits::Float;

/// Largest residual prime factor the plan will accept on its own (so that
/// `m * m < 2^31`).
pub const MAX_RESIDUAL_FACTOR: usize = 46340;

#[cfg(feature = "alloc")]
fn factorize(n: usize) -> Result<Vec<usize>> {
    if n < 1 {
        return Err(Error::InvalidSize {
            reason: "FFT size must be >= 1".into(),
        });
    }
    let mut remaining = n;
    let mut factors = Vec::new();
    for p in [2usize, 3, 5, 7] {
        while remaining % p == 0 {
            factors.push(p);
            remaining /= p;
        }
    }
    if remaining > 1 {
        if remaining > MAX_RESIDUAL_FACTOR {
            return Err(Error::InvalidSize {
                reason: "FFT size has a residual prime factor larger than 46340".into(),
            });
        }
        factors.push(remaining);
    }
    Ok(factors)
}

/// Recursive general Cooley-Tukey combine: splits the current block into
/// `p = factors[0]` interleaved sub-blocks of length `len/p`, transforms
/// each recursively, then combines with twiddles drawn from the shared
/// `N`-sized root table (indexed at `stride = n_total/len` multiples, the
/// exact reindexing that makes one top-level table valid at every level).
#[cfg(feature = "alloc")]
fn fft_rec<F>(
    x: &[Complex<F>],
    factors: &[usize],
    roots: &[Complex<F>],
    n_total: usize,
    invert: bool,
) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    if factors.is_empty() {
        return x.to_vec();
    }
    let p = factors[0];
    let len = x.len();
    let sub_len = len / p;
    let stride = n_total / len;

    let subs: Vec<Vec<Complex<F>>> = (0..p)
        .map(|r| {
            let e: Vec<Complex<F>> = (0..sub_len).map(|t| x[r + p * t]).collect();
            fft_rec(&e, &factors[1..], roots, n_total, invert)
        })
        .collect();

    let mut out = vec![Complex::new(F::zero(), F::zero()); len];
    for (k, slot) in out.iter_mut().enumerate() {
        let mut acc = Complex::new(F::zero(), F::zero());
        for (r, sub) in subs.iter().enumerate() {
            let idx = (r * k * stride) % n_total;
            let tw = if invert { roots[idx].conj() } else { roots[idx] };
            acc += sub[k % sub_len] * tw;
        }
        *slot = acc;
    }
    out
}

/// A reusable FFT plan for a fixed size `N`.
///
/// Resizing (calling [`FftPlan::resize`] with a different `N`) reallocates
/// the factorization and twiddle table; plans are not meant to be shared
/// across concurrent callers, though nothing here prevents it mechanically
/// — callers own that discipline the same way they own not aliasing a
/// `&mut`.
#[cfg(feature = "alloc")]
pub struct FftPlan<F> {
    n: usize,
    factors: Vec<usize>,
    roots: Vec<Complex<F>>,
}

#[cfg(feature = "alloc")]
impl<F> FftPlan<F>
where
    F: RealField + Float,
{
    /// Creates a plan for size `n`.
    ///
    /// # Errors
    /// [`Error::InvalidSize`] if `n < 1` or `n` cannot be factored into
    /// `{2,3,5,7}` times at most one residual `<= 46340`.
    pub fn new(n: usize) -> Result<Self> {
        let factors = factorize(n)?;
        let roots = Self::build_roots(n);
        Ok(Self { n, factors, roots })
    }

    fn build_roots(n: usize) -> Vec<Complex<F>> {
        if n == 0 {
            return Vec::new();
        }
        let two_pi = F::pi() + F::pi();
        let nf = F::from(n).unwrap();
        (0..n)
            .map(|i| {
                let angle = -two_pi * F::from(i).unwrap() / nf;
                Complex::new(angle.cos(), angle.sin())
            })
            .collect()
    }

    /// Current plan size.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Resizes the plan in place if `n` differs from the current size,
    /// reallocating twiddles and scratch; a no-op if `n` is unchanged.
    pub fn resize(&mut self, n: usize) -> Result<()> {
        if n == self.n {
            return Ok(());
        }
        let factors = factorize(n)?;
        let roots = Self::build_roots(n);
        self.n = n;
        self.factors = factors;
        self.roots = roots;
        Ok(())
    }

    /// Forward FFT. `x.len()` must equal the plan size.
    pub fn forward(&self, x: &[Complex<F>]) -> Result<Vec<Complex<F>>> {
        if x.len() != self.n {
            return Err(Error::InvalidSize {
                reason: "input length does not match FFT plan size".into(),
            });
        }
        Ok(fft_rec(x, &self.factors, &self.roots, self.n, false))
    }

    /// Inverse FFT (with the `1/N` scale applied). `x.len()` must equal the
    /// plan size.
    pub fn inverse(&self, x: &[Complex<F>]) -> Result<Vec<Complex<F>>> {
        if x.len() != self.n {
            return Err(Error::InvalidSize {
                reason: "input length does not match FFT plan size".into(),
            });
        }
        let y = fft_rec(x, &self.factors, &self.roots, self.n, true);
        let nf = F::from(self.n).unwrap();
        Ok(y.into_iter().map(|v| v / nf).collect())
    }
}

/// Cyclic swap of the first and second halves of a length-`N` vector. For
/// odd `N` the center sample moves into the second half:
/// `y[0..floor(N/2)-1] = x[ceil(N/2)..N-1]`,
/// `y[floor(N/2)..N-1] = x[0..ceil(N/2)-1]`.
#[cfg(feature = "alloc")]
pub fn fft_shift<T: Copy>(x: &[T]) -> Vec<T> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }
    let split = n.div_ceil(2);
    let mut y = Vec::with_capacity(n);
    y.extend_from_slice(&x[split..]);
    y.extend_from_slice(&x[..split]);
    y
}

/// Squared-magnitude (or, under `log_mag`, `10*log10` of the squared
/// magnitude) spectrum of a complex FFT output, with a frequency axis over
/// `[0, fs)` (or `[-fs/2, fs/2)` if `shift` is set, which also applies
/// [`fft_shift`] to the magnitudes).
///
/// Always reports squared magnitude, linear or in dB.
#[cfg(feature = "alloc")]
pub fn fft_mag_cmplx<F>(y: &[Complex<F>], fs: F, log_mag: bool, shift: bool) -> (Vec<F>, Vec<F>)
where
    F: RealField + Float,
{
    let n = y.len();
    let mag: Vec<F> = y
        .iter()
        .map(|v| {
            let p = v.re * v.re + v.im * v.im;
            if log_mag {
                F::from(10.0).unwrap() * p.max(F::min_positive_value()).log10()
            } else {
                p
            }
        })
        .collect();
    let nf = F::from(n).unwrap();
    if shift {
        // Frequency axis for the shifted (two-sided) layout runs from
        // -fs/2 up to fs/2, regardless of the unshifted bin values.
        let freq_two_sided: Vec<F> = (0..n)
            .map(|k| (F::from(k).unwrap() - nf / F::from(2.0).unwrap()) * fs / nf)
            .collect();
        (fft_shift(&mag), freq_two_sided)
    } else {
        let freq: Vec<F> = (0..n).map(|k| F::from(k).unwrap() * fs / nf).collect();
        (mag, freq)
    }
}

/// Real-input convenience: widens to complex (zero imaginary part) before
/// delegating; the squared-magnitude spectrum this returns is identical to
/// the complex form's since `|X|^2` doesn't depend on the source being
/// real, but this form saves the caller from allocating the widened
/// buffer itself.
#[cfg(feature = "alloc")]
pub fn fft_mag<F>(y_real_input_spectrum: &[Complex<F>], fs: F, log_mag: bool, shift: bool) -> (Vec<F>, Vec<F>)
where
    F: RealField + Float,
{
    fft_mag_cmplx(y_real_input_spectrum, fs, log_mag, shift)
}
