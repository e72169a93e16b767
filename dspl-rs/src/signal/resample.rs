//! Farrow-structure cubic-spline rational resampler (`P/Q`), with the
//! block/continuous invocation contract for stitching successive calls
//! over a streamed signal.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use dspl_rs_core::{Error, Result};
use nalgebra::RealField;
use num_traits::{Float, ToPrimitive};

/// Cubic B-spline basis weights for the 4-tap Farrow structure, at
/// fractional phase `mu` in `[0, 1)` between the two center taps:
/// `h[-1](mu) = (1-mu)^3/6`, `h[0](mu) = (3mu^3 - 6mu^2 + 4)/6`,
/// `h[1](mu) = (-3mu^3 + 3mu^2 + 3mu + 1)/6`, `h[2](mu) = mu^3/6`. Unlike
/// the cubic Lagrange basis, these are a smoothing (approximating) kernel:
/// at `mu = 0` they don't collapse to a unit impulse on the center tap, so
/// `farrow_spline` at a 1:1 ratio is a 3-tap smoother, not a passthrough.
fn farrow_weights<F: RealField + Float>(mu: F) -> [F; 4] {
    let one = F::one();
    let three = F::from(3).unwrap();
    let four = F::from(4).unwrap();
    let six = F::from(6).unwrap();
    let mu2 = mu * mu;
    let mu3 = mu2 * mu;
    let h_m1 = (one - mu) * (one - mu) * (one - mu) / six;
    let h_0 = (three * mu3 - six * mu2 + four) / six;
    let h_1 = (-three * mu3 + three * mu2 + three * mu + one) / six;
    let h_2 = mu3 / six;
    [h_m1, h_0, h_1, h_2]
}

/// Resamples `x` from rate `P` to rate `Q` (output period is `Q/P` times
/// the input period) using the Farrow cubic-spline structure, starting at
/// fractional delay `frd` (restricted to `[0, 1)`).
///
/// For each output index the routine locates the base integer index and
/// fractional phase into `x`, then evaluates the 4-tap cubic-spline Farrow
/// polynomial there. Samples needed outside `x`'s bounds are taken from the
/// nearest edge sample, so a single block at a stream boundary never reads
/// out of range; continuous (block-wise) use instead supplies genuine
/// history by overlapping 4 samples between successive calls (see
/// [`FarrowResampler`]).
///
/// The output buffer is allocated by this routine; its length is
/// `floor((nx - 1) / (Q/P)) + 1`.
///
/// # Errors
/// - [`Error::InvalidResampleRatio`] if `p` or `q` is zero.
/// - [`Error::InvalidFracDelay`] if `frd` is outside `[0, 1)`.
/// - [`Error::InvalidSize`] if `x` has fewer than 4 samples.
#[cfg(feature = "alloc")]
pub fn farrow_spline<F>(x: &[F], p: usize, q: usize, frd: F) -> Result<Vec<F>>
where
    F: RealField + Float,
{
    if p == 0 || q == 0 {
        return Err(Error::InvalidResampleRatio);
    }
    if frd < F::zero() || frd >= F::one() {
        return Err(Error::InvalidFracDelay);
    }
    if x.len() < 4 {
        return Err(Error::InvalidSize {
            reason: "farrow_spline requires at least 4 input samples".into(),
        });
    }

    let dt = F::from(q).unwrap() / F::from(p).unwrap();
    let nx = x.len();
    let ny = (F::from(nx - 1).unwrap() / dt)
        .floor()
        .to_usize()
        .ok_or(Error::InvalidResampleRatio)?
        + 1;

    let last = nx as isize - 1;
    let tap = |i: isize| -> F { x[i.clamp(0, last) as usize] };

    let mut y = Vec::with_capacity(ny);
    for k in 0..ny {
        let t = frd + F::from(k).unwrap() * dt;
        let n0f = t.floor();
        let n0 = n0f
            .to_isize()
            .ok_or(Error::InvalidFracDelay)?;
        let mu = t - n0f;
        let [h_m1, h_0, h_1, h_2] = farrow_weights(mu);
        let sample = h_m1 * tap(n0 - 1) + h_0 * tap(n0) + h_1 * tap(n0 + 1) + h_2 * tap(n0 + 2);
        y.push(sample);
    }

    Ok(y)
}

/// Carries the fractional-delay state needed to stitch successive
/// [`farrow_spline`] calls over a continuously streamed signal, per the
/// block-use contract: each block overlaps the previous one by 4 input
/// samples, and the caller splices by dropping the first 2 output samples
/// of every block after the first.
#[derive(Debug, Clone, Copy)]
#[cfg(feature = "alloc")]
pub struct FarrowResampler<F> {
    p: usize,
    q: usize,
    dt: F,
    ts0: F,
    ty0: F,
    frd: F,
}

#[cfg(feature = "alloc")]
impl<F> FarrowResampler<F>
where
    F: RealField + Float,
{
    /// Builds a resampler for ratio `P/Q`, starting at zero fractional
    /// delay.
    ///
    /// # Errors
    /// [`Error::InvalidResampleRatio`] if `p` or `q` is zero.
    pub fn new(p: usize, q: usize) -> Result<Self> {
        if p == 0 || q == 0 {
            return Err(Error::InvalidResampleRatio);
        }
        let dt = F::from(q).unwrap() / F::from(p).unwrap();
        Ok(Self {
            p,
            q,
            dt,
            ts0: F::zero(),
            ty0: F::zero(),
            frd: F::zero(),
        })
    }

    /// Current input-to-output ratio.
    pub fn ratio(&self) -> (usize, usize) {
        (self.p, self.q)
    }

    /// Resamples one block, internally carrying the fractional delay to
    /// the next call. `block` must overlap the previous call's input by 4
    /// samples (the first call has no such requirement).
    pub fn process_block(&mut self, block: &[F]) -> Result<Vec<F>> {
        let out = farrow_spline(block, self.p, self.q, self.frd)?;

        let l = F::from(block.len()).unwrap();
        let ntmp = F::from(out.len()).unwrap();
        let ts1 = self.ts0 + l;
        let ty1 = self.ty0 + ntmp * self.dt;

        let ts0 = ts1 - F::from(4).unwrap();
        let mut ty0 = ty1;
        while ty0 > ts0 {
            ty0 = ty0 - self.dt;
        }

        self.frd = ts0 - ty0;
        self.ts0 = ts0;
        self.ty0 = ty0;

        Ok(out)
    }
}
