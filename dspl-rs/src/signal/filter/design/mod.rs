//! IIR filter design: analog prototypes, frequency transforms, and output
//! format conversions. The `ZpkFormatFilter`/`DigitalFilter`/`Sos` family of
//! types is reconstructed here from their call sites in [`iirfilter`] (the
//! module that defines them was not among the retrieved files).

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use nalgebra::{Complex, RealField};
use num_traits::Float;

pub mod iirfilter;
pub mod firwin;

pub use iirfilter::{
    buttap_dyn, cheb1ap_dyn, cheb2ap_dyn, cheby1_dyn, cheby2_dyn, ellip_dyn, ellipap_dyn,
    iirfilter_dyn,
};
pub use firwin::{firwin_dyn, FirBandType};

/// Band shape requested from [`iirfilter_dyn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBandType {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

/// Analog prototype family requested from [`iirfilter_dyn`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterType {
    Butterworth,
    ChebyshevI,
    ChebyshevII,
    CauerElliptic,
}

/// Output representation requested from [`iirfilter_dyn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutputType {
    Zpk,
    Ba,
    Sos,
}

/// Zero-pole-gain representation of a rational transfer function.
#[derive(Debug, Clone)]
#[cfg(feature = "alloc")]
pub struct ZpkFormatFilter<F> {
    pub z: Vec<Complex<F>>,
    pub p: Vec<Complex<F>>,
    pub k: F,
}

#[cfg(feature = "alloc")]
impl<F> ZpkFormatFilter<F> {
    pub fn new(z: Vec<Complex<F>>, p: Vec<Complex<F>>, k: F) -> Self {
        Self { z, p, k }
    }
}

/// Numerator/denominator coefficient representation, descending powers,
/// `a[0]`-normalized.
#[derive(Debug, Clone)]
#[cfg(feature = "alloc")]
pub struct BaFormatFilter<F> {
    pub b: Vec<F>,
    pub a: Vec<F>,
}

#[cfg(feature = "alloc")]
impl<F> BaFormatFilter<F> {
    pub fn new(b: Vec<F>, a: Vec<F>) -> Self {
        Self { b, a }
    }
}

/// A single real biquad section `(b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 +
/// a2 z^-2)`.
#[derive(Debug, Clone, Copy)]
pub struct Sos<F> {
    pub b: [F; 3],
    pub a: [F; 3],
}

impl<F> Sos<F> {
    pub fn new(b: [F; 3], a: [F; 3]) -> Self {
        Self { b, a }
    }
}

/// Cascade of [`Sos`] sections equivalent to a full-order transfer function.
#[derive(Debug, Clone)]
#[cfg(feature = "alloc")]
pub struct SosFormatFilter<F> {
    pub sos: Vec<Sos<F>>,
}

#[cfg(feature = "alloc")]
impl<F> SosFormatFilter<F> {
    pub fn new(sos: Vec<Sos<F>>) -> Self {
        Self { sos }
    }
}

/// The three interchangeable output shapes [`iirfilter_dyn`] can produce.
#[derive(Debug, Clone)]
#[cfg(feature = "alloc")]
pub enum DigitalFilter<F> {
    Zpk(ZpkFormatFilter<F>),
    Ba(BaFormatFilter<F>),
    Sos(SosFormatFilter<F>),
}

/// LP -> LP analog frequency transform: `s <- s / wo`, i.e. scales every
/// root by `wo` (default `1`).
#[cfg(feature = "alloc")]
pub fn lp2lp_zpk_dyn<F>(zpk: ZpkFormatFilter<F>, wo: Option<F>) -> ZpkFormatFilter<F>
where
    F: RealField + Float,
{
    let wo = wo.unwrap_or_else(F::one);
    let degree = zpk.p.len() as isize - zpk.z.len() as isize;
    let z: Vec<_> = zpk.z.iter().map(|v| v * wo).collect();
    let p: Vec<_> = zpk.p.iter().map(|v| v * wo).collect();
    let k = zpk.k * Float::powi(wo, degree as i32);
    ZpkFormatFilter::new(z, p, k)
}

/// LP -> HP analog frequency transform: `s <- wo / s`. Every finite root
/// maps to its reciprocal; the degree excess (more poles than zeros in a
/// lowpass prototype) becomes that many zeros placed at the origin.
#[cfg(feature = "alloc")]
pub fn lp2hp_zpk_dyn<F>(zpk: ZpkFormatFilter<F>, wo: Option<F>) -> ZpkFormatFilter<F>
where
    F: RealField + Float,
{
    let wo = wo.unwrap_or_else(F::one);
    let degree = zpk.p.len() as isize - zpk.z.len() as isize;
    let zero = Complex::new(F::zero(), F::zero());
    let mut z: Vec<_> = zpk.z.iter().map(|v| Complex::new(wo, F::zero()) / v).collect();
    let p: Vec<_> = zpk.p.iter().map(|v| Complex::new(wo, F::zero()) / v).collect();
    z.extend(core::iter::repeat(zero).take(degree.max(0) as usize));

    let num: Complex<F> = zpk.z.iter().map(|v| -v).fold(Complex::new(F::one(), F::zero()), |a, b| a * b);
    let den: Complex<F> = zpk.p.iter().map(|v| -v).fold(Complex::new(F::one(), F::zero()), |a, b| a * b);
    let k = zpk.k * (num / den).re;
    ZpkFormatFilter::new(z, p, k)
}

/// LP -> BP analog frequency transform: `s <- (s^2 + wo^2) / (s*bw)`. Order
/// doubles: each root splits into a conjugate pair via the quadratic
/// formula, and the degree excess becomes that many zeros at the origin.
#[cfg(feature = "alloc")]
pub fn lp2bp_zpk_dyn<F>(zpk: ZpkFormatFilter<F>, wo: Option<F>, bw: Option<F>) -> ZpkFormatFilter<F>
where
    F: RealField + Float,
{
    let wo = wo.unwrap_or_else(F::one);
    let bw = bw.unwrap_or_else(F::one);
    let degree = zpk.p.len() as isize - zpk.z.len() as isize;
    let half_bw = bw / F::from(2).unwrap();
    let wo2 = Complex::new(wo * wo, F::zero());

    let split = |roots: &[Complex<F>]| -> Vec<Complex<F>> {
        let scaled: Vec<Complex<F>> = roots.iter().map(|v| *v * half_bw).collect();
        let mut out = Vec::with_capacity(scaled.len() * 2);
        for &s in &scaled {
            let disc = crate::special::csqrt_scalar(s * s - wo2);
            out.push(s + disc);
        }
        for &s in &scaled {
            let disc = crate::special::csqrt_scalar(s * s - wo2);
            out.push(s - disc);
        }
        out
    };

    let mut z = split(&zpk.z);
    let p = split(&zpk.p);
    let zero = Complex::new(F::zero(), F::zero());
    z.extend(core::iter::repeat(zero).take(degree.max(0) as usize));

    let k = zpk.k * Float::powi(bw, degree as i32);
    ZpkFormatFilter::new(z, p, k)
}

/// LP -> BS analog frequency transform: `s <- (s*bw) / (s^2 + wo^2)`. Order
/// doubles the same way [`lp2bp_zpk_dyn`] does; the degree excess becomes
/// zeros at `+-j*wo` instead of the origin.
#[cfg(feature = "alloc")]
pub fn lp2bs_zpk_dyn<F>(zpk: ZpkFormatFilter<F>, wo: Option<F>, bw: Option<F>) -> ZpkFormatFilter<F>
where
    F: RealField + Float,
{
    let wo = wo.unwrap_or_else(F::one);
    let bw = bw.unwrap_or_else(F::one);
    let degree = zpk.p.len() as isize - zpk.z.len() as isize;
    let half_bw = bw / F::from(2).unwrap();
    let wo2 = Complex::new(wo * wo, F::zero());

    let split = |roots: &[Complex<F>]| -> Vec<Complex<F>> {
        let scaled: Vec<Complex<F>> = roots
            .iter()
            .map(|v| Complex::new(half_bw, F::zero()) / v)
            .collect();
        let mut out = Vec::with_capacity(scaled.len() * 2);
        for &s in &scaled {
            let disc = crate::special::csqrt_scalar(s * s - wo2);
            out.push(s + disc);
        }
        for &s in &scaled {
            let disc = crate::special::csqrt_scalar(s * s - wo2);
            out.push(s - disc);
        }
        out
    };

    let mut z = split(&zpk.z);
    let p = split(&zpk.p);
    z.extend(core::iter::repeat(Complex::new(F::zero(), wo)).take(degree.max(0) as usize));
    z.extend(core::iter::repeat(Complex::new(F::zero(), -wo)).take(degree.max(0) as usize));

    let num: Complex<F> = zpk.z.iter().map(|v| -v).fold(Complex::new(F::one(), F::zero()), |a, b| a * b);
    let den: Complex<F> = zpk.p.iter().map(|v| -v).fold(Complex::new(F::one(), F::zero()), |a, b| a * b);
    let k = zpk.k * (num / den).re;
    ZpkFormatFilter::new(z, p, k)
}

/// Bilinear transform `s <- 2*fs*(z-1)/(z+1)`, applied in its inverse form
/// `z <- (2*fs+s)/(2*fs-s)` to map an analog design to a digital one. The
/// degree excess (more analog poles than zeros) appends that many digital
/// zeros at `z = -1`, the point `s = infinity` maps to under this
/// transform.
#[cfg(feature = "alloc")]
pub fn bilinear_zpk_dyn<F>(zpk: ZpkFormatFilter<F>, fs: F) -> ZpkFormatFilter<F>
where
    F: RealField + Float,
{
    let degree = zpk.p.len() as isize - zpk.z.len() as isize;
    let fs2 = F::from(2).unwrap() * fs;
    let fs2c = Complex::new(fs2, F::zero());

    let mut z: Vec<_> = zpk.z.iter().map(|v| (fs2c + v) / (fs2c - v)).collect();
    let p: Vec<_> = zpk.p.iter().map(|v| (fs2c + v) / (fs2c - v)).collect();
    z.extend(core::iter::repeat(Complex::new(-F::one(), F::zero())).take(degree.max(0) as usize));

    let num: Complex<F> = zpk.z.iter().map(|v| fs2c - v).fold(Complex::new(F::one(), F::zero()), |a, b| a * b);
    let den: Complex<F> = zpk.p.iter().map(|v| fs2c - v).fold(Complex::new(F::one(), F::zero()), |a, b| a * b);
    let k = zpk.k * (num / den).re;
    ZpkFormatFilter::new(z, p, k)
}

/// Expands a zero-pole-gain filter into descending-power, `a[0]`-normalized
/// real coefficient vectors `(b, a)` by repeated convolution of `(1, -root)`
/// factors. `count` names the caller's expected degree; zeros are padded
/// with roots at the origin if fewer than poles so `b` and `a` always come
/// out the same length.
#[cfg(feature = "alloc")]
pub fn zpk2tf_dyn<F>(count: usize, z: &[Complex<F>], p: &[Complex<F>], k: F) -> BaFormatFilter<F>
where
    F: RealField + Float,
{
    let _ = count;
    let mut zv = z.to_vec();
    while zv.len() < p.len() {
        zv.push(Complex::new(F::zero(), F::zero()));
    }

    let poly = |roots: &[Complex<F>]| -> Vec<Complex<F>> {
        let mut coeffs = vec![Complex::new(F::one(), F::zero())];
        for r in roots {
            let mut next = vec![Complex::new(F::zero(), F::zero()); coeffs.len() + 1];
            for (i, c) in coeffs.iter().enumerate() {
                next[i] = next[i] + *c;
                next[i + 1] = next[i + 1] - *c * r;
            }
            coeffs = next;
        }
        coeffs
    };

    let b_cplx = poly(&zv);
    let a_cplx = poly(p);
    let b: Vec<F> = b_cplx.iter().map(|c| c.re * k).collect();
    let a: Vec<F> = a_cplx.iter().map(|c| c.re).collect();
    BaFormatFilter::new(b, a)
}

fn quad_from_root<F>(r: Complex<F>) -> [F; 3]
where
    F: RealField + Float,
{
    if Float::abs(r.im) < F::from(1e-9).unwrap() {
        [F::one(), -r.re, F::zero()]
    } else {
        let mag_sq = r.re * r.re + r.im * r.im;
        [F::one(), -(F::from(2).unwrap() * r.re), mag_sq]
    }
}

/// Greedily pairs each root with the remaining root nearest its conjugate
/// (the pairing spec fixes for reproducibility; any stable pairing
/// reconstructs the same overall transfer function). Real roots (those
/// with no close conjugate partner) are returned alone.
#[cfg(feature = "alloc")]
fn pair_conjugates<F>(roots: &[Complex<F>]) -> Vec<Complex<F>>
where
    F: RealField + Float,
{
    let mut remaining: Vec<Complex<F>> = roots.to_vec();
    let mut reps = Vec::new();
    while let Some(r) = remaining.pop() {
        if Float::abs(r.im) < F::from(1e-9).unwrap() {
            reps.push(r);
            continue;
        }
        let target = r.conj();
        let mut best: Option<(usize, F)> = None;
        for (i, cand) in remaining.iter().enumerate() {
            let d = (*cand - target).re * (*cand - target).re + (*cand - target).im * (*cand - target).im;
            if best.is_none() || d < best.unwrap().1 {
                best = Some((i, d));
            }
        }
        if let Some((i, _)) = best {
            remaining.remove(i);
        }
        reps.push(r);
    }
    reps
}

/// Factors a full-order zero-pole-gain filter into real second-order
/// sections. `order` and `analog` are accepted for call-site parity with
/// related transforms (the pairing/gain distribution below does not
/// depend on either).
#[cfg(feature = "alloc")]
pub fn zpk2sos_dyn<F>(
    order: usize,
    zpk: ZpkFormatFilter<F>,
    _pairing: Option<()>,
    _analog: Option<bool>,
) -> SosFormatFilter<F>
where
    F: RealField + Float,
{
    let _ = order;
    let ZpkFormatFilter { mut z, p, k } = zpk;
    while z.len() < p.len() {
        z.push(Complex::new(F::zero(), F::zero()));
    }

    let mut pole_reps = pair_conjugates(&p);
    let mut zero_reps = pair_conjugates(&z);
    while zero_reps.len() < pole_reps.len() {
        zero_reps.push(Complex::new(F::zero(), F::zero()));
    }

    // Order sections so the pair closest to the unit circle (the most
    // resonant, hence most sensitive to finite-precision cascading) lands
    // last.
    pole_reps.sort_by(|a, b| {
        let qa = a.re * a.re + a.im * a.im;
        let qb = b.re * b.re + b.im * b.im;
        qa.partial_cmp(&qb).unwrap()
    });

    let n_sections = pole_reps.len().max(1);
    let sign = if k < F::zero() { -F::one() } else { F::one() };
    let gain_per_section = Float::powf(Float::abs(k), F::one() / F::from(n_sections).unwrap());

    let mut sos = Vec::with_capacity(n_sections);
    for (i, (zr, pr)) in zero_reps.iter().zip(pole_reps.iter()).enumerate() {
        let mut b = quad_from_root(*zr);
        let a = quad_from_root(*pr);
        let section_gain = if i == 0 { sign * gain_per_section } else { gain_per_section };
        for v in b.iter_mut() {
            *v = *v * section_gain;
        }
        sos.push(Sos::new(b, a));
    }
    SosFormatFilter::new(sos)
}

/// Rational composition (`ratcompos`): substitutes `s <- c(s)/d(s)` into
/// `H(s) = num(s)/den(s)` and clears denominators, producing the
/// coefficient-domain equivalent of the zpk-domain frequency transforms
/// above. `num`/`den` and `c`/`d` are descending-power coefficient slices;
/// `c` and `d` need not share a degree.
#[cfg(feature = "alloc")]
pub fn ratcompos<F>(num: &[F], den: &[F], c: &[F], d: &[F]) -> (Vec<F>, Vec<F>)
where
    F: RealField + Float,
{
    fn poly_pow<F: RealField + Float>(p: &[F], e: usize) -> Vec<F> {
        let mut result = vec![F::one()];
        for _ in 0..e {
            result = crate::signal::poly::conv(&result, p);
        }
        result
    }

    let transform = |poly: &[F]| -> Vec<F> {
        if poly.is_empty() {
            return Vec::new();
        }
        let m = poly.len() - 1;
        let mut terms: Vec<Vec<F>> = Vec::with_capacity(poly.len());
        let mut max_len = 0usize;
        for (i, &coeff) in poly.iter().enumerate() {
            let cp = poly_pow(c, m - i);
            let dp = poly_pow(d, i);
            let mut term = crate::signal::poly::conv(&cp, &dp);
            for t in term.iter_mut() {
                *t = *t * coeff;
            }
            max_len = max_len.max(term.len());
            terms.push(term);
        }
        let mut acc = vec![F::zero(); max_len];
        for term in terms {
            let offset = max_len - term.len();
            for (j, &v) in term.iter().enumerate() {
                acc[offset + j] = acc[offset + j] + v;
            }
        }
        acc
    };

    (transform(num), transform(den))
}

/// Inverts the Chebyshev order equation to find the normalized stopband
/// frequency `ws1` an order-`n` prototype must be evaluated at to achieve
/// exactly `rs` dB of attenuation given `rp` dB of passband ripple —
/// a pre-renormalization step ahead of the high-pass/band-stop frequency
/// transforms. Standalone: the
/// zpk-domain pipeline `iirfilter_dyn` uses does not need it, since it
/// pre-warps edges directly rather than renormalizing the prototype.
#[cfg(feature = "alloc")]
pub fn filter_ws1<F>(n: usize, rp: F, rs: F) -> F
where
    F: RealField + Float,
{
    let ten = F::from(10).unwrap();
    let ratio = Float::sqrt(
        (Float::powf(ten, rs / ten) - F::one()) / (Float::powf(ten, rp / ten) - F::one()),
    );
    let nf = F::from(n).unwrap();
    Float::cosh(Float::acosh(ratio) / nf)
}
