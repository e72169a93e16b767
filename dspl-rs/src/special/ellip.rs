//! Elliptic (Jacobi) transcendental functions used by the Cauer/elliptic
//! filter prototype.
//!
//! All four routines here follow the iterative Landen-transform algorithm
//! of the original C implementation exactly, including its fixed iteration
//! depth.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};
use nalgebra::{Complex, RealField};
use num_traits::Float;

/// Number of Landen-transform iterations used by `cd`/`acd`. The original
/// library hardcodes this; 16 iterations already drive `k_i` to exactly
/// zero in double precision for any `k` admissible here (`0 <= k < 1`).
pub const ELLIP_ITER: usize = 16;

/// Computes the Landen descending sequence `k_0 = k, k_i = (k_{i-1} / (1 +
/// sqrt(1 - k_{i-1}^2)))^2` used by the complete elliptic integral series
/// `K(k) = (pi/2) * prod(1 + k_i)`.
///
/// # Panics
/// Panics if `k` is outside `[0, 1)`; this is an internal invariant for
/// every caller in this crate (filter design clamps the modulus before
/// calling), not a user-facing argument check.
#[cfg(feature = "alloc")]
pub fn landen<F: Float>(k: F, n: usize) -> Vec<F> {
    assert!(k >= F::zero() && k < F::one(), "elliptic modulus out of [0, 1)");
    let mut y = vec![F::zero(); n];
    y[0] = k;
    for i in 1..n {
        let prev = y[i - 1];
        let mut next = prev / (F::one() + (F::one() - prev * prev).sqrt());
        next = next * next;
        y[i] = next;
    }
    y
}

/// Jacobi elliptic function `cd(u*K(k), k)` for real `u`, evaluated by
/// descending through the Landen sequence starting from `cos(u*pi/2)`.
#[cfg(feature = "alloc")]
pub fn cd<F: Float>(u: F, k: F) -> F {
    let lnd = landen(k, ELLIP_ITER);
    let mut y = (u * F::from(core::f64::consts::FRAC_PI_2).unwrap()).cos();
    for i in (1..ELLIP_ITER).rev() {
        y = (F::one() + lnd[i]) / (F::one() / y + lnd[i] * y);
    }
    y
}

/// Inverse Jacobi elliptic function `cd^-1(w, k)`, ascending through the
/// Landen sequence.
#[cfg(feature = "alloc")]
pub fn acd<F: Float>(w: F, k: F) -> F {
    let lnd = landen(k, ELLIP_ITER);
    let mut u = w;
    for i in 1..ELLIP_ITER {
        let mut t = lnd[i - 1] * u;
        t = t * t;
        let t = F::one() + (F::one() - t).sqrt();
        u = F::from(2.0).unwrap() * u / (t + t * lnd[i]);
    }
    F::from(2.0).unwrap() * u.acos() / F::from(core::f64::consts::PI).unwrap()
}

/// Jacobi elliptic function `sn(u*K(k), k) = sqrt(1 - cd(u,k)^2)` restricted
/// to the principal branch used by elliptic filter design (`u` in `[0, 1]`,
/// where `sn` is nonnegative).
#[cfg(feature = "alloc")]
pub fn sn<F: Float>(u: F, k: F) -> F {
    let c = cd(F::one() - u, k);
    (F::one() - c * c).sqrt()
}

/// Inverse of `sn`, via `asn(w, k) = 1 - acd(sqrt(1 - w^2), k)`.
#[cfg(feature = "alloc")]
pub fn asn<F: Float>(w: F, k: F) -> F {
    F::one() - acd((F::one() - w * w).sqrt(), k)
}

/// Complex counterpart of [`cd`]: replaces the real `cos` start and the
/// real reciprocal in the descending recursion with their complex forms
/// (the reciprocal going through `conj(y) / |y|^2`), for the complex
/// evaluation path used while tracing `R_N` off the real axis.
#[cfg(feature = "alloc")]
pub fn ccd<F: Float + RealField>(u: Complex<F>, k: F) -> Complex<F> {
    let lnd = landen(k, ELLIP_ITER);
    let half_pi = F::from(core::f64::consts::FRAC_PI_2).unwrap();
    let mut y = crate::special::ccos_scalar(u * Complex::new(half_pi, F::zero()));
    for i in (1..ELLIP_ITER).rev() {
        let ki = Complex::new(lnd[i], F::zero());
        let recip_y = y.conj() / (y.re * y.re + y.im * y.im);
        y = (Complex::new(F::one(), F::zero()) + ki) / (recip_y + ki * y);
    }
    y
}

/// Complex counterpart of [`acd`].
#[cfg(feature = "alloc")]
pub fn cacd<F: Float + RealField>(w: Complex<F>, k: F) -> Complex<F> {
    let lnd = landen(k, ELLIP_ITER);
    let two = F::from(2.0).unwrap();
    let mut u = w;
    for i in 1..ELLIP_ITER {
        let ki_prev = Complex::new(lnd[i - 1], F::zero());
        let ki = Complex::new(lnd[i], F::zero());
        let t = ki_prev * u;
        let t = t * t;
        let one = Complex::new(F::one(), F::zero());
        let t = one + crate::special::csqrt_scalar(one - t);
        u = Complex::new(two, F::zero()) * u / (t + t * ki);
    }
    crate::special::cacos_scalar(u) * Complex::new(two / F::from(core::f64::consts::PI).unwrap(), F::zero())
}

/// Complex counterpart of [`sn`], `sn(u,k) = sqrt(1 - cd(1-u,k)^2)`.
#[cfg(feature = "alloc")]
pub fn csn<F: Float + RealField>(u: Complex<F>, k: F) -> Complex<F> {
    let one = Complex::new(F::one(), F::zero());
    let c = ccd(one - u, k);
    crate::special::csqrt_scalar(one - c * c)
}

/// Complex counterpart of [`asn`].
#[cfg(feature = "alloc")]
pub fn casn<F: Float + RealField>(w: Complex<F>, k: F) -> Complex<F> {
    let one = Complex::new(F::one(), F::zero());
    one - cacd(crate::special::csqrt_scalar(one - w * w), k)
}

/// Elliptic rational function `R_N(w, k)`: argument `w` and modulus `k` are
/// independent parameters (unlike `cd`, which takes a single combined
/// argument). Evaluated via the zero/pole product form
/// `original_source/dspl/src/ellipj.c`'s `ellip_rat` uses directly, with
/// `xi_i = cd((2i+1)/N, k)` the rational function's zeros:
/// `R_N(w,k) = (w if N odd else 1) * prod_i (w^2 - xi_i^2) * (1 - k^2 xi_i^2)
///             / ((1 - w^2 k^2 xi_i^2) * (1 - xi_i^2))`.
#[cfg(feature = "alloc")]
pub fn rat_ellip<F: Float>(n: u32, w: F, k: F) -> F {
    let nf = F::from(n).unwrap();
    let r = n % 2;
    let l = (n - r) / 2;
    let mut u = if r == 1 { w } else { F::one() };
    let k2 = k * k;
    let w2 = w * w;
    for i in 0..l {
        let t = F::from(2 * i + 1).unwrap() / nf;
        let xi = cd(t, k);
        let xi2 = xi * xi;
        u = u * (w2 - xi2) / (F::one() - w2 * k2 * xi2);
        u = u * (F::one() - k2 * xi2) / (F::one() - xi2);
    }
    u
}

/// Solves the elliptic modular equation for the prototype modulus `k` that
/// makes an order-`n` elliptic filter meet both the passband ripple `rp`
/// (dB) and stopband attenuation `rs` (dB) exactly; callers use the
/// returned modulus directly for zero/pole placement (`sn(u, k)`) and its
/// complement `sqrt(1 - k^2)`.
///
/// Grounded directly on `original_source/dspl/src/ellipj.c`'s
/// `ellip_modulareq`: `ke = sqrt(1 - (eps/eps_s)^2)` from the ripple/
/// attenuation pair, then `k = sqrt(1 - kp^2)` where `kp = ke^n *
/// prod_i sn((2i+1)/n, ke)^4` over the same half-count `L` used by
/// `rat_ellip`, reusing this module's own `sn` rather than the C source's
/// direct Landen-descent restatement of it.
#[cfg(feature = "alloc")]
pub fn ellip_modular_eq<F: Float>(n: u32, rp: F, rs: F) -> Option<F> {
    let one = F::one();
    let ten = F::from(10.0).unwrap();
    let eps = (ten.powf(rp / ten) - one).sqrt();
    let eps_s = (ten.powf(rs / ten) - one).sqrt();
    let mut ke = eps / eps_s;
    ke = (one - ke * ke).sqrt();

    let r = n % 2;
    let l = (n - r) / 2;
    let mut kp = one;
    for i in 0..l {
        let t = F::from(2 * i + 1).unwrap() / F::from(n).unwrap();
        let s = sn(t, ke);
        let s2 = s * s;
        kp = kp * s2 * s2;
    }
    kp = kp * ke.powi(n as i32);
    let k1_sq = one - kp * kp;
    if k1_sq < F::zero() || k1_sq.is_nan() {
        return None;
    }
    Some(k1_sq.sqrt())
}

/// Alias of [`ellip_modular_eq`] under its alternate argument-order name.
#[cfg(feature = "alloc")]
pub fn ellip_modulareq<F: Float>(rp: F, rs: F, n: u32) -> Option<F> {
    ellip_modular_eq(n, rp, rs)
}
