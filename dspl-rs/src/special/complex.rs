//! Elementwise complex transcendental functions.
//!
//! `nalgebra::Complex<F>` already provides `sqrt`/`ln`/`asin`/`acos` through
//! `ComplexField`, but their branch-cut behavior near the real axis does not
//! always agree with the classic branch-avoiding-cancellation formulations
//! used throughout filter design (elliptic and Chebyshev prototypes in
//! particular are sensitive to this). These free functions reimplement the
//! small set actually needed by the rest of the crate using the same
//! numerically robust forms.
//!
//! Each transcendental has a `*_scalar` form for single values (used
//! internally by `special::ellip` and the filter-design transforms) and a
//! plain slice form taking `&[Complex<F>]` and writing `&mut [Complex<F>]`
//! — safe to call with overlapping read/write regions built from the same
//! backing buffer since each output element depends only on the matching
//! input element, never a neighbor.

use nalgebra::{Complex, RealField};
use num_traits::Float;

/// Complex square root, computed by the branch-avoiding-cancellation form
/// `t = x + |x|`, `y = sqrt(|x|) * t / |t|`, which keeps the principal
/// branch (`Re(y) >= 0`) without catastrophic cancellation near the
/// negative real axis.
pub fn csqrt_scalar<F>(x: Complex<F>) -> Complex<F>
where
    F: RealField + Float,
{
    let r = x.norm();
    if r == F::zero() {
        return Complex::new(F::zero(), F::zero());
    }
    let t = Complex::new(x.re + r, x.im);
    let at = t.norm();
    if at == F::zero() {
        return Complex::new(F::zero(), r.sqrt());
    }
    let sr = r.sqrt();
    let zr = F::one() / at;
    Complex::new(t.re * zr * sr, t.im * zr * sr)
}

/// Principal complex natural logarithm, `ln|x| + j*atan2(Im(x), Re(x))`.
pub fn clog_scalar<F>(x: Complex<F>) -> Complex<F>
where
    F: RealField + Float,
{
    let abs_sqr = x.re * x.re + x.im * x.im;
    Complex::new(
        F::from(0.5).unwrap() * abs_sqr.ln(),
        x.im.atan2(x.re),
    )
}

/// Complex arcsine, `-j * ln(j*x + sqrt(1 - x^2))`.
///
/// Defined for all complex `x`, including real `|x| > 1` where the real
/// `asin` is undefined; this is the reason filter design code reaches for
/// the complex form even on nominally real arguments.
pub fn casin_scalar<F>(x: Complex<F>) -> Complex<F>
where
    F: RealField + Float,
{
    let one_minus_x2 = Complex::new(F::one() - (x.re * x.re - x.im * x.im), -(F::from(2.0).unwrap() * x.re * x.im));
    let root = csqrt_scalar(one_minus_x2);
    let inner = Complex::new(root.re - x.im, root.im + x.re);
    let l = clog_scalar(inner);
    Complex::new(l.im, -l.re)
}

/// Complex arccosine, `pi/2 - asin(x)`.
pub fn cacos_scalar<F>(x: Complex<F>) -> Complex<F>
where
    F: RealField + Float,
{
    let half_pi = F::frac_pi_2();
    let a = casin_scalar(x);
    Complex::new(half_pi - a.re, -a.im)
}

/// Complex sine via the exponential form, `sin(a+bi) = sin(a)cosh(b) +
/// j*cos(a)sinh(b)`, computed from the real `sin`/`cos` of the real part and
/// `exp(+-Im)` rather than a generic complex exponential, matching the
/// decomposition named in the filter-design math this crate is built on.
pub fn csin_scalar<F>(x: Complex<F>) -> Complex<F>
where
    F: RealField + Float,
{
    let (sr, cr) = (x.re.sin(), x.re.cos());
    let (ep, en) = (x.im.exp(), (-x.im).exp());
    let sinh = (ep - en) * F::from(0.5).unwrap();
    let cosh = (ep + en) * F::from(0.5).unwrap();
    Complex::new(sr * cosh, cr * sinh)
}

/// Complex cosine via the exponential form, `cos(a+bi) = cos(a)cosh(b) -
/// j*sin(a)sinh(b)`.
pub fn ccos_scalar<F>(x: Complex<F>) -> Complex<F>
where
    F: RealField + Float,
{
    let (sr, cr) = (x.re.sin(), x.re.cos());
    let (ep, en) = (x.im.exp(), (-x.im).exp());
    let sinh = (ep - en) * F::from(0.5).unwrap();
    let cosh = (ep + en) * F::from(0.5).unwrap();
    Complex::new(cr * cosh, -(sr * sinh))
}

/// Elementwise [`csqrt_scalar`] over `x`, written into `out`.
///
/// # Panics
/// Panics if `out.len() != x.len()`.
pub fn csqrt<F>(x: &[Complex<F>], out: &mut [Complex<F>])
where
    F: RealField + Float,
{
    assert_eq!(x.len(), out.len(), "csqrt: output slice length must match input");
    for (xi, oi) in x.iter().zip(out.iter_mut()) {
        *oi = csqrt_scalar(*xi);
    }
}

/// Elementwise [`clog_scalar`] over `x`, written into `out`.
///
/// # Panics
/// Panics if `out.len() != x.len()`.
pub fn clog<F>(x: &[Complex<F>], out: &mut [Complex<F>])
where
    F: RealField + Float,
{
    assert_eq!(x.len(), out.len(), "clog: output slice length must match input");
    for (xi, oi) in x.iter().zip(out.iter_mut()) {
        *oi = clog_scalar(*xi);
    }
}

/// Elementwise [`casin_scalar`] over `x`, written into `out`.
///
/// # Panics
/// Panics if `out.len() != x.len()`.
pub fn casin<F>(x: &[Complex<F>], out: &mut [Complex<F>])
where
    F: RealField + Float,
{
    assert_eq!(x.len(), out.len(), "casin: output slice length must match input");
    for (xi, oi) in x.iter().zip(out.iter_mut()) {
        *oi = casin_scalar(*xi);
    }
}

/// Elementwise [`cacos_scalar`] over `x`, written into `out`.
///
/// # Panics
/// Panics if `out.len() != x.len()`.
pub fn cacos<F>(x: &[Complex<F>], out: &mut [Complex<F>])
where
    F: RealField + Float,
{
    assert_eq!(x.len(), out.len(), "cacos: output slice length must match input");
    for (xi, oi) in x.iter().zip(out.iter_mut()) {
        *oi = cacos_scalar(*xi);
    }
}

/// Elementwise [`csin_scalar`] over `x`, written into `out`.
///
/// # Panics
/// Panics if `out.len() != x.len()`.
pub fn csin<F>(x: &[Complex<F>], out: &mut [Complex<F>])
where
    F: RealField + Float,
{
    assert_eq!(x.len(), out.len(), "csin: output slice length must match input");
    for (xi, oi) in x.iter().zip(out.iter_mut()) {
        *oi = csin_scalar(*xi);
    }
}

/// Elementwise [`ccos_scalar`] over `x`, written into `out`.
///
/// # Panics
/// Panics if `out.len() != x.len()`.
pub fn ccos<F>(x: &[Complex<F>], out: &mut [Complex<F>])
where
    F: RealField + Float,
{
    assert_eq!(x.len(), out.len(), "ccos: output slice length must match input");
    for (xi, oi) in x.iter().zip(out.iter_mut()) {
        *oi = ccos_scalar(*xi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sqrt_matches_reference_values() {
        let y = csqrt_scalar(Complex::new(3.0f64, 4.0));
        assert_relative_eq!(y.re, 2.0, epsilon = 1e-9);
        assert_relative_eq!(y.im, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        let y = csqrt_scalar(Complex::new(0.0f64, 0.0));
        assert_relative_eq!(y.re, 0.0);
        assert_relative_eq!(y.im, 0.0);
    }

    #[test]
    fn log_matches_reference_values() {
        let y = clog_scalar(Complex::new(1.0f64, 2.0));
        assert_relative_eq!(y.re, 0.8047189562170501, epsilon = 1e-9);
        assert_relative_eq!(y.im, 1.1071487177940904, epsilon = 1e-9);
    }

    #[test]
    fn asin_matches_reference_values() {
        let y = casin_scalar(Complex::new(1.0f64, 2.0));
        assert_relative_eq!(y.re, 0.42707859639353756, epsilon = 1e-8);
        assert_relative_eq!(y.im, 1.5285709194809982, epsilon = 1e-8);
    }

    #[test]
    fn acos_matches_reference_values() {
        let y = cacos_scalar(Complex::new(1.0f64, 2.0));
        assert_relative_eq!(y.re, 1.1437177404024206, epsilon = 1e-8);
        assert_relative_eq!(y.im, -1.5285709194809982, epsilon = 1e-8);
    }

    #[test]
    fn asin_handles_real_arg_beyond_unity() {
        // real asin is undefined here; complex form must still return a value.
        let y = casin_scalar(Complex::new(2.0f64, 0.0));
        assert!(y.re.is_finite() && y.im.is_finite());
    }

    #[test]
    fn sin_cos_match_real_axis() {
        let x = Complex::new(0.7f64, 0.0);
        assert_relative_eq!(csin_scalar(x).re, 0.7f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(ccos_scalar(x).re, 0.7f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn sin_squared_plus_cos_squared_is_one() {
        let x = Complex::new(0.3f64, 1.2);
        let s = csin_scalar(x);
        let c = ccos_scalar(x);
        let sum = s * s + c * c;
        assert_relative_eq!(sum.re, 1.0, epsilon = 1e-9);
        assert_relative_eq!(sum.im, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn vector_forms_match_scalar_forms_elementwise() {
        let xs = [
            Complex::new(3.0f64, 4.0),
            Complex::new(1.0, 2.0),
            Complex::new(0.3, 1.2),
        ];
        macro_rules! check {
            ($vec_fn:ident, $scalar_fn:ident) => {{
                let mut out = [Complex::new(0.0f64, 0.0); 3];
                $vec_fn(&xs, &mut out);
                for (v, &x) in out.iter().zip(xs.iter()) {
                    let expected = $scalar_fn(x);
                    assert_relative_eq!(v.re, expected.re, epsilon = 1e-12);
                    assert_relative_eq!(v.im, expected.im, epsilon = 1e-12);
                }
            }};
        }
        check!(csqrt, csqrt_scalar);
        check!(clog, clog_scalar);
        check!(casin, casin_scalar);
        check!(cacos, cacos_scalar);
        check!(csin, csin_scalar);
        check!(ccos, ccos_scalar);
    }

    #[test]
    fn vector_forms_handle_empty_slices() {
        let xs: [Complex<f64>; 0] = [];
        let mut out: [Complex<f64>; 0] = [];
        csqrt(&xs, &mut out);
    }

    #[test]
    #[should_panic]
    fn vector_forms_panic_on_length_mismatch() {
        let xs = [Complex::new(1.0f64, 0.0), Complex::new(-1.0, 0.0)];
        let mut out = [Complex::new(0.0f64, 0.0)];
        csqrt(&xs, &mut out);
    }
}
