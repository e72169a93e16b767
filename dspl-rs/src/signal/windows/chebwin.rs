//! Dolph-Chebyshev window: equiripple sidelobes at a specified attenuation
//! `at` (dB), built from the inverse-DFT of the Chebyshev-polynomial
//! spectrum sampled at `M` equally spaced points.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use nalgebra::{Complex, RealField};
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chebwin<F> {
    pub m: usize,
    pub at: F,
    pub sym: bool,
}

impl<F> Chebwin<F> {
    pub fn new(m: usize, at: F, sym: bool) -> Self {
        Self { m, at, sym }
    }
}

#[cfg(feature = "alloc")]
impl<F, W> GetWindow<W> for Chebwin<F>
where
    F: Real,
    W: Real + RealField,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let w = chebwin_spectrum::<W>(m, W::from(self.at).unwrap());
        truncate(w, needs_trunc)
    }
}

/// Builds the length-`m` Dolph-Chebyshev window by evaluating the
/// Chebyshev-polynomial spectrum at `m` equally-spaced points and taking
/// its (unnormalized forward) DFT, per the classical construction.
#[cfg(feature = "alloc")]
fn chebwin_spectrum<W: Real + RealField>(m: usize, at: W) -> Vec<W> {
    let order = m - 1;
    let orderf = W::from(order).unwrap();
    let ten = W::from(10).unwrap();
    let beta = ((ten.powf(at.abs() / W::from(20).unwrap())).acosh() / orderf).cosh();

    let pi = W::from(core::f64::consts::PI).unwrap();
    let mf = W::from(m).unwrap();
    let mut p: Vec<W> = Vec::with_capacity(m);
    for k in 0..m {
        let x = beta * (pi * W::from(k).unwrap() / mf).cos();
        let val = if x > W::one() {
            (orderf * x.acosh()).cosh()
        } else if x < -W::one() {
            let sign = if order % 2 == 0 { W::one() } else { -W::one() };
            sign * (orderf * (-x).acosh()).cosh()
        } else {
            (orderf * x.acos()).cos()
        };
        p.push(val);
    }

    let spectrum: Vec<Complex<W>> = if m % 2 == 1 {
        p.iter().map(|&v| Complex::new(v, W::zero())).collect()
    } else {
        p.iter()
            .enumerate()
            .map(|(k, &v)| {
                let angle = pi / mf * W::from(k).unwrap();
                Complex::new(v, W::zero()) * Complex::new(angle.cos(), angle.sin())
            })
            .collect()
    };

    let transformed = crate::signal::spectral::dft(&spectrum);

    let mut w = if m % 2 == 1 {
        let n = (m + 1) / 2;
        let head: Vec<W> = transformed[..n].iter().map(|c| c.re).collect();
        let mut out = Vec::with_capacity(m);
        for &v in head[1..].iter().rev() {
            out.push(v);
        }
        out.extend(head);
        out
    } else {
        let n = m / 2 + 1;
        let head: Vec<W> = transformed[..n].iter().map(|c| c.re).collect();
        let mut out = Vec::with_capacity(m);
        for &v in head[1..].iter().rev() {
            out.push(v);
        }
        out.extend(head[1..].iter().copied());
        out
    };

    let max = w
        .iter()
        .cloned()
        .fold(w[0], |acc, v| if v > acc { v } else { acc });
    for v in w.iter_mut() {
        *v = *v / max;
    }
    w
}
