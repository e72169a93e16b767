//! Generalized Hamming window: `w[n] = alpha - (1-alpha)*cos(2*pi*n/(M-1))`.
//! `alpha = 0.54` recovers the classic Hamming window; `alpha = 0.5`
//! recovers Hann.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralHamming<F> {
    pub m: usize,
    pub alpha: F,
    pub sym: bool,
}

impl<F> GeneralHamming<F> {
    pub fn new(m: usize, alpha: F, sym: bool) -> Self {
        Self { m, alpha, sym }
    }
}

#[cfg(feature = "alloc")]
impl<F, W> GetWindow<W> for GeneralHamming<F>
where
    F: Real,
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let alpha = W::from(self.alpha).unwrap();
        let two_pi = W::from(core::f64::consts::TAU).unwrap();
        let denom = W::from(m - 1).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            let angle = two_pi * W::from(n).unwrap() / denom;
            w.push(alpha - (W::one() - alpha) * angle.cos());
        }
        truncate(w, needs_trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn alpha_half_is_hann_shape() {
        let w: Vec<f64> = GeneralHamming::new(5, 0.5, true).get_window();
        assert_relative_eq!(w[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(w[2], 1.0, epsilon = 1e-9);
    }
}
