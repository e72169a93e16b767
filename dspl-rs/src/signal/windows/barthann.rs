//! Bartlett-Hann window: a blend of the triangular (Bartlett) and Hann
//! shapes, `w[n] = 0.62 - 0.48*|n/M - 0.5| + 0.38*cos(2*pi*(n/M - 0.5))`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BartHann {
    pub m: usize,
    pub sym: bool,
}

impl BartHann {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for BartHann
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let denom = W::from(m - 1).unwrap();
        let two_pi = W::from(core::f64::consts::TAU).unwrap();
        let half = W::from(0.5).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            let frac = W::from(n).unwrap() / denom - half;
            w.push(
                W::from(0.62).unwrap() - W::from(0.48).unwrap() * frac.abs()
                    + W::from(0.38).unwrap() * (two_pi * frac).cos(),
            );
        }
        truncate(w, needs_trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn symmetric_and_peaked() {
        let w: Vec<f64> = BartHann::new(9, true).get_window();
        assert_relative_eq!(w[0], w[8], epsilon = 1e-9);
        assert!(w[4] > w[0]);
    }
}
