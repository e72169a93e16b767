//! Cosine window: `w[n] = sin(pi*n/(M-1))`, a single half-cosine lobe.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cosine {
    pub m: usize,
    pub sym: bool,
}

impl Cosine {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for Cosine
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let pi = W::from(core::f64::consts::PI).unwrap();
        let denom = W::from(m - 1).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            w.push((pi * W::from(n).unwrap() / denom).sin());
        }
        truncate(w, needs_trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_zero_peak_is_one() {
        let w: Vec<f64> = Cosine::new(9, true).get_window();
        assert_relative_eq!(w[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-9);
    }
}
