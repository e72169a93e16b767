//! Kaiser window: `w[n] = I0(beta*sqrt(1-((n-M_c)/M_c)^2)) / I0(beta)`,
//! the maximal-energy-concentration window for a given main-lobe width.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use crate::special::Bessel;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kaiser<F> {
    pub m: usize,
    pub beta: F,
    pub sym: bool,
}

impl<F> Kaiser<F> {
    pub fn new(m: usize, beta: F, sym: bool) -> Self {
        Self { m, beta, sym }
    }
}

#[cfg(feature = "alloc")]
impl<F, W> GetWindow<W> for Kaiser<F>
where
    F: Real,
    W: Real + Bessel,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let beta = W::from(self.beta).unwrap();
        let i0_beta = beta.i0();
        let center = W::from(m - 1).unwrap() / W::from(2).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            let ratio = (W::from(n).unwrap() - center) / center;
            let arg = beta * (W::one() - ratio * ratio).max(W::zero()).sqrt();
            w.push(arg.i0() / i0_beta);
        }
        truncate(w, needs_trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_match_known_values() {
        let w: Vec<f64> = Kaiser::new(5, 8.6, true).get_window();
        assert_relative_eq!(w[2], 1.0, epsilon = 1e-9);
        assert!(w[0] < 0.1);
    }
}
