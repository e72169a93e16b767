//! Generalized Gaussian window: `w[n] = exp(-0.5*|(n-M_c)/sigma|^(2p))`
//! where `M_c = (M-1)/2`. `p = 1` recovers the ordinary Gaussian window.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralGaussian<F> {
    pub m: usize,
    pub p: F,
    pub sigma: F,
    pub sym: bool,
}

impl<F> GeneralGaussian<F> {
    pub fn new(m: usize, p: F, sigma: F, sym: bool) -> Self {
        Self { m, p, sigma, sym }
    }
}

#[cfg(feature = "alloc")]
impl<F, W> GetWindow<W> for GeneralGaussian<F>
where
    F: Real,
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let p = W::from(self.p).unwrap();
        let sigma = W::from(self.sigma).unwrap();
        let center = W::from(m - 1).unwrap() / W::from(2).unwrap();
        let two = W::from(2).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            let x = (W::from(n).unwrap() - center) / sigma;
            let base = x.abs();
            w.push((-(base.powf(two * p)) / two).exp());
        }
        truncate(w, needs_trunc)
    }
}
