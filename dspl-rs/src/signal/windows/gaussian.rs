//! Gaussian window: `w[n] = exp(-0.5*((n-M_c)/sigma)^2)`, the `p = 1` case
//! of [`super::GeneralGaussian`] exposed under its own type so the window
//! type tag matches spec's table directly.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralGaussian, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian<F> {
    pub m: usize,
    pub sigma: F,
    pub sym: bool,
}

impl<F> Gaussian<F> {
    pub fn new(m: usize, sigma: F, sym: bool) -> Self {
        Self { m, sigma, sym }
    }
}

#[cfg(feature = "alloc")]
impl<F, W> GetWindow<W> for Gaussian<F>
where
    F: Real,
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        GeneralGaussian::new(self.m, F::one(), self.sigma, self.sym).get_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak_is_one_at_center() {
        let w: Vec<f64> = Gaussian::new(9, 2.0, true).get_window();
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-9);
    }
}
