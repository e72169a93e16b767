//! Hann window: `0.5*(1 - cos(2*pi*n/M))`, the generalized Hamming window
//! with `alpha = 0.5`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralHamming, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hann {
    pub m: usize,
    pub sym: bool,
}

impl Hann {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for Hann
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        GeneralHamming::new(self.m, W::from(0.5).unwrap(), self.sym).get_window()
    }
}
