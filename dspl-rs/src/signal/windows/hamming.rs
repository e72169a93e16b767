//! Hamming window: `0.54 - 0.46*cos(2*pi*n/M)`, the generalized Hamming
//! window with `alpha = 0.54`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralHamming, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hamming {
    pub m: usize,
    pub sym: bool,
}

impl Hamming {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for Hamming
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        GeneralHamming::new(self.m, W::from(0.54).unwrap(), self.sym).get_window()
    }
}
