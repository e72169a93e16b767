//! Blackman window: the 3-term generalized-cosine window with the classic
//! `[0.42, 0.5, 0.08]` coefficients.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralCosine, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blackman {
    pub m: usize,
    pub sym: bool,
}

impl Blackman {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for Blackman
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        let a = [
            W::from(0.42).unwrap(),
            W::from(0.5).unwrap(),
            W::from(0.08).unwrap(),
        ];
        GeneralCosine::new(self.m, &a, self.sym).get_window()
    }
}
