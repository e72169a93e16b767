//! Blackman-Nuttall window: a 4-term generalized-cosine window, a variant
//! of Nuttall's with slightly different sidelobe/derivative tradeoffs.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralCosine, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackmanNuttall {
    pub m: usize,
    pub sym: bool,
}

impl BlackmanNuttall {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for BlackmanNuttall
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        let a = [
            W::from(0.355768).unwrap(),
            W::from(0.487396).unwrap(),
            W::from(0.144232).unwrap(),
            W::from(0.012604).unwrap(),
        ];
        GeneralCosine::new(self.m, &a, self.sym).get_window()
    }
}
