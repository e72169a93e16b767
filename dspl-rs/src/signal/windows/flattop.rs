//! Flat-top window: 5-term generalized-cosine window with a very flat
//! passband at the expense of a wide main lobe, used for amplitude-accurate
//! spectral measurement.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralCosine, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatTop {
    pub m: usize,
    pub sym: bool,
}

impl FlatTop {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for FlatTop
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        let a = [
            W::from(0.21557895).unwrap(),
            W::from(0.41663158).unwrap(),
            W::from(0.277263158).unwrap(),
            W::from(0.083578947).unwrap(),
            W::from(0.006947368).unwrap(),
        ];
        GeneralCosine::new(self.m, &a, self.sym).get_window()
    }
}
