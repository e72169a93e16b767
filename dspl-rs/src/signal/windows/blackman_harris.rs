//! Blackman-Harris window: the 4-term generalized-cosine window tuned for
//! minimal sidelobe level rather than Nuttall's derivative continuity.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralCosine, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackmanHarris {
    pub m: usize,
    pub sym: bool,
}

impl BlackmanHarris {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for BlackmanHarris
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        let a = [
            W::from(0.35875).unwrap(),
            W::from(0.48829).unwrap(),
            W::from(0.14128).unwrap(),
            W::from(0.01168).unwrap(),
        ];
        GeneralCosine::new(self.m, &a, self.sym).get_window()
    }
}
