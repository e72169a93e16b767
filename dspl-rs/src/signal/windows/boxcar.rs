//! Rectangular (boxcar) window: every sample is `1`, equivalent to applying
//! no window at all.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};
use num_traits::real::Real;

use super::GetWindow;

/// Rectangular window of length `m`. `sym` is accepted for constructor
/// parity with every other window here; a constant window is unaffected by
/// the symmetric/periodic distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boxcar {
    pub m: usize,
    pub sym: bool,
}

impl Boxcar {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W: Real> GetWindow<W> for Boxcar {
    fn get_window(&self) -> Vec<W> {
        vec![W::one(); self.m]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ones() {
        let w: Vec<f64> = Boxcar::new(5, true).get_window();
        assert_eq!(w, vec![1.0; 5]);
    }
}
