//! Lanczos window: `w[n] = sinc(2*n/(M-1) - 1)`, the central lobe of a
//! normalized sinc.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lanczos {
    pub m: usize,
    pub sym: bool,
}

impl Lanczos {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

fn normalized_sinc<W: Real>(x: W) -> W {
    if x == W::zero() {
        return W::one();
    }
    let pi = W::from(core::f64::consts::PI).unwrap();
    (pi * x).sin() / (pi * x)
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for Lanczos
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let denom = W::from(m - 1).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            let x = W::from(2).unwrap() * W::from(n).unwrap() / denom - W::one();
            w.push(normalized_sinc(x));
        }
        truncate(w, needs_trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak_is_one_at_center() {
        let w: Vec<f64> = Lanczos::new(9, true).get_window();
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-9);
    }
}
