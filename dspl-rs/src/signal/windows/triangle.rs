//! Triangular window.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub m: usize,
    pub sym: bool,
}

impl Triangle {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W: Real> GetWindow<W> for Triangle {
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let half = (m + 1) / 2;
        let mut w: Vec<W> = Vec::with_capacity(m);
        if m % 2 == 0 {
            for n in 1..=half {
                w.push(W::from(2 * n - 1).unwrap() / W::from(m).unwrap());
            }
            for n in (1..=half).rev() {
                w.push(W::from(2 * n - 1).unwrap() / W::from(m).unwrap());
            }
        } else {
            for n in 1..=half {
                w.push(W::from(2 * n).unwrap() / W::from(m + 1).unwrap());
            }
            for n in (1..half).rev() {
                w.push(W::from(2 * n).unwrap() / W::from(m + 1).unwrap());
            }
        }
        truncate(w, needs_trunc)
    }
}
