//! Generalized cosine window: a weighted sum of harmonically related cosine
//! terms, `w[n] = sum_k a_k * cos(k*pi*n' )` over a `[-pi, pi]`-spanning
//! grid. Blackman, Hamming, Hann, Nuttall and several others are all special
//! cases of this with a fixed coefficient vector.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{extend, len_guard, truncate, GetWindow};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralCosine<F> {
    pub m: usize,
    pub a: Vec<F>,
    pub sym: bool,
}

impl<F> GeneralCosine<F> {
    pub fn new(m: usize, a: &[F], sym: bool) -> Self
    where
        F: Clone,
    {
        Self { m, a: a.to_vec(), sym }
    }
}

#[cfg(feature = "alloc")]
impl<F, W> GetWindow<W> for GeneralCosine<F>
where
    F: Real,
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        if len_guard(self.m) {
            return alloc::vec![W::one(); self.m];
        }
        let (m, needs_trunc) = extend(self.m, self.sym);
        let pi = W::from(core::f64::consts::PI).unwrap();
        let denom = W::from(m - 1).unwrap();
        let mut w = Vec::with_capacity(m);
        for n in 0..m {
            let fac = -pi + W::from(2).unwrap() * pi * W::from(n).unwrap() / denom;
            let mut acc = W::zero();
            for (k, &ak) in self.a.iter().enumerate() {
                let ak_w = W::from(ak).unwrap();
                acc = acc + ak_w * (W::from(k).unwrap() * fac).cos();
            }
            w.push(acc);
        }
        truncate(w, needs_trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn blackman_coefficients_match_known_endpoints() {
        let w: Vec<f64> = GeneralCosine::new(9, &[0.42, 0.50, 0.08], true).get_window();
        assert_relative_eq!(w[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-6);
    }
}
