//! Nuttall window: the 4-term "minimum 4-term Blackman-Harris" variant with
//! continuous first derivative at the endpoints.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use num_traits::real::Real;

use super::{GeneralCosine, GetWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nuttall {
    pub m: usize,
    pub sym: bool,
}

impl Nuttall {
    pub fn new(m: usize, sym: bool) -> Self {
        Self { m, sym }
    }
}

#[cfg(feature = "alloc")]
impl<W> GetWindow<W> for Nuttall
where
    W: Real,
{
    fn get_window(&self) -> Vec<W> {
        let a = [
            W::from(0.3635819).unwrap(),
            W::from(0.4891775).unwrap(),
            W::from(0.1365995).unwrap(),
            W::from(0.0106411).unwrap(),
        ];
        GeneralCosine::new(self.m, &a, self.sym).get_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_near_zero() {
        let w: Vec<f64> = Nuttall::new(9, true).get_window();
        assert_relative_eq!(w[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-6);
    }
}
