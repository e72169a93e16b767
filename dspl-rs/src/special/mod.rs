//! Special functions: combinatorics, the modified Bessel function, complex
//! transcendentals, and the elliptic (Jacobi) functions needed by the Cauer
//! filter prototype.

mod combinatorics;
mod complex;
mod ellip;
mod i0;

pub use combinatorics::*;
pub use complex::*;
pub use ellip::*;
pub use i0::*;
