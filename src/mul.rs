//! Multiplication entry points.
//!
//! [`mul_into`] and [`square_into`] pick an algorithm by operand shape:
//! equal-length operands longer than [`KARATSUBA_THRESHOLD`] limbs go through
//! the recursive [`karatsuba`] engine, everything else through the
//! [`schoolbook`] routine (or the [`square_wide`][`square::square_wide`]
//! specialist when squaring). The allocating wrappers [`mul`] and
//! [`square`](fn@square) return the product as a fresh `Vec`.

pub mod carry;
pub mod karatsuba;
pub mod schoolbook;
pub mod square;
pub mod umul;

pub use karatsuba::KARATSUBA_THRESHOLD;

use crate::Limb;

/// Multiply `x` by `y` into the first `x.len() + y.len()` limbs of `z`,
/// evaluating up to `parallel` levels of Karatsuba recursion concurrently.
///
/// Limbs of `z` beyond the product may be used as scratch space and hold
/// unspecified values on return. `parallel` only affects scheduling, never
/// the result; pass `0` for a fully sequential call.
pub fn mul_into(x: &[Limb], y: &[Limb], z: &mut [Limb], parallel: u32) {
    if x.len() == y.len() && x.len() > KARATSUBA_THRESHOLD {
        karatsuba::multiply(x, y, z, parallel);
    } else {
        schoolbook::mul_wide(x, y, z);
    }
}

/// Multiply `x` by `y`, returning the `x.len() + y.len()`-limb product.
///
/// A sequential call over-allocates by the engine's scratch requirement so
/// the recursion can run without further allocation, then trims the result.
pub fn mul(x: &[Limb], y: &[Limb], parallel: u32) -> Vec<Limb> {
    let zlen = x.len() + y.len();
    let extra = if parallel == 0 && x.len() == y.len() {
        karatsuba::scratch_len(x.len())
    } else {
        0
    };

    let mut z = vec![Limb::ZERO; zlen + extra];
    mul_into(x, y, &mut z, parallel);
    z.truncate(zlen);
    z
}

/// Square `x` into the first `2 * x.len()` limbs of `z`.
///
/// Small operands use the specialized squaring routine; larger ones go
/// through the Karatsuba engine with both operands aliased to `x`. The same
/// scratch and `parallel` rules as [`mul_into`] apply.
pub fn square_into(x: &[Limb], z: &mut [Limb], parallel: u32) {
    if x.len() > KARATSUBA_THRESHOLD {
        karatsuba::multiply(x, x, z, parallel);
    } else {
        square::square_wide(x, z);
    }
}

/// Square `x`, returning the `2 * x.len()`-limb product.
pub fn square(x: &[Limb], parallel: u32) -> Vec<Limb> {
    let zlen = 2 * x.len();
    let extra = if parallel == 0 {
        karatsuba::scratch_len(x.len())
    } else {
        0
    };

    let mut z = vec![Limb::ZERO; zlen + extra];
    square_into(x, &mut z, parallel);
    z.truncate(zlen);
    z
}
