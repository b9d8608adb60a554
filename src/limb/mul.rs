//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::{Mul, MulAssign};

impl Limb {
    /// Computes `self + (b * c) + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn mac(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Compute "wide" multiplication, with a product twice the size of the input.
    ///
    /// Returns a tuple of `(lo, hi)` limbs.
    #[inline(always)]
    #[must_use]
    pub const fn mul_wide(&self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Computes `self * rhs`, returning `None` if the product overflows a limb.
    #[inline]
    #[must_use]
    pub const fn checked_mul(self, rhs: Limb) -> Option<Limb> {
        let (lo, hi) = self.mul_wide(rhs);
        if hi.is_zero() { Some(lo) } else { None }
    }

    /// Perform saturating multiplication.
    #[inline]
    #[must_use]
    pub const fn saturating_mul(&self, rhs: Self) -> Self {
        Limb(self.0.saturating_mul(rhs.0))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }
}

impl Mul<Limb> for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: Limb) -> Self {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl Mul<&Limb> for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: &Limb) -> Self {
        self * *rhs
    }
}

impl MulAssign for Limb {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl num_traits::WrappingMul for Limb {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        self.wrapping_mul(*v)
    }
}
