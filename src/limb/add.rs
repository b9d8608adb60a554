//! Limb addition

use crate::{
    Limb,
    primitives::{carrying_add, overflowing_add},
};
use core::ops::{Add, AddAssign};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self + rhs`, returning the result along with the carry.
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_add(self, rhs: Limb) -> (Limb, Limb) {
        let (res, carry) = overflowing_add(self.0, rhs.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self + rhs`, returning `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: Limb) -> Option<Limb> {
        let (res, carry) = self.overflowing_add(rhs);
        if carry.is_zero() { Some(res) } else { None }
    }

    /// Perform saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(&self, rhs: Self) -> Self {
        Limb(self.0.saturating_add(rhs.0))
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_add(rhs.0))
    }
}

impl Add for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs)
            .expect("attempted to add with overflow")
    }
}

impl Add<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl AddAssign for Limb {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl num_traits::WrappingAdd for Limb {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        self.wrapping_add(*v)
    }
}
