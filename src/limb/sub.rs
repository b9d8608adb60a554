//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};
use core::ops::{Sub, SubAssign};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow (`Limb::MAX` if borrowed, `Limb::ZERO` otherwise).
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Computes `self - rhs`, returning `None` on underflow.
    #[inline]
    #[must_use]
    pub const fn checked_sub(self, rhs: Limb) -> Option<Limb> {
        let (res, borrow) = self.borrowing_sub(rhs, Limb::ZERO);
        if borrow.is_zero() { Some(res) } else { None }
    }

    /// Perform saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(&self, rhs: Self) -> Self {
        Limb(self.0.saturating_sub(rhs.0))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl num_traits::WrappingSub for Limb {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        self.wrapping_sub(*v)
    }
}

#[cfg(test)]
mod tests {
    use super::Limb;

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = Limb::ONE.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::MAX);
    }

    #[test]
    fn checked_sub_underflow() {
        assert_eq!(Limb::ZERO.checked_sub(Limb::ONE), None);
        assert_eq!(Limb::ONE.checked_sub(Limb::ONE), Some(Limb::ZERO));
    }
}
