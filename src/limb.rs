//! Big integers are represented as buffers of smaller 32-bit integers called
//! "limbs", stored least significant first.

mod add;
mod mul;
mod sub;

use crate::{WideWord, Word};
use core::fmt;

/// A single 32-bit digit of a magnitude.
///
/// The [`Limb`] type wraps the fixed [`Word`] representation; all bits of the
/// inner word are significant.
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = 32;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = 4;

    /// Highest bit in a [`Limb`].
    pub(crate) const HI_BIT: u32 = Limb::BITS - 1;

    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline(always)]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widen to a [`WideWord`].
    #[inline(always)]
    pub(crate) const fn widen(self) -> WideWord {
        self.0 as WideWord
    }
}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb(n.into())
    }
}

impl From<u16> for Limb {
    #[inline]
    fn from(n: u16) -> Limb {
        Limb(n.into())
    }
}

impl From<u32> for Limb {
    #[inline]
    fn from(n: u32) -> Limb {
        Limb(n)
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Word {
        limb.0
    }
}

impl num_traits::Zero for Limb {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Limb::is_zero(self)
    }
}

impl num_traits::One for Limb {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x0000002A)");
    }

    #[test]
    fn display_hex() {
        assert_eq!(format!("{:#x}", Limb(0xDEAD_BEEF)), "0xdeadbeef");
        assert_eq!(format!("{}", Limb(0xDEAD_BEEF)), "DEADBEEF");
    }
}
