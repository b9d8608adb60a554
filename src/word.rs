//! `Word` is the fixed-width integer type underlying [`Limb`][`crate::Limb`].
//!
//! The engine's radix is fixed at 2^32, so `Word` is always `u32` regardless
//! of the target's pointer width.

/// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
pub type Word = u32;

/// Wide integer type: double the width of [`Word`]. Carry accumulators in the
/// multiplication loops are of this type.
pub type WideWord = u64;

/// Signed wide integer type, used by the Karatsuba combination sweep where a
/// per-limb balance may be transiently negative.
pub(crate) type SignedWideWord = i64;
