//! Pure Rust arbitrary-precision integer multiplication engine.
//!
//! # About
//! This crate implements the inner multiplication loop of a big integer
//! library: given two non-negative magnitudes stored as little-endian buffers
//! of 32-bit [`Limb`]s, it computes their product (or one magnitude's square)
//! into a caller-supplied output buffer. It is deliberately scoped to
//! multiplication only: sign handling, normalization, string conversion and
//! the rest of a big-integer type belong to the caller.
//!
//! The engine is hybrid: operands up to [`KARATSUBA_THRESHOLD`] limbs are
//! multiplied with the schoolbook algorithm, longer equal-length operands
//! with recursive Karatsuba. The three Karatsuba sub-products can optionally
//! be evaluated concurrently down to a caller-chosen recursion depth.
//!
//! ```
//! use bigint_mul::{Limb, mul};
//!
//! // (2^32 - 1) * 1, over limb buffers
//! let x = [Limb(0x0000_0001), Limb(0x0000_0000)];
//! let y = [Limb(0xFFFF_FFFF)];
//! assert_eq!(mul(&x, &y, 0), [Limb(0xFFFF_FFFF), Limb::ZERO, Limb::ZERO]);
//! ```
//!
//! # Buffer contracts
//! Callers own every buffer. Output capacity requirements are
//! `x.len() + y.len()` limbs for a product and `2 * x.len()` for a square;
//! sequential callers may append [`mul::karatsuba::scratch_len`] further
//! limbs to let the engine run allocation-free. Contract violations are
//! surfaced as panics, never as wrong arithmetic.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod limb;
mod primitives;
mod word;

pub mod mul;

pub use crate::{
    limb::Limb,
    mul::{KARATSUBA_THRESHOLD, mul, mul_into, square, square_into},
    word::{WideWord, Word},
};

pub(crate) use crate::word::SignedWideWord;
