//! Schoolbook multiplication a.k.a. long multiplication, i.e. the traditional
//! method taught in schools.
//!
//! The most efficient method for small numbers.

use crate::Limb;

/// Schoolbook multiplication: computes the full `x.len() + y.len()`-limb
/// product of `x` and `y` into the head of `z` in O(xlen·ylen) limb
/// multiplications.
///
/// The first outer iteration writes rather than accumulates, so `z` does not
/// need to be zeroed beforehand. Limbs of `z` beyond the product are left
/// untouched.
pub fn mul_wide(x: &[Limb], y: &[Limb], z: &mut [Limb]) {
    assert!(
        !x.is_empty() && !y.is_empty(),
        "schoolbook operands must be non-empty"
    );
    assert!(
        z.len() >= x.len() + y.len(),
        "schoolbook output buffer too short"
    );

    let x0 = x[0];
    let mut carry = Limb::ZERO;
    for j in 0..y.len() {
        let (w, c) = Limb::ZERO.mac(x0, y[j], carry);
        z[j] = w;
        carry = c;
    }
    z[y.len()] = carry;

    for i in 1..x.len() {
        let xi = x[i];
        let mut carry = Limb::ZERO;
        for j in 0..y.len() {
            let k = i + j;
            let (w, c) = z[k].mac(xi, y[j], carry);
            z[k] = w;
            carry = c;
        }
        z[i + y.len()] = carry;
    }
}

/// In-place flavor of [`mul_wide`] that overwrites the operand held in `buf`
/// with the product, saving a separate output allocation.
///
/// `buf` holds `y` in its first `ylen` limbs and must be at least
/// `x.len() + 2*ylen` limbs long: `y` is first copied to the tail of `buf`
/// (beyond the product area) and the product is then written over the head.
/// On return `buf[..x.len() + ylen]` holds `x*y`; the tail contents are
/// unspecified.
pub fn mul_wide_in_place(x: &[Limb], buf: &mut [Limb], ylen: usize) {
    assert!(ylen >= 1, "schoolbook operands must be non-empty");
    let zlen = x.len() + ylen;
    assert!(
        buf.len() >= zlen + ylen,
        "schoolbook in-place buffer too short"
    );

    buf.copy_within(..ylen, zlen);
    let (z, y) = buf.split_at_mut(zlen);
    mul_wide(x, &y[..ylen], z);
}
