//! GF(2^255 - MQ) with 64-bit limbs.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::convert::TryFrom;

use super::{addcarry_u64, subborrow_u64, umull};

/// A field element; the four limbs encode the value in base 2^64,
/// low-to-high. The representation is partially reduced: any 256-bit
/// value is accepted, and interpreted modulo q = 2^255 - MQ.
#[derive(Clone, Copy, Debug)]
pub struct GF255<const MQ: u64>([u64; 4]);

impl<const MQ: u64> GF255<MQ> {

    // Parameter restrictions:
    //   MQ is odd
    //   MQ <= 32765  (the exponentiation tails assume MQ + 2 < 2^15)
    //   MQ != 7 mod 8  (square roots modulo q = 1 mod 8 would need an
    //   out-of-band non-residue, which the type parameters do not carry)
    //   q = 2^255 - MQ is prime (not checkable at compile-time)
    #[allow(dead_code)]
    const COMPILE_TIME_CHECKS: () = Self::compile_time_checks();
    const fn compile_time_checks() {
        static_assert!((MQ & 1) != 0);
        static_assert!(MQ <= 32765);
        static_assert!((MQ & 7) != 7);
    }

    // Modulus q in base 2^64 (low-to-high order).
    pub const MODULUS: [u64; 4] = [
        MQ.wrapping_neg(),
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x7FFFFFFFFFFFFFFF,
    ];

    pub const ZERO: GF255<MQ> = GF255::<MQ>([ 0, 0, 0, 0 ]);
    pub const ONE: GF255<MQ> = GF255::<MQ>([ 1, 0, 0, 0 ]);
    pub const MINUS_ONE: GF255<MQ> = GF255::<MQ>([
        (MQ + 1).wrapping_neg(),
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x7FFFFFFFFFFFFFFF,
    ]);

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in low-to-high order).
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        Self([ x0, x1, x2, x3 ])
    }

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in high-to-low order).
    pub const fn w64be(x3: u64, x2: u64, x1: u64, x0: u64) -> Self {
        Self([ x0, x1, x2, x3 ])
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        // Raw addition; then, on carry, subtract 2*q (i.e. add 2*MQ).
        let (d0, cc) = addcarry_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = addcarry_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = addcarry_u64(self.0[2], rhs.0[2], cc);
        let (d3, cc) = addcarry_u64(self.0[3], rhs.0[3], cc);

        let (d0, cc) = addcarry_u64(d0,
            (cc as u64).wrapping_neg() & (2 * MQ), 0);
        let (d1, cc) = addcarry_u64(d1, 0, cc);
        let (d2, cc) = addcarry_u64(d2, 0, cc);
        let (d3, cc) = addcarry_u64(d3, 0, cc);

        // A carry may appear here only if the original sum was at least
        // 2^257 - 2*MQ, in which case the low limb is now lower than
        // 2*MQ, and adding 2*MQ to it cannot overflow again.
        let d0 = d0.wrapping_add((cc as u64).wrapping_neg() & (2 * MQ));

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        // Raw subtraction; then, on borrow, add 2*q (i.e. subtract 2*MQ).
        let (d0, cc) = subborrow_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = subborrow_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = subborrow_u64(self.0[2], rhs.0[2], cc);
        let (d3, cc) = subborrow_u64(self.0[3], rhs.0[3], cc);

        let (d0, cc) = subborrow_u64(d0,
            (cc as u64).wrapping_neg() & (2 * MQ), 0);
        let (d1, cc) = subborrow_u64(d1, 0, cc);
        let (d2, cc) = subborrow_u64(d2, 0, cc);
        let (d3, cc) = subborrow_u64(d3, 0, cc);

        // A new borrow implies that the low limb is at least
        // 2^64 - 2*MQ, so the extra subtraction cannot underflow.
        let d0 = d0.wrapping_sub((cc as u64).wrapping_neg() & (2 * MQ));

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    // Negate this value (in place).
    #[inline]
    pub fn set_neg(&mut self) {
        // Compute 2*q - self over 256 bits; add back q if negative.
        let (d0, cc) = subborrow_u64((2 * MQ).wrapping_neg(), self.0[0], 0);
        let (d1, cc) = subborrow_u64(1u64.wrapping_neg(), self.0[1], cc);
        let (d2, cc) = subborrow_u64(1u64.wrapping_neg(), self.0[2], cc);
        let (d3, cc) = subborrow_u64(1u64.wrapping_neg(), self.0[3], cc);

        let e = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, e & MQ.wrapping_neg(), 0);
        let (d1, cc) = addcarry_u64(d1, e, cc);
        let (d2, cc) = addcarry_u64(d2, e, cc);
        let (d3, _) = addcarry_u64(d3, e >> 1, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0x00000000, then the value of self is unchanged.
    // ctl MUST be equal to 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
        self.0[2] ^= cw & (self.0[2] ^ a.0[2]);
        self.0[3] ^= cw & (self.0[3] ^ a.0[3]);
    }

    // Return a value equal to a0 (if ctl == 0x00000000) or a1 (if
    // ctl == 0xFFFFFFFF). ctl MUST be equal to 0x00000000 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 0xFFFFFFFF, or kept unchanged if ctl == 0x00000000.
    // ctl MUST be equal to 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        let t = cw & (a.0[0] ^ b.0[0]); a.0[0] ^= t; b.0[0] ^= t;
        let t = cw & (a.0[1] ^ b.0[1]); a.0[1] ^= t; b.0[1] ^= t;
        let t = cw & (a.0[2] ^ b.0[2]); a.0[2] ^= t; b.0[2] ^= t;
        let t = cw & (a.0[3] ^ b.0[3]); a.0[3] ^= t; b.0[3] ^= t;
    }

    // Conditionally negate this value: the value is replaced with its
    // negation if ctl == 0xFFFFFFFF, or kept unchanged if
    // ctl == 0x00000000. ctl MUST be equal to 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn set_condneg(&mut self, ctl: u32) {
        let y = -(&*self);
        self.set_cond(&y, ctl);
    }

    #[inline]
    fn set_half(&mut self) {
        // Right-shift by 1 bit; if the dropped bit was 1, add back
        // (q+1)/2. The shifted value is below 2^255, so this cannot
        // overflow.
        let d0 = (self.0[0] >> 1) | (self.0[1] << 63);
        let d1 = (self.0[1] >> 1) | (self.0[2] << 63);
        let d2 = (self.0[2] >> 1) | (self.0[3] << 63);
        let d3 = self.0[3] >> 1;
        let tt = (self.0[0] & 1).wrapping_neg();

        let (d0, cc) = addcarry_u64(d0, tt & ((MQ - 1) >> 1).wrapping_neg(), 0);
        let (d1, cc) = addcarry_u64(d1, tt, cc);
        let (d2, cc) = addcarry_u64(d2, tt, cc);
        let (d3, _) = addcarry_u64(d3, tt >> 2, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    // Multiplication by a small power of 2: extract the bits shifted
    // out of the 255-bit range (one extra bit is taken, so that the
    // fold-back cannot overflow), left-shift, and add the extracted
    // bits multiplied by MQ.

    // Multiply this value by 2.
    #[inline]
    pub fn set_mul2(&mut self) {
        let tt = self.0[3] >> 62;

        let d0 = self.0[0] << 1;
        let d1 = (self.0[0] >> 63) | (self.0[1] << 1);
        let d2 = (self.0[1] >> 63) | (self.0[2] << 1);
        let d3 = (self.0[2] >> 63) | ((self.0[3] << 1) & 0x7FFFFFFFFFFFFFFF);

        let (d0, cc) = addcarry_u64(d0, tt * MQ, 0);
        let (d1, cc) = addcarry_u64(d1, 0, cc);
        let (d2, cc) = addcarry_u64(d2, 0, cc);
        let (d3, _)  = addcarry_u64(d3, 0, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        let mut r = self;
        r.set_mul2();
        r
    }

    // Multiply this value by 4.
    #[inline]
    pub fn set_mul4(&mut self) {
        let tt = self.0[3] >> 61;

        let d0 = self.0[0] << 2;
        let d1 = (self.0[0] >> 62) | (self.0[1] << 2);
        let d2 = (self.0[1] >> 62) | (self.0[2] << 2);
        let d3 = (self.0[2] >> 62) | ((self.0[3] << 2) & 0x7FFFFFFFFFFFFFFF);

        let (d0, cc) = addcarry_u64(d0, tt * MQ, 0);
        let (d1, cc) = addcarry_u64(d1, 0, cc);
        let (d2, cc) = addcarry_u64(d2, 0, cc);
        let (d3, _)  = addcarry_u64(d3, 0, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    #[inline(always)]
    pub fn mul4(self) -> Self {
        let mut r = self;
        r.set_mul4();
        r
    }

    // Multiply this value by 8.
    #[inline]
    pub fn set_mul8(&mut self) {
        let tt = self.0[3] >> 60;

        let d0 = self.0[0] << 3;
        let d1 = (self.0[0] >> 61) | (self.0[1] << 3);
        let d2 = (self.0[1] >> 61) | (self.0[2] << 3);
        let d3 = (self.0[2] >> 61) | ((self.0[3] << 3) & 0x7FFFFFFFFFFFFFFF);

        let (d0, cc) = addcarry_u64(d0, tt * MQ, 0);
        let (d1, cc) = addcarry_u64(d1, 0, cc);
        let (d2, cc) = addcarry_u64(d2, 0, cc);
        let (d3, _)  = addcarry_u64(d3, 0, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    #[inline(always)]
    pub fn mul8(self) -> Self {
        let mut r = self;
        r.set_mul8();
        r
    }

    // Multiply this value by 16.
    #[inline]
    pub fn set_mul16(&mut self) {
        let tt = self.0[3] >> 59;

        let d0 = self.0[0] << 4;
        let d1 = (self.0[0] >> 60) | (self.0[1] << 4);
        let d2 = (self.0[1] >> 60) | (self.0[2] << 4);
        let d3 = (self.0[2] >> 60) | ((self.0[3] << 4) & 0x7FFFFFFFFFFFFFFF);

        let (d0, cc) = addcarry_u64(d0, tt * MQ, 0);
        let (d1, cc) = addcarry_u64(d1, 0, cc);
        let (d2, cc) = addcarry_u64(d2, 0, cc);
        let (d3, _)  = addcarry_u64(d3, 0, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    #[inline(always)]
    pub fn mul16(self) -> Self {
        let mut r = self;
        r.set_mul16();
        r
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        let (a0, a1, a2, a3) = (self.0[0], self.0[1], self.0[2], self.0[3]);
        let (b0, b1, b2, b3) = (rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3]);

        // 1. Schoolbook product -> 512 bits (e0..e7).
        let (e0, e1) = umull(a0, b0);
        let (e2, e3) = umull(a1, b1);
        let (e4, e5) = umull(a2, b2);
        let (e6, e7) = umull(a3, b3);

        let (lo, hi) = umull(a0, b1);
        let (e1, cc) = addcarry_u64(e1, lo, 0);
        let (e2, cc) = addcarry_u64(e2, hi, cc);
        let (lo, hi) = umull(a0, b3);
        let (e3, cc) = addcarry_u64(e3, lo, cc);
        let (e4, cc) = addcarry_u64(e4, hi, cc);
        let (lo, hi) = umull(a2, b3);
        let (e5, cc) = addcarry_u64(e5, lo, cc);
        let (e6, cc) = addcarry_u64(e6, hi, cc);
        let (e7, _)  = addcarry_u64(e7, 0, cc);

        let (lo, hi) = umull(a1, b0);
        let (e1, cc) = addcarry_u64(e1, lo, 0);
        let (e2, cc) = addcarry_u64(e2, hi, cc);
        let (lo, hi) = umull(a3, b0);
        let (e3, cc) = addcarry_u64(e3, lo, cc);
        let (e4, cc) = addcarry_u64(e4, hi, cc);
        let (lo, hi) = umull(a3, b2);
        let (e5, cc) = addcarry_u64(e5, lo, cc);
        let (e6, cc) = addcarry_u64(e6, hi, cc);
        let (e7, _)  = addcarry_u64(e7, 0, cc);

        let (lo, hi) = umull(a0, b2);
        let (e2, cc) = addcarry_u64(e2, lo, 0);
        let (e3, cc) = addcarry_u64(e3, hi, cc);
        let (lo, hi) = umull(a1, b3);
        let (e4, cc) = addcarry_u64(e4, lo, cc);
        let (e5, cc) = addcarry_u64(e5, hi, cc);
        let (e6, cc) = addcarry_u64(e6, 0, cc);
        let (e7, _)  = addcarry_u64(e7, 0, cc);

        let (lo, hi) = umull(a2, b0);
        let (e2, cc) = addcarry_u64(e2, lo, 0);
        let (e3, cc) = addcarry_u64(e3, hi, cc);
        let (lo, hi) = umull(a3, b1);
        let (e4, cc) = addcarry_u64(e4, lo, cc);
        let (e5, cc) = addcarry_u64(e5, hi, cc);
        let (e6, cc) = addcarry_u64(e6, 0, cc);
        let (e7, _)  = addcarry_u64(e7, 0, cc);

        let (lo, hi) = umull(a1, b2);
        let (lo2, hi2) = umull(a2, b1);
        let (lo, cc) = addcarry_u64(lo, lo2, 0);
        let (hi, tt) = addcarry_u64(hi, hi2, cc);
        let (e3, cc) = addcarry_u64(e3, lo, 0);
        let (e4, cc) = addcarry_u64(e4, hi, cc);
        let (e5, cc) = addcarry_u64(e5, tt as u64, cc);
        let (e6, cc) = addcarry_u64(e6, 0, cc);
        let (e7, _)  = addcarry_u64(e7, 0, cc);

        // 2. Reduction in two passes. First pass folds the high half
        // with multiplier 2*MQ (2^256 = 2*MQ mod q); low words of the
        // products are added here, high words are kept in h0..h3.
        let (lo, h0) = umull(e4, 2 * MQ);
        let (e0, cc) = addcarry_u64(e0, lo, 0);
        let (lo, h1) = umull(e5, 2 * MQ);
        let (e1, cc) = addcarry_u64(e1, lo, cc);
        let (lo, h2) = umull(e6, 2 * MQ);
        let (e2, cc) = addcarry_u64(e2, lo, cc);
        let (lo, h3) = umull(e7, 2 * MQ);
        let (e3, cc) = addcarry_u64(e3, lo, cc);
        let (h3, _)  = addcarry_u64(h3, 0, cc);

        // Second pass folds the remaining overflow (h3 and the top bit
        // of e3) with multiplier MQ. The folded value (2*h3 + b)*MQ fits
        // on 64 bits since MQ < 2^31.
        let h3 = (h3 << 1) | (e3 >> 63);
        let e3 = e3 & 0x7FFFFFFFFFFFFFFF;
        let (e0, cc) = addcarry_u64(e0, h3 * MQ, 0);
        let (e1, cc) = addcarry_u64(e1, h0, cc);
        let (e2, cc) = addcarry_u64(e2, h1, cc);
        let (e3, _)  = addcarry_u64(e3, h2, cc);

        self.0[0] = e0;
        self.0[1] = e1;
        self.0[2] = e2;
        self.0[3] = e3;
    }

    // Square this value (in place).
    #[inline(always)]
    pub fn set_square(&mut self) {
        let (a0, a1, a2, a3) = (self.0[0], self.0[1], self.0[2], self.0[3]);

        // 1. Off-diagonal products. The intermediate total is slightly
        // below 2^448, so e1..e6 suffice (no carry into e7).
        let (e1, e2) = umull(a0, a1);
        let (e3, e4) = umull(a0, a3);
        let (e5, e6) = umull(a2, a3);
        let (lo, hi) = umull(a0, a2);
        let (e2, cc) = addcarry_u64(e2, lo, 0);
        let (e3, cc) = addcarry_u64(e3, hi, cc);
        let (lo, hi) = umull(a1, a3);
        let (e4, cc) = addcarry_u64(e4, lo, cc);
        let (e5, cc) = addcarry_u64(e5, hi, cc);
        let (e6, _)  = addcarry_u64(e6, 0, cc);
        let (lo, hi) = umull(a1, a2);
        let (e3, cc) = addcarry_u64(e3, lo, 0);
        let (e4, cc) = addcarry_u64(e4, hi, cc);
        let (e5, cc) = addcarry_u64(e5, 0, cc);
        let (e6, _)  = addcarry_u64(e6, 0, cc);

        // 2. Double the off-diagonal sum, then add the squares.
        let e7 = e6 >> 63;
        let e6 = (e6 << 1) | (e5 >> 63);
        let e5 = (e5 << 1) | (e4 >> 63);
        let e4 = (e4 << 1) | (e3 >> 63);
        let e3 = (e3 << 1) | (e2 >> 63);
        let e2 = (e2 << 1) | (e1 >> 63);
        let e1 = e1 << 1;

        let (e0, hi) = umull(a0, a0);
        let (e1, cc) = addcarry_u64(e1, hi, 0);
        let (lo, hi) = umull(a1, a1);
        let (e2, cc) = addcarry_u64(e2, lo, cc);
        let (e3, cc) = addcarry_u64(e3, hi, cc);
        let (lo, hi) = umull(a2, a2);
        let (e4, cc) = addcarry_u64(e4, lo, cc);
        let (e5, cc) = addcarry_u64(e5, hi, cc);
        let (lo, hi) = umull(a3, a3);
        let (e6, cc) = addcarry_u64(e6, lo, cc);
        let (e7, _)  = addcarry_u64(e7, hi, cc);

        // 3. Reduction; same two passes as in set_mul().
        let (lo, h0) = umull(e4, 2 * MQ);
        let (e0, cc) = addcarry_u64(e0, lo, 0);
        let (lo, h1) = umull(e5, 2 * MQ);
        let (e1, cc) = addcarry_u64(e1, lo, cc);
        let (lo, h2) = umull(e6, 2 * MQ);
        let (e2, cc) = addcarry_u64(e2, lo, cc);
        let (lo, h3) = umull(e7, 2 * MQ);
        let (e3, cc) = addcarry_u64(e3, lo, cc);
        let (h3, _)  = addcarry_u64(h3, 0, cc);

        let h3 = (h3 << 1) | (e3 >> 63);
        let e3 = e3 & 0x7FFFFFFFFFFFFFFF;
        let (e0, cc) = addcarry_u64(e0, h3 * MQ, 0);
        let (e1, cc) = addcarry_u64(e1, h0, cc);
        let (e2, cc) = addcarry_u64(e2, h1, cc);
        let (e3, _)  = addcarry_u64(e3, h2, cc);

        self.0[0] = e0;
        self.0[1] = e1;
        self.0[2] = e2;
        self.0[3] = e3;
    }

    // Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline(always)]
    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    // Bring the internal representation into the 0..q-1 range.
    #[inline]
    fn set_normalized(&mut self) {
        // Fold the top bit; the value is then at most 2^255 + MQ - 1.
        let e = (self.0[3] >> 63).wrapping_neg();
        let (d0, cc) = addcarry_u64(self.0[0], e & MQ, 0);
        let (d1, cc) = addcarry_u64(self.0[1], 0, cc);
        let (d2, cc) = addcarry_u64(self.0[2], 0, cc);
        let (d3, _)  = addcarry_u64(self.0[3] & 0x7FFFFFFFFFFFFFFF, 0, cc);

        // Subtract q; add it back if the result is negative.
        let (d0, cc) = subborrow_u64(d0, MQ.wrapping_neg(), 0);
        let (d1, cc) = subborrow_u64(d1, !0u64, cc);
        let (d2, cc) = subborrow_u64(d2, !0u64, cc);
        let (d3, cc) = subborrow_u64(d3, (!0u64) >> 1, cc);

        let e = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, e & MQ.wrapping_neg(), 0);
        let (d1, cc) = addcarry_u64(d1, e, cc);
        let (d2, cc) = addcarry_u64(d2, e, cc);
        let (d3, _)  = addcarry_u64(d3, e >> 1, cc);

        self.0[0] = d0;
        self.0[1] = d1;
        self.0[2] = d2;
        self.0[3] = d3;
    }

    // Compute self^(2^240-1), along with the window [self, self^2, self^3].
    // The exponents q-2, (q+1)/4 and (q-5)/8 all start with 240 one bits,
    // so inversion and square root extraction both use this output, then
    // finish with the remaining low exponent bits through the window.
    fn prep_pow240(self) -> (Self, [Self; 3]) {
        let z = self;
        let z2 = z.square();
        let z3 = z2 * z;
        let zp4 = z3.xsquare(2) * z3;
        let zp5 = zp4.square() * z;
        let zp15 = (zp5.xsquare(5) * zp5).xsquare(5) * zp5;
        let zp30 = zp15.xsquare(15) * zp15;
        let zp60 = zp30.xsquare(30) * zp30;
        let zp120 = zp60.xsquare(60) * zp60;
        let zp240 = zp120.xsquare(120) * zp120;
        (zp240, [ z, z2, z3 ])
    }

    // Invert this value (in place); the inverse of zero is zero.
    pub fn set_invert(&mut self) {
        // Fermat: 1/a = a^(q-2). The exponent is
        // (2^240 - 1)*2^15 + e, with e = 2^15 - MQ - 2 on 15 bits;
        // since MQ is odd, the lowest exponent bit is always 1.
        let (mut y, win) = self.prep_pow240();
        let e = ((MQ as u32) + 2).wrapping_neg() & 0x7FFF;
        for j in 0..7 {
            y.set_xsquare(2);
            let k = ((e >> (13 - 2 * j)) & 3) as usize;
            if k != 0 {
                y.set_mul(&win[k - 1]);
            }
        }
        y.set_square();
        y.set_mul(&win[0]);
        *self = y;
    }

    // Invert this value; the inverse of zero is zero.
    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    fn set_div(&mut self, y: &Self) {
        self.set_mul(&y.invert());
    }

    // Set this value to its square root. Returned value is 0xFFFFFFFF on
    // success (value was indeed a quadratic residue), 0x00000000 on
    // failure (in which case the value is set to zero). The returned
    // root is the one whose least significant bit is 0 (once normalized
    // in the 0..q-1 range).
    fn set_sqrt(&mut self) -> u32 {
        // Exponentiation base is a for q = 3 mod 4, 2*a for q = 5 mod 8
        // (the two cases are distinguished by MQ mod 8; MQ = 7 mod 8 is
        // excluded by the compile-time checks).
        let z = if (MQ & 3) == 1 { *self } else { self.mul2() };
        let (mut y, win) = z.prep_pow240();

        if (MQ & 3) == 1 {
            // q = 3 mod 4; candidate root is a^((q+1)/4). The exponent
            // ends with e = (2^15 - MQ + 1)/4 on 13 bits.
            let e = (1u32.wrapping_sub(MQ as u32) >> 2) & 0x1FFF;
            for j in 0..6 {
                y.set_xsquare(2);
                let k = ((e >> (11 - 2 * j)) & 3) as usize;
                if k != 0 {
                    y.set_mul(&win[k - 1]);
                }
            }
            y.set_square();
            if (e & 1) != 0 {
                y.set_mul(&win[0]);
            }
        } else {
            // q = 5 mod 8; Atkin's formulas:
            //   b <- (2*a)^((q-5)/8)
            //   c <- 2*a*b^2
            //   y <- a*b*(c - 1)
            // The exponent of b ends with e = (2^15 - MQ - 5)/8 on 12
            // bits. If a is not a quadratic residue then c is 1 or -1
            // instead of a square root of -1, and y^2 is then 2*a or
            // -2*a; the final check below catches that case.
            let e = ((MQ as u32) + 5).wrapping_neg() >> 3 & 0xFFF;
            for j in 0..6 {
                y.set_xsquare(2);
                let k = ((e >> (10 - 2 * j)) & 3) as usize;
                if k != 0 {
                    y.set_mul(&win[k - 1]);
                }
            }
            let c = self.mul2() * y.square();
            y = (*self) * y * (c - Self::ONE);
        }

        // Normalize y and negate it if needed to clear the low bit.
        y.set_normalized();
        y.set_cond(&-y, ((y.0[0] as u32) & 1).wrapping_neg());

        // Verify the candidate; clear it if the input was not a square.
        let r = y.square().equals(*self);
        y.set_cond(&Self::ZERO, !r);
        *self = y;
        r
    }

    // Compute the square root of this value. Returned value is (y, r):
    //  - If this value is a quadratic residue, then y is the square
    //    root whose least significant bit (when normalized in 0..q-1)
    //    is 0, and r is equal to 0xFFFFFFFF.
    //  - Otherwise, y is zero and r is equal to 0x00000000.
    #[inline(always)]
    pub fn sqrt(self) -> (Self, u32) {
        let mut x = self;
        let r = x.set_sqrt();
        (x, r)
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0x00000000 otherwise.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self - rhs).iszero()
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0x00000000 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        // Partially reduced values admit three representations of 0:
        // 0, q and 2*q.
        let a0 = self.0[0];
        let a1 = self.0[1];
        let a2 = self.0[2];
        let a3 = self.0[3];
        let t0 = a0 | a1 | a2 | a3;
        let t1 = a0.wrapping_add(MQ) | !a1 | !a2 | (a3 ^ 0x7FFFFFFFFFFFFFFF);
        let t2 = a0.wrapping_add(2 * MQ) | !a1 | !a2 | !a3;

        // Top bit of r is 0 if and only if one of t0, t1 or t2 is zero.
        let r = (t0 | t0.wrapping_neg())
              & (t1 | t1.wrapping_neg())
              & (t2 | t2.wrapping_neg());
        ((r >> 63) as u32).wrapping_sub(1)
    }

    // Test the sign of this value (constant-time); returned value is
    // 0xFFFFFFFF if the least significant bit of the fully reduced
    // integer representation is 1 ("negative"), 0x00000000 otherwise.
    #[inline]
    pub fn isnegative(self) -> u32 {
        let mut x = self;
        x.set_normalized();
        ((x.0[0] as u32) & 1).wrapping_neg()
    }

    #[inline(always)]
    fn set_decode32_reduce(&mut self, buf: &[u8]) {
        debug_assert!(buf.len() == 32);
        self.0[0] = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 0.. 8]).unwrap());
        self.0[1] = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 8..16]).unwrap());
        self.0[2] = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[16..24]).unwrap());
        self.0[3] = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[24..32]).unwrap());
    }

    // Encode this value over exactly 32 bytes. Encoding is always
    // canonical (little-endian bytes of the value in the 0..q-1 range;
    // the top bit of the last byte is always 0).
    #[inline(always)]
    pub fn encode(self) -> [u8; 32] {
        let mut r = self;
        r.set_normalized();
        let mut d = [0u8; 32];
        d[ 0.. 8].copy_from_slice(&r.0[0].to_le_bytes());
        d[ 8..16].copy_from_slice(&r.0[1].to_le_bytes());
        d[16..24].copy_from_slice(&r.0[2].to_le_bytes());
        d[24..32].copy_from_slice(&r.0[3].to_le_bytes());
        d
    }

    // Decode the field element from the provided bytes. If the source
    // slice does not have length exactly 32 bytes, or if the encoding
    // is non-canonical (the integer is not lower than q), then this
    // element is set to zero and 0x00000000 is returned; otherwise,
    // 0xFFFFFFFF is returned. For a 32-byte input, the outcome does not
    // leak through timing.
    #[inline]
    pub fn set_decode_ct(&mut self, buf: &[u8]) -> u32 {
        if buf.len() != 32 {
            *self = Self::ZERO;
            return 0;
        }

        self.set_decode32_reduce(buf);

        // Subtracting q must yield a borrow, or the value is out of
        // range.
        let (_, cc) = subborrow_u64(self.0[0], MQ.wrapping_neg(), 0);
        let (_, cc) = subborrow_u64(self.0[1], !0u64, cc);
        let (_, cc) = subborrow_u64(self.0[2], !0u64, cc);
        let (_, cc) = subborrow_u64(self.0[3], (!0u64) >> 1, cc);

        // Clear the value if not canonical.
        let cc = (cc as u64).wrapping_neg();
        self.0[0] &= cc;
        self.0[1] &= cc;
        self.0[2] &= cc;
        self.0[3] &= cc;

        cc as u32
    }

    // Decode a field element from 32 bytes. On success, this returns
    // (r, 0xFFFFFFFF); if the source encoding was not canonical (the
    // integer value is not lower than q) then this returns (0, 0).
    #[inline(always)]
    pub fn decode_ct(buf: &[u8]) -> (Self, u32) {
        let mut r = Self::ZERO;
        let cc = r.set_decode_ct(buf);
        (r, cc)
    }

    // Decode a field element from 32 bytes. If the source slice has
    // length exactly 32 bytes and contains a valid canonical encoding,
    // then that element is returned; otherwise, `None` is returned.
    // Side-channel analysis may reveal to outsiders whether decoding
    // succeeded; use `decode_ct()` when that must not leak.
    #[inline(always)]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode_ct(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }
}

// ========================================================================
// Trait implementations for the usual operators, over plain values and
// references.

impl<const MQ: u64> Add<GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn add(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl<const MQ: u64> Add<&GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn add(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl<const MQ: u64> Add<GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn add(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl<const MQ: u64> Add<&GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn add(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl<const MQ: u64> AddAssign<GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn add_assign(&mut self, other: GF255<MQ>) {
        self.set_add(&other);
    }
}

impl<const MQ: u64> AddAssign<&GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn add_assign(&mut self, other: &GF255<MQ>) {
        self.set_add(other);
    }
}

impl<const MQ: u64> Div<GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn div(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_div(&other);
        r
    }
}

impl<const MQ: u64> Div<&GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn div(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_div(other);
        r
    }
}

impl<const MQ: u64> Div<GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn div(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_div(&other);
        r
    }
}

impl<const MQ: u64> Div<&GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn div(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_div(other);
        r
    }
}

impl<const MQ: u64> DivAssign<GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn div_assign(&mut self, other: GF255<MQ>) {
        self.set_div(&other);
    }
}

impl<const MQ: u64> DivAssign<&GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn div_assign(&mut self, other: &GF255<MQ>) {
        self.set_div(other);
    }
}

impl<const MQ: u64> Mul<GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn mul(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl<const MQ: u64> Mul<&GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn mul(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl<const MQ: u64> Mul<GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn mul(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl<const MQ: u64> Mul<&GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn mul(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl<const MQ: u64> MulAssign<GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn mul_assign(&mut self, other: GF255<MQ>) {
        self.set_mul(&other);
    }
}

impl<const MQ: u64> MulAssign<&GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn mul_assign(&mut self, other: &GF255<MQ>) {
        self.set_mul(other);
    }
}

impl<const MQ: u64> Neg for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn neg(self) -> GF255<MQ> {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl<const MQ: u64> Neg for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn neg(self) -> GF255<MQ> {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl<const MQ: u64> Sub<GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn sub(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl<const MQ: u64> Sub<&GF255<MQ>> for GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn sub(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl<const MQ: u64> Sub<GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn sub(self, other: GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl<const MQ: u64> Sub<&GF255<MQ>> for &GF255<MQ> {
    type Output = GF255<MQ>;

    #[inline(always)]
    fn sub(self, other: &GF255<MQ>) -> GF255<MQ> {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl<const MQ: u64> SubAssign<GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn sub_assign(&mut self, other: GF255<MQ>) {
        self.set_sub(&other);
    }
}

impl<const MQ: u64> SubAssign<&GF255<MQ>> for GF255<MQ> {
    #[inline(always)]
    fn sub_assign(&mut self, other: &GF255<MQ>) {
        self.set_sub(other);
    }
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::GF255;
    use num_bigint::{BigInt, Sign};
    use sha2::{Sha256, Digest};

    // va and vb must be 32 bytes each in length.
    fn check_gf_ops<const MQ: u64>(va: &[u8], vb: &[u8]) {
        let zp = BigInt::from_slice(Sign::Plus, &[
            (MQ as u32).wrapping_neg(),
            0xFFFFFFFFu32, 0xFFFFFFFFu32, 0xFFFFFFFFu32,
            0xFFFFFFFFu32, 0xFFFFFFFFu32, 0xFFFFFFFFu32, 0x7FFFFFFFu32,
        ]);
        let zp4 = &zp << 2;

        let mut a = GF255::<MQ>::ZERO;
        a.set_decode32_reduce(va);
        let mut b = GF255::<MQ>::ZERO;
        b.set_decode32_reduce(vb);
        let za = BigInt::from_bytes_le(Sign::Plus, va);
        let zb = BigInt::from_bytes_le(Sign::Plus, vb);

        let vc = a.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = &za % &zp;
        assert!(zc == zd);

        let c = a + b;
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za + &zb) % &zp;
        assert!(zc == zd);

        let c = a - b;
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = ((&zp4 + &za) - &zb) % &zp;
        assert!(zc == zd);

        let c = -a;
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&zp4 - &za) % &zp;
        assert!(zc == zd);

        let c = a * b;
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za * &zb) % &zp;
        assert!(zc == zd);

        let c = a.half();
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd: BigInt = ((&zp4 + (&zc << 1)) - &za) % &zp;
        assert!(zd.sign() == Sign::NoSign);

        let c = a.mul2();
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za << 1) % &zp;
        assert!(zc == zd);

        let c = a.mul4();
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za << 2) % &zp;
        assert!(zc == zd);

        let c = a.mul8();
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za << 3) % &zp;
        assert!(zc == zd);

        let c = a.mul16();
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za << 4) % &zp;
        assert!(zc == zd);

        let c = a.square();
        let vc = c.encode();
        let zc = BigInt::from_bytes_le(Sign::Plus, &vc);
        let zd = (&za * &za) % &zp;
        assert!(zc == zd);

        // Canonical decoding must accept exactly the values lower than q.
        let (e, cc) = GF255::<MQ>::decode_ct(va);
        if za < zp {
            assert!(cc == 0xFFFFFFFF);
            assert!(e.encode() == va);
        } else {
            assert!(cc == 0);
            assert!(e.encode() == [0u8; 32]);
        }

        let c = a / b;
        let d = c * b;
        if b.iszero() != 0 {
            assert!(c.iszero() != 0);
        } else {
            assert!(a.equals(d) != 0);
        }

        let c = a.invert();
        if a.iszero() != 0 {
            assert!(c.iszero() != 0);
        } else {
            assert!((c * a).equals(GF255::<MQ>::ONE) != 0);
        }
    }

    fn test_gf<const MQ: u64>() {
        let mut va = [0u8; 32];
        let mut vb = [0u8; 32];
        check_gf_ops::<MQ>(&va, &vb);
        assert!(GF255::<MQ>::ZERO.iszero() == 0xFFFFFFFF);
        assert!(GF255::<MQ>::ZERO.equals(GF255::<MQ>::ZERO) == 0xFFFFFFFF);
        for i in 0..32 {
            va[i] = 0xFFu8;
            vb[i] = 0xFFu8;
        }
        check_gf_ops::<MQ>(&va, &vb);

        // 0, q and 2*q are all representations of zero.
        let mut x = GF255::<MQ>::ZERO;
        va[0..8].copy_from_slice(&MQ.wrapping_neg().to_le_bytes());
        va[8..32].copy_from_slice(&[0xFFu8; 24]);
        va[31] = 0x7F;
        x.set_decode32_reduce(&va);
        assert!(x.iszero() == 0xFFFFFFFF);
        va[0..8].copy_from_slice(&(2 * MQ).wrapping_neg().to_le_bytes());
        va[31] = 0xFF;
        x.set_decode32_reduce(&va);
        assert!(x.iszero() == 0xFFFFFFFF);

        let mut sh = Sha256::new();
        for i in 0..300 {
            sh.update(((2 * i + 0) as u64).to_le_bytes());
            let va = sh.finalize_reset();
            sh.update(((2 * i + 1) as u64).to_le_bytes());
            let vb = sh.finalize_reset();
            check_gf_ops::<MQ>(&va, &vb);

            let mut a = GF255::<MQ>::ZERO;
            a.set_decode32_reduce(&va);
            let mut b = GF255::<MQ>::ZERO;
            b.set_decode32_reduce(&vb);
            assert!(a.iszero() == 0);
            assert!(a.equals(b) == 0);

            // Square roots: every square decodes to the even-bit root;
            // 2 is not a quadratic residue for q = 3 or 5 mod 8, so
            // 2*s^2 must be rejected and yield zero.
            let s = a.square();
            let (t, r) = s.sqrt();
            assert!(r == 0xFFFFFFFF);
            assert!(t.square().equals(s) == 0xFFFFFFFF);
            assert!((t.encode()[0] & 1) == 0);
            assert!(t.isnegative() == 0);
            let s2 = s.mul2();
            let (t2, r) = s2.sqrt();
            assert!(r == 0);
            assert!(t2.iszero() == 0xFFFFFFFF);

            // Sign is the parity of the canonical representation.
            assert!(a.isnegative() == (((a.encode()[0] & 1) as u32).wrapping_neg()));
            if a.iszero() == 0 {
                assert!((a.isnegative() ^ (-a).isnegative()) == 0xFFFFFFFF);
            }

            // Conditionals.
            let mut c = a;
            c.set_cond(&b, 0);
            assert!(c.equals(a) == 0xFFFFFFFF);
            c.set_cond(&b, 0xFFFFFFFF);
            assert!(c.equals(b) == 0xFFFFFFFF);
            let mut c = a;
            c.set_condneg(0);
            assert!(c.equals(a) == 0xFFFFFFFF);
            c.set_condneg(0xFFFFFFFF);
            assert!(c.equals(-a) == 0xFFFFFFFF);
            let (mut c, mut d) = (a, b);
            GF255::<MQ>::cswap(&mut c, &mut d, 0);
            assert!(c.equals(a) == 0xFFFFFFFF && d.equals(b) == 0xFFFFFFFF);
            GF255::<MQ>::cswap(&mut c, &mut d, 0xFFFFFFFF);
            assert!(c.equals(b) == 0xFFFFFFFF && d.equals(a) == 0xFFFFFFFF);
        }

        // sqrt(0) succeeds and returns 0.
        let (t, r) = GF255::<MQ>::ZERO.sqrt();
        assert!(r == 0xFFFFFFFF);
        assert!(t.iszero() == 0xFFFFFFFF);
    }

    #[test]
    fn gf255e_ops() {
        test_gf::<18651>();
    }

    #[test]
    fn gf255s_ops() {
        test_gf::<3957>();
    }
}
