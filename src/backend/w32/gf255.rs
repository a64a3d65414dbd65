//! GF(2^255 - MQ) with 32-bit limbs.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::convert::TryFrom;

use super::{addcarry_u32, subborrow_u32, umull, umull_add, umull_add2};

/// A field element; the eight limbs encode the value in base 2^32,
/// low-to-high. The representation is partially reduced: any 256-bit
/// value is accepted, and interpreted modulo q = 2^255 - MQ.
#[derive(Clone, Copy, Debug)]
pub struct GF255<const MQ: u64>([u32; 8]);

impl<const MQ: u64> GF255<MQ> {

    // Parameter restrictions (see the 64-bit backend; they are the
    // same for both limb widths):
    //   MQ is odd
    //   MQ <= 32765
    //   MQ != 7 mod 8
    //   q = 2^255 - MQ is prime (not checkable at compile-time)
    #[allow(dead_code)]
    const COMPILE_TIME_CHECKS: () = Self::compile_time_checks();
    const fn compile_time_checks() {
        static_assert!((MQ & 1) != 0);
        static_assert!(MQ <= 32765);
        static_assert!((MQ & 7) != 7);
    }

    // Modulus q in base 2^32 (low-to-high order).
    pub const MODULUS: [u32; 8] = [
        (MQ as u32).wrapping_neg(),
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0x7FFFFFFF,
    ];

    pub const ZERO: GF255<MQ> = GF255::<MQ>([ 0, 0, 0, 0, 0, 0, 0, 0 ]);
    pub const ONE: GF255<MQ> = GF255::<MQ>([ 1, 0, 0, 0, 0, 0, 0, 0 ]);
    pub const MINUS_ONE: GF255<MQ> = GF255::<MQ>([
        ((MQ + 1) as u32).wrapping_neg(),
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0xFFFFFFFF,
        0x7FFFFFFF,
    ]);

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in low-to-high order).
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        Self([
            x0 as u32, (x0 >> 32) as u32,
            x1 as u32, (x1 >> 32) as u32,
            x2 as u32, (x2 >> 32) as u32,
            x3 as u32, (x3 >> 32) as u32,
        ])
    }

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in high-to-low order).
    pub const fn w64be(x3: u64, x2: u64, x1: u64, x0: u64) -> Self {
        Self([
            x0 as u32, (x0 >> 32) as u32,
            x1 as u32, (x1 >> 32) as u32,
            x2 as u32, (x2 >> 32) as u32,
            x3 as u32, (x3 >> 32) as u32,
        ])
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        // Raw addition; then, on carry, subtract 2*q (i.e. add 2*MQ).
        let (d, mut cc) = addcarry_u32(self.0[0], rhs.0[0], 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(self.0[i], rhs.0[i], cc);
            self.0[i] = d;
            cc = ee;
        }

        let (d, mut cc) = addcarry_u32(self.0[0],
            (cc as u32).wrapping_neg() & (2 * (MQ as u32)), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }

        // A carry may appear here only if the original sum was at least
        // 2^257 - 2*MQ, in which case the low limb is now lower than
        // 2*MQ, and adding 2*MQ to it cannot overflow again.
        self.0[0] = self.0[0].wrapping_add(
            (cc as u32).wrapping_neg() & (2 * (MQ as u32)));
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        // Raw subtraction; then, on borrow, add 2*q (i.e. subtract 2*MQ).
        let (d, mut cc) = subborrow_u32(self.0[0], rhs.0[0], 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = subborrow_u32(self.0[i], rhs.0[i], cc);
            self.0[i] = d;
            cc = ee;
        }

        let (d, mut cc) = subborrow_u32(self.0[0],
            (cc as u32).wrapping_neg() & (2 * (MQ as u32)), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = subborrow_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }

        // A new borrow implies that the low limb is at least
        // 2^32 - 2*MQ, so the extra subtraction cannot underflow.
        self.0[0] = self.0[0].wrapping_sub(
            (cc as u32).wrapping_neg() & (2 * (MQ as u32)));
    }

    // Negate this value (in place).
    #[inline]
    pub fn set_neg(&mut self) {
        // Compute 2*q - self over 256 bits; add back q if negative.
        let (d, mut cc) = subborrow_u32(
            (2 * (MQ as u32)).wrapping_neg(), self.0[0], 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = subborrow_u32(0xFFFFFFFF, self.0[i], cc);
            self.0[i] = d;
            cc = ee;
        }

        let w = (cc as u32).wrapping_neg();
        let (d, mut cc) = addcarry_u32(self.0[0],
            w & (MQ as u32).wrapping_neg(), 0);
        self.0[0] = d;
        for i in 1..7 {
            let (d, ee) = addcarry_u32(self.0[i], w, cc);
            self.0[i] = d;
            cc = ee;
        }
        let (d, _) = addcarry_u32(self.0[7], w >> 1, cc);
        self.0[7] = d;
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0x00000000, then the value of self is unchanged.
    // ctl MUST be equal to 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        for i in 0..8 {
            self.0[i] ^= ctl & (self.0[i] ^ a.0[i]);
        }
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
        for i in 0..8 {
            let t = ctl & (a.0[i] ^ b.0[i]);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
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
        let tt = (self.0[0] & 1).wrapping_neg();
        for i in 0..7 {
            self.0[i] = (self.0[i] >> 1) | (self.0[i + 1] << 31);
        }
        self.0[7] = self.0[7] >> 1;

        let (d, mut cc) = addcarry_u32(self.0[0],
            tt & ((((MQ as u32) - 1) >> 1).wrapping_neg()), 0);
        self.0[0] = d;
        for i in 1..7 {
            let (d, ee) = addcarry_u32(self.0[i], tt, cc);
            self.0[i] = d;
            cc = ee;
        }
        let (d, _) = addcarry_u32(self.0[7], tt >> 2, cc);
        self.0[7] = d;
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
        let tt = self.0[7] >> 30;

        self.0[7] = ((self.0[7] << 1) & 0x7FFFFFFF) | (self.0[6] >> 31);
        for i in (1..7).rev() {
            self.0[i] = (self.0[i] << 1) | (self.0[i - 1] >> 31);
        }
        self.0[0] = self.0[0] << 1;

        let (d, mut cc) = addcarry_u32(self.0[0], tt * (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }
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
        let tt = self.0[7] >> 29;

        self.0[7] = ((self.0[7] << 2) & 0x7FFFFFFF) | (self.0[6] >> 30);
        for i in (1..7).rev() {
            self.0[i] = (self.0[i] << 2) | (self.0[i - 1] >> 30);
        }
        self.0[0] = self.0[0] << 2;

        let (d, mut cc) = addcarry_u32(self.0[0], tt * (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }
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
        let tt = self.0[7] >> 28;

        self.0[7] = ((self.0[7] << 3) & 0x7FFFFFFF) | (self.0[6] >> 29);
        for i in (1..7).rev() {
            self.0[i] = (self.0[i] << 3) | (self.0[i - 1] >> 29);
        }
        self.0[0] = self.0[0] << 3;

        let (d, mut cc) = addcarry_u32(self.0[0], tt * (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }
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
        let tt = self.0[7] >> 27;

        self.0[7] = ((self.0[7] << 4) & 0x7FFFFFFF) | (self.0[6] >> 28);
        for i in (1..7).rev() {
            self.0[i] = (self.0[i] << 4) | (self.0[i - 1] >> 28);
        }
        self.0[0] = self.0[0] << 4;

        let (d, mut cc) = addcarry_u32(self.0[0], tt * (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }
    }

    #[inline(always)]
    pub fn mul16(self) -> Self {
        let mut r = self;
        r.set_mul16();
        r
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        // 1. Schoolbook product -> 512 bits (c[0..16]).
        let mut c = [0u32; 16];
        let (lo, mut hi) = umull(self.0[0], rhs.0[0]);
        c[0] = lo;
        for i in 1..8 {
            let (lo, ee) = umull_add(self.0[0], rhs.0[i], hi);
            c[i] = lo;
            hi = ee;
        }
        c[8] = hi;
        for j in 1..8 {
            let (lo, mut hi) = umull_add(self.0[j], rhs.0[0], c[j]);
            c[j] = lo;
            for i in 1..8 {
                let (lo, ee) = umull_add2(self.0[j], rhs.0[i], c[i + j], hi);
                c[i + j] = lo;
                hi = ee;
            }
            c[j + 8] = hi;
        }

        // 2. Reduction in two passes. First pass folds the high half
        // with multiplier 2*MQ; low words of the products are added
        // here, high words are kept in c[8..16].
        for i in 0..8 {
            let (lo, hi) = umull_add(c[i + 8], 2 * (MQ as u32), c[i]);
            c[i] = lo;
            c[i + 8] = hi;
        }

        // Second pass folds the remaining overflow (c[15] and the top
        // bit of c[7]) with multiplier MQ. The folded value
        // (2*c[15] + b)*MQ fits on 32 bits since MQ < 2^15.
        let g = (c[15] << 1) | (c[7] >> 31);
        c[7] &= 0x7FFFFFFF;
        let (d, mut cc) = addcarry_u32(c[0], g * (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(c[i], c[i + 7], cc);
            self.0[i] = d;
            cc = ee;
        }
    }

    // Square this value (in place).
    #[inline(always)]
    pub fn set_square(&mut self) {
        // 1. Off-diagonal products.
        let mut c = [0u32; 16];
        let (lo, mut hi) = umull(self.0[0], self.0[1]);
        c[1] = lo;
        for i in 2..8 {
            let (lo, ee) = umull_add(self.0[0], self.0[i], hi);
            c[i] = lo;
            hi = ee;
        }
        c[8] = hi;
        for j in 1..7 {
            let (lo, mut hi) = umull_add(
                self.0[j], self.0[j + 1], c[2 * j + 1]);
            c[2 * j + 1] = lo;
            for i in (j + 2)..8 {
                let (lo, ee) = umull_add2(self.0[j], self.0[i], c[i + j], hi);
                c[i + j] = lo;
                hi = ee;
            }
            c[j + 8] = hi;
        }

        // 2. Double the off-diagonal sum.
        c[15] = c[14] >> 31;
        for i in (2..15).rev() {
            c[i] = (c[i] << 1) | (c[i - 1] >> 31);
        }
        c[1] = c[1] << 1;

        // 3. Add the squares.
        let (lo, hi) = umull(self.0[0], self.0[0]);
        c[0] = lo;
        let (d, mut cc) = addcarry_u32(c[1], hi, 0);
        c[1] = d;
        for i in 1..8 {
            let (lo, hi) = umull(self.0[i], self.0[i]);
            let (d, ee) = addcarry_u32(c[2 * i], lo, cc);
            c[2 * i] = d;
            let (d, ee) = addcarry_u32(c[2 * i + 1], hi, ee);
            c[2 * i + 1] = d;
            cc = ee;
        }

        // 4. Reduction; same two passes as in set_mul().
        for i in 0..8 {
            let (lo, hi) = umull_add(c[i + 8], 2 * (MQ as u32), c[i]);
            c[i] = lo;
            c[i + 8] = hi;
        }
        let g = (c[15] << 1) | (c[7] >> 31);
        c[7] &= 0x7FFFFFFF;
        let (d, mut cc) = addcarry_u32(c[0], g * (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..8 {
            let (d, ee) = addcarry_u32(c[i], c[i + 7], cc);
            self.0[i] = d;
            cc = ee;
        }
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
        let w = (self.0[7] >> 31).wrapping_neg();
        let (d, mut cc) = addcarry_u32(self.0[0], w & (MQ as u32), 0);
        self.0[0] = d;
        for i in 1..7 {
            let (d, ee) = addcarry_u32(self.0[i], 0, cc);
            self.0[i] = d;
            cc = ee;
        }
        let (d, _) = addcarry_u32(self.0[7] & 0x7FFFFFFF, 0, cc);
        self.0[7] = d;

        // Subtract q; add it back if the result is negative.
        let (d, mut cc) = subborrow_u32(self.0[0],
            (MQ as u32).wrapping_neg(), 0);
        self.0[0] = d;
        for i in 1..7 {
            let (d, ee) = subborrow_u32(self.0[i], 0xFFFFFFFF, cc);
            self.0[i] = d;
            cc = ee;
        }
        let (d, cc) = subborrow_u32(self.0[7], 0x7FFFFFFF, cc);
        self.0[7] = d;

        let w = (cc as u32).wrapping_neg();
        let (d, mut cc) = addcarry_u32(self.0[0],
            w & (MQ as u32).wrapping_neg(), 0);
        self.0[0] = d;
        for i in 1..7 {
            let (d, ee) = addcarry_u32(self.0[i], w, cc);
            self.0[i] = d;
            cc = ee;
        }
        let (d, _) = addcarry_u32(self.0[7], w >> 1, cc);
        self.0[7] = d;
    }

    // Compute self^(2^240-1), along with the window [self, self^2,
    // self^3]. See the 64-bit backend for the role of this value in
    // inversion and square root extraction.
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
        // See the 64-bit backend for comments; the code is identical up
        // to the limb width, which only matters in the final sign
        // selection.
        let z = if (MQ & 3) == 1 { *self } else { self.mul2() };
        let (mut y, win) = z.prep_pow240();

        if (MQ & 3) == 1 {
            // q = 3 mod 4; candidate root is a^((q+1)/4).
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
            // q = 5 mod 8; Atkin's formulas.
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
        y.set_cond(&-y, (y.0[0] & 1).wrapping_neg());

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
        let t0 = self.0[0] | self.0[1] | self.0[2] | self.0[3]
            | self.0[4] | self.0[5] | self.0[6] | self.0[7];
        let t1 = self.0[0].wrapping_add(MQ as u32)
            | !self.0[1] | !self.0[2] | !self.0[3]
            | !self.0[4] | !self.0[5] | !self.0[6]
            | (self.0[7] ^ 0x7FFFFFFF);
        let t2 = self.0[0].wrapping_add(2 * (MQ as u32))
            | !self.0[1] | !self.0[2] | !self.0[3]
            | !self.0[4] | !self.0[5] | !self.0[6] | !self.0[7];

        // Top bit of r is 0 if and only if one of t0, t1 or t2 is zero.
        let r = (t0 | t0.wrapping_neg())
              & (t1 | t1.wrapping_neg())
              & (t2 | t2.wrapping_neg());
        (r >> 31).wrapping_sub(1)
    }

    // Test the sign of this value (constant-time); returned value is
    // 0xFFFFFFFF if the least significant bit of the fully reduced
    // integer representation is 1 ("negative"), 0x00000000 otherwise.
    #[inline]
    pub fn isnegative(self) -> u32 {
        let mut x = self;
        x.set_normalized();
        (x.0[0] & 1).wrapping_neg()
    }

    #[inline(always)]
    fn set_decode32_reduce(&mut self, buf: &[u8]) {
        debug_assert!(buf.len() == 32);
        for i in 0..8 {
            self.0[i] = u32::from_le_bytes(*<&[u8; 4]>::try_from(
                &buf[(4 * i)..(4 * i + 4)]).unwrap());
        }
    }

    // Encode this value over exactly 32 bytes. Encoding is always
    // canonical (little-endian bytes of the value in the 0..q-1 range;
    // the top bit of the last byte is always 0).
    #[inline(always)]
    pub fn encode(self) -> [u8; 32] {
        let mut r = self;
        r.set_normalized();
        let mut d = [0u8; 32];
        for i in 0..8 {
            d[(4 * i)..(4 * i + 4)].copy_from_slice(&r.0[i].to_le_bytes());
        }
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
        let (_, mut cc) = subborrow_u32(self.0[0],
            (MQ as u32).wrapping_neg(), 0);
        for i in 1..7 {
            let (_, ee) = subborrow_u32(self.0[i], 0xFFFFFFFF, cc);
            cc = ee;
        }
        let (_, cc) = subborrow_u32(self.0[7], 0x7FFFFFFF, cc);

        // Clear the value if not canonical.
        let cc = (cc as u32).wrapping_neg();
        for i in 0..8 {
            self.0[i] &= cc;
        }

        cc
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
