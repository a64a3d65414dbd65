//! Jq255e implementation.
//!
//! This module implements the jq255e prime-order group, which is a
//! subgroup of the double-odd elliptic curve `y^2 = x*(x^2 - 2)` over
//! the finite field GF(2^255 - 18651). The group has prime order `r`
//! (an integer slightly below 2^254), and a conventional generator.
//!
//! A group element is represented by the `Point` structure. Group
//! elements are called "points" because they are internally represented
//! by points on an elliptic curve; the `Point` structure, by
//! construction, only contains proper representatives of group
//! elements. Points can be added and subtracted with the `+` and `-`
//! operators (and the compound assignments `+=` and `-=`), over all
//! combinations of plain values and references; doubling uses the
//! specialized `Point::double()`, and sequences of successive doublings
//! use `Point::xdouble()`, which applies some extra optimizations.
//! Multiplication by a scalar uses the `*` operator. Scalars are
//! integers modulo `r`, represented by the `Scalar` structure.
//!
//! Scalars encode over 32 bytes (unsigned little-endian convention).
//! Points also encode over 32 bytes; only 255 bits are used, the top
//! bit of the last byte being always zero. In both cases, encoding is
//! canonical and verified upon decoding.
//!
//! The `PrivateKey` and `PublicKey` structures implement the signature
//! scheme (48-byte signatures) and the key-exchange protocol defined
//! for jq255e.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::convert::TryFrom;
use crate::field::GF255e;
use crate::backend::scalar255::{Scalar255, recode5_u128, recode_wnaf_u128};
use blake2::{Blake2s256, Digest};
use rand_core::{CryptoRng, RngCore};

/// An element in the jq255e group.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    // Extended coordinates on the Jacobi quartic curve of equation
    // e^2 = (a^2 - 4*b)*u^4 - 2*a*u^2 + 1 (with a = 0 and b = -2),
    // which is birationally equivalent to the base curve through
    // u = x/y and e = u^2*(x - b/x). For all points:
    //   Z != 0 and E != 0
    //   e = E/Z
    //   u = U/Z
    //   u^2 = T/Z   (hence U^2 = T*Z)
    // The group neutral is (e, u) = (1, 0); each group element has
    // exactly two representatives (e, u) and (-e, -u) on the quartic.
    E: GF255e,
    Z: GF255e,
    U: GF255e,
    T: GF255e,
}

/// Integers modulo r = 2^254 - 131528281291764213006042413802501683931.
///
/// `r` is the prime order of the jq255e group.
pub type Scalar = Scalar255<0x8B27BADB, 0xE0AD3751, 0xABF873AC, 0x62F36CF0,
    false>;

impl Point {

    /// The group neutral element.
    pub const NEUTRAL: Self = Self {
        E: GF255e::ONE,
        Z: GF255e::ONE,
        U: GF255e::ZERO,
        T: GF255e::ZERO,
    };

    /// The conventional generator.
    ///
    /// The canonical representative of the generator is (-3, -1); the
    /// coordinates below encode the equivalent representative (3, 1).
    pub const BASE: Self = Self {
        E: GF255e::w64be(0, 0, 0, 3),
        Z: GF255e::ONE,
        U: GF255e::ONE,
        T: GF255e::ONE,
    };

    /// A square root of -1 in GF255e (the non-negative one).
    const ETA: GF255e = GF255e::w64be(
        0x10ED2DB33C69B85F, 0xE414983FE53688E3,
        0xA60D864FB30E6336, 0xD99E0F1BAA938AEE);

    /// Tries to decode a point from bytes.
    ///
    /// If the source slice does not have length exactly 32 bytes, or
    /// its contents are not a valid canonical encoding of a group
    /// element, then decoding fails; this point is then set to the
    /// neutral, and 0x00000000 is returned. On success, 0xFFFFFFFF is
    /// returned.
    ///
    /// When the source length is exactly 32 bytes, the decoding outcome
    /// (success or failure) does not leak through timing-based side
    /// channels.
    pub fn set_decode(&mut self, buf: &[u8]) -> u32 {
        if buf.len() != 32 {
            *self = Self::NEUTRAL;
            return 0;
        }

        // Decode the u coordinate.
        let (u, mut r) = GF255e::decode_ct(buf);

        // e^2 = (a^2-4*b)*u^4 - 2*a*u^2 + 1 = 8*u^4 + 1
        let uu = u.square();
        let ee = uu.square().mul8() + GF255e::ONE;
        let (e, r2) = ee.sqrt();
        r &= r2;
        // sqrt() already returns the non-negative root, so the sign of
        // e needs no adjustment.

        // On failure, fall back to the neutral.
        self.E = GF255e::select(&GF255e::ONE, &e, r);
        self.Z = GF255e::ONE;
        self.U = GF255e::select(&GF255e::ZERO, &u, r);
        self.T = GF255e::select(&GF255e::ZERO, &uu, r);
        r
    }

    /// Tries to decode a point from some bytes.
    ///
    /// Decoding succeeds only if the source slice has length exactly 32
    /// bytes and contains the canonical encoding of a valid group
    /// element. Since this function returns an `Option<Point>`, it
    /// inherently leaks (through timing-based side channels) whether
    /// decoding succeeded; to avoid that, use `set_decode()`. The
    /// decoded point itself does not leak.
    pub fn decode(buf: &[u8]) -> Option<Point> {
        let mut P = Point::NEUTRAL;
        if P.set_decode(buf) != 0 {
            Some(P)
        } else {
            None
        }
    }

    /// Encodes this point into exactly 32 bytes.
    ///
    /// Encoding is always canonical: of the two representatives of this
    /// group element, the one with the non-negative e coordinate is
    /// selected, and its u coordinate is encoded.
    pub fn encode(self) -> [u8; 32] {
        let iZ = self.Z.invert();
        let mut u = self.U * iZ;
        u.set_condneg((self.E * iZ).isnegative());
        u.encode()
    }

    /// Creates a point by converting a point in affine extended
    /// coordinates (e, u, u^2).
    fn from_affine(P: &PointAffine) -> Self {
        Self {
            E: P.e,
            Z: GF255e::ONE,
            U: P.u,
            T: P.t,
        }
    }

    /// Adds another point (`rhs`) to this point.
    fn set_add(&mut self, rhs: &Self) {
        let (E1, Z1, U1, T1) = (&self.E, &self.Z, &self.U, &self.T);
        let (E2, Z2, U2, T2) = (&rhs.E, &rhs.Z, &rhs.U, &rhs.T);

        // Generic addition (8M+3S), with the constants of the dual
        // curve: a' = -2*a = 0 and b' = a^2 - 4*b = 8.
        //   e1e2 = E1*E2
        //   z1z2 = Z1*Z2
        //   u1u2 = U1*U2
        //   t1t2 = T1*T2
        //     eu = (E1 + U1)*(E2 + U2) - e1e2 - u1u2
        //     zt = (Z1 + T1)*(Z2 + T2) - z1z2 - t1t2
        //     hd = z1z2 - b'*t1t2
        //     E3 = (z1z2 + b'*t1t2)*(e1e2 + a'*u1u2) + 2*b'*u1u2*zt
        //     Z3 = hd^2
        //     T3 = eu^2
        //     U3 = hd*eu
        let e1e2 = E1 * E2;
        let u1u2 = U1 * U2;
        let z1z2 = Z1 * Z2;
        let t1t2 = T1 * T2;
        let eu = (E1 + U1) * (E2 + U2) - e1e2 - u1u2;
        let zt = (Z1 + T1) * (Z2 + T2) - z1z2 - t1t2;
        let bpt1t2 = t1t2.mul8();
        let hd = z1z2 - bpt1t2;
        let T3 = eu.square();
        let Z3 = hd.square();
        let E3 = (z1z2 + bpt1t2) * e1e2 + u1u2.mul16() * zt;
        let U3 = hd * eu;
        self.E = E3;
        self.Z = Z3;
        self.U = U3;
        self.T = T3;
    }

    /// Specialized point addition when the second operand is in affine
    /// extended coordinates (Z2 = 1), as in the precomputed tables for
    /// multiples of the generator (7M+3S).
    fn set_add_affine(&mut self, rhs: &PointAffine) {
        let (E1, Z1, U1, T1) = (&self.E, &self.Z, &self.U, &self.T);
        let (e2, u2, t2) = (&rhs.e, &rhs.u, &rhs.t);

        let e1e2 = E1 * e2;
        let u1u2 = U1 * u2;
        let t1t2 = T1 * t2;
        let eu = (E1 + U1) * (e2 + u2) - e1e2 - u1u2;
        let zt = Z1 * t2 + T1;
        let bpt1t2 = t1t2.mul8();
        let hd = Z1 - bpt1t2;
        let T3 = eu.square();
        let Z3 = hd.square();
        let E3 = (Z1 + bpt1t2) * e1e2 + u1u2.mul16() * zt;
        let U3 = hd * eu;
        self.E = E3;
        self.Z = Z3;
        self.U = U3;
        self.T = T3;
    }

    /// Specialized point subtraction when the second operand is in
    /// affine extended coordinates.
    fn set_sub_affine(&mut self, rhs: &PointAffine) {
        self.set_add_affine(&PointAffine {
            e: rhs.e,
            u: -rhs.u,
            t: rhs.t,
        });
    }

    /// Doubles this point (in place).
    #[inline(always)]
    pub fn set_double(&mut self) {
        self.set_xdouble(1);
    }

    /// Doubles this point.
    #[inline(always)]
    pub fn double(self) -> Self {
        let mut r = self;
        r.set_double();
        r
    }

    /// Switches to the (X:W:J) doubling representation, performing one
    /// doubling in the process (1M+3S): for this point P, the double
    /// 2*P has
    ///   X = E^4, W = 2*Z^2 - E^2, J = 2*E*U.
    fn double_to_xwj(&self) -> (GF255e, GF255e, GF255e) {
        let e2 = self.E.square();
        (e2.square(),
         self.Z.square().mul2() - e2,
         self.E * self.U.mul2())
    }

    /// Converts back from (X:W:J) to extended (E:Z:U:T) coordinates
    /// (3S): Z = W^2, T = J^2, U = W*J, E = 2*X - Z.
    fn set_from_xwj(&mut self, x: GF255e, w: GF255e, j: GF255e) {
        self.Z = w.square();
        self.T = j.square();
        self.U = w * j;
        self.E = x.mul2() - self.Z;
    }

    /// Doubles this point n times (in place).
    ///
    /// The first doubling switches to the (X:W:J) representation
    /// (1M+3S); every further doubling stays there (1M+5S); the final
    /// conversion back costs 3S.
    pub fn set_xdouble(&mut self, n: u32) {
        if n == 0 {
            return;
        }

        let (mut x, mut w, mut j) = self.double_to_xwj();
        for _ in 1..n {
            // Doubling within (X:W:J):
            //   X' = (W^2 - 2*X)^4
            //   W' = (W^2 - 2*X)^2 - 2*W^4
            //   J' = 2*W*(W^2 - 2*X)*J
            let w2 = w.square();
            let d = w2 - x.mul2();
            let dd = d.square();
            j *= d * w.mul2();
            w = dd - w2.square().mul2();
            x = dd.square();
        }
        self.set_from_xwj(x, w, j);
    }

    /// Doubles this point n times.
    #[inline(always)]
    pub fn xdouble(self, n: u32) -> Self {
        let mut r = self;
        r.set_xdouble(n);
        r
    }

    /// Negates this point (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        self.U.set_neg();
    }

    /// Subtracts another point (`rhs`) from this point.
    fn set_sub(&mut self, rhs: &Self) {
        self.set_add(&-rhs);
    }

    /// Compares two points for equality.
    ///
    /// Returned value is 0xFFFFFFFF if the two points represent the
    /// same group element, 0x00000000 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        // The two representatives (e, u) and (-e, -u) of a group
        // element share the value u/e, and that value identifies the
        // element uniquely; since E1 and E2 are never zero, u1/e1 and
        // u2/e2 can be compared through cross-multiplication.
        (self.U * rhs.E).equals(rhs.U * self.E)
    }

    /// Tests whether this point is the group neutral.
    ///
    /// Returned value is 0xFFFFFFFF for the neutral, 0x00000000
    /// otherwise.
    #[inline(always)]
    pub fn isneutral(self) -> u32 {
        self.U.iszero()
    }

    /// Conditionally copies the provided point (`P`) into `self`.
    ///
    /// The copy is performed if `ctl` = 0xFFFFFFFF; `self` is unchanged
    /// if `ctl` = 0x00000000. `ctl` MUST be equal to 0x00000000 or
    /// 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, P: &Self, ctl: u32) {
        self.E.set_cond(&P.E, ctl);
        self.Z.set_cond(&P.Z, ctl);
        self.U.set_cond(&P.U, ctl);
        self.T.set_cond(&P.T, ctl);
    }

    /// Returns a point equal to `P0` (if `ctl` = 0x00000000) or `P1`
    /// (if `ctl` = 0xFFFFFFFF).
    ///
    /// `ctl` MUST be equal to 0x00000000 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(P0: &Self, P1: &Self, ctl: u32) -> Self {
        let mut P = *P0;
        P.set_cond(P1, ctl);
        P
    }

    /// Conditionally negates this point.
    ///
    /// This point is negated if `ctl` = 0xFFFFFFFF, and kept unchanged
    /// if `ctl` = 0x00000000. `ctl` MUST be equal to 0x00000000 or
    /// 0xFFFFFFFF.
    #[inline]
    pub fn set_condneg(&mut self, ctl: u32) {
        self.U.set_condneg(ctl);
    }

    /// Supports scalar splitting: given a 256-bit integer k (unsigned,
    /// as 8 little-endian 32-bit limbs, lower than r) and a multiplier
    /// integer e (lower than 2^127 - 2, as 4 limbs), compute
    /// round(k*e / r).
    fn mul_divr_rounded(k: &[u32; 8], e: &[u32; 4]) -> [u32; 4] {
        // All computations on 32-bit limbs: the scalar is secret, and
        // wider-than-register multiplications cannot be trusted to be
        // constant-time everywhere.

        // z <- k*e
        let mut z = [0u32; 12];
        for i in 0..8 {
            let mut cc = 0u32;
            for j in 0..4 {
                let w = (k[i] as u64) * (e[j] as u64)
                    + (z[i + j] as u64) + (cc as u64);
                z[i + j] = w as u32;
                cc = (w >> 32) as u32;
            }
            z[i + 4] = cc;
        }

        // (r-1)/2
        const HR: [u32; 12] = [
            0x3A6C2292, 0x8FA96457, 0xAA03C629, 0xCE864987,
            0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x1FFFFFFF,
            0x00000000, 0x00000000, 0x00000000, 0x00000000,
        ];

        // z <- z + (r-1)/2
        let mut cc = 0u32;
        for i in 0..12 {
            let w = (z[i] as u64) + (HR[i] as u64) + (cc as u64);
            z[i] = w as u32;
            cc = (w >> 32) as u32;
        }

        // y <- floor(z / 2^254) + 1
        let mut y = [
            (z[ 7] >> 30) | (z[ 8] << 2),
            (z[ 8] >> 30) | (z[ 9] << 2),
            (z[ 9] >> 30) | (z[10] << 2),
            (z[10] >> 30) | (z[11] << 2),
        ];
        let mut cc = 1u32;
        for i in 0..4 {
            let w = (y[i] as u64) + (cc as u64);
            y[i] = w as u32;
            cc = (w >> 32) as u32;
        }

        // r0 = 2^254 - r
        const R0: [u32; 4] = [
            0x8B27BADB, 0xE0AD3751, 0xABF873AC, 0x62F36CF0,
        ];

        // t <- y*r0
        let mut t = [0u32; 8];
        for i in 0..4 {
            let mut cc = 0u32;
            for j in 0..4 {
                let w = (y[i] as u64) * (R0[j] as u64)
                    + (t[i + j] as u64) + (cc as u64);
                t[i + j] = w as u32;
                cc = (w >> 32) as u32;
            }
            t[i + 4] = cc;
        }

        // Compute the high limb of t + (z mod 2^254); that limb is
        // lower than 2^31. If it is lower than 2^30, then y was one too
        // large and must be decremented.
        z[7] &= 0x3FFFFFFF;
        let mut w = (z[0] as u64) + (t[0] as u64);
        for i in 1..8 {
            w = (z[i] as u64) + (t[i] as u64) + (w >> 32);
        }

        let w = (y[0] as u64).wrapping_sub(1 - (w >> 30));
        y[0] = w as u32;
        let w = (y[1] as u64).wrapping_sub(w >> 63);
        y[1] = w as u32;
        let w = (y[2] as u64).wrapping_sub(w >> 63);
        y[2] = w as u32;
        y[3] -= (w >> 32) as u32;

        y
    }

    /// Splits a scalar k into k0 and k1 (signed) such that
    /// k = k0 + k1*mu mod r, with mu a specific square root of -1
    /// modulo r, and |k0|, |k1| < 2^127.
    ///
    /// This function returns |k0|, sgn(k0), |k1| and sgn(k1), with
    /// sgn(x) = 0xFFFFFFFF for x < 0, 0x00000000 for x >= 0.
    fn split_mu(k: &Scalar) -> (u128, u32, u128, u32) {
        // Obtain k as an integer t in the 0..r-1 range.
        let mut t = [0u32; 8];
        let bb = k.encode();
        for i in 0..8 {
            t[i] = u32::from_le_bytes(*<&[u8; 4]>::try_from(
                &bb[(4 * i)..(4 * i + 4)]).unwrap());
        }

        // Reduced lattice basis vectors for (mu, r): (u, v) such that
        // k0 = k - d*u - c*v and k1 = d*v - c*u, with c = round(k*v/r)
        // and d = round(k*u/r).
        const EU: [u32; 4] = [
            0xC93F6111, 0x2ACCF9DE, 0x53C2C6E6, 0x1A509F7A,
        ];

        const EV: [u32; 4] = [
            0x5466F77E, 0x0B7A3130, 0xFFBB3A93, 0x7D440C6A,
        ];

        let c = Self::mul_divr_rounded(&t, &EV);
        let d = Self::mul_divr_rounded(&t, &EU);

        // 128-bit truncated products, subtractions and absolute values,
        // over 32-bit limbs.
        fn mul128(a: [u32; 4], b: [u32; 4]) -> [u32; 4] {
            let w = (a[0] as u64) * (b[0] as u64);
            let d0 = w as u32;
            let w = (a[0] as u64) * (b[1] as u64) + (w >> 32);
            let mut d1 = w as u32;
            let w = (a[0] as u64) * (b[2] as u64) + (w >> 32);
            let mut d2 = w as u32;
            let mut d3 = a[0].wrapping_mul(b[3]).wrapping_add((w >> 32) as u32);

            let w = (a[1] as u64) * (b[0] as u64) + (d1 as u64);
            d1 = w as u32;
            let w = (a[1] as u64) * (b[1] as u64) + (d2 as u64) + (w >> 32);
            d2 = w as u32;
            d3 = a[1].wrapping_mul(b[2]).wrapping_add(d3)
                .wrapping_add((w >> 32) as u32);

            let w = (a[2] as u64) * (b[0] as u64) + (d2 as u64);
            d2 = w as u32;
            d3 = a[2].wrapping_mul(b[1]).wrapping_add(d3)
                .wrapping_add((w >> 32) as u32);

            d3 = a[3].wrapping_mul(b[0]).wrapping_add(d3);

            [ d0, d1, d2, d3 ]
        }

        fn sub128(a: [u32; 4], b: [u32; 4]) -> [u32; 4] {
            let w = (a[0] as u64).wrapping_sub(b[0] as u64);
            let d0 = w as u32;
            let w = (a[1] as u64).wrapping_sub(b[1] as u64)
                .wrapping_sub(w >> 63);
            let d1 = w as u32;
            let w = (a[2] as u64).wrapping_sub(b[2] as u64)
                .wrapping_sub(w >> 63);
            let d2 = w as u32;
            let d3 = a[3].wrapping_sub(b[3]).wrapping_sub((w >> 63) as u32);
            [ d0, d1, d2, d3 ]
        }

        fn cneg128(a: [u32; 4]) -> (u128, u32) {
            let s = ((a[3] as i32) >> 31) as u32;
            let w = ((a[0] ^ s) as u64).wrapping_sub(s as u64);
            let d0 = w as u32;
            let w = ((a[1] ^ s) as u64).wrapping_sub(s as u64)
                .wrapping_sub(w >> 63);
            let d1 = w as u32;
            let w = ((a[2] ^ s) as u64).wrapping_sub(s as u64)
                .wrapping_sub(w >> 63);
            let d2 = w as u32;
            let d3 = (a[3] ^ s).wrapping_sub(s).wrapping_sub((w >> 63) as u32);

            let d = (d0 as u128)
                  | ((d1 as u128) << 32)
                  | ((d2 as u128) << 64)
                  | ((d3 as u128) << 96);
            (d, s)
        }

        let tt = [ t[0], t[1], t[2], t[3] ];
        let k0 = sub128(sub128(tt, mul128(d, EU)), mul128(c, EV));
        let k1 = sub128(mul128(d, EV), mul128(c, EU));

        let (n0, s0) = cneg128(k0);
        let (n1, s1) = cneg128(k1);
        (n0, s0, n1, s1)
    }

    /// Endomorphism on the group: zeta(e, u) = (e, eta*u), with
    /// eta = sqrt(-1). On scalars, zeta corresponds to multiplication
    /// by mu.
    fn zeta(self) -> Self {
        Self {
            E: self.E,
            Z: self.Z,
            U: self.U * Self::ETA,
            T: -self.T,
        }
    }

    /// Looks up a point in a window of 16 points, with sign handling
    /// (constant-time): for k in -16..+16, returns k*P where win[i]
    /// holds (i+1)*P.
    fn lookup(win: &[Self; 16], k: i8) -> Self {
        // Split k into its sign s (0xFFFFFFFF for negative) and its
        // absolute value f.
        let s = ((k as i32) >> 8) as u32;
        let f = ((k as u32) ^ s).wrapping_sub(s);
        let mut P = Self::NEUTRAL;
        for i in 0..16 {
            // Values a-b and b-a both have a zero high bit only when
            // a == b; every window entry is touched.
            let j = (i as u32) + 1;
            let w = !(f.wrapping_sub(j) | j.wrapping_sub(f));
            let w = ((w as i32) >> 31) as u32;

            P.E.set_cond(&win[i].E, w);
            P.Z.set_cond(&win[i].Z, w);
            P.U.set_cond(&win[i].U, w);
            P.T.set_cond(&win[i].T, w);
        }

        P.set_condneg(s);
        P
    }

    /// Multiplies this point by a scalar (in place).
    ///
    /// This operation is constant-time with regard to both the point
    /// and the scalar.
    pub fn set_mul(&mut self, n: &Scalar) {
        // Split the scalar with the endomorphism.
        let (n0, s0, n1, s1) = Self::split_mu(n);

        // Compute the 5-bit windows:
        //   win0[i] = (i+1)*sgn(k0)*P
        //   win1[i] = (i+1)*sgn(k1)*zeta(P)
        let mut win0 = [Self::NEUTRAL; 16];
        win0[0] = *self;
        win0[0].set_condneg(s0);
        for i in 1..8 {
            let j = 2 * i;
            win0[j - 1] = win0[i - 1].double();
            win0[j] = win0[j - 1] + win0[0];
        }
        win0[15] = win0[7].double();
        let mut win1 = [Self::NEUTRAL; 16];
        for i in 0..16 {
            win1[i] = win0[i].zeta();
            win1[i].set_condneg(s0 ^ s1);
        }

        // Recode the two half-width scalars into 26 digits each, and
        // process the digits in high-to-low order, both halves sharing
        // each 5-fold doubling.
        let sd0 = recode5_u128(n0);
        let sd1 = recode5_u128(n1);
        *self = Self::lookup(&win0, sd0[25]);
        self.set_add(&Self::lookup(&win1, sd1[25]));
        for i in (0..25).rev() {
            self.set_xdouble(5);
            self.set_add(&Self::lookup(&win0, sd0[i]));
            self.set_add(&Self::lookup(&win1, sd1[i]));
        }
    }

    /// Looks up a point in a window of 16 points in affine extended
    /// coordinates, with sign handling (constant-time).
    fn lookup_affine(win: &[PointAffine; 16], k: i8) -> PointAffine {
        let s = ((k as i32) >> 8) as u32;
        let f = ((k as u32) ^ s).wrapping_sub(s);
        let mut P = PointAffine::NEUTRAL;
        for i in 0..16 {
            let j = (i as u32) + 1;
            let w = !(f.wrapping_sub(j) | j.wrapping_sub(f));
            let w = ((w as i32) >> 31) as u32;

            P.e.set_cond(&win[i].e, w);
            P.u.set_cond(&win[i].u, w);
            P.t.set_cond(&win[i].t, w);
        }

        P.u.set_condneg(s);
        P
    }

    /// Sets this point to the product of the conventional generator by
    /// the provided scalar.
    ///
    /// This operation is constant-time. It is faster than multiplying
    /// `Self::BASE` with the generic multiplication, thanks to four
    /// precomputed windows over multiples of the generator.
    pub fn set_mulgen(&mut self, n: &Scalar) {
        // Recode the scalar; since r < 2^254, digit 51 is always zero
        // and 51 digits are processed, split into four chunks of 13
        // digits (12 for the top one).
        let sd = n.recode5();

        *self = Self::from_affine(
            &Self::lookup_affine(&PRECOMP_G, sd[12]));
        self.set_add_affine(
            &Self::lookup_affine(&PRECOMP_G65, sd[25]));
        self.set_add_affine(
            &Self::lookup_affine(&PRECOMP_G130, sd[38]));

        for i in (0..12).rev() {
            self.set_xdouble(5);
            self.set_add_affine(
                &Self::lookup_affine(&PRECOMP_G, sd[i]));
            self.set_add_affine(
                &Self::lookup_affine(&PRECOMP_G65, sd[i + 13]));
            self.set_add_affine(
                &Self::lookup_affine(&PRECOMP_G130, sd[i + 26]));
            self.set_add_affine(
                &Self::lookup_affine(&PRECOMP_G195, sd[i + 39]));
        }
    }

    /// Creates a point by multiplying the conventional generator by the
    /// provided scalar.
    ///
    /// This operation is constant-time.
    #[inline]
    pub fn mulgen(n: &Scalar) -> Self {
        let mut P = Self::NEUTRAL;
        P.set_mulgen(n);
        P
    }

    /// Given the 128-bit unsigned integer `u` and the scalar `v`, sets
    /// this point to `u*self + v*B` (with `B` being the conventional
    /// generator). This supports signature verification.
    ///
    /// THIS FUNCTION IS NOT CONSTANT-TIME; it shall be used only with
    /// public data.
    pub fn set_mul128_add_mulgen_vartime(&mut self, u: u128, v: &Scalar) {
        // Recode the integer and the scalar in 5-bit wNAF. The digits
        // of v are consumed in two halves, split at position 130 so
        // that the high half maps onto the (2^130)*G window.
        let sdu = recode_wnaf_u128(u);
        let sdv = v.recode_wnaf();

        // wNAF window for the current point: win[i] = (2*i+1)*self.
        let mut win = [Self::NEUTRAL; 8];
        let Q = self.double();
        win[0] = *self;
        for i in 1..8 {
            win[i] = win[i - 1] + Q;
        }

        let mut zz = true;
        let mut ndbl = 0u32;
        for i in (0..130).rev() {
            // One more pending doubling.
            ndbl += 1;

            // Get the digits at this position; on all-zeros, just loop.
            let e1 = sdu[i];
            let e2 = sdv[i];
            let e3 = if i < 126 { sdv[i + 130] } else { 0 };
            if ((e1 as u32) | (e2 as u32) | (e3 as u32)) == 0 {
                continue;
            }

            // Flush the pending doublings, unless no point has been
            // accumulated yet.
            if zz {
                *self = Self::NEUTRAL;
                zz = false;
            } else {
                self.set_xdouble(ndbl);
            }
            ndbl = 0u32;

            // Process the digits.
            if e1 != 0 {
                if e1 > 0 {
                    self.set_add(&win[e1 as usize >> 1]);
                } else {
                    self.set_sub(&win[(-e1) as usize >> 1]);
                }
            }
            if e2 != 0 {
                if e2 > 0 {
                    self.set_add_affine(&PRECOMP_G[e2 as usize - 1]);
                } else {
                    self.set_sub_affine(&PRECOMP_G[(-e2) as usize - 1]);
                }
            }
            if e3 != 0 {
                if e3 > 0 {
                    self.set_add_affine(&PRECOMP_G130[e3 as usize - 1]);
                } else {
                    self.set_sub_affine(&PRECOMP_G130[(-e3) as usize - 1]);
                }
            }
        }

        if zz {
            *self = Self::NEUTRAL;
        } else {
            if ndbl > 0 {
                self.set_xdouble(ndbl);
            }
        }
    }

    /// Given the 128-bit unsigned integer `u` and the scalar `v`,
    /// returns `u*self + v*B` (with `B` being the conventional
    /// generator).
    ///
    /// THIS FUNCTION IS NOT CONSTANT-TIME; it shall be used only with
    /// public data.
    #[inline(always)]
    pub fn mul128_add_mulgen_vartime(self, u: u128, v: &Scalar) -> Self {
        let mut R = self;
        R.set_mul128_add_mulgen_vartime(u, v);
        R
    }
}

impl Add<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: Point) {
        self.set_add(&other);
    }
}

impl AddAssign<&Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: &Point) {
        self.set_add(other);
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Scalar) -> Point {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&Scalar> for Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Scalar) -> Point {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<Scalar> for &Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Scalar) -> Point {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&Scalar> for &Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Scalar) -> Point {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<Scalar> for Point {
    #[inline(always)]
    fn mul_assign(&mut self, other: Scalar) {
        self.set_mul(&other);
    }
}

impl MulAssign<&Scalar> for Point {
    #[inline(always)]
    fn mul_assign(&mut self, other: &Scalar) {
        self.set_mul(other);
    }
}

impl Mul<Point> for Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Point) -> Point {
        let mut r = other;
        r.set_mul(&self);
        r
    }
}

impl Mul<&Point> for Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Point) -> Point {
        let mut r = *other;
        r.set_mul(&self);
        r
    }
}

impl Mul<Point> for &Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Point) -> Point {
        let mut r = other;
        r.set_mul(self);
        r
    }
}

impl Mul<&Point> for &Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Point) -> Point {
        let mut r = *other;
        r.set_mul(self);
        r
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: Point) {
        self.set_sub(&other);
    }
}

impl SubAssign<&Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: &Point) {
        self.set_sub(other);
    }
}

// ========================================================================

/// A jq255e private key.
///
/// It wraps around a secret non-zero scalar, and also contains a copy
/// of the public key.
#[derive(Clone, Copy, Debug)]
pub struct PrivateKey {
    sec: Scalar,                // secret scalar
    pub public_key: PublicKey,  // public key
}

/// A jq255e public key.
///
/// It wraps around a non-neutral group element, together with the
/// 32-byte encoding of that element; keeping the encoded form makes
/// re-encoding free, and the bytes a public key was decoded from are
/// authoritative. If the fields are modified, the two values MUST
/// match.
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    pub point: Point,
    pub encoded: [u8; 32],
}

impl PrivateKey {

    /// Generates a new private key from a cryptographically secure RNG.
    pub fn generate<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        loop {
            let mut tmp = [0u8; 32];
            rng.fill_bytes(&mut tmp);
            let sec = Scalar::decode_reduce(&tmp);
            if sec.iszero() == 0 {
                return Self::from_scalar(&sec);
            }
        }
    }

    /// Derives a private key deterministically from a seed.
    ///
    /// The seed must come with at least 128 bits of entropy. The seed
    /// bytes are hashed with BLAKE2s, and the output is interpreted as
    /// an integer and reduced modulo r; in the wildly improbable case
    /// that the result is zero, the scalar 1 is used instead.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut sh = Blake2s256::new();
        sh.update(seed);
        let mut sec = Scalar::decode_reduce(&sh.finalize());
        sec.set_cond(&Scalar::ONE, sec.iszero());
        Self::from_scalar(&sec)
    }

    /// Instantiates a private key from a secret scalar.
    ///
    /// If the provided scalar is zero, then a panic is triggered.
    pub fn from_scalar(sec: &Scalar) -> Self {
        assert!(sec.iszero() == 0);
        let point = Point::mulgen(sec);
        let encoded = point.encode();
        Self { sec: *sec, public_key: PublicKey { point, encoded } }
    }

    /// Instantiates a private key by decoding it from bytes.
    ///
    /// The source must have length exactly 32 bytes and encode a
    /// non-zero scalar; otherwise, `None` is returned.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (sec, mut ok) = Scalar::decode_ct(buf);
        ok &= !sec.iszero();
        if ok != 0 {
            Some(Self::from_scalar(&sec))
        } else {
            None
        }
    }

    /// Encodes this private key into exactly 32 bytes.
    ///
    /// This encodes the secret scalar.
    pub fn encode(self) -> [u8; 32] {
        self.sec.encode()
    }

    /// Encodes this key pair into exactly 64 bytes (the private key,
    /// then the public key).
    pub fn encode_keypair(self) -> [u8; 64] {
        let mut r = [0u8; 64];
        r[0..32].copy_from_slice(&self.sec.encode());
        r[32..64].copy_from_slice(&self.public_key.encoded);
        r
    }

    /// Decodes a 64-byte key pair (private key, then public key).
    ///
    /// The private half must be a valid non-zero scalar, and the public
    /// half must be the encoding of the public key matching that
    /// scalar; otherwise, `None` is returned.
    pub fn decode_keypair(buf: &[u8]) -> Option<Self> {
        if buf.len() != 64 {
            return None;
        }
        let sk = Self::decode(&buf[0..32])?;
        if sk.public_key.encoded[..] != buf[32..64] {
            return None;
        }
        Some(sk)
    }

    /// Signs a message with this private key.
    ///
    /// The message is provided as `data`. If `data` is raw message
    /// bytes, then `hash_name` shall be an empty string; if `data` is
    /// instead a hash value computed over the message, then `hash_name`
    /// identifies the hash function (see the `HASHNAME_*` constants on
    /// `Point`: the formal name of the function, in lowercase and
    /// without punctuation).
    ///
    /// The per-signature secret scalar is derived deterministically;
    /// signing the same message twice with the same key yields the same
    /// signature.
    pub fn sign(self, hash_name: &str, data: &[u8]) -> [u8; 48] {
        self.sign_seeded(&[0u8; 0], hash_name, data)
    }

    /// Signs a message with this private key, with an RNG-provided
    /// seed.
    ///
    /// Message and hash-name rules are those of `sign()`. The provided
    /// `rng` contributes a 32-byte seed to the derivation of the
    /// per-signature secret scalar; signatures remain safe even if the
    /// `rng` turns out to be flawed and fully predictable.
    pub fn sign_randomized<T: CryptoRng + RngCore>(self, rng: &mut T,
        hash_name: &str, data: &[u8]) -> [u8; 48]
    {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        self.sign_seeded(&seed, hash_name, data)
    }

    /// Signs a message with this private key, with an explicit seed.
    ///
    /// Message and hash-name rules are those of `sign()`. The seed is
    /// mixed into the derivation of the per-signature secret scalar; an
    /// empty seed yields fully deterministic signatures, and a varying
    /// seed (not necessarily random or secret) improves resistance to
    /// physical fault attacks.
    pub fn sign_seeded(self, seed: &[u8], hash_name: &str, data: &[u8])
        -> [u8; 48]
    {
        let k = self.derive_k(seed, hash_name, data);
        let R = Point::mulgen(&k);
        let cb = make_challenge(&R, &self.public_key.encoded, hash_name, data);

        // s = k + c*sec, with the challenge c interpreted as a 128-bit
        // integer (unsigned little-endian convention).
        let c = Scalar::from_u128(u128::from_le_bytes(cb));
        let s = c * self.sec + k;

        let mut sig = [0u8; 48];
        sig[..16].copy_from_slice(&cb);
        sig[16..].copy_from_slice(&s.encode());
        sig
    }

    /// Derives the per-signature secret scalar.
    ///
    /// The scalar is a BLAKE2s hash of the encoded private key, the
    /// encoded public key, the seed (prefixed with its length over 8
    /// bytes, little-endian), and the message framing; the 32-byte
    /// output is reduced modulo r, which induces a negligible bias
    /// since r is close enough to a power of 2.
    fn derive_k(self, seed: &[u8], hash_name: &str, data: &[u8]) -> Scalar {
        let mut sh = Blake2s256::new();
        sh.update(&self.sec.encode());
        sh.update(&self.public_key.encoded);
        sh.update(&(seed.len() as u64).to_le_bytes());
        sh.update(seed);
        absorb_message(&mut sh, hash_name, data);
        Scalar::decode_reduce(&sh.finalize())
    }

    /// ECDH key exchange.
    ///
    /// This combines the private key with the provided peer public key
    /// (encoded) into a 32-byte shared key. The process fails if the
    /// `peer_pk` slice does not have length exactly 32 bytes, does not
    /// encode a valid jq255e element, or encodes the neutral element.
    /// On success, the shared key is returned along with 0xFFFFFFFF; on
    /// failure, an alternate key (which outsiders cannot guess, and
    /// which is deterministic with regard to the received bytes) is
    /// returned along with 0x00000000.
    ///
    /// When the `peer_pk` slice has length exactly 32 bytes, outsiders
    /// cannot learn through timing-based side channels whether the
    /// process succeeded or failed.
    pub fn ECDH(self, peer_pk: &[u8]) -> ([u8; 32], u32) {
        // Decode the peer point; the neutral element is not an
        // acceptable public key.
        let mut Q = Point::NEUTRAL;
        let mut ok = Q.set_decode(peer_pk);
        ok &= !Q.isneutral();

        // Pre-key: the encoding of sec*Q on success. On failure, the
        // encoding of our own secret scalar is selected instead, so
        // that the output is unguessable by outsiders while remaining
        // deterministic with regard to the received bytes.
        let pre = select32(&self.sec.encode(), &(self.sec * Q).encode(), ok);

        // Key derivation: hash the two public keys in lexicographic
        // order, then the domain byte, then the pre-key.
        let mut sh = Blake2s256::new();
        if peer_pk.len() == 32 {
            let mut peer = [0u8; 32];
            peer.copy_from_slice(peer_pk);
            let first = lex_lt32(&self.public_key.encoded, &peer);
            sh.update(&select32(&peer, &self.public_key.encoded, first));
            sh.update(&select32(&self.public_key.encoded, &peer, first));
        } else {
            // A wrong-length peer key is already distinguishable from
            // a success through the memory access pattern; no ordering
            // is needed on this path.
            sh.update(&self.public_key.encoded);
            sh.update(peer_pk);
        }
        sh.update(&[DOM_ECDH_BAD
            ^ ((ok as u8) & (DOM_ECDH_BAD ^ DOM_ECDH_OK))]);
        sh.update(&pre);

        let mut key = [0u8; 32];
        key.copy_from_slice(&sh.finalize());
        (key, ok)
    }
}

impl PublicKey {

    /// Creates an instance from a group element.
    ///
    /// A panic is triggered if the point is the neutral.
    pub fn from_point(point: &Point) -> Self {
        assert!(point.isneutral() == 0);
        Self { point: *point, encoded: point.encode() }
    }

    /// Decodes the provided bytes as a public key.
    ///
    /// The source must have length exactly 32 bytes and encode a valid,
    /// non-neutral group element; otherwise, `None` is returned.
    pub fn decode(buf: &[u8]) -> Option<PublicKey> {
        let point = Point::decode(buf)?;
        if point.isneutral() != 0 {
            return None;
        }
        let mut encoded = [0u8; 32];
        encoded[..].copy_from_slice(&buf[0..32]);
        Some(Self { point, encoded })
    }

    /// Encodes this public key into exactly 32 bytes.
    ///
    /// This simply returns the contents of the `encoded` field.
    pub fn encode(self) -> [u8; 32] {
        self.encoded
    }

    /// Verifies a signature on a message against this public key.
    ///
    /// The message and hash-name rules are those of
    /// `PrivateKey::sign()`.
    ///
    /// Note: this function is not constant-time; it assumes that the
    /// public key and signature value are public data.
    pub fn verify(self, sig: &[u8], hash_name: &str, data: &[u8]) -> bool {
        // A signature is the 16-byte challenge followed by a canonical
        // scalar; anything else is invalid. Only public data is
        // handled here, so the Option-based scalar decoder is fine.
        if sig.len() != 48 {
            return false;
        }
        let s = match Scalar::decode(&sig[16..48]) {
            Some(s) => s,
            None => return false,
        };
        let c = u128::from_le_bytes(*<&[u8; 16]>::try_from(&sig[0..16]).unwrap());

        // R = s*G - c*Q; the signature is valid if the challenge
        // recomputed from R matches the received one.
        let R = (-self.point).mul128_add_mulgen_vartime(c, &s);
        make_challenge(&R, &self.encoded, hash_name, data)[..] == sig[0..16]
    }
}

impl Point {
    pub const HASHNAME_SHA224:      &'static str = "sha224";
    pub const HASHNAME_SHA256:      &'static str = "sha256";
    pub const HASHNAME_SHA384:      &'static str = "sha384";
    pub const HASHNAME_SHA512:      &'static str = "sha512";
    pub const HASHNAME_SHA512_224:  &'static str = "sha512224";
    pub const HASHNAME_SHA512_256:  &'static str = "sha512256";
    pub const HASHNAME_SHA3_224:    &'static str = "sha3224";
    pub const HASHNAME_SHA3_256:    &'static str = "sha3256";
    pub const HASHNAME_SHA3_384:    &'static str = "sha3384";
    pub const HASHNAME_SHA3_512:    &'static str = "sha3512";
    pub const HASHNAME_BLAKE2B:     &'static str = "blake2b";
    pub const HASHNAME_BLAKE2S:     &'static str = "blake2s";
    pub const HASHNAME_BLAKE3:      &'static str = "blake3";
}

/// Computes the 16-byte challenge of a signature, from the
/// per-signature point R, the encoded public key, and the (possibly
/// hashed) message data; `hash_name` follows the rules of
/// `PrivateKey::sign()`. This function backs both signature generation
/// and signature verification.
fn make_challenge(R: &Point, enc_pk: &[u8; 32], hash_name: &str, data: &[u8])
    -> [u8; 16]
{
    let mut sh = Blake2s256::new();
    sh.update(&R.encode());
    sh.update(enc_pk);
    absorb_message(&mut sh, hash_name, data);
    let mut c = [0u8; 16];
    c.copy_from_slice(&sh.finalize()[..16]);
    c
}

// Domain-separation bytes, shared by the signature and key-exchange
// schemes.
const DOM_SIGN_RAW: u8 = 0x52;
const DOM_SIGN_HASHED: u8 = 0x48;
const DOM_ECDH_OK: u8 = 0x53;
const DOM_ECDH_BAD: u8 = 0x46;

/// Absorbs the message framing into a running hash: the domain byte
/// (raw or pre-hashed message), the hash name with its terminating
/// zero when applicable, then the message data.
fn absorb_message(sh: &mut Blake2s256, hash_name: &str, data: &[u8]) {
    if hash_name.len() == 0 {
        sh.update(&[DOM_SIGN_RAW]);
    } else {
        sh.update(&[DOM_SIGN_HASHED]);
        sh.update(hash_name.as_bytes());
        sh.update(&[0x00u8]);
    }
    sh.update(data);
}

// Constant-time selection of one of two 32-byte strings: b0 is
// returned if ctl == 0x00000000, b1 if ctl == 0xFFFFFFFF.
fn select32(b0: &[u8; 32], b1: &[u8; 32], ctl: u32) -> [u8; 32] {
    let m = ctl as u8;
    let mut r = [0u8; 32];
    for i in 0..32 {
        r[i] = b0[i] ^ (m & (b0[i] ^ b1[i]));
    }
    r
}

// Constant-time lexicographic order on 32-byte strings: returned value
// is 0xFFFFFFFF if a sorts strictly before b, 0x00000000 otherwise.
// The bytes are scanned backwards with a borrow, so that the first
// differing byte overrides the outcome of all the bytes after it.
fn lex_lt32(a: &[u8; 32], b: &[u8; 32]) -> u32 {
    let mut bw = 0u32;
    let mut i = 32;
    while i > 0 {
        i -= 1;
        bw = (a[i] as u32).wrapping_sub((b[i] as u32) + bw) >> 31;
    }
    bw.wrapping_neg()
}

// ========================================================================

// Hardcoded multiples of the generator G, and of (2^65)*G, (2^130)*G
// and (2^195)*G, used to speed up mulgen(). The points are stored in
// affine extended format (e, u, u^2).

/// A point in affine extended coordinates (e, u, u^2).
#[derive(Clone, Copy, Debug)]
struct PointAffine {
    e: GF255e,
    u: GF255e,
    t: GF255e,
}

impl PointAffine {

    const NEUTRAL: Self = Self {
        e: GF255e::ONE,
        u: GF255e::ZERO,
        t: GF255e::ZERO,
    };
}

// Points i*G for i = 1 to 16, affine extended format
static PRECOMP_G: [PointAffine; 16] = [
    // G * 1
    PointAffine {
        e: GF255e::w64be(0x0000000000000000, 0x0000000000000000,
                         0x0000000000000000, 0x0000000000000003),
        u: GF255e::w64be(0x0000000000000000, 0x0000000000000000,
                         0x0000000000000000, 0x0000000000000001),
        t: GF255e::w64be(0x0000000000000000, 0x0000000000000000,
                         0x0000000000000000, 0x0000000000000001),
    },
    // G * 2
    PointAffine {
        e: GF255e::w64be(0x1A1F58D0FAC687D6, 0x343EB1A1F58D0FAC,
                         0x687D6343EB1A1F58, 0xD0FAC687D6342FD1),
        u: GF255e::w64be(0x36DB6DB6DB6DB6DB, 0x6DB6DB6DB6DB6DB6,
                         0xDB6DB6DB6DB6DB6D, 0xB6DB6DB6DB6D97A3),
        t: GF255e::w64be(0x414E5E0A72F05397, 0x829CBC14E5E0A72F,
                         0x05397829CBC14E5E, 0x0A72F05397827791),
    },
    // G * 3
    PointAffine {
        e: GF255e::w64be(0x6E6BA44DDB3919FD, 0x4D5065C0BA270925,
                         0xAD8273027F0E7D48, 0x26AFA803D61A9E2F),
        u: GF255e::w64be(0x12358E75D30336A0, 0xAB617909A3E20224,
                         0x6B1CEBA6066D4156, 0xC2F21347C4043E79),
        t: GF255e::w64be(0x7287BBB2DC59141C, 0x0509961D71E284EF,
                         0xC58EF652F0485A50, 0xC4FAF5442BDDB3C7),
    },
    // G * 4
    PointAffine {
        e: GF255e::w64be(0x0F1371769561D944, 0x96E4BB9C95BDA924,
                         0xCBFF478EE825BA04, 0xBCE7BEB9F8390C16),
        u: GF255e::w64be(0x7A47C8BB65A29F71, 0x130DFA47C8BB65A2,
                         0x9F71130DFA47C8BB, 0x65A29F71130DB4AD),
        t: GF255e::w64be(0x2375E8119918E929, 0x03ADCBE22101F311,
                         0x853223D7F44E59F2, 0x4D0A213B4402088D),
    },
    // G * 5
    PointAffine {
        e: GF255e::w64be(0x3A3E1251980D6493, 0x74304444BCDB09C0,
                         0x1BD8155773C41197, 0xD23D2C8BE875C86A),
        u: GF255e::w64be(0x185034D250F768D7, 0x5866F1F8B35FB70C,
                         0xE40F8B8BC44A0C63, 0x1F2B6B08DA5B43EE),
        t: GF255e::w64be(0x3E3560E7BB5DF4DA, 0x8982206A724B43CC,
                         0xE00C1E20C1C66FF4, 0xC91927493D361051),
    },
    // G * 6
    PointAffine {
        e: GF255e::w64be(0x124FA9DF5844C804, 0x1673C5B96A6D2E2A,
                         0xC712074807471E77, 0x643AD390229AD5F2),
        u: GF255e::w64be(0x4FA6D8B6AFDDC92B, 0xA1AB0B9D98F35F00,
                         0xBB4A410D263610A7, 0x0BD0C5F1F91D6B18),
        t: GF255e::w64be(0x34F3562FDA88753E, 0xD7991971E94A460E,
                         0x76ED99CCAEE9D26F, 0x355D1614AEB11ACD),
    },
    // G * 7
    PointAffine {
        e: GF255e::w64be(0x4C5C3FA382AAF7AC, 0xC36F69694BFC77E7,
                         0xD86308C5232C88D0, 0xE8D6CBC7678229FB),
        u: GF255e::w64be(0x6DD8CDFA520AED5A, 0x350914B3EE64BF7F,
                         0xB885C9D1EB4CC9E1, 0x7EB52414159EF4EA),
        t: GF255e::w64be(0x56861F4D0A217C1C, 0x0957AB7A60AC1520,
                         0x818C73930C2A0899, 0x59DAD0E634C75544),
    },
    // G * 8
    PointAffine {
        e: GF255e::w64be(0x2C922B2CB2A6146C, 0x86AD97E42FD5BA49,
                         0xAD881FFB515E9113, 0x4E11C11353187B28),
        u: GF255e::w64be(0x4766315BFA2E63E5, 0xC54D8F471F778CE9,
                         0x0706B8B95DEDFC87, 0x99DA8C93EB513A8B),
        t: GF255e::w64be(0x532698BCB811270A, 0xF3C520B8FCA311FD,
                         0x89B68A9C8B0077A8, 0x4D9B8F5639729F9A),
    },
    // G * 9
    PointAffine {
        e: GF255e::w64be(0x2289F3ABFA293050, 0x55B6D3E8852C1B0B,
                         0x675E5BCC38AA1784, 0x6FB66DF6B52FBCC4),
        u: GF255e::w64be(0x6957FDFF940E4159, 0x498C7D8B01F68C40,
                         0x27E9084D132CCAC1, 0xA84A27A9D0A08E61),
        t: GF255e::w64be(0x431DA1A672CB2D3C, 0x56244B8A32B42796,
                         0x76CA668F88C812F9, 0x8D2F2DE6815F2EFF),
    },
    // G * 10
    PointAffine {
        e: GF255e::w64be(0x30290CF961B06E3A, 0xAF5539730762C505,
                         0x803FC1C6AAD5CD46, 0x8EB44683ACC048BE),
        u: GF255e::w64be(0x7B37113C916F803C, 0x4AA37581A9B6AD5E,
                         0x55838146CC140A37, 0x3AA366BBB889903E),
        t: GF255e::w64be(0x252DC97C189ECFD9, 0x9EDDA370E828C438,
                         0xC70EAC518AE5C163, 0xD912EBC4E1C6283E),
    },
    // G * 11
    PointAffine {
        e: GF255e::w64be(0x467C84CA2424A548, 0x6F385F29F643AF23,
                         0x09DF0EB0A3919A65, 0x38A7E99599D93A3B),
        u: GF255e::w64be(0x158521078CD1F209, 0x8C133221E772B327,
                         0x65CF6B9CAB741725, 0xA9A8911D864E7F82),
        t: GF255e::w64be(0x5D4A07E9BC1F036B, 0xC3FC1F026C5406EA,
                         0xFAE4DC5553E938EB, 0x41583C9A8F92D685),
    },
    // G * 12
    PointAffine {
        e: GF255e::w64be(0x66FF84AF5A9F7719, 0x4B3B87C8238DA4B1,
                         0x06E6D0CF8DC7807E, 0xA49A13F883BF7B93),
        u: GF255e::w64be(0x67E65CF7E1787343, 0x53EF35932E1297EB,
                         0xFB902D6A3EF5D5E0, 0xE4C1C725087640AA),
        t: GF255e::w64be(0x2213A3D93959DA85, 0x4742F3CB3DEB52CB,
                         0xAE5BB5318E506208, 0x4203ACE2FF9309B4),
    },
    // G * 13
    PointAffine {
        e: GF255e::w64be(0x6E7036BE9D4C885B, 0x3E7BB13DFFB6AD2D,
                         0x22587604B5D2A716, 0xA99622782ED04723),
        u: GF255e::w64be(0x17F96D76306A3580, 0x913200FCCD1396D8,
                         0x67D0394FF2BFCB98, 0x90F8839881061965),
        t: GF255e::w64be(0x0E2364672DB22F61, 0x028EBB02AB0AE384,
                         0xE02396E9E43361F5, 0xF1F0EC984099DC93),
    },
    // G * 14
    PointAffine {
        e: GF255e::w64be(0x74C367ABF8A08989, 0x069708CC706DD30D,
                         0xA59973DD5CB6D116, 0xC6C60BB30F2521F0),
        u: GF255e::w64be(0x42C8034547A6A04A, 0x7C6DAA970635E1C0,
                         0xA016A6890D77E4E6, 0x05B49673D2AC4172),
        t: GF255e::w64be(0x0C4AC28DE6AF9B7D, 0xE13C4A7639E5E234,
                         0x41B211E505C5A659, 0x0266FAA875DEF4DC),
    },
    // G * 15
    PointAffine {
        e: GF255e::w64be(0x1110D92782C497CD, 0x257B5FE5EE7E01D9,
                         0x626226C09EA21055, 0x543AA085E86224A7),
        u: GF255e::w64be(0x2F4CA2B6265D7456, 0x4AD1FA649FAE1F07,
                         0x705D12571BF74984, 0x7FFA4AF719120727),
        t: GF255e::w64be(0x0CCF7FF00D563132, 0xCC7CCE327009957D,
                         0x54BD0CFFC1B29AC7, 0xB111F1B5F7C6525E),
    },
    // G * 16
    PointAffine {
        e: GF255e::w64be(0x676824C9A296F053, 0x03D9F770D7F5F415,
                         0xF8FAE043DB5120DD, 0x97DA44A024F31B2E),
        u: GF255e::w64be(0x251A19311A6DB76E, 0x706D8A1F41E90ED8,
                         0x15064C9132683177, 0x2D808316E1227049),
        t: GF255e::w64be(0x2C8D5EC4B15D04AE, 0x7C16D8FF7BF95128,
                         0x0DB49CC10C6EE0A8, 0x95191DCA9E05F91A),
    },
];

// Points i*(2^65)*G for i = 1 to 16, affine extended format
static PRECOMP_G65: [PointAffine; 16] = [
    // (2^65)*G * 1
    PointAffine {
        e: GF255e::w64be(0x6CE0B77B634A53B5, 0xAB3BAC1AB41DD08C,
                         0x4629856EF94734AB, 0x886FF6278E08211F),
        u: GF255e::w64be(0x1B313D36A8A7626E, 0x395D2181E50A4384,
                         0x415893549DE223FF, 0xAD5F8FBFC596FA71),
        t: GF255e::w64be(0x6E78594A21A5AAD2, 0x48E8393CFF13EC0E,
                         0x222B7C0CD599D9CB, 0x17E71DD1EB9D832B),
    },
    // (2^65)*G * 2
    PointAffine {
        e: GF255e::w64be(0x7521310F8DD93292, 0x8AA629F4CE6C2582,
                         0xE4584C1E3417B3E6, 0x111922C72716A209),
        u: GF255e::w64be(0x0BE56F359985D602, 0x5CD27D909976BFE7,
                         0x4CA4C049A5E65CF4, 0x2B7C2F71889E3F33),
        t: GF255e::w64be(0x40534B306985620E, 0x6C805A5DABAECD17,
                         0xC9233D8219ECC70E, 0xC699D8CD1BE2027B),
    },
    // (2^65)*G * 3
    PointAffine {
        e: GF255e::w64be(0x390940AD8D0885BF, 0x7B11CD4B6C9CC38D,
                         0x5A40972FCDA92791, 0x33F6746ED6A45A0E),
        u: GF255e::w64be(0x098D3AB90B09C2B4, 0x0519A68AAB4295EB,
                         0xAF41508342D7801D, 0x4A504A5DED61CB7F),
        t: GF255e::w64be(0x41A590927B5F6FD7, 0x0696A39545C181DE,
                         0x92D534263FFE78C9, 0xA06F9DAD59A456C6),
    },
    // (2^65)*G * 4
    PointAffine {
        e: GF255e::w64be(0x10D60536FA934AC1, 0xBD9A0206C0DF4A3B,
                         0xEADD9BBED6E7A570, 0x6C4E581C32A76153),
        u: GF255e::w64be(0x3540EB32AA6E2C23, 0x3B845EF3AFAD3191,
                         0x5A0FCD3AE1067F08, 0xD98BB32E81B4D89F),
        t: GF255e::w64be(0x6470D11011381CFF, 0x893FFC0CA3CB3C98,
                         0x4563C7AD47CE6A39, 0x1D5909B1A76336E1),
    },
    // (2^65)*G * 5
    PointAffine {
        e: GF255e::w64be(0x742236A2B9985165, 0x9AE9B0736E87C51E,
                         0x74427A8818227B9E, 0x648443E48591C275),
        u: GF255e::w64be(0x4B36B3BE374E74CB, 0x9DD36D925FB45810,
                         0x695C5863633AC0BB, 0xDB2EB15DD80EB7AB),
        t: GF255e::w64be(0x7563AAD0685E3293, 0x52217A6F3280BAD3,
                         0xBCF6E190CBC99BC3, 0x3B02030497F19A1B),
    },
    // (2^65)*G * 6
    PointAffine {
        e: GF255e::w64be(0x637BA56A42C4587D, 0x9318569D6BC1A5D5,
                         0x748A8C77D6669E2A, 0xD8AD585D0C14DC83),
        u: GF255e::w64be(0x143CF8A090ACB085, 0x0C0776C9F6ED32DE,
                         0x763067186E58108F, 0x2473D6DB1425C001),
        t: GF255e::w64be(0x2C301B6BCC1F09C1, 0x3A3345F98418DD26,
                         0xDE3B04BA9040AF87, 0x73CDF9E505579C38),
    },
    // (2^65)*G * 7
    PointAffine {
        e: GF255e::w64be(0x5C780EAA96A1BB91, 0x1094A46B6F56FA43,
                         0x0E16666D8273B21D, 0xE14526AA9D051B56),
        u: GF255e::w64be(0x7EE7B8C1D61C83DD, 0xBAC06821F2BF788C,
                         0x33088969E8FB612B, 0xE95E218127D26209),
        t: GF255e::w64be(0x72AB912B16C33383, 0x617E1C89A1A25303,
                         0x624FFDB35FA59240, 0x0474E6971F3502A9),
    },
    // (2^65)*G * 8
    PointAffine {
        e: GF255e::w64be(0x6B3865BE473732FF, 0xE95C514D17DD5343,
                         0xD6C684EDF26076D9, 0xE800A094D67CC3ED),
        u: GF255e::w64be(0x235872299B5B142E, 0x34DFEFB2A6C39FFC,
                         0x3260DA08A5D337CB, 0x4C033B2301944CB8),
        t: GF255e::w64be(0x2961CB37E34C35A1, 0x7B1EF0DEBBFAA0EE,
                         0x08AA04266FC23C15, 0x439324FCD04090FB),
    },
    // (2^65)*G * 9
    PointAffine {
        e: GF255e::w64be(0x32138C48916B15C7, 0xF8815AEC9C0105B4,
                         0xDD56EA4894B8F6C1, 0xE7847250A19EF549),
        u: GF255e::w64be(0x07DF0CC5D7C9E88D, 0xADD356D1CA14E352,
                         0x53193A718D75331F, 0x6742B67C6086DF92),
        t: GF255e::w64be(0x713B783B3766078D, 0x0D31937E03003B68,
                         0x643500CDE6FADF0D, 0x5C9C41C3B8594D9B),
    },
    // (2^65)*G * 10
    PointAffine {
        e: GF255e::w64be(0x5C9329786A90B198, 0x83A3CE92BEFEC84E,
                         0x4FD5981D24E25FBE, 0x25F90BCEB299A5D0),
        u: GF255e::w64be(0x79E82E420C17C457, 0x3F6064CC7E287D25,
                         0x476A1D01EBBFE2BB, 0x7982C54051C4DF08),
        t: GF255e::w64be(0x1813C6ED70DAFA38, 0x27984BF87B6F0AD1,
                         0x73165189E2EF99F8, 0x8CE01EA2E8B54114),
    },
    // (2^65)*G * 11
    PointAffine {
        e: GF255e::w64be(0x4515BBA1AEAFD937, 0x8D0D667D16879C64,
                         0x383BFB84CDDA791E, 0x7CAD33020884167D),
        u: GF255e::w64be(0x3CC8BC3168B5A376, 0xB97069DD65593890,
                         0x854CBABF2D02F041, 0x00FF128613403E58),
        t: GF255e::w64be(0x058DA5FED462C39D, 0x206DA25D9FE2783E,
                         0xF8F2F98E5BEF4381, 0xC303EBB8F65D98BA),
    },
    // (2^65)*G * 12
    PointAffine {
        e: GF255e::w64be(0x3E658213D95C2805, 0x68592F914D7E5167,
                         0x4F20F40E6D616E5E, 0x7118E3577FDDE52D),
        u: GF255e::w64be(0x51CBB2B65B751D79, 0x23447D42F7311FA5,
                         0xA50B5985163B51DB, 0x3688782C6588D284),
        t: GF255e::w64be(0x60570F440CB85A8A, 0x15EB451E43025B6A,
                         0xDC1EF290D77A0305, 0x877FB541EB5BEC17),
    },
    // (2^65)*G * 13
    PointAffine {
        e: GF255e::w64be(0x40255DC81F644B88, 0x3CA545A989E728B3,
                         0x0DAC5E2EBE8D1017, 0xBF9758CD45295FBE),
        u: GF255e::w64be(0x052051EDAFC87131, 0xAA36C89F8D5B502A,
                         0xFDEE555C9009703F, 0x6AF277E67A9FAA68),
        t: GF255e::w64be(0x50C64067319D2237, 0x0F6D233DC4F2C4BA,
                         0x9B85D45C9AA3A8E1, 0xDED77C4486AAB04C),
    },
    // (2^65)*G * 14
    PointAffine {
        e: GF255e::w64be(0x631EFE8EF7F8E0F4, 0x8E7CF5FB0130A4FF,
                         0x52126D4376848E4E, 0x13D6BB104910DE30),
        u: GF255e::w64be(0x7182E92FA95620EB, 0x214282B022098B86,
                         0xF694DF6ED62219A0, 0x86A494FC08EB56DD),
        t: GF255e::w64be(0x136A3753275A04FE, 0x2F8383D036FFDEC3,
                         0x6E06A2EFFBF79614, 0x8A96C7C2F4D51B6A),
    },
    // (2^65)*G * 15
    PointAffine {
        e: GF255e::w64be(0x09C0518DA671868A, 0xBF13A51C8C3DB802,
                         0x533027C62A4254F0, 0x714774712F78D8DC),
        u: GF255e::w64be(0x406E88577206C6C4, 0xEDF6131ABB08D620,
                         0xAE53B9A6D617E037, 0xD25E4076E71417FD),
        t: GF255e::w64be(0x7A35DA9A106BD4A6, 0x69CB583FD3DDA8C2,
                         0x5FD6950193780470, 0xA7B19AB7E5261DBE),
    },
    // (2^65)*G * 16
    PointAffine {
        e: GF255e::w64be(0x0DA857B86203938C, 0xA8D3D5EBA8F300F7,
                         0x16B77AD03CBC9CE8, 0xB7E60EBD3E152D96),
        u: GF255e::w64be(0x7B916A823C090D35, 0x6CB90D1DDFBA601C,
                         0x1ADF4CFE82DAF6AB, 0x7D37BBB6D0781C73),
        t: GF255e::w64be(0x78BE6830E382EC23, 0xAA62937A623721E5,
                         0x75D85076E298321B, 0xFE1CAB3D1875E47C),
    },
];

// Points i*(2^130)*G for i = 1 to 16, affine extended format
static PRECOMP_G130: [PointAffine; 16] = [
    // (2^130)*G * 1
    PointAffine {
        e: GF255e::w64be(0x06CB9DE70E47A525, 0x9FBB8D6BBC2E0657,
                         0x04DA93AE9BE27159, 0x869B548FDE63606E),
        u: GF255e::w64be(0x1E3A7692F3E02AB1, 0x2B998E19EE40437C,
                         0xEF9A2E5ACD520CD9, 0x6A6F8767CAF58BCB),
        t: GF255e::w64be(0x6383719F46FAC0AE, 0x2FCDD9E72158E8D4,
                         0xC1FEC4C782CB44C6, 0x12DCF83EC50BD952),
    },
    // (2^130)*G * 2
    PointAffine {
        e: GF255e::w64be(0x69E07759E1492E65, 0xE12975DE1B6AA715,
                         0x137941C5ADF1CAD3, 0xB08E5A163D54F276),
        u: GF255e::w64be(0x1DE0359F8936CEEA, 0xAC5EBA85AFFFBCEB,
                         0x64C33BBEA0416456, 0x97643EA7C28259E8),
        t: GF255e::w64be(0x3A18C76587D69006, 0xF83CBCACE081587F,
                         0xC8A5F632AB9427B0, 0xF32ACE061879EA59),
    },
    // (2^130)*G * 3
    PointAffine {
        e: GF255e::w64be(0x7F9D9B87A431B60A, 0x7A63055985C3FC53,
                         0x9225D9C973152188, 0xA69544938C9DC498),
        u: GF255e::w64be(0x62BAF3EF3C842009, 0x4FA122A357313D72,
                         0xC29D0227105E6338, 0x4A8F6858185A63C2),
        t: GF255e::w64be(0x54C34BDF628B654A, 0xC5FE42DEAF33DE83,
                         0x799295C376EF453F, 0x183908457B30E0BC),
    },
    // (2^130)*G * 4
    PointAffine {
        e: GF255e::w64be(0x180B366A5F951D11, 0x6E7804AC92C3BE8D,
                         0x8777F23BA9BA461C, 0x607C64DAEC32F903),
        u: GF255e::w64be(0x37EDC360CFBBEDE2, 0xDCCCD3E1EF458EDC,
                         0xEF697901DA783099, 0x17625F88FFC35397),
        t: GF255e::w64be(0x515891835D836913, 0x62C64632720B072F,
                         0x3E9CC11638D69625, 0x5F7FC0E7A0B94FB0),
    },
    // (2^130)*G * 5
    PointAffine {
        e: GF255e::w64be(0x552022F75A7FF671, 0xA458CD165446291A,
                         0x75DE8E82AE7AD735, 0xB5DA3AAFCEA3BDDC),
        u: GF255e::w64be(0x282E209409ADD692, 0x6DDAC4AB9F7AE17C,
                         0xEB86F24ADFCADBF5, 0x055D6CCDE9EC95DF),
        t: GF255e::w64be(0x775F596632FB79E4, 0x541CE0C53EC38691,
                         0x5AF736BE387EA15D, 0x60BA3A7F6B02F394),
    },
    // (2^130)*G * 6
    PointAffine {
        e: GF255e::w64be(0x5EF32CC1B5A5952D, 0x66ECF43864D273CD,
                         0xA45999A2258AEB93, 0x7C2346E4D222B565),
        u: GF255e::w64be(0x7E4F46D5131E195C, 0xF406AD1FFA1ACD6B,
                         0xB6FA24A8892C93FF, 0xBA9DA77EDCAD7528),
        t: GF255e::w64be(0x3306A93BCA2FEDC4, 0xA68B3F0189B1BA23,
                         0xEB5AD1F6B9C3F150, 0x85A61A2DEA698452),
    },
    // (2^130)*G * 7
    PointAffine {
        e: GF255e::w64be(0x4830813F189FDCFE, 0x5E05B4C4DB704F5D,
                         0xE9BDF6AD5FC76584, 0x70FD1203988BD912),
        u: GF255e::w64be(0x372239482AEC172D, 0x6FB5672D05CA0B5B,
                         0xC1293137B7F95D67, 0x9E343B6FEBEF1413),
        t: GF255e::w64be(0x35266C9ACED8D90B, 0x21A50BBDCF12747E,
                         0xF796A60E89BAA4F4, 0xEDC0FD9628A8DD36),
    },
    // (2^130)*G * 8
    PointAffine {
        e: GF255e::w64be(0x303B08CF4D486C20, 0x5D86EBC524ED9795,
                         0x27214239C8731082, 0x68EE4317D1F7E9CE),
        u: GF255e::w64be(0x4E1CF6CCC48289F4, 0x7BFEE5167F928B59,
                         0x0F110F3BEDDC580B, 0x21232B19EA446499),
        t: GF255e::w64be(0x1DFD019EB5360B34, 0x94AAE19ECEC7737D,
                         0x0834BAF860B519A9, 0x1768F10E04969A8C),
    },
    // (2^130)*G * 9
    PointAffine {
        e: GF255e::w64be(0x4262554CF57EA2FC, 0x2830FF4E2FBB9A1B,
                         0x9259F250CE8DDF8F, 0xFA3E5E1F454A9789),
        u: GF255e::w64be(0x6F671B022C83BC57, 0x24120A75934E696A,
                         0x06134380E791A9D0, 0xFFFA0532A28FF940),
        t: GF255e::w64be(0x03BBDFC635166005, 0x4CA31E3B83E29BB6,
                         0xBB03E3FDF6E447C2, 0x0BE5ED639180368F),
    },
    // (2^130)*G * 10
    PointAffine {
        e: GF255e::w64be(0x776F6C1C18E51DF5, 0x2970E4C0A4D753B1,
                         0xBC5D29A73202BCE6, 0xE1B24ECCE93AA158),
        u: GF255e::w64be(0x64ECAAC0EBA1A511, 0x108D5A1C5EC7534A,
                         0x3EC320448D80BCA7, 0x0EE1B5003B071E37),
        t: GF255e::w64be(0x4BC50BF7A3AC991A, 0x8C125FB0A13E6050,
                         0xD00F9D216D74A32A, 0x10E500131535C514),
    },
    // (2^130)*G * 11
    PointAffine {
        e: GF255e::w64be(0x3622E7BF2A3899E8, 0x2C33E16E5D45B50A,
                         0x31DC4E881F4F95D8, 0x10DC6E263EB40DBD),
        u: GF255e::w64be(0x029CAFA5599B372A, 0xD51C733D4564D8F4,
                         0x0BC92225712BA4D4, 0x6CC3477AD4AB70A1),
        t: GF255e::w64be(0x30F0D235E547B2AD, 0x396102BA67CD8FA6,
                         0x84FD6E87816D4B31, 0x3D63011A6518ADF3),
    },
    // (2^130)*G * 12
    PointAffine {
        e: GF255e::w64be(0x70F7A39B8561373F, 0x3F2A874D3EE0C99A,
                         0xB3E38AE4779DEFF8, 0x5424663282E719F6),
        u: GF255e::w64be(0x6E81F9FA7E661D8D, 0x41F420B5A91ED717,
                         0x960067A5C064493E, 0xCB9E1D5CB7854025),
        t: GF255e::w64be(0x797141D1E37DDC45, 0x4E40C5DCD5EB0507,
                         0xFA5B99758B260B44, 0x96737B3BD1B3FF89),
    },
    // (2^130)*G * 13
    PointAffine {
        e: GF255e::w64be(0x4489AC6538239FA8, 0x87620DD6665947AC,
                         0xC52014D6E24C4D0F, 0x3A2AA626DE84F742),
        u: GF255e::w64be(0x653EE371D2801E6A, 0x59F3D4C5BB3DFDCC,
                         0xF94983893D4AABD6, 0x1A722773E489DDB8),
        t: GF255e::w64be(0x6E8DE13723DFA5BC, 0x3AF72BF16ED6198C,
                         0x336E96DD99975786, 0xA14B344A108032A6),
    },
    // (2^130)*G * 14
    PointAffine {
        e: GF255e::w64be(0x0698AEC8D7B177EE, 0xE23DA12DBE2A729B,
                         0x30C254D3EE996605, 0x5BDDDC0121EA7956),
        u: GF255e::w64be(0x50E1BEE9AC402680, 0x216A1928595E868E,
                         0x96FABF7744D22EC2, 0x460E164D09693F50),
        t: GF255e::w64be(0x52BC8B51287FBDD0, 0x73999AF999779B03,
                         0x3076D3BE8227BB81, 0x2EA3B4425FE17CBC),
    },
    // (2^130)*G * 15
    PointAffine {
        e: GF255e::w64be(0x67C8ED8C09C7A4DA, 0xC7562833544AC635,
                         0x7269B6542711C087, 0x4DE169D233632097),
        u: GF255e::w64be(0x5CE94782B63D2983, 0x2323BA05744FB271,
                         0x5486463AAA3D41CD, 0x442C914C64C6EE61),
        t: GF255e::w64be(0x79B75334C85A090C, 0x4B8F046B40C3632A,
                         0xFE575987C8449D15, 0x5E85E0F841CFEA05),
    },
    // (2^130)*G * 16
    PointAffine {
        e: GF255e::w64be(0x5F00BEB6EDB8A088, 0xAFF58E0E6F53165A,
                         0xB956B5A6669E52E3, 0xA1638BEC45B50B50),
        u: GF255e::w64be(0x0F2ED8418B17674E, 0x9CAE33A6B5F9B94C,
                         0x68337F979386B815, 0x20DDE2D9560BD063),
        t: GF255e::w64be(0x2EED8F30CF10FA1C, 0xBB88653D342DE052,
                         0x3721E53E5901899E, 0x42082E618690FF50),
    },
];

// Points i*(2^195)*G for i = 1 to 16, affine extended format
static PRECOMP_G195: [PointAffine; 16] = [
    // (2^195)*G * 1
    PointAffine {
        e: GF255e::w64be(0x26FE2B2D2FF7C515, 0x4F9CCA6483A60AC4,
                         0x05A13379CA5B1805, 0x259381D52FD3D48B),
        u: GF255e::w64be(0x7A2058682117A352, 0x5A78F8FDAFE0F2B2,
                         0x3FACF03027F2FE05, 0xC6C4EA52864B8022),
        t: GF255e::w64be(0x6CF49CB73C1C85C0, 0x759EDBD5AA299C4A,
                         0xD2369B352A0FAC70, 0x827479FBF869915D),
    },
    // (2^195)*G * 2
    PointAffine {
        e: GF255e::w64be(0x26E11FA33F986A71, 0xFEFB94253EE54433,
                         0x2F4C099F8F9811D4, 0xBEA01D24F6BA6D06),
        u: GF255e::w64be(0x597FE7EC4E366C38, 0xCBC1DD8A3179B032,
                         0xB043C24E23C52866, 0xE7A9C455FDCCE69F),
        t: GF255e::w64be(0x5D82A3622AECDB76, 0x31EC395A62DF9B38,
                         0xB52F9C48D79CEDB6, 0xF41D8A2928BB5A33),
    },
    // (2^195)*G * 3
    PointAffine {
        e: GF255e::w64be(0x7A97A73E152AC3D0, 0x5D9FD304B83A88A9,
                         0xE3C20E9FA8811C74, 0x9902C1E090F2D551),
        u: GF255e::w64be(0x5D529C2B2E3222F2, 0xB0C0AEB839C2A9BB,
                         0xDAC867CE0228990B, 0xEBF1C192782AD7E7),
        t: GF255e::w64be(0x25F396E870747870, 0x4CC66CF8E7017825,
                         0x8692B8050BB45ACF, 0xDF8E63928F1AE0C2),
    },
    // (2^195)*G * 4
    PointAffine {
        e: GF255e::w64be(0x68BEB6AD6278C4C5, 0x23A615DE55EB285B,
                         0x532E7F73C34493C0, 0x825E9E80D9017500),
        u: GF255e::w64be(0x73E9DA1D7C583AB6, 0x880F0F9CA2B23DE9,
                         0xD5179DCB398FE9E2, 0xE5AD1FDA050CE7CF),
        t: GF255e::w64be(0x2F2A10845751514B, 0x55CA5A73E2FDED3F,
                         0x56A385AC631A3736, 0x1BED8C4A161AD03A),
    },
    // (2^195)*G * 5
    PointAffine {
        e: GF255e::w64be(0x1A980F7E359D5D64, 0xDD94B1823583A50F,
                         0x39A98FB9520B23D9, 0xEF721415A10674B8),
        u: GF255e::w64be(0x3FB05C6B656FCDE7, 0x3428954D0B0B6412,
                         0x2B41B323457375B0, 0x81533FD0CED00FE0),
        t: GF255e::w64be(0x1FA8E20753FBE8B0, 0x0156D1B1D6CF146F,
                         0x3EB933A63E59FA2B, 0xD6A2CFBECD1FF35F),
    },
    // (2^195)*G * 6
    PointAffine {
        e: GF255e::w64be(0x53505DC8D146C39F, 0xD1328954C1969616,
                         0xCE6BBA92A647E0CA, 0xC32013800A7FA85F),
        u: GF255e::w64be(0x1EEE7F4380019FB8, 0xC70C1F018B95875D,
                         0xA6B25F5370FF8BED, 0xABECE8DEAA4DEFF3),
        t: GF255e::w64be(0x35C68ADE3CAC8CA8, 0x5D617DE816798EB4,
                         0x93B664F242B13EF8, 0xCC3FC741CC1E0562),
    },
    // (2^195)*G * 7
    PointAffine {
        e: GF255e::w64be(0x203E41FE3594BCCC, 0xC95A3B2FA7918F82,
                         0x023E52D8EE207D6F, 0x293F3FD57745E14A),
        u: GF255e::w64be(0x1C54D437C147EB47, 0xDF748C1856292D78,
                         0x8AF5B5BD4C9ADB58, 0xC2513D53CE5A6CD2),
        t: GF255e::w64be(0x791ECB5E7F925E67, 0xB8E346F880AA5525,
                         0xB56CC897BA7BA956, 0x02C3EA61A5ABCB56),
    },
    // (2^195)*G * 8
    PointAffine {
        e: GF255e::w64be(0x5A50303BB7FBF10D, 0xA2654498E4A81FA1,
                         0x9EAB45BEF1F6D3FE, 0x9E436CB767A86CB5),
        u: GF255e::w64be(0x47EC89341C754A72, 0x23187D9C49399AB4,
                         0x76396E28425429D3, 0x961441BFA4853698),
        t: GF255e::w64be(0x00D090A5B2E0E163, 0x47DBD9D756A70427,
                         0x4E7E59858CDEC91B, 0xB5B36F776AF04917),
    },
    // (2^195)*G * 9
    PointAffine {
        e: GF255e::w64be(0x4E1EFB691EF8D7C0, 0x3ADC11E0F4D52DD6,
                         0xD1492FB1E8EDE015, 0x1390F65E3B6C3E84),
        u: GF255e::w64be(0x0C4E4B67E97A3F02, 0xB055E943E160FF52,
                         0x899CA30F8A6C1157, 0x790DDCB656DA5EBB),
        t: GF255e::w64be(0x5C4551BBBCA04267, 0x0E7DEA665667BD29,
                         0x90F6162E6D8BF1FD, 0xE665E42E421C783F),
    },
    // (2^195)*G * 10
    PointAffine {
        e: GF255e::w64be(0x0BBAE0E5BEFBB5CF, 0x433AC8B15317BE46,
                         0x82E93F7DB218D2B4, 0x28CA2A1B76E757EA),
        u: GF255e::w64be(0x44B8942C5DF07889, 0x7C80807D104B0670,
                         0xEB725D50999A4399, 0x7CBAD6A204D1F6B9),
        t: GF255e::w64be(0x3B052B97144BDDCC, 0x4584662C9819C28B,
                         0x4555C3E786404CA2, 0x617C6A396D315D12),
    },
    // (2^195)*G * 11
    PointAffine {
        e: GF255e::w64be(0x2CCB2CF7E40BF4D0, 0xD28F560EA8A29B73,
                         0x200EE9E2631EC7C4, 0x0D101C917FFDE613),
        u: GF255e::w64be(0x7DD81F0AD475BB65, 0xEB5423DB7543C3F6,
                         0xB6A214969A98317F, 0x30FE96716E7DF796),
        t: GF255e::w64be(0x69561B43851B3032, 0x76EEE28489A2673B,
                         0x4ED760314652F82F, 0x6E9D90B85FC133E0),
    },
    // (2^195)*G * 12
    PointAffine {
        e: GF255e::w64be(0x2DFA0BA127D42687, 0xB3A61F723EE958E7,
                         0xA66737D8513DFDB2, 0x50C89E4AB1499911),
        u: GF255e::w64be(0x60406418E0A8E484, 0xF6647FFFA6239BFD,
                         0x0620628690F070A8, 0x041881DC4BB15593),
        t: GF255e::w64be(0x3C01E53D24508710, 0x5F7FF4B10823ABA8,
                         0xCC5BCAEE53A27045, 0xB186E710CF384958),
    },
    // (2^195)*G * 13
    PointAffine {
        e: GF255e::w64be(0x0B0051552C1C58B5, 0x16210166F7E6E8DA,
                         0x039A3283169BCBD8, 0xA54981754921B43D),
        u: GF255e::w64be(0x03C8B0610E5DE932, 0xEDC81102A9A286D9,
                         0x80A9A62960313C1E, 0x02A5C58CE250DF40),
        t: GF255e::w64be(0x5C2FDF1BE72A0992, 0x220189A7901D370E,
                         0x7F61E2E190853286, 0x9B656127329A1F5C),
    },
    // (2^195)*G * 14
    PointAffine {
        e: GF255e::w64be(0x6021348E9D2BB8D8, 0xB7E063EA06740CDF,
                         0x117438E7D83A2644, 0x1725A4D445249491),
        u: GF255e::w64be(0x63F775224E36165F, 0x97D9FFD6286A6BD1,
                         0x3498D65BDB7611FC, 0x2359C265188EE74D),
        t: GF255e::w64be(0x534AFBC1B782F441, 0x6492A9AFA98D71BD,
                         0xA31076307FE06CED, 0xD5B3AA1D5B583047),
    },
    // (2^195)*G * 15
    PointAffine {
        e: GF255e::w64be(0x6C435D4A27D08486, 0xD35D4667B3E6947A,
                         0x07778715A12C63DB, 0x66C6224B1937FD6E),
        u: GF255e::w64be(0x5C69FCC38DA29629, 0xDD4D47FA083CC9BF,
                         0x58F89E267B42BEA3, 0x14BD04EFD34FC573),
        t: GF255e::w64be(0x0B9C09556A326820, 0x5A90BF07D1C9E81B,
                         0x4F944F4CDD9551F4, 0x98A6F2B6623C4605),
    },
    // (2^195)*G * 16
    PointAffine {
        e: GF255e::w64be(0x4DA95AF12CBA888E, 0x6217606AC5C899F0,
                         0xB4BD88C5AC6C7FE8, 0xF4448E39173AD989),
        u: GF255e::w64be(0x162581D9B675A4E1, 0xDA636B907FED771B,
                         0x3E6A069F39FCEFCB, 0x805E028481B3D10D),
        t: GF255e::w64be(0x02FA9D8FB083E563, 0xEEAA462F252FD554,
                         0x44FDFE7C39061B8D, 0x52668A8902F702CE),
    },
];

// ========================================================================
