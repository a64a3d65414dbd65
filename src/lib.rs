//! Jq255 implements the two prime-order groups jq255e and jq255s, along
//! with the Schnorr-like signature scheme and the key-exchange protocol
//! defined over them.
//!
//! Both groups are built over double-odd elliptic curves defined over a
//! 255-bit field GF(2^255 - c) (c = 18651 for jq255e, c = 3957 for
//! jq255s). Each group has a prime order `r` slightly below 2^254, and a
//! conventional generator. Group elements encode over 32 bytes; private
//! keys are 32 bytes; public keys are 32 bytes; signatures are 48 bytes.
//! The claimed security level is 128 bits.
//!
//! Each group is implemented in its own module (`jq255e` and `jq255s`,
//! gated by the compilation features of the same names; both are
//! enabled by default). The modules expose the same API: a `Point`
//! structure for group elements, a `Scalar` structure for integers
//! modulo `r`, and `PrivateKey`/`PublicKey` wrappers providing
//! signature generation, signature verification, and ECDH key exchange.
//! Field elements and scalars support the usual arithmetic operators
//! (`+`, `-`, `*`, and compound assignments), over both plain values
//! and references.
//!
//! # Conventions
//!
//! All functions are strictly constant-time unless their documentation
//! says otherwise (variable-time functions have `vartime` in their
//! name; signature verification is variable-time since it processes
//! only public data). To avoid side-channel leaks through compiler
//! optimization of `bool` values, functions that return or consume a
//! potentially secret Boolean use the `u32` type, with 0xFFFFFFFF
//! meaning "true" and 0x00000000 meaning "false". No other value shall
//! ever be used for such parameters. For the same reason, the `Eq` and
//! `PartialEq` traits are not implemented.
//!
//! Functions that modify an instance in place are named `set_*()`; a
//! companion function without the prefix returns the result as a new
//! value (e.g. `P.set_double()` doubles the point `P` in place, while
//! `P.double()` returns the doubled point and leaves `P` unchanged).
//!
//! # Backends
//!
//! Field elements are implemented over 64-bit limbs or 32-bit limbs; the
//! backend is chosen automatically from the target's pointer width, and
//! can be overridden with the `w64` or `w32` feature. Scalar arithmetic
//! always uses 32-bit limbs (see `backend::scalar255`). No inline
//! assembly is used; on x86 the add-with-carry intrinsics from
//! `core::arch` are used where available.
//!
//! The crate is `no_std`; the `std` feature (enabled by default) is only
//! needed by the test suite.

#![no_std]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

pub use rand_core::{CryptoRng, RngCore};

macro_rules! static_assert {
    ($condition:expr) => {
        let _ = &[()][1 - ($condition) as usize];
    }
}

pub mod backend;
pub mod field;

#[cfg(feature = "jq255e")]
pub mod jq255e;

#[cfg(feature = "jq255s")]
pub mod jq255s;
