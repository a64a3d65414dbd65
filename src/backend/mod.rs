//! Limb-level implementations of the base field and of scalars.
//!
//! The `GF255<MQ>` type implements the field GF(2^255 - MQ) for a small
//! odd constant `MQ` provided as a type parameter; `GF255e` and `GF255s`
//! are the two specializations used by the curves. Two implementations
//! are provided, over 64-bit limbs (module `w64`) and over 32-bit limbs
//! (module `w32`); the backend is selected from the target's pointer
//! width, unless overridden with the `w64` or `w32` compilation feature.
//! Both implementations export the same API and are interchangeable.
//!
//! General properties of the field type:
//!
//!  - An instance encapsulates a field element; internal representation
//!    is "partially reduced" (it may exceed the modulus), and is fully
//!    reduced only for encoding. All functions accept partially reduced
//!    inputs.
//!
//!  - `Self::ZERO`, `Self::ONE` and `Self::MINUS_ONE` are the obvious
//!    constants. Other constants can be built with the const functions
//!    `w64le()` and `w64be()`, which take the value as four 64-bit limbs
//!    (in little-endian, respectively big-endian, order).
//!
//!  - Usual operators (`+`, `-`, `*`, `/`, and compound assignments)
//!    work on both plain values and references. Division by zero yields
//!    zero.
//!
//!  - `set_half()`, `set_mul2()`, `set_mul4()`, `set_mul8()` and
//!    `set_mul16()` multiply the element in place by 1/2, 2, 4, 8 or 16,
//!    faster than a generic multiplication; `set_square()` and
//!    `set_xsquare(n)` compute squarings. Each `set_*()` function has a
//!    companion without the prefix that returns the result as a new
//!    instance.
//!
//!  - Comparisons return `u32` masks: `iszero()`, `equals()` and
//!    `isnegative()` return 0xFFFFFFFF or 0x00000000. An element is
//!    negative when the least significant bit of its fully reduced
//!    integer representation is 1.
//!
//!  - `set_cond()`, `select()`, `cswap()` and `set_condneg()` implement
//!    constant-time conditional assignment, selection, swap and
//!    negation; the control word MUST be 0xFFFFFFFF or 0x00000000.
//!
//!  - `encode()` yields the canonical 32-byte little-endian encoding.
//!    `decode_ct()` decodes 32 bytes, rejecting non-canonical values
//!    (integer not lower than the modulus) with a zero output and a zero
//!    mask, without leaking the outcome through timing; `decode()`
//!    wraps it into an `Option` for callers that do not need that
//!    shielding.
//!
//!  - `invert()` computes the inverse (zero yields zero); `sqrt()`
//!    returns the square root whose encoding has least significant
//!    bit zero, along with a success mask (on failure, the returned
//!    element is zero).
//!
//! Scalars (integers modulo the group order `r`) are implemented by the
//! `Scalar255` type in the `scalar255` module, which always works over
//! 32-bit limbs.

#[cfg(all(feature = "w32", feature = "w64"))]
compile_error!("features w32 and w64 cannot both be enabled");

#[cfg(any(
    feature = "w64",
    all(
        not(feature = "w32"),
        not(target_pointer_width = "32"))))]
pub mod w64;

#[cfg(any(
    feature = "w64",
    all(
        not(feature = "w32"),
        not(target_pointer_width = "32"))))]
pub use w64::GF255;

#[cfg(any(
    feature = "w32",
    all(
        not(feature = "w64"),
        target_pointer_width = "32")))]
pub mod w32;

#[cfg(any(
    feature = "w32",
    all(
        not(feature = "w64"),
        target_pointer_width = "32")))]
pub use w32::GF255;

pub mod scalar255;
pub use scalar255::Scalar255;

/// Base field for the jq255e curve: GF(2^255 - 18651).
#[cfg(feature = "jq255e")]
pub type GF255e = GF255<18651>;

/// Base field for the jq255s curve: GF(2^255 - 3957).
#[cfg(feature = "jq255s")]
pub type GF255s = GF255<3957>;
