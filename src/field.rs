//! Finite fields.
//!
//! This module re-exports the concrete base fields used by the curves;
//! they are specializations of the backend-provided `GF255` type, which
//! has both a 32-bit and a 64-bit limb implementation (see `backend`).

#[cfg(feature = "jq255e")]
pub use crate::backend::GF255e;

#[cfg(feature = "jq255s")]
pub use crate::backend::GF255s;

pub use crate::backend::Scalar255;
