//! Compression kernels.
//!
//! [`portable`] is the scalar reference implementation; [`simd`] batches
//! four chunk compressions per call. It is not a vectorized kernel (see
//! its module docs) — both modules ultimately run the same scalar math.

pub mod constants;
pub mod portable;
pub mod simd;
