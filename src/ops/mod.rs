//! Normalization kernels and tolerance-based correctness checks
//!
//! This module provides:
//! - `normalize`: grayscale u8 → f32 conversion with a NEON SIMD fast path
//!   on ARM and a scalar fallback everywhere else
//! - `verify`: per-element checks against the expected formula and
//!   element-wise comparison between two implementations' outputs
//!
//! # Organization
//!
//! - `normalize`: the conversion kernels (auto-select, scalar, NEON)
//! - `verify`: `check_normalized`, `compare_outputs`, and the shared tolerance

pub mod normalize;
pub mod verify;

#[cfg(target_arch = "aarch64")]
pub use normalize::normalize_neon;
pub use normalize::{normalize, normalize_scalar};
pub use verify::{check_normalized, compare_outputs, TOLERANCE};
