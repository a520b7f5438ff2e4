// src/ops/mod.rs

//! # Array Operations
//!
//! Backend-neutral reductions and shape manipulation on plain `ndarray`
//! arrays. Native tensors go through `to_number` before reaching these.

pub mod elementwise;
pub mod manipulation;
pub mod reduction;

pub use elementwise::abs_diff;
pub use manipulation::{concat, squeeze};
pub use reduction::{reduce_max, reduce_mean, reduce_min};
