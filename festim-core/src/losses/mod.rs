// src/losses/mod.rs

//! # Loss Functions
//!
//! Per-sample losses usable with any backend implementing
//! [`TensorLike`](crate::backend::TensorLike) and
//! [`FromArray`](crate::backend::FromArray).

pub mod l1;

pub use l1::l1_loss;
