//! # festim-trace
//!
//! Traces observe a training loop batch by batch. This crate provides the
//! execution [`Mode`]s traces are filtered on, a bounded per-mode
//! [`SampleCollector`], and the [`Saliency`] trace which turns collected
//! samples into saliency map reports through an injected [`SaliencyNet`].

pub mod blend;
pub mod collector;
pub mod config;
pub mod labels;
pub mod mode;
pub mod saliency;

pub use blend::blend_saliency;
pub use collector::{SaliencyCollectors, SampleCollector, SampleSpec, Samples};
pub use config::{Integrating, SaliencyConfig};
pub use labels::LabelMapping;
pub use mode::{Mode, ModeFilter};
pub use saliency::{ReportValue, Saliency, SaliencyNet, SaliencyReport};
