//! Orchestration of the direction split and the per-group clusterers.
//!
//! - [`params`] – method selection and engine-wide parameters.
//! - `pipeline` – the [`ClusterEngine`] implementation.

pub mod params;
mod pipeline;

pub use params::{ClusterMethod, EngineParams};
pub use pipeline::ClusterEngine;
