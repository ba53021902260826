//! Access tracing and observability for Sightline.
//!
//! This crate provides:
//! - [`Tracer`] - Records how each accessor call was answered
//! - [`TraceBuffer`] - Bounded history of trace records
//! - [`ObservabilityConfig`] - Presets for tracing setups

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::ObservabilityConfig;
pub use trace::{TraceBuffer, TraceEvent, TraceOutput, TraceRecord, Tracer, TracerConfig};
