//! Host-facing output: sink traits and the throttled presenter

pub mod presenter;
pub mod sinks;

pub use presenter::{EnvironmentPresenter, PresentStats};
pub use sinks::{AmbientSink, LightSink, SkyColorSlot, SkyMaterialSink, SkyMaterialSource};
