//! Infrastructure: ports, settings, and telemetry.

pub mod ports;
pub mod settings;
pub mod telemetry;
