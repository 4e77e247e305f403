//! Chart assembly: body positions, house cusps, and the combined chart.

pub mod assembler;
pub mod bodies;
pub mod data;
pub mod houses;

pub use assembler::assemble_chart;
pub use bodies::resolve_bodies;
pub use data::{BodyReading, BodyReadings, ChartResult, HouseReadings};
pub use houses::{resolve_houses, ChartError};
