//! Tropical zodiac positions and house cusps computed over the Swiss Ephemeris.
//!
//! The pipeline is: civil date/time -> [`time::to_ephemeris_time`] ->
//! body and house resolvers in [`chart`] -> [`zodiac::normalize`] on every
//! raw longitude. The ephemeris itself sits behind
//! [`ephemeris::EphemerisOracle`] so resolvers never touch FFI state.

pub mod catalog;
pub mod chart;
pub mod ephemeris;
pub mod time;
pub mod zodiac;

pub use catalog::{CelestialBody, HouseSystem};
pub use chart::{
    assemble_chart, resolve_bodies, resolve_houses, BodyReading, BodyReadings, ChartError,
    ChartResult, HouseReadings,
};
pub use ephemeris::{EphemerisError, EphemerisOracle, GeoLocation, SwissEphemerisAdapter};
pub use time::{to_ephemeris_time, CalendarKind, CivilDateTime, EphemerisTime};
pub use zodiac::{normalize, Sign, ZodiacPosition};
