use thiserror::Error;

use crate::catalog::{CelestialBody, HouseSystem};
use crate::ephemeris::types::{BodyPosition, GeoLocation, HouseCusps};
use crate::time::{self, CalendarKind, CivilDateTime, EphemerisTime};

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Invalid ephemeris path: {path}. {message}")]
    InvalidPath { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: String,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// The ephemeris engine as seen by the resolvers.
///
/// Implementations are synchronous and must be safe to call from any request
/// handler; one instance is built at startup and shared.
pub trait EphemerisOracle: Send + Sync {
    /// Julian Day (UT) for a civil date/time under an explicit calendar rule.
    fn julian_day(&self, civil: &CivilDateTime, calendar: CalendarKind) -> f64 {
        time::julian_day(civil, calendar)
    }

    /// Ecliptic longitude and daily speed of one body.
    fn calc_body(
        &self,
        time: EphemerisTime,
        body: CelestialBody,
    ) -> Result<BodyPosition, EphemerisError>;

    /// Ascendant, midheaven and the twelve cusps for a place and house system.
    fn calc_houses(
        &self,
        time: EphemerisTime,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;
}
