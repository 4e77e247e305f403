use log::error;
use thiserror::Error;

use crate::catalog::HouseSystem;
use crate::chart::data::HouseReadings;
use crate::ephemeris::{EphemerisError, EphemerisOracle, GeoLocation};
use crate::time::EphemerisTime;
use crate::zodiac::normalize;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to calculate houses: {0}")]
    Houses(#[source] EphemerisError),
}

impl ChartError {
    /// The ephemeris' own description of what went wrong.
    pub fn oracle_message(&self) -> String {
        match self {
            ChartError::Houses(EphemerisError::HouseCalculationFailed { message }) => {
                message.clone()
            }
            ChartError::Houses(other) => other.to_string(),
        }
    }
}

/// Ascendant, midheaven and the twelve cusps for a place, each normalized.
///
/// Unlike body lookups, a failure here fails the whole calculation.
pub fn resolve_houses<O>(
    oracle: &O,
    time: EphemerisTime,
    location: GeoLocation,
    system: HouseSystem,
) -> Result<HouseReadings, ChartError>
where
    O: EphemerisOracle + ?Sized,
{
    let raw = oracle
        .calc_houses(time, location, system)
        .map_err(|e| {
            error!(
                "House calculation ({}) failed at lat {}, lon {}: {}",
                system.name(),
                location.lat,
                location.lon,
                e
            );
            ChartError::Houses(e)
        })?;

    Ok(HouseReadings {
        ascendant: normalize(raw.ascendant),
        midheaven: normalize(raw.mc),
        houses: raw.cusps.map(normalize),
    })
}
