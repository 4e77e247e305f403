use crate::catalog::{CelestialBody, HouseSystem};
use crate::chart::bodies::resolve_bodies;
use crate::chart::data::ChartResult;
use crate::chart::houses::{resolve_houses, ChartError};
use crate::ephemeris::{EphemerisOracle, GeoLocation};
use crate::time::EphemerisTime;

/// Build a full chart: every catalog body plus the houses for `location`.
///
/// Bodies are resolved first and independently of the houses; a house
/// failure still fails the chart rather than yielding empty houses.
pub fn assemble_chart<O>(
    oracle: &O,
    time: EphemerisTime,
    location: GeoLocation,
    system: HouseSystem,
) -> Result<ChartResult, ChartError>
where
    O: EphemerisOracle + ?Sized,
{
    let bodies = resolve_bodies(oracle, time, &CelestialBody::ALL);
    let houses = resolve_houses(oracle, time, location, system)?;
    Ok(ChartResult { bodies, houses })
}
