use log::warn;

use crate::catalog::CelestialBody;
use crate::chart::data::{BodyReading, BodyReadings};
use crate::ephemeris::EphemerisOracle;
use crate::time::EphemerisTime;

/// Look up every body in `catalog` at `time`.
///
/// A body the ephemeris cannot compute (typically an asteroid whose data
/// file is missing) is logged and left out; the remaining bodies are still
/// returned.
pub fn resolve_bodies<O>(
    oracle: &O,
    time: EphemerisTime,
    catalog: &[CelestialBody],
) -> BodyReadings
where
    O: EphemerisOracle + ?Sized,
{
    catalog
        .iter()
        .filter_map(|&body| match oracle.calc_body(time, body) {
            Ok(position) => Some(BodyReading::new(body, position.lon, position.speed_lon)),
            Err(e) => {
                warn!("Error calculating {}: {}", body.name(), e);
                None
            }
        })
        .collect()
}
