use std::collections::HashSet;
use std::sync::Mutex;

use urania::ephemeris::{BodyPosition, EphemerisError, EphemerisOracle, GeoLocation, HouseCusps};
use urania::time::julian_day;
use urania::{CalendarKind, CelestialBody, CivilDateTime, EphemerisTime, HouseSystem};

/// Deterministic stand-in for the Swiss Ephemeris.
///
/// Body `i` in catalog order sits at `25 * i - 30` degrees. Mercury and the
/// node move backwards, Venus is stationary, everything else moves at 1°/day.
/// Angles and cusps are deliberately outside [0, 360).
#[derive(Default)]
pub struct FakeOracle {
    failing_bodies: HashSet<CelestialBody>,
    houses_error: Option<String>,
    pub calendars: Mutex<Vec<CalendarKind>>,
    pub house_systems: Mutex<Vec<HouseSystem>>,
    pub body_calls: Mutex<Vec<CelestialBody>>,
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_body(mut self, body: CelestialBody) -> Self {
        self.failing_bodies.insert(body);
        self
    }

    pub fn failing_houses(mut self, message: &str) -> Self {
        self.houses_error = Some(message.to_string());
        self
    }
}

impl EphemerisOracle for FakeOracle {
    fn julian_day(&self, civil: &CivilDateTime, calendar: CalendarKind) -> f64 {
        self.calendars.lock().unwrap().push(calendar);
        julian_day(civil, calendar)
    }

    fn calc_body(
        &self,
        time: EphemerisTime,
        body: CelestialBody,
    ) -> Result<BodyPosition, EphemerisError> {
        self.body_calls.lock().unwrap().push(body);
        if self.failing_bodies.contains(&body) {
            return Err(EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                julian_day: time.julian_day(),
                message: "SwissEph file 'seas_18.se1' not found in PATH".to_string(),
            });
        }

        let index = CelestialBody::ALL.iter().position(|b| *b == body).unwrap() as f64;
        let speed_lon = match body {
            CelestialBody::Mercury => -0.4,
            CelestialBody::TrueNode => -0.05,
            CelestialBody::Venus => 0.0,
            _ => 1.0,
        };
        Ok(BodyPosition {
            lon: index * 25.0 - 30.0,
            lat: 0.0,
            speed_lon,
        })
    }

    fn calc_houses(
        &self,
        _time: EphemerisTime,
        _location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        self.house_systems.lock().unwrap().push(system);
        if let Some(message) = &self.houses_error {
            return Err(EphemerisError::HouseCalculationFailed {
                message: message.clone(),
            });
        }

        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = i as f64 * 30.0 - 15.0;
        }
        Ok(HouseCusps {
            ascendant: -15.0,
            mc: 375.0,
            cusps,
        })
    }
}
