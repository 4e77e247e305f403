use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::CelestialBody;
use crate::zodiac::{normalize, Sign, ZodiacPosition};

/// One body's normalized position and motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyReading {
    pub body: CelestialBody,
    pub position: ZodiacPosition,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    /// True iff the speed is negative; a stationary body is not retrograde
    pub is_retrograde: bool,
}

impl BodyReading {
    pub fn new(body: CelestialBody, longitude: f64, speed: f64) -> Self {
        Self {
            body,
            position: normalize(longitude),
            speed,
            is_retrograde: speed < 0.0,
        }
    }
}

// The spreadsheet client expects `isRetro` as the strings "true"/"false"
// and a duplicate of `full_degree` under `normDegree`.
#[derive(Serialize)]
struct BodyReadingWire {
    longitude: f64,
    full_degree: f64,
    #[serde(rename = "normDegree")]
    norm_degree: f64,
    sign: Sign,
    degree: f64,
    speed: f64,
    #[serde(rename = "isRetro")]
    is_retro: &'static str,
}

impl Serialize for BodyReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BodyReadingWire {
            longitude: self.position.longitude,
            full_degree: self.position.full_degree,
            norm_degree: self.position.full_degree,
            sign: self.position.sign,
            degree: self.position.degree,
            speed: self.speed,
            is_retro: if self.is_retrograde { "true" } else { "false" },
        }
        .serialize(serializer)
    }
}

/// Body readings keyed by body, kept in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyReadings {
    readings: Vec<BodyReading>,
}

impl BodyReadings {
    pub fn get(&self, body: CelestialBody) -> Option<&BodyReading> {
        self.readings.iter().find(|r| r.body == body)
    }

    pub fn contains(&self, body: CelestialBody) -> bool {
        self.get(body).is_some()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyReading> {
        self.readings.iter()
    }
}

impl FromIterator<BodyReading> for BodyReadings {
    fn from_iter<I: IntoIterator<Item = BodyReading>>(iter: I) -> Self {
        let mut readings: Vec<BodyReading> = Vec::new();
        for reading in iter {
            match readings.iter_mut().find(|r| r.body == reading.body) {
                Some(existing) => *existing = reading,
                None => readings.push(reading),
            }
        }
        readings.sort_by_key(|r| {
            CelestialBody::ALL
                .iter()
                .position(|b| *b == r.body)
                .unwrap_or(usize::MAX)
        });
        Self { readings }
    }
}

impl Serialize for BodyReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.readings.len()))?;
        for reading in &self.readings {
            map.serialize_entry(reading.body.name(), reading)?;
        }
        map.end()
    }
}

/// Normalized angles and the twelve house cusps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseReadings {
    pub ascendant: ZodiacPosition,
    pub midheaven: ZodiacPosition,
    /// Houses 1 through 12, in that order
    pub houses: [ZodiacPosition; 12],
}

impl HouseReadings {
    /// Cusp of a 1-based house number.
    pub fn house(&self, number: usize) -> Option<&ZodiacPosition> {
        number.checked_sub(1).and_then(|i| self.houses.get(i))
    }
}

impl Serialize for HouseReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.houses.len()))?;
        map.serialize_entry("ascendant", &self.ascendant)?;
        map.serialize_entry("midheaven", &self.midheaven)?;
        for (i, cusp) in self.houses.iter().enumerate() {
            map.serialize_entry(&format!("house{}", i + 1), cusp)?;
        }
        map.end()
    }
}

/// Bodies and houses for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    #[serde(rename = "planets")]
    pub bodies: BodyReadings,
    pub houses: HouseReadings,
}
