use serde::{Deserialize, Deserializer};
use serde_json::Value;

use urania::{CivilDateTime, GeoLocation, HouseSystem};

use crate::error::ApiError;

pub const MISSING_MOMENT: &str = "Missing required fields: year, month, day, hour, min";
pub const MISSING_PLACE: &str =
    "Missing required fields: year, month, day, hour, min, lat, lon";

/// Body shared by the planets, houses and chart routes.
///
/// Every field is optional at the parsing stage so that an absent field is a
/// 400 rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRequest {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub hour: Option<i32>,
    pub min: Option<i32>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Only a string can name a system; any other JSON value reads as absent.
    #[serde(default, deserialize_with = "string_or_none")]
    pub house_type: Option<String>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => Some(name),
        _ => None,
    })
}

impl ChartRequest {
    /// Parse a raw request body. An empty body reads as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ApiError::Unhandled(e.to_string()))
    }

    /// Date and time for routes that need no place.
    ///
    /// Year, month and day of zero count as missing; hour and minute of zero
    /// are valid.
    pub fn moment(&self) -> Result<CivilDateTime, ApiError> {
        self.civil()
            .ok_or_else(|| ApiError::Validation(MISSING_MOMENT.to_string()))
    }

    /// Date, time and place for the house-bearing routes.
    pub fn moment_and_place(&self) -> Result<(CivilDateTime, GeoLocation), ApiError> {
        match (self.civil(), self.lat, self.lon) {
            (Some(civil), Some(lat), Some(lon)) => Ok((civil, GeoLocation { lat, lon })),
            _ => Err(ApiError::Validation(MISSING_PLACE.to_string())),
        }
    }

    pub fn house_system(&self) -> HouseSystem {
        HouseSystem::from_name(self.house_type.as_deref())
    }

    fn civil(&self) -> Option<CivilDateTime> {
        let year = self.year.filter(|v| *v != 0)?;
        let month = self.month.filter(|v| *v != 0)?;
        let day = self.day.filter(|v| *v != 0)?;
        Some(CivilDateTime::new(year, month, day, self.hour?, self.min?))
    }
}
