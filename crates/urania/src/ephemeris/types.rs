/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

/// Raw body position as reported by the ephemeris
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees, not reduced
    pub lon: f64,
    /// Ecliptic latitude in degrees
    pub lat: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

/// Raw angles and cusps from a single house calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub ascendant: f64,
    pub mc: f64,
    /// Cusps of houses 1 through 12, in that order
    pub cusps: [f64; 12],
}
