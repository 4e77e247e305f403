//! Tropical zodiac normalization.
//!
//! Every raw ecliptic longitude coming out of the ephemeris goes through
//! [`normalize`] before it reaches a client. Raw longitudes can be negative
//! or exceed 360 (house cusps in particular), so the reduction uses a
//! positive modulo.

use serde::{Serialize, Serializer};

/// The twelve signs in ecliptic order, Aries starting at 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign for a 0-based index; wraps past Pisces.
    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl Serialize for Sign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A raw longitude together with its canonical zodiac form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    /// Longitude exactly as the ephemeris reported it
    pub longitude: f64,
    /// Longitude reduced into [0, 360)
    pub full_degree: f64,
    pub sign: Sign,
    /// Degree within the sign, in [0, 30)
    pub degree: f64,
}

/// Reduce any longitude into [0, 360).
pub fn wrap_degrees(longitude: f64) -> f64 {
    let r = longitude % 360.0;
    if r < 0.0 {
        let wrapped = r + 360.0;
        // r + 360 rounds up to exactly 360 for tiny negative r
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        // folds -0.0 into 0.0
        r + 0.0
    }
}

/// Normalize a raw ecliptic longitude into sign and in-sign degree.
pub fn normalize(longitude: f64) -> ZodiacPosition {
    let full_degree = wrap_degrees(longitude);
    let sign_index = ((full_degree / 30.0).floor() as usize).min(11);
    let degree = full_degree - sign_index as f64 * 30.0;

    ZodiacPosition {
        longitude,
        full_degree,
        sign: Sign::from_index(sign_index),
        degree,
    }
}
