//! Fixed catalogs: the bodies every chart reports and the supported house
//! systems. Both are read-only tables; nothing here is configured at runtime.

/// A body from the fixed chart catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    TrueNode,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

const BODY_NAMES: &[(CelestialBody, &str)] = &[
    (CelestialBody::Sun, "sun"),
    (CelestialBody::Moon, "moon"),
    (CelestialBody::Mercury, "mercury"),
    (CelestialBody::Venus, "venus"),
    (CelestialBody::Mars, "mars"),
    (CelestialBody::Jupiter, "jupiter"),
    (CelestialBody::Saturn, "saturn"),
    (CelestialBody::Uranus, "uranus"),
    (CelestialBody::Neptune, "neptune"),
    (CelestialBody::Pluto, "pluto"),
    (CelestialBody::TrueNode, "true_node"),
    (CelestialBody::Chiron, "chiron"),
    (CelestialBody::Ceres, "ceres"),
    (CelestialBody::Pallas, "pallas"),
    (CelestialBody::Juno, "juno"),
    (CelestialBody::Vesta, "vesta"),
];

impl CelestialBody {
    /// Catalog order; also the key order of every planets response.
    pub const ALL: [CelestialBody; 16] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::TrueNode,
        CelestialBody::Chiron,
        CelestialBody::Ceres,
        CelestialBody::Pallas,
        CelestialBody::Juno,
        CelestialBody::Vesta,
    ];

    /// Key used for this body on the wire.
    pub fn name(self) -> &'static str {
        BODY_NAMES
            .iter()
            .find(|(body, _)| *body == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

/// House division systems accepted by the houses and chart endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Campanus,
}

const HOUSE_SYSTEMS: &[(&str, HouseSystem, char)] = &[
    ("placidus", HouseSystem::Placidus, 'P'),
    ("whole_sign", HouseSystem::WholeSign, 'W'),
    ("koch", HouseSystem::Koch, 'K'),
    ("equal", HouseSystem::Equal, 'E'),
    ("campanus", HouseSystem::Campanus, 'C'),
];

impl HouseSystem {
    /// Resolve a client-supplied name. Absent or unrecognized names fall back
    /// to Placidus instead of being rejected.
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|name| {
            HOUSE_SYSTEMS
                .iter()
                .find(|(n, _, _)| *n == name)
                .map(|(_, system, _)| *system)
        })
        .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }

    /// Single-character code understood by the Swiss Ephemeris.
    pub fn code(self) -> char {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or('P')
    }
}
