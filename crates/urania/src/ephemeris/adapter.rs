use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::{Path, PathBuf};
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use libswisseph_sys::{swe_houses_ex2, AS_MAXCH};
use log::{debug, info, warn};
use swisseph::swe::{calc_ut, julday, set_ephe_path, version};
use swisseph::{AscMc, Body, CalandarKind, Cusp, Seflg};

use crate::catalog::{CelestialBody, HouseSystem};
use crate::ephemeris::oracle::{EphemerisError, EphemerisOracle};
use crate::ephemeris::types::{BodyPosition, GeoLocation, HouseCusps};
use crate::time::{CalendarKind, CivilDateTime, EphemerisTime};

// The C library keeps its file handles and caches in process-global state.
static SWE_LOCK: Mutex<()> = Mutex::new(());

fn swe_lock() -> MutexGuard<'static, ()> {
    SWE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Install the ephemeris data path and build the adapter.
    ///
    /// Call once at startup, before any request is served. A directory that
    /// does not exist is only a warning: the library then falls back to its
    /// analytical ephemeris for the major bodies, and asteroid lookups fail
    /// individually.
    pub fn new(ephemeris_path: impl Into<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.into();
        let path_str = path.to_str().ok_or_else(|| EphemerisError::InvalidPath {
            path: path.display().to_string(),
            message: "Path is not valid UTF-8.".to_string(),
        })?;
        if path_str.contains('\0') {
            return Err(EphemerisError::InvalidPath {
                path: path.display().to_string(),
                message: "Path contains a NUL byte.".to_string(),
            });
        }

        if !path.exists() {
            warn!(
                "Ephemeris path {} does not exist; asteroid positions will be unavailable",
                path.display()
            );
        }

        let library_version = {
            let _guard = swe_lock();
            set_ephe_path(path_str);
            version()
        };
        info!(
            "Swiss Ephemeris {} using data path {}",
            library_version,
            path.display()
        );

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl EphemerisOracle for SwissEphemerisAdapter {
    fn julian_day(&self, civil: &CivilDateTime, calendar: CalendarKind) -> f64 {
        let gregflag = match calendar {
            CalendarKind::Gregorian => CalandarKind::Gregorian as u32,
            CalendarKind::Julian => CalandarKind::Julian as u32,
        };
        julday(
            civil.year,
            civil.month,
            civil.day,
            civil.decimal_hour(),
            gregflag,
        )
    }

    fn calc_body(
        &self,
        time: EphemerisTime,
        body: CelestialBody,
    ) -> Result<BodyPosition, EphemerisError> {
        let jd = time.julian_day();
        let flags = (Seflg::SWIEPH | Seflg::SPEED).bits();

        let result = {
            let _guard = swe_lock();
            calc_ut(jd, swe_body(body) as u32, flags)
        }
        .map_err(|message| EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            julian_day: jd,
            message,
        })?;

        let out = result.out;
        Ok(BodyPosition {
            lon: out[0],
            lat: out[1],
            speed_lon: out[3],
        })
    }

    fn calc_houses(
        &self,
        time: EphemerisTime,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        let jd = time.julian_day();
        let flags = Seflg::SWIEPH.bits() as i32;

        let mut c = [0.0_f64; 13];
        let mut a = [0.0_f64; 10];
        let mut serr: [c_char; AS_MAXCH as usize] = [0; AS_MAXCH as usize];

        // The safe `houses_ex` drops the status code. Inside or near the polar
        // circle the library reports ERR here and fills Porphyry cusps.
        let retc = {
            let _guard = swe_lock();
            unsafe {
                swe_houses_ex2(
                    jd,
                    flags,
                    location.lat,
                    location.lon,
                    system.code() as c_int,
                    c.as_mut_ptr(),
                    a.as_mut_ptr(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                    serr.as_mut_ptr(),
                )
            }
        };

        if retc < 0 {
            let message = unsafe { CStr::from_ptr(serr.as_ptr()) }
                .to_string_lossy()
                .into_owned();
            debug!(
                "{} houses failed at JD {} latitude {}: {}",
                system.name(),
                jd,
                location.lat,
                message
            );
            return Err(EphemerisError::HouseCalculationFailed { message });
        }

        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);
        let cusp_values = [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ];

        if !ascmc.ascendant.is_finite()
            || !ascmc.mc.is_finite()
            || cusp_values.iter().any(|v| !v.is_finite())
        {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "non-finite cusps for {} at latitude {}",
                    system.name(),
                    location.lat
                ),
            });
        }

        Ok(HouseCusps {
            ascendant: ascmc.ascendant,
            mc: ascmc.mc,
            cusps: cusp_values,
        })
    }
}

fn swe_body(body: CelestialBody) -> Body {
    match body {
        CelestialBody::Sun => Body::Sun,
        CelestialBody::Moon => Body::Moon,
        CelestialBody::Mercury => Body::Mercury,
        CelestialBody::Venus => Body::Venus,
        CelestialBody::Mars => Body::Mars,
        CelestialBody::Jupiter => Body::Jupiter,
        CelestialBody::Saturn => Body::Saturn,
        CelestialBody::Uranus => Body::Uranus,
        CelestialBody::Neptune => Body::Neptune,
        CelestialBody::Pluto => Body::Pluto,
        CelestialBody::TrueNode => Body::TrueNode,
        CelestialBody::Chiron => Body::Chiron,
        CelestialBody::Ceres => Body::Ceres,
        CelestialBody::Pallas => Body::Pallas,
        CelestialBody::Juno => Body::Juno,
        CelestialBody::Vesta => Body::Vesta,
    }
}
