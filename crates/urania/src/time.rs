//! Civil date/time to continuous ephemeris time (Julian Day, UT).

use crate::ephemeris::EphemerisOracle;

/// Calendar rule used when turning a civil date into a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarKind {
    Julian,
    Gregorian,
}

/// A civil date and time of day as received from a client.
///
/// No calendar validation happens here: an impossible date such as
/// February 31st still maps to a day count, the same way the underlying
/// ephemeris library treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl CivilDateTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Hour of day with the minutes folded in as a fraction.
    pub fn decimal_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

/// Days since the Julian Day epoch (UT). Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EphemerisTime(f64);

impl EphemerisTime {
    pub fn from_julian_day(julian_day: f64) -> Self {
        Self(julian_day)
    }

    pub fn julian_day(self) -> f64 {
        self.0
    }
}

/// Convert a civil date/time into ephemeris time, always on the proleptic
/// Gregorian calendar.
pub fn to_ephemeris_time<O>(oracle: &O, civil: &CivilDateTime) -> EphemerisTime
where
    O: EphemerisOracle + ?Sized,
{
    EphemerisTime::from_julian_day(oracle.julian_day(civil, CalendarKind::Gregorian))
}

/// Julian Day for a civil date/time under the given calendar rule.
///
/// Same arithmetic as the Swiss Ephemeris `swe_julday`, so fakes and the
/// real adapter agree to the last bit.
pub fn julian_day(civil: &CivilDateTime, calendar: CalendarKind) -> f64 {
    let mut u = civil.year as f64;
    if civil.month < 3 {
        u -= 1.0;
    }
    let u0 = u + 4712.0;
    let mut u1 = civil.month as f64 + 1.0;
    if u1 < 4.0 {
        u1 += 12.0;
    }

    let mut jd = (u0 * 365.25).floor() + (30.6 * u1 + 0.000001).floor() + civil.day as f64
        + civil.decimal_hour() / 24.0
        - 63.5;

    if calendar == CalendarKind::Gregorian {
        let mut u2 = (u.abs() / 100.0).floor() - (u.abs() / 400.0).floor();
        if u < 0.0 {
            u2 = -u2;
        }
        jd = jd - u2 + 2.0;
        if u < 0.0 && u / 100.0 == (u / 100.0).floor() && u / 400.0 != (u / 400.0).floor() {
            jd -= 1.0;
        }
    }

    jd
}
