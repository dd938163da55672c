//! Ayanamsa computation for four sidereal reference methods.
//!
//! The ayanamsa is the angular offset between the tropical zodiac
//! (defined by the vernal equinox) and a sidereal zodiac (anchored to
//! fixed stars). As the equinox precesses westward, the ayanamsa grows
//! over time.
//!
//! Each method is defined by a fixed reference epoch at which its
//! ayanamsa is zero. The value at any date is the elapsed time since
//! that epoch, in Julian years, multiplied by a constant precession
//! rate. The model is deliberately linear; no nutation or higher-order
//! precession terms are applied.

use std::str::FromStr;

use drik_time::{CalendarTime, JULIAN_YEAR_DAYS, SECONDS_PER_DAY, rata_die};

use crate::error::AyanamsaError;

/// Assumed constant precession rate in arcseconds per Julian year.
pub const PRECESSION_RATE_ARCSEC_PER_YEAR: f64 = 50.290966;

/// Sidereal reference methods for ayanamsa computation.
///
/// A closed set: each variant maps to a fixed reference epoch, and a
/// method name outside this set is an invalid input rather than a new
/// table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AyanamsaMethod {
    /// Lahiri (Chitrapaksha): Indian government standard.
    Lahiri,

    /// Fagan-Bradley: primary Western sidereal system.
    FaganBradley,

    /// Krishnamurti Paddhati (KP): minimal offset from Lahiri.
    Krishnamurti,

    /// B.V. Raman: from "Hindu Predictive Astrology".
    Raman,
}

/// All four methods in their fixed presentation order.
const ALL_METHODS: [AyanamsaMethod; 4] = [
    AyanamsaMethod::Lahiri,
    AyanamsaMethod::FaganBradley,
    AyanamsaMethod::Krishnamurti,
    AyanamsaMethod::Raman,
];

impl AyanamsaMethod {
    /// Canonical method name, as accepted by the `FromStr` parser.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::FaganBradley => "Fagan-Bradley",
            Self::Krishnamurti => "Krishnamurti",
            Self::Raman => "Raman",
        }
    }

    /// Year of the reference epoch (January 1, 00:00:00, proleptic
    /// Gregorian).
    ///
    /// The epochs are opaque fixed constants of each method's tradition,
    /// kept exactly as defined rather than re-derived from published
    /// ayanamsa tables.
    pub const fn epoch_year(self) -> i32 {
        match self {
            Self::Lahiri => 285,
            Self::FaganBradley => 221,
            Self::Krishnamurti => 291,
            Self::Raman => 397,
        }
    }

    /// Civil day number of the reference epoch.
    pub const fn epoch_day(self) -> i64 {
        rata_die(self.epoch_year(), 1, 1)
    }

    /// All four defined methods, in the order [Lahiri, Fagan-Bradley,
    /// Krishnamurti, Raman].
    pub const fn all() -> &'static [AyanamsaMethod] {
        &ALL_METHODS
    }
}

impl Default for AyanamsaMethod {
    /// Lahiri is the default method.
    fn default() -> Self {
        Self::Lahiri
    }
}

impl FromStr for AyanamsaMethod {
    type Err = AyanamsaError;

    /// Case-sensitive exact match on the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lahiri" => Ok(Self::Lahiri),
            "Fagan-Bradley" => Ok(Self::FaganBradley),
            "Krishnamurti" => Ok(Self::Krishnamurti),
            "Raman" => Ok(Self::Raman),
            _ => Err(AyanamsaError::InvalidMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for AyanamsaMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ayanamsa in degrees at a calendar time.
///
/// # Arguments
/// * `method` — the sidereal reference method
/// * `time` — proleptic Gregorian calendar time
///
/// # Formula
/// `ayanamsa = (time - epoch) / julian_year * 50.290966″ / 3600`
///
/// Elapsed time is signed: dates before the method's epoch produce a
/// negative ayanamsa. The result is rounded to six decimal digits.
/// Pure and stateless; identical inputs give bit-identical output.
pub fn ayanamsa_deg(method: AyanamsaMethod, time: &CalendarTime) -> f64 {
    let elapsed_days = (time.day_number() - method.epoch_day()) as f64;
    let elapsed_s = elapsed_days * SECONDS_PER_DAY + time.seconds_of_day();
    let elapsed_years = elapsed_s / (JULIAN_YEAR_DAYS * SECONDS_PER_DAY);
    let arcsec = elapsed_years * PRECESSION_RATE_ARCSEC_PER_YEAR;
    round_6dp(arcsec / 3600.0)
}

/// Round to six decimal digits with the host rounding of `f64::round`.
fn round_6dp(deg: f64) -> f64 {
    (deg * 1_000_000.0).round() / 1_000_000.0
}
