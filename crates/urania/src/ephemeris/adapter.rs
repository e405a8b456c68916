use crate::ephemeris::types::{Body, BodyPosition, GeoLocation, HouseCusps, HouseSystem};
use crate::ephemeris::{normalize_degrees, Ephemeris};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Failed to calculate position for {body} at JD {jd:.5}: {message}")]
    CalculationFailed {
        body: Body,
        jd: f64,
        message: String,
    },
    #[error("{body} is derived from other points and has no ephemeris entry")]
    NotComputable { body: Body },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
}

// Swiss Ephemeris calculation flags
const FLG_SWIEPH: u32 = 2;
const FLG_MOSEPH: u32 = 4;
const FLG_SPEED: u32 = 256;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    flags: u32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Without data files the built-in Moshier model is used instead, which
    /// is accurate to well under an arcsecond for the planets.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Self {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        let data_flag = if path.exists() {
            log::debug!("Using Swiss Ephemeris data files at {}", path.display());
            FLG_SWIEPH
        } else {
            log::warn!(
                "Ephemeris path {} does not exist; falling back to the Moshier model",
                path.display()
            );
            FLG_MOSEPH
        };

        Self {
            ephemeris_path: path,
            flags: data_flag | FLG_SPEED,
        }
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    pub fn uses_data_files(&self) -> bool {
        self.flags & FLG_SWIEPH != 0
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn body_position(&mut self, jd: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        let code = body.swe_code().ok_or(EphemerisError::NotComputable { body })?;

        let result = calc_ut(jd, code, self.flags).map_err(|e| EphemerisError::CalculationFailed {
            body,
            jd,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        let lon = out[0];
        if !lon.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                jd,
                message: "non-finite longitude".to_string(),
            });
        }

        Ok(BodyPosition {
            lon: normalize_degrees(lon),
            lat: out[1],
            distance: out[2],
            speed_lon: out[3],
        })
    }

    fn houses(
        &mut self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        // houses_ex only distinguishes sidereal/tropical via flags; speed bits are ignored
        let (c, a) = houses_ex(jd, 0, location.lat, location.lon, system.code() as i32);

        use swisseph::{AscMc, Cusp};
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let raw = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if raw.iter().any(|c| !c.is_finite()) || !ascmc.ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} houses are undefined at latitude {:.4}",
                    system, location.lat
                ),
            });
        }

        Ok(HouseCusps {
            system,
            cusps: raw.map(normalize_degrees),
            ascendant: normalize_degrees(ascmc.ascendant),
            midheaven: normalize_degrees(ascmc.mc),
        })
    }
}
