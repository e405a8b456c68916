use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried when no explicit path is given, so the binary
/// works from the workspace root and from its own crate directory.
pub const SEARCH_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UraniaConfig {
    pub chart: ChartConfig,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub ephemeris: EphemerisConfig,
    pub geo: GeoConfig,
    pub places: Vec<PlaceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub orb: f64,
    /// House system name or one-letter code; unset picks the chart type default
    pub house_system: Option<String>,
    pub chart_type: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            orb: 8.0,
            house_system: None,
            chart_type: "natal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub overlap_threshold: f64,
    pub offset_step: f64,
    pub max_attempts: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: 4.0,
            offset_step: 4.0,
            max_attempts: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub size: f32,
    pub output: PathBuf,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 800.0,
            output: PathBuf::from("chart.svg"),
            background: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Swiss Ephemeris data directory; unset uses SWISS_EPHEMERIS_PATH
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub timezone_radius_km: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            timezone_radius_km: 150.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl UraniaConfig {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: UraniaConfig = toml::from_str(text).context("Failed to parse urania.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(self.chart.orb >= 0.0) {
            anyhow::bail!("chart.orb must be a non-negative number, got {}", self.chart.orb);
        }
        if !(self.layout.overlap_threshold >= 0.0) || !(self.layout.offset_step > 0.0) {
            anyhow::bail!(
                "layout.overlap_threshold must be >= 0 and layout.offset_step > 0 (got {} / {})",
                self.layout.overlap_threshold,
                self.layout.offset_step
            );
        }
        if !(self.render.size > 0.0) {
            anyhow::bail!("render.size must be positive, got {}", self.render.size);
        }
        for place in &self.places {
            if !(-90.0..=90.0).contains(&place.lat) || !(-180.0..=180.0).contains(&place.lon) {
                anyhow::bail!(
                    "place '{}' has out-of-range coordinates {}, {}",
                    place.name,
                    place.lat,
                    place.lon
                );
            }
        }
        Ok(())
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, [`SEARCH_PATHS`] are tried in
/// order and built-in defaults are used when none is found.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<UraniaConfig> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        return UraniaConfig::parse(&text).with_context(|| format!("In {}", path.display()));
    }

    for p in &SEARCH_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            log::info!("Loaded configuration from {}", p);
            return UraniaConfig::parse(&text).with_context(|| format!("In {}", p));
        }
    }

    log::info!("No urania.toml found in {:?}; using defaults", SEARCH_PATHS);
    Ok(UraniaConfig::default())
}
