//! Configuration for horos and the one place that wires a backend into a
//! [`ChartBuilder`].

use horos::{
    BackendKind, BundledSeries, ChartBuilder, ChartOptions, EphemerisBackend, HouseSystem,
    SeriesDirectory, SeriesEphemeris, SeriesStore,
};
use log::{info, warn};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HOROS_CONFIG";

const CONFIG_PATHS: [&str; 2] = ["configs/horos.toml", "../../configs/horos.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct HorosSettings {
    pub backend: BackendKind,
    /// Directory of `<body>.txt` tables; bundled tables when unset.
    pub series_dir: Option<PathBuf>,
    pub swiss_path: Option<PathBuf>,
    pub house_system: HouseSystem,
    pub fallback_to_whole_sign: bool,
}

impl Default for HorosSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::Series,
            series_dir: None,
            swiss_path: None,
            house_system: HouseSystem::Placidus,
            fallback_to_whole_sign: true,
        }
    }
}

impl HorosSettings {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            house_system: self.house_system,
            fallback_to_whole_sign: self.fallback_to_whole_sign,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    backend: Option<String>,
    #[serde(default)]
    series_dir: Option<PathBuf>,
    #[serde(default)]
    swiss_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartToml {
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    fallback_to_whole_sign: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    chart: ChartToml,
}

/// Text of the config file: `$HOROS_CONFIG` if set, otherwise the first of
/// the common relative paths for `configs/horos.toml`. `None` when no file
/// exists.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return read_config_file(Path::new(&path)).map(Some);
    }
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            info!("Using config {}", p);
            return Ok(Some(c));
        }
    }
    Ok(None)
}

pub fn read_config_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))
}

/// Parse config text; absent keys take their defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<HorosSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse horos config: {e}"))?;
    let RootConfigToml { ephemeris, chart } = root;
    let defaults = HorosSettings::default();

    let backend = match ephemeris.backend {
        Some(name) => name.parse::<BackendKind>()?,
        None => defaults.backend,
    };
    let house_system = match chart.house_system {
        Some(name) => name.parse::<HouseSystem>()?,
        None => defaults.house_system,
    };

    Ok(HorosSettings {
        backend,
        series_dir: ephemeris.series_dir,
        swiss_path: ephemeris.swiss_path,
        house_system,
        fallback_to_whole_sign: chart
            .fallback_to_whole_sign
            .unwrap_or(defaults.fallback_to_whole_sign),
    })
}

/// Settings from the config file, or defaults when there is none.
pub fn load_settings() -> anyhow::Result<HorosSettings> {
    match read_config_toml_text()? {
        Some(text) => parse_settings(&text),
        None => {
            info!("No horos config found in {:?}; using defaults", CONFIG_PATHS);
            Ok(HorosSettings::default())
        }
    }
}

/// Load the series tables named by the settings, once.
pub fn load_series_store(settings: &HorosSettings) -> anyhow::Result<Arc<SeriesStore>> {
    let store = match &settings.series_dir {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("ephemeris.series_dir does not exist: {}", dir.display());
            }
            SeriesStore::load(&SeriesDirectory::new(dir))
        }
        None => SeriesStore::load(&BundledSeries),
    };
    if !store.is_complete() {
        warn!(
            "{} series models unavailable; affected coordinates evaluate to zero",
            store.degraded().len()
        );
    }
    Ok(Arc::new(store))
}

/// Construct the backend selected by the settings.
pub fn build_backend(settings: &HorosSettings) -> anyhow::Result<Arc<dyn EphemerisBackend>> {
    match settings.backend {
        BackendKind::Series => Ok(Arc::new(SeriesEphemeris::new(load_series_store(settings)?))),
        BackendKind::Swiss => swiss_backend(settings),
    }
}

#[cfg(feature = "swiss")]
fn swiss_backend(settings: &HorosSettings) -> anyhow::Result<Arc<dyn EphemerisBackend>> {
    let adapter = horos::SwissEphemerisAdapter::new(settings.swiss_path.clone())?;
    Ok(Arc::new(adapter))
}

#[cfg(not(feature = "swiss"))]
fn swiss_backend(_settings: &HorosSettings) -> anyhow::Result<Arc<dyn EphemerisBackend>> {
    anyhow::bail!("ephemeris.backend = \"swiss\" requires building with the 'swiss' feature")
}

/// The chart builder for these settings.
pub fn build_chart_builder(settings: &HorosSettings) -> anyhow::Result<ChartBuilder> {
    let backend = build_backend(settings)?;
    info!(
        "Chart builder ready: {} backend, {} houses",
        backend.name(),
        settings.house_system
    );
    Ok(ChartBuilder::with_options(backend, settings.chart_options()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use horos::time::to_julian_day;
    use horos::GeoLocation;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), HorosSettings::default());
    }

    #[test]
    fn parses_full_config() {
        let text = r#"
[ephemeris]
backend = "series"
series_dir = "crates/horos/data/series"

[chart]
house_system = "whole_sign"
fallback_to_whole_sign = false
"#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.backend, BackendKind::Series);
        assert_eq!(settings.series_dir, Some(PathBuf::from("crates/horos/data/series")));
        assert_eq!(settings.house_system, HouseSystem::WholeSign);
        assert!(!settings.fallback_to_whole_sign);
        assert!(!settings.chart_options().fallback_to_whole_sign);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(parse_settings("[ephemeris]\nbackend = \"jpl\"\n").is_err());
        assert!(parse_settings("[chart]\nhouse_system = \"koch\"\n").is_err());
        assert!(parse_settings("[chart\n").is_err());
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("horos.toml");
        fs::write(&path, "[chart]\nhouse_system = \"placidus\"\n").unwrap();
        let settings = parse_settings(&read_config_file(&path).unwrap()).unwrap();
        assert_eq!(settings.house_system, HouseSystem::Placidus);
        assert!(read_config_file(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn missing_series_dir_is_an_error() {
        let settings = HorosSettings {
            series_dir: Some(PathBuf::from("/nonexistent/horos/series")),
            ..HorosSettings::default()
        };
        assert!(build_chart_builder(&settings).is_err());
    }

    #[test]
    fn series_dir_loads_tables() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("earth.txt"),
            "[earth x]\npower 0\n1.0 0 0\n",
        )
        .unwrap();
        let settings = HorosSettings {
            series_dir: Some(dir.path().to_path_buf()),
            ..HorosSettings::default()
        };
        let store = load_series_store(&settings).unwrap();
        assert!((store.evaluate(horos::Body::Earth, horos::series::Axis::X, 2_451_545.0) - 1.0).abs() < 1e-12);
        assert!(!store.is_complete());
    }

    #[cfg(not(feature = "swiss"))]
    #[test]
    fn swiss_without_feature_is_an_error() {
        let settings = HorosSettings {
            backend: BackendKind::Swiss,
            ..HorosSettings::default()
        };
        let err = build_chart_builder(&settings).err().unwrap();
        assert!(err.to_string().contains("swiss"));
    }

    #[test]
    fn default_builder_builds_a_chart() {
        let builder = build_chart_builder(&HorosSettings::default()).unwrap();
        let chart = builder
            .build_chart_default(
                to_julian_day(2000, 1, 1, 12, 0, 0.0),
                GeoLocation::new(48.85, 2.35),
            )
            .unwrap();
        assert_eq!(chart.placements.len(), 10);
        assert_eq!(chart.house_system, HouseSystem::Placidus);
    }
}
