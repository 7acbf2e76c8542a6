//! Configuración del runner.
//! Carga variables de entorno (.env) una sola vez y expone `RunnerConfig`.
//! Los flags de la CLI se aplican después con `RunnerConfig::with_overrides`.
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const FIXTURE_DIR_VAR: &str = "SPECFLOW_FIXTURE_DIR";
pub const FORMAT_VAR: &str = "SPECFLOW_FORMAT";
pub const LOG_VAR: &str = "SPECFLOW_LOG";

const DEFAULT_FIXTURE_DIR: &str = "fixtures";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// `.env` se lee una sola vez por proceso; el valor indica si existía.
static DOTENV_LOADED: Lazy<bool> = Lazy::new(|| dotenvy::dotenv().is_ok());

/// Formato de salida del reporte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(AppError::Config(format!("{FORMAT_VAR} inválido: `{other}` (text | json)"))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// Parámetros de una ejecución de `specflow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directorio donde vive `empty_file.txt`.
    pub fixture_dir: PathBuf,
    pub format: ReportFormat,
    /// Filtro por defecto para env_logger (se ignora si hay `RUST_LOG`).
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
               format: ReportFormat::Text,
               log_level: DEFAULT_LOG_LEVEL.to_string() }
    }
}

impl RunnerConfig {
    /// Lee la configuración del entorno del proceso (cargando `.env` si existe).
    pub fn from_env() -> Result<Self, AppError> {
        if *DOTENV_LOADED {
            debug!(".env cargado");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de
    /// variables. Valores vacíos cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        let format = match get(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };
        Ok(Self { fixture_dir: get(FIXTURE_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.fixture_dir),
                  format,
                  log_level: get(LOG_VAR).unwrap_or(defaults.log_level) })
    }

    /// Aplica los valores provistos por la línea de comandos.
    pub fn with_overrides(mut self, fixture_dir: Option<PathBuf>, format: Option<ReportFormat>, log_level: Option<String>) -> Self {
        if let Some(dir) = fixture_dir {
            self.fixture_dir = dir;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    pub fn fixture_path(&self, file_name: &str) -> PathBuf {
        self.fixture_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = RunnerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, RunnerConfig::default());
        assert_eq!(cfg.fixture_path("empty_file.txt"), PathBuf::from("fixtures/empty_file.txt"));
    }

    #[test]
    fn reads_all_variables() {
        let cfg = RunnerConfig::from_lookup(lookup_from(&[(FIXTURE_DIR_VAR, "/tmp/fx"), (FORMAT_VAR, "JSON"), (LOG_VAR, "debug")])).unwrap();
        assert_eq!(cfg.fixture_dir, PathBuf::from("/tmp/fx"));
        assert_eq!(cfg.format, ReportFormat::Json);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = RunnerConfig::from_lookup(lookup_from(&[(FIXTURE_DIR_VAR, "  "), (FORMAT_VAR, "")])).unwrap();
        assert_eq!(cfg, RunnerConfig::default());
    }

    #[test]
    fn invalid_format_is_a_config_error() {
        let err = RunnerConfig::from_lookup(lookup_from(&[(FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Error de configuración: SPECFLOW_FORMAT inválido: `xml` (text | json)");
    }

    #[test]
    fn cli_overrides_win() {
        let cfg = RunnerConfig::default().with_overrides(Some("other".into()), Some(ReportFormat::Json), None);
        assert_eq!(cfg.fixture_dir, PathBuf::from("other"));
        assert_eq!(cfg.format, ReportFormat::Json);
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
