use anyhow::{Context, Result, bail};
use extracto_export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub preview: PreviewSection,
    pub export: ExportSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSection {
    /// Transactions listed by `extracto preview`
    pub transactions_limit: usize,
    /// Rows of the description summary listed by `extracto preview`
    pub descriptions_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Workbook file for xlsx/json (extension added when missing), directory for csv
    pub output: PathBuf,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// tracing filter directive, e.g. "warn" or "extracto_ingest=debug"
    pub level: String,
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self {
            transactions_limit: 50,
            descriptions_limit: 50,
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("Extracto_Procesado"),
            format: ExportFormat::Xlsx,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Directory holding `config.toml`: `$EXTRACTO_HOME` if set, else `~/.extracto`.
pub fn config_home() -> Result<PathBuf> {
    home_from(env::var_os("EXTRACTO_HOME"), env::var_os("HOME"))
}

fn home_from(extracto_home: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
    match (extracto_home, home) {
        (Some(dir), _) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        (_, Some(home)) if !home.is_empty() => Ok(PathBuf::from(home).join(".extracto")),
        _ => bail!("neither EXTRACTO_HOME nor HOME is set; pass --config"),
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_home()?.join("config.toml"))
}

/// Load the config at `explicit`, or the default location.
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(p) => {
            if !p.exists() {
                bail!("config not found: {}", p.display());
            }
            read_config(p)
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            read_config(&p)
        }
    }
}

pub fn read_config(p: &Path) -> Result<Config> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write a default config unless one already exists. Returns its path.
pub fn init_config(explicit: Option<&Path>) -> Result<PathBuf> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let dir = config_home()?;
            fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
            dir.join("config.toml")
        }
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(p);
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(p)
}
