use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding all three files. Relative paths resolve against
    /// the working directory.
    pub data_dir: PathBuf,
    /// Can progress store, relative to `data_dir`
    pub can_progress_file: String,
    /// Skin progress store, relative to `data_dir`
    pub skin_progress_file: String,
    /// Read-only skin catalog, relative to `data_dir`
    pub skin_catalog_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme used when no theme was saved: default, dracula, gruvbox, nord
    pub theme: String,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir:           PathBuf::from("."),
            can_progress_file:  "can_progress.json".into(),
            skin_progress_file: "skin_progress.json".into(),
            skin_catalog_file:  "full_skin_list.json".into(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".into() }
    }
}

// ── Paths ─────────────────────────────────────────────────────────────

impl StorageConfig {
    pub fn can_progress_path(&self) -> PathBuf {
        self.data_dir.join(&self.can_progress_file)
    }

    pub fn skin_progress_path(&self) -> PathBuf {
        self.data_dir.join(&self.skin_progress_file)
    }

    pub fn skin_catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.skin_catalog_file)
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(e) => {
                log::debug!("using default config: {:#}", e);
                // Write defaults on first run (best-effort)
                if Config::config_path().is_some_and(|p| !p.exists()) {
                    let _ = try_write_defaults();
                }
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sbtrack").join("sbtrack.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# sbtrack configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}
