use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Default output format ("csv", "table" or "json")
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Default color mode ("auto", "always" or "never")
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) no_color: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
                && let Ok(config) = toml::from_str::<Config>(&content)
            {
                return config;
            }
        }

        Config::default()
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("coworked").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".coworked.toml"));
        }
        paths
    }
}
