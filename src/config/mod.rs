use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const URL_ENV: &str = "SUPABASE_URL";
pub const KEY_ENV: &str = "SUPABASE_ANON_KEY";

fn default_timeout_secs() -> u64 {
    30
}

fn default_table() -> String {
    "Exploitation".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub supabase: SupabaseSection,
}

/// `[supabase]` table of the config file; every key is optional
#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseSection {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_table")]
    pub border_table: String,
    #[serde(default = "default_table")]
    pub exploitation_table: String,
}

impl Default for SupabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_secs: default_timeout_secs(),
            border_table: default_table(),
            exploitation_table: default_table(),
        }
    }
}

/// Fully resolved connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout_secs: u64,
    pub border_table: String,
    pub exploitation_table: String,
}

impl FileConfig {
    /// Load the first parseable config file from the search path
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        log::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file; unlike [`FileConfig::load`] a
    /// missing or broken file is an error
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

impl SupabaseSection {
    /// Resolve settings with precedence: overrides, then environment, then file
    pub fn resolve(
        self,
        url_override: Option<String>,
        key_override: Option<String>,
    ) -> Result<SupabaseConfig> {
        self.resolve_with(url_override, key_override, |name| std::env::var(name).ok())
    }

    pub fn resolve_with(
        self,
        url_override: Option<String>,
        key_override: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<SupabaseConfig> {
        let url = url_override
            .or_else(|| env(URL_ENV))
            .or(self.url)
            .with_context(|| format!("No Supabase URL: set --url, {URL_ENV} or supabase.url"))?;
        let anon_key = key_override
            .or_else(|| env(KEY_ENV))
            .or(self.anon_key)
            .with_context(|| format!("No Supabase key: set --key, {KEY_ENV} or supabase.anon_key"))?;

        Ok(SupabaseConfig {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            timeout_secs: self.timeout_secs,
            border_table: self.border_table,
            exploitation_table: self.exploitation_table,
        })
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("locagri.toml"));
    paths.push(PathBuf::from(".locagri.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("locagri").join("config.toml"));
        paths.push(config_dir.join("locagri.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".locagri.toml"));
        paths.push(home.join(".config").join("locagri").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.supabase.timeout_secs, 30);
        assert_eq!(config.supabase.border_table, "Exploitation");
        assert!(config.supabase.url.is_none());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[supabase]\nurl = \"https://demo.supabase.co/\"\nanon_key = \"k\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        let resolved = config.supabase.resolve_with(None, None, no_env).unwrap();
        assert_eq!(resolved.url, "https://demo.supabase.co");
        assert_eq!(resolved.anon_key, "k");
        assert_eq!(resolved.timeout_secs, 5);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileConfig::from_path(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let section = SupabaseSection {
            url: Some("https://file.example".to_string()),
            anon_key: Some("file-key".to_string()),
            ..Default::default()
        };
        let env = |name: &str| (name == URL_ENV).then(|| "https://env.example".to_string());

        let resolved = section
            .clone()
            .resolve_with(None, None, env)
            .unwrap();
        assert_eq!(resolved.url, "https://env.example");
        assert_eq!(resolved.anon_key, "file-key");

        let resolved = section
            .resolve_with(Some("https://cli.example".to_string()), None, env)
            .unwrap();
        assert_eq!(resolved.url, "https://cli.example");
    }

    #[test]
    fn test_resolve_requires_url() {
        let err = SupabaseSection::default()
            .resolve_with(None, Some("k".to_string()), no_env)
            .unwrap_err();
        assert!(err.to_string().contains("No Supabase URL"));
    }
}
