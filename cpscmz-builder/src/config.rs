use std::env;
use std::path::{Path, PathBuf};

use leptos::config::errors::LeptosConfigError;
use leptos::prelude::*;
use thiserror::Error;
use tracing::{trace, warn};

pub const CONF_FILE_VAR: &str = "CPSCMZ_CONF_FILE";
pub const INDEX_FILE_VAR: &str = "CPSCMZ_INDEX_FILE";
pub const DEFAULT_INDEX_FILE: &str = "index.html";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Leptos config: {0}.")]
    Config(#[from] LeptosConfigError),

    #[error("Failed to write {path:?}: {source}.")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// File carrying a `[package.metadata.leptos]` section. When unset the
    /// `LEPTOS_*` variables exported by cargo-leptos are used instead.
    pub conf_file: Option<String>,
    pub index_file: String,
}

impl BuildConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let conf_file = var(CONF_FILE_VAR).filter(|path| !path.is_empty());
        let index_file = var(INDEX_FILE_VAR)
            .filter(|file| !file.is_empty())
            .unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string());

        trace!("conf file is {:?}", conf_file);
        trace!("index file is {}", index_file);

        Self {
            conf_file,
            index_file,
        }
    }

    pub fn index_path(&self, options: &LeptosOptions) -> PathBuf {
        Path::new(&*options.site_root).join(&self.index_file)
    }

    pub fn load_options(&self) -> Result<LeptosOptions, BuildError> {
        if let Some(path) = &self.conf_file {
            return Ok(get_configuration(Some(path.as_str()))?.leptos_options);
        }

        match get_configuration(None) {
            Ok(conf) => Ok(conf.leptos_options),
            Err(err) => {
                warn!("leptos env config was not found ({}), using defaults", err);
                Ok(default_options())
            }
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

/// Mirrors the workspace leptos metadata.
pub fn default_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("cpscmz")
        .site_root("target/site")
        .site_pkg_dir("pkg")
        .build()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.conf_file, None);
        assert_eq!(config.index_file, "index.html");
        assert_eq!(
            config.index_path(&default_options()),
            Path::new("target/site").join("index.html")
        );
    }

    #[test]
    fn reads_vars() {
        let vars = HashMap::from([
            (CONF_FILE_VAR, "site/Cargo.toml"),
            (INDEX_FILE_VAR, "home.html"),
        ]);
        let config = BuildConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.conf_file.as_deref(), Some("site/Cargo.toml"));
        assert_eq!(config.index_file, "home.html");
    }

    #[test]
    fn empty_vars_fall_back() {
        let config = BuildConfig::from_vars(|_| Some(String::new()));
        assert_eq!(config.conf_file, None);
        assert_eq!(config.index_file, DEFAULT_INDEX_FILE);
    }

    #[test]
    fn missing_conf_file_is_an_error() {
        let config = BuildConfig {
            conf_file: Some("does/not/exist/Cargo.toml".to_string()),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        };
        assert!(matches!(config.load_options(), Err(BuildError::Config(_))));
    }
}
