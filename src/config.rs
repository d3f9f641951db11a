//! Configuration handling for the form frontend and static server

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default listen address of the static resource server
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default submission endpoint (the form action)
const DEFAULT_SUBMIT_ENDPOINT: &str = "http://127.0.0.1:8080/submit";

/// User configuration for the form frontend and static server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Listen address of the static resource server
    pub listen_addr: Option<String>,
    /// Document root served by the static resource server
    pub document_root: Option<String>,
    /// Destination address of the form submission
    pub submit_endpoint: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formflow", "formflow")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective listen address: env override, then file, then default
    pub fn listen_addr(&self) -> String {
        std::env::var("FORMFLOW_ADDR")
            .ok()
            .or_else(|| self.listen_addr.clone())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
    }

    /// Effective document root: env override, then file, then current dir
    pub fn document_root(&self) -> PathBuf {
        std::env::var("FORMFLOW_ROOT")
            .ok()
            .or_else(|| self.document_root.clone())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Effective submission endpoint: env override, then file, then default
    pub fn submit_endpoint(&self) -> String {
        std::env::var("FORMFLOW_ENDPOINT")
            .ok()
            .or_else(|| self.submit_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_SUBMIT_ENDPOINT.to_string())
    }
}
