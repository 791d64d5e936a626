// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Runtime configuration, loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub adzuna_country: String,
    pub api_base_url: String,
    pub export_path: PathBuf,
    pub timeout_seconds: u64,
    pub results_per_page: u32,
}

impl ServiceConfig {
    /// Load configuration from the environment. The Adzuna credentials are
    /// required; everything else has a default.
    pub fn load() -> Result<Self> {
        let adzuna_app_id = std::env::var("ADZUNA_APP_ID")
            .map_err(|_| anyhow::anyhow!("ADZUNA_APP_ID environment variable not set"))?;
        let adzuna_app_key = std::env::var("ADZUNA_APP_KEY")
            .map_err(|_| anyhow::anyhow!("ADZUNA_APP_KEY environment variable not set"))?;

        let adzuna_country = std::env::var("ADZUNA_COUNTRY").unwrap_or_else(|_| "au".to_string());
        let api_base_url = std::env::var("ADZUNA_API_URL")
            .unwrap_or_else(|_| "https://api.adzuna.com/v1/api/jobs".to_string());

        let export_path = std::env::var("JOBINTEL_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("exports"));

        let timeout_seconds = std::env::var("JOBINTEL_HTTP_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let results_per_page = std::env::var("JOBINTEL_RESULTS_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        info!(
            "Loaded configuration: country={}, results_per_page={}",
            adzuna_country, results_per_page
        );

        Ok(Self {
            adzuna_app_id,
            adzuna_app_key,
            adzuna_country,
            api_base_url,
            export_path: Self::resolve_path(&export_path)?,
            timeout_seconds,
            results_per_page,
        })
    }

    fn resolve_path(path: &PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    /// Ensure the export directory exists.
    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.export_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create export directory: {}",
                    self.export_path.display()
                )
            })?;
        Ok(())
    }
}
