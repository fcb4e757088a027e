use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub browser: Option<BrowserConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: None,
            server: Some(ServerConfig::default()),
            browser: Some(BrowserConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Headless Chrome settings for rendering the listing page
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BrowserConfig {
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Fixed delay after navigation before the table is read
    #[serde(default = "default_page_wait_secs")]
    pub page_wait_secs: u64,
    #[serde(default)]
    pub chrome_path: Option<String>,
    #[serde(default = "default_sandbox")]
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            page_wait_secs: default_page_wait_secs(),
            chrome_path: None,
            sandbox: default_sandbox(),
        }
    }
}

fn default_source_url() -> String {
    "https://rera.kerala.gov.in/agents".to_string()
}

fn default_page_wait_secs() -> u64 {
    5
}

fn default_sandbox() -> bool {
    true
}

const DEFAULT_CONFIG: &str = r#"
[cors]
# Leave empty to allow any origin
allowed_origins = ["http://localhost:3000"]

[server]
host = "127.0.0.1"
port = 5000

[browser]
source_url = "https://rera.kerala.gov.in/agents"
page_wait_secs = 5
# chrome_path = "/usr/bin/google-chrome"
sandbox = true
"#;

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::load_from(&config_path)?;

        Ok((config, config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn browser(&self) -> BrowserConfig {
        self.browser.clone().unwrap_or_default()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("data-harvest").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_default_config_file() {
        let file = write_config(DEFAULT_CONFIG);
        let config = ApiConfig::load_from(file.path()).unwrap();

        let server = config.server();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 5000);

        let browser = config.browser();
        assert_eq!(browser.source_url, "https://rera.kerala.gov.in/agents");
        assert_eq!(browser.page_wait_secs, 5);
        assert!(browser.chrome_path.is_none());
        assert!(browser.sandbox);

        let cors = config.cors.unwrap();
        assert_eq!(cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let file = write_config("[browser]\npage_wait_secs = 8\n");
        let config = ApiConfig::load_from(file.path()).unwrap();

        assert!(config.cors.is_none());
        assert_eq!(config.server().port, 5000);

        let browser = config.browser();
        assert_eq!(browser.page_wait_secs, 8);
        assert_eq!(browser.source_url, "https://rera.kerala.gov.in/agents");
        assert!(browser.sandbox);
    }
}
