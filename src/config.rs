use crate::errors::SdkError;
use crate::types::{LogLevel, Network};
use std::path::{Path, PathBuf};
use std::time::Duration;
use twelf::{Layer, config};

pub const ENV_PREFIX: &str = "BLOCKFROST_";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockfrostProject {
    pub name: String,
    pub api_key: String,
    pub network: Network,
}

impl BlockfrostProject {
    pub fn new(name: impl Into<String>, api_key: impl Into<String>, network: Network) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
            network,
        }
    }

    /// Infers the network from the key prefix and names the project after it.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, SdkError> {
        let api_key = api_key.into();
        let network = Network::from_project_id(&api_key).ok_or_else(|| {
            SdkError::Configuration(
                "cannot infer the network from the project id, set it explicitly".to_string(),
            )
        })?;

        Ok(Self::new(network.as_str(), api_key, network))
    }
}

/// Raw settings as read from the config file, the environment and the
/// command line. Every field is optional until [`Config::from_settings`].
#[config]
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub project_id: Option<String>,
    pub network: Option<Network>,
    pub base_url: Option<String>,
    /// Seconds.
    pub request_timeout: Option<u64>,
    pub log_level: Option<LogLevel>,
}

impl Settings {
    /// Reads the TOML file (when it exists) and `BLOCKFROST_*` variables,
    /// the latter taking precedence.
    pub fn load(config_path: Option<&Path>) -> Result<Self, SdkError> {
        let mut layers = vec![Layer::Env(Some(String::from(ENV_PREFIX)))];

        if let Some(path) = config_path.map(Path::to_path_buf).or_else(default_config_path) {
            if path.exists() {
                layers.insert(0, Layer::Toml(path));
            }
        }

        Self::from_layers(&layers)
    }

    pub fn from_layers(layers: &[Layer]) -> Result<Self, SdkError> {
        Self::with_layers(layers).map_err(|e| match e {
            twelf::Error::Toml(_) => {
                SdkError::Configuration("failed to parse the config file".to_string())
            },
            e => SdkError::Configuration(format!("failed to load settings: {e}")),
        })
    }

    /// Fields set in `overrides` win.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            project_id: overrides.project_id.or(self.project_id),
            network: overrides.network.or(self.network),
            base_url: overrides.base_url.or(self.base_url),
            request_timeout: overrides.request_timeout.or(self.request_timeout),
            log_level: overrides.log_level.or(self.log_level),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("blockfrost-sdk").join("config.toml"))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub project: BlockfrostProject,
    pub base_url: Option<String>,
    pub request_timeout: Duration,
    pub log_level: LogLevel,
}

impl Config {
    pub fn new(project: BlockfrostProject) -> Self {
        Self {
            project,
            base_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_level: LogLevel::Info,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn from_settings(settings: Settings) -> Result<Self, SdkError> {
        let api_key = settings
            .project_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| SdkError::Configuration("project_id must be set".to_string()))?;

        let project = match settings.network {
            Some(network) => BlockfrostProject::new(network.as_str(), api_key, network),
            None => BlockfrostProject::from_api_key(api_key)?,
        };

        Ok(Config {
            project,
            base_url: settings.base_url,
            request_timeout: settings
                .request_timeout
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            log_level: settings.log_level.unwrap_or(LogLevel::Info),
        })
    }

    /// The override if one is configured, otherwise the network's API root.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.project.network.base_url())
    }
}
