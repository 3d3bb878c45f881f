// Standard library
use std::env;
use std::path::PathBuf;

// 3rd party crates
use config::{Config, ConfigError, Environment, File};

// Project imports
use crate::chain::constants::{default_connect_timeout, default_endpoint, default_request_timeout};
use crate::chain::RpcConnector;
use crate::report::ReportOptions;

// Current module imports
use super::constants::{
    default_block_time, default_log_level, default_subnet, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    CONFIG_PATH_ENV, ENV_PREFIX, ENV_SEPARATOR, LOG_LEVELS,
};
use super::errors::{SettingsError, ValidationError};
use super::types::{Log, Report, Rpc, Settings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Rpc {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for Report {
    fn default() -> Self {
        Self {
            subnet: default_subnet(),
            block_time_secs: default_block_time(),
            format: Default::default(),
            concurrent_global: false,
        }
    }
}

impl Settings {
    /// Loads settings from the optional config file, then the environment.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path: Option<PathBuf> = Self::get_config_path();
        let settings: Settings = Self::load_from(config_path, Self::environment())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Determines the configuration file path, if one can be found.
    fn get_config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Some(PathBuf::from(path))
        } else {
            dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        }
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn load_from(config_path: Option<PathBuf>, environment: Environment) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        let mut settings: Settings = builder.add_source(environment).build()?.try_deserialize()?;
        settings.config_path = config_path;
        Ok(settings)
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LOG_LEVELS.contains(&self.get_log_level().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.log.level.clone()));
        }

        if self.rpc.endpoint.trim().is_empty() {
            return Err(ValidationError::EmptyEndpoint);
        }

        if self.rpc.timeout_secs == 0 {
            return Err(ValidationError::ZeroTimeout("rpc.timeout_secs"));
        }

        if self.rpc.connect_timeout_secs == 0 {
            return Err(ValidationError::ZeroTimeout("rpc.connect_timeout_secs"));
        }

        if self.report.block_time_secs == 0 {
            return Err(ValidationError::ZeroBlockTime);
        }

        Ok(())
    }

    pub fn connector(&self) -> RpcConnector {
        RpcConnector::new(
            &self.rpc.endpoint,
            self.rpc.timeout_secs,
            self.rpc.connect_timeout_secs,
        )
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            subnet: self.report.subnet,
            block_time_secs: self.report.block_time_secs,
            format: self.report.format,
            concurrent_global: self.report.concurrent_global,
        }
    }
}
