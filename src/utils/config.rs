use std::env;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    /// Settings that were ignored, reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a fixed map.
    ///
    /// A bad value never fails the run: it is replaced by its default and
    /// recorded in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(log_level) = lookup("LOG_LEVEL") {
            match validate_log_level(&log_level) {
                Ok(()) => config.log_level = log_level,
                Err(e) => config.warnings.push(format!(
                    "{}, using '{}'",
                    e, DEFAULT_LOG_LEVEL
                )),
            }
        }

        if let Some(environment) = lookup("APP_ENV") {
            if environment.trim().is_empty() {
                config.warnings.push(format!(
                    "APP_ENV is empty, using '{}'",
                    DEFAULT_ENVIRONMENT
                ));
            } else {
                config.environment = environment;
            }
        }

        config
    }

    /// Filter directive for the subscriber; `--verbose` wins over the config.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }
}

fn validate_log_level(log_level: &str) -> Result<(), anyhow::Error> {
    if log_level.trim().is_empty() {
        return Err(anyhow::anyhow!("LOG_LEVEL is empty"));
    }

    EnvFilter::try_new(log_level)
        .map_err(|e| anyhow::anyhow!("LOG_LEVEL '{}' is not a valid filter: {}", log_level, e))?;

    Ok(())
}
