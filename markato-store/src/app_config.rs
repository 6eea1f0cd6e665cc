use markato_shared::AppSettings;
use serde::Deserialize;
use std::env;

/// Deployment configuration: where the records live and what a first run
/// starts from before anything is persisted.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory the file-backed store writes its records under
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultsConfig {
    pub business_name: String,
    pub exchange_rate: f64,
    pub currency: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            exchange_rate: 1.0,
            currency: "$".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file that stays out of git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `MARKATO__STORAGE__DATA_DIR=/tmp/markato`
            .add_source(config::Environment::with_prefix("MARKATO").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Settings for a first run, before any settings record exists
    pub fn initial_settings(&self) -> AppSettings {
        AppSettings {
            business_name: self.defaults.business_name.clone(),
            exchange_rate: self.defaults.exchange_rate,
            global_currency: self.defaults.currency.clone(),
            ..AppSettings::default()
        }
    }
}
