use std::sync::Arc;

use serde::Deserialize;

use crate::clipboard::{Clipboard, CommandClipboard, NoopClipboard};

#[derive(Deserialize, Clone, Debug)]
pub struct Configuration {
    pub application: ApplicationConfigs,
    pub clipboard: ClipboardConfigs,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationConfigs {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ClipboardConfigs {
    pub enabled: bool,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ClipboardConfigs {
    pub fn writer(&self) -> Arc<dyn Clipboard> {
        if self.enabled {
            Arc::new(CommandClipboard::new(
                self.program.clone(),
                self.args.clone(),
            ))
        } else {
            Arc::new(NoopClipboard)
        }
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, the `APP_ENVIRONMENT` file and
/// `APP_<SECTION>__<KEY>` variables, later sources winning.
pub fn get_config() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let configs = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(environment_source())
        .build()?;

    configs.try_deserialize::<Configuration>()
}

// `APP_CLIPBOARD__ARGS` is split on spaces into the argument list.
fn environment_source() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("clipboard.args")
}
