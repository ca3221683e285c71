use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::filters::DEFAULT_ALLOWED_ORIGINS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8085,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub users_dir: PathBuf,
    pub forms_dir: PathBuf,
    pub responses_dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            users_dir: "./users".into(),
            forms_dir: "./forms".into(),
            responses_dir: "./data/form-data".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub data_dir: PathBuf,
    pub ttl_secs: i64,
    pub cookie_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            data_dir: "./data/sessions".into(),
            ttl_secs: 300,
            cookie_name: "survey.session".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Referer/Origin prefixes accepted by the admission gate.
    pub allowed_origins: Vec<String>,
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub storage: Storage,
    pub session: Session,
    pub gate: Gate,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `SURVEY_*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Some(Path::new("config.toml")))
    }

    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);
        if let Some(file) = file {
            builder = builder.add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        let config = builder
            .add_source(
                Environment::with_prefix("SURVEY")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("gate.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.address(), "0.0.0.0:8085");
        assert_eq!(settings.session.ttl_secs, 300);
        assert_eq!(settings.storage.users_dir, PathBuf::from("./users"));
        assert_eq!(settings.gate.allowed_origins.len(), 4);
    }

    #[test]
    fn test_settings_sources() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert_eq!(Settings::load(Some(&missing)).unwrap(), Settings::default());

        let file = dir.path().join("config.toml");
        std::fs::write(
            &file,
            "[storage]\nforms_dir = \"/srv/forms\"\n\n[gate]\nallowed_origins = [\"https://survey.example:\"]\n",
        )
        .unwrap();

        set_var("SURVEY_SERVER__PORT", "9000");
        let settings = Settings::load(Some(&file)).unwrap();
        remove_var("SURVEY_SERVER__PORT");

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.storage.forms_dir, PathBuf::from("/srv/forms"));
        assert_eq!(settings.storage.users_dir, PathBuf::from("./users"));
        assert_eq!(settings.gate.allowed_origins, vec!["https://survey.example:"]);
    }
}
