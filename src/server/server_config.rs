use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

use crate::core::{Message, Record, User};

/// Settings of the HTTP server. Every field may be omitted from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the user and message documents.
    pub data_dir: PathBuf
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_owned(),
            port: 3000,
            data_dir: PathBuf::from(".")
        }
    }
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Reads the config file if one is given, otherwise starts from the defaults.
    pub fn load(filepath: Option<&Path>) -> anyhow::Result<Self> {
        match filepath {
            Some(path) => Self::read(path),
            None => Ok(Self::default())
        }
    }

    /// Applies values given on the command line or in the environment.
    pub fn override_with(mut self, port: Option<u16>, data_dir: Option<PathBuf>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        return self;
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", User::COLLECTION))
    }

    pub fn messages_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", Message::COLLECTION))
    }
}
