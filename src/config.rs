use std::{
    fs::File,
    io::{BufReader, Read},
};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub assets_path: String,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{host}:{port}", host = self.host, port = self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3001,
            assets_path: "web".to_owned(),
        }
    }
}

/// Where the remote availability service lives.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Search {
    pub base_url: String,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            base_url: "https://reserva-node.onrender.com".to_owned(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub server: Server,
    pub search: Search,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Búsqueda de Canchas".to_owned(),
            server: Default::default(),
            search: Default::default(),
        }
    }
}

impl Config {
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let file: File = File::open(path)?;

        let mut reader: BufReader<File> = BufReader::new(file);
        let mut buffer: String = String::new();
        reader.read_to_string(&mut buffer)?;

        let config: Config = toml::from_str(&buffer)?;
        Ok(config)
    }
}
