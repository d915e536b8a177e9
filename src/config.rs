//! Runtime configuration.

use std::path::PathBuf;

/// Settings for one running service.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen address.
    pub listen_addr: String,

    /// SQLite database file. `None` keeps everything in memory in the actors.
    pub database: Option<PathBuf>,

    /// Mailbox capacity of each in-memory actor.
    pub mailbox_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            database: None,
            mailbox_size: 32,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn database(mut self, path: Option<PathBuf>) -> Self {
        self.config.database = path;
        self
    }

    /// Clamped to at least 1; a zero-capacity mailbox cannot be created.
    pub fn mailbox_size(mut self, size: usize) -> Self {
        self.config.mailbox_size = size.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
