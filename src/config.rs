use anyhow::{Context, Result};
use std::{env, fmt};

/// MySQL's standard port; the source deployment does not make it configurable.
pub(crate) const DEFAULT_PORT: u16 = 3306;

pub(crate) struct DbConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) database: String,
}

impl DbConfig {
    pub(crate) fn from_env() -> Result<Self> {
        Ok(Self {
            host: require("DB_HOST")?,
            port: DEFAULT_PORT,
            username: require("DB_USERNAME")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_DATABASE")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let config = DbConfig {
            host: "localhost".into(),
            port: DEFAULT_PORT,
            username: "t".into(),
            password: "hunter2".into(),
            database: "testdb".into(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
