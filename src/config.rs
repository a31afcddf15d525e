use anyhow::Context;

/// Services always listen on every interface; only the port is configurable.
pub const BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env(default_port: u16) -> anyhow::Result<Self> {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(default_port: u16, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {raw:?}"))?,
            None => default_port,
        };

        Ok(Self {
            host: BIND_HOST.to_string(),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
