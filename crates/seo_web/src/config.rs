use std::env;

pub const DEFAULT_PORT: u16 = 7860;
pub const PORT_ENV: &str = "SERVER_PORT";
pub const ROOT_PATH_ENV: &str = "ROOT_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub root_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root_path: String::new(),
        }
    }
}

impl ServerConfig {
    /// Reads `SERVER_PORT` and `ROOT_PATH`. A missing or unparsable port falls
    /// back to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var(PORT_ENV).ok().as_deref()),
            root_path: env::var(ROOT_PATH_ENV).unwrap_or_default(),
        }
    }
}

pub fn parse_port(value: Option<&str>) -> u16 {
    match value.map(str::trim).map(str::parse::<u16>) {
        Some(Ok(port)) => port,
        Some(Err(e)) => {
            tracing::warn!("Invalid {} ({}), using {}", PORT_ENV, e, DEFAULT_PORT);
            DEFAULT_PORT
        }
        None => DEFAULT_PORT,
    }
}

/// `"seo/"` → `Some("/seo")`; empty or `"/"` means no prefix.
pub fn normalize_root_path(root_path: &str) -> Option<String> {
    let trimmed = root_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}
