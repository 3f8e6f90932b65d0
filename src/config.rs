#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_body_size: usize,
    pub max_packages: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Reads settings through `get` so tests don't have to touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let port = get("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let max_body_size_kb: usize = get("MAX_BODY_SIZE_KB")
            .and_then(|s| s.parse().ok())
            .unwrap_or(64);

        let max_packages = get("MAX_PACKAGES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            port,
            max_body_size: max_body_size_kb * 1024,
            max_packages,
        }
    }
}
