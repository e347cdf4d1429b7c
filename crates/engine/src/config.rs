//! Runtime configuration read from the environment.

/// Server settings, loaded once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Normalised to a leading slash and no trailing slash; empty means root.
    pub api_prefix: String,
    pub cors_allowed_origins: Option<String>,
    /// When set, every battle replays the same seeded sequence.
    pub battle_seed: Option<i64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            api_prefix: "/api/v1".to_string(),
            cors_allowed_origins: None,
            battle_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Malformed numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let server_port = read("SERVER_PORT")
            .or_else(|| read("PORT"))
            .and_then(|raw| match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Invalid server port, using default");
                    None
                }
            })
            .unwrap_or(defaults.server_port);

        let battle_seed = read("BATTLE_SEED").and_then(|raw| match raw.parse::<i64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "Invalid BATTLE_SEED, using OS randomness");
                None
            }
        });

        Self {
            server_host: read("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            api_prefix: read("API_PREFIX")
                .map(|raw| normalize_prefix(&raw))
                .unwrap_or(defaults.api_prefix),
            cors_allowed_origins: read("CORS_ALLOWED_ORIGINS"),
            battle_seed,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(config(&[]).bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("API_PREFIX", "api/v2/"),
            ("CORS_ALLOWED_ORIGINS", "*"),
            ("BATTLE_SEED", "-42"),
        ]);
        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
        assert_eq!(cfg.api_prefix, "/api/v2");
        assert_eq!(cfg.cors_allowed_origins.as_deref(), Some("*"));
        assert_eq!(cfg.battle_seed, Some(-42));
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        assert_eq!(config(&[("PORT", "4000")]).server_port, 4000);
        assert_eq!(
            config(&[("SERVER_PORT", "5000"), ("PORT", "4000")]).server_port,
            5000
        );
    }

    #[test]
    fn malformed_numbers_use_defaults() {
        let cfg = config(&[("SERVER_PORT", "http"), ("BATTLE_SEED", "lucky")]);
        assert_eq!(cfg.server_port, 3000);
        assert_eq!(cfg.battle_seed, None);
    }

    #[test]
    fn slash_prefix_means_root() {
        assert_eq!(config(&[("API_PREFIX", "/")]).api_prefix, "");
        assert_eq!(config(&[("API_PREFIX", "  ")]).api_prefix, "/api/v1");
    }
}
