use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("TASK_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT),
            api_url,
            request_timeout: Duration::from_secs(parse_or(
                "TASK_API_TIMEOUT_SECS",
                lookup("TASK_API_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )),
        }
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={raw:?}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("TASK_API_URL", "http://tasks.internal:5001"),
            ("TASK_API_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_url, "http://tasks.internal:5001");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "eighty"), ("TASK_API_URL", "  ")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
