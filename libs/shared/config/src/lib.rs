use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub booking_latency_ms: u64,
    pub auth_latency_ms: u64,
    pub booking_simulate_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            booking_latency_ms: 2000,
            auth_latency_ms: 1000,
            booking_simulate_failure: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using default");
                    defaults.server_host.clone()
                }),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            booking_latency_ms: parse_var("BOOKING_LATENCY_MS", defaults.booking_latency_ms),
            auth_latency_ms: parse_var("AUTH_LATENCY_MS", defaults.auth_latency_ms),
            booking_simulate_failure: parse_var("BOOKING_SIMULATE_FAILURE", defaults.booking_simulate_failure),
        };

        if config.booking_simulate_failure {
            warn!("BOOKING_SIMULATE_FAILURE enabled - every booking submission will fail");
        }

        config
    }

    /// Config for tests: no simulated latency, submissions succeed.
    pub fn instant() -> Self {
        Self {
            booking_latency_ms: 0,
            auth_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn booking_latency(&self) -> Duration {
        Duration::from_millis(self.booking_latency_ms)
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default", key);
            default
        }
    }
}
