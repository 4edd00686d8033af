use std::collections::HashMap;

use tenancy::dataset::DatasetSource;

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Server configuration loaded from environment variables, then overridden
/// by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    pub dataset: DatasetSource,
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            dataset: DatasetSource::default(),
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn tracked_keys() -> [&'static str; 4] {
        ["PORT", "TENANCY_BIND_ADDR", "TENANCY_DATASET", "TENANCY_CORS_ORIGIN"]
    }

    pub fn from_env() -> Self {
        let values: HashMap<String, String> = Self::tracked_keys()
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect();
        Self::from_map(&values)
    }

    pub fn from_map(values: &HashMap<String, String>) -> Self {
        fn read(values: &HashMap<String, String>, key: &str) -> Option<String> {
            values
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        }

        let defaults = Self::default();
        let port = match read(values, "PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT value '{}'", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            port,
            bind_addr: read(values, "TENANCY_BIND_ADDR").unwrap_or(defaults.bind_addr),
            dataset: read(values, "TENANCY_DATASET")
                .map(|value| DatasetSource::parse(&value))
                .unwrap_or(defaults.dataset),
            cors_origin: read(values, "TENANCY_CORS_ORIGIN"),
        }
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn with_bind_addr(mut self, bind_addr: Option<String>) -> Self {
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr;
        }
        self
    }

    pub fn with_dataset(mut self, dataset: Option<&str>) -> Self {
        if let Some(dataset) = dataset {
            self.dataset = DatasetSource::parse(dataset);
        }
        self
    }

    pub fn with_cors_origin(mut self, cors_origin: Option<String>) -> Self {
        if cors_origin.is_some() {
            self.cors_origin = cors_origin;
        }
        self
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
