use serde::{Deserialize, Serialize};

/// Connection settings for the places backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5049".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Converts to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads from TOML string
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5049");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ApiConfig::new("https://places.example.org".to_string());
        let toml = config.to_toml().unwrap();
        let back = ApiConfig::from_toml(&toml).unwrap();
        assert_eq!(back, config);
    }
}
