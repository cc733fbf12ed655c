use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "imagen-4.0-generate-001";
/// Upper bound for `PHASE_DELAY_SCALE`.
pub const MAX_PHASE_DELAY_SCALE: f64 = 100.0;

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub port: u16,
    pub phase_delay_scale: f64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            api_key: non_empty("GEMINI_API_KEY"),
            api_base: non_empty("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: non_empty("IMAGEN_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: non_empty("PORT").and_then(|v| v.parse().ok()).unwrap_or(8080),
            phase_delay_scale: non_empty("PHASE_DELAY_SCALE")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.min(MAX_PHASE_DELAY_SCALE))
                .unwrap_or(1.0),
        }
    }

    /// Key prefix safe to log.
    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            Some(key) => format!("{}...", key.chars().take(10).collect::<String>()),
            None => "<unset>".to_string(),
        }
    }
}
