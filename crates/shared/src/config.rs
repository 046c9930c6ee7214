//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account classifier thresholds and boosts.
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Reference data locations.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Thresholds used by the hybrid keyword/similarity classifier.
///
/// All values are scores in the 0-1 range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum score reported once any keyword phrase matches.
    #[serde(default = "default_keyword_floor")]
    pub keyword_floor: Decimal,
    /// Below this similarity the keyword candidate wins.
    #[serde(default = "default_keyword_fallback_ceiling")]
    pub keyword_fallback_ceiling: Decimal,
    /// Minimum confidence assigned to a keyword fallback.
    #[serde(default = "default_keyword_fallback_confidence")]
    pub keyword_fallback_confidence: Decimal,
    /// Minimum similarity for a fuzzy match to be considered at all.
    #[serde(default = "default_similarity_floor")]
    pub similarity_floor: Decimal,
    /// Minimum final confidence for `is_classified = true`.
    #[serde(default = "default_accept_threshold")]
    pub accept_threshold: Decimal,
    /// Added when the type hint names the canonical category or sub-category.
    #[serde(default = "default_hint_boost")]
    pub hint_boost: Decimal,
    /// Added when the canonical code is a keyword candidate.
    #[serde(default = "default_candidate_boost")]
    pub candidate_boost: Decimal,
}

fn default_keyword_floor() -> Decimal {
    Decimal::new(5, 1)
}

fn default_keyword_fallback_ceiling() -> Decimal {
    Decimal::new(5, 1)
}

fn default_keyword_fallback_confidence() -> Decimal {
    Decimal::new(4, 1)
}

fn default_similarity_floor() -> Decimal {
    Decimal::new(3, 1)
}

fn default_accept_threshold() -> Decimal {
    Decimal::new(35, 2)
}

fn default_hint_boost() -> Decimal {
    Decimal::new(2, 1)
}

fn default_candidate_boost() -> Decimal {
    Decimal::new(3, 1)
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keyword_floor: default_keyword_floor(),
            keyword_fallback_ceiling: default_keyword_fallback_ceiling(),
            keyword_fallback_confidence: default_keyword_fallback_confidence(),
            similarity_floor: default_similarity_floor(),
            accept_threshold: default_accept_threshold(),
            hint_boost: default_hint_boost(),
            candidate_boost: default_candidate_boost(),
        }
    }
}

/// Reference data configuration.
///
/// When a path is absent the catalogue embedded in the core crate is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomyConfig {
    /// JSON file with the canonical chart of accounts.
    pub chart_path: Option<String>,
    /// JSON file with the keyword rule table.
    pub keyword_rules_path: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "finstat=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSTAT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
