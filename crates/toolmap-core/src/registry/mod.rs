//! Tool registry: the immutable table of tools, their URL templates and
//! popular sample values.
//!
//! The registry is built once, validated, and then only read. Enumeration and
//! sitemap assembly borrow it, so fixture tables can be injected in tests.
//!
//! ```rust
//! use toolmap_core::ToolRegistry;
//!
//! let registry = ToolRegistry::builtin()?;
//! let bmi = registry.find_config("bmi-calculator").expect("built-in tool");
//! assert_eq!(bmi.name, "BMI Calculator");
//! assert!(registry.find_config("flux-capacitor").is_none());
//! # Ok::<(), toolmap_core::Error>(())
//! ```

pub mod builtin;
mod types;
mod validate;

pub use types::{ParamSamples, ParamValue, ToolConfig, UrlTemplate};
pub use validate::validate_tool;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::debug;

use crate::Result;

/// Validated, read-only collection of tools in declaration order.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    configs: Vec<ToolConfig>,
}

impl ToolRegistry {
    /// Build a registry from arbitrary configs, validating every tool.
    ///
    /// Fails on the first tool whose templates, parameters and sample values
    /// disagree, or on duplicate identifiers.
    pub fn new(configs: Vec<ToolConfig>) -> Result<Self> {
        validate::validate(&configs)?;
        debug!(tools = configs.len(), "tool registry validated");
        Ok(Self { configs })
    }

    /// The built-in tool table.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::tools())
    }

    /// Config whose id equals `id`.
    pub fn find_config(&self, id: &str) -> Option<&ToolConfig> {
        self.configs.iter().find(|tool| tool.id == id)
    }

    /// All configs in declaration order.
    pub fn all_configs(&self) -> &[ToolConfig] {
        &self.configs
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether the registry holds no tools.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Search for tools using fuzzy matching
    pub fn search(&self, query: &str) -> Vec<RegistrySearchResult> {
        let matcher = SkimMatcherV2::default();
        let query = query.trim().to_lowercase();

        let mut results = Vec::new();

        for tool in &self.configs {
            let mut max_score = 0;
            let mut best_match_field = "name";

            let fields = [
                ("id", tool.id.as_str()),
                ("name", tool.name.as_str()),
                ("category", tool.category.as_str()),
            ];
            for (field, text) in fields {
                if let Some(score) = matcher.fuzzy_match(&text.to_lowercase(), &query) {
                    if score > max_score {
                        max_score = score;
                        best_match_field = field;
                    }
                }
            }

            // Description matches count for less
            if let Some(score) = matcher.fuzzy_match(&tool.description.to_lowercase(), &query) {
                let description_score = score / 2;
                if description_score > max_score {
                    max_score = description_score;
                    best_match_field = "description";
                }
            }

            if max_score > 0 {
                results.push(RegistrySearchResult {
                    tool: tool.clone(),
                    score: max_score,
                    match_field: best_match_field.to_string(),
                });
            }
        }

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}

/// Search result from the registry
#[derive(Debug, Clone)]
pub struct RegistrySearchResult {
    /// Matching tool
    pub tool: ToolConfig,
    /// Fuzzy match score, higher is better
    pub score: i64,
    /// Which field produced the best score
    pub match_field: String,
}
