//! Popular URL enumeration.
//!
//! Expands a tool's sample values into concrete page paths such as
//! `/tools/bmi-calculator/170/70`. Each tool declares an
//! [`EnumerationStrategy`]: the parameters to walk (outermost first) and how
//! many leading samples of each to visit. Every combination is rendered through
//! each parameterized template of the tool, in declaration order.
//!
//! ## Truncation
//!
//! The walk is a lazy iterator, so asking for `limit` paths returns the first
//! `limit` items of the full walk. Output for a `(tool, limit)` pair is fully
//! deterministic, and a smaller limit always yields a prefix of a larger one.
//!
//! ```rust
//! use toolmap_core::{ToolRegistry, UrlEnumerator};
//!
//! let registry = ToolRegistry::builtin()?;
//! let enumerator = UrlEnumerator::new(&registry);
//!
//! assert_eq!(
//!     enumerator.generate_popular_urls("bmi-calculator", 4),
//!     vec![
//!         "/tools/bmi-calculator/150/45",
//!         "/tools/bmi-calculator/150-cm-45-kg",
//!         "/tools/bmi-calculator/150/50",
//!         "/tools/bmi-calculator/150-cm-50-kg",
//!     ]
//! );
//!
//! // Unknown tools yield nothing rather than an error
//! assert!(enumerator.generate_popular_urls("no-such-tool", 10).is_empty());
//! # Ok::<(), toolmap_core::Error>(())
//! ```

mod combinations;
mod strategy;

pub use combinations::Combinations;
pub use strategy::{Axis, EnumerationStrategy, Encoding};

use tracing::{debug, instrument};

use crate::registry::{ToolConfig, ToolRegistry};

/// Default number of popular paths produced per tool.
pub const DEFAULT_POPULAR_LIMIT: usize = 50;

/// Produces popular page paths from a registry.
///
/// Holds a borrowed registry so tests can enumerate fixture tables.
#[derive(Debug, Clone, Copy)]
pub struct UrlEnumerator<'a> {
    registry: &'a ToolRegistry,
}

impl<'a> UrlEnumerator<'a> {
    /// Create an enumerator over `registry`.
    pub const fn new(registry: &'a ToolRegistry) -> Self {
        Self { registry }
    }

    /// Up to `limit` popular paths for `tool_id`, in walk order.
    ///
    /// Returns an empty list when the tool is unknown or declares no
    /// enumeration strategy.
    #[instrument(skip(self), level = "debug")]
    pub fn generate_popular_urls(&self, tool_id: &str, limit: usize) -> Vec<String> {
        let Some(tool) = self.registry.find_config(tool_id) else {
            debug!(tool_id, "unknown tool, no popular urls");
            return Vec::new();
        };

        let urls: Vec<String> = popular_paths(tool).take(limit).collect();
        debug!(count = urls.len(), "generated popular urls");
        urls
    }

    /// [`Self::generate_popular_urls`] with [`DEFAULT_POPULAR_LIMIT`].
    pub fn generate_popular_urls_default(&self, tool_id: &str) -> Vec<String> {
        self.generate_popular_urls(tool_id, DEFAULT_POPULAR_LIMIT)
    }
}

/// The full, untruncated walk for `tool`.
///
/// Values are encoded per axis once up front; the returned iterator renders
/// one path per (combination, parameterized template).
pub fn popular_paths(tool: &ToolConfig) -> Box<dyn Iterator<Item = String> + '_> {
    let Some(strategy) = tool.enumeration.as_ref() else {
        return Box::new(std::iter::empty());
    };

    let axes: Vec<(&str, Vec<String>)> = strategy
        .axes
        .iter()
        .map(|axis| {
            let values = tool
                .values_for(&axis.param)
                .unwrap_or_default()
                .iter()
                .take(axis.take)
                .map(|value| axis.encoding.apply(&value.to_string()))
                .collect();
            (axis.param.as_str(), values)
        })
        .collect();

    let lens = axes.iter().map(|(_, values)| values.len()).collect();
    let templates: Vec<_> = tool.parameterized_templates().collect();

    Box::new(Combinations::new(lens).flat_map(move |indices| {
        let bindings: Vec<(&str, String)> = axes
            .iter()
            .zip(indices)
            .map(|((param, values), idx)| (*param, values[idx].clone()))
            .collect();
        templates
            .iter()
            .map(|template| template.render(&bindings))
            .collect::<Vec<_>>()
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::UrlTemplate;
    use proptest::prelude::*;

    fn builtin() -> ToolRegistry {
        ToolRegistry::builtin().unwrap()
    }

    fn fixture_registry() -> ToolRegistry {
        let tool = ToolConfig::new("grid", "Grid", "test", "Fixture grid")
            .with_template(UrlTemplate::index("/tools/grid", "", "test"))
            .with_template(UrlTemplate::new("/tools/grid/[x]/[y]", &["x", "y"], "", "test"))
            .with_values("x", [1_i64, 2, 3])
            .with_values("y", ["a", "b"])
            .with_enumeration(EnumerationStrategy::pair(Axis::raw("x", 2), Axis::raw("y", 5)));
        ToolRegistry::new(vec![tool]).unwrap()
    }

    #[test]
    fn test_fixture_walk_respects_prefix_lengths() {
        let registry = fixture_registry();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("grid", 100);
        assert_eq!(
            urls,
            vec![
                "/tools/grid/1/a",
                "/tools/grid/1/b",
                "/tools/grid/2/a",
                "/tools/grid/2/b",
            ]
        );
    }

    #[test]
    fn test_bmi_first_four() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("bmi-calculator", 4);
        assert_eq!(
            urls,
            vec![
                "/tools/bmi-calculator/150/45",
                "/tools/bmi-calculator/150-cm-45-kg",
                "/tools/bmi-calculator/150/50",
                "/tools/bmi-calculator/150-cm-50-kg",
            ]
        );
    }

    #[test]
    fn test_bmi_maximal_walk_is_ten_by_ten_by_two() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("bmi-calculator", 10_000);
        assert_eq!(urls.len(), 200);
        // Inner loop is weight: the 21st path starts the second height
        assert_eq!(urls[20], "/tools/bmi-calculator/152/45");
    }

    #[test]
    fn test_ip_lookup_does_not_pad() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("ip-lookup", 10);
        assert_eq!(
            urls,
            vec![
                "/tools/ip-lookup/8.8.8.8",
                "/tools/ip-lookup/1.1.1.1",
                "/tools/ip-lookup/216.58.214.14",
            ]
        );
    }

    #[test]
    fn test_qr_generator_encodes_text() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("qr-generator", 2);
        assert_eq!(
            urls,
            vec![
                "/tools/qr-generator/create/https%3A%2F%2Fexample.com",
                "/tools/qr-generator/create/Hello%20World",
            ]
        );
    }

    #[test]
    fn test_unit_converter_two_variants() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("unit-converter", 2);
        assert_eq!(
            urls,
            vec![
                "/tools/unit-converter/meters/to/feet/1",
                "/tools/unit-converter/1-meters-to-feet",
            ]
        );
    }

    #[test]
    fn test_age_calculator_variants() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("age-calculator", 4);
        assert_eq!(
            urls,
            vec![
                "/tools/age-calculator/1960/1/1",
                "/tools/age-calculator/1960-1-1",
                "/tools/age-calculator/1960/1/5",
                "/tools/age-calculator/1960-1-5",
            ]
        );
    }

    #[test]
    fn test_maximal_walk_sizes() {
        let registry = builtin();
        let enumerator = UrlEnumerator::new(&registry);
        let cases = [
            ("bmi-calculator", 10 * 10 * 2),
            ("age-calculator", 20 * 6 * 4 * 2),
            ("unit-converter", 4 * 4 * 5 * 2),
            ("currency-converter", 4 * 4 * 5),
            ("timezone-converter", 3 * 3 * 2),
            ("ip-lookup", 3),
            ("qr-generator", 3),
            ("password-generator", 0),
        ];
        for (tool, expected) in cases {
            assert_eq!(
                enumerator.generate_popular_urls(tool, usize::MAX).len(),
                expected,
                "unexpected walk size for {tool}"
            );
        }
    }

    /// Every URL's last segment decodes back to one of the tool's samples,
    /// and every sample is reached.
    fn assert_last_segment_round_trips(tool_id: &str, param: &str) {
        let registry = builtin();
        let tool = registry.find_config(tool_id).unwrap();
        let samples: Vec<String> = tool
            .values_for(param)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        let urls = UrlEnumerator::new(&registry).generate_popular_urls(tool_id, 100);
        assert!(!urls.is_empty());
        let mut decoded_all = Vec::new();
        for url in &urls {
            let segment = url.rsplit('/').next().unwrap();
            let decoded = urlencoding::decode(segment).unwrap().into_owned();
            assert!(samples.contains(&decoded), "{url} decodes to an unknown sample");
            decoded_all.push(decoded);
        }
        for sample in &samples {
            assert!(decoded_all.contains(sample), "{sample} never enumerated for {tool_id}");
        }
    }

    #[test]
    fn test_timezone_datetime_round_trips() {
        assert_last_segment_round_trips("timezone-converter", "datetime");
    }

    #[test]
    fn test_qr_text_round_trips() {
        assert_last_segment_round_trips("qr-generator", "text");

        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls("qr-generator", 3);
        assert_eq!(
            urls[2],
            "/tools/qr-generator/create/WIFI%3AS%3AMyNetwork%3BT%3AWPA%3BP%3Asecret%3B%3B"
        );
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let registry = builtin();
        assert!(
            UrlEnumerator::new(&registry)
                .generate_popular_urls("bmi-calculator", 0)
                .is_empty()
        );
    }

    #[test]
    fn test_default_limit() {
        let registry = builtin();
        let urls = UrlEnumerator::new(&registry).generate_popular_urls_default("bmi-calculator");
        assert_eq!(urls.len(), DEFAULT_POPULAR_LIMIT);
    }

    proptest! {
        #[test]
        fn test_unknown_tool_is_always_empty(id in "[a-z]{1,12}-unknown", limit in 0usize..500) {
            let registry = builtin();
            prop_assert!(UrlEnumerator::new(&registry).generate_popular_urls(&id, limit).is_empty());
        }

        #[test]
        fn test_walk_properties(tool_idx in 0usize..10, limit in 0usize..400) {
            let registry = builtin();
            let enumerator = UrlEnumerator::new(&registry);
            let tool = &registry.all_configs()[tool_idx];

            let first = enumerator.generate_popular_urls(&tool.id, limit);
            let second = enumerator.generate_popular_urls(&tool.id, limit);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.len() <= limit);

            let prefix = format!("/tools/{}/", tool.id);
            for url in &first {
                prop_assert!(url.starts_with(&prefix));
                prop_assert!(!url.contains('['));
            }

            let longer = enumerator.generate_popular_urls(&tool.id, limit + 7);
            prop_assert!(longer.starts_with(&first));
        }
    }
}
