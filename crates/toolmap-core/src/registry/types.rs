use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enumerate::EnumerationStrategy;

#[allow(clippy::expect_used)]
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]/]+)\]").expect("placeholder pattern is valid"));

/// A single sample value for a URL parameter.
///
/// Renders into a path segment using its natural textual form, so
/// `Int(170)` becomes `170` and `Decimal(2.5)` becomes `2.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Whole number (heights, years, amounts)
    Int(i64),
    /// Fractional number
    Decimal(f64),
    /// Free text (unit names, currency codes, IPs, QR payloads)
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A parameterized path such as `/tools/bmi-calculator/[height]/[weight]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTemplate {
    /// Path with zero or more `[param]` placeholders.
    pub path: String,
    /// Placeholder names in the order they were declared.
    pub params: Vec<String>,
    /// Human-readable summary of the page variant.
    pub description: String,
    /// Free-text grouping used by the page layer.
    pub category: String,
}

impl UrlTemplate {
    /// Create a template with explicitly declared parameters.
    pub fn new(path: &str, params: &[&str], description: &str, category: &str) -> Self {
        Self {
            path: path.to_string(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }

    /// Create a parameterless template, typically the tool's landing page.
    pub fn index(path: &str, description: &str, category: &str) -> Self {
        Self::new(path, &[], description, category)
    }

    /// Whether the template has any parameters to substitute.
    pub fn is_parameterized(&self) -> bool {
        !self.params.is_empty()
    }

    /// Placeholder names that literally appear in `path`, in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.path)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Whether a `[` or `]` is left over once every placeholder is removed.
    pub fn has_stray_brackets(&self) -> bool {
        PLACEHOLDER.replace_all(&self.path, "").contains(['[', ']'])
    }

    /// Substitute bound values into the path.
    ///
    /// Values are inserted verbatim; callers encode them beforehand when
    /// needed. Placeholders without a binding are left untouched, which the
    /// registry validation rules out for built-in and injected tables alike.
    ///
    /// ```rust
    /// use toolmap_core::UrlTemplate;
    ///
    /// let template = UrlTemplate::new(
    ///     "/tools/bmi-calculator/[height]-cm-[weight]-kg",
    ///     &["height", "weight"],
    ///     "BMI for a height and weight",
    ///     "health",
    /// );
    /// let path = template.render(&[("height", "170".to_string()), ("weight", "70".to_string())]);
    /// assert_eq!(path, "/tools/bmi-calculator/170-cm-70-kg");
    /// ```
    pub fn render(&self, bindings: &[(&str, String)]) -> String {
        PLACEHOLDER
            .replace_all(&self.path, |caps: &regex::Captures<'_>| {
                let name = caps.get(1).map_or("", |m| m.as_str());
                bindings
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map_or_else(|| caps[0].to_string(), |(_, value)| value.clone())
            })
            .into_owned()
    }
}

/// Ordered sample values for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSamples {
    /// Parameter name as used in `[param]` placeholders.
    pub param: String,
    /// Samples in declaration order; enumeration walks a prefix of this list.
    pub values: Vec<ParamValue>,
}

/// One utility tool's SEO surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Stable kebab-case identifier, also the URL segment after `/tools/`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display category.
    pub category: String,
    /// One-line summary used by registry lookup.
    pub description: String,
    /// Page templates in declaration order.
    pub url_templates: Vec<UrlTemplate>,
    /// Sample values per parameter, in declaration order.
    pub popular_values: Vec<ParamSamples>,
    /// How popular URLs are enumerated; `None` means the tool has no variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<EnumerationStrategy>,
}

impl ToolConfig {
    /// Create a config with no templates or sample values yet.
    pub fn new(id: &str, name: &str, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            url_templates: Vec::new(),
            popular_values: Vec::new(),
            enumeration: None,
        }
    }

    /// Append a URL template.
    #[must_use]
    pub fn with_template(mut self, template: UrlTemplate) -> Self {
        self.url_templates.push(template);
        self
    }

    /// Declare the sample values of a parameter.
    #[must_use]
    pub fn with_values<V>(mut self, param: &str, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<ParamValue>,
    {
        self.popular_values.push(ParamSamples {
            param: param.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Attach the enumeration strategy.
    #[must_use]
    pub fn with_enumeration(mut self, strategy: EnumerationStrategy) -> Self {
        self.enumeration = Some(strategy);
        self
    }

    /// Sample values for `param`, if declared.
    pub fn values_for(&self, param: &str) -> Option<&[ParamValue]> {
        self.popular_values
            .iter()
            .find(|samples| samples.param == param)
            .map(|samples| samples.values.as_slice())
    }

    /// The parameterless landing path, `/tools/<id>`.
    pub fn index_path(&self) -> String {
        format!("/tools/{}", self.id)
    }

    /// Templates that take parameters, in declaration order.
    pub fn parameterized_templates(&self) -> impl Iterator<Item = &UrlTemplate> {
        self.url_templates.iter().filter(|t| t.is_parameterized())
    }
}

impl fmt::Display for ToolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})\n   {}", self.name, self.id, self.description)
    }
}
