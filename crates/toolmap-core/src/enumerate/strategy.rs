use serde::{Deserialize, Serialize};

/// How an axis value is written into a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Inserted as-is. Values must already be path-safe.
    #[default]
    Raw,
    /// Percent-encoded so free text (timestamps, QR payloads) stays a single segment.
    Percent,
}

impl Encoding {
    /// Encode a rendered value for insertion into a path.
    ///
    /// ```rust
    /// use toolmap_core::enumerate::Encoding;
    ///
    /// assert_eq!(Encoding::Raw.apply("8.8.8.8"), "8.8.8.8");
    /// assert_eq!(Encoding::Percent.apply("Hello World"), "Hello%20World");
    /// ```
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Raw => value.to_string(),
            Self::Percent => urlencoding::encode(value).into_owned(),
        }
    }
}

/// One dimension of the cartesian walk: a parameter and how many of its
/// leading sample values to visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Parameter name; must have sample values on the tool.
    pub param: String,
    /// Prefix length of the sample list to walk.
    pub take: usize,
    /// Path-segment encoding for this axis.
    #[serde(default)]
    pub encoding: Encoding,
}

impl Axis {
    /// Axis whose values are inserted verbatim.
    pub fn raw(param: &str, take: usize) -> Self {
        Self {
            param: param.to_string(),
            take,
            encoding: Encoding::Raw,
        }
    }

    /// Axis whose values are percent-encoded.
    pub fn encoded(param: &str, take: usize) -> Self {
        Self {
            param: param.to_string(),
            take,
            encoding: Encoding::Percent,
        }
    }
}

/// Declarative description of a tool's popular-URL walk.
///
/// Axes are nested in declaration order, the first axis being the outermost
/// loop. Each combination is rendered through every parameterized template of
/// the tool, so a tool with two such templates yields two paths per
/// combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStrategy {
    /// Nested axes, outermost first.
    pub axes: Vec<Axis>,
}

impl EnumerationStrategy {
    /// Strategy over arbitrary axes.
    pub const fn new(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    /// One-parameter walk (`ip-lookup`, `qr-generator`).
    pub fn single(axis: Axis) -> Self {
        Self::new(vec![axis])
    }

    /// Two nested parameters (`bmi-calculator`).
    pub fn pair(outer: Axis, inner: Axis) -> Self {
        Self::new(vec![outer, inner])
    }

    /// Three nested parameters (date and conversion tools).
    pub fn triple(outer: Axis, middle: Axis, inner: Axis) -> Self {
        Self::new(vec![outer, middle, inner])
    }

    /// Parameter names of the axes, outermost first.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|axis| axis.param.as_str())
    }

    /// Whether `param` is one of the axes.
    pub fn covers(&self, param: &str) -> bool {
        self.params().any(|p| p == param)
    }
}
