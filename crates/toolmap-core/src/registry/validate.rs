//! Construction-time checks for tool tables.
//!
//! A tool table that passes [`validate`] can be enumerated without any
//! `[param]` placeholder surviving into a generated path.

use std::collections::HashSet;

use super::types::ToolConfig;
use crate::enumerate::Encoding;
use crate::{Error, Result};

/// Characters that would split or terminate a path segment if inserted raw.
const RESERVED_IN_SEGMENT: &[char] = &['/', '?', '#', '%'];

/// Validate a whole table: per-tool checks plus identifier uniqueness.
pub fn validate(configs: &[ToolConfig]) -> Result<()> {
    let mut seen = HashSet::new();
    for tool in configs {
        if !seen.insert(tool.id.as_str()) {
            return Err(Error::DuplicateTool(tool.id.clone()));
        }
        validate_tool(tool)?;
    }
    Ok(())
}

fn invalid(tool: &ToolConfig, reason: impl Into<String>) -> Error {
    Error::InvalidTemplate {
        tool: tool.id.clone(),
        reason: reason.into(),
    }
}

/// Placeholder names follow `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a single tool.
pub fn validate_tool(tool: &ToolConfig) -> Result<()> {
    if tool.id.is_empty()
        || tool
            .id
            .chars()
            .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
    {
        return Err(invalid(tool, "id must be non-empty kebab-case"));
    }
    if tool.name.trim().is_empty() || tool.category.trim().is_empty() {
        return Err(invalid(tool, "name and category must be non-empty"));
    }

    let root = tool.index_path();
    for template in &tool.url_templates {
        let under_root = template.path == root
            || template
                .path
                .strip_prefix(&root)
                .is_some_and(|rest| rest.starts_with('/'));
        if !under_root {
            return Err(invalid(
                tool,
                format!("path '{}' is outside {root}", template.path),
            ));
        }

        if template.has_stray_brackets() {
            return Err(invalid(
                tool,
                format!("path '{}' has an unbalanced '[' or ']'", template.path),
            ));
        }
        let placeholders = template.placeholders();
        if let Some(name) = placeholders.iter().find(|p| !is_identifier(p)) {
            return Err(invalid(
                tool,
                format!("placeholder [{name}] in '{}' is not an identifier", template.path),
            ));
        }
        let mut declared = HashSet::new();
        for param in &template.params {
            if !declared.insert(param.as_str()) {
                return Err(invalid(
                    tool,
                    format!("param '{param}' declared twice in '{}'", template.path),
                ));
            }
            if !placeholders.contains(&param.as_str()) {
                return Err(invalid(
                    tool,
                    format!("param '{param}' has no [{param}] in '{}'", template.path),
                ));
            }
            if tool.values_for(param).is_none_or(<[_]>::is_empty) {
                return Err(invalid(
                    tool,
                    format!("placeholder [{param}] has no sample values"),
                ));
            }
        }
        if let Some(undeclared) = placeholders.iter().find(|p| !declared.contains(*p)) {
            return Err(invalid(
                tool,
                format!("placeholder [{undeclared}] in '{}' is not declared", template.path),
            ));
        }
    }

    let Some(strategy) = tool.enumeration.as_ref() else {
        return Ok(());
    };

    if strategy.axes.is_empty() {
        return Err(invalid(tool, "enumeration has no axes"));
    }
    let mut axes = HashSet::new();
    for axis in &strategy.axes {
        if !axes.insert(axis.param.as_str()) {
            return Err(invalid(tool, format!("axis '{}' repeated", axis.param)));
        }
        if axis.take == 0 {
            return Err(invalid(tool, format!("axis '{}' takes zero values", axis.param)));
        }
        let Some(values) = tool.values_for(&axis.param).filter(|v| !v.is_empty()) else {
            return Err(invalid(
                tool,
                format!("axis '{}' has no sample values", axis.param),
            ));
        };
        if axis.encoding == Encoding::Raw {
            let unsafe_value = values.iter().map(ToString::to_string).find(|v| {
                v.is_empty() || v.contains(RESERVED_IN_SEGMENT) || v.contains(char::is_whitespace)
            });
            if let Some(value) = unsafe_value {
                return Err(invalid(
                    tool,
                    format!(
                        "raw axis '{}' value '{value}' is not path-safe; use an encoded axis",
                        axis.param
                    ),
                ));
            }
        }
    }

    if tool.parameterized_templates().next().is_none() {
        return Err(invalid(tool, "enumeration declared without parameterized templates"));
    }
    for template in tool.parameterized_templates() {
        if let Some(param) = template.params.iter().find(|p| !strategy.covers(p)) {
            return Err(invalid(
                tool,
                format!(
                    "template '{}' uses [{param}] which is not an enumeration axis",
                    template.path
                ),
            ));
        }
    }

    Ok(())
}
