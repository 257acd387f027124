//! Inline grids: dense value ranges expanded alongside the popular paths.
//!
//! A grid renders through the first parameterized template of its tool, so
//! grid paths share their shape with the popular paths. A tool that is not
//! registered contributes no grid.

use crate::config::GridConfig;
use crate::enumerate::Combinations;
use crate::registry::{ToolConfig, ToolRegistry};

/// Tool expanded by the BMI grid.
pub const BMI_TOOL: &str = "bmi-calculator";
/// Tool expanded by the age grid.
pub const AGE_TOOL: &str = "age-calculator";
/// Tool expanded by the unit-converter grid.
pub const UNIT_TOOL: &str = "unit-converter";

type GridAxes<'a> = Vec<(&'a str, Vec<String>)>;

fn stringify(values: Vec<i64>) -> Vec<String> {
    values.into_iter().map(|v| v.to_string()).collect()
}

/// Every combination of `axes` (first axis outermost) rendered through the
/// first template of `tool` whose params are exactly the axis params.
pub fn grid_paths(tool: &ToolConfig, axes: &[(&str, Vec<String>)]) -> Vec<String> {
    let Some(template) = tool.parameterized_templates().find(|template| {
        template.params.len() == axes.len()
            && axes
                .iter()
                .all(|(param, _)| template.params.iter().any(|p| p == param))
    }) else {
        tracing::debug!(tool = %tool.id, "no template matches grid axes");
        return Vec::new();
    };

    let lens = axes.iter().map(|(_, values)| values.len()).collect();
    Combinations::new(lens)
        .map(|indices| {
            let bindings: Vec<(&str, String)> = axes
                .iter()
                .zip(indices)
                .map(|((param, values), idx)| (*param, values[idx].clone()))
                .collect();
            template.render(&bindings)
        })
        .collect()
}

/// BMI grid: height outermost.
pub fn bmi_paths(registry: &ToolRegistry, grids: &GridConfig) -> Vec<String> {
    let Some(tool) = registry.find_config(BMI_TOOL) else {
        return Vec::new();
    };
    let axes: GridAxes<'_> = vec![
        ("height", stringify(grids.bmi.height.values())),
        ("weight", stringify(grids.bmi.weight.values())),
    ];
    grid_paths(tool, &axes)
}

/// Birth date grid: year, then month, then day.
pub fn age_paths(registry: &ToolRegistry, grids: &GridConfig) -> Vec<String> {
    let Some(tool) = registry.find_config(AGE_TOOL) else {
        return Vec::new();
    };
    let axes: GridAxes<'_> = vec![
        ("year", stringify(grids.age.year.values())),
        ("month", stringify(grids.age.month.values())),
        ("day", stringify(grids.age.day.values())),
    ];
    grid_paths(tool, &axes)
}

/// Unit grid: every registered `from` × `to` pair at powers of two.
///
/// Pairs with the same unit on both sides are kept, matching the popular
/// walk.
pub fn unit_paths(registry: &ToolRegistry, grids: &GridConfig) -> Vec<String> {
    let Some(tool) = registry.find_config(UNIT_TOOL) else {
        return Vec::new();
    };
    let samples = |param: &str| -> Vec<String> {
        tool.values_for(param)
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect()
    };
    let axes: GridAxes<'_> = vec![
        ("from", samples("from")),
        ("to", samples("to")),
        ("value", stringify(grids.unit.values())),
    ];
    grid_paths(tool, &axes)
}
