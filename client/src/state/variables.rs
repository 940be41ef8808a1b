//! Simulation variable catalogue for the edit-variables drawer.
//!
//! Variable values are only unique within their category, so every lookup is
//! keyed by `(category, variable)`.

#[cfg(test)]
#[path = "variables_test.rs"]
mod variables_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub label: &'static str,
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableCategory {
    pub label: &'static str,
    pub value: &'static str,
    pub variables: Vec<Variable>,
}

/// Variable whose hover reveals the CO2 distribution panel.
pub const CO2_DISTRIBUTION: &str = "co2Distribution";

const CATALOGUE: [(&str, &str, &[(&str, &str)]); 3] = [
    (
        "Variable category 1",
        "variableCategory1",
        &[("Carbon 1", "carbon1"), ("Co2 Distribution", CO2_DISTRIBUTION), ("Fleet sizing", "fleetSizing")],
    ),
    (
        "Variable category 2",
        "variableCategory2",
        &[
            ("Parking Rate", "parkingRate"),
            ("Border Rate", "borderRate"),
            ("Request Rate", "requestRate"),
            ("Variable 1", "variable1"),
            ("Variable 2", "variable2"),
            ("Variable 3", "variable3"),
        ],
    ),
    (
        "Variable category 3",
        "variableCategory3",
        &[("Variable 1", "variable1"), ("Variable 2", "variable2"), ("Variable 3", "variable3")],
    ),
];

/// Default catalogue with nothing selected.
pub fn default_categories() -> Vec<VariableCategory> {
    CATALOGUE
        .iter()
        .map(|&(label, value, vars)| VariableCategory {
            label,
            value,
            variables: vars
                .iter()
                .map(|&(label, value)| Variable { label, value, selected: false })
                .collect(),
        })
        .collect()
}

/// Flip `selected` on one variable. Returns false when nothing matched.
pub fn toggle_variable(categories: &mut [VariableCategory], category: &str, variable: &str) -> bool {
    let Some(target) = categories
        .iter_mut()
        .filter(|c| c.value == category)
        .flat_map(|c| c.variables.iter_mut())
        .find(|v| v.value == variable)
    else {
        return false;
    };
    target.selected = !target.selected;
    true
}

/// Categories reduced to variables whose label contains `query`
/// (case-insensitive). Categories left empty are dropped. A blank query keeps
/// everything.
pub fn filter_categories(categories: &[VariableCategory], query: &str) -> Vec<VariableCategory> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return categories.to_vec();
    }
    categories
        .iter()
        .filter_map(|c| {
            let variables: Vec<Variable> = c
                .variables
                .iter()
                .filter(|v| v.label.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            (!variables.is_empty()).then(|| VariableCategory { variables, ..c.clone() })
        })
        .collect()
}

pub fn selected_count(categories: &[VariableCategory]) -> usize {
    categories.iter().flat_map(|c| &c.variables).filter(|v| v.selected).count()
}
