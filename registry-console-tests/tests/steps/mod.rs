mod gateway_steps;
mod registry_steps;
mod session_steps;
mod tree_steps;
mod user_steps;

use cucumber::gherkin::Step;
use registry_console_core::Method;
use serde_json::Value;

pub fn method(name: &str) -> Method {
    name.parse()
        .unwrap_or_else(|_| panic!("Unknown HTTP method '{}'", name))
}

pub fn docstring(step: &Step) -> &str {
    step.docstring
        .as_deref()
        .map(str::trim)
        .unwrap_or_else(|| panic!("Step '{}' needs a docstring", step.value))
}

pub fn json_docstring(step: &Step) -> Value {
    serde_json::from_str(docstring(step)).expect("Docstring is not valid JSON")
}

/// Comma-separated list as written in the feature files
pub fn names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
