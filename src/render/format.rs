use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::RendererConfig;

pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(?::\.(\d+))?\}").expect("placeholder pattern"))
}

/// Apply a display template to a raw value. `{}` substitutes the value,
/// `{:.N}` rounds a numeric value to N decimals. A template without a
/// placeholder is treated as a suffix. Empty values stay empty regardless of
/// the template.
pub(crate) fn apply_format(template: &str, value: &Value) -> String {
    let text = value_to_string(value);
    if text.is_empty() {
        return text;
    }
    let Some(caps) = placeholder().captures(template) else {
        return format!("{text}{template}");
    };
    let rendered = match (caps.get(1), value.as_f64()) {
        (Some(precision), Some(num)) => {
            let digits: usize = precision.as_str().parse().unwrap_or(0);
            format!("{num:.digits$}")
        }
        _ => text,
    };
    template.replacen(&caps[0], &rendered, 1)
}

/// Format the primary value for display: the template when configured, raw
/// text otherwise. Missing values render empty.
pub(crate) fn display_value(config: &RendererConfig, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match config.format_str.as_deref() {
        Some(template) => apply_format(template, value),
        None => value_to_string(value),
    }
}
