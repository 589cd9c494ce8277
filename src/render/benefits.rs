use serde_json::Value;

use crate::domain::{RendererConfig, RendererKind};
use crate::presentation::{DetailCell, ViewContext};
use crate::row::RowData;

use super::base::{CellConstructor, CellHooks, CellRenderer, ClickCallback, DEFAULT_CELL_HEIGHT};
use super::format::apply_format;

const REUSE_ID: &str = "benefits";
const MAX_SUMMARY_ENTRIES: usize = 4;

/// Read-only composite row: aggregates the numeric entries under the `key`
/// subtree into a total plus a per-entry summary line.
pub struct BenefitsRenderer {
    config: RendererConfig,
    hooks: CellHooks,
}

impl BenefitsRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            hooks: CellHooks::default(),
        }
    }

    pub fn with_click(mut self, callback: ClickCallback) -> Self {
        self.hooks.set_click(callback);
        self
    }

    pub fn with_cell_constructor(mut self, constructor: CellConstructor) -> Self {
        self.hooks.set_constructor(constructor);
        self
    }

    fn entries<'a>(&self, row: &'a RowData) -> Vec<(&'a str, f64)> {
        let Some(Value::Object(map)) = row.get(&self.config.key) else {
            return Vec::new();
        };
        map.iter()
            .filter_map(|(name, value)| value.as_f64().map(|num| (name.as_str(), num)))
            .collect()
    }
}

impl CellRenderer for BenefitsRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Benefits
    }

    fn prepare_cell(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> DetailCell {
        let mut cell = self.hooks.make_cell(&self.config, REUSE_ID, ctx);
        cell.title = self.config.display_label();

        let entries = self.entries(row);
        if entries.is_empty() {
            cell.value = String::new();
            return cell;
        }

        let total: f64 = entries.iter().map(|(_, num)| num).sum();
        cell.value = match self.config.format_str.as_deref() {
            Some(template) => apply_format(template, &Value::from(total)),
            None => total.to_string(),
        };

        let mut parts: Vec<String> = entries
            .iter()
            .take(MAX_SUMMARY_ENTRIES)
            .map(|(name, num)| format!("{} {num}", name.replace('_', " ")))
            .collect();
        if entries.len() > MAX_SUMMARY_ENTRIES {
            parts.push(format!("… {} more", entries.len() - MAX_SUMMARY_ENTRIES));
        }
        cell.detail = parts.join(", ");
        cell
    }

    fn cell_height(&self) -> u16 {
        DEFAULT_CELL_HEIGHT + 1
    }

    fn handle_click(&mut self) {
        self.hooks.click();
    }
}
