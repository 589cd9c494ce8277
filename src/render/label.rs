use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::{RendererConfig, RendererKind};
use crate::presentation::{DetailCell, ViewContext};
use crate::row::RowData;

use super::base::{
    CellConstructor, CellHooks, CellRenderer, ClickCallback, DEFAULT_CELL_HEIGHT, EditCellRenderer,
};
use super::format::{display_value, value_to_string};

const REUSE_ID: &str = "label";
const EDIT_REUSE_ID: &str = "label-edit";

/// Read-only text row: the formatted primary value with an optional detail
/// line.
pub struct LabelRenderer {
    config: RendererConfig,
    hooks: CellHooks,
}

impl LabelRenderer {
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
}

impl CellRenderer for LabelRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Label
    }

    fn prepare_cell(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> DetailCell {
        let mut cell = self.hooks.make_cell(&self.config, REUSE_ID, ctx);
        cell.title = self.config.display_label();
        cell.value = display_value(&self.config, row.get(&self.config.key));
        cell.detail = self
            .config
            .detail_key
            .as_deref()
            .and_then(|key| row.get(key))
            .map(value_to_string)
            .unwrap_or_default();
        cell
    }

    fn cell_height(&self) -> u16 {
        if self.config.detail_key.is_some() {
            DEFAULT_CELL_HEIGHT + 1
        } else {
            DEFAULT_CELL_HEIGHT
        }
    }

    fn handle_click(&mut self) {
        self.hooks.click();
    }
}

/// Inline text edit row. The buffer is seeded from the bound row value until
/// the user types; afterwards `updated` is the transient source of truth.
pub struct LabelEditRenderer {
    config: RendererConfig,
    hooks: CellHooks,
    seeded: String,
    updated: Option<String>,
}

impl LabelEditRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            hooks: CellHooks::default(),
            seeded: String::new(),
            updated: None,
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

    fn buffer_mut(&mut self) -> &mut String {
        self.updated.get_or_insert_with(|| self.seeded.clone())
    }
}

impl CellRenderer for LabelEditRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Label
    }

    fn prepare_cell(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> DetailCell {
        self.seeded = row
            .get(&self.config.key)
            .map(value_to_string)
            .unwrap_or_default();
        let mut cell = self.hooks.make_cell(&self.config, EDIT_REUSE_ID, ctx);
        cell.title = self.config.display_label();
        cell.value = self.updated.clone().unwrap_or_else(|| self.seeded.clone());
        cell
    }

    fn handle_click(&mut self) {
        self.hooks.click();
    }
}

impl EditCellRenderer for LabelEditRenderer {
    fn capture_edit(&self, row: &RowData) -> RowData {
        match &self.updated {
            Some(text) => row.with_value(&self.config.key, Value::String(text.clone())),
            None => row.clone(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                if !self.config.keyboard.accepts(ch) {
                    return false;
                }
                self.buffer_mut().push(ch);
                true
            }
            KeyCode::Backspace => {
                self.buffer_mut().pop();
                true
            }
            KeyCode::Delete => {
                self.buffer_mut().clear();
                true
            }
            _ => false,
        }
    }
}
