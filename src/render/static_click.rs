use crate::domain::{RendererConfig, RendererKind};
use crate::presentation::{DetailCell, ViewContext};
use crate::row::RowData;

use super::base::{
    CellConstructor, CellHooks, CellRenderer, ClickCallback, EditCellRenderer, PickedValue,
};
use super::format::{display_value, value_to_string};

const REUSE_ID: &str = "click";

/// Row whose edit flow happens on another screen, e.g. a species picker.
///
/// A tap invokes the click callback; the external flow is expected to stage
/// its result through `set_picked` before the row is saved. The displayed
/// value always reflects the staged pick when one exists, falling back to
/// the row's current value.
pub struct StaticClickRenderer {
    config: RendererConfig,
    hooks: CellHooks,
    name: Option<String>,
    default_name: String,
    data: Option<PickedValue>,
}

impl StaticClickRenderer {
    pub fn new(config: RendererConfig) -> Self {
        let default_name = config.display_label();
        Self {
            config,
            hooks: CellHooks::default(),
            name: None,
            default_name,
            data: None,
        }
    }

    /// Shorthand for rows registered in code rather than a screen
    /// definition.
    pub fn with_key_and_click(key: impl Into<String>, callback: ClickCallback) -> Self {
        Self::new(RendererConfig::new(key).with_kind(RendererKind::StaticClick).editable(true))
            .with_click(callback)
    }

    pub fn with_click(mut self, callback: ClickCallback) -> Self {
        self.hooks.set_click(callback);
        self
    }

    pub fn with_cell_constructor(mut self, constructor: CellConstructor) -> Self {
        self.hooks.set_constructor(constructor);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    pub fn picked(&self) -> Option<&PickedValue> {
        self.data.as_ref()
    }
}

impl CellRenderer for StaticClickRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::StaticClick
    }

    fn prepare_cell(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> DetailCell {
        let mut cell = self.hooks.make_cell(&self.config, REUSE_ID, ctx);
        cell.title = self.name.clone().unwrap_or_else(|| self.default_name.clone());
        cell.value = match &self.data {
            Some(picked) => value_to_string(&picked.value),
            None => display_value(&self.config, row.get(&self.config.key)),
        };
        cell.accessory = true;
        cell
    }

    fn handle_click(&mut self) {
        self.hooks.click();
    }
}

impl EditCellRenderer for StaticClickRenderer {
    fn capture_edit(&self, row: &RowData) -> RowData {
        let Some(picked) = &self.data else {
            return row.clone();
        };
        let mut updated = row.with_value(&self.config.key, picked.value.clone());
        if let (Some(owner_key), Some(linked)) = (&self.config.owner_key, &picked.linked) {
            updated = updated.with_value(owner_key, linked.clone());
        }
        updated
    }

    fn set_picked(&mut self, picked: PickedValue) -> bool {
        self.data = Some(picked);
        true
    }
}
