use crossterm::event::KeyEvent;
use serde_json::Value;

use crate::domain::{RendererConfig, RendererKind};
use crate::presentation::{DetailCell, ViewContext};
use crate::row::RowData;

/// Default layout hint, in terminal lines (label + value).
pub const DEFAULT_CELL_HEIGHT: u16 = 2;

/// Invoked synchronously when a rendered cell reports a click.
pub type ClickCallback = Box<dyn FnMut()>;

/// Builds a custom view component for a row, replacing the pooled default.
pub type CellConstructor = Box<dyn Fn(&RendererConfig) -> DetailCell>;

/// Notified whenever an inline numeric widget changes its value.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// Yes/no edit decision for one field; the only thing this crate asks of the
/// permission layer.
pub trait PermissionContext {
    fn can_edit(&self, config: &RendererConfig) -> bool;
}

/// Blanket permission grant, useful for previews and single-user tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionContext for AllowAll {
    fn can_edit(&self, _config: &RendererConfig) -> bool {
        true
    }
}

/// Externally picked value staged into a click-to-edit row.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedValue {
    pub value: Value,
    /// Written at the config's `owner_key` for fields subordinate to another
    /// (a species-name pick also carries the species id).
    pub linked: Option<Value>,
}

impl PickedValue {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            linked: None,
        }
    }

    pub fn with_linked(mut self, linked: Value) -> Self {
        self.linked = Some(linked);
        self
    }
}

/// Read capability: bind a configuration plus one row of data to a
/// displayable cell.
pub trait CellRenderer {
    fn kind(&self) -> RendererKind;

    /// Bind `row` to a view component. Missing keys render as empty values.
    /// Safe to call repeatedly on one instance; only explicitly tracked
    /// transient edit state survives between calls.
    fn prepare_cell(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> DetailCell;

    /// Layout hint consumed by the list container.
    fn cell_height(&self) -> u16 {
        DEFAULT_CELL_HEIGHT
    }

    /// Invoke the click callback, if any. Fire-and-forget; any resulting
    /// navigation happens outside this crate.
    fn handle_click(&mut self) {}
}

/// Edit capability: additionally merge captured edits back into row data.
pub trait EditCellRenderer: CellRenderer {
    /// Merge the accumulated edit into a copy of `row`. Returns an equal
    /// copy when no edit occurred; never mutates the input.
    fn capture_edit(&self, row: &RowData) -> RowData;

    /// Feed one key of inline input. Returns true when the edit state
    /// changed.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let _ = key;
        false
    }

    /// Stage an externally picked value. Returns true when this variant
    /// accepts picks.
    fn set_picked(&mut self, picked: PickedValue) -> bool {
        let _ = picked;
        false
    }
}

/// Construction and click plumbing shared by every variant.
#[derive(Default)]
pub(super) struct CellHooks {
    click: Option<ClickCallback>,
    new_cell: Option<CellConstructor>,
}

impl CellHooks {
    pub(super) fn set_click(&mut self, callback: ClickCallback) {
        self.click = Some(callback);
    }

    pub(super) fn set_constructor(&mut self, constructor: CellConstructor) {
        self.new_cell = Some(constructor);
    }

    /// Build the cell for one bind: the custom constructor when installed,
    /// the pooled default otherwise.
    pub(super) fn make_cell(
        &self,
        config: &RendererConfig,
        reuse_id: &str,
        ctx: &mut dyn ViewContext,
    ) -> DetailCell {
        match &self.new_cell {
            Some(build) => build(config),
            None => ctx.dequeue(reuse_id),
        }
    }

    pub(super) fn click(&mut self) {
        if let Some(callback) = &mut self.click {
            callback();
        }
    }
}
