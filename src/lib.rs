#![deny(rust_2018_idioms)]

mod domain;
mod presentation;
mod render;
mod row;
mod screen;

pub use domain::{KeyboardCategory, RendererConfig, RendererKind, parse_screen_definition};
pub use presentation::{CellPool, DetailCell, ViewContext, render_rows};
pub use render::{
    AllowAll, BenefitsRenderer, CellConstructor, CellRenderer, ChangeCallback, ClickCallback,
    DEFAULT_CELL_HEIGHT, DbhEditRenderer, EditCellRenderer, LabelEditRenderer, LabelRenderer,
    PermissionContext, PickedValue, StaticClickRenderer, build_edit_renderer, build_renderer,
};
pub use row::RowData;
pub use screen::{DetailRow, DetailScreen};

pub mod prelude {
    pub use super::{
        AllowAll, CellPool, CellRenderer, DetailCell, DetailScreen, EditCellRenderer,
        PermissionContext, PickedValue, RendererConfig, RendererKind, RowData, ViewContext,
        build_edit_renderer, build_renderer, parse_screen_definition,
    };
}
