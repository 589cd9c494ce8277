mod base;
mod benefits;
mod dbh;
mod factory;
mod format;
mod label;
mod static_click;

pub use base::{
    AllowAll, CellConstructor, CellRenderer, ChangeCallback, ClickCallback, DEFAULT_CELL_HEIGHT,
    EditCellRenderer, PermissionContext, PickedValue,
};
pub use benefits::BenefitsRenderer;
pub use dbh::DbhEditRenderer;
pub use factory::{build_edit_renderer, build_renderer};
pub use label::{LabelEditRenderer, LabelRenderer};
pub use static_click::StaticClickRenderer;
