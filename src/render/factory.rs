use tracing::debug;

use crate::domain::{RendererConfig, RendererKind};

use super::base::{CellRenderer, EditCellRenderer, PermissionContext};
use super::benefits::BenefitsRenderer;
use super::dbh::DbhEditRenderer;
use super::label::{LabelEditRenderer, LabelRenderer};
use super::static_click::StaticClickRenderer;

/// Build the read renderer for one configuration. Always succeeds; every
/// kind has a read presentation, with `Label` as the default.
pub fn build_renderer(
    config: &RendererConfig,
    _user: &dyn PermissionContext,
) -> Box<dyn CellRenderer> {
    match config.kind {
        RendererKind::Benefits => Box::new(BenefitsRenderer::new(config.clone())),
        RendererKind::Label | RendererKind::Dbh | RendererKind::StaticClick => {
            Box::new(LabelRenderer::new(config.clone()))
        }
    }
}

/// Build the edit renderer for one configuration, or `None` when the row
/// stays read-only.
///
/// The field's own editable flag and the permission predicate are
/// independent necessary conditions; either one denying is not an error.
pub fn build_edit_renderer(
    config: &RendererConfig,
    user: &dyn PermissionContext,
) -> Option<Box<dyn EditCellRenderer>> {
    if !config.editable || !user.can_edit(config) {
        return None;
    }
    let renderer: Box<dyn EditCellRenderer> = match config.kind {
        RendererKind::Dbh => Box::new(DbhEditRenderer::new(config.clone())),
        RendererKind::StaticClick => Box::new(StaticClickRenderer::new(config.clone())),
        RendererKind::Benefits => return None,
        RendererKind::Label => Box::new(LabelEditRenderer::new(config.clone())),
    };
    debug!(key = %config.key, kind = %config.kind, "built edit renderer");
    Some(renderer)
}
