use crossterm::event::KeyEvent;

use crate::domain::RendererConfig;
use crate::presentation::{DetailCell, ViewContext};
use crate::render::{
    CellRenderer, EditCellRenderer, PermissionContext, PickedValue, build_edit_renderer,
    build_renderer,
};
use crate::row::RowData;

/// One configured row: the read renderer, plus the edit renderer when this
/// user may edit the field. The edit renderer's presence *is* the
/// editability decision; no separate flag is consulted afterwards.
pub struct DetailRow {
    pub config: RendererConfig,
    pub renderer: Box<dyn CellRenderer>,
    pub editor: Option<Box<dyn EditCellRenderer>>,
}

impl DetailRow {
    pub fn is_editable(&self) -> bool {
        self.editor.is_some()
    }
}

/// A whole detail screen built from a list of configurations.
///
/// Rebuilt whenever the screen is rebuilt; renderer instances and their
/// transient edit state live exactly as long as this value.
pub struct DetailScreen {
    rows: Vec<DetailRow>,
    editing: bool,
}

impl DetailScreen {
    pub fn build(configs: &[RendererConfig], user: &dyn PermissionContext) -> Self {
        let rows = configs
            .iter()
            .map(|config| DetailRow {
                renderer: build_renderer(config, user),
                editor: build_edit_renderer(config, user),
                config: config.clone(),
            })
            .collect();
        Self {
            rows,
            editing: false,
        }
    }

    pub fn rows(&self) -> &[DetailRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flip between read and edit presentation. Rows without an edit
    /// renderer keep their read presentation either way.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    pub fn is_editable(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(DetailRow::is_editable)
    }

    /// Bind one row of data to the indexed row's active renderer.
    pub fn prepare(
        &mut self,
        index: usize,
        row: &RowData,
        ctx: &mut dyn ViewContext,
    ) -> Option<DetailCell> {
        let slot = self.rows.get_mut(index)?;
        let cell = if self.editing && let Some(editor) = slot.editor.as_deref_mut() {
            editor.prepare_cell(row, ctx)
        } else {
            slot.renderer.prepare_cell(row, ctx)
        };
        Some(cell)
    }

    /// Bind every row in order, e.g. for a full-screen redraw.
    pub fn prepare_all(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> Vec<DetailCell> {
        (0..self.rows.len())
            .filter_map(|index| self.prepare(index, row, ctx))
            .collect()
    }

    pub fn cell_height(&self, index: usize) -> Option<u16> {
        let slot = self.rows.get(index)?;
        let height = if self.editing && let Some(editor) = slot.editor.as_deref() {
            editor.cell_height()
        } else {
            slot.renderer.cell_height()
        };
        Some(height)
    }

    pub fn handle_click(&mut self, index: usize) {
        let Some(slot) = self.rows.get_mut(index) else {
            return;
        };
        if self.editing && let Some(editor) = slot.editor.as_deref_mut() {
            editor.handle_click();
        } else {
            slot.renderer.handle_click();
        }
    }

    /// Route one key of inline input to the indexed row's edit renderer.
    pub fn handle_key(&mut self, index: usize, key: &KeyEvent) -> bool {
        if !self.editing {
            return false;
        }
        self.rows
            .get_mut(index)
            .and_then(|slot| slot.editor.as_deref_mut())
            .is_some_and(|editor| editor.handle_key(key))
    }

    /// Stage an externally picked value into the indexed row.
    pub fn set_picked(&mut self, index: usize, picked: PickedValue) -> bool {
        self.rows
            .get_mut(index)
            .and_then(|slot| slot.editor.as_deref_mut())
            .is_some_and(|editor| editor.set_picked(picked))
    }

    /// Fold every staged edit into a copy of `row`. The input snapshot is
    /// left untouched for cancel/rollback.
    pub fn save(&self, row: &RowData) -> RowData {
        self.rows
            .iter()
            .filter_map(|slot| slot.editor.as_deref())
            .fold(row.clone(), |merged, editor| editor.capture_edit(&merged))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::json;

    use crate::domain::{RendererKind, parse_screen_definition};
    use crate::presentation::CellPool;
    use crate::render::AllowAll;

    use super::*;

    struct FieldDeny(&'static str);

    impl PermissionContext for FieldDeny {
        fn can_edit(&self, config: &RendererConfig) -> bool {
            config.key != self.0
        }
    }

    fn tree_screen() -> Vec<RendererConfig> {
        let definition = json!([
            {"key": "id", "label": "Plot"},
            {"key": "tree.dbh", "label": "Diameter", "format_str": "{}\"", "type": "dbh", "editable": true},
            {"key": "tree.species_name", "label": "Species", "owner_key": "tree.species", "type": "click", "editable": true},
            {"key": "eco", "label": "Yearly eco benefits", "type": "benefits"}
        ]);
        parse_screen_definition(&definition).expect("definition parsed")
    }

    fn sample_row() -> RowData {
        RowData::from_value(json!({
            "id": 7,
            "tree": {"dbh": 12.5, "species_name": "Quercus", "species": 3},
            "eco": {"stormwater": 2.0}
        }))
    }

    #[test]
    fn build_pairs_each_config_with_optional_editor() {
        let screen = DetailScreen::build(&tree_screen(), &AllowAll);
        assert_eq!(screen.len(), 4);
        assert!(!screen.is_editable(0));
        assert!(screen.is_editable(1));
        assert!(screen.is_editable(2));
        assert!(!screen.is_editable(3));
    }

    #[test]
    fn permission_denial_leaves_rows_read_only() {
        let screen = DetailScreen::build(&tree_screen(), &FieldDeny("tree.dbh"));
        assert!(!screen.is_editable(1));
        assert!(screen.is_editable(2));
    }

    #[test]
    fn read_mode_prepares_formatted_read_cells() {
        let mut screen = DetailScreen::build(&tree_screen(), &AllowAll);
        let mut pool = CellPool::new();
        let cells = screen.prepare_all(&sample_row(), &mut pool);
        assert_eq!(cells[1].value, "12.5\"");
        assert_eq!(cells[2].value, "Quercus");
    }

    #[test]
    fn edit_mode_uses_edit_renderers_where_present() {
        let mut screen = DetailScreen::build(&tree_screen(), &AllowAll);
        screen.set_editing(true);
        let mut pool = CellPool::new();
        let cells = screen.prepare_all(&sample_row(), &mut pool);
        // raw value in the edit widget, formatted in the read-only rows
        assert_eq!(cells[1].value, "12.5");
        assert_eq!(cells[0].value, "7");
        assert_eq!(cells[3].title, "Yearly eco benefits");
    }

    #[test]
    fn keys_are_ignored_outside_edit_mode() {
        let mut screen = DetailScreen::build(&tree_screen(), &AllowAll);
        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert!(!screen.editing());
        assert!(!screen.handle_key(1, &key));
        screen.set_editing(true);
        assert!(screen.editing());
        assert!(screen.handle_key(1, &key));
    }

    #[test]
    fn heights_track_the_active_renderer() {
        let mut screen = DetailScreen::build(&tree_screen(), &AllowAll);
        // benefits rows reserve a summary line
        assert_eq!(screen.cell_height(3), Some(3));
        assert_eq!(screen.cell_height(0), Some(2));
        assert_eq!(screen.cell_height(9), None);
        screen.set_editing(true);
        assert_eq!(screen.cell_height(1), Some(2));
    }

    #[test]
    fn save_folds_every_staged_edit_into_one_copy() {
        let mut screen = DetailScreen::build(&tree_screen(), &AllowAll);
        screen.set_editing(true);
        let row = sample_row();
        let mut pool = CellPool::new();
        screen.prepare_all(&row, &mut pool);

        screen.handle_key(1, &KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
        for ch in ['1', '4'] {
            screen.handle_key(1, &KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        assert!(screen.set_picked(2, PickedValue::new(json!("Acer")).with_linked(json!(17))));

        let saved = screen.save(&row);
        assert_eq!(saved.get("tree.dbh"), Some(&json!(14.0)));
        assert_eq!(saved.get("tree.species_name"), Some(&json!("Acer")));
        assert_eq!(saved.get("tree.species"), Some(&json!(17)));
        // untouched fields and the input snapshot stay as they were
        assert_eq!(saved.get("id"), Some(&json!(7)));
        assert_eq!(row.get("tree.dbh"), Some(&json!(12.5)));
        assert_eq!(row.get("tree.species_name"), Some(&json!("Quercus")));
    }

    #[test]
    fn save_without_edits_is_identity() {
        let screen = DetailScreen::build(&tree_screen(), &AllowAll);
        let row = sample_row();
        assert_eq!(screen.save(&row), row);
    }

    #[test]
    fn picks_only_land_on_pick_capable_rows() {
        let mut screen = DetailScreen::build(&tree_screen(), &AllowAll);
        assert!(!screen.set_picked(1, PickedValue::new(json!("x"))));
        assert!(!screen.set_picked(0, PickedValue::new(json!("x"))));
    }

    #[test]
    fn variant_selection_is_stable_per_config() {
        let screen = DetailScreen::build(&tree_screen(), &AllowAll);
        assert_eq!(screen.rows()[3].renderer.kind(), RendererKind::Benefits);
        let again = DetailScreen::build(&tree_screen(), &AllowAll);
        assert_eq!(again.rows()[3].renderer.kind(), RendererKind::Benefits);
    }
}
