use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::{RendererConfig, RendererKind};
use crate::presentation::{DetailCell, ViewContext};
use crate::row::RowData;

use super::base::{
    CellConstructor, CellHooks, CellRenderer, ChangeCallback, ClickCallback, EditCellRenderer,
};
use super::format::value_to_string;

const REUSE_ID: &str = "dbh-edit";

/// Inline numeric edit row for diameter-style measurements.
///
/// The buffer only ever holds digits and at most one decimal point;
/// Left/Right step the value by one. A change callback fires on every
/// accepted edit.
pub struct DbhEditRenderer {
    config: RendererConfig,
    hooks: CellHooks,
    seeded: String,
    buffer: Option<String>,
    on_change: Option<ChangeCallback>,
}

impl DbhEditRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            hooks: CellHooks::default(),
            seeded: String::new(),
            buffer: None,
            on_change: None,
        }
    }

    pub fn with_click(mut self, callback: ClickCallback) -> Self {
        self.hooks.set_click(callback);
        self
    }

    pub fn with_change_callback(mut self, callback: ChangeCallback) -> Self {
        self.on_change = Some(callback);
        self
    }

    pub fn with_cell_constructor(mut self, constructor: CellConstructor) -> Self {
        self.hooks.set_constructor(constructor);
        self
    }

    fn current_text(&self) -> &str {
        self.buffer.as_deref().unwrap_or(&self.seeded)
    }

    fn buffer_mut(&mut self) -> &mut String {
        self.buffer.get_or_insert_with(|| self.seeded.clone())
    }

    fn step(&mut self, delta: f64) {
        let current = self.current_text().trim().parse::<f64>().unwrap_or(0.0);
        let next = (current + delta).max(0.0);
        *self.buffer_mut() = format_number(next);
    }

    fn notify(&mut self) {
        if let Some(callback) = &mut self.on_change {
            let text = self
                .buffer
                .clone()
                .unwrap_or_else(|| self.seeded.clone());
            callback(&text);
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl CellRenderer for DbhEditRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Dbh
    }

    fn prepare_cell(&mut self, row: &RowData, ctx: &mut dyn ViewContext) -> DetailCell {
        self.seeded = row
            .get(&self.config.key)
            .map(value_to_string)
            .unwrap_or_default();
        let mut cell = self.hooks.make_cell(&self.config, REUSE_ID, ctx);
        cell.title = self.config.display_label();
        cell.value = self.current_text().to_string();
        cell
    }

    fn handle_click(&mut self) {
        self.hooks.click();
    }
}

impl EditCellRenderer for DbhEditRenderer {
    fn capture_edit(&self, row: &RowData) -> RowData {
        let Some(buffer) = &self.buffer else {
            return row.clone();
        };
        match buffer.trim().parse::<f64>() {
            Ok(num) => row.with_value(&self.config.key, Value::from(num)),
            Err(_) => row.clone(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let changed = match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                let accepted =
                    ch.is_ascii_digit() || (ch == '.' && !self.current_text().contains('.'));
                if !accepted {
                    return false;
                }
                self.buffer_mut().push(ch);
                true
            }
            KeyCode::Left => {
                self.step(-1.0);
                true
            }
            KeyCode::Right => {
                self.step(1.0);
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
        };
        if changed {
            self.notify();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::presentation::CellPool;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn diameter_config() -> RendererConfig {
        RendererConfig::new("tree.dbh")
            .with_label("Diameter")
            .editable(true)
            .with_kind(RendererKind::Dbh)
    }

    #[test]
    fn rejects_non_numeric_input() {
        let mut renderer = DbhEditRenderer::new(diameter_config());
        assert!(!renderer.handle_key(&key(KeyCode::Char('x'))));
        assert!(renderer.handle_key(&key(KeyCode::Char('1'))));
        assert!(renderer.handle_key(&key(KeyCode::Char('.'))));
        assert!(!renderer.handle_key(&key(KeyCode::Char('.'))));
    }

    #[test]
    fn stepper_keys_adjust_the_seeded_value() {
        let mut renderer = DbhEditRenderer::new(diameter_config());
        let row = RowData::from_pairs([("tree.dbh", json!(12))]);
        let mut pool = CellPool::new();
        renderer.prepare_cell(&row, &mut pool);

        assert!(renderer.handle_key(&key(KeyCode::Right)));
        let captured = renderer.capture_edit(&row);
        assert_eq!(captured.get("tree.dbh"), Some(&json!(13.0)));
    }

    #[test]
    fn stepper_never_goes_negative() {
        let mut renderer = DbhEditRenderer::new(diameter_config());
        let row = RowData::from_pairs([("tree.dbh", json!(0))]);
        let mut pool = CellPool::new();
        renderer.prepare_cell(&row, &mut pool);
        renderer.handle_key(&key(KeyCode::Left));
        assert_eq!(renderer.capture_edit(&row).get("tree.dbh"), Some(&json!(0.0)));
    }

    #[test]
    fn untouched_edit_captures_identically() {
        let mut renderer = DbhEditRenderer::new(diameter_config());
        let row = RowData::from_pairs([("tree.dbh", json!(12.5))]);
        let mut pool = CellPool::new();
        renderer.prepare_cell(&row, &mut pool);
        assert_eq!(renderer.capture_edit(&row), row);
    }

    #[test]
    fn cleared_buffer_leaves_the_field_unchanged() {
        let mut renderer = DbhEditRenderer::new(diameter_config());
        let row = RowData::from_pairs([("tree.dbh", json!(12.5))]);
        let mut pool = CellPool::new();
        renderer.prepare_cell(&row, &mut pool);
        renderer.handle_key(&key(KeyCode::Delete));
        assert_eq!(renderer.capture_edit(&row).get("tree.dbh"), Some(&json!(12.5)));
    }

    #[test]
    fn typed_value_is_captured_as_a_number() {
        let mut renderer = DbhEditRenderer::new(diameter_config());
        let row = RowData::new();
        let mut pool = CellPool::new();
        renderer.prepare_cell(&row, &mut pool);
        for ch in ['1', '4', '.', '5'] {
            renderer.handle_key(&key(KeyCode::Char(ch)));
        }
        let captured = renderer.capture_edit(&row);
        assert_eq!(captured.get("tree.dbh"), Some(&json!(14.5)));
        assert_eq!(row.get("tree.dbh"), None);
    }

    #[test]
    fn change_callback_sees_every_accepted_edit() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut renderer = DbhEditRenderer::new(diameter_config())
            .with_change_callback(Box::new(move |text| sink.borrow_mut().push(text.to_string())));
        renderer.handle_key(&key(KeyCode::Char('7')));
        renderer.handle_key(&key(KeyCode::Char('x')));
        renderer.handle_key(&key(KeyCode::Char('2')));
        assert_eq!(*seen.borrow(), vec!["7".to_string(), "72".to_string()]);
    }
}
