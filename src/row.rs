use serde_json::{Map, Value};

/// Field values for one entity, addressed by dotted key paths.
///
/// Values live in a nested JSON object; `tree.dbh` addresses the `dbh` field
/// of the `tree` subtree. Edit capture never mutates a `RowData` in place:
/// [`RowData::with_value`] returns an updated copy so the pre-edit snapshot
/// stays intact for cancel/rollback.
#[derive(Debug, Clone, PartialEq)]
pub struct RowData {
    root: Value,
}

impl RowData {
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap a decoded document. Callers typically feed JSON straight from
    /// disk or network here.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Build row data from `(key path, value)` pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.set(key.as_ref(), value);
        }
        row
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Read the value at a dotted key path, if present.
    pub fn get(&self, key_path: &str) -> Option<&Value> {
        if key_path.is_empty() {
            return None;
        }
        let mut current = &self.root;
        for segment in key_path.split('.') {
            match current {
                Value::Object(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Write the value at a dotted key path, creating intermediate objects.
    pub fn set(&mut self, key_path: &str, value: Value) {
        if key_path.is_empty() {
            return;
        }
        let segments: Vec<&str> = key_path.split('.').collect();
        insert_path(&mut self.root, &segments, value);
    }

    /// Copy-on-write update: a new `RowData` equal to `self` except for
    /// `key_path`. An empty key path returns an unchanged copy.
    pub fn with_value(&self, key_path: &str, value: Value) -> Self {
        let mut updated = self.clone();
        updated.set(key_path, value);
        updated
    }
}

impl Default for RowData {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_path(root: &mut Value, path: &[&str], value: Value) {
    if path.is_empty() {
        *root = value;
        return;
    }

    if !root.is_object() {
        *root = Value::Object(Map::new());
    }

    if let Value::Object(map) = root {
        if path.len() == 1 {
            map.insert(path[0].to_string(), value);
            return;
        }

        let entry = map
            .entry(path[0].to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        insert_path(entry, &path[1..], value);
    }
}
