use indexmap::IndexMap;

use super::cell::DetailCell;

/// Supplies reusable view components to renderers.
///
/// Implemented by the embedding list container; [`CellPool`] is the provided
/// default. `dequeue` must hand back a cell with cleared display state.
pub trait ViewContext {
    fn dequeue(&mut self, reuse_id: &str) -> DetailCell;
}

/// Default pooling collaborator: recycled cells are reused per id, fresh
/// cells are built on demand.
#[derive(Debug, Default)]
pub struct CellPool {
    idle: IndexMap<String, Vec<DetailCell>>,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a cell to the pool once its row scrolls out.
    pub fn recycle(&mut self, cell: DetailCell) {
        self.idle.entry(cell.reuse_id.clone()).or_default().push(cell);
    }

    pub fn idle_count(&self, reuse_id: &str) -> usize {
        self.idle.get(reuse_id).map(Vec::len).unwrap_or(0)
    }
}

impl ViewContext for CellPool {
    fn dequeue(&mut self, reuse_id: &str) -> DetailCell {
        let mut cell = self
            .idle
            .get_mut(reuse_id)
            .and_then(Vec::pop)
            .unwrap_or_else(|| DetailCell::with_reuse_id(reuse_id));
        cell.reset();
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_builds_fresh_cells_when_idle_is_empty() {
        let mut pool = CellPool::new();
        let cell = pool.dequeue("label");
        assert_eq!(cell.reuse_id, "label");
        assert_eq!(pool.idle_count("label"), 0);
    }

    #[test]
    fn recycled_cells_are_reused_with_cleared_state() {
        let mut pool = CellPool::new();
        let mut cell = pool.dequeue("label");
        cell.title = "Species".to_string();
        cell.value = "Quercus".to_string();
        pool.recycle(cell);
        assert_eq!(pool.idle_count("label"), 1);

        let reused = pool.dequeue("label");
        assert_eq!(reused.reuse_id, "label");
        assert!(reused.title.is_empty());
        assert!(reused.value.is_empty());
        assert_eq!(pool.idle_count("label"), 0);
    }

    #[test]
    fn pools_are_segregated_by_reuse_id() {
        let mut pool = CellPool::new();
        pool.recycle(DetailCell::with_reuse_id("label"));
        let cell = pool.dequeue("benefits");
        assert_eq!(cell.reuse_id, "benefits");
        assert_eq!(pool.idle_count("label"), 1);
    }
}
