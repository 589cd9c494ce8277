mod cell;
mod pool;
mod view;

pub use cell::DetailCell;
pub use pool::{CellPool, ViewContext};
pub use view::render_rows;
