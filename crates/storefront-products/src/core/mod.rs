//! Pure formatting and rendering. No I/O happens here.

mod format;
mod render;

pub use format::display_field;
pub use render::{EMPTY_MESSAGE, render_products, summarize};
