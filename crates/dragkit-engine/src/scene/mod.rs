//! Scene (draw stream) types.
//!
//! The panel records solid rects here every frame; `RectRenderer` drains them
//! in paint order (z-index, then insertion order). Shape meshes do not go
//! through the draw list.

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
