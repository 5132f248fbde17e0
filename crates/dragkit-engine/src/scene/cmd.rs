use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command.
///
/// New primitives get a payload module under `scene::shapes`, a variant here,
/// and a renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}
