//! Retained scene: shape model, mesh generation and the redraw pass.
//!
//! Responsibilities:
//! - describe placed shapes as a closed enum (`Shape`)
//! - expand shapes into drawable primitives (`expand`, `mesh`)
//! - keep placed shapes and the static illustration in draw order (`Scene`)
//! - replay the whole scene through a `Rasterizer` on every render

mod brush;
mod cmd;
mod list;
mod primitive;
mod shape;

pub mod illustration;
pub mod mesh;

pub use brush::BrushSettings;
pub use cmd::SceneCommand;
pub use illustration::{cat_face, TriangleRecord};
pub use list::{draw_primitive, RenderReport, Scene};
pub use primitive::Primitive;
pub use shape::{expand, Shape, ShapeKind, DEFAULT_HALF_EXTENT};
