//! Wireframe rendering onto a character-cell surface
//!
//! Models are transformed rotate → scale → translate and drawn as closed
//! outlines; bullets are single wrapped points.

pub mod canvas;
pub mod model;
pub mod scene;
pub mod surface;

pub use canvas::Canvas;
pub use model::{Models, WireModel, draw_model, transform};
pub use scene::{RenderOptions, render};
pub use surface::{Cell, Color, SOLID, Surface, Wrapped};
