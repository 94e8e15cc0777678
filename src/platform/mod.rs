//! Platform abstraction layer
//!
//! The host engine owns the window (here: the terminal), polls input, keeps
//! time and calls back into the game once per frame:
//! - `on_init` once before the first frame
//! - `on_frame` with elapsed seconds, key state and a surface to draw on
//!
//! Returning `false` from either callback stops the host.

pub mod keys;
pub mod terminal;

pub use keys::{Key, KeyState};
pub use terminal::TerminalHost;

use crate::renderer::Surface;
use crate::sim::Playfield;

/// Per-frame callback driven by a host
pub trait FrameHandler {
    /// Called once with the fixed playfield size before the first frame
    fn on_init(&mut self, playfield: Playfield) -> bool;

    /// Update and render one frame
    fn on_frame(&mut self, dt: f32, keys: &KeyState, surface: &mut dyn Surface) -> bool;
}
