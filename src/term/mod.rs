//! Terminal rendering: pure framebuffer view plus crossterm flushing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{kind_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
