//! Input module - keyboard mapping and held-key auto-repeat.

pub mod handler;
pub mod map;

pub use handler::{HorizontalDirection, InputHandler};
pub use map::{handle_key_event, should_quit};
