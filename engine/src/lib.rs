//! The window and event-loop shell; nothing game-specific lives here.

pub use interface::game::{Color, Game, Graphics, Key, Shape, hex};

#[cfg(feature="speedy2d")]
mod speedy2d;
#[cfg(feature="speedy2d")]
pub use crate::speedy2d::start;
