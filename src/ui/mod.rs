//! UI module - score HUD and match-over banner

mod banner;
mod hud;

pub use banner::*;
pub use hud::*;
