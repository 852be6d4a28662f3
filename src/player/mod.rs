//! Player module - paddle components and movement systems

mod components;
mod physics;

pub use components::*;
pub use physics::*;
