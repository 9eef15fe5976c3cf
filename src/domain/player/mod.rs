// Player domain module
// Catalog reference entity and the closed position enum

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::Player;
pub use value_objects::Position;
