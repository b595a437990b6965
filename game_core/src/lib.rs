pub mod components;
pub mod config;
pub mod error;
pub mod font;
pub mod game;
pub mod input;
pub mod params;
pub mod rect;
pub mod render;
pub mod resources;
pub mod systems;
pub mod vector;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use rect::*;
pub use render::{Color, Surface};
pub use resources::*;
pub use vector::*;
